//! View layer: pure functions from state to widgets.

mod assistant;
mod content;
mod location_bar;
mod sidebar;

use iced::widget::{column, container, row};
use iced::{Element, Length};

use crate::message::Message;
use crate::state::AppState;
use crate::theme;

/// Render the whole chrome.
pub fn view(state: &AppState) -> Element<'_, Message> {
    // The assistant takes over the content area while it is open.
    let body: Element<'_, Message> = if state.assistant.is_open {
        assistant::view(&state.assistant)
    } else {
        content::view(state)
    };

    let main = column![location_bar::view(state), body]
        .spacing(theme::SPACING_SM)
        .width(Length::Fill)
        .height(Length::Fill);

    let chrome: Element<'_, Message> = if state.is_sidebar_open {
        row![sidebar::view(state), main]
            .spacing(theme::SPACING_SM)
            .into()
    } else {
        main.into()
    };

    container(chrome)
        .width(Length::Fill)
        .height(Length::Fill)
        .padding(theme::SPACING_SM)
        .into()
}
