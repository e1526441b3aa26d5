//! Tab-strip sidebar: one row per open tab, in deck order.

use iced::widget::{Space, button, column, container, row, text};
use iced::{Element, Length, Theme};

use crate::message::Message;
use crate::state::AppState;
use crate::theme;

/// Render the tab strip.
pub fn view(state: &AppState) -> Element<'_, Message> {
    let mut tabs = column![].spacing(theme::SPACING_XS);

    for (id, navigator) in state.navigators.iter() {
        let title = navigator.page.display_title();
        let is_active = navigator.is_active;
        let is_selected = navigator.is_selected;

        let activate = button(text(title).size(13))
            .on_press(Message::ActivateTab(id.clone()))
            .padding([6.0, 8.0])
            .width(Length::Fill)
            .style(move |theme: &Theme, status| {
                theme::tab_row(theme, status, is_active, is_selected)
            });

        let close = button(text("×").size(13))
            .on_press(Message::CloseTab(id.clone()))
            .padding([6.0, 8.0])
            .style(|theme: &Theme, status| theme::suggestion_row(theme, status, false));

        tabs = tabs.push(
            row![activate, close]
                .spacing(theme::SPACING_XS)
                .align_y(iced::Alignment::Center),
        );
    }

    let new_tab = button(text("+ New Tab").size(13))
        .on_press(Message::NewTab)
        .padding([6.0, 8.0])
        .width(Length::Fill)
        .style(|theme: &Theme, status| theme::suggestion_row(theme, status, false));

    let strip = column![tabs, Space::new().height(Length::Fill), new_tab]
        .spacing(theme::SPACING_SM)
        .height(Length::Fill);

    container(strip)
        .width(Length::Fixed(theme::SIDEBAR_WIDTH))
        .height(Length::Fill)
        .padding(theme::SPACING_SM)
        .style(theme::sidebar)
        .into()
}
