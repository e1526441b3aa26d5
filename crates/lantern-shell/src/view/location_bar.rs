//! Location bar: sidebar toggle, address input, inline completion hint.

use iced::widget::{button, row, text, text_input};
use iced::{Element, Length, Theme};

use crate::message::Message;
use crate::state::AppState;
use crate::theme;
use crate::url_util;

/// Render the location bar for the foreground tab.
pub fn view(state: &AppState) -> Element<'_, Message> {
    let navigator = state.active_navigator();

    // While editing the bar shows the typed text; otherwise the page URL.
    let value = match navigator {
        Some(navigator) if navigator.input.is_editing => navigator.input.value.clone(),
        Some(navigator) if !navigator.page.is_new_tab() => {
            url_util::prettify(&navigator.page.url)
        }
        _ => String::new(),
    };

    let input = text_input("Search or enter address", &value)
        .on_input(Message::LocationChanged)
        .on_submit(Message::LocationSubmitted)
        .padding([6.0, 10.0])
        .size(14)
        .width(Length::Fill);

    let toggle = button(text("☰").size(14))
        .on_press(Message::ToggleSidebar)
        .padding([6.0, 10.0])
        .style(|theme: &Theme, status| theme::suggestion_row(theme, status, false));

    let mut bar = row![toggle, input]
        .spacing(theme::SPACING_SM)
        .align_y(iced::Alignment::Center);

    // The assistant's current best completion, shown dimmed.
    if let Some(hint) = navigator.and_then(|navigator| navigator.input.hint.as_deref())
        && !hint.is_empty()
    {
        bar = bar.push(
            text(hint.to_owned())
                .size(13)
                .style(|theme: &Theme| text::Style {
                    color: Some(theme::muted(theme)),
                }),
        );
    }

    bar.into()
}
