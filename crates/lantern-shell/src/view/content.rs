//! Content pane.
//!
//! The chrome does not render web content itself; the content host draws
//! into this area. The pane shows the page's chrome-visible state: title,
//! URL and load progress.

use iced::widget::{column, container, progress_bar, text};
use iced::{Element, Length, Theme};

use crate::message::Message;
use crate::state::{AppState, LoadPhase};
use crate::theme;

/// Render the content area for the foreground tab.
pub fn view(state: &AppState) -> Element<'_, Message> {
    let Some(navigator) = state.active_navigator() else {
        return container(text("No open tabs"))
            .width(Length::Fill)
            .height(Length::Fill)
            .center_x(Length::Fill)
            .center_y(Length::Fill)
            .into();
    };

    let page = &navigator.page;
    let mut pane = column![text(page.display_title()).size(24)].spacing(theme::SPACING_MD);

    if !page.is_new_tab() {
        pane = pane.push(text(page.url.to_string()).size(13).style(|theme: &Theme| {
            text::Style {
                color: Some(theme::muted(theme)),
            }
        }));
    }

    pane = match page.phase {
        LoadPhase::Blank => pane.push(
            text("Search or enter an address to get going")
                .size(14)
                .style(|theme: &Theme| text::Style {
                    color: Some(theme::muted(theme)),
                }),
        ),
        LoadPhase::Loading => pane.push(progress_bar(0.0..=1.0, page.progress).girth(4.0)),
        LoadPhase::Ready => pane,
        LoadPhase::Failed => pane.push(
            text("This page could not be loaded")
                .size(14)
                .style(|theme: &Theme| text::Style {
                    color: Some(theme.extended_palette().danger.base.color),
                }),
        ),
    };

    container(pane)
        .width(Length::Fill)
        .height(Length::Fill)
        .center_x(Length::Fill)
        .center_y(Length::Fill)
        .into()
}
