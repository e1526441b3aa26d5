//! Assistant results panel: search completions above history matches.

use iced::widget::{button, column, container, row, text};
use iced::{Element, Length, Theme};

use crate::assist::{AssistAction, Assistant};
use crate::message::Message;
use crate::theme;

/// Render the merged suggestion list.
pub fn view(assistant: &Assistant) -> Element<'_, Message> {
    let mut results = column![].spacing(theme::SPACING_XS);

    for (_, entry) in assistant.search.iter() {
        results = results.push(suggestion_row(
            &entry.phrase,
            entry.url.as_str(),
            entry.is_selected,
            Message::Assistant(AssistAction::Load(entry.url.clone())),
        ));
    }

    for (_, entry) in assistant.history.iter() {
        results = results.push(suggestion_row(
            &entry.title,
            entry.url.as_str(),
            entry.is_selected,
            Message::Assistant(AssistAction::Load(entry.url.clone())),
        ));
    }

    if assistant.total() == 0 {
        results = results.push(
            text("No suggestions yet")
                .size(13)
                .style(|theme: &Theme| text::Style {
                    color: Some(theme::muted(theme)),
                }),
        );
    }

    container(results)
        .width(Length::Fill)
        .height(if assistant.is_expanded {
            Length::Fill
        } else {
            Length::Shrink
        })
        .padding(theme::SPACING_SM)
        .style(theme::assistant_panel)
        .into()
}

fn suggestion_row<'a>(
    title: &str,
    url: &str,
    is_selected: bool,
    on_press: Message,
) -> Element<'a, Message> {
    let label = row![
        text(title.to_owned()).size(14).width(Length::Fill),
        text(url.to_owned()).size(12).style(|theme: &Theme| {
            text::Style {
                color: Some(theme::muted(theme)),
            }
        }),
    ]
    .spacing(theme::SPACING_MD)
    .align_y(iced::Alignment::Center);

    button(label)
        .on_press(on_press)
        .padding([6.0, 10.0])
        .width(Length::Fill)
        .style(move |theme: &Theme, status| theme::suggestion_row(theme, status, is_selected))
        .into()
}
