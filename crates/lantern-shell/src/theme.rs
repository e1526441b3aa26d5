//! Shared styling for the chrome widgets.

use iced::widget::{button, container};
use iced::{Background, Border, Color, Theme};

/// Extra-small spacing (tight rows).
pub const SPACING_XS: f32 = 4.0;
/// Small spacing (within a group).
pub const SPACING_SM: f32 = 8.0;
/// Medium spacing (between groups).
pub const SPACING_MD: f32 = 12.0;

/// Width of the tab-strip sidebar.
pub const SIDEBAR_WIDTH: f32 = 240.0;

/// Corner radius for rows and inputs.
pub const BORDER_RADIUS: f32 = 6.0;

/// Container style for the tab-strip sidebar.
pub fn sidebar(theme: &Theme) -> container::Style {
    let palette = theme.extended_palette();
    container::Style {
        background: Some(palette.background.weak.color.into()),
        ..Default::default()
    }
}

/// Container style for the assistant results panel.
pub fn assistant_panel(theme: &Theme) -> container::Style {
    let palette = theme.extended_palette();
    container::Style {
        background: Some(palette.background.base.color.into()),
        border: Border {
            color: palette.background.strong.color,
            width: 1.0,
            radius: BORDER_RADIUS.into(),
        },
        ..Default::default()
    }
}

/// Button style for one tab row in the strip.
pub fn tab_row(
    theme: &Theme,
    status: button::Status,
    is_active: bool,
    is_selected: bool,
) -> button::Style {
    let palette = theme.extended_palette();

    let background = if is_active {
        Some(Background::from(palette.primary.weak.color))
    } else if is_selected || status == button::Status::Hovered {
        Some(Background::from(palette.background.strong.color))
    } else {
        None
    };

    button::Style {
        background,
        text_color: if is_active {
            palette.primary.weak.text
        } else {
            palette.background.base.text
        },
        border: Border {
            radius: BORDER_RADIUS.into(),
            ..Border::default()
        },
        ..Default::default()
    }
}

/// Button style for one suggestion row in the assistant.
pub fn suggestion_row(theme: &Theme, status: button::Status, is_selected: bool) -> button::Style {
    let palette = theme.extended_palette();

    let background = if is_selected {
        Some(Background::from(palette.primary.weak.color))
    } else if status == button::Status::Hovered {
        Some(Background::from(palette.background.strong.color))
    } else {
        None
    };

    button::Style {
        background,
        text_color: palette.background.base.text,
        border: Border {
            radius: BORDER_RADIUS.into(),
            ..Border::default()
        },
        ..Default::default()
    }
}

/// Muted text color for hints and URLs.
pub fn muted(theme: &Theme) -> Color {
    theme.extended_palette().background.strong.text
}
