// SPDX-License-Identifier: MPL-2.0
//! Centralized button styles.

use crate::ui::design_tokens::{opacity, palette, radius};
use iced::widget::button;
use iced::{Background, Border, Color, Shadow, Theme};

/// Tab header: transparent so the row surface shows through, with a faint
/// wash on hover.
pub fn tab_header(_theme: &Theme, status: button::Status) -> button::Style {
    let background = match status {
        button::Status::Hovered | button::Status::Pressed => Some(Background::Color(Color {
            a: opacity::HOVER_WASH,
            ..palette::WHITE
        })),
        _ => None,
    };

    button::Style {
        background,
        text_color: palette::WHITE,
        border: Border {
            radius: radius::LG.into(),
            ..Default::default()
        },
        shadow: Shadow::default(),
        snap: true,
    }
}

/// Full-width call-to-action.
pub fn call_to_action(_theme: &Theme, status: button::Status) -> button::Style {
    let fill = match status {
        button::Status::Hovered => palette::ACCENT_600,
        button::Status::Pressed => palette::PEACH,
        _ => palette::ACCENT_500,
    };

    button::Style {
        background: Some(Background::Color(fill)),
        text_color: palette::WHITE,
        border: Border {
            color: palette::ACCENT_600,
            width: 1.0,
            radius: radius::FULL.into(),
        },
        shadow: Shadow::default(),
        snap: true,
    }
}
