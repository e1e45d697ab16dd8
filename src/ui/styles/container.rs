// SPDX-License-Identifier: MPL-2.0
//! Container styles.

use crate::ui::design_tokens::{opacity, palette, radius};
use iced::gradient::Linear;
use iced::widget::container;
use iced::{Background, Border, Color, Gradient, Radians, Theme};

/// Warm section backdrop behind the whole showcase.
pub fn section_backdrop(_theme: &Theme) -> container::Style {
    let gradient = Linear::new(Radians(3.24))
        .add_stop(0.0, palette::WHITE)
        .add_stop(0.17, palette::CREAM)
        .add_stop(0.42, palette::APRICOT)
        .add_stop(0.63, palette::PEACH)
        .add_stop(0.93, Color { a: 0.5, ..palette::BLUSH })
        .add_stop(1.0, Color { a: 0.0, ..palette::WHITE });

    container::Style {
        background: Some(Background::Gradient(Gradient::Linear(gradient))),
        ..Default::default()
    }
}

/// Dark scrim laid over the section gradient.
pub fn section_scrim(_theme: &Theme) -> container::Style {
    container::Style {
        background: Some(Background::Color(Color {
            a: opacity::SCRIM,
            ..palette::GRAY_900
        })),
        ..Default::default()
    }
}

/// Translucent backdrop around the tab column and side media.
pub fn tab_panel(_theme: &Theme) -> container::Style {
    container::Style {
        background: Some(Background::Color(Color {
            a: opacity::PANEL_SURFACE,
            ..palette::GRAY_400
        })),
        border: Border {
            radius: radius::LG.into(),
            ..Default::default()
        },
        ..Default::default()
    }
}

/// Row surface with the sampled background alpha.
pub fn tab_row(alpha: f32) -> impl Fn(&Theme) -> container::Style {
    move |_theme: &Theme| container::Style {
        background: Some(Background::Color(Color {
            a: alpha,
            ..palette::WHITE
        })),
        border: Border {
            radius: radius::LG.into(),
            ..Default::default()
        },
        ..Default::default()
    }
}

/// Fading veil left by a row while it folds shut.
pub fn folding_veil(alpha: f32) -> impl Fn(&Theme) -> container::Style {
    move |_theme: &Theme| container::Style {
        background: Some(Background::Color(Color {
            a: alpha * opacity::HOVER_WASH,
            ..palette::WHITE
        })),
        border: Border {
            radius: radius::MD.into(),
            ..Default::default()
        },
        ..Default::default()
    }
}

/// Dark frame the media sits in; visible before the poster arrives.
pub fn media_frame(corner: f32) -> impl Fn(&Theme) -> container::Style {
    move |_theme: &Theme| container::Style {
        background: Some(Background::Color(palette::MEDIA_BACKDROP)),
        border: Border {
            radius: corner.into(),
            ..Default::default()
        },
        ..Default::default()
    }
}

/// Pill badge above the headline.
pub fn badge(_theme: &Theme) -> container::Style {
    container::Style {
        background: Some(Background::Color(Color {
            a: opacity::BADGE_SURFACE,
            ..palette::NEUTRAL_100
        })),
        border: Border {
            color: palette::BADGE_BORDER,
            width: 1.0,
            radius: radius::FULL.into(),
        },
        text_color: Some(palette::WHITE),
        ..Default::default()
    }
}

/// Startup warning banner.
pub fn notice(_theme: &Theme) -> container::Style {
    container::Style {
        background: Some(Background::Color(palette::GRAY_900)),
        border: Border {
            color: palette::ACCENT_600,
            width: 1.0,
            radius: radius::MD.into(),
        },
        text_color: Some(palette::WHITE),
        ..Default::default()
    }
}
