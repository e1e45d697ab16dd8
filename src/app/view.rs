// SPDX-License-Identifier: MPL-2.0
//! View rendering for the application.

use super::Message;
use crate::i18n::fluent::I18n;
use crate::ui::design_tokens::{spacing, typography};
use crate::ui::showcase;
use crate::ui::styles;
use iced::alignment::Vertical;
use iced::widget::{button, Column, Container, Row, Text};
use iced::{Element, Length};

/// Context required to render the application view.
pub struct ViewContext<'a> {
    pub i18n: &'a I18n,
    pub showcase: &'a showcase::State,
    pub wide_breakpoint: f32,
    /// i18n keys of the warning banner lines.
    pub warnings: &'a [String],
}

/// Renders the showcase, with the warning banner above it when present.
pub fn view(ctx: ViewContext<'_>) -> Element<'_, Message> {
    let body = showcase::view(
        ctx.showcase,
        showcase::ViewContext {
            i18n: ctx.i18n,
            wide_breakpoint: ctx.wide_breakpoint,
        },
    )
    .map(Message::Showcase);

    if ctx.warnings.is_empty() {
        return body;
    }

    let mut lines = Column::new().spacing(spacing::XXS).width(Length::Fill);
    for key in ctx.warnings {
        lines = lines.push(Text::new(ctx.i18n.tr(key)).size(typography::CAPTION));
    }

    let banner = Container::new(
        Row::new()
            .spacing(spacing::SM)
            .align_y(Vertical::Center)
            .push(lines)
            .push(
                button(Text::new("×").size(typography::BODY))
                    .padding([spacing::XXS, spacing::SM])
                    .style(styles::button::tab_header)
                    .on_press(Message::DismissWarning),
            ),
    )
    .width(Length::Fill)
    .padding([spacing::XS, spacing::MD])
    .style(styles::container::notice);

    Column::new()
        .width(Length::Fill)
        .height(Length::Fill)
        .push(Container::new(banner).padding(spacing::XS))
        .push(body)
        .into()
}
