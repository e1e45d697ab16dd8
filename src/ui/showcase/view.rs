// SPDX-License-Identifier: MPL-2.0
//! Renders a [`Frame`] with iced widgets.
//!
//! Every animated value is sampled from its [`Motion`](crate::ui::motion::Motion)
//! descriptor against the component clock. Nothing here decides which row
//! is open or which media plays; that all comes from the frame.

use super::frame::{
    Accordion, CallToAction, Emphasis, Fold, Frame, HeaderRow, MediaPlacement, MediaSlot,
    PanelBody, ViewportClass, CONTENT_OFFSET,
};
use super::{Message, Posters, State};
use crate::domain::showcase::{MediaRef, SectionCopy};
use crate::i18n::fluent::I18n;
use crate::ui::design_tokens::{breakpoint, opacity, palette, radius, sizing, spacing, typography};
use crate::ui::styles;
use iced::alignment::{Horizontal, Vertical};
use iced::font::Weight;
use iced::widget::{
    button, image, responsive, scrollable, svg, Column, Container, Row, Space, Stack, Text,
};
use iced::{Color, ContentFit, Element, Font, Length, Padding, Radians, Rotation, Size};
use std::time::Duration;

const BOLD: Font = Font {
    weight: Weight::Bold,
    ..Font::DEFAULT
};

/// Right-pointing chevron; rotated a quarter turn when the row is open.
const DISCLOSURE_ARROW_SVG: &str = r#"<svg xmlns="http://www.w3.org/2000/svg" viewBox="0 0 24 24"><path d="M9 5l7 7-7 7" fill="none" stroke="black" stroke-width="2.5" stroke-linecap="round" stroke-linejoin="round"/></svg>"#;

/// Horizontal padding of the page around the content column.
const PAGE_GUTTER: f32 = 2.0 * spacing::MD;
/// Horizontal padding of the tab panel around the wide row.
const PANEL_GUTTER: f32 = 2.0 * spacing::LG;

#[derive(Clone, Copy)]
pub struct ViewContext<'a> {
    pub i18n: &'a I18n,
    /// Width at and above which media moves to the side panel.
    pub wide_breakpoint: f32,
}

/// Render the showcase.
pub fn view<'a>(state: &'a State, ctx: ViewContext<'a>) -> Element<'a, Message> {
    responsive(move |available: Size| {
        let viewport = ViewportClass::classify(available.width, ctx.wide_breakpoint);
        render(state.frame(viewport), state.elapsed(), state.posters(), ctx, available)
    })
    .into()
}

/// Per-render sampling inputs shared by every builder.
#[derive(Clone, Copy)]
struct Sampling<'a> {
    ctx: ViewContext<'a>,
    posters: &'a Posters,
    elapsed: Option<Duration>,
    viewport: ViewportClass,
    inline_media_height: f32,
}

fn render<'a>(
    frame: Frame<'a>,
    elapsed: Option<Duration>,
    posters: &'a Posters,
    ctx: ViewContext<'a>,
    available: Size,
) -> Element<'a, Message> {
    let sampling = Sampling {
        ctx,
        posters,
        elapsed,
        viewport: frame.viewport,
        inline_media_height: if available.width >= breakpoint::MD {
            sizing::INLINE_MEDIA_HEIGHT_MD
        } else {
            sizing::INLINE_MEDIA_HEIGHT
        },
    };

    let mut tabs = Column::new().spacing(spacing::SM).width(Length::Fill);
    for row in frame.rows {
        tabs = tabs.push(tab_row(row, sampling));
    }

    let panel: Element<'a, Message> = match frame.viewport {
        ViewportClass::Wide => {
            let side: Element<'a, Message> = match frame.side_media {
                Some(slot) => media_view(slot, sampling),
                None => empty_media_frame(),
            };
            let (tab_width, side_width) = wide_columns(available.width);
            Row::new()
                .spacing(spacing::LG)
                .align_y(Vertical::Top)
                .push(Container::new(tabs).width(Length::Fixed(tab_width)))
                .push(Container::new(side).width(Length::Fixed(side_width)))
                .into()
        }
        ViewportClass::Narrow => tabs.into(),
    };

    let panel = Container::new(panel)
        .width(Length::Fill)
        .padding(spacing::LG)
        .style(styles::container::tab_panel);

    let mut content = Column::new()
        .spacing(spacing::XXL)
        .align_x(Horizontal::Center)
        .width(Length::Fill)
        .max_width(sizing::CONTENT_MAX_WIDTH);
    if let Some(header) = section_header(frame.section, frame.viewport) {
        content = content.push(header);
    }
    content = content.push(panel);

    let page = Container::new(content)
        .center_x(Length::Fill)
        .padding(Padding {
            top: spacing::XXXL,
            right: spacing::MD,
            bottom: spacing::XXXL,
            left: spacing::MD,
        })
        .style(styles::container::section_scrim);

    scrollable(Container::new(page).style(styles::container::section_backdrop)).into()
}

/// Widths of the tab column and the side media for a window `available_width`
/// wide. Both shrink in proportion so the row always fits inside the page
/// and panel padding.
fn wide_columns(available_width: f32) -> (f32, f32) {
    let content = (available_width - PAGE_GUTTER).min(sizing::CONTENT_MAX_WIDTH);
    let columns = (content - PANEL_GUTTER - spacing::LG).max(0.0);
    let natural = sizing::TAB_COLUMN_WIDTH + sizing::SIDE_MEDIA_WIDTH;
    let scale = (columns / natural).min(1.0);
    (
        sizing::TAB_COLUMN_WIDTH * scale,
        sizing::SIDE_MEDIA_WIDTH * scale,
    )
}

// ─────────────────────────────────────────────────────────────────────────────
// Section header
// ─────────────────────────────────────────────────────────────────────────────

fn section_header(section: &SectionCopy, viewport: ViewportClass) -> Option<Element<'_, Message>> {
    if section.is_empty() {
        return None;
    }

    let mut column = Column::new()
        .spacing(spacing::MD)
        .align_x(Horizontal::Center)
        .width(Length::Fill);

    if let Some(badge) = &section.badge {
        column = column.push(
            Container::new(Text::new(badge.as_str()).size(typography::CAPTION))
                .padding([spacing::XXS, spacing::MD])
                .style(styles::container::badge),
        );
    }

    if let Some(heading) = &section.heading {
        let size = match viewport {
            ViewportClass::Wide => typography::HEADLINE,
            ViewportClass::Narrow => typography::HEADLINE_SM,
        };
        column = column.push(
            Container::new(
                Text::new(heading.as_str())
                    .size(size)
                    .font(BOLD)
                    .color(palette::WHITE)
                    .width(Length::Fill)
                    .align_x(Horizontal::Center),
            )
            .max_width(sizing::HEADLINE_MAX_WIDTH),
        );
    }

    if let Some(blurb) = &section.blurb {
        column = column.push(
            Container::new(
                Text::new(blurb.as_str())
                    .size(typography::BODY)
                    .color(palette::LIST_TEXT)
                    .width(Length::Fill)
                    .align_x(Horizontal::Center),
            )
            .max_width(sizing::BLURB_MAX_WIDTH),
        );
    }

    Some(column.into())
}

// ─────────────────────────────────────────────────────────────────────────────
// Rows
// ─────────────────────────────────────────────────────────────────────────────

fn tab_row<'a>(row: HeaderRow<'a>, sampling: Sampling<'a>) -> Element<'a, Message> {
    let elapsed = sampling.elapsed;
    let label_alpha = row.label_opacity.sample(elapsed);
    let label_color = Color {
        a: label_alpha,
        ..palette::WHITE
    };
    let arrow = svg::Svg::new(svg::Handle::from_memory(DISCLOSURE_ARROW_SVG.as_bytes()))
        .width(Length::Fixed(sizing::ICON_MD))
        .height(Length::Fixed(sizing::ICON_MD))
        .rotation(disclosure_rotation(row.arrow_rotation.sample(elapsed)))
        .style(styles::svg::tinted(label_color));
    let font = match row.emphasis {
        Emphasis::Full => BOLD,
        Emphasis::Dimmed => Font::DEFAULT,
    };

    let header_content = Row::new()
        .spacing(spacing::SM)
        .align_y(Vertical::Center)
        .push(
            Text::new(row.label)
                .size(typography::TITLE)
                .font(font)
                .color(label_color)
                .width(Length::Fill),
        )
        .push(arrow);

    let header = button(header_content)
        .width(Length::Fill)
        .padding([spacing::MD, spacing::LG])
        .style(styles::button::tab_header)
        .on_press(Message::Select(row.id.clone()));

    let fold = row.accordion.fold_at(elapsed);
    let mut column = Column::new().push(header);
    match row.accordion {
        Accordion::Closed => {}
        Accordion::Open {
            height,
            opacity,
            body,
        } => {
            column = column.push(panel_body(
                *body,
                row.label,
                height.sample(elapsed),
                opacity.sample(elapsed),
                sampling,
            ));
        }
        Accordion::Collapsing { .. } => {
            if let Some(fold) = fold {
                column = column.push(folding_body(fold));
            }
        }
    }

    Container::new(column)
        .width(Length::Fill)
        .style(styles::container::tab_row(row.background_alpha.sample(elapsed)))
        .into()
}

/// Rotation of the disclosure arrow for a sampled angle in degrees.
fn disclosure_rotation(degrees: f32) -> Rotation {
    Rotation::Floating(Radians(degrees.to_radians()))
}

/// The body of the previously active row on its way out: a veil that
/// shrinks, fades and slides off in the exit direction.
fn folding_body<'a>(fold: Fold) -> Element<'a, Message> {
    let veil = Container::new(Space::new().width(Length::Fill).height(Length::Fill))
        .width(Length::Fill)
        .height(Length::Fill)
        .style(styles::container::folding_veil(fold.alpha));

    Container::new(veil)
        .width(Length::Fill)
        .height(Length::Fixed(sizing::BODY_MIN_HEIGHT * fold.height))
        .padding(Padding {
            top: fold.offset_y.max(0.0),
            right: spacing::LG,
            bottom: (-fold.offset_y).max(0.0),
            left: spacing::LG,
        })
        .clip(true)
        .into()
}

fn panel_body<'a>(
    body: PanelBody<'a>,
    label: &'a str,
    height: f32,
    fade: f32,
    sampling: Sampling<'a>,
) -> Element<'a, Message> {
    let elapsed = sampling.elapsed;
    let offset = body.content.offset_y.sample(elapsed);
    let alpha = (body.content.opacity.sample(elapsed) * fade).clamp(opacity::TRANSPARENT, opacity::OPAQUE);
    let i18n = sampling.ctx.i18n;

    let mut column = Column::new().spacing(spacing::LG).width(Length::Fill);

    if let Some(slot) = body.inline_media {
        column = column.push(media_view(slot, sampling));
    }

    // The header already shows the label; repeat the title only when it adds something.
    if body.title != label {
        column = column.push(
            Text::new(body.title)
                .size(typography::TITLE)
                .font(BOLD)
                .color(Color {
                    a: alpha,
                    ..palette::WHITE
                }),
        );
    }

    let what_we_fix = bullet_list(i18n.tr("showcase-what-we-fix"), body.what_we_fix, alpha);
    let how = bullet_list(i18n.tr("showcase-how"), body.how, alpha);
    let lists: Element<'a, Message> = match sampling.viewport {
        ViewportClass::Wide => Row::new()
            .spacing(spacing::LG)
            .push(what_we_fix)
            .push(how)
            .into(),
        ViewportClass::Narrow => Column::new()
            .spacing(spacing::LG)
            .push(what_we_fix)
            .push(how)
            .into(),
    };

    column = column.push(lists).push(call_to_action(body.cta));

    // Shift the content inside a fixed gutter so the slide never changes
    // the row height.
    let shifted = Container::new(column).padding(Padding {
        top: (CONTENT_OFFSET + offset).max(0.0),
        right: spacing::LG,
        bottom: (CONTENT_OFFSET - offset).max(0.0),
        left: spacing::LG,
    });

    let mut clipped = Container::new(shifted).width(Length::Fill).clip(true);
    if height < 1.0 {
        clipped = clipped.max_height(sizing::BODY_MAX_HEIGHT * height);
    }
    clipped.into()
}

fn bullet_list<'a>(heading: String, items: &'a [String], alpha: f32) -> Element<'a, Message> {
    let mut column = Column::new()
        .spacing(spacing::SM)
        .width(Length::FillPortion(1))
        .push(Text::new(heading).size(typography::TITLE).font(BOLD).color(Color {
            a: alpha,
            ..palette::WHITE
        }));

    for item in items {
        column = column.push(
            Row::new()
                .spacing(spacing::XS)
                .align_y(Vertical::Top)
                .push(
                    Container::new(Text::new("•").size(typography::TITLE).color(Color {
                        a: alpha,
                        ..palette::ACCENT_500
                    }))
                    .width(Length::Fixed(sizing::ICON_BULLET)),
                )
                .push(
                    Text::new(item.as_str())
                        .size(typography::BODY)
                        .color(Color {
                            a: alpha,
                            ..palette::LIST_TEXT
                        })
                        .width(Length::Fill),
                ),
        );
    }

    column.into()
}

fn call_to_action(cta: CallToAction<'_>) -> Element<'_, Message> {
    button(
        Container::new(Text::new(cta.label).size(typography::BODY).font(BOLD))
            .center_x(Length::Fill)
            .center_y(Length::Fill),
    )
    .width(Length::Fill)
    .height(Length::Fixed(sizing::CTA_HEIGHT))
    .padding([0.0, spacing::LG])
    .style(styles::button::call_to_action)
    .on_press(Message::CallToAction)
    .into()
}

// ─────────────────────────────────────────────────────────────────────────────
// Media
// ─────────────────────────────────────────────────────────────────────────────

/// Poster with a caption naming the stream. Until a remote poster has
/// downloaded, the dark frame shows through.
fn media_view<'a>(slot: MediaSlot<'a>, sampling: Sampling<'a>) -> Element<'a, Message> {
    let fade = slot.fade.sample(sampling.elapsed);
    let i18n = sampling.ctx.i18n;
    let (height, corner) = match slot.placement {
        MediaPlacement::Inline => (sampling.inline_media_height, radius::MD),
        MediaPlacement::Side => (sizing::SIDE_MEDIA_MIN_HEIGHT, radius::LG),
    };

    let handle = slot
        .poster
        .and_then(|poster| sampling.posters.handle(poster));
    let poster: Element<'a, Message> = match handle {
        Some(handle) => image::Image::new(handle)
            .content_fit(ContentFit::Cover)
            .opacity(fade)
            .width(Length::Fill)
            .height(Length::Fill)
            .into(),
        None => Space::new().width(Length::Fill).height(Length::Fill).into(),
    };

    let caption_text = match (slot.video, slot.poster) {
        (Some(video), _) => i18n.tr_with_args("media-streaming", &[("source", file_name(video))]),
        (None, Some(poster)) if poster.is_remote() => {
            i18n.tr_with_args("media-remote-poster", &[("source", file_name(poster))])
        }
        (None, _) => i18n.tr("media-poster-only"),
    };

    let caption = Container::new(
        Text::new(format!("▶ {caption_text}"))
            .size(typography::CAPTION)
            .color(Color {
                a: fade.max(opacity::DIMMED),
                ..palette::WHITE
            }),
    )
    .width(Length::Fill)
    .height(Length::Fill)
    .padding(spacing::MD)
    .align_y(Vertical::Bottom);

    Container::new(Stack::new().push(poster).push(caption))
        .width(Length::Fill)
        .height(Length::Fixed(height))
        .clip(true)
        .style(styles::container::media_frame(corner))
        .into()
}

fn empty_media_frame<'a>() -> Element<'a, Message> {
    Container::new(Space::new().width(Length::Fill).height(Length::Fill))
        .width(Length::Fill)
        .height(Length::Fixed(sizing::SIDE_MEDIA_MIN_HEIGHT))
        .style(styles::container::media_frame(radius::LG))
        .into()
}

fn file_name(media: &MediaRef) -> &str {
    let locator = media.as_str();
    locator.rsplit('/').next().unwrap_or(locator)
}
