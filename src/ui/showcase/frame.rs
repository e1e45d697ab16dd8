// SPDX-License-Identifier: MPL-2.0
//! Toolkit-independent render model.
//!
//! [`compose`] projects a [`Showcase`] into a [`Frame`]: one header row per
//! record, the active record's body, the media slots, and a [`Motion`]
//! descriptor for everything that animates. The frame is a pure function of
//! `(active, previous)` plus the viewport class, so the same input always
//! renders the same output and no animation state can drift from the
//! selection.

use crate::domain::showcase::{
    Direction, MediaRef, SectionCopy, Showcase, TabId, TabRecord,
};
use crate::ui::motion::{Easing, Motion};
use std::time::Duration;

// =============================================================================
// Visual constants
// =============================================================================

/// Row background alpha for the active row.
pub const ROW_ALPHA_ACTIVE: f32 = 0.24;
/// Row background alpha for every other row.
pub const ROW_ALPHA_IDLE: f32 = 0.10;
pub const LABEL_OPACITY_ACTIVE: f32 = 1.0;
pub const LABEL_OPACITY_DIMMED: f32 = 0.5;
/// Disclosure arrow rotation (degrees) when a row is open.
pub const ARROW_OPEN_DEGREES: f32 = 90.0;
/// Vertical distance (px) the body text travels on enter and exit.
pub const CONTENT_OFFSET: f32 = 20.0;

pub const ROW_BACKGROUND_DURATION: Duration = Duration::from_millis(800);
pub const HEADER_DURATION: Duration = Duration::from_millis(300);
pub const ACCORDION_DURATION: Duration = Duration::from_millis(600);
pub const CONTENT_DURATION: Duration = Duration::from_millis(300);
pub const CONTENT_DELAY: Duration = Duration::from_millis(100);
pub const INLINE_MEDIA_FADE: Duration = Duration::from_millis(800);
pub const SIDE_MEDIA_FADE: Duration = Duration::from_millis(1200);

/// Longest descriptor [`compose`] can emit. Once this much time has passed
/// every motion is at rest.
pub const SETTLE_AFTER: Duration = SIDE_MEDIA_FADE;

// =============================================================================
// Viewport
// =============================================================================

/// Layout capability supplied by the host.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ViewportClass {
    /// Media renders inline, above the body of the expanded row.
    Narrow,
    /// Media renders once, in a shared side panel.
    Wide,
}

impl ViewportClass {
    #[must_use]
    pub fn classify(width: f32, wide_breakpoint: f32) -> Self {
        if width >= wide_breakpoint {
            ViewportClass::Wide
        } else {
            ViewportClass::Narrow
        }
    }
}

// =============================================================================
// Frame model
// =============================================================================

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Emphasis {
    Full,
    Dimmed,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MediaPlacement {
    Inline,
    Side,
}

/// The single live media element, bound to the active record.
#[derive(Debug, Clone, PartialEq)]
pub struct MediaSlot<'a> {
    /// Record whose media this slot shows. Always the active one.
    pub tab: &'a TabId,
    pub placement: MediaPlacement,
    pub video: Option<&'a MediaRef>,
    /// Shown immediately while the video streams in.
    pub poster: Option<&'a MediaRef>,
    pub fade: Motion,
}

/// Vertical slide and fade applied to body text.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ContentMotion {
    pub offset_y: Motion,
    pub opacity: Motion,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CallToAction<'a> {
    pub label: &'a str,
    pub target: &'a str,
}

/// Body of the expanded row.
#[derive(Debug, Clone, PartialEq)]
pub struct PanelBody<'a> {
    pub title: &'a str,
    pub what_we_fix: &'a [String],
    pub how: &'a [String],
    /// Present on narrow viewports only.
    pub inline_media: Option<MediaSlot<'a>>,
    pub content: ContentMotion,
    pub cta: CallToAction<'a>,
}

/// Accordion phase of one row.
#[derive(Debug, Clone, PartialEq)]
pub enum Accordion<'a> {
    /// Only the header renders.
    Closed,
    /// The active row. `height` and `opacity` run from 0 to 1.
    Open {
        height: Motion,
        opacity: Motion,
        body: Box<PanelBody<'a>>,
    },
    /// The previously active row folding away. Carries descriptors only,
    /// never a body.
    Collapsing {
        height: Motion,
        opacity: Motion,
        exit: ContentMotion,
    },
}

impl Accordion<'_> {
    #[must_use]
    pub fn is_expanded(&self) -> bool {
        matches!(self, Accordion::Open { .. })
    }

    /// Where a collapsing row stands at `elapsed`. `None` for any other
    /// phase, or once the row has folded shut.
    #[must_use]
    pub fn fold_at(&self, elapsed: Option<Duration>) -> Option<Fold> {
        let Accordion::Collapsing {
            height,
            opacity,
            exit,
        } = self
        else {
            return None;
        };
        let height = height.sample(elapsed);
        if height <= 0.0 {
            return None;
        }
        Some(Fold {
            height,
            alpha: opacity.sample(elapsed) * exit.opacity.sample(elapsed),
            offset_y: exit.offset_y.sample(elapsed),
        })
    }
}

/// Sampled values of a collapsing row.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Fold {
    /// Remaining share of the body height, in `(0, 1]`.
    pub height: f32,
    pub alpha: f32,
    /// Exit slide, mirrored from the entry direction.
    pub offset_y: f32,
}

#[derive(Debug, Clone, PartialEq)]
pub struct HeaderRow<'a> {
    pub id: &'a TabId,
    pub label: &'a str,
    pub emphasis: Emphasis,
    pub background_alpha: Motion,
    pub label_opacity: Motion,
    pub arrow_rotation: Motion,
    pub accordion: Accordion<'a>,
}

/// Everything the presentation layer needs for one render.
#[derive(Debug, Clone, PartialEq)]
pub struct Frame<'a> {
    pub section: &'a SectionCopy,
    pub rows: Vec<HeaderRow<'a>>,
    /// Present on wide viewports only.
    pub side_media: Option<MediaSlot<'a>>,
    pub direction: Direction,
    pub viewport: ViewportClass,
}

impl<'a> Frame<'a> {
    /// Rows whose body is rendered. Always exactly one.
    pub fn expanded_rows(&self) -> impl Iterator<Item = &HeaderRow<'a>> {
        self.rows.iter().filter(|row| row.accordion.is_expanded())
    }

    /// The live media slot for this viewport class, if the active record
    /// has any media at all.
    #[must_use]
    pub fn live_media(&self) -> Option<&MediaSlot<'a>> {
        match self.viewport {
            ViewportClass::Wide => self.side_media.as_ref(),
            ViewportClass::Narrow => self.expanded_rows().find_map(|row| match &row.accordion {
                Accordion::Open { body, .. } => body.inline_media.as_ref(),
                _ => None,
            }),
        }
    }
}

// =============================================================================
// Composition
// =============================================================================

/// Projects the showcase into a frame for the given viewport class.
#[must_use]
pub fn compose(showcase: &Showcase, viewport: ViewportClass) -> Frame<'_> {
    let active = showcase.active();
    let previous = showcase.previous();
    let direction = showcase.direction();
    let changed = active != previous;

    let rows = showcase
        .catalog()
        .records()
        .iter()
        .map(|record| {
            let role = if &record.id == active {
                RowRole::Entering { changed }
            } else if changed && &record.id == previous {
                RowRole::Leaving
            } else {
                RowRole::Idle
            };
            header_row(showcase, record, role, direction, viewport)
        })
        .collect();

    let side_media = match viewport {
        ViewportClass::Wide => media_slot(
            showcase.active_record(),
            MediaPlacement::Side,
            fade_in(changed, SIDE_MEDIA_FADE),
        ),
        ViewportClass::Narrow => None,
    };

    Frame {
        section: showcase.section(),
        rows,
        side_media,
        direction,
        viewport,
    }
}

#[derive(Debug, Clone, Copy)]
enum RowRole {
    /// The active row; `changed` is false for the initial mount and for
    /// re-selection of the same tab.
    Entering { changed: bool },
    Leaving,
    Idle,
}

fn header_row<'a>(
    showcase: &'a Showcase,
    record: &'a TabRecord,
    role: RowRole,
    direction: Direction,
    viewport: ViewportClass,
) -> HeaderRow<'a> {
    let (emphasis, background_alpha, label_opacity, arrow_rotation, accordion) = match role {
        RowRole::Entering { changed } => (
            Emphasis::Full,
            toward(changed, ROW_ALPHA_IDLE, ROW_ALPHA_ACTIVE, ROW_BACKGROUND_DURATION),
            toward(changed, LABEL_OPACITY_DIMMED, LABEL_OPACITY_ACTIVE, HEADER_DURATION),
            toward(changed, 0.0, ARROW_OPEN_DEGREES, HEADER_DURATION),
            Accordion::Open {
                height: accordion_motion(changed, 0.0, 1.0),
                opacity: accordion_motion(changed, 0.0, 1.0),
                body: Box::new(panel_body(showcase, record, changed, direction, viewport)),
            },
        ),
        RowRole::Leaving => (
            Emphasis::Dimmed,
            toward(true, ROW_ALPHA_ACTIVE, ROW_ALPHA_IDLE, ROW_BACKGROUND_DURATION),
            toward(true, LABEL_OPACITY_ACTIVE, LABEL_OPACITY_DIMMED, HEADER_DURATION),
            toward(true, ARROW_OPEN_DEGREES, 0.0, HEADER_DURATION),
            Accordion::Collapsing {
                height: accordion_motion(true, 1.0, 0.0),
                opacity: accordion_motion(true, 1.0, 0.0),
                exit: exit_motion(direction),
            },
        ),
        RowRole::Idle => (
            Emphasis::Dimmed,
            Motion::settled(ROW_ALPHA_IDLE),
            Motion::settled(LABEL_OPACITY_DIMMED),
            Motion::settled(0.0),
            Accordion::Closed,
        ),
    };

    HeaderRow {
        id: &record.id,
        label: &record.label,
        emphasis,
        background_alpha,
        label_opacity,
        arrow_rotation,
        accordion,
    }
}

fn panel_body<'a>(
    showcase: &'a Showcase,
    record: &'a TabRecord,
    changed: bool,
    direction: Direction,
    viewport: ViewportClass,
) -> PanelBody<'a> {
    let inline_media = match viewport {
        ViewportClass::Narrow => media_slot(
            record,
            MediaPlacement::Inline,
            fade_in(changed, INLINE_MEDIA_FADE),
        ),
        ViewportClass::Wide => None,
    };

    PanelBody {
        title: &record.title,
        what_we_fix: &record.what_we_fix,
        how: &record.how,
        inline_media,
        content: enter_motion(changed, direction),
        cta: CallToAction {
            label: &record.cta_label,
            target: showcase.cta_target(),
        },
    }
}

/// Omits the slot entirely when the record has neither video nor poster.
fn media_slot(record: &TabRecord, placement: MediaPlacement, fade: Motion) -> Option<MediaSlot<'_>> {
    if record.video_source.is_none() && record.poster_image.is_none() {
        return None;
    }
    Some(MediaSlot {
        tab: &record.id,
        placement,
        video: record.video_source.as_ref(),
        poster: record.poster_image.as_ref(),
        fade,
    })
}

fn toward(animate: bool, from: f32, to: f32, duration: Duration) -> Motion {
    if animate {
        Motion::tween(from, to, duration)
    } else {
        Motion::settled(to)
    }
}

fn accordion_motion(animate: bool, from: f32, to: f32) -> Motion {
    toward(animate, from, to, ACCORDION_DURATION).eased(Easing::EaseInOut)
}

fn fade_in(animate: bool, duration: Duration) -> Motion {
    toward(animate, 0.0, 1.0, duration).eased(Easing::EaseInOut)
}

/// Forward travel enters from above (negative offset), backward from below.
fn enter_motion(animate: bool, direction: Direction) -> ContentMotion {
    if !animate {
        return ContentMotion {
            offset_y: Motion::settled(0.0),
            opacity: Motion::settled(1.0),
        };
    }
    let start = -direction.signum() * CONTENT_OFFSET;
    ContentMotion {
        offset_y: Motion::tween(start, 0.0, CONTENT_DURATION)
            .eased(Easing::EaseInOut)
            .delayed(CONTENT_DELAY),
        opacity: Motion::tween(0.0, 1.0, CONTENT_DURATION)
            .eased(Easing::EaseInOut)
            .delayed(CONTENT_DELAY),
    }
}

/// Mirror of [`enter_motion`]: outgoing text leaves on the opposite side.
fn exit_motion(direction: Direction) -> ContentMotion {
    let end = direction.signum() * CONTENT_OFFSET;
    ContentMotion {
        offset_y: Motion::tween(0.0, end, CONTENT_DURATION).eased(Easing::EaseInOut),
        opacity: Motion::tween(1.0, 0.0, CONTENT_DURATION).eased(Easing::EaseInOut),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn showcase() -> Showcase {
        let records = ["a", "b", "c", "d"]
            .into_iter()
            .map(|id| {
                TabRecord::new(id, id.to_uppercase())
                    .with_cta_label(format!("Go {id}"))
                    .with_poster(&format!("{id}.webp"))
                    .with_video(&format!("{id}.mp4"))
            })
            .collect();
        Showcase::from_records(records, "/schedule-a-demo").expect("showcase")
    }

    fn open_body<'a>(frame: &'a Frame<'a>) -> &'a PanelBody<'a> {
        match &frame
            .expanded_rows()
            .next()
            .expect("one expanded row")
            .accordion
        {
            Accordion::Open { body, .. } => body.as_ref(),
            _ => unreachable!(),
        }
    }

    #[test]
    fn initial_frame_is_settled() {
        let showcase = showcase();
        let frame = compose(&showcase, ViewportClass::Wide);

        assert_eq!(frame.rows.len(), 4);
        assert_eq!(frame.expanded_rows().count(), 1);
        for row in &frame.rows {
            assert!(row.background_alpha.is_static());
            assert!(row.label_opacity.is_static());
            assert!(!matches!(row.accordion, Accordion::Collapsing { .. }));
        }
        let body = open_body(&frame);
        assert!(body.content.offset_y.is_static());
        assert_eq!(body.content.offset_y.target, 0.0);
    }

    #[test]
    fn only_active_row_has_full_emphasis() {
        let mut showcase = showcase();
        showcase.select(&TabId::new("b")).expect("select");
        let frame = compose(&showcase, ViewportClass::Narrow);

        let emphasised: Vec<&str> = frame
            .rows
            .iter()
            .filter(|row| row.emphasis == Emphasis::Full)
            .map(|row| row.id.as_str())
            .collect();
        assert_eq!(emphasised, vec!["b"]);
        assert_eq!(frame.rows[1].label_opacity.target, LABEL_OPACITY_ACTIVE);
        assert_eq!(frame.rows[2].label_opacity.target, LABEL_OPACITY_DIMMED);
    }

    #[test]
    fn previous_row_collapses_without_body() {
        let mut showcase = showcase();
        showcase.select(&TabId::new("c")).expect("select");
        let frame = compose(&showcase, ViewportClass::Wide);

        match &frame.rows[0].accordion {
            Accordion::Collapsing { height, opacity, .. } => {
                assert_eq!((height.initial, height.target), (1.0, 0.0));
                assert_eq!((opacity.initial, opacity.target), (1.0, 0.0));
                assert_eq!(height.duration, ACCORDION_DURATION);
            }
            other => panic!("expected collapsing row, got {other:?}"),
        }
        assert_eq!(frame.rows[1].accordion, Accordion::Closed);
        assert!(frame.rows[2].accordion.is_expanded());
    }

    #[test]
    fn forward_move_enters_from_above() {
        let mut showcase = showcase();
        showcase.select(&TabId::new("c")).expect("select");
        let frame = compose(&showcase, ViewportClass::Wide);

        let body = open_body(&frame);
        assert_eq!(body.content.offset_y.initial, -CONTENT_OFFSET);
        assert_eq!(body.content.offset_y.target, 0.0);
        assert_eq!(body.content.offset_y.delay, CONTENT_DELAY);

        match &frame.rows[0].accordion {
            Accordion::Collapsing { exit, .. } => assert_eq!(exit.offset_y.target, CONTENT_OFFSET),
            other => panic!("expected collapsing row, got {other:?}"),
        }
    }

    #[test]
    fn backward_move_enters_from_below() {
        let mut showcase = showcase();
        showcase.select(&TabId::new("c")).expect("select");
        showcase.select(&TabId::new("b")).expect("select");
        let frame = compose(&showcase, ViewportClass::Wide);

        assert_eq!(frame.direction, Direction::Backward);
        assert_eq!(open_body(&frame).content.offset_y.initial, CONTENT_OFFSET);
        match &frame.rows[2].accordion {
            Accordion::Collapsing { exit, .. } => {
                assert_eq!(exit.offset_y.target, -CONTENT_OFFSET);
            }
            other => panic!("expected collapsing row, got {other:?}"),
        }
    }

    #[test]
    fn reselection_is_neutral_and_still() {
        let mut showcase = showcase();
        showcase.select(&TabId::new("c")).expect("select");
        showcase.select(&TabId::new("c")).expect("reselect");
        let frame = compose(&showcase, ViewportClass::Wide);

        assert_eq!(frame.direction, Direction::Still);
        let body = open_body(&frame);
        assert!(body.content.offset_y.is_static());
        assert_eq!(body.content.offset_y.target, 0.0);
        assert!(frame
            .rows
            .iter()
            .all(|row| !matches!(row.accordion, Accordion::Collapsing { .. })));
        assert!(frame.side_media.as_ref().expect("side media").fade.is_static());
    }

    #[test]
    fn wide_viewport_uses_side_slot_only() {
        let mut showcase = showcase();
        showcase.select(&TabId::new("d")).expect("select");
        let frame = compose(&showcase, ViewportClass::Wide);

        let side = frame.side_media.as_ref().expect("side media");
        assert_eq!(side.placement, MediaPlacement::Side);
        assert_eq!(side.video.map(MediaRef::as_str), Some("d.mp4"));
        assert_eq!(side.fade.duration, SIDE_MEDIA_FADE);
        assert!(open_body(&frame).inline_media.is_none());
    }

    #[test]
    fn narrow_viewport_uses_inline_slot_only() {
        let mut showcase = showcase();
        showcase.select(&TabId::new("b")).expect("select");
        let frame = compose(&showcase, ViewportClass::Narrow);

        assert!(frame.side_media.is_none());
        let inline = frame.live_media().expect("inline media");
        assert_eq!(inline.placement, MediaPlacement::Inline);
        assert_eq!(inline.tab, &TabId::new("b"));
        assert_eq!(inline.poster.map(MediaRef::as_str), Some("b.webp"));
        assert_eq!(inline.fade.duration, INLINE_MEDIA_FADE);
    }

    #[test]
    fn cta_target_is_shared_across_records() {
        let mut showcase = showcase();
        let mut targets = Vec::new();
        for id in ["a", "b", "c", "d"] {
            showcase.select(&TabId::new(id)).expect("select");
            let frame = compose(&showcase, ViewportClass::Wide);
            let body = open_body(&frame);
            assert_eq!(body.cta.label, format!("Go {id}"));
            targets.push(body.cta.target.to_string());
        }
        assert!(targets.iter().all(|t| t == "/schedule-a-demo"));
    }

    #[test]
    fn missing_media_degrades_slot() {
        let records = vec![
            TabRecord::new("bare", "Bare"),
            TabRecord::new("poster", "Poster").with_poster("p.webp"),
        ];
        let mut showcase = Showcase::from_records(records, "/x").expect("showcase");

        let frame = compose(&showcase, ViewportClass::Wide);
        assert!(frame.side_media.is_none());
        assert_eq!(frame.expanded_rows().count(), 1);

        showcase.select(&TabId::new("poster")).expect("select");
        let frame = compose(&showcase, ViewportClass::Wide);
        let side = frame.side_media.as_ref().expect("poster-only slot");
        assert!(side.video.is_none());
        assert_eq!(side.poster.map(MediaRef::as_str), Some("p.webp"));
    }

    #[test]
    fn settle_window_covers_every_descriptor() {
        let mut showcase = showcase();
        showcase.select(&TabId::new("d")).expect("select");
        for viewport in [ViewportClass::Wide, ViewportClass::Narrow] {
            let frame = compose(&showcase, viewport);
            for row in &frame.rows {
                assert!(row.background_alpha.end() <= SETTLE_AFTER);
                if let Accordion::Open { height, body, .. } = &row.accordion {
                    assert!(height.end() <= SETTLE_AFTER);
                    assert!(body.content.offset_y.end() <= SETTLE_AFTER);
                }
            }
        }
    }

    #[test]
    fn folding_row_slides_out_opposite_to_entry() {
        let mut showcase = showcase();
        showcase.select(&TabId::new("c")).expect("select");
        let forward = compose(&showcase, ViewportClass::Wide);
        let leaving = &forward.rows[0].accordion;

        let start = leaving.fold_at(Some(Duration::ZERO)).expect("folding");
        assert_eq!(start.height, 1.0);
        assert_eq!(start.alpha, 1.0);
        assert_eq!(start.offset_y, 0.0);

        let exited = leaving.fold_at(Some(CONTENT_DURATION)).expect("still folding");
        assert_eq!(exited.offset_y, CONTENT_OFFSET);
        assert_eq!(exited.alpha, 0.0);
        assert!(exited.height > 0.0 && exited.height < 1.0);

        assert_eq!(leaving.fold_at(Some(ACCORDION_DURATION)), None);
        assert_eq!(leaving.fold_at(None), None);

        showcase.select(&TabId::new("b")).expect("select");
        let backward = compose(&showcase, ViewportClass::Wide);
        let exited = backward.rows[2]
            .accordion
            .fold_at(Some(CONTENT_DURATION))
            .expect("folding");
        assert_eq!(exited.offset_y, -CONTENT_OFFSET);
    }

    #[test]
    fn only_collapsing_rows_fold() {
        let mut showcase = showcase();
        showcase.select(&TabId::new("b")).expect("select");
        let frame = compose(&showcase, ViewportClass::Narrow);
        assert!(frame.rows[1].accordion.fold_at(Some(Duration::ZERO)).is_none());
        assert!(frame.rows[3].accordion.fold_at(Some(Duration::ZERO)).is_none());
    }

    #[test]
    fn viewport_classification_uses_breakpoint() {
        assert_eq!(ViewportClass::classify(1280.0, 1280.0), ViewportClass::Wide);
        assert_eq!(ViewportClass::classify(1279.0, 1280.0), ViewportClass::Narrow);
    }
}
