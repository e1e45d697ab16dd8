// SPDX-License-Identifier: MPL-2.0
//! End-to-end scenarios over the bundled outcomes, driven through the
//! showcase component the way the window drives it.

use outcome_showcase::app::config::Config;
use outcome_showcase::app::load_showcase;
use outcome_showcase::application::port::ContentSource;
use outcome_showcase::domain::showcase::{Direction, MediaRef, TabId};
use outcome_showcase::infrastructure::{EmbeddedContent, FileContent};
use outcome_showcase::ui::showcase::frame::{
    Accordion, CONTENT_DELAY, CONTENT_DURATION, CONTENT_OFFSET, SETTLE_AFTER,
};
use outcome_showcase::ui::showcase::{self, Event, Message, ViewportClass};
use std::time::{Duration, Instant};
use tempfile::tempdir;

fn state() -> showcase::State {
    let model = load_showcase(&EmbeddedContent, &Config::default()).expect("bundled content");
    showcase::State::new(model)
}

#[test]
fn first_outcome_is_open_on_mount_without_animation() {
    let state = state();
    let frame = state.frame(ViewportClass::Wide);

    let expanded: Vec<&str> = frame.expanded_rows().map(|row| row.id.as_str()).collect();
    assert_eq!(expanded, vec!["reduce-leakage"]);
    assert_eq!(frame.direction, Direction::Still);
    assert!(!state.is_animating());

    let side = frame.side_media.as_ref().expect("side media");
    assert!(side.fade.is_static());
    assert!(side
        .video
        .map(MediaRef::as_str)
        .is_some_and(|src| src.ends_with(".mp4")));
}

#[test]
fn moving_forward_slides_new_content_down_from_above() {
    let mut state = state();
    let start = Instant::now();
    state
        .select_at(&TabId::new("staff-capacity"), start)
        .expect("select");

    let frame = state.frame(ViewportClass::Wide);
    assert_eq!(frame.direction, Direction::Forward);

    let open = frame.expanded_rows().next().expect("open row");
    let Accordion::Open { body, .. } = &open.accordion else {
        panic!("active row must be open");
    };
    let offset = body.content.offset_y;
    assert_eq!(offset.sample(Some(Duration::ZERO)), -CONTENT_OFFSET);
    assert_eq!(offset.sample(Some(CONTENT_DELAY + CONTENT_DURATION)), 0.0);

    let leaving = frame
        .rows
        .iter()
        .find(|row| row.id.as_str() == "reduce-leakage")
        .expect("first row");
    assert!(matches!(leaving.accordion, Accordion::Collapsing { .. }));
}

#[test]
fn moving_backward_slides_new_content_up_from_below() {
    let mut state = state();
    let start = Instant::now();
    state.select_at(&TabId::new("lower-cost"), start).expect("select");
    state.tick(start + SETTLE_AFTER);
    state
        .select_at(&TabId::new("shorten-time"), start + SETTLE_AFTER)
        .expect("select");

    let frame = state.frame(ViewportClass::Narrow);
    assert_eq!(frame.direction, Direction::Backward);

    let open = frame.expanded_rows().next().expect("open row");
    let Accordion::Open { body, .. } = &open.accordion else {
        panic!("active row must be open");
    };
    assert_eq!(body.content.offset_y.initial, CONTENT_OFFSET);
    let inline = body.inline_media.as_ref().expect("inline media");
    assert_eq!(inline.tab, &TabId::new("shorten-time"));
}

#[test]
fn rapid_selection_settles_on_the_last_choice() {
    let mut state = state();
    let start = Instant::now();
    let ids = ["shorten-time", "lower-cost", "staff-capacity", "shorten-time"];
    for (step, id) in ids.iter().enumerate() {
        let at = start + Duration::from_millis(50 * step as u64);
        state.select_at(&TabId::new(*id), at).expect("select");
        state.tick(at + Duration::from_millis(16));
    }

    assert_eq!(state.showcase().active(), &TabId::new("shorten-time"));
    assert_eq!(state.showcase().previous(), &TabId::new("staff-capacity"));
    assert_eq!(state.elapsed(), Some(Duration::from_millis(16)));

    for viewport in [ViewportClass::Wide, ViewportClass::Narrow] {
        let frame = state.frame(viewport);
        assert_eq!(frame.expanded_rows().count(), 1);
        let media = frame.live_media().expect("media");
        assert_eq!(media.tab, &TabId::new("shorten-time"));
    }

    state.tick(start + Duration::from_secs(5));
    assert!(!state.is_animating());
}

#[test]
fn call_to_action_navigates_to_shared_route() {
    let mut state = state();
    for id in ["reduce-leakage", "lower-cost"] {
        showcase::update(&mut state, Message::Select(TabId::new(id))).expect("select");
        let event = showcase::update(&mut state, Message::CallToAction).expect("cta");
        assert_eq!(event, Event::Navigate("/schedule-a-demo".to_string()));
    }
}

#[test]
fn custom_document_with_missing_media_still_renders() {
    let dir = tempdir().expect("temp dir");
    let path = dir.path().join("outcomes.toml");
    std::fs::write(
        &path,
        r#"
cta_target = "/talk-to-us"

[[tabs]]
id = "first"
title = "First outcome"
what_we_fix = ["One"]
how = ["Two"]
cta_label = "Go"
video_source = "first.mp4"

[[tabs]]
id = "second"
title = "Second outcome"
what_we_fix = ["Three"]
how = ["Four"]
cta_label = "Go"
"#,
    )
    .expect("write document");

    let source = FileContent::new(&path);
    assert_eq!(source.describe(), path.display().to_string());
    let model = load_showcase(&source, &Config::default()).expect("document loads");
    assert_eq!(model.catalog().media_issues().len(), 3);

    let mut state = showcase::State::new(model);
    showcase::update(&mut state, Message::Select(TabId::new("second"))).expect("select");

    let frame = state.frame(ViewportClass::Wide);
    assert!(frame.side_media.is_none());
    assert_eq!(frame.expanded_rows().count(), 1);

    let event = showcase::update(&mut state, Message::CallToAction).expect("cta");
    assert_eq!(event, Event::Navigate("/talk-to-us".to_string()));
}
