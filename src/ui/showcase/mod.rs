// SPDX-License-Identifier: MPL-2.0
//! Outcome showcase component.
//!
//! Follows the Elm-style "state down, messages up" pattern: the parent
//! forwards [`Message`]s to [`update`], which mutates the selection and
//! reports an [`Event`] the parent acts on (navigation). Rendering goes
//! through [`frame::compose`], so everything on screen is re-derived from
//! the `(active, previous)` pair on every view.

pub mod frame;
pub mod posters;
mod view;

pub use frame::{compose, Frame, ViewportClass};
pub use posters::Posters;
pub use view::{view, ViewContext};

use crate::domain::error::ShowcaseError;
use crate::domain::showcase::{MediaRef, Showcase, TabId, Transition};
use crate::ui::motion::MotionClock;
use std::time::{Duration, Instant};

/// Messages emitted by the showcase widgets.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Message {
    /// A tab header was activated.
    Select(TabId),
    /// The call-to-action was activated.
    CallToAction,
    /// Animation frame tick.
    Tick(Instant),
    /// A remote poster download finished.
    PosterLoaded(MediaRef, Result<Vec<u8>, String>),
}

/// Events propagated to the parent application.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Event {
    None,
    /// Forward to the navigation sink.
    Navigate(String),
}

/// Component state: the showcase, the presentation clock and the
/// downloaded posters.
///
/// The clock only records when the current transition started; which
/// record is active is always read from the showcase.
#[derive(Debug, Clone)]
pub struct State {
    showcase: Showcase,
    clock: MotionClock,
    now: Instant,
    posters: Posters,
}

impl State {
    pub fn new(showcase: Showcase) -> Self {
        Self {
            showcase,
            clock: MotionClock::default(),
            now: Instant::now(),
            posters: Posters::default(),
        }
    }

    #[must_use]
    pub fn showcase(&self) -> &Showcase {
        &self.showcase
    }

    #[must_use]
    pub fn posters(&self) -> &Posters {
        &self.posters
    }

    /// Remote posters the host still has to download.
    #[must_use]
    pub fn pending_posters(&self) -> Vec<MediaRef> {
        self.posters.missing(&self.showcase)
    }

    /// Applies a selection and restarts the presentation clock at `now`.
    /// Any transition still in flight is dropped.
    ///
    /// # Errors
    ///
    /// Propagates [`ShowcaseError::InvalidSelection`]; neither the
    /// selection nor the clock changes then.
    pub fn select_at(&mut self, id: &TabId, now: Instant) -> Result<Transition, ShowcaseError> {
        let transition = self.showcase.select(id)?;
        self.now = now;
        if transition.from == transition.to {
            self.clock.stop();
        } else {
            self.clock.restart(transition.generation, now);
        }
        tracing::debug!(
            from = %transition.from,
            to = %transition.to,
            direction = ?transition.direction,
            generation = transition.generation,
            "tab selected"
        );
        Ok(transition)
    }

    /// Advances presentation time. Stops the clock once every motion has
    /// settled.
    pub fn tick(&mut self, now: Instant) {
        self.now = now;
        if self.elapsed().is_some_and(|elapsed| elapsed >= frame::SETTLE_AFTER) {
            self.clock.stop();
        }
    }

    /// Time since the current transition started, or `None` when at rest.
    #[must_use]
    pub fn elapsed(&self) -> Option<Duration> {
        self.clock
            .elapsed(self.showcase.selection().generation(), self.now)
    }

    #[must_use]
    pub fn is_animating(&self) -> bool {
        self.elapsed()
            .is_some_and(|elapsed| elapsed < frame::SETTLE_AFTER)
    }

    /// Render model for the given viewport class.
    #[must_use]
    pub fn frame(&self, viewport: ViewportClass) -> Frame<'_> {
        frame::compose(&self.showcase, viewport)
    }

    /// Tears down in-flight presentation effects.
    pub fn unmount(&mut self) {
        self.clock.stop();
    }
}

/// Process a showcase message and return the corresponding event.
///
/// # Errors
///
/// Returns [`ShowcaseError::InvalidSelection`] for a `Select` naming an
/// unknown tab. The rendered headers only ever emit valid ids.
pub fn update(state: &mut State, message: Message) -> Result<Event, ShowcaseError> {
    match message {
        Message::Select(id) => {
            state.select_at(&id, Instant::now())?;
            Ok(Event::None)
        }
        Message::CallToAction => Ok(Event::Navigate(state.showcase.cta_target().to_string())),
        Message::Tick(now) => {
            state.tick(now);
            Ok(Event::None)
        }
        Message::PosterLoaded(poster, Ok(bytes)) => {
            state.posters.insert(poster, bytes);
            Ok(Event::None)
        }
        Message::PosterLoaded(poster, Err(err)) => {
            // The dark media frame stays in place of the poster.
            tracing::warn!(%poster, error = %err, "poster unavailable");
            Ok(Event::None)
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::showcase::{Direction, TabRecord};

    fn state() -> State {
        let records = ["a", "b", "c", "d"]
            .into_iter()
            .map(|id| TabRecord::new(id, id.to_uppercase()).with_video(&format!("{id}.mp4")))
            .collect();
        State::new(Showcase::from_records(records, "/schedule-a-demo").expect("showcase"))
    }

    #[test]
    fn starts_at_rest() {
        let state = state();
        assert_eq!(state.elapsed(), None);
        assert!(!state.is_animating());
    }

    #[test]
    fn selection_starts_clock() {
        let mut state = state();
        let start = Instant::now();
        state.select_at(&TabId::new("c"), start).expect("select");

        assert!(state.is_animating());
        state.tick(start + Duration::from_millis(500));
        assert_eq!(state.elapsed(), Some(Duration::from_millis(500)));
    }

    #[test]
    fn clock_stops_after_settling() {
        let mut state = state();
        let start = Instant::now();
        state.select_at(&TabId::new("b"), start).expect("select");

        state.tick(start + frame::SETTLE_AFTER);
        assert!(!state.is_animating());
        assert_eq!(state.elapsed(), None);
    }

    #[test]
    fn mid_animation_selection_abandons_previous_transition() {
        let mut state = state();
        let start = Instant::now();
        state.select_at(&TabId::new("c"), start).expect("select");
        state.tick(start + Duration::from_millis(200));

        let second = start + Duration::from_millis(250);
        state.select_at(&TabId::new("b"), second).expect("select");

        assert_eq!(state.elapsed(), Some(Duration::ZERO));
        assert_eq!(state.showcase().active(), &TabId::new("b"));
        assert_eq!(state.showcase().direction(), Direction::Backward);
    }

    #[test]
    fn reselection_does_not_animate() {
        let mut state = state();
        state.select_at(&TabId::new("a"), Instant::now()).expect("select");
        assert!(!state.is_animating());
    }

    #[test]
    fn invalid_selection_leaves_clock_and_state() {
        let mut state = state();
        let start = Instant::now();
        state.select_at(&TabId::new("b"), start).expect("select");

        let result = update(&mut state, Message::Select(TabId::new("nope")));

        assert_eq!(
            result,
            Err(ShowcaseError::InvalidSelection(TabId::new("nope")))
        );
        assert_eq!(state.showcase().active(), &TabId::new("b"));
        assert_eq!(state.elapsed(), Some(Duration::ZERO));
    }

    #[test]
    fn call_to_action_emits_fixed_target() {
        let mut state = state();
        for id in ["b", "d"] {
            update(&mut state, Message::Select(TabId::new(id))).expect("select");
            let event = update(&mut state, Message::CallToAction).expect("cta");
            assert_eq!(event, Event::Navigate("/schedule-a-demo".to_string()));
        }
    }

    #[test]
    fn downloaded_poster_is_kept_for_its_slot() {
        let records = vec![
            TabRecord::new("a", "A").with_poster("https://cdn.example/a.webp"),
            TabRecord::new("b", "B").with_poster("https://cdn.example/b.webp"),
        ];
        let mut state =
            State::new(Showcase::from_records(records, "/schedule-a-demo").expect("showcase"));
        assert_eq!(state.pending_posters().len(), 2);

        let poster = MediaRef::parse("https://cdn.example/b.webp").expect("ref");
        let event = update(
            &mut state,
            Message::PosterLoaded(poster.clone(), Ok(b"RIFF".to_vec())),
        )
        .expect("poster");

        assert_eq!(event, Event::None);
        assert!(state.posters().handle(&poster).is_some());
        assert_eq!(state.pending_posters().len(), 1);
    }

    #[test]
    fn failed_poster_download_leaves_frame_empty() {
        let records = vec![TabRecord::new("a", "A").with_poster("https://cdn.example/a.webp")];
        let mut state =
            State::new(Showcase::from_records(records, "/schedule-a-demo").expect("showcase"));
        let poster = MediaRef::parse("https://cdn.example/a.webp").expect("ref");

        let event = update(
            &mut state,
            Message::PosterLoaded(poster.clone(), Err("HTTP 404".to_string())),
        )
        .expect("poster");

        assert_eq!(event, Event::None);
        assert!(state.posters().handle(&poster).is_none());
        assert_eq!(state.showcase().active(), &TabId::new("a"));
    }

    #[test]
    fn unmount_stops_motion() {
        let mut state = state();
        state.select_at(&TabId::new("d"), Instant::now()).expect("select");
        state.unmount();
        assert!(!state.is_animating());
    }
}
