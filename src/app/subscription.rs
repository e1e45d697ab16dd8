// SPDX-License-Identifier: MPL-2.0
//! Event and timer subscriptions for the application.

use super::config::ANIMATION_TICK;
use super::Message;
use crate::ui::showcase;
use iced::{event, time, Subscription};

/// Routes window close requests so animations can be torn down first.
pub fn create_event_subscription() -> Subscription<Message> {
    event::listen_with(|event, _status, window_id| {
        if let event::Event::Window(iced::window::Event::CloseRequested) = &event {
            return Some(Message::WindowCloseRequested(window_id));
        }
        None
    })
}

/// Frame ticks while a transition is in flight. At rest nothing ticks.
pub fn create_tick_subscription(animating: bool) -> Subscription<Message> {
    if animating {
        time::every(ANIMATION_TICK).map(|now| Message::Showcase(showcase::Message::Tick(now)))
    } else {
        Subscription::none()
    }
}
