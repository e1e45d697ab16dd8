// SPDX-License-Identifier: MPL-2.0
//! Handler methods for App message processing.

use super::{App, Message};
use crate::ui::showcase;
use iced::Task;

impl App {
    /// Forwards a message to the showcase component and acts on the event
    /// it reports.
    pub(super) fn handle_showcase_message(&mut self, message: showcase::Message) -> Task<Message> {
        match showcase::update(&mut self.showcase, message) {
            Ok(event) => self.handle_showcase_event(event),
            Err(err) => {
                // Selection state is untouched; nothing to roll back.
                tracing::warn!(error = %err, "selection rejected");
            }
        }
        Task::none()
    }

    fn handle_showcase_event(&mut self, event: showcase::Event) {
        match event {
            showcase::Event::None => {}
            showcase::Event::Navigate(target) => self.navigator.navigate(&target),
        }
    }

    /// Stops in-flight animations, then exits.
    pub(super) fn handle_close_requested(&mut self) -> Task<Message> {
        self.showcase.unmount();
        tracing::info!("window closed, shutting down");
        iced::exit()
    }
}
