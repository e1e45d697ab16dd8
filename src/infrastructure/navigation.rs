// SPDX-License-Identifier: MPL-2.0
//! Navigation sink that logs every request.
//!
//! The desktop host has no router of its own, so the default sink emits an
//! `info` event per request and leaves routing to whoever reads the log.

use crate::application::port::NavigationSink;

#[derive(Debug, Default, Clone, Copy)]
pub struct LogNavigator;

impl NavigationSink for LogNavigator {
    fn navigate(&mut self, target: &str) {
        tracing::info!(target_route = target, "navigation requested");
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn repeated_requests_keep_no_state() {
        let mut navigator = LogNavigator;
        for _ in 0..1_000 {
            navigator.navigate("/schedule-a-demo");
        }
        assert_eq!(std::mem::size_of_val(&navigator), 0);
    }
}
