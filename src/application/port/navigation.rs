// SPDX-License-Identifier: MPL-2.0
//! Navigation sink port.

/// Port fired when the call-to-action is activated.
///
/// The target is a static route shared by every record; it never depends
/// on which record is active.
pub trait NavigationSink {
    fn navigate(&mut self, target: &str);
}

impl<F> NavigationSink for F
where
    F: FnMut(&str),
{
    fn navigate(&mut self, target: &str) {
        self(target);
    }
}
