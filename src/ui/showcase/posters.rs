// SPDX-License-Identifier: MPL-2.0
//! Poster images for the media slots.
//!
//! Local posters resolve straight to a file handle. Remote posters are
//! downloaded once at startup, for every record, so a tab swap finds its
//! poster already in memory.

use crate::domain::showcase::{MediaRef, Showcase};
use iced::widget::image::Handle;
use std::collections::HashMap;

#[derive(Debug, Clone, Default)]
pub struct Posters {
    downloaded: HashMap<MediaRef, Handle>,
}

impl Posters {
    /// Remote posters referenced by `showcase` that are not in memory yet,
    /// in record order and without repeats.
    #[must_use]
    pub fn missing(&self, showcase: &Showcase) -> Vec<MediaRef> {
        let mut missing: Vec<MediaRef> = Vec::new();
        for poster in showcase
            .catalog()
            .records()
            .iter()
            .filter_map(|record| record.poster_image.as_ref())
            .filter(|poster| poster.is_remote())
        {
            if !self.downloaded.contains_key(poster) && !missing.contains(poster) {
                missing.push(poster.clone());
            }
        }
        missing
    }

    pub fn insert(&mut self, poster: MediaRef, bytes: Vec<u8>) {
        self.downloaded.insert(poster, Handle::from_bytes(bytes));
    }

    /// Image handle for `poster`, or `None` while a remote one is still
    /// downloading (or failed to).
    #[must_use]
    pub fn handle(&self, poster: &MediaRef) -> Option<Handle> {
        match poster.local_path() {
            Some(path) => Some(Handle::from_path(path)),
            None => self.downloaded.get(poster).cloned(),
        }
    }
}
