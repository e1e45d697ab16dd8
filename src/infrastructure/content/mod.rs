// SPDX-License-Identifier: MPL-2.0
//! Content sources backed by TOML documents.
//!
//! # Document Shape
//!
//! ```toml
//! cta_target = "/schedule-a-demo"
//!
//! [section]
//! badge = "Outcomes"
//! heading = "The Results Speak for Themselves"
//!
//! [[tabs]]
//! id = "reduce-leakage"
//! title = "Reduce Leakage, Lower Denials"
//! what_we_fix = ["Stalled referrals"]
//! how = ["Automated outreach"]
//! cta_label = "Identify your top three leakage points"
//! poster_image = "https://cdn.example/reduce-leakage.webp"
//! video_source = "https://cdn.example/reduce-leakage.mp4"
//! ```
//!
//! `label` may be omitted and then defaults to `title`. Blank or absent
//! media locators become missing references rather than parse errors.

mod document;

pub use document::{parse_document, DEFAULT_CTA_TARGET};

use crate::application::port::{ContentError, ContentSource};
use crate::domain::showcase::ShowcaseContent;
use rust_embed::RustEmbed;
use std::fs;
use std::path::{Path, PathBuf};

#[derive(RustEmbed)]
#[folder = "assets/content/"]
struct Asset;

const BUILTIN_DOCUMENT: &str = "outcomes.toml";

/// The four outcomes shipped inside the binary.
#[derive(Debug, Default, Clone, Copy)]
pub struct EmbeddedContent;

impl ContentSource for EmbeddedContent {
    fn load(&self) -> Result<ShowcaseContent, ContentError> {
        let file = Asset::get(BUILTIN_DOCUMENT).ok_or_else(|| {
            ContentError::Unreadable(format!("embedded {BUILTIN_DOCUMENT} missing"))
        })?;
        parse_document(&String::from_utf8_lossy(file.data.as_ref()))
    }

    fn describe(&self) -> String {
        format!("embedded:{BUILTIN_DOCUMENT}")
    }
}

/// A content document on disk.
#[derive(Debug, Clone)]
pub struct FileContent {
    path: PathBuf,
}

impl FileContent {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    #[must_use]
    pub fn path(&self) -> &Path {
        &self.path
    }
}

impl ContentSource for FileContent {
    fn load(&self) -> Result<ShowcaseContent, ContentError> {
        let text = fs::read_to_string(&self.path).map_err(|err| {
            ContentError::Unreadable(format!("{}: {err}", self.path.display()))
        })?;
        parse_document(&text)
    }

    fn describe(&self) -> String {
        self.path.display().to_string()
    }
}
