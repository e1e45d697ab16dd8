// SPDX-License-Identifier: MPL-2.0
//! Tab records and the value objects they are built from.

use crate::domain::error::ShowcaseError;
use std::fmt;
use std::path::Path;

// =============================================================================
// TabId
// =============================================================================

/// Stable identifier of a tab record.
///
/// This is the only equality key used to decide whether a record is active.
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct TabId(String);

impl TabId {
    pub fn new(id: impl Into<String>) -> Self {
        Self(id.into())
    }

    #[must_use]
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for TabId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl From<&str> for TabId {
    fn from(id: &str) -> Self {
        Self::new(id)
    }
}

// =============================================================================
// MediaRef
// =============================================================================

/// Which media slot a locator feeds.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MediaKind {
    Poster,
    Video,
}

impl fmt::Display for MediaKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            MediaKind::Poster => f.write_str("poster image"),
            MediaKind::Video => f.write_str("video"),
        }
    }
}

/// Opaque media locator (URL or file path).
///
/// Reachability is never checked here; the asset-delivery side owns that.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct MediaRef(String);

impl MediaRef {
    /// Parses a raw locator. Blank input yields `None`, which callers treat
    /// as a missing reference.
    #[must_use]
    pub fn parse(raw: &str) -> Option<Self> {
        let trimmed = raw.trim();
        if trimmed.is_empty() {
            None
        } else {
            Some(Self(trimmed.to_string()))
        }
    }

    #[must_use]
    pub fn as_str(&self) -> &str {
        &self.0
    }

    /// Whether the locator points at a remote host.
    #[must_use]
    pub fn is_remote(&self) -> bool {
        self.0.starts_with("http://") || self.0.starts_with("https://")
    }

    /// Local filesystem path, if the locator is one.
    #[must_use]
    pub fn local_path(&self) -> Option<&Path> {
        if self.is_remote() {
            return None;
        }
        Some(Path::new(self.0.strip_prefix("file://").unwrap_or(&self.0)))
    }
}

impl fmt::Display for MediaRef {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

// =============================================================================
// TabRecord
// =============================================================================

/// One selectable outcome with its text and media.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TabRecord {
    pub id: TabId,
    /// Header text, visible whether or not the tab is active.
    pub label: String,
    /// Heading shown when expanded.
    pub title: String,
    pub what_we_fix: Vec<String>,
    pub how: Vec<String>,
    pub cta_label: String,
    pub poster_image: Option<MediaRef>,
    pub video_source: Option<MediaRef>,
}

impl TabRecord {
    /// Creates a record whose label defaults to its title.
    pub fn new(id: impl Into<String>, title: impl Into<String>) -> Self {
        let title = title.into();
        Self {
            id: TabId::new(id),
            label: title.clone(),
            title,
            what_we_fix: Vec::new(),
            how: Vec::new(),
            cta_label: String::new(),
            poster_image: None,
            video_source: None,
        }
    }

    #[must_use]
    pub fn with_label(mut self, label: impl Into<String>) -> Self {
        self.label = label.into();
        self
    }

    #[must_use]
    pub fn with_what_we_fix<I, S>(mut self, items: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.what_we_fix = items.into_iter().map(Into::into).collect();
        self
    }

    #[must_use]
    pub fn with_how<I, S>(mut self, items: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.how = items.into_iter().map(Into::into).collect();
        self
    }

    #[must_use]
    pub fn with_cta_label(mut self, label: impl Into<String>) -> Self {
        self.cta_label = label.into();
        self
    }

    #[must_use]
    pub fn with_poster(mut self, locator: &str) -> Self {
        self.poster_image = MediaRef::parse(locator);
        self
    }

    #[must_use]
    pub fn with_video(mut self, locator: &str) -> Self {
        self.video_source = MediaRef::parse(locator);
        self
    }

    /// Reports each media slot this record cannot fill.
    pub fn media_issues(&self) -> Vec<ShowcaseError> {
        let mut issues = Vec::new();
        if self.poster_image.is_none() {
            issues.push(ShowcaseError::MissingMediaReference {
                id: self.id.clone(),
                kind: MediaKind::Poster,
            });
        }
        if self.video_source.is_none() {
            issues.push(ShowcaseError::MissingMediaReference {
                id: self.id.clone(),
                kind: MediaKind::Video,
            });
        }
        issues
    }
}

// =============================================================================
// Section copy and content bundle
// =============================================================================

/// Optional chrome rendered above the tab panel.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct SectionCopy {
    pub badge: Option<String>,
    pub heading: Option<String>,
    pub blurb: Option<String>,
}

impl SectionCopy {
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.badge.is_none() && self.heading.is_none() && self.blurb.is_none()
    }
}

/// Everything a content source supplies at construction time.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ShowcaseContent {
    pub section: SectionCopy,
    /// Route shared by every call-to-action.
    pub cta_target: String,
    /// Records in declaration order.
    pub records: Vec<TabRecord>,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn blank_locator_is_missing() {
        assert_eq!(MediaRef::parse("   "), None);
        assert_eq!(MediaRef::parse(""), None);
    }

    #[test]
    fn locator_is_trimmed() {
        let media = MediaRef::parse("  https://cdn.test/a.mp4 ").expect("locator");
        assert_eq!(media.as_str(), "https://cdn.test/a.mp4");
        assert!(media.is_remote());
        assert!(media.local_path().is_none());
    }

    #[test]
    fn file_scheme_maps_to_local_path() {
        let media = MediaRef::parse("file:///tmp/poster.webp").expect("locator");
        assert_eq!(media.local_path(), Some(Path::new("/tmp/poster.webp")));

        let bare = MediaRef::parse("posters/a.png").expect("locator");
        assert_eq!(bare.local_path(), Some(Path::new("posters/a.png")));
    }

    #[test]
    fn label_defaults_to_title() {
        let record = TabRecord::new("shorten-time", "Shorten Time-to-Appointment");
        assert_eq!(record.label, "Shorten Time-to-Appointment");

        let relabeled = record.with_label("Faster");
        assert_eq!(relabeled.label, "Faster");
        assert_eq!(relabeled.title, "Shorten Time-to-Appointment");
    }

    #[test]
    fn media_issues_lists_each_missing_slot() {
        let bare = TabRecord::new("a", "A");
        assert_eq!(bare.media_issues().len(), 2);

        let poster_only = TabRecord::new("a", "A").with_poster("a.webp");
        let issues = poster_only.media_issues();
        assert_eq!(
            issues,
            vec![ShowcaseError::MissingMediaReference {
                id: TabId::new("a"),
                kind: MediaKind::Video,
            }]
        );

        let full = poster_only.with_video("a.mp4");
        assert!(full.media_issues().is_empty());
    }
}
