// SPDX-License-Identifier: MPL-2.0
//! Serde model of a content document.

use crate::application::port::ContentError;
use crate::domain::showcase::{MediaRef, SectionCopy, ShowcaseContent, TabId, TabRecord};
use serde::Deserialize;

/// Route every call-to-action navigates to unless the document says otherwise.
pub const DEFAULT_CTA_TARGET: &str = "/schedule-a-demo";

#[derive(Debug, Deserialize)]
struct ContentDocument {
    #[serde(default = "default_cta_target")]
    cta_target: String,
    #[serde(default)]
    section: Option<SectionDocument>,
    #[serde(default)]
    tabs: Vec<TabDocument>,
}

#[derive(Debug, Default, Deserialize)]
struct SectionDocument {
    badge: Option<String>,
    heading: Option<String>,
    blurb: Option<String>,
}

#[derive(Debug, Deserialize)]
struct TabDocument {
    id: String,
    #[serde(default)]
    label: Option<String>,
    title: String,
    #[serde(default)]
    what_we_fix: Vec<String>,
    #[serde(default)]
    how: Vec<String>,
    #[serde(default)]
    cta_label: String,
    #[serde(default)]
    poster_image: Option<String>,
    #[serde(default)]
    video_source: Option<String>,
}

fn default_cta_target() -> String {
    DEFAULT_CTA_TARGET.to_string()
}

fn non_blank(value: Option<String>) -> Option<String> {
    value.filter(|text| !text.trim().is_empty())
}

impl From<SectionDocument> for SectionCopy {
    fn from(doc: SectionDocument) -> Self {
        SectionCopy {
            badge: non_blank(doc.badge),
            heading: non_blank(doc.heading),
            blurb: non_blank(doc.blurb),
        }
    }
}

impl From<TabDocument> for TabRecord {
    fn from(doc: TabDocument) -> Self {
        let label = non_blank(doc.label).unwrap_or_else(|| doc.title.clone());
        TabRecord {
            id: TabId::new(doc.id),
            label,
            title: doc.title,
            what_we_fix: doc.what_we_fix,
            how: doc.how,
            cta_label: doc.cta_label,
            poster_image: doc.poster_image.as_deref().and_then(MediaRef::parse),
            video_source: doc.video_source.as_deref().and_then(MediaRef::parse),
        }
    }
}

/// Parses a TOML content document.
///
/// An empty `tabs` array parses fine; rejecting it is the job of
/// [`Showcase::new`](crate::domain::showcase::Showcase::new).
///
/// # Errors
///
/// Returns [`ContentError::Malformed`] when the TOML is invalid or a tab
/// lacks its `id` or `title`.
pub fn parse_document(text: &str) -> Result<ShowcaseContent, ContentError> {
    let document: ContentDocument =
        toml::from_str(text).map_err(|err| ContentError::Malformed(err.to_string()))?;

    let cta_target = if document.cta_target.trim().is_empty() {
        default_cta_target()
    } else {
        document.cta_target
    };

    Ok(ShowcaseContent {
        section: document.section.map(SectionCopy::from).unwrap_or_default(),
        cta_target,
        records: document.tabs.into_iter().map(TabRecord::from).collect(),
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn minimal_document_uses_defaults() {
        let content = parse_document(
            r#"
[[tabs]]
id = "a"
title = "Alpha"
"#,
        )
        .expect("parse");

        assert_eq!(content.cta_target, DEFAULT_CTA_TARGET);
        assert!(content.section.is_empty());
        let record = &content.records[0];
        assert_eq!(record.label, "Alpha");
        assert!(record.what_we_fix.is_empty());
        assert!(record.poster_image.is_none());
        assert!(record.video_source.is_none());
    }

    #[test]
    fn explicit_label_and_target_are_kept() {
        let content = parse_document(
            r#"
cta_target = "/contact"

[[tabs]]
id = "a"
label = "Short"
title = "A much longer heading"
video_source = "clips/a.mp4"
poster_image = "  "
"#,
        )
        .expect("parse");

        assert_eq!(content.cta_target, "/contact");
        let record = &content.records[0];
        assert_eq!(record.label, "Short");
        assert_eq!(record.video_source.as_ref().map(MediaRef::as_str), Some("clips/a.mp4"));
        assert!(record.poster_image.is_none());
    }

    #[test]
    fn empty_tab_list_parses() {
        let content = parse_document("cta_target = \"/x\"\n").expect("parse");
        assert!(content.records.is_empty());
    }

    #[test]
    fn tab_without_title_is_malformed() {
        let result = parse_document(
            r#"
[[tabs]]
id = "a"
"#,
        );
        assert!(matches!(result, Err(ContentError::Malformed(_))));
    }

    #[test]
    fn invalid_toml_is_malformed() {
        let result = parse_document("not = valid = toml");
        assert!(matches!(result, Err(ContentError::Malformed(_))));
    }
}
