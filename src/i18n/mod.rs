// SPDX-License-Identifier: MPL-2.0
//! Localized strings for the showcase chrome.
//!
//! Outcome copy comes from the content document as-is; only the fixed
//! labels (section headings, media captions, warnings) go through Fluent.
//! The locale is picked from `--lang`, then `settings.toml`, then the OS,
//! falling back to `en-US`.

pub mod fluent;
