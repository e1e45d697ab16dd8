// SPDX-License-Identifier: MPL-2.0
//! Top-level messages and runtime flags for the application.

use crate::ui::showcase;

/// Top-level messages consumed by `App::update`.
#[derive(Debug, Clone)]
pub enum Message {
    Showcase(showcase::Message),
    /// Hide the startup warning banner.
    DismissWarning,
    /// Window close was requested (user clicked X or pressed Alt+F4).
    WindowCloseRequested(iced::window::Id),
}

/// Runtime flags passed in from the CLI.
#[derive(Debug, Default, Clone)]
pub struct Flags {
    /// Optional locale override in BCP-47 form (e.g. `fr`, `en-US`).
    pub lang: Option<String>,
    /// Optional content document replacing the configured or bundled one.
    pub content: Option<String>,
    /// Optional config directory override (for settings.toml).
    /// Takes precedence over `OUTCOME_SHOWCASE_CONFIG_DIR`.
    pub config_dir: Option<String>,
}
