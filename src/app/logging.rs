// SPDX-License-Identifier: MPL-2.0
//! Structured logging setup.
//!
//! `RUST_LOG` takes precedence; without it the crate logs at `info` and the
//! GUI stack only reports warnings.

use tracing_subscriber::EnvFilter;

/// Filter used when `RUST_LOG` is unset or invalid.
pub const DEFAULT_DIRECTIVES: &str = "outcome_showcase=info,iced=warn,wgpu=warn";

/// Installs the global subscriber. Returns `false` if one was already set.
pub fn init() -> bool {
    let filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new(DEFAULT_DIRECTIVES));

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_target(true)
        .try_init()
        .is_ok()
}
