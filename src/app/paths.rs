// SPDX-License-Identifier: MPL-2.0
//! Config directory resolution.
//!
//! # Path Resolution Order
//!
//! 1. **Explicit override** - parameter to [`get_app_config_dir_with_override`] (for tests)
//! 2. **CLI argument** (`--config-dir`) - set via [`init_cli_override`]
//! 3. **Environment variable** (`OUTCOME_SHOWCASE_CONFIG_DIR`)
//! 4. **Platform default** - via `dirs` crate
//!
//! The CLI override should be initialized once at startup:
//! ```ignore
//! paths::init_cli_override(flags.config_dir);
//! ```

use std::path::PathBuf;
use std::sync::OnceLock;

/// Application name used for directory naming.
const APP_NAME: &str = "OutcomeShowcase";

/// Environment variable to override the config directory.
pub const ENV_CONFIG_DIR: &str = "OUTCOME_SHOWCASE_CONFIG_DIR";

/// Global CLI override for the config directory (set once at startup).
static CLI_CONFIG_DIR: OnceLock<Option<PathBuf>> = OnceLock::new();

/// Records the `--config-dir` CLI argument.
///
/// Only the first call takes effect; later calls are logged and ignored.
pub fn init_cli_override(config_dir: Option<String>) {
    if CLI_CONFIG_DIR.set(config_dir.map(PathBuf::from)).is_err() {
        tracing::warn!("config dir override already initialized, ignoring");
    }
}

fn get_cli_config_dir() -> Option<PathBuf> {
    CLI_CONFIG_DIR.get().and_then(Clone::clone)
}

/// Returns the application config directory path.
///
/// `override_path` takes highest priority. Platform defaults:
/// - Linux: `~/.config/OutcomeShowcase/`
/// - macOS: `~/Library/Application Support/OutcomeShowcase/`
/// - Windows: `C:\Users\<User>\AppData\Roaming\OutcomeShowcase\`
///
/// Returns `None` if the config directory cannot be determined (rare edge case).
pub fn get_app_config_dir_with_override(override_path: Option<PathBuf>) -> Option<PathBuf> {
    // Priority 1: Explicit override (for tests)
    if let Some(path) = override_path {
        return Some(path);
    }

    // Priority 2: CLI argument
    if let Some(path) = get_cli_config_dir() {
        return Some(path);
    }

    // Priority 3: Environment variable
    if let Ok(env_path) = std::env::var(ENV_CONFIG_DIR) {
        if !env_path.is_empty() {
            return Some(PathBuf::from(env_path));
        }
    }

    // Priority 4: Platform default with app name
    dirs::config_dir().map(|mut path| {
        path.push(APP_NAME);
        path
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::sync::Mutex;

    // Serializes tests that touch the environment.
    static ENV_MUTEX: Mutex<()> = Mutex::new(());

    #[test]
    fn app_config_dir_contains_app_name() {
        let _lock = ENV_MUTEX.lock().unwrap();
        std::env::remove_var(ENV_CONFIG_DIR);

        if let Some(path) = get_app_config_dir_with_override(None) {
            assert!(
                path.to_string_lossy().contains(APP_NAME),
                "App config dir should contain app name"
            );
        }
    }

    #[test]
    fn override_path_takes_precedence() {
        let override_path = PathBuf::from("/custom/config/path");
        let result = get_app_config_dir_with_override(Some(override_path.clone()));
        assert_eq!(result, Some(override_path));
    }

    #[test]
    fn env_var_overrides_default_config_dir() {
        let _lock = ENV_MUTEX.lock().unwrap();
        let test_path = "/test/config/dir";
        std::env::set_var(ENV_CONFIG_DIR, test_path);

        let result = get_app_config_dir_with_override(None);
        assert_eq!(result, Some(PathBuf::from(test_path)));

        std::env::remove_var(ENV_CONFIG_DIR);
    }

    #[test]
    fn empty_env_var_uses_default() {
        let _lock = ENV_MUTEX.lock().unwrap();
        std::env::set_var(ENV_CONFIG_DIR, "");

        if let Some(path) = get_app_config_dir_with_override(None) {
            assert!(path.to_string_lossy().contains(APP_NAME));
        }

        std::env::remove_var(ENV_CONFIG_DIR);
    }

    #[test]
    fn override_path_takes_precedence_over_env_var() {
        let _lock = ENV_MUTEX.lock().unwrap();
        std::env::set_var(ENV_CONFIG_DIR, "/env/path");

        let override_path = PathBuf::from("/override/path");
        let result = get_app_config_dir_with_override(Some(override_path.clone()));
        assert_eq!(result, Some(override_path));

        std::env::remove_var(ENV_CONFIG_DIR);
    }
}
