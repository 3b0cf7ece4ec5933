// SPDX-License-Identifier: MPL-2.0
//! Config directory resolution.
//!
//! The directory holding `settings.toml` is resolved in this order:
//! 1. Explicit override passed to [`get_app_config_dir_with_override`] (tests)
//! 2. `--config-dir` CLI argument, registered with [`init_cli_overrides`]
//! 3. `YADADRI360_CONFIG_DIR` environment variable
//! 4. Platform config directory from `dirs`, with the app name appended

use std::path::PathBuf;
use std::sync::OnceLock;

/// Application name used for directory naming.
const APP_NAME: &str = "Yadadri360";

/// Environment variable to override the config directory.
pub const ENV_CONFIG_DIR: &str = "YADADRI360_CONFIG_DIR";

static CLI_CONFIG_DIR: OnceLock<Option<PathBuf>> = OnceLock::new();

/// Registers the `--config-dir` argument.
///
/// Only the first call has an effect; returns `false` when an override was
/// already registered.
pub fn init_cli_overrides(config_dir: Option<String>) -> bool {
    CLI_CONFIG_DIR.set(config_dir.map(PathBuf::from)).is_ok()
}

fn get_cli_config_dir() -> Option<PathBuf> {
    CLI_CONFIG_DIR.get().and_then(Clone::clone)
}

/// Returns the application config directory.
///
/// Linux: `~/.config/Yadadri360/`, macOS: `~/Library/Application Support/Yadadri360/`,
/// Windows: `%APPDATA%\Yadadri360\`. `None` when no home directory is known.
pub fn get_app_config_dir() -> Option<PathBuf> {
    get_app_config_dir_with_override(None)
}

/// Returns the application config directory, preferring `override_path`.
pub fn get_app_config_dir_with_override(override_path: Option<PathBuf>) -> Option<PathBuf> {
    if let Some(path) = override_path {
        return Some(path);
    }

    if let Some(path) = get_cli_config_dir() {
        return Some(path);
    }

    if let Ok(env_path) = std::env::var(ENV_CONFIG_DIR) {
        if !env_path.is_empty() {
            return Some(PathBuf::from(env_path));
        }
    }

    dirs::config_dir().map(|mut path| {
        path.push(APP_NAME);
        path
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::sync::Mutex;

    // Tests below mutate process-wide environment variables.
    static ENV_MUTEX: Mutex<()> = Mutex::new(());

    #[test]
    fn platform_default_ends_with_app_name() {
        let _lock = ENV_MUTEX.lock().unwrap();
        std::env::remove_var(ENV_CONFIG_DIR);

        if let Some(path) = get_app_config_dir() {
            assert!(path.ends_with(APP_NAME));
        }
    }

    #[test]
    fn explicit_override_wins() {
        let override_path = PathBuf::from("/srv/yadadri/config");
        assert_eq!(
            get_app_config_dir_with_override(Some(override_path.clone())),
            Some(override_path)
        );
    }

    #[test]
    fn env_var_is_used_when_set() {
        let _lock = ENV_MUTEX.lock().unwrap();
        std::env::set_var(ENV_CONFIG_DIR, "/tmp/yadadri360-env");

        let resolved = get_app_config_dir();

        std::env::remove_var(ENV_CONFIG_DIR);
        assert_eq!(resolved, Some(PathBuf::from("/tmp/yadadri360-env")));
    }

    #[test]
    fn empty_env_var_is_ignored() {
        let _lock = ENV_MUTEX.lock().unwrap();
        std::env::set_var(ENV_CONFIG_DIR, "");

        let resolved = get_app_config_dir();

        std::env::remove_var(ENV_CONFIG_DIR);
        assert_ne!(resolved, Some(PathBuf::new()));
    }
}
