// SPDX-License-Identifier: MPL-2.0
//! Centralized path management for the config and data directories.
//!
//! # Path Resolution Order
//!
//! 1. **Explicit override** - parameter to the `_with_override()` functions (tests)
//! 2. **CLI arguments** (`--config-dir`, `--data-dir`) - set via [`init_cli_overrides`]
//! 3. **Environment variables** (`ICED_SHRINK_CONFIG_DIR`, `ICED_SHRINK_DATA_DIR`)
//! 4. **Platform default** - via `dirs`, with the application name appended

use std::path::PathBuf;
use std::sync::OnceLock;

/// Application name used for directory naming.
const APP_NAME: &str = "IcedShrink";

/// Environment variable to override the data directory.
pub const ENV_DATA_DIR: &str = "ICED_SHRINK_DATA_DIR";

/// Environment variable to override the config directory.
pub const ENV_CONFIG_DIR: &str = "ICED_SHRINK_CONFIG_DIR";

static CLI_DATA_DIR: OnceLock<Option<PathBuf>> = OnceLock::new();
static CLI_CONFIG_DIR: OnceLock<Option<PathBuf>> = OnceLock::new();

/// Records the `--data-dir` / `--config-dir` CLI values.
///
/// Only the first call has an effect; returns `false` when the overrides
/// were already initialized.
pub fn init_cli_overrides(data_dir: Option<String>, config_dir: Option<String>) -> bool {
    let data_set = CLI_DATA_DIR.set(data_dir.map(PathBuf::from)).is_ok();
    let config_set = CLI_CONFIG_DIR.set(config_dir.map(PathBuf::from)).is_ok();
    data_set && config_set
}

/// Which of the two application directories is being resolved.
#[derive(Debug, Clone, Copy)]
enum DirKind {
    Data,
    Config,
}

impl DirKind {
    fn cli_override(self) -> Option<PathBuf> {
        let cell = match self {
            DirKind::Data => &CLI_DATA_DIR,
            DirKind::Config => &CLI_CONFIG_DIR,
        };
        cell.get().and_then(Clone::clone)
    }

    fn env_var(self) -> &'static str {
        match self {
            DirKind::Data => ENV_DATA_DIR,
            DirKind::Config => ENV_CONFIG_DIR,
        }
    }

    fn platform_base(self) -> Option<PathBuf> {
        match self {
            DirKind::Data => dirs::data_dir(),
            DirKind::Config => dirs::config_dir(),
        }
    }

    fn resolve(self, override_path: Option<PathBuf>) -> Option<PathBuf> {
        if let Some(path) = override_path {
            return Some(path);
        }

        if let Some(path) = self.cli_override() {
            return Some(path);
        }

        // Empty values are treated as unset.
        if let Ok(env_path) = std::env::var(self.env_var()) {
            if !env_path.is_empty() {
                return Some(PathBuf::from(env_path));
            }
        }

        self.platform_base().map(|mut path| {
            path.push(APP_NAME);
            path
        })
    }
}

/// Returns the application data directory (holds `state.cbor`).
///
/// Platform defaults:
/// - Linux: `~/.local/share/IcedShrink/`
/// - macOS: `~/Library/Application Support/IcedShrink/`
/// - Windows: `C:\Users\<User>\AppData\Roaming\IcedShrink\`
pub fn get_app_data_dir() -> Option<PathBuf> {
    get_app_data_dir_with_override(None)
}

/// Returns the application data directory, preferring `override_path`.
pub fn get_app_data_dir_with_override(override_path: Option<PathBuf>) -> Option<PathBuf> {
    DirKind::Data.resolve(override_path)
}

/// Returns the application config directory (holds `settings.toml`).
///
/// Platform defaults:
/// - Linux: `~/.config/IcedShrink/`
/// - macOS: `~/Library/Application Support/IcedShrink/`
/// - Windows: `C:\Users\<User>\AppData\Roaming\IcedShrink\`
pub fn get_app_config_dir() -> Option<PathBuf> {
    get_app_config_dir_with_override(None)
}

/// Returns the application config directory, preferring `override_path`.
pub fn get_app_config_dir_with_override(override_path: Option<PathBuf>) -> Option<PathBuf> {
    DirKind::Config.resolve(override_path)
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::sync::Mutex;

    // Serializes tests that touch process-wide environment variables.
    static ENV_MUTEX: Mutex<()> = Mutex::new(());

    #[test]
    fn config_dir_default_contains_app_name() {
        let _lock = ENV_MUTEX.lock().unwrap();
        std::env::remove_var(ENV_CONFIG_DIR);

        if let Some(path) = get_app_config_dir() {
            assert!(path.to_string_lossy().contains(APP_NAME));
            assert!(path.is_absolute());
        }
    }

    #[test]
    fn override_path_takes_precedence() {
        let override_path = PathBuf::from("/custom/config/path");
        assert_eq!(
            get_app_config_dir_with_override(Some(override_path.clone())),
            Some(override_path.clone())
        );
        assert_eq!(
            get_app_data_dir_with_override(Some(override_path.clone())),
            Some(override_path)
        );
    }

    #[test]
    fn env_var_overrides_default_data_dir() {
        let _lock = ENV_MUTEX.lock().unwrap();
        std::env::set_var(ENV_DATA_DIR, "/test/data/dir");

        assert_eq!(get_app_data_dir(), Some(PathBuf::from("/test/data/dir")));

        std::env::remove_var(ENV_DATA_DIR);
    }

    #[test]
    fn empty_env_var_uses_default() {
        let _lock = ENV_MUTEX.lock().unwrap();
        std::env::set_var(ENV_CONFIG_DIR, "");

        if let Some(path) = get_app_config_dir() {
            assert!(path.to_string_lossy().contains(APP_NAME));
        }

        std::env::remove_var(ENV_CONFIG_DIR);
    }

    #[test]
    fn override_path_takes_precedence_over_env_var() {
        let _lock = ENV_MUTEX.lock().unwrap();
        std::env::set_var(ENV_DATA_DIR, "/env/path");

        let override_path = PathBuf::from("/override/path");
        assert_eq!(
            get_app_data_dir_with_override(Some(override_path.clone())),
            Some(override_path)
        );

        std::env::remove_var(ENV_DATA_DIR);
    }
}
