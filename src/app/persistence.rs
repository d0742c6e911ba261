// SPDX-License-Identifier: MPL-2.0
//! Writes preferences and session state to disk.
//!
//! Both helpers are no-ops under `cfg(test)` so unit tests driving
//! `App::update` never touch the user's files.

use super::persisted_state::AppState;
use crate::config;
use crate::ui::theming::ThemeMode;

/// Stores the theme in `settings.toml`, keeping every other setting.
///
/// Returns an i18n warning key when the file could not be written.
pub fn persist_theme(theme_mode: ThemeMode) -> Option<String> {
    if cfg!(test) {
        return None;
    }

    let (mut cfg, _) = config::load();
    cfg.general.theme_mode = Some(theme_mode);

    match config::save(&cfg) {
        Ok(()) => {
            tracing::debug!(?theme_mode, "theme saved");
            None
        }
        Err(err) => {
            tracing::warn!("cannot save config: {err}");
            Some("notification-config-save-error".to_string())
        }
    }
}

/// Stores the last open/save directories.
pub fn persist_app_state(state: &AppState) -> Option<String> {
    if cfg!(test) {
        return None;
    }
    state.save()
}
