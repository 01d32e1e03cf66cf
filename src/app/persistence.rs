// SPDX-License-Identifier: MPL-2.0
//! Preference persistence.
//!
//! Only the UI language and the theme mode are written back; every other
//! field of the loaded config is saved unchanged.

use crate::config::{self, Config};
use crate::i18n::I18n;
use crate::ui::notifications::{self, Notification};
use crate::ui::theming::ThemeMode;
use std::path::PathBuf;

/// What gets written to `settings.toml`.
pub struct PreferencesContext<'a> {
    pub config: &'a mut Config,
    pub config_dir: Option<PathBuf>,
    pub i18n: &'a I18n,
    pub theme_mode: ThemeMode,
    pub notifications: &'a mut notifications::Manager,
}

/// Copies the current preferences into the config and saves it.
///
/// A failed save is logged and surfaced as a warning toast; the in-memory
/// config keeps the new values either way.
pub fn persist_preferences(ctx: PreferencesContext<'_>) {
    ctx.config.general.language = Some(ctx.i18n.current_locale().to_string());
    ctx.config.general.theme_mode = ctx.theme_mode;

    match config::save_with_override(ctx.config, ctx.config_dir) {
        Ok(()) => tracing::debug!(
            locale = %ctx.i18n.current_locale(),
            theme = ?ctx.theme_mode,
            "preferences saved"
        ),
        Err(err) => {
            tracing::warn!(%err, "failed to save preferences");
            ctx.notifications
                .push(Notification::warning("notification-config-save-error"));
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::tempdir;

    #[test]
    fn saves_locale_and_theme() {
        let dir = tempdir().expect("tempdir");
        let mut config = Config::default();
        let mut i18n = I18n::default();
        i18n.set_locale("fr".parse().expect("locale"));
        let mut manager = notifications::Manager::new();

        persist_preferences(PreferencesContext {
            config: &mut config,
            config_dir: Some(dir.path().to_path_buf()),
            i18n: &i18n,
            theme_mode: ThemeMode::Dark,
            notifications: &mut manager,
        });

        assert!(!manager.has_notifications());
        let (reloaded, warning) = config::load_with_override(Some(dir.path().to_path_buf()));
        assert!(warning.is_none());
        assert_eq!(reloaded.general.language.as_deref(), Some("fr"));
        assert_eq!(reloaded.general.theme_mode, ThemeMode::Dark);
    }

    #[test]
    fn save_failure_warns() {
        let dir = tempdir().expect("tempdir");
        // A regular file where the config directory should be.
        let blocker = dir.path().join("not-a-dir");
        std::fs::write(&blocker, b"x").expect("write");

        let mut config = Config::default();
        let i18n = I18n::default();
        let mut manager = notifications::Manager::new();

        persist_preferences(PreferencesContext {
            config: &mut config,
            config_dir: Some(blocker),
            i18n: &i18n,
            theme_mode: ThemeMode::Light,
            notifications: &mut manager,
        });

        let visible: Vec<_> = manager.visible().collect();
        assert_eq!(visible.len(), 1);
        assert_eq!(visible[0].message_key(), "notification-config-save-error");
        assert_eq!(config.general.theme_mode, ThemeMode::Light);
    }
}
