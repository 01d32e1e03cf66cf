// SPDX-License-Identifier: MPL-2.0
//! Where `settings.toml` lives.
//!
//! The first of these that is set wins: an explicit path passed by the
//! caller, `--config-dir`, `$VIDEO_TRANSLATE_CONFIG_DIR`, then the platform
//! config directory with a `VideoTranslate` subfolder.

use std::path::PathBuf;
use std::sync::OnceLock;

const APP_DIR_NAME: &str = "VideoTranslate";

pub const ENV_CONFIG_DIR: &str = "VIDEO_TRANSLATE_CONFIG_DIR";

static CLI_CONFIG_DIR: OnceLock<Option<PathBuf>> = OnceLock::new();

/// Records the `--config-dir` value. Only the first call has an effect.
pub fn init_cli_overrides(config_dir: Option<String>) {
    if CLI_CONFIG_DIR.set(config_dir.map(PathBuf::from)).is_err() {
        tracing::debug!("--config-dir already recorded, ignoring");
    }
}

/// Resolves the config directory, preferring `override_path` when given.
/// `None` only when the platform has no config directory at all.
pub fn get_app_config_dir_with_override(override_path: Option<PathBuf>) -> Option<PathBuf> {
    override_path
        .or_else(|| CLI_CONFIG_DIR.get().cloned().flatten())
        .or_else(env_config_dir)
        .or_else(|| dirs::config_dir().map(|base| base.join(APP_DIR_NAME)))
}

fn env_config_dir() -> Option<PathBuf> {
    std::env::var_os(ENV_CONFIG_DIR)
        .filter(|value| !value.is_empty())
        .map(PathBuf::from)
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::sync::Mutex;

    // Tests below touch the process environment.
    static ENV_LOCK: Mutex<()> = Mutex::new(());

    #[test]
    fn explicit_path_beats_everything() {
        let _guard = ENV_LOCK.lock().unwrap();
        std::env::set_var(ENV_CONFIG_DIR, "/from/env");

        let explicit = PathBuf::from("/from/caller");
        assert_eq!(
            get_app_config_dir_with_override(Some(explicit.clone())),
            Some(explicit)
        );

        std::env::remove_var(ENV_CONFIG_DIR);
    }

    #[test]
    fn environment_variable_is_used_when_set() {
        let _guard = ENV_LOCK.lock().unwrap();
        std::env::set_var(ENV_CONFIG_DIR, "/from/env");

        assert_eq!(get_app_config_dir_with_override(None), Some(PathBuf::from("/from/env")));

        std::env::remove_var(ENV_CONFIG_DIR);
    }

    #[test]
    fn empty_environment_variable_falls_through_to_platform_dir() {
        let _guard = ENV_LOCK.lock().unwrap();
        std::env::set_var(ENV_CONFIG_DIR, "");

        if let Some(path) = get_app_config_dir_with_override(None) {
            assert!(path.ends_with(APP_DIR_NAME), "{}", path.display());
        }

        std::env::remove_var(ENV_CONFIG_DIR);
    }
}
