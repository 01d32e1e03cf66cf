// SPDX-License-Identifier: MPL-2.0
//! User settings persisted as `settings.toml` in the config directory
//! (see [`crate::app::paths`] for how that directory is chosen).
//!
//! ```toml
//! [general]
//! language = "fr"
//! theme_mode = "dark"
//!
//! [translation]
//! source_language = "en"
//! target_language = "ja"
//!
//! [processing]
//! tick_interval_ms = 500
//! progress_step = 5
//!
//! [upload]
//! enabled = true
//! endpoint = "http://localhost:5000/upload"
//! timeout_secs = 300
//! ```
//!
//! Every key is optional. A missing file yields the defaults silently; an
//! unreadable one yields the defaults plus a warning key for a toast.

pub mod defaults;

pub use defaults::*;

use crate::app::paths;
use crate::domain::language;
use crate::domain::ProgressStep;
use crate::error::{Error, Result};
use crate::ui::theming::ThemeMode;
use serde::{Deserialize, Deserializer, Serialize};
use std::fs;
use std::path::{Path, PathBuf};
use std::time::Duration;

const CONFIG_FILE: &str = "settings.toml";

/// Warning key returned by [`load_with_override`] when the file exists but cannot be used.
const LOAD_WARNING_KEY: &str = "notification-config-load-error";

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Config {
    pub general: GeneralConfig,
    pub translation: TranslationConfig,
    pub processing: ProcessingConfig,
    pub upload: UploadConfig,
}

/// Header preferences.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct GeneralConfig {
    /// UI locale such as `en-US`; unset means "follow the OS".
    #[serde(skip_serializing_if = "Option::is_none")]
    pub language: Option<String>,
    #[serde(deserialize_with = "theme_mode_any_case")]
    pub theme_mode: ThemeMode,
}

/// Catalog codes preselected in the Languages step.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct TranslationConfig {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub source_language: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub target_language: Option<String>,
}

impl Default for TranslationConfig {
    fn default() -> Self {
        Self {
            source_language: Some(language::DEFAULT_SOURCE.to_owned()),
            target_language: Some(language::DEFAULT_TARGET.to_owned()),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct ProcessingConfig {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub tick_interval_ms: Option<u64>,
    /// Percentage points per tick.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub progress_step: Option<u8>,
}

impl Default for ProcessingConfig {
    fn default() -> Self {
        Self {
            tick_interval_ms: Some(DEFAULT_TICK_INTERVAL_MS),
            progress_step: Some(DEFAULT_PROGRESS_STEP),
        }
    }
}

impl ProcessingConfig {
    #[must_use]
    pub fn tick_interval(&self) -> Duration {
        let millis = self.tick_interval_ms.unwrap_or(DEFAULT_TICK_INTERVAL_MS);
        Duration::from_millis(millis.clamp(MIN_TICK_INTERVAL_MS, MAX_TICK_INTERVAL_MS))
    }

    /// Out-of-range values are clamped by [`ProgressStep::new`].
    #[must_use]
    pub fn step(&self) -> ProgressStep {
        ProgressStep::new(self.progress_step.unwrap_or(DEFAULT_PROGRESS_STEP))
    }
}

/// Translation backend. Off unless `enabled` is set or `--endpoint` is
/// passed.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct UploadConfig {
    pub enabled: bool,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub endpoint: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub timeout_secs: Option<u64>,
}

impl Default for UploadConfig {
    fn default() -> Self {
        Self {
            enabled: false,
            endpoint: Some(DEFAULT_UPLOAD_ENDPOINT.to_owned()),
            timeout_secs: Some(DEFAULT_UPLOAD_TIMEOUT_SECS),
        }
    }
}

impl UploadConfig {
    /// A blank endpoint counts as unset.
    #[must_use]
    pub fn endpoint(&self) -> &str {
        match self.endpoint.as_deref().map(str::trim) {
            Some(endpoint) if !endpoint.is_empty() => endpoint,
            _ => DEFAULT_UPLOAD_ENDPOINT,
        }
    }

    #[must_use]
    pub fn timeout(&self) -> Duration {
        let secs = self.timeout_secs.unwrap_or(DEFAULT_UPLOAD_TIMEOUT_SECS);
        Duration::from_secs(secs.clamp(MIN_UPLOAD_TIMEOUT_SECS, MAX_UPLOAD_TIMEOUT_SECS))
    }
}

fn theme_mode_any_case<'de, D>(deserializer: D) -> std::result::Result<ThemeMode, D::Error>
where
    D: Deserializer<'de>,
{
    let raw = String::deserialize(deserializer)?;
    let lowered = raw.to_ascii_lowercase();
    ThemeMode::deserialize(serde::de::value::StrDeserializer::<D::Error>::new(&lowered))
}

fn config_file(base_dir: Option<PathBuf>) -> Option<PathBuf> {
    paths::get_app_config_dir_with_override(base_dir).map(|dir| dir.join(CONFIG_FILE))
}

/// Reads the settings from `base_dir`, or from the resolved config
/// directory when `None`.
///
/// Never fails: the second element is an i18n warning key when the file
/// existed but could not be used.
pub fn load_with_override(base_dir: Option<PathBuf>) -> (Config, Option<String>) {
    let Some(path) = config_file(base_dir).filter(|path| path.exists()) else {
        return (Config::default(), None);
    };

    match load_from_path(&path) {
        Ok(config) => {
            tracing::debug!(path = %path.display(), "settings loaded");
            (config, None)
        }
        Err(err) => {
            tracing::warn!(path = %path.display(), %err, "ignoring settings file");
            (Config::default(), Some(LOAD_WARNING_KEY.to_owned()))
        }
    }
}

pub fn load_from_path(path: &Path) -> Result<Config> {
    let raw = fs::read_to_string(path)?;
    Ok(toml::from_str(&raw)?)
}

/// Writes to `base_dir` when given. Without any config directory there is
/// nowhere to write and this is a no-op.
pub fn save_with_override(config: &Config, base_dir: Option<PathBuf>) -> Result<()> {
    match config_file(base_dir) {
        Some(path) => save_to_path(config, &path),
        None => {
            tracing::debug!("no config directory, settings not saved");
            Ok(())
        }
    }
}

/// Creates missing parent directories.
pub fn save_to_path(config: &Config, path: &Path) -> Result<()> {
    let serialized = toml::to_string_pretty(config).map_err(Error::from)?;
    if let Some(dir) = path.parent() {
        fs::create_dir_all(dir)?;
    }
    fs::write(path, serialized)?;
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::tempdir;

    fn write_settings(dir: &Path, body: &str) -> PathBuf {
        let path = dir.join(CONFIG_FILE);
        fs::write(&path, body).expect("write settings");
        path
    }

    #[test]
    fn defaults_match_the_documented_values() {
        let config = Config::default();
        assert_eq!(config.general.language, None);
        assert_eq!(config.general.theme_mode, ThemeMode::System);
        assert_eq!(config.translation.source_language.as_deref(), Some("en"));
        assert_eq!(config.translation.target_language.as_deref(), Some("es"));
        assert_eq!(config.processing.tick_interval(), Duration::from_millis(500));
        assert_eq!(config.processing.step().value(), 5);
        assert!(!config.upload.enabled);
        assert_eq!(config.upload.endpoint(), "http://localhost:5000/upload");
    }

    #[test]
    fn every_section_survives_a_save_and_reload() {
        let config = Config {
            general: GeneralConfig {
                language: Some("fr".into()),
                theme_mode: ThemeMode::Dark,
            },
            translation: TranslationConfig {
                source_language: Some("de".into()),
                target_language: Some("ja".into()),
            },
            processing: ProcessingConfig {
                tick_interval_ms: Some(250),
                progress_step: Some(10),
            },
            upload: UploadConfig {
                enabled: true,
                endpoint: Some("http://translate.local/upload".into()),
                timeout_secs: Some(60),
            },
        };
        let dir = tempdir().expect("temp dir");
        let path = dir.path().join("a").join("b").join(CONFIG_FILE);

        save_to_path(&config, &path).expect("save");
        assert_eq!(load_from_path(&path).expect("load"), config);
    }

    #[test]
    fn malformed_toml_is_a_config_error() {
        let dir = tempdir().expect("temp dir");
        let path = write_settings(dir.path(), "not = valid = toml");

        let err = load_from_path(&path).expect_err("must fail");
        assert!(matches!(err, Error::Config(_)), "{err:?}");
    }

    #[test]
    fn broken_file_falls_back_to_defaults_with_warning() {
        let dir = tempdir().expect("temp dir");
        write_settings(dir.path(), "[general\ntheme_mode = 1");

        let (config, warning) = load_with_override(Some(dir.path().to_path_buf()));
        assert_eq!(config, Config::default());
        assert_eq!(warning.as_deref(), Some(LOAD_WARNING_KEY));
    }

    #[test]
    fn missing_file_gives_defaults_without_warning() {
        let dir = tempdir().expect("temp dir");
        let (config, warning) = load_with_override(Some(dir.path().to_path_buf()));
        assert_eq!(config, Config::default());
        assert_eq!(warning, None);
    }

    #[test]
    fn save_with_override_writes_where_load_reads() {
        let dir = tempdir().expect("temp dir");
        let mut config = Config::default();
        config.translation.target_language = Some("ko".into());

        save_with_override(&config, Some(dir.path().to_path_buf())).expect("save");
        let (reloaded, warning) = load_with_override(Some(dir.path().to_path_buf()));
        assert_eq!(warning, None);
        assert_eq!(reloaded.translation.target_language.as_deref(), Some("ko"));
    }

    #[test]
    fn absent_keys_take_their_defaults() {
        let dir = tempdir().expect("temp dir");
        let path = write_settings(dir.path(), "[upload]\nenabled = true\n");

        let loaded = load_from_path(&path).expect("load");
        assert!(loaded.upload.enabled);
        assert_eq!(loaded.upload.endpoint(), DEFAULT_UPLOAD_ENDPOINT);
        assert_eq!(loaded.upload.timeout_secs, Some(DEFAULT_UPLOAD_TIMEOUT_SECS));
        assert_eq!(loaded.processing, ProcessingConfig::default());
        assert_eq!(loaded.translation, TranslationConfig::default());
    }

    #[test]
    fn accessors_clamp_out_of_range_values() {
        let processing = ProcessingConfig {
            tick_interval_ms: Some(1),
            progress_step: Some(0),
        };
        assert_eq!(
            processing.tick_interval(),
            Duration::from_millis(MIN_TICK_INTERVAL_MS)
        );
        assert_eq!(processing.step().value(), MIN_PROGRESS_STEP);

        let upload = UploadConfig {
            timeout_secs: Some(u64::MAX),
            endpoint: Some("   ".into()),
            ..UploadConfig::default()
        };
        assert_eq!(upload.timeout(), Duration::from_secs(MAX_UPLOAD_TIMEOUT_SECS));
        assert_eq!(upload.endpoint(), DEFAULT_UPLOAD_ENDPOINT);
    }

    #[test]
    fn theme_mode_ignores_case_but_rejects_unknown_names() {
        let config: Config = toml::from_str("[general]\ntheme_mode = \"DARK\"\n").expect("parse");
        assert_eq!(config.general.theme_mode, ThemeMode::Dark);
        assert!(toml::from_str::<Config>("[general]\ntheme_mode = \"sepia\"\n").is_err());
    }
}
