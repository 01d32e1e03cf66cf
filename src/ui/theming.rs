// SPDX-License-Identifier: MPL-2.0
//! Light, dark, or follow the OS.

use iced::Theme;
use serde::{Deserialize, Serialize};

/// Stored in `settings.toml` as `light`, `dark` or `system`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ThemeMode {
    Light,
    Dark,
    #[default]
    System,
}

impl ThemeMode {
    /// `System` asks the OS each time and falls back to light when the
    /// OS cannot tell.
    #[must_use]
    pub fn is_dark(self) -> bool {
        match self {
            Self::Dark => true,
            Self::Light => false,
            Self::System => dark_light::detect().is_ok_and(|mode| matches!(mode, dark_light::Mode::Dark)),
        }
    }

    #[must_use]
    pub fn iced_theme(self) -> Theme {
        if self.is_dark() {
            Theme::Dark
        } else {
            Theme::Light
        }
    }

    /// Order used by the header button.
    #[must_use]
    pub fn next(self) -> Self {
        match self {
            Self::Light => Self::Dark,
            Self::Dark => Self::System,
            Self::System => Self::Light,
        }
    }

    #[must_use]
    pub fn label_key(self) -> &'static str {
        match self {
            Self::Light => "header-theme-light",
            Self::Dark => "header-theme-dark",
            Self::System => "header-theme-system",
        }
    }
}
