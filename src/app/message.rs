// SPDX-License-Identifier: MPL-2.0
//! Top-level messages and runtime flags for the application.

use crate::error::UploadError;
use crate::ui::language_selector;
use crate::ui::notifications;
use crate::ui::upload_area;
use crate::ui::video_player;
use std::time::Instant;
use unic_langid::LanguageIdentifier;

/// Top-level messages consumed by `App::update`. The variants forward
/// lower-level component messages while keeping a single update entrypoint.
#[derive(Debug, Clone)]
pub enum Message {
    UploadArea(upload_area::Message),
    LanguageSelector(language_selector::Message),
    VideoPlayer(video_player::Message),
    Notification(notifications::NotificationMessage),
    /// Processing timer fired.
    Tick(Instant),
    /// Backend upload finished.
    UploadFinished(Result<String, UploadError>),
    /// UI language chosen in the header.
    UiLanguageSelected(LanguageIdentifier),
    /// Header theme button pressed.
    ThemeToggled,
}

/// Runtime flags passed in from the CLI or launcher to tweak startup behavior.
#[derive(Debug, Default)]
pub struct Flags {
    /// Optional locale override in BCP-47 form (e.g. `fr`, `en-US`).
    pub lang: Option<String>,
    /// Optional video to preselect on startup.
    pub file_path: Option<String>,
    /// Optional config directory override (for settings.toml).
    /// Takes precedence over `VIDEO_TRANSLATE_CONFIG_DIR` environment variable.
    pub config_dir: Option<String>,
    /// Optional upload endpoint. Setting it enables uploading.
    pub endpoint: Option<String>,
}
