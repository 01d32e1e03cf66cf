// SPDX-License-Identifier: MPL-2.0
//! Application root state and orchestration of the four wizard steps.
//!
//! The `App` struct owns the `Session`, localization, notifications and the
//! local state of each step component, and translates their events into
//! session transitions, the upload task and config persistence.

pub mod logging;
mod message;
pub mod paths;
mod persistence;
mod subscription;
mod update;
mod view;

pub use message::{Flags, Message};

use crate::config::{self, Config, UploadConfig};
use crate::domain::{language, Session};
use crate::i18n::I18n;
use crate::ui::language_selector;
use crate::ui::notifications::{self, Notification};
use crate::ui::theming::ThemeMode;
use crate::ui::upload_area;
use crate::ui::video_player;
use iced::{window, Element, Subscription, Task, Theme};
use std::fmt;
use std::path::PathBuf;
use std::time::Duration;

/// Where and how the video is sent when processing starts.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct UploadTarget {
    pub endpoint: String,
    pub timeout: Duration,
}

/// Root Iced application state.
pub struct App {
    pub i18n: I18n,
    session: Session,
    upload_area: upload_area::State,
    language_selector: language_selector::State,
    video_player: video_player::State,
    /// Toast notification manager for user feedback.
    notifications: notifications::Manager,
    theme_mode: ThemeMode,
    /// Loaded settings; preferences are written back into it.
    config: Config,
    /// Explicit config directory, `None` for the resolved default.
    config_dir: Option<PathBuf>,
    tick_interval: Duration,
    /// `None` when uploading is disabled.
    upload_target: Option<UploadTarget>,
}

impl fmt::Debug for App {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("App")
            .field("step", &self.session.step())
            .field("progress", &self.session.progress())
            .field("upload_enabled", &self.upload_target.is_some())
            .finish()
    }
}

pub const WINDOW_DEFAULT_HEIGHT: u32 = 820;
pub const WINDOW_DEFAULT_WIDTH: u32 = 1024;
pub const MIN_WINDOW_HEIGHT: u32 = 600;
pub const MIN_WINDOW_WIDTH: u32 = 720;

/// Builds the window settings.
pub fn window_settings() -> window::Settings {
    window::Settings {
        size: iced::Size::new(WINDOW_DEFAULT_WIDTH as f32, WINDOW_DEFAULT_HEIGHT as f32),
        min_size: Some(iced::Size::new(
            MIN_WINDOW_WIDTH as f32,
            MIN_WINDOW_HEIGHT as f32,
        )),
        ..window::Settings::default()
    }
}

/// Entry point used by `main.rs` to launch the Iced application loop.
pub fn run(flags: Flags) -> iced::Result {
    use std::cell::RefCell;

    // iced 0.14 wants an `Fn` boot closure; flags are consumed once.
    let boot_state = RefCell::new(Some(flags));
    let boot = move || {
        let flags = boot_state.borrow_mut().take().unwrap_or_default();
        App::new(flags)
    };

    iced::application(boot, App::update, App::view)
        .title(App::title)
        .theme(App::theme)
        .window(window_settings())
        .subscription(App::subscription)
        .run()
}

/// Uploading is on when an endpoint comes from the CLI or when the config
/// enables it.
pub fn resolve_upload_target(
    cli_endpoint: Option<String>,
    upload: &UploadConfig,
) -> Option<UploadTarget> {
    let endpoint = match cli_endpoint.filter(|e| !e.trim().is_empty()) {
        Some(endpoint) => endpoint,
        None if upload.enabled => upload.endpoint().to_string(),
        None => return None,
    };
    Some(UploadTarget {
        endpoint,
        timeout: upload.timeout(),
    })
}

impl Default for App {
    fn default() -> Self {
        let config = Config::default();
        Self {
            i18n: I18n::default(),
            session: Session::default(),
            upload_area: upload_area::State::default(),
            language_selector: language_selector::State::default(),
            video_player: video_player::State::default(),
            notifications: notifications::Manager::new(),
            theme_mode: ThemeMode::System,
            tick_interval: config.processing.tick_interval(),
            config,
            config_dir: None,
            upload_target: None,
        }
    }
}

impl App {
    /// Initializes application state from the config and the CLI flags. A
    /// video passed on the command line is validated like a dropped file.
    fn new(flags: Flags) -> (Self, Task<Message>) {
        let config_dir = flags.config_dir.map(PathBuf::from);
        let (config, config_warning) = config::load_with_override(config_dir.clone());
        let i18n = I18n::new(flags.lang, &config);

        let source = language::resolve_or(
            config.translation.source_language.as_deref(),
            language::DEFAULT_SOURCE,
        );
        let target = language::resolve_or(
            config.translation.target_language.as_deref(),
            language::DEFAULT_TARGET,
        );
        let upload_target = resolve_upload_target(flags.endpoint, &config.upload);
        if let Some(upload) = &upload_target {
            tracing::info!(endpoint = %upload.endpoint, "uploading enabled");
        }

        let mut app = App {
            i18n,
            session: Session::new(source, target, config.processing.step()),
            theme_mode: config.general.theme_mode,
            tick_interval: config.processing.tick_interval(),
            config,
            config_dir,
            upload_target,
            ..Self::default()
        };

        if let Some(key) = config_warning {
            app.notifications.push(Notification::warning(key));
        }

        let task = match flags.file_path {
            Some(path) => app.update(Message::UploadArea(upload_area::Message::Dropped(
                PathBuf::from(path),
            ))),
            None => Task::none(),
        };

        (app, task)
    }

    fn title(&self) -> String {
        let app_name = self.i18n.tr("window-title");
        match self.session.selected_file() {
            Some(file) => format!("{} - {app_name}", file.name()),
            None => app_name,
        }
    }

    fn theme(&self) -> Theme {
        self.theme_mode.iced_theme()
    }

    fn subscription(&self) -> Subscription<Message> {
        let event_sub = subscription::create_event_subscription(self.session.step());
        let progress_sub = subscription::create_progress_subscription(
            self.session.is_processing(),
            self.tick_interval,
        );
        let notification_sub =
            subscription::create_notification_subscription(self.notifications.has_notifications());

        Subscription::batch([event_sub, progress_sub, notification_sub])
    }

    fn update(&mut self, message: Message) -> Task<Message> {
        let mut ctx = update::UpdateContext {
            session: &mut self.session,
            i18n: &mut self.i18n,
            notifications: &mut self.notifications,
            upload_area: &mut self.upload_area,
            language_selector: &mut self.language_selector,
            video_player: &mut self.video_player,
            config: &mut self.config,
            config_dir: &self.config_dir,
            theme_mode: &mut self.theme_mode,
            upload_target: &self.upload_target,
        };

        match message {
            Message::UploadArea(message) => update::handle_upload_area_message(&mut ctx, message),
            Message::LanguageSelector(message) => {
                update::handle_language_selector_message(&mut ctx, message)
            }
            Message::VideoPlayer(message) => {
                update::handle_video_player_message(&mut ctx, message);
                Task::none()
            }
            Message::Notification(message) => {
                ctx.notifications.handle_message(&message);
                Task::none()
            }
            Message::Tick(_) => {
                update::handle_tick(&mut ctx);
                Task::none()
            }
            Message::UploadFinished(result) => {
                update::handle_upload_finished(&mut ctx, result);
                Task::none()
            }
            Message::UiLanguageSelected(locale) => {
                update::handle_ui_language_selected(&mut ctx, locale);
                Task::none()
            }
            Message::ThemeToggled => {
                update::handle_theme_toggled(&mut ctx);
                Task::none()
            }
        }
    }

    fn view(&self) -> Element<'_, Message> {
        view::view(view::ViewContext {
            i18n: &self.i18n,
            session: &self.session,
            upload_area: &self.upload_area,
            language_selector: &self.language_selector,
            video_player: &self.video_player,
            notifications: &self.notifications,
            theme_mode: self.theme_mode,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::session::PLACEHOLDER_RESULT_URL;
    use crate::domain::{Rejection, Step, UploadStatus};
    use crate::error::UploadError;
    use crate::ui::notifications::Severity;
    use std::fs;
    use std::time::Instant;
    use tempfile::{tempdir, TempDir};

    /// App with its config directory pointed at a fresh temp dir.
    fn app_in_temp_dir() -> (App, TempDir) {
        let dir = tempdir().expect("temp dir");
        let app = App {
            config_dir: Some(dir.path().to_path_buf()),
            ..App::default()
        };
        (app, dir)
    }

    fn write_file(dir: &TempDir, name: &str) -> PathBuf {
        let path = dir.path().join(name);
        fs::write(&path, b"fake payload").expect("write file");
        path
    }

    /// Hover then drop, like a single-file drag from a file manager.
    fn drop_file(app: &mut App, path: PathBuf) {
        let _ = app.update(Message::UploadArea(upload_area::Message::DragEntered));
        let _ = app.update(Message::UploadArea(upload_area::Message::Dropped(path)));
    }

    fn start(app: &mut App) {
        let _ = app.update(Message::LanguageSelector(
            language_selector::Message::StartPressed,
        ));
    }

    fn tick_until_done(app: &mut App) {
        for _ in 0..app.session.progress_step().ticks_to_complete() {
            let _ = app.update(Message::Tick(Instant::now()));
        }
    }

    fn visible_keys(app: &App) -> Vec<String> {
        app.notifications
            .visible()
            .map(|n| n.message_key().to_string())
            .collect()
    }

    #[test]
    fn new_starts_on_upload_step_with_defaults() {
        let dir = tempdir().expect("temp dir");
        let (app, _task) = App::new(Flags {
            config_dir: Some(dir.path().to_string_lossy().into_owned()),
            ..Flags::default()
        });
        assert_eq!(app.session.step(), Step::Upload);
        assert_eq!(app.session.source_language().code(), "en");
        assert_eq!(app.session.target_language().code(), "es");
        assert!(app.upload_target.is_none());
        assert!(!app.notifications.has_notifications());
    }

    #[test]
    fn new_with_cli_video_skips_to_languages() {
        let dir = tempdir().expect("temp dir");
        let video = write_file(&dir, "talk.webm");
        let (app, _task) = App::new(Flags {
            config_dir: Some(dir.path().to_string_lossy().into_owned()),
            file_path: Some(video.to_string_lossy().into_owned()),
            ..Flags::default()
        });
        assert_eq!(app.session.step(), Step::Languages);
        assert_eq!(app.title(), "talk.webm - VideoTranslate");
    }

    #[test]
    fn new_with_invalid_config_warns_and_uses_defaults() {
        let dir = tempdir().expect("temp dir");
        fs::write(dir.path().join("settings.toml"), "not = [valid").expect("write");
        let (app, _task) = App::new(Flags {
            config_dir: Some(dir.path().to_string_lossy().into_owned()),
            ..Flags::default()
        });
        assert_eq!(visible_keys(&app), vec!["notification-config-load-error"]);
        assert_eq!(app.config, Config::default());
    }

    #[test]
    fn new_reads_languages_and_step_from_config() {
        let dir = tempdir().expect("temp dir");
        fs::write(
            dir.path().join("settings.toml"),
            "[translation]\nsource_language = \"de\"\ntarget_language = \"ja\"\n\n[processing]\nprogress_step = 50\n",
        )
        .expect("write");
        let (app, _task) = App::new(Flags {
            config_dir: Some(dir.path().to_string_lossy().into_owned()),
            ..Flags::default()
        });
        assert_eq!(app.session.source_language().code(), "de");
        assert_eq!(app.session.target_language().code(), "ja");
        assert_eq!(app.session.progress_step().value(), 50);
    }

    #[test]
    fn cli_endpoint_enables_upload() {
        let upload = UploadConfig::default();
        assert!(resolve_upload_target(None, &upload).is_none());
        assert!(resolve_upload_target(Some("  ".into()), &upload).is_none());

        let target = resolve_upload_target(Some("http://backend/upload".into()), &upload)
            .expect("enabled by cli");
        assert_eq!(target.endpoint, "http://backend/upload");
        assert_eq!(target.timeout, upload.timeout());

        let enabled = UploadConfig {
            enabled: true,
            ..UploadConfig::default()
        };
        assert_eq!(
            resolve_upload_target(None, &enabled).map(|t| t.endpoint),
            Some(config::DEFAULT_UPLOAD_ENDPOINT.to_string())
        );
    }

    #[test]
    fn full_flow_reaches_result_with_placeholder() {
        let (mut app, dir) = app_in_temp_dir();
        drop_file(&mut app, write_file(&dir, "lecture.mp4"));
        assert_eq!(app.session.step(), Step::Languages);

        let _ = app.update(Message::LanguageSelector(
            language_selector::Message::TargetSelected(language::find("fr").expect("fr")),
        ));
        start(&mut app);
        assert_eq!(app.session.step(), Step::Processing);
        assert_eq!(app.session.progress().value(), 0);
        assert_eq!(app.session.upload(), &UploadStatus::Idle);

        tick_until_done(&mut app);
        assert_eq!(app.session.step(), Step::Result);
        assert_eq!(app.session.progress().value(), 100);
        assert!(!app.session.is_processing());
        assert_eq!(app.session.result_url(), Some(PLACEHOLDER_RESULT_URL));
        assert_eq!(app.session.target_language().code(), "fr");
    }

    #[test]
    fn files_arriving_after_acceptance_are_ignored() {
        let (mut app, dir) = app_in_temp_dir();
        drop_file(&mut app, write_file(&dir, "clip.mp4"));
        assert_eq!(app.session.step(), Step::Languages);

        // Second file of the same drop gesture.
        let _ = app.update(Message::UploadArea(upload_area::Message::Dropped(
            write_file(&dir, "notes.txt"),
        )));
        // A separate drop that slipped in before the subscription stopped.
        drop_file(&mut app, write_file(&dir, "photo.png"));
        // A dialog result that arrives late.
        let _ = app.update(Message::UploadArea(upload_area::Message::DialogClosed(Some(
            write_file(&dir, "readme.md"),
        ))));

        assert_eq!(app.session.step(), Step::Languages);
        assert_eq!(
            app.session.selected_file().map(|file| file.name()),
            Some("clip.mp4")
        );
        assert!(visible_keys(&app).is_empty(), "{:?}", visible_keys(&app));
        assert!(!app.upload_area.is_dragging());
    }

    #[test]
    fn rejected_file_keeps_step_and_shows_the_error() {
        let (mut app, dir) = app_in_temp_dir();
        drop_file(&mut app, write_file(&dir, "photo.png"));

        assert_eq!(app.session.step(), Step::Upload);
        assert_eq!(
            app.upload_area.rejection().map(Rejection::i18n_key),
            Some("notification-upload-not-video")
        );
        assert!(!app.notifications.has_notifications());

        let _ = app.update(Message::UploadArea(upload_area::Message::AlertClosed));
        assert_eq!(app.session.step(), Step::Upload);

        drop_file(&mut app, write_file(&dir, "clip.mov"));
        assert_eq!(app.session.step(), Step::Languages);
        assert!(app.upload_area.rejection().is_none());
    }

    #[test]
    fn missing_file_is_rejected() {
        let (mut app, dir) = app_in_temp_dir();
        drop_file(&mut app, dir.path().join("gone.mp4"));
        assert_eq!(app.session.step(), Step::Upload);
        assert_eq!(
            app.upload_area.rejection().map(Rejection::i18n_key),
            Some("notification-upload-not-found")
        );
    }

    #[test]
    fn stray_tick_outside_processing_is_ignored() {
        let (mut app, _dir) = app_in_temp_dir();
        let _ = app.update(Message::Tick(Instant::now()));
        assert_eq!(app.session.step(), Step::Upload);
        assert_eq!(app.session.progress().value(), 0);
    }

    #[test]
    fn start_with_upload_enabled_marks_in_flight() {
        let (mut app, dir) = app_in_temp_dir();
        app.upload_target = resolve_upload_target(
            Some("http://127.0.0.1:9/upload".into()),
            &UploadConfig::default(),
        );
        drop_file(&mut app, write_file(&dir, "clip.mp4"));
        start(&mut app);
        assert_eq!(app.session.upload(), &UploadStatus::InFlight);
    }

    #[test]
    fn upload_url_received_during_processing_becomes_result() {
        let (mut app, dir) = app_in_temp_dir();
        drop_file(&mut app, write_file(&dir, "clip.mp4"));
        start(&mut app);

        let url = "https://cdn.example.org/out.mp4".to_string();
        let _ = app.update(Message::UploadFinished(Ok(url.clone())));
        tick_until_done(&mut app);

        assert_eq!(app.session.result_url(), Some(url.as_str()));
        assert!(!app.notifications.has_notifications());
    }

    #[test]
    fn late_upload_url_replaces_placeholder_with_toast() {
        let (mut app, dir) = app_in_temp_dir();
        drop_file(&mut app, write_file(&dir, "clip.mp4"));
        start(&mut app);
        tick_until_done(&mut app);
        assert_eq!(app.session.result_url(), Some(PLACEHOLDER_RESULT_URL));

        let _ = app.update(Message::UploadFinished(Ok("https://cdn/late.mp4".into())));
        assert_eq!(app.session.result_url(), Some("https://cdn/late.mp4"));
        assert_eq!(visible_keys(&app), vec!["notification-upload-complete"]);
    }

    #[test]
    fn upload_failure_warns_and_keeps_placeholder() {
        let (mut app, dir) = app_in_temp_dir();
        drop_file(&mut app, write_file(&dir, "clip.mp4"));
        start(&mut app);

        let error = UploadError::Status {
            code: 500,
            message: Some("boom".into()),
        };
        let _ = app.update(Message::UploadFinished(Err(error.clone())));
        tick_until_done(&mut app);

        assert_eq!(app.session.result_url(), Some(PLACEHOLDER_RESULT_URL));
        assert_eq!(app.session.upload(), &UploadStatus::Failed(error));
        let visible: Vec<_> = app.notifications.visible().collect();
        assert_eq!(visible[0].severity(), Severity::Warning);
        assert_eq!(visible[0].message_key(), "notification-upload-error-status");
    }

    #[test]
    fn theme_toggle_cycles_and_persists() {
        let (mut app, dir) = app_in_temp_dir();
        app.theme_mode = ThemeMode::Light;
        let _ = app.update(Message::ThemeToggled);
        assert_eq!(app.theme_mode, ThemeMode::Dark);
        assert_eq!(app.theme(), Theme::Dark);

        let (saved, _) = config::load_with_override(Some(dir.path().to_path_buf()));
        assert_eq!(saved.general.theme_mode, ThemeMode::Dark);
    }

    #[test]
    fn ui_language_change_persists_and_translates() {
        let (mut app, dir) = app_in_temp_dir();
        let fr: unic_langid::LanguageIdentifier = "fr".parse().expect("locale");
        let _ = app.update(Message::UiLanguageSelected(fr.clone()));
        assert_eq!(app.i18n.current_locale(), &fr);
        assert_eq!(
            app.i18n.tr("upload-invalid-type"),
            "Veuillez téléverser un fichier vidéo"
        );

        let (saved, _) = config::load_with_override(Some(dir.path().to_path_buf()));
        assert_eq!(saved.general.language.as_deref(), Some("fr"));
    }

    #[test]
    fn player_messages_only_touch_local_state() {
        let (mut app, dir) = app_in_temp_dir();
        drop_file(&mut app, write_file(&dir, "clip.mp4"));
        start(&mut app);
        tick_until_done(&mut app);

        let _ = app.update(Message::VideoPlayer(video_player::Message::TabSelected(
            video_player::Tab::Original,
        )));
        let _ = app.update(Message::VideoPlayer(video_player::Message::DownloadPressed));
        assert_eq!(app.video_player.tab, video_player::Tab::Original);
        assert_eq!(app.session.step(), Step::Result);
    }
}
