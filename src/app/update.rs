// SPDX-License-Identifier: MPL-2.0
//! Update logic and message handlers for the application.
//!
//! Component messages are run through the component's own `update`, and the
//! resulting `Event` is applied to the session here. All step transitions
//! go through `Session`, which refuses out-of-order requests.

use super::persistence::{self, PreferencesContext};
use super::{Message, UploadTarget};
use crate::config::Config;
use crate::domain::{Rejection, Session, Step, TickOutcome, VideoFile};
use crate::error::UploadError;
use crate::i18n::I18n;
use crate::infrastructure::{upload_video, UploadRequest};
use crate::ui::language_selector::{self, Event as LanguageSelectorEvent};
use crate::ui::notifications::{self, Notification};
use crate::ui::theming::ThemeMode;
use crate::ui::upload_area::{self, Event as UploadAreaEvent};
use crate::ui::video_player::{self, Event as VideoPlayerEvent};
use iced::Task;
use std::path::PathBuf;
use unic_langid::LanguageIdentifier;

/// Prefix shared by the rejection notifications.
/// Mutable view of the application handed to each handler.
pub struct UpdateContext<'a> {
    pub session: &'a mut Session,
    pub i18n: &'a mut I18n,
    pub notifications: &'a mut notifications::Manager,
    pub upload_area: &'a mut upload_area::State,
    pub language_selector: &'a mut language_selector::State,
    pub video_player: &'a mut video_player::State,
    pub config: &'a mut Config,
    pub config_dir: &'a Option<PathBuf>,
    pub theme_mode: &'a mut ThemeMode,
    pub upload_target: &'a Option<UploadTarget>,
}

impl UpdateContext<'_> {
    fn persist_preferences(&mut self) {
        persistence::persist_preferences(PreferencesContext {
            config: &mut *self.config,
            config_dir: self.config_dir.clone(),
            i18n: &*self.i18n,
            theme_mode: *self.theme_mode,
            notifications: &mut *self.notifications,
        });
    }
}

pub fn handle_upload_area_message(
    ctx: &mut UpdateContext<'_>,
    message: upload_area::Message,
) -> Task<Message> {
    // Files arriving after the upload step (rest of a multi-file drop, a late
    // dialog result) only reset the drop zone.
    let message = match message {
        upload_area::Message::Dropped(path) if ctx.session.step() != Step::Upload => {
            tracing::debug!(path = %path.display(), "file ignored outside the upload step");
            upload_area::Message::DragLeft
        }
        upload_area::Message::DialogClosed(Some(path)) if ctx.session.step() != Step::Upload => {
            tracing::debug!(path = %path.display(), "file ignored outside the upload step");
            upload_area::Message::DialogClosed(None)
        }
        other => other,
    };

    match upload_area::update(ctx.upload_area, message) {
        UploadAreaEvent::None => Task::none(),
        UploadAreaEvent::OpenDialog { directory } => {
            handle_open_file_dialog(ctx.i18n.tr("upload-dialog-filter"), directory)
        }
        UploadAreaEvent::Accepted(file) => {
            handle_file_accepted(ctx, file);
            Task::none()
        }
        UploadAreaEvent::Rejected(rejection) => handle_file_rejected(ctx, &rejection),
    }
}

/// Opens the native file dialog; its result comes back to the upload area.
pub fn handle_open_file_dialog(filter_name: String, directory: Option<PathBuf>) -> Task<Message> {
    Task::perform(upload_area::pick_video(filter_name, directory), |path| {
        Message::UploadArea(upload_area::Message::DialogClosed(path))
    })
}

pub fn handle_file_accepted(ctx: &mut UpdateContext<'_>, file: VideoFile) {
    let name = file.name().to_owned();
    match ctx.session.accept_file(file) {
        Ok(()) => {
            tracing::info!(file = %name, step = %ctx.session.step(), "video selected");
        }
        Err(err) => tracing::warn!(%err, file = %name, "ignoring accepted file"),
    }
}

/// Opens the blocking error alert; the session is left untouched.
pub fn handle_file_rejected(ctx: &mut UpdateContext<'_>, rejection: &Rejection) -> Task<Message> {
    let title = ctx.i18n.tr("upload-invalid-type");
    let description = upload_area::rejection_text(rejection, ctx.i18n);
    Task::perform(
        upload_area::show_rejection_alert(title, description),
        |()| Message::UploadArea(upload_area::Message::AlertClosed),
    )
}

pub fn handle_language_selector_message(
    ctx: &mut UpdateContext<'_>,
    message: language_selector::Message,
) -> Task<Message> {
    let result = match language_selector::update(ctx.language_selector, message) {
        LanguageSelectorEvent::None => Ok(()),
        LanguageSelectorEvent::SourceChanged(language) => {
            tracing::debug!(code = language.code(), "source language changed");
            ctx.session.set_source_language(language)
        }
        LanguageSelectorEvent::TargetChanged(language) => {
            tracing::debug!(code = language.code(), "target language changed");
            ctx.session.set_target_language(language)
        }
        LanguageSelectorEvent::StartProcessing => return handle_start_processing(ctx),
    };
    if let Err(err) = result {
        tracing::warn!(%err, "language change refused");
    }
    Task::none()
}

/// Moves to the processing step and, when a backend is configured, sends
/// the video.
pub fn handle_start_processing(ctx: &mut UpdateContext<'_>) -> Task<Message> {
    if let Err(err) = ctx.session.start_processing() {
        tracing::warn!(%err, "cannot start processing");
        return Task::none();
    }
    tracing::info!(
        source = ctx.session.source_language().code(),
        target = ctx.session.target_language().code(),
        "processing started"
    );

    let Some(target) = ctx.upload_target else {
        return Task::none();
    };
    let Some(file) = ctx.session.selected_file() else {
        return Task::none();
    };

    let request = UploadRequest {
        endpoint: target.endpoint.clone(),
        path: file.path().to_path_buf(),
        file_name: file.name().to_owned(),
        mime: file.mime().to_owned(),
        source_language: ctx.session.source_language().code().to_owned(),
        target_language: ctx.session.target_language().code().to_owned(),
        timeout: target.timeout,
    };
    ctx.session.begin_upload();
    tracing::info!(endpoint = %request.endpoint, file = %request.file_name, "upload started");

    Task::perform(upload_video(request), Message::UploadFinished)
}

pub fn handle_tick(ctx: &mut UpdateContext<'_>) {
    match ctx.session.tick() {
        Ok(TickOutcome::Advanced(value)) => tracing::trace!(progress = value, "tick"),
        Ok(TickOutcome::Completed) => tracing::info!(
            url = ctx.session.result_url().unwrap_or_default(),
            "processing complete"
        ),
        // A tick already queued when the step changed.
        Err(err) => tracing::debug!(%err, "stray tick"),
    }
}

pub fn handle_upload_finished(ctx: &mut UpdateContext<'_>, result: Result<String, UploadError>) {
    match &result {
        Ok(url) => tracing::info!(%url, "upload complete"),
        Err(err) => {
            ctx.notifications.push(
                Notification::warning(err.i18n_key()).with_arg("detail", err.to_string()),
            );
        }
    }

    if ctx.session.record_upload_result(result) {
        ctx.notifications
            .push(Notification::success("notification-upload-complete"));
    }
}

pub fn handle_video_player_message(ctx: &mut UpdateContext<'_>, message: video_player::Message) {
    match video_player::update(ctx.video_player, message) {
        VideoPlayerEvent::None => {}
        VideoPlayerEvent::Download(tab) => {
            tracing::debug!(?tab, quality = ?ctx.video_player.quality, "download requested");
        }
        VideoPlayerEvent::Share(target) => tracing::debug!(?target, "share requested"),
    }
}

pub fn handle_ui_language_selected(ctx: &mut UpdateContext<'_>, locale: LanguageIdentifier) {
    if ctx.i18n.current_locale() == &locale {
        return;
    }
    ctx.i18n.set_locale(locale);
    tracing::info!(locale = %ctx.i18n.current_locale(), "UI language changed");
    ctx.persist_preferences();
}

pub fn handle_theme_toggled(ctx: &mut UpdateContext<'_>) {
    *ctx.theme_mode = ctx.theme_mode.next();
    tracing::debug!(theme = ?ctx.theme_mode, "theme changed");
    ctx.persist_preferences();
}
