// SPDX-License-Identifier: MPL-2.0
//! Drop zone and browse button of the first step.
//!
//! Files arrive either from a window drop (routed here by the app
//! subscription) or from the native file dialog. Both paths go through the
//! same declared-type check before anything is reported upward.

use crate::domain::video_file::{self, Rejection, VideoFile};
use crate::i18n::I18n;
use crate::ui::design_tokens::{palette, sizing, spacing, typography};
use crate::ui::styles;
use iced::widget::{button, text, Column, Container, Row};
use iced::{alignment, Element, Length};
use std::path::PathBuf;
use std::time::{Duration, Instant};

/// Drops closer together than this, with no hover in between, come from one
/// multi-file gesture.
const DROP_GESTURE_WINDOW: Duration = Duration::from_millis(500);

pub struct ViewContext<'a> {
    pub i18n: &'a I18n,
    pub state: &'a State,
}

/// Local drop-zone state.
#[derive(Debug, Clone, Default)]
pub struct State {
    dragging: bool,
    dialog_open: bool,
    last_directory: Option<PathBuf>,
    /// When the current gesture's first file was handled.
    gesture_started: Option<Instant>,
    /// Last refused file, shown under the drop zone until a valid one comes.
    rejection: Option<Rejection>,
}

impl State {
    #[must_use]
    pub fn is_dragging(&self) -> bool {
        self.dragging
    }

    #[must_use]
    pub fn last_directory(&self) -> Option<&PathBuf> {
        self.last_directory.as_ref()
    }

    #[must_use]
    pub fn rejection(&self) -> Option<&Rejection> {
        self.rejection.as_ref()
    }
}

#[derive(Debug, Clone)]
pub enum Message {
    /// Browse button or drop zone clicked.
    Browse,
    /// The native dialog closed, with the chosen file if any.
    DialogClosed(Option<PathBuf>),
    /// A file is hovering the window.
    DragEntered,
    /// The hovering file left the window.
    DragLeft,
    /// The rejection alert was closed.
    AlertClosed,
    /// A file was dropped on the window. Only the first file of a
    /// multi-file drop is validated.
    Dropped(PathBuf),
}

#[derive(Debug, Clone)]
pub enum Event {
    None,
    /// Ask the parent to open the file dialog.
    OpenDialog { directory: Option<PathBuf> },
    /// A file passed validation.
    Accepted(VideoFile),
    /// A file failed validation; the step must not change and the parent
    /// shows the blocking alert.
    Rejected(Rejection),
}

pub fn update(state: &mut State, message: Message) -> Event {
    match message {
        Message::Browse => {
            if state.dialog_open {
                return Event::None;
            }
            state.dialog_open = true;
            Event::OpenDialog {
                directory: state.last_directory.clone(),
            }
        }
        Message::DialogClosed(path) => {
            state.dialog_open = false;
            match path {
                Some(path) => validate(state, path),
                None => Event::None,
            }
        }
        Message::AlertClosed => Event::None,
        Message::DragEntered => {
            state.dragging = true;
            state.gesture_started = None;
            Event::None
        }
        Message::DragLeft => {
            state.dragging = false;
            Event::None
        }
        Message::Dropped(path) => {
            state.dragging = false;
            let now = Instant::now();
            if state
                .gesture_started
                .is_some_and(|start| now.saturating_duration_since(start) < DROP_GESTURE_WINDOW)
            {
                tracing::debug!(path = %path.display(), "ignoring extra dropped file");
                return Event::None;
            }
            state.gesture_started = Some(now);
            validate(state, path)
        }
    }
}

fn validate(state: &mut State, path: PathBuf) -> Event {
    if let Some(parent) = path.parent() {
        state.last_directory = Some(parent.to_path_buf());
    }
    match VideoFile::open(path) {
        Ok(file) => {
            tracing::info!(file = file.name(), mime = file.mime(), "video accepted");
            state.rejection = None;
            Event::Accepted(file)
        }
        Err(rejection) => {
            tracing::info!(%rejection, "file rejected");
            state.rejection = Some(rejection.clone());
            Event::Rejected(rejection)
        }
    }
}

/// Shows the native open dialog filtered on video extensions.
pub async fn pick_video(filter_name: String, directory: Option<PathBuf>) -> Option<PathBuf> {
    let extensions: Vec<&str> = video_file::video_extensions().collect();
    let mut dialog = rfd::AsyncFileDialog::new().add_filter(filter_name, &extensions);

    if let Some(dir) = directory {
        if dir.exists() {
            dialog = dialog.set_directory(&dir);
        }
    }

    dialog.pick_file().await.map(|h| h.path().to_path_buf())
}

/// Localized explanation of why `rejection` was refused.
pub fn rejection_text(rejection: &Rejection, i18n: &I18n) -> String {
    let name = rejection.file_name();
    match rejection {
        Rejection::NotVideo { mime, .. } => {
            i18n.tr_with_args(rejection.i18n_key(), &[("name", name), ("mime", *mime)])
        }
        Rejection::NotFound { .. } => i18n.tr_with_args(rejection.i18n_key(), &[("name", name)]),
    }
}

/// Modal error alert; resolves once the user closes it.
pub async fn show_rejection_alert(title: String, description: String) {
    let choice = rfd::AsyncMessageDialog::new()
        .set_level(rfd::MessageLevel::Error)
        .set_title(title)
        .set_description(description)
        .set_buttons(rfd::MessageButtons::Ok)
        .show()
        .await;
    tracing::debug!(?choice, "rejection alert closed");
}

pub fn view<'a>(ctx: ViewContext<'a>) -> Element<'a, Message> {
    let i18n = ctx.i18n;
    let dragging = ctx.state.dragging;

    let title = text(i18n.tr("upload-title"))
        .size(typography::TITLE_MD)
        .width(Length::Fill)
        .align_x(alignment::Horizontal::Center);
    let intro = text(i18n.tr("upload-intro"))
        .size(typography::BODY)
        .color(palette::GRAY_500)
        .width(Length::Fill)
        .align_x(alignment::Horizontal::Center);

    let headline = if dragging {
        i18n.tr("upload-drop-release")
    } else {
        i18n.tr("upload-drop-title")
    };
    let zone_content = Column::new()
        .align_x(alignment::Horizontal::Center)
        .spacing(spacing::XS)
        .push(
            text("⇪")
                .size(sizing::ICON_XL)
                .color(palette::PRIMARY_500),
        )
        .push(text(headline).size(typography::BODY_LG))
        .push(
            text(i18n.tr("upload-browse-hint"))
                .size(typography::BODY_SM)
                .color(palette::GRAY_500),
        )
        .push(
            button(text(i18n.tr("upload-browse-button")))
                .on_press(Message::Browse)
                .padding([spacing::XS, spacing::MD])
                .style(styles::button::primary),
        );

    let zone = button(
        Container::new(zone_content)
            .width(Length::Fill)
            .height(Length::Fixed(sizing::DROP_ZONE_HEIGHT))
            .align_x(alignment::Horizontal::Center)
            .align_y(alignment::Vertical::Center)
            .style(styles::container::drop_zone(dragging)),
    )
    .on_press(Message::Browse)
    .padding(0)
    .width(Length::Fill)
    .style(styles::button::drop_zone);

    let features = [
        "upload-feature-languages",
        "upload-feature-voice",
        "upload-feature-subtitles",
        "upload-feature-emotion",
        "upload-feature-length",
        "upload-feature-privacy",
    ];
    let mut left = Column::new().spacing(spacing::XS).width(Length::Fill);
    let mut right = Column::new().spacing(spacing::XS).width(Length::Fill);
    for (index, key) in features.iter().enumerate() {
        let item = Row::new()
            .spacing(spacing::XS)
            .align_y(alignment::Vertical::Center)
            .push(text("•").color(palette::PRIMARY_500))
            .push(text(i18n.tr(key)).size(typography::BODY));
        if index % 2 == 0 {
            left = left.push(item);
        } else {
            right = right.push(item);
        }
    }

    let mut content = Column::new()
        .spacing(spacing::LG)
        .push(title)
        .push(intro)
        .push(zone);
    if let Some(rejection) = &ctx.state.rejection {
        content = content.push(
            text(rejection_text(rejection, i18n))
                .size(typography::BODY_SM)
                .color(palette::ERROR_500),
        );
    }

    content
        .push(text(i18n.tr("upload-features-title")).size(typography::TITLE_SM))
        .push(Row::new().spacing(spacing::MD).push(left).push(right))
        .into()
}
