// SPDX-License-Identifier: MPL-2.0
//! Third step: progress bar and the four processing stages.
//!
//! Stages are derived from the progress value alone. Stage `i` is complete
//! once progress reaches `25 * (i + 1)`; the current stage is
//! `min(progress / 25, 3)`.

use crate::domain::{Language, Progress, UploadStatus};
use crate::i18n::I18n;
use crate::ui::design_tokens::{palette, sizing, spacing, typography};
use crate::ui::styles;
use iced::widget::{progress_bar, text, Column, Container, Row, Space};
use iced::{alignment, Color, Element, Length};

/// Number of stages.
pub const STAGE_COUNT: usize = 4;

/// Progress covered by one stage.
const STAGE_SPAN: u8 = 25;

/// The four cosmetic pipeline stages, in order.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Stage {
    SpeechRecognition,
    Translation,
    VoiceSynthesis,
    VideoRendering,
}

impl Stage {
    pub const ALL: [Stage; STAGE_COUNT] = [
        Stage::SpeechRecognition,
        Stage::Translation,
        Stage::VoiceSynthesis,
        Stage::VideoRendering,
    ];

    fn name_key(self) -> &'static str {
        match self {
            Stage::SpeechRecognition => "processing-stage-speech",
            Stage::Translation => "processing-stage-translation",
            Stage::VoiceSynthesis => "processing-stage-synthesis",
            Stage::VideoRendering => "processing-stage-rendering",
        }
    }

    fn glyph(self) -> &'static str {
        match self {
            Stage::SpeechRecognition => "🎧",
            Stage::Translation => "文",
            Stage::VoiceSynthesis => "💬",
            Stage::VideoRendering => "🎬",
        }
    }

    /// Localized description with the session's language names.
    pub fn description(self, i18n: &I18n, source: Language, target: Language) -> String {
        let key = format!("{}-desc", self.name_key());
        i18n.tr_with_args(&key, &[("source", source.name()), ("target", target.name())])
    }
}

/// Visual state of one stage row.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum StageState {
    Done,
    Active,
    Pending,
}

/// Whether stage `index` has finished at `progress`.
#[must_use]
pub fn is_stage_complete(index: usize, progress: Progress) -> bool {
    let threshold = u16::from(STAGE_SPAN) * (index as u16 + 1);
    u16::from(progress.value()) >= threshold
}

/// Index of the stage currently running.
#[must_use]
pub fn current_stage(progress: Progress) -> usize {
    usize::from(progress.value() / STAGE_SPAN).min(STAGE_COUNT - 1)
}

/// State of stage `index`. The current stage reads as done once processing
/// stopped.
#[must_use]
pub fn stage_state(index: usize, progress: Progress, is_processing: bool) -> StageState {
    if is_stage_complete(index, progress) {
        StageState::Done
    } else if index == current_stage(progress) {
        if is_processing {
            StageState::Active
        } else {
            StageState::Done
        }
    } else {
        StageState::Pending
    }
}

pub struct ViewContext<'a> {
    pub i18n: &'a I18n,
    pub progress: Progress,
    pub is_processing: bool,
    pub source: Language,
    pub target: Language,
    pub upload: &'a UploadStatus,
}

fn stage_color(state: StageState) -> Color {
    match state {
        StageState::Done => palette::SUCCESS_500,
        StageState::Active => palette::PRIMARY_600,
        StageState::Pending => palette::GRAY_400,
    }
}

fn stage_row<'a, M: 'a>(ctx: &ViewContext<'a>, index: usize, stage: Stage) -> Element<'a, M> {
    let i18n = ctx.i18n;
    let state = stage_state(index, ctx.progress, ctx.is_processing);
    let color = stage_color(state);

    let glyph = match state {
        StageState::Done => "✓",
        StageState::Active => "⟳",
        StageState::Pending => stage.glyph(),
    };
    let badge = Container::new(text(glyph).size(typography::TITLE_SM))
        .width(Length::Fixed(sizing::STEP_CIRCLE))
        .height(Length::Fixed(sizing::STEP_CIRCLE))
        .align_x(alignment::Horizontal::Center)
        .align_y(alignment::Vertical::Center)
        .style(styles::container::stage_badge(color));

    let mut body = Column::new()
        .spacing(spacing::XXS)
        .width(Length::Fill)
        .push(text(i18n.tr(stage.name_key())).size(typography::BODY_LG).color(color))
        .push(
            text(stage.description(i18n, ctx.source, ctx.target))
                .size(typography::BODY_SM)
                .color(palette::GRAY_500),
        );
    match state {
        StageState::Active => {
            body = body.push(
                text(i18n.tr("processing-status-active"))
                    .size(typography::CAPTION)
                    .color(palette::PRIMARY_500),
            );
        }
        StageState::Done if is_stage_complete(index, ctx.progress) => {
            body = body.push(
                text(format!("✓ {}", i18n.tr("processing-status-done")))
                    .size(typography::CAPTION)
                    .color(palette::SUCCESS_500),
            );
        }
        _ => {}
    }

    Row::new()
        .spacing(spacing::MD)
        .push(badge)
        .push(body)
        .into()
}

pub fn view<'a, M: 'a>(ctx: ViewContext<'a>) -> Element<'a, M> {
    let i18n = ctx.i18n;
    let value = ctx.progress.value().to_string();

    let header = Row::new()
        .align_y(alignment::Vertical::Center)
        .push(
            text(i18n.tr("processing-progress-label"))
                .size(typography::CAPTION)
                .color(palette::PRIMARY_600),
        )
        .push(Space::new().width(Length::Fill))
        .push(
            text(i18n.tr_with_args("processing-percent", &[("value", &value)]))
                .size(typography::CAPTION)
                .color(palette::PRIMARY_600),
        );

    let bar = progress_bar(0.0..=1.0, ctx.progress.fraction())
        .girth(Length::Fixed(sizing::PROGRESS_BAR_HEIGHT));

    let mut stages = Column::new().spacing(spacing::LG);
    for (index, stage) in Stage::ALL.into_iter().enumerate() {
        stages = stages.push(stage_row(&ctx, index, stage));
    }

    let info = Container::new(
        Column::new()
            .spacing(spacing::XS)
            .push(text(i18n.tr("processing-info-title")).size(typography::BODY_LG))
            .push(text(i18n.tr("processing-info-body")).size(typography::BODY_SM)),
    )
    .padding(spacing::MD)
    .width(Length::Fill)
    .style(styles::container::highlight);

    let mut content = Column::new()
        .spacing(spacing::LG)
        .push(
            text(i18n.tr("processing-title"))
                .size(typography::TITLE_MD)
                .width(Length::Fill)
                .align_x(alignment::Horizontal::Center),
        )
        .push(Column::new().spacing(spacing::XS).push(header).push(bar))
        .push(stages)
        .push(info);

    let upload_key = match ctx.upload {
        UploadStatus::Idle => None,
        UploadStatus::InFlight => Some("processing-upload-in-flight"),
        UploadStatus::Completed(_) => Some("processing-upload-done"),
        UploadStatus::Failed(_) => Some("processing-upload-failed"),
    };
    if let Some(key) = upload_key {
        content = content.push(
            text(i18n.tr(key))
                .size(typography::BODY_SM)
                .color(palette::GRAY_500),
        );
    }

    content.into()
}
