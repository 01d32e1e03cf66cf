// SPDX-License-Identifier: MPL-2.0
//! Fourth step: a playback shell around the translated result.
//!
//! Nothing is decoded. The preview surface names the source it would play,
//! and the controls only flip local state.

use crate::domain::Language;
use crate::i18n::I18n;
use crate::ui::design_tokens::{opacity, palette, sizing, spacing, typography};
use crate::ui::styles;
use iced::widget::{button, checkbox, radio, text, tooltip, Column, Container, Row, Space};
use iced::{alignment, Color, Element, Length};

/// Which video the preview shows.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Tab {
    #[default]
    Translated,
    Original,
}

/// Download resolution. Cosmetic.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Quality {
    #[default]
    High,
    Medium,
    Low,
}

impl Quality {
    pub const ALL: [Quality; 3] = [Quality::High, Quality::Medium, Quality::Low];

    fn label_key(self) -> &'static str {
        match self {
            Quality::High => "player-quality-high",
            Quality::Medium => "player-quality-medium",
            Quality::Low => "player-quality-low",
        }
    }
}

/// Share target. The buttons are placeholders.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ShareTarget {
    Facebook,
    Twitter,
    Email,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct State {
    pub tab: Tab,
    pub playing: bool,
    pub subtitles: bool,
    pub quality: Quality,
    pub include_srt: bool,
    pub include_transcript: bool,
    pub audio_only: bool,
}

impl Default for State {
    fn default() -> Self {
        Self {
            tab: Tab::Translated,
            playing: false,
            subtitles: true,
            quality: Quality::High,
            include_srt: true,
            include_transcript: false,
            audio_only: false,
        }
    }
}

#[derive(Debug, Clone)]
pub enum Message {
    TabSelected(Tab),
    TogglePlay,
    ToggleSubtitles,
    QualitySelected(Quality),
    IncludeSrtToggled(bool),
    IncludeTranscriptToggled(bool),
    AudioOnlyToggled(bool),
    DownloadPressed,
    SharePressed(ShareTarget),
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Event {
    None,
    /// Placeholder action; the parent only logs it.
    Download(Tab),
    /// Placeholder action; the parent only logs it.
    Share(ShareTarget),
}

pub fn update(state: &mut State, message: Message) -> Event {
    match message {
        Message::TabSelected(tab) => state.tab = tab,
        Message::TogglePlay => state.playing = !state.playing,
        Message::ToggleSubtitles => state.subtitles = !state.subtitles,
        Message::QualitySelected(quality) => state.quality = quality,
        Message::IncludeSrtToggled(value) => state.include_srt = value,
        Message::IncludeTranscriptToggled(value) => state.include_transcript = value,
        Message::AudioOnlyToggled(value) => state.audio_only = value,
        Message::DownloadPressed => return Event::Download(state.tab),
        Message::SharePressed(target) => return Event::Share(target),
    }
    Event::None
}

/// "Translation details" text for the active tab.
pub fn details_text(i18n: &I18n, tab: Tab, source: Language, target: Language) -> String {
    match tab {
        Tab::Translated => i18n.tr_with_args(
            "player-details-translated",
            &[("source", source.name()), ("target", target.name())],
        ),
        Tab::Original => {
            i18n.tr_with_args("player-details-original", &[("source", source.name())])
        }
    }
}

pub struct ViewContext<'a> {
    pub i18n: &'a I18n,
    pub state: &'a State,
    pub source: Language,
    pub target: Language,
    /// Name of the uploaded file.
    pub original: Option<&'a str>,
    /// Result reference of the session.
    pub translated: Option<&'a str>,
}

fn tabs<'a>(ctx: &ViewContext<'a>) -> Element<'a, Message> {
    let tab_button = |tab: Tab, key: &str| {
        button(text(ctx.i18n.tr(key)).size(typography::BODY))
            .on_press(Message::TabSelected(tab))
            .padding([spacing::XS, spacing::MD])
            .style(styles::button::tab(ctx.state.tab == tab))
    };
    Row::new()
        .spacing(spacing::XS)
        .push(tab_button(Tab::Translated, "player-tab-translated"))
        .push(tab_button(Tab::Original, "player-tab-original"))
        .into()
}

fn preview<'a>(ctx: &ViewContext<'a>) -> Element<'a, Message> {
    let i18n = ctx.i18n;
    let state = ctx.state;

    let (placeholder_key, reference, subtitle_key) = match state.tab {
        Tab::Translated => (
            "player-preview-translated",
            ctx.translated,
            "player-subtitle-translated",
        ),
        Tab::Original => (
            "player-preview-original",
            ctx.original,
            "player-subtitle-original",
        ),
    };

    let mut surface = Column::new()
        .spacing(spacing::XS)
        .align_x(alignment::Horizontal::Center)
        .push(text(i18n.tr(placeholder_key)).size(typography::BODY_LG));
    if let Some(reference) = reference {
        surface = surface.push(
            text(reference.to_owned())
                .size(typography::CAPTION)
                .color(palette::GRAY_400),
        );
    }
    let status_key = if state.playing {
        "player-playing"
    } else {
        "player-paused"
    };
    surface = surface.push(
        text(i18n.tr(status_key))
            .size(typography::CAPTION)
            .color(palette::GRAY_400),
    );

    let mut stage = Column::new()
        .width(Length::Fill)
        .height(Length::Fill)
        .push(
            Container::new(surface)
                .width(Length::Fill)
                .height(Length::Fill)
                .align_x(alignment::Horizontal::Center)
                .align_y(alignment::Vertical::Center),
        );

    if state.subtitles {
        stage = stage.push(
            Container::new(
                Container::new(text(i18n.tr(subtitle_key)).size(typography::BODY_SM))
                    .padding([spacing::XS, spacing::MD])
                    .style(styles::container::subtitle),
            )
            .width(Length::Fill)
            .align_x(alignment::Horizontal::Center)
            .padding(spacing::XS),
        );
    }

    let (play_glyph, play_key) = if state.playing {
        ("⏸", "player-pause")
    } else {
        ("▶", "player-play")
    };
    let hint = |key: &str| {
        Container::new(text(i18n.tr(key)).size(typography::CAPTION))
            .padding(spacing::XXS)
            .style(styles::container::panel)
    };
    let controls = Row::new()
        .spacing(spacing::MD)
        .align_y(alignment::Vertical::Center)
        .push(tooltip(
            button(text(play_glyph))
                .on_press(Message::TogglePlay)
                .padding([spacing::XXS, spacing::SM])
                .style(styles::button::overlay(false)),
            hint(play_key),
            tooltip::Position::Top,
        ))
        .push(text(i18n.tr("player-time")).size(typography::BODY_SM))
        .push(Space::new().width(Length::Fill))
        .push(tooltip(
            button(text("CC").size(typography::CAPTION))
                .on_press(Message::ToggleSubtitles)
                .padding([spacing::XXS, spacing::SM])
                .style(styles::button::overlay(state.subtitles)),
            hint("player-subtitles"),
            tooltip::Position::Top,
        ))
        .push(tooltip(
            text("🔊").size(typography::BODY),
            hint("player-volume"),
            tooltip::Position::Top,
        ));

    // One third of the fake timeline is always "played".
    let timeline = Row::new()
        .height(Length::Fixed(sizing::TIMELINE_TRACK))
        .push(
            Container::new(Space::new())
                .width(Length::FillPortion(1))
                .height(Length::Fill)
                .style(styles::container::fill(palette::PRIMARY_600)),
        )
        .push(
            Container::new(Space::new())
                .width(Length::FillPortion(2))
                .height(Length::Fill)
                .style(styles::container::fill(Color {
                    a: opacity::OVERLAY_SUBTLE,
                    ..palette::WHITE
                })),
        );

    let surface = Column::new()
        .push(stage)
        .push(
            Column::new()
                .spacing(spacing::XS)
                .padding(spacing::MD)
                .push(controls)
                .push(timeline),
        );

    Container::new(surface)
        .width(Length::Fill)
        .height(Length::Fixed(sizing::PREVIEW_HEIGHT))
        .style(styles::container::preview)
        .into()
}

fn details<'a>(ctx: &ViewContext<'a>) -> Element<'a, Message> {
    let i18n = ctx.i18n;
    let download_key = match ctx.state.tab {
        Tab::Translated => "player-download-translated",
        Tab::Original => "player-download-original",
    };

    Row::new()
        .spacing(spacing::MD)
        .align_y(alignment::Vertical::Center)
        .push(
            Column::new()
                .spacing(spacing::XXS)
                .width(Length::Fill)
                .push(text(i18n.tr("player-details-title")).size(typography::BODY_LG))
                .push(
                    text(details_text(i18n, ctx.state.tab, ctx.source, ctx.target))
                        .size(typography::BODY_SM)
                        .color(palette::GRAY_500),
                ),
        )
        .push(
            button(text(format!("⤓ {}", i18n.tr(download_key))))
                .on_press(Message::DownloadPressed)
                .padding([spacing::XS, spacing::MD])
                .style(styles::button::primary),
        )
        .into()
}

fn options<'a>(ctx: &ViewContext<'a>) -> Element<'a, Message> {
    let i18n = ctx.i18n;
    let state = ctx.state;

    let mut quality = Column::new()
        .spacing(spacing::SM)
        .push(text(i18n.tr("player-quality-title")).size(typography::BODY_LG));
    for option in Quality::ALL {
        quality = quality.push(radio(
            i18n.tr(option.label_key()),
            option,
            Some(state.quality),
            Message::QualitySelected,
        ));
    }

    let extras = Column::new()
        .spacing(spacing::SM)
        .push(text(i18n.tr("player-options-title")).size(typography::BODY_LG))
        .push(
            checkbox(state.include_srt)
                .label(i18n.tr("player-option-srt"))
                .on_toggle(Message::IncludeSrtToggled),
        )
        .push(
            checkbox(state.include_transcript)
                .label(i18n.tr("player-option-transcript"))
                .on_toggle(Message::IncludeTranscriptToggled),
        )
        .push(
            checkbox(state.audio_only)
                .label(i18n.tr("player-option-audio"))
                .on_toggle(Message::AudioOnlyToggled),
        );

    let boxed = |content: Column<'a, Message>| {
        Container::new(content)
            .padding(spacing::MD)
            .width(Length::Fill)
            .style(styles::container::panel)
    };

    Row::new()
        .spacing(spacing::LG)
        .push(boxed(quality))
        .push(boxed(extras))
        .into()
}

fn share<'a>(ctx: &ViewContext<'a>) -> Element<'a, Message> {
    let i18n = ctx.i18n;
    let share_button = |target: ShareTarget, key: &str, color: Color| {
        button(text(i18n.tr(key)).size(typography::BODY_SM))
            .on_press(Message::SharePressed(target))
            .padding([spacing::XS, spacing::MD])
            .style(styles::button::share(color))
    };

    Column::new()
        .spacing(spacing::MD)
        .push(text(i18n.tr("player-share-title")).size(typography::BODY_LG))
        .push(
            Row::new()
                .spacing(spacing::MD)
                .push(share_button(
                    ShareTarget::Facebook,
                    "player-share-facebook",
                    Color::from_rgb(0.15, 0.39, 0.92),
                ))
                .push(share_button(
                    ShareTarget::Twitter,
                    "player-share-twitter",
                    Color::from_rgb(0.05, 0.65, 0.91),
                ))
                .push(share_button(
                    ShareTarget::Email,
                    "player-share-email",
                    palette::SUCCESS_500,
                )),
        )
        .into()
}

pub fn view<'a>(ctx: ViewContext<'a>) -> Element<'a, Message> {
    Column::new()
        .spacing(spacing::LG)
        .push(
            text(ctx.i18n.tr("player-title"))
                .size(typography::TITLE_MD)
                .width(Length::Fill)
                .align_x(alignment::Horizontal::Center),
        )
        .push(tabs(&ctx))
        .push(preview(&ctx))
        .push(details(&ctx))
        .push(options(&ctx))
        .push(share(&ctx))
        .into()
}
