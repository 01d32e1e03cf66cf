// SPDX-License-Identifier: MPL-2.0
//! Second step: source and target language pick lists over the shared
//! catalog, a translation summary and a few cosmetic options.

use crate::domain::language::{self, Language};
use crate::i18n::I18n;
use crate::ui::design_tokens::{palette, sizing, spacing, typography};
use crate::ui::styles;
use iced::widget::{button, checkbox, pick_list, text, Column, Container, Row};
use iced::{alignment, Element, Length};

pub struct ViewContext<'a> {
    pub i18n: &'a I18n,
    pub state: &'a State,
    pub file_name: Option<&'a str>,
    pub source: Language,
    pub target: Language,
}

/// Option checkboxes. They are not sent anywhere.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct State {
    pub generate_subtitles: bool,
    pub preserve_tone: bool,
    pub high_quality_voice: bool,
}

impl Default for State {
    fn default() -> Self {
        Self {
            generate_subtitles: false,
            preserve_tone: true,
            high_quality_voice: true,
        }
    }
}

#[derive(Debug, Clone)]
pub enum Message {
    SourceSelected(Language),
    TargetSelected(Language),
    GenerateSubtitlesToggled(bool),
    PreserveToneToggled(bool),
    HighQualityVoiceToggled(bool),
    StartPressed,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Event {
    None,
    SourceChanged(Language),
    TargetChanged(Language),
    StartProcessing,
}

pub fn update(state: &mut State, message: Message) -> Event {
    match message {
        Message::SourceSelected(language) => Event::SourceChanged(language),
        Message::TargetSelected(language) => Event::TargetChanged(language),
        Message::GenerateSubtitlesToggled(value) => {
            state.generate_subtitles = value;
            Event::None
        }
        Message::PreserveToneToggled(value) => {
            state.preserve_tone = value;
            Event::None
        }
        Message::HighQualityVoiceToggled(value) => {
            state.high_quality_voice = value;
            Event::None
        }
        Message::StartPressed => Event::StartProcessing,
    }
}

fn language_column<'a>(
    i18n: &I18n,
    label_key: &str,
    hint_key: &str,
    selected: Language,
    on_select: fn(Language) -> Message,
) -> Column<'a, Message> {
    Column::new()
        .spacing(spacing::XS)
        .width(Length::Fill)
        .push(text(i18n.tr(label_key)).size(typography::BODY))
        .push(
            pick_list(language::CATALOG, Some(selected), on_select)
                .placeholder(i18n.tr("languages-placeholder"))
                .padding(spacing::SM)
                .width(Length::Fill),
        )
        .push(
            text(i18n.tr(hint_key))
                .size(typography::BODY_SM)
                .color(palette::GRAY_500),
        )
}

pub fn view<'a>(ctx: ViewContext<'a>) -> Element<'a, Message> {
    let i18n = ctx.i18n;

    let mut content = Column::new().spacing(spacing::LG).push(
        text(i18n.tr("languages-title"))
            .size(typography::TITLE_MD)
            .width(Length::Fill)
            .align_x(alignment::Horizontal::Center),
    );

    if let Some(name) = ctx.file_name {
        let file_box = Row::new()
            .spacing(spacing::MD)
            .align_y(alignment::Vertical::Center)
            .push(text("🎞").size(sizing::ICON_LG))
            .push(
                Column::new()
                    .push(text(i18n.tr("languages-selected-file")).size(typography::BODY_LG))
                    .push(
                        text(name.to_owned())
                            .size(typography::BODY_SM)
                            .color(palette::GRAY_500),
                    ),
            );
        content = content.push(
            Container::new(file_box)
                .padding(spacing::MD)
                .width(Length::Fill)
                .style(styles::container::highlight),
        );
    }

    let pickers = Row::new()
        .spacing(spacing::XL)
        .push(language_column(
            i18n,
            "languages-source-label",
            "languages-source-hint",
            ctx.source,
            Message::SourceSelected,
        ))
        .push(language_column(
            i18n,
            "languages-target-label",
            "languages-target-hint",
            ctx.target,
            Message::TargetSelected,
        ));

    let summary = Column::new()
        .spacing(spacing::XS)
        .push(text(i18n.tr("languages-summary-title")).size(typography::BODY_LG))
        .push(text(i18n.tr_with_args(
            "languages-summary",
            &[("source", ctx.source.name()), ("target", ctx.target.name())],
        )));

    let start = Container::new(
        button(text(format!("{}  →", i18n.tr("languages-start-button"))))
            .on_press(Message::StartPressed)
            .padding([spacing::SM, spacing::LG])
            .style(styles::button::primary),
    )
    .width(Length::Fill)
    .align_x(alignment::Horizontal::Center);

    let options = Column::new()
        .spacing(spacing::SM)
        .push(text(i18n.tr("languages-options-title")).size(typography::TITLE_SM))
        .push(
            checkbox(ctx.state.generate_subtitles)
                .label(i18n.tr("languages-option-subtitles"))
                .on_toggle(Message::GenerateSubtitlesToggled),
        )
        .push(
            checkbox(ctx.state.preserve_tone)
                .label(i18n.tr("languages-option-tone"))
                .on_toggle(Message::PreserveToneToggled),
        )
        .push(
            checkbox(ctx.state.high_quality_voice)
                .label(i18n.tr("languages-option-quality"))
                .on_toggle(Message::HighQualityVoiceToggled),
        );

    content
        .push(pickers)
        .push(
            Container::new(summary)
                .padding(spacing::MD)
                .width(Length::Fill)
                .style(styles::container::panel),
        )
        .push(start)
        .push(options)
        .into()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_options_match_initial_form() {
        let state = State::default();
        assert!(!state.generate_subtitles);
        assert!(state.preserve_tone);
        assert!(state.high_quality_voice);
    }

    #[test]
    fn selections_are_forwarded_to_parent() {
        let mut state = State::default();
        let french = language::find("fr").expect("fr");
        assert_eq!(
            update(&mut state, Message::TargetSelected(french)),
            Event::TargetChanged(french)
        );
        let japanese = language::find("ja").expect("ja");
        assert_eq!(
            update(&mut state, Message::SourceSelected(japanese)),
            Event::SourceChanged(japanese)
        );
    }

    #[test]
    fn option_toggles_stay_local() {
        let mut state = State::default();
        assert_eq!(
            update(&mut state, Message::GenerateSubtitlesToggled(true)),
            Event::None
        );
        assert_eq!(
            update(&mut state, Message::PreserveToneToggled(false)),
            Event::None
        );
        assert!(state.generate_subtitles);
        assert!(!state.preserve_tone);
    }

    #[test]
    fn start_pressed_requests_processing() {
        let mut state = State::default();
        assert_eq!(
            update(&mut state, Message::StartPressed),
            Event::StartProcessing
        );
    }
}
