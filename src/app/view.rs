// SPDX-License-Identifier: MPL-2.0
//! View rendering for the application.
//!
//! Header, step indicator, the active step inside a card, the "How it works"
//! section and the toast overlay on top.

use super::Message;
use crate::domain::{Session, Step};
use crate::i18n::I18n;
use crate::ui::design_tokens::{palette, sizing, spacing, typography};
use crate::ui::language_selector;
use crate::ui::notifications::{self, Toast};
use crate::ui::processing_status;
use crate::ui::step_indicator;
use crate::ui::styles;
use crate::ui::theming::ThemeMode;
use crate::ui::upload_area;
use crate::ui::video_player;
use iced::widget::{button, pick_list, scrollable, text, Column, Container, Row, Space, Stack};
use iced::{alignment, Element, Length};

/// Context required to render the application view.
pub struct ViewContext<'a> {
    pub i18n: &'a I18n,
    pub session: &'a Session,
    pub upload_area: &'a upload_area::State,
    pub language_selector: &'a language_selector::State,
    pub video_player: &'a video_player::State,
    pub notifications: &'a notifications::Manager,
    pub theme_mode: ThemeMode,
}

/// Renders the whole window.
pub fn view(ctx: ViewContext<'_>) -> Element<'_, Message> {
    let page = Column::new()
        .spacing(spacing::XL)
        .padding([spacing::LG, spacing::XL])
        .align_x(alignment::Horizontal::Center)
        .width(Length::Fill)
        .push(step_indicator::view(step_indicator::ViewContext {
            i18n: ctx.i18n,
            current: ctx.session.step(),
        }))
        .push(
            Container::new(view_step(&ctx))
                .padding(spacing::XL)
                .width(Length::Fill)
                .max_width(sizing::CONTENT_MAX_WIDTH)
                .style(styles::container::card),
        )
        .push(view_how_it_works(ctx.i18n));

    let body = Column::new()
        .width(Length::Fill)
        .height(Length::Fill)
        .push(view_header(&ctx))
        .push(scrollable(page).height(Length::Fill));

    let toasts = Toast::view_overlay(ctx.notifications, ctx.i18n).map(Message::Notification);

    Stack::new()
        .width(Length::Fill)
        .height(Length::Fill)
        .push(body)
        .push(toasts)
        .into()
}

fn view_header<'a>(ctx: &ViewContext<'a>) -> Element<'a, Message> {
    let i18n = ctx.i18n;

    let brand = Row::new()
        .spacing(spacing::SM)
        .align_y(alignment::Vertical::Center)
        .push(text("文▶").size(sizing::ICON_MD).color(palette::PRIMARY_600))
        .push(
            Column::new()
                .push(text(i18n.tr("app-name")).size(typography::TITLE_SM))
                .push(
                    text(i18n.tr("app-tagline"))
                        .size(typography::CAPTION)
                        .color(palette::GRAY_500),
                ),
        );

    let locale_picker = Row::new()
        .spacing(spacing::XS)
        .align_y(alignment::Vertical::Center)
        .push(text(i18n.tr("header-ui-language")).size(typography::BODY_SM))
        .push(
            pick_list(
                i18n.available_locales.as_slice(),
                Some(i18n.current_locale().clone()),
                Message::UiLanguageSelected,
            )
            .padding([spacing::XXS, spacing::SM]),
        );

    let theme_button = button(text(i18n.tr(ctx.theme_mode.label_key())).size(typography::BODY_SM))
        .on_press(Message::ThemeToggled)
        .padding([spacing::XS, spacing::SM])
        .style(styles::button::ghost);

    Container::new(
        Row::new()
            .spacing(spacing::LG)
            .align_y(alignment::Vertical::Center)
            .push(brand)
            .push(Space::new().width(Length::Fill))
            .push(locale_picker)
            .push(theme_button),
    )
    .padding([spacing::SM, spacing::XL])
    .width(Length::Fill)
    .style(styles::container::header)
    .into()
}

fn view_step<'a>(ctx: &ViewContext<'a>) -> Element<'a, Message> {
    let session = ctx.session;
    match session.step() {
        Step::Upload => upload_area::view(upload_area::ViewContext {
            i18n: ctx.i18n,
            state: ctx.upload_area,
        })
        .map(Message::UploadArea),
        Step::Languages => language_selector::view(language_selector::ViewContext {
            i18n: ctx.i18n,
            state: ctx.language_selector,
            file_name: session.selected_file().map(|file| file.name()),
            source: session.source_language(),
            target: session.target_language(),
        })
        .map(Message::LanguageSelector),
        Step::Processing => processing_status::view(processing_status::ViewContext {
            i18n: ctx.i18n,
            progress: session.progress(),
            is_processing: session.is_processing(),
            source: session.source_language(),
            target: session.target_language(),
            upload: session.upload(),
        }),
        Step::Result => video_player::view(video_player::ViewContext {
            i18n: ctx.i18n,
            state: ctx.video_player,
            source: session.source_language(),
            target: session.target_language(),
            original: session.selected_file().map(|file| file.name()),
            translated: session.result_url(),
        })
        .map(Message::VideoPlayer),
    }
}

fn view_how_it_works(i18n: &I18n) -> Element<'_, Message> {
    let entries = [
        ("1", "how-upload-title", "how-upload-body"),
        ("2", "how-languages-title", "how-languages-body"),
        ("3", "how-result-title", "how-result-body"),
    ];

    let mut row = Row::new().spacing(spacing::LG);
    for (number, title_key, body_key) in entries {
        row = row.push(
            Column::new()
                .spacing(spacing::XS)
                .width(Length::Fill)
                .align_x(alignment::Horizontal::Center)
                .push(
                    Container::new(text(number).size(typography::TITLE_SM))
                        .width(Length::Fixed(sizing::STEP_CIRCLE))
                        .height(Length::Fixed(sizing::STEP_CIRCLE))
                        .align_x(alignment::Horizontal::Center)
                        .align_y(alignment::Vertical::Center)
                        .style(styles::container::step_circle(false)),
                )
                .push(text(i18n.tr(title_key)).size(typography::BODY_LG))
                .push(
                    text(i18n.tr(body_key))
                        .size(typography::BODY_SM)
                        .color(palette::GRAY_500)
                        .align_x(alignment::Horizontal::Center),
                ),
        );
    }

    Container::new(
        Column::new()
            .spacing(spacing::LG)
            .push(
                text(i18n.tr("how-title"))
                    .size(typography::TITLE_MD)
                    .width(Length::Fill)
                    .align_x(alignment::Horizontal::Center),
            )
            .push(row),
    )
    .width(Length::Fill)
    .max_width(sizing::CONTENT_MAX_WIDTH)
    .into()
}
