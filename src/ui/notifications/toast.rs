// SPDX-License-Identifier: MPL-2.0
//! Toast rendering: one bordered card per notification, stacked in the
//! bottom-right corner above the wizard.

use super::manager::{Manager, Message};
use super::notification::Notification;
use crate::i18n::I18n;
use crate::ui::design_tokens::{border, radius, shadow, sizing, spacing, typography};
use crate::ui::styles;
use iced::widget::{button, container, text, tooltip, Column, Container, Row, Space};
use iced::{alignment, Background, Border, Color, Element, Length, Theme};

pub struct Toast;

impl Toast {
    /// Text of `notification` in the active locale.
    pub fn message_text(notification: &Notification, i18n: &I18n) -> String {
        let args = notification.message_args();
        if args.is_empty() {
            return i18n.tr(notification.message_key());
        }
        let borrowed: Vec<(&str, &str)> = args
            .iter()
            .map(|(name, value)| (name.as_str(), value.as_str()))
            .collect();
        i18n.tr_with_args(notification.message_key(), &borrowed)
    }

    fn card<'a>(notification: &'a Notification, i18n: &'a I18n) -> Element<'a, Message> {
        let accent = notification.severity().color();

        let close = tooltip(
            button(text("×").size(typography::BODY_LG))
                .on_press(Message::Dismiss(notification.id()))
                .padding([0.0, spacing::XS])
                .style(styles::button::ghost),
            Container::new(text(i18n.tr("notification-dismiss")).size(typography::CAPTION))
                .padding(spacing::XXS)
                .style(styles::container::panel),
            tooltip::Position::Left,
        );

        let row = Row::new()
            .spacing(spacing::SM)
            .align_y(alignment::Vertical::Center)
            .push(
                Container::new(
                    text(notification.severity().glyph())
                        .size(typography::TITLE_SM)
                        .color(accent),
                )
                .padding(spacing::XXS),
            )
            .push(
                text(Self::message_text(notification, i18n))
                    .size(typography::BODY)
                    .width(Length::Fill),
            )
            .push(close);

        Container::new(row)
            .width(Length::Fixed(sizing::TOAST_WIDTH))
            .padding(spacing::SM)
            .style(move |theme: &Theme| card_style(theme, accent))
            .into()
    }

    /// Full-window layer holding every on-screen toast; empty when there
    /// is nothing to show.
    pub fn view_overlay<'a>(manager: &'a Manager, i18n: &'a I18n) -> Element<'a, Message> {
        if manager.visible_count() == 0 {
            return Space::new().into();
        }

        let cards = Column::with_children(manager.visible().map(|n| Self::card(n, i18n)))
            .spacing(spacing::XS)
            .align_x(alignment::Horizontal::Right);

        Container::new(cards)
            .width(Length::Fill)
            .height(Length::Fill)
            .padding(spacing::MD)
            .align_x(alignment::Horizontal::Right)
            .align_y(alignment::Vertical::Bottom)
            .into()
    }
}

fn card_style(theme: &Theme, accent: Color) -> container::Style {
    container::Style {
        background: Some(Background::Color(
            theme.extended_palette().background.base.color,
        )),
        border: Border {
            color: accent,
            width: border::WIDTH_MD,
            radius: radius::MD.into(),
        },
        shadow: shadow::MD,
        text_color: Some(theme.palette().text),
        ..container::Style::default()
    }
}
