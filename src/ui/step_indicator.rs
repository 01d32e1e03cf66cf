// SPDX-License-Identifier: MPL-2.0
//! Four labelled circles joined by connector bars, highlighted up to the
//! current step.

use crate::domain::Step;
use crate::i18n::I18n;
use crate::ui::design_tokens::{palette, sizing, spacing, typography};
use crate::ui::styles;
use iced::widget::{container, text, Column, Container, Row, Space};
use iced::{alignment, Element, Length};

pub struct ViewContext<'a> {
    pub i18n: &'a I18n,
    pub current: Step,
}

/// Glyph drawn inside a step circle.
fn glyph(step: Step) -> &'static str {
    match step {
        Step::Upload => "⇪",
        Step::Languages => "文",
        Step::Processing => "◎",
        Step::Result => "▶",
    }
}

pub fn view<'a, M: 'a>(ctx: ViewContext<'a>) -> Element<'a, M> {
    let mut row = Row::new()
        .align_y(alignment::Vertical::Center)
        .spacing(spacing::XS)
        .width(Length::Fill);

    for step in Step::ALL {
        let reached = step.is_reached(ctx.current);

        if step != Step::Upload {
            let bar = Container::new(Space::new().width(Length::Fill))
                .height(Length::Fixed(sizing::STEP_CONNECTOR))
                .width(Length::Fill)
                .style(styles::container::connector(reached));
            row = row.push(bar);
        }

        let circle = Container::new(text(glyph(step)).size(typography::BODY_LG))
            .width(Length::Fixed(sizing::STEP_CIRCLE))
            .height(Length::Fixed(sizing::STEP_CIRCLE))
            .align_x(alignment::Horizontal::Center)
            .align_y(alignment::Vertical::Center)
            .style(styles::container::step_circle(reached));

        let label_color = if reached {
            palette::PRIMARY_600
        } else {
            palette::GRAY_400
        };
        let label = text(ctx.i18n.tr(step.label_key()))
            .size(typography::BODY_SM)
            .color(label_color);

        row = row.push(
            Column::new()
                .align_x(alignment::Horizontal::Center)
                .spacing(spacing::XS)
                .push(circle)
                .push(label),
        );
    }

    container(row)
        .max_width(sizing::CONTENT_MAX_WIDTH * 0.8)
        .into()
}
