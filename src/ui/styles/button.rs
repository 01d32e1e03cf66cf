// SPDX-License-Identifier: MPL-2.0
//! Button styles, one function per role.

use crate::ui::design_tokens::{border, opacity, palette, radius, shadow};
use iced::widget::button::{Status, Style};
use iced::{Background, Border, Color, Shadow, Theme};

fn filled(background: Color, text_color: Color, border: Border, shadow: Shadow) -> Style {
    Style {
        background: Some(Background::Color(background)),
        text_color,
        border,
        shadow,
        snap: true,
    }
}

fn rounded(radius: f32) -> Border {
    Border {
        radius: radius.into(),
        ..Border::default()
    }
}

/// Browse, start translation, download.
pub fn primary(_theme: &Theme, status: Status) -> Style {
    let outline = |color| Border {
        color,
        width: border::WIDTH_SM,
        radius: radius::MD.into(),
    };
    match status {
        Status::Disabled => filled(
            palette::GRAY_200,
            palette::GRAY_400,
            outline(palette::GRAY_400),
            shadow::NONE,
        ),
        Status::Hovered => filled(
            palette::PRIMARY_700,
            palette::WHITE,
            outline(palette::PRIMARY_700),
            shadow::MD,
        ),
        Status::Active | Status::Pressed => filled(
            palette::PRIMARY_600,
            palette::WHITE,
            outline(palette::PRIMARY_700),
            shadow::SM,
        ),
    }
}

/// Result tab header; the selected one gets a brand underline.
pub fn tab(active: bool) -> impl Fn(&Theme, Status) -> Style {
    move |theme, status| {
        let text_color = if active {
            palette::PRIMARY_600
        } else if status == Status::Hovered {
            theme.extended_palette().background.base.text
        } else {
            palette::GRAY_500
        };
        let underline = if active {
            Border {
                color: palette::PRIMARY_600,
                width: border::WIDTH_MD,
                radius: 0.0.into(),
            }
        } else {
            Border::default()
        };

        Style {
            background: None,
            text_color,
            border: underline,
            shadow: shadow::NONE,
            snap: true,
        }
    }
}

/// Round play/subtitle control over the preview. `highlighted` marks a
/// toggle that is on.
pub fn overlay(highlighted: bool) -> impl Fn(&Theme, Status) -> Style {
    move |_theme, status| {
        let background = match (highlighted, status) {
            (true, _) => palette::PRIMARY_600,
            (false, Status::Hovered) => Color {
                a: opacity::OVERLAY_STRONG,
                ..palette::WHITE
            },
            (false, _) => Color {
                a: opacity::OVERLAY_SUBTLE,
                ..palette::WHITE
            },
        };
        filled(background, palette::WHITE, rounded(radius::FULL), shadow::NONE)
    }
}

/// Share target button in the target's own color.
pub fn share(color: Color) -> impl Fn(&Theme, Status) -> Style {
    move |_theme, status| {
        let a = if status == Status::Hovered {
            opacity::OVERLAY_HOVER
        } else {
            opacity::OPAQUE
        };
        filled(Color { a, ..color }, palette::WHITE, rounded(radius::MD), shadow::NONE)
    }
}

/// No chrome until hovered (toast close).
pub fn ghost(theme: &Theme, status: Status) -> Style {
    let tint = |a| {
        Some(Background::Color(Color {
            a,
            ..palette::GRAY_400
        }))
    };
    Style {
        background: match status {
            Status::Hovered => tint(opacity::OVERLAY_SUBTLE),
            Status::Pressed => tint(opacity::OVERLAY_MEDIUM),
            Status::Active | Status::Disabled => None,
        },
        text_color: theme.extended_palette().background.base.text,
        border: rounded(radius::SM),
        shadow: shadow::NONE,
        snap: true,
    }
}

/// Click target wrapping the drop zone; the inner container draws the
/// dashed frame and tint.
pub fn drop_zone(theme: &Theme, _status: Status) -> Style {
    Style {
        background: None,
        text_color: theme.extended_palette().background.base.text,
        border: Border::default(),
        shadow: shadow::NONE,
        snap: true,
    }
}
