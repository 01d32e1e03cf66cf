// SPDX-License-Identifier: MPL-2.0
//! Container styles.

use crate::ui::design_tokens::{border, opacity, palette, radius, shadow};
use iced::widget::container;
use iced::{Background, Border, Color, Theme};

/// Card holding the active step.
///
/// The color is derived from the active Iced `Theme` background so cards stay
/// readable in both light and dark modes.
pub fn card(theme: &Theme) -> container::Style {
    let base = theme.extended_palette().background.base.color;

    container::Style {
        background: Some(Background::Color(Color {
            a: opacity::SURFACE,
            ..base
        })),
        border: Border {
            radius: radius::LG.into(),
            ..Default::default()
        },
        shadow: shadow::LG,
        ..Default::default()
    }
}

/// Soft tinted box (summary, processing info, feature tiles).
pub fn panel(theme: &Theme) -> container::Style {
    let weak = theme.extended_palette().background.weak.color;

    container::Style {
        background: Some(Background::Color(weak)),
        border: Border {
            radius: radius::MD.into(),
            ..Default::default()
        },
        ..Default::default()
    }
}

/// Brand-tinted box (selected file, processing information).
pub fn highlight(theme: &Theme) -> container::Style {
    let tint = if theme.extended_palette().is_dark {
        Color {
            a: opacity::OVERLAY_SUBTLE,
            ..palette::PRIMARY_500
        }
    } else {
        palette::PRIMARY_100
    };

    container::Style {
        background: Some(Background::Color(tint)),
        border: Border {
            radius: radius::MD.into(),
            ..Default::default()
        },
        ..Default::default()
    }
}

/// Dashed-looking drop area; brand colored while a file hovers the window.
pub fn drop_zone(dragging: bool) -> impl Fn(&Theme) -> container::Style {
    move |theme: &Theme| {
        let (border_color, background) = if dragging {
            (
                palette::PRIMARY_500,
                Some(Background::Color(Color {
                    a: opacity::OVERLAY_SUBTLE,
                    ..palette::PRIMARY_400
                })),
            )
        } else {
            (palette::GRAY_400, None)
        };

        container::Style {
            background,
            border: Border {
                color: border_color,
                width: border::WIDTH_MD,
                radius: radius::MD.into(),
            },
            text_color: Some(theme.palette().text),
            ..Default::default()
        }
    }
}

/// Step circle; filled once the step is reached.
pub fn step_circle(reached: bool) -> impl Fn(&Theme) -> container::Style {
    move |theme: &Theme| {
        let (background, text_color) = if reached {
            (palette::PRIMARY_600, palette::WHITE)
        } else if theme.extended_palette().is_dark {
            (palette::GRAY_700, palette::GRAY_400)
        } else {
            (palette::GRAY_200, palette::GRAY_500)
        };

        container::Style {
            background: Some(Background::Color(background)),
            text_color: Some(text_color),
            border: Border {
                radius: radius::FULL.into(),
                ..Default::default()
            },
            ..Default::default()
        }
    }
}

/// Bar joining two step circles.
pub fn connector(reached: bool) -> impl Fn(&Theme) -> container::Style {
    move |theme: &Theme| {
        let color = if reached {
            palette::PRIMARY_600
        } else if theme.extended_palette().is_dark {
            palette::GRAY_700
        } else {
            palette::GRAY_200
        };
        container::Style {
            background: Some(Background::Color(color)),
            ..Default::default()
        }
    }
}

/// Round badge behind a processing stage glyph.
pub fn stage_badge(color: Color) -> impl Fn(&Theme) -> container::Style {
    move |_theme: &Theme| container::Style {
        background: Some(Background::Color(Color {
            a: opacity::OVERLAY_SUBTLE,
            ..color
        })),
        text_color: Some(color),
        border: Border {
            radius: radius::FULL.into(),
            ..Default::default()
        },
        ..Default::default()
    }
}

/// Black video surface.
pub fn preview(_theme: &Theme) -> container::Style {
    container::Style {
        background: Some(Background::Color(palette::GRAY_900)),
        text_color: Some(palette::WHITE),
        border: Border {
            radius: radius::MD.into(),
            ..Default::default()
        },
        ..Default::default()
    }
}

/// Subtitle strip over the preview.
pub fn subtitle(_theme: &Theme) -> container::Style {
    container::Style {
        background: Some(Background::Color(Color {
            a: opacity::OVERLAY_STRONG,
            ..palette::BLACK
        })),
        text_color: Some(palette::WHITE),
        border: Border {
            radius: radius::SM.into(),
            ..Default::default()
        },
        ..Default::default()
    }
}

/// Window header bar.
pub fn header(theme: &Theme) -> container::Style {
    let base = theme.extended_palette().background.base.color;
    container::Style {
        background: Some(Background::Color(base)),
        shadow: shadow::SM,
        ..Default::default()
    }
}

/// Thin filled rectangle, used for the fake timeline.
pub fn fill(color: Color) -> impl Fn(&Theme) -> container::Style {
    move |_theme: &Theme| container::Style {
        background: Some(Background::Color(color)),
        border: Border {
            radius: radius::FULL.into(),
            ..Default::default()
        },
        ..Default::default()
    }
}
