// SPDX-License-Identifier: MPL-2.0
//! Design tokens shared by every widget style.
//!
//! Colors, spacing, sizes and type scale live here so the four wizard steps
//! stay visually consistent. Spacing follows an 8px grid.
//!
//! ```
//! use video_translate::ui::design_tokens::{opacity, palette, spacing};
//! use iced::Color;
//!
//! let tint = Color {
//!     a: opacity::OVERLAY_SUBTLE,
//!     ..palette::PRIMARY_400
//! };
//! let padding = spacing::MD;
//! # let _ = (tint, padding);
//! ```

/// Base colors. The brand hue is indigo.
pub mod palette {
    use iced::Color;

    pub const BLACK: Color = Color::BLACK;
    pub const WHITE: Color = Color::WHITE;

    pub const GRAY_900: Color = Color::from_rgb(0.1, 0.1, 0.12);
    pub const GRAY_700: Color = Color::from_rgb(0.3, 0.3, 0.34);
    pub const GRAY_500: Color = Color::from_rgb(0.42, 0.45, 0.5);
    pub const GRAY_400: Color = Color::from_rgb(0.61, 0.64, 0.69);
    pub const GRAY_200: Color = Color::from_rgb(0.9, 0.91, 0.92);
    pub const GRAY_100: Color = Color::from_rgb(0.95, 0.96, 0.96);

    pub const PRIMARY_100: Color = Color::from_rgb(0.88, 0.91, 1.0);
    pub const PRIMARY_400: Color = Color::from_rgb(0.51, 0.55, 0.97);
    pub const PRIMARY_500: Color = Color::from_rgb(0.39, 0.4, 0.95);
    pub const PRIMARY_600: Color = Color::from_rgb(0.31, 0.27, 0.9);
    pub const PRIMARY_700: Color = Color::from_rgb(0.26, 0.22, 0.79);

    /// Toast accents and stage states.
    pub const ERROR_500: Color = Color::from_rgb(0.937, 0.267, 0.267);
    pub const WARNING_500: Color = Color::from_rgb(0.961, 0.62, 0.043);
    pub const SUCCESS_500: Color = Color::from_rgb(0.133, 0.773, 0.369);
    pub const INFO_500: Color = Color::from_rgb(0.231, 0.51, 0.965);
}

pub mod opacity {
    pub const TRANSPARENT: f32 = 0.0;
    /// Drop zone tint, timeline track.
    pub const OVERLAY_SUBTLE: f32 = 0.2;
    pub const OVERLAY_MEDIUM: f32 = 0.5;
    /// Subtitle and player control backgrounds.
    pub const OVERLAY_STRONG: f32 = 0.7;
    pub const OVERLAY_HOVER: f32 = 0.8;
    /// Cards drawn over the window background.
    pub const SURFACE: f32 = 0.95;
    pub const OPAQUE: f32 = 1.0;
}

pub mod spacing {
    pub const XXS: f32 = 4.0;
    pub const XS: f32 = 8.0;
    pub const SM: f32 = 12.0;
    pub const MD: f32 = 16.0;
    pub const LG: f32 = 24.0;
    pub const XL: f32 = 32.0;
}

/// Fixed component dimensions.
pub mod sizing {
    pub const ICON_MD: f32 = 24.0;
    pub const ICON_LG: f32 = 32.0;
    pub const ICON_XL: f32 = 48.0;

    pub const STEP_CIRCLE: f32 = 40.0;
    pub const STEP_CONNECTOR: f32 = 4.0;

    /// Width cap of the step card and the "How it works" row.
    pub const CONTENT_MAX_WIDTH: f32 = 896.0;
    pub const DROP_ZONE_HEIGHT: f32 = 220.0;
    pub const PREVIEW_HEIGHT: f32 = 320.0;
    pub const PROGRESS_BAR_HEIGHT: f32 = 8.0;
    pub const TIMELINE_TRACK: f32 = 4.0;
    pub const TOAST_WIDTH: f32 = 340.0;
}

pub mod typography {
    /// Step card headings.
    pub const TITLE_MD: f32 = 24.0;
    /// Section headings and the brand name.
    pub const TITLE_SM: f32 = 18.0;
    pub const BODY_LG: f32 = 16.0;
    pub const BODY: f32 = 14.0;
    pub const BODY_SM: f32 = 13.0;
    pub const CAPTION: f32 = 12.0;
}

pub mod border {
    pub const WIDTH_SM: f32 = 1.0;
    pub const WIDTH_MD: f32 = 2.0;
}

pub mod radius {
    pub const SM: f32 = 4.0;
    pub const MD: f32 = 8.0;
    pub const LG: f32 = 12.0;
    /// Circles and pills.
    pub const FULL: f32 = 9999.0;
}

pub mod shadow {
    use super::palette;
    use iced::{Color, Shadow, Vector};

    const fn drop(alpha: f32, offset_y: f32, blur_radius: f32) -> Shadow {
        Shadow {
            color: Color {
                a: alpha,
                ..palette::BLACK
            },
            offset: Vector { x: 0.0, y: offset_y },
            blur_radius,
        }
    }

    pub const NONE: Shadow = drop(0.0, 0.0, 0.0);
    /// Buttons.
    pub const SM: Shadow = drop(0.15, 2.0, 4.0);
    /// Toasts.
    pub const MD: Shadow = drop(0.2, 4.0, 8.0);
    /// The step card.
    pub const LG: Shadow = drop(0.25, 8.0, 16.0);
}

const _: () = {
    assert!(spacing::XXS < spacing::XS);
    assert!(spacing::XS < spacing::SM);
    assert!(spacing::SM < spacing::MD);
    assert!(spacing::MD < spacing::LG);
    assert!(spacing::LG < spacing::XL);

    assert!(opacity::TRANSPARENT < opacity::OVERLAY_SUBTLE);
    assert!(opacity::OVERLAY_HOVER < opacity::SURFACE);
    assert!(opacity::SURFACE < opacity::OPAQUE);

    assert!(sizing::ICON_MD < sizing::ICON_LG);
    assert!(sizing::ICON_LG < sizing::ICON_XL);
    assert!(sizing::STEP_CONNECTOR < sizing::STEP_CIRCLE);
    assert!(sizing::PROGRESS_BAR_HEIGHT < sizing::STEP_CIRCLE);
    assert!(sizing::DROP_ZONE_HEIGHT < sizing::PREVIEW_HEIGHT);

    assert!(typography::TITLE_MD > typography::TITLE_SM);
    assert!(typography::TITLE_SM > typography::BODY_LG);
    assert!(typography::BODY_LG > typography::BODY);
    assert!(typography::BODY > typography::BODY_SM);
    assert!(typography::BODY_SM > typography::CAPTION);

    assert!(border::WIDTH_SM < border::WIDTH_MD);
    assert!(radius::SM < radius::MD && radius::MD < radius::LG);
};
