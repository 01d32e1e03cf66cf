// SPDX-License-Identifier: MPL-2.0
//! User interface components.
//!
//! Each wizard step is a component following the Elm-style "state down,
//! messages up" pattern: a `ViewContext` borrowed from the app, a local
//! `Message`, an `Event` reported to the parent and a pure `update`.
//!
//! # Steps
//!
//! - [`upload_area`] - Drop zone and file dialog
//! - [`language_selector`] - Source and target language choice
//! - [`processing_status`] - Progress bar and stage list
//! - [`video_player`] - Result preview with download and share controls
//!
//! # Shared Infrastructure
//!
//! - [`step_indicator`] - Four-step progress header
//! - [`notifications`] - Toast notification system for user feedback
//! - [`styles`] - Centralized styling (buttons, containers)
//! - [`design_tokens`] - Design system constants (colors, spacing, sizing)
//! - [`theming`] - Light/Dark/System theme mode management

pub mod design_tokens;
pub mod language_selector;
pub mod notifications;
pub mod processing_status;
pub mod step_indicator;
pub mod styles;
pub mod theming;
pub mod upload_area;
pub mod video_player;
