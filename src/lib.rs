// SPDX-License-Identifier: MPL-2.0
//! `video_translate` is a desktop video translation wizard built with the
//! Iced GUI framework.
//!
//! The user uploads a video, picks source and target languages, watches a
//! simulated processing run and previews the result. The video can
//! optionally be posted to a translation backend.

pub mod app;
pub mod config;
pub mod domain;
pub mod error;
pub mod i18n;
pub mod infrastructure;
pub mod ui;
