// SPDX-License-Identifier: MPL-2.0
//! A single toast and its severity.
//!
//! The text is stored as a Fluent key plus arguments and only resolved when
//! drawn, so switching the UI language also re-translates open toasts.

use crate::config::{NOTIFICATION_LONG_MS, NOTIFICATION_SHORT_MS};
use crate::ui::design_tokens::palette;
use iced::Color;
use std::sync::atomic::{AtomicU64, Ordering};
use std::time::{Duration, Instant};

static NEXT_ID: AtomicU64 = AtomicU64::new(1);

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct NotificationId(u64);

impl NotificationId {
    fn next() -> Self {
        Self(NEXT_ID.fetch_add(1, Ordering::Relaxed))
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Severity {
    Success,
    Info,
    /// Something failed but the wizard carries on, e.g. a backend error.
    Warning,
    /// Stays until the user closes it.
    Error,
}

impl Severity {
    /// Accent for the toast border and glyph.
    #[must_use]
    pub fn color(self) -> Color {
        match self {
            Self::Success => palette::SUCCESS_500,
            Self::Info => palette::INFO_500,
            Self::Warning => palette::WARNING_500,
            Self::Error => palette::ERROR_500,
        }
    }

    #[must_use]
    pub fn glyph(self) -> &'static str {
        match self {
            Self::Success => "✓",
            Self::Info => "i",
            Self::Warning | Self::Error => "!",
        }
    }

    /// How long the toast stays up; `None` means until dismissed.
    #[must_use]
    pub fn auto_dismiss_duration(self) -> Option<Duration> {
        let millis = match self {
            Self::Success | Self::Info => NOTIFICATION_SHORT_MS,
            Self::Warning => NOTIFICATION_LONG_MS,
            Self::Error => return None,
        };
        Some(Duration::from_millis(millis))
    }
}

#[derive(Debug, Clone)]
pub struct Notification {
    id: NotificationId,
    severity: Severity,
    key: String,
    args: Vec<(String, String)>,
    shown_at: Instant,
}

impl Notification {
    fn with_severity(severity: Severity, key: impl Into<String>) -> Self {
        Self {
            id: NotificationId::next(),
            severity,
            key: key.into(),
            args: Vec::new(),
            shown_at: Instant::now(),
        }
    }

    pub fn success(key: impl Into<String>) -> Self {
        Self::with_severity(Severity::Success, key)
    }

    pub fn info(key: impl Into<String>) -> Self {
        Self::with_severity(Severity::Info, key)
    }

    pub fn warning(key: impl Into<String>) -> Self {
        Self::with_severity(Severity::Warning, key)
    }

    pub fn error(key: impl Into<String>) -> Self {
        Self::with_severity(Severity::Error, key)
    }

    /// Adds a Fluent argument, e.g. `with_arg("name", "clip.mp4")`.
    #[must_use]
    pub fn with_arg(mut self, name: impl Into<String>, value: impl Into<String>) -> Self {
        self.args.push((name.into(), value.into()));
        self
    }

    #[must_use]
    pub fn id(&self) -> NotificationId {
        self.id
    }

    #[must_use]
    pub fn severity(&self) -> Severity {
        self.severity
    }

    #[must_use]
    pub fn message_key(&self) -> &str {
        &self.key
    }

    #[must_use]
    pub fn message_args(&self) -> &[(String, String)] {
        &self.args
    }

    #[must_use]
    pub fn is_expired_at(&self, now: Instant) -> bool {
        match self.severity.auto_dismiss_duration() {
            Some(lifetime) => now.saturating_duration_since(self.shown_at) >= lifetime,
            None => false,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn every_toast_gets_its_own_id() {
        let a = Notification::info("same-key");
        let b = Notification::info("same-key");
        assert_ne!(a.id(), b.id());
    }

    #[test]
    fn each_severity_has_its_own_accent() {
        let all = [
            Severity::Success,
            Severity::Info,
            Severity::Warning,
            Severity::Error,
        ];
        for (i, left) in all.iter().enumerate() {
            for right in &all[i + 1..] {
                assert_ne!(left.color(), right.color(), "{left:?} vs {right:?}");
            }
        }
    }

    #[test]
    fn errors_never_expire() {
        assert_eq!(Severity::Error.auto_dismiss_duration(), None);
        let toast = Notification::error("notification-upload-not-found");
        assert!(!toast.is_expired_at(Instant::now() + Duration::from_secs(3600)));
    }

    #[test]
    fn warnings_outlive_successes() {
        assert!(Severity::Warning.auto_dismiss_duration() > Severity::Success.auto_dismiss_duration());
    }

    #[test]
    fn success_toast_expires_after_short_duration() {
        let toast = Notification::success("notification-upload-complete");
        let start = Instant::now();
        assert!(!toast.is_expired_at(start));
        assert!(toast.is_expired_at(start + Duration::from_millis(NOTIFICATION_SHORT_MS + 10)));
    }

    #[test]
    fn arguments_are_kept_in_order() {
        let toast = Notification::error("notification-upload-not-video")
            .with_arg("name", "notes.txt")
            .with_arg("mime", "text/plain");

        assert_eq!(toast.severity(), Severity::Error);
        assert_eq!(toast.message_key(), "notification-upload-not-video");
        assert_eq!(
            toast.message_args(),
            [
                ("name".to_string(), "notes.txt".to_string()),
                ("mime".to_string(), "text/plain".to_string()),
            ]
        );
    }
}
