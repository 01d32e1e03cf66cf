// SPDX-License-Identifier: MPL-2.0
//! Toast queue.
//!
//! At most [`MAX_VISIBLE`] toasts are on screen; the rest wait in arrival
//! order and move up as on-screen toasts expire or get dismissed.

use super::notification::{Notification, NotificationId, Severity};
use std::collections::VecDeque;
use std::time::Instant;

pub const MAX_VISIBLE: usize = 3;

#[derive(Debug, Clone)]
pub enum Message {
    /// The user closed a toast.
    Dismiss(NotificationId),
    /// Periodic expiry check.
    Tick,
}

#[derive(Debug, Default)]
pub struct Manager {
    /// On-screen toasts, newest at the front.
    shown: VecDeque<Notification>,
    /// Waiting toasts, oldest at the front.
    pending: VecDeque<Notification>,
}

impl Manager {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Adds a toast, or parks it when the screen is full.
    ///
    /// Warnings and errors also go to the log so they survive after the
    /// toast is gone.
    pub fn push(&mut self, notification: Notification) {
        let key = notification.message_key();
        let args = notification.message_args();
        match notification.severity() {
            Severity::Error => tracing::error!(key, ?args, "notification"),
            Severity::Warning => tracing::warn!(key, ?args, "notification"),
            Severity::Success | Severity::Info => tracing::debug!(key, "notification"),
        }

        if self.shown.len() >= MAX_VISIBLE {
            self.pending.push_back(notification);
        } else {
            self.shown.push_front(notification);
        }
    }

    /// Removes the toast with `id`, wherever it is. Returns `false` when no
    /// such toast exists.
    pub fn dismiss(&mut self, id: NotificationId) -> bool {
        if take_by_id(&mut self.shown, id) {
            self.refill();
            true
        } else {
            take_by_id(&mut self.pending, id)
        }
    }

    /// Drops on-screen toasts whose display time ran out by `now`.
    pub fn tick_at(&mut self, now: Instant) {
        let before = self.shown.len();
        self.shown.retain(|n| !n.is_expired_at(now));
        if self.shown.len() != before {
            self.refill();
        }
    }

    pub fn tick(&mut self) {
        self.tick_at(Instant::now());
    }

    pub fn handle_message(&mut self, message: &Message) {
        match *message {
            Message::Dismiss(id) => {
                self.dismiss(id);
            }
            Message::Tick => self.tick(),
        }
    }

    pub fn visible(&self) -> impl Iterator<Item = &Notification> {
        self.shown.iter()
    }

    #[must_use]
    pub fn visible_count(&self) -> usize {
        self.shown.len()
    }

    #[must_use]
    pub fn queued_count(&self) -> usize {
        self.pending.len()
    }

    #[must_use]
    pub fn has_notifications(&self) -> bool {
        !(self.shown.is_empty() && self.pending.is_empty())
    }

    fn refill(&mut self) {
        while self.shown.len() < MAX_VISIBLE {
            let Some(next) = self.pending.pop_front() else {
                break;
            };
            self.shown.push_back(next);
        }
    }
}

fn take_by_id(list: &mut VecDeque<Notification>, id: NotificationId) -> bool {
    match list.iter().position(|n| n.id() == id) {
        Some(index) => list.remove(index).is_some(),
        None => false,
    }
}
