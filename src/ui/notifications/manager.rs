// SPDX-License-Identifier: MPL-2.0
//! Queue of toasts: at most [`MAX_VISIBLE`] on screen, the rest wait.

use super::notification::{Notification, NotificationId, Severity};
use std::collections::VecDeque;
use std::time::Instant;

pub const MAX_VISIBLE: usize = 3;

#[derive(Debug, Clone)]
pub enum Message {
    Dismiss(NotificationId),
    /// Periodic check for expired toasts.
    Tick,
}

#[derive(Debug, Default)]
pub struct Manager {
    visible: VecDeque<Notification>,
    queued: VecDeque<Notification>,
}

impl Manager {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    pub fn push(&mut self, notification: Notification) {
        match notification.severity() {
            Severity::Error => tracing::debug!(key = notification.key(), "error toast"),
            Severity::Warning => tracing::debug!(key = notification.key(), "warning toast"),
            Severity::Success | Severity::Info => {}
        }

        if self.visible.len() < MAX_VISIBLE {
            self.visible.push_front(notification);
        } else {
            self.queued.push_back(notification);
        }
    }

    /// Removes a toast wherever it is. Returns `false` if it was unknown.
    pub fn dismiss(&mut self, id: NotificationId) -> bool {
        if let Some(pos) = self.visible.iter().position(|n| n.id() == id) {
            self.visible.remove(pos);
            self.refill();
            return true;
        }
        if let Some(pos) = self.queued.iter().position(|n| n.id() == id) {
            self.queued.remove(pos);
            return true;
        }
        false
    }

    /// Drops every visible toast that expired at `now`.
    pub fn expire(&mut self, now: Instant) {
        let before = self.visible.len();
        self.visible.retain(|n| !n.is_expired(now));
        if self.visible.len() < before {
            self.refill();
        }
    }

    pub fn handle_message(&mut self, message: &Message) {
        match message {
            Message::Dismiss(id) => {
                self.dismiss(*id);
            }
            Message::Tick => self.expire(Instant::now()),
        }
    }

    pub fn visible(&self) -> impl Iterator<Item = &Notification> {
        self.visible.iter()
    }

    #[must_use]
    pub fn visible_count(&self) -> usize {
        self.visible.len()
    }

    #[must_use]
    pub fn queued_count(&self) -> usize {
        self.queued.len()
    }

    #[must_use]
    pub fn has_notifications(&self) -> bool {
        !self.visible.is_empty() || !self.queued.is_empty()
    }

    fn refill(&mut self) {
        while self.visible.len() < MAX_VISIBLE {
            let Some(next) = self.queued.pop_front() else {
                break;
            };
            self.visible.push_back(next);
        }
    }
}
