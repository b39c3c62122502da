// SPDX-License-Identifier: MPL-2.0
//! Toast queue with a bounded on-screen stack.
//!
//! At most three toasts show at once. Later arrivals wait in an
//! overflow queue and surface as slots free up, so a burst of save
//! confirmations cannot paper over the whole window.

use super::notification::{Notification, NotificationId};
use std::collections::VecDeque;

/// On-screen stack limit. Arrivals beyond this wait in the overflow queue.
const MAX_ON_SCREEN: usize = 3;

/// Emitted by the toast overlay.
#[derive(Debug, Clone)]
pub enum Message {
    Dismiss(NotificationId),
}

/// Holds the on-screen toasts plus the overflow queue behind them.
#[derive(Debug, Default)]
pub struct Manager {
    // Oldest first; `visible` reverses so the newest toast draws on top.
    on_screen: Vec<Notification>,
    overflow: VecDeque<Notification>,
}

impl Manager {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Shows the toast now if a slot is free, otherwise queues it.
    pub fn push(&mut self, notification: Notification) {
        if self.on_screen.len() < MAX_ON_SCREEN {
            self.on_screen.push(notification);
        } else {
            self.overflow.push_back(notification);
        }
    }

    /// Removes the toast with the given id, wherever it currently lives.
    /// Freed slots are backfilled from the overflow queue.
    pub fn dismiss(&mut self, id: NotificationId) -> bool {
        if let Some(index) = self.on_screen.iter().position(|toast| toast.id() == id) {
            self.on_screen.remove(index);
            self.backfill();
            return true;
        }

        let before = self.overflow.len();
        self.overflow.retain(|toast| toast.id() != id);
        self.overflow.len() < before
    }

    /// Drops every on-screen toast whose display time is up. Driven by
    /// the application tick while any toast is showing.
    pub fn tick(&mut self) {
        let expired: Vec<NotificationId> = self
            .on_screen
            .iter()
            .filter(|toast| toast.expired())
            .map(Notification::id)
            .collect();

        for id in expired {
            self.dismiss(id);
        }
    }

    /// On-screen toasts, newest first.
    pub fn visible(&self) -> impl Iterator<Item = &Notification> {
        self.on_screen.iter().rev()
    }

    #[must_use]
    pub fn visible_count(&self) -> usize {
        self.on_screen.len()
    }

    #[must_use]
    pub fn queued_count(&self) -> usize {
        self.overflow.len()
    }

    #[must_use]
    pub fn has_notifications(&self) -> bool {
        !self.on_screen.is_empty() || !self.overflow.is_empty()
    }

    fn backfill(&mut self) {
        while self.on_screen.len() < MAX_ON_SCREEN {
            match self.overflow.pop_front() {
                Some(toast) => self.on_screen.push(toast),
                None => break,
            }
        }
    }
}
