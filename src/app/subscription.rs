// SPDX-License-Identifier: MPL-2.0
//! Event subscriptions for the application.
//!
//! Four sources feed the update loop: the auth-change watcher (active
//! while the admin gate is mounted), the silent gallery refresh cadence,
//! keyboard routing for the focused photo viewer, and the notification
//! auto-dismiss tick.

use super::{Message, Screen};
use crate::application::port::IdentityProvider;
use crate::ui::gallery;
use iced::futures::SinkExt;
use iced::{keyboard, stream, time, Subscription};
use std::sync::Arc;
use std::time::Duration;
use tokio::sync::mpsc;

/// Subscription identity for the auth watcher.
/// Each gate mount gets a unique session so the watcher is re-registered
/// and delivers its immediate snapshot to the fresh gate.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
struct AuthWatchId(u64);

/// Streams auth-state transitions from the identity provider while the
/// admin gate is mounted.
///
/// The provider invokes the listener once at registration with the
/// current state, so the gate learns where it stands without waiting for
/// the next transition. Dropping the subscription (leaving the admin
/// screen) drops the watch, which unregisters the listener.
pub fn create_auth_subscription(
    identity: Arc<dyn IdentityProvider>,
    session: u64,
) -> Subscription<Message> {
    Subscription::run_with_id(
        AuthWatchId(session),
        stream::channel(16, move |mut output| async move {
            let (tx, mut rx) = mpsc::unbounded_channel();
            let _watch = identity.on_auth_change(Arc::new(move |identity| {
                let _ = tx.send(identity);
            }));

            while let Some(identity) = rx.recv().await {
                let _ = output
                    .send(Message::AuthChanged { session, identity })
                    .await;
            }
        }),
    )
}

/// Fires the silent gallery refresh on the configured cadence, but only
/// while the gallery is on screen.
pub fn create_refresh_subscription(screen: Screen, refresh_secs: u64) -> Subscription<Message> {
    if screen == Screen::Gallery {
        time::every(Duration::from_secs(refresh_secs)).map(|_| Message::RefreshTick)
    } else {
        Subscription::none()
    }
}

/// Routes Escape and the arrow keys to the focused photo viewer.
pub fn create_keyboard_subscription(screen: Screen, viewer_open: bool) -> Subscription<Message> {
    if screen == Screen::Gallery && viewer_open {
        keyboard::on_key_press(handle_viewer_key)
    } else {
        Subscription::none()
    }
}

fn handle_viewer_key(key: keyboard::Key, _modifiers: keyboard::Modifiers) -> Option<Message> {
    use keyboard::key::Named;

    match key {
        keyboard::Key::Named(Named::Escape) => {
            Some(Message::Gallery(gallery::Message::CloseViewer))
        }
        keyboard::Key::Named(Named::ArrowLeft) => {
            Some(Message::Gallery(gallery::Message::PreviousImage))
        }
        keyboard::Key::Named(Named::ArrowRight) => {
            Some(Message::Gallery(gallery::Message::NextImage))
        }
        _ => None,
    }
}

/// Drives notification auto-dismiss while any toast is on screen.
pub fn create_tick_subscription(has_notifications: bool) -> Subscription<Message> {
    if has_notifications {
        time::every(Duration::from_millis(100)).map(Message::Tick)
    } else {
        Subscription::none()
    }
}
