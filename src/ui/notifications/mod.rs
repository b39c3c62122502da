// SPDX-License-Identifier: MPL-2.0
//! Toast notifications for transient feedback.
//!
//! Record saves, deletions, and config problems surface as toasts in
//! the bottom-right corner instead of blocking dialogs. A toast holds a
//! Fluent key (not resolved text) so it follows the active locale, and
//! the [`Manager`] caps how many show at once.
//!
//! Severity drives the lifecycle: success toasts leave after a few
//! seconds, warnings linger a little longer, and errors stay until the
//! user dismisses them. Expiry is driven by the application tick via
//! [`Manager::tick`].
//!
//! ```ignore
//! manager.push(Notification::success("notification-record-saved"));
//! let overlay = Toast::view_overlay(&manager, &i18n).map(Message::Notification);
//! ```

mod manager;
mod notification;
mod toast;

pub use manager::{Manager, Message as NotificationMessage};
pub use notification::{Notification, Severity};
pub use toast::Toast;
