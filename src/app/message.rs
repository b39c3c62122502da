// SPDX-License-Identifier: MPL-2.0
//! Top-level messages and runtime flags for the application.

use crate::application::port::{AuthError, ClaimsError, ImageLoadError};
use crate::domain::auth::{ClaimSet, Identity};
use crate::domain::content::{Announcement, CommunityEvent, Contact};
use crate::domain::gallery::GalleryImage;
use crate::ui::admin::{self, AdminTab};
use crate::ui::notifications::NotificationMessage;
use crate::ui::{about, contacts, events, facilities, gallery, home, navbar, sign_in};
use iced::widget::image;
use std::time::Instant;

/// Top-level messages consumed by `App::update`. The screen variants
/// forward lower-level component messages while keeping a single update
/// entrypoint; the rest carry the outcomes of background work.
#[derive(Debug, Clone)]
pub enum Message {
    Navbar(navbar::Message),
    Home(home::Message),
    About(about::Message),
    Facilities(facilities::Message),
    Events(events::Message),
    Gallery(gallery::Message),
    Contacts(contacts::Message),
    SignIn(sign_in::Message),
    Admin(admin::Message),
    Notification(NotificationMessage),

    /// Outcome of a gallery collection fetch.
    GalleryLoaded {
        result: Result<Vec<GalleryImage>, String>,
        silent: bool,
    },
    /// Outcome of an events collection fetch.
    EventsLoaded(Result<Vec<CommunityEvent>, String>),
    /// Outcome of an announcements collection fetch.
    AnnouncementsLoaded(Result<Vec<Announcement>, String>),
    /// Outcome of a contacts collection fetch.
    ContactsLoaded(Result<Vec<Contact>, String>),

    /// A thumbnail download finished, keyed by photo id.
    ThumbnailFetched {
        id: String,
        result: Result<image::Handle, ImageLoadError>,
    },
    /// A full-size download for the focused viewer finished.
    FullImageFetched {
        id: String,
        result: Result<image::Handle, ImageLoadError>,
    },

    /// Outcome of the sign-in request.
    SignInCompleted(Result<Identity, AuthError>),
    /// Auth-state transition reported by the watcher of the given gate
    /// session.
    AuthChanged {
        session: u64,
        identity: Option<Identity>,
    },
    /// Claim fetch result for the given gate session and epoch.
    ClaimsFetched {
        session: u64,
        epoch: u64,
        result: Result<ClaimSet, ClaimsError>,
    },

    /// Outcome of an admin create or update.
    SaveCompleted {
        tab: AdminTab,
        result: Result<(), String>,
    },
    /// Outcome of an admin delete.
    DeleteCompleted {
        tab: AdminTab,
        result: Result<(), String>,
    },

    /// The silent gallery refresh cadence fired.
    RefreshTick,
    /// Periodic tick for notification auto-dismiss.
    Tick(Instant),
}

/// Runtime flags passed in from the CLI to tweak startup behavior.
#[derive(Debug, Default)]
pub struct Flags {
    /// Optional locale override in BCP-47 form (e.g. `hi`, `en-US`).
    pub lang: Option<String>,
}
