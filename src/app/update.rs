// SPDX-License-Identifier: MPL-2.0
//! Update logic and message handlers for the application.
//!
//! This module contains the main `update` function, the navigation and
//! data-fetch orchestration, and the side effects demanded by the admin
//! access gate.

use super::{App, Message, Screen, ADMIN_CLAIM};
use crate::application::guard::{AccessGate, GateDirective};
use crate::application::port::{AuthError, ImageFetcher};
use crate::domain::auth::Identity;
use crate::domain::content::{sort_by_date, sort_newest_first};
use crate::domain::gallery::GalleryImage;
use crate::infrastructure::cdn::ImageCdn;
use crate::ui::admin::{self, AdminTab, Record};
use crate::ui::notifications::{Notification, NotificationMessage};
use crate::ui::{about, contacts, events, facilities, gallery, home, navbar, sign_in};
use iced::widget::image;
use iced::Task;
use std::sync::Arc;

pub(super) fn update(app: &mut App, message: Message) -> Task<Message> {
    match message {
        Message::Navbar(message) => handle_navbar(app, &message),
        Message::Home(message) => match home::update(&message) {
            home::Event::GalleryRequested => navigate(app, Screen::Gallery),
            home::Event::EventsRequested => navigate(app, Screen::Events),
        },
        Message::About(message) => match about::update(&message) {
            about::Event::ContactsRequested => navigate(app, Screen::Contacts),
        },
        Message::Facilities(message) => match facilities::update(&message) {
            facilities::Event::GalleryRequested => navigate(app, Screen::Gallery),
        },
        Message::Events(message) => match events::update(&message) {
            events::Event::ReloadRequested => load_events(app),
        },
        Message::Contacts(message) => match contacts::update(&mut app.contacts_ui, message) {
            contacts::Event::None => Task::none(),
            contacts::Event::ReloadRequested => load_contacts(app),
        },
        Message::Gallery(message) => handle_gallery(app, message),
        Message::SignIn(message) => handle_sign_in(app, message),
        Message::Admin(message) => handle_admin(app, message),
        Message::Notification(NotificationMessage::Dismiss(id)) => {
            app.notifications.dismiss(id);
            Task::none()
        }

        Message::GalleryLoaded { result, silent } => {
            app.browser.finish_load(result, silent);
            // A refresh may have brought new photos onto the visible page
            // or swapped the focused one.
            Task::batch([fetch_missing_thumbnails(app), fetch_focused_full(app)])
        }
        Message::EventsLoaded(result) => {
            app.events.finish_load(result.map(|mut items| {
                sort_by_date(&mut items);
                items
            }));
            Task::none()
        }
        Message::AnnouncementsLoaded(result) => {
            app.announcements.finish_load(result.map(|mut items| {
                sort_newest_first(&mut items);
                items
            }));
            Task::none()
        }
        Message::ContactsLoaded(result) => {
            app.contacts.finish_load(result);
            Task::none()
        }

        Message::ThumbnailFetched { id, result } => {
            match result {
                Ok(handle) => app.thumbnails.complete(id, handle),
                Err(_) => app.thumbnails.fail(id),
            }
            Task::none()
        }
        Message::FullImageFetched { id, result } => {
            match result {
                Ok(handle) => app.full_images.complete(id, handle),
                Err(_) => app.full_images.fail(id),
            }
            Task::none()
        }

        Message::SignInCompleted(result) => handle_sign_in_completed(app, result),
        Message::AuthChanged { session, identity } => handle_auth_changed(app, session, identity),
        Message::ClaimsFetched {
            session,
            epoch,
            result,
        } => {
            if session != app.gate_session {
                return Task::none();
            }
            let directive = match &mut app.gate {
                Some(gate) => gate.on_claims(epoch, result),
                None => GateDirective::None,
            };
            run_gate_directive(app, directive)
        }

        Message::SaveCompleted { tab, result } => handle_save_completed(app, tab, result),
        Message::DeleteCompleted { tab, result } => handle_delete_completed(app, tab, result),

        Message::RefreshTick => {
            if app.screen == Screen::Gallery {
                load_gallery(app, true)
            } else {
                Task::none()
            }
        }
        Message::Tick(_) => {
            app.notifications.tick();
            Task::none()
        }
    }
}

// =============================================================================
// Navigation
// =============================================================================

/// Switches to `screen` and starts whatever fetches it needs.
///
/// Entering the admin area mounts a fresh access gate; leaving it drops
/// the gate, so a later visit gets its own redirect budget. Leaving the
/// gallery closes an open photo viewer. Navigating to the current screen
/// is a no-op.
fn navigate(app: &mut App, screen: Screen) -> Task<Message> {
    if app.screen == screen {
        return Task::none();
    }
    if app.screen == Screen::Admin {
        app.gate = None;
    }
    if app.screen == Screen::Gallery {
        app.browser.close_image();
    }
    app.screen = screen;

    match screen {
        Screen::Home => Task::batch([load_announcements(app), load_events(app)]),
        Screen::Events => load_events(app),
        Screen::Contacts => load_contacts(app),
        Screen::Gallery => refresh_gallery(app),
        Screen::Admin => mount_admin(app),
        Screen::About | Screen::Facilities | Screen::SignIn => Task::none(),
    }
}

/// Mounts the admin area: a fresh gate, fresh back-office state, and a
/// fetch of all four collections.
///
/// The gate's first verdict arrives through the auth watcher, which
/// fires immediately with the current state once the new subscription
/// registers.
fn mount_admin(app: &mut App) -> Task<Message> {
    app.gate_session += 1;
    app.gate = Some(AccessGate::new(Some(ADMIN_CLAIM.to_string())));
    app.admin = admin::State::new();

    Task::batch([
        load_events(app),
        load_announcements(app),
        load_contacts(app),
        refresh_gallery(app),
    ])
}

fn handle_navbar(app: &mut App, message: &navbar::Message) -> Task<Message> {
    match navbar::update(message) {
        navbar::Event::Navigate(tab) => navigate(app, Screen::from(tab)),
        navbar::Event::SignInRequested => {
            app.return_to = Some(app.screen).filter(|screen| *screen != Screen::SignIn);
            navigate(app, Screen::SignIn)
        }
        navbar::Event::SignOutRequested => {
            // Leave the admin screen before the watcher reports the
            // sign-out, so a deliberate sign-out lands on Home instead
            // of the gate's sign-in redirect.
            app.identity.sign_out();
            app.identity_snapshot = None;
            navigate(app, Screen::Home)
        }
    }
}

// =============================================================================
// Collection fetches
// =============================================================================

pub(super) fn load_events(app: &mut App) -> Task<Message> {
    app.events.begin_load();
    let store = app.store.clone();
    Task::perform(
        async move { store.list_events().await.map_err(|error| error.to_string()) },
        Message::EventsLoaded,
    )
}

pub(super) fn load_announcements(app: &mut App) -> Task<Message> {
    app.announcements.begin_load();
    let store = app.store.clone();
    Task::perform(
        async move {
            store
                .list_announcements()
                .await
                .map_err(|error| error.to_string())
        },
        Message::AnnouncementsLoaded,
    )
}

fn load_contacts(app: &mut App) -> Task<Message> {
    app.contacts.begin_load();
    let store = app.store.clone();
    Task::perform(
        async move {
            store
                .list_contacts()
                .await
                .map_err(|error| error.to_string())
        },
        Message::ContactsLoaded,
    )
}

fn load_gallery(app: &mut App, silent: bool) -> Task<Message> {
    app.browser.begin_load(silent);
    let store = app.store.clone();
    Task::perform(
        async move {
            store
                .list_gallery()
                .await
                .map_err(|error| error.to_string())
        },
        move |result| Message::GalleryLoaded { result, silent },
    )
}

/// Fetches the gallery again; silently when good content is already on
/// screen, loudly when the grid is empty or showing an error.
fn refresh_gallery(app: &mut App) -> Task<Message> {
    let silent = app.browser.error().is_none() && !app.browser.is_empty();
    load_gallery(app, silent)
}

// =============================================================================
// Gallery
// =============================================================================

fn handle_gallery(app: &mut App, message: gallery::Message) -> Task<Message> {
    match gallery::update(&mut app.browser, message) {
        gallery::Event::None => Task::none(),
        gallery::Event::ReloadRequested => {
            // A manual retry also gives previously failed photos another
            // chance.
            app.thumbnails.clear_failures();
            app.full_images.clear_failures();
            load_gallery(app, false)
        }
        gallery::Event::VisibleChanged => fetch_missing_thumbnails(app),
        gallery::Event::FocusChanged => fetch_focused_full(app),
    }
}

/// Starts downloads for every photo on the visible page that has no
/// cached thumbnail yet.
fn fetch_missing_thumbnails(app: &mut App) -> Task<Message> {
    let wanted: Vec<GalleryImage> = app
        .browser
        .visible_page()
        .into_iter()
        .cloned()
        .collect();

    let mut downloads = Vec::new();
    for photo in wanted {
        if !app.thumbnails.begin(&photo.id) {
            continue;
        }
        let (primary, fallback) = thumbnail_sources(&app.cdn, &photo, app.thumbnail_width);
        let Some(primary) = primary else {
            // Nothing to download from; the grid shows the unavailable
            // placeholder.
            app.thumbnails.fail(photo.id);
            continue;
        };
        downloads.push(fetch_image_task(
            app.images.clone(),
            photo.id,
            primary,
            fallback,
            false,
        ));
    }

    Task::batch(downloads)
}

/// Starts the full-size download for the focused photo, if it is not
/// already cached or in flight.
fn fetch_focused_full(app: &mut App) -> Task<Message> {
    let Some(photo) = app.browser.focused().cloned() else {
        return Task::none();
    };
    if !app.full_images.begin(&photo.id) {
        return Task::none();
    }
    let (primary, fallback) = full_sources(&app.cdn, &photo);
    let Some(primary) = primary else {
        app.full_images.fail(photo.id);
        return Task::none();
    };
    fetch_image_task(app.images.clone(), photo.id, primary, fallback, true)
}

/// Primary and fallback source URLs for a photo's grid thumbnail.
///
/// CDN-hosted photos try the width-bound rendition first and fall back
/// to the original upload; direct uploads only have the one URL.
fn thumbnail_sources(
    cdn: &ImageCdn,
    photo: &GalleryImage,
    width: u32,
) -> (Option<String>, Option<String>) {
    if !photo.public_id.is_empty() {
        let fallback = (!photo.url.is_empty()).then(|| photo.url.clone());
        (Some(cdn.thumbnail_url(&photo.public_id, width)), fallback)
    } else if !photo.url.is_empty() {
        (Some(photo.url.clone()), None)
    } else {
        (None, None)
    }
}

/// Rendition width requested for the focused viewer. Twice the viewer's
/// layout cap, so 2x-scale displays stay sharp.
const FULL_IMAGE_WIDTH: u32 = 2200;

/// Primary and fallback source URLs for the focused viewer.
fn full_sources(cdn: &ImageCdn, photo: &GalleryImage) -> (Option<String>, Option<String>) {
    if !photo.public_id.is_empty() {
        let fallback = (!photo.url.is_empty()).then(|| photo.url.clone());
        (
            Some(cdn.optimized_url(&photo.public_id, FULL_IMAGE_WIDTH)),
            fallback,
        )
    } else if !photo.url.is_empty() {
        (Some(photo.url.clone()), None)
    } else {
        (None, None)
    }
}

/// Downloads one image, trying `fallback` once when the primary source
/// fails, and reports through the thumbnail or full-size channel.
fn fetch_image_task(
    images: Arc<dyn ImageFetcher>,
    id: String,
    primary: String,
    fallback: Option<String>,
    full_size: bool,
) -> Task<Message> {
    Task::perform(
        async move {
            let bytes = match images.fetch(primary).await {
                Ok(bytes) => Ok(bytes),
                Err(error) => match fallback {
                    Some(url) => images.fetch(url).await.map_err(|_| error),
                    None => Err(error),
                },
            };
            (id, bytes.map(image::Handle::from_bytes))
        },
        move |(id, result)| {
            if full_size {
                Message::FullImageFetched { id, result }
            } else {
                Message::ThumbnailFetched { id, result }
            }
        },
    )
}

// =============================================================================
// Session
// =============================================================================

fn handle_sign_in(app: &mut App, message: sign_in::Message) -> Task<Message> {
    match sign_in::update(&mut app.sign_in, message) {
        sign_in::Event::None => Task::none(),
        sign_in::Event::CredentialsSubmitted { email, password } => {
            let identity = app.identity.clone();
            Task::perform(
                async move { identity.sign_in(email, password).await },
                Message::SignInCompleted,
            )
        }
    }
}

fn handle_sign_in_completed(app: &mut App, result: Result<Identity, AuthError>) -> Task<Message> {
    match result {
        Ok(identity) => {
            app.identity_snapshot = Some(identity);
            app.sign_in.reset();
            let destination = app.return_to.take().unwrap_or(Screen::Admin);
            navigate(app, destination)
        }
        Err(error) => {
            let key = match error {
                AuthError::InvalidCredentials => "sign-in-error-invalid",
                AuthError::Network(_) => "sign-in-error-network",
                AuthError::Rejected(_) => "sign-in-error-rejected",
            };
            app.sign_in.finish_failure(app.i18n.tr(key));
            Task::none()
        }
    }
}

fn handle_auth_changed(
    app: &mut App,
    session: u64,
    identity: Option<Identity>,
) -> Task<Message> {
    // A watcher from a dropped gate may still flush its queue.
    if session != app.gate_session {
        return Task::none();
    }
    app.identity_snapshot = identity.clone();

    let directive = match &mut app.gate {
        Some(gate) => gate.on_auth_change(identity.as_ref()),
        None => GateDirective::None,
    };
    run_gate_directive(app, directive)
}

/// Executes the side effect the access gate asked for.
fn run_gate_directive(app: &mut App, directive: GateDirective) -> Task<Message> {
    match directive {
        GateDirective::None => Task::none(),
        GateDirective::FetchClaims {
            epoch,
            force_refresh,
        } => {
            let identity = app.identity.clone();
            let session = app.gate_session;
            Task::perform(
                async move { identity.fetch_claims(force_refresh).await },
                move |result| Message::ClaimsFetched {
                    session,
                    epoch,
                    result,
                },
            )
        }
        GateDirective::Deny { sign_out, redirect } => {
            if sign_out {
                app.identity.sign_out();
                app.identity_snapshot = None;
            }
            if redirect {
                app.return_to = Some(Screen::Admin);
                navigate(app, Screen::SignIn)
            } else {
                Task::none()
            }
        }
    }
}

// =============================================================================
// Back-office
// =============================================================================

fn handle_admin(app: &mut App, message: admin::Message) -> Task<Message> {
    match admin::update(&mut app.admin, message) {
        admin::Event::None => Task::none(),
        admin::Event::ReloadRequested => reload_admin_tab(app, app.admin.tab()),
        admin::Event::Save(record) => save_record(app, record),
        admin::Event::Delete { tab, id } => delete_record(app, tab, id),
    }
}

fn reload_admin_tab(app: &mut App, tab: AdminTab) -> Task<Message> {
    match tab {
        AdminTab::Events => load_events(app),
        AdminTab::Announcements => load_announcements(app),
        AdminTab::Contacts => load_contacts(app),
        AdminTab::Gallery => refresh_gallery(app),
    }
}

/// Runs the store write for a submitted form and reports on the tab it
/// belongs to. A blank id means the record is new.
fn save_record(app: &mut App, record: Record) -> Task<Message> {
    let store = app.store.clone();
    match record {
        Record::Event(event) => {
            let create = event.id.is_empty();
            Task::perform(
                async move {
                    if create {
                        store.create_event(event).await.map(|_| ())
                    } else {
                        store.update_event(event).await
                    }
                    .map_err(|error| error.to_string())
                },
                |result| Message::SaveCompleted {
                    tab: AdminTab::Events,
                    result,
                },
            )
        }
        Record::Announcement(announcement) => {
            let create = announcement.id.is_empty();
            Task::perform(
                async move {
                    if create {
                        store.create_announcement(announcement).await.map(|_| ())
                    } else {
                        store.update_announcement(announcement).await
                    }
                    .map_err(|error| error.to_string())
                },
                |result| Message::SaveCompleted {
                    tab: AdminTab::Announcements,
                    result,
                },
            )
        }
        Record::GalleryImage(photo) => {
            let create = photo.id.is_empty();
            Task::perform(
                async move {
                    if create {
                        store.create_gallery_image(photo).await.map(|_| ())
                    } else {
                        store.update_gallery_image(photo).await
                    }
                    .map_err(|error| error.to_string())
                },
                |result| Message::SaveCompleted {
                    tab: AdminTab::Gallery,
                    result,
                },
            )
        }
        Record::Contact(contact) => {
            let create = contact.id.is_empty();
            Task::perform(
                async move {
                    if create {
                        store.create_contact(contact).await.map(|_| ())
                    } else {
                        store.update_contact(contact).await
                    }
                    .map_err(|error| error.to_string())
                },
                |result| Message::SaveCompleted {
                    tab: AdminTab::Contacts,
                    result,
                },
            )
        }
    }
}

fn delete_record(app: &mut App, tab: AdminTab, id: String) -> Task<Message> {
    let store = app.store.clone();
    let future = async move {
        match tab {
            AdminTab::Events => store.delete_event(id).await,
            AdminTab::Announcements => store.delete_announcement(id).await,
            AdminTab::Contacts => store.delete_contact(id).await,
            AdminTab::Gallery => store.delete_gallery_image(id).await,
        }
        .map_err(|error| error.to_string())
    };
    Task::perform(future, move |result| Message::DeleteCompleted { tab, result })
}

fn handle_save_completed(
    app: &mut App,
    tab: AdminTab,
    result: Result<(), String>,
) -> Task<Message> {
    match result {
        Ok(()) => {
            app.admin.finish_save_success();
            app.notifications
                .push(Notification::success("notification-record-saved"));
            reload_admin_tab(app, tab)
        }
        Err(details) => {
            app.admin.finish_save_failure();
            app.notifications
                .push(Notification::error("notification-save-failed").with_arg("details", details));
            Task::none()
        }
    }
}

fn handle_delete_completed(
    app: &mut App,
    tab: AdminTab,
    result: Result<(), String>,
) -> Task<Message> {
    match result {
        Ok(()) => {
            app.notifications
                .push(Notification::success("notification-record-deleted"));
            reload_admin_tab(app, tab)
        }
        Err(details) => {
            app.notifications.push(
                Notification::error("notification-delete-failed").with_arg("details", details),
            );
            Task::none()
        }
    }
}

// =============================================================================
// Tests
// =============================================================================

#[cfg(test)]
mod tests {
    use super::*;

    fn photo(public_id: &str, url: &str) -> GalleryImage {
        GalleryImage {
            id: "p1".to_string(),
            public_id: public_id.to_string(),
            url: url.to_string(),
            ..GalleryImage::default()
        }
    }

    #[test]
    fn cdn_photos_fall_back_to_the_direct_upload() {
        let cdn = ImageCdn::new("https://res.cloudinary.com/demo");
        let photo = photo("spring/holi", "https://files.example.org/holi.jpg");

        let (primary, fallback) = thumbnail_sources(&cdn, &photo, 400);
        assert_eq!(
            primary.as_deref(),
            Some("https://res.cloudinary.com/demo/image/upload/w_400,c_fill,q_auto,f_auto/spring/holi")
        );
        assert_eq!(
            fallback.as_deref(),
            Some("https://files.example.org/holi.jpg")
        );
    }

    #[test]
    fn direct_uploads_have_no_fallback() {
        let cdn = ImageCdn::new("https://res.cloudinary.com/demo");
        let photo = photo("", "https://files.example.org/diwali.jpg");

        let (primary, fallback) = thumbnail_sources(&cdn, &photo, 400);
        assert_eq!(
            primary.as_deref(),
            Some("https://files.example.org/diwali.jpg")
        );
        assert_eq!(fallback, None);
    }

    #[test]
    fn a_photo_without_sources_yields_nothing() {
        let cdn = ImageCdn::new("https://res.cloudinary.com/demo");
        let photo = photo("", "");

        assert_eq!(thumbnail_sources(&cdn, &photo, 400), (None, None));
        assert_eq!(full_sources(&cdn, &photo), (None, None));
    }

    #[test]
    fn the_viewer_prefers_the_optimized_rendition() {
        let cdn = ImageCdn::new("https://res.cloudinary.com/demo");
        let photo = photo("spring/holi", "https://files.example.org/holi.jpg");

        let (primary, _) = full_sources(&cdn, &photo);
        assert_eq!(
            primary.as_deref(),
            Some(
                "https://res.cloudinary.com/demo/image/upload/w_2200,c_limit,q_auto,f_auto/spring/holi"
            )
        );
    }
}
