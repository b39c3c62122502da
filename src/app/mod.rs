// SPDX-License-Identifier: MPL-2.0
//! Application root state and orchestration between the portal screens.
//!
//! The `App` struct wires together the domains (content listings, gallery
//! browsing, the admin access gate) with the infrastructure adapters behind
//! the ports, and translates messages into side effects like store fetches
//! or sign-in redirects. This file intentionally keeps policy decisions
//! (window sizing, configured limits, which screen loads what) close to the
//! main update loop so it is easy to audit user-facing behavior.

mod message;
mod screen;
mod subscription;
mod update;
mod view;

pub use message::{Flags, Message};
pub use screen::Screen;

use crate::application::guard::AccessGate;
use crate::application::port::{CommunityStore, IdentityProvider, ImageFetcher, TokenSource};
use crate::config;
use crate::domain::auth::Identity;
use crate::domain::content::{Announcement, CommunityEvent, Contact, Listing};
use crate::domain::gallery::GalleryBrowser;
use crate::i18n::fluent::I18n;
use crate::infrastructure::{HttpImageFetcher, IdentityClient, ImageCdn, RestStore};
use crate::ui::gallery::ImageCache;
use crate::ui::notifications::{self, Notification};
use crate::ui::theming::ThemeMode;
use crate::ui::{admin, contacts, sign_in};
use iced::{window, Element, Subscription, Task, Theme};
use std::fmt;
use std::sync::Arc;
use std::time::Duration;

/// Claim the identity provider must vouch for before the back-office opens.
const ADMIN_CLAIM: &str = "admin";

/// Root Iced application state that bridges the portal screens, the
/// localization catalog, and the backend ports.
pub struct App {
    pub i18n: I18n,
    screen: Screen,
    theme_mode: ThemeMode,
    store: Arc<dyn CommunityStore>,
    identity: Arc<dyn IdentityProvider>,
    images: Arc<dyn ImageFetcher>,
    cdn: ImageCdn,
    /// Seconds between silent gallery refreshes.
    refresh_secs: u64,
    /// Width requested for CDN grid renditions.
    thumbnail_width: u32,
    browser: GalleryBrowser,
    thumbnails: ImageCache,
    full_images: ImageCache,
    events: Listing<CommunityEvent>,
    announcements: Listing<Announcement>,
    contacts: Listing<Contact>,
    contacts_ui: contacts::State,
    sign_in: sign_in::State,
    admin: admin::State,
    /// Access gate guarding the admin screen; present only while it is mounted.
    gate: Option<AccessGate>,
    /// Bumped on every gate mount so stale watcher messages can be dropped.
    gate_session: u64,
    /// Where to return after a sign-in triggered from another screen.
    return_to: Option<Screen>,
    /// Last identity reported by the auth watcher, for the navbar.
    identity_snapshot: Option<Identity>,
    /// Toast notification manager for user feedback.
    notifications: notifications::Manager,
}

impl fmt::Debug for App {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("App")
            .field("screen", &self.screen)
            .field("signed_in", &self.identity_snapshot.is_some())
            .finish()
    }
}

pub const WINDOW_DEFAULT_HEIGHT: u32 = 720;
pub const WINDOW_DEFAULT_WIDTH: u32 = 1100;
pub const MIN_WINDOW_HEIGHT: u32 = 600;
pub const MIN_WINDOW_WIDTH: u32 = 900;

/// Ensures the refresh interval stays inside the supported range so
/// persisted configs cannot hammer the backend or stall the gallery.
fn clamp_refresh_secs(value: u64) -> u64 {
    value.clamp(config::MIN_REFRESH_SECS, config::MAX_REFRESH_SECS)
}

/// Ensures the thumbnail width stays inside the range the CDN accepts.
fn clamp_thumbnail_width(value: u32) -> u32 {
    value.clamp(config::MIN_THUMBNAIL_WIDTH, config::MAX_THUMBNAIL_WIDTH)
}

/// Ensures the request timeout stays inside a sane range.
fn clamp_timeout_secs(value: u64) -> u64 {
    value.clamp(config::MIN_TIMEOUT_SECS, config::MAX_TIMEOUT_SECS)
}

/// Builds the window settings
pub fn window_settings() -> window::Settings {
    window::Settings {
        size: iced::Size::new(WINDOW_DEFAULT_WIDTH as f32, WINDOW_DEFAULT_HEIGHT as f32),
        min_size: Some(iced::Size::new(
            MIN_WINDOW_WIDTH as f32,
            MIN_WINDOW_HEIGHT as f32,
        )),
        ..window::Settings::default()
    }
}

/// Entry point used by `main.rs` to launch the Iced application loop.
pub fn run(flags: Flags) -> iced::Result {
    use std::cell::RefCell;

    // The boot closure must be Fn, but the flags are consumed exactly once;
    // park them in a RefCell until the first (and only) call.
    let boot_state = RefCell::new(Some(flags));
    let boot = move || {
        let flags = boot_state
            .borrow_mut()
            .take()
            .expect("Boot function called more than once");
        App::new(flags)
    };

    iced::application(boot, App::update, App::view)
        .title(App::title)
        .theme(App::theme)
        .window(window_settings())
        .subscription(App::subscription)
        .run()
}

impl App {
    /// Initializes application state from the user config and kicks off the
    /// fetches that populate the Home screen.
    fn new(flags: Flags) -> (Self, Task<Message>) {
        let (config, config_warning) = config::load();
        let i18n = I18n::new(flags.lang, &config);

        let timeout = Duration::from_secs(clamp_timeout_secs(
            config
                .backend
                .timeout_secs
                .unwrap_or(config::DEFAULT_TIMEOUT_SECS),
        ));
        let store_url = config
            .backend
            .store_url
            .unwrap_or_else(|| config::DEFAULT_STORE_URL.to_string());
        let identity_url = config
            .backend
            .identity_url
            .unwrap_or_else(|| config::DEFAULT_IDENTITY_URL.to_string());
        let cdn_url = config
            .backend
            .cdn_url
            .unwrap_or_else(|| config::DEFAULT_CDN_URL.to_string());

        let identity_client = Arc::new(
            IdentityClient::new(identity_url, config.backend.api_key, timeout)
                .expect("HTTP client construction failed"),
        );
        let tokens: Arc<dyn TokenSource> = identity_client.clone();
        let store = Arc::new(
            RestStore::new(store_url, timeout, Some(tokens))
                .expect("HTTP client construction failed"),
        );
        let images =
            Arc::new(HttpImageFetcher::new(timeout).expect("HTTP client construction failed"));

        let refresh_secs = clamp_refresh_secs(
            config
                .gallery
                .refresh_secs
                .unwrap_or(config::DEFAULT_REFRESH_SECS),
        );
        let thumbnail_width = clamp_thumbnail_width(
            config
                .gallery
                .thumbnail_width
                .unwrap_or(config::DEFAULT_THUMBNAIL_WIDTH),
        );
        let cache_entries = config
            .gallery
            .cache_entries
            .unwrap_or(config::DEFAULT_CACHE_ENTRIES);

        let mut app = App {
            i18n,
            screen: Screen::Home,
            theme_mode: config.general.theme_mode,
            store,
            identity: identity_client,
            images,
            cdn: ImageCdn::new(cdn_url),
            refresh_secs,
            thumbnail_width,
            browser: GalleryBrowser::new(),
            thumbnails: ImageCache::new(cache_entries),
            full_images: ImageCache::new(cache_entries),
            events: Listing::new(),
            announcements: Listing::new(),
            contacts: Listing::new(),
            contacts_ui: contacts::State::new(),
            sign_in: sign_in::State::new(),
            admin: admin::State::new(),
            gate: None,
            gate_session: 0,
            return_to: None,
            identity_snapshot: None,
            notifications: notifications::Manager::new(),
        };

        if let Some(key) = config_warning {
            app.notifications.push(Notification::warning(key));
        }

        let task = Task::batch([
            update::load_announcements(&mut app),
            update::load_events(&mut app),
        ]);
        (app, task)
    }

    fn title(&self) -> String {
        let app_name = self.i18n.tr("app-title");
        match self.screen.title_key() {
            Some(key) => format!("{} - {app_name}", self.i18n.tr(key)),
            None => app_name,
        }
    }

    fn theme(&self) -> Theme {
        self.theme_mode.resolve()
    }

    fn subscription(&self) -> Subscription<Message> {
        // The auth watcher only runs while the admin gate is mounted; a new
        // session id per mount forces a fresh registration, whose immediate
        // fire delivers the current identity to the new gate.
        let auth_sub = if self.gate.is_some() {
            subscription::create_auth_subscription(self.identity.clone(), self.gate_session)
        } else {
            Subscription::none()
        };
        let refresh_sub = subscription::create_refresh_subscription(self.screen, self.refresh_secs);
        let keyboard_sub =
            subscription::create_keyboard_subscription(self.screen, self.browser.focused().is_some());
        let tick_sub = subscription::create_tick_subscription(self.notifications.has_notifications());

        Subscription::batch([auth_sub, refresh_sub, keyboard_sub, tick_sub])
    }

    fn update(&mut self, message: Message) -> Task<Message> {
        update::update(self, message)
    }

    fn view(&self) -> Element<'_, Message> {
        view::view(self)
    }
}
