// SPDX-License-Identifier: MPL-2.0
//! View rendering for the application.
//!
//! Dispatches on the active [`Screen`], keeps the navigation bar above
//! the screen content, and floats toast notifications on top.

use super::{App, Message, Screen};
use crate::application::guard::{AccessGate, GateStatus};
use crate::ui::admin::{self, AdminTab};
use crate::ui::navbar::{self, ViewContext as NavbarViewContext};
use crate::ui::notifications::Toast;
use crate::ui::{about, contacts, events, facilities, gallery, home, sign_in};
use iced::widget::{Column, Container, Stack};
use iced::{Element, Length};

/// Renders the current application view based on the active screen.
pub(super) fn view(app: &App) -> Element<'_, Message> {
    let navbar_view = navbar::view(NavbarViewContext {
        i18n: &app.i18n,
        active: app.screen.tab(),
        signed_in_as: app
            .identity_snapshot
            .as_ref()
            .map(|identity| identity.email.as_str()),
    })
    .map(Message::Navbar);

    let content = Container::new(screen_view(app))
        .width(Length::Fill)
        .height(Length::Fill);

    let page = Column::new().push(navbar_view).push(content);

    Stack::new()
        .push(page)
        .push(Toast::view_overlay(&app.notifications, &app.i18n).map(Message::Notification))
        .into()
}

fn screen_view(app: &App) -> Element<'_, Message> {
    match app.screen {
        Screen::Home => home::view(home::ViewContext {
            i18n: &app.i18n,
            announcements: app.announcements.items(),
            events: app.events.items(),
        })
        .map(Message::Home),
        Screen::About => about::view(about::ViewContext { i18n: &app.i18n }).map(Message::About),
        Screen::Facilities => {
            facilities::view(facilities::ViewContext { i18n: &app.i18n }).map(Message::Facilities)
        }
        Screen::Events => events::view(events::ViewContext {
            i18n: &app.i18n,
            events: app.events.items(),
            error: app.events.error(),
            loading: app.events.is_loading(),
            today: chrono::Local::now().date_naive(),
        })
        .map(Message::Events),
        Screen::Gallery => gallery::view(gallery::ViewContext {
            i18n: &app.i18n,
            browser: &app.browser,
            thumbnails: &app.thumbnails,
            full_images: &app.full_images,
        })
        .map(Message::Gallery),
        Screen::Contacts => contacts::view(contacts::ViewContext {
            i18n: &app.i18n,
            state: &app.contacts_ui,
            contacts: app.contacts.items(),
            error: app.contacts.error(),
            loading: app.contacts.is_loading(),
        })
        .map(Message::Contacts),
        Screen::SignIn => sign_in::view(sign_in::ViewContext {
            i18n: &app.i18n,
            state: &app.sign_in,
        })
        .map(Message::SignIn),
        Screen::Admin => admin_view(app),
    }
}

/// Renders the back-office with the load state of whichever collection
/// the active tab manages.
fn admin_view(app: &App) -> Element<'_, Message> {
    let gate = app
        .gate
        .as_ref()
        .map_or(GateStatus::Checking, AccessGate::status);

    let (error, loading) = match app.admin.tab() {
        AdminTab::Events => (app.events.error(), app.events.is_loading()),
        AdminTab::Announcements => (app.announcements.error(), app.announcements.is_loading()),
        AdminTab::Contacts => (app.contacts.error(), app.contacts.is_loading()),
        AdminTab::Gallery => (app.browser.error(), app.browser.is_loading()),
    };

    admin::view::view(admin::ViewContext {
        i18n: &app.i18n,
        state: &app.admin,
        gate,
        events: app.events.items(),
        announcements: app.announcements.items(),
        contacts: app.contacts.items(),
        images: app.browser.images(),
        error,
        loading,
    })
    .map(Message::Admin)
}
