// SPDX-License-Identifier: MPL-2.0
//! Screen enumeration for application navigation.

use crate::ui::navbar;

/// Screens the visitor can navigate between.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Screen {
    Home,
    About,
    Facilities,
    Events,
    Gallery,
    Contacts,
    SignIn,
    Admin,
}

impl Screen {
    /// The navbar tab highlighted for this screen; `None` on sign-in,
    /// which has no tab of its own.
    #[must_use]
    pub fn tab(self) -> Option<navbar::Tab> {
        match self {
            Screen::Home => Some(navbar::Tab::Home),
            Screen::About => Some(navbar::Tab::About),
            Screen::Facilities => Some(navbar::Tab::Facilities),
            Screen::Events => Some(navbar::Tab::Events),
            Screen::Gallery => Some(navbar::Tab::Gallery),
            Screen::Contacts => Some(navbar::Tab::Contacts),
            Screen::Admin => Some(navbar::Tab::Admin),
            Screen::SignIn => None,
        }
    }

    /// Fluent key for the window-title suffix; `None` keeps the bare
    /// application name.
    #[must_use]
    pub fn title_key(self) -> Option<&'static str> {
        match self {
            Screen::Home => None,
            Screen::About => Some("navbar-about"),
            Screen::Facilities => Some("navbar-facilities"),
            Screen::Events => Some("navbar-events"),
            Screen::Gallery => Some("navbar-gallery"),
            Screen::Contacts => Some("navbar-contacts"),
            Screen::SignIn => Some("navbar-sign-in"),
            Screen::Admin => Some("navbar-admin"),
        }
    }
}

impl From<navbar::Tab> for Screen {
    fn from(tab: navbar::Tab) -> Self {
        match tab {
            navbar::Tab::Home => Screen::Home,
            navbar::Tab::About => Screen::About,
            navbar::Tab::Facilities => Screen::Facilities,
            navbar::Tab::Events => Screen::Events,
            navbar::Tab::Gallery => Screen::Gallery,
            navbar::Tab::Contacts => Screen::Contacts,
            navbar::Tab::Admin => Screen::Admin,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn every_tab_maps_back_to_its_screen() {
        let tabs = [
            navbar::Tab::Home,
            navbar::Tab::About,
            navbar::Tab::Facilities,
            navbar::Tab::Events,
            navbar::Tab::Gallery,
            navbar::Tab::Contacts,
            navbar::Tab::Admin,
        ];

        for tab in tabs {
            assert_eq!(Screen::from(tab).tab(), Some(tab));
        }
    }

    #[test]
    fn sign_in_highlights_no_tab() {
        assert_eq!(Screen::SignIn.tab(), None);
    }

    #[test]
    fn home_uses_the_bare_window_title() {
        assert_eq!(Screen::Home.title_key(), None);
        assert_eq!(Screen::Gallery.title_key(), Some("navbar-gallery"));
    }
}
