// SPDX-License-Identifier: MPL-2.0
//! Navigation bar module for app-level navigation.
//!
//! Renders the portal header: the society brand on the left, one button
//! per public section in the middle, and the session controls (sign in,
//! or signed-in email plus sign out) on the right. The Admin entry only
//! appears once a visitor is signed in; authorization is checked by the
//! admin screen itself.

use crate::i18n::fluent::I18n;
use crate::ui::design_tokens::{spacing, typography};
use crate::ui::styles;
use iced::{
    alignment::Vertical,
    widget::{button, Container, Row, Text},
    Element, Length, Theme,
};

/// Public sections reachable from the navigation bar.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Tab {
    Home,
    About,
    Facilities,
    Events,
    Gallery,
    Contacts,
    Admin,
}

impl Tab {
    /// Fluent key for the tab label.
    fn label_key(self) -> &'static str {
        match self {
            Tab::Home => "navbar-home",
            Tab::About => "navbar-about",
            Tab::Facilities => "navbar-facilities",
            Tab::Events => "navbar-events",
            Tab::Gallery => "navbar-gallery",
            Tab::Contacts => "navbar-contacts",
            Tab::Admin => "navbar-admin",
        }
    }

    /// Tabs shown to every visitor, in display order.
    const PUBLIC: [Tab; 6] = [
        Tab::Home,
        Tab::About,
        Tab::Facilities,
        Tab::Events,
        Tab::Gallery,
        Tab::Contacts,
    ];
}

/// Contextual data needed to render the navbar.
pub struct ViewContext<'a> {
    pub i18n: &'a I18n,
    /// Currently displayed tab; `None` while on the sign-in screen.
    pub active: Option<Tab>,
    /// Signed-in email, if any. Controls the Admin entry and the
    /// sign-in/sign-out toggle.
    pub signed_in_as: Option<&'a str>,
}

/// Messages emitted by the navbar.
#[derive(Debug, Clone)]
pub enum Message {
    TabSelected(Tab),
    SignIn,
    SignOut,
}

/// Events propagated to the parent application.
#[derive(Debug, Clone)]
pub enum Event {
    Navigate(Tab),
    SignInRequested,
    SignOutRequested,
}

/// Process a navbar message and return the corresponding event.
///
/// The navbar carries no local state; every click maps directly to a
/// navigation or session event for the shell.
pub fn update(message: &Message) -> Event {
    match message {
        Message::TabSelected(tab) => Event::Navigate(*tab),
        Message::SignIn => Event::SignInRequested,
        Message::SignOut => Event::SignOutRequested,
    }
}

/// Render the navigation bar.
pub fn view<'a>(ctx: ViewContext<'a>) -> Element<'a, Message> {
    let brand = Text::new(ctx.i18n.tr("app-title"))
        .size(typography::TITLE_MD)
        .style(|theme: &Theme| iced::widget::text::Style {
            color: Some(theme.extended_palette().primary.base.color),
        });

    let mut tabs = Row::new().spacing(spacing::XXS).align_y(Vertical::Center);
    for tab in Tab::PUBLIC {
        tabs = tabs.push(tab_button(&ctx, tab));
    }
    if ctx.signed_in_as.is_some() {
        tabs = tabs.push(tab_button(&ctx, Tab::Admin));
    }

    let session = build_session_controls(&ctx);

    let row = Row::new()
        .spacing(spacing::MD)
        .padding([spacing::SM, spacing::MD])
        .align_y(Vertical::Center)
        .push(brand)
        .push(Container::new(tabs).width(Length::Fill))
        .push(session);

    Container::new(row)
        .width(Length::Fill)
        .style(styles::container::panel)
        .into()
}

/// Build one navigation button, highlighted when it is the active tab.
fn tab_button<'a>(ctx: &ViewContext<'a>, tab: Tab) -> Element<'a, Message> {
    let label = Text::new(ctx.i18n.tr(tab.label_key())).size(typography::BODY);
    let is_active = ctx.active == Some(tab);

    let styled = if is_active {
        button(label).style(styles::button::selected)
    } else {
        button(label).style(styles::button::link)
    };

    styled
        .on_press(Message::TabSelected(tab))
        .padding([spacing::XS, spacing::SM])
        .into()
}

/// Build the right-hand session area: either a sign-in button or the
/// signed-in email next to a sign-out button.
fn build_session_controls<'a>(ctx: &ViewContext<'a>) -> Element<'a, Message> {
    match ctx.signed_in_as {
        Some(email) => {
            let who = Text::new(email)
                .size(typography::BODY_SM)
                .style(|theme: &Theme| iced::widget::text::Style {
                    color: Some(theme.extended_palette().background.strong.text),
                });
            let sign_out = button(
                Text::new(ctx.i18n.tr("navbar-sign-out")).size(typography::BODY),
            )
            .on_press(Message::SignOut)
            .padding([spacing::XS, spacing::SM])
            .style(styles::button::link);

            Row::new()
                .spacing(spacing::SM)
                .align_y(Vertical::Center)
                .push(who)
                .push(sign_out)
                .into()
        }
        None => button(
            Text::new(ctx.i18n.tr("navbar-sign-in")).size(typography::BODY),
        )
        .on_press(Message::SignIn)
        .padding([spacing::XS, spacing::SM])
        .style(styles::button::primary)
        .into(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::i18n::fluent::I18n;

    #[test]
    fn navbar_view_renders_signed_out() {
        let i18n = I18n::default();
        let ctx = ViewContext {
            i18n: &i18n,
            active: Some(Tab::Home),
            signed_in_as: None,
        };
        let _element = view(ctx);
    }

    #[test]
    fn navbar_view_renders_signed_in() {
        let i18n = I18n::default();
        let ctx = ViewContext {
            i18n: &i18n,
            active: Some(Tab::Gallery),
            signed_in_as: Some("secretary@rosewood.example"),
        };
        let _element = view(ctx);
    }

    #[test]
    fn navbar_view_renders_without_active_tab() {
        let i18n = I18n::default();
        let ctx = ViewContext {
            i18n: &i18n,
            active: None,
            signed_in_as: None,
        };
        let _element = view(ctx);
    }

    #[test]
    fn tab_selection_emits_navigate() {
        let event = update(&Message::TabSelected(Tab::Events));
        assert!(matches!(event, Event::Navigate(Tab::Events)));
    }

    #[test]
    fn session_messages_emit_session_events() {
        assert!(matches!(
            update(&Message::SignIn),
            Event::SignInRequested
        ));
        assert!(matches!(
            update(&Message::SignOut),
            Event::SignOutRequested
        ));
    }

    #[test]
    fn public_tabs_exclude_admin() {
        assert!(!Tab::PUBLIC.contains(&Tab::Admin));
        assert_eq!(Tab::PUBLIC.len(), 6);
    }
}
