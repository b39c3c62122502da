// SPDX-License-Identifier: MPL-2.0
//! Contacts screen module: the committee and staff directory.
//!
//! A free-text search box filters the directory as the visitor types; the
//! match rules live on [`Contact::matches_query`] so the admin screen and
//! tests share them. Searching is local, the store is only hit to fetch
//! the whole directory.

use crate::domain::content::Contact;
use crate::i18n::fluent::I18n;
use crate::ui::components::error_display::{centered_error_view, ErrorDisplay, ErrorSeverity};
use crate::ui::design_tokens::{sizing, spacing, typography};
use crate::ui::styles;
use iced::{
    alignment::Horizontal,
    widget::{scrollable, text_input, Column, Container, Text},
    Element, Length, Theme,
};

/// Search state for the contacts screen.
#[derive(Debug, Clone, Default)]
pub struct State {
    query: String,
}

impl State {
    /// Creates a state with an empty search box.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Current search text.
    #[must_use]
    pub fn query(&self) -> &str {
        &self.query
    }
}

/// Contextual data needed to render the contacts screen.
pub struct ViewContext<'a> {
    pub i18n: &'a I18n,
    pub state: &'a State,
    pub contacts: &'a [Contact],
    pub error: Option<&'a str>,
    pub loading: bool,
}

/// Messages emitted by the contacts screen.
#[derive(Debug, Clone)]
pub enum Message {
    QueryChanged(String),
    Retry,
}

/// Events propagated to the parent application.
#[derive(Debug, Clone)]
pub enum Event {
    None,
    ReloadRequested,
}

/// Process a contacts screen message and return the corresponding event.
pub fn update(state: &mut State, message: Message) -> Event {
    match message {
        Message::QueryChanged(query) => {
            state.query = query;
            Event::None
        }
        Message::Retry => Event::ReloadRequested,
    }
}

/// Render the contacts screen.
#[must_use]
pub fn view<'a>(ctx: ViewContext<'a>) -> Element<'a, Message> {
    if let Some(error) = ctx.error {
        if ctx.contacts.is_empty() {
            return centered_error_view(
                ErrorDisplay::new(ErrorSeverity::Error)
                    .title(ctx.i18n.tr("contacts-load-error-title"))
                    .message(ctx.i18n.tr("contacts-load-error-message"))
                    .details(error.to_string())
                    .details_heading(ctx.i18n.tr("error-details-heading"))
                    .action(ctx.i18n.tr("action-retry"), Message::Retry),
            );
        }
    }

    let title = Text::new(ctx.i18n.tr("contacts-title")).size(typography::TITLE_LG);

    let placeholder = ctx.i18n.tr("contacts-search-placeholder");
    let search = text_input(&placeholder, ctx.state.query())
        .on_input(Message::QueryChanged)
        .padding(spacing::XS)
        .size(typography::BODY);

    let mut content = Column::new()
        .width(Length::Fill)
        .max_width(sizing::CONTENT_MAX_WIDTH)
        .spacing(spacing::MD)
        .align_x(Horizontal::Left)
        .padding(spacing::MD)
        .push(title)
        .push(search);

    if ctx.contacts.is_empty() {
        let placeholder = if ctx.loading {
            ctx.i18n.tr("contacts-loading")
        } else {
            ctx.i18n.tr("contacts-empty")
        };
        content = content.push(Text::new(placeholder).size(typography::BODY));
    } else {
        let matches: Vec<&Contact> = ctx
            .contacts
            .iter()
            .filter(|contact| contact.matches_query(ctx.state.query()))
            .collect();

        if matches.is_empty() {
            content = content.push(
                Text::new(ctx.i18n.tr("contacts-no-matches")).size(typography::BODY),
            );
        } else {
            let mut list = Column::new().spacing(spacing::SM);
            for contact in matches {
                list = list.push(build_contact_card(contact));
            }
            content = content.push(list);
        }
    }

    scrollable(
        Container::new(content)
            .width(Length::Fill)
            .align_x(Horizontal::Center),
    )
    .into()
}

/// Build one directory card: name, role, phone, and optional email.
fn build_contact_card(contact: &Contact) -> Element<'_, Message> {
    let mut inner = Column::new()
        .spacing(spacing::XXS)
        .push(Text::new(&contact.name).size(typography::BODY_LG))
        .push(
            Text::new(&contact.role)
                .size(typography::BODY_SM)
                .style(|theme: &Theme| iced::widget::text::Style {
                    color: Some(theme.extended_palette().primary.strong.color),
                }),
        )
        .push(Text::new(&contact.phone).size(typography::BODY));

    if let Some(email) = &contact.email {
        inner = inner.push(
            Text::new(email)
                .size(typography::BODY_SM)
                .style(|theme: &Theme| iced::widget::text::Style {
                    color: Some(theme.extended_palette().background.strong.text),
                }),
        );
    }

    Container::new(inner)
        .padding(spacing::SM)
        .width(Length::Fill)
        .style(styles::container::card)
        .into()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::i18n::fluent::I18n;

    fn directory() -> Vec<Contact> {
        vec![
            Contact {
                id: "c1".into(),
                name: "Asha Verma".into(),
                role: "Secretary".into(),
                phone: "+91 98100 12345".into(),
                email: Some("secretary@rosewood.example".into()),
            },
            Contact {
                id: "c2".into(),
                name: "Rahul Nair".into(),
                role: "Treasurer".into(),
                phone: "+91 98222 67890".into(),
                email: None,
            },
        ]
    }

    #[test]
    fn typing_updates_the_query() {
        let mut state = State::new();
        let event = update(&mut state, Message::QueryChanged("asha".to_string()));
        assert!(matches!(event, Event::None));
        assert_eq!(state.query(), "asha");
    }

    #[test]
    fn retry_emits_reload() {
        let mut state = State::new();
        let event = update(&mut state, Message::Retry);
        assert!(matches!(event, Event::ReloadRequested));
    }

    #[test]
    fn contacts_view_renders() {
        let i18n = I18n::default();
        let state = State::new();
        let contacts = directory();
        let ctx = ViewContext {
            i18n: &i18n,
            state: &state,
            contacts: &contacts,
            error: None,
            loading: false,
        };
        let _element = view(ctx);
    }

    #[test]
    fn contacts_view_renders_empty_directory() {
        let i18n = I18n::default();
        let state = State::new();
        let ctx = ViewContext {
            i18n: &i18n,
            state: &state,
            contacts: &[],
            error: None,
            loading: true,
        };
        let _element = view(ctx);
    }

    #[test]
    fn contacts_view_renders_error_without_content() {
        let i18n = I18n::default();
        let state = State::new();
        let ctx = ViewContext {
            i18n: &i18n,
            state: &state,
            contacts: &[],
            error: Some("503 from the store"),
            loading: false,
        };
        let _element = view(ctx);
    }
}
