// SPDX-License-Identifier: MPL-2.0
//! Home screen module: the portal landing page.
//!
//! Greets the visitor, previews the latest notices from the committee and
//! the next few events on the calendar, and points at the photo gallery.
//! The previews stay short; the full lists live on their own screens.

use crate::domain::content::{Announcement, CommunityEvent};
use crate::i18n::fluent::I18n;
use crate::ui::design_tokens::{radius, sizing, spacing, typography};
use crate::ui::styles;
use iced::{
    alignment::{Horizontal, Vertical},
    widget::{button, rule, scrollable, text, Column, Container, Row, Text},
    Element, Length, Theme,
};

/// How many notices and events the landing page previews.
const PREVIEW_LIMIT: usize = 3;

/// Contextual data needed to render the home screen.
///
/// Both slices arrive already sorted: announcements newest first, events
/// soonest first.
pub struct ViewContext<'a> {
    pub i18n: &'a I18n,
    pub announcements: &'a [Announcement],
    pub events: &'a [CommunityEvent],
}

/// Messages emitted by the home screen.
#[derive(Debug, Clone)]
pub enum Message {
    BrowseGallery,
    SeeAllEvents,
}

/// Events propagated to the parent application.
#[derive(Debug, Clone)]
pub enum Event {
    GalleryRequested,
    EventsRequested,
}

/// Process a home screen message and return the corresponding event.
#[must_use]
pub fn update(message: &Message) -> Event {
    match message {
        Message::BrowseGallery => Event::GalleryRequested,
        Message::SeeAllEvents => Event::EventsRequested,
    }
}

/// Render the home screen.
#[must_use]
pub fn view(ctx: ViewContext<'_>) -> Element<'_, Message> {
    let hero = build_hero(&ctx);
    let announcements = build_announcements_section(&ctx);
    let events = build_events_section(&ctx);

    let content = Column::new()
        .width(Length::Fill)
        .max_width(sizing::CONTENT_MAX_WIDTH)
        .spacing(spacing::LG)
        .align_x(Horizontal::Left)
        .padding(spacing::MD)
        .push(hero)
        .push(announcements)
        .push(events);

    scrollable(
        Container::new(content)
            .width(Length::Fill)
            .align_x(Horizontal::Center),
    )
    .into()
}

/// Build the welcome banner with the gallery call to action.
fn build_hero<'a>(ctx: &ViewContext<'a>) -> Element<'a, Message> {
    let title = Text::new(ctx.i18n.tr("home-welcome-title")).size(typography::TITLE_LG);
    let subtitle = Text::new(ctx.i18n.tr("home-welcome-subtitle")).size(typography::BODY_LG);

    let gallery_button = button(
        text(ctx.i18n.tr("home-browse-gallery-button")).size(typography::BODY),
    )
    .on_press(Message::BrowseGallery)
    .padding([spacing::XS, spacing::MD])
    .style(styles::button::primary);

    let inner = Column::new()
        .spacing(spacing::SM)
        .push(title)
        .push(subtitle)
        .push(gallery_button);

    Container::new(inner)
        .padding(spacing::LG)
        .width(Length::Fill)
        .style(styles::container::panel)
        .into()
}

/// Build the latest-notices preview.
fn build_announcements_section<'a>(ctx: &ViewContext<'a>) -> Element<'a, Message> {
    let content: Element<'a, Message> = if ctx.announcements.is_empty() {
        Text::new(ctx.i18n.tr("home-no-announcements"))
            .size(typography::BODY)
            .into()
    } else {
        let mut list = Column::new().spacing(spacing::SM);
        for announcement in ctx.announcements.iter().take(PREVIEW_LIMIT) {
            list = list.push(build_announcement_card(announcement));
        }
        list.into()
    };

    build_section(ctx.i18n.tr("home-section-announcements"), content)
}

/// Build one notice card with headline and body.
fn build_announcement_card(announcement: &Announcement) -> Element<'_, Message> {
    let headline = Text::new(&announcement.title).size(typography::BODY_LG);
    let body = Text::new(&announcement.body).size(typography::BODY);

    let inner = Column::new()
        .spacing(spacing::XXS)
        .push(headline)
        .push(body);

    Container::new(inner)
        .padding(spacing::SM)
        .width(Length::Fill)
        .style(styles::container::card)
        .into()
}

/// Build the upcoming-events preview with the link to the full calendar.
fn build_events_section<'a>(ctx: &ViewContext<'a>) -> Element<'a, Message> {
    let list: Element<'a, Message> = if ctx.events.is_empty() {
        Text::new(ctx.i18n.tr("home-no-events"))
            .size(typography::BODY)
            .into()
    } else {
        let mut rows = Column::new().spacing(spacing::XS);
        for event in ctx.events.iter().take(PREVIEW_LIMIT) {
            rows = rows.push(build_event_row(event));
        }
        rows.into()
    };

    let see_all = button(
        text(ctx.i18n.tr("home-see-all-events-button")).size(typography::BODY),
    )
    .on_press(Message::SeeAllEvents)
    .padding([spacing::XS, spacing::SM])
    .style(styles::button::link);

    let content = Column::new()
        .spacing(spacing::SM)
        .push(list)
        .push(see_all);

    build_section(ctx.i18n.tr("home-section-events"), content.into())
}

/// Build a single event preview row: date badge plus title.
fn build_event_row(event: &CommunityEvent) -> Element<'_, Message> {
    let date_badge = Container::new(Text::new(&event.date).size(typography::CAPTION))
        .padding([spacing::XXS, spacing::XS])
        .style(styles::container::card);

    Row::new()
        .spacing(spacing::SM)
        .align_y(Vertical::Center)
        .push(date_badge)
        .push(Text::new(&event.title).size(typography::BODY))
        .into()
}

/// Build a section with title and content (same pattern as about/facilities).
fn build_section(title: String, content: Element<'_, Message>) -> Element<'_, Message> {
    let header = Text::new(title).size(typography::TITLE_SM);

    let inner = Column::new()
        .spacing(spacing::SM)
        .push(header)
        .push(rule::horizontal(1))
        .push(content);

    Container::new(inner)
        .padding(spacing::MD)
        .width(Length::Fill)
        .style(|theme: &Theme| iced::widget::container::Style {
            background: Some(theme.extended_palette().background.weak.color.into()),
            border: iced::Border {
                radius: radius::MD.into(),
                ..Default::default()
            },
            ..Default::default()
        })
        .into()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::i18n::fluent::I18n;

    #[test]
    fn home_view_renders_empty() {
        let i18n = I18n::default();
        let ctx = ViewContext {
            i18n: &i18n,
            announcements: &[],
            events: &[],
        };
        let _element = view(ctx);
    }

    #[test]
    fn home_view_renders_with_content() {
        let i18n = I18n::default();
        let announcements = vec![Announcement {
            id: "n1".into(),
            title: "Water supply maintenance".into(),
            body: "Tanks are cleaned on Saturday morning.".into(),
            created_at: Some("2026-08-01T09:00:00Z".into()),
        }];
        let events = vec![CommunityEvent {
            id: "e1".into(),
            title: "Independence Day flag hoisting".into(),
            date: "2026-08-15".into(),
            ..CommunityEvent::default()
        }];
        let ctx = ViewContext {
            i18n: &i18n,
            announcements: &announcements,
            events: &events,
        };
        let _element = view(ctx);
    }

    #[test]
    fn gallery_button_emits_event() {
        let event = update(&Message::BrowseGallery);
        assert!(matches!(event, Event::GalleryRequested));
    }

    #[test]
    fn see_all_events_emits_event() {
        let event = update(&Message::SeeAllEvents);
        assert!(matches!(event, Event::EventsRequested));
    }
}
