// SPDX-License-Identifier: MPL-2.0
//! Events screen module: the society calendar.
//!
//! Splits the fetched events into an upcoming and a past section around
//! today's date. Events whose date fails to parse are shown under
//! upcoming rather than hidden; bad data from the store should stay
//! visible so an admin notices it.

use crate::domain::content::CommunityEvent;
use crate::i18n::fluent::I18n;
use crate::ui::components::error_display::{centered_error_view, ErrorDisplay, ErrorSeverity};
use crate::ui::design_tokens::{sizing, spacing, typography};
use crate::ui::styles;
use chrono::NaiveDate;
use iced::{
    alignment::{Horizontal, Vertical},
    widget::{rule, scrollable, Column, Container, Row, Text},
    Element, Length, Theme,
};

/// Store date format (`YYYY-MM-DD`).
const DATE_FORMAT: &str = "%Y-%m-%d";

/// Contextual data needed to render the events screen.
///
/// `events` arrives sorted by calendar date, soonest first.
pub struct ViewContext<'a> {
    pub i18n: &'a I18n,
    pub events: &'a [CommunityEvent],
    pub error: Option<&'a str>,
    pub loading: bool,
    pub today: NaiveDate,
}

/// Messages emitted by the events screen.
#[derive(Debug, Clone)]
pub enum Message {
    Retry,
}

/// Events propagated to the parent application.
#[derive(Debug, Clone)]
pub enum Event {
    ReloadRequested,
}

/// Process an events screen message and return the corresponding event.
#[must_use]
pub fn update(message: &Message) -> Event {
    match message {
        Message::Retry => Event::ReloadRequested,
    }
}

/// Splits events into `(upcoming, past)` around `today`.
///
/// Upcoming keeps the incoming soonest-first order and includes today's
/// events plus any with unparseable dates; past is ordered most recent
/// first.
#[must_use]
pub fn split_by_date<'a>(
    events: &'a [CommunityEvent],
    today: NaiveDate,
) -> (Vec<&'a CommunityEvent>, Vec<&'a CommunityEvent>) {
    let mut upcoming = Vec::new();
    let mut past = Vec::new();

    for event in events {
        match NaiveDate::parse_from_str(&event.date, DATE_FORMAT) {
            Ok(date) if date < today => past.push(event),
            _ => upcoming.push(event),
        }
    }

    past.reverse();
    (upcoming, past)
}

/// Render the events screen.
#[must_use]
pub fn view(ctx: ViewContext<'_>) -> Element<'_, Message> {
    // A failed fetch with nothing cached gets the full-screen error; with
    // cached events the stale list stays up and the error rides on top.
    if let Some(error) = ctx.error {
        if ctx.events.is_empty() {
            return centered_error_view(
                ErrorDisplay::new(ErrorSeverity::Error)
                    .title(ctx.i18n.tr("events-load-error-title"))
                    .message(ctx.i18n.tr("events-load-error-message"))
                    .details(error.to_string())
                    .details_heading(ctx.i18n.tr("error-details-heading"))
                    .action(ctx.i18n.tr("action-retry"), Message::Retry),
            );
        }
    }

    let title = Text::new(ctx.i18n.tr("events-title")).size(typography::TITLE_LG);

    let mut content = Column::new()
        .width(Length::Fill)
        .max_width(sizing::CONTENT_MAX_WIDTH)
        .spacing(spacing::LG)
        .align_x(Horizontal::Left)
        .padding(spacing::MD)
        .push(title);

    if let Some(error) = ctx.error {
        content = content.push(
            ErrorDisplay::new(ErrorSeverity::Warning)
                .title(ctx.i18n.tr("events-refresh-error-title"))
                .details(error.to_string())
                .details_heading(ctx.i18n.tr("error-details-heading"))
                .action(ctx.i18n.tr("action-retry"), Message::Retry)
                .view(),
        );
    }

    if ctx.events.is_empty() {
        let placeholder = if ctx.loading {
            ctx.i18n.tr("events-loading")
        } else {
            ctx.i18n.tr("events-empty")
        };
        content = content.push(Text::new(placeholder).size(typography::BODY));
    } else {
        let (upcoming, past) = split_by_date(ctx.events, ctx.today);
        content = content.push(build_group(
            &ctx,
            ctx.i18n.tr("events-section-upcoming"),
            &upcoming,
            ctx.i18n.tr("events-none-upcoming"),
        ));
        if !past.is_empty() {
            content = content.push(build_group(
                &ctx,
                ctx.i18n.tr("events-section-past"),
                &past,
                String::new(),
            ));
        }
    }

    scrollable(
        Container::new(content)
            .width(Length::Fill)
            .align_x(Horizontal::Center),
    )
    .into()
}

/// Build one dated group of event cards.
fn build_group<'a>(
    ctx: &ViewContext<'a>,
    heading: String,
    events: &[&'a CommunityEvent],
    empty_text: String,
) -> Element<'a, Message> {
    let mut list = Column::new().spacing(spacing::SM);
    if events.is_empty() {
        list = list.push(Text::new(empty_text).size(typography::BODY));
    } else {
        for event in events {
            list = list.push(build_event_card(ctx, event));
        }
    }

    let inner = Column::new()
        .spacing(spacing::SM)
        .push(Text::new(heading).size(typography::TITLE_SM))
        .push(rule::horizontal(1))
        .push(list);

    Container::new(inner)
        .padding(spacing::MD)
        .width(Length::Fill)
        .style(styles::container::panel)
        .into()
}

/// Build one event card with date badge, title, description, and the
/// optional time/venue line.
fn build_event_card<'a>(ctx: &ViewContext<'a>, event: &'a CommunityEvent) -> Element<'a, Message> {
    let date_badge = Container::new(Text::new(&event.date).size(typography::CAPTION))
        .padding([spacing::XXS, spacing::XS])
        .style(styles::container::card);

    let mut details = Column::new()
        .spacing(spacing::XXS)
        .push(Text::new(&event.title).size(typography::BODY_LG))
        .push(Text::new(&event.description).size(typography::BODY));

    if let Some(where_when) = format_time_venue(ctx.i18n, event) {
        details = details.push(
            Text::new(where_when)
                .size(typography::CAPTION)
                .style(|theme: &Theme| iced::widget::text::Style {
                    color: Some(theme.extended_palette().background.strong.text),
                }),
        );
    }

    let row = Row::new()
        .spacing(spacing::SM)
        .align_y(Vertical::Top)
        .push(Container::new(date_badge).width(Length::Fixed(110.0)))
        .push(details);

    Container::new(row)
        .padding(spacing::SM)
        .width(Length::Fill)
        .style(styles::container::card)
        .into()
}

/// Joins time and venue into one caption line, if either is present.
fn format_time_venue(i18n: &I18n, event: &CommunityEvent) -> Option<String> {
    match (event.time.as_deref(), event.venue.as_deref()) {
        (Some(time), Some(venue)) => Some(i18n.tr_with_args(
            "events-time-venue",
            &[("time", time), ("venue", venue)],
        )),
        (Some(time), None) => Some(time.to_string()),
        (None, Some(venue)) => Some(venue.to_string()),
        (None, None) => None,
    }
}
