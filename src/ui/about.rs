// SPDX-License-Identifier: MPL-2.0
//! About screen module presenting the society to visitors.
//!
//! This module shows the society profile: a short history, the vision the
//! committee works toward, and the headline figures (homes, towers, area,
//! year of establishment). The office contact details live on the contacts
//! screen; a button at the bottom jumps there.

use crate::i18n::fluent::I18n;
use crate::ui::design_tokens::{radius, sizing, spacing, typography};
use crate::ui::styles;
use iced::{
    alignment::{Horizontal, Vertical},
    widget::{button, container, rule, scrollable, text, Column, Container, Row, Text},
    Border, Element, Length, Theme,
};

/// Contextual data needed to render the about screen.
pub struct ViewContext<'a> {
    pub i18n: &'a I18n,
}

/// Messages emitted by the about screen.
#[derive(Debug, Clone)]
pub enum Message {
    ViewContacts,
}

/// Events propagated to the parent application.
#[derive(Debug, Clone)]
pub enum Event {
    ContactsRequested,
}

/// Process an about screen message and return the corresponding event.
#[must_use]
pub fn update(message: &Message) -> Event {
    match message {
        Message::ViewContacts => Event::ContactsRequested,
    }
}

/// Render the about screen.
#[must_use]
pub fn view(ctx: ViewContext<'_>) -> Element<'_, Message> {
    let title = Text::new(ctx.i18n.tr("about-title")).size(typography::TITLE_LG);

    let story_section = build_story_section(&ctx);
    let vision_section = build_vision_section(&ctx);
    let glance_section = build_glance_section(&ctx);
    let office_section = build_office_section(&ctx);

    let content = Column::new()
        .width(Length::Fill)
        .max_width(sizing::CONTENT_MAX_WIDTH)
        .spacing(spacing::LG)
        .align_x(Horizontal::Left)
        .padding(spacing::MD)
        .push(title)
        .push(story_section)
        .push(vision_section)
        .push(glance_section)
        .push(office_section);

    scrollable(
        Container::new(content)
            .width(Length::Fill)
            .align_x(Horizontal::Center),
    )
    .into()
}

/// Build the society history section.
fn build_story_section<'a>(ctx: &ViewContext<'a>) -> Element<'a, Message> {
    let content = Column::new()
        .spacing(spacing::SM)
        .push(Text::new(ctx.i18n.tr("about-story-body")).size(typography::BODY))
        .push(Text::new(ctx.i18n.tr("about-story-today")).size(typography::BODY));

    build_section(ctx.i18n.tr("about-section-story"), content.into())
}

/// Build the vision section.
fn build_vision_section<'a>(ctx: &ViewContext<'a>) -> Element<'a, Message> {
    let content = Column::new()
        .spacing(spacing::XS)
        .push(build_bullet(ctx.i18n.tr("about-vision-community")))
        .push(build_bullet(ctx.i18n.tr("about-vision-green")))
        .push(build_bullet(ctx.i18n.tr("about-vision-transparent")));

    build_section(ctx.i18n.tr("about-section-vision"), content.into())
}

/// Build the society-at-a-glance figures.
fn build_glance_section<'a>(ctx: &ViewContext<'a>) -> Element<'a, Message> {
    let content = Column::new()
        .spacing(spacing::XS)
        .push(build_figure_row(
            ctx.i18n.tr("about-figure-established"),
            ctx.i18n.tr("about-figure-established-value"),
        ))
        .push(build_figure_row(
            ctx.i18n.tr("about-figure-homes"),
            ctx.i18n.tr("about-figure-homes-value"),
        ))
        .push(build_figure_row(
            ctx.i18n.tr("about-figure-towers"),
            ctx.i18n.tr("about-figure-towers-value"),
        ))
        .push(build_figure_row(
            ctx.i18n.tr("about-figure-area"),
            ctx.i18n.tr("about-figure-area-value"),
        ));

    build_section(ctx.i18n.tr("about-section-glance"), content.into())
}

/// Build a single label/value figure row.
fn build_figure_row<'a>(label: String, value: String) -> Element<'a, Message> {
    let value_badge = Container::new(Text::new(value).size(typography::CAPTION))
        .padding([spacing::XXS, spacing::XS])
        .style(|theme: &Theme| container::Style {
            background: Some(theme.extended_palette().background.strong.color.into()),
            border: Border {
                radius: radius::SM.into(),
                ..Default::default()
            },
            ..Default::default()
        });

    Row::new()
        .spacing(spacing::SM)
        .align_y(Vertical::Center)
        .push(Container::new(value_badge).width(Length::Fixed(110.0)))
        .push(Text::new(label).size(typography::BODY))
        .into()
}

/// Build a bullet point.
fn build_bullet<'a>(content: String) -> Element<'a, Message> {
    Text::new(format!("• {}", content))
        .size(typography::BODY)
        .into()
}

/// Build the management-office pointer with the contacts button.
fn build_office_section<'a>(ctx: &ViewContext<'a>) -> Element<'a, Message> {
    let blurb = Text::new(ctx.i18n.tr("about-office-body")).size(typography::BODY);

    let contacts_button = button(
        text(ctx.i18n.tr("about-view-contacts-button")).size(typography::BODY),
    )
    .on_press(Message::ViewContacts)
    .padding([spacing::XS, spacing::MD])
    .style(styles::button::primary);

    let content = Column::new()
        .spacing(spacing::SM)
        .push(blurb)
        .push(contacts_button);

    build_section(ctx.i18n.tr("about-section-office"), content.into())
}

/// Build a section with title and content (same pattern as home/facilities).
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
        .style(|theme: &Theme| container::Style {
            background: Some(theme.extended_palette().background.weak.color.into()),
            border: Border {
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
    fn about_view_renders() {
        let i18n = I18n::default();
        let ctx = ViewContext { i18n: &i18n };
        let _element = view(ctx);
    }

    #[test]
    fn view_contacts_emits_event() {
        let event = update(&Message::ViewContacts);
        assert!(matches!(event, Event::ContactsRequested));
    }
}
