// SPDX-License-Identifier: MPL-2.0
//! Facilities screen module listing the society's amenities.
//!
//! A fixed catalogue of amenity cards (clubhouse, gym, pool, and so on)
//! with a short description and booking note each. The catalogue is part
//! of the portal copy rather than store data, so the entries live in the
//! translation bundles and this module only knows their keys.

use crate::i18n::fluent::I18n;
use crate::ui::design_tokens::{sizing, spacing, typography};
use crate::ui::styles;
use iced::{
    alignment::Horizontal,
    widget::{button, scrollable, text, Column, Container, Row, Text},
    Element, Length,
};

/// Amenity catalogue: `(name key, description key)` per card, in display
/// order. New amenities only need their two Fluent entries plus a row here.
const FACILITIES: &[(&str, &str)] = &[
    ("facilities-clubhouse", "facilities-clubhouse-desc"),
    ("facilities-gym", "facilities-gym-desc"),
    ("facilities-pool", "facilities-pool-desc"),
    ("facilities-garden", "facilities-garden-desc"),
    ("facilities-play-area", "facilities-play-area-desc"),
    ("facilities-hall", "facilities-hall-desc"),
    ("facilities-parking", "facilities-parking-desc"),
    ("facilities-security", "facilities-security-desc"),
];

/// Cards per grid row.
const GRID_COLUMNS: usize = 2;

/// Contextual data needed to render the facilities screen.
pub struct ViewContext<'a> {
    pub i18n: &'a I18n,
}

/// Messages emitted by the facilities screen.
#[derive(Debug, Clone)]
pub enum Message {
    ViewGallery,
}

/// Events propagated to the parent application.
#[derive(Debug, Clone)]
pub enum Event {
    GalleryRequested,
}

/// Process a facilities screen message and return the corresponding event.
#[must_use]
pub fn update(message: &Message) -> Event {
    match message {
        Message::ViewGallery => Event::GalleryRequested,
    }
}

/// Render the facilities screen.
#[must_use]
pub fn view(ctx: ViewContext<'_>) -> Element<'_, Message> {
    let title = Text::new(ctx.i18n.tr("facilities-title")).size(typography::TITLE_LG);
    let intro = Text::new(ctx.i18n.tr("facilities-intro")).size(typography::BODY);

    let mut grid = Column::new().spacing(spacing::SM);
    for chunk in FACILITIES.chunks(GRID_COLUMNS) {
        let mut row = Row::new().spacing(spacing::SM);
        for (name_key, description_key) in chunk {
            row = row.push(build_facility_card(&ctx, name_key, description_key));
        }
        grid = grid.push(row);
    }

    let gallery_button = button(
        text(ctx.i18n.tr("facilities-view-gallery-button")).size(typography::BODY),
    )
    .on_press(Message::ViewGallery)
    .padding([spacing::XS, spacing::MD])
    .style(styles::button::link);

    let content = Column::new()
        .width(Length::Fill)
        .max_width(sizing::CONTENT_MAX_WIDTH)
        .spacing(spacing::LG)
        .align_x(Horizontal::Left)
        .padding(spacing::MD)
        .push(title)
        .push(intro)
        .push(grid)
        .push(gallery_button);

    scrollable(
        Container::new(content)
            .width(Length::Fill)
            .align_x(Horizontal::Center),
    )
    .into()
}

/// Build one amenity card.
fn build_facility_card<'a>(
    ctx: &ViewContext<'a>,
    name_key: &str,
    description_key: &str,
) -> Element<'a, Message> {
    let name = Text::new(ctx.i18n.tr(name_key)).size(typography::BODY_LG);
    let description = Text::new(ctx.i18n.tr(description_key)).size(typography::BODY);

    let inner = Column::new()
        .spacing(spacing::XXS)
        .push(name)
        .push(description);

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

    #[test]
    fn facilities_view_renders() {
        let i18n = I18n::default();
        let ctx = ViewContext { i18n: &i18n };
        let _element = view(ctx);
    }

    #[test]
    fn view_gallery_emits_event() {
        let event = update(&Message::ViewGallery);
        assert!(matches!(event, Event::GalleryRequested));
    }

    #[test]
    fn catalogue_keys_are_distinct() {
        let mut names: Vec<&str> = FACILITIES.iter().map(|(name, _)| *name).collect();
        names.sort_unstable();
        names.dedup();
        assert_eq!(names.len(), FACILITIES.len());
    }
}
