// SPDX-License-Identifier: MPL-2.0
//! Full-screen focused viewer for a single photo.
//!
//! Stacks the close button and wrap-around navigation arrows over a
//! darkened backdrop. The shell routes Escape and the arrow keys to the
//! same messages as the on-screen buttons.

use super::{Message, ViewContext};
use crate::domain::gallery::GalleryImage;
use crate::ui::design_tokens::{opacity, palette, sizing, spacing, typography};
use crate::ui::styles;
use iced::alignment::{Horizontal, Vertical};
use iced::widget::{button, image, mouse_area, Column, Container, Stack, Text};
use iced::{ContentFit, Element, Length};

pub(super) fn view<'a>(ctx: &ViewContext<'a>, photo: &'a GalleryImage) -> Element<'a, Message> {
    // The full-size variant when it has arrived, the grid thumbnail as a
    // stand-in while it downloads.
    let handle = ctx
        .full_images
        .handle(&photo.id)
        .or_else(|| ctx.thumbnails.handle(&photo.id));

    let picture: Element<'a, Message> = match handle {
        Some(handle) => image(handle.clone())
            .content_fit(ContentFit::Contain)
            .width(Length::Fill)
            .height(Length::Fill)
            .into(),
        None => Text::new(ctx.i18n.tr("gallery-image-loading"))
            .size(typography::BODY_LG)
            .color(palette::GRAY_200)
            .into(),
    };

    let mut caption = Column::new()
        .spacing(spacing::XXS)
        .align_x(Horizontal::Center)
        .push(
            Text::new(&photo.title)
                .size(typography::BODY_LG)
                .color(palette::WHITE),
        );
    if let Some(line) = caption_line(photo) {
        caption = caption.push(
            Text::new(line)
                .size(typography::CAPTION)
                .color(palette::GRAY_200),
        );
    }

    let content = Column::new()
        .spacing(spacing::MD)
        .align_x(Horizontal::Center)
        .push(
            Container::new(picture)
                .max_width(sizing::LIGHTBOX_MAX_WIDTH)
                .height(Length::Fill)
                .align_x(Horizontal::Center)
                .align_y(Vertical::Center),
        )
        .push(caption);

    // Clicking the backdrop closes the viewer; the buttons stacked above
    // capture their own clicks first.
    let backdrop = mouse_area(
        Container::new(content)
            .width(Length::Fill)
            .height(Length::Fill)
            .padding(spacing::LG)
            .align_x(Horizontal::Center)
            .align_y(Vertical::Center)
            .style(styles::container::backdrop),
    )
    .on_press(Message::CloseViewer);

    let close = Container::new(
        button(Text::new("✕").size(typography::TITLE_MD))
            .padding(spacing::SM)
            .style(styles::button::overlay(
                palette::WHITE,
                opacity::OVERLAY_MEDIUM,
                opacity::OVERLAY_HOVER,
            ))
            .on_press(Message::CloseViewer),
    )
    .width(Length::Fill)
    .height(Length::Fill)
    .padding(spacing::MD)
    .align_x(Horizontal::Right)
    .align_y(Vertical::Top);

    let mut stack = Stack::new().push(backdrop).push(close);

    // A single photo has nowhere to navigate to.
    if ctx.browser.category_total() > 1 {
        stack = stack
            .push(build_arrow("◀", Message::PreviousImage, Horizontal::Left))
            .push(build_arrow("▶", Message::NextImage, Horizontal::Right));
    }

    stack.into()
}

fn build_arrow<'a>(
    glyph: &'a str,
    message: Message,
    side: Horizontal,
) -> Element<'a, Message> {
    Container::new(
        button(Text::new(glyph).size(typography::TITLE_LG))
            .padding(spacing::SM)
            .style(styles::button::overlay(
                palette::WHITE,
                opacity::OVERLAY_MEDIUM,
                opacity::OVERLAY_HOVER,
            ))
            .on_press(message),
    )
    .width(Length::Fill)
    .height(Length::Fill)
    .padding(spacing::MD)
    .align_x(side)
    .align_y(Vertical::Center)
    .into()
}

/// Category and date joined into one caption line, skipping blanks.
fn caption_line(photo: &GalleryImage) -> Option<String> {
    match (photo.category.is_empty(), photo.date.is_empty()) {
        (false, false) => Some(format!("{} · {}", photo.category, photo.date)),
        (false, true) => Some(photo.category.clone()),
        (true, false) => Some(photo.date.clone()),
        (true, true) => None,
    }
}
