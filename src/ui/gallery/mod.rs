// SPDX-License-Identifier: MPL-2.0
//! Photo gallery screen.
//!
//! Renders the facet chip row, the three-column thumbnail grid with
//! incremental "show more" pagination, and (when a photo is open) the
//! full-screen focused viewer. All list state lives in
//! [`GalleryBrowser`]; this module translates widget interactions into
//! browser transitions and tells the shell which downloads to start.
//!
//! While the focused viewer is open it replaces the grid entirely, so
//! the page behind it has nothing left to scroll.

mod cache;
mod lightbox;

pub use cache::{CacheStats, ImageCache};

use crate::domain::gallery::{CategoryFilter, GalleryBrowser, GalleryImage};
use crate::i18n::fluent::I18n;
use crate::ui::components::error_display::{centered_error_view, ErrorDisplay, ErrorSeverity};
use crate::ui::design_tokens::{radius, sizing, spacing, typography};
use crate::ui::styles;
use iced::alignment::{Horizontal, Vertical};
use iced::widget::{button, image, scrollable, Column, Container, Row, Text};
use iced::{Border, ContentFit, Element, Length, Theme};

/// Thumbnails per grid row.
const GRID_COLUMNS: usize = 3;

/// Facet chips per row; the rest continue on the next line.
const CHIPS_PER_ROW: usize = 6;

// =============================================================================
// Types
// =============================================================================

/// Context for rendering the gallery screen.
pub struct ViewContext<'a> {
    pub i18n: &'a I18n,
    pub browser: &'a GalleryBrowser,
    /// Decoded grid thumbnails, keyed by photo id.
    pub thumbnails: &'a ImageCache,
    /// Decoded full-size variants for the focused viewer.
    pub full_images: &'a ImageCache,
}

/// Messages produced by gallery interactions.
#[derive(Debug, Clone, PartialEq)]
pub enum Message {
    CategorySelected(CategoryFilter),
    ShowMore,
    OpenImage(GalleryImage),
    CloseViewer,
    NextImage,
    PreviousImage,
    Retry,
}

/// Events the shell reacts to with fetch tasks.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Event {
    /// Nothing for the shell to do.
    None,
    /// The visitor asked for a fresh fetch of the collection.
    ReloadRequested,
    /// The set of photos on screen changed; missing thumbnails want
    /// downloading.
    VisibleChanged,
    /// The focused photo changed; its full-size variant wants downloading.
    FocusChanged,
}

// =============================================================================
// Update
// =============================================================================

/// Applies a gallery message to the browser.
pub fn update(browser: &mut GalleryBrowser, message: Message) -> Event {
    match message {
        Message::CategorySelected(filter) => {
            browser.set_category(filter);
            Event::VisibleChanged
        }
        Message::ShowMore => {
            browser.show_more();
            Event::VisibleChanged
        }
        Message::OpenImage(photo) => {
            browser.open_image(photo);
            Event::FocusChanged
        }
        Message::CloseViewer => {
            browser.close_image();
            Event::None
        }
        Message::NextImage => {
            browser.focus_next();
            Event::FocusChanged
        }
        Message::PreviousImage => {
            browser.focus_previous();
            Event::FocusChanged
        }
        Message::Retry => Event::ReloadRequested,
    }
}

// =============================================================================
// View
// =============================================================================

/// Renders the gallery: the grid, or the focused viewer when a photo is
/// open.
pub fn view<'a>(ctx: ViewContext<'a>) -> Element<'a, Message> {
    if let Some(photo) = ctx.browser.focused() {
        return lightbox::view(&ctx, photo);
    }
    browse_view(&ctx)
}

fn browse_view<'a>(ctx: &ViewContext<'a>) -> Element<'a, Message> {
    // A failed fetch with nothing cached gets the full-screen error; with
    // cached photos the stale grid stays up and the error rides on top.
    if let Some(error) = ctx.browser.error() {
        if ctx.browser.is_empty() {
            return centered_error_view(
                ErrorDisplay::new(ErrorSeverity::Error)
                    .title(ctx.i18n.tr("gallery-load-error-title"))
                    .message(ctx.i18n.tr("gallery-load-error-message"))
                    .details(error.to_string())
                    .details_heading(ctx.i18n.tr("error-details-heading"))
                    .action(ctx.i18n.tr("action-retry"), Message::Retry),
            );
        }
    }

    let title = Text::new(ctx.i18n.tr("gallery-title")).size(typography::TITLE_LG);

    let mut content = Column::new()
        .width(Length::Fill)
        .max_width(sizing::CONTENT_MAX_WIDTH)
        .spacing(spacing::LG)
        .align_x(Horizontal::Left)
        .padding(spacing::MD)
        .push(title);

    if let Some(error) = ctx.browser.error() {
        content = content.push(
            ErrorDisplay::new(ErrorSeverity::Warning)
                .title(ctx.i18n.tr("gallery-refresh-error-title"))
                .details(error.to_string())
                .details_heading(ctx.i18n.tr("error-details-heading"))
                .action(ctx.i18n.tr("action-retry"), Message::Retry)
                .view(),
        );
    }

    content = content.push(build_facet_chips(ctx));

    if ctx.browser.is_empty() {
        let placeholder = if ctx.browser.is_loading() {
            ctx.i18n.tr("gallery-loading")
        } else {
            ctx.i18n.tr("gallery-empty")
        };
        content = content.push(Text::new(placeholder).size(typography::BODY));
    } else if ctx.browser.category_total() == 0 {
        content = content.push(
            Text::new(ctx.i18n.tr("gallery-category-empty")).size(typography::BODY),
        );
    } else {
        content = content.push(build_grid(ctx));
        content = content.push(build_page_footer(ctx));
    }

    scrollable(
        Container::new(content)
            .width(Length::Fill)
            .align_x(Horizontal::Center),
    )
    .into()
}

/// One chip per facet: `All` first, then suggested and observed
/// categories, chunked onto rows.
fn build_facet_chips<'a>(ctx: &ViewContext<'a>) -> Element<'a, Message> {
    let mut labels: Vec<(String, CategoryFilter)> =
        vec![(ctx.i18n.tr("gallery-filter-all"), CategoryFilter::All)];
    for category in ctx.browser.categories() {
        let filter = CategoryFilter::Named(category.clone());
        labels.push((category, filter));
    }

    let mut rows = Column::new().spacing(spacing::XS);
    for chunk in labels.chunks(CHIPS_PER_ROW) {
        let mut row = Row::new().spacing(spacing::XS);
        for (label, filter) in chunk {
            let style = if filter == ctx.browser.filter() {
                styles::button::selected
            } else {
                styles::button::unselected
            };
            row = row.push(
                button(Text::new(label.clone()).size(typography::BODY_SM))
                    .padding([spacing::XXS, spacing::SM])
                    .style(style)
                    .on_press(Message::CategorySelected(filter.clone())),
            );
        }
        rows = rows.push(row);
    }
    rows.into()
}

fn build_grid<'a>(ctx: &ViewContext<'a>) -> Element<'a, Message> {
    let page = ctx.browser.visible_page();

    let mut grid = Column::new().spacing(spacing::SM);
    for chunk in page.chunks(GRID_COLUMNS) {
        let mut row = Row::new().spacing(spacing::SM);
        for photo in chunk {
            row = row.push(build_cell(ctx, photo));
        }
        grid = grid.push(row);
    }
    grid.into()
}

/// One clickable grid cell: the thumbnail (or a placeholder while it
/// downloads) with a title/date caption underneath.
fn build_cell<'a>(ctx: &ViewContext<'a>, photo: &'a GalleryImage) -> Element<'a, Message> {
    let thumbnail: Element<'a, Message> = match ctx.thumbnails.handle(&photo.id) {
        Some(handle) => image(handle.clone())
            .width(Length::Fixed(sizing::THUMB_WIDTH))
            .height(Length::Fixed(sizing::THUMB_HEIGHT))
            .content_fit(ContentFit::Cover)
            .into(),
        None => {
            let caption = if ctx.thumbnails.has_failed(&photo.id) {
                ctx.i18n.tr("gallery-image-unavailable")
            } else {
                ctx.i18n.tr("gallery-image-loading")
            };
            Container::new(Text::new(caption).size(typography::CAPTION))
                .width(Length::Fixed(sizing::THUMB_WIDTH))
                .height(Length::Fixed(sizing::THUMB_HEIGHT))
                .align_x(Horizontal::Center)
                .align_y(Vertical::Center)
                .style(placeholder_style)
                .into()
        }
    };

    let details = Column::new()
        .spacing(spacing::XXS)
        .push(Text::new(&photo.title).size(typography::BODY_SM))
        .push(
            Text::new(&photo.date)
                .size(typography::CAPTION)
                .style(|theme: &Theme| iced::widget::text::Style {
                    color: Some(theme.extended_palette().background.strong.text),
                }),
        );

    button(
        Column::new()
            .spacing(spacing::XS)
            .push(thumbnail)
            .push(details),
    )
    .padding(spacing::XS)
    .style(styles::button::link)
    .on_press(Message::OpenImage((*photo).clone()))
    .into()
}

/// Shown-of-total caption plus the "show more" button while photos
/// remain beyond the window.
fn build_page_footer<'a>(ctx: &ViewContext<'a>) -> Element<'a, Message> {
    let shown = ctx
        .browser
        .visible_page()
        .len()
        .min(ctx.browser.category_total());
    let counts = ctx.i18n.tr_with_args(
        "gallery-shown-count",
        &[
            ("shown", &shown.to_string()),
            ("total", &ctx.browser.category_total().to_string()),
        ],
    );

    let mut footer = Column::new()
        .width(Length::Fill)
        .spacing(spacing::SM)
        .align_x(Horizontal::Center)
        .push(
            Text::new(counts)
                .size(typography::CAPTION)
                .style(|theme: &Theme| iced::widget::text::Style {
                    color: Some(theme.extended_palette().background.strong.text),
                }),
        );

    if ctx.browser.has_more() {
        footer = footer.push(
            button(Text::new(ctx.i18n.tr("gallery-show-more-button")).size(typography::BODY))
                .padding([spacing::XS, spacing::LG])
                .style(styles::button::primary)
                .on_press(Message::ShowMore),
        );
    }

    footer.into()
}

fn placeholder_style(theme: &Theme) -> iced::widget::container::Style {
    let palette = theme.extended_palette();
    iced::widget::container::Style {
        background: Some(palette.background.weak.color.into()),
        border: Border {
            radius: radius::SM.into(),
            ..Default::default()
        },
        ..Default::default()
    }
}

// =============================================================================
// Tests
// =============================================================================

#[cfg(test)]
mod tests {
    use super::*;

    fn photo(id: &str, category: &str) -> GalleryImage {
        GalleryImage {
            id: id.to_string(),
            title: format!("Photo {}", id),
            category: category.to_string(),
            date: "2025-05-01".to_string(),
            ..GalleryImage::default()
        }
    }

    fn loaded_browser(count: usize) -> GalleryBrowser {
        let mut browser = GalleryBrowser::new();
        let photos = (0..count).map(|i| photo(&format!("p{}", i), "Events")).collect();
        browser.finish_load(Ok(photos), false);
        browser
    }

    // -------------------------------------------------------------------------
    // Update tests
    // -------------------------------------------------------------------------

    #[test]
    fn selecting_a_category_asks_for_thumbnails() {
        let mut browser = loaded_browser(3);
        let event = update(
            &mut browser,
            Message::CategorySelected(CategoryFilter::Named("Events".to_string())),
        );

        assert_eq!(event, Event::VisibleChanged);
        assert!(browser.filter().is_active());
    }

    #[test]
    fn show_more_asks_for_thumbnails() {
        let mut browser = loaded_browser(12);
        let event = update(&mut browser, Message::ShowMore);

        assert_eq!(event, Event::VisibleChanged);
        assert_eq!(browser.visible_page().len(), 12);
    }

    #[test]
    fn opening_a_photo_asks_for_the_full_size_variant() {
        let mut browser = loaded_browser(3);
        let first = browser.visible_page()[0].clone();

        let event = update(&mut browser, Message::OpenImage(first));
        assert_eq!(event, Event::FocusChanged);
        assert!(browser.focused().is_some());

        let event = update(&mut browser, Message::NextImage);
        assert_eq!(event, Event::FocusChanged);
    }

    #[test]
    fn closing_the_viewer_is_quiet() {
        let mut browser = loaded_browser(3);
        let first = browser.visible_page()[0].clone();
        update(&mut browser, Message::OpenImage(first));

        let event = update(&mut browser, Message::CloseViewer);
        assert_eq!(event, Event::None);
        assert!(browser.focused().is_none());
    }

    #[test]
    fn retry_requests_a_reload() {
        let mut browser = GalleryBrowser::new();
        assert_eq!(update(&mut browser, Message::Retry), Event::ReloadRequested);
    }

    // -------------------------------------------------------------------------
    // Render smoke tests
    // -------------------------------------------------------------------------

    #[test]
    fn grid_renders_without_panicking() {
        let i18n = I18n::default();
        let browser = loaded_browser(12);
        let thumbnails = ImageCache::with_defaults();
        let full_images = ImageCache::with_defaults();

        let _element = view(ViewContext {
            i18n: &i18n,
            browser: &browser,
            thumbnails: &thumbnails,
            full_images: &full_images,
        });
    }

    #[test]
    fn focused_viewer_renders_without_panicking() {
        let i18n = I18n::default();
        let mut browser = loaded_browser(3);
        let first = browser.visible_page()[0].clone();
        browser.open_image(first);
        let thumbnails = ImageCache::with_defaults();
        let full_images = ImageCache::with_defaults();

        let _element = view(ViewContext {
            i18n: &i18n,
            browser: &browser,
            thumbnails: &thumbnails,
            full_images: &full_images,
        });
    }

    #[test]
    fn failed_first_load_renders_the_error_screen() {
        let i18n = I18n::default();
        let mut browser = GalleryBrowser::new();
        browser.finish_load(Err("connection refused".to_string()), false);
        let thumbnails = ImageCache::with_defaults();
        let full_images = ImageCache::with_defaults();

        let _element = view(ViewContext {
            i18n: &i18n,
            browser: &browser,
            thumbnails: &thumbnails,
            full_images: &full_images,
        });
    }

    #[test]
    fn empty_gallery_renders_without_panicking() {
        let i18n = I18n::default();
        let mut browser = GalleryBrowser::new();
        browser.finish_load(Ok(Vec::new()), false);
        let thumbnails = ImageCache::with_defaults();
        let full_images = ImageCache::with_defaults();

        let _element = view(ViewContext {
            i18n: &i18n,
            browser: &browser,
            thumbnails: &thumbnails,
            full_images: &full_images,
        });
    }
}
