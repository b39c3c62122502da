// SPDX-License-Identifier: MPL-2.0
//! Photo gallery browsing state for the domain layer.
//!
//! This module contains the pure state machine behind the gallery screen:
//! category filtering, incremental pagination, and the focused viewer.
//! Fetching the image list is the application layer's job; results are fed
//! back in through [`GalleryBrowser::finish_load`].
//!
//! # Types
//!
//! - [`GalleryImage`]: A single photo record from the content store
//! - [`CategoryFilter`]: Active category facet (all or a named bucket)
//! - [`GalleryBrowser`]: Filter + pagination + focused viewer state

// =============================================================================
// Constants
// =============================================================================

/// Number of thumbnails revealed per "show more" step.
pub const PAGE_SIZE: usize = 9;

/// Category facets that are always offered, even before any photo uses them.
pub const SUGGESTED_CATEGORIES: &[&str] =
    &["Events", "Festivals", "Sports", "Cultural", "Infrastructure"];

// =============================================================================
// Gallery Image
// =============================================================================

/// A single photo in the community gallery.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct GalleryImage {
    /// Document identifier in the content store.
    pub id: String,
    /// Caption shown under the photo and in the focused viewer.
    pub title: String,
    /// Category bucket used for filtering (e.g., "Sports").
    pub category: String,
    /// Human-readable capture date, shown as-is.
    pub date: String,
    /// Asset identifier on the image delivery network.
    pub public_id: String,
    /// Direct URL of the original upload; used when `public_id` is empty.
    pub url: String,
    /// RFC 3339 creation timestamp, if the store recorded one.
    pub created_at: Option<String>,
}

// =============================================================================
// Category Filter
// =============================================================================

/// Active category facet.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub enum CategoryFilter {
    /// Show photos from every category.
    #[default]
    All,
    /// Show only photos whose category matches the given name.
    Named(String),
}

impl CategoryFilter {
    /// Returns `true` if a photo with the given category passes this filter.
    ///
    /// Category names from the store are matched case-insensitively.
    #[must_use]
    pub fn matches(&self, category: &str) -> bool {
        match self {
            Self::All => true,
            Self::Named(name) => name.eq_ignore_ascii_case(category),
        }
    }

    /// Returns `true` if this filter narrows the gallery (not `All`).
    #[must_use]
    pub fn is_active(&self) -> bool {
        !matches!(self, Self::All)
    }
}

// =============================================================================
// Gallery Browser
// =============================================================================

/// Filter, pagination, and focused-viewer state for the gallery screen.
///
/// The browser never performs I/O. The caller starts a fetch, reports the
/// start with [`begin_load`](Self::begin_load), and hands the outcome to
/// [`finish_load`](Self::finish_load). Overlapping fetches are fine; the
/// last result to arrive wins.
#[derive(Debug, Clone)]
pub struct GalleryBrowser {
    images: Vec<GalleryImage>,
    filter: CategoryFilter,
    visible_count: usize,
    focused: Option<GalleryImage>,
    error: Option<String>,
    loading: bool,
}

impl Default for GalleryBrowser {
    fn default() -> Self {
        Self::new()
    }
}

impl GalleryBrowser {
    /// Creates an empty browser showing the first page of all categories.
    #[must_use]
    pub fn new() -> Self {
        Self {
            images: Vec::new(),
            filter: CategoryFilter::All,
            visible_count: PAGE_SIZE,
            focused: None,
            error: None,
            loading: false,
        }
    }

    // -------------------------------------------------------------------------
    // Loading
    // -------------------------------------------------------------------------

    /// Marks a fetch as started.
    ///
    /// Silent fetches (periodic background refreshes) show no spinner and
    /// leave the current content untouched. Explicit fetches clear a previous
    /// error so the retry replaces it with a loading state.
    pub fn begin_load(&mut self, silent: bool) {
        if !silent {
            self.loading = true;
            self.error = None;
        }
    }

    /// Applies the outcome of a fetch.
    ///
    /// On success the whole list is replaced (last write wins), keeping the
    /// store's order untouched. An empty list is a valid outcome, not an
    /// error. A failed silent fetch is dropped entirely so stale-but-good
    /// content stays on screen; a failed explicit fetch surfaces its message
    /// instead.
    pub fn finish_load(&mut self, result: Result<Vec<GalleryImage>, String>, silent: bool) {
        match result {
            Ok(images) => {
                self.images = images;
                self.loading = false;
                self.error = None;
            }
            Err(message) => {
                if silent {
                    return;
                }
                self.loading = false;
                self.error = Some(message);
            }
        }
    }

    // -------------------------------------------------------------------------
    // Filtering and pagination
    // -------------------------------------------------------------------------

    /// Switches the active category, rewinds to the first page, and clears
    /// any load error. Re-selecting the current category rewinds as well.
    pub fn set_category(&mut self, filter: CategoryFilter) {
        self.filter = filter;
        self.visible_count = PAGE_SIZE;
        self.error = None;
    }

    /// Reveals one more page of thumbnails, if there is anything left.
    pub fn show_more(&mut self) {
        if self.has_more() {
            self.visible_count += PAGE_SIZE;
        }
    }

    /// Photos of the active category currently revealed, in fetch order.
    #[must_use]
    pub fn visible_page(&self) -> Vec<&GalleryImage> {
        self.filtered().take(self.visible_count).collect()
    }

    /// Returns `true` if the active category has photos beyond the window.
    #[must_use]
    pub fn has_more(&self) -> bool {
        self.filtered().count() > self.visible_count
    }

    /// Total number of photos in the active category.
    #[must_use]
    pub fn category_total(&self) -> usize {
        self.filtered().count()
    }

    /// Category facets to offer: the suggested set plus every distinct
    /// category found in the data, extras sorted alphabetically.
    #[must_use]
    pub fn categories(&self) -> Vec<String> {
        let mut facets: Vec<String> = SUGGESTED_CATEGORIES
            .iter()
            .map(|name| (*name).to_string())
            .collect();
        let mut extras: Vec<String> = self
            .images
            .iter()
            .map(|image| image.category.clone())
            .filter(|category| !category.is_empty())
            .filter(|category| !facets.iter().any(|facet| facet.eq_ignore_ascii_case(category)))
            .collect();
        extras.sort_by(|a, b| {
            a.to_lowercase()
                .cmp(&b.to_lowercase())
                .then_with(|| a.cmp(b))
        });
        extras.dedup_by(|a, b| a.eq_ignore_ascii_case(b));
        facets.extend(extras);
        facets
    }

    #[must_use]
    pub fn filter(&self) -> &CategoryFilter {
        &self.filter
    }

    /// Every photo of the collection, unfiltered, in fetch order.
    #[must_use]
    pub fn images(&self) -> &[GalleryImage] {
        &self.images
    }

    fn filtered(&self) -> impl Iterator<Item = &GalleryImage> + '_ {
        self.images
            .iter()
            .filter(|image| self.filter.matches(&image.category))
    }

    // -------------------------------------------------------------------------
    // Focused viewer
    // -------------------------------------------------------------------------

    /// Opens the focused viewer on the given photo.
    ///
    /// The viewer keeps its own copy, so a background refresh that drops the
    /// photo from the list does not blank the screen.
    pub fn open_image(&mut self, image: GalleryImage) {
        self.focused = Some(image);
    }

    /// Closes the focused viewer.
    pub fn close_image(&mut self) {
        self.focused = None;
    }

    /// The photo currently shown in the focused viewer, if any.
    #[must_use]
    pub fn focused(&self) -> Option<&GalleryImage> {
        self.focused.as_ref()
    }

    /// Moves the focused viewer to the next photo in the active category.
    ///
    /// Navigation covers the whole filtered set, not just the thumbnails
    /// revealed so far, and wraps around at both ends.
    pub fn focus_next(&mut self) {
        self.focus_offset(1);
    }

    /// Moves the focused viewer to the previous photo in the active category.
    pub fn focus_previous(&mut self) {
        self.focus_offset(-1);
    }

    fn focus_offset(&mut self, delta: isize) {
        let Some(current_id) = self.focused.as_ref().map(|image| image.id.clone()) else {
            return;
        };
        let sequence: Vec<GalleryImage> = self.filtered().cloned().collect();
        if sequence.is_empty() {
            return;
        }
        // A photo dropped by a refresh re-anchors navigation at the start
        // of the filtered set.
        let Some(position) = sequence.iter().position(|image| image.id == current_id) else {
            self.focused = Some(sequence[0].clone());
            return;
        };
        let len = sequence.len() as isize;
        let next = (position as isize + delta).rem_euclid(len) as usize;
        self.focused = Some(sequence[next].clone());
    }

    // -------------------------------------------------------------------------
    // Status
    // -------------------------------------------------------------------------

    /// The error from the last explicit fetch, if it failed.
    #[must_use]
    pub fn error(&self) -> Option<&str> {
        self.error.as_deref()
    }

    /// Returns `true` while an explicit fetch is in flight.
    #[must_use]
    pub fn is_loading(&self) -> bool {
        self.loading
    }

    /// Returns `true` if no photos have been loaded at all.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.images.is_empty()
    }
}

// =============================================================================
// Tests
// =============================================================================

#[cfg(test)]
mod tests {
    use super::*;

    fn image(id: &str, category: &str) -> GalleryImage {
        GalleryImage {
            id: id.to_string(),
            title: format!("Photo {}", id),
            category: category.to_string(),
            ..GalleryImage::default()
        }
    }

    fn image_created(id: &str, category: &str, created_at: &str) -> GalleryImage {
        GalleryImage {
            created_at: Some(created_at.to_string()),
            ..image(id, category)
        }
    }

    fn loaded_browser(images: Vec<GalleryImage>) -> GalleryBrowser {
        let mut browser = GalleryBrowser::new();
        browser.finish_load(Ok(images), false);
        browser
    }

    // -------------------------------------------------------------------------
    // CategoryFilter tests
    // -------------------------------------------------------------------------

    #[test]
    fn filter_all_matches_everything() {
        let filter = CategoryFilter::All;
        assert!(filter.matches("Sports"));
        assert!(filter.matches(""));
        assert!(!filter.is_active());
    }

    #[test]
    fn named_filter_matches_case_insensitively() {
        let filter = CategoryFilter::Named("Sports".to_string());
        assert!(filter.matches("Sports"));
        assert!(filter.matches("sports"));
        assert!(filter.matches("SPORTS"));
        assert!(!filter.matches("Cultural"));
        assert!(filter.is_active());
    }

    // -------------------------------------------------------------------------
    // Loading tests
    // -------------------------------------------------------------------------

    #[test]
    fn new_browser_is_empty_and_idle() {
        let browser = GalleryBrowser::new();
        assert!(browser.is_empty());
        assert!(browser.visible_page().is_empty());
        assert!(!browser.is_loading());
        assert!(browser.error().is_none());
        assert!(browser.focused().is_none());
        assert!(!browser.has_more());
    }

    #[test]
    fn explicit_load_shows_spinner_and_clears_error() {
        let mut browser = GalleryBrowser::new();
        browser.finish_load(Err("network down".to_string()), false);
        assert_eq!(browser.error(), Some("network down"));

        browser.begin_load(false);
        assert!(browser.is_loading());
        assert!(browser.error().is_none());
    }

    #[test]
    fn silent_load_shows_no_spinner() {
        let mut browser = GalleryBrowser::new();
        browser.begin_load(true);
        assert!(!browser.is_loading());
    }

    #[test]
    fn successful_load_keeps_the_fetched_order() {
        let mut browser = GalleryBrowser::new();
        browser.finish_load(
            Ok(vec![
                image_created("first", "Sports", "2025-01-10T08:00:00Z"),
                image_created("second", "Sports", "2025-06-01T08:00:00Z"),
                image_created("third", "Sports", "2025-03-15T08:00:00Z"),
            ]),
            false,
        );

        let page = browser.visible_page();
        let ids: Vec<&str> = page.iter().map(|image| image.id.as_str()).collect();
        assert_eq!(ids, vec!["first", "second", "third"]);
    }

    #[test]
    fn empty_result_is_not_an_error() {
        let mut browser = GalleryBrowser::new();
        browser.begin_load(false);
        browser.finish_load(Ok(Vec::new()), false);

        assert!(browser.is_empty());
        assert!(browser.error().is_none());
        assert!(!browser.is_loading());
    }

    #[test]
    fn failed_silent_refresh_keeps_previous_content() {
        let mut browser = loaded_browser(vec![image("a", "Sports"), image("b", "Sports")]);

        browser.begin_load(true);
        browser.finish_load(Err("timeout".to_string()), true);

        assert_eq!(browser.visible_page().len(), 2);
        assert!(browser.error().is_none());
    }

    #[test]
    fn failed_explicit_load_surfaces_error() {
        let mut browser = GalleryBrowser::new();
        browser.begin_load(false);
        browser.finish_load(Err("boom".to_string()), false);

        assert_eq!(browser.error(), Some("boom"));
        assert!(!browser.is_loading());
    }

    #[test]
    fn error_clears_once_a_later_fetch_succeeds() {
        let mut browser = GalleryBrowser::new();
        browser.finish_load(Err("boom".to_string()), false);
        browser.finish_load(Ok(vec![image("a", "Sports")]), false);

        assert!(browser.error().is_none());
        assert_eq!(browser.visible_page().len(), 1);
    }

    // -------------------------------------------------------------------------
    // Pagination tests
    // -------------------------------------------------------------------------

    #[test]
    fn first_page_shows_at_most_nine_photos() {
        let images = (0..25).map(|i| image(&format!("img-{}", i), "Events")).collect();
        let browser = loaded_browser(images);

        assert_eq!(browser.visible_page().len(), PAGE_SIZE);
        assert!(browser.has_more());
        assert_eq!(browser.category_total(), 25);
    }

    #[test]
    fn show_more_reveals_another_page() {
        let images = (0..25).map(|i| image(&format!("img-{}", i), "Events")).collect();
        let mut browser = loaded_browser(images);

        browser.show_more();
        assert_eq!(browser.visible_page().len(), 18);
        assert!(browser.has_more());

        browser.show_more();
        assert_eq!(browser.visible_page().len(), 25);
        assert!(!browser.has_more());
    }

    #[test]
    fn show_more_is_a_no_op_when_everything_is_visible() {
        let images = (0..5).map(|i| image(&format!("img-{}", i), "Events")).collect();
        let mut browser = loaded_browser(images);

        assert!(!browser.has_more());
        browser.show_more();
        assert_eq!(browser.visible_page().len(), 5);
    }

    #[test]
    fn changing_category_rewinds_to_first_page() {
        let mut images: Vec<GalleryImage> =
            (0..20).map(|i| image(&format!("e-{}", i), "Events")).collect();
        images.extend((0..10).map(|i| image(&format!("s-{}", i), "Sports")));
        let mut browser = loaded_browser(images);

        browser.show_more();
        assert_eq!(browser.visible_page().len(), 18);

        browser.set_category(CategoryFilter::Named("Sports".to_string()));
        assert_eq!(browser.visible_page().len(), PAGE_SIZE);
        assert_eq!(browser.category_total(), 10);
        assert!(browser.has_more());

        browser.show_more();
        assert_eq!(browser.visible_page().len(), 10);
        assert!(!browser.has_more());
    }

    #[test]
    fn reselecting_the_active_category_also_rewinds() {
        let images = (0..25).map(|i| image(&format!("img-{}", i), "Events")).collect();
        let mut browser = loaded_browser(images);

        browser.set_category(CategoryFilter::Named("Events".to_string()));
        browser.show_more();
        assert_eq!(browser.visible_page().len(), 18);

        browser.set_category(CategoryFilter::Named("Events".to_string()));
        assert_eq!(browser.visible_page().len(), PAGE_SIZE);
    }

    #[test]
    fn picking_a_category_clears_a_stale_error() {
        let mut browser = GalleryBrowser::new();
        browser.begin_load(false);
        browser.finish_load(Err("network down".to_string()), false);
        assert!(browser.error().is_some());

        browser.set_category(CategoryFilter::Named("Sports".to_string()));
        assert!(browser.error().is_none());
    }

    #[test]
    fn visible_page_only_contains_matching_photos() {
        let browser = {
            let mut images: Vec<GalleryImage> =
                (0..4).map(|i| image(&format!("e-{}", i), "Events")).collect();
            images.extend((0..3).map(|i| image(&format!("s-{}", i), "Sports")));
            let mut browser = loaded_browser(images);
            browser.set_category(CategoryFilter::Named("Sports".to_string()));
            browser
        };

        assert!(browser
            .visible_page()
            .iter()
            .all(|image| image.category == "Sports"));
    }

    // -------------------------------------------------------------------------
    // Facet tests
    // -------------------------------------------------------------------------

    #[test]
    fn suggested_categories_are_always_offered() {
        let browser = GalleryBrowser::new();
        let facets = browser.categories();
        for suggested in SUGGESTED_CATEGORIES {
            assert!(facets.iter().any(|facet| facet == suggested));
        }
    }

    #[test]
    fn distinct_data_categories_extend_the_suggested_set() {
        let browser = loaded_browser(vec![
            image("a", "Monsoon"),
            image("b", "Sports"),
            image("c", "monsoon"),
            image("d", "Yoga"),
        ]);

        let facets = browser.categories();
        let extras: Vec<&String> = facets.iter().skip(SUGGESTED_CATEGORIES.len()).collect();
        assert_eq!(extras.len(), 2, "case-insensitive duplicates collapse");
        assert!(extras.iter().any(|facet| facet.eq_ignore_ascii_case("monsoon")));
        assert!(extras.iter().any(|facet| *facet == "Yoga"));
        // "Sports" is already suggested and must not repeat
        assert_eq!(facets.iter().filter(|facet| *facet == "Sports").count(), 1);
    }

    #[test]
    fn empty_categories_are_not_offered_as_facets() {
        let browser = loaded_browser(vec![image("a", "")]);
        let facets = browser.categories();
        assert_eq!(facets.len(), SUGGESTED_CATEGORIES.len());
    }

    // -------------------------------------------------------------------------
    // Focused viewer tests
    // -------------------------------------------------------------------------

    #[test]
    fn open_and_close_focused_viewer() {
        let mut browser = loaded_browser(vec![image("a", "Sports")]);

        let photo = browser.visible_page()[0].clone();
        browser.open_image(photo);
        assert_eq!(browser.focused().map(|image| image.id.as_str()), Some("a"));

        browser.close_image();
        assert!(browser.focused().is_none());
    }

    #[test]
    fn focused_photo_survives_a_refresh_that_drops_it() {
        let mut browser = loaded_browser(vec![image("a", "Sports")]);
        let photo = browser.visible_page()[0].clone();
        browser.open_image(photo);

        browser.finish_load(Ok(vec![image("b", "Sports")]), true);
        assert_eq!(browser.focused().map(|image| image.id.as_str()), Some("a"));
    }

    #[test]
    fn focus_next_and_previous_wrap_around() {
        let mut browser = loaded_browser(vec![
            image("a", "Sports"),
            image("b", "Sports"),
            image("c", "Sports"),
        ]);
        let first = browser.visible_page()[0].clone();
        browser.open_image(first);

        browser.focus_next();
        assert_eq!(browser.focused().map(|image| image.id.as_str()), Some("b"));

        browser.focus_next();
        browser.focus_next();
        assert_eq!(
            browser.focused().map(|image| image.id.as_str()),
            Some("a"),
            "wraps past the end"
        );

        browser.focus_previous();
        assert_eq!(
            browser.focused().map(|image| image.id.as_str()),
            Some("c"),
            "wraps before the start"
        );
    }

    #[test]
    fn focus_navigation_reaches_photos_beyond_the_revealed_page() {
        let images = (0..12).map(|i| image(&format!("img-{}", i), "Sports")).collect();
        let mut browser = loaded_browser(images);
        assert_eq!(browser.visible_page().len(), PAGE_SIZE);

        let last_revealed = browser.visible_page()[PAGE_SIZE - 1].clone();
        browser.open_image(last_revealed);
        browser.focus_next();

        assert_eq!(
            browser.focused().map(|image| image.id.as_str()),
            Some("img-9"),
            "steps into the unrevealed remainder"
        );
    }

    #[test]
    fn focus_navigation_without_an_open_viewer_is_a_no_op() {
        let mut browser = loaded_browser(vec![image("a", "Sports")]);
        browser.focus_next();
        assert!(browser.focused().is_none());
    }

    #[test]
    fn navigation_reanchors_when_the_focused_photo_was_dropped() {
        let mut browser = loaded_browser(vec![image("a", "Sports"), image("b", "Sports")]);
        let first = browser.visible_page()[0].clone();
        browser.open_image(first);

        // A background refresh drops the focused photo.
        browser.finish_load(Ok(vec![image("b", "Sports"), image("c", "Sports")]), true);
        assert_eq!(browser.focused().map(|image| image.id.as_str()), Some("a"));

        browser.focus_next();
        assert_eq!(
            browser.focused().map(|image| image.id.as_str()),
            Some("b"),
            "navigation restarts at the first photo of the filtered set"
        );
    }
}
