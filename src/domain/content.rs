// SPDX-License-Identifier: MPL-2.0
//! Community content records for the domain layer.
//!
//! Plain data carried between the content store and the screens: events,
//! announcements, and the committee/staff directory, plus the [`Listing`]
//! load-state wrapper the screens share. Dates arrive from the store as
//! strings and are shown as-is; `created_at` holds an RFC 3339 timestamp
//! used only for ordering.

// =============================================================================
// Community Event
// =============================================================================

/// An event on the society calendar.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct CommunityEvent {
    /// Document identifier in the content store.
    pub id: String,
    /// Event name, e.g. "Holi Celebration".
    pub title: String,
    /// Free-form description.
    pub description: String,
    /// Event date in `YYYY-MM-DD` form.
    pub date: String,
    /// Optional start time, shown as-is (e.g. "6:30 PM").
    pub time: Option<String>,
    /// Optional venue within the society.
    pub venue: Option<String>,
    /// RFC 3339 creation timestamp.
    pub created_at: Option<String>,
}

/// Sorts events by calendar date, soonest date first.
///
/// `YYYY-MM-DD` strings compare chronologically, so plain string ordering
/// is correct here.
pub fn sort_by_date(events: &mut [CommunityEvent]) {
    events.sort_by(|a, b| a.date.cmp(&b.date));
}

// =============================================================================
// Announcement
// =============================================================================

/// A notice from the management committee.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct Announcement {
    /// Document identifier in the content store.
    pub id: String,
    /// Headline shown in the notice list.
    pub title: String,
    /// Body text.
    pub body: String,
    /// RFC 3339 creation timestamp used for newest-first ordering.
    pub created_at: Option<String>,
}

/// Sorts announcements newest first.
pub fn sort_newest_first(announcements: &mut [Announcement]) {
    announcements.sort_by(|a, b| b.created_at.cmp(&a.created_at));
}

// =============================================================================
// Contact
// =============================================================================

/// A committee member or staff contact.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct Contact {
    /// Document identifier in the content store.
    pub id: String,
    /// Person's name.
    pub name: String,
    /// Role within the society, e.g. "Secretary" or "Plumber".
    pub role: String,
    /// Phone number, shown and searched as-is.
    pub phone: String,
    /// Optional email address.
    pub email: Option<String>,
}

impl Contact {
    /// Returns `true` if the contact matches a free-text search query.
    ///
    /// Matching is a case-insensitive substring test over name, role, and
    /// phone. An empty or whitespace-only query matches every contact.
    #[must_use]
    pub fn matches_query(&self, query: &str) -> bool {
        let query = query.trim().to_lowercase();
        if query.is_empty() {
            return true;
        }
        self.name.to_lowercase().contains(&query)
            || self.role.to_lowercase().contains(&query)
            || self.phone.contains(&query)
    }
}

// =============================================================================
// Listing
// =============================================================================

/// Load state for one fetched content collection.
///
/// The same shape backs the events, announcements, and contacts screens:
/// the caller starts a fetch, reports it with [`begin_load`](Self::begin_load),
/// and hands the outcome to [`finish_load`](Self::finish_load). A failed fetch
/// keeps the previous items so stale-but-good content stays on screen next to
/// the error.
#[derive(Debug, Clone)]
pub struct Listing<T> {
    items: Vec<T>,
    error: Option<String>,
    loading: bool,
}

impl<T> Default for Listing<T> {
    fn default() -> Self {
        Self::new()
    }
}

impl<T> Listing<T> {
    /// Creates an empty, idle listing.
    #[must_use]
    pub fn new() -> Self {
        Self {
            items: Vec::new(),
            error: None,
            loading: false,
        }
    }

    /// Marks a fetch as started and clears a previous error.
    pub fn begin_load(&mut self) {
        self.loading = true;
        self.error = None;
    }

    /// Applies the outcome of a fetch. Success replaces the items wholesale;
    /// failure surfaces the message and leaves the items untouched.
    pub fn finish_load(&mut self, result: Result<Vec<T>, String>) {
        self.loading = false;
        match result {
            Ok(items) => {
                self.items = items;
                self.error = None;
            }
            Err(message) => self.error = Some(message),
        }
    }

    #[must_use]
    pub fn items(&self) -> &[T] {
        &self.items
    }

    /// The error from the last fetch, if it failed.
    #[must_use]
    pub fn error(&self) -> Option<&str> {
        self.error.as_deref()
    }

    #[must_use]
    pub fn is_loading(&self) -> bool {
        self.loading
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }
}

// =============================================================================
// Tests
// =============================================================================

#[cfg(test)]
mod tests {
    use super::*;

    // -------------------------------------------------------------------------
    // Event tests
    // -------------------------------------------------------------------------

    #[test]
    fn events_sort_by_calendar_date() {
        let mut events = vec![
            CommunityEvent {
                id: "b".into(),
                date: "2026-03-14".into(),
                ..CommunityEvent::default()
            },
            CommunityEvent {
                id: "a".into(),
                date: "2026-01-26".into(),
                ..CommunityEvent::default()
            },
            CommunityEvent {
                id: "c".into(),
                date: "2026-08-15".into(),
                ..CommunityEvent::default()
            },
        ];

        sort_by_date(&mut events);
        let ids: Vec<&str> = events.iter().map(|event| event.id.as_str()).collect();
        assert_eq!(ids, vec!["a", "b", "c"]);
    }

    // -------------------------------------------------------------------------
    // Announcement tests
    // -------------------------------------------------------------------------

    #[test]
    fn announcements_sort_newest_first() {
        let mut announcements = vec![
            Announcement {
                id: "old".into(),
                created_at: Some("2026-01-02T10:00:00Z".into()),
                ..Announcement::default()
            },
            Announcement {
                id: "new".into(),
                created_at: Some("2026-04-20T10:00:00Z".into()),
                ..Announcement::default()
            },
            Announcement {
                id: "undated".into(),
                created_at: None,
                ..Announcement::default()
            },
        ];

        sort_newest_first(&mut announcements);
        let ids: Vec<&str> = announcements
            .iter()
            .map(|announcement| announcement.id.as_str())
            .collect();
        assert_eq!(ids, vec!["new", "old", "undated"]);
    }

    // -------------------------------------------------------------------------
    // Contact tests
    // -------------------------------------------------------------------------

    fn contact(name: &str, role: &str, phone: &str) -> Contact {
        Contact {
            id: "c1".into(),
            name: name.into(),
            role: role.into(),
            phone: phone.into(),
            email: None,
        }
    }

    #[test]
    fn empty_query_matches_every_contact() {
        let person = contact("Asha Verma", "Secretary", "+91 98100 12345");
        assert!(person.matches_query(""));
        assert!(person.matches_query("   "));
    }

    #[test]
    fn query_matches_name_case_insensitively() {
        let person = contact("Asha Verma", "Secretary", "+91 98100 12345");
        assert!(person.matches_query("asha"));
        assert!(person.matches_query("VERMA"));
        assert!(!person.matches_query("rahul"));
    }

    #[test]
    fn query_matches_role_and_phone() {
        let person = contact("Asha Verma", "Secretary", "+91 98100 12345");
        assert!(person.matches_query("secret"));
        assert!(person.matches_query("98100"));
    }

    #[test]
    fn surrounding_whitespace_is_ignored() {
        let person = contact("Asha Verma", "Secretary", "+91 98100 12345");
        assert!(person.matches_query("  asha  "));
    }

    // -------------------------------------------------------------------------
    // Listing tests
    // -------------------------------------------------------------------------

    #[test]
    fn new_listing_is_empty_and_idle() {
        let listing: Listing<Announcement> = Listing::new();
        assert!(listing.is_empty());
        assert!(!listing.is_loading());
        assert!(listing.error().is_none());
    }

    #[test]
    fn begin_load_clears_a_previous_error() {
        let mut listing: Listing<Contact> = Listing::new();
        listing.finish_load(Err("network down".to_string()));
        assert_eq!(listing.error(), Some("network down"));

        listing.begin_load();
        assert!(listing.is_loading());
        assert!(listing.error().is_none());
    }

    #[test]
    fn successful_load_replaces_items() {
        let mut listing: Listing<Announcement> = Listing::new();
        listing.finish_load(Ok(vec![Announcement::default()]));
        assert_eq!(listing.items().len(), 1);

        listing.finish_load(Ok(Vec::new()));
        assert!(listing.is_empty(), "replacement is wholesale");
        assert!(listing.error().is_none(), "empty is not an error");
    }

    #[test]
    fn failed_load_keeps_previous_items() {
        let mut listing: Listing<Announcement> = Listing::new();
        listing.finish_load(Ok(vec![Announcement::default()]));

        listing.begin_load();
        listing.finish_load(Err("timeout".to_string()));

        assert_eq!(listing.items().len(), 1);
        assert_eq!(listing.error(), Some("timeout"));
        assert!(!listing.is_loading());
    }
}
