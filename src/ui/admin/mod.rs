// SPDX-License-Identifier: MPL-2.0
//! Back-office screen for the management committee.
//!
//! Four tabs (events, announcements, contacts, gallery), each a list of
//! records with create/edit forms and delete confirmation. The screen
//! renders only what [`GateStatus`](crate::application::guard::GateStatus)
//! allows: a neutral placeholder while access is being checked, nothing
//! at all once it was denied.
//!
//! All persistence goes through the shell: submitting a valid form emits
//! [`Event::Save`], a confirmed delete emits [`Event::Delete`], and the
//! shell reports the outcome back via the `finish_*` methods on
//! [`State`].

pub mod state;
pub mod view;

pub use state::{Editor, State};
pub use view::ViewContext;

use crate::domain::content::{Announcement, CommunityEvent, Contact};
use crate::domain::gallery::GalleryImage;

// =============================================================================
// Tabs and fields
// =============================================================================

/// One of the managed collections.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum AdminTab {
    Events,
    Announcements,
    Contacts,
    Gallery,
}

impl AdminTab {
    /// All tabs in display order.
    pub const ALL: [AdminTab; 4] = [
        AdminTab::Events,
        AdminTab::Announcements,
        AdminTab::Contacts,
        AdminTab::Gallery,
    ];

    /// Fluent key for the tab label.
    #[must_use]
    pub fn label_key(self) -> &'static str {
        match self {
            AdminTab::Events => "admin-tab-events",
            AdminTab::Announcements => "admin-tab-announcements",
            AdminTab::Contacts => "admin-tab-contacts",
            AdminTab::Gallery => "admin-tab-gallery",
        }
    }
}

/// Identifies which form field a text change applies to.
///
/// The variants cover all four forms; each form ignores fields it does
/// not have.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FormField {
    Title,
    Description,
    Date,
    Time,
    Venue,
    Body,
    Category,
    PublicId,
    Url,
    Name,
    Role,
    Phone,
    Email,
}

// =============================================================================
// Messages and events
// =============================================================================

#[derive(Debug, Clone)]
pub enum Message {
    TabSelected(AdminTab),
    /// Open a blank create form for the active tab.
    NewRecord,
    EditEvent(CommunityEvent),
    EditAnnouncement(Announcement),
    EditGalleryImage(GalleryImage),
    EditContact(Contact),
    FieldChanged(FormField, String),
    SubmitForm,
    CancelForm,
    DeleteRequested {
        id: String,
        label: String,
    },
    DeleteConfirmed,
    DeleteCancelled,
    Retry,
}

/// A record built from a submitted form, ready for the store.
///
/// An empty `id` means the record does not exist yet and must be
/// created; otherwise it is an update.
#[derive(Debug, Clone, PartialEq)]
pub enum Record {
    Event(CommunityEvent),
    Announcement(Announcement),
    GalleryImage(GalleryImage),
    Contact(Contact),
}

impl Record {
    /// Returns `true` if the record has no store id yet.
    #[must_use]
    pub fn is_new(&self) -> bool {
        self.id().is_empty()
    }

    /// The store id, empty for a record still to be created.
    #[must_use]
    pub fn id(&self) -> &str {
        match self {
            Record::Event(event) => &event.id,
            Record::Announcement(announcement) => &announcement.id,
            Record::GalleryImage(image) => &image.id,
            Record::Contact(contact) => &contact.id,
        }
    }
}

/// Events the shell reacts to.
#[derive(Debug, Clone, PartialEq)]
pub enum Event {
    /// Nothing for the shell to do.
    None,
    /// The committee member asked for a fresh fetch of the active list.
    ReloadRequested,
    /// A validated form was submitted; persist it and report back.
    Save(Record),
    /// A delete was confirmed; remove the record and report back.
    Delete { tab: AdminTab, id: String },
}

// =============================================================================
// Update
// =============================================================================

/// Applies an admin message to the screen state.
pub fn update(state: &mut State, message: Message) -> Event {
    match message {
        Message::TabSelected(tab) => {
            state.select_tab(tab);
            Event::None
        }
        Message::NewRecord => {
            state.open_create_form();
            Event::None
        }
        Message::EditEvent(event) => {
            state.open_editor(Editor::for_event(&event));
            Event::None
        }
        Message::EditAnnouncement(announcement) => {
            state.open_editor(Editor::for_announcement(&announcement));
            Event::None
        }
        Message::EditGalleryImage(image) => {
            state.open_editor(Editor::for_gallery_image(&image));
            Event::None
        }
        Message::EditContact(contact) => {
            state.open_editor(Editor::for_contact(&contact));
            Event::None
        }
        Message::FieldChanged(field, value) => {
            state.set_field(field, value);
            Event::None
        }
        Message::SubmitForm => match state.submit() {
            Some(record) => Event::Save(record),
            None => Event::None,
        },
        Message::CancelForm => {
            state.cancel_form();
            Event::None
        }
        Message::DeleteRequested { id, label } => {
            state.request_delete(id, label);
            Event::None
        }
        Message::DeleteConfirmed => match state.confirm_delete() {
            Some((tab, id)) => Event::Delete { tab, id },
            None => Event::None,
        },
        Message::DeleteCancelled => {
            state.cancel_delete();
            Event::None
        }
        Message::Retry => Event::ReloadRequested,
    }
}

// =============================================================================
// Tests
// =============================================================================

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn switching_tabs_closes_the_open_form() {
        let mut state = State::new();
        update(&mut state, Message::NewRecord);
        assert!(state.editor().is_some());

        update(&mut state, Message::TabSelected(AdminTab::Contacts));
        assert!(state.editor().is_none());
        assert_eq!(state.tab(), AdminTab::Contacts);
    }

    #[test]
    fn new_record_opens_a_blank_form_for_the_active_tab() {
        let mut state = State::new();
        update(&mut state, Message::TabSelected(AdminTab::Announcements));
        update(&mut state, Message::NewRecord);

        assert!(matches!(state.editor(), Some(Editor::Announcement(_))));
    }

    #[test]
    fn submitting_a_blank_event_form_reports_a_missing_title() {
        let mut state = State::new();
        update(&mut state, Message::NewRecord);

        let event = update(&mut state, Message::SubmitForm);
        assert_eq!(event, Event::None);
        assert_eq!(state.form_error(), Some("admin-error-title-required"));
    }

    #[test]
    fn submitting_a_valid_event_form_emits_a_save() {
        let mut state = State::new();
        update(&mut state, Message::NewRecord);
        update(
            &mut state,
            Message::FieldChanged(FormField::Title, "Annual Meeting".to_string()),
        );
        update(
            &mut state,
            Message::FieldChanged(FormField::Date, "2026-09-12".to_string()),
        );

        let event = update(&mut state, Message::SubmitForm);
        let Event::Save(Record::Event(record)) = event else {
            panic!("expected an event save, got {:?}", event);
        };
        assert_eq!(record.title, "Annual Meeting");
        assert!(record.is_new() || record.id.is_empty());
        assert!(state.is_saving());
    }

    #[test]
    fn a_save_in_flight_swallows_further_submits() {
        let mut state = State::new();
        update(&mut state, Message::NewRecord);
        update(
            &mut state,
            Message::FieldChanged(FormField::Title, "Annual Meeting".to_string()),
        );
        update(
            &mut state,
            Message::FieldChanged(FormField::Date, "2026-09-12".to_string()),
        );
        update(&mut state, Message::SubmitForm);

        assert_eq!(update(&mut state, Message::SubmitForm), Event::None);
    }

    #[test]
    fn editing_keeps_the_record_id() {
        let mut state = State::new();
        let existing = CommunityEvent {
            id: "evt-1".to_string(),
            title: "Diwali Night".to_string(),
            date: "2026-11-08".to_string(),
            ..CommunityEvent::default()
        };
        update(&mut state, Message::EditEvent(existing));

        let event = update(&mut state, Message::SubmitForm);
        let Event::Save(record) = event else {
            panic!("expected a save");
        };
        assert_eq!(record.id(), "evt-1");
        assert!(!record.is_new());
    }

    #[test]
    fn delete_needs_a_confirmation() {
        let mut state = State::new();
        let event = update(
            &mut state,
            Message::DeleteRequested {
                id: "evt-1".to_string(),
                label: "Diwali Night".to_string(),
            },
        );
        assert_eq!(event, Event::None);

        let event = update(&mut state, Message::DeleteConfirmed);
        assert_eq!(
            event,
            Event::Delete {
                tab: AdminTab::Events,
                id: "evt-1".to_string()
            }
        );
        assert!(state.pending_delete().is_none());
    }

    #[test]
    fn cancelled_delete_fires_nothing() {
        let mut state = State::new();
        update(
            &mut state,
            Message::DeleteRequested {
                id: "evt-1".to_string(),
                label: "Diwali Night".to_string(),
            },
        );
        update(&mut state, Message::DeleteCancelled);

        assert_eq!(update(&mut state, Message::DeleteConfirmed), Event::None);
    }

    #[test]
    fn record_reports_identity() {
        let record = Record::Contact(Contact {
            id: String::new(),
            name: "Asha Verma".to_string(),
            ..Contact::default()
        });
        assert!(record.is_new());
    }
}
