// SPDX-License-Identifier: MPL-2.0
//! Screen state and form validation for the back office.

use super::{AdminTab, FormField, Record};
use crate::domain::content::{Announcement, CommunityEvent, Contact};
use crate::domain::gallery::GalleryImage;
use chrono::NaiveDate;

const DATE_FORMAT: &str = "%Y-%m-%d";

// =============================================================================
// Forms
// =============================================================================

/// Draft of a calendar event.
#[derive(Debug, Clone, Default)]
pub struct EventForm {
    pub id: Option<String>,
    pub title: String,
    pub description: String,
    pub date: String,
    pub time: String,
    pub venue: String,
    created_at: Option<String>,
}

impl EventForm {
    fn from_record(record: &CommunityEvent) -> Self {
        Self {
            id: Some(record.id.clone()),
            title: record.title.clone(),
            description: record.description.clone(),
            date: record.date.clone(),
            time: record.time.clone().unwrap_or_default(),
            venue: record.venue.clone().unwrap_or_default(),
            created_at: record.created_at.clone(),
        }
    }

    fn build(&self) -> Result<CommunityEvent, &'static str> {
        let title = self.title.trim();
        if title.is_empty() {
            return Err("admin-error-title-required");
        }
        let date = self.date.trim();
        if date.is_empty() {
            return Err("admin-error-date-required");
        }
        if NaiveDate::parse_from_str(date, DATE_FORMAT).is_err() {
            return Err("admin-error-date-invalid");
        }

        Ok(CommunityEvent {
            id: self.id.clone().unwrap_or_default(),
            title: title.to_string(),
            description: self.description.trim().to_string(),
            date: date.to_string(),
            time: none_if_empty(&self.time),
            venue: none_if_empty(&self.venue),
            created_at: self.created_at.clone(),
        })
    }
}

/// Draft of a committee notice.
#[derive(Debug, Clone, Default)]
pub struct AnnouncementForm {
    pub id: Option<String>,
    pub title: String,
    pub body: String,
    created_at: Option<String>,
}

impl AnnouncementForm {
    fn from_record(record: &Announcement) -> Self {
        Self {
            id: Some(record.id.clone()),
            title: record.title.clone(),
            body: record.body.clone(),
            created_at: record.created_at.clone(),
        }
    }

    fn build(&self) -> Result<Announcement, &'static str> {
        let title = self.title.trim();
        if title.is_empty() {
            return Err("admin-error-title-required");
        }
        let body = self.body.trim();
        if body.is_empty() {
            return Err("admin-error-body-required");
        }

        Ok(Announcement {
            id: self.id.clone().unwrap_or_default(),
            title: title.to_string(),
            body: body.to_string(),
            created_at: self.created_at.clone(),
        })
    }
}

/// Draft of a gallery photo record.
#[derive(Debug, Clone, Default)]
pub struct GalleryImageForm {
    pub id: Option<String>,
    pub title: String,
    pub category: String,
    pub date: String,
    pub public_id: String,
    pub url: String,
    created_at: Option<String>,
}

impl GalleryImageForm {
    fn from_record(record: &GalleryImage) -> Self {
        Self {
            id: Some(record.id.clone()),
            title: record.title.clone(),
            category: record.category.clone(),
            date: record.date.clone(),
            public_id: record.public_id.clone(),
            url: record.url.clone(),
            created_at: record.created_at.clone(),
        }
    }

    fn build(&self) -> Result<GalleryImage, &'static str> {
        let title = self.title.trim();
        if title.is_empty() {
            return Err("admin-error-title-required");
        }
        let category = self.category.trim();
        if category.is_empty() {
            return Err("admin-error-category-required");
        }
        let public_id = self.public_id.trim();
        let url = self.url.trim();
        if public_id.is_empty() && url.is_empty() {
            return Err("admin-error-image-source-required");
        }
        let date = self.date.trim();
        if !date.is_empty() && NaiveDate::parse_from_str(date, DATE_FORMAT).is_err() {
            return Err("admin-error-date-invalid");
        }

        Ok(GalleryImage {
            id: self.id.clone().unwrap_or_default(),
            title: title.to_string(),
            category: category.to_string(),
            date: date.to_string(),
            public_id: public_id.to_string(),
            url: url.to_string(),
            created_at: self.created_at.clone(),
        })
    }
}

/// Draft of a directory contact.
#[derive(Debug, Clone, Default)]
pub struct ContactForm {
    pub id: Option<String>,
    pub name: String,
    pub role: String,
    pub phone: String,
    pub email: String,
}

impl ContactForm {
    fn from_record(record: &Contact) -> Self {
        Self {
            id: Some(record.id.clone()),
            name: record.name.clone(),
            role: record.role.clone(),
            phone: record.phone.clone(),
            email: record.email.clone().unwrap_or_default(),
        }
    }

    fn build(&self) -> Result<Contact, &'static str> {
        let name = self.name.trim();
        if name.is_empty() {
            return Err("admin-error-name-required");
        }
        let phone = self.phone.trim();
        if phone.is_empty() {
            return Err("admin-error-phone-required");
        }

        Ok(Contact {
            id: self.id.clone().unwrap_or_default(),
            name: name.to_string(),
            role: self.role.trim().to_string(),
            phone: phone.to_string(),
            email: none_if_empty(&self.email),
        })
    }
}

fn none_if_empty(value: &str) -> Option<String> {
    let trimmed = value.trim();
    if trimmed.is_empty() {
        None
    } else {
        Some(trimmed.to_string())
    }
}

// =============================================================================
// Editor
// =============================================================================

/// The open create/edit form, if any.
#[derive(Debug, Clone)]
pub enum Editor {
    Event(EventForm),
    Announcement(AnnouncementForm),
    GalleryImage(GalleryImageForm),
    Contact(ContactForm),
}

impl Editor {
    fn blank_for(tab: AdminTab) -> Self {
        match tab {
            AdminTab::Events => Editor::Event(EventForm::default()),
            AdminTab::Announcements => Editor::Announcement(AnnouncementForm::default()),
            AdminTab::Contacts => Editor::Contact(ContactForm::default()),
            AdminTab::Gallery => Editor::GalleryImage(GalleryImageForm::default()),
        }
    }

    pub(super) fn for_event(record: &CommunityEvent) -> Self {
        Editor::Event(EventForm::from_record(record))
    }

    pub(super) fn for_announcement(record: &Announcement) -> Self {
        Editor::Announcement(AnnouncementForm::from_record(record))
    }

    pub(super) fn for_gallery_image(record: &GalleryImage) -> Self {
        Editor::GalleryImage(GalleryImageForm::from_record(record))
    }

    pub(super) fn for_contact(record: &Contact) -> Self {
        Editor::Contact(ContactForm::from_record(record))
    }

    /// Returns `true` while drafting a record that has no store id yet.
    #[must_use]
    pub fn is_new(&self) -> bool {
        match self {
            Editor::Event(form) => form.id.is_none(),
            Editor::Announcement(form) => form.id.is_none(),
            Editor::GalleryImage(form) => form.id.is_none(),
            Editor::Contact(form) => form.id.is_none(),
        }
    }

    fn set(&mut self, field: FormField, value: String) {
        match self {
            Editor::Event(form) => match field {
                FormField::Title => form.title = value,
                FormField::Description => form.description = value,
                FormField::Date => form.date = value,
                FormField::Time => form.time = value,
                FormField::Venue => form.venue = value,
                _ => {}
            },
            Editor::Announcement(form) => match field {
                FormField::Title => form.title = value,
                FormField::Body => form.body = value,
                _ => {}
            },
            Editor::GalleryImage(form) => match field {
                FormField::Title => form.title = value,
                FormField::Category => form.category = value,
                FormField::Date => form.date = value,
                FormField::PublicId => form.public_id = value,
                FormField::Url => form.url = value,
                _ => {}
            },
            Editor::Contact(form) => match field {
                FormField::Name => form.name = value,
                FormField::Role => form.role = value,
                FormField::Phone => form.phone = value,
                FormField::Email => form.email = value,
                _ => {}
            },
        }
    }

    fn build(&self) -> Result<Record, &'static str> {
        match self {
            Editor::Event(form) => form.build().map(Record::Event),
            Editor::Announcement(form) => form.build().map(Record::Announcement),
            Editor::GalleryImage(form) => form.build().map(Record::GalleryImage),
            Editor::Contact(form) => form.build().map(Record::Contact),
        }
    }
}

// =============================================================================
// Pending delete
// =============================================================================

/// A delete waiting for its confirmation click.
#[derive(Debug, Clone)]
pub struct PendingDelete {
    pub tab: AdminTab,
    pub id: String,
    /// Record title shown in the confirmation prompt.
    pub label: String,
}

// =============================================================================
// State
// =============================================================================

/// Screen state owned by the application shell.
#[derive(Debug, Clone)]
pub struct State {
    tab: AdminTab,
    editor: Option<Editor>,
    form_error: Option<&'static str>,
    saving: bool,
    pending_delete: Option<PendingDelete>,
}

impl Default for State {
    fn default() -> Self {
        Self::new()
    }
}

impl State {
    #[must_use]
    pub fn new() -> Self {
        Self {
            tab: AdminTab::Events,
            editor: None,
            form_error: None,
            saving: false,
            pending_delete: None,
        }
    }

    #[must_use]
    pub fn tab(&self) -> AdminTab {
        self.tab
    }

    #[must_use]
    pub fn editor(&self) -> Option<&Editor> {
        self.editor.as_ref()
    }

    /// Fluent key of the current validation error, if any.
    #[must_use]
    pub fn form_error(&self) -> Option<&'static str> {
        self.form_error
    }

    #[must_use]
    pub fn is_saving(&self) -> bool {
        self.saving
    }

    #[must_use]
    pub fn pending_delete(&self) -> Option<&PendingDelete> {
        self.pending_delete.as_ref()
    }

    pub(super) fn select_tab(&mut self, tab: AdminTab) {
        if self.tab == tab {
            return;
        }
        self.tab = tab;
        self.editor = None;
        self.form_error = None;
        self.saving = false;
        self.pending_delete = None;
    }

    pub(super) fn open_create_form(&mut self) {
        self.open_editor(Editor::blank_for(self.tab));
    }

    pub(super) fn open_editor(&mut self, editor: Editor) {
        self.editor = Some(editor);
        self.form_error = None;
        self.pending_delete = None;
    }

    pub(super) fn set_field(&mut self, field: FormField, value: String) {
        if let Some(editor) = &mut self.editor {
            editor.set(field, value);
        }
    }

    /// Validates the open form. Returns the record to persist, or records
    /// the validation error for the view.
    pub(super) fn submit(&mut self) -> Option<Record> {
        if self.saving {
            return None;
        }
        let editor = self.editor.as_ref()?;
        match editor.build() {
            Ok(record) => {
                self.saving = true;
                self.form_error = None;
                Some(record)
            }
            Err(key) => {
                self.form_error = Some(key);
                None
            }
        }
    }

    pub(super) fn cancel_form(&mut self) {
        self.editor = None;
        self.form_error = None;
        self.saving = false;
    }

    pub(super) fn request_delete(&mut self, id: String, label: String) {
        self.pending_delete = Some(PendingDelete {
            tab: self.tab,
            id,
            label,
        });
    }

    pub(super) fn confirm_delete(&mut self) -> Option<(AdminTab, String)> {
        self.pending_delete.take().map(|pending| (pending.tab, pending.id))
    }

    pub(super) fn cancel_delete(&mut self) {
        self.pending_delete = None;
    }

    /// The store accepted the save; the form closes.
    pub fn finish_save_success(&mut self) {
        self.saving = false;
        self.editor = None;
        self.form_error = None;
    }

    /// The store rejected the save; the form stays open for another try.
    /// The failure itself is reported through a notification.
    pub fn finish_save_failure(&mut self) {
        self.saving = false;
    }
}

// =============================================================================
// Tests
// =============================================================================

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn event_form_rejects_a_malformed_date() {
        let form = EventForm {
            title: "Annual Meeting".to_string(),
            date: "12/09/2026".to_string(),
            ..EventForm::default()
        };
        assert_eq!(form.build(), Err("admin-error-date-invalid"));
    }

    #[test]
    fn event_form_blanks_optional_fields() {
        let form = EventForm {
            title: "  Annual Meeting ".to_string(),
            date: "2026-09-12".to_string(),
            time: "   ".to_string(),
            venue: "Community Hall".to_string(),
            ..EventForm::default()
        };

        let record = form.build().expect("valid form");
        assert_eq!(record.title, "Annual Meeting");
        assert_eq!(record.time, None);
        assert_eq!(record.venue.as_deref(), Some("Community Hall"));
    }

    #[test]
    fn announcement_form_requires_a_body() {
        let form = AnnouncementForm {
            title: "Water Supply".to_string(),
            ..AnnouncementForm::default()
        };
        assert_eq!(form.build(), Err("admin-error-body-required"));
    }

    #[test]
    fn gallery_form_needs_some_image_source() {
        let form = GalleryImageForm {
            title: "Holi".to_string(),
            category: "Festivals".to_string(),
            ..GalleryImageForm::default()
        };
        assert_eq!(form.build(), Err("admin-error-image-source-required"));

        let with_public_id = GalleryImageForm {
            public_id: "gallery/holi-2026".to_string(),
            ..form.clone()
        };
        assert!(with_public_id.build().is_ok());

        let with_url = GalleryImageForm {
            url: "https://cdn.example/holi.jpg".to_string(),
            ..form
        };
        assert!(with_url.build().is_ok());
    }

    #[test]
    fn gallery_form_accepts_a_blank_date() {
        let form = GalleryImageForm {
            title: "Holi".to_string(),
            category: "Festivals".to_string(),
            public_id: "gallery/holi-2026".to_string(),
            ..GalleryImageForm::default()
        };
        assert!(form.build().is_ok());
    }

    #[test]
    fn contact_form_requires_name_and_phone() {
        let form = ContactForm::default();
        assert_eq!(form.build(), Err("admin-error-name-required"));

        let named = ContactForm {
            name: "Asha Verma".to_string(),
            ..ContactForm::default()
        };
        assert_eq!(named.build(), Err("admin-error-phone-required"));
    }

    #[test]
    fn contact_form_drops_an_empty_email() {
        let form = ContactForm {
            name: "Asha Verma".to_string(),
            phone: "+91 98000 11111".to_string(),
            email: "  ".to_string(),
            ..ContactForm::default()
        };
        assert_eq!(form.build().expect("valid form").email, None);
    }

    #[test]
    fn editing_preserves_created_at() {
        let record = CommunityEvent {
            id: "evt-1".to_string(),
            title: "Diwali Night".to_string(),
            date: "2026-11-08".to_string(),
            created_at: Some("2026-01-05T10:00:00Z".to_string()),
            ..CommunityEvent::default()
        };

        let rebuilt = EventForm::from_record(&record).build().expect("valid form");
        assert_eq!(rebuilt.created_at.as_deref(), Some("2026-01-05T10:00:00Z"));
    }

    #[test]
    fn blank_editor_matches_the_tab() {
        assert!(matches!(
            Editor::blank_for(AdminTab::Gallery),
            Editor::GalleryImage(_)
        ));
        assert!(matches!(
            Editor::blank_for(AdminTab::Contacts),
            Editor::Contact(_)
        ));
    }

    #[test]
    fn save_failure_keeps_the_form_open() {
        let mut state = State::new();
        state.open_create_form();
        state.set_field(FormField::Title, "Annual Meeting".to_string());
        state.set_field(FormField::Date, "2026-09-12".to_string());
        assert!(state.submit().is_some());
        assert!(state.is_saving());

        state.finish_save_failure();
        assert!(!state.is_saving());
        assert!(state.editor().is_some(), "the draft is not thrown away");
    }

    #[test]
    fn save_success_closes_the_form() {
        let mut state = State::new();
        state.open_create_form();
        state.set_field(FormField::Title, "Annual Meeting".to_string());
        state.set_field(FormField::Date, "2026-09-12".to_string());
        state.submit();

        state.finish_save_success();
        assert!(state.editor().is_none());
        assert!(!state.is_saving());
    }
}
