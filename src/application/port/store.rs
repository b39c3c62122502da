// SPDX-License-Identifier: MPL-2.0
//! Community content store port definition.
//!
//! This module defines the [`CommunityStore`] trait for reading and writing
//! the four content collections behind the portal: gallery photos, events,
//! announcements, and contacts. Infrastructure adapters implement this trait
//! against the society's document store.

use crate::domain::content::{Announcement, CommunityEvent, Contact};
use crate::domain::gallery::GalleryImage;
use futures_util::future::BoxFuture;
use std::fmt;

// =============================================================================
// StoreError
// =============================================================================

/// Errors that can occur while talking to the content store.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum StoreError {
    /// The request never completed (timeout, DNS, connection reset).
    Network(String),

    /// The store rejected the caller's credentials.
    Unauthorized,

    /// The addressed document does not exist.
    NotFound,

    /// The response arrived but could not be decoded.
    Decode(String),
}

impl fmt::Display for StoreError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            StoreError::Network(msg) => write!(f, "Network error: {msg}"),
            StoreError::Unauthorized => write!(f, "Not authorized"),
            StoreError::NotFound => write!(f, "Document not found"),
            StoreError::Decode(msg) => write!(f, "Bad response: {msg}"),
        }
    }
}

impl std::error::Error for StoreError {}

// =============================================================================
// CommunityStore Trait
// =============================================================================

/// Port for the community content store.
///
/// One method pair per collection: `list_*` returns the full collection
/// (the portal's data sets are small), `create_*` returns the stored record
/// with its server-assigned identifier, and `update_*`/`delete_*` return
/// nothing; callers re-list to refresh their view.
///
/// # Thread Safety
///
/// Implementations must be `Send + Sync`; the shell holds one instance
/// behind an `Arc` and clones it into background tasks.
pub trait CommunityStore: Send + Sync {
    // -------------------------------------------------------------------------
    // Gallery
    // -------------------------------------------------------------------------

    /// Lists every gallery photo.
    ///
    /// # Errors
    ///
    /// Returns a [`StoreError`] if the request fails or the response cannot
    /// be decoded. An empty collection is `Ok(vec![])`, not an error.
    fn list_gallery(&self) -> BoxFuture<'_, Result<Vec<GalleryImage>, StoreError>>;

    /// Stores a new gallery photo record. The `id` field is ignored.
    ///
    /// # Errors
    ///
    /// Returns a [`StoreError`] if the write is rejected.
    fn create_gallery_image(
        &self,
        image: GalleryImage,
    ) -> BoxFuture<'_, Result<GalleryImage, StoreError>>;

    /// Rewrites an existing gallery photo record, addressed by its `id`.
    ///
    /// # Errors
    ///
    /// Returns [`StoreError::NotFound`] if the record no longer exists.
    fn update_gallery_image(&self, image: GalleryImage) -> BoxFuture<'_, Result<(), StoreError>>;

    /// Deletes a gallery photo record.
    ///
    /// # Errors
    ///
    /// Returns a [`StoreError`] if the delete is rejected.
    fn delete_gallery_image(&self, id: String) -> BoxFuture<'_, Result<(), StoreError>>;

    // -------------------------------------------------------------------------
    // Events
    // -------------------------------------------------------------------------

    /// Lists every event on the society calendar.
    ///
    /// # Errors
    ///
    /// Returns a [`StoreError`] if the request fails.
    fn list_events(&self) -> BoxFuture<'_, Result<Vec<CommunityEvent>, StoreError>>;

    /// Stores a new event. The `id` field is ignored.
    ///
    /// # Errors
    ///
    /// Returns a [`StoreError`] if the write is rejected.
    fn create_event(
        &self,
        event: CommunityEvent,
    ) -> BoxFuture<'_, Result<CommunityEvent, StoreError>>;

    /// Rewrites an existing event, addressed by its `id`.
    ///
    /// # Errors
    ///
    /// Returns [`StoreError::NotFound`] if the record no longer exists.
    fn update_event(&self, event: CommunityEvent) -> BoxFuture<'_, Result<(), StoreError>>;

    /// Deletes an event.
    ///
    /// # Errors
    ///
    /// Returns a [`StoreError`] if the delete is rejected.
    fn delete_event(&self, id: String) -> BoxFuture<'_, Result<(), StoreError>>;

    // -------------------------------------------------------------------------
    // Announcements
    // -------------------------------------------------------------------------

    /// Lists every announcement.
    ///
    /// # Errors
    ///
    /// Returns a [`StoreError`] if the request fails.
    fn list_announcements(&self) -> BoxFuture<'_, Result<Vec<Announcement>, StoreError>>;

    /// Stores a new announcement. The `id` field is ignored.
    ///
    /// # Errors
    ///
    /// Returns a [`StoreError`] if the write is rejected.
    fn create_announcement(
        &self,
        announcement: Announcement,
    ) -> BoxFuture<'_, Result<Announcement, StoreError>>;

    /// Rewrites an existing announcement, addressed by its `id`.
    ///
    /// # Errors
    ///
    /// Returns [`StoreError::NotFound`] if the record no longer exists.
    fn update_announcement(
        &self,
        announcement: Announcement,
    ) -> BoxFuture<'_, Result<(), StoreError>>;

    /// Deletes an announcement.
    ///
    /// # Errors
    ///
    /// Returns a [`StoreError`] if the delete is rejected.
    fn delete_announcement(&self, id: String) -> BoxFuture<'_, Result<(), StoreError>>;

    // -------------------------------------------------------------------------
    // Contacts
    // -------------------------------------------------------------------------

    /// Lists every directory contact.
    ///
    /// # Errors
    ///
    /// Returns a [`StoreError`] if the request fails.
    fn list_contacts(&self) -> BoxFuture<'_, Result<Vec<Contact>, StoreError>>;

    /// Stores a new contact. The `id` field is ignored.
    ///
    /// # Errors
    ///
    /// Returns a [`StoreError`] if the write is rejected.
    fn create_contact(&self, contact: Contact) -> BoxFuture<'_, Result<Contact, StoreError>>;

    /// Rewrites an existing contact, addressed by its `id`.
    ///
    /// # Errors
    ///
    /// Returns [`StoreError::NotFound`] if the record no longer exists.
    fn update_contact(&self, contact: Contact) -> BoxFuture<'_, Result<(), StoreError>>;

    /// Deletes a contact.
    ///
    /// # Errors
    ///
    /// Returns a [`StoreError`] if the delete is rejected.
    fn delete_contact(&self, id: String) -> BoxFuture<'_, Result<(), StoreError>>;
}
