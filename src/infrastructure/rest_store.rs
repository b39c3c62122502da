// SPDX-License-Identifier: MPL-2.0
//! Community backend adapter implementing the [`CommunityStore`] trait.
//!
//! The backend exposes one JSON collection per content kind:
//!
//! | Collection      | Record type        |
//! |-----------------|--------------------|
//! | `gallery`       | [`GalleryImage`]   |
//! | `events`        | [`CommunityEvent`] |
//! | `announcements` | [`Announcement`]   |
//! | `contacts`      | [`Contact`]        |
//!
//! Listing is `GET {base}/{collection}`, writes are `POST` on the
//! collection, `PATCH`/`DELETE` on `{base}/{collection}/{id}`. Records
//! travel as camelCase JSON; the private `*Record` structs in this file own
//! that spelling so domain types stay serialization-free.
//!
//! # Design Notes
//!
//! - Writes need a bearer token, which the adapter pulls per request from an
//!   optional [`TokenSource`]. Public reads work without one.
//! - `401`/`403` map to [`StoreError::Unauthorized`] so the shell can react
//!   to a revoked session uniformly.
//!
//! [`CommunityStore`]: crate::application::port::CommunityStore

use std::sync::Arc;
use std::time::Duration;

use futures_util::future::BoxFuture;
use serde::de::DeserializeOwned;
use serde::{Deserialize, Serialize};

use crate::application::port::{CommunityStore, StoreError, TokenSource};
use crate::domain::content::{Announcement, CommunityEvent, Contact};
use crate::domain::gallery::GalleryImage;
use crate::error::Result;

const GALLERY: &str = "gallery";
const EVENTS: &str = "events";
const ANNOUNCEMENTS: &str = "announcements";
const CONTACTS: &str = "contacts";

// =============================================================================
// Adapter
// =============================================================================

/// HTTP adapter for the community content backend.
pub struct RestStore {
    http: reqwest::Client,
    base_url: String,
    tokens: Option<Arc<dyn TokenSource>>,
}

impl RestStore {
    /// Creates a store client for the given backend base URL.
    ///
    /// Pass a [`TokenSource`] when writes must be authenticated; `None`
    /// yields an anonymous client good for public reads only.
    ///
    /// # Errors
    ///
    /// Returns an error if the HTTP client cannot be constructed.
    pub fn new(
        base_url: impl Into<String>,
        timeout: Duration,
        tokens: Option<Arc<dyn TokenSource>>,
    ) -> Result<Self> {
        let http = reqwest::Client::builder().timeout(timeout).build()?;
        let mut base_url = base_url.into();
        while base_url.ends_with('/') {
            base_url.pop();
        }
        Ok(Self {
            http,
            base_url,
            tokens,
        })
    }

    fn collection_url(&self, collection: &str) -> String {
        format!("{}/{collection}", self.base_url)
    }

    fn document_url(&self, collection: &str, id: &str) -> String {
        format!("{}/{collection}/{id}", self.base_url)
    }

    async fn authorize(&self, request: reqwest::RequestBuilder) -> reqwest::RequestBuilder {
        let token = match &self.tokens {
            Some(tokens) => tokens.bearer_token().await,
            None => None,
        };
        match token {
            Some(token) => request.bearer_auth(token),
            None => request,
        }
    }

    async fn list<R: DeserializeOwned>(&self, collection: &str) -> StoreResult<Vec<R>> {
        let request = self.authorize(self.http.get(self.collection_url(collection))).await;
        let response = request.send().await.map_err(transport)?;
        read_json(response).await
    }

    async fn create<R>(&self, collection: &str, record: &R) -> StoreResult<R>
    where
        R: Serialize + DeserializeOwned,
    {
        let request = self
            .authorize(self.http.post(self.collection_url(collection)).json(record))
            .await;
        let response = request.send().await.map_err(transport)?;
        read_json(response).await
    }

    async fn update<R: Serialize>(&self, collection: &str, id: &str, record: &R) -> StoreResult<()> {
        let request = self
            .authorize(self.http.patch(self.document_url(collection, id)).json(record))
            .await;
        let response = request.send().await.map_err(transport)?;
        check_status(response).map(drop)
    }

    async fn remove(&self, collection: &str, id: &str) -> StoreResult<()> {
        let request = self
            .authorize(self.http.delete(self.document_url(collection, id)))
            .await;
        let response = request.send().await.map_err(transport)?;
        check_status(response).map(drop)
    }
}

type StoreResult<T> = std::result::Result<T, StoreError>;

fn transport(error: reqwest::Error) -> StoreError {
    StoreError::Network(error.to_string())
}

fn check_status(response: reqwest::Response) -> StoreResult<reqwest::Response> {
    use reqwest::StatusCode;

    match response.status() {
        status if status.is_success() => Ok(response),
        StatusCode::UNAUTHORIZED | StatusCode::FORBIDDEN => Err(StoreError::Unauthorized),
        StatusCode::NOT_FOUND => Err(StoreError::NotFound),
        status => Err(StoreError::Network(format!("HTTP {status}"))),
    }
}

async fn read_json<R: DeserializeOwned>(response: reqwest::Response) -> StoreResult<R> {
    let response = check_status(response)?;
    response
        .json()
        .await
        .map_err(|e| StoreError::Decode(e.to_string()))
}

// =============================================================================
// CommunityStore implementation
// =============================================================================

impl CommunityStore for RestStore {
    fn list_gallery(&self) -> BoxFuture<'_, StoreResult<Vec<GalleryImage>>> {
        Box::pin(async move {
            let records: Vec<GalleryImageRecord> = self.list(GALLERY).await?;
            Ok(records.into_iter().map(GalleryImage::from).collect())
        })
    }

    fn create_gallery_image(&self, image: GalleryImage) -> BoxFuture<'_, StoreResult<GalleryImage>> {
        Box::pin(async move {
            let created: GalleryImageRecord =
                self.create(GALLERY, &GalleryImageRecord::from(image)).await?;
            Ok(created.into())
        })
    }

    fn update_gallery_image(&self, image: GalleryImage) -> BoxFuture<'_, StoreResult<()>> {
        Box::pin(async move {
            let id = image.id.clone();
            self.update(GALLERY, &id, &GalleryImageRecord::from(image)).await
        })
    }

    fn delete_gallery_image(&self, id: String) -> BoxFuture<'_, StoreResult<()>> {
        Box::pin(async move { self.remove(GALLERY, &id).await })
    }

    fn list_events(&self) -> BoxFuture<'_, StoreResult<Vec<CommunityEvent>>> {
        Box::pin(async move {
            let records: Vec<EventRecord> = self.list(EVENTS).await?;
            Ok(records.into_iter().map(CommunityEvent::from).collect())
        })
    }

    fn create_event(&self, event: CommunityEvent) -> BoxFuture<'_, StoreResult<CommunityEvent>> {
        Box::pin(async move {
            let created: EventRecord = self.create(EVENTS, &EventRecord::from(event)).await?;
            Ok(created.into())
        })
    }

    fn update_event(&self, event: CommunityEvent) -> BoxFuture<'_, StoreResult<()>> {
        Box::pin(async move {
            let id = event.id.clone();
            self.update(EVENTS, &id, &EventRecord::from(event)).await
        })
    }

    fn delete_event(&self, id: String) -> BoxFuture<'_, StoreResult<()>> {
        Box::pin(async move { self.remove(EVENTS, &id).await })
    }

    fn list_announcements(&self) -> BoxFuture<'_, StoreResult<Vec<Announcement>>> {
        Box::pin(async move {
            let records: Vec<AnnouncementRecord> = self.list(ANNOUNCEMENTS).await?;
            Ok(records.into_iter().map(Announcement::from).collect())
        })
    }

    fn create_announcement(
        &self,
        announcement: Announcement,
    ) -> BoxFuture<'_, StoreResult<Announcement>> {
        Box::pin(async move {
            let created: AnnouncementRecord = self
                .create(ANNOUNCEMENTS, &AnnouncementRecord::from(announcement))
                .await?;
            Ok(created.into())
        })
    }

    fn update_announcement(&self, announcement: Announcement) -> BoxFuture<'_, StoreResult<()>> {
        Box::pin(async move {
            let id = announcement.id.clone();
            self.update(ANNOUNCEMENTS, &id, &AnnouncementRecord::from(announcement))
                .await
        })
    }

    fn delete_announcement(&self, id: String) -> BoxFuture<'_, StoreResult<()>> {
        Box::pin(async move { self.remove(ANNOUNCEMENTS, &id).await })
    }

    fn list_contacts(&self) -> BoxFuture<'_, StoreResult<Vec<Contact>>> {
        Box::pin(async move {
            let records: Vec<ContactRecord> = self.list(CONTACTS).await?;
            Ok(records.into_iter().map(Contact::from).collect())
        })
    }

    fn create_contact(&self, contact: Contact) -> BoxFuture<'_, StoreResult<Contact>> {
        Box::pin(async move {
            let created: ContactRecord = self.create(CONTACTS, &ContactRecord::from(contact)).await?;
            Ok(created.into())
        })
    }

    fn update_contact(&self, contact: Contact) -> BoxFuture<'_, StoreResult<()>> {
        Box::pin(async move {
            let id = contact.id.clone();
            self.update(CONTACTS, &id, &ContactRecord::from(contact)).await
        })
    }

    fn delete_contact(&self, id: String) -> BoxFuture<'_, StoreResult<()>> {
        Box::pin(async move { self.remove(CONTACTS, &id).await })
    }
}

// =============================================================================
// Wire records
// =============================================================================
//
// The backend speaks camelCase JSON. Every field except `id` is defaulted on
// read so a sparse document degrades to empty strings instead of failing the
// whole listing.

#[derive(Debug, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
struct GalleryImageRecord {
    id: String,
    title: String,
    category: String,
    date: String,
    public_id: String,
    url: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    created_at: Option<String>,
}

impl From<GalleryImageRecord> for GalleryImage {
    fn from(record: GalleryImageRecord) -> Self {
        Self {
            id: record.id,
            title: record.title,
            category: record.category,
            date: record.date,
            public_id: record.public_id,
            url: record.url,
            created_at: record.created_at,
        }
    }
}

impl From<GalleryImage> for GalleryImageRecord {
    fn from(image: GalleryImage) -> Self {
        Self {
            id: image.id,
            title: image.title,
            category: image.category,
            date: image.date,
            public_id: image.public_id,
            url: image.url,
            created_at: image.created_at,
        }
    }
}

#[derive(Debug, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
struct EventRecord {
    id: String,
    title: String,
    description: String,
    date: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    time: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    venue: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    created_at: Option<String>,
}

impl From<EventRecord> for CommunityEvent {
    fn from(record: EventRecord) -> Self {
        Self {
            id: record.id,
            title: record.title,
            description: record.description,
            date: record.date,
            time: record.time,
            venue: record.venue,
            created_at: record.created_at,
        }
    }
}

impl From<CommunityEvent> for EventRecord {
    fn from(event: CommunityEvent) -> Self {
        Self {
            id: event.id,
            title: event.title,
            description: event.description,
            date: event.date,
            time: event.time,
            venue: event.venue,
            created_at: event.created_at,
        }
    }
}

#[derive(Debug, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
struct AnnouncementRecord {
    id: String,
    title: String,
    body: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    created_at: Option<String>,
}

impl From<AnnouncementRecord> for Announcement {
    fn from(record: AnnouncementRecord) -> Self {
        Self {
            id: record.id,
            title: record.title,
            body: record.body,
            created_at: record.created_at,
        }
    }
}

impl From<Announcement> for AnnouncementRecord {
    fn from(announcement: Announcement) -> Self {
        Self {
            id: announcement.id,
            title: announcement.title,
            body: announcement.body,
            created_at: announcement.created_at,
        }
    }
}

#[derive(Debug, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
struct ContactRecord {
    id: String,
    name: String,
    role: String,
    phone: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    email: Option<String>,
}

impl From<ContactRecord> for Contact {
    fn from(record: ContactRecord) -> Self {
        Self {
            id: record.id,
            name: record.name,
            role: record.role,
            phone: record.phone,
            email: record.email,
        }
    }
}

impl From<Contact> for ContactRecord {
    fn from(contact: Contact) -> Self {
        Self {
            id: contact.id,
            name: contact.name,
            role: contact.role,
            phone: contact.phone,
            email: contact.email,
        }
    }
}

// =============================================================================
// Tests
// =============================================================================

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    fn store() -> RestStore {
        RestStore::new(
            "https://api.societyhub.example/v1/",
            Duration::from_secs(5),
            None,
        )
        .expect("client should build")
    }

    #[test]
    fn collection_and_document_urls() {
        let store = store();
        assert_eq!(
            store.collection_url(GALLERY),
            "https://api.societyhub.example/v1/gallery"
        );
        assert_eq!(
            store.document_url(EVENTS, "abc123"),
            "https://api.societyhub.example/v1/events/abc123"
        );
    }

    #[test]
    fn gallery_record_serializes_as_camel_case() {
        let record = GalleryImageRecord {
            id: "img-1".to_string(),
            title: "Holi".to_string(),
            category: "Festivals".to_string(),
            date: "2024-03-25".to_string(),
            public_id: "gallery/holi_2024".to_string(),
            url: "https://cdn.example.org/holi.jpg".to_string(),
            created_at: Some("2024-03-25T10:00:00Z".to_string()),
        };

        let value = serde_json::to_value(&record).expect("should serialize");
        assert_eq!(value["publicId"], "gallery/holi_2024");
        assert_eq!(value["createdAt"], "2024-03-25T10:00:00Z");
        assert!(value.get("public_id").is_none());
    }

    #[test]
    fn sparse_gallery_document_deserializes_with_defaults() {
        let record: GalleryImageRecord =
            serde_json::from_value(json!({ "id": "img-2", "title": "Diwali" }))
                .expect("sparse document should decode");

        assert_eq!(record.id, "img-2");
        assert_eq!(record.category, "");
        assert_eq!(record.created_at, None);
    }

    #[test]
    fn none_timestamps_are_omitted_on_write() {
        let record = AnnouncementRecord {
            id: String::new(),
            title: "Water supply".to_string(),
            body: "Maintenance on Sunday".to_string(),
            created_at: None,
        };

        let value = serde_json::to_value(&record).expect("should serialize");
        assert!(value.get("createdAt").is_none());
    }

    #[test]
    fn record_round_trips_through_domain_type() {
        let record = ContactRecord {
            id: "c-1".to_string(),
            name: "Asha Rao".to_string(),
            role: "Secretary".to_string(),
            phone: "+91 98765 43210".to_string(),
            email: Some("asha@example.org".to_string()),
        };

        let contact = Contact::from(record);
        assert_eq!(contact.name, "Asha Rao");

        let back = ContactRecord::from(contact);
        assert_eq!(back.email.as_deref(), Some("asha@example.org"));
    }
}
