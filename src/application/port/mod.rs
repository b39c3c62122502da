// SPDX-License-Identifier: MPL-2.0
//! Port definitions (traits) for dependency inversion.
//!
//! This module defines abstract interfaces that infrastructure adapters implement.
//! These traits use only domain types, ensuring the application layer remains
//! independent of concrete implementations.
//!
//! # Available Ports
//!
//! - [`store`]: Community content CRUD (gallery, events, announcements, contacts)
//! - [`identity`]: Sign-in, auth-state watching, and access claims
//! - [`image`]: Image byte fetching for thumbnails and the focused viewer
//!
//! # Design Notes
//!
//! - All traits use domain types only (no Iced handles, no HTTP types)
//! - Traits are `Send + Sync` so adapters can be shared behind `Arc`
//! - I/O methods return [`futures_util::future::BoxFuture`] rather than
//!   `async fn`, keeping the traits object-safe; the shell drives them
//!   through Iced's `Task`
//!
//! # Example
//!
//! ```ignore
//! use society_hub::application::port::CommunityStore;
//! use std::sync::Arc;
//!
//! async fn refresh(store: Arc<dyn CommunityStore>) {
//!     match store.list_gallery().await {
//!         Ok(images) => println!("{} photos", images.len()),
//!         Err(e) => eprintln!("fetch failed: {e}"),
//!     }
//! }
//! ```

pub mod identity;
pub mod image;
pub mod store;

// Re-export main types for convenience
pub use identity::{AuthError, AuthListener, AuthWatch, ClaimsError, IdentityProvider, TokenSource};
pub use image::{ImageFetcher, ImageLoadError};
pub use store::{CommunityStore, StoreError};
