// SPDX-License-Identifier: MPL-2.0
//! Infrastructure layer adapters.
//!
//! This module contains concrete implementations of the port traits defined in
//! `application::port`. These adapters wrap the external collaborators: the
//! community REST backend, the identity provider, and the image CDN.
//!
//! # Available Adapters
//!
//! - [`rest_store`]: Community content over HTTP (implements [`CommunityStore`])
//! - [`identity_client`]: Token-based auth (implements [`IdentityProvider`])
//! - [`image_loader`]: Image downloads (implements [`ImageFetcher`])
//! - [`cdn`]: Delivery URL construction (no port; pure string work)
//!
//! # Design Notes
//!
//! - Adapters implement traits from `application::port`
//! - Wire formats (JSON field names, token shapes) stay private to this layer;
//!   only domain types cross the port boundary
//! - All HTTP goes through `reqwest` with a configured timeout
//!
//! [`CommunityStore`]: crate::application::port::CommunityStore
//! [`IdentityProvider`]: crate::application::port::IdentityProvider
//! [`ImageFetcher`]: crate::application::port::ImageFetcher

pub mod cdn;
pub mod identity_client;
pub mod image_loader;
pub mod rest_store;

// Re-export main types for convenience
pub use cdn::ImageCdn;
pub use identity_client::IdentityClient;
pub use image_loader::HttpImageFetcher;
pub use rest_store::RestStore;
