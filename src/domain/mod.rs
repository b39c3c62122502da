// SPDX-License-Identifier: MPL-2.0
//! Domain layer - Core business logic with ZERO external dependencies.
//!
//! This module contains pure domain types, value objects, and business rules.
//! It has no dependencies on external crates (except `std`) to ensure
//! testability and architectural purity.
//!
//! # Modules
//!
//! - [`auth`]: Identity and access claim types ([`Identity`](auth::Identity),
//!   [`ClaimSet`](auth::ClaimSet), [`ClaimValue`](auth::ClaimValue))
//! - [`content`]: Community content records ([`CommunityEvent`](content::CommunityEvent),
//!   [`Announcement`](content::Announcement), [`Contact`](content::Contact))
//! - [`gallery`]: Photo gallery browsing state ([`GalleryImage`](gallery::GalleryImage),
//!   [`CategoryFilter`](gallery::CategoryFilter), [`GalleryBrowser`](gallery::GalleryBrowser))

pub mod auth;
pub mod content;
pub mod gallery;
