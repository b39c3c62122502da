// SPDX-License-Identifier: MPL-2.0
//! User interface components and state management.
//!
//! This module organizes all UI-related code following a component-based architecture
//! with the Elm-style "state down, messages up" pattern.
//!
//! # Screens
//!
//! - [`home`] - Landing page with the latest announcements
//! - [`about`] - Society profile, amenities summary, and managing committee
//! - [`facilities`] - Amenity listing with timings
//! - [`events`] - Community events, grouped into upcoming and past
//! - [`gallery`] - Photo gallery with category filter, paging, and lightbox
//! - [`contacts`] - Searchable office and emergency contact directory
//! - [`sign_in`] - Email/password sign-in for administrators
//! - [`admin`] - Back-office for events, announcements, photos, and contacts
//!
//! # Shared Infrastructure
//!
//! - [`components`] - Reusable UI components (error display)
//! - [`styles`] - Centralized styling (buttons, containers)
//! - [`design_tokens`] - Design system constants (colors, spacing, sizing)
//! - [`theming`] - Light/Dark/System theme mode management
//! - [`navbar`] - Top navigation bar
//! - [`notifications`] - Toast notification system for user feedback

pub mod about;
pub mod admin;
pub mod components;
pub mod contacts;
pub mod design_tokens;
pub mod events;
pub mod facilities;
pub mod gallery;
pub mod home;
pub mod navbar;
pub mod notifications;
pub mod sign_in;
pub mod styles;
pub mod theming;
