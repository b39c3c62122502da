// SPDX-License-Identifier: MPL-2.0
//! `society_hub` is the resident portal and back-office of a housing
//! society, built with the Iced GUI framework.
//!
//! The crate follows a hexagonal layout: pure browsing and listing state
//! lives in [`domain`], the backend ports and the admin access gate in
//! [`application`], the HTTP and CDN adapters in [`infrastructure`], and
//! the Iced shell in [`app`] with its screens under [`ui`].

#![doc(html_root_url = "https://docs.rs/society-hub/0.2.0")]

pub mod app;
pub mod application;
pub mod config;
pub mod domain;
pub mod error;
pub mod i18n;
pub mod infrastructure;
pub mod ui;
