// SPDX-License-Identifier: MPL-2.0
//! Localization via Fluent.
//!
//! Every user-facing string in the portal goes through a Fluent catalog,
//! including toast messages and window titles. Catalogs are embedded in
//! the binary (`assets/i18n/*.ftl`); the build ships English (`en-US`)
//! and Hindi (`hi`).
//!
//! The active locale is resolved once at startup: the `--lang` flag
//! wins, then the `[general] language` config entry, then the system
//! locale, with `en-US` as the final fallback. A missing key renders as
//! `MISSING: <key>` rather than panicking, so an incomplete catalog
//! degrades visibly but safely.

pub mod fluent;
