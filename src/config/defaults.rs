// SPDX-License-Identifier: MPL-2.0
//! Centralized default values for all configuration constants.
//!
//! This module serves as the single source of truth for default values
//! used across the application. Constants are organized by category.
//!
//! # Categories
//!
//! - **Backend**: Service endpoints and request timeouts
//! - **Gallery**: Background refresh cadence and thumbnail sizing
//! - **Cache**: In-memory thumbnail cache capacity

// ==========================================================================
// Backend Defaults
// ==========================================================================

/// Default base URL of the community content service.
pub const DEFAULT_STORE_URL: &str = "https://api.societyhub.example/v1";

/// Default base URL of the identity service.
pub const DEFAULT_IDENTITY_URL: &str = "https://auth.societyhub.example/v1";

/// Default base URL of the image delivery network.
pub const DEFAULT_CDN_URL: &str = "https://res.cloudinary.com/societyhub";

/// Default HTTP request timeout (in seconds).
pub const DEFAULT_TIMEOUT_SECS: u64 = 10;

/// Minimum HTTP request timeout (in seconds).
pub const MIN_TIMEOUT_SECS: u64 = 1;

/// Maximum HTTP request timeout (in seconds).
pub const MAX_TIMEOUT_SECS: u64 = 120;

// ==========================================================================
// Gallery Defaults
// ==========================================================================

/// Default interval between silent gallery refreshes (in seconds).
pub const DEFAULT_REFRESH_SECS: u64 = 30;

/// Minimum gallery refresh interval (in seconds).
pub const MIN_REFRESH_SECS: u64 = 5;

/// Maximum gallery refresh interval (in seconds).
pub const MAX_REFRESH_SECS: u64 = 600;

/// Default width (in pixels) requested for gallery thumbnails.
pub const DEFAULT_THUMBNAIL_WIDTH: u32 = 400;

/// Minimum thumbnail width.
pub const MIN_THUMBNAIL_WIDTH: u32 = 100;

/// Maximum thumbnail width.
pub const MAX_THUMBNAIL_WIDTH: u32 = 1600;

// ==========================================================================
// Cache Defaults
// ==========================================================================

/// Default number of decoded thumbnails kept in memory.
pub const DEFAULT_CACHE_ENTRIES: usize = 64;

/// Minimum thumbnail cache capacity.
pub const MIN_CACHE_ENTRIES: usize = 16;

/// Maximum thumbnail cache capacity.
pub const MAX_CACHE_ENTRIES: usize = 512;

// ==========================================================================
// Compile-time Validation
// ==========================================================================

const _: () = {
    // Timeout validation
    assert!(MIN_TIMEOUT_SECS > 0);
    assert!(MAX_TIMEOUT_SECS >= MIN_TIMEOUT_SECS);
    assert!(DEFAULT_TIMEOUT_SECS >= MIN_TIMEOUT_SECS);
    assert!(DEFAULT_TIMEOUT_SECS <= MAX_TIMEOUT_SECS);

    // Refresh interval validation
    assert!(MIN_REFRESH_SECS > 0);
    assert!(MAX_REFRESH_SECS >= MIN_REFRESH_SECS);
    assert!(DEFAULT_REFRESH_SECS >= MIN_REFRESH_SECS);
    assert!(DEFAULT_REFRESH_SECS <= MAX_REFRESH_SECS);

    // Thumbnail width validation
    assert!(MIN_THUMBNAIL_WIDTH > 0);
    assert!(MAX_THUMBNAIL_WIDTH >= MIN_THUMBNAIL_WIDTH);
    assert!(DEFAULT_THUMBNAIL_WIDTH >= MIN_THUMBNAIL_WIDTH);
    assert!(DEFAULT_THUMBNAIL_WIDTH <= MAX_THUMBNAIL_WIDTH);

    // Cache capacity validation
    assert!(MIN_CACHE_ENTRIES > 0);
    assert!(MAX_CACHE_ENTRIES >= MIN_CACHE_ENTRIES);
    assert!(DEFAULT_CACHE_ENTRIES >= MIN_CACHE_ENTRIES);
    assert!(DEFAULT_CACHE_ENTRIES <= MAX_CACHE_ENTRIES);
};

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn timeout_defaults_are_valid() {
        assert_eq!(DEFAULT_TIMEOUT_SECS, 10);
        assert!(DEFAULT_TIMEOUT_SECS >= MIN_TIMEOUT_SECS);
        assert!(DEFAULT_TIMEOUT_SECS <= MAX_TIMEOUT_SECS);
    }

    #[test]
    fn refresh_defaults_are_valid() {
        assert_eq!(DEFAULT_REFRESH_SECS, 30);
        assert!(DEFAULT_REFRESH_SECS >= MIN_REFRESH_SECS);
        assert!(DEFAULT_REFRESH_SECS <= MAX_REFRESH_SECS);
    }

    #[test]
    fn thumbnail_defaults_are_valid() {
        assert_eq!(DEFAULT_THUMBNAIL_WIDTH, 400);
        assert!(DEFAULT_THUMBNAIL_WIDTH >= MIN_THUMBNAIL_WIDTH);
        assert!(DEFAULT_THUMBNAIL_WIDTH <= MAX_THUMBNAIL_WIDTH);
    }

    #[test]
    fn cache_defaults_are_valid() {
        assert_eq!(DEFAULT_CACHE_ENTRIES, 64);
        assert!(DEFAULT_CACHE_ENTRIES >= MIN_CACHE_ENTRIES);
        assert!(DEFAULT_CACHE_ENTRIES <= MAX_CACHE_ENTRIES);
    }

    #[test]
    fn default_urls_are_well_formed() {
        assert!(DEFAULT_STORE_URL.starts_with("https://"));
        assert!(DEFAULT_IDENTITY_URL.starts_with("https://"));
        assert!(DEFAULT_CDN_URL.starts_with("https://"));
        assert!(!DEFAULT_STORE_URL.ends_with('/'));
        assert!(!DEFAULT_CDN_URL.ends_with('/'));
    }
}
