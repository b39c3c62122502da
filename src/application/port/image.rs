// SPDX-License-Identifier: MPL-2.0
//! Image fetching port definition.
//!
//! This module defines the [`ImageFetcher`] trait for downloading encoded
//! image bytes from the delivery network. Decoding stays in the UI layer,
//! which hands the bytes to Iced's image widget.

use futures_util::future::BoxFuture;
use std::fmt;

// =============================================================================
// ImageLoadError
// =============================================================================

/// Errors that can occur while fetching an image.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ImageLoadError {
    /// The download never completed.
    Network(String),

    /// The server answered, but not with a usable image.
    Unavailable(String),
}

impl fmt::Display for ImageLoadError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ImageLoadError::Network(msg) => write!(f, "Network error: {msg}"),
            ImageLoadError::Unavailable(msg) => write!(f, "Image unavailable: {msg}"),
        }
    }
}

impl std::error::Error for ImageLoadError {}

// =============================================================================
// ImageFetcher Trait
// =============================================================================

/// Port for downloading encoded image bytes.
///
/// # Thread Safety
///
/// Implementations must be `Send + Sync`; the shell fetches thumbnails
/// concurrently from background tasks.
pub trait ImageFetcher: Send + Sync {
    /// Downloads the image at `url` and returns its encoded bytes.
    ///
    /// # Errors
    ///
    /// Returns an [`ImageLoadError`] if the download fails or the server
    /// does not answer with image data.
    fn fetch(&self, url: String) -> BoxFuture<'_, Result<Vec<u8>, ImageLoadError>>;
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn image_load_error_display() {
        let err = ImageLoadError::Network("dns failure".to_string());
        assert!(format!("{err}").contains("dns failure"));

        let err = ImageLoadError::Unavailable("404".to_string());
        assert!(format!("{err}").contains("404"));
    }
}
