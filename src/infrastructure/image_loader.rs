// SPDX-License-Identifier: MPL-2.0
//! HTTP image download adapter implementing the [`ImageFetcher`] trait.
//!
//! Fetches encoded image bytes from CDN delivery URLs. Decoding happens in
//! the UI layer, where the bytes become an `iced` image handle.
//!
//! [`ImageFetcher`]: crate::application::port::ImageFetcher

use std::time::Duration;

use futures_util::future::BoxFuture;

use crate::application::port::{ImageFetcher, ImageLoadError};
use crate::error::Result;

/// Downloads images over HTTP with a configured timeout.
pub struct HttpImageFetcher {
    http: reqwest::Client,
}

impl HttpImageFetcher {
    /// Creates a fetcher with the given per-request timeout.
    ///
    /// # Errors
    ///
    /// Returns an error if the HTTP client cannot be constructed.
    pub fn new(timeout: Duration) -> Result<Self> {
        let http = reqwest::Client::builder().timeout(timeout).build()?;
        Ok(Self { http })
    }
}

impl ImageFetcher for HttpImageFetcher {
    fn fetch(&self, url: String) -> BoxFuture<'_, std::result::Result<Vec<u8>, ImageLoadError>> {
        Box::pin(async move {
            let response = self
                .http
                .get(&url)
                .send()
                .await
                .map_err(|e| ImageLoadError::Network(e.to_string()))?;

            let status = response.status();
            if !status.is_success() {
                return Err(ImageLoadError::Unavailable(format!("HTTP {status}")));
            }

            let bytes = response
                .bytes()
                .await
                .map_err(|e| ImageLoadError::Network(e.to_string()))?;
            Ok(bytes.to_vec())
        })
    }
}
