// SPDX-License-Identifier: MPL-2.0
//! Delivery URL construction for the image CDN.
//!
//! Gallery records store a provider-side `public_id`; the CDN derives any
//! rendition of the original from transformation segments embedded in the
//! URL path. This module builds those URLs. No network I/O happens here,
//! downloads go through [`HttpImageFetcher`].
//!
//! [`HttpImageFetcher`]: crate::infrastructure::image_loader::HttpImageFetcher

/// Builds delivery URLs for a configured CDN account.
///
/// # Example
///
/// ```
/// use society_hub::infrastructure::cdn::ImageCdn;
///
/// let cdn = ImageCdn::new("https://res.cloudinary.com/societyhub");
/// let url = cdn.thumbnail_url("gallery/holi_2024", 400);
/// assert!(url.contains("w_400"));
/// ```
#[derive(Debug, Clone)]
pub struct ImageCdn {
    base_url: String,
}

impl ImageCdn {
    /// Creates a URL builder rooted at the account's delivery base.
    ///
    /// A trailing slash on `base_url` is tolerated.
    #[must_use]
    pub fn new(base_url: impl Into<String>) -> Self {
        let mut base_url = base_url.into();
        while base_url.ends_with('/') {
            base_url.pop();
        }
        Self { base_url }
    }

    /// URL of a grid thumbnail: cropped to fill `width`, auto quality and
    /// format negotiation left to the CDN.
    #[must_use]
    pub fn thumbnail_url(&self, public_id: &str, width: u32) -> String {
        format!(
            "{}/image/upload/w_{width},c_fill,q_auto,f_auto/{public_id}",
            self.base_url
        )
    }

    /// URL of the large rendition shown in the focused viewer: shrunk to
    /// fit `width` when the original is wider, never upscaled, quality and
    /// format negotiation left to the CDN.
    #[must_use]
    pub fn optimized_url(&self, public_id: &str, width: u32) -> String {
        format!(
            "{}/image/upload/w_{width},c_limit,q_auto,f_auto/{public_id}",
            self.base_url
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn thumbnail_url_embeds_width_and_crop() {
        let cdn = ImageCdn::new("https://res.cloudinary.com/societyhub");
        assert_eq!(
            cdn.thumbnail_url("gallery/holi_2024", 400),
            "https://res.cloudinary.com/societyhub/image/upload/w_400,c_fill,q_auto,f_auto/gallery/holi_2024"
        );
    }

    #[test]
    fn optimized_url_bounds_width_without_cropping() {
        let cdn = ImageCdn::new("https://res.cloudinary.com/societyhub");
        assert_eq!(
            cdn.optimized_url("gallery/holi_2024", 1600),
            "https://res.cloudinary.com/societyhub/image/upload/w_1600,c_limit,q_auto,f_auto/gallery/holi_2024"
        );
    }

    #[test]
    fn trailing_slashes_are_trimmed() {
        let cdn = ImageCdn::new("https://cdn.example.org//");
        assert_eq!(
            cdn.optimized_url("pic", 800),
            "https://cdn.example.org/image/upload/w_800,c_limit,q_auto,f_auto/pic"
        );
    }
}
