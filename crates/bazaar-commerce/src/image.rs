//! Static image paths and the load-error fallback.

use std::fmt;

use crate::config::ImageConfig;
use serde::{Deserialize, Serialize};

/// Sub-directory of the images root.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ImageKind {
    Products,
    Artisans,
    Categories,
    Banners,
}

impl ImageKind {
    pub fn as_str(&self) -> &'static str {
        match self {
            ImageKind::Products => "products",
            ImageKind::Artisans => "artisans",
            ImageKind::Categories => "categories",
            ImageKind::Banners => "banners",
        }
    }
}

impl fmt::Display for ImageKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// `<base>/<kind>/<file>`, e.g. `/images/products/ikat-saree.jpg`.
pub fn asset_path(config: &ImageConfig, kind: ImageKind, file: &str) -> String {
    format!(
        "{}/{}/{}",
        config.base_path.trim_end_matches('/'),
        kind,
        file.trim_start_matches('/')
    )
}

/// Source of an image that swaps to a placeholder on its first load error.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ImageFallback {
    src: String,
    placeholder: String,
    failed: bool,
}

impl ImageFallback {
    pub fn new(src: impl Into<String>, placeholder: impl Into<String>) -> Self {
        let src = src.into();
        let placeholder = placeholder.into();
        // An empty source would only ever error.
        let failed = src.is_empty();
        Self {
            src: if failed { placeholder.clone() } else { src },
            placeholder,
            failed,
        }
    }

    /// The path to render.
    pub fn src(&self) -> &str {
        &self.src
    }

    pub fn has_failed(&self) -> bool {
        self.failed
    }

    /// Handle a load error. Switches to the placeholder the first time and
    /// returns `true`; later errors are ignored.
    pub fn on_error(&mut self) -> bool {
        if self.failed {
            return false;
        }
        tracing::warn!(src = %self.src, placeholder = %self.placeholder, "image failed to load, using placeholder");
        self.failed = true;
        self.src = self.placeholder.clone();
        true
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_asset_path() {
        let config = ImageConfig::default();
        assert_eq!(
            asset_path(&config, ImageKind::Products, "ikat-saree.jpg"),
            "/images/products/ikat-saree.jpg"
        );
        let config = ImageConfig {
            base_path: "/static/img/".to_string(),
            ..ImageConfig::default()
        };
        assert_eq!(
            asset_path(&config, ImageKind::Artisans, "/meera.jpg"),
            "/static/img/artisans/meera.jpg"
        );
    }

    #[test]
    fn test_fallback_switches_once() {
        let mut image = ImageFallback::new("/images/products/missing.jpg", "/images/placeholder.svg");
        assert_eq!(image.src(), "/images/products/missing.jpg");
        assert!(image.on_error());
        assert_eq!(image.src(), "/images/placeholder.svg");
        assert!(!image.on_error());
        assert_eq!(image.src(), "/images/placeholder.svg");
    }

    #[test]
    fn test_empty_source_starts_on_placeholder() {
        let mut image = ImageFallback::new("", "/images/placeholder.svg");
        assert!(image.has_failed());
        assert_eq!(image.src(), "/images/placeholder.svg");
        assert!(!image.on_error());
    }
}
