//! Craft categories.

use serde::{Deserialize, Serialize};

/// A craft category (flat; the marketplace has no sub-categories).
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct Category {
    /// URL-friendly slug, referenced by products and artisans.
    pub slug: String,
    /// Display name.
    pub name: String,
    /// Category description.
    #[serde(default)]
    pub description: String,
    /// Category image path.
    #[serde(default)]
    pub image: Option<String>,
}

impl Category {
    pub fn new(slug: impl Into<String>, name: impl Into<String>) -> Self {
        Self {
            slug: slug.into(),
            name: name.into(),
            description: String::new(),
            image: None,
        }
    }

    /// Display name for a slug, falling back to the slug itself.
    pub fn name_for<'a>(categories: &'a [Category], slug: &'a str) -> &'a str {
        categories
            .iter()
            .find(|c| c.slug == slug)
            .map(|c| c.name.as_str())
            .unwrap_or(slug)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_name_for() {
        let cats = vec![Category::new("pottery", "Pottery & Ceramics")];
        assert_eq!(Category::name_for(&cats, "pottery"), "Pottery & Ceramics");
        assert_eq!(Category::name_for(&cats, "metal"), "metal");
    }
}
