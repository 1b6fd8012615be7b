//! Artisan profiles.

use crate::ids::ArtisanId;
use serde::{Deserialize, Serialize};

/// A maker selling on the marketplace.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct Artisan {
    /// Unique artisan identifier.
    pub id: ArtisanId,
    /// Display name.
    pub name: String,
    /// Craft specialty, e.g. "Blue Pottery".
    pub specialty: String,
    /// Category slug of the craft.
    pub category: String,
    /// Region or state the artisan works in.
    pub region: String,
    /// Town or city.
    pub location: String,
    /// Short biography.
    pub bio: String,
    /// Years practising the craft.
    pub years_experience: u32,
    /// Average rating (0-5).
    pub rating: f32,
    /// Number of reviews.
    pub review_count: u32,
    /// Number of listed products.
    pub product_count: u32,
    /// Units sold to date; drives popularity ordering.
    pub total_sales: u64,
    /// Identity verified by the marketplace.
    #[serde(default)]
    pub verified: bool,
    /// Portrait image path.
    pub image: String,
    /// Banner image path for the profile page.
    #[serde(default)]
    pub cover_image: Option<String>,
    /// Year the artisan joined.
    pub joined_year: i32,
}

impl Artisan {
    /// Case-insensitive substring match against name or specialty.
    pub fn matches_text(&self, needle: &str) -> bool {
        let needle = needle.trim().to_lowercase();
        needle.is_empty()
            || self.name.to_lowercase().contains(&needle)
            || self.specialty.to_lowercase().contains(&needle)
    }

    /// Initials for avatar fallbacks ("Meera Devi" -> "MD").
    pub fn initials(&self) -> String {
        self.name
            .split_whitespace()
            .filter_map(|w| w.chars().next())
            .take(2)
            .flat_map(char::to_uppercase)
            .collect()
    }
}
