//! Shared wire DTOs for the client/server boundary.
//!
//! DESIGN
//! ======
//! `Product` is both the component input and the catalog record the server
//! flattens into its own row type, so the JSON shape stays identical on both
//! sides of the API.

#[cfg(test)]
#[path = "types_test.rs"]
mod types_test;

use serde::de::Error as _;
use serde::{Deserialize, Deserializer, Serialize};

/// A recommended product as rendered by a card.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct Product {
    /// Catalog identifier. Numbers on the wire are normalized to strings.
    #[serde(default, deserialize_with = "deserialize_optional_id")]
    pub id: Option<String>,
    pub name: String,
    pub brand: String,
    pub price: f64,
    pub rating: f64,
    /// Product photo URL, if the catalog has one.
    #[serde(default)]
    pub image_url: Option<String>,
    /// Opaque classification tag, passed through unmodified.
    pub mst: String,
}

impl Product {
    /// Identifier shown to the card, falling back to the position within the
    /// current page's slice.
    pub fn card_id(&self, slice_index: usize) -> String {
        match self.id.as_deref() {
            Some(id) if !id.is_empty() => id.to_owned(),
            _ => slice_index.to_string(),
        }
    }

    /// Render key for the card wrapper. Only unique within one page.
    pub fn card_key(&self, slice_index: usize) -> String {
        format!("product-{}", self.card_id(slice_index))
    }

    /// Image source for the card; empty when the catalog has none.
    pub fn image_src(&self) -> String {
        self.image_url.clone().unwrap_or_default()
    }
}

/// Body of `GET /api/recommendations/skin-tone/{skin_tone}`.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct RecommendationsResponse {
    pub skin_tone: String,
    pub recommended_colors: Vec<String>,
    #[serde(default)]
    pub avoid_colors: Vec<String>,
    pub data: Vec<Product>,
    pub page: usize,
    pub limit: usize,
    pub total_items: usize,
    pub total_pages: usize,
}

/// Body of `GET /api/data`.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct CatalogPage {
    pub data: Vec<Product>,
    pub page: usize,
    pub limit: usize,
    pub total_items: usize,
    pub total_pages: usize,
}

/// A full product list assembled from one or more API pages.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct ProductListing {
    pub recommended_colors: Vec<String>,
    pub avoid_colors: Vec<String>,
    pub products: Vec<Product>,
    /// Rows the server matched. Larger than `products.len()` when the page
    /// walk stopped early.
    pub total_items: usize,
}

impl ProductListing {
    pub fn is_partial(&self) -> bool {
        self.products.len() < self.total_items
    }
}

/// Error body returned by the API on rejected requests.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct ApiErrorBody {
    pub error: String,
}

fn deserialize_optional_id<'de, D>(deserializer: D) -> Result<Option<String>, D::Error>
where
    D: Deserializer<'de>,
{
    let value = Option::<serde_json::Value>::deserialize(deserializer)?;
    match value {
        None | Some(serde_json::Value::Null) => Ok(None),
        Some(serde_json::Value::String(id)) => Ok(Some(id)),
        Some(serde_json::Value::Number(number)) => Ok(Some(number.to_string())),
        Some(_) => Err(D::Error::custom("expected string or number id")),
    }
}
