//! In-memory product catalog and skin-tone color matching.
//!
//! DESIGN
//! ======
//! The catalog is loaded once at startup from a JSON array and never mutated,
//! so handlers share it behind an `Arc` without locking. Filters return
//! borrowed rows in catalog order; only the requested page gets cloned.

#[cfg(test)]
#[path = "catalog_test.rs"]
mod catalog_test;

use std::path::{Path, PathBuf};

use client::net::types::Product;
use serde::{Deserialize, Serialize};

#[derive(Debug, thiserror::Error)]
pub enum CatalogError {
    #[error("failed to read catalog {path}: {source}")]
    Read {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
    #[error("failed to parse catalog {path}: {source}")]
    Parse {
        path: PathBuf,
        #[source]
        source: serde_json::Error,
    },
}

// =============================================================================
// SKIN TONE
// =============================================================================

/// Skin tones with a color recommendation.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SkinTone {
    Fair,
    Medium,
    Dark,
}

impl SkinTone {
    pub const ALL: [Self; 3] = [Self::Fair, Self::Medium, Self::Dark];

    /// Case-insensitive match against the tone names.
    pub fn parse(raw: &str) -> Option<Self> {
        Self::ALL.into_iter().find(|tone| tone.as_str().eq_ignore_ascii_case(raw))
    }

    pub fn as_str(self) -> &'static str {
        match self {
            Self::Fair => "fair",
            Self::Medium => "medium",
            Self::Dark => "dark",
        }
    }

    /// Color categories that suit this tone, best first.
    pub fn best_colors(self) -> &'static [&'static str] {
        match self {
            Self::Fair => &["Cool", "Neutral"],
            Self::Medium => &["Neutral", "Warm"],
            Self::Dark => &["Warm", "Neutral"],
        }
    }

    /// Color categories to steer away from.
    pub fn avoid_colors(self) -> &'static [&'static str] {
        match self {
            Self::Fair => &["Warm"],
            Self::Medium | Self::Dark => &["Cool"],
        }
    }
}

// =============================================================================
// CATALOG
// =============================================================================

/// A catalog row: the product as the grid sees it plus its color category.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CatalogProduct {
    #[serde(flatten)]
    pub product: Product,
    pub color_category: String,
}

#[derive(Debug, Clone, Default)]
pub struct Catalog {
    products: Vec<CatalogProduct>,
}

impl Catalog {
    pub fn new(products: Vec<CatalogProduct>) -> Self {
        Self { products }
    }

    /// Read and parse a JSON array of catalog rows.
    pub async fn load(path: &Path) -> Result<Self, CatalogError> {
        let bytes = tokio::fs::read(path)
            .await
            .map_err(|source| CatalogError::Read { path: path.to_path_buf(), source })?;
        let products = serde_json::from_slice(&bytes)
            .map_err(|source| CatalogError::Parse { path: path.to_path_buf(), source })?;
        Ok(Self::new(products))
    }

    pub fn len(&self) -> usize {
        self.products.len()
    }

    pub fn is_empty(&self) -> bool {
        self.products.is_empty()
    }

    /// Rows whose color category suits `tone`, in catalog order.
    pub fn recommended_for(&self, tone: SkinTone) -> Vec<&CatalogProduct> {
        let best = tone.best_colors();
        self.products
            .iter()
            .filter(|row| best.contains(&row.color_category.as_str()))
            .collect()
    }

    /// Rows with the given `mst` tag; everything when `mst` is absent or empty.
    pub fn with_mst(&self, mst: Option<&str>) -> Vec<&CatalogProduct> {
        match mst.filter(|m| !m.is_empty()) {
            Some(mst) => self.products.iter().filter(|row| row.product.mst == mst).collect(),
            None => self.products.iter().collect(),
        }
    }
}
