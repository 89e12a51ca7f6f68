//! Product page data state.
//!
//! DESIGN
//! ======
//! Each listing page owns one `RwSignal<RecommendationsState>`; fetch tasks
//! write the outcome here and the grid only ever sees the finished product
//! list.
//!
//! Every `begin` hands out a new generation number and `finish` only accepts
//! the current one, so a slow response for a route the user already left
//! (including a route they later came back to) never overwrites newer data.

#[cfg(test)]
#[path = "recommendations_test.rs"]
mod recommendations_test;

use crate::net::types::{Product, ProductListing};

/// Loaded products for one route value (a skin tone or an MST tag).
#[derive(Clone, Debug, Default, PartialEq)]
pub struct RecommendationsState {
    /// Route value the current data belongs to.
    pub key: String,
    generation: u64,
    /// Color categories the server matched for this tone.
    pub recommended_colors: Vec<String>,
    pub avoid_colors: Vec<String>,
    pub products: Vec<Product>,
    /// Server-side match count; may exceed `products.len()`.
    pub total_items: usize,
    pub loading: bool,
    pub error: Option<String>,
}

impl RecommendationsState {
    /// State for a page whose first fetch of `key` has not landed yet.
    pub fn pending(key: &str) -> Self {
        let mut state = Self::default();
        state.begin(key);
        state
    }

    /// Reset for a new fetch of `key` and return the generation the fetch
    /// must hand back to `finish`.
    pub fn begin(&mut self, key: &str) -> u64 {
        self.generation = self.generation.wrapping_add(1);
        self.key = key.to_owned();
        self.recommended_colors.clear();
        self.avoid_colors.clear();
        self.products.clear();
        self.total_items = 0;
        self.loading = true;
        self.error = None;
        self.generation
    }

    pub fn generation(&self) -> u64 {
        self.generation
    }

    /// Store a finished fetch. Returns `false` and leaves the state alone
    /// when a newer `begin` superseded `generation`.
    pub fn finish(&mut self, generation: u64, result: Result<ProductListing, String>) -> bool {
        if generation != self.generation {
            return false;
        }
        self.loading = false;
        match result {
            Ok(listing) => {
                self.recommended_colors = listing.recommended_colors;
                self.avoid_colors = listing.avoid_colors;
                self.total_items = listing.total_items;
                self.products = listing.products;
                self.error = None;
            }
            Err(e) => {
                self.recommended_colors.clear();
                self.avoid_colors.clear();
                self.products.clear();
                self.total_items = 0;
                self.error = Some(e);
            }
        }
        true
    }

    /// True when the server matched more rows than were loaded.
    pub fn is_partial(&self) -> bool {
        self.products.len() < self.total_items
    }

    /// One-line status shown above the grid, if any.
    pub fn status_line(&self) -> Option<String> {
        if self.loading {
            return Some("Loading products...".to_owned());
        }
        if let Some(error) = &self.error {
            return Some(format!("Could not load products: {error}"));
        }
        let mut parts = Vec::new();
        if !self.recommended_colors.is_empty() {
            parts.push(format!("Best colors: {}", self.recommended_colors.join(", ")));
        }
        if !self.avoid_colors.is_empty() {
            parts.push(format!("Avoid: {}", self.avoid_colors.join(", ")));
        }
        if self.is_partial() {
            parts.push(format!("Showing the first {} of {} products", self.products.len(), self.total_items));
        }
        if parts.is_empty() {
            return None;
        }
        Some(parts.join(" · "))
    }
}
