//! Shared application state.
//!
//! DESIGN
//! ======
//! `AppState` is injected into Axum handlers via the `State` extractor. The
//! catalog is immutable after startup, so a plain `Arc` is enough.

use std::sync::Arc;

use crate::services::catalog::Catalog;

/// Shared application state. Clone is required by Axum.
#[derive(Clone, Default)]
pub struct AppState {
    pub catalog: Arc<Catalog>,
}

impl AppState {
    #[must_use]
    pub fn new(catalog: Catalog) -> Self {
        Self { catalog: Arc::new(catalog) }
    }
}
