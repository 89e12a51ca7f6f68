//! Card action capability (add to cart, mark favorite).
//!
//! Cards never touch cart or favorites state directly; they call whatever
//! `ProductActions` the grid was given. The default implementation only logs.

#[cfg(test)]
#[path = "product_actions_test.rs"]
mod product_actions_test;

use std::sync::Arc;

use crate::net::types::Product;

/// Side effects a product card can trigger.
pub trait ProductActions: Send + Sync {
    fn add_to_cart(&self, product: &Product);
    fn favorite(&self, product: &Product);
}

/// Shared handle passed through component props.
pub type SharedProductActions = Arc<dyn ProductActions>;

/// Diagnostic-only actions: log the product and do nothing else.
#[derive(Clone, Copy, Debug, Default)]
pub struct LoggingProductActions;

impl ProductActions for LoggingProductActions {
    fn add_to_cart(&self, product: &Product) {
        leptos::logging::log!("{}", action_message("Added to cart", product));
    }

    fn favorite(&self, product: &Product) {
        leptos::logging::log!("{}", action_message("Added to favorites", product));
    }
}

/// Default capability used when the caller injects none.
pub fn logging_actions() -> SharedProductActions {
    Arc::new(LoggingProductActions)
}

fn action_message(action: &str, product: &Product) -> String {
    let id = product.id.as_deref().unwrap_or("-");
    format!("{action}: {id} {}", product.name)
}
