//! Reusable UI component modules.
//!
//! SYSTEM CONTEXT
//! ==============
//! Components take their data as props; only pages talk to the API.

pub mod product_card;
pub mod product_recommendations;
