//! Route-level page components.

pub mod home;
pub mod listing;
pub mod mst;
pub mod recommendations;
