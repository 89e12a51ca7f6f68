//! Client state models.
//!
//! DESIGN
//! ======
//! Plain structs with pure transitions; components wrap them in `RwSignal`s.

pub mod pagination;
pub mod recommendations;
