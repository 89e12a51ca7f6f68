//! Domain services behind the HTTP routes.

pub mod catalog;
pub mod paging;
