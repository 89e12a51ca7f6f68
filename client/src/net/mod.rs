//! Networking modules for the recommendation REST API.
//!
//! SYSTEM CONTEXT
//! ==============
//! `api` wraps the HTTP calls and `types` defines the shared wire schema.

pub mod api;
pub mod types;
