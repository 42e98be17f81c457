//! Networking modules for the auth HTTP boundary.
//!
//! SYSTEM CONTEXT
//! ==============
//! `api` handles the REST calls and `types` defines the shared wire schema.
//! The auth store only ever sees the typed results.

pub mod api;
pub mod types;
