//! Shared client-side state modules.
//!
//! DESIGN
//! ======
//! `auth` holds the plain state value and its reducer; `store` holds the
//! service object that owns the state and talks to the network. Components
//! depend on whichever half they need.

pub mod auth;
pub mod store;
