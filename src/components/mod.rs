//! Reusable view components.

pub mod user_avatar;
