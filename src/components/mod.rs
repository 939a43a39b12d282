//! Components - Reusable UI Components
//!
//! Pure UI components that render what they are given and report clicks.

pub mod composite;
pub mod layout;
pub mod primitives;
