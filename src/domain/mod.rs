//! Domain Models
//!
//! Plain data describing the page, independent of any UI.

pub mod content;
pub mod theme;
