//! Layout Components
//!
//! Header and footer of the page.

pub mod footer;
pub mod header;
