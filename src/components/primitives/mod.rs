//! Primitive Components
//!
//! Buttons and link cards.

pub mod button;
pub mod link_card;
