//! Composite Components
//!
//! Components assembled from primitives.

pub mod section_card;
