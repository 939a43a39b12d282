//! State - Page State Modules
//!
//! Each module owns one independent piece of page state.

pub mod section_state;
pub mod theme_state;
