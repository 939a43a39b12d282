//! Utilities
//!
//! Preference storage backends.

pub mod preferences;
