//! LinkFlow Library
//!
//! A personal link-in-bio page: profile, collapsible link sections, a
//! light/dark theme toggle and an English/Portuguese/Spanish switcher. The
//! page logic is framework-free; a GPUI window and a static HTML export are
//! built on top of it.

pub mod a11y;
pub mod app;
pub mod assets;
pub mod components;
pub mod constants;
pub mod domain;
pub mod error;
pub mod export;
pub mod helpers;
pub mod i18n;
pub mod markup;
pub mod page;
pub mod state;
pub mod theme;
pub mod utils;
