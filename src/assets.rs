//! Embedded assets for LinkFlow
//!
//! Uses rust-embed to bundle message catalogs and page content at compile time.

use crate::error::{Error, Result};
use rust_embed::RustEmbed;
use std::borrow::Cow;

/// Message catalogs, one flat JSON object per language
#[derive(RustEmbed)]
#[folder = "locales"]
pub struct LocaleFiles;

/// Page content (profile and link sections)
#[derive(RustEmbed)]
#[folder = "data"]
pub struct ContentFiles;

/// File name of the embedded page content
pub const LINKS_FILE: &str = "links.json";

/// Load an embedded file, failing with an `Invalid` error naming the path
pub fn load<E: RustEmbed>(path: &str) -> Result<Cow<'static, [u8]>> {
    E::get(path).map(|f| f.data).ok_or_else(|| Error::Invalid {
        message: format!(r#"could not find embedded asset at path "{path}""#),
    })
}
