//! Content - Profile and Link Sections
//!
//! Static page content loaded from the embedded `data/links.json`.

use serde::{Deserialize, Serialize};
use url::Url;

use crate::assets::{self, ContentFiles, LINKS_FILE};
use crate::error::{Error, Result};
use crate::theme::colors::parse_hex_color;

/// Everything the page shows besides translated chrome
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PageContent {
    pub profile: Profile,
    pub sections: Vec<SectionContent>,
}

/// Page owner
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Profile {
    /// Display name
    pub name: String,
    /// Message key (or literal text) for the subtitle under the name
    pub title: String,
    /// Avatar image path
    pub avatar: String,
}

/// A named, colored group of links
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SectionContent {
    /// Message key (or literal text) for the section heading
    pub name: String,
    /// Header background, `#RGB` or `#RRGGBB`
    pub color: String,
    pub links: Vec<Link>,
}

/// A single link entry
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Link {
    pub title: String,
    pub url: String,
    /// Icon image path under `/images/`
    pub icon: String,
}

impl PageContent {
    /// Load and validate the content bundled into the binary
    pub fn embedded() -> Result<Self> {
        let data = assets::load::<ContentFiles>(LINKS_FILE)?;
        Self::from_json(&data)
    }

    /// Parse and validate content from JSON bytes
    pub fn from_json(data: &[u8]) -> Result<Self> {
        let content: Self = serde_json::from_slice(data)?;
        content.validate()?;
        Ok(content)
    }

    /// Check structural rules: non-empty sections and links, colors, URLs, icon paths
    pub fn validate(&self) -> Result<()> {
        if self.sections.is_empty() {
            return content_error("page has no sections");
        }

        for section in &self.sections {
            if section.links.is_empty() {
                return content_error(format!("section {:?} has no links", section.name));
            }
            if !is_hex_color(&section.color) {
                return content_error(format!(
                    "section {:?} has invalid color {:?}",
                    section.name, section.color
                ));
            }
            for link in &section.links {
                if link.title.trim().is_empty() {
                    return content_error(format!("link {:?} has an empty title", link.url));
                }
                if !is_absolute_http_url(&link.url) {
                    return content_error(format!(
                        "link {:?} has invalid url {:?}",
                        link.title, link.url
                    ));
                }
                if !is_image_path(&link.icon) {
                    return content_error(format!(
                        "link {:?} has invalid icon {:?}",
                        link.title, link.icon
                    ));
                }
            }
        }

        Ok(())
    }
}

fn content_error<T>(message: impl Into<String>) -> Result<T> {
    Err(Error::Content {
        message: message.into(),
    })
}

/// `#RGB` or `#RRGGBB`, case-insensitive
pub fn is_hex_color(value: &str) -> bool {
    parse_hex_color(value).is_some()
}

/// Absolute `http`/`https` URL with a host
fn is_absolute_http_url(value: &str) -> bool {
    Url::parse(value).is_ok_and(|url| {
        matches!(url.scheme(), "http" | "https") && url.host_str().is_some_and(|host| !host.is_empty())
    })
}

fn is_image_path(value: &str) -> bool {
    const EXTENSIONS: [&str; 5] = ["svg", "png", "jpg", "jpeg", "gif"];

    let Some(file) = value.strip_prefix("/images/") else {
        return false;
    };
    file.rsplit_once('.').is_some_and(|(stem, ext)| {
        !stem.is_empty() && EXTENSIONS.contains(&ext.to_ascii_lowercase().as_str())
    })
}

/// Element id derived from a section's display name: lower-cased, whitespace runs as `-`
pub fn slugify(name: &str) -> String {
    name.split_whitespace()
        .map(str::to_lowercase)
        .collect::<Vec<_>>()
        .join("-")
}
