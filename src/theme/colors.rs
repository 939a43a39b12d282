//! Colors - LinkFlow Theme Palettes

use gpui::{rgb, Rgba};

use crate::domain::theme::ThemeMode;

/// Palette for one theme mode. Colors are `0xRRGGBB`.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Palette {
    /// Window / page background
    pub background: u32,
    /// Card background
    pub surface: u32,
    /// Primary text
    pub text_primary: u32,
    /// Secondary text (subtitle, footer)
    pub text_secondary: u32,
    /// Text drawn on section header colors, which are light in both modes
    pub text_on_section: u32,
    /// Default border
    pub border: u32,
    /// Accent for pressed controls
    pub accent: u32,
    /// Keyboard focus ring
    pub focus: u32,
}

impl Palette {
    pub const LIGHT: Palette = Palette {
        background: 0xf5f5f5,
        surface: 0xffffff,
        text_primary: 0x1f2937,
        text_secondary: 0x6b7280,
        text_on_section: 0x1f2937,
        border: 0xe5e7eb,
        accent: 0x2cb3b8,
        focus: 0x3b82f6,
    };

    pub const DARK: Palette = Palette {
        background: 0x111827,
        surface: 0x1f2937,
        text_primary: 0xf9fafb,
        text_secondary: 0x9ca3af,
        text_on_section: 0x1f2937,
        border: 0x374151,
        accent: 0x2cb3b8,
        focus: 0x60a5fa,
    };

    pub fn for_mode(mode: ThemeMode) -> &'static Palette {
        match mode {
            ThemeMode::Light => &Self::LIGHT,
            ThemeMode::Dark => &Self::DARK,
        }
    }
}

/// Convert a palette color for GPUI
pub fn to_rgba(color: u32) -> Rgba {
    rgb(color)
}

/// Convert a palette color for CSS
pub fn to_css(color: u32) -> String {
    format!("#{color:06x}")
}

/// Parse `#RGB` or `#RRGGBB` into `0xRRGGBB`
pub fn parse_hex_color(value: &str) -> Option<u32> {
    let hex = value.strip_prefix('#')?;
    if !hex.chars().all(|c| c.is_ascii_hexdigit()) {
        return None;
    }
    match hex.len() {
        6 => u32::from_str_radix(hex, 16).ok(),
        3 => {
            let expanded: String = hex.chars().flat_map(|c| [c, c]).collect();
            u32::from_str_radix(&expanded, 16).ok()
        }
        _ => None,
    }
}
