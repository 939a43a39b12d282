//! Constants
//!
//! Storage keys, window geometry and other fixed values shared across the page.

/// Storage key holding the user's chosen language
pub const PREFERRED_LANGUAGE_KEY: &str = "preferredLanguage";

/// Storage key holding the user's chosen theme
pub const THEME_KEY: &str = "theme";

/// Preferences file name inside the platform config directory
pub const PREFERENCES_FILE: &str = "preferences.toml";

/// Log file prefix inside the platform data directory
pub const LOG_FILE_PREFIX: &str = "linkflow.log";

/// Default window dimensions
pub const DEFAULT_WINDOW_WIDTH: f32 = 560.0;
pub const DEFAULT_WINDOW_HEIGHT: f32 = 820.0;

/// Content column width
pub const CONTENT_WIDTH: f32 = 480.0;

/// Heading level used for section titles
pub const SECTION_HEADING_LEVEL: u8 = 2;
