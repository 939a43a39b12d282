//! ThemeState - Persisted Light/Dark Mode

use tracing::{debug, warn};

use crate::constants::THEME_KEY;
use crate::domain::theme::ThemeMode;
use crate::utils::preferences::SharedStorage;

/// Theme of one page, written through to storage on every change
pub struct ThemeState {
    mode: ThemeMode,
    storage: SharedStorage,
}

impl ThemeState {
    /// Restore the stored mode, or use `fallback` when none (or garbage) is stored
    pub fn load(storage: SharedStorage, fallback: ThemeMode) -> Self {
        let mode = match storage.get(THEME_KEY) {
            Ok(Some(value)) => ThemeMode::parse(&value).unwrap_or(fallback),
            Ok(None) => fallback,
            Err(e) => {
                warn!(error = %e, "Could not read stored theme");
                fallback
            }
        };

        Self { mode, storage }
    }

    pub fn mode(&self) -> ThemeMode {
        self.mode
    }

    /// Set the mode and persist it
    pub fn set(&mut self, mode: ThemeMode) {
        self.mode = mode;
        debug!(theme = %mode, "Theme changed");
        if let Err(e) = self.storage.set(THEME_KEY, mode.as_str()) {
            warn!(error = %e, "Theme preference not persisted");
        }
    }

    /// Flip between light and dark
    pub fn toggle(&mut self) -> ThemeMode {
        self.set(self.mode.flipped());
        self.mode
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::utils::preferences::{MemoryStorage, PreferenceStorage, UnavailableStorage};
    use std::rc::Rc;

    #[test]
    fn test_load_uses_stored_mode() {
        let storage = Rc::new(MemoryStorage::new().with(THEME_KEY, "dark"));
        let theme = ThemeState::load(storage, ThemeMode::Light);
        assert_eq!(theme.mode(), ThemeMode::Dark);
    }

    #[test]
    fn test_load_falls_back_on_garbage() {
        let storage = Rc::new(MemoryStorage::new().with(THEME_KEY, "sepia"));
        assert_eq!(
            ThemeState::load(storage, ThemeMode::Dark).mode(),
            ThemeMode::Dark
        );
        assert_eq!(
            ThemeState::load(Rc::new(UnavailableStorage), ThemeMode::Light).mode(),
            ThemeMode::Light
        );
    }

    #[test]
    fn test_toggle_persists() {
        let storage = Rc::new(MemoryStorage::new());
        let mut theme = ThemeState::load(storage.clone(), ThemeMode::Light);

        assert_eq!(theme.toggle(), ThemeMode::Dark);
        assert_eq!(storage.get(THEME_KEY).ok().flatten().as_deref(), Some("dark"));
        assert_eq!(theme.toggle(), ThemeMode::Light);
        assert_eq!(storage.get(THEME_KEY).ok().flatten().as_deref(), Some("light"));
    }
}
