//! SectionState - Expanded/Collapsed Flag of a Link Section

/// How the user activated a section header
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Activation<'a> {
    /// Pointer click
    Click,
    /// Key press while the header has focus, by key name (`"enter"`, `"space"`, ...)
    Key(&'a str),
}

impl Activation<'_> {
    /// Whether this activation toggles the section
    pub fn toggles(&self) -> bool {
        match self {
            Activation::Click => true,
            Activation::Key(key) => matches!(*key, "enter" | "space" | " "),
        }
    }

    /// Whether this activation follows a link; Space only scrolls on links
    pub fn follows_link(&self) -> bool {
        match self {
            Activation::Click => true,
            Activation::Key(key) => *key == "enter",
        }
    }
}

/// Expansion state of one section. Sections start expanded.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SectionState {
    expanded: bool,
}

impl Default for SectionState {
    fn default() -> Self {
        Self { expanded: true }
    }
}

impl SectionState {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn is_expanded(&self) -> bool {
        self.expanded
    }

    /// Flip between expanded and collapsed
    pub fn toggle(&mut self) -> bool {
        self.expanded = !self.expanded;
        self.expanded
    }

    /// Handle a header activation; returns whether it was handled
    pub fn activate(&mut self, activation: Activation<'_>) -> bool {
        if !activation.toggles() {
            return false;
        }
        self.toggle();
        true
    }
}
