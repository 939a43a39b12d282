//! LinkPage - Page Composition
//!
//! The composition root of one page: content, locale store, theme and the
//! expansion state of every section. Both the desktop window and the HTML
//! export drive a `LinkPage`; nothing here depends on a UI framework.

mod tree;

use std::collections::HashSet;
use std::rc::Rc;

use tracing::debug;

use crate::domain::content::{slugify, Link, PageContent, SectionContent};
use crate::domain::theme::ThemeMode;
use crate::error::Result;
use crate::i18n::{Catalogs, ClientContext, LocaleStore, MessageKey, SupportedLanguage};
use crate::state::section_state::{Activation, SectionState};
use crate::state::theme_state::ThemeState;
use crate::utils::preferences::SharedStorage;

/// Element id of the theme toggle
pub const THEME_TOGGLE_ID: &str = "theme-toggle";

/// Element id prefix of the language buttons (`lang-en`, `lang-pt`, ...)
pub const LANGUAGE_BUTTON_PREFIX: &str = "lang-";

/// What activating an element did
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum PageEvent {
    LanguageChanged(SupportedLanguage),
    ThemeChanged(ThemeMode),
    SectionToggled { index: usize, expanded: bool },
    /// A link was followed; the caller opens the URL
    LinkOpened(String),
}

/// One link-in-bio page
pub struct LinkPage {
    content: PageContent,
    locale: LocaleStore,
    theme: ThemeState,
    sections: Vec<SectionState>,
}

impl LinkPage {
    /// Open a page: resolve the language, restore the theme, expand every section
    pub fn open(
        content: PageContent,
        catalogs: Rc<Catalogs>,
        storage: SharedStorage,
        context: &ClientContext,
        theme_fallback: ThemeMode,
    ) -> Self {
        let locale = LocaleStore::new(catalogs, storage.clone(), context);
        let theme = ThemeState::load(storage, theme_fallback);
        let sections = vec![SectionState::new(); content.sections.len()];

        Self {
            content,
            locale,
            theme,
            sections,
        }
    }

    pub fn content(&self) -> &PageContent {
        &self.content
    }

    // ==================== Locale ====================

    pub fn locale(&self) -> &LocaleStore {
        &self.locale
    }

    pub fn locale_mut(&mut self) -> &mut LocaleStore {
        &mut self.locale
    }

    pub fn language(&self) -> SupportedLanguage {
        self.locale.current()
    }

    /// Switch language by code; unsupported codes leave the page untouched
    pub fn set_language(&mut self, code: &str) -> Result<SupportedLanguage> {
        self.locale.set_language(code)
    }

    pub fn text(&self, key: MessageKey) -> &str {
        self.locale.text(key)
    }

    /// Translated subtitle under the profile name
    pub fn subtitle(&self) -> &str {
        self.locale.lookup(&self.content.profile.title)
    }

    // ==================== Theme ====================

    pub fn theme(&self) -> ThemeMode {
        self.theme.mode()
    }

    pub fn toggle_theme(&mut self) -> ThemeMode {
        self.theme.toggle()
    }

    /// Translated name of the current theme ("Light", "Escuro", ...)
    pub fn theme_name(&self) -> &str {
        self.text(match self.theme() {
            ThemeMode::Light => MessageKey::ThemeLight,
            ThemeMode::Dark => MessageKey::ThemeDark,
        })
    }

    /// Accessible name of the theme toggle, with the current theme
    pub fn theme_toggle_label(&self) -> String {
        format!("{} ({})", self.text(MessageKey::ThemeToggle), self.theme_name())
    }

    // ==================== Sections ====================

    pub fn section_count(&self) -> usize {
        self.sections.len()
    }

    /// Translated heading of a section
    pub fn section_name(&self, index: usize) -> Option<&str> {
        self.content
            .sections
            .get(index)
            .map(|s| self.locale.lookup(&s.name))
    }

    /// Element id of a section's header, derived from its translated name
    pub fn section_id(&self, index: usize) -> Option<String> {
        self.section_ids().into_iter().nth(index)
    }

    /// Header ids of every section, in order.
    ///
    /// An id is the slug of the translated name. When that slug, or the
    /// region and link ids built from it, would clash with a control or an
    /// earlier section, it gets a numeric suffix (`links`, `links-2`).
    pub fn section_ids(&self) -> Vec<String> {
        let mut taken: HashSet<String> = SupportedLanguage::ALL
            .into_iter()
            .map(language_button_id)
            .chain([THEME_TOGGLE_ID.to_string()])
            .collect();
        let mut ids = Vec::with_capacity(self.content.sections.len());

        for (index, section) in self.content.sections.iter().enumerate() {
            let slug = slugify(self.locale.lookup(&section.name));
            let base = if slug.is_empty() { "section".to_string() } else { slug };
            let link_count = section.links.len();

            let id = std::iter::once(base.clone())
                .chain((2..).map(|n| format!("{base}-{n}")))
                .find(|candidate| {
                    owned_ids(candidate, link_count).all(|owned| !taken.contains(&owned))
                        && !taken.iter().any(|t| t.starts_with(&format!("{candidate}-link-")))
                })
                .unwrap_or_else(|| format!("section-{index}"));

            taken.extend(owned_ids(&id, link_count));
            ids.push(id);
        }
        ids
    }

    /// Index of the section whose header carries `id`
    pub fn section_index(&self, id: &str) -> Option<usize> {
        self.section_ids().iter().position(|s| s == id)
    }

    pub fn section_content(&self, index: usize) -> Option<&SectionContent> {
        self.content.sections.get(index)
    }

    pub fn is_expanded(&self, index: usize) -> Option<bool> {
        self.sections.get(index).map(SectionState::is_expanded)
    }

    /// Flip a section; returns the new expanded flag
    pub fn toggle_section(&mut self, index: usize) -> Option<bool> {
        let state = self.sections.get_mut(index)?;
        let expanded = state.toggle();
        debug!(section = index, expanded, "Section toggled");
        Some(expanded)
    }

    /// Route a header activation (click or key) to a section
    pub fn activate_section(&mut self, index: usize, activation: Activation<'_>) -> bool {
        let Some(state) = self.sections.get_mut(index) else {
            return false;
        };
        let handled = state.activate(activation);
        if handled {
            debug!(section = index, expanded = state.is_expanded(), "Section activated");
        }
        handled
    }

    /// Links visible under a section: all of them while expanded, none while collapsed
    pub fn visible_links(&self, index: usize) -> &[Link] {
        match (self.sections.get(index), self.content.sections.get(index)) {
            (Some(state), Some(section)) if state.is_expanded() => &section.links,
            _ => &[],
        }
    }

    // ==================== Element activation ====================

    /// Activate the element with `id` as a click would
    pub fn click(&mut self, id: &str) -> Option<PageEvent> {
        self.activate(id, Activation::Click)
    }

    /// Activate the element with `id` by click or key press.
    ///
    /// Returns `None` when the id is unknown or the key does not activate it.
    pub fn activate(&mut self, id: &str, activation: Activation<'_>) -> Option<PageEvent> {
        if !activation.toggles() {
            return None;
        }

        if id == THEME_TOGGLE_ID {
            return Some(PageEvent::ThemeChanged(self.toggle_theme()));
        }

        if let Some(lang) = SupportedLanguage::ALL
            .into_iter()
            .find(|&lang| language_button_id(lang) == id)
        {
            return Some(PageEvent::LanguageChanged(self.locale.set(lang)));
        }

        let ids = self.section_ids();
        if let Some(index) = ids.iter().position(|s| s == id) {
            let expanded = self.toggle_section(index)?;
            return Some(PageEvent::SectionToggled { index, expanded });
        }

        if !activation.follows_link() {
            return None;
        }
        ids.iter().enumerate().find_map(|(index, slug)| {
            let position = link_position(id, slug)?;
            self.visible_links(index)
                .get(position)
                .map(|link| PageEvent::LinkOpened(link.url.clone()))
        })
    }
}

/// Element id of the language button for `lang`
pub fn language_button_id(lang: SupportedLanguage) -> String {
    format!("{LANGUAGE_BUTTON_PREFIX}{}", lang.code())
}

/// Element id of the link at `position` in the section with id `slug`
pub fn link_id(slug: &str, position: usize) -> String {
    format!("{slug}-link-{position}")
}

/// Header, region and link ids that belong to a section with header id `slug`
fn owned_ids(slug: &str, link_count: usize) -> impl Iterator<Item = String> + '_ {
    [slug.to_string(), format!("{slug}-content")]
        .into_iter()
        .chain((0..link_count).map(move |position| link_id(slug, position)))
}

fn link_position(id: &str, slug: &str) -> Option<usize> {
    id.strip_prefix(slug)?
        .strip_prefix("-link-")?
        .parse()
        .ok()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::content::Profile;
    use crate::utils::preferences::MemoryStorage;

    fn page() -> LinkPage {
        LinkPage::open(
            PageContent::embedded().expect("content"),
            Rc::new(Catalogs::embedded().expect("catalogs")),
            Rc::new(MemoryStorage::new()),
            &ClientContext::reporting("en-GB"),
            ThemeMode::Light,
        )
    }

    #[test]
    fn test_open_expands_every_section() {
        let page = page();
        assert!(page.section_count() > 0);
        for i in 0..page.section_count() {
            assert_eq!(page.is_expanded(i), Some(true));
            assert!(!page.visible_links(i).is_empty());
        }
    }

    #[test]
    fn test_collapsed_section_hides_links() {
        let mut page = page();
        assert_eq!(page.toggle_section(0), Some(false));
        assert!(page.visible_links(0).is_empty());
        assert_eq!(page.toggle_section(0), Some(true));
        assert_eq!(page.toggle_section(99), None);
    }

    #[test]
    fn test_section_ids_follow_language() {
        let mut page = page();
        assert_eq!(page.section_id(0).as_deref(), Some("projects"));
        page.set_language("pt").expect("pt supported");
        assert_eq!(page.section_id(0).as_deref(), Some("projetos"));
        assert_eq!(page.section_id(1).as_deref(), Some("redes-sociais"));
        assert_eq!(page.section_index("redes-sociais"), Some(1));
    }

    #[test]
    fn test_click_dispatch() {
        let mut page = page();
        assert_eq!(
            page.click("lang-es"),
            Some(PageEvent::LanguageChanged(SupportedLanguage::Es))
        );
        assert_eq!(page.subtitle(), "Ingeniería de Software");
        assert_eq!(
            page.click(THEME_TOGGLE_ID),
            Some(PageEvent::ThemeChanged(ThemeMode::Dark))
        );
        assert_eq!(
            page.click("proyectos"),
            Some(PageEvent::SectionToggled {
                index: 0,
                expanded: false
            })
        );
        assert_eq!(page.click("lang-fr"), None);
        assert_eq!(page.click("nowhere"), None);
    }

    #[test]
    fn test_link_activation_only_when_visible() {
        let mut page = page();
        let url = page.content().sections[0].links[1].url.clone();
        assert_eq!(
            page.activate("projects-link-1", Activation::Key("enter")),
            Some(PageEvent::LinkOpened(url))
        );
        assert_eq!(page.activate("projects-link-1", Activation::Key("tab")), None);

        page.toggle_section(0);
        assert_eq!(page.click("projects-link-1"), None);
    }

    #[test]
    fn test_space_does_not_follow_links() {
        let mut page = page();
        assert_eq!(page.activate("projects-link-0", Activation::Key("space")), None);
        assert_eq!(page.activate("projects-link-0", Activation::Key(" ")), None);
        assert!(matches!(
            page.activate("projects-link-0", Activation::Click),
            Some(PageEvent::LinkOpened(_))
        ));
        assert_eq!(
            page.activate(THEME_TOGGLE_ID, Activation::Key("space")),
            Some(PageEvent::ThemeChanged(ThemeMode::Dark))
        );
    }

    fn page_with_sections(names: &[&str]) -> LinkPage {
        let sections = names
            .iter()
            .map(|name| SectionContent {
                name: (*name).to_string(),
                color: "#E0F7FA".to_string(),
                links: vec![Link {
                    title: format!("{name} home"),
                    url: "https://example.com".to_string(),
                    icon: "/images/link-icon.svg".to_string(),
                }],
            })
            .collect();
        let content = PageContent {
            profile: Profile {
                name: "Ana".to_string(),
                title: "profile.title".to_string(),
                avatar: "/images/profile.jpg".to_string(),
            },
            sections,
        };
        LinkPage::open(
            content,
            Rc::new(Catalogs::embedded().expect("catalogs")),
            Rc::new(MemoryStorage::new()),
            &ClientContext::Headless,
            ThemeMode::Light,
        )
    }

    #[test]
    fn test_duplicate_section_names_get_distinct_ids() {
        let mut page = page_with_sections(&["Links", "Links"]);
        assert_eq!(page.section_ids(), vec!["links", "links-2"]);
        assert_eq!(
            page.click("links-2"),
            Some(PageEvent::SectionToggled {
                index: 1,
                expanded: false
            })
        );
        assert_eq!(page.is_expanded(0), Some(true));
        assert_eq!(
            page.click("links-2-link-0"),
            None,
            "collapsed section hides its links"
        );
        assert!(page.access_tree().find_by_id("links-content").is_some());
        assert!(page.access_tree().find_by_id("links-2-content").is_none());
    }

    #[test]
    fn test_section_ids_never_shadow_controls() {
        let mut page = page_with_sections(&["Theme Toggle", "Lang En", "A Link 0", "A"]);
        assert_eq!(
            page.section_ids(),
            vec!["theme-toggle-2", "lang-en-2", "a-link-0", "a-2"]
        );
        assert_eq!(
            page.click(THEME_TOGGLE_ID),
            Some(PageEvent::ThemeChanged(ThemeMode::Dark))
        );
        assert_eq!(page.is_expanded(0), Some(true));
        assert_eq!(
            page.click("theme-toggle-2"),
            Some(PageEvent::SectionToggled {
                index: 0,
                expanded: false
            })
        );
        assert_eq!(
            page.click("lang-en"),
            Some(PageEvent::LanguageChanged(SupportedLanguage::En))
        );
        assert_eq!(
            page.click("lang-en-2"),
            Some(PageEvent::SectionToggled {
                index: 1,
                expanded: false
            })
        );
    }

    #[test]
    fn test_activate_section_keys() {
        let mut page = page();
        assert!(page.activate_section(1, Activation::Key("space")));
        assert_eq!(page.is_expanded(1), Some(false));
        assert!(!page.activate_section(1, Activation::Key("escape")));
        assert_eq!(page.is_expanded(1), Some(false));
    }
}
