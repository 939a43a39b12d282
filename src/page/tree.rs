//! Accessibility tree of a [`LinkPage`]

use super::{language_button_id, link_id, LinkPage, THEME_TOGGLE_ID};
use crate::a11y::{AccessNode, Role};
use crate::constants::SECTION_HEADING_LEVEL;
use crate::i18n::{MessageKey, SupportedLanguage};

/// Chevron shown while a section is expanded / collapsed
const CHEVRON_EXPANDED: &str = "▲";
const CHEVRON_COLLAPSED: &str = "▼";

impl LinkPage {
    /// Build the accessibility tree for the current state
    pub fn access_tree(&self) -> AccessNode {
        AccessNode::new(Role::Group)
            .class("app")
            .lang(self.language().code())
            .child(self.banner())
            .child(self.main())
            .child(
                AccessNode::new(Role::ContentInfo)
                    .child(AccessNode::new(Role::Text).text(self.text(MessageKey::FooterCopyright))),
            )
    }

    fn banner(&self) -> AccessNode {
        let profile = &self.content.profile;
        let current = self.language();

        let theme_toggle = AccessNode::new(Role::Button)
            .id(THEME_TOGGLE_ID)
            .test_id(THEME_TOGGLE_ID)
            .name(self.theme_toggle_label())
            .pressed(self.theme().is_dark())
            .focusable()
            .child(
                AccessNode::new(Role::Icon)
                    .text(if self.theme().is_dark() { "☾" } else { "☀" })
                    .hidden(),
            );

        let language_selector = AccessNode::new(Role::Group)
            .class("language-selector")
            .test_id("language-selector")
            .name(self.text(MessageKey::LanguageLabel))
            .children(SupportedLanguage::ALL.into_iter().map(|lang| {
                AccessNode::new(Role::Button)
                    .id(language_button_id(lang))
                    .text(lang.display_name())
                    .lang(lang.code())
                    .pressed(lang == current)
                    .focusable()
            }));

        AccessNode::new(Role::Banner)
            .child(
                AccessNode::new(Role::Image)
                    .class("avatar")
                    .src(&profile.avatar)
                    .name(&profile.name),
            )
            .child(AccessNode::new(Role::Heading(1)).text(&profile.name))
            .child(
                AccessNode::new(Role::Text)
                    .class("subtitle")
                    .test_id("subtitle")
                    .text(self.subtitle()),
            )
            .child(
                AccessNode::new(Role::Group)
                    .class("controls")
                    .child(language_selector)
                    .child(theme_toggle),
            )
    }

    fn main(&self) -> AccessNode {
        AccessNode::new(Role::Main)
            .child(
                AccessNode::new(Role::Text)
                    .class("links-title")
                    .text(self.text(MessageKey::FeaturesTitle)),
            )
            .children((0..self.section_count()).filter_map(|index| self.section_node(index)))
    }

    fn section_node(&self, index: usize) -> Option<AccessNode> {
        let section = self.section_content(index)?;
        let name = self.section_name(index)?;
        let slug = self.section_id(index)?;
        let expanded = self.is_expanded(index)?;
        let content_id = format!("{slug}-content");

        let header = AccessNode::new(Role::Button)
            .id(&slug)
            .class("section-header")
            .background(&section.color)
            .text(name)
            .expanded(expanded)
            .controls(&content_id)
            .focusable()
            .child(
                AccessNode::new(Role::Icon)
                    .class("chevron")
                    .text(if expanded {
                        CHEVRON_EXPANDED
                    } else {
                        CHEVRON_COLLAPSED
                    })
                    .hidden(),
            );

        let mut node = AccessNode::new(Role::Group)
            .class("section")
            .test_id("section")
            .child(AccessNode::new(Role::Heading(SECTION_HEADING_LEVEL)).child(header));

        if expanded {
            let links = self
                .visible_links(index)
                .iter()
                .enumerate()
                .map(|(position, link)| {
                    AccessNode::new(Role::Link)
                        .id(link_id(&slug, position))
                        .class("link-card")
                        .name(&link.title)
                        .text(&link.title)
                        .href(&link.url)
                        .focusable()
                        .child(AccessNode::new(Role::Image).src(&link.icon).hidden())
                });

            node = node.child(
                AccessNode::new(Role::Region)
                    .id(content_id)
                    .class("section-content")
                    .labelled_by(&slug)
                    .children(links),
            );
        }

        Some(node)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::content::PageContent;
    use crate::domain::theme::ThemeMode;
    use crate::i18n::{Catalogs, ClientContext};
    use crate::utils::preferences::MemoryStorage;
    use std::rc::Rc;

    fn page() -> LinkPage {
        LinkPage::open(
            PageContent::embedded().expect("content"),
            Rc::new(Catalogs::embedded().expect("catalogs")),
            Rc::new(MemoryStorage::new()),
            &ClientContext::Headless,
            ThemeMode::Light,
        )
    }

    fn header<'a>(tree: &'a AccessNode, id: &str) -> &'a AccessNode {
        tree.find_by_id(id).expect("section header")
    }

    #[test]
    fn test_section_headers_start_expanded() {
        let page = page();
        let tree = page.access_tree();
        for index in 0..page.section_count() {
            let id = page.section_id(index).expect("id");
            assert_eq!(header(&tree, &id).expanded, Some(true));
            assert_eq!(header(&tree, &id).role, Role::Button);
        }
    }

    #[test]
    fn test_toggle_parity_reflected_in_tree() {
        let mut page = page();
        for n in 1..=4 {
            page.toggle_section(0);
            let tree = page.access_tree();
            assert_eq!(header(&tree, "projects").expanded, Some(n % 2 == 0));
        }
    }

    #[test]
    fn test_region_labelled_by_header_and_removed_when_collapsed() {
        let mut page = page();
        let tree = page.access_tree();
        let region = tree.find_by_id("projects-content").expect("region");
        assert_eq!(region.role, Role::Region);
        assert_eq!(region.labelled_by.as_deref(), Some("projects"));
        assert_eq!(
            header(&tree, "projects").controls.as_deref(),
            Some("projects-content")
        );

        page.toggle_section(0);
        let tree = page.access_tree();
        assert!(tree.find_by_id("projects-content").is_none());
        assert!(tree.find_by_id("projects-link-0").is_none());
    }

    #[test]
    fn test_theme_toggle_names_current_theme() {
        let mut page = page();
        let name = |page: &LinkPage| {
            page.access_tree()
                .find_by_id(THEME_TOGGLE_ID)
                .map(AccessNode::accessible_name)
        };
        assert_eq!(name(&page).as_deref(), Some("Toggle theme (Light)"));

        page.toggle_theme();
        assert_eq!(name(&page).as_deref(), Some("Toggle theme (Dark)"));

        page.set_language("pt").expect("pt");
        assert_eq!(name(&page).as_deref(), Some("Alternar tema (Escuro)"));
    }

    #[test]
    fn test_decorations_hidden() {
        let tree = page().access_tree();
        for icon in tree.find_all(Role::Icon) {
            assert!(icon.hidden);
        }
        for link in tree.find_all(Role::Link) {
            assert!(link.children.iter().all(|c| c.hidden));
        }
    }

    #[test]
    fn test_links_named_by_title_and_focusable() {
        let page = page();
        let tree = page.access_tree();
        let focus: Vec<_> = tree.focus_order().into_iter().map(|n| n.id.clone()).collect();

        for (index, section) in page.content().sections.iter().enumerate() {
            let slug = page.section_id(index).expect("slug");
            for (position, link) in section.links.iter().enumerate() {
                let id = link_id(&slug, position);
                let node = tree.find_by_id(&id).expect("link node");
                assert!(!node.accessible_name().is_empty());
                assert_eq!(node.accessible_name(), link.title);
                assert!(focus.contains(&Some(id)));
            }
        }
    }

    #[test]
    fn test_focus_order_starts_with_controls() {
        let tree = page().access_tree();
        let ids: Vec<_> = tree
            .focus_order()
            .into_iter()
            .filter_map(|n| n.id.as_deref())
            .take(5)
            .collect();
        assert_eq!(
            ids,
            vec!["lang-en", "lang-pt", "lang-es", THEME_TOGGLE_ID, "projects"]
        );
    }

    #[test]
    fn test_language_buttons_pressed_state() {
        let mut page = page();
        page.set_language("pt").expect("pt");
        let tree = page.access_tree();
        assert_eq!(tree.lang.as_deref(), Some("pt"));
        assert_eq!(tree.find_by_id("lang-pt").and_then(|n| n.pressed), Some(true));
        assert_eq!(tree.find_by_id("lang-en").and_then(|n| n.pressed), Some(false));
        assert_eq!(
            tree.find_by_test_id("subtitle").and_then(|n| n.text.as_deref()),
            Some("Engenharia de Software")
        );
    }
}
