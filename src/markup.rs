//! Markup - Static HTML Export
//!
//! Serializes a page's accessibility tree into a standalone HTML document.
//! Roles map onto native elements where one exists, so headers are real
//! `<button>`s and links real `<a href>`s; ARIA attributes carry the rest.

use std::fmt::Write as _;

use crate::a11y::{AccessNode, Role};
use crate::i18n::MessageKey;
use crate::page::LinkPage;
use crate::theme::colors::{to_css, Palette};
use crate::theme::typography::Typography;

/// Render the full HTML document for the page's current state
pub fn render_document(page: &LinkPage) -> String {
    let palette = Palette::for_mode(page.theme());
    let mut out = String::with_capacity(8 * 1024);

    out.push_str("<!DOCTYPE html>\n");
    let _ = writeln!(
        out,
        r#"<html lang="{}" data-mode="{}">"#,
        page.language().code(),
        page.theme()
    );
    out.push_str("<head>\n<meta charset=\"utf-8\">\n");
    out.push_str(
        "<meta name=\"viewport\" content=\"width=device-width, initial-scale=1\">\n",
    );
    let _ = writeln!(out, "<title>{}</title>", escape(page.text(MessageKey::AppTitle)));
    let _ = writeln!(
        out,
        r#"<meta name="description" content="{}">"#,
        escape(page.text(MessageKey::AppSubtitle))
    );
    out.push_str("<style>\n");
    out.push_str(&stylesheet(palette));
    out.push_str("</style>\n</head>\n<body>\n");
    render_node(&page.access_tree(), &mut out);
    out.push_str("\n</body>\n</html>\n");
    out
}

/// Render a single node (and its subtree) as an HTML fragment
pub fn render_fragment(node: &AccessNode) -> String {
    let mut out = String::new();
    render_node(node, &mut out);
    out
}

fn tag(role: Role) -> &'static str {
    match role {
        Role::Banner => "header",
        Role::Main => "main",
        Role::ContentInfo => "footer",
        Role::Heading(1) => "h1",
        Role::Heading(2) => "h2",
        Role::Heading(3) => "h3",
        Role::Heading(4) => "h4",
        Role::Heading(5) => "h5",
        Role::Heading(_) => "h6",
        Role::Button => "button",
        Role::Region | Role::Group => "div",
        Role::Link => "a",
        Role::Image => "img",
        Role::Icon => "span",
        Role::Text => "p",
    }
}

/// Elements the browser already puts in the tab sequence
fn natively_focusable(node: &AccessNode) -> bool {
    match node.role {
        Role::Button => true,
        Role::Link => node.href.is_some(),
        _ => false,
    }
}

fn render_node(node: &AccessNode, out: &mut String) {
    let tag = tag(node.role);
    out.push('<');
    out.push_str(tag);

    if node.role == Role::Button {
        attr(out, "type", "button");
    }
    if node.role == Role::Region {
        attr(out, "role", "region");
    }
    // aria-label is only allowed on a div that carries a role
    if node.role == Role::Group && node.name.is_some() {
        attr(out, "role", "group");
    }
    if let Some(id) = &node.id {
        attr(out, "id", id);
    }
    if let Some(class) = &node.class {
        attr(out, "class", class);
    }
    if let Some(test_id) = &node.test_id {
        attr(out, "data-testid", test_id);
    }
    if let Some(lang) = &node.lang {
        attr(out, "lang", lang);
    }
    if let Some(color) = &node.background {
        attr(out, "style", &format!("background-color: {color}"));
    }
    if let Some(href) = &node.href {
        attr(out, "href", href);
        if node.role == Role::Link {
            attr(out, "target", "_blank");
            attr(out, "rel", "noopener noreferrer");
        }
    }
    if let Some(src) = &node.src {
        attr(out, "src", src);
    }
    if node.role == Role::Image {
        // Decorative images get an empty alt so screen readers skip them
        let alt = if node.hidden { "" } else { node.name.as_deref().unwrap_or("") };
        attr(out, "alt", alt);
    } else if let Some(name) = &node.name {
        attr(out, "aria-label", name);
    }
    if let Some(expanded) = node.expanded {
        attr(out, "aria-expanded", bool_str(expanded));
    }
    if let Some(pressed) = node.pressed {
        attr(out, "aria-pressed", bool_str(pressed));
    }
    if let Some(controls) = &node.controls {
        attr(out, "aria-controls", controls);
    }
    if let Some(labelled_by) = &node.labelled_by {
        attr(out, "aria-labelledby", labelled_by);
    }
    if node.hidden {
        attr(out, "aria-hidden", "true");
    }
    if node.focusable && !natively_focusable(node) {
        attr(out, "tabindex", "0");
    }

    if node.role == Role::Image {
        out.push('>');
        return;
    }
    out.push('>');

    if let Some(text) = &node.text {
        out.push_str(&escape(text));
    }
    for child in &node.children {
        render_node(child, out);
    }

    out.push_str("</");
    out.push_str(tag);
    out.push('>');
}

fn attr(out: &mut String, name: &str, value: &str) {
    let _ = write!(out, r#" {name}="{}""#, escape(value));
}

fn bool_str(value: bool) -> &'static str {
    if value { "true" } else { "false" }
}

/// Escape text for use in element content and double-quoted attributes
pub fn escape(value: &str) -> String {
    let mut escaped = String::with_capacity(value.len());
    for c in value.chars() {
        match c {
            '&' => escaped.push_str("&amp;"),
            '<' => escaped.push_str("&lt;"),
            '>' => escaped.push_str("&gt;"),
            '"' => escaped.push_str("&quot;"),
            '\'' => escaped.push_str("&#39;"),
            _ => escaped.push(c),
        }
    }
    escaped
}

fn stylesheet(palette: &Palette) -> String {
    format!(
        r#"body {{ margin: 0; background: {background}; color: {text}; font-family: system-ui, sans-serif; font-size: {base}px; }}
.app {{ max-width: 480px; margin: 0 auto; padding: 24px 16px; }}
header {{ text-align: center; }}
.avatar {{ width: 96px; height: 96px; border-radius: 50%; }}
h1 {{ font-size: {xl}px; margin: 8px 0; }}
.subtitle, footer {{ color: {muted}; }}
.controls {{ display: flex; justify-content: center; gap: 8px; }}
button {{ font: inherit; cursor: pointer; border: 1px solid {border}; border-radius: 6px; background: {surface}; color: {text}; padding: 4px 10px; }}
button[aria-pressed="true"] {{ border-color: {accent}; }}
button:focus-visible, a:focus-visible {{ outline: 2px solid {focus}; outline-offset: 2px; }}
.section {{ margin-top: 16px; }}
.section h2 {{ margin: 0; }}
.section-header {{ width: 100%; display: flex; justify-content: space-between; font-size: {lg}px; color: {on_section}; border: none; padding: 12px 16px; }}
.section-content {{ display: flex; flex-direction: column; gap: 8px; padding-top: 8px; }}
.link-card {{ display: flex; align-items: center; gap: 12px; padding: 12px 16px; border-radius: 8px; background: {surface}; color: {text}; text-decoration: none; border: 1px solid {border}; }}
.link-card img {{ width: 24px; height: 24px; }}
footer {{ text-align: center; font-size: {sm}px; margin-top: 24px; }}
"#,
        background = to_css(palette.background),
        text = to_css(palette.text_primary),
        muted = to_css(palette.text_secondary),
        border = to_css(palette.border),
        surface = to_css(palette.surface),
        accent = to_css(palette.accent),
        focus = to_css(palette.focus),
        on_section = to_css(palette.text_on_section),
        base = Typography::TEXT_BASE,
        sm = Typography::TEXT_SM,
        lg = Typography::TEXT_LG,
        xl = Typography::TEXT_2XL,
    )
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::content::PageContent;
    use crate::domain::theme::ThemeMode;
    use crate::i18n::{Catalogs, ClientContext};
    use crate::utils::preferences::MemoryStorage;
    use pretty_assertions::assert_eq;
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

    #[test]
    fn test_escape() {
        assert_eq!(escape(r#"<a href="x">&'"#), "&lt;a href=&quot;x&quot;&gt;&amp;&#39;");
    }

    #[test]
    fn test_section_header_fragment() {
        let node = AccessNode::new(Role::Button)
            .id("social")
            .text("Social")
            .expanded(true)
            .controls("social-content")
            .focusable()
            .child(AccessNode::new(Role::Icon).text("▲").hidden());

        assert_eq!(
            render_fragment(&node),
            r#"<button type="button" id="social" aria-expanded="true" aria-controls="social-content">Social<span aria-hidden="true">▲</span></button>"#
        );
    }

    #[test]
    fn test_link_fragment() {
        let node = AccessNode::new(Role::Link)
            .name("GitHub")
            .text("GitHub")
            .href("https://github.com")
            .focusable()
            .child(AccessNode::new(Role::Image).src("/images/github-icon.svg").hidden());

        assert_eq!(
            render_fragment(&node),
            r#"<a href="https://github.com" target="_blank" rel="noopener noreferrer" aria-label="GitHub">GitHub<img src="/images/github-icon.svg" alt="" aria-hidden="true"></a>"#
        );
    }

    #[test]
    fn test_named_group_gets_role() {
        let node = AccessNode::new(Role::Group)
            .class("language-selector")
            .name("Language")
            .child(AccessNode::new(Role::Button).id("lang-en").text("English"));
        assert_eq!(
            render_fragment(&node),
            r#"<div role="group" class="language-selector" aria-label="Language"><button type="button" id="lang-en">English</button></div>"#
        );

        let unnamed = AccessNode::new(Role::Group).class("controls");
        assert_eq!(render_fragment(&unnamed), r#"<div class="controls"></div>"#);
    }

    #[test]
    fn test_every_exported_link_opens_in_new_tab() {
        let html = render_document(&page());
        let links = html.matches("<a ").count();
        assert!(links > 0);
        assert_eq!(html.matches(r#"target="_blank" rel="noopener noreferrer""#).count(), links);
    }

    #[test]
    fn test_non_native_focusable_gets_tabindex() {
        let node = AccessNode::new(Role::Group).focusable();
        assert_eq!(render_fragment(&node), r#"<div tabindex="0"></div>"#);
    }

    #[test]
    fn test_document_attributes() {
        let html = render_document(&page());
        assert!(html.starts_with("<!DOCTYPE html>"));
        assert!(html.contains(r#"<html lang="en" data-mode="light">"#));
        assert!(html.contains(r#"aria-expanded="true""#));
        assert!(html.contains(r#"role="region""#));
        assert!(html.contains(r#"aria-labelledby="projects""#));
        assert!(html.contains(r#"aria-hidden="true""#));
        assert!(html.contains(r#"aria-label="GitHub""#));
        assert!(html.contains(r#"data-testid="subtitle">Software Engineering</p>"#));
        assert!(html.contains("<h2>"));
    }

    #[test]
    fn test_collapsed_document_omits_links() {
        let mut page = page();
        page.toggle_section(0);
        let html = render_document(&page);
        assert!(html.contains(r#"id="projects" class="section-header""#));
        assert!(!html.contains(r#"id="projects-content""#));
        assert!(html.contains(r#"aria-expanded="false""#));
        assert!(html.contains(r#"id="social-networks-content""#));
    }
}
