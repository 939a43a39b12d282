//! Export - Static HTML Rendition of the Page
//!
//! Pre-renders the page without an interactive client: English unless a
//! language is requested, every section expanded unless asked otherwise,
//! and nothing persisted.

use std::rc::Rc;

use tracing::info;

use crate::domain::content::PageContent;
use crate::domain::theme::ThemeMode;
use crate::error::{Error, Result};
use crate::i18n::{Catalogs, ClientContext, SupportedLanguage};
use crate::markup::render_document;
use crate::page::LinkPage;
use crate::utils::preferences::MemoryStorage;

/// What to export
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ExportOptions {
    pub language: Option<SupportedLanguage>,
    pub theme: ThemeMode,
    /// Ids of sections to render collapsed, as shown in the chosen language
    pub collapsed: Vec<String>,
}

/// Render the page to an HTML document
pub fn export_page(
    content: PageContent,
    catalogs: Rc<Catalogs>,
    options: &ExportOptions,
) -> Result<String> {
    let mut page = LinkPage::open(
        content,
        catalogs,
        Rc::new(MemoryStorage::new()),
        &ClientContext::Headless,
        options.theme,
    );

    if let Some(lang) = options.language {
        page.locale_mut().set(lang);
    }

    for id in &options.collapsed {
        let Some(index) = page.section_index(id) else {
            return Err(Error::Invalid {
                message: format!("no section with id {id:?}"),
            });
        };
        if page.is_expanded(index) == Some(true) {
            page.toggle_section(index);
        }
    }

    info!(
        lang = %page.language(),
        theme = %page.theme(),
        collapsed = options.collapsed.len(),
        "Exporting page"
    );
    Ok(render_document(&page))
}

#[cfg(test)]
mod tests {
    use super::*;

    fn export(options: &ExportOptions) -> Result<String> {
        export_page(
            PageContent::embedded().expect("content"),
            Rc::new(Catalogs::embedded().expect("catalogs")),
            options,
        )
    }

    #[test]
    fn test_default_export_is_english_light() {
        let html = export(&ExportOptions::default()).expect("export");
        assert!(html.contains(r#"<html lang="en" data-mode="light">"#));
        assert!(html.contains("Software Engineering"));
    }

    #[test]
    fn test_export_in_spanish_dark_with_collapsed_section() {
        let options = ExportOptions {
            language: Some(SupportedLanguage::Es),
            theme: ThemeMode::Dark,
            collapsed: vec!["proyectos".to_string()],
        };
        let html = export(&options).expect("export");
        assert!(html.contains(r#"<html lang="es" data-mode="dark">"#));
        assert!(html.contains("Ingeniería de Software"));
        assert!(!html.contains(r#"id="proyectos-content""#));
        assert!(html.contains(r#"id="redes-sociales-content""#));
    }

    #[test]
    fn test_unknown_section_is_rejected() {
        let options = ExportOptions {
            collapsed: vec!["missing".to_string()],
            ..Default::default()
        };
        let err = export(&options).expect_err("unknown section");
        assert!(err.to_string().contains("missing"));
    }
}
