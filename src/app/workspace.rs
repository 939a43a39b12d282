//! Workspace - Main Window View
//!
//! Owns the [`LinkPage`] and turns its state into components. Clicks and key
//! presses are routed back to the page by element id; Tab / Shift-Tab walk the
//! page's accessibility focus order.

use std::cell::Cell;
use std::collections::HashMap;
use std::rc::Rc;

use gpui::{
    div, prelude::*, px, App, ClickEvent, Context, FocusHandle, IntoElement, KeyDownEvent,
    ParentElement, Render, SharedString, Styled, Window,
};
use tracing::{debug, info};

use crate::app::application::{FocusNext, FocusPrevious};
use crate::components::composite::section_card::SectionCard;
use crate::components::layout::footer::Footer;
use crate::components::layout::header::Header;
use crate::components::primitives::button::Button;
use crate::components::primitives::link_card::LinkCard;
use crate::constants::CONTENT_WIDTH;
use crate::i18n::{MessageKey, SupportedLanguage};
use crate::page::{language_button_id, link_id, LinkPage, PageEvent, THEME_TOGGLE_ID};
use crate::state::section_state::Activation;
use crate::theme::colors::{parse_hex_color, to_rgba, Palette};

/// Main workspace containing the page
pub struct Workspace {
    page: LinkPage,
    focus_handle: FocusHandle,
    /// Focus handles of interactive elements, keyed by element id
    element_focus: HashMap<String, FocusHandle>,
    /// Set by the locale subscriber, applied to the window title on next render
    title_language: Rc<Cell<Option<SupportedLanguage>>>,
}

impl Workspace {
    pub fn new(mut page: LinkPage, window: &mut Window, cx: &mut Context<Self>) -> Self {
        let title_language = Rc::new(Cell::new(Some(page.language())));
        let pending = title_language.clone();
        page.locale_mut().subscribe(move |lang| pending.set(Some(lang)));

        let focus_handle = cx.focus_handle();
        window.focus(&focus_handle);

        Self {
            page,
            focus_handle,
            element_focus: HashMap::new(),
            title_language,
        }
    }

    fn window_title(&self) -> String {
        format!(
            "{} - {}",
            self.page.text(MessageKey::AppTitle),
            self.page.subtitle()
        )
    }

    /// Focus handle for an element, created on first use
    fn element_focus(&mut self, id: &str, cx: &mut Context<Self>) -> FocusHandle {
        self.element_focus
            .entry(id.to_string())
            .or_insert_with(|| cx.focus_handle())
            .clone()
    }

    fn focused_element(&self, window: &Window) -> Option<String> {
        self.element_focus
            .iter()
            .find(|(_, handle)| handle.is_focused(window))
            .map(|(id, _)| id.clone())
    }

    /// Activate an element by id and apply the outcome
    fn activate(
        &mut self,
        id: &str,
        activation: Activation<'_>,
        window: &mut Window,
        cx: &mut Context<Self>,
    ) -> bool {
        let Some(event) = self.page.activate(id, activation) else {
            return false;
        };

        match event {
            PageEvent::LinkOpened(url) => {
                info!(url = %url, "Opening link");
                cx.open_url(&url);
            }
            PageEvent::LanguageChanged(lang) => {
                // Keep focus on the pressed button
                let handle = self.element_focus(&language_button_id(lang), cx);
                window.focus(&handle);
            }
            PageEvent::ThemeChanged(mode) => debug!(theme = %mode, "Theme toggled"),
            PageEvent::SectionToggled { index, expanded } => {
                debug!(section = index, expanded, "Section toggled from window");
            }
        }

        cx.notify();
        true
    }

    fn click_handler(
        &self,
        id: String,
        cx: &mut Context<Self>,
    ) -> impl Fn(&ClickEvent, &mut Window, &mut App) + 'static {
        cx.listener(move |this, _: &ClickEvent, window, cx| {
            this.activate(&id, Activation::Click, window, cx);
        })
    }

    fn on_key_down(&mut self, event: &KeyDownEvent, window: &mut Window, cx: &mut Context<Self>) {
        let Some(id) = self.focused_element(window) else {
            return;
        };
        if self.activate(&id, Activation::Key(&event.keystroke.key), window, cx) {
            cx.stop_propagation();
        }
    }

    fn focus_next(&mut self, _: &FocusNext, window: &mut Window, cx: &mut Context<Self>) {
        self.move_focus(true, window, cx);
    }

    fn focus_previous(&mut self, _: &FocusPrevious, window: &mut Window, cx: &mut Context<Self>) {
        self.move_focus(false, window, cx);
    }

    /// Step through the accessibility focus order, wrapping at both ends
    fn move_focus(&mut self, forward: bool, window: &mut Window, cx: &mut Context<Self>) {
        let tree = self.page.access_tree();
        let order: Vec<String> = tree
            .focus_order()
            .into_iter()
            .filter_map(|node| node.id.clone())
            .collect();
        if order.is_empty() {
            return;
        }

        let current = self
            .focused_element(window)
            .and_then(|id| order.iter().position(|o| *o == id));
        let next = match (current, forward) {
            (Some(i), true) => (i + 1) % order.len(),
            (Some(i), false) => (i + order.len() - 1) % order.len(),
            (None, true) => 0,
            (None, false) => order.len() - 1,
        };

        let handle = self.element_focus(&order[next], cx);
        window.focus(&handle);
        cx.notify();
    }

    fn render_header(&mut self, palette: Palette, cx: &mut Context<Self>) -> Header {
        let current = self.page.language();

        let language_buttons = SupportedLanguage::ALL
            .into_iter()
            .map(|lang| {
                let id = language_button_id(lang);
                let focus = self.element_focus(&id, cx);
                Button::new(SharedString::from(id.clone()), lang.display_name(), palette, focus)
                    .pressed(lang == current)
                    .on_click(self.click_handler(id, cx))
            })
            .collect();

        let theme_icon = if self.page.theme().is_dark() { "☾" } else { "☀" };
        let theme_focus = self.element_focus(THEME_TOGGLE_ID, cx);
        let theme_label = format!("{theme_icon} {}", self.page.theme_name());
        let theme_toggle = Button::new(THEME_TOGGLE_ID, theme_label, palette, theme_focus)
            .pressed(self.page.theme().is_dark())
            .on_click(self.click_handler(THEME_TOGGLE_ID.to_string(), cx));

        let profile = &self.page.content().profile;
        Header::new(
            profile.name.clone(),
            self.page.subtitle().to_string(),
            palette,
            language_buttons,
            theme_toggle,
        )
    }

    fn render_section(&mut self, index: usize, palette: Palette, cx: &mut Context<Self>) -> Option<SectionCard> {
        let slug = self.page.section_id(index)?;
        let name = self.page.section_name(index)?.to_string();
        let expanded = self.page.is_expanded(index)?;
        let color = self
            .page
            .section_content(index)
            .and_then(|s| parse_hex_color(&s.color))
            .unwrap_or(palette.surface);

        let links: Vec<(String, String, String)> = self
            .page
            .visible_links(index)
            .iter()
            .enumerate()
            .map(|(position, link)| (link_id(&slug, position), link.title.clone(), link.url.clone()))
            .collect();

        let cards: Vec<LinkCard> = links
            .into_iter()
            .map(|(id, title, url)| {
                let focus = self.element_focus(&id, cx);
                LinkCard::new(SharedString::from(id.clone()), title, url, palette, focus)
                    .on_click(self.click_handler(id, cx))
            })
            .collect();

        let focus = self.element_focus(&slug, cx);
        Some(
            SectionCard::new(SharedString::from(slug.clone()), name, color, palette, focus)
                .expanded(expanded)
                .links(cards)
                .on_toggle(self.click_handler(slug, cx)),
        )
    }
}

impl Render for Workspace {
    fn render(&mut self, window: &mut Window, cx: &mut Context<Self>) -> impl IntoElement {
        if self.title_language.take().is_some() {
            window.set_window_title(&self.window_title());
        }

        let palette = *Palette::for_mode(self.page.theme());
        let header = self.render_header(palette, cx);
        let sections: Vec<SectionCard> = (0..self.page.section_count())
            .filter_map(|index| self.render_section(index, palette, cx))
            .collect();
        let footer = Footer::new(self.page.text(MessageKey::FooterCopyright).to_string(), palette);
        let links_title = self.page.text(MessageKey::FeaturesTitle).to_string();

        div()
            .id("workspace")
            .key_context("Workspace")
            .track_focus(&self.focus_handle)
            .on_action(cx.listener(Self::focus_next))
            .on_action(cx.listener(Self::focus_previous))
            .on_key_down(cx.listener(Self::on_key_down))
            .size_full()
            .overflow_y_scroll()
            .bg(to_rgba(palette.background))
            .flex()
            .flex_col()
            .items_center()
            .child(
                div()
                    .w(px(CONTENT_WIDTH))
                    .flex()
                    .flex_col()
                    .gap_4()
                    .py_6()
                    .child(header)
                    .child(
                        div()
                            .pt_4()
                            .text_color(to_rgba(palette.text_secondary))
                            .child(links_title),
                    )
                    .children(sections)
                    .child(footer),
            )
    }
}
