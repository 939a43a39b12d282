//! SectionCard Component
//!
//! Collapsible section: a colored header that toggles the list of link cards.

use gpui::{
    div, prelude::*, px, App, ClickEvent, ElementId, FocusHandle, FontWeight, IntoElement,
    ParentElement, RenderOnce, SharedString, Styled, Window,
};

use crate::components::primitives::link_card::LinkCard;
use crate::theme::colors::{to_rgba, Palette};
use crate::theme::typography::Typography;

/// A collapsible group of links
#[derive(IntoElement)]
pub struct SectionCard {
    id: ElementId,
    name: SharedString,
    color: u32,
    expanded: bool,
    palette: Palette,
    focus_handle: FocusHandle,
    links: Vec<LinkCard>,
    on_toggle: Option<Box<dyn Fn(&ClickEvent, &mut Window, &mut App) + 'static>>,
}

impl SectionCard {
    pub fn new(
        id: impl Into<ElementId>,
        name: impl Into<SharedString>,
        color: u32,
        palette: Palette,
        focus_handle: FocusHandle,
    ) -> Self {
        Self {
            id: id.into(),
            name: name.into(),
            color,
            expanded: true,
            palette,
            focus_handle,
            links: Vec::new(),
            on_toggle: None,
        }
    }

    pub fn expanded(mut self, expanded: bool) -> Self {
        self.expanded = expanded;
        self
    }

    /// Link cards shown while expanded
    pub fn links(mut self, links: impl IntoIterator<Item = LinkCard>) -> Self {
        self.links.extend(links);
        self
    }

    pub fn on_toggle(mut self, handler: impl Fn(&ClickEvent, &mut Window, &mut App) + 'static) -> Self {
        self.on_toggle = Some(Box::new(handler));
        self
    }
}

impl RenderOnce for SectionCard {
    fn render(self, _window: &mut Window, _cx: &mut App) -> impl IntoElement {
        let palette = self.palette;
        let chevron = if self.expanded { "▲" } else { "▼" };

        let mut header = div()
            .id(self.id)
            .track_focus(&self.focus_handle)
            .flex()
            .items_center()
            .justify_between()
            .px_4()
            .py_3()
            .rounded_lg()
            .border_2()
            .border_color(gpui::transparent_black())
            .bg(to_rgba(self.color))
            .text_color(to_rgba(palette.text_on_section))
            .text_size(px(Typography::TEXT_LG))
            .font_weight(FontWeight::SEMIBOLD)
            .cursor_pointer()
            .focus(move |s| s.border_color(to_rgba(palette.focus)))
            .child(self.name)
            .child(div().text_size(px(Typography::TEXT_XS)).child(chevron));

        if let Some(handler) = self.on_toggle {
            header = header.on_click(handler);
        }

        let links = self.links;
        div()
            .flex()
            .flex_col()
            .gap_2()
            .child(header)
            .when(self.expanded, move |this| {
                this.child(div().flex().flex_col().gap_2().children(links))
            })
    }
}
