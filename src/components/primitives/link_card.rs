//! LinkCard Component

use gpui::{
    div, prelude::*, px, App, ClickEvent, ElementId, FocusHandle, FontWeight, IntoElement,
    ParentElement, RenderOnce, SharedString, Styled, Window,
};

use crate::theme::colors::{to_rgba, Palette};
use crate::theme::typography::Typography;

/// A single link entry: icon badge and title
#[derive(IntoElement)]
pub struct LinkCard {
    id: ElementId,
    title: SharedString,
    url: SharedString,
    palette: Palette,
    focus_handle: FocusHandle,
    on_click: Option<Box<dyn Fn(&ClickEvent, &mut Window, &mut App) + 'static>>,
}

impl LinkCard {
    pub fn new(
        id: impl Into<ElementId>,
        title: impl Into<SharedString>,
        url: impl Into<SharedString>,
        palette: Palette,
        focus_handle: FocusHandle,
    ) -> Self {
        Self {
            id: id.into(),
            title: title.into(),
            url: url.into(),
            palette,
            focus_handle,
            on_click: None,
        }
    }

    pub fn on_click(mut self, handler: impl Fn(&ClickEvent, &mut Window, &mut App) + 'static) -> Self {
        self.on_click = Some(Box::new(handler));
        self
    }
}

impl RenderOnce for LinkCard {
    fn render(self, _window: &mut Window, _cx: &mut App) -> impl IntoElement {
        let palette = self.palette;
        let initial: SharedString = self
            .title
            .chars()
            .next()
            .map(|c| c.to_uppercase().to_string())
            .unwrap_or_default()
            .into();

        let mut element = div()
            .id(self.id)
            .track_focus(&self.focus_handle)
            .flex()
            .items_center()
            .gap_3()
            .px_4()
            .py_3()
            .rounded_lg()
            .border_1()
            .border_color(to_rgba(palette.border))
            .bg(to_rgba(palette.surface))
            .cursor_pointer()
            .hover(move |s| s.border_color(to_rgba(palette.accent)))
            .focus(move |s| s.border_2().border_color(to_rgba(palette.focus)))
            // Icon badge
            .child(
                div()
                    .size(px(28.0))
                    .rounded_md()
                    .bg(to_rgba(palette.accent))
                    .flex()
                    .items_center()
                    .justify_center()
                    .text_color(to_rgba(palette.surface))
                    .font_weight(FontWeight::BOLD)
                    .child(initial),
            )
            .child(
                div()
                    .flex()
                    .flex_col()
                    .child(
                        div()
                            .text_color(to_rgba(palette.text_primary))
                            .text_size(px(Typography::TEXT_BASE))
                            .child(self.title),
                    )
                    .child(
                        div()
                            .text_color(to_rgba(palette.text_secondary))
                            .text_size(px(Typography::TEXT_XS))
                            .child(self.url),
                    ),
            );

        if let Some(handler) = self.on_click {
            element = element.on_click(handler);
        }

        element
    }
}
