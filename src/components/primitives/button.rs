//! Button Component

use gpui::{
    div, prelude::*, px, App, ClickEvent, ElementId, FocusHandle, IntoElement, ParentElement,
    RenderOnce, SharedString, Styled, Window,
};

use crate::theme::colors::{to_rgba, Palette};
use crate::theme::typography::Typography;

type ClickHandler = Box<dyn Fn(&ClickEvent, &mut Window, &mut App) + 'static>;

/// A focusable toggle-style button (language and theme controls)
#[derive(IntoElement)]
pub struct Button {
    id: ElementId,
    label: SharedString,
    palette: Palette,
    focus_handle: FocusHandle,
    pressed: bool,
    on_click: Option<ClickHandler>,
}

impl Button {
    /// Create a new button
    pub fn new(
        id: impl Into<ElementId>,
        label: impl Into<SharedString>,
        palette: Palette,
        focus_handle: FocusHandle,
    ) -> Self {
        Self {
            id: id.into(),
            label: label.into(),
            palette,
            focus_handle,
            pressed: false,
            on_click: None,
        }
    }

    /// Show the button as the selected option
    pub fn pressed(mut self, pressed: bool) -> Self {
        self.pressed = pressed;
        self
    }

    /// Set the click handler
    pub fn on_click(mut self, handler: impl Fn(&ClickEvent, &mut Window, &mut App) + 'static) -> Self {
        self.on_click = Some(Box::new(handler));
        self
    }
}

impl RenderOnce for Button {
    fn render(self, _window: &mut Window, _cx: &mut App) -> impl IntoElement {
        let palette = self.palette;
        let border = if self.pressed {
            palette.accent
        } else {
            palette.border
        };

        let mut element = div()
            .id(self.id)
            .track_focus(&self.focus_handle)
            .px(px(10.0))
            .py(px(4.0))
            .rounded_md()
            .border_1()
            .border_color(to_rgba(border))
            .bg(to_rgba(palette.surface))
            .text_color(to_rgba(palette.text_primary))
            .text_size(px(Typography::TEXT_SM))
            .cursor_pointer()
            .hover(move |s| s.border_color(to_rgba(palette.accent)))
            .focus(move |s| s.border_2().border_color(to_rgba(palette.focus)))
            .child(self.label);

        if let Some(handler) = self.on_click {
            element = element.on_click(handler);
        }

        element
    }
}
