//! Footer Component

use gpui::{div, prelude::*, px, App, IntoElement, ParentElement, RenderOnce, SharedString, Styled, Window};

use crate::theme::colors::{to_rgba, Palette};
use crate::theme::typography::Typography;

/// Copyright line at the bottom of the page
#[derive(IntoElement)]
pub struct Footer {
    text: SharedString,
    palette: Palette,
}

impl Footer {
    pub fn new(text: impl Into<SharedString>, palette: Palette) -> Self {
        Self {
            text: text.into(),
            palette,
        }
    }
}

impl RenderOnce for Footer {
    fn render(self, _window: &mut Window, _cx: &mut App) -> impl IntoElement {
        div()
            .w_full()
            .flex()
            .justify_center()
            .pt_6()
            .text_color(to_rgba(self.palette.text_secondary))
            .text_size(px(Typography::TEXT_SM))
            .child(self.text)
    }
}
