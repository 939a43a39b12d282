//! Header Component
//!
//! Profile badge, name and subtitle, with the language switcher and theme toggle.

use gpui::{
    div, prelude::*, px, App, FontWeight, IntoElement, ParentElement, RenderOnce, SharedString,
    Styled, Window,
};

use crate::components::primitives::button::Button;
use crate::theme::colors::{to_rgba, Palette};
use crate::theme::typography::Typography;

/// Page header
#[derive(IntoElement)]
pub struct Header {
    name: SharedString,
    subtitle: SharedString,
    palette: Palette,
    language_buttons: Vec<Button>,
    theme_toggle: Button,
}

impl Header {
    pub fn new(
        name: impl Into<SharedString>,
        subtitle: impl Into<SharedString>,
        palette: Palette,
        language_buttons: Vec<Button>,
        theme_toggle: Button,
    ) -> Self {
        Self {
            name: name.into(),
            subtitle: subtitle.into(),
            palette,
            language_buttons,
            theme_toggle,
        }
    }

    fn initials(&self) -> SharedString {
        self.name
            .split_whitespace()
            .filter_map(|word| word.chars().next())
            .take(2)
            .collect::<String>()
            .to_uppercase()
            .into()
    }
}

impl RenderOnce for Header {
    fn render(self, _window: &mut Window, _cx: &mut App) -> impl IntoElement {
        let palette = self.palette;
        let initials = self.initials();

        div()
            .flex()
            .flex_col()
            .items_center()
            .gap_2()
            // Avatar placeholder
            .child(
                div()
                    .size(px(96.0))
                    .rounded_full()
                    .bg(to_rgba(palette.accent))
                    .flex()
                    .items_center()
                    .justify_center()
                    .text_color(to_rgba(palette.surface))
                    .text_size(px(Typography::TEXT_2XL))
                    .font_weight(FontWeight::BOLD)
                    .child(initials),
            )
            .child(
                div()
                    .text_color(to_rgba(palette.text_primary))
                    .text_size(px(Typography::TEXT_2XL))
                    .font_weight(FontWeight::BOLD)
                    .child(self.name),
            )
            .child(
                div()
                    .text_color(to_rgba(palette.text_secondary))
                    .text_size(px(Typography::TEXT_BASE))
                    .child(self.subtitle),
            )
            // Controls
            .child(
                div()
                    .flex()
                    .items_center()
                    .gap_2()
                    .pt_2()
                    .children(self.language_buttons)
                    .child(self.theme_toggle),
            )
    }
}
