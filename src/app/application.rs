//! Application - App Initialization and Window Management
//!
//! Main entry point for the GPUI application.

use std::rc::Rc;

use gpui::{
    actions, px, App, AppContext, Application, Bounds, KeyBinding, SharedString, TitlebarOptions,
    WindowAppearance, WindowBounds, WindowOptions,
};
use tracing::{error, info};

use crate::app::workspace::Workspace;
use crate::constants::{DEFAULT_WINDOW_HEIGHT, DEFAULT_WINDOW_WIDTH};
use crate::domain::content::PageContent;
use crate::domain::theme::ThemeMode;
use crate::i18n::{Catalogs, ClientContext};
use crate::page::LinkPage;
use crate::utils::preferences::SharedStorage;

actions!(linkflow, [Quit, FocusNext, FocusPrevious]);

/// Theme used when the user never picked one
fn system_theme(cx: &App) -> ThemeMode {
    match cx.window_appearance() {
        WindowAppearance::Dark | WindowAppearance::VibrantDark => ThemeMode::Dark,
        WindowAppearance::Light | WindowAppearance::VibrantLight => ThemeMode::Light,
    }
}

/// Run the LinkFlow window
pub fn run_app(content: PageContent, catalogs: Rc<Catalogs>, storage: SharedStorage) {
    Application::new().run(move |cx: &mut App| {
        // Set up action handlers
        cx.on_action(|_: &Quit, cx: &mut App| cx.quit());
        cx.bind_keys([
            KeyBinding::new("tab", FocusNext, Some("Workspace")),
            KeyBinding::new("shift-tab", FocusPrevious, Some("Workspace")),
            KeyBinding::new("cmd-q", Quit, None),
            KeyBinding::new("ctrl-q", Quit, None),
        ]);

        // Quit the app when all windows are closed
        cx.on_window_closed(|cx| {
            if cx.windows().is_empty() {
                cx.quit();
            }
        })
        .detach();

        let page = LinkPage::open(
            content,
            catalogs,
            storage,
            &ClientContext::system(),
            system_theme(cx),
        );
        info!(lang = %page.language(), theme = %page.theme(), "Page opened");

        let bounds = Bounds::centered(
            None,
            gpui::size(px(DEFAULT_WINDOW_WIDTH), px(DEFAULT_WINDOW_HEIGHT)),
            cx,
        );
        let window_options = WindowOptions {
            window_bounds: Some(WindowBounds::Windowed(bounds)),
            titlebar: Some(TitlebarOptions {
                title: Some(SharedString::from("LinkFlow")),
                appears_transparent: false,
                traffic_light_position: None,
            }),
            ..Default::default()
        };

        let opened = cx.open_window(window_options, |window, cx| {
            cx.new(|cx| Workspace::new(page, window, cx))
        });
        if let Err(e) = opened {
            error!(error = %e, "Failed to open window");
            cx.quit();
            return;
        }

        cx.activate(true);
    });
}
