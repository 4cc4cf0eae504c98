use std::path::PathBuf;

use fltk::{app, dialog, prelude::*};

use order_pad::app::domain::menu::MenuCatalog;
use order_pad::app::messages::Message;
use order_pad::app::state::AppState;
use order_pad::ui::main_window::build_main_window;

/// Look for menu.json next to the executable first, then fall back to the
/// working directory.
fn menu_path() -> PathBuf {
    if let Ok(exe) = std::env::current_exe() {
        if let Some(dir) = exe.parent() {
            let candidate = dir.join("menu.json");
            if candidate.exists() {
                return candidate;
            }
        }
    }
    PathBuf::from("menu.json")
}

fn main() {
    let app = app::App::default().with_scheme(app::Scheme::Gtk);

    let path = menu_path();
    let catalog = match MenuCatalog::load(&path) {
        Ok(catalog) => catalog,
        Err(e) => {
            // No catalog means no ordering for this session
            dialog::alert_default(&format!(
                "Failed to load menu from {}.\n{}",
                path.display(),
                e
            ));
            return;
        }
    };

    let (sender, receiver) = app::channel::<Message>();
    let mut widgets = build_main_window(&catalog.cafe_name, &sender);
    widgets.wind.show();

    let mut state = AppState::new(catalog, widgets);

    while app.wait() {
        if let Some(message) = receiver.recv() {
            state.handle(message);
        }
    }
}
