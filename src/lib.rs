// ============================================================================
// ACTIVITIES SIGNUP APP - FRONTEND (RUST + WASM)
// ============================================================================
// Layers:
// - Models: wire types shared with the backend
// - State: session, directory, notification, menus, request ordering
// - Services: request building, response decoding, HTTP (browser only)
// - ViewModels: (state, command) -> effects, plus screen models
// - Views / DOM / App: browser-only painting and event wiring
// ============================================================================

pub mod config;
pub mod error;
pub mod models;
pub mod services;
pub mod state;
pub mod utils;
pub mod viewmodels;

#[cfg(target_arch = "wasm32")]
mod dom;
#[cfg(target_arch = "wasm32")]
mod views;
#[cfg(target_arch = "wasm32")]
mod app;

#[cfg(target_arch = "wasm32")]
pub use wasm::*;

#[cfg(target_arch = "wasm32")]
mod wasm {
    use std::cell::RefCell;
    use wasm_bindgen::prelude::*;
    use wasm_logger::Config;
    use crate::app::App;
    use crate::config::CONFIG;
    use crate::viewmodels::Command;

    thread_local! {
        static APP: RefCell<Option<App>> = RefCell::new(None);
    }

    #[wasm_bindgen(start)]
    pub fn main() -> Result<(), JsValue> {
        console_error_panic_hook::set_once();

        if CONFIG.is_logging_enabled() {
            wasm_logger::init(Config::new(CONFIG.log_level()));
        }
        log::info!("🚀 Activities Signup App - Rust + WASM");

        let app = App::new();
        app.start()?;

        APP.with(|cell| {
            *cell.borrow_mut() = Some(app);
        });
        Ok(())
    }

    /// Reload the activity directory (callable from JavaScript)
    #[wasm_bindgen]
    pub fn refresh_activities() {
        // clone out so the thread-local borrow is not held during dispatch
        let app = APP.with(|cell| cell.borrow().clone());
        match app {
            Some(app) => app.dispatch(Command::Refresh),
            None => log::warn!("⚠️ [MAIN] App is not initialized"),
        }
    }
}
