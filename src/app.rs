// ============================================================================
// APP - Browser runtime: binds page events, runs handlers, executes effects
// ============================================================================

use std::cell::RefCell;
use std::rc::Rc;
use gloo_timers::callback::Timeout;
use wasm_bindgen::prelude::*;
use wasm_bindgen::JsCast;
use web_sys::{Element, Event, Node};
use crate::dom::{input_value, on_click, on_document_click, on_submit, contains, require_element, reset_form, select_value};
use crate::services::ApiClient;
use crate::state::AppState;
use crate::utils::constants::*;
use crate::utils::BrowserStore;
use crate::viewmodels::{self, AuthView, Command, DirectoryView, Effect, NotificationView, RenderScope};
use crate::views::{render_auth, render_directory, render_notification};

/// Sends a command back into the app from an event listener
type Dispatch = Rc<dyn Fn(Command)>;

/// Main application. Cloning shares the same state.
#[derive(Clone)]
pub struct App {
    state: Rc<RefCell<AppState<BrowserStore>>>,
    api: ApiClient,
}

impl App {
    pub fn new() -> Self {
        let state = AppState::new(BrowserStore);
        if let Some(username) = state.session.get().username() {
            log::info!("💾 [APP] Session restored for {}", username);
        }
        Self {
            state: Rc::new(RefCell::new(state)),
            api: ApiClient::new(),
        }
    }

    /// Register listeners once, paint, and load the directory
    pub fn start(&self) -> Result<(), JsValue> {
        self.bind_events()?;
        self.dispatch(Command::Startup);
        Ok(())
    }

    /// Run one command through the handlers, then execute its effects.
    /// The state borrow ends before any effect runs.
    pub fn dispatch(&self, command: Command) {
        let effects = {
            let mut state = self.state.borrow_mut();
            viewmodels::dispatch(&mut *state, command)
        };
        for effect in effects {
            self.run(effect);
        }
    }

    fn dispatcher(&self) -> Dispatch {
        let app = self.clone();
        Rc::new(move |command| app.dispatch(command))
    }

    fn run(&self, effect: Effect) {
        match effect {
            Effect::Send { tag, request } => {
                let app = self.clone();
                wasm_bindgen_futures::spawn_local(async move {
                    let outcome = app.api.execute(&request).await;
                    if let Err(e) = &outcome {
                        log::warn!("⚠️ [APP] {:?} failed: {}", request.action, e);
                    }
                    app.dispatch(Command::Completed {
                        tag,
                        action: request.action,
                        outcome,
                    });
                });
            }
            Effect::ScheduleHide { generation, after_ms } => {
                let app = self.clone();
                Timeout::new(after_ms, move || {
                    app.dispatch(Command::HideNotification { generation });
                })
                .forget();
            }
            Effect::Render(scope) => {
                if let Err(e) = self.render(scope) {
                    log::error!("❌ [APP] Error rendering {:?}: {:?}", scope, e);
                }
            }
            Effect::ResetLoginForm => self.reset(ID_LOGIN_FORM),
            Effect::ResetSignupForm => self.reset(ID_SIGNUP_FORM),
        }
    }

    fn render(&self, scope: RenderScope) -> Result<(), JsValue> {
        match scope {
            RenderScope::Auth => {
                let view = AuthView::build(&*self.state.borrow());
                render_auth(&view)
            }
            RenderScope::Directory => {
                let view = DirectoryView::build(&*self.state.borrow());
                render_directory(&view)
            }
            RenderScope::Notification => {
                let view = NotificationView::build(&*self.state.borrow());
                render_notification(&view)
            }
        }
    }

    fn reset(&self, form_id: &str) {
        if let Err(e) = reset_form(form_id) {
            log::warn!("⚠️ [APP] Could not reset #{}: {:?}", form_id, e);
        }
    }

    fn bind_events(&self) -> Result<(), JsValue> {
        let dispatch = self.dispatcher();

        let d = dispatch.clone();
        on_submit(&require_element(ID_LOGIN_FORM)?, move || {
            match (input_value(ID_USERNAME_INPUT), input_value(ID_PASSWORD_INPUT)) {
                (Ok(username), Ok(password)) => d(Command::Login { username, password }),
                _ => log::error!("❌ [APP] Login form inputs missing"),
            }
        })?;

        let d = dispatch.clone();
        on_submit(&require_element(ID_SIGNUP_FORM)?, move || {
            match (input_value(ID_EMAIL_INPUT), select_value(ID_ACTIVITY_SELECT)) {
                (Ok(email), Ok(activity)) => d(Command::Signup { email, activity }),
                _ => log::error!("❌ [APP] Signup form inputs missing"),
            }
        })?;

        let d = dispatch.clone();
        on_click(&require_element(ID_USER_ICON)?, move |_| d(Command::ToggleUserMenu))?;

        let d = dispatch.clone();
        on_click(&require_element(ID_LOGIN_BUTTON)?, move |_| d(Command::OpenLogin))?;

        let d = dispatch.clone();
        on_click(&require_element(ID_LOGOUT_BUTTON)?, move |_| d(Command::Logout))?;

        let d = dispatch.clone();
        on_click(&require_element(ID_CANCEL_LOGIN)?, move |_| d(Command::CancelLogin))?;

        // one listener for every delete button the directory renders
        let d = dispatch.clone();
        on_click(&require_element(ID_ACTIVITIES_LIST)?, move |event| {
            if let Some(command) = delete_button_command(&event) {
                d(command);
            }
        })?;

        let icon = require_element(ID_USER_ICON)?;
        let dropdown = require_element(ID_USER_DROPDOWN)?;
        on_document_click(move |event| {
            let inside = event
                .target()
                .and_then(|target| target.dyn_into::<Node>().ok())
                .map(|node| contains(&icon, &node) || contains(&dropdown, &node))
                .unwrap_or(false);
            if !inside {
                dispatch(Command::OutsideClick);
            }
        })?;

        log::debug!("🔗 [APP] Page events bound");
        Ok(())
    }
}

/// Unregister command for a click that landed on (or inside) a delete button
fn delete_button_command(event: &Event) -> Option<Command> {
    let target = event.target()?.dyn_into::<Element>().ok()?;
    let button = target.closest(&format!(".{}", DELETE_BUTTON_CLASS)).ok()??;
    Command::from_delete_button(button.get_attribute(ATTR_ACTIVITY), button.get_attribute(ATTR_EMAIL))
}

impl Default for App {
    fn default() -> Self {
        Self::new()
    }
}
