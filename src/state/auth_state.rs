// ============================================================================
// AUTH STATE - LoggedOut / LoggedIn, derived from the session
// ============================================================================

use crate::state::session_state::Session;

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum AuthStatus {
    LoggedOut,
    LoggedIn,
}

impl AuthStatus {
    pub fn of(session: &Session) -> Self {
        if session.is_active() {
            AuthStatus::LoggedIn
        } else {
            AuthStatus::LoggedOut
        }
    }

    pub fn is_logged_in(&self) -> bool {
        matches!(self, AuthStatus::LoggedIn)
    }
}

/// Header menus owned by the auth controller
#[derive(Clone, Debug, PartialEq, Eq, Default)]
pub struct MenuState {
    pub user_menu_open: bool,
    pub login_panel_open: bool,
}

impl MenuState {
    pub fn toggle_user_menu(&mut self) {
        self.user_menu_open = !self.user_menu_open;
    }

    pub fn open_login(&mut self) {
        self.login_panel_open = true;
        self.user_menu_open = false;
    }

    pub fn close_login(&mut self) {
        self.login_panel_open = false;
    }

    pub fn close_user_menu(&mut self) {
        self.user_menu_open = false;
    }
}
