// ============================================================================
// AUTH VIEW - Header, menus, login panel and signup form visibility
// ============================================================================

use wasm_bindgen::prelude::*;
use crate::dom::{require_element, set_hidden_by_id, set_text_content};
use crate::utils::constants::*;
use crate::viewmodels::AuthView;

pub fn render_auth(view: &AuthView) -> Result<(), JsValue> {
    set_hidden_by_id(ID_LOGIN_BUTTON, !view.login_button_visible)?;
    set_hidden_by_id(ID_USER_INFO, !view.user_info_visible)?;
    set_hidden_by_id(ID_SIGNUP_FORM, !view.signup_form_visible)?;
    set_hidden_by_id(ID_AUTH_REQUIRED, !view.auth_required_visible)?;
    set_hidden_by_id(ID_USER_DROPDOWN, !view.user_menu_open)?;
    set_hidden_by_id(ID_LOGIN_SECTION, !view.login_panel_open)?;

    if let Some(username) = &view.logged_user {
        set_text_content(&require_element(ID_LOGGED_USER)?, username);
    }
    Ok(())
}
