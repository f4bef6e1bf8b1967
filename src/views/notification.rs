// ============================================================================
// NOTIFICATION VIEW - The #message box
// ============================================================================

use wasm_bindgen::prelude::*;
use crate::dom::{require_element, set_class_name, set_hidden, set_text_content};
use crate::utils::constants::ID_MESSAGE;
use crate::viewmodels::NotificationView;

/// Paint the message box: text, kind class, visibility
pub fn render_notification(view: &NotificationView) -> Result<(), JsValue> {
    let message = require_element(ID_MESSAGE)?;
    set_text_content(&message, &view.text);
    set_class_name(&message, view.css_class);
    set_hidden(&message, !view.visible)
}
