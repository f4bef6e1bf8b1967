// ============================================================================
// ELEMENT HELPERS - Basic DOM manipulation
// ============================================================================

use wasm_bindgen::prelude::*;
use wasm_bindgen::JsCast;
use web_sys::{Document, Element, HtmlFormElement, HtmlInputElement, HtmlSelectElement, Node, Window};
use crate::utils::constants::HIDDEN_CLASS;

pub fn window() -> Option<Window> {
    web_sys::window()
}

pub fn document() -> Option<Document> {
    window()?.document()
}

pub fn get_element_by_id(id: &str) -> Option<Element> {
    document()?.get_element_by_id(id)
}

/// Like `get_element_by_id`, but a missing element is an error
pub fn require_element(id: &str) -> Result<Element, JsValue> {
    get_element_by_id(id).ok_or_else(|| JsValue::from_str(&format!("No #{} element found", id)))
}

pub fn create_element(tag: &str) -> Result<Element, JsValue> {
    document()
        .ok_or_else(|| JsValue::from_str("No document"))
        .and_then(|doc| doc.create_element(tag))
}

pub fn set_class_name(element: &Element, class: &str) {
    element.set_class_name(class);
}

pub fn set_text_content(element: &Element, text: &str) {
    element.set_text_content(Some(text));
}

pub fn append_child(parent: &Element, child: &Element) -> Result<(), JsValue> {
    parent.append_child(child).map(|_| ())
}

/// Append a plain text node after the existing children
pub fn append_text(parent: &Element, text: &str) -> Result<(), JsValue> {
    parent.append_with_str_1(text)
}

/// Remove every child
pub fn clear_children(element: &Element) {
    element.set_inner_html("");
}

pub fn set_attribute(element: &Element, name: &str, value: &str) -> Result<(), JsValue> {
    element.set_attribute(name, value)
}

/// Toggle the `hidden` class
pub fn set_hidden(element: &Element, hidden: bool) -> Result<(), JsValue> {
    let classes = element.class_list();
    if hidden {
        classes.add_1(HIDDEN_CLASS)
    } else {
        classes.remove_1(HIDDEN_CLASS)
    }
}

pub fn set_hidden_by_id(id: &str, hidden: bool) -> Result<(), JsValue> {
    set_hidden(&require_element(id)?, hidden)
}

pub fn input_value(id: &str) -> Result<String, JsValue> {
    require_element(id)?
        .dyn_into::<HtmlInputElement>()
        .map(|input| input.value())
        .map_err(|_| JsValue::from_str(&format!("#{} is not an input", id)))
}

pub fn select_value(id: &str) -> Result<String, JsValue> {
    require_element(id)?
        .dyn_into::<HtmlSelectElement>()
        .map(|select| select.value())
        .map_err(|_| JsValue::from_str(&format!("#{} is not a select", id)))
}

pub fn reset_form(id: &str) -> Result<(), JsValue> {
    require_element(id)?
        .dyn_into::<HtmlFormElement>()
        .map(|form| form.reset())
        .map_err(|_| JsValue::from_str(&format!("#{} is not a form", id)))
}

/// True if `node` is `ancestor` or one of its descendants
pub fn contains(ancestor: &Element, node: &Node) -> bool {
    ancestor.contains(Some(node))
}
