// ============================================================================
// EVENT HANDLING
// ============================================================================
// closure.forget() leaks the Rust closure for the page lifetime, even if the
// element is later removed. Only bind on static markup and `document`, once, at
// start; content rebuilt by a render uses delegation from a static parent.
// ============================================================================

use wasm_bindgen::prelude::*;
use wasm_bindgen::closure::Closure;
use wasm_bindgen::JsCast;
use web_sys::{Element, Event, EventTarget};

pub fn on_click<F>(element: &Element, handler: F) -> Result<(), JsValue>
where
    F: FnMut(Event) + 'static,
{
    listen(element, "click", handler)
}

/// Submit handler; the browser's default navigation is always prevented
pub fn on_submit<F>(form: &Element, mut handler: F) -> Result<(), JsValue>
where
    F: FnMut() + 'static,
{
    listen(form, "submit", move |e: Event| {
        e.prevent_default();
        handler();
    })
}

/// Click anywhere on the page
pub fn on_document_click<F>(handler: F) -> Result<(), JsValue>
where
    F: FnMut(Event) + 'static,
{
    let document = crate::dom::document().ok_or_else(|| JsValue::from_str("No document"))?;
    listen(&document, "click", handler)
}

fn listen<F>(target: &EventTarget, event_type: &str, handler: F) -> Result<(), JsValue>
where
    F: FnMut(Event) + 'static,
{
    let closure = Closure::wrap(Box::new(handler) as Box<dyn FnMut(Event)>);
    target.add_event_listener_with_callback(event_type, closure.as_ref().unchecked_ref())?;
    closure.forget();
    Ok(())
}
