//! Small `web-sys` helpers shared by the browser modules.

use wasm_bindgen::JsCast;
use wasm_bindgen::closure::Closure;
use web_sys::{Document, Element, EventTarget, HtmlElement};

use super::WebError;

pub fn document() -> Result<Document, WebError> {
    web_sys::window()
        .ok_or(WebError::Missing("window"))?
        .document()
        .ok_or(WebError::Missing("document"))
}

/// First element matching `selector` that is an `HtmlElement`.
pub fn query(document: &Document, selector: &str) -> Result<Option<HtmlElement>, WebError> {
    Ok(document
        .query_selector(selector)?
        .and_then(|el| el.dyn_ref::<HtmlElement>().cloned()))
}

/// All `HtmlElement`s matching `selector`, in document order.
pub fn query_all(document: &Document, selector: &str) -> Result<Vec<HtmlElement>, WebError> {
    let nodes = document.query_selector_all(selector)?;
    let mut out = Vec::with_capacity(nodes.length() as usize);
    for i in 0..nodes.length() {
        if let Some(el) = nodes.item(i).and_then(|node| node.dyn_ref::<HtmlElement>().cloned()) {
            out.push(el);
        }
    }
    Ok(out)
}

/// Create an element and cast it to its concrete type.
pub fn create<T: JsCast>(document: &Document, tag: &'static str) -> Result<T, WebError> {
    document
        .create_element(tag)?
        .dyn_into::<T>()
        .map_err(|_| WebError::Cast(tag))
}

/// Create an `HtmlElement` with text content.
pub fn create_with_text(document: &Document, tag: &'static str, text: &str) -> Result<HtmlElement, WebError> {
    let el: HtmlElement = create(document, tag)?;
    el.set_text_content(Some(text));
    Ok(el)
}

pub fn set_style(el: &HtmlElement, property: &str, value: &str) -> Result<(), WebError> {
    el.style().set_property(property, value)?;
    Ok(())
}

pub fn set_styles<'a>(
    el: &HtmlElement,
    declarations: impl IntoIterator<Item = (&'a str, &'a str)>,
) -> Result<(), WebError> {
    for (property, value) in declarations {
        set_style(el, property, value)?;
    }
    Ok(())
}

pub fn add_class(el: &Element, class: &str) -> Result<(), WebError> {
    el.class_list().add_1(class)?;
    Ok(())
}

/// Attach `handler` to `event` for the lifetime of the page.
pub fn listen<F>(target: &EventTarget, event: &str, handler: F) -> Result<(), WebError>
where
    F: FnMut() + 'static,
{
    let cb = Closure::wrap(Box::new(handler) as Box<dyn FnMut()>);
    target.add_event_listener_with_callback(event, cb.as_ref().unchecked_ref())?;
    cb.forget();
    Ok(())
}

/// Log a failure from inside an event handler, where nothing can propagate.
pub fn report(context: &str, result: Result<(), WebError>) {
    if let Err(err) = result {
        log::warn!("{context}: {err}");
    }
}
