//! Browser bindings and exported entry points.
//!
//! SYSTEM CONTEXT
//! ==============
//! The hosting page loads the generated module and calls [`run`] (or
//! [`run_with`]) once the document is parsed. Setup is linear: stylesheet,
//! theme toggle, footer, nav highlight, then the one widget set for the page.
//! A failing step is logged and the remaining steps still run.


mod chrome;
mod dom;
mod theme;
mod widgets;

use std::cell::Cell;

use wasm_bindgen::prelude::*;

use crate::config::SiteConfig;
use crate::consts::{CONFIG_ELEMENT_ID, PAGE_DATA_KEY, THEME_TOGGLE_CLASS};
use crate::page::{self, PageMode};

/// Browser plumbing failure.
#[derive(Debug, thiserror::Error)]
pub enum WebError {
    /// A browser global (`window`, `document`, `body`, ...) is unavailable.
    #[error("browser object unavailable: {0}")]
    Missing(&'static str),
    /// A DOM call threw.
    #[error("javascript exception: {0}")]
    Js(String),
    /// A node did not have the expected element type.
    #[error("element is not a {0}")]
    Cast(&'static str),
}

impl From<JsValue> for WebError {
    fn from(value: JsValue) -> Self {
        Self::Js(value.as_string().unwrap_or_else(|| format!("{value:?}")))
    }
}

thread_local! {
    static STARTED: Cell<bool> = const { Cell::new(false) };
}

/// Module initializer: route panics and `log` output to the console.
#[wasm_bindgen(start)]
pub fn init() {
    console_error_panic_hook::set_once();
    let level = if cfg!(debug_assertions) { log::Level::Debug } else { log::Level::Info };
    if console_log::init_with_level(level).is_err() {
        log::debug!("console logger already installed");
    }
}

/// Enhance the current page using the page marker and config found in the DOM.
#[wasm_bindgen]
pub fn run() {
    run_with(None, None);
}

/// Enhance the current page with an explicit page marker and/or JSON config.
///
/// `None` falls back to `<body data-page>` (then the body class list) and to
/// the `#folio-config` script element respectively. Only the first call on a
/// page has any effect.
#[wasm_bindgen]
pub fn run_with(page: Option<String>, config_json: Option<String>) {
    let outcome = STARTED.with(|started| run_once(started, || start(page, config_json)));
    match outcome {
        None => log::debug!("folio: already started"),
        Some(Ok(())) => log::debug!("folio: started"),
        Some(Err(err)) => log::error!("folio: startup failed, run() may be retried: {err}"),
    }
}

/// Call `start` unless an earlier call succeeded. The flag is set only on
/// success, so a page can retry once the document is ready.
fn run_once<E>(started: &Cell<bool>, start: impl FnOnce() -> Result<(), E>) -> Option<Result<(), E>> {
    if started.get() {
        return None;
    }
    let result = start();
    started.set(result.is_ok());
    Some(result)
}

/// Flip the theme as if the toggle button had been clicked.
#[wasm_bindgen]
pub fn toggle_theme() {
    let button = dom::document()
        .and_then(|doc| dom::query(&doc, &format!(".{THEME_TOGGLE_CLASS}")));
    match button {
        Ok(Some(button)) => button.click(),
        Ok(None) => log::warn!("theme: toggle button not installed"),
        Err(err) => log::warn!("theme: {err}"),
    }
}

fn start(page: Option<String>, config_json: Option<String>) -> Result<(), WebError> {
    let document = dom::document()?;
    let body = document.body().ok_or(WebError::Missing("document.body"))?;
    let config = load_config(&document, config_json);

    step("style", chrome::inject_style(&document));
    step("theme", theme::install(&document, &body, &config.storage_key));
    step("footer", chrome::append_footer(&document, &body, &config.owner));
    step("nav", chrome::highlight_nav(&document, &config.home_page));

    let mode = resolve_mode(&body, page);
    let mut widgets = widgets::BrowserWidgets::new(document, config);
    step("widgets", page::dispatch(mode, &mut widgets));
    Ok(())
}

fn step(name: &str, result: Result<(), WebError>) {
    match result {
        Ok(()) => log::debug!("folio: {name} ready"),
        Err(err) => log::warn!("folio: {name} skipped: {err}"),
    }
}

fn load_config(document: &web_sys::Document, explicit: Option<String>) -> SiteConfig {
    let raw = explicit.or_else(|| {
        document
            .get_element_by_id(CONFIG_ELEMENT_ID)
            .and_then(|el| el.text_content())
    });
    let Some(raw) = raw else {
        return SiteConfig::default();
    };
    SiteConfig::from_json(&raw).unwrap_or_else(|err| {
        log::error!("folio: {err}; using built-in content");
        SiteConfig::default()
    })
}

fn resolve_mode(body: &web_sys::HtmlElement, explicit: Option<String>) -> Option<PageMode> {
    let data_page = body.dataset().get(PAGE_DATA_KEY);
    PageMode::resolve(explicit.as_deref(), data_page.as_deref(), &body.class_name())
}
