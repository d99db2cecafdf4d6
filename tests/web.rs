//! In-browser smoke test for the full page setup.
//!
//! Run with `wasm-pack test --headless --firefox -- --features browser`.
#![cfg(all(target_arch = "wasm32", feature = "browser"))]

use wasm_bindgen::JsCast;
use wasm_bindgen_test::*;
use web_sys::{Document, HtmlElement};

wasm_bindgen_test_configure!(run_in_browser);

fn document() -> Document {
    web_sys::window().unwrap().document().unwrap()
}

fn element(selector: &str) -> HtmlElement {
    document()
        .query_selector(selector)
        .unwrap()
        .unwrap()
        .dyn_into::<HtmlElement>()
        .unwrap()
}

// `run` only takes effect once per page, so the whole flow is one test.
#[wasm_bindgen_test]
fn education_page_end_to_end() {
    let storage = web_sys::window().unwrap().local_storage().unwrap().unwrap();
    storage.remove_item("theme").unwrap();

    let body = document().body().unwrap();
    body.set_inner_html(
        r#"<nav><ul><li><a href="index.html">About</a></li></ul></nav>
           <div class="edu-item">School</div>
           <div class="edu-item">College</div>"#,
    );

    folio::web::run_with(Some("education".into()), None);

    let toggle = element(".theme-toggle");
    assert_eq!(toggle.text_content().as_deref(), Some("🌙 Dark Mode"));
    assert!(document().get_element_by_id("folio-style").is_some());
    assert!(document().get_element_by_id("last-updated").is_some());

    toggle.click();
    assert!(body.class_list().contains("dark-mode"));
    assert_eq!(storage.get_item("theme").unwrap().as_deref(), Some("dark"));
    assert_eq!(toggle.text_content().as_deref(), Some("☀️ Light Mode"));

    let items = document().query_selector_all(".edu-item").unwrap();
    let first = items.item(0).unwrap().dyn_into::<HtmlElement>().unwrap();
    let second = items.item(1).unwrap().dyn_into::<HtmlElement>().unwrap();
    first.click();
    second.click();
    assert_eq!(document().query_selector_all(".edu-item-detail.open").unwrap().length(), 1);
    second.click();
    assert_eq!(document().query_selector_all(".edu-item-detail.open").unwrap().length(), 0);

    folio::web::toggle_theme();
    assert!(!body.class_list().contains("dark-mode"));
}
