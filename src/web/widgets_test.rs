#![cfg(target_arch = "wasm32")]

use gloo_timers::future::TimeoutFuture;
use wasm_bindgen_test::wasm_bindgen_test;
use web_sys::Event;

use super::*;
use crate::config::ProjectRecord;

// =============================================================
// Helpers
// =============================================================

#[derive(Default)]
struct RecordingClipboard {
    staged: Rc<RefCell<Vec<String>>>,
}

impl ClipboardSink for RecordingClipboard {
    fn copy_text(&mut self, text: &str) -> bool {
        self.staged.borrow_mut().push(text.to_string());
        true
    }
}

/// Replace the body with `markup` and return the document.
fn page(markup: &str) -> Document {
    let document = dom::document().unwrap();
    document.body().unwrap().set_inner_html(markup);
    document
}

fn fire(el: &HtmlElement, event: &str) {
    el.dispatch_event(&Event::new(event).unwrap()).unwrap();
}

fn text(el: &HtmlElement) -> String {
    el.text_content().unwrap_or_default()
}

const CONTACT_PAGE: &str = r#"<div class="contact-info">
    <a href="mailto:ada@example.com?subject=Hi">Mail</a><span id="after">next</span>
</div>"#;

// =============================================================
// projects
// =============================================================

#[wasm_bindgen_test]
async fn project_note_survives_mouseleave_until_expiry() {
    let document = page(r#"<ul class="project-list"><li>Folio</li></ul>"#);
    let config = SiteConfig { projects: vec![ProjectRecord::new("Folio", "Live")], ..SiteConfig::default() };
    BrowserWidgets::new(document.clone(), config).init_projects().unwrap();
    let li = dom::query(&document, PROJECT_ITEM_SELECTOR).unwrap().unwrap();

    fire(&li, "mouseenter");
    assert_eq!(text(&li), "Folio (Live)");

    li.click();
    assert_eq!(text(&li), "Folio (Live) (Interaction noted!)");

    fire(&li, "mouseleave");
    assert_eq!(text(&li), "Folio (Interaction noted!)");
    assert!(li.query_selector("span").unwrap().is_some());

    TimeoutFuture::new(PROJECT_NOTE_MS + 200).await;
    assert_eq!(text(&li), "Folio");
}

// =============================================================
// contact
// =============================================================

#[wasm_bindgen_test]
async fn copy_button_follows_link_and_restores_label() {
    let document = page(CONTACT_PAGE);
    let clipboard = RecordingClipboard::default();
    let staged = Rc::clone(&clipboard.staged);
    let mut widgets =
        BrowserWidgets::with_clipboard(document.clone(), SiteConfig::default(), Rc::new(RefCell::new(clipboard)));
    widgets.init_contact().unwrap();

    let link = dom::query(&document, MAILTO_LINK_SELECTOR).unwrap().unwrap();
    let button = link.next_element_sibling().unwrap().dyn_into::<HtmlElement>().unwrap();
    assert_eq!(button.tag_name(), "BUTTON");
    assert_eq!(text(&button), COPY_LABEL);
    assert_eq!(button.next_element_sibling().map(|el| el.id()).as_deref(), Some("after"));

    button.click();
    assert_eq!(*staged.borrow(), vec!["ada@example.com".to_string()]);
    assert_eq!(text(&button), "✅ Copied!");

    TimeoutFuture::new(COPY_FEEDBACK_MS + 200).await;
    assert_eq!(text(&button), COPY_LABEL);
}

#[wasm_bindgen_test]
fn staging_field_is_removed_after_copy() {
    let document = page(CONTACT_PAGE);
    BrowserWidgets::new(document.clone(), SiteConfig::default()).init_contact().unwrap();

    let link = dom::query(&document, MAILTO_LINK_SELECTOR).unwrap().unwrap();
    let button = link.next_element_sibling().unwrap().dyn_into::<HtmlElement>().unwrap();
    button.click();
    assert!(document.query_selector("textarea").unwrap().is_none());

    let mut clipboard = StagingClipboard { document: document.clone() };
    clipboard.copy_text("ada@example.com");
    assert!(document.query_selector("textarea").unwrap().is_none());
}

#[wasm_bindgen_test]
fn link_without_address_gets_no_button() {
    let document = page(r#"<div class="contact-info"><a href="mailto:">Mail</a></div>"#);
    BrowserWidgets::new(document.clone(), SiteConfig::default()).init_contact().unwrap();
    assert!(document.query_selector("button").unwrap().is_none());
}

// =============================================================
// education
// =============================================================

#[wasm_bindgen_test]
fn education_panels_follow_accordion() {
    let document = page(r#"<div class="edu-item">School</div><div class="edu-item">College</div>"#);
    BrowserWidgets::new(document.clone(), SiteConfig::default()).init_education().unwrap();
    let items = dom::query_all(&document, EDU_ITEM_SELECTOR).unwrap();
    let open = || document.query_selector_all(&format!(".{EDU_DETAIL_CLASS}.{EDU_OPEN_CLASS}")).unwrap().length();

    items[0].click();
    items[1].click();
    assert_eq!(open(), 1);
    assert!(items[1].query_selector(&format!(".{EDU_OPEN_CLASS}")).unwrap().is_some());
    items[1].click();
    assert_eq!(open(), 0);
}
