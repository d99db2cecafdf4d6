//! DOM wiring for the per-page widgets.
//!
//! Every handler borrows its widget state, updates it, and re-renders the
//! nodes it owns from that state. Delayed effects keep their `Timeout` in a
//! slot next to the state; replacing the slot drops (cancels) the old one.

use std::cell::RefCell;
use std::rc::Rc;

use gloo_timers::callback::Timeout;
use rand::SeedableRng;
use rand::rngs::SmallRng;
use wasm_bindgen::JsCast;
use web_sys::{Document, HtmlDocument, HtmlElement, HtmlTextAreaElement};

use super::WebError;
use super::dom;

#[cfg(test)]
#[path = "widgets_test.rs"]
mod widgets_test;
use crate::config::SiteConfig;
use crate::consts::{
    ABOUT_TEXT_SELECTOR, CONTACT_HOVER_CLASS, CONTACT_LINK_SELECTOR, COPY_FEEDBACK_MS, COPY_LABEL,
    EDU_DETAIL_CLASS, EDU_ITEM_SELECTOR, EDU_OPEN_CLASS, FUN_FACT_BUTTON_LABEL, FUN_FACT_DISPLAY_ID,
    INTERACTIVE_CARD_CLASS, MAILTO_LINK_SELECTOR, PROFILE_IMAGE_SELECTOR, PROJECT_ITEM_CLASS, PROJECT_ITEM_SELECTOR,
    PROJECT_NOTE_MS, SKILL_ITEM_SELECTOR,
};
use crate::page::PageWidgets;
use crate::style::{
    CONTACT_TRANSITION, COPY_BUTTON_STYLE, FACT_BUTTON_STYLE, FACT_DISPLAY_STYLE, PROFILE_TRANSITION,
    PROJECT_NOTE_STYLE, STAGING_FIELD_STYLE,
};
use crate::widgets::accordion::Accordion;
use crate::widgets::copy_email::{ClipboardSink, CopyButton, email_address};
use crate::widgets::fun_fact::FactDeck;
use crate::widgets::hover::{FACT_BUTTON_HOVER, HoverEffect, HoverState, PROFILE_GLOW, SKILL_HIGHLIGHT_EFFECT};
use crate::widgets::projects::ProjectItem;

type TimeoutSlot = Rc<RefCell<Option<Timeout>>>;
type SharedClipboard = Rc<RefCell<dyn ClipboardSink>>;

/// Widget initializers bound to the live document.
pub struct BrowserWidgets {
    document: Document,
    config: SiteConfig,
    clipboard: SharedClipboard,
}

impl BrowserWidgets {
    /// Widgets that copy through the document's staging field.
    pub fn new(document: Document, config: SiteConfig) -> Self {
        let clipboard = Rc::new(RefCell::new(StagingClipboard { document: document.clone() }));
        Self::with_clipboard(document, config, clipboard)
    }

    fn with_clipboard(document: Document, config: SiteConfig, clipboard: SharedClipboard) -> Self {
        Self { document, config, clipboard }
    }
}

impl PageWidgets for BrowserWidgets {
    type Error = WebError;

    fn init_about(&mut self) -> Result<(), WebError> {
        if let Some(image) = dom::query(&self.document, PROFILE_IMAGE_SELECTOR)? {
            dom::set_style(&image, "transition", PROFILE_TRANSITION)?;
            bind_hover(&image, PROFILE_GLOW)?;
        }
        let Some(about) = dom::query(&self.document, ABOUT_TEXT_SELECTOR)? else {
            return Ok(());
        };

        let button = dom::create_with_text(&self.document, "button", FUN_FACT_BUTTON_LABEL)?;
        button.style().set_css_text(FACT_BUTTON_STYLE);
        bind_hover(&button, FACT_BUTTON_HOVER)?;

        let display: HtmlElement = dom::create(&self.document, "p")?;
        display.set_id(FUN_FACT_DISPLAY_ID);
        display.style().set_css_text(FACT_DISPLAY_STYLE);

        about.append_child(&button)?;
        about.append_child(&display)?;

        let deck = FactDeck::new(self.config.fun_facts.clone());
        let mut rng = SmallRng::seed_from_u64(entropy_seed());
        dom::listen(&button, "click", move || {
            if let Some(fact) = deck.draw(&mut rng) {
                display.set_text_content(Some(fact));
            }
        })
    }

    fn init_education(&mut self) -> Result<(), WebError> {
        let items = dom::query_all(&self.document, EDU_ITEM_SELECTOR)?;
        let mut panels = Vec::with_capacity(items.len());
        for (index, item) in items.iter().enumerate() {
            dom::add_class(item, INTERACTIVE_CARD_CLASS)?;
            let text = self.config.education_details.get(index).map_or("", String::as_str);
            let panel = dom::create_with_text(&self.document, "p", text)?;
            dom::add_class(&panel, EDU_DETAIL_CLASS)?;
            item.append_child(&panel)?;
            panels.push(panel);
        }

        let accordion = Rc::new(RefCell::new(Accordion::new(items.len())));
        let panels = Rc::new(panels);
        for (index, item) in items.iter().enumerate() {
            let accordion = Rc::clone(&accordion);
            let panels = Rc::clone(&panels);
            dom::listen(item, "click", move || {
                let mut accordion = accordion.borrow_mut();
                accordion.click(index);
                for (i, panel) in panels.iter().enumerate() {
                    let result = panel.class_list().toggle_with_force(EDU_OPEN_CLASS, accordion.is_open(i));
                    dom::report("education", result.map(drop).map_err(WebError::from));
                }
            })?;
        }
        log::debug!("education: {} panels", items.len());
        Ok(())
    }

    fn init_skills(&mut self) -> Result<(), WebError> {
        for item in dom::query_all(&self.document, SKILL_ITEM_SELECTOR)? {
            dom::add_class(&item, INTERACTIVE_CARD_CLASS)?;
            bind_hover(&item, SKILL_HIGHLIGHT_EFFECT)?;
        }
        Ok(())
    }

    fn init_projects(&mut self) -> Result<(), WebError> {
        let items = dom::query_all(&self.document, PROJECT_ITEM_SELECTOR)?;
        for (li, record) in items.into_iter().zip(self.config.projects.iter().cloned()) {
            dom::add_class(&li, PROJECT_ITEM_CLASS)?;
            let state = Rc::new(RefCell::new(ProjectItem::new(record)));
            let timeout: TimeoutSlot = Rc::new(RefCell::new(None));
            let doc = self.document.clone();

            bind_project_hover(&doc, &li, &state, "mouseenter", ProjectItem::enter)?;
            bind_project_hover(&doc, &li, &state, "mouseleave", ProjectItem::leave)?;

            let target = li.clone();
            dom::listen(&li, "click", move || {
                let token = state.borrow_mut().click();
                dom::report("projects", render_project(&doc, &target, &state.borrow()));

                let (doc, target, state) = (doc.clone(), target.clone(), Rc::clone(&state));
                let expiry = Timeout::new(PROJECT_NOTE_MS, move || {
                    if state.borrow_mut().expire(token) {
                        dom::report("projects", render_project(&doc, &target, &state.borrow()));
                    }
                });
                *timeout.borrow_mut() = Some(expiry);
            })?;
        }
        Ok(())
    }

    fn init_contact(&mut self) -> Result<(), WebError> {
        for link in dom::query_all(&self.document, CONTACT_LINK_SELECTOR)? {
            dom::add_class(&link, CONTACT_HOVER_CLASS)?;
            dom::set_style(&link, "transition", CONTACT_TRANSITION)?;
        }

        let Some(link) = dom::query(&self.document, MAILTO_LINK_SELECTOR)? else {
            return Ok(());
        };
        let Some(address) = link.get_attribute("href").as_deref().and_then(email_address).map(str::to_string) else {
            log::debug!("contact: mail link has no address");
            return Ok(());
        };

        let button = dom::create_with_text(&self.document, "button", COPY_LABEL)?;
        button.style().set_css_text(COPY_BUTTON_STYLE);
        link.after_with_node_1(&button)?;

        let state = Rc::new(RefCell::new(CopyButton::new(address, COPY_LABEL)));
        bind_copy_hover(&button, &state, "mouseenter", CopyButton::enter)?;
        bind_copy_hover(&button, &state, "mouseleave", CopyButton::leave)?;

        let timeout: TimeoutSlot = Rc::new(RefCell::new(None));
        let clipboard = Rc::clone(&self.clipboard);
        let target = button.clone();
        dom::listen(&button, "click", move || {
            let Some(token) = state.borrow_mut().click(&mut *clipboard.borrow_mut()) else {
                return;
            };
            dom::report("contact", render_copy_button(&target, &state.borrow()));

            let (target, state) = (target.clone(), Rc::clone(&state));
            let expiry = Timeout::new(COPY_FEEDBACK_MS, move || {
                if state.borrow_mut().expire(token) {
                    dom::report("contact", render_copy_button(&target, &state.borrow()));
                }
            });
            *timeout.borrow_mut() = Some(expiry);
        })
    }
}

/// Bind a stateless hover effect to `el`, starting from its idle look.
fn bind_hover(el: &HtmlElement, effect: HoverEffect) -> Result<(), WebError> {
    for (event, state) in [("mouseenter", HoverState::Hovering), ("mouseleave", HoverState::Idle)] {
        let target = el.clone();
        dom::listen(el, event, move || {
            dom::report("hover", dom::set_styles(&target, effect.declarations(state)));
        })?;
    }
    Ok(())
}

fn bind_project_hover(
    document: &Document,
    li: &HtmlElement,
    state: &Rc<RefCell<ProjectItem>>,
    event: &str,
    transition: fn(&mut ProjectItem),
) -> Result<(), WebError> {
    let (doc, target, state) = (document.clone(), li.clone(), Rc::clone(state));
    dom::listen(li, event, move || {
        transition(&mut *state.borrow_mut());
        dom::report("projects", render_project(&doc, &target, &state.borrow()));
    })
}

fn bind_copy_hover(
    button: &HtmlElement,
    state: &Rc<RefCell<CopyButton>>,
    event: &str,
    transition: fn(&mut CopyButton),
) -> Result<(), WebError> {
    let (target, state) = (button.clone(), Rc::clone(state));
    dom::listen(button, event, move || {
        transition(&mut *state.borrow_mut());
        dom::report("contact", render_copy_button(&target, &state.borrow()));
    })
}

/// Rebuild a project item's children: name, bold status, pending note.
fn render_project(document: &Document, li: &HtmlElement, item: &ProjectItem) -> Result<(), WebError> {
    let view = item.view();
    li.set_text_content(Some(view.name));
    if let Some(status) = view.status {
        li.append_with_str_1(" ")?;
        let strong = dom::create_with_text(document, "strong", &format!("({status})"))?;
        li.append_child(&strong)?;
    }
    if let Some(note) = view.note {
        let span = dom::create_with_text(document, "span", note)?;
        span.style().set_css_text(PROJECT_NOTE_STYLE);
        li.append_child(&span)?;
    }
    dom::set_style(li, "color", view.color)
}

fn render_copy_button(button: &HtmlElement, state: &CopyButton) -> Result<(), WebError> {
    let look = state.look();
    button.set_text_content(Some(look.label));
    dom::set_style(button, "background", look.background)?;
    dom::set_style(button, "color", look.color)
}

/// Copies through an off-screen `<textarea>` and `execCommand("copy")`.
struct StagingClipboard {
    document: Document,
}

impl StagingClipboard {
    fn stage_and_copy(&self, text: &str) -> Result<bool, WebError> {
        let body = self.document.body().ok_or(WebError::Missing("document.body"))?;
        let field: HtmlTextAreaElement = dom::create(&self.document, "textarea")?;
        field.set_value(text);
        field.style().set_css_text(STAGING_FIELD_STYLE);
        body.append_child(&field)?;
        field.select();

        let copied = self
            .document
            .dyn_ref::<HtmlDocument>()
            .ok_or(WebError::Cast("HtmlDocument"))
            .and_then(|doc| doc.exec_command("copy").map_err(WebError::from));
        field.remove();
        copied
    }
}

impl ClipboardSink for StagingClipboard {
    fn copy_text(&mut self, text: &str) -> bool {
        match self.stage_and_copy(text) {
            Ok(copied) => copied,
            Err(err) => {
                log::warn!("contact: copy failed: {err}");
                false
            }
        }
    }
}

/// Seed for the fact RNG, drawn from the JS engine.
#[allow(clippy::cast_possible_truncation, clippy::cast_sign_loss, clippy::cast_precision_loss)]
fn entropy_seed() -> u64 {
    let high = (js_sys::Math::random() * f64::from(u32::MAX)) as u64;
    let low = (js_sys::Math::random() * f64::from(u32::MAX)) as u64;
    (high << 32) | low
}
