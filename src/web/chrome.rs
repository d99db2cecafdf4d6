//! Page chrome shared by every page: stylesheet, footer, nav highlight.

use web_sys::{Document, HtmlElement};

use super::WebError;
use super::dom;
use crate::consts::{FOOTER_CLASS, LAST_UPDATED_ID, NAV_ACTIVE_CLASS, NAV_LINK_SELECTOR, STYLE_ELEMENT_ID};
use crate::footer::FooterContent;
use crate::nav;
use crate::style::{FOOTER_STYLE, STYLESHEET};

#[cfg(test)]
#[path = "chrome_test.rs"]
mod chrome_test;

/// Attach the stylesheet to `<head>` unless it is already there.
pub fn inject_style(document: &Document) -> Result<(), WebError> {
    if document.get_element_by_id(STYLE_ELEMENT_ID).is_some() {
        log::debug!("style: already injected");
        return Ok(());
    }
    let head = document.head().ok_or(WebError::Missing("document.head"))?;
    let style = dom::create_with_text(document, "style", STYLESHEET)?;
    style.set_id(STYLE_ELEMENT_ID);
    head.append_child(&style)?;
    Ok(())
}

/// Append the copyright / last-updated footer to `<body>`.
pub fn append_footer(document: &Document, body: &HtmlElement, owner: &str) -> Result<(), WebError> {
    let year = i32::try_from(js_sys::Date::new_0().get_full_year()).unwrap_or(i32::MAX);
    let content = FooterContent::new(year, owner, document.last_modified());

    let footer = dom::create_with_text(document, "footer", &content.copyright())?;
    dom::add_class(&footer, FOOTER_CLASS)?;
    footer.style().set_css_text(FOOTER_STYLE);

    let updated = dom::create_with_text(document, "span", &content.last_updated())?;
    updated.set_id(LAST_UPDATED_ID);
    footer.append_child(&updated)?;
    body.append_child(&footer)?;
    Ok(())
}

/// Mark the nav link pointing at the current page.
pub fn highlight_nav(document: &Document, home_page: &str) -> Result<(), WebError> {
    let window = web_sys::window().ok_or(WebError::Missing("window"))?;
    let pathname = window.location().pathname()?;
    let page = nav::current_page(&pathname, home_page);

    let links = dom::query_all(document, NAV_LINK_SELECTOR)?;
    let hrefs: Vec<Option<String>> = links.iter().map(|link| link.get_attribute("href")).collect();
    match nav::active_link(&hrefs, page) {
        Some(index) => {
            if let Some(link) = links.get(index) {
                dom::add_class(link, NAV_ACTIVE_CLASS)?;
            }
        }
        None => log::debug!("nav: no link for {page}"),
    }
    Ok(())
}
