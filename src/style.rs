//! Stylesheet injected into `<head>` on every page.
//!
//! Covers the theme toggle button, the dark palette, the active nav marker,
//! card and list hover affordances, and the accordion open/closed states.
//! The browser layer attaches it under [`crate::consts::STYLE_ELEMENT_ID`]
//! and skips the attach when that element is already present.

#[cfg(test)]
#[path = "style_test.rs"]
mod style_test;

pub const STYLESHEET: &str = r"
.theme-toggle {
    position: fixed;
    top: 20px;
    right: 20px;
    background: #00bcd4;
    color: #222;
    border: none;
    padding: 10px 15px;
    border-radius: 25px;
    cursor: pointer;
    font-weight: bold;
    box-shadow: 0 4px 10px rgba(0, 0, 0, 0.3);
    transition: background 0.3s, transform 0.1s;
    z-index: 1000;
}
.theme-toggle:hover {
    background: #0097a7;
    transform: scale(1.05);
}

body.dark-mode {
    background: #121212 !important;
    color: #e0e0e0;
}
body.dark-mode nav {
    background: #1f1f1f;
}
body.dark-mode nav ul li a {
    color: #e0e0e0;
}
body.dark-mode nav ul li a:hover {
    color: #64ffda;
}
body.dark-mode h1, body.dark-mode h2 {
    color: #bb86fc;
}

.nav-link-active {
    border-bottom: 3px solid #00bcd4;
    padding-bottom: 5px;
}
.interactive-card:hover {
    transform: scale(1.03);
    box-shadow: 0 10px 20px rgba(0, 188, 212, 0.4);
    transition: all 0.3s ease-in-out;
    cursor: pointer;
}

.edu-item-detail {
    max-height: 0;
    overflow: hidden;
    transition: max-height 0.5s ease-out, opacity 0.3s;
    opacity: 0;
    padding-left: 15px;
    border-left: 2px solid #bb86fc;
    margin-top: 5px;
    font-size: 0.9em;
}
.edu-item-detail.open {
    max-height: 200px;
    opacity: 1;
    padding: 10px 15px 5px 15px;
}

.project-item:hover {
    background: rgba(0, 188, 212, 0.1);
    border-radius: 5px;
    transition: background 0.3s;
}
.contact-link-hover:hover {
    text-shadow: 0 0 8px #64ffda;
    transform: translateX(5px);
}
";

/// Inline style for the injected footer element.
pub const FOOTER_STYLE: &str =
    "text-align: center; padding: 15px; background: rgba(0, 0, 0, 0.3); font-size: 0.9em; margin-top: 30px;";

/// Inline style for the fun-fact button.
pub const FACT_BUTTON_STYLE: &str = "background: #bb86fc; color: white; border: none; padding: 10px 20px; \
     border-radius: 5px; cursor: pointer; margin-top: 20px; transition: background 0.3s;";

/// Inline style for the fun-fact display paragraph.
pub const FACT_DISPLAY_STYLE: &str = "margin-top: 15px; font-style: italic; color: #64ffda; min-height: 20px;";

/// Inline style for the copy-email button.
pub const COPY_BUTTON_STYLE: &str = "background: #00bcd4; color: #222; border: none; padding: 10px 20px; \
     border-radius: 5px; cursor: pointer; margin-top: 20px; transition: background 0.3s, transform 0.1s; \
     font-weight: bold;";

/// Inline style for the transient project note.
pub const PROJECT_NOTE_STYLE: &str = "color: #bb86fc; margin-left: 10px; font-size: 0.9em;";

/// Keeps the clipboard staging field out of view.
pub const STAGING_FIELD_STYLE: &str = "position: fixed; top: 0; left: -9999px; opacity: 0;";

pub const PROFILE_TRANSITION: &str = "transform 0.3s, filter 0.3s";
pub const CONTACT_TRANSITION: &str = "all 0.3s ease-out";
