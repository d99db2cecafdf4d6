use super::*;
use crate::consts;

#[test]
fn stylesheet_covers_every_injected_class() {
    for class in [
        consts::THEME_TOGGLE_CLASS,
        consts::DARK_MODE_CLASS,
        consts::NAV_ACTIVE_CLASS,
        consts::INTERACTIVE_CARD_CLASS,
        consts::EDU_DETAIL_CLASS,
        consts::PROJECT_ITEM_CLASS,
        consts::CONTACT_HOVER_CLASS,
    ] {
        assert!(STYLESHEET.contains(&format!(".{class}")), "missing rule for .{class}");
    }
}

#[test]
fn accordion_has_distinct_open_rule() {
    assert!(STYLESHEET.contains(".edu-item-detail.open"));
}

#[test]
fn inline_styles_end_with_semicolon() {
    for style in [FOOTER_STYLE, FACT_BUTTON_STYLE, FACT_DISPLAY_STYLE, COPY_BUTTON_STYLE, PROJECT_NOTE_STYLE] {
        assert!(style.trim_end().ends_with(';'), "{style}");
    }
}
