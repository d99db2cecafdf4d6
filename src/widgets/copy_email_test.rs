use super::*;

// =============================================================
// Helpers
// =============================================================

#[derive(Default)]
struct RecordingClipboard {
    staged: Vec<String>,
    refuse: bool,
}

impl ClipboardSink for RecordingClipboard {
    fn copy_text(&mut self, text: &str) -> bool {
        self.staged.push(text.to_string());
        !self.refuse
    }
}

fn button() -> CopyButton {
    CopyButton::new("ada@example.com", "📋 Copy Email")
}

// =============================================================
// email_address
// =============================================================

#[test]
fn strips_mailto_prefix() {
    assert_eq!(email_address("mailto:ada@example.com"), Some("ada@example.com"));
}

#[test]
fn prefix_match_ignores_case() {
    assert_eq!(email_address("MAILTO:ada@example.com"), Some("ada@example.com"));
}

#[test]
fn drops_query_suffix() {
    assert_eq!(email_address("mailto:ada@example.com?subject=Hi"), Some("ada@example.com"));
}

#[test]
fn rejects_non_mail_links_and_empty_address() {
    assert_eq!(email_address("https://example.com"), None);
    assert_eq!(email_address("mail"), None);
    assert_eq!(email_address("mailto:"), None);
    assert_eq!(email_address("mailto:?subject=Hi"), None);
}

// =============================================================
// CopyButton
// =============================================================

#[test]
fn idle_look_is_original_label() {
    let button = button();
    let look = button.look();
    assert_eq!(look.label, "📋 Copy Email");
    assert_eq!(look.background, "#00bcd4");
    assert_eq!(look.color, "#222");
}

#[test]
fn click_stages_exact_address() {
    let mut clipboard = RecordingClipboard::default();
    let mut button = button();
    assert!(button.click(&mut clipboard).is_some());
    assert_eq!(clipboard.staged, vec!["ada@example.com".to_string()]);
}

#[test]
fn success_look_reverts_after_expiry() {
    let mut clipboard = RecordingClipboard::default();
    let mut button = button();
    let token = button.click(&mut clipboard).unwrap();
    let look = button.look();
    assert_eq!(look.label, "✅ Copied!");
    assert_eq!(look.background, "#64ffda");
    assert_eq!(look.color, "#121212");

    assert!(button.expire(token));
    assert_eq!(button.look().label, "📋 Copy Email");
    assert_eq!(button.look().color, "#222");
}

#[test]
fn double_click_restarts_window_and_keeps_original_label() {
    let mut clipboard = RecordingClipboard::default();
    let mut button = button();
    let first = button.click(&mut clipboard).unwrap();
    let second = button.click(&mut clipboard).unwrap();

    assert!(!button.expire(first));
    assert!(button.is_showing_success());
    assert!(button.expire(second));
    assert_eq!(button.look().label, "📋 Copy Email");
}

#[test]
fn refused_copy_shows_no_feedback() {
    let mut clipboard = RecordingClipboard { refuse: true, ..RecordingClipboard::default() };
    let mut button = button();
    assert!(button.click(&mut clipboard).is_none());
    assert!(!button.is_showing_success());
    assert_eq!(button.look().label, "📋 Copy Email");
}

#[test]
fn hover_darkens_background_outside_success_window() {
    let mut clipboard = RecordingClipboard::default();
    let mut button = button();
    button.enter();
    assert_eq!(button.look().background, "#0097a7");

    let token = button.click(&mut clipboard).unwrap();
    assert_eq!(button.look().background, "#64ffda");
    button.leave();
    assert!(button.expire(token));
    assert_eq!(button.look().background, "#00bcd4");
}
