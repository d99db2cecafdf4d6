//! "Copy Email" button on the contact page.

use crate::consts::{ACCENT_CYAN, ACCENT_MINT, COPIED_LABEL, INK_DARK, INK_DARKEST, MAILTO_PREFIX};
use crate::widgets::hover::{COPY_BUTTON_HOVER, HoverState};
use crate::widgets::timer::{TimerSlot, TimerToken};

#[cfg(test)]
#[path = "copy_email_test.rs"]
mod copy_email_test;

/// Platform clipboard, fed through a staging field in the browser.
pub trait ClipboardSink {
    /// Copy `text`. Returns `false` when the platform refused.
    fn copy_text(&mut self, text: &str) -> bool;
}

/// Raw address from a `mailto:` href, without the scheme or any `?query`.
#[must_use]
pub fn email_address(href: &str) -> Option<&str> {
    let head = href.get(..MAILTO_PREFIX.len())?;
    if !head.eq_ignore_ascii_case(MAILTO_PREFIX) {
        return None;
    }
    let rest = &href[MAILTO_PREFIX.len()..];
    let address = rest.split_once('?').map_or(rest, |(address, _)| address).trim();
    (!address.is_empty()).then_some(address)
}

/// Label and colors the button should show.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct ButtonLook<'a> {
    pub label: &'a str,
    pub background: &'static str,
    pub color: &'static str,
}

#[derive(Clone, Debug)]
pub struct CopyButton {
    address: String,
    label: String,
    hover: HoverState,
    feedback: TimerSlot,
}

impl CopyButton {
    pub fn new(address: impl Into<String>, label: impl Into<String>) -> Self {
        Self { address: address.into(), label: label.into(), hover: HoverState::Idle, feedback: TimerSlot::new() }
    }

    /// Copy the address and start (or restart) the success window.
    ///
    /// Returns `None` when the copy failed; the button keeps its current look.
    pub fn click<C: ClipboardSink + ?Sized>(&mut self, clipboard: &mut C) -> Option<TimerToken> {
        if !clipboard.copy_text(&self.address) {
            log::warn!("copy email: clipboard copy was refused");
            return None;
        }
        Some(self.feedback.arm())
    }

    /// Success window expiry. Returns `true` when the button reverted.
    pub fn expire(&mut self, token: TimerToken) -> bool {
        self.feedback.fire(token)
    }

    pub fn enter(&mut self) {
        self.hover = HoverState::Hovering;
    }

    pub fn leave(&mut self) {
        self.hover = HoverState::Idle;
    }

    #[must_use]
    pub fn is_showing_success(&self) -> bool {
        self.feedback.is_armed()
    }

    #[must_use]
    pub fn look(&self) -> ButtonLook<'_> {
        if self.is_showing_success() {
            return ButtonLook { label: COPIED_LABEL, background: ACCENT_MINT, color: INK_DARKEST };
        }
        let background = COPY_BUTTON_HOVER
            .declarations(self.hover)
            .next()
            .map_or(ACCENT_CYAN, |(_, value)| value);
        ButtonLook { label: &self.label, background, color: INK_DARK }
    }
}
