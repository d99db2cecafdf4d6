//! Project list items: status on hover, transient note on click.
//!
//! DESIGN
//! ======
//! Rendered text is derived from explicit state (hover + pending note) and
//! never read back from the DOM. A hover-leave re-renders the plain name but
//! keeps a pending note; the note goes away only when its own latest timer
//! expires. A second click while the note is up restarts the timer.

use crate::config::ProjectRecord;
use crate::consts::{ACCENT_MINT, PROJECT_NOTE_TEXT};
use crate::widgets::hover::HoverState;
use crate::widgets::timer::{TimerSlot, TimerToken};

#[cfg(test)]
#[path = "projects_test.rs"]
mod projects_test;

/// What a project list item should display.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct ItemView<'a> {
    pub name: &'a str,
    /// Shown in bold after the name while hovered.
    pub status: Option<&'a str>,
    /// Inline text color; empty means inherit.
    pub color: &'static str,
    /// Trailing "interaction noted" tag, if pending.
    pub note: Option<&'static str>,
}

#[derive(Clone, Debug)]
pub struct ProjectItem {
    record: ProjectRecord,
    hover: HoverState,
    note: TimerSlot,
}

impl ProjectItem {
    #[must_use]
    pub fn new(record: ProjectRecord) -> Self {
        Self { record, hover: HoverState::Idle, note: TimerSlot::new() }
    }

    pub fn enter(&mut self) {
        self.hover = HoverState::Hovering;
    }

    pub fn leave(&mut self) {
        self.hover = HoverState::Idle;
    }

    /// Show the note and (re)start its timer.
    pub fn click(&mut self) -> TimerToken {
        log::info!("You clicked: {}. Status: {}", self.record.name, self.record.status);
        self.note.arm()
    }

    /// Timer expiry. Returns `true` when the note was removed.
    pub fn expire(&mut self, token: TimerToken) -> bool {
        self.note.fire(token)
    }

    #[must_use]
    pub fn view(&self) -> ItemView<'_> {
        let hovering = self.hover.is_hovering();
        ItemView {
            name: &self.record.name,
            status: hovering.then_some(self.record.status.as_str()),
            color: if hovering { ACCENT_MINT } else { "" },
            note: self.note.is_armed().then_some(PROJECT_NOTE_TEXT),
        }
    }
}
