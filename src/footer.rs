//! Footer line content.
//!
//! The browser layer turns [`FooterContent`] into a `<footer>` with a
//! trailing `<span id="last-updated">`; both parts are set as text nodes.

#[cfg(test)]
#[path = "footer_test.rs"]
mod footer_test;

/// Text content for the injected footer.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct FooterContent {
    pub year: i32,
    pub owner: String,
    /// The document's last-modified descriptor, shown verbatim.
    pub last_modified: String,
}

impl FooterContent {
    pub fn new(year: i32, owner: impl Into<String>, last_modified: impl Into<String>) -> Self {
        Self { year, owner: owner.into(), last_modified: last_modified.into() }
    }

    /// Copyright text preceding the last-updated span.
    #[must_use]
    pub fn copyright(&self) -> String {
        format!("© {} {}. All rights reserved. | ", self.year, self.owner)
    }

    /// Text of the last-updated span.
    #[must_use]
    pub fn last_updated(&self) -> String {
        format!("Last Updated: {}", self.last_modified)
    }
}
