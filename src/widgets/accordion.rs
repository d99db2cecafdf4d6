//! Education page accordion: at most one detail panel open.

#[cfg(test)]
#[path = "accordion_test.rs"]
mod accordion_test;

#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct Accordion {
    len: usize,
    open: Option<usize>,
}

impl Accordion {
    /// An accordion over `len` panels, all closed.
    #[must_use]
    pub fn new(len: usize) -> Self {
        Self { len, open: None }
    }

    /// Click on item `index`: flip its panel and close every other one.
    ///
    /// Returns the open panel afterwards. Clicks outside the list change nothing.
    pub fn click(&mut self, index: usize) -> Option<usize> {
        if index >= self.len {
            return self.open;
        }
        self.open = if self.open == Some(index) { None } else { Some(index) };
        self.open
    }

    #[must_use]
    pub fn is_open(&self, index: usize) -> bool {
        self.open == Some(index)
    }
}
