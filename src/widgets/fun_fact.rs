//! "Reveal a Fun Fact!" button on the about page.

use rand::Rng;

#[cfg(test)]
#[path = "fun_fact_test.rs"]
mod fun_fact_test;

/// Fixed fact list drawn from at random.
#[derive(Clone, Debug)]
pub struct FactDeck {
    facts: Vec<String>,
}

impl FactDeck {
    #[must_use]
    pub fn new(facts: Vec<String>) -> Self {
        Self { facts }
    }

    /// Pick a uniformly random fact.
    ///
    /// Draws are independent, so the same fact may come up twice in a row.
    /// An empty deck draws nothing.
    pub fn draw<R: Rng + ?Sized>(&self, rng: &mut R) -> Option<&str> {
        if self.facts.is_empty() {
            return None;
        }
        let index = rng.random_range(0..self.facts.len());
        self.facts.get(index).map(String::as_str)
    }
}
