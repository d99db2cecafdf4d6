//! Active navigation link selection.

#[cfg(test)]
#[path = "nav_test.rs"]
mod nav_test;

/// Last segment of a URL path, or `home` when the path ends in `/`.
#[must_use]
pub fn current_page<'a>(pathname: &'a str, home: &'a str) -> &'a str {
    match pathname.rsplit('/').next() {
        Some(segment) if !segment.is_empty() => segment,
        _ => home,
    }
}

/// Index of the first link whose target equals `page`.
///
/// Links without a target never match.
#[must_use]
pub fn active_link<S: AsRef<str>>(hrefs: &[Option<S>], page: &str) -> Option<usize> {
    hrefs
        .iter()
        .position(|href| href.as_ref().is_some_and(|h| h.as_ref() == page))
}
