//! Page identity and widget dispatch.
//!
//! Each page of the site activates exactly one widget set. The host names
//! the page explicitly (`data-page` on `<body>` or an entry-point argument);
//! scanning the body class list is only a fallback for older markup.

use std::fmt;
use std::str::FromStr;

#[cfg(test)]
#[path = "page_test.rs"]
mod page_test;

/// The page being enhanced.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum PageMode {
    About,
    Education,
    Skills,
    Projects,
    Contact,
}

/// Returned when a marker token names no known page.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[error("unknown page marker: {0:?}")]
pub struct UnknownPage(pub String);

impl PageMode {
    pub const ALL: [Self; 5] = [Self::About, Self::Education, Self::Skills, Self::Projects, Self::Contact];

    #[must_use]
    pub fn as_str(self) -> &'static str {
        match self {
            Self::About => "about",
            Self::Education => "education",
            Self::Skills => "skills",
            Self::Projects => "projects",
            Self::Contact => "contact",
        }
    }

    /// First whitespace-separated token of `classes` naming a page.
    #[must_use]
    pub fn from_class_list(classes: &str) -> Option<Self> {
        classes.split_whitespace().find_map(Self::lookup)
    }

    /// Pick the page from its possible sources, in precedence order: the
    /// explicit marker, then `data-page`, then the body class list.
    ///
    /// An unrecognized marker is skipped, not fatal.
    #[must_use]
    pub fn resolve(explicit: Option<&str>, data_page: Option<&str>, classes: &str) -> Option<Self> {
        for marker in [explicit, data_page].into_iter().flatten() {
            match marker.parse() {
                Ok(mode) => return Some(mode),
                Err(err) => log::warn!("page: {err}"),
            }
        }
        Self::from_class_list(classes)
    }

    fn lookup(token: &str) -> Option<Self> {
        Self::ALL.into_iter().find(|mode| mode.as_str().eq_ignore_ascii_case(token))
    }
}

impl FromStr for PageMode {
    type Err = UnknownPage;

    fn from_str(raw: &str) -> Result<Self, Self::Err> {
        let token = raw.trim();
        Self::lookup(token).ok_or_else(|| UnknownPage(token.to_string()))
    }
}

impl fmt::Display for PageMode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Per-page widget initializers, implemented by the browser layer.
pub trait PageWidgets {
    type Error;

    fn init_about(&mut self) -> Result<(), Self::Error>;
    fn init_education(&mut self) -> Result<(), Self::Error>;
    fn init_skills(&mut self) -> Result<(), Self::Error>;
    fn init_projects(&mut self) -> Result<(), Self::Error>;
    fn init_contact(&mut self) -> Result<(), Self::Error>;
}

/// Run the one widget initializer matching `mode`. `None` initializes nothing.
pub fn dispatch<W: PageWidgets>(mode: Option<PageMode>, widgets: &mut W) -> Result<(), W::Error> {
    let Some(mode) = mode else {
        log::debug!("page: no page marker, skipping widgets");
        return Ok(());
    };
    log::debug!("page: initializing {mode} widgets");
    match mode {
        PageMode::About => widgets.init_about(),
        PageMode::Education => widgets.init_education(),
        PageMode::Skills => widgets.init_skills(),
        PageMode::Projects => widgets.init_projects(),
        PageMode::Contact => widgets.init_contact(),
    }
}
