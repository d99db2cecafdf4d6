//! Light/dark theme preference and toggle.
//!
//! DESIGN
//! ======
//! The controller never keeps its own copy of the current theme. Reads go to
//! the [`PreferenceStore`]; after a toggle the new theme is derived from the
//! [`ThemeSurface`]'s post-toggle class membership, persisted, and then
//! re-applied from storage so the toggle label always matches what is stored.

use crate::consts::{LABEL_SWITCH_TO_DARK, LABEL_SWITCH_TO_LIGHT};

#[cfg(test)]
#[path = "theme_test.rs"]
mod theme_test;

/// The two presentation modes.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash)]
pub enum Theme {
    #[default]
    Light,
    Dark,
}

impl Theme {
    /// Stored string form.
    #[must_use]
    pub fn as_str(self) -> &'static str {
        match self {
            Self::Light => "light",
            Self::Dark => "dark",
        }
    }

    /// Interpret a stored value. Absent or unrecognized values mean light.
    #[must_use]
    pub fn from_stored(raw: Option<&str>) -> Self {
        match raw {
            Some("dark") => Self::Dark,
            _ => Self::Light,
        }
    }

    #[must_use]
    pub fn from_dark(dark: bool) -> Self {
        if dark { Self::Dark } else { Self::Light }
    }

    #[must_use]
    pub fn is_dark(self) -> bool {
        self == Self::Dark
    }

    /// Label for the toggle button: names the mode a click switches to.
    #[must_use]
    pub fn toggle_label(self) -> &'static str {
        match self {
            Self::Light => LABEL_SWITCH_TO_DARK,
            Self::Dark => LABEL_SWITCH_TO_LIGHT,
        }
    }
}

/// Key-value persistence for the preference (`localStorage` in the browser).
pub trait PreferenceStore {
    fn get(&self, key: &str) -> Option<String>;
    fn set(&mut self, key: &str, value: &str);
}

/// The document-side presentation state the controller drives.
pub trait ThemeSurface {
    /// Add or remove the dark presentation class.
    fn set_dark(&mut self, dark: bool);

    /// Flip the dark presentation class and report whether it is now present.
    fn toggle_dark(&mut self) -> bool;

    /// Set the toggle control's label. Returns `false` when there is no control.
    fn set_toggle_label(&mut self, label: &str) -> bool;
}

/// Applies and toggles the stored theme on a surface.
#[derive(Debug)]
pub struct ThemeController<S, D> {
    store: S,
    surface: D,
    key: String,
}

impl<S: PreferenceStore, D: ThemeSurface> ThemeController<S, D> {
    pub fn new(store: S, surface: D, key: impl Into<String>) -> Self {
        Self { store, surface, key: key.into() }
    }

    /// The persisted theme, defaulting to light.
    #[must_use]
    pub fn stored(&self) -> Theme {
        Theme::from_stored(self.store.get(&self.key).as_deref())
    }

    /// Apply the persisted theme to the surface and refresh the toggle label.
    pub fn apply_stored(&mut self) -> Theme {
        let theme = self.stored();
        self.surface.set_dark(theme.is_dark());
        if !self.surface.set_toggle_label(theme.toggle_label()) {
            log::debug!("theme: no toggle control, label skipped");
        }
        theme
    }

    /// Flip the theme, persist the result, and re-apply it.
    pub fn toggle(&mut self) -> Theme {
        let next = Theme::from_dark(self.surface.toggle_dark());
        self.store.set(&self.key, next.as_str());
        log::debug!("theme: switched to {}", next.as_str());
        self.apply_stored()
    }
}
