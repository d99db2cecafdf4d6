//! `localStorage` and `<body>` bindings for the theme controller.

use web_sys::{Document, HtmlElement, Storage};

use super::WebError;
use super::dom;
use crate::consts::{DARK_MODE_CLASS, THEME_TOGGLE_CLASS};
use crate::theme::{PreferenceStore, ThemeController, ThemeSurface};

/// `localStorage`, when the browser grants it.
struct LocalStore {
    storage: Option<Storage>,
}

impl LocalStore {
    fn open() -> Self {
        let storage = match web_sys::window().map(|w| w.local_storage()) {
            Some(Ok(storage)) => storage,
            Some(Err(err)) => {
                log::warn!("theme: localStorage unavailable: {}", WebError::from(err));
                None
            }
            None => None,
        };
        Self { storage }
    }
}

impl PreferenceStore for LocalStore {
    fn get(&self, key: &str) -> Option<String> {
        let storage = self.storage.as_ref()?;
        match storage.get_item(key) {
            Ok(value) => value,
            Err(err) => {
                log::warn!("theme: read {key}: {}", WebError::from(err));
                None
            }
        }
    }

    fn set(&mut self, key: &str, value: &str) {
        let Some(storage) = self.storage.as_ref() else {
            return;
        };
        if let Err(err) = storage.set_item(key, value) {
            log::warn!("theme: write {key}: {}", WebError::from(err));
        }
    }
}

/// `<body>` class list plus the injected toggle button.
struct BodySurface {
    body: HtmlElement,
    toggle: Option<HtmlElement>,
}

impl ThemeSurface for BodySurface {
    fn set_dark(&mut self, dark: bool) {
        let classes = self.body.class_list();
        let result = if dark { classes.add_1(DARK_MODE_CLASS) } else { classes.remove_1(DARK_MODE_CLASS) };
        if let Err(err) = result {
            log::warn!("theme: set class: {}", WebError::from(err));
        }
    }

    fn toggle_dark(&mut self) -> bool {
        let classes = self.body.class_list();
        match classes.toggle(DARK_MODE_CLASS) {
            Ok(present) => present,
            Err(err) => {
                log::warn!("theme: toggle class: {}", WebError::from(err));
                classes.contains(DARK_MODE_CLASS)
            }
        }
    }

    fn set_toggle_label(&mut self, label: &str) -> bool {
        let Some(toggle) = &self.toggle else {
            return false;
        };
        toggle.set_text_content(Some(label));
        true
    }
}

/// Inject the toggle button, apply the stored theme, and bind the click.
pub fn install(document: &Document, body: &HtmlElement, storage_key: &str) -> Result<(), WebError> {
    let button: HtmlElement = dom::create(document, "button")?;
    dom::add_class(&button, THEME_TOGGLE_CLASS)?;
    body.append_child(&button)?;

    let surface = BodySurface { body: body.clone(), toggle: Some(button.clone()) };
    let mut controller = ThemeController::new(LocalStore::open(), surface, storage_key);
    let theme = controller.apply_stored();
    log::debug!("theme: applied stored {}", theme.as_str());

    dom::listen(&button, "click", move || {
        controller.toggle();
    })
}
