//! Persisted light/dark theme.
//!
//! The initial theme is the stored preference when it is exactly `light` or
//! `dark`, otherwise the system color-scheme preference, otherwise light.
//! Toggling reads the theme currently applied to the page rather than the
//! stored value, so the two can never drift apart.
//!
//! [`ThemeManager`] owns both sides of the state: a [`PreferenceStore`] for
//! persistence and a [`ThemeSurface`] for what the page shows. The browser
//! build backs them with `localStorage` and the `<html>` element.

#[cfg(test)]
#[path = "theme_test.rs"]
mod theme_test;

use crate::error::BehaviorError;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Theme {
    #[default]
    Light,
    Dark,
}

impl Theme {
    #[must_use]
    pub fn as_str(self) -> &'static str {
        match self {
            Self::Light => "light",
            Self::Dark => "dark",
        }
    }

    /// Parse a stored value. Anything but the exact names is rejected.
    #[must_use]
    pub fn from_stored(value: &str) -> Option<Self> {
        match value {
            "light" => Some(Self::Light),
            "dark" => Some(Self::Dark),
            _ => None,
        }
    }

    #[must_use]
    pub fn opposite(self) -> Self {
        match self {
            Self::Light => Self::Dark,
            Self::Dark => Self::Light,
        }
    }

    /// Value for the toggle control's `aria-pressed` attribute.
    #[must_use]
    pub fn aria_pressed(self) -> &'static str {
        match self {
            Self::Light => "false",
            Self::Dark => "true",
        }
    }
}

/// Starting theme from the stored value and the system preference, if known.
#[must_use]
pub fn resolve_initial(stored: Option<&str>, system_prefers_dark: Option<bool>) -> Theme {
    if let Some(theme) = stored.and_then(Theme::from_stored) {
        return theme;
    }
    match system_prefers_dark {
        Some(true) => Theme::Dark,
        _ => Theme::Light,
    }
}

/// Where the chosen theme is remembered between visits.
pub trait PreferenceStore {
    /// The raw stored value, `None` when absent or unreadable.
    fn load(&self) -> Option<String>;
    fn save(&self, theme: Theme) -> Result<(), BehaviorError>;
}

/// The page-level presentation of the theme.
pub trait ThemeSurface {
    /// Theme currently applied to the page.
    fn applied(&self) -> Theme;
    fn apply(&self, theme: Theme) -> Result<(), BehaviorError>;
}

pub struct ThemeManager<S, V> {
    store: S,
    surface: V,
}

impl<S: PreferenceStore, V: ThemeSurface> ThemeManager<S, V> {
    pub fn new(store: S, surface: V) -> Self {
        Self { store, surface }
    }

    /// Resolve and apply the starting theme. Nothing is persisted.
    pub fn init(&self, system_prefers_dark: Option<bool>) -> Result<Theme, BehaviorError> {
        let theme = resolve_initial(self.store.load().as_deref(), system_prefers_dark);
        self.surface.apply(theme)?;
        Ok(theme)
    }

    #[must_use]
    pub fn current(&self) -> Theme {
        self.surface.applied()
    }

    /// Flip the applied theme, apply it, then persist it.
    ///
    /// A failed save is returned after the page already shows the new theme.
    pub fn toggle(&self) -> Result<Theme, BehaviorError> {
        let next = self.surface.applied().opposite();
        self.surface.apply(next)?;
        self.store.save(next)?;
        Ok(next)
    }
}

#[cfg(feature = "browser")]
pub use browser::setup_theme;

#[cfg(feature = "browser")]
mod browser {
    use std::rc::Rc;

    use wasm_bindgen::JsCast;
    use web_sys::{Element, KeyboardEvent, Storage, Window};

    use super::{PreferenceStore, Theme, ThemeManager, ThemeSurface};
    use crate::config::{SiteConfig, ThemeConfig};
    use crate::dom;
    use crate::error::BehaviorError;

    struct LocalPreferenceStore {
        storage: Option<Storage>,
        key: String,
    }

    impl PreferenceStore for LocalPreferenceStore {
        fn load(&self) -> Option<String> {
            self.storage.as_ref()?.get_item(&self.key).unwrap_or(None)
        }

        fn save(&self, theme: Theme) -> Result<(), BehaviorError> {
            let storage = self.storage.as_ref().ok_or_else(|| BehaviorError::Js("localStorage unavailable".to_owned()))?;
            storage.set_item(&self.key, theme.as_str())?;
            Ok(())
        }
    }

    struct DocumentSurface {
        root: Element,
        toggle: Option<Element>,
        config: ThemeConfig,
    }

    impl ThemeSurface for DocumentSurface {
        fn applied(&self) -> Theme {
            match self.root.get_attribute(&self.config.attribute).as_deref() {
                Some("dark") => Theme::Dark,
                _ => Theme::Light,
            }
        }

        fn apply(&self, theme: Theme) -> Result<(), BehaviorError> {
            match theme {
                Theme::Dark => self.root.set_attribute(&self.config.attribute, Theme::Dark.as_str())?,
                Theme::Light => self.root.remove_attribute(&self.config.attribute)?,
            }
            if let Some(toggle) = &self.toggle {
                let icon = match theme {
                    Theme::Dark => &self.config.dark_icon_html,
                    Theme::Light => &self.config.light_icon_html,
                };
                toggle.set_inner_html(icon);
                toggle.set_attribute("aria-pressed", theme.aria_pressed())?;
            }
            Ok(())
        }
    }

    fn system_prefers_dark(window: &Window) -> Option<bool> {
        let query = window.match_media("(prefers-color-scheme: dark)").unwrap_or(None)?;
        Some(query.matches())
    }

    /// Apply the starting theme and wire the toggle control, if the page has one.
    pub fn setup_theme(config: &SiteConfig) -> Result<(), BehaviorError> {
        let window = dom::window()?;
        let document = dom::document()?;
        let root = document.document_element().ok_or_else(|| BehaviorError::missing("html"))?;
        let toggle = document.get_element_by_id(&config.selectors.theme_toggle_id);

        let store = LocalPreferenceStore { storage: window.local_storage().unwrap_or(None), key: config.theme.storage_key.clone() };
        let surface = DocumentSurface { root, toggle: toggle.clone(), config: config.theme.clone() };
        let manager = Rc::new(ThemeManager::new(store, surface));
        let initial = manager.init(system_prefers_dark(&window))?;
        log::debug!("theme initialised: {}", initial.as_str());

        let Some(toggle) = toggle else {
            return Err(BehaviorError::missing(&config.selectors.theme_toggle_id));
        };
        {
            let manager = Rc::clone(&manager);
            dom::listen(&toggle, "click", move |_| {
                dom::report("theme toggle", manager.toggle().map(|_| ()));
            })?;
        }
        dom::listen(&toggle, "keydown", move |event| {
            let activates = event.dyn_ref::<KeyboardEvent>().is_some_and(|k| matches!(k.key().as_str(), "Enter" | " "));
            if activates {
                event.prevent_default();
                dom::report("theme toggle", manager.toggle().map(|_| ()));
            }
        })?;
        log::debug!("theme toggle wired");
        Ok(())
    }
}
