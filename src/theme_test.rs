use std::cell::RefCell;

use super::*;

#[derive(Default)]
struct MemoryStore {
    value: RefCell<Option<String>>,
}

impl MemoryStore {
    fn with(value: &str) -> Self {
        Self { value: RefCell::new(Some(value.to_owned())) }
    }
}

impl PreferenceStore for MemoryStore {
    fn load(&self) -> Option<String> {
        self.value.borrow().clone()
    }

    fn save(&self, theme: Theme) -> Result<(), BehaviorError> {
        *self.value.borrow_mut() = Some(theme.as_str().to_owned());
        Ok(())
    }
}

/// Storage that is present in name only, like `localStorage` in a locked-down browser.
struct UnavailableStore;

impl PreferenceStore for UnavailableStore {
    fn load(&self) -> Option<String> {
        None
    }

    fn save(&self, _theme: Theme) -> Result<(), BehaviorError> {
        Err(BehaviorError::Js("localStorage unavailable".to_owned()))
    }
}

/// Stands in for the `data-theme` attribute on `<html>`.
#[derive(Default)]
struct FakeRoot {
    marker: RefCell<Option<String>>,
    pressed: RefCell<Option<&'static str>>,
}

impl ThemeSurface for FakeRoot {
    fn applied(&self) -> Theme {
        match self.marker.borrow().as_deref() {
            Some("dark") => Theme::Dark,
            _ => Theme::Light,
        }
    }

    fn apply(&self, theme: Theme) -> Result<(), BehaviorError> {
        *self.marker.borrow_mut() = match theme {
            Theme::Dark => Some("dark".to_owned()),
            Theme::Light => None,
        };
        *self.pressed.borrow_mut() = Some(theme.aria_pressed());
        Ok(())
    }
}

#[test]
fn stored_value_must_be_exact() {
    assert_eq!(Theme::from_stored("dark"), Some(Theme::Dark));
    assert_eq!(Theme::from_stored("light"), Some(Theme::Light));
    assert_eq!(Theme::from_stored("Dark"), None);
    assert_eq!(Theme::from_stored(" dark"), None);
    assert_eq!(Theme::from_stored("true"), None);
}

#[test]
fn stored_preference_beats_system_preference() {
    assert_eq!(resolve_initial(Some("light"), Some(true)), Theme::Light);
    assert_eq!(resolve_initial(Some("dark"), Some(false)), Theme::Dark);
}

#[test]
fn invalid_stored_value_falls_back_to_system() {
    assert_eq!(resolve_initial(Some("sepia"), Some(true)), Theme::Dark);
}

#[test]
fn unknown_system_preference_defaults_to_light() {
    assert_eq!(resolve_initial(None, None), Theme::Light);
    assert_eq!(resolve_initial(None, Some(false)), Theme::Light);
}

#[test]
fn system_dark_then_toggle_persists_light_and_clears_marker() {
    let manager = ThemeManager::new(MemoryStore::default(), FakeRoot::default());

    assert_eq!(manager.init(Some(true)).unwrap(), Theme::Dark);
    assert_eq!(manager.surface.marker.borrow().as_deref(), Some("dark"));
    assert_eq!(*manager.store.value.borrow(), None);

    assert_eq!(manager.toggle().unwrap(), Theme::Light);
    assert_eq!(manager.store.value.borrow().as_deref(), Some("light"));
    assert_eq!(*manager.surface.marker.borrow(), None);
    assert_eq!(*manager.surface.pressed.borrow(), Some("false"));
}

#[test]
fn toggle_reads_applied_theme_not_storage() {
    let manager = ThemeManager::new(MemoryStore::with("dark"), FakeRoot::default());
    // The page shows light even though storage says dark.
    assert_eq!(manager.current(), Theme::Light);
    assert_eq!(manager.toggle().unwrap(), Theme::Dark);
    assert_eq!(manager.store.value.borrow().as_deref(), Some("dark"));
}

#[test]
fn toggling_twice_returns_to_start() {
    let manager = ThemeManager::new(MemoryStore::with("light"), FakeRoot::default());
    manager.init(None).unwrap();
    manager.toggle().unwrap();
    manager.toggle().unwrap();
    assert_eq!(manager.current(), Theme::Light);
    assert_eq!(manager.store.value.borrow().as_deref(), Some("light"));
}

#[test]
fn aria_pressed_tracks_dark() {
    assert_eq!(Theme::Dark.aria_pressed(), "true");
    assert_eq!(Theme::Light.aria_pressed(), "false");
}

#[test]
fn toggle_still_applies_when_storage_fails() {
    let manager = ThemeManager::new(UnavailableStore, FakeRoot::default());
    assert_eq!(manager.init(None).unwrap(), Theme::Light);

    let err = manager.toggle().unwrap_err();
    assert!(matches!(err, BehaviorError::Js(_)));
    assert_eq!(manager.current(), Theme::Dark);
    assert_eq!(manager.surface.marker.borrow().as_deref(), Some("dark"));

    assert!(manager.toggle().is_err());
    assert_eq!(manager.current(), Theme::Light);
}
