//! Mobile navigation menu and active-link-by-path marking.
//!
//! The menu is wired only when the page carries both the toggle and the
//! link list; both are resolved before any listener is attached, so a page
//! missing either ends up with no menu listeners at all.

#[cfg(test)]
#[path = "nav_test.rs"]
mod nav_test;

use crate::config::Selectors;
use crate::consts::DEFAULT_PAGE;
use crate::error::BehaviorError;

/// Whether the collapsible link list is showing.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum NavState {
    #[default]
    Closed,
    Open,
}

impl NavState {
    #[must_use]
    pub fn from_open(open: bool) -> Self {
        if open { Self::Open } else { Self::Closed }
    }

    #[must_use]
    pub fn is_open(self) -> bool {
        self == Self::Open
    }

    /// State after the toggle button is activated.
    #[must_use]
    pub fn toggled(self) -> Self {
        match self {
            Self::Open => Self::Closed,
            Self::Closed => Self::Open,
        }
    }

    /// Value for the toggle button's `aria-expanded` attribute.
    #[must_use]
    pub fn aria_expanded(self) -> &'static str {
        if self.is_open() { "true" } else { "false" }
    }
}

/// Pair the menu toggle with its link list, or name the first one missing.
pub fn menu_parts<E>(toggle: Option<E>, links: Option<E>, selectors: &Selectors) -> Result<(E, E), BehaviorError> {
    let toggle = toggle.ok_or_else(|| BehaviorError::missing(&selectors.menu_toggle))?;
    let links = links.ok_or_else(|| BehaviorError::missing(&selectors.nav_links))?;
    Ok((toggle, links))
}

/// File name of the current page, `index.html` for a directory path.
#[must_use]
pub fn page_file_name(pathname: &str) -> &str {
    match pathname.rsplit('/').next() {
        Some(name) if !name.is_empty() => name,
        _ => DEFAULT_PAGE,
    }
}

/// The part of a link's href before any fragment.
#[must_use]
pub fn href_file(href: &str) -> &str {
    href.split('#').next().unwrap_or_default()
}

/// Whether a nav link with `href` points at the page named `page`.
#[must_use]
pub fn links_to_page(href: &str, page: &str) -> bool {
    href_file(href) == page
}

#[cfg(feature = "browser")]
pub use browser::{mark_active_by_path, setup_mobile_nav};

#[cfg(feature = "browser")]
mod browser {
    use std::cell::Cell;
    use std::rc::Rc;

    use web_sys::Element;

    use super::NavState;
    use crate::config::SiteConfig;
    use crate::dom;
    use crate::error::BehaviorError;

    fn render(toggle: &Element, nav: &Element, open_class: &str, state: NavState) -> Result<(), BehaviorError> {
        dom::set_class(nav, open_class, state.is_open())?;
        toggle.set_attribute("aria-expanded", state.aria_expanded())?;
        Ok(())
    }

    /// Wire the menu toggle and collapse the menu when any of its links is used.
    ///
    /// Attaches nothing unless both the toggle and the link list exist.
    pub fn setup_mobile_nav(config: &SiteConfig) -> Result<(), BehaviorError> {
        let document = dom::document()?;
        let (toggle, nav) = super::menu_parts(
            document.query_selector(&config.selectors.menu_toggle)?,
            document.query_selector(&config.selectors.nav_links)?,
            &config.selectors,
        )?;
        let open_class = config.classes.open.clone();

        let state = Rc::new(Cell::new(NavState::from_open(nav.class_list().contains(&open_class))));

        {
            let state = Rc::clone(&state);
            let toggle_el = toggle.clone();
            let nav = nav.clone();
            let open_class = open_class.clone();
            dom::listen(&toggle, "click", move |_| {
                let next = state.get().toggled();
                state.set(next);
                dom::report("nav toggle", render(&toggle_el, &nav, &open_class, next));
            })?;
        }

        for link in dom::query_all_within(&nav, "a")? {
            let state = Rc::clone(&state);
            let toggle = toggle.clone();
            let nav = nav.clone();
            let open_class = open_class.clone();
            dom::listen(&link, "click", move |_| {
                state.set(NavState::Closed);
                dom::report("nav link", render(&toggle, &nav, &open_class, NavState::Closed));
            })?;
        }
        log::debug!("mobile nav wired");
        Ok(())
    }

    /// Mark nav links whose href names the current page file.
    pub fn mark_active_by_path(config: &SiteConfig) -> Result<(), BehaviorError> {
        let document = dom::document()?;
        let pathname = dom::window()?.location().pathname()?;
        let page = super::page_file_name(&pathname);
        let selector = format!("{} a", config.selectors.nav_links);
        for link in dom::query_all(&document, &selector)? {
            let href = link.get_attribute("href").unwrap_or_default();
            if super::links_to_page(&href, page) {
                dom::set_class(&link, &config.classes.active, true)?;
            }
        }
        Ok(())
    }
}
