//! Go-back links.
//!
//! Prefer real history traversal when the visitor arrived from this site,
//! otherwise follow the link's own fragment href, otherwise go home.

#[cfg(test)]
#[path = "go_back_test.rs"]
mod go_back_test;

use url::Url;

/// What a go-back activation should do.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum GoBackAction {
    /// Cancel the click and call `history.back()`.
    HistoryBack,
    /// Let the browser follow the link's href.
    FollowHref,
    /// Cancel the click and navigate to the configured home URL.
    RedirectHome,
}

/// Browser state sampled at the moment a go-back control is activated.
#[derive(Debug, Clone, Copy)]
pub struct GoBackContext<'a> {
    pub history_length: u32,
    pub referrer: &'a str,
    pub location: &'a str,
    pub href: &'a str,
}

/// Whether `candidate` (possibly relative) shares scheme, host and port with `location`.
///
/// Empty or unparseable input is never same-origin.
#[must_use]
pub fn same_origin(candidate: &str, location: &str) -> bool {
    if candidate.is_empty() {
        return false;
    }
    let Ok(base) = Url::parse(location) else {
        return false;
    };
    match base.join(candidate) {
        Ok(resolved) => resolved.origin() == base.origin() && resolved.origin().is_tuple(),
        Err(_) => false,
    }
}

#[must_use]
pub fn decide(ctx: &GoBackContext<'_>) -> GoBackAction {
    if ctx.history_length > 1 && same_origin(ctx.referrer, ctx.location) {
        GoBackAction::HistoryBack
    } else if ctx.href.contains('#') {
        GoBackAction::FollowHref
    } else {
        GoBackAction::RedirectHome
    }
}

#[cfg(feature = "browser")]
pub use browser::setup_go_back;

#[cfg(feature = "browser")]
mod browser {
    use web_sys::{Element, Event};

    use super::{GoBackAction, GoBackContext, decide};
    use crate::config::SiteConfig;
    use crate::dom;
    use crate::error::BehaviorError;

    fn activate(control: &Element, event: &Event, home_url: &str) -> Result<(), BehaviorError> {
        let window = dom::window()?;
        let document = dom::document()?;
        let history = window.history()?;
        let referrer = document.referrer();
        let location = window.location().href()?;
        let href = control.get_attribute("href").unwrap_or_default();

        let ctx = GoBackContext { history_length: history.length()?, referrer: &referrer, location: &location, href: &href };
        match decide(&ctx) {
            GoBackAction::HistoryBack => {
                event.prevent_default();
                history.back()?;
            }
            GoBackAction::FollowHref => {}
            GoBackAction::RedirectHome => {
                event.prevent_default();
                window.location().set_href(home_url)?;
            }
        }
        Ok(())
    }

    pub fn setup_go_back(config: &SiteConfig) -> Result<(), BehaviorError> {
        let document = dom::document()?;
        let controls = dom::query_all(&document, &config.selectors.go_back)?;
        if controls.is_empty() {
            return Err(BehaviorError::missing(&config.selectors.go_back));
        }
        for control in controls {
            let home_url = config.home_url.clone();
            let el = control.clone();
            dom::listen(&control, "click", move |event| {
                dom::report("go back", activate(&el, &event, &home_url));
            })?;
        }
        log::debug!("go-back controls wired");
        Ok(())
    }
}
