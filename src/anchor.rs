//! In-page fragment links.
//!
//! A click on any `a[href^="#"]` whose fragment names an element on this
//! page becomes a smooth scroll plus a history entry. Fragments that match
//! nothing fall through to the browser so links into other pages work.

#[cfg(test)]
#[path = "anchor_test.rs"]
mod anchor_test;

/// Selector for links that may point into the current page.
pub const HASH_LINK_SELECTOR: &str = "a[href^=\"#\"]";

/// Element id named by an in-page href like `#about`.
///
/// A bare `#` names nothing.
#[must_use]
pub fn in_page_target(href: &str) -> Option<&str> {
    href.strip_prefix('#').filter(|id| !id.is_empty())
}

#[cfg(feature = "browser")]
pub use browser::{scroll_to_location_hash, setup_smooth_links};

#[cfg(feature = "browser")]
mod browser {
    use gloo_timers::callback::Timeout;
    use wasm_bindgen::JsValue;

    use super::{HASH_LINK_SELECTOR, in_page_target};
    use crate::config::SiteConfig;
    use crate::dom;
    use crate::error::BehaviorError;
    use crate::scroll::{ScrollTarget, anchor_offset, smooth_scroll_to};

    /// Intercept same-page fragment link clicks anywhere in the document.
    pub fn setup_smooth_links(config: &SiteConfig) -> Result<(), BehaviorError> {
        let document = dom::document()?;
        let offset = anchor_offset(
            dom::header_offset(&document, &config.selectors.header),
            config.scroll.anchor_padding_px,
        );
        let doc = document.clone();
        dom::listen(&document, "click", move |event| {
            let Some(link) = dom::closest_from_event(&event, HASH_LINK_SELECTOR) else {
                return;
            };
            let href = link.get_attribute("href").unwrap_or_default();
            let Some(target) = in_page_target(&href).and_then(|id| doc.get_element_by_id(id)) else {
                return;
            };
            event.prevent_default();
            dom::report("anchor scroll", smooth_scroll_to(ScrollTarget::Element(&target), offset));
            dom::report("anchor history", push_fragment(&href));
        })?;
        log::debug!("in-page anchors wired");
        Ok(())
    }

    fn push_fragment(hash: &str) -> Result<(), BehaviorError> {
        dom::window()?.history()?.push_state_with_url(&JsValue::NULL, "", Some(hash))?;
        Ok(())
    }

    /// Scroll to the element named by `location.hash` once layout has settled.
    ///
    /// The id is resolved inside the deferred callback, after the other
    /// setups have had their chance to change the page.
    pub fn scroll_to_location_hash(config: &SiteConfig) -> Result<(), BehaviorError> {
        let window = dom::window()?;
        let document = dom::document()?;
        let hash = window.location().hash()?;
        let Some(id) = in_page_target(&hash).map(str::to_owned) else {
            return Ok(());
        };
        let offset = anchor_offset(
            dom::header_offset(&document, &config.selectors.header),
            config.scroll.anchor_padding_px,
        );
        Timeout::new(0, move || {
            dom::report("location hash scroll", smooth_scroll_to(ScrollTarget::Id(&id), offset));
        })
        .forget();
        Ok(())
    }
}
