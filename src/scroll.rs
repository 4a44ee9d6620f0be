//! Smooth scrolling that clears the fixed header.

#[cfg(test)]
#[path = "scroll_test.rs"]
mod scroll_test;

/// Document-relative scroll position that puts an element `offset` pixels
/// below the top of the viewport.
///
/// `viewport_top` is the element's current bounding-rect top and
/// `scroll_y` the window's current vertical scroll offset.
#[must_use]
pub fn target_top(viewport_top: f64, scroll_y: f64, offset: f64) -> f64 {
    viewport_top + scroll_y - offset
}

/// Offset used for anchor jumps: header height plus fixed padding.
#[must_use]
pub fn anchor_offset(header_height: f64, padding: f64) -> f64 {
    header_height + padding
}

#[cfg(feature = "browser")]
pub use browser::{ScrollTarget, smooth_scroll_to};

#[cfg(feature = "browser")]
mod browser {
    use web_sys::{Element, ScrollBehavior, ScrollToOptions};

    use crate::dom;
    use crate::error::BehaviorError;

    /// What to scroll to: an element id or an element already in hand.
    pub enum ScrollTarget<'a> {
        Id(&'a str),
        Element(&'a Element),
    }

    /// Animate the window so `target` sits `offset` pixels below the viewport top.
    ///
    /// An id that names no element is reported as missing.
    pub fn smooth_scroll_to(target: ScrollTarget<'_>, offset: f64) -> Result<(), BehaviorError> {
        let window = dom::window()?;
        let resolved;
        let element = match target {
            ScrollTarget::Element(el) => el,
            ScrollTarget::Id(id) => {
                resolved = dom::document()?.get_element_by_id(id).ok_or_else(|| BehaviorError::missing(&format!("#{id}")))?;
                &resolved
            }
        };
        let rect = element.get_bounding_client_rect();
        let top = super::target_top(rect.top(), window.scroll_y()?, offset);

        let options = ScrollToOptions::new();
        options.set_top(top);
        options.set_behavior(ScrollBehavior::Smooth);
        window.scroll_to_with_scroll_to_options(&options);
        Ok(())
    }
}
