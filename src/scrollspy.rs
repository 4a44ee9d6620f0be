//! Scrollspy: highlight the nav link for the section under the header.
//!
//! Links are indexed by the fragment of their href (`#about`,
//! `index.html#about` and `/index.html#about` all index as `#about`). On
//! every scroll the last section, in document order, whose top has passed
//! under the header is current; its link is the only one marked active.

#[cfg(test)]
#[path = "scrollspy_test.rs"]
mod scrollspy_test;

use std::collections::HashMap;

/// Reduce an href to its `#fragment`, dropping any path before it.
///
/// The fragment ends at a second `#` if there is one.
#[must_use]
pub fn normalize_hash(href: &str) -> Option<String> {
    let (_, rest) = href.split_once('#')?;
    let fragment = rest.split('#').next().unwrap_or_default();
    Some(format!("#{fragment}"))
}

/// Fragment to link-index lookup. A later link with the same fragment wins.
#[derive(Debug, Default, Clone)]
pub struct SpyIndex {
    by_hash: HashMap<String, usize>,
}

impl SpyIndex {
    pub fn new<'a, I>(hrefs: I) -> Self
    where
        I: IntoIterator<Item = &'a str>,
    {
        let by_hash = hrefs
            .into_iter()
            .enumerate()
            .filter_map(|(i, href)| normalize_hash(href).map(|hash| (hash, i)))
            .collect();
        Self { by_hash }
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.by_hash.is_empty()
    }

    /// Index of the link to mark for the section with id `section_id`.
    #[must_use]
    pub fn link_for(&self, section_id: &str) -> Option<usize> {
        self.by_hash.get(&format!("#{section_id}")).copied()
    }
}

/// Id of the last section whose top, less header and padding, is at or above zero.
///
/// `sections` yields `(id, viewport_top)` pairs in document order.
pub fn current_section<'a, I>(sections: I, header_offset: f64, padding: f64) -> Option<&'a str>
where
    I: IntoIterator<Item = (&'a str, f64)>,
{
    sections
        .into_iter()
        .filter(|(_, top)| top - header_offset - padding <= 0.0)
        .last()
        .map(|(id, _)| id)
}

#[cfg(feature = "browser")]
pub use browser::setup_scrollspy;

#[cfg(feature = "browser")]
mod browser {
    use std::rc::Rc;

    use web_sys::Element;

    use super::{SpyIndex, current_section};
    use crate::config::SiteConfig;
    use crate::dom;
    use crate::error::BehaviorError;

    struct Spy {
        sections: Vec<Element>,
        links: Vec<Element>,
        index: SpyIndex,
        header_offset: f64,
        padding: f64,
        active_class: String,
    }

    impl Spy {
        fn refresh(&self) -> Result<(), BehaviorError> {
            let ids: Vec<String> = self.sections.iter().map(Element::id).collect();
            let tops = self.sections.iter().map(|s| s.get_bounding_client_rect().top());
            let current = current_section(ids.iter().map(String::as_str).zip(tops), self.header_offset, self.padding);
            let active = current.and_then(|id| self.index.link_for(id));

            for (i, link) in self.links.iter().enumerate() {
                dom::set_class(link, &self.active_class, active == Some(i))?;
            }
            Ok(())
        }
    }

    /// Track scroll position and keep exactly one matching nav link active.
    pub fn setup_scrollspy(config: &SiteConfig) -> Result<(), BehaviorError> {
        let window = dom::window()?;
        let document = dom::document()?;
        let sections = dom::query_all(&document, &config.selectors.sections)?;
        let links = dom::query_all(&document, &config.selectors.spy_links)?;
        if sections.is_empty() {
            return Err(BehaviorError::missing(&config.selectors.sections));
        }
        if links.is_empty() {
            return Err(BehaviorError::missing(&config.selectors.spy_links));
        }

        let hrefs: Vec<String> = links.iter().map(|l| l.get_attribute("href").unwrap_or_default()).collect();
        let spy = Rc::new(Spy {
            index: SpyIndex::new(hrefs.iter().map(String::as_str)),
            sections,
            links,
            header_offset: dom::header_offset(&document, &config.selectors.header),
            padding: config.scroll.spy_padding_px,
            active_class: config.classes.active.clone(),
        });

        {
            let spy = Rc::clone(&spy);
            dom::listen_passive(&window, "scroll", move |_| dom::report("scrollspy", spy.refresh()))?;
        }
        {
            let spy = Rc::clone(&spy);
            dom::listen(&window, "load", move |_| dom::report("scrollspy", spy.refresh()))?;
        }
        spy.refresh()?;
        log::debug!("scrollspy wired");
        Ok(())
    }
}
