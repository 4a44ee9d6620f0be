//! Open/closed state shared by the lightbox and the project modal.
//!
//! Each overlay is built once per page and owned by its component. The
//! state holds the content currently shown; the overlay is open exactly
//! when there is content. Opening while already open replaces the content.

#[cfg(test)]
#[path = "overlay_test.rs"]
mod overlay_test;

/// `overflow` value for `<body>` while an overlay is or is not showing.
#[must_use]
pub fn body_overflow(open: bool) -> &'static str {
    if open { "hidden" } else { "" }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct OverlayState<C> {
    content: Option<C>,
}

impl<C> Default for OverlayState<C> {
    fn default() -> Self {
        Self { content: None }
    }
}

impl<C> OverlayState<C> {
    #[must_use]
    pub fn is_open(&self) -> bool {
        self.content.is_some()
    }

    #[must_use]
    pub fn content(&self) -> Option<&C> {
        self.content.as_ref()
    }

    pub fn open(&mut self, content: C) {
        self.content = Some(content);
    }

    /// Close and drop the content. Returns whether anything was showing.
    pub fn close(&mut self) -> bool {
        self.content.take().is_some()
    }
}

#[cfg(feature = "browser")]
pub use browser::OverlayShell;

#[cfg(feature = "browser")]
mod browser {
    use std::rc::Rc;

    use wasm_bindgen::JsCast;
    use web_sys::{Document, Element, HtmlElement, KeyboardEvent};

    use crate::dom;
    use crate::error::BehaviorError;

    /// The DOM skeleton every overlay shares: root, backdrop and close button.
    pub struct OverlayShell {
        pub document: Document,
        pub root: HtmlElement,
        pub open_class: String,
    }

    impl OverlayShell {
        /// Create the root element from `markup` and append it to `<body>`.
        pub fn build(class_name: &str, markup: &str, open_class: &str) -> Result<Self, BehaviorError> {
            let document = dom::document()?;
            let body = document.body().ok_or_else(|| BehaviorError::missing("body"))?;
            let root = dom::as_html(document.create_element("div")?)?;
            root.set_class_name(class_name);
            root.set_inner_html(markup);
            body.append_child(&root)?;
            Ok(Self { document, root, open_class: open_class.to_owned() })
        }

        pub fn part(&self, selector: &str) -> Result<Element, BehaviorError> {
            dom::query_within(&self.root, selector)
        }

        /// Reflect `open` in the root class and the body scroll lock.
        pub fn show(&self, open: bool) -> Result<(), BehaviorError> {
            dom::set_class(&self.root, &self.open_class, open)?;
            dom::set_body_overflow(&self.document, super::body_overflow(open))
        }

        /// Call `close` from the close button, the backdrop, and Escape while open.
        pub fn on_dismiss<F>(&self, close_selector: &str, backdrop_selector: &str, close: F) -> Result<(), BehaviorError>
        where
            F: Fn() + 'static,
        {
            let close = Rc::new(close);
            for selector in [close_selector, backdrop_selector] {
                let close = Rc::clone(&close);
                let part = self.part(selector)?;
                dom::listen(&part, "click", move |_| close())?;
            }

            let root = self.root.clone();
            let open_class = self.open_class.clone();
            dom::listen(&self.document, "keydown", move |event| {
                let is_escape = event.dyn_ref::<KeyboardEvent>().is_some_and(|k| k.key() == "Escape");
                if is_escape && root.class_list().contains(&open_class) {
                    close();
                }
            })?;
            Ok(())
        }
    }
}
