//! Project preview modal.
//!
//! Clicking a project card copies its heading, image and description into a
//! single modal built once per page.

#[cfg(test)]
#[path = "modal_test.rs"]
mod modal_test;

pub const MODAL_CLASS: &str = "modal";

pub const MODAL_MARKUP: &str = r#"
    <div class="modal-backdrop"></div>
    <div class="modal-dialog" role="dialog" aria-modal="true" aria-label="Project details">
      <button class="modal-close" aria-label="Close">&times;</button>
      <div class="modal-body"></div>
    </div>
"#;

/// Title used for cards without a heading.
pub const FALLBACK_TITLE: &str = "Project";

/// Content lifted from a project card.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct ProjectPreview {
    /// Heading text, or `None` when the card has no usable heading.
    pub title: Option<String>,
    /// Outer markup of the card image, inserted verbatim.
    pub image_html: String,
    /// Inner markup of the card description, inserted verbatim.
    pub description_html: String,
}

impl ProjectPreview {
    #[must_use]
    pub fn title(&self) -> &str {
        match self.title.as_deref() {
            Some(title) if !title.is_empty() => title,
            _ => FALLBACK_TITLE,
        }
    }

    /// Markup for the modal body.
    #[must_use]
    pub fn to_html(&self) -> String {
        format!(
            "<h3>{}</h3><div class=\"modal-content\">{}<div class=\"modal-text\">{}</div></div>",
            escape_html(self.title()),
            self.image_html,
            self.description_html,
        )
    }
}

fn escape_html(s: &str) -> String {
    s.replace('&', "&amp;")
        .replace('<', "&lt;")
        .replace('>', "&gt;")
        .replace('"', "&quot;")
}

#[cfg(feature = "browser")]
pub use browser::setup_project_modal;

#[cfg(feature = "browser")]
mod browser {
    use std::cell::RefCell;
    use std::rc::Rc;

    use web_sys::Element;

    use super::{MODAL_CLASS, MODAL_MARKUP, ProjectPreview};
    use crate::config::SiteConfig;
    use crate::dom;
    use crate::error::BehaviorError;
    use crate::overlay::{OverlayShell, OverlayState};

    struct ProjectModal {
        shell: OverlayShell,
        body: Element,
        state: RefCell<OverlayState<ProjectPreview>>,
    }

    impl ProjectModal {
        fn build(open_class: &str) -> Result<Self, BehaviorError> {
            let shell = OverlayShell::build(MODAL_CLASS, MODAL_MARKUP, open_class)?;
            let body = shell.part(".modal-body")?;
            Ok(Self { shell, body, state: RefCell::new(OverlayState::default()) })
        }

        fn render(&self) -> Result<(), BehaviorError> {
            let state = self.state.borrow();
            let html = state.content().map(ProjectPreview::to_html).unwrap_or_default();
            self.body.set_inner_html(&html);
            self.shell.show(state.is_open())
        }

        fn open(&self, preview: ProjectPreview) -> Result<(), BehaviorError> {
            self.state.borrow_mut().open(preview);
            self.render()
        }

        fn close(&self) -> Result<(), BehaviorError> {
            self.state.borrow_mut().close();
            self.render()
        }
    }

    fn read_card(card: &Element) -> Result<ProjectPreview, BehaviorError> {
        Ok(ProjectPreview {
            title: card.query_selector("h3")?.and_then(|h| h.text_content()),
            image_html: card.query_selector("img")?.map(|img| img.outer_html()).unwrap_or_default(),
            description_html: card.query_selector("p")?.map(|p| p.inner_html()).unwrap_or_default(),
        })
    }

    pub fn setup_project_modal(config: &SiteConfig) -> Result<(), BehaviorError> {
        let document = dom::document()?;
        let cards = dom::query_all(&document, &config.selectors.project_cards)?;
        if cards.is_empty() {
            return Err(BehaviorError::missing(&config.selectors.project_cards));
        }

        let modal = Rc::new(ProjectModal::build(&config.classes.open)?);
        {
            let modal_for_close = Rc::clone(&modal);
            modal.shell.on_dismiss(".modal-close", ".modal-backdrop", move || {
                dom::report("modal close", modal_for_close.close());
            })?;
        }

        for card in cards {
            for (event, hovered) in [("mouseenter", true), ("mouseleave", false)] {
                let el = card.clone();
                let hover_class = config.classes.hover.clone();
                dom::listen(&card, event, move |_| dom::report("card hover", dom::set_class(&el, &hover_class, hovered)))?;
            }

            let modal = Rc::clone(&modal);
            let el = card.clone();
            dom::listen(&card, "click", move |_| {
                dom::report("modal open", read_card(&el).and_then(|preview| modal.open(preview)));
            })?;
        }
        log::debug!("project modal wired");
        Ok(())
    }
}
