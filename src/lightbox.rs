//! Full-screen image preview for the about and skills images.

#[cfg(test)]
#[path = "lightbox_test.rs"]
mod lightbox_test;

use crate::overlay::OverlayState;

pub const LIGHTBOX_CLASS: &str = "lightbox-overlay";

pub const LIGHTBOX_MARKUP: &str = r#"
    <div class="lightbox-backdrop"></div>
    <figure class="lightbox-content" role="dialog" aria-modal="true" aria-label="Image preview">
      <img alt="">
      <figcaption class="lightbox-caption"></figcaption>
      <button class="lightbox-close" aria-label="Close">&times;</button>
    </figure>
"#;

/// The image being previewed.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LightboxImage {
    pub src: String,
    pub alt: String,
}

/// What the overlay's image and caption should show for a given state.
///
/// Closed overlays show nothing, so no stale image stays loaded.
#[must_use]
pub fn view(state: &OverlayState<LightboxImage>) -> (&str, &str) {
    state.content().map_or(("", ""), |image| (image.src.as_str(), image.alt.as_str()))
}

#[cfg(feature = "browser")]
pub use browser::setup_lightbox;

#[cfg(feature = "browser")]
mod browser {
    use std::cell::RefCell;
    use std::rc::Rc;

    use wasm_bindgen::JsCast;
    use web_sys::{Element, HtmlImageElement};

    use super::{LIGHTBOX_CLASS, LIGHTBOX_MARKUP, LightboxImage, view};
    use crate::config::SiteConfig;
    use crate::dom;
    use crate::error::BehaviorError;
    use crate::overlay::{OverlayShell, OverlayState};

    struct Lightbox {
        shell: OverlayShell,
        image: HtmlImageElement,
        caption: Element,
        state: RefCell<OverlayState<LightboxImage>>,
    }

    impl Lightbox {
        fn build(open_class: &str) -> Result<Self, BehaviorError> {
            let shell = OverlayShell::build(LIGHTBOX_CLASS, LIGHTBOX_MARKUP, open_class)?;
            let image = shell
                .part("img")?
                .dyn_into::<HtmlImageElement>()
                .map_err(|_| BehaviorError::Js("lightbox image is not an <img>".to_owned()))?;
            let caption = shell.part(".lightbox-caption")?;
            Ok(Self { shell, image, caption, state: RefCell::new(OverlayState::default()) })
        }

        fn render(&self) -> Result<(), BehaviorError> {
            let state = self.state.borrow();
            let (src, alt) = view(&state);
            self.image.set_src(src);
            self.image.set_alt(alt);
            self.caption.set_text_content(Some(alt));
            self.shell.show(state.is_open())
        }

        fn open(&self, image: LightboxImage) -> Result<(), BehaviorError> {
            self.state.borrow_mut().open(image);
            self.render()
        }

        fn close(&self) -> Result<(), BehaviorError> {
            self.state.borrow_mut().close();
            self.render()
        }
    }

    /// Build the overlay once and make every matching image open it.
    pub fn setup_lightbox(config: &SiteConfig) -> Result<(), BehaviorError> {
        let document = dom::document()?;
        let images = dom::query_all(&document, &config.selectors.lightbox_images)?;
        if images.is_empty() {
            return Err(BehaviorError::missing(&config.selectors.lightbox_images));
        }

        let lightbox = Rc::new(Lightbox::build(&config.classes.open)?);
        {
            let lightbox_for_close = Rc::clone(&lightbox);
            lightbox.shell.on_dismiss(".lightbox-close", ".lightbox-backdrop", move || {
                dom::report("lightbox close", lightbox_for_close.close());
            })?;
        }

        for element in images {
            let Ok(img) = element.dyn_into::<HtmlImageElement>() else {
                continue;
            };
            img.style().set_property("cursor", "zoom-in")?;
            let lightbox = Rc::clone(&lightbox);
            let source = img.clone();
            dom::listen(&img, "click", move |_| {
                let image = LightboxImage { src: source.src(), alt: source.alt() };
                dom::report("lightbox open", lightbox.open(image));
            })?;
        }
        log::debug!("lightbox wired");
        Ok(())
    }
}
