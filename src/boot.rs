//! Page boot sequence.
//!
//! Runs every behavior's setup exactly once, as soon as the document is
//! interactive. Setups are independent: one failing (usually because the
//! page lacks its markup) is logged and the rest still run.


use crate::config::SiteConfig;
use crate::consts::CONFIG_ELEMENT_ID;
use crate::error::BehaviorError;
use crate::{anchor, contact, dom, footer, go_back, lightbox, modal, nav, scrollspy, theme};

type Setup = fn(&SiteConfig) -> Result<(), BehaviorError>;

const SETUPS: &[(&str, Setup)] = &[
    ("theme", theme::setup_theme),
    ("mobile nav", nav::setup_mobile_nav),
    ("active nav by path", nav::mark_active_by_path),
    ("in-page anchors", anchor::setup_smooth_links),
    ("go back", go_back::setup_go_back),
    ("scrollspy", scrollspy::setup_scrollspy),
    ("footer year", footer::set_footer_year),
    ("lightbox", lightbox::setup_lightbox),
    ("project modal", modal::setup_project_modal),
    ("copy email", contact::setup_copy_email),
    ("contact form", contact::setup_contact_form),
    ("location hash", anchor::scroll_to_location_hash),
];

/// Text of the page's override block, empty when the page has none.
fn config_source() -> String {
    dom::document()
        .map(|doc| doc.get_element_by_id(CONFIG_ELEMENT_ID).and_then(|el| el.text_content()))
        .unwrap_or(None)
        .unwrap_or_default()
}

fn init_logging(debug: bool) {
    let level = if debug { log::Level::Debug } else { log::Level::Info };
    if console_log::init_with_level(level).is_err() {
        log::debug!("logger already installed");
    }
}

fn run_setups(config: &SiteConfig) {
    for (name, setup) in SETUPS {
        dom::report(name, setup(config));
    }
    log::info!("page behaviors ready");
}

pub fn run() {
    let parsed = SiteConfig::from_json(&config_source());
    init_logging(parsed.as_ref().is_ok_and(|c| c.debug));
    let config = parsed.unwrap_or_else(|e| {
        log::warn!("{e}; using defaults");
        SiteConfig::default()
    });

    let document = match dom::document() {
        Ok(document) => document,
        Err(e) => {
            log::warn!("not booting: {e}");
            return;
        }
    };
    if document.ready_state() != "loading" {
        run_setups(&config);
        return;
    }
    let mut pending = Some(config);
    dom::report(
        "boot",
        dom::listen(&document, "DOMContentLoaded", move |_| {
            if let Some(config) = pending.take() {
                run_setups(&config);
            }
        }),
    );
}
