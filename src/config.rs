//! Site configuration.
//!
//! Defaults reproduce the markup contract the site is written against. A
//! page may override any field by embedding a JSON block:
//!
//! ```html
//! <script type="application/json" id="site-behavior-config">
//!   { "theme": { "storage_key": "folio-theme" }, "debug": true }
//! </script>
//! ```
//!
//! Unknown fields are ignored and missing fields keep their defaults.

#[cfg(test)]
#[path = "config_test.rs"]
mod config_test;

use serde::Deserialize;

use crate::consts;
use crate::error::BehaviorError;

/// Selectors locating each component's markup.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(default)]
pub struct Selectors {
    pub header: String,
    pub menu_toggle: String,
    pub nav_links: String,
    pub sections: String,
    pub spy_links: String,
    pub go_back: String,
    pub theme_toggle_id: String,
    pub contact_form: String,
    pub required_field: String,
    pub copy_email: String,
    pub lightbox_images: String,
    pub project_cards: String,
    pub year: String,
}

impl Default for Selectors {
    fn default() -> Self {
        Self {
            header: consts::HEADER_SELECTOR.to_owned(),
            menu_toggle: consts::MENU_TOGGLE_SELECTOR.to_owned(),
            nav_links: consts::NAV_LINKS_SELECTOR.to_owned(),
            sections: consts::SECTION_SELECTOR.to_owned(),
            spy_links: consts::SPY_LINK_SELECTOR.to_owned(),
            go_back: consts::GO_BACK_SELECTOR.to_owned(),
            theme_toggle_id: consts::THEME_TOGGLE_ID.to_owned(),
            contact_form: consts::CONTACT_FORM_SELECTOR.to_owned(),
            required_field: consts::REQUIRED_FIELD_SELECTOR.to_owned(),
            copy_email: consts::COPY_EMAIL_SELECTOR.to_owned(),
            lightbox_images: consts::LIGHTBOX_IMAGE_SELECTOR.to_owned(),
            project_cards: consts::PROJECT_CARD_SELECTOR.to_owned(),
            year: consts::YEAR_SELECTOR.to_owned(),
        }
    }
}

/// CSS classes toggled by the behaviors.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(default)]
pub struct Classes {
    pub open: String,
    pub active: String,
    pub hover: String,
    pub field_error: String,
}

impl Default for Classes {
    fn default() -> Self {
        Self {
            open: consts::OPEN_CLASS.to_owned(),
            active: consts::ACTIVE_CLASS.to_owned(),
            hover: consts::HOVER_CLASS.to_owned(),
            field_error: consts::FIELD_ERROR_CLASS.to_owned(),
        }
    }
}

/// Pixel paddings added on top of the fixed header height.
#[derive(Debug, Clone, Copy, PartialEq, Deserialize)]
#[serde(default)]
pub struct ScrollConfig {
    pub anchor_padding_px: f64,
    pub spy_padding_px: f64,
}

impl Default for ScrollConfig {
    fn default() -> Self {
        Self { anchor_padding_px: consts::ANCHOR_PADDING_PX, spy_padding_px: consts::SPY_PADDING_PX }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(default)]
pub struct ThemeConfig {
    pub storage_key: String,
    pub attribute: String,
    pub dark_icon_html: String,
    pub light_icon_html: String,
}

impl Default for ThemeConfig {
    fn default() -> Self {
        Self {
            storage_key: consts::THEME_STORAGE_KEY.to_owned(),
            attribute: consts::THEME_ATTR.to_owned(),
            dark_icon_html: consts::SUN_ICON_HTML.to_owned(),
            light_icon_html: consts::MOON_ICON_HTML.to_owned(),
        }
    }
}

/// Copy-email button labels and the confirmation duration.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(default)]
pub struct CopyConfig {
    pub idle_label: String,
    pub done_label: String,
    pub revert_ms: u32,
}

impl Default for CopyConfig {
    fn default() -> Self {
        Self {
            idle_label: consts::COPY_IDLE_LABEL.to_owned(),
            done_label: consts::COPY_DONE_LABEL.to_owned(),
            revert_ms: consts::COPY_REVERT_MS,
        }
    }
}

/// Everything a page can tune.
#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(default)]
pub struct SiteConfig {
    pub selectors: Selectors,
    pub classes: Classes,
    pub scroll: ScrollConfig,
    pub theme: ThemeConfig,
    pub copy: CopyConfig,
    pub home_url: String,
    pub validation_message: String,
    pub debug: bool,
}

impl Default for SiteConfig {
    fn default() -> Self {
        Self {
            selectors: Selectors::default(),
            classes: Classes::default(),
            scroll: ScrollConfig::default(),
            theme: ThemeConfig::default(),
            copy: CopyConfig::default(),
            home_url: consts::HOME_FALLBACK_URL.to_owned(),
            validation_message: consts::VALIDATION_MESSAGE.to_owned(),
            debug: false,
        }
    }
}

impl SiteConfig {
    /// Parse a page-supplied override block. Blank input yields the defaults.
    ///
    /// # Errors
    ///
    /// Returns [`BehaviorError::Config`] when the block is not valid JSON or a
    /// field has the wrong type.
    pub fn from_json(raw: &str) -> Result<Self, BehaviorError> {
        if raw.trim().is_empty() {
            return Ok(Self::default());
        }
        Ok(serde_json::from_str(raw)?)
    }
}
