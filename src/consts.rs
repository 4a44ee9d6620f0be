//! Built-in defaults for the page markup contract.

// ── Selectors ───────────────────────────────────────────────────

pub const HEADER_SELECTOR: &str = "header";
pub const MENU_TOGGLE_SELECTOR: &str = ".menu-toggle";
pub const NAV_LINKS_SELECTOR: &str = ".nav-links";
pub const SECTION_SELECTOR: &str = "section[id]";
pub const SPY_LINK_SELECTOR: &str = ".nav-links a[href^=\"#\"], .nav-links a[href*=\"index.html#\"]";
pub const GO_BACK_SELECTOR: &str = ".go-back, [data-go-back=\"true\"]";
pub const THEME_TOGGLE_ID: &str = "themeToggle";
pub const CONTACT_FORM_SELECTOR: &str = "#contact-form";
pub const REQUIRED_FIELD_SELECTOR: &str = "[data-required=\"true\"]";
pub const COPY_EMAIL_SELECTOR: &str = "[data-copy-email]";
pub const COPY_EMAIL_ATTR: &str = "data-copy-email";
pub const LIGHTBOX_IMAGE_SELECTOR: &str = ".about-image img, .skills-grid img";
pub const PROJECT_CARD_SELECTOR: &str = ".project-card";
pub const YEAR_SELECTOR: &str = "#year";

/// Element id of the optional JSON block that overrides these defaults.
pub const CONFIG_ELEMENT_ID: &str = "site-behavior-config";

// ── Classes and attributes ──────────────────────────────────────

pub const OPEN_CLASS: &str = "open";
pub const ACTIVE_CLASS: &str = "active";
pub const HOVER_CLASS: &str = "hover";
pub const FIELD_ERROR_CLASS: &str = "field-error";

/// Attribute on `<html>` that carries the dark theme marker.
pub const THEME_ATTR: &str = "data-theme";

// ── Persistence and navigation ──────────────────────────────────

pub const THEME_STORAGE_KEY: &str = "preferred-theme";
pub const HOME_FALLBACK_URL: &str = "index.html#home";
pub const DEFAULT_PAGE: &str = "index.html";

// ── Scrolling ───────────────────────────────────────────────────

/// Extra space left above an anchor target below the fixed header, in pixels.
pub const ANCHOR_PADDING_PX: f64 = 8.0;

/// Slack below the header before a section counts as scrolled past, in pixels.
pub const SPY_PADDING_PX: f64 = 12.0;

// ── Contact ─────────────────────────────────────────────────────

pub const COPY_IDLE_LABEL: &str = "Copy Email";
pub const COPY_DONE_LABEL: &str = "Copied!";
pub const COPY_REVERT_MS: u32 = 1200;
pub const VALIDATION_MESSAGE: &str = "Please fill in all required fields.";

// ── Theme icons ─────────────────────────────────────────────────

pub const SUN_ICON_HTML: &str = "<i class=\"fa-regular fa-sun\"></i>";
pub const MOON_ICON_HTML: &str = "<i class=\"fa-regular fa-moon\"></i>";
