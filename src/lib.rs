//! Behavior layer for a static portfolio site.
//!
//! This crate is compiled to WebAssembly and loaded by every page of the
//! site. It attaches the page's interactive behavior to markup that already
//! exists: the mobile menu, smooth in-page scrolling, scrollspy, the image
//! lightbox, the project preview modal, contact helpers, go-back links and
//! the persisted light/dark theme.
//!
//! Each behavior is split the same way: the decisions (which link is
//! active, where to scroll, what theme to start in, whether a form may
//! submit) are plain Rust and are tested natively, while the `browser`
//! feature adds the thin `web-sys` layer that reads the DOM, calls those
//! decisions and writes the result back.
//!
//! ## Module layout
//!
//! | Module | Role |
//! |--------|------|
//! | [`config`] | Markup contract and constants, overridable from the page |
//! | [`consts`] | Built-in defaults for selectors, classes and timings |
//! | [`error`] | Crate error type |
//! | [`scroll`] | Header-offset scroll target math |
//! | [`nav`] | Mobile menu state and active-link-by-path matching |
//! | [`anchor`] | In-page fragment link resolution |
//! | [`go_back`] | Go-back navigation decision |
//! | [`scrollspy`] | Active section tracking |
//! | [`overlay`] | Open/closed state shared by the lightbox and modal |
//! | [`lightbox`] | Image preview overlay |
//! | [`modal`] | Project preview modal |
//! | [`contact`] | Copy-email feedback and required-field validation |
//! | [`theme`] | Persisted light/dark theme |
//! | `dom`, `footer`, `boot` | Browser glue (`browser` feature only) |

pub mod anchor;
pub mod config;
pub mod consts;
pub mod contact;
pub mod error;
pub mod go_back;
pub mod lightbox;
pub mod modal;
pub mod nav;
pub mod overlay;
pub mod scroll;
pub mod scrollspy;
pub mod theme;

#[cfg(feature = "browser")]
mod boot;
#[cfg(feature = "browser")]
mod dom;
#[cfg(feature = "browser")]
mod footer;

#[cfg(feature = "browser")]
use wasm_bindgen::prelude::wasm_bindgen;

/// WASM entry point, run once when the module is instantiated.
#[cfg(feature = "browser")]
#[wasm_bindgen(start)]
pub fn start() {
    console_error_panic_hook::set_once();
    boot::run();
}
