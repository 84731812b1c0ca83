//! # darkmode
//!
//! Client-side dark mode toggle for the browser, compiled to WebAssembly.
//! Reads the persisted preference from `localStorage` (falling back to the
//! OS `prefers-color-scheme` signal), applies the `dark-mode` class to the
//! `<html>` element before first paint, wires up every `.dark-mode-toggle`
//! control on the page, and tracks live OS scheme changes until the user
//! makes an explicit choice.
//!
//! ## Module layout
//!
//! | Module | Role |
//! |--------|------|
//! | [`controller`] | The pure, natively-testable [`controller::ThemeController`] |
//! | [`caps`] | Capability traits the controller is injected with |
//! | [`web`] | `web-sys` implementations of the capabilities and boot wiring |
//! | [`consts`] | Storage key, class names, labels |

use std::cell::RefCell;
use std::rc::Rc;

use wasm_bindgen::prelude::*;

pub mod caps;
pub mod consts;
pub mod controller;
pub mod web;

thread_local! {
    static CONTROLLER: RefCell<Option<Rc<web::WebController>>> = const { RefCell::new(None) };
}

/// Module entry point: install logging, boot the controller, and keep it
/// alive for [`toggle_dark_mode`].
#[wasm_bindgen(start)]
pub fn start() {
    console_error_panic_hook::set_once();
    let _ = console_log::init_with_level(log::Level::Debug);

    CONTROLLER.with(|slot| {
        let mut slot = slot.borrow_mut();
        if slot.is_none() {
            *slot = Some(web::boot());
        }
    });
}

/// Manual toggle, callable from other scripts or the console. Equivalent to
/// activating any bound control.
#[wasm_bindgen]
pub fn toggle_dark_mode() {
    CONTROLLER.with(|slot| {
        if let Some(controller) = slot.borrow().as_ref() {
            controller.toggle();
        }
    });
}
