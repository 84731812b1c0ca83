//! Browser implementations of the capability traits, plus crate wiring.
//!
//! Everything in this module requires a browser environment; every `web-sys`
//! call is availability-checked and degrades silently, so a missing API
//! never propagates an error.

mod controls;
mod marker;
mod scheme;
mod storage;

pub use controls::DomControls;
pub use marker::RootMarker;
pub use scheme::MediaScheme;
pub use storage::LocalStore;

use std::rc::Rc;

use crate::controller::ThemeController;

/// The controller over the real browser capabilities.
pub type WebController = ThemeController<LocalStore, MediaScheme, RootMarker, DomControls>;

/// Build the controller and run the startup sequence.
pub fn boot() -> Rc<WebController> {
    let controller = Rc::new(ThemeController::new(
        LocalStore::new(),
        MediaScheme::new(),
        RootMarker::new(),
        DomControls::new(),
    ));
    controller.initialize();
    controller
}

/// The browser `window`, when running in one.
pub(crate) fn window() -> Option<web_sys::Window> {
    web_sys::window()
}

/// The current document, when running in a browser.
pub(crate) fn document() -> Option<web_sys::Document> {
    window().and_then(|w| w.document())
}
