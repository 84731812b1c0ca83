//! Marker class on the root `<html>` element.

use crate::caps::MarkerTarget;
use crate::consts::DARK_CLASS;

/// Adds and removes the `dark-mode` class on `document.documentElement`.
///
/// Works before `DOMContentLoaded`: the root element exists as soon as the
/// document does, which is what lets the theme land before first paint.
#[derive(Default)]
pub struct RootMarker;

impl RootMarker {
    #[must_use]
    pub fn new() -> Self {
        Self
    }

    fn class_list() -> Option<web_sys::DomTokenList> {
        Some(super::document()?.document_element()?.class_list())
    }
}

impl MarkerTarget for RootMarker {
    fn add(&self) {
        if let Some(list) = Self::class_list() {
            let _ = list.add_1(DARK_CLASS);
        }
    }

    fn remove(&self) {
        if let Some(list) = Self::class_list() {
            let _ = list.remove_1(DARK_CLASS);
        }
    }
}
