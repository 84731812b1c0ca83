//! The theme preference controller.
//!
//! One straight-line component: read the persisted preference (or fall back
//! to the OS color scheme), mirror it onto the document as the `dark-mode`
//! marker class, keep every toggle control's label in sync, and track live
//! OS scheme changes while the user has not made an explicit choice.
//!
//! All side effects go through the capability traits in [`crate::caps`], so
//! everything here is testable without a browser.

use std::rc::Rc;

use crate::caps::{ControlRegistry, MarkerTarget, PreferenceStore, SchemeSignal};
use crate::consts::control_labels;

#[cfg(test)]
#[path = "controller_test.rs"]
mod controller_test;

/// Stateless service over the four injected capabilities.
///
/// The controller holds no theme state of its own: every decision re-reads
/// the store, so the persisted preference is the single source of truth.
pub struct ThemeController<S, Q, M, C> {
    store: S,
    scheme: Q,
    marker: M,
    controls: C,
}

impl<S, Q, M, C> ThemeController<S, Q, M, C>
where
    S: PreferenceStore + 'static,
    Q: SchemeSignal + 'static,
    M: MarkerTarget + 'static,
    C: ControlRegistry + 'static,
{
    pub fn new(store: S, scheme: Q, marker: M, controls: C) -> Self {
        Self { store, scheme, marker, controls }
    }

    /// The user's explicit choice, if one has been persisted.
    ///
    /// Only the exact string `"true"` reads as dark; any other stored value
    /// reads as an explicit light preference.
    #[must_use]
    pub fn preference(&self) -> Option<bool> {
        self.store.get().map(|value| value == "true")
    }

    /// Persist an explicit choice. Best-effort, never fails loudly.
    pub fn save_preference(&self, dark: bool) {
        self.store.set(if dark { "true" } else { "false" });
    }

    /// Add or remove the marker class. Idempotent, and safe to call before
    /// the rest of the page exists; this is what runs before first paint.
    pub fn apply_visual_state(&self, dark: bool) {
        if dark {
            self.marker.add();
        } else {
            self.marker.remove();
        }
    }

    /// The effective preference: explicit choice if present, OS scheme
    /// otherwise, light as the last resort.
    ///
    /// A dark OS scheme with no explicit choice is adopted and persisted; a
    /// light one is not, so absence stays absent and live tracking in
    /// [`Self::handle_scheme_change`] keeps working.
    pub fn resolve_effective_preference(&self) -> bool {
        if let Some(explicit) = self.preference() {
            return explicit;
        }
        if self.scheme.prefers_dark() == Some(true) {
            self.save_preference(true);
            return true;
        }
        false
    }

    /// Flip the theme, bringing the marker, storage, and every control's
    /// label along. The visual state changes before the labels do.
    pub fn toggle(&self) {
        let next = !self.resolve_effective_preference();
        self.apply_visual_state(next);
        self.save_preference(next);
        self.update_controls(next);
        log::debug!("dark mode toggled, dark={next}");
    }

    /// The OS scheme changed. Tracked transiently while no explicit
    /// preference exists; never persisted from this path, and a no-op once
    /// the user has chosen.
    pub fn handle_scheme_change(&self, dark: bool) {
        if self.preference().is_some() {
            return;
        }
        self.apply_visual_state(dark);
        self.update_controls(dark);
        log::debug!("tracking OS scheme change, dark={dark}");
    }

    /// Register the page-lifetime OS scheme listener. Change events route
    /// through [`Self::handle_scheme_change`], so the listener goes quiet
    /// (without being unregistered) once an explicit preference exists.
    pub fn subscribe_to_system_changes(self: &Rc<Self>) {
        let controller = Rc::clone(self);
        self.scheme.subscribe(Box::new(move |dark| controller.handle_scheme_change(dark)));
    }

    /// Label all current controls for `initial_dark` and wire their
    /// activation to [`Self::toggle`]. The registry defers across the
    /// DOM-readiness boundary if the document is still loading.
    pub fn bind_controls(self: &Rc<Self>, initial_dark: bool) {
        let (text, aria) = control_labels(initial_dark);
        let controller = Rc::clone(self);
        self.controls.bind(text, aria, Box::new(move || controller.toggle()));
    }

    /// Run the startup sequence: resolve the effective preference, apply it
    /// synchronously (before any readiness wait, so the correct theme is up
    /// before first paint), subscribe to OS changes, then bind controls.
    ///
    /// Every step is best-effort; a missing capability degrades to light
    /// with no live tracking rather than failing.
    pub fn initialize(self: &Rc<Self>) {
        let dark = self.resolve_effective_preference();
        self.apply_visual_state(dark);
        self.subscribe_to_system_changes();
        self.bind_controls(dark);
        log::info!("dark mode initialized, dark={dark}");
    }

    fn update_controls(&self, dark: bool) {
        let (text, aria) = control_labels(dark);
        self.controls.set_labels(text, aria);
    }
}
