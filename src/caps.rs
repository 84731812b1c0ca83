//! Capability seams between the controller and its host environment.
//!
//! The controller never touches `window`, `document`, or `localStorage`
//! directly. Each browser global it needs is narrowed to a small trait so the
//! logic in [`crate::controller`] stays pure and runs under native tests with
//! in-memory fakes. The real implementations live in [`crate::web`].

/// Durable per-origin key-value storage for the preference string.
///
/// Reads and writes are best-effort: a `None` from `get` means "no explicit
/// choice yet" whether the key is absent or the storage API is unavailable.
pub trait PreferenceStore {
    fn get(&self) -> Option<String>;
    fn set(&self, value: &str);
}

/// The operating system's live color-scheme preference.
pub trait SchemeSignal {
    /// Current OS preference, or `None` when the signal API is unavailable.
    fn prefers_dark(&self) -> Option<bool>;

    /// Register a page-lifetime change listener. No-op when the signal API
    /// is unavailable; there is no way to unsubscribe.
    fn subscribe(&self, on_change: Box<dyn Fn(bool)>);
}

/// The marker class on the document's root visual container.
pub trait MarkerTarget {
    fn add(&self);
    fn remove(&self);
}

/// The set of toggle controls currently in the page.
pub trait ControlRegistry {
    /// Set every control's display text and accessibility label.
    fn set_labels(&self, text: &str, aria: &str);

    /// Label every control and attach the activation handler, deferring
    /// until the document is safe to traverse. Controls added to the page
    /// afterwards are not picked up.
    fn bind(&self, text: &'static str, aria: &'static str, on_activate: Box<dyn Fn()>);
}
