//! `localStorage`-backed preference store.

use std::cell::RefCell;

use crate::caps::PreferenceStore;
use crate::consts::STORAGE_KEY;

/// Persists the preference string in `localStorage`, falling back to an
/// in-memory session value when storage is unavailable (disabled, denied,
/// or not a browser) so in-session toggling keeps working.
///
/// The fallback is never consulted while real storage works.
#[derive(Default)]
pub struct LocalStore {
    session: RefCell<Option<String>>,
}

impl LocalStore {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    fn storage() -> Option<web_sys::Storage> {
        super::window().and_then(|w| w.local_storage().ok().flatten())
    }
}

impl PreferenceStore for LocalStore {
    fn get(&self) -> Option<String> {
        match Self::storage() {
            Some(storage) => storage.get_item(STORAGE_KEY).ok().flatten(),
            None => self.session.borrow().clone(),
        }
    }

    fn set(&self, value: &str) {
        match Self::storage() {
            Some(storage) => {
                let _ = storage.set_item(STORAGE_KEY, value);
            }
            None => *self.session.borrow_mut() = Some(value.to_owned()),
        }
    }
}
