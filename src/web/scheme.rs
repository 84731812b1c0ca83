//! `matchMedia`-backed OS color-scheme signal.

use wasm_bindgen::JsCast;
use wasm_bindgen::closure::Closure;

use crate::caps::SchemeSignal;
use crate::consts::SCHEME_QUERY;

/// Queries `(prefers-color-scheme: dark)` through `window.matchMedia`.
#[derive(Default)]
pub struct MediaScheme;

impl MediaScheme {
    #[must_use]
    pub fn new() -> Self {
        Self
    }

    fn query() -> Option<web_sys::MediaQueryList> {
        super::window()?.match_media(SCHEME_QUERY).ok().flatten()
    }
}

impl SchemeSignal for MediaScheme {
    fn prefers_dark(&self) -> Option<bool> {
        Self::query().map(|mql| mql.matches())
    }

    fn subscribe(&self, on_change: Box<dyn Fn(bool)>) {
        let Some(mql) = Self::query() else { return };

        let listener = Closure::wrap(Box::new(move |event: web_sys::MediaQueryListEvent| {
            on_change(event.matches());
        }) as Box<dyn FnMut(_)>);

        // Lives for the page lifetime; never unregistered.
        if mql
            .add_event_listener_with_callback("change", listener.as_ref().unchecked_ref())
            .is_ok()
        {
            listener.forget();
        }
    }
}
