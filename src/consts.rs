//! Fixed strings shared by the controller and the browser wiring.

// ── Persistence ─────────────────────────────────────────────────

/// `localStorage` key holding the persisted preference (`"true"` / `"false"`).
pub const STORAGE_KEY: &str = "site-dark-mode";

// ── DOM markers ─────────────────────────────────────────────────

/// Class toggled on the root element; external stylesheets key off its presence.
pub const DARK_CLASS: &str = "dark-mode";

/// Selector identifying toggle controls in the page markup.
pub const TOGGLE_SELECTOR: &str = ".dark-mode-toggle";

/// Media query string for the OS color-scheme signal.
pub const SCHEME_QUERY: &str = "(prefers-color-scheme: dark)";

// ── Control labels ──────────────────────────────────────────────

/// Display text while dark mode is active (the control offers the way out).
pub const LABEL_WHEN_DARK: &str = "Light Mode";

/// Display text while light mode is active.
pub const LABEL_WHEN_LIGHT: &str = "Dark Mode";

pub const ARIA_WHEN_DARK: &str = "Switch to light mode";
pub const ARIA_WHEN_LIGHT: &str = "Switch to dark mode";

/// Display text and accessibility label for a control, given current state.
#[must_use]
pub fn control_labels(dark: bool) -> (&'static str, &'static str) {
    if dark {
        (LABEL_WHEN_DARK, ARIA_WHEN_DARK)
    } else {
        (LABEL_WHEN_LIGHT, ARIA_WHEN_LIGHT)
    }
}
