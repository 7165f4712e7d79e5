//! Dark mode initialization and toggle.
//!
//! Reads the user's preference from `localStorage` and toggles the `dark`
//! class on the `<html>` element. Toggle writes back to `localStorage` and
//! updates that class. Requires a browser environment.
//!
//! TRADE-OFFS
//! ==========
//! Preference persistence is best-effort browser-only behavior; SSR paths
//! no-op so server rendering stays deterministic. The site is designed dark
//! first, so a missing preference means dark.

#[cfg(test)]
#[path = "dark_mode_test.rs"]
mod dark_mode_test;

#[cfg(feature = "hydrate")]
const STORAGE_KEY: &str = "adbuy_dark";

pub const DARK_CLASS: &str = "dark";
/// Theme used before any preference is stored, and for server rendering.
pub const DEFAULT_DARK: bool = true;

/// Class list the root element carries for a given theme. The SSR shell
/// renders `root_class(DEFAULT_DARK)`.
#[must_use]
pub fn root_class(enabled: bool) -> &'static str {
    if enabled { DARK_CLASS } else { "" }
}

/// Read the dark mode preference from localStorage (default: dark).
pub fn read_preference() -> bool {
    #[cfg(feature = "hydrate")]
    {
        let Some(window) = web_sys::window() else {
            return DEFAULT_DARK;
        };
        if let Ok(Some(storage)) = window.local_storage() {
            if let Ok(Some(val)) = storage.get_item(STORAGE_KEY) {
                return val != "false";
            }
        }
        DEFAULT_DARK
    }
    #[cfg(not(feature = "hydrate"))]
    {
        DEFAULT_DARK
    }
}

/// Add or remove the `dark` class on the `<html>` element.
pub fn apply(enabled: bool) {
    #[cfg(feature = "hydrate")]
    {
        if let Some(el) = web_sys::window()
            .and_then(|w| w.document())
            .and_then(|doc| doc.document_element())
        {
            let _ = el.class_list().toggle_with_force(DARK_CLASS, enabled);
        }
    }
    #[cfg(not(feature = "hydrate"))]
    {
        let _ = enabled;
    }
}

/// Toggle dark mode and persist the new preference to localStorage.
pub fn toggle(current: bool) -> bool {
    let next = !current;
    apply(next);
    #[cfg(feature = "hydrate")]
    {
        if let Some(window) = web_sys::window() {
            if let Ok(Some(storage)) = window.local_storage() {
                let _ = storage.set_item(STORAGE_KEY, if next { "true" } else { "false" });
            }
        }
    }
    next
}
