//! Page scrolling for in-page navigation.
//!
//! Browser-only; both helpers are no-ops during SSR and in native tests.

#[cfg(test)]
#[path = "scroll_test.rs"]
mod scroll_test;

/// Element id for a landing-page section anchor such as `#pricing`.
#[must_use]
pub fn anchor_id(href: &str) -> &str {
    href.trim_start_matches('#')
}

/// Jump to the top of the document.
pub fn scroll_to_top() {
    #[cfg(feature = "hydrate")]
    {
        if let Some(window) = web_sys::window() {
            window.scroll_to_with_x_and_y(0.0, 0.0);
        }
    }
}

/// Scroll the element with the given id into view.
///
/// Deferred by one animation frame so a freshly rendered landing page has
/// its sections mounted before the lookup.
pub fn scroll_to_section(id: &str) {
    #[cfg(feature = "hydrate")]
    {
        let id = anchor_id(id).to_owned();
        leptos::prelude::request_animation_frame(move || {
            if let Some(el) = web_sys::window()
                .and_then(|w| w.document())
                .and_then(|doc| doc.get_element_by_id(&id))
            {
                el.scroll_into_view();
            }
        });
    }
    #[cfg(not(feature = "hydrate"))]
    {
        let _ = id;
    }
}
