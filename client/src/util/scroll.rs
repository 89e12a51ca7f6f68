//! Window scrolling helpers.
//!
//! Browser-only; SSR paths no-op.

/// Smoothly scroll the window back to the origin.
pub fn scroll_to_top() {
    #[cfg(feature = "hydrate")]
    {
        let Some(window) = web_sys::window() else {
            return;
        };
        let options = web_sys::ScrollToOptions::new();
        options.set_top(0.0);
        options.set_left(0.0);
        options.set_behavior(web_sys::ScrollBehavior::Smooth);
        window.scroll_to_with_scroll_to_options(&options);
    }
}
