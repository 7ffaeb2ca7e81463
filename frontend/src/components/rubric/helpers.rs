//! Utility functions for the grading rubric form.
//!
//! - **User Feedback**: temporary "toast" notifications replacing blocking alerts.
//! - **Navigation**: scrolling back to the editor after a rubric is loaded.
//! - **Formatting**: rendering point totals the way the form displays them.

use gloo_timers::future::TimeoutFuture;
use wasm_bindgen::JsCast;
use web_sys::{HtmlElement, ScrollBehavior, ScrollToOptions};

const TOAST_MS: u32 = 3000;

/// Displays a temporary notification message at the bottom of the screen.
///
/// The toast is a styled `div` appended to `<body>` that removes itself
/// after a few seconds. Text is inserted as text content, never as HTML,
/// since it can contain a student's name.
pub fn show_toast(message: &str) {
    let Some(document) = web_sys::window().and_then(|w| w.document()) else {
        return;
    };
    if let (Ok(toast), Some(body)) = (document.create_element("div"), document.body()) {
        toast.set_text_content(Some(message));
        let html_toast: HtmlElement = toast.unchecked_into();
        html_toast.set_class_name("toast");

        if body.append_child(&html_toast).is_ok() {
            wasm_bindgen_futures::spawn_local(async move {
                TimeoutFuture::new(TOAST_MS).await;
                if let Some(parent) = html_toast.parent_node() {
                    parent.remove_child(&html_toast).ok();
                }
            });
        }
    }
}

/// Smoothly scrolls the window back to the top of the form.
pub fn scroll_to_top() {
    if let Some(window) = web_sys::window() {
        let options = ScrollToOptions::new();
        options.set_top(0.0);
        options.set_behavior(ScrollBehavior::Smooth);
        window.scroll_to_with_scroll_to_options(&options);
    }
}

/// Formats a point value without a trailing `.0` for whole numbers.
pub fn format_points(points: f64) -> String {
    // Adding zero turns -0.0 into 0.0.
    format!("{}", points + 0.0)
}

#[cfg(test)]
mod tests {
    use super::format_points;

    #[test]
    fn whole_numbers_have_no_fraction() {
        assert_eq!(format_points(100.0), "100");
        assert_eq!(format_points(0.0), "0");
        assert_eq!(format_points(-0.0), "0");
    }

    #[test]
    fn fractions_are_kept() {
        assert_eq!(format_points(52.5), "52.5");
    }
}
