//! Print the current page through the browser.

#[cfg(test)]
#[path = "print_test.rs"]
mod print_test;

/// Open the browser print dialog. No-op outside the browser.
pub fn print_page() {
    #[cfg(feature = "csr")]
    {
        if let Some(window) = web_sys::window() {
            if let Err(e) = window.print() {
                leptos::logging::warn!("print failed: {e:?}");
            }
        }
    }
}
