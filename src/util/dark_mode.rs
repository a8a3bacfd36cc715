//! Applies the resolved display mode to the document.
//!
//! Sets a `data-theme` attribute on the `<html>` element; the stylesheet
//! keys every color off that attribute. Off-browser builds no-op so native
//! tests stay deterministic.

#[cfg(test)]
#[path = "dark_mode_test.rs"]
mod dark_mode_test;

/// Apply the `data-theme` attribute on the `<html>` element.
pub fn apply(dark: bool) {
    #[cfg(feature = "csr")]
    {
        if let Some(doc) = web_sys::window().and_then(|w| w.document()) {
            if let Some(el) = doc.document_element() {
                let _ = el.set_attribute("data-theme", if dark { "dark" } else { "light" });
            }
        }
    }
    #[cfg(not(feature = "csr"))]
    {
        let _ = dark;
    }
}
