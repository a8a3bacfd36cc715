//! Platform color-scheme signal: current value plus change subscription.
//!
//! SYSTEM CONTEXT
//! ==============
//! `ColorSchemeSignal` models the platform's dark-mode preference as an
//! injectable capability so the theme resolver can be driven by a fake in
//! tests. `MediaQuery` is the browser implementation over
//! `(prefers-color-scheme: dark)`.

#[cfg(test)]
#[path = "color_scheme_test.rs"]
mod color_scheme_test;

#[cfg(feature = "csr")]
const PREFERS_DARK: &str = "(prefers-color-scheme: dark)";

/// Live boolean signal for "does the platform prefer dark mode".
pub trait ColorSchemeSignal {
    /// Current value of the signal.
    fn is_dark(&self) -> bool;

    /// Register `on_change` for future value changes. The listener stays
    /// attached until the returned subscription is dropped.
    fn subscribe(&self, on_change: Box<dyn FnMut(bool)>) -> Subscription;
}

/// Detaches a change listener when dropped.
pub struct Subscription {
    detach: Option<Box<dyn FnOnce()>>,
}

impl Subscription {
    /// A subscription that tears down by running `detach`.
    pub fn new(detach: impl FnOnce() + 'static) -> Self {
        Self { detach: Some(Box::new(detach)) }
    }

    /// A subscription with nothing to tear down (signal unavailable).
    pub fn detached() -> Self {
        Self { detach: None }
    }
}

impl Drop for Subscription {
    fn drop(&mut self) {
        if let Some(detach) = self.detach.take() {
            detach();
        }
    }
}

/// Browser `matchMedia` signal (`csr` builds); permanently light elsewhere.
#[derive(Clone, Copy, Debug, Default)]
pub struct MediaQuery;

impl ColorSchemeSignal for MediaQuery {
    fn is_dark(&self) -> bool {
        #[cfg(feature = "csr")]
        {
            query_list().map_or(false, |list| list.matches())
        }
        #[cfg(not(feature = "csr"))]
        {
            false
        }
    }

    fn subscribe(&self, on_change: Box<dyn FnMut(bool)>) -> Subscription {
        #[cfg(feature = "csr")]
        {
            use wasm_bindgen::JsCast;
            use wasm_bindgen::closure::Closure;

            let Some(list) = query_list() else {
                return Subscription::detached();
            };

            let mut on_change = on_change;
            let closure = Closure::wrap(Box::new(move |ev: web_sys::MediaQueryListEvent| {
                on_change(ev.matches());
            }) as Box<dyn FnMut(web_sys::MediaQueryListEvent)>);

            if list
                .add_event_listener_with_callback("change", closure.as_ref().unchecked_ref())
                .is_err()
            {
                return Subscription::detached();
            }

            // The closure is owned by the detach handler, which keeps the
            // listener alive until the subscription is dropped.
            Subscription::new(move || {
                let _ = list.remove_event_listener_with_callback("change", closure.as_ref().unchecked_ref());
            })
        }
        #[cfg(not(feature = "csr"))]
        {
            let _ = on_change;
            Subscription::detached()
        }
    }
}

#[cfg(feature = "csr")]
fn query_list() -> Option<web_sys::MediaQueryList> {
    web_sys::window()?.match_media(PREFERS_DARK).ok().flatten()
}
