//! Theme preference model and effective-mode resolution.
//!
//! DESIGN
//! ======
//! Resolution is pure (`effective_dark`); persistence and the platform
//! signal are injected capabilities so the resolver runs against fakes in
//! tests and against `localStorage` + `matchMedia` in the browser.

#[cfg(test)]
#[path = "theme_test.rs"]
mod theme_test;

use crate::util::color_scheme::{ColorSchemeSignal, Subscription};
use crate::util::prefs::PreferenceStore;

/// Storage key holding the persisted preference.
pub const THEME_KEY: &str = "theme";

/// The user's persisted theme choice. `System` defers to the platform's
/// dark-mode signal.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum ThemePreference {
    Light,
    Dark,
    #[default]
    System,
}

impl ThemePreference {
    /// The verbatim string persisted to storage.
    pub fn as_str(self) -> &'static str {
        match self {
            Self::Light => "light",
            Self::Dark => "dark",
            Self::System => "system",
        }
    }

    /// Parse a stored value; anything unrecognized falls back to `System`.
    pub fn parse(raw: &str) -> Self {
        match raw {
            "light" => Self::Light,
            "dark" => Self::Dark,
            _ => Self::System,
        }
    }
}

/// Resolve the effective display mode from a preference and the platform
/// signal's current value. Returns `true` for dark.
pub fn effective_dark(pref: ThemePreference, system_dark: bool) -> bool {
    match pref {
        ThemePreference::Light => false,
        ThemePreference::Dark => true,
        ThemePreference::System => system_dark,
    }
}

/// Theme resolver over injected storage and platform-signal capabilities.
#[derive(Clone, Copy, Debug, Default)]
pub struct ThemeResolver<S, C> {
    store: S,
    signal: C,
}

impl<S: PreferenceStore, C: ColorSchemeSignal> ThemeResolver<S, C> {
    pub fn new(store: S, signal: C) -> Self {
        Self { store, signal }
    }

    /// Read the persisted preference; absent or unparseable means `System`.
    pub fn load(&self) -> ThemePreference {
        self.store
            .get(THEME_KEY)
            .map_or(ThemePreference::System, |raw| ThemePreference::parse(&raw))
    }

    /// Persist an explicit selection verbatim and return the mode resolved
    /// against the live platform signal.
    pub fn select(&self, pref: ThemePreference) -> bool {
        self.store.set(THEME_KEY, pref.as_str());
        effective_dark(pref, self.signal.is_dark())
    }

    /// Current value of the platform signal.
    pub fn system_dark(&self) -> bool {
        self.signal.is_dark()
    }

    /// Follow platform signal changes; the listener detaches when the
    /// returned subscription is dropped.
    pub fn subscribe(&self, on_change: Box<dyn FnMut(bool)>) -> Subscription {
        self.signal.subscribe(on_change)
    }
}
