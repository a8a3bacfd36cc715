//! Theme selection control: light, dark, or follow the system.

use leptos::prelude::*;

use crate::state::theme::{ThemePreference, ThemeResolver};
use crate::util::color_scheme::MediaQuery;
use crate::util::prefs::LocalStorage;

/// Three-way theme control. Each selection persists the preference verbatim
/// and the root component re-resolves the effective mode reactively.
#[component]
pub fn ThemeToggle() -> impl IntoView {
    let preference = expect_context::<RwSignal<ThemePreference>>();
    let resolver = ThemeResolver::new(LocalStorage, MediaQuery);

    let option = move |pref: ThemePreference, label: &'static str| {
        let class = move || {
            if preference.get() == pref {
                "theme-toggle__option theme-toggle__option--active"
            } else {
                "theme-toggle__option"
            }
        };
        let on_select = move |_| {
            resolver.select(pref);
            preference.set(pref);
            #[cfg(feature = "csr")]
            log::info!("theme preference set to {}", pref.as_str());
        };
        view! {
            <button class=class on:click=on_select>
                {label}
            </button>
        }
    };

    view! {
        <div class="theme-toggle" role="group" aria-label="Theme">
            {option(ThemePreference::Light, "Light")}
            {option(ThemePreference::Dark, "Dark")}
            {option(ThemePreference::System, "System")}
        </div>
    }
}
