//! Root application component wiring the countdown tick and theme state.

use leptos::prelude::*;

use crate::components::countdown_panel::CountdownPanel;
use crate::components::theme_toggle::ThemeToggle;
use crate::state::countdown::initial_units;
use crate::state::theme::{ThemeResolver, effective_dark};
use crate::util::color_scheme::MediaQuery;
use crate::util::dark_mode;
use crate::util::prefs::LocalStorage;

/// Root component.
///
/// Owns the countdown snapshot, the one-second tick, the persisted theme
/// preference, and the platform color-scheme subscription. Children read
/// shared state through context.
#[component]
pub fn App() -> impl IntoView {
    let resolver = ThemeResolver::new(LocalStorage, MediaQuery);

    let units = RwSignal::new(initial_units());
    let preference = RwSignal::new(resolver.load());
    let system_dark = RwSignal::new(resolver.system_dark());

    provide_context(units);
    provide_context(preference);

    // Effective mode is derived, never stored: an explicit preference wins,
    // `System` follows the live platform signal.
    let dark = Memo::new(move |_| effective_dark(preference.get(), system_dark.get()));
    Effect::new(move || dark_mode::apply(dark.get()));

    #[cfg(feature = "csr")]
    {
        use gloo_timers::callback::Interval;

        use crate::state::countdown::time_units;
        use crate::util::clock::{WallTime, ms_until_midnight};

        // One-second countdown tick. The handle lives in owner-local storage
        // so the browser timer is cleared when the view is torn down.
        let tick = Interval::new(1_000, move || {
            units.set(time_units(ms_until_midnight(WallTime::now())));
        });
        let _tick = StoredValue::new_local(tick);

        // Mirror platform signal changes into the reactive graph; the
        // listener detaches when the subscription is dropped on teardown.
        let sub = resolver.subscribe(Box::new(move |is_dark| system_dark.set(is_dark)));
        let _sub = StoredValue::new_local(sub);

        log::info!("countdown tick and color-scheme subscription armed");
    }

    view! {
        <main class="app">
            <header class="app__header">
                <h1 class="app__title">"Time Left Today"</h1>
                <ThemeToggle/>
            </header>
            <CountdownPanel/>
        </main>
    }
}
