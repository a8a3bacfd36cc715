//! The three labelled dot grids for hours, minutes, and seconds.

use leptos::prelude::*;

use crate::components::dot_grid::DotGrid;
use crate::state::countdown::TimeUnit;

/// Renders the countdown snapshot provided by the root component.
///
/// The snapshot signal is replaced wholesale each tick, so the grids are
/// re-rendered from a consistent trio every second.
#[component]
pub fn CountdownPanel() -> impl IntoView {
    let units = expect_context::<RwSignal<[TimeUnit; 3]>>();

    view! {
        <section class="countdown">
            {move || {
                units
                    .get()
                    .into_iter()
                    .map(|unit| view! { <DotGrid unit=unit/> })
                    .collect::<Vec<_>>()
            }}
        </section>
    }
}
