//! A single time unit rendered as a labelled grid of dots.

use leptos::prelude::*;

use crate::state::countdown::TimeUnit;

/// One dot-grid group: `unit.total` dots, the first `unit.remaining` lit.
#[component]
pub fn DotGrid(unit: TimeUnit) -> impl IntoView {
    view! {
        <div class="dot-grid">
            <div class="dot-grid__dots">
                {(0..unit.total)
                    .map(|i| {
                        let class = if i < unit.remaining {
                            "dot-grid__dot dot-grid__dot--lit"
                        } else {
                            "dot-grid__dot"
                        };
                        view! { <span class=class></span> }
                    })
                    .collect::<Vec<_>>()}
            </div>
            <span class="dot-grid__label">{unit.label}</span>
        </div>
    }
}
