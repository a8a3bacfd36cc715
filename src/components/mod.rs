//! Leptos components for the countdown widget.

pub mod countdown_panel;
pub mod dot_grid;
pub mod theme_toggle;
