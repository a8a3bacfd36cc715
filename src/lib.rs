//! # timeleft
//!
//! Leptos + WASM widget showing the time remaining until the next local
//! midnight as three dot grids (hours / minutes / seconds), with a
//! light/dark/system theme control persisted in `localStorage`.
//!
//! Pure countdown and theme-resolution logic lives in `state` and runs under
//! native `cargo test`; browser integration (localStorage, matchMedia,
//! timers, DOM) lives in `util` behind the `csr` feature.

pub mod app;
pub mod components;
pub mod state;
pub mod util;
