//! Utility helpers shared across the widget.
//!
//! SYSTEM CONTEXT
//! ==============
//! Utility modules isolate browser/environment concerns from component and
//! state logic. Browser calls are gated behind the `csr` feature so the rest
//! of the crate compiles and tests natively.

pub mod clock;
pub mod color_scheme;
pub mod dark_mode;
pub mod prefs;
