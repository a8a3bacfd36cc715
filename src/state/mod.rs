//! Widget state models.
//!
//! DESIGN
//! ======
//! State is split by domain (`countdown`, `theme`) so components depend on
//! small focused models, and every computation here is pure so it tests
//! natively without a browser.

pub mod countdown;
pub mod theme;
