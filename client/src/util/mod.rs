//! Pure helpers shared across panels and modals.
//!
//! SYSTEM CONTEXT
//! ==============
//! Nothing in here touches the DOM or reactive state, so every helper is
//! unit-testable without a browser and identical under SSR and hydration.

pub mod chart;
pub mod counter;
pub mod mount_guard;
pub mod recycler_filter;
pub mod validation;
