//! Reusable UI component modules.
//!
//! SYSTEM CONTEXT
//! ==============
//! Components render site chrome, dashboard widgets, and the two modal forms.
//! They take plain values or read-only signals as props and report user
//! intent through `Callback` props; `HomePage` applies the state change.

pub mod animated_counter;
pub mod charts;
pub mod collection_map;
pub mod footer;
pub mod hero;
pub mod login_modal;
pub mod navigation;
pub mod page_layout;
pub mod pickup_modal;
pub mod stat_card;
