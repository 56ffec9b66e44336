//! Root-owned reactive state.
//!
//! ARCHITECTURE
//! ============
//! `HomePage` owns one `RwSignal` per state struct. Children receive read-only
//! signals and request changes through callbacks; only the owner mutates.

pub mod auth;
pub mod forms;
pub mod ui;
