//! Page modules for the single-route dashboard.
//!
//! ARCHITECTURE
//! ============
//! `home` owns root UI and auth state and switches between the six tab
//! panels. Panels render static records and delegate widgets to
//! `components`.

pub mod awareness;
pub mod dashboard;
pub mod home;
pub mod leaderboard;
pub mod pickups;
pub mod profile;
pub mod recyclers;
