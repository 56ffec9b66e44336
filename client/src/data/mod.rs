//! Fixed mock datasets rendered by the panels.
//!
//! DESIGN
//! ======
//! Every dataset is a `const` table of `'static` records with one canonical
//! schema per entity. Nothing here is ever mutated; panels filter or select
//! views over these slices and the page reload is the only "reset".

pub mod awareness;
pub mod collection_points;
pub mod impact;
pub mod leaderboard;
pub mod pickups;
pub mod profile;
pub mod recyclers;
