//! Client-side state containers.
//!
//! DESIGN
//! ======
//! `locale` and `theme` are the two session-wide preferences, provided once at
//! the app root as `RwSignal` contexts. `load` and `ui` model page-local state.
//! None of these modules depend on Leptos; side effects go through the
//! `util::storage` and `util::document` seams.

pub mod load;
pub mod locale;
pub mod theme;
pub mod ui;
