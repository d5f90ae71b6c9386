//! Domain types for the shrine route planner.
//!
//! The shrine and rune vocabularies are closed enums, so every table
//! indexed by them is complete by construction.

mod route;
mod shrine;
mod time_entry;

pub use route::{Route, ShrinePath};
pub use shrine::{Rune, RuneSet, ShrineName};
pub use time_entry::TimeEntry;
