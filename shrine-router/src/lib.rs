//! Shrine route planner.
//!
//! Enumerates every order in which a fixed set of shrines can be visited,
//! where travel and interior times depend on which runes have been picked
//! up along the way, and ranks the complete routes by total time.

pub mod config;
pub mod dataset;
pub mod domain;
pub mod planner;
pub mod report;
