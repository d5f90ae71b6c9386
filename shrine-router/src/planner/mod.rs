//! Route planner using depth-first search.
//!
//! This module implements the core planning algorithm that answers:
//! "In which order should the shrines be visited to finish fastest?"
//!
//! The search enumerates every ordering of distinct shrines, resolving each
//! hop's time against the runes collected so far, and prunes branches whose
//! times are missing from the dataset. Finished routes are then ranked by
//! total time.

mod config;
mod diagnostic;
mod rank;
mod search;

pub use config::SearchConfig;
pub use diagnostic::{Diagnostic, DiagnosticKind};
pub use rank::{RankedLine, rank_routes, render_report};
pub use search::{Planner, SearchError, SearchResult};
