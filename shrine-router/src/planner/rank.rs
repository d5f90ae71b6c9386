//! Route ranking for search results.
//!
//! Orders finished routes fastest-first and renders them as the lines of
//! the ranked report.

use std::fmt;

use crate::domain::{Route, ShrinePath};

/// Rank routes by total time, fastest first.
///
/// The sort is stable, so routes with equal times keep the order the
/// search found them in.
pub fn rank_routes(mut routes: Vec<Route>) -> Vec<Route> {
    routes.sort_by(|a, b| a.time().total_cmp(&b.time()));
    routes
}

/// One line of the ranked report.
#[derive(Debug, Clone, PartialEq)]
pub struct RankedLine {
    /// 1-based position in the ranking.
    pub rank: usize,
    pub route: Route,
}

impl fmt::Display for RankedLine {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{:02} | {} | {:.2}",
            self.rank,
            ShrinePath::of(self.route.shrines()),
            self.route.time()
        )
    }
}

/// Rank `routes` and number them for the report.
///
/// # Examples
///
/// ```
/// use shrine_router::domain::{Route, ShrineName};
/// use shrine_router::planner::render_report;
///
/// let slow = Route::new(vec![ShrineName::Stasis, ShrineName::Bombs], 90.5);
/// let fast = Route::new(vec![ShrineName::Bombs, ShrineName::Stasis], 42.0);
///
/// let lines = render_report(vec![slow, fast]);
/// assert_eq!(lines[0].to_string(), "01 | bombs, stasis | 42.00");
/// assert_eq!(lines[1].to_string(), "02 | stasis, bombs | 90.50");
/// ```
pub fn render_report(routes: Vec<Route>) -> Vec<RankedLine> {
    rank_routes(routes)
        .into_iter()
        .enumerate()
        .map(|(i, route)| RankedLine { rank: i + 1, route })
        .collect()
}
