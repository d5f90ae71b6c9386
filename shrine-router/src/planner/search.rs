//! Depth-first route enumeration.
//!
//! Explores every ordering of distinct shrines up to the configured route
//! length, tracking which runes have been collected so far. Each hop costs
//! the travel time from the previous shrine plus the interior time of the
//! new one, both resolved against the runes held at that point. Branches
//! with missing data are pruned and recorded as diagnostics.

use tracing::{debug, trace};

use crate::dataset::Dataset;
use crate::domain::{Route, RuneSet, ShrineName};

use super::config::SearchConfig;
use super::diagnostic::Diagnostic;

/// Error from route search.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum SearchError {
    /// Invalid search request
    #[error("invalid search request: {0}")]
    InvalidRequest(String),
}

/// Result of route search.
#[derive(Debug, Clone)]
pub struct SearchResult {
    /// Finished routes, in the order the search completed them.
    pub routes: Vec<Route>,

    /// Rejected branches and anomalous values, in traversal order.
    pub diagnostics: Vec<Diagnostic>,

    /// Number of partial routes explored during search.
    pub routes_explored: usize,
}

impl SearchResult {
    /// Create an empty result.
    pub fn empty() -> Self {
        Self {
            routes: Vec::new(),
            diagnostics: Vec::new(),
            routes_explored: 0,
        }
    }
}

/// Everything a search produces, threaded through the recursion.
struct Collector {
    result: SearchResult,
}

impl Collector {
    fn record(&mut self, diagnostic: Diagnostic) {
        debug!(%diagnostic, "pruned");
        self.result.diagnostics.push(diagnostic);
    }

    fn finish(&mut self, route: Route) {
        trace!(route = %route.path(), time = route.time(), "finished route");
        self.result.routes.push(route);
    }
}

/// Route planner over a fixed dataset.
pub struct Planner<'a> {
    dataset: &'a Dataset,
    config: &'a SearchConfig,
}

impl<'a> Planner<'a> {
    /// Create a new planner.
    pub fn new(dataset: &'a Dataset, config: &'a SearchConfig) -> Self {
        Self { dataset, config }
    }

    /// Enumerate every route of the configured length.
    ///
    /// Missing data never fails the search; it only prunes branches. The
    /// only error is a configuration that cannot describe a route.
    pub fn search(&self) -> Result<SearchResult, SearchError> {
        self.config.validate()?;

        let mut out = Collector {
            result: SearchResult::empty(),
        };

        for shrine in ShrineName::ALL {
            let Some(start) = self.dataset.start(shrine) else {
                out.record(Diagnostic::MissingStart { shrine });
                continue;
            };

            // Nothing has been collected before the first shrine.
            let Some(interior) = self.dataset.interior(shrine).resolve(RuneSet::EMPTY) else {
                out.record(Diagnostic::MissingStartInterior { shrine });
                continue;
            };

            self.propagate(Route::start(shrine, start + interior), &mut out);
        }

        debug!(
            routes = out.result.routes.len(),
            diagnostics = out.result.diagnostics.len(),
            explored = out.result.routes_explored,
            "search complete"
        );

        Ok(out.result)
    }

    /// Extend `route` by every reachable shrine, or close it off if it is
    /// already full length.
    fn propagate(&self, route: Route, out: &mut Collector) {
        out.result.routes_explored += 1;

        if !route.time().is_finite() {
            out.record(Diagnostic::NonFiniteTime {
                route: route.shrines().to_vec(),
                time: route.time(),
            });
            return;
        }

        let Some(last) = route.last() else {
            return;
        };
        let held = route.runes_held();

        if route.len() >= self.config.route_length {
            match self.dataset.end(last).resolve(held) {
                Some(end) => out.finish(route.finish(end)),
                None => out.record(Diagnostic::MissingEnd {
                    route: route.shrines().to_vec(),
                    held,
                }),
            }
            return;
        }

        for next in Dataset::destinations(last) {
            let attempted = || {
                let mut shrines = route.shrines().to_vec();
                shrines.push(next);
                shrines
            };

            let Some(entry) = self.dataset.exterior(last, next) else {
                out.record(Diagnostic::MissingExteriorEntry {
                    route: attempted(),
                    from: last,
                    to: next,
                    held,
                });
                continue;
            };

            if route.contains(next) {
                out.record(Diagnostic::InvalidRevisit { route: attempted() });
                continue;
            }

            let Some(exterior) = entry.resolve(held) else {
                out.record(Diagnostic::MissingExterior {
                    route: attempted(),
                    from: last,
                    to: next,
                    held,
                });
                continue;
            };

            // A rune is usable inside the shrine that grants it.
            let arrived = held.with_shrine(next);
            let Some(interior) = self.dataset.interior(next).resolve(arrived) else {
                out.record(Diagnostic::MissingInterior {
                    route: attempted(),
                    shrine: next,
                    held: arrived,
                });
                continue;
            };

            // Non-finite hops are reported but not pruned here; the
            // accumulated time check on the next call decides.
            if !exterior.is_finite() {
                out.record(Diagnostic::AnomalousExterior {
                    from: last,
                    to: next,
                    time: exterior,
                });
            }
            if !interior.is_finite() {
                out.record(Diagnostic::AnomalousInterior {
                    shrine: next,
                    time: interior,
                });
            }

            trace!(route = %route.path_with(next), exterior, interior, "extending");
            self.propagate(route.extend(next, exterior + interior), out);
        }
    }
}

#[cfg(test)]
#[path = "search_tests.rs"]
mod tests;
