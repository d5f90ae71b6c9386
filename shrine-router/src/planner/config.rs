//! Search configuration for the route planner.

use crate::domain::ShrineName;

use super::search::SearchError;

/// Configuration parameters for route search.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SearchConfig {
    /// Number of shrines every finished route visits.
    pub route_length: usize,
}

impl SearchConfig {
    /// Create a new configuration with the given route length.
    pub fn new(route_length: usize) -> Self {
        Self { route_length }
    }

    /// Check the configuration describes a searchable route.
    ///
    /// Routes never revisit a shrine, so they can be at most as long as
    /// the shrine vocabulary.
    pub fn validate(&self) -> Result<(), SearchError> {
        if self.route_length == 0 {
            return Err(SearchError::InvalidRequest(
                "route length must be at least 1".to_string(),
            ));
        }
        if self.route_length > ShrineName::COUNT {
            return Err(SearchError::InvalidRequest(format!(
                "route length {} exceeds the {} available shrines",
                self.route_length,
                ShrineName::COUNT
            )));
        }
        Ok(())
    }
}

impl Default for SearchConfig {
    fn default() -> Self {
        Self {
            route_length: ShrineName::COUNT - 1,
        }
    }
}
