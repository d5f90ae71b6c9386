//! Routes through shrines.

use std::fmt;

use super::shrine::{RuneSet, ShrineName};

/// An ordered sequence of shrines with the time accumulated so far.
///
/// Routes are values: extending one produces a new route and leaves this
/// route untouched, so sibling branches of a search never share state.
#[derive(Debug, Clone, PartialEq)]
pub struct Route {
    shrines: Vec<ShrineName>,
    time: f64,
}

impl Route {
    /// A route that has visited only `first`.
    pub fn start(first: ShrineName, time: f64) -> Self {
        Self {
            shrines: vec![first],
            time,
        }
    }

    /// Create a route from its parts.
    pub fn new(shrines: Vec<ShrineName>, time: f64) -> Self {
        Self { shrines, time }
    }

    /// A new route visiting `next` after this one, with `added` more time.
    pub fn extend(&self, next: ShrineName, added: f64) -> Self {
        let mut shrines = Vec::with_capacity(self.shrines.len() + 1);
        shrines.extend_from_slice(&self.shrines);
        shrines.push(next);
        Self {
            shrines,
            time: self.time + added,
        }
    }

    /// This route with `added` more time and no further shrines.
    pub fn finish(&self, added: f64) -> Self {
        Self {
            shrines: self.shrines.clone(),
            time: self.time + added,
        }
    }

    pub fn shrines(&self) -> &[ShrineName] {
        &self.shrines
    }

    pub fn time(&self) -> f64 {
        self.time
    }

    pub fn len(&self) -> usize {
        self.shrines.len()
    }

    pub fn is_empty(&self) -> bool {
        self.shrines.is_empty()
    }

    /// The most recently visited shrine.
    pub fn last(&self) -> Option<ShrineName> {
        self.shrines.last().copied()
    }

    pub fn contains(&self, shrine: ShrineName) -> bool {
        self.shrines.contains(&shrine)
    }

    /// Runes held after visiting every shrine on this route.
    pub fn runes_held(&self) -> RuneSet {
        RuneSet::held_by(&self.shrines)
    }

    /// A displayable view of the shrine sequence followed by `next`.
    pub fn path_with(&self, next: ShrineName) -> ShrinePath<'_> {
        ShrinePath {
            shrines: &self.shrines,
            next: Some(next),
        }
    }

    /// A displayable view of the shrine sequence.
    pub fn path(&self) -> ShrinePath<'_> {
        ShrinePath::of(&self.shrines)
    }
}

/// Shrine names joined by `", "`.
pub struct ShrinePath<'a> {
    shrines: &'a [ShrineName],
    next: Option<ShrineName>,
}

impl<'a> ShrinePath<'a> {
    pub fn of(shrines: &'a [ShrineName]) -> Self {
        Self {
            shrines,
            next: None,
        }
    }
}

impl fmt::Display for ShrinePath<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let mut first = true;
        for shrine in self.shrines.iter().chain(self.next.as_ref()) {
            if !first {
                f.write_str(", ")?;
            }
            first = false;
            f.write_str(shrine.as_str())?;
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn extend_leaves_parent_untouched() {
        let parent = Route::start(ShrineName::Cryonis, 10.0);
        let child = parent.extend(ShrineName::Bombs, 5.5);

        assert_eq!(parent.shrines(), &[ShrineName::Cryonis]);
        assert_eq!(parent.time(), 10.0);
        assert_eq!(child.shrines(), &[ShrineName::Cryonis, ShrineName::Bombs]);
        assert_eq!(child.time(), 15.5);
    }

    #[test]
    fn finish_adds_time_only() {
        let route = Route::start(ShrineName::Stasis, 1.0).extend(ShrineName::RotaOoh, 2.0);
        let done = route.finish(3.0);
        assert_eq!(done.shrines(), route.shrines());
        assert_eq!(done.time(), 6.0);
    }

    #[test]
    fn last_and_contains() {
        let route = Route::start(ShrineName::Magnesis, 0.0).extend(ShrineName::Stasis, 0.0);
        assert_eq!(route.last(), Some(ShrineName::Stasis));
        assert!(route.contains(ShrineName::Magnesis));
        assert!(!route.contains(ShrineName::Bombs));
        assert_eq!(route.len(), 2);
    }

    #[test]
    fn runes_follow_visited_shrines() {
        let route = Route::start(ShrineName::Cryonis, 0.0).extend(ShrineName::Stasis, 0.0);
        let held = route.runes_held();
        assert!(held.has_stasis());
        assert!(!held.has_bombs());
    }

    #[test]
    fn path_display() {
        let route = Route::start(ShrineName::Stasis, 0.0).extend(ShrineName::RotaOoh, 0.0);
        assert_eq!(route.path().to_string(), "stasis, rotaOoh");
        assert_eq!(
            route.path_with(ShrineName::Bombs).to_string(),
            "stasis, rotaOoh, bombs"
        );
    }

    #[test]
    fn nan_propagates() {
        let route = Route::start(ShrineName::Stasis, 0.0).extend(ShrineName::Bombs, f64::NAN);
        assert!(route.time().is_nan());
    }
}
