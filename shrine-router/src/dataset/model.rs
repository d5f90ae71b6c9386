//! The validated timing table the planner searches over.

use crate::domain::{Rune, ShrineName, TimeEntry};

const N: usize = ShrineName::COUNT;

/// Timing data for every shrine.
///
/// Tables are dense and indexed by [`ShrineName::index`]; a missing value
/// is stored as `None` rather than a missing key, so lookups never fail.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Dataset {
    start: [Option<f64>; N],
    interiors: [TimeEntry; N],
    ends: [TimeEntry; N],
    exteriors: [[Option<TimeEntry>; N]; N],
}

impl Dataset {
    /// A dataset with no times at all.
    pub fn empty() -> Self {
        Self::default()
    }

    /// Start a builder over an empty dataset.
    pub fn builder() -> DatasetBuilder {
        DatasetBuilder::default()
    }

    /// Time to reach `shrine` from the outside world.
    pub fn start(&self, shrine: ShrineName) -> Option<f64> {
        self.start[shrine.index()]
    }

    /// Time to cross `shrine`'s interior.
    pub fn interior(&self, shrine: ShrineName) -> &TimeEntry {
        &self.interiors[shrine.index()]
    }

    /// Completion time when `shrine` is the last one visited.
    pub fn end(&self, shrine: ShrineName) -> &TimeEntry {
        &self.ends[shrine.index()]
    }

    /// The raw travel entry from `from` to `to`.
    ///
    /// `None` means the pair has no entry at all, which is different from
    /// an entry whose durations are all unknown.
    pub fn exterior(&self, from: ShrineName, to: ShrineName) -> Option<&TimeEntry> {
        self.exteriors[from.index()][to.index()].as_ref()
    }

    /// Every shrine other than `from`, in enumeration order.
    pub fn destinations(from: ShrineName) -> impl Iterator<Item = ShrineName> {
        ShrineName::ALL.into_iter().filter(move |&to| to != from)
    }

    /// Number of (from, to) pairs with an entry.
    pub fn exterior_count(&self) -> usize {
        self.exteriors.iter().flatten().filter(|e| e.is_some()).count()
    }
}

/// Builder for creating datasets.
///
/// Provides a fluent API for filling in the tables.
#[derive(Debug, Default)]
pub struct DatasetBuilder {
    inner: Dataset,
}

impl DatasetBuilder {
    /// Create a new builder.
    pub fn new() -> Self {
        Self::default()
    }

    pub fn start(mut self, shrine: ShrineName, time: f64) -> Self {
        self.inner.start[shrine.index()] = Some(time);
        self
    }

    pub fn interior(mut self, shrine: ShrineName, entry: TimeEntry) -> Self {
        self.inner.interiors[shrine.index()] = entry;
        self
    }

    pub fn end(mut self, shrine: ShrineName, entry: TimeEntry) -> Self {
        self.inner.ends[shrine.index()] = entry;
        self
    }

    /// Set the travel entry from `from` to `to`.
    ///
    /// Entries from a shrine to itself are ignored; no route ever uses them.
    pub fn exterior(mut self, from: ShrineName, to: ShrineName, entry: TimeEntry) -> Self {
        if from != to {
            self.inner.exteriors[from.index()][to.index()] = Some(entry);
        }
        self
    }

    /// Give `shrine` the same baseline start, interior and end time.
    pub fn uniform_shrine(self, shrine: ShrineName, time: f64) -> Self {
        self.start(shrine, time)
            .interior(shrine, TimeEntry::baseline(time))
            .end(shrine, TimeEntry::baseline(time))
    }

    /// Give every ordered pair of distinct shrines the same baseline travel time.
    pub fn uniform_exteriors(mut self, time: f64) -> Self {
        for from in ShrineName::ALL {
            for to in Dataset::destinations(from) {
                self = self.exterior(from, to, TimeEntry::baseline(time));
            }
        }
        self
    }

    /// Add a shortcut for `rune` to the travel entry from `from` to `to`.
    ///
    /// Creates an entry with an unknown baseline if the pair had none.
    pub fn exterior_shortcut(
        mut self,
        from: ShrineName,
        to: ShrineName,
        rune: Rune,
        time: f64,
    ) -> Self {
        if from != to {
            let slot = &mut self.inner.exteriors[from.index()][to.index()];
            *slot = Some(slot.unwrap_or_default().with_rune(rune, time));
        }
        self
    }

    /// Build the dataset.
    pub fn build(self) -> Dataset {
        self.inner
    }
}
