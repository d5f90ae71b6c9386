//! Rune-sensitive durations.

use super::shrine::{Rune, RuneSet};

/// A duration that may be shortened by a held rune.
///
/// `none` is the baseline, usable regardless of runes. A rune entry is a
/// shortcut usable only once that rune is held. Any of them may be absent,
/// and absent never means zero.
#[derive(Debug, Clone, Copy, Default, PartialEq)]
pub struct TimeEntry {
    pub none: Option<f64>,
    pub bombs: Option<f64>,
    pub stasis: Option<f64>,
}

impl TimeEntry {
    /// An entry with only a baseline duration.
    pub const fn baseline(none: f64) -> Self {
        Self {
            none: Some(none),
            bombs: None,
            stasis: None,
        }
    }

    /// An entry with nothing defined.
    pub const fn unknown() -> Self {
        Self {
            none: None,
            bombs: None,
            stasis: None,
        }
    }

    /// Set the shortcut duration for `rune`.
    pub fn with_rune(mut self, rune: Rune, duration: f64) -> Self {
        match rune {
            Rune::Bombs => self.bombs = Some(duration),
            Rune::Stasis => self.stasis = Some(duration),
        }
        self
    }

    /// The shortcut duration stored for `rune`, if any.
    pub const fn for_rune(&self, rune: Rune) -> Option<f64> {
        match rune {
            Rune::Bombs => self.bombs,
            Rune::Stasis => self.stasis,
        }
    }

    /// Resolve the best duration usable with the runes in `held`.
    ///
    /// Returns the minimum of the baseline and every held rune's shortcut,
    /// or `None` if none of those is defined.
    ///
    /// # Examples
    ///
    /// ```
    /// use shrine_router::domain::{Rune, RuneSet, TimeEntry};
    ///
    /// let entry = TimeEntry::baseline(30.0).with_rune(Rune::Bombs, 12.5);
    ///
    /// assert_eq!(entry.resolve(RuneSet::EMPTY), Some(30.0));
    /// assert_eq!(entry.resolve(RuneSet::EMPTY.with(Rune::Bombs)), Some(12.5));
    /// assert_eq!(entry.resolve(RuneSet::EMPTY.with(Rune::Stasis)), Some(30.0));
    /// ```
    pub fn resolve(&self, held: RuneSet) -> Option<f64> {
        let mut best = self.none;

        for rune in Rune::ALL {
            if !held.contains(rune) {
                continue;
            }
            let Some(shortcut) = self.for_rune(rune) else {
                continue;
            };
            match best {
                None => best = Some(shortcut),
                Some(current) if shortcut < current => best = Some(shortcut),
                Some(_) => {}
            }
        }

        best
    }
}
