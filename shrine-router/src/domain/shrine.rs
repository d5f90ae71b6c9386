//! Shrine and rune vocabulary.

use std::fmt;

use serde::Deserialize;

/// One of the five shrines a route can visit.
///
/// The variant order is the fixed enumeration order used everywhere a
/// search iterates over shrines, so diagnostics come out in a stable order.
///
/// # Examples
///
/// ```
/// use shrine_router::domain::{Rune, ShrineName};
///
/// assert_eq!(ShrineName::RotaOoh.as_str(), "rotaOoh");
/// assert_eq!(ShrineName::Bombs.rune(), Some(Rune::Bombs));
/// assert_eq!(ShrineName::Cryonis.rune(), None);
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Deserialize)]
#[serde(rename_all = "camelCase")]
pub enum ShrineName {
    Stasis,
    Cryonis,
    Magnesis,
    Bombs,
    RotaOoh,
}

impl ShrineName {
    /// Every shrine, in enumeration order.
    pub const ALL: [ShrineName; 5] = [
        ShrineName::Stasis,
        ShrineName::Cryonis,
        ShrineName::Magnesis,
        ShrineName::Bombs,
        ShrineName::RotaOoh,
    ];

    /// Number of shrines in the vocabulary.
    pub const COUNT: usize = Self::ALL.len();

    /// Position of this shrine in [`ShrineName::ALL`].
    pub const fn index(self) -> usize {
        self as usize
    }

    /// The identifier used in datasets and reports.
    pub const fn as_str(self) -> &'static str {
        match self {
            ShrineName::Stasis => "stasis",
            ShrineName::Cryonis => "cryonis",
            ShrineName::Magnesis => "magnesis",
            ShrineName::Bombs => "bombs",
            ShrineName::RotaOoh => "rotaOoh",
        }
    }

    /// The rune granted on entering this shrine, if any.
    pub const fn rune(self) -> Option<Rune> {
        match self {
            ShrineName::Stasis => Some(Rune::Stasis),
            ShrineName::Bombs => Some(Rune::Bombs),
            ShrineName::Cryonis | ShrineName::Magnesis | ShrineName::RotaOoh => None,
        }
    }
}

impl fmt::Display for ShrineName {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// A traversal ability unlocked by visiting the shrine of the same name.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Rune {
    Bombs,
    Stasis,
}

impl Rune {
    /// Every rune, in the order time resolution considers them.
    pub const ALL: [Rune; 2] = [Rune::Bombs, Rune::Stasis];

    /// The shrine that grants this rune.
    pub const fn shrine(self) -> ShrineName {
        match self {
            Rune::Bombs => ShrineName::Bombs,
            Rune::Stasis => ShrineName::Stasis,
        }
    }

    const fn bit(self) -> u8 {
        match self {
            Rune::Bombs => 0b01,
            Rune::Stasis => 0b10,
        }
    }
}

impl fmt::Display for Rune {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.shrine().as_str())
    }
}

/// The set of runes held at some point along a route.
///
/// Runes are never lost, so the set only grows as a route is extended.
#[derive(Clone, Copy, Default, PartialEq, Eq, Hash)]
pub struct RuneSet(u8);

impl RuneSet {
    /// No runes held.
    pub const EMPTY: RuneSet = RuneSet(0);

    /// Runes held after visiting every shrine in `prefix`.
    pub fn held_by(prefix: &[ShrineName]) -> Self {
        prefix
            .iter()
            .fold(Self::EMPTY, |held, &shrine| held.with_shrine(shrine))
    }

    /// Returns true if `rune` is held.
    pub const fn contains(self, rune: Rune) -> bool {
        self.0 & rune.bit() != 0
    }

    /// This set plus `rune`.
    pub const fn with(self, rune: Rune) -> Self {
        RuneSet(self.0 | rune.bit())
    }

    /// This set plus whatever rune `shrine` grants on entry.
    pub const fn with_shrine(self, shrine: ShrineName) -> Self {
        match shrine.rune() {
            Some(rune) => self.with(rune),
            None => self,
        }
    }

    /// Returns true if every rune in `self` is also in `other`.
    pub const fn is_subset(self, other: RuneSet) -> bool {
        self.0 & !other.0 == 0
    }

    pub const fn has_bombs(self) -> bool {
        self.contains(Rune::Bombs)
    }

    pub const fn has_stasis(self) -> bool {
        self.contains(Rune::Stasis)
    }
}

impl fmt::Debug for RuneSet {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_set()
            .entries(Rune::ALL.iter().filter(|&&r| self.contains(r)))
            .finish()
    }
}

impl fmt::Display for RuneSet {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "bombs rune: {}, stasis rune: {}",
            self.has_bombs(),
            self.has_stasis()
        )
    }
}
