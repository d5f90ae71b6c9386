//! Dataset JSON DTOs.
//!
//! These types map directly to the `data.json` document. Every duration is
//! optional because the document uses `null` (or simply omits a key) for
//! times nobody has measured yet.

use std::collections::BTreeMap;

use serde::Deserialize;

use crate::domain::ShrineName;

/// The whole timing document.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct DatasetDto {
    /// Time to reach each shrine from the outside world.
    #[serde(default)]
    pub start: BTreeMap<ShrineName, Option<f64>>,

    /// Time to cross each shrine's interior.
    #[serde(default)]
    pub interiors: BTreeMap<ShrineName, Option<TimeEntryDto>>,

    /// Completion time when a shrine is the last one visited.
    #[serde(default)]
    pub end: BTreeMap<ShrineName, Option<TimeEntryDto>>,

    /// Outgoing travel times, keyed by source shrine at the top level of
    /// the document.
    #[serde(flatten)]
    pub exteriors: BTreeMap<ShrineName, BTreeMap<ShrineName, Option<TimeEntryDto>>>,
}

/// A rune-sensitive duration.
#[derive(Debug, Clone, Copy, Default, Deserialize)]
pub struct TimeEntryDto {
    #[serde(default)]
    pub none: Option<f64>,

    #[serde(default)]
    pub bombs: Option<f64>,

    #[serde(default)]
    pub stasis: Option<f64>,
}
