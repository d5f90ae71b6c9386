//! Diagnostics for rejected and incomplete branches.
//!
//! Every branch the search abandons, and every suspicious value it lets
//! through, is recorded as a [`Diagnostic`]. The records come back to the
//! caller in the order the search visited the branches, and render as one
//! line of text each for the debug log.

use std::fmt;

use crate::domain::{RuneSet, ShrineName, ShrinePath};

/// Broad category of a diagnostic.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum DiagnosticKind {
    /// A start, interior, exterior or end time could not be resolved.
    MissingTime,
    /// A candidate shrine was already on the route.
    InvalidRevisit,
    /// The accumulated time stopped being a finite number.
    NonFiniteAccumulation,
    /// A single hop resolved to a non-finite time.
    AnomalousValue,
}

/// A single rejected branch or anomalous value.
///
/// `route` fields hold the route the search attempted to build, including
/// the shrine that caused the rejection.
#[derive(Debug, Clone, PartialEq)]
pub enum Diagnostic {
    /// No start time for a first shrine.
    MissingStart { shrine: ShrineName },

    /// No rune-free interior time for a first shrine.
    MissingStartInterior { shrine: ShrineName },

    /// The accumulated time of a route is NaN or infinite.
    NonFiniteTime { route: Vec<ShrineName>, time: f64 },

    /// No end time for the last shrine of a full-length route.
    MissingEnd {
        route: Vec<ShrineName>,
        held: RuneSet,
    },

    /// The dataset has no travel entry at all for a pair.
    MissingExteriorEntry {
        route: Vec<ShrineName>,
        from: ShrineName,
        to: ShrineName,
        held: RuneSet,
    },

    /// A candidate shrine was already visited.
    InvalidRevisit { route: Vec<ShrineName> },

    /// The travel entry for a pair resolves to nothing with the runes held.
    MissingExterior {
        route: Vec<ShrineName>,
        from: ShrineName,
        to: ShrineName,
        held: RuneSet,
    },

    /// The interior of a candidate resolves to nothing with the runes held
    /// on arrival.
    MissingInterior {
        route: Vec<ShrineName>,
        shrine: ShrineName,
        held: RuneSet,
    },

    /// A travel time resolved to a non-finite value.
    AnomalousExterior {
        from: ShrineName,
        to: ShrineName,
        time: f64,
    },

    /// An interior time resolved to a non-finite value.
    AnomalousInterior { shrine: ShrineName, time: f64 },
}

impl Diagnostic {
    pub fn kind(&self) -> DiagnosticKind {
        match self {
            Diagnostic::MissingStart { .. }
            | Diagnostic::MissingStartInterior { .. }
            | Diagnostic::MissingEnd { .. }
            | Diagnostic::MissingExteriorEntry { .. }
            | Diagnostic::MissingExterior { .. }
            | Diagnostic::MissingInterior { .. } => DiagnosticKind::MissingTime,
            Diagnostic::InvalidRevisit { .. } => DiagnosticKind::InvalidRevisit,
            Diagnostic::NonFiniteTime { .. } => DiagnosticKind::NonFiniteAccumulation,
            Diagnostic::AnomalousExterior { .. } | Diagnostic::AnomalousInterior { .. } => {
                DiagnosticKind::AnomalousValue
            }
        }
    }

    /// Returns true if this diagnostic means a branch was abandoned.
    pub fn is_rejection(&self) -> bool {
        self.kind() != DiagnosticKind::AnomalousValue
    }
}

impl fmt::Display for Diagnostic {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Diagnostic::MissingStart { shrine } => {
                write!(f, "Missing start data for shrine: {shrine}")
            }
            Diagnostic::MissingStartInterior { shrine } => {
                write!(f, "Missing interior data for shrine: {shrine}")
            }
            Diagnostic::NonFiniteTime { route, time } => {
                write!(f, "Time is {time} in route: {}", ShrinePath::of(route))
            }
            Diagnostic::MissingEnd { route, held } => {
                write!(f, "Missing end data for route: {} with {held}", ShrinePath::of(route))
            }
            Diagnostic::MissingExteriorEntry {
                route,
                from,
                to,
                held,
            } => write!(
                f,
                "Missing data! Cannot complete route: {} due to no time entry from {from} to {to}, with {held}",
                ShrinePath::of(route)
            ),
            Diagnostic::InvalidRevisit { route } => {
                write!(f, "Invalid route: {}", ShrinePath::of(route))
            }
            Diagnostic::MissingExterior {
                route,
                from,
                to,
                held,
            } => write!(
                f,
                "Missing data! Cannot complete route: {} due to missing exterior data going from {from} to {to} with {held}",
                ShrinePath::of(route)
            ),
            Diagnostic::MissingInterior {
                route,
                shrine,
                held,
            } => write!(
                f,
                "Missing data! Cannot complete route: {} due to missing interior data in shrine: {shrine} with {held}",
                ShrinePath::of(route)
            ),
            Diagnostic::AnomalousExterior { from, to, time } => write!(
                f,
                "Exterior time is {time}! Check the dataset going from {from} to {to}"
            ),
            Diagnostic::AnomalousInterior { shrine, time } => write!(
                f,
                "Interior time is {time}! Check the dataset for shrine interior: {shrine}"
            ),
        }
    }
}
