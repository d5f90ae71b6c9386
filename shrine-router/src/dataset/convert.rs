//! Conversion from dataset DTOs to the domain dataset.

use crate::domain::{ShrineName, TimeEntry};

use super::error::ConversionError;
use super::model::{Dataset, DatasetBuilder};
use super::types::{DatasetDto, TimeEntryDto};

impl From<TimeEntryDto> for TimeEntry {
    fn from(dto: TimeEntryDto) -> Self {
        TimeEntry {
            none: dto.none,
            bombs: dto.bombs,
            stasis: dto.stasis,
        }
    }
}

/// Convert a parsed document into a [`Dataset`].
///
/// Shrines missing from a table get no usable time for it. A `null`
/// interior or end entry is the same as an entry with every duration
/// unknown; a `null` outgoing entry is kept as "no entry".
pub fn convert_dataset(dto: &DatasetDto) -> Result<Dataset, ConversionError> {
    let mut builder = DatasetBuilder::new();

    for (&shrine, &time) in &dto.start {
        if let Some(time) = time {
            builder = builder.start(shrine, time);
        }
    }

    for (&shrine, entry) in &dto.interiors {
        builder = builder.interior(shrine, entry.map(TimeEntry::from).unwrap_or_default());
    }

    for (&shrine, entry) in &dto.end {
        builder = builder.end(shrine, entry.map(TimeEntry::from).unwrap_or_default());
    }

    for (&from, outgoing) in &dto.exteriors {
        for (&to, entry) in outgoing {
            if from == to {
                return Err(ConversionError::SelfTravel(from));
            }
            if let Some(entry) = entry {
                builder = builder.exterior(from, to, TimeEntry::from(*entry));
            }
        }
    }

    Ok(builder.build())
}

/// Shrines whose start time is missing, for load-time reporting.
pub fn shrines_without_start(dataset: &Dataset) -> Vec<ShrineName> {
    ShrineName::ALL
        .into_iter()
        .filter(|&s| dataset.start(s).is_none())
        .collect()
}
