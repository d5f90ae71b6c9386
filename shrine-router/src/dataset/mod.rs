//! Shrine timing dataset.
//!
//! The dataset is read from a JSON document (see [`DatasetDto`]) and
//! converted into a dense [`Dataset`] table that the planner searches over.
//! Missing times are kept as "unknown"; they are never treated as zero.

mod convert;
mod error;
mod loader;
mod model;
mod types;

pub use convert::{convert_dataset, shrines_without_start};
pub use error::{ConversionError, DatasetError};
pub use loader::{load_dataset, parse_dataset};
pub use model::{Dataset, DatasetBuilder};
pub use types::{DatasetDto, TimeEntryDto};
