//! Core types and ingestion for DWLR (Digital Water Level Recorder)
//! groundwater monitoring data.
//!
//! Raw CSV text is parsed into [`record::GroundwaterRecord`]s, invalid rows
//! are dropped, and the survivors are grouped into one
//! [`station::StationSummary`] per station with a [`status::StatusTier`]
//! derived from the latest reading.

pub mod dataset;
pub mod error;
pub mod record;
#[cfg(feature = "api")]
pub mod source;
pub mod station;
pub mod status;

pub use dataset::Dataset;
pub use error::DashboardError;
pub use record::GroundwaterRecord;
pub use station::StationSummary;
pub use status::StatusTier;
