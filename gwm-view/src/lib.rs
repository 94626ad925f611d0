//! Dashboard selection state and per-view data for groundwater stations.
//!
//! This crate provides:
//! - `state`: the session's loaded dataset plus station/mode/date selection
//! - `view`: the bundle of derived figures for the selected station
//!
//! Rendering lives elsewhere; everything here is plain data.

pub mod state;
pub mod view;

pub use state::{AppState, Phase, ViewMode};
pub use view::StationView;
