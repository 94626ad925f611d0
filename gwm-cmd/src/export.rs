//! Write a station's recent records to a CSV file named after its location.

use crate::load::{focus, NO_DATA_MESSAGE};
use anyhow::Context;
use gwm_data::export::{export_file_name, export_station_csv, EXPORT_MIME_TYPE};
use gwm_view::{AppState, Phase};
use log::info;
use std::path::Path;

pub fn run_export(mut state: AppState, station: Option<&str>, out_dir: &Path) -> anyhow::Result<String> {
    if state.phase() == Phase::NoData {
        return Ok(NO_DATA_MESSAGE.to_string());
    }
    focus(&mut state, station, None)?;
    let Some(summary) = state.selected_station_data() else {
        return Ok(NO_DATA_MESSAGE.to_string());
    };

    let path = out_dir.join(export_file_name(summary.location()));
    let content = export_station_csv(summary);
    std::fs::write(&path, &content)
        .with_context(|| format!("failed to write {}", path.display()))?;
    info!(
        "Exported {} ({}, {} bytes) for {}",
        path.display(),
        EXPORT_MIME_TYPE,
        content.len(),
        summary.station_id()
    );
    Ok(format!("Wrote {}", path.display()))
}
