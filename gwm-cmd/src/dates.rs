//! Dates a station can be stepped through in the time-series view.

use crate::load::{focus, NO_DATA_MESSAGE};
use gwm_view::{AppState, Phase};

pub fn run_dates(mut state: AppState, station: Option<&str>, json: bool) -> anyhow::Result<String> {
    if state.phase() == Phase::NoData {
        return Ok(NO_DATA_MESSAGE.to_string());
    }
    focus(&mut state, station, None)?;
    let dates = state.available_dates();
    if json {
        return Ok(serde_json::to_string_pretty(&dates)?);
    }
    Ok(dates.join("\n"))
}
