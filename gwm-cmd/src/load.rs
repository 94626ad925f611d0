//! Dataset loading and selection shared by all subcommands.

use anyhow::Context;
use gwm_dwlr::source::DataSource;
use gwm_view::{AppState, Phase, ViewMode};
use log::{info, warn};

/// Shown in place of any output when the dataset has no valid rows.
pub const NO_DATA_MESSAGE: &str = "No data available";

/// Load a dataset into a fresh session state.
///
/// A failed load is an error. A load with no valid rows is not; commands
/// check [`AppState::phase`] and print [`NO_DATA_MESSAGE`].
pub async fn load_state(source: &DataSource) -> anyhow::Result<AppState> {
    let client = reqwest::Client::new();
    let mut state = AppState::new();
    state.begin_load();
    let result = source.load(&client).await;
    state.finish_load(result);
    if let Phase::Failed(msg) = state.phase() {
        anyhow::bail!("{}", msg);
    }
    info!("Loaded {} stations", state.stations().len());
    Ok(state)
}

/// Apply the station and date selection a command asked for.
///
/// A date switches the state to the time-series view. A date the station
/// does not have falls back to the latest record.
pub fn focus(
    state: &mut AppState,
    station: Option<&str>,
    date: Option<&str>,
) -> anyhow::Result<()> {
    if let Some(station_id) = station {
        state
            .select_station(station_id)
            .with_context(|| format!("cannot show station '{}'", station_id))?;
    }
    if let Some(date) = date {
        state.set_view_mode(ViewMode::TimeSeries);
        if !state.set_selected_date(date) {
            warn!(
                "{} has no record for {}, showing {}",
                state.selected_station_id(),
                date,
                state.selected_date()
            );
        }
    }
    Ok(())
}
