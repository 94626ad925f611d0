//! Station list with per-tier counts, as shown in the dashboard sidebar and
//! on the map.

use crate::load::NO_DATA_MESSAGE;
use gwm_data::table::{status_counts, StatusCounts};
use gwm_dwlr::StatusTier;
use gwm_view::{AppState, Phase};
use serde::Serialize;

#[derive(Debug, Serialize)]
struct StationRow<'a> {
    station_id: &'a str,
    location: &'a str,
    lat: f64,
    lon: f64,
    status: StatusTier,
    latest_date: &'a str,
    latest_level_m: f64,
    records: usize,
}

#[derive(Debug, Serialize)]
struct StationList<'a> {
    stations: Vec<StationRow<'a>>,
    counts: StatusCounts,
}

pub fn run_stations(state: &AppState, json: bool) -> anyhow::Result<String> {
    if state.phase() == Phase::NoData {
        return Ok(NO_DATA_MESSAGE.to_string());
    }
    let list = StationList {
        stations: state
            .stations()
            .iter()
            .map(|s| StationRow {
                station_id: s.station_id(),
                location: s.location(),
                lat: s.lat(),
                lon: s.lon(),
                status: s.status(),
                latest_date: &s.latest_record().date,
                latest_level_m: s.latest_record().water_level_m,
                records: s.records().len(),
            })
            .collect(),
        counts: status_counts(state.stations()),
    };
    if json {
        return Ok(serde_json::to_string_pretty(&list)?);
    }

    let mut out = String::new();
    for row in &list.stations {
        out.push_str(&format!(
            "{:<12} {:<24} {:<9} {:>7.1}m  {}  ({} records)\n",
            row.station_id,
            row.location,
            row.status.as_str().to_uppercase(),
            row.latest_level_m,
            row.latest_date,
            row.records
        ));
    }
    out.push_str(&format!(
        "\nSafe: {}  Moderate: {}  Critical: {}  Total Stations: {}",
        list.counts.safe, list.counts.moderate, list.counts.critical, list.counts.total
    ));
    Ok(out)
}
