//! Row-shaped views of station data for tables, charts and station lists.

use gwm_dwlr::{GroundwaterRecord, StationSummary, StatusTier};
use gwm_utils::dates::format_display_date;
use serde::Serialize;

/// Number of most recent records shown in the data table and exported.
pub const RECENT_RECORDS: usize = 10;

/// The last [`RECENT_RECORDS`] records in chronological order.
pub fn recent_records(station: &StationSummary) -> &[GroundwaterRecord] {
    let records = station.records();
    &records[records.len().saturating_sub(RECENT_RECORDS)..]
}

/// One line of the recent-data table.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct TableRow {
    pub date: String,
    pub display_date: String,
    pub water_level_m: f64,
    pub rainfall_mm: f64,
    /// Change from the preceding day in the table; `None` on the oldest row.
    pub change_m: Option<f64>,
}

/// Recent records, newest first, each with its change versus the day
/// before it.
pub fn recent_rows(station: &StationSummary) -> Vec<TableRow> {
    let recent = recent_records(station);
    let mut rows: Vec<TableRow> = recent
        .iter()
        .enumerate()
        .map(|(i, record)| TableRow {
            date: record.date.clone(),
            display_date: format_display_date(&record.date),
            water_level_m: record.water_level_m,
            rainfall_mm: record.rainfall_mm,
            change_m: i
                .checked_sub(1)
                .map(|prev| record.water_level_m - recent[prev].water_level_m),
        })
        .collect();
    rows.reverse();
    rows
}

/// A point on the water level / rainfall chart.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ChartPoint {
    pub date: String,
    pub label: String,
    pub water_level_m: f64,
    pub rainfall_mm: f64,
}

/// One chart point per record, oldest first.
pub fn chart_points(station: &StationSummary) -> Vec<ChartPoint> {
    station
        .records()
        .iter()
        .map(|record| ChartPoint {
            date: record.date.clone(),
            label: format_display_date(&record.date),
            water_level_m: record.water_level_m,
            rainfall_mm: record.rainfall_mm,
        })
        .collect()
}

/// How many stations fall in each tier.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize)]
pub struct StatusCounts {
    pub safe: usize,
    pub moderate: usize,
    pub critical: usize,
    pub total: usize,
}

pub fn status_counts(stations: &[StationSummary]) -> StatusCounts {
    stations
        .iter()
        .fold(StatusCounts::default(), |mut counts, station| {
            match station.status() {
                StatusTier::Safe => counts.safe += 1,
                StatusTier::Moderate => counts.moderate += 1,
                StatusTier::Critical => counts.critical += 1,
            }
            counts.total += 1;
            counts
        })
}

#[cfg(test)]
mod tests {
    use super::*;

    fn station(id: &str, levels: &[f64]) -> StationSummary {
        let records = levels
            .iter()
            .enumerate()
            .map(|(i, &level)| GroundwaterRecord {
                station_id: id.to_string(),
                location: "LocA".to_string(),
                lat: 10.0,
                lon: 20.0,
                date: format!("2024-02-{:02}", i + 1),
                water_level_m: level,
                rainfall_mm: 0.0,
            })
            .collect();
        StationSummary::from_records(id, records).unwrap()
    }

    #[test]
    fn test_recent_rows_newest_first() {
        let levels: Vec<f64> = (0..12).map(|x| x as f64).collect();
        let rows = recent_rows(&station("S1", &levels));
        assert_eq!(rows.len(), 10);
        assert_eq!(rows[0].date, "2024-02-12");
        assert_eq!(rows[0].display_date, "12 Feb 2024");
        assert_eq!(rows[0].change_m, Some(1.0));
        assert_eq!(rows[9].date, "2024-02-03");
        assert_eq!(rows[9].change_m, None);
    }

    #[test]
    fn test_recent_rows_short_station() {
        let rows = recent_rows(&station("S1", &[5.0]));
        assert_eq!(rows.len(), 1);
        assert_eq!(rows[0].change_m, None);
    }

    #[test]
    fn test_chart_points() {
        let points = chart_points(&station("S1", &[5.0, 6.5]));
        assert_eq!(points.len(), 2);
        assert_eq!(points[1].label, "02 Feb 2024");
        assert_eq!(points[1].water_level_m, 6.5);
    }

    #[test]
    fn test_status_counts() {
        let stations = vec![
            station("A", &[5.0]),
            station("B", &[10.0]),
            station("C", &[20.0]),
            station("D", &[20.5]),
        ];
        let counts = status_counts(&stations);
        assert_eq!(
            counts,
            StatusCounts {
                safe: 1,
                moderate: 2,
                critical: 1,
                total: 4
            }
        );
        assert_eq!(status_counts(&[]), StatusCounts::default());
    }
}
