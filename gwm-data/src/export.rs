//! Download format for a station's recent records.
//!
//! Fields are joined with commas as-is. Every exported value is a date or a
//! number, so no quoting is done.

use crate::table::{recent_records, RECENT_RECORDS};
use gwm_dwlr::StationSummary;
use gwm_utils::dates::format_display_date;

pub const EXPORT_HEADER: [&str; 3] = ["Date", "Water Level (m)", "Rainfall (mm)"];

pub const EXPORT_MIME_TYPE: &str = "text/csv";

pub const EXPORT_FILE_SUFFIX: &str = "_groundwater_data.csv";

/// Header plus the station's last ten records, oldest first.
pub fn export_station_csv(station: &StationSummary) -> String {
    let mut lines = Vec::with_capacity(RECENT_RECORDS + 1);
    lines.push(EXPORT_HEADER.join(","));
    for record in recent_records(station) {
        lines.push(format!(
            "{},{},{}",
            format_display_date(&record.date),
            record.water_level_m,
            record.rainfall_mm
        ));
    }
    lines.join("\n")
}

/// Download name for a station: whitespace runs in the location become a
/// single underscore, e.g. "Pune City" -> "Pune_City_groundwater_data.csv".
pub fn export_file_name(location: &str) -> String {
    let mut name = String::with_capacity(location.len() + EXPORT_FILE_SUFFIX.len());
    let mut in_space = false;
    for c in location.chars() {
        if c.is_whitespace() {
            if !in_space {
                name.push('_');
            }
            in_space = true;
        } else {
            name.push(c);
            in_space = false;
        }
    }
    name.push_str(EXPORT_FILE_SUFFIX);
    name
}

#[cfg(test)]
mod tests {
    use super::*;
    use gwm_dwlr::GroundwaterRecord;

    fn station(n: usize) -> StationSummary {
        let records = (0..n)
            .map(|i| GroundwaterRecord {
                station_id: "S1".to_string(),
                location: "Pune City".to_string(),
                lat: 18.5,
                lon: 73.8,
                date: format!("2024-01-{:02}", i + 1),
                water_level_m: 8.0 + i as f64 / 2.0,
                rainfall_mm: if i % 2 == 0 { 0.0 } else { 4.5 },
            })
            .collect();
        StationSummary::from_records("S1", records).unwrap()
    }

    #[test]
    fn test_export_caps_at_ten_rows() {
        let csv = export_station_csv(&station(15));
        let lines: Vec<&str> = csv.lines().collect();
        assert_eq!(lines.len(), 11);
        assert_eq!(lines[0], "Date,Water Level (m),Rainfall (mm)");
        assert_eq!(lines[1], "06 Jan 2024,10.5,4.5");
        assert_eq!(lines[10], "15 Jan 2024,15,0");
        assert!(!csv.ends_with('\n'));
    }

    #[test]
    fn test_export_short_station() {
        let csv = export_station_csv(&station(3));
        let lines: Vec<&str> = csv.lines().collect();
        assert_eq!(lines.len(), 4);
        assert_eq!(lines[1], "01 Jan 2024,8,0");
        assert_eq!(lines[2], "02 Jan 2024,8.5,4.5");
    }

    #[test]
    fn test_export_nan_and_raw_dates() {
        let record = GroundwaterRecord {
            station_id: "S1".to_string(),
            location: "X".to_string(),
            lat: 0.0,
            lon: 0.0,
            date: "week 1".to_string(),
            water_level_m: f64::NAN,
            rainfall_mm: 0.0,
        };
        let station = StationSummary::from_records("S1", vec![record]).unwrap();
        assert_eq!(export_station_csv(&station).lines().nth(1), Some("week 1,NaN,0"));
    }

    #[test]
    fn test_export_file_name() {
        assert_eq!(export_file_name("Pune City"), "Pune_City_groundwater_data.csv");
        assert_eq!(
            export_file_name("New  Delhi\tNorth"),
            "New_Delhi_North_groundwater_data.csv"
        );
        assert_eq!(export_file_name("Jaipur"), "Jaipur_groundwater_data.csv");
    }
}
