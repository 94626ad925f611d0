use crate::error::DashboardError;
use chrono::NaiveDate;
use csv::{ReaderBuilder, StringRecord};
use gwm_utils::dates::parse_record_date;
use log::debug;
use serde::{Deserialize, Serialize};
use std::io::Read;

/// Header names expected in a DWLR export. Matching is exact.
pub const COL_STATION_ID: &str = "Station_ID";
pub const COL_LOCATION: &str = "Location";
pub const COL_LAT: &str = "Lat";
pub const COL_LON: &str = "Lon";
pub const COL_DATE: &str = "Date";
pub const COL_WATER_LEVEL: &str = "Water_Level_m";
pub const COL_RAINFALL: &str = "Rainfall_mm";

/// One daily observation from a groundwater monitoring station.
///
/// Numeric fields that failed to parse hold `NaN`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct GroundwaterRecord {
    pub station_id: String,
    pub location: String,
    pub lat: f64,
    pub lon: f64,
    /// Date as it appeared in the source, trimmed.
    pub date: String,
    pub water_level_m: f64,
    pub rainfall_mm: f64,
}

impl GroundwaterRecord {
    /// The record date as a calendar date, if it is recognisable.
    pub fn parsed_date(&self) -> Option<NaiveDate> {
        parse_record_date(&self.date)
    }

    /// Parse CSV text with a header row into validated records.
    pub fn parse_csv(text: &str) -> Result<Vec<GroundwaterRecord>, DashboardError> {
        Self::parse_reader(text.as_bytes())
    }

    /// Parse delimited text from any reader into validated records.
    ///
    /// Rows missing a station id, location or date are dropped. Columns are
    /// located by header name so their order does not matter, and short rows
    /// read missing cells as empty. Only unreadable text is an error.
    pub fn parse_reader<R: Read>(reader: R) -> Result<Vec<GroundwaterRecord>, DashboardError> {
        let mut rdr = ReaderBuilder::new()
            .delimiter(b',')
            .has_headers(true)
            .flexible(true)
            .from_reader(reader);
        let columns = ColumnIndex::from_headers(rdr.headers()?);

        let mut records = Vec::new();
        let mut dropped = 0usize;
        for row in rdr.records() {
            let row = row?;
            match columns.extract(&row) {
                Some(record) => records.push(record),
                None => dropped += 1,
            }
        }
        debug!("parsed {} records, dropped {} invalid rows", records.len(), dropped);
        Ok(records)
    }
}

/// Position of each known column in the header row.
#[derive(Debug, Default)]
struct ColumnIndex {
    station_id: Option<usize>,
    location: Option<usize>,
    lat: Option<usize>,
    lon: Option<usize>,
    date: Option<usize>,
    water_level: Option<usize>,
    rainfall: Option<usize>,
}

impl ColumnIndex {
    fn from_headers(headers: &StringRecord) -> Self {
        let find = |name: &str| headers.iter().position(|h| h == name);
        ColumnIndex {
            station_id: find(COL_STATION_ID),
            location: find(COL_LOCATION),
            lat: find(COL_LAT),
            lon: find(COL_LON),
            date: find(COL_DATE),
            water_level: find(COL_WATER_LEVEL),
            rainfall: find(COL_RAINFALL),
        }
    }

    fn extract(&self, row: &StringRecord) -> Option<GroundwaterRecord> {
        let station_id = text_field(row, self.station_id);
        let location = text_field(row, self.location);
        let date = text_field(row, self.date);
        if station_id.is_empty() || location.is_empty() || date.is_empty() {
            return None;
        }
        Some(GroundwaterRecord {
            station_id: station_id.to_string(),
            location: location.to_string(),
            lat: numeric_field(row, self.lat),
            lon: numeric_field(row, self.lon),
            date: date.to_string(),
            water_level_m: numeric_field(row, self.water_level),
            rainfall_mm: numeric_field(row, self.rainfall),
        })
    }
}

fn text_field(row: &StringRecord, idx: Option<usize>) -> &str {
    idx.and_then(|i| row.get(i)).unwrap_or("").trim()
}

fn numeric_field(row: &StringRecord, idx: Option<usize>) -> f64 {
    text_field(row, idx).parse::<f64>().unwrap_or(f64::NAN)
}
