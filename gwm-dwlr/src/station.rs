use crate::record::GroundwaterRecord;
use crate::status::StatusTier;
use log::warn;
use serde::Serialize;
use std::collections::HashMap;

/// Per-station view of the dataset: the station's records sorted by date
/// plus values derived from the latest one.
///
/// A summary always holds at least one record. Location, coordinates and
/// status come from the latest record.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct StationSummary {
    station_id: String,
    location: String,
    lat: f64,
    lon: f64,
    status: StatusTier,
    records: Vec<GroundwaterRecord>,
}

impl StationSummary {
    /// Build a summary from one station's records. Returns `None` when
    /// `records` is empty.
    pub fn from_records(
        station_id: impl Into<String>,
        mut records: Vec<GroundwaterRecord>,
    ) -> Option<StationSummary> {
        sort_by_date(&mut records);
        let latest = records.last()?;
        Some(StationSummary {
            station_id: station_id.into(),
            location: latest.location.clone(),
            lat: latest.lat,
            lon: latest.lon,
            status: StatusTier::from_water_level(latest.water_level_m),
            records,
        })
    }

    /// Group validated records into one summary per station.
    ///
    /// Stations come out in the order they first appear in `records`, so the
    /// first summary is a stable default selection. Within a station, records
    /// with the same date keep their input order.
    pub fn aggregate(records: &[GroundwaterRecord]) -> Vec<StationSummary> {
        let mut order: Vec<(String, Vec<GroundwaterRecord>)> = Vec::new();
        let mut index: HashMap<String, usize> = HashMap::new();
        for record in records {
            let slot = *index.entry(record.station_id.clone()).or_insert_with(|| {
                order.push((record.station_id.clone(), Vec::new()));
                order.len() - 1
            });
            order[slot].1.push(record.clone());
        }
        order
            .into_iter()
            .filter_map(|(station_id, group)| StationSummary::from_records(station_id, group))
            .collect()
    }

    pub fn station_id(&self) -> &str {
        &self.station_id
    }

    /// Location name of the latest record.
    pub fn location(&self) -> &str {
        &self.location
    }

    pub fn lat(&self) -> f64 {
        self.lat
    }

    pub fn lon(&self) -> f64 {
        self.lon
    }

    /// Classification of the latest record's water level.
    pub fn status(&self) -> StatusTier {
        self.status
    }

    /// Records sorted ascending by date.
    pub fn records(&self) -> &[GroundwaterRecord] {
        &self.records
    }

    /// The most recent record.
    pub fn latest_record(&self) -> &GroundwaterRecord {
        &self.records[self.records.len() - 1]
    }

    /// Append more observations for this station, keeping records sorted and
    /// the derived fields current. Records for other stations are ignored.
    pub fn append_records(&mut self, more: impl IntoIterator<Item = GroundwaterRecord>) {
        for record in more {
            if record.station_id != self.station_id {
                warn!(
                    "ignoring record for {} appended to station {}",
                    record.station_id, self.station_id
                );
                continue;
            }
            self.records.push(record);
        }
        sort_by_date(&mut self.records);
        let latest = self.latest_record();
        let (location, lat, lon) = (latest.location.clone(), latest.lat, latest.lon);
        let status = StatusTier::from_water_level(latest.water_level_m);
        self.location = location;
        self.lat = lat;
        self.lon = lon;
        self.status = status;
    }

    /// Dates present for this station, ascending, without repeats.
    pub fn available_dates(&self) -> Vec<String> {
        let mut dates: Vec<String> = self.records.iter().map(|r| r.date.clone()).collect();
        dates.dedup();
        dates
    }

    /// Index of the first record with exactly this date.
    pub fn position_of_date(&self, date: &str) -> Option<usize> {
        self.records.iter().position(|r| r.date == date)
    }

    /// Whether any record carries exactly this date.
    pub fn has_date(&self, date: &str) -> bool {
        self.position_of_date(date).is_some()
    }
}

/// Stable sort by calendar date. Unrecognised dates sort first.
fn sort_by_date(records: &mut [GroundwaterRecord]) {
    records.sort_by_cached_key(|r| r.parsed_date());
}
