use crate::error::DashboardError;
use crate::record::GroundwaterRecord;
use crate::station::StationSummary;
use log::info;

/// A complete, validated snapshot: the flat record list and the per-station
/// summaries built from it. Rebuilt wholesale on every load.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Dataset {
    pub records: Vec<GroundwaterRecord>,
    pub stations: Vec<StationSummary>,
}

impl Dataset {
    /// Run validated records through the station aggregator.
    pub fn from_records(records: Vec<GroundwaterRecord>) -> Dataset {
        let stations = StationSummary::aggregate(&records);
        info!(
            "loaded {} records across {} stations",
            records.len(),
            stations.len()
        );
        Dataset { records, stations }
    }

    /// Parse CSV text and aggregate it.
    ///
    /// A header-only file is not an error; it yields an empty dataset. Use
    /// [`Dataset::require_data`] where "no data" must stop the caller.
    pub fn from_csv(text: &str) -> Result<Dataset, DashboardError> {
        Ok(Dataset::from_records(GroundwaterRecord::parse_csv(text)?))
    }

    /// Like [`Dataset::from_csv`], for raw bytes such as an uploaded file.
    pub fn from_bytes(bytes: &[u8]) -> Result<Dataset, DashboardError> {
        Ok(Dataset::from_records(GroundwaterRecord::parse_reader(bytes)?))
    }

    pub fn is_empty(&self) -> bool {
        self.stations.is_empty()
    }

    /// `Err(EmptyDataset)` when no row survived validation.
    pub fn require_data(&self) -> Result<&Dataset, DashboardError> {
        if self.is_empty() {
            Err(DashboardError::EmptyDataset)
        } else {
            Ok(self)
        }
    }

    pub fn station(&self, station_id: &str) -> Option<&StationSummary> {
        self.stations.iter().find(|s| s.station_id() == station_id)
    }

    /// The chronologically latest date across every record.
    ///
    /// Records whose date cannot be parsed only win when no record has a
    /// recognisable date, in which case the greatest raw string is used.
    pub fn latest_date(&self) -> Option<&str> {
        self.records
            .iter()
            .filter_map(|r| r.parsed_date().map(|d| (d, r.date.as_str())))
            .max_by_key(|(d, _)| *d)
            .map(|(_, raw)| raw)
            .or_else(|| self.records.iter().map(|r| r.date.as_str()).max())
    }
}

#[cfg(test)]
mod tests {
    use super::Dataset;
    use crate::error::DashboardError;

    const CSV: &str = "Station_ID,Location,Lat,Lon,Date,Water_Level_m,Rainfall_mm
S2,Bhopal,23.2,77.4,2024-01-03,11.0,0
S1,LocA,10,20,2024-01-01,8.0,0
S1,LocA,10,20,2024-01-02,12.0,5
S2,Bhopal,23.2,77.4,2024-01-04,11.5,2
S3,,1,1,2024-01-09,1.0,0
";

    #[test]
    fn test_from_csv() {
        let dataset = Dataset::from_csv(CSV).unwrap();
        assert_eq!(dataset.records.len(), 4);
        assert_eq!(dataset.stations.len(), 2);
        assert_eq!(dataset.stations[0].station_id(), "S2");
        assert_eq!(dataset.latest_date(), Some("2024-01-04"));
        assert!(dataset.station("S1").is_some());
        assert!(dataset.station("S3").is_none());
        assert!(dataset.require_data().is_ok());
    }

    #[test]
    fn test_header_only_is_empty_not_error() {
        let dataset =
            Dataset::from_csv("Station_ID,Location,Lat,Lon,Date,Water_Level_m,Rainfall_mm\n").unwrap();
        assert!(dataset.is_empty());
        assert_eq!(dataset.latest_date(), None);
        assert!(matches!(dataset.require_data(), Err(DashboardError::EmptyDataset)));
    }

    #[test]
    fn test_latest_date_falls_back_to_raw_strings() {
        let csv = "Station_ID,Location,Date\nS1,A,week 2\nS1,A,week 10\n";
        let dataset = Dataset::from_csv(csv).unwrap();
        assert_eq!(dataset.latest_date(), Some("week 2"));
    }
}
