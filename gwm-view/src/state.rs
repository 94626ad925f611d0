//! Session state for the dashboard: the loaded dataset plus the current
//! station, view mode and date selection.
//!
//! The aggregated data is never mutated by selection changes. A new load
//! replaces the dataset wholesale and resets the selection.

use crate::view::StationView;
use gwm_data::metrics;
use gwm_dwlr::{DashboardError, Dataset, GroundwaterRecord, StationSummary};
use log::{info, warn};
use serde::{Deserialize, Serialize};

/// Whether date-sensitive displays follow the newest record or the
/// selected date.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub enum ViewMode {
    #[default]
    Latest,
    TimeSeries,
}

/// What the dashboard should show right now.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Phase<'a> {
    Loading,
    /// The last load failed; shown in place of the dashboard.
    Failed(&'a str),
    /// A load succeeded but no row survived validation.
    NoData,
    Ready,
}

/// Shared application state for the dashboard session.
#[derive(Debug, Clone)]
pub struct AppState {
    dataset: Dataset,
    loading: bool,
    error_msg: Option<String>,
    selected_station: String,
    view_mode: ViewMode,
    selected_date: String,
}

impl Default for AppState {
    fn default() -> Self {
        Self::new()
    }
}

impl AppState {
    /// Create a new AppState waiting for its first load.
    pub fn new() -> Self {
        Self {
            dataset: Dataset::default(),
            loading: true,
            error_msg: None,
            selected_station: String::new(),
            view_mode: ViewMode::Latest,
            selected_date: String::new(),
        }
    }

    /// Mark a load (initial fetch or upload) as in flight.
    pub fn begin_load(&mut self) {
        self.loading = true;
    }

    /// Apply the outcome of a load.
    ///
    /// On failure the message is kept for display and the previous dataset
    /// stays as it was. Loads are applied in completion order, so the last
    /// one to finish wins.
    pub fn finish_load(&mut self, result: Result<Dataset, DashboardError>) {
        self.loading = false;
        match result {
            Ok(dataset) => self.replace_dataset(dataset),
            Err(err) => {
                warn!("Dataset load failed: {}", err);
                self.error_msg = Some(err.to_string());
            }
        }
    }

    /// Swap in a freshly loaded dataset and reset the selection to its
    /// defaults: first station, latest date overall, latest view.
    pub fn replace_dataset(&mut self, dataset: Dataset) {
        self.selected_station = dataset
            .stations
            .first()
            .map(|s| s.station_id().to_string())
            .unwrap_or_default();
        self.selected_date = dataset.latest_date().unwrap_or_default().to_string();
        self.view_mode = ViewMode::Latest;
        self.error_msg = None;
        self.loading = false;
        info!(
            "Dataset applied: {} stations, default station '{}', default date '{}'",
            dataset.stations.len(),
            self.selected_station,
            self.selected_date
        );
        self.dataset = dataset;
    }

    pub fn phase(&self) -> Phase<'_> {
        if self.loading {
            Phase::Loading
        } else if let Some(msg) = &self.error_msg {
            Phase::Failed(msg)
        } else if self.dataset.is_empty() {
            Phase::NoData
        } else {
            Phase::Ready
        }
    }

    pub fn dataset(&self) -> &Dataset {
        &self.dataset
    }

    pub fn stations(&self) -> &[StationSummary] {
        &self.dataset.stations
    }

    pub fn error_msg(&self) -> Option<&str> {
        self.error_msg.as_deref()
    }

    pub fn selected_station_id(&self) -> &str {
        &self.selected_station
    }

    pub fn selected_station_data(&self) -> Option<&StationSummary> {
        self.dataset.station(&self.selected_station)
    }

    pub fn view_mode(&self) -> ViewMode {
        self.view_mode
    }

    pub fn selected_date(&self) -> &str {
        &self.selected_date
    }

    /// The date date-sensitive displays should honour: the selected date in
    /// time-series mode, nothing in latest mode.
    pub fn effective_date(&self) -> Option<&str> {
        match self.view_mode {
            ViewMode::TimeSeries if !self.selected_date.is_empty() => Some(&self.selected_date),
            _ => None,
        }
    }

    /// Dates of the selected station, ascending. Always derived from the
    /// current station.
    pub fn available_dates(&self) -> Vec<String> {
        self.selected_station_data()
            .map(StationSummary::available_dates)
            .unwrap_or_default()
    }

    /// Switch station, then reconcile the selected date against the new
    /// station's dates.
    pub fn select_station(&mut self, station_id: &str) -> Result<(), DashboardError> {
        if self.dataset.station(station_id).is_none() {
            return Err(DashboardError::UnknownStation(station_id.to_string()));
        }
        self.selected_station = station_id.to_string();
        self.reconcile_selected_date();
        Ok(())
    }

    pub fn set_view_mode(&mut self, mode: ViewMode) {
        self.view_mode = mode;
        if mode == ViewMode::TimeSeries {
            self.reconcile_selected_date();
        }
    }

    /// Select a date of the current station. A date the station does not
    /// have is refused and the selection falls back to the latest date.
    /// Returns whether `date` was taken as given.
    pub fn set_selected_date(&mut self, date: &str) -> bool {
        let known = self
            .selected_station_data()
            .is_some_and(|station| station.has_date(date));
        if known {
            self.selected_date = date.to_string();
        } else {
            warn!(
                "Date '{}' not available for station '{}'",
                date, self.selected_station
            );
            self.selected_date.clear();
            self.reconcile_selected_date();
        }
        known
    }

    /// Select the date at a position of [`AppState::available_dates`], as a
    /// slider would. Out-of-range positions are ignored.
    pub fn set_selected_date_index(&mut self, index: usize) -> bool {
        match self.available_dates().get(index) {
            Some(date) => {
                self.selected_date = date.clone();
                true
            }
            None => false,
        }
    }

    /// Position of the selected date in [`AppState::available_dates`].
    pub fn selected_date_index(&self) -> Option<usize> {
        self.available_dates()
            .iter()
            .position(|d| *d == self.selected_date)
    }

    /// Keep the selected date valid for the selected station: if the station
    /// lacks it, use the station's latest date.
    pub fn reconcile_selected_date(&mut self) {
        let Some(station) = self.selected_station_data() else {
            return;
        };
        if !station.has_date(&self.selected_date) {
            let latest = station.latest_record().date.clone();
            info!(
                "Selected date '{}' not available for '{}', using '{}'",
                self.selected_date, station.station_id(), latest
            );
            self.selected_date = latest;
        }
    }

    /// The record date-sensitive displays should show.
    pub fn current_record(&self) -> Option<&GroundwaterRecord> {
        let station = self.selected_station_data()?;
        Some(metrics::current_record(station, self.effective_date()))
    }

    /// Everything the dashboard shows for the selected station.
    pub fn station_view(&self) -> Option<StationView<'_>> {
        let station = self.selected_station_data()?;
        Some(StationView::build(station, self.effective_date()))
    }
}
