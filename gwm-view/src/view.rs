//! The per-view bundle handed to presentation: one station, evaluated at the
//! effective date.

use gwm_data::advice::{self, AlertMessage};
use gwm_data::metrics::{
    self, DatedValue, RecentMovement, StationStatistics, WeeklyTrend, ROLLING_WINDOW,
};
use gwm_data::table::{self, ChartPoint, TableRow};
use gwm_data::trend::TrendDelta;
use gwm_dwlr::{GroundwaterRecord, StationSummary, StatusTier};
use serde::Serialize;

/// Derived figures for one station at one point in time.
///
/// `status` follows the displayed record, so in time-series mode the alert
/// and advice describe the selected day. `latest_status` is the station's
/// classification from its newest record.
#[derive(Debug, Clone, Serialize)]
pub struct StationView<'a> {
    pub station_id: &'a str,
    pub location: &'a str,
    pub lat: f64,
    pub lon: f64,
    pub latest_status: StatusTier,
    pub status: StatusTier,
    pub current: &'a GroundwaterRecord,
    pub recharge_change: Option<TrendDelta>,
    pub alert: AlertMessage,
    pub statistics: Option<StationStatistics>,
    pub weekly_trend: Option<WeeklyTrend>,
    pub recent_movement: Option<RecentMovement>,
    pub recommendation: &'static str,
    pub action_items: &'static [&'static str],
    pub recent_rows: Vec<TableRow>,
    pub chart: Vec<ChartPoint>,
    pub rolling_average: Vec<DatedValue>,
}

impl<'a> StationView<'a> {
    pub fn build(station: &'a StationSummary, selected_date: Option<&str>) -> StationView<'a> {
        let records = station.records();
        let current = metrics::current_record(station, selected_date);
        let status = StatusTier::from_water_level(current.water_level_m);
        StationView {
            station_id: station.station_id(),
            location: station.location(),
            lat: station.lat(),
            lon: station.lon(),
            latest_status: station.status(),
            status,
            current,
            recharge_change: metrics::recharge_change(station, selected_date),
            alert: advice::alert(status, current.water_level_m),
            statistics: metrics::statistics(records),
            weekly_trend: metrics::weekly_trend(records),
            recent_movement: metrics::recent_movement(records),
            recommendation: advice::recommendation(status),
            action_items: advice::action_items(status),
            recent_rows: table::recent_rows(station),
            chart: table::chart_points(station),
            rolling_average: metrics::rolling_average(records, ROLLING_WINDOW),
        }
    }
}
