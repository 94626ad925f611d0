//! Pure functions deriving dashboard figures from a station's records.
//!
//! Everything here works on immutable snapshots and is cheap enough to call
//! on every view. Empty inputs give `None`; a single record is always
//! handled.

use crate::trend::{TrendDelta, TrendDirection};
use gwm_dwlr::{GroundwaterRecord, StationSummary};
use serde::Serialize;

/// Records averaged at each end of the series by [`weekly_trend`].
pub const TREND_WINDOW: usize = 7;

/// Default window for [`rolling_average`].
pub const ROLLING_WINDOW: usize = 7;

/// Net change beyond which [`recent_movement`] reports rising or falling.
pub const MOVEMENT_THRESHOLD_M: f64 = 0.1;

/// The record to display for a view.
///
/// With a selected date, the first record carrying that date; otherwise, or
/// when nothing matches, the station's latest record.
pub fn current_record<'a>(
    station: &'a StationSummary,
    selected_date: Option<&str>,
) -> &'a GroundwaterRecord {
    &station.records()[current_index(station, selected_date)]
}

/// Position of [`current_record`] within the station's records.
pub fn current_index(station: &StationSummary, selected_date: Option<&str>) -> usize {
    selected_date
        .and_then(|date| station.position_of_date(date))
        .unwrap_or(station.records().len() - 1)
}

/// Change between the current record and the one before it. `None` when the
/// current record is the first.
pub fn recharge_change(station: &StationSummary, selected_date: Option<&str>) -> Option<TrendDelta> {
    let idx = current_index(station, selected_date);
    let previous = idx.checked_sub(1).map(|i| &station.records()[i])?;
    let current = &station.records()[idx];
    Some(TrendDelta::between(current.water_level_m, previous.water_level_m))
}

/// Overall direction label for the multi-day comparison.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum OverallTrend {
    Increasing,
    Decreasing,
    Stable,
}

impl From<TrendDirection> for OverallTrend {
    fn from(direction: TrendDirection) -> Self {
        match direction {
            TrendDirection::Up => OverallTrend::Increasing,
            TrendDirection::Down => OverallTrend::Decreasing,
            TrendDirection::Stable => OverallTrend::Stable,
        }
    }
}

/// First week versus last week of a station's water levels.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct WeeklyTrend {
    pub first_week_avg: f64,
    pub last_week_avg: f64,
    pub delta: TrendDelta,
    pub overall: OverallTrend,
    /// `|last - first| / first` as a percentage. `None` when the first
    /// window averages zero.
    pub relative_change_pct: Option<f64>,
}

/// Compare the mean of the last [`TREND_WINDOW`] records with the mean of
/// the first [`TREND_WINDOW`].
///
/// With fewer records each window holds what is available, so the two
/// windows overlap (or coincide) for short series.
pub fn weekly_trend(records: &[GroundwaterRecord]) -> Option<WeeklyTrend> {
    if records.is_empty() {
        return None;
    }
    let window = TREND_WINDOW.min(records.len());
    let first_week_avg = mean_level(&records[..window]);
    let last_week_avg = mean_level(&records[records.len() - window..]);
    let delta = TrendDelta::between(last_week_avg, first_week_avg);
    Some(WeeklyTrend {
        first_week_avg,
        last_week_avg,
        delta,
        overall: delta.trend.into(),
        relative_change_pct: relative_change_pct(first_week_avg, last_week_avg),
    })
}

fn relative_change_pct(first: f64, last: f64) -> Option<f64> {
    if first == 0.0 {
        return None;
    }
    Some((last - first).abs() / first * 100.0)
}

/// Summary statistics over a record list.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct StationStatistics {
    pub count: usize,
    pub first_date: String,
    pub last_date: String,
    pub min_level_m: f64,
    pub max_level_m: f64,
    pub mean_level_m: f64,
    pub total_rainfall_mm: f64,
    pub mean_rainfall_mm: f64,
    /// Records with rainfall above zero.
    pub rainy_days: usize,
}

/// Min/max/mean water level and rainfall totals. A `NaN` reading makes the
/// affected figures `NaN`.
pub fn statistics(records: &[GroundwaterRecord]) -> Option<StationStatistics> {
    let first = records.first()?;
    let last = records.last()?;
    let count = records.len();
    let levels = records.iter().map(|r| r.water_level_m);
    let total_rainfall_mm: f64 = records.iter().map(|r| r.rainfall_mm).sum();
    Some(StationStatistics {
        count,
        first_date: first.date.clone(),
        last_date: last.date.clone(),
        min_level_m: levels.clone().fold(f64::INFINITY, nan_min),
        max_level_m: levels.fold(f64::NEG_INFINITY, nan_max),
        mean_level_m: mean_level(records),
        total_rainfall_mm,
        mean_rainfall_mm: total_rainfall_mm / count as f64,
        rainy_days: records.iter().filter(|r| r.rainfall_mm > 0.0).count(),
    })
}

/// A derived value attached to a record date.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct DatedValue {
    pub date: String,
    pub value: f64,
}

/// Trailing mean of water level over `window` records, one point per
/// record. The window is shorter at the start of the series. A zero window
/// is treated as one.
pub fn rolling_average(records: &[GroundwaterRecord], window: usize) -> Vec<DatedValue> {
    let window = window.max(1);
    records
        .iter()
        .enumerate()
        .map(|(i, record)| {
            let start = (i + 1).saturating_sub(window);
            DatedValue {
                date: record.date.clone(),
                value: mean_level(&records[start..=i]),
            }
        })
        .collect()
}

/// Short-term movement over the most recent week.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum Movement {
    Rising,
    Falling,
    Stable,
}

/// Net change across the last `min(7, n)` records, with the number of
/// records it spans.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct RecentMovement {
    pub days: usize,
    pub change_m: f64,
    pub movement: Movement,
}

/// Rising/falling/stable over the last week. `None` with fewer than two
/// records.
pub fn recent_movement(records: &[GroundwaterRecord]) -> Option<RecentMovement> {
    if records.len() < 2 {
        return None;
    }
    let days = TREND_WINDOW.min(records.len());
    let recent = &records[records.len() - days..];
    let change_m = recent[days - 1].water_level_m - recent[0].water_level_m;
    let movement = if change_m > MOVEMENT_THRESHOLD_M {
        Movement::Rising
    } else if change_m < -MOVEMENT_THRESHOLD_M {
        Movement::Falling
    } else {
        Movement::Stable
    };
    Some(RecentMovement {
        days,
        change_m,
        movement,
    })
}

fn mean_level(records: &[GroundwaterRecord]) -> f64 {
    records.iter().map(|r| r.water_level_m).sum::<f64>() / records.len() as f64
}

fn nan_min(acc: f64, x: f64) -> f64 {
    if acc.is_nan() || x.is_nan() {
        f64::NAN
    } else {
        acc.min(x)
    }
}

fn nan_max(acc: f64, x: f64) -> f64 {
    if acc.is_nan() || x.is_nan() {
        f64::NAN
    } else {
        acc.max(x)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use gwm_dwlr::StationSummary;

    fn record(date: &str, level: f64, rain: f64) -> GroundwaterRecord {
        GroundwaterRecord {
            station_id: "S1".to_string(),
            location: "LocA".to_string(),
            lat: 10.0,
            lon: 20.0,
            date: date.to_string(),
            water_level_m: level,
            rainfall_mm: rain,
        }
    }

    fn station(levels: &[f64]) -> StationSummary {
        let records = levels
            .iter()
            .enumerate()
            .map(|(i, &level)| record(&format!("2024-01-{:02}", i + 1), level, i as f64))
            .collect();
        StationSummary::from_records("S1", records).unwrap()
    }

    #[test]
    fn test_current_record_latest_when_no_date() {
        let s = station(&[8.0, 12.0, 15.0]);
        assert_eq!(current_record(&s, None).water_level_m, 15.0);
    }

    #[test]
    fn test_current_record_selected_date() {
        let s = station(&[8.0, 12.0, 15.0]);
        assert_eq!(current_record(&s, Some("2024-01-02")).water_level_m, 12.0);
        assert_eq!(current_index(&s, Some("2024-01-02")), 1);
    }

    #[test]
    fn test_current_record_unknown_date_falls_back_to_latest() {
        let s = station(&[8.0, 12.0, 15.0]);
        let current = current_record(&s, Some("2031-07-04"));
        assert_eq!(current, s.latest_record());
    }

    #[test]
    fn test_recharge_change_two_day_scenario() {
        let s = station(&[8.0, 12.0]);
        let change = recharge_change(&s, None).unwrap();
        assert_eq!(change.value, 4.0);
        assert_eq!(change.trend, TrendDirection::Up);
    }

    #[test]
    fn test_recharge_change_first_record_not_applicable() {
        let s = station(&[8.0, 12.0]);
        assert!(recharge_change(&s, Some("2024-01-01")).is_none());
        assert!(recharge_change(&station(&[5.0]), None).is_none());
    }

    #[test]
    fn test_recharge_change_at_selected_date() {
        let s = station(&[8.0, 12.0, 11.0]);
        let change = recharge_change(&s, Some("2024-01-03")).unwrap();
        assert!((change.value + 1.0).abs() < 1e-9);
        assert_eq!(change.trend, TrendDirection::Down);
    }

    #[test]
    fn test_weekly_trend_full_windows() {
        let levels: Vec<f64> = (1..=14).map(|x| x as f64).collect();
        let s = station(&levels);
        let trend = weekly_trend(s.records()).unwrap();
        assert_eq!(trend.first_week_avg, 4.0);
        assert_eq!(trend.last_week_avg, 11.0);
        assert_eq!(trend.delta.value, 7.0);
        assert_eq!(trend.overall, OverallTrend::Increasing);
        assert_eq!(trend.relative_change_pct, Some(175.0));
    }

    #[test]
    fn test_weekly_trend_relative_change() {
        let levels = [10.0, 10.0, 10.0, 10.0, 10.0, 10.0, 10.0, 8.0, 8.0, 8.0, 8.0, 8.0, 8.0, 8.0];
        let trend = weekly_trend(station(&levels).records()).unwrap();
        assert_eq!(trend.relative_change_pct, Some(20.0));
        assert_eq!(trend.overall, OverallTrend::Decreasing);

        let zero_start = [0.0, 0.0, 0.0, 0.0, 0.0, 0.0, 0.0, 3.0];
        let trend = weekly_trend(station(&zero_start).records()).unwrap();
        assert_eq!(trend.first_week_avg, 0.0);
        assert!(trend.relative_change_pct.is_none());
    }

    #[test]
    fn test_weekly_trend_short_series_overlaps() {
        let s = station(&[10.0, 6.0, 8.0]);
        let trend = weekly_trend(s.records()).unwrap();
        assert_eq!(trend.first_week_avg, 8.0);
        assert_eq!(trend.last_week_avg, 8.0);
        assert_eq!(trend.overall, OverallTrend::Stable);

        let single = station(&[9.5]);
        let trend = weekly_trend(single.records()).unwrap();
        assert_eq!(trend.first_week_avg, 9.5);
        assert_eq!(trend.last_week_avg, 9.5);
        assert!(weekly_trend(&[]).is_none());
    }

    #[test]
    fn test_weekly_trend_decreasing() {
        let levels: Vec<f64> = (0..10).map(|x| 20.0 - x as f64).collect();
        let trend = weekly_trend(station(&levels).records()).unwrap();
        assert_eq!(trend.overall, OverallTrend::Decreasing);
    }

    #[test]
    fn test_statistics() {
        let s = station(&[8.0, 12.0, 10.0]);
        let stats = statistics(s.records()).unwrap();
        assert_eq!(stats.count, 3);
        assert_eq!(stats.first_date, "2024-01-01");
        assert_eq!(stats.last_date, "2024-01-03");
        assert_eq!(stats.min_level_m, 8.0);
        assert_eq!(stats.max_level_m, 12.0);
        assert_eq!(stats.mean_level_m, 10.0);
        // rainfall is the record index: 0, 1, 2
        assert_eq!(stats.total_rainfall_mm, 3.0);
        assert_eq!(stats.mean_rainfall_mm, 1.0);
        assert_eq!(stats.rainy_days, 2);
    }

    #[test]
    fn test_statistics_single_record() {
        let stats = statistics(station(&[7.5]).records()).unwrap();
        assert_eq!(stats.min_level_m, 7.5);
        assert_eq!(stats.max_level_m, 7.5);
        assert_eq!(stats.mean_level_m, 7.5);
        assert_eq!(stats.rainy_days, 0);
        assert!(statistics(&[]).is_none());
    }

    #[test]
    fn test_statistics_nan_propagates() {
        let stats = statistics(station(&[8.0, f64::NAN, 12.0]).records()).unwrap();
        assert!(stats.min_level_m.is_nan());
        assert!(stats.max_level_m.is_nan());
        assert!(stats.mean_level_m.is_nan());
        assert_eq!(stats.total_rainfall_mm, 3.0);
    }

    #[test]
    fn test_rolling_average() {
        let s = station(&[2.0, 4.0, 6.0, 8.0]);
        let rolling = rolling_average(s.records(), 2);
        let values: Vec<f64> = rolling.iter().map(|p| p.value).collect();
        assert_eq!(values, vec![2.0, 3.0, 5.0, 7.0]);
        assert_eq!(rolling[3].date, "2024-01-04");

        let whole = rolling_average(s.records(), ROLLING_WINDOW);
        assert_eq!(whole[3].value, 5.0);
        assert_eq!(rolling_average(s.records(), 0)[1].value, 4.0);
    }

    #[test]
    fn test_recent_movement() {
        let rising = recent_movement(station(&[5.0, 5.05, 5.3]).records()).unwrap();
        assert_eq!(rising.movement, Movement::Rising);
        assert_eq!(rising.days, 3);

        let levels: Vec<f64> = vec![1.0, 1.0, 1.0, 9.0, 8.0, 8.0, 8.0, 8.0, 8.0, 7.95];
        let falling = recent_movement(station(&levels).records()).unwrap();
        assert_eq!(falling.days, 7);
        assert!((falling.change_m + 1.05).abs() < 1e-9);
        assert_eq!(falling.movement, Movement::Falling);

        let flat = recent_movement(station(&[5.0, 5.05]).records()).unwrap();
        assert_eq!(flat.movement, Movement::Stable);
        assert!(recent_movement(station(&[5.0]).records()).is_none());
    }
}
