//! Single-station dashboard: info cards, alert, statistics, trends,
//! recommendations and the recent data table.

use crate::load::{focus, NO_DATA_MESSAGE};
use gwm_data::metrics::{Movement, OverallTrend};
use gwm_view::{AppState, Phase, StationView};
use std::fmt::Write;

pub fn run_show(
    mut state: AppState,
    station: Option<&str>,
    date: Option<&str>,
    json: bool,
) -> anyhow::Result<String> {
    if state.phase() == Phase::NoData {
        return Ok(NO_DATA_MESSAGE.to_string());
    }
    focus(&mut state, station, date)?;
    let Some(view) = state.station_view() else {
        return Ok(NO_DATA_MESSAGE.to_string());
    };
    if json {
        return Ok(serde_json::to_string_pretty(&view)?);
    }
    Ok(render(&view)?)
}

fn render(view: &StationView<'_>) -> Result<String, std::fmt::Error> {
    let mut out = String::new();
    let current = view.current;

    writeln!(out, "{} ({})", view.location, view.station_id)?;
    writeln!(out, "Date:              {}", current.date)?;
    writeln!(
        out,
        "Groundwater Level: {:.1}m  {} ZONE",
        current.water_level_m,
        view.status.as_str().to_uppercase()
    )?;
    let recharge = view
        .recharge_change
        .map(|delta| delta.signed_label())
        .unwrap_or_else(|| "N/A".to_string());
    writeln!(out, "Recharge change:   {} from previous day", recharge)?;
    writeln!(out, "Rainfall:          {}mm", current.rainfall_mm)?;
    writeln!(out)?;
    writeln!(out, "{}: {}", view.alert.title, view.alert.description)?;

    if let Some(stats) = &view.statistics {
        writeln!(out)?;
        writeln!(
            out,
            "Statistics ({} data points from {} to {})",
            stats.count, stats.first_date, stats.last_date
        )?;
        writeln!(
            out,
            "  Water level min/avg/max: {:.1}m / {:.1}m / {:.1}m",
            stats.min_level_m, stats.mean_level_m, stats.max_level_m
        )?;
        writeln!(
            out,
            "  Rainfall total {:.1}mm, average {:.1}mm, {} rainy days",
            stats.total_rainfall_mm, stats.mean_rainfall_mm, stats.rainy_days
        )?;
    }

    if let Some(trend) = &view.weekly_trend {
        let label = match trend.overall {
            OverallTrend::Increasing => "INCREASING",
            OverallTrend::Decreasing => "DECREASING",
            OverallTrend::Stable => "STABLE",
        };
        writeln!(
            out,
            "  Trend: {} (first week avg {:.2}m, last week avg {:.2}m)",
            label, trend.first_week_avg, trend.last_week_avg
        )?;
        if let Some(pct) = trend.relative_change_pct {
            writeln!(out, "  Relative change: {:.1}%", pct)?;
        }
    }
    if let Some(recent) = &view.recent_movement {
        let label = match recent.movement {
            Movement::Rising => "Rising",
            Movement::Falling => "Falling",
            Movement::Stable => "Stable",
        };
        writeln!(out, "  Last {} days: {}", recent.days, label)?;
    }

    writeln!(out)?;
    writeln!(
        out,
        "Recommendation ({} zone): {}",
        view.status.as_str().to_uppercase(),
        view.recommendation
    )?;
    for item in view.action_items {
        writeln!(out, "  - {}", item)?;
    }

    writeln!(out)?;
    writeln!(out, "Last {} days:", view.recent_rows.len())?;
    writeln!(out, "  {:<12} {:>9} {:>9} {:>8}", "Date", "Level(m)", "Rain(mm)", "Change")?;
    for row in &view.recent_rows {
        let change = row
            .change_m
            .map(|c| format!("{}{:.2}m", if c > 0.0 { "+" } else { "" }, c))
            .unwrap_or_default();
        writeln!(
            out,
            "  {:<12} {:>9.1} {:>9} {:>8}",
            row.display_date, row.water_level_m, row.rainfall_mm, change
        )?;
    }
    Ok(out.trim_end().to_string())
}
