//! Derived metrics for groundwater station data.
//!
//! This crate turns a [`gwm_dwlr::StationSummary`] (optionally with a
//! selected date) into the figures shown on the dashboard: trend deltas,
//! weekly comparisons, statistics, table and chart rows, advice text and the
//! CSV export.

pub mod export;
pub mod metrics;
pub mod table;
pub mod trend;

/// Fixed advice per status tier.
pub mod advice {
    use gwm_dwlr::StatusTier;
    use serde::Serialize;

    /// Primary recommendation for a tier.
    pub fn recommendation(status: StatusTier) -> &'static str {
        match status {
            StatusTier::Safe => "Maintain current usage. Promote conservation awareness.",
            StatusTier::Moderate => {
                "Encourage efficient irrigation. Monitor extraction carefully."
            }
            StatusTier::Critical => {
                "High risk. Restrict extraction and promote artificial recharge."
            }
        }
    }

    /// Detailed action items for a tier.
    pub fn action_items(status: StatusTier) -> &'static [&'static str] {
        match status {
            StatusTier::Safe => &[
                "Continue regular monitoring of groundwater levels",
                "Implement rainwater harvesting systems",
                "Promote water conservation practices in the community",
                "Consider establishing a groundwater management committee",
            ],
            StatusTier::Moderate => &[
                "Increase monitoring frequency to daily observations",
                "Restrict new groundwater extraction permits",
                "Implement water-saving irrigation techniques",
                "Explore alternative water sources for non-essential uses",
                "Conduct groundwater quality assessments",
            ],
            StatusTier::Critical => &[
                "Immediately restrict all non-essential groundwater extraction",
                "Implement emergency water rationing measures",
                "Deploy artificial recharge systems urgently",
                "Conduct detailed hydrogeological surveys",
                "Establish emergency water supply alternatives",
                "Issue public advisories about water scarcity",
            ],
        }
    }

    /// Banner text for a tier at the displayed water level.
    #[derive(Debug, Clone, PartialEq, Serialize)]
    pub struct AlertMessage {
        pub status: StatusTier,
        pub title: &'static str,
        pub description: String,
    }

    pub fn alert(status: StatusTier, level_m: f64) -> AlertMessage {
        let (title, description) = match status {
            StatusTier::Safe => (
                "Safe Zone",
                format!("Water level at {:.1}m is within safe limits (< 10m)", level_m),
            ),
            StatusTier::Moderate => (
                "Moderate Zone",
                format!("Water level at {:.1}m requires monitoring (10-20m)", level_m),
            ),
            StatusTier::Critical => (
                "Critical Zone",
                format!("Water level at {:.1}m is critically high (> 20m)", level_m),
            ),
        };
        AlertMessage {
            status,
            title,
            description,
        }
    }

}
