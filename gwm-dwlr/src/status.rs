use serde::{Deserialize, Serialize};
use std::fmt;

/// Water level (m) below which a station is `Safe`.
pub const SAFE_BELOW_M: f64 = 10.0;

/// Water level (m) above which a station is `Critical`.
pub const CRITICAL_ABOVE_M: f64 = 20.0;

/// Risk classification of a station derived from a single water level.
#[derive(Debug, PartialEq, Eq, Clone, Copy, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum StatusTier {
    Safe,
    Moderate,
    Critical,
}

impl StatusTier {
    /// Classify a water level reading.
    ///
    /// `< 10` is safe, `10..=20` is moderate, anything else (including `NaN`)
    /// is critical.
    pub fn from_water_level(level_m: f64) -> StatusTier {
        if level_m < SAFE_BELOW_M {
            StatusTier::Safe
        } else if level_m <= CRITICAL_ABOVE_M {
            StatusTier::Moderate
        } else {
            StatusTier::Critical
        }
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            StatusTier::Safe => "safe",
            StatusTier::Moderate => "moderate",
            StatusTier::Critical => "critical",
        }
    }
}

impl fmt::Display for StatusTier {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}
