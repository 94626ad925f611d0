use serde::Serialize;

/// Changes smaller than this (in metres) count as no movement.
pub const STABLE_THRESHOLD_M: f64 = 0.05;

/// Coarse direction of a change between two readings.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum TrendDirection {
    Up,
    Down,
    Stable,
}

/// Signed change between two water levels plus its direction.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct TrendDelta {
    pub value: f64,
    pub trend: TrendDirection,
}

impl TrendDelta {
    /// Compare `current` against `previous`.
    ///
    /// A `NaN` on either side yields a `NaN` value; since `NaN` is neither
    /// small nor positive its direction is `Down`.
    pub fn between(current: f64, previous: f64) -> TrendDelta {
        let value = current - previous;
        let trend = if value.abs() < STABLE_THRESHOLD_M {
            TrendDirection::Stable
        } else if value > 0.0 {
            TrendDirection::Up
        } else {
            TrendDirection::Down
        };
        TrendDelta { value, trend }
    }

    /// Value formatted with an explicit sign for positive changes,
    /// e.g. `+0.25m`, `-1.10m`.
    pub fn signed_label(&self) -> String {
        let sign = if self.value > 0.0 { "+" } else { "" };
        format!("{}{:.2}m", sign, self.value)
    }
}
