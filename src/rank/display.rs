//! Display-intensity scaling for ranked metrics
//!
//! These constants color metric bars in presentation layers. They are fixed
//! normalization maxima observed in the reference dataset and are NOT alert
//! thresholds — the classifier's thresholds live in [`crate::alert`] and the
//! two must stay independent.

use serde::{Deserialize, Serialize};

/// Observed closeness-centrality maximum used to scale display bars.
pub const CLOSENESS_SCALE_MAX: f64 = 0.936524;

/// Observed betweenness-centrality maximum used to scale display bars.
pub const BETWEENNESS_SCALE_MAX: f64 = 5.946888;

/// Visual weight of a metric relative to its scale maximum.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Intensity {
    High,
    Medium,
    Low,
}

impl Intensity {
    pub fn as_str(self) -> &'static str {
        match self {
            Self::High => "high",
            Self::Medium => "medium",
            Self::Low => "low",
        }
    }
}

fn banded(value: f64, scale_max: f64, high: f64, medium: f64) -> Intensity {
    let ratio = if scale_max > 0.0 { value / scale_max } else { 0.0 };
    if ratio > high {
        Intensity::High
    } else if ratio > medium {
        Intensity::Medium
    } else {
        Intensity::Low
    }
}

/// Bar intensity for a closeness value: high above 80% of scale, medium
/// above 60%.
pub fn closeness_intensity(value: f64) -> Intensity {
    banded(value, CLOSENESS_SCALE_MAX, 0.8, 0.6)
}

/// Bar intensity for a betweenness value: high above 70% of scale, medium
/// above 40%.
pub fn betweenness_intensity(value: f64) -> Intensity {
    banded(value, BETWEENNESS_SCALE_MAX, 0.7, 0.4)
}

/// Risk shading for eccentricity: low at ≤ 2, medium at 3, high beyond.
pub fn eccentricity_risk(eccentricity: u32) -> Intensity {
    if eccentricity <= 2 {
        Intensity::Low
    } else if eccentricity == 3 {
        Intensity::Medium
    } else {
        Intensity::High
    }
}
