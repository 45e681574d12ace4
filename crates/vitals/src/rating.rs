//! Threshold-based quality ratings.

use serde::{Deserialize, Serialize};

use crate::metric::MetricName;

/// Quality bucket for a metric value.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Hash)]
#[serde(rename_all = "kebab-case")]
pub enum Rating {
    Good,
    NeedsImprovement,
    Poor,
}

impl Rating {
    pub fn as_str(&self) -> &'static str {
        match self {
            Rating::Good => "good",
            Rating::NeedsImprovement => "needs-improvement",
            Rating::Poor => "poor",
        }
    }
}

impl std::fmt::Display for Rating {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

impl MetricName {
    /// The `[good_max, poor_min]` pair for this metric.
    pub fn thresholds(&self) -> [f64; 2] {
        match self {
            MetricName::Cls => [0.1, 0.25],
            MetricName::Fcp => [1800.0, 3000.0],
            MetricName::Fid => [100.0, 300.0],
            MetricName::Lcp => [2500.0, 4000.0],
        }
    }
}

/// Rate a metric value. Values equal to a threshold fall into the better bucket.
pub fn rate(metric: MetricName, value: f64) -> Rating {
    let [good_max, poor_min] = metric.thresholds();
    if value > poor_min {
        Rating::Poor
    } else if value > good_max {
        Rating::NeedsImprovement
    } else {
        Rating::Good
    }
}
