use serde::Serialize;

use crate::error::AnalysisError;
use crate::metrics::CrackMetrics;

/// Upper limits for the four compliance terms, in physical units.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct ComplianceThresholds {
    /// Maximum allowed crack width.
    pub max_width: f64,
    /// Maximum allowed average crack width.
    pub avg_width: f64,
    /// Maximum allowed crack area ratio, in percent.
    pub area_ratio: f64,
    /// Maximum allowed crack length.
    pub length: f64,
}

impl ComplianceThresholds {
    /// Check that every threshold is a finite number.
    pub fn validate(&self) -> Result<(), AnalysisError> {
        for (name, value) in [
            ("max_width", self.max_width),
            ("avg_width", self.avg_width),
            ("area_ratio", self.area_ratio),
            ("length", self.length),
        ] {
            if !value.is_finite() {
                return Err(AnalysisError::InvalidParameter(format!(
                    "{name} threshold must be finite, got {value}"
                )));
            }
        }
        Ok(())
    }
}

impl Default for ComplianceThresholds {
    /// Defaults matching the interactive tool: 1.0 length units for both
    /// width limits, 100% area ratio, 100.0 length units of crack.
    fn default() -> Self {
        Self {
            max_width: 1.0,
            avg_width: 1.0,
            area_ratio: 100.0,
            length: 100.0,
        }
    }
}

/// The outcome of the compliance check.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub enum Verdict {
    /// All four threshold terms hold.
    Pass,
    /// At least one threshold term is violated.
    Fail,
}

impl std::fmt::Display for Verdict {
    fn fmt(&self, f: &mut std::fmt::Formatter) -> std::fmt::Result {
        match self {
            Verdict::Pass => write!(f, "Pass"),
            Verdict::Fail => write!(f, "Fail"),
        }
    }
}

/// Evaluate the compliance predicate.
///
/// The verdict is [`Verdict::Pass`] iff maximum width, average width, area
/// ratio and length are each at or below their threshold. The four terms are
/// independent and unweighted.
pub fn evaluate(metrics: &CrackMetrics, thresholds: &ComplianceThresholds) -> Verdict {
    let pass = metrics.max_width <= thresholds.max_width
        && metrics.avg_width <= thresholds.avg_width
        && metrics.area_ratio <= thresholds.area_ratio
        && metrics.length <= thresholds.length;

    if pass {
        Verdict::Pass
    } else {
        Verdict::Fail
    }
}
