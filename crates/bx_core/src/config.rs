//! Caller-supplied validation configuration.

use serde::Deserialize;

use crate::models::ValidationStatus;

/// Accuracy floor below which a report is a fail regardless of the
/// configured threshold.
pub const PARTIAL_FLOOR: f64 = 80.0;

/// Default pass/partial boundary.
pub const DEFAULT_THRESHOLD: f64 = 95.0;

/// Knobs a caller passes into a validation run.
#[derive(Debug, Clone, Deserialize)]
#[serde(default)]
pub struct ValidationConfig {
    /// Pass/partial boundary, in percent.
    pub threshold: f64,
    /// When true, only a pass authorizes downstream persistence; when
    /// false, only an outright fail blocks it.
    pub halt_on_failure: bool,
}

impl Default for ValidationConfig {
    fn default() -> Self {
        Self {
            threshold: DEFAULT_THRESHOLD,
            halt_on_failure: true,
        }
    }
}

impl ValidationConfig {
    /// Whether the threshold is usable (must sit in (0, 100] and not fall
    /// below the partial floor, which would make the bands overlap).
    pub fn validate(&self) -> Result<(), String> {
        if !self.threshold.is_finite() || self.threshold <= 0.0 || self.threshold > 100.0 {
            return Err(format!(
                "threshold must be within (0, 100], got {}",
                self.threshold
            ));
        }
        if self.threshold < PARTIAL_FLOOR {
            return Err(format!(
                "threshold {} is below the partial floor {}",
                self.threshold, PARTIAL_FLOOR
            ));
        }
        Ok(())
    }

    /// Apply the halt policy to an overall status.
    pub fn authorizes_persistence(&self, status: ValidationStatus) -> bool {
        if self.halt_on_failure {
            status == ValidationStatus::Pass
        } else {
            status != ValidationStatus::Fail
        }
    }
}
