//! Validation report types.
//!
//! A `ValidationReport` covers one (game, role) pair; a `GameReport`
//! combines the two role reports into the unit a caller persists or
//! displays. All report types are plain data, immutable once produced.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use super::stat_line::{Role, StatField};

/// Overall verdict for a reconciliation run.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ValidationStatus {
    Pass,
    Partial,
    Fail,
}

impl ValidationStatus {
    /// Rank for worst-of comparisons (lower is worse).
    fn rank(&self) -> u8 {
        match self {
            ValidationStatus::Fail => 0,
            ValidationStatus::Partial => 1,
            ValidationStatus::Pass => 2,
        }
    }

    /// The worse of two statuses.
    pub fn worst(self, other: ValidationStatus) -> ValidationStatus {
        if self.rank() <= other.rank() {
            self
        } else {
            other
        }
    }
}

/// One field where computed and official totals disagree.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct FieldDiff {
    pub field: StatField,
    pub official: u32,
    pub computed: u32,
    /// computed - official
    pub diff: i64,
}

/// All nonzero diffs for one joined participant.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct PlayerDiff {
    pub participant: String,
    pub field_diffs: Vec<FieldDiff>,
}

/// Partition of official participants absent from the computed set.
///
/// `pinch_runners` is expected structural noise (baserunning-only activity,
/// no plate appearances). `name_mismatches` signals a resolver or classifier
/// defect: the participant has plate activity the pipeline failed to
/// attribute. `empty_stats` rows are all-zero and safe to discard.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct MismatchReport {
    pub pinch_runners: Vec<String>,
    pub name_mismatches: Vec<String>,
    pub empty_stats: Vec<String>,
}

impl MismatchReport {
    /// Whether any unmatched row signals a real defect.
    pub fn has_defects(&self) -> bool {
        !self.name_mismatches.is_empty()
    }

    /// Total unmatched rows across all partitions.
    pub fn total(&self) -> usize {
        self.pinch_runners.len() + self.name_mismatches.len() + self.empty_stats.len()
    }
}

/// Reconciliation result for one (game, role) pair.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ValidationReport {
    pub role: Role,
    pub status: ValidationStatus,
    pub accuracy_percentage: f64,
    /// Sum of tracked official stats (the accuracy denominator).
    pub total_official: u32,
    /// Sum of tracked computed stats.
    pub total_calculated: u32,
    /// Joined participants with at least one nonzero field diff.
    pub differences: Vec<PlayerDiff>,
    pub name_mismatches: MismatchReport,
}

/// Row-level pipeline counters, carried for diagnostics.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct PipelineDiagnostics {
    pub rows_seen: u32,
    /// Rows whose description matched no classifier rule.
    pub rows_dropped: u32,
    /// Original descriptions of the dropped rows, for audit.
    pub dropped_descriptions: Vec<String>,
}

/// Combined per-game report: both role reports plus the derived overall
/// verdict and the persistence-authorization decision.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct GameReport {
    pub game_id: String,
    pub generated_at: DateTime<Utc>,
    pub batting: ValidationReport,
    pub pitching: ValidationReport,
    pub overall_status: ValidationStatus,
    /// Min of the two role accuracies.
    pub overall_accuracy: f64,
    pub total_official: u32,
    pub total_calculated: u32,
    /// Whether the configured halt policy authorizes downstream persistence.
    pub persist_authorized: bool,
    pub diagnostics: PipelineDiagnostics,
}
