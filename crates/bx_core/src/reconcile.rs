//! Reconciliation of computed stat lines against official totals.
//!
//! The engine inner-joins official and computed lines on canonical name,
//! diffs every tracked field, and condenses the result into an accuracy
//! percentage and a pass/partial/fail status. Official rows with no
//! computed counterpart are partitioned rather than treated uniformly as
//! defects: a pinch-runner who never bats is expected structural noise,
//! while an unmatched row with plate activity is a real resolver or
//! classifier bug.

use std::collections::HashMap;

use crate::config::{ValidationConfig, PARTIAL_FLOOR};
use crate::models::{
    FieldDiff, MismatchReport, PlayerDiff, Role, StatField, StatLine, ValidationReport,
    ValidationStatus,
};

/// Deterministic, input-preserving comparison engine for one role.
#[derive(Debug, Clone)]
pub struct ReconciliationEngine {
    threshold: f64,
}

impl ReconciliationEngine {
    pub fn new(threshold: f64) -> Self {
        Self { threshold }
    }

    pub fn with_config(config: &ValidationConfig) -> Self {
        Self::new(config.threshold)
    }

    /// Compare official and computed lines for one (game, role) pair.
    ///
    /// Accuracy is volume-weighted: the sum of absolute per-field deltas is
    /// measured against the total official stat volume. Official rows the
    /// computed set never matched contribute their full tracked volume as
    /// misses, so a dropped or misattributed player depresses accuracy
    /// instead of silently inflating it. Zero official volume reports
    /// accuracy 0 with an explicit fail, never a division fault.
    pub fn reconcile(
        &self,
        role: Role,
        official: &[StatLine],
        computed: &[StatLine],
    ) -> ValidationReport {
        let fields = StatField::tracked(role);
        let computed_by_name: HashMap<&str, &StatLine> =
            computed.iter().map(|l| (l.name.as_str(), l)).collect();

        let total_official: u32 = official.iter().map(|l| l.stat_volume(role)).sum();
        let total_calculated: u32 = computed.iter().map(|l| l.stat_volume(role)).sum();

        let mut abs_diff_sum: u64 = 0;
        let mut differences = Vec::new();
        let mut mismatches = MismatchReport::default();

        for line in official {
            match computed_by_name.get(line.name.as_str()) {
                Some(comp) => {
                    let field_diffs = diff_fields(fields, line, comp);
                    for d in &field_diffs {
                        abs_diff_sum += d.diff.unsigned_abs();
                    }
                    if !field_diffs.is_empty() {
                        differences.push(PlayerDiff {
                            participant: line.name.clone(),
                            field_diffs,
                        });
                    }
                }
                None => {
                    abs_diff_sum += u64::from(line.stat_volume(role));
                    partition_unmatched(line, &mut mismatches);
                }
            }
        }

        let (accuracy_percentage, status) = self.score(total_official, abs_diff_sum);
        if status == ValidationStatus::Fail {
            log::warn!(
                "{} reconciliation failed: accuracy {:.1}% over volume {}",
                role.name(),
                accuracy_percentage,
                total_official
            );
        }

        ValidationReport {
            role,
            status,
            accuracy_percentage,
            total_official,
            total_calculated,
            differences,
            name_mismatches: mismatches,
        }
    }

    fn score(&self, total_official: u32, abs_diff_sum: u64) -> (f64, ValidationStatus) {
        if total_official == 0 {
            return (0.0, ValidationStatus::Fail);
        }
        let volume = f64::from(total_official);
        let accuracy = ((volume - abs_diff_sum as f64) / volume * 100.0).max(0.0);
        let status = if accuracy >= self.threshold {
            ValidationStatus::Pass
        } else if accuracy >= PARTIAL_FLOOR {
            ValidationStatus::Partial
        } else {
            ValidationStatus::Fail
        };
        (accuracy, status)
    }
}

fn diff_fields(fields: &[StatField], official: &StatLine, computed: &StatLine) -> Vec<FieldDiff> {
    let mut diffs = Vec::new();
    for &field in fields {
        let o = official.get(field);
        let c = computed.get(field);
        if o != c {
            diffs.push(FieldDiff {
                field,
                official: o,
                computed: c,
                diff: i64::from(c) - i64::from(o),
            });
        }
    }
    diffs
}

/// Place an official-only row into exactly one mismatch partition.
fn partition_unmatched(line: &StatLine, mismatches: &mut MismatchReport) {
    if line.is_empty() {
        mismatches.empty_stats.push(line.name.clone());
    } else if line.plate_activity() > 0 {
        log::debug!("official row '{}' has plate activity but no computed line", line.name);
        mismatches.name_mismatches.push(line.name.clone());
    } else {
        mismatches.pinch_runners.push(line.name.clone());
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use proptest::prelude::*;

    fn batting_line(name: &str, pa: u32, ab: u32, h: u32) -> StatLine {
        StatLine {
            name: name.to_string(),
            plate_appearances: pa,
            at_bats: ab,
            hits: h,
            ..Default::default()
        }
    }

    #[test]
    fn test_identical_lines_score_one_hundred() {
        let official = vec![batting_line("Aaron Judge", 4, 3, 1)];
        let computed = vec![batting_line("Aaron Judge", 4, 3, 1)];
        let report =
            ReconciliationEngine::new(95.0).reconcile(Role::Batting, &official, &computed);
        assert_eq!(report.accuracy_percentage, 100.0);
        assert_eq!(report.status, ValidationStatus::Pass);
        assert!(report.differences.is_empty());
        assert_eq!(report.name_mismatches.total(), 0);
    }

    #[test]
    fn test_matching_player_contributes_zero_diffs() {
        let official = vec![
            batting_line("Aaron Judge", 4, 3, 1),
            batting_line("Juan Soto", 4, 4, 2),
        ];
        let computed = vec![
            batting_line("Aaron Judge", 4, 3, 1),
            batting_line("Juan Soto", 4, 4, 1),
        ];
        let report =
            ReconciliationEngine::new(95.0).reconcile(Role::Batting, &official, &computed);
        assert_eq!(report.differences.len(), 1);
        assert_eq!(report.differences[0].participant, "Juan Soto");
        assert_eq!(report.differences[0].field_diffs.len(), 1);
        assert_eq!(report.differences[0].field_diffs[0].field, StatField::Hits);
        assert_eq!(report.differences[0].field_diffs[0].diff, -1);
    }

    #[test]
    fn test_unmatched_pinch_runner_is_expected() {
        let pinch_runner = StatLine {
            name: "Terrance Gore".to_string(),
            runs: 1,
            stolen_bases: 1,
            ..Default::default()
        };
        let official = vec![batting_line("Aaron Judge", 4, 3, 1), pinch_runner];
        let computed = vec![batting_line("Aaron Judge", 4, 3, 1)];
        let report =
            ReconciliationEngine::new(95.0).reconcile(Role::Batting, &official, &computed);
        assert_eq!(report.name_mismatches.pinch_runners, vec!["Terrance Gore"]);
        assert!(report.name_mismatches.name_mismatches.is_empty());
        // Baserunning fields are untracked, so the pinch-runner costs
        // no accuracy.
        assert_eq!(report.accuracy_percentage, 100.0);
        assert_eq!(report.status, ValidationStatus::Pass);
    }

    #[test]
    fn test_unmatched_plate_activity_is_a_defect() {
        let official = vec![
            batting_line("Aaron Judge", 4, 3, 1),
            batting_line("Giancarlo Stanton", 2, 2, 1),
        ];
        let computed = vec![batting_line("Aaron Judge", 4, 3, 1)];
        let report =
            ReconciliationEngine::new(95.0).reconcile(Role::Batting, &official, &computed);
        assert_eq!(
            report.name_mismatches.name_mismatches,
            vec!["Giancarlo Stanton"]
        );
        assert!(report.accuracy_percentage < 100.0);
    }

    #[test]
    fn test_all_zero_official_row_is_discardable() {
        let official = vec![batting_line("Aaron Judge", 4, 3, 1), batting_line("Bench Guy", 0, 0, 0)];
        let computed = vec![batting_line("Aaron Judge", 4, 3, 1)];
        let report =
            ReconciliationEngine::new(95.0).reconcile(Role::Batting, &official, &computed);
        assert_eq!(report.name_mismatches.empty_stats, vec!["Bench Guy"]);
        assert_eq!(report.accuracy_percentage, 100.0);
    }

    #[test]
    fn test_zero_volume_fails_explicitly() {
        let report = ReconciliationEngine::new(95.0).reconcile(Role::Batting, &[], &[]);
        assert_eq!(report.accuracy_percentage, 0.0);
        assert_eq!(report.status, ValidationStatus::Fail);
    }

    #[test]
    fn test_status_bands() {
        let engine = ReconciliationEngine::new(95.0);
        // 100 volume, diff 4 → 96% → pass.
        assert_eq!(engine.score(100, 4), (96.0, ValidationStatus::Pass));
        // diff 10 → 90% → partial.
        assert_eq!(engine.score(100, 10), (90.0, ValidationStatus::Partial));
        // diff 30 → 70% → fail.
        assert_eq!(engine.score(100, 30), (70.0, ValidationStatus::Fail));
        // Diffs beyond the volume clamp at 0 rather than going negative.
        assert_eq!(engine.score(100, 400), (0.0, ValidationStatus::Fail));
    }

    #[test]
    fn test_inputs_are_not_mutated() {
        let official = vec![batting_line("Aaron Judge", 4, 3, 1)];
        let computed = vec![batting_line("Aaron Judge", 4, 2, 1)];
        let before = (official.clone(), computed.clone());
        let _ = ReconciliationEngine::new(95.0).reconcile(Role::Batting, &official, &computed);
        assert_eq!((official, computed), before);
    }

    proptest! {
        #[test]
        fn prop_unmatched_rows_land_in_exactly_one_partition(
            rows in prop::collection::vec(
                (0u32..3, 0u32..3, 0u32..2, 0u32..2), 0..8
            )
        ) {
            let official: Vec<StatLine> = rows
                .iter()
                .enumerate()
                .map(|(i, (pa, ab, runs, sb))| StatLine {
                    name: format!("Player {}", i),
                    plate_appearances: *pa,
                    at_bats: *ab,
                    runs: *runs,
                    stolen_bases: *sb,
                    ..Default::default()
                })
                .collect();
            let report =
                ReconciliationEngine::new(95.0).reconcile(Role::Batting, &official, &[]);
            let m = &report.name_mismatches;
            prop_assert_eq!(m.total(), official.len());
            for line in &official {
                let buckets = [
                    m.pinch_runners.contains(&line.name),
                    m.name_mismatches.contains(&line.name),
                    m.empty_stats.contains(&line.name),
                ];
                prop_assert_eq!(
                    buckets.iter().filter(|b| **b).count(),
                    1,
                    "{} must land in exactly one partition",
                    &line.name
                );
            }
        }
    }
}
