//! JSON boundary for external collaborators.
//!
//! The fetch/extraction side hands over one `GameRequest` per game (raw
//! play rows plus both official tables); this module runs the full
//! classification and reconciliation pipeline and returns the `GameReport`
//! a caller persists or displays. `validate_game_json` wraps the typed
//! entry point for callers integrating over plain JSON strings.

use chrono::Utc;
use serde::{Deserialize, Serialize};

use crate::aggregate::aggregate;
use crate::builder::{dedup_pitch_counts, EventBuilder};
use crate::config::ValidationConfig;
use crate::error::{CoreError, Result};
use crate::models::{GameReport, RawPlayRow, Role, StatLine};
use crate::reconcile::ReconciliationEngine;
use crate::resolver::NameResolver;

/// Current request schema version.
pub const SCHEMA_VERSION: u8 = 1;

/// Error code strings carried in the JSON error envelope.
pub mod error_codes {
    pub const INVALID_REQUEST: &str = "INVALID_REQUEST";
    pub const INVALID_CONFIG: &str = "INVALID_CONFIG";
    pub const UNSUPPORTED_SCHEMA: &str = "UNSUPPORTED_SCHEMA";
    pub const SERIALIZATION: &str = "SERIALIZATION";
}

fn err_code(code: &str, message: impl std::fmt::Display) -> String {
    format!("{code}: {message}")
}

/// Everything needed to validate one game.
#[derive(Debug, Deserialize)]
pub struct GameRequest {
    pub schema_version: u8,
    pub game_id: String,
    /// Play-by-play rows, in source table order.
    pub plays: Vec<RawPlayRow>,
    /// Official batting lines, keyed by display name.
    pub official_batting: Vec<StatLine>,
    /// Official pitching lines, keyed by display name.
    pub official_pitching: Vec<StatLine>,
    #[serde(default)]
    pub config: ValidationConfig,
}

/// Error envelope returned by `validate_game_json` for bad input.
#[derive(Debug, Serialize, Deserialize)]
pub struct ErrorResponse {
    pub error: String,
}

/// Run the full pipeline for one game.
///
/// Builds the name resolver from both official tables (a name appearing
/// only as a pitcher must still resolve), classifies every play row,
/// deduplicates pitch counts, aggregates both roles, reconciles each
/// against its official table, and derives the overall report: the worse
/// of the two statuses, the lower of the two accuracies, and the
/// persistence decision under the configured halt policy.
pub fn validate_game(request: &GameRequest) -> Result<GameReport> {
    if request.schema_version != SCHEMA_VERSION {
        return Err(CoreError::UnsupportedSchema(request.schema_version));
    }
    request
        .config
        .validate()
        .map_err(CoreError::InvalidConfig)?;

    let resolver = NameResolver::build(
        request
            .official_batting
            .iter()
            .chain(request.official_pitching.iter())
            .map(|line| line.name.clone()),
    );

    let builder = EventBuilder::new(&resolver);
    let (mut events, diagnostics) = builder.build_events(&request.game_id, &request.plays);
    dedup_pitch_counts(&mut events);

    let computed_batting = aggregate(&events, Role::Batting);
    let computed_pitching = aggregate(&events, Role::Pitching);

    let engine = ReconciliationEngine::with_config(&request.config);
    let batting = engine.reconcile(Role::Batting, &request.official_batting, &computed_batting);
    let pitching = engine.reconcile(
        Role::Pitching,
        &request.official_pitching,
        &computed_pitching,
    );

    let overall_status = batting.status.worst(pitching.status);
    let overall_accuracy = batting.accuracy_percentage.min(pitching.accuracy_percentage);

    Ok(GameReport {
        game_id: request.game_id.clone(),
        generated_at: Utc::now(),
        overall_status,
        overall_accuracy,
        total_official: batting.total_official + pitching.total_official,
        total_calculated: batting.total_calculated + pitching.total_calculated,
        persist_authorized: request.config.authorizes_persistence(overall_status),
        batting,
        pitching,
        diagnostics,
    })
}

/// JSON-in/JSON-out wrapper around `validate_game`.
///
/// Malformed input produces a serialized `ErrorResponse` instead of a
/// panic, so callers can treat every return value as JSON.
pub fn validate_game_json(request_json: &str) -> String {
    let request: GameRequest = match serde_json::from_str(request_json) {
        Ok(request) => request,
        Err(e) => return error_json(error_codes::INVALID_REQUEST, e),
    };

    let report = match validate_game(&request) {
        Ok(report) => report,
        Err(CoreError::InvalidConfig(msg)) => {
            return error_json(error_codes::INVALID_CONFIG, msg)
        }
        Err(CoreError::UnsupportedSchema(v)) => {
            return error_json(error_codes::UNSUPPORTED_SCHEMA, v)
        }
        Err(e) => return error_json(error_codes::INVALID_REQUEST, e),
    };

    serde_json::to_string(&report)
        .unwrap_or_else(|e| error_json(error_codes::SERIALIZATION, e))
}

fn error_json(code: &str, message: impl std::fmt::Display) -> String {
    let response = ErrorResponse {
        error: err_code(code, message),
    };
    serde_json::to_string(&response)
        .unwrap_or_else(|_| format!("{{\"error\":\"{code}\"}}"))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::{InningHalf, ValidationStatus};

    fn play(batter: &str, pitcher: &str, description: &str, pitches: &str) -> RawPlayRow {
        RawPlayRow {
            inning: 1,
            inning_half: InningHalf::Top,
            batter_text: batter.to_string(),
            pitcher_text: pitcher.to_string(),
            description: description.to_string(),
            pitch_count_text: pitches.to_string(),
        }
    }

    fn judge_game() -> GameRequest {
        GameRequest {
            schema_version: SCHEMA_VERSION,
            game_id: "2026-08-29-NYA-BOS".to_string(),
            plays: vec![
                play("A. Judge", "C. Sale", "Single to center field.", "5"),
                play("A. Judge", "C. Sale", "Strikeout looking.", "4"),
                play("A. Judge", "C. Sale", "Walked.", "6"),
            ],
            official_batting: vec![StatLine {
                name: "Aaron Judge".to_string(),
                plate_appearances: 3,
                at_bats: 2,
                hits: 1,
                walks: 1,
                strikeouts: 1,
                ..Default::default()
            }],
            official_pitching: vec![StatLine {
                name: "Chris Sale".to_string(),
                plate_appearances: 3,
                hits: 1,
                walks: 1,
                strikeouts: 1,
                pitches: 15,
                ..Default::default()
            }],
            config: ValidationConfig::default(),
        }
    }

    #[test]
    fn test_perfect_game_report() {
        let report = validate_game(&judge_game()).unwrap();
        assert_eq!(report.batting.accuracy_percentage, 100.0);
        assert_eq!(report.pitching.accuracy_percentage, 100.0);
        assert_eq!(report.overall_status, ValidationStatus::Pass);
        assert_eq!(report.overall_accuracy, 100.0);
        assert!(report.persist_authorized);
        assert_eq!(report.diagnostics.rows_dropped, 0);
    }

    #[test]
    fn test_overall_takes_the_worse_role() {
        let mut request = judge_game();
        // Break the pitching table badly enough to fall under the floor.
        request.official_pitching[0].pitches = 300;
        let report = validate_game(&request).unwrap();
        assert_eq!(report.batting.status, ValidationStatus::Pass);
        assert_eq!(report.pitching.status, ValidationStatus::Fail);
        assert_eq!(report.overall_status, ValidationStatus::Fail);
        assert!(!report.persist_authorized);
        assert_eq!(report.overall_accuracy, report.pitching.accuracy_percentage);
    }

    #[test]
    fn test_halt_policy_controls_authorization() {
        let mut request = judge_game();
        request.config.halt_on_failure = false;
        // A modest pitching miss lands in the partial band.
        request.official_pitching[0].pitches = 17;
        let report = validate_game(&request).unwrap();
        assert_eq!(report.pitching.status, ValidationStatus::Partial);
        assert!(
            report.persist_authorized,
            "partial authorizes persistence when halt_on_failure is off"
        );
    }

    #[test]
    fn test_invalid_config_is_rejected() {
        let mut request = judge_game();
        request.config.threshold = 0.0;
        assert!(matches!(
            validate_game(&request),
            Err(CoreError::InvalidConfig(_))
        ));
    }

    #[test]
    fn test_unsupported_schema_is_rejected() {
        let mut request = judge_game();
        request.schema_version = 9;
        assert!(matches!(
            validate_game(&request),
            Err(CoreError::UnsupportedSchema(9))
        ));
    }

    #[test]
    fn test_json_roundtrip() {
        let json = r#"{
            "schema_version": 1,
            "game_id": "g1",
            "plays": [
                {
                    "inning": 1,
                    "inning_half": "top",
                    "batter_text": "A. Judge",
                    "pitcher_text": "C. Sale",
                    "description": "Home Run to deep left.",
                    "pitch_count_text": "3"
                }
            ],
            "official_batting": [
                {"name": "Aaron Judge", "plate_appearances": 1, "at_bats": 1,
                 "hits": 1, "home_runs": 1}
            ],
            "official_pitching": [
                {"name": "Chris Sale", "plate_appearances": 1, "hits": 1,
                 "home_runs": 1, "pitches": 3}
            ]
        }"#;
        let out = validate_game_json(json);
        let report: GameReport = serde_json::from_str(&out).unwrap();
        assert_eq!(report.game_id, "g1");
        assert_eq!(report.overall_status, ValidationStatus::Pass);
    }

    #[test]
    fn test_malformed_json_yields_error_envelope() {
        let out = validate_game_json("{not json");
        let response: ErrorResponse = serde_json::from_str(&out).unwrap();
        assert!(response.error.starts_with(error_codes::INVALID_REQUEST));
    }
}
