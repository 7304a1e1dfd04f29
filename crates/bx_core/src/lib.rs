//! # bx_core - Box Score Validation Engine
//!
//! This library turns free-text play-by-play descriptions into structured,
//! countable events and cross-checks their aggregates against the
//! published official box score, producing a quantified accuracy report
//! per game and role.
//!
//! ## Pipeline
//! raw rows → `EventBuilder` (name resolution + outcome classification)
//! → pitch-count deduplication → `aggregate` → `ReconciliationEngine`
//! → `GameReport`
//!
//! ## Properties
//! - Classification is a pure, ordered rule list: deterministic, first
//!   match wins, refusal over guessing
//! - No I/O anywhere in the core; one `GameReport` per game
//! - All components are read-only after construction and safe to drive
//!   from a multi-game worker pool

pub mod aggregate;
pub mod api;
pub mod builder;
pub mod classifier;
pub mod config;
pub mod error;
pub mod models;
pub mod reconcile;
pub mod resolver;

// Re-export the main API surface
pub use api::{validate_game, validate_game_json, GameRequest, SCHEMA_VERSION};
pub use error::{CoreError, Result};

// Re-export pipeline components
pub use aggregate::aggregate as aggregate_events;
pub use builder::{dedup_pitch_counts, EventBuilder};
pub use classifier::{classify, ClassifiedOutcome};
pub use config::{ValidationConfig, DEFAULT_THRESHOLD, PARTIAL_FLOOR};
pub use reconcile::ReconciliationEngine;
pub use resolver::NameResolver;

// Re-export model types
pub use models::{
    Event, FieldDiff, GameReport, HitType, InningHalf, MismatchReport, PipelineDiagnostics,
    PlayerDiff, RawPlayRow, Role, StatField, StatLine, ValidationReport, ValidationStatus,
};
