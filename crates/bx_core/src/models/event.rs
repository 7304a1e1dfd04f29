//! Canonical classified events.
//!
//! An `Event` is the structured record produced for one play-by-play row
//! once the batter/pitcher names are canonicalized and the description has
//! been classified. Events are created once and never mutated afterwards,
//! with one exception: `pitch_count` may be zeroed exactly once by the
//! pitch-count deduplication pass.

use serde::{Deserialize, Serialize};

use super::play::InningHalf;

/// Base-hit type for hit events.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum HitType {
    Single,
    Double,
    Triple,
    HomeRun,
}

impl HitType {
    /// Bases reached by the batter on this hit.
    pub fn bases(&self) -> u8 {
        match self {
            HitType::Single => 1,
            HitType::Double => 2,
            HitType::Triple => 3,
            HitType::HomeRun => 4,
        }
    }
}

/// One classified play.
///
/// For at-bat events exactly one outcome category is set: hit, walk,
/// strikeout, sacrifice, generic out, or reached-on-error (the latter
/// carries no flag of its own: at-bat, no hit, no out). Pure baserunning
/// events have `is_plate_appearance == false` and contribute nothing to
/// batting counts.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Event {
    /// Opaque id, unique and stable within a game (derived from row order).
    pub event_id: String,
    pub inning: u8,
    pub inning_half: InningHalf,
    /// Canonical batter name.
    pub batter_id: String,
    /// Canonical pitcher name.
    pub pitcher_id: String,
    /// Original description text, retained for audit.
    pub description: String,
    pub is_plate_appearance: bool,
    pub is_at_bat: bool,
    pub is_hit: bool,
    pub hit_type: Option<HitType>,
    pub is_walk: bool,
    pub is_strikeout: bool,
    pub is_sacrifice_fly: bool,
    pub is_sacrifice_hit: bool,
    pub is_out: bool,
    /// Outs recorded on the play, 0..=2.
    pub outs_recorded: u8,
    /// Bases reached by the batter, 0..=4.
    pub bases_reached: u8,
    /// Pitches thrown during this row. May be zeroed by deduplication.
    pub pitch_count: u32,
}

impl Event {
    /// Whether this event belongs to the same half-inning as another.
    pub fn same_half_inning(&self, other: &Event) -> bool {
        self.inning == other.inning && self.inning_half == other.inning_half
    }

    /// Whether this event involves the same batter/pitcher pair as another.
    pub fn same_matchup(&self, other: &Event) -> bool {
        self.batter_id == other.batter_id && self.pitcher_id == other.pitcher_id
    }
}
