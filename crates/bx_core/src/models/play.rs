//! Raw play-by-play input rows.
//!
//! One `RawPlayRow` per row of the source play-by-play table, in table
//! order. Produced by the external table-extraction collaborator and
//! treated as immutable here.

use serde::{Deserialize, Serialize};

/// Which half of the inning a play occurred in.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum InningHalf {
    Top,
    Bottom,
}

impl InningHalf {
    /// Short tag used in event ids ("t" / "b").
    pub fn tag(&self) -> &'static str {
        match self {
            InningHalf::Top => "t",
            InningHalf::Bottom => "b",
        }
    }
}

/// A single row of the play-by-play table, exactly as extracted.
///
/// `batter_text` and `pitcher_text` carry whatever spelling the source
/// used (often "A. Judge"-style abbreviations); canonicalization happens
/// later via the name resolver. `pitch_count_text` is free text and may
/// be empty.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct RawPlayRow {
    pub inning: u8,
    pub inning_half: InningHalf,
    pub batter_text: String,
    pub pitcher_text: String,
    pub description: String,
    #[serde(default)]
    pub pitch_count_text: String,
}
