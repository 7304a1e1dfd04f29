//! Per-participant stat lines and the tracked-field enumeration.
//!
//! `StatLine` is the shared shape for both official (published) and
//! computed (event-derived) totals; reconciliation compares the two
//! field-for-field over the tracked fields of a role.

use serde::{Deserialize, Serialize};

/// Participant role a stat line belongs to.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Role {
    Batting,
    Pitching,
}

impl Role {
    pub fn name(&self) -> &'static str {
        match self {
            Role::Batting => "batting",
            Role::Pitching => "pitching",
        }
    }
}

/// Counting stats for one participant in one role.
///
/// For pitching lines `plate_appearances` holds batters faced. Baserunning
/// fields (`runs`, `stolen_bases`, `caught_stealing`) only appear on
/// official lines; the classifier never derives them, and they are excluded
/// from reconciliation diffs. They exist so unmatched official rows can be
/// partitioned (a pinch-runner shows baserunning activity with zero plate
/// activity).
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct StatLine {
    pub name: String,
    pub plate_appearances: u32,
    pub at_bats: u32,
    pub hits: u32,
    pub doubles: u32,
    pub triples: u32,
    pub home_runs: u32,
    pub walks: u32,
    pub strikeouts: u32,
    pub runs: u32,
    pub stolen_bases: u32,
    pub caught_stealing: u32,
    pub pitches: u32,
}

impl StatLine {
    /// Empty line for a named participant.
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            ..Default::default()
        }
    }

    /// Value of one tracked field.
    pub fn get(&self, field: StatField) -> u32 {
        match field {
            StatField::PlateAppearances => self.plate_appearances,
            StatField::AtBats => self.at_bats,
            StatField::Hits => self.hits,
            StatField::Doubles => self.doubles,
            StatField::Triples => self.triples,
            StatField::HomeRuns => self.home_runs,
            StatField::Walks => self.walks,
            StatField::Strikeouts => self.strikeouts,
            StatField::Pitches => self.pitches,
        }
    }

    /// Sum of the tracked fields for a role. This is the volume a line
    /// contributes to the reconciliation accuracy denominator.
    pub fn stat_volume(&self, role: Role) -> u32 {
        StatField::tracked(role).iter().map(|f| self.get(*f)).sum()
    }

    /// Plate-appearance-driven activity. Nonzero for anyone who actually
    /// completed a batter turn (or faced one, for pitchers).
    pub fn plate_activity(&self) -> u32 {
        self.plate_appearances + self.at_bats + self.hits + self.walks + self.strikeouts
    }

    /// Baserunning-only activity, used to recognize pinch-runners.
    pub fn baserunning_activity(&self) -> u32 {
        self.runs + self.stolen_bases + self.caught_stealing
    }

    /// Whether every counter is zero.
    pub fn is_empty(&self) -> bool {
        self.plate_appearances == 0
            && self.at_bats == 0
            && self.hits == 0
            && self.doubles == 0
            && self.triples == 0
            && self.home_runs == 0
            && self.walks == 0
            && self.strikeouts == 0
            && self.runs == 0
            && self.stolen_bases == 0
            && self.caught_stealing == 0
            && self.pitches == 0
    }
}

/// Fields compared during reconciliation.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum StatField {
    PlateAppearances,
    AtBats,
    Hits,
    Doubles,
    Triples,
    HomeRuns,
    Walks,
    Strikeouts,
    Pitches,
}

impl StatField {
    /// Name for reporting.
    pub fn name(&self) -> &'static str {
        match self {
            StatField::PlateAppearances => "plate_appearances",
            StatField::AtBats => "at_bats",
            StatField::Hits => "hits",
            StatField::Doubles => "doubles",
            StatField::Triples => "triples",
            StatField::HomeRuns => "home_runs",
            StatField::Walks => "walks",
            StatField::Strikeouts => "strikeouts",
            StatField::Pitches => "pitches",
        }
    }

    /// Fields reconciled for a role. Batting lines are compared on the
    /// plate-appearance counting stats; pitching lines on batters faced,
    /// the outcomes a pitcher is charged with, and the pitch total.
    pub fn tracked(role: Role) -> &'static [StatField] {
        match role {
            Role::Batting => &[
                StatField::PlateAppearances,
                StatField::AtBats,
                StatField::Hits,
                StatField::Doubles,
                StatField::Triples,
                StatField::HomeRuns,
                StatField::Walks,
                StatField::Strikeouts,
            ],
            Role::Pitching => &[
                StatField::PlateAppearances,
                StatField::Hits,
                StatField::Walks,
                StatField::Strikeouts,
                StatField::Pitches,
            ],
        }
    }
}
