//! Event aggregation into computed stat lines.
//!
//! A pure reduction: events are grouped by the role-relevant participant
//! and their boolean/int fields summed into the official-schema counters.
//! Order-independent, deterministic, no shared state.

use std::collections::HashMap;

use crate::models::{Event, HitType, Role, StatLine};

/// Sum classified events into one `StatLine` per participant for a role.
///
/// Batting lines only accumulate plate-appearance events; a pure
/// baserunning row never creates or touches a batting line, so an
/// official-only pinch-runner stays unmatched (and is recognized as such
/// during reconciliation). Pitching lines additionally accumulate pitch
/// counts from every event charged to the pitcher, including baserunning
/// rows, which is why pitch deduplication must run first.
///
/// Output is sorted by participant name so repeated runs are identical.
pub fn aggregate(events: &[Event], role: Role) -> Vec<StatLine> {
    let mut lines: HashMap<&str, StatLine> = HashMap::new();

    for event in events {
        let participant = match role {
            Role::Batting => event.batter_id.as_str(),
            Role::Pitching => event.pitcher_id.as_str(),
        };

        if role == Role::Batting && !event.is_plate_appearance {
            continue;
        }

        let line = lines
            .entry(participant)
            .or_insert_with(|| StatLine::new(participant));

        line.plate_appearances += event.is_plate_appearance as u32;
        line.at_bats += event.is_at_bat as u32;
        line.hits += event.is_hit as u32;
        line.walks += event.is_walk as u32;
        line.strikeouts += event.is_strikeout as u32;
        match event.hit_type {
            Some(HitType::Double) => line.doubles += 1,
            Some(HitType::Triple) => line.triples += 1,
            Some(HitType::HomeRun) => line.home_runs += 1,
            Some(HitType::Single) | None => {}
        }
        if role == Role::Pitching {
            line.pitches += event.pitch_count;
        }
    }

    let mut out: Vec<StatLine> = lines.into_values().collect();
    out.sort_by(|a, b| a.name.cmp(&b.name));
    out
}
