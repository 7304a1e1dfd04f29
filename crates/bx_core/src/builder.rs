//! Event assembly from raw play rows.
//!
//! `EventBuilder` resolves names, classifies descriptions, and merges in
//! the inning and pitch-count fields. Rows that fail to classify are
//! skipped and counted, never guessed at. `dedup_pitch_counts` is the
//! post-pass that prevents a pitcher's pitches being counted twice when a
//! baserunning row interrupts an at-bat.

use crate::classifier;
use crate::models::{Event, PipelineDiagnostics, RawPlayRow};
use crate::resolver::NameResolver;

/// Builds classified events for one game.
pub struct EventBuilder<'a> {
    resolver: &'a NameResolver,
}

impl<'a> EventBuilder<'a> {
    pub fn new(resolver: &'a NameResolver) -> Self {
        Self { resolver }
    }

    /// Build events for every classifiable row, preserving table order.
    ///
    /// Unclassifiable rows are dropped and recorded in the diagnostics;
    /// dropping is always preferable to miscounting.
    pub fn build_events(
        &self,
        game_id: &str,
        rows: &[RawPlayRow],
    ) -> (Vec<Event>, PipelineDiagnostics) {
        let mut events = Vec::with_capacity(rows.len());
        let mut diagnostics = PipelineDiagnostics::default();

        for (idx, row) in rows.iter().enumerate() {
            diagnostics.rows_seen += 1;
            let outcome = match classifier::classify(&row.description) {
                Some(outcome) => outcome,
                None => {
                    log::debug!(
                        "dropping unclassifiable row {} of game {}: '{}'",
                        idx,
                        game_id,
                        row.description
                    );
                    diagnostics.rows_dropped += 1;
                    diagnostics
                        .dropped_descriptions
                        .push(row.description.clone());
                    continue;
                }
            };

            events.push(Event {
                event_id: format!("{}:{}{}:{}", game_id, row.inning, row.inning_half.tag(), idx),
                inning: row.inning,
                inning_half: row.inning_half,
                batter_id: self.resolver.resolve(&row.batter_text),
                pitcher_id: self.resolver.resolve(&row.pitcher_text),
                description: row.description.clone(),
                is_plate_appearance: outcome.is_plate_appearance,
                is_at_bat: outcome.is_at_bat,
                is_hit: outcome.is_hit,
                hit_type: outcome.hit_type,
                is_walk: outcome.is_walk,
                is_strikeout: outcome.is_strikeout,
                is_sacrifice_fly: outcome.is_sacrifice_fly,
                is_sacrifice_hit: outcome.is_sacrifice_hit,
                is_out: outcome.is_out,
                outs_recorded: outcome.outs_recorded,
                bases_reached: outcome.bases_reached,
                pitch_count: parse_pitch_count(&row.pitch_count_text),
            });
        }

        (events, diagnostics)
    }
}

/// Zero out pitch counts that the source double-reports.
///
/// A mid-at-bat baserunning row (stolen base attempt, wild pitch) often
/// carries the running pitch total, which the follow-up at-bat row repeats
/// in full. For each non-plate-appearance event with a nonzero pitch count,
/// if the immediately following event in the same half-inning is a plate
/// appearance for the same batter/pitcher pair, the non-PA event's pitches
/// were already attributed to that at-bat and are zeroed here.
///
/// Must run over events in original table order; it is the only mutation
/// an event ever sees after construction.
pub fn dedup_pitch_counts(events: &mut [Event]) {
    for i in 0..events.len().saturating_sub(1) {
        let (head, tail) = events.split_at_mut(i + 1);
        let current = &mut head[i];
        let next = &tail[0];

        if !current.is_plate_appearance
            && current.pitch_count > 0
            && next.is_plate_appearance
            && current.same_half_inning(next)
            && current.same_matchup(next)
        {
            log::debug!(
                "zeroing duplicated pitch count on event {} ({} pitches)",
                current.event_id,
                current.pitch_count
            );
            current.pitch_count = 0;
        }
    }
}

/// Extract a pitch total from free text.
///
/// Sources write pitch counts as "5", "3-2 (6)", or "(6)"; when a
/// parenthesized total is present it wins, otherwise the leading digits
/// are used. Unparseable text counts as zero pitches rather than failing
/// the row.
fn parse_pitch_count(text: &str) -> u32 {
    let trimmed = text.trim();
    if trimmed.is_empty() {
        return 0;
    }
    let digits: String = match trimmed.find('(') {
        Some(open) => trimmed[open + 1..]
            .chars()
            .take_while(|c| c.is_ascii_digit())
            .collect(),
        None => trimmed.chars().take_while(|c| c.is_ascii_digit()).collect(),
    };
    digits.parse().unwrap_or(0)
}
