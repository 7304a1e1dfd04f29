//! The ordered outcome rule table.
//!
//! Precedence is the table order: earlier rules win outright. Moving a
//! rule is a behavior change, so every historical precedence fix lives
//! here as position, not as a parallel implementation.

use once_cell::sync::Lazy;

use super::ClassifiedOutcome;
use crate::models::HitType;

/// Which view of the description a rule matches against.
///
/// Most rules see the batter-action head (compound descriptions truncated
/// at the first comma). Combination rules see the full text, because the
/// baserunning tail is what changes the batter's outcome.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub(super) enum MatchScope {
    FullText,
    BatterAction,
}

/// One classification rule: a predicate plus an outcome builder.
pub(super) struct OutcomeRule {
    pub name: &'static str,
    pub scope: MatchScope,
    pub applies: fn(&str) -> bool,
    pub build: fn(&str) -> ClassifiedOutcome,
}

/// Stable rule names, used in diagnostics and tests.
pub mod rule_names {
    pub const BASERUNNING: &str = "baserunning";
    pub const SACRIFICE_FLY: &str = "sacrifice_fly";
    pub const SACRIFICE_HIT: &str = "sacrifice_hit";
    pub const WALK: &str = "walk";
    pub const HIT_BY_PITCH: &str = "hit_by_pitch";
    pub const STRIKEOUT_WILD_PITCH: &str = "strikeout_wild_pitch";
    pub const STRIKEOUT_DOUBLE_PLAY: &str = "strikeout_double_play";
    pub const STRIKEOUT: &str = "strikeout";
    pub const REACHED_ON_ERROR: &str = "reached_on_error";
    pub const CATCHER_INTERFERENCE: &str = "catcher_interference";
    pub const GENERIC_OUT: &str = "generic_out";
    pub const HOME_RUN: &str = "home_run";
    pub const TRIPLE: &str = "triple";
    pub const DOUBLE: &str = "double";
    pub const SINGLE: &str = "single";
}

/// The rule table, in precedence order.
pub(super) fn rules() -> &'static [OutcomeRule] {
    static RULES: Lazy<Vec<OutcomeRule>> = Lazy::new(|| {
        vec![
            OutcomeRule {
                name: rule_names::SACRIFICE_FLY,
                scope: MatchScope::BatterAction,
                applies: is_sacrifice_fly,
                build: build_sacrifice_fly,
            },
            OutcomeRule {
                name: rule_names::SACRIFICE_HIT,
                scope: MatchScope::BatterAction,
                applies: is_sacrifice_hit,
                build: build_sacrifice_hit,
            },
            OutcomeRule {
                name: rule_names::WALK,
                scope: MatchScope::BatterAction,
                applies: is_walk,
                build: build_walk,
            },
            OutcomeRule {
                name: rule_names::HIT_BY_PITCH,
                scope: MatchScope::BatterAction,
                applies: is_hit_by_pitch,
                build: build_hit_by_pitch,
            },
            // The next two must see the full text: the baserunning tail is
            // exactly what turns a strikeout into a no-out or two-out play.
            OutcomeRule {
                name: rule_names::STRIKEOUT_WILD_PITCH,
                scope: MatchScope::FullText,
                applies: is_strikeout_wild_pitch,
                build: build_strikeout_wild_pitch,
            },
            OutcomeRule {
                name: rule_names::STRIKEOUT_DOUBLE_PLAY,
                scope: MatchScope::FullText,
                applies: is_strikeout_double_play,
                build: build_strikeout_double_play,
            },
            OutcomeRule {
                name: rule_names::STRIKEOUT,
                scope: MatchScope::BatterAction,
                applies: is_strikeout,
                build: build_strikeout,
            },
            OutcomeRule {
                name: rule_names::REACHED_ON_ERROR,
                scope: MatchScope::BatterAction,
                applies: is_reached_on_error,
                build: build_reached_on_error,
            },
            OutcomeRule {
                name: rule_names::CATCHER_INTERFERENCE,
                scope: MatchScope::BatterAction,
                applies: is_catcher_interference,
                build: build_catcher_interference,
            },
            OutcomeRule {
                name: rule_names::GENERIC_OUT,
                scope: MatchScope::BatterAction,
                applies: is_generic_out,
                build: build_generic_out,
            },
            OutcomeRule {
                name: rule_names::HOME_RUN,
                scope: MatchScope::BatterAction,
                applies: is_home_run,
                build: build_home_run,
            },
            OutcomeRule {
                name: rule_names::TRIPLE,
                scope: MatchScope::BatterAction,
                applies: is_triple,
                build: build_triple,
            },
            OutcomeRule {
                name: rule_names::DOUBLE,
                scope: MatchScope::BatterAction,
                applies: is_double,
                build: build_double,
            },
            OutcomeRule {
                name: rule_names::SINGLE,
                scope: MatchScope::BatterAction,
                applies: is_single,
                build: build_single,
            },
        ]
    });
    &RULES
}

// ---------------------------------------------------------------------------
// Predicates (all inputs are lowercased)
// ---------------------------------------------------------------------------

fn contains_any(text: &str, needles: &[&str]) -> bool {
    needles.iter().any(|n| text.contains(n))
}

fn is_sacrifice_fly(text: &str) -> bool {
    contains_any(text, &["sacrifice fly", "sac fly"])
}

fn is_sacrifice_hit(text: &str) -> bool {
    contains_any(text, &["sacrifice bunt", "sacrifice hit", "sac bunt"])
}

fn is_walk(text: &str) -> bool {
    (text.contains("walk") && !text.contains("walk-off")) || text.contains("base on balls")
}

fn is_hit_by_pitch(text: &str) -> bool {
    text.contains("hit by pitch")
}

fn has_strikeout(text: &str) -> bool {
    contains_any(
        text,
        &[
            "strikeout",
            "struck out",
            "strikes out",
            "called out on strikes",
        ],
    )
}

fn is_strikeout_wild_pitch(text: &str) -> bool {
    has_strikeout(text) && contains_any(text, &["wild pitch", "passed ball"])
}

fn is_strikeout_double_play(text: &str) -> bool {
    has_strikeout(text) && text.contains("double play")
}

fn is_strikeout(text: &str) -> bool {
    has_strikeout(text)
}

fn is_reached_on_error(text: &str) -> bool {
    contains_any(
        text,
        &[
            "reached on error",
            "reached on an error",
            "reached on fielding",
            "fielding interference",
        ],
    ) || (text.contains("error") && !is_hit_phrase(text))
}

fn is_catcher_interference(text: &str) -> bool {
    contains_any(text, &["catcher's interference", "catcher interference"])
}

const OUT_PHRASES: &[&str] = &[
    "double play",
    "triple play",
    "batter interference",
    "grounded out",
    "ground out",
    "groundout",
    "grounds out",
    "grounded into",
    "flied out",
    "fly out",
    "flyout",
    "flies out",
    "flied into",
    "lined out",
    "line out",
    "lineout",
    "lines out",
    "lined into",
    "popped out",
    "pop out",
    "popout",
    "pops out",
    "popped up",
    "fouled out",
    "foul out",
    "fouls out",
    "infield fly",
    "fielder's choice",
    "forceout",
    "force out",
    "bunt groundout",
];

fn is_generic_out(text: &str) -> bool {
    contains_any(text, OUT_PHRASES)
}

fn is_home_run(text: &str) -> bool {
    contains_any(text, &["home run", "homered", "homers", "inside-the-park"])
}

fn is_triple(text: &str) -> bool {
    text.contains("triple") && !text.contains("triple play")
}

// "double play" and "doubled off" are outs and "double steal" is pure
// baserunning; none of them is a two-base hit.
fn is_double(text: &str) -> bool {
    text.contains("double")
        && !text.contains("double play")
        && !text.contains("doubled off")
        && !text.contains("double steal")
}

fn is_single(text: &str) -> bool {
    text.contains("single")
}

fn is_hit_phrase(text: &str) -> bool {
    is_home_run(text) || is_triple(text) || is_double(text) || is_single(text)
}

// ---------------------------------------------------------------------------
// Outcome builders
// ---------------------------------------------------------------------------

fn build_sacrifice_fly(_: &str) -> ClassifiedOutcome {
    let mut o = ClassifiedOutcome::plate(rule_names::SACRIFICE_FLY, false);
    o.is_sacrifice_fly = true;
    o.is_out = true;
    o.outs_recorded = 1;
    o
}

fn build_sacrifice_hit(_: &str) -> ClassifiedOutcome {
    let mut o = ClassifiedOutcome::plate(rule_names::SACRIFICE_HIT, false);
    o.is_sacrifice_hit = true;
    o.is_out = true;
    o.outs_recorded = 1;
    o
}

fn build_walk(_: &str) -> ClassifiedOutcome {
    let mut o = ClassifiedOutcome::plate(rule_names::WALK, false);
    o.is_walk = true;
    o.bases_reached = 1;
    o
}

fn build_hit_by_pitch(_: &str) -> ClassifiedOutcome {
    let mut o = ClassifiedOutcome::plate(rule_names::HIT_BY_PITCH, false);
    o.bases_reached = 1;
    o
}

// Dropped third strike: the strikeout counts, the out does not.
fn build_strikeout_wild_pitch(_: &str) -> ClassifiedOutcome {
    let mut o = ClassifiedOutcome::plate(rule_names::STRIKEOUT_WILD_PITCH, true);
    o.is_strikeout = true;
    o.bases_reached = 1;
    o
}

fn build_strikeout_double_play(_: &str) -> ClassifiedOutcome {
    let mut o = ClassifiedOutcome::plate(rule_names::STRIKEOUT_DOUBLE_PLAY, true);
    o.is_strikeout = true;
    o.is_out = true;
    o.outs_recorded = 2;
    o
}

fn build_strikeout(_: &str) -> ClassifiedOutcome {
    let mut o = ClassifiedOutcome::plate(rule_names::STRIKEOUT, true);
    o.is_strikeout = true;
    o.is_out = true;
    o.outs_recorded = 1;
    o
}

// Canonical reached-on-error policy: at-bat, not a hit, no out recorded,
// batter safe at first.
fn build_reached_on_error(_: &str) -> ClassifiedOutcome {
    let mut o = ClassifiedOutcome::plate(rule_names::REACHED_ON_ERROR, true);
    o.bases_reached = 1;
    o
}

fn build_catcher_interference(_: &str) -> ClassifiedOutcome {
    let mut o = ClassifiedOutcome::plate(rule_names::CATCHER_INTERFERENCE, false);
    o.bases_reached = 1;
    o
}

fn build_generic_out(text: &str) -> ClassifiedOutcome {
    let mut o = ClassifiedOutcome::plate(rule_names::GENERIC_OUT, true);
    o.is_out = true;
    o.outs_recorded = if text.contains("double play") || text.contains("triple play") {
        2
    } else {
        1
    };
    o
}

fn build_hit(rule: &'static str, hit_type: HitType) -> ClassifiedOutcome {
    let mut o = ClassifiedOutcome::plate(rule, true);
    o.is_hit = true;
    o.hit_type = Some(hit_type);
    o.bases_reached = hit_type.bases();
    o
}

fn build_home_run(_: &str) -> ClassifiedOutcome {
    build_hit(rule_names::HOME_RUN, HitType::HomeRun)
}

fn build_triple(_: &str) -> ClassifiedOutcome {
    build_hit(rule_names::TRIPLE, HitType::Triple)
}

fn build_double(_: &str) -> ClassifiedOutcome {
    build_hit(rule_names::DOUBLE, HitType::Double)
}

fn build_single(_: &str) -> ClassifiedOutcome {
    build_hit(rule_names::SINGLE, HitType::Single)
}
