//! Play-description outcome classification.
//!
//! `classify` turns one free-text play description into a
//! `ClassifiedOutcome`, or `None` when no rule matches. The classifier is
//! a single ordered list of mutually-exclusive rules (see `rules`);
//! the first match wins and no further rule is tried. Rule order is a
//! correctness requirement: "Sacrifice Fly to right" must hit the
//! sacrifice-fly rule before any generic fly-out phrasing can claim it.
//!
//! The classifier is a pure function over the description string. It never
//! guesses: a description matching no rule is refused, and the caller
//! drops the row. Silent miscounting is worse than a dropped event.

mod rules;

use crate::models::HitType;

pub use rules::rule_names;

/// Structured outcome for one classified description.
///
/// For plate-appearance outcomes exactly one category is set: hit, walk,
/// strikeout, sacrifice, generic out, or reached-on-error (which carries
/// no flag: at-bat, no hit, no out, batter safe). `rule` names the rule
/// that produced the outcome, for diagnostics and tests.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ClassifiedOutcome {
    pub rule: &'static str,
    pub is_plate_appearance: bool,
    pub is_at_bat: bool,
    pub is_hit: bool,
    pub hit_type: Option<HitType>,
    pub is_walk: bool,
    pub is_strikeout: bool,
    pub is_sacrifice_fly: bool,
    pub is_sacrifice_hit: bool,
    pub is_out: bool,
    pub outs_recorded: u8,
    pub bases_reached: u8,
}

impl ClassifiedOutcome {
    /// Plate-appearance outcome with all categories unset.
    pub(crate) fn plate(rule: &'static str, at_bat: bool) -> Self {
        Self {
            rule,
            is_plate_appearance: true,
            is_at_bat: at_bat,
            is_hit: false,
            hit_type: None,
            is_walk: false,
            is_strikeout: false,
            is_sacrifice_fly: false,
            is_sacrifice_hit: false,
            is_out: false,
            outs_recorded: 0,
            bases_reached: 0,
        }
    }

    /// Pure baserunning outcome: no plate appearance, no batter counts.
    pub(crate) fn baserunning(rule: &'static str) -> Self {
        Self {
            is_plate_appearance: false,
            is_at_bat: false,
            ..Self::plate(rule, false)
        }
    }
}

/// Classify one play description. Returns `None` when no rule matches.
pub fn classify(description: &str) -> Option<ClassifiedOutcome> {
    let text = description.trim().to_lowercase();
    if text.is_empty() {
        return None;
    }

    // Pure baserunning plays carry no batter-action keyword at all. They
    // are not plate appearances and contribute nothing to batter counts.
    if has_baserunning_keyword(&text) && !has_batter_action_keyword(&text) {
        return Some(ClassifiedOutcome::baserunning(rule_names::BASERUNNING));
    }

    // Compound plays ("Single to left, runner caught stealing second")
    // classify only the batter-action portion before the first comma.
    // Combination rules (strikeout + wild pitch / double play) still see
    // the full text, since the combination itself changes the outcome.
    let head = batter_action_head(&text);

    for rule in rules::rules() {
        let target = match rule.scope {
            rules::MatchScope::FullText => text.as_str(),
            rules::MatchScope::BatterAction => head,
        };
        if (rule.applies)(target) {
            return Some((rule.build)(target));
        }
    }
    None
}

/// Truncate a compound description at the first comma, keeping the
/// batter-action portion. Descriptions that are not compound (or carry no
/// comma) pass through whole.
fn batter_action_head(text: &str) -> &str {
    if has_batter_action_keyword(text) && has_baserunning_keyword(text) {
        match text.find(',') {
            Some(idx) => text[..idx].trim_end(),
            None => text,
        }
    } else {
        text
    }
}

/// Keywords marking an action by the batter at the plate. Deliberately
/// excludes bare "interference" and "catcher": runner interference and
/// catcher throw descriptions belong to baserunning plays.
const BATTER_ACTION_KEYWORDS: &[&str] = &[
    "strikeout",
    "struck out",
    "strikes out",
    "called out on strikes",
    "single",
    "double",
    "triple",
    "home run",
    "homer",
    "walk",
    "base on balls",
    "hit by pitch",
    "sacrifice",
    "sac fly",
    "sac bunt",
    "grounded",
    "groundout",
    "ground out",
    "grounds out",
    "flied",
    "flyout",
    "fly out",
    "flies out",
    "lined",
    "lineout",
    "line out",
    "lines out",
    "popped",
    "popout",
    "pop out",
    "pops out",
    "fouled out",
    "foul out",
    "fouls out",
    "fielder's choice",
    "infield fly",
    "forceout",
    "force out",
    "reached on",
    "batter interference",
    "catcher's interference",
    "catcher interference",
    "bunt",
];

/// Keywords marking baserunning activity.
const BASERUNNING_KEYWORDS: &[&str] = &[
    "caught stealing",
    "steal",
    "stole",
    "stolen",
    "picked off",
    "pickoff",
    "wild pitch",
    "passed ball",
    "balk",
    "advance",
    "defensive indifference",
];

fn has_batter_action_keyword(text: &str) -> bool {
    BATTER_ACTION_KEYWORDS.iter().any(|k| text.contains(k))
}

fn has_baserunning_keyword(text: &str) -> bool {
    BASERUNNING_KEYWORDS.iter().any(|k| text.contains(k))
}
