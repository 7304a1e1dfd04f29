//! Canonical participant-name resolution.
//!
//! Play-by-play rows abbreviate names ("A. Judge") while official tables
//! spell them out ("Aaron Judge"). The resolver is built once per game from
//! the official tables of both roles and is a read-only lookup afterwards,
//! safe to share across batter/pitcher resolution and across threads.
//!
//! Resolution never fails: an unknown spelling passes through unchanged and
//! surfaces later as a `name_mismatches` entry in the validation report.

use std::collections::{HashMap, HashSet};

/// Read-only lookup from raw name spellings to canonical names.
#[derive(Debug, Clone)]
pub struct NameResolver {
    canonical: HashSet<String>,
    aliases: HashMap<String, String>,
    /// Aliases claimed by more than one canonical name. These resolve to
    /// nothing rather than to an arbitrary winner.
    ambiguous: HashSet<String>,
}

impl NameResolver {
    /// Build a resolver from the canonical names of the official tables.
    ///
    /// For every canonical name containing a space, an abbreviated alias is
    /// derived: first initial + "." + remainder ("Aaron Judge" registers
    /// "A. Judge").
    pub fn build<I, S>(canonical_names: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        let mut canonical = HashSet::new();
        let mut aliases: HashMap<String, String> = HashMap::new();
        let mut ambiguous = HashSet::new();

        for name in canonical_names {
            let name = name.into().trim().to_string();
            if name.is_empty() {
                continue;
            }
            if let Some(alias) = abbreviate(&name) {
                match aliases.get(&alias) {
                    Some(existing) if existing != &name => {
                        log::debug!("ambiguous alias '{}' ({} vs {})", alias, existing, name);
                        ambiguous.insert(alias);
                    }
                    _ => {
                        aliases.insert(alias, name.clone());
                    }
                }
            }
            canonical.insert(name);
        }

        Self {
            canonical,
            aliases,
            ambiguous,
        }
    }

    /// Map a raw spelling to its canonical name.
    ///
    /// Unresolvable names pass through (trimmed) unchanged. Idempotent:
    /// `resolve(resolve(x)) == resolve(x)`.
    pub fn resolve(&self, raw_name: &str) -> String {
        let trimmed = raw_name.trim();
        if self.canonical.contains(trimmed) {
            return trimmed.to_string();
        }
        if !self.ambiguous.contains(trimmed) {
            if let Some(canonical) = self.aliases.get(trimmed) {
                return canonical.clone();
            }
        }
        log::debug!("no canonical mapping for '{}'", trimmed);
        trimmed.to_string()
    }

    /// Whether a name is one of the canonical names this resolver was
    /// built from.
    pub fn is_canonical(&self, name: &str) -> bool {
        self.canonical.contains(name)
    }
}

/// Derive the "A. Judge" alias for a full name. Returns `None` for
/// single-word names, which have no abbreviated form.
fn abbreviate(name: &str) -> Option<String> {
    let (first, rest) = name.split_once(' ')?;
    let initial = first.chars().next()?;
    Some(format!("{}. {}", initial, rest.trim_start()))
}

#[cfg(test)]
mod tests {
    use super::*;
    use proptest::prelude::*;

    fn resolver() -> NameResolver {
        NameResolver::build(["Aaron Judge", "Gerrit Cole", "Ichiro"])
    }

    #[test]
    fn test_resolves_abbreviated_alias() {
        assert_eq!(resolver().resolve("A. Judge"), "Aaron Judge");
        assert_eq!(resolver().resolve("G. Cole"), "Gerrit Cole");
    }

    #[test]
    fn test_canonical_name_resolves_to_itself() {
        assert_eq!(resolver().resolve("Aaron Judge"), "Aaron Judge");
        assert_eq!(resolver().resolve("Ichiro"), "Ichiro");
    }

    #[test]
    fn test_unknown_name_passes_through() {
        assert_eq!(resolver().resolve("Z. Nobody"), "Z. Nobody");
        assert_eq!(resolver().resolve("  Z. Nobody "), "Z. Nobody");
    }

    #[test]
    fn test_ambiguous_alias_is_not_guessed() {
        let r = NameResolver::build(["Aaron Judge", "Adam Judge"]);
        // "A. Judge" could be either; it must pass through unresolved.
        assert_eq!(r.resolve("A. Judge"), "A. Judge");
        assert_eq!(r.resolve("Aaron Judge"), "Aaron Judge");
        assert_eq!(r.resolve("Adam Judge"), "Adam Judge");
    }

    #[test]
    fn test_pitcher_only_name_resolves() {
        // A pinch-runner-turned-pitcher may only appear in the pitching
        // table; the resolver is built from both tables' names at once.
        let r = NameResolver::build(["Shohei Ohtani"]);
        assert_eq!(r.resolve("S. Ohtani"), "Shohei Ohtani");
    }

    proptest! {
        #[test]
        fn prop_resolution_is_idempotent(raw in "[A-Za-z. ]{0,24}") {
            let r = resolver();
            let once = r.resolve(&raw);
            prop_assert_eq!(r.resolve(&once), once);
        }
    }
}
