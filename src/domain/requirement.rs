//! Requirement resolution: from a user's selection to the competitions that
//! must be covered and how many matches each one has.

use std::collections::{BTreeMap, BTreeSet};

use serde::Serialize;
use tracing::warn;

use super::catalog::{Catalog, Club, Competition, Selection};

/// A competition that must be covered, with its season match count.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Requirement {
    pub slug: String,
    pub name: String,
    /// Copied verbatim from the competition's season total.
    pub required: u32,
}

/// The resolved competitions a selection implies, keyed by slug.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct RequirementSet {
    requirements: BTreeMap<String, Requirement>,
    unresolved: Vec<String>,
}

impl RequirementSet {
    pub fn is_empty(&self) -> bool {
        self.requirements.is_empty()
    }

    pub fn len(&self) -> usize {
        self.requirements.len()
    }

    pub fn get(&self, slug: &str) -> Option<&Requirement> {
        self.requirements.get(slug)
    }

    /// Requirements in slug order.
    pub fn iter(&self) -> impl Iterator<Item = &Requirement> {
        self.requirements.values()
    }

    /// Sum of required matches across all competitions.
    pub fn total_required(&self) -> u64 {
        self.iter().map(|r| u64::from(r.required)).sum()
    }

    /// Slugs that were requested but matched no competition record.
    pub fn unresolved(&self) -> &[String] {
        &self.unresolved
    }

    /// Build a set directly from competition records.
    pub fn from_competitions<'a>(competitions: impl IntoIterator<Item = &'a Competition>) -> Self {
        let requirements = competitions
            .into_iter()
            .map(|c| (c.slug.clone(), requirement_for(c)))
            .collect();
        Self {
            requirements,
            unresolved: Vec::new(),
        }
    }
}

fn requirement_for(competition: &Competition) -> Requirement {
    Requirement {
        slug: competition.slug.clone(),
        name: competition.name.clone(),
        required: competition.total_matches,
    }
}

/// Resolve a selection into the set of competitions that must be covered.
///
/// Explicit competition slugs take precedence; otherwise the union of the
/// competitions every selected club plays in is used. Slugs without a
/// matching competition record are dropped and reported through
/// [`RequirementSet::unresolved`].
pub fn resolve_requirements<C, S>(
    selected_clubs: &[C],
    selected_competition_slugs: &[S],
    all_competitions: &[Competition],
) -> RequirementSet
where
    C: AsRef<Club>,
    S: AsRef<str>,
{
    let wanted: BTreeSet<&str> = if selected_competition_slugs.is_empty() {
        selected_clubs
            .iter()
            .flat_map(|club| club.as_ref().competition_slugs())
            .collect()
    } else {
        selected_competition_slugs.iter().map(AsRef::as_ref).collect()
    };

    let mut set = RequirementSet::default();
    for slug in wanted {
        match all_competitions.iter().find(|c| c.slug == slug) {
            Some(competition) => {
                set.requirements
                    .insert(slug.to_string(), requirement_for(competition));
            }
            None => {
                warn!(competition = slug, "unknown competition dropped from requirements");
                set.unresolved.push(slug.to_string());
            }
        }
    }
    set
}

impl AsRef<Club> for Club {
    fn as_ref(&self) -> &Club {
        self
    }
}

impl Catalog {
    /// Resolve a slug-based selection against this catalog.
    ///
    /// Unknown club slugs are skipped with a warning.
    pub fn resolve(&self, selection: &Selection) -> RequirementSet {
        let clubs = self.clubs_by_slugs(&selection.clubs);
        if clubs.len() < selection.clubs.len() {
            for slug in &selection.clubs {
                if self.club_by_slug(slug).is_none() {
                    warn!(club = %slug, "unknown club ignored");
                }
            }
        }
        resolve_requirements(&clubs, &selection.competitions, &self.competitions)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::ids::{ClubId, CompetitionId};

    fn competition(id: u32, slug: &str, total: u32) -> Competition {
        Competition {
            id: CompetitionId::new(id),
            name: slug.to_uppercase(),
            slug: slug.into(),
            country: "Germany".into(),
            total_matches: total,
        }
    }

    fn club(slug: &str, flags: &[(&str, bool)]) -> Club {
        Club {
            id: ClubId::new(1),
            name: slug.into(),
            slug: slug.into(),
            country: "Germany".into(),
            competitions: flags.iter().map(|(s, b)| (s.to_string(), *b)).collect(),
        }
    }

    fn competitions() -> Vec<Competition> {
        vec![
            competition(1, "bundesliga", 34),
            competition(2, "dfb-pokal", 6),
            competition(3, "champions-league", 17),
        ]
    }

    #[test]
    fn explicit_competitions_override_clubs() {
        let clubs = vec![club("fc-a", &[("bundesliga", true)])];
        let set = resolve_requirements(&clubs, &["champions-league"], &competitions());
        assert_eq!(set.len(), 1);
        assert_eq!(set.get("champions-league").unwrap().required, 17);
        assert!(set.get("bundesliga").is_none());
    }

    #[test]
    fn clubs_contribute_union_of_active_flags() {
        let clubs = vec![
            club("fc-a", &[("bundesliga", true), ("champions-league", false)]),
            club("fc-b", &[("bundesliga", true), ("dfb-pokal", true)]),
        ];
        let set = resolve_requirements::<_, &str>(&clubs, &[], &competitions());
        let slugs: Vec<&str> = set.iter().map(|r| r.slug.as_str()).collect();
        assert_eq!(slugs, vec!["bundesliga", "dfb-pokal"]);
        assert_eq!(set.total_required(), 40);
    }

    #[test]
    fn unknown_slugs_are_dropped_and_reported() {
        let set = resolve_requirements::<Club, _>(&[], &["bundesliga", "nowhere"], &competitions());
        assert_eq!(set.len(), 1);
        assert_eq!(set.unresolved(), &["nowhere".to_string()]);
    }

    #[test]
    fn empty_inputs_give_empty_set() {
        let set = resolve_requirements::<Club, &str>(&[], &[], &competitions());
        assert!(set.is_empty());
        assert_eq!(set.total_required(), 0);
    }

    #[test]
    fn catalog_resolves_club_slugs() {
        let catalog = Catalog::new(
            vec![club("fc-a", &[("dfb-pokal", true)])],
            competitions(),
            vec![],
        );
        let set = catalog.resolve(&Selection::new(["fc-a", "ghost"], Vec::<String>::new()));
        assert_eq!(set.len(), 1);
        assert_eq!(set.get("dfb-pokal").unwrap().required, 6);
    }
}
