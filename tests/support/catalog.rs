use std::path::PathBuf;

use streamscout::domain::{
    Club, ClubId, Competition, CompetitionId, Provider, ProviderId, RequirementSet,
};

pub fn competition(id: u32, slug: &str, total_matches: u32) -> Competition {
    Competition {
        id: CompetitionId::new(id),
        name: slug.replace('-', " "),
        slug: slug.to_string(),
        country: "Germany".to_string(),
        total_matches,
    }
}

pub fn provider(id: u32, monthly: &str, matches: &[(&str, u32)]) -> Provider {
    Provider {
        id: ProviderId::new(id),
        name: format!("Provider {id}"),
        slug: format!("provider-{id}"),
        monthly_price: Some(monthly.to_string()),
        yearly_price: None,
        matches: matches.iter().map(|(s, n)| (s.to_string(), *n)).collect(),
        features: None,
        highlights: vec![],
    }
}

pub fn club(id: u32, slug: &str, competitions: &[&str]) -> Club {
    Club {
        id: ClubId::new(id),
        name: slug.replace('-', " "),
        slug: slug.to_string(),
        country: "Germany".to_string(),
        competitions: competitions.iter().map(|s| (s.to_string(), true)).collect(),
    }
}

/// Requirement set built straight from `(slug, total)` pairs.
pub fn requirements(items: &[(&str, u32)]) -> RequirementSet {
    let comps: Vec<Competition> = items
        .iter()
        .enumerate()
        .map(|(i, (slug, total))| competition(i as u32 + 1, slug, *total))
        .collect();
    RequirementSet::from_competitions(&comps)
}

pub fn fixture_path(name: &str) -> PathBuf {
    let mut path = PathBuf::from(env!("CARGO_MANIFEST_DIR"));
    path.push("tests");
    path.push("fixtures");
    path.push(name);
    path
}
