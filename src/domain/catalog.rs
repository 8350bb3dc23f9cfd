//! Read-only catalog records: clubs, competitions and streaming providers.
//!
//! The catalog is a snapshot supplied by an external data source. Nothing in
//! the engine mutates it; every operation takes the records it needs as
//! explicit parameters.

use std::collections::BTreeMap;

use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

use super::features::ProviderFeatures;
use super::ids::{ClubId, CompetitionId, ProviderId};
use super::money::{is_blank, parse_price, Price};

/// A football club and the competitions it currently plays in.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Club {
    pub id: ClubId,
    pub name: String,
    pub slug: String,
    #[serde(default)]
    pub country: String,
    /// Participation flag per competition slug for the current season.
    #[serde(default)]
    pub competitions: BTreeMap<String, bool>,
}

impl Club {
    /// Whether the club participates in the given competition this season.
    pub fn plays_in(&self, competition_slug: &str) -> bool {
        self.competitions
            .get(competition_slug)
            .copied()
            .unwrap_or(false)
    }

    /// Slugs of every competition flagged as active for this club.
    pub fn competition_slugs(&self) -> impl Iterator<Item = &str> {
        self.competitions
            .iter()
            .filter(|(_, plays)| **plays)
            .map(|(slug, _)| slug.as_str())
    }
}

/// A league, cup or international competition.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Competition {
    pub id: CompetitionId,
    pub name: String,
    pub slug: String,
    /// Country name, or `"International"`.
    #[serde(default)]
    pub country: String,
    /// Total matches scheduled for the season.
    pub total_matches: u32,
}

/// A streaming subscription offering.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Provider {
    pub id: ProviderId,
    pub name: String,
    pub slug: String,
    /// Monthly price as published, e.g. `"29,99 €"`.
    #[serde(default)]
    pub monthly_price: Option<String>,
    /// Yearly price as published; absent for monthly-only offers.
    #[serde(default)]
    pub yearly_price: Option<String>,
    /// Matches broadcast per competition slug.
    #[serde(default)]
    pub matches: BTreeMap<String, u32>,
    /// Feature descriptor, either structured or a serialized JSON string.
    #[serde(default)]
    pub features: Option<serde_json::Value>,
    #[serde(default)]
    pub highlights: Vec<String>,
}

impl Provider {
    /// Normalized monthly price.
    pub fn monthly(&self) -> Price {
        parse_price(self.monthly_price.as_deref())
    }

    /// Normalized yearly price, falling back to twelve monthly payments.
    pub fn yearly(&self) -> Price {
        if is_blank(self.yearly_price.as_deref()) {
            self.monthly() * Decimal::from(12)
        } else {
            parse_price(self.yearly_price.as_deref())
        }
    }

    /// Whether a yearly price is published.
    pub fn has_yearly(&self) -> bool {
        !is_blank(self.yearly_price.as_deref())
    }

    /// Matches of the given competition this provider broadcasts.
    pub fn matches_for(&self, competition_slug: &str) -> u32 {
        self.matches.get(competition_slug).copied().unwrap_or(0)
    }

    /// Parsed feature descriptor with defaults for anything missing.
    pub fn features(&self) -> ProviderFeatures {
        ProviderFeatures::parse(self.features.as_ref())
    }
}

/// A user's selection, keyed by slugs as they appear in URLs.
#[derive(Debug, Clone, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Selection {
    #[serde(default)]
    pub clubs: Vec<String>,
    #[serde(default)]
    pub competitions: Vec<String>,
}

impl Selection {
    /// Create a selection from club and competition slugs.
    pub fn new<C, L>(clubs: C, competitions: L) -> Self
    where
        C: IntoIterator,
        C::Item: Into<String>,
        L: IntoIterator,
        L::Item: Into<String>,
    {
        Self {
            clubs: clubs.into_iter().map(Into::into).collect(),
            competitions: competitions.into_iter().map(Into::into).collect(),
        }
    }

    /// True when neither clubs nor competitions are selected.
    pub fn is_empty(&self) -> bool {
        self.clubs.is_empty() && self.competitions.is_empty()
    }

    /// Order-insensitive form used as a cache key.
    pub fn normalized(&self) -> Self {
        let mut clubs = self.clubs.clone();
        clubs.sort();
        clubs.dedup();
        let mut competitions = self.competitions.clone();
        competitions.sort();
        competitions.dedup();
        Self {
            clubs,
            competitions,
        }
    }
}

/// In-memory catalog snapshot.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct Catalog {
    #[serde(default)]
    pub clubs: Vec<Club>,
    #[serde(default)]
    pub competitions: Vec<Competition>,
    #[serde(default)]
    pub providers: Vec<Provider>,
}

impl Catalog {
    /// Create a catalog from already-materialized records.
    pub fn new(clubs: Vec<Club>, competitions: Vec<Competition>, providers: Vec<Provider>) -> Self {
        Self {
            clubs,
            competitions,
            providers,
        }
    }

    pub fn club_by_slug(&self, slug: &str) -> Option<&Club> {
        self.clubs.iter().find(|c| c.slug == slug)
    }

    pub fn club_by_id(&self, id: ClubId) -> Option<&Club> {
        self.clubs.iter().find(|c| c.id == id)
    }

    /// Clubs matching the given slugs, in request order. Unknown slugs are skipped.
    pub fn clubs_by_slugs<S: AsRef<str>>(&self, slugs: &[S]) -> Vec<&Club> {
        slugs
            .iter()
            .filter_map(|s| self.club_by_slug(s.as_ref()))
            .collect()
    }

    pub fn competition_by_slug(&self, slug: &str) -> Option<&Competition> {
        self.competitions.iter().find(|c| c.slug == slug)
    }

    pub fn competition_by_id(&self, id: CompetitionId) -> Option<&Competition> {
        self.competitions.iter().find(|c| c.id == id)
    }

    pub fn provider_by_slug(&self, slug: &str) -> Option<&Provider> {
        self.providers.iter().find(|p| p.slug == slug)
    }

    pub fn provider_by_id(&self, id: ProviderId) -> Option<&Provider> {
        self.providers.iter().find(|p| p.id == id)
    }

    /// Providers matching the given ids, in request order. Unknown ids are skipped.
    pub fn providers_by_ids(&self, ids: &[ProviderId]) -> Vec<&Provider> {
        ids.iter().filter_map(|id| self.provider_by_id(*id)).collect()
    }
}
