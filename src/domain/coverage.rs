//! Coverage evaluation for a single candidate bundle.
//!
//! # Rules
//!
//! - Monthly cost is the sum of each provider's normalized monthly price.
//! - Yearly cost is summed per provider, using the published yearly price or
//!   twelve monthly payments when none is published.
//! - Providers do not add up on the same competition: the best one counts,
//!   and never for more than the season total.
//! - Zero denominators map to documented values (0% coverage, no cost per
//!   match, zero efficiency). All arithmetic is decimal, so no NaN exists.

use rust_decimal::Decimal;
use serde::{Serialize, Serializer};

use super::combination::Combination;
use super::ids::ProviderId;
use super::money::{round_cents, Price};
use super::requirement::RequirementSet;

/// Provider fields carried into a result for presentation.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ProviderSummary {
    pub id: ProviderId,
    pub name: String,
    pub slug: String,
    #[serde(serialize_with = "cents")]
    pub monthly_price: Price,
    #[serde(serialize_with = "cents")]
    pub yearly_price: Price,
}

/// Coverage of one required competition.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct CompetitionCoverage {
    pub slug: String,
    pub name: String,
    pub required: u32,
    /// Best provider's matches, capped at `required`.
    pub covered: u32,
    pub percent: u8,
}

/// Outcome of evaluating one bundle against a requirement set.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Evaluation {
    pub providers: Vec<ProviderSummary>,
    #[serde(serialize_with = "cents")]
    pub monthly_cost: Price,
    #[serde(serialize_with = "cents")]
    pub yearly_cost: Price,
    pub coverage_percent: u8,
    pub covered_matches: u64,
    pub required_matches: u64,
    pub breakdown: Vec<CompetitionCoverage>,
    /// Monthly cost per covered match; absent when nothing is covered.
    pub cost_per_match: Option<Price>,
    /// Coverage points per currency unit; zero for free bundles.
    #[serde(skip)]
    pub efficiency: Decimal,
}

impl Evaluation {
    pub fn provider_ids(&self) -> impl Iterator<Item = ProviderId> + '_ {
        self.providers.iter().map(|p| p.id)
    }

    pub fn is_single(&self) -> bool {
        self.providers.len() == 1
    }

    pub fn is_complete(&self) -> bool {
        self.coverage_percent == 100
    }

    /// Competitions where the bundle falls short of the season total.
    pub fn gaps(&self) -> impl Iterator<Item = &CompetitionCoverage> {
        self.breakdown.iter().filter(|c| c.covered < c.required)
    }
}

/// Evaluate a bundle against the required competitions.
pub fn evaluate(combination: &Combination<'_>, requirements: &RequirementSet) -> Evaluation {
    let providers = combination.providers();

    let summaries: Vec<ProviderSummary> = providers
        .iter()
        .map(|p| ProviderSummary {
            id: p.id,
            name: p.name.clone(),
            slug: p.slug.clone(),
            monthly_price: p.monthly(),
            yearly_price: p.yearly(),
        })
        .collect();

    let monthly_cost: Price = summaries.iter().map(|s| s.monthly_price).sum();
    let yearly_cost: Price = summaries.iter().map(|s| s.yearly_price).sum();

    let breakdown: Vec<CompetitionCoverage> = requirements
        .iter()
        .map(|req| {
            let best = providers
                .iter()
                .map(|p| p.matches_for(&req.slug))
                .max()
                .unwrap_or(0);
            let covered = best.min(req.required);
            CompetitionCoverage {
                slug: req.slug.clone(),
                name: req.name.clone(),
                required: req.required,
                covered,
                percent: percent(u64::from(covered), u64::from(req.required)),
            }
        })
        .collect();

    let covered_matches: u64 = breakdown.iter().map(|c| u64::from(c.covered)).sum();
    let required_matches: u64 = breakdown.iter().map(|c| u64::from(c.required)).sum();
    let coverage_percent = percent(covered_matches, required_matches);

    let cost_per_match = if covered_matches == 0 {
        None
    } else {
        monthly_cost
            .checked_div(Decimal::from(covered_matches))
            .map(round_cents)
    };

    let efficiency = if monthly_cost > Decimal::ZERO {
        Decimal::from(coverage_percent)
            .checked_div(monthly_cost)
            .unwrap_or(Decimal::ZERO)
    } else {
        Decimal::ZERO
    };

    Evaluation {
        providers: summaries,
        monthly_cost,
        yearly_cost,
        coverage_percent,
        covered_matches,
        required_matches,
        breakdown,
        cost_per_match,
        efficiency,
    }
}

/// Integer percentage rounded half up; zero when `whole` is zero.
pub(crate) fn percent(part: u64, whole: u64) -> u8 {
    if whole == 0 {
        return 0;
    }
    let rounded = (200 * part + whole) / (2 * whole);
    rounded.min(100) as u8
}

fn cents<S: Serializer>(amount: &Price, serializer: S) -> Result<S::Ok, S::Error> {
    Serialize::serialize(&round_cents(*amount), serializer)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::catalog::{Competition, Provider};
    use crate::domain::ids::CompetitionId;
    use rust_decimal_macros::dec;
    use std::collections::BTreeMap;

    fn provider(id: u32, monthly: &str, matches: &[(&str, u32)]) -> Provider {
        Provider {
            id: ProviderId::new(id),
            name: format!("P{id}"),
            slug: format!("p{id}"),
            monthly_price: Some(monthly.into()),
            yearly_price: None,
            matches: matches
                .iter()
                .map(|(s, n)| (s.to_string(), *n))
                .collect::<BTreeMap<_, _>>(),
            features: None,
            highlights: vec![],
        }
    }

    fn requirements(items: &[(&str, u32)]) -> RequirementSet {
        let comps: Vec<Competition> = items
            .iter()
            .enumerate()
            .map(|(i, (slug, total))| Competition {
                id: CompetitionId::new(i as u32 + 1),
                name: slug.to_string(),
                slug: slug.to_string(),
                country: "Germany".into(),
                total_matches: *total,
            })
            .collect();
        RequirementSet::from_competitions(&comps)
    }

    #[test]
    fn best_provider_counts_per_competition() {
        let x = provider(1, "10", &[("a", 6)]);
        let y = provider(2, "8", &[("a", 9)]);
        let combo = Combination::try_new(vec![&x, &y]).unwrap();
        let eval = evaluate(&combo, &requirements(&[("a", 10)]));
        assert_eq!(eval.breakdown[0].covered, 9);
        assert_eq!(eval.coverage_percent, 90);
        assert_eq!(eval.monthly_cost, dec!(18));
    }

    #[test]
    fn coverage_is_clamped_to_season_total() {
        let x = provider(1, "10", &[("a", 50)]);
        let eval = evaluate(&Combination::single(&x), &requirements(&[("a", 34)]));
        assert_eq!(eval.breakdown[0].covered, 34);
        assert_eq!(eval.breakdown[0].percent, 100);
        assert_eq!(eval.coverage_percent, 100);
    }

    #[test]
    fn yearly_cost_summed_per_provider() {
        let mut x = provider(1, "10", &[]);
        x.yearly_price = Some("100".into());
        let y = provider(2, "5", &[]);
        let combo = Combination::try_new(vec![&x, &y]).unwrap();
        let eval = evaluate(&combo, &requirements(&[("a", 1)]));
        assert_eq!(eval.yearly_cost, dec!(160));
    }

    #[test]
    fn zero_covered_has_no_cost_per_match() {
        let x = provider(1, "10", &[]);
        let eval = evaluate(&Combination::single(&x), &requirements(&[("a", 10)]));
        assert_eq!(eval.coverage_percent, 0);
        assert_eq!(eval.cost_per_match, None);
        assert_eq!(eval.efficiency, Decimal::ZERO);
    }

    #[test]
    fn zero_cost_has_zero_efficiency() {
        let x = provider(1, "0", &[("a", 10)]);
        let eval = evaluate(&Combination::single(&x), &requirements(&[("a", 10)]));
        assert_eq!(eval.coverage_percent, 100);
        assert_eq!(eval.efficiency, Decimal::ZERO);
        assert_eq!(eval.cost_per_match, Some(Decimal::ZERO));
    }

    #[test]
    fn empty_requirements_evaluate_to_zero() {
        let x = provider(1, "10", &[("a", 10)]);
        let eval = evaluate(&Combination::single(&x), &RequirementSet::default());
        assert_eq!(eval.coverage_percent, 0);
        assert!(eval.breakdown.is_empty());
        assert_eq!(eval.cost_per_match, None);
    }

    #[test]
    fn cost_per_match_rounds_to_cents() {
        let x = provider(1, "10", &[("a", 3)]);
        let eval = evaluate(&Combination::single(&x), &requirements(&[("a", 3)]));
        assert_eq!(eval.cost_per_match, Some(dec!(3.33)));
        assert_eq!(eval.efficiency, dec!(10));
    }

    #[test]
    fn money_fields_serialize_rounded_to_cents() {
        let mut x = provider(1, "10,005", &[("a", 3)]);
        x.yearly_price = Some("100,004".into());
        let eval = evaluate(&Combination::single(&x), &requirements(&[("a", 3)]));
        let value = serde_json::to_value(&eval).unwrap();
        assert_eq!(value["monthly_cost"], "10.01");
        assert_eq!(value["yearly_cost"], "100.00");
        assert_eq!(value["providers"][0]["monthly_price"], "10.01");
    }

    #[test]
    fn percent_rounds_half_up() {
        assert_eq!(percent(1, 2), 50);
        assert_eq!(percent(1, 3), 33);
        assert_eq!(percent(2, 3), 67);
        assert_eq!(percent(1, 200), 1);
        assert_eq!(percent(0, 0), 0);
    }

    #[test]
    fn gaps_list_incomplete_competitions() {
        let x = provider(1, "10", &[("a", 10), ("b", 4)]);
        let eval = evaluate(&Combination::single(&x), &requirements(&[("a", 10), ("b", 5)]));
        let gaps: Vec<&str> = eval.gaps().map(|g| g.slug.as_str()).collect();
        assert_eq!(gaps, vec!["b"]);
    }
}
