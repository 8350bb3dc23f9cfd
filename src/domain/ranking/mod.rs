//! Combination ranking.
//!
//! The [`Ranker`] enumerates candidate bundles, evaluates each one with
//! [`evaluate`], drops those under the coverage threshold and orders the
//! rest. Three entry points share that pipeline:
//!
//! - [`Ranker::rank`] - exhaustive search over bundles up to
//!   `max_combination_size` providers
//! - [`Ranker::rank_individual`] - single providers only
//! - [`Ranker::recommend`] - gap filling around near-complete providers,
//!   falling back to the exhaustive search
//!
//! # Example
//!
//! ```
//! use streamscout::domain::ranking::{RankOptions, Ranker};
//! use streamscout::domain::RequirementSet;
//!
//! let ranker = Ranker::new(RankOptions::try_new(2, 50).unwrap());
//! let results = ranker.rank(&[], &RequirementSet::default());
//! assert!(results.is_empty());
//! ```

mod gap;
mod order;

pub use gap::RecommendOptions;

use serde::Serialize;
use tracing::debug;

use super::catalog::Provider;
use super::combination::{combinations, Combination, MAX_COMBINATION_SIZE};
use super::coverage::{evaluate, Evaluation};
use super::error::DomainError;
use super::requirement::RequirementSet;

/// Whether a result is one provider or a bundle of several.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum ResultKind {
    Single,
    Combination,
}

/// An evaluated bundle with its position in the ranking.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct RankedResult {
    /// 1-based position.
    pub rank: usize,
    pub kind: ResultKind,
    #[serde(flatten)]
    pub evaluation: Evaluation,
}

/// Options controlling the search.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct RankOptions {
    max_combination_size: usize,
    min_coverage: u8,
    tie_band: u8,
}

impl RankOptions {
    /// Coverage points within which two results count as tied.
    pub const DEFAULT_TIE_BAND: u8 = 5;

    /// Create options, capping the bundle size at [`MAX_COMBINATION_SIZE`].
    ///
    /// A size of zero is raised to one. Returns an error when `min_coverage`
    /// exceeds 100.
    pub fn try_new(max_combination_size: usize, min_coverage: u32) -> Result<Self, DomainError> {
        let min_coverage = threshold("min_coverage", min_coverage)?;
        let capped = max_combination_size.clamp(1, MAX_COMBINATION_SIZE);
        if capped != max_combination_size {
            debug!(
                requested = max_combination_size,
                used = capped,
                "combination size adjusted"
            );
        }
        Ok(Self {
            max_combination_size: capped,
            min_coverage,
            tie_band: Self::DEFAULT_TIE_BAND,
        })
    }

    /// Replace the tie band.
    pub fn with_tie_band(self, tie_band: u32) -> Result<Self, DomainError> {
        Ok(Self {
            tie_band: threshold("tie_band", tie_band)?,
            ..self
        })
    }

    pub fn max_combination_size(&self) -> usize {
        self.max_combination_size
    }

    pub fn min_coverage(&self) -> u8 {
        self.min_coverage
    }

    pub fn tie_band(&self) -> u8 {
        self.tie_band
    }
}

impl Default for RankOptions {
    fn default() -> Self {
        Self {
            max_combination_size: 3,
            min_coverage: 0,
            tie_band: Self::DEFAULT_TIE_BAND,
        }
    }
}

pub(crate) fn threshold(field: &'static str, value: u32) -> Result<u8, DomainError> {
    if value > 100 {
        return Err(DomainError::InvalidThreshold { field, value });
    }
    Ok(value as u8)
}

/// Stateless ranking engine.
#[derive(Debug, Clone, Default)]
pub struct Ranker {
    options: RankOptions,
}

impl Ranker {
    pub fn new(options: RankOptions) -> Self {
        Self { options }
    }

    pub fn options(&self) -> &RankOptions {
        &self.options
    }

    /// Rank every bundle of up to `max_combination_size` providers.
    ///
    /// Returns an empty list when there is nothing to evaluate or when no
    /// bundle reaches `min_coverage`.
    pub fn rank(&self, providers: &[Provider], requirements: &RequirementSet) -> Vec<RankedResult> {
        if providers.is_empty() || requirements.is_empty() {
            return Vec::new();
        }
        let evaluations: Vec<Evaluation> =
            combinations(providers, self.options.max_combination_size)
                .map(|c| evaluate(&c, requirements))
                .collect();
        self.finish(evaluations)
    }

    /// Rank single providers by coverage, then price. No threshold applies.
    pub fn rank_individual(
        &self,
        providers: &[Provider],
        requirements: &RequirementSet,
    ) -> Vec<RankedResult> {
        if providers.is_empty() || requirements.is_empty() {
            return Vec::new();
        }
        let mut evaluations: Vec<Evaluation> = combinations(providers, 1)
            .map(|c| evaluate(&c, requirements))
            .collect();
        evaluations.sort_by(order::individual_order);
        assign_ranks(evaluations)
    }

    /// Threshold, order and number a batch of evaluations.
    fn finish(&self, evaluations: Vec<Evaluation>) -> Vec<RankedResult> {
        let candidates = evaluations.len();
        let mut survivors: Vec<Evaluation> = evaluations
            .into_iter()
            .filter(|e| e.coverage_percent >= self.options.min_coverage)
            .collect();

        debug!(
            candidates,
            survivors = survivors.len(),
            min_coverage = self.options.min_coverage,
            "ranked bundles"
        );

        order::sort_banded(&mut survivors, self.options.tie_band);
        assign_ranks(survivors)
    }
}

fn assign_ranks(evaluations: Vec<Evaluation>) -> Vec<RankedResult> {
    evaluations
        .into_iter()
        .enumerate()
        .map(|(i, evaluation)| RankedResult {
            rank: i + 1,
            kind: if evaluation.is_single() {
                ResultKind::Single
            } else {
                ResultKind::Combination
            },
            evaluation,
        })
        .collect()
}

/// Evaluate a single bundle; convenience for callers holding provider refs.
pub fn evaluate_bundle(
    providers: Vec<&Provider>,
    requirements: &RequirementSet,
) -> Result<Evaluation, DomainError> {
    Ok(evaluate(&Combination::try_new(providers)?, requirements))
}
