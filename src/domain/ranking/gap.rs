//! Gap filling: pair near-complete providers with the providers that cover
//! exactly what they miss, instead of searching every pair.

use std::collections::HashSet;

use tracing::debug;

use super::{threshold, RankedResult, Ranker};
use crate::domain::catalog::Provider;
use crate::domain::combination::{combinations, Combination};
use crate::domain::coverage::{evaluate, Evaluation};
use crate::domain::error::DomainError;
use crate::domain::ids::ProviderId;
use crate::domain::requirement::RequirementSet;

/// Options for [`Ranker::recommend`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct RecommendOptions {
    near_complete: u8,
}

impl RecommendOptions {
    /// Coverage a single provider needs to anchor gap filling.
    pub const DEFAULT_NEAR_COMPLETE: u8 = 90;

    pub fn try_new(near_complete: u32) -> Result<Self, DomainError> {
        Ok(Self {
            near_complete: threshold("near_complete", near_complete)?,
        })
    }

    pub fn near_complete(&self) -> u8 {
        self.near_complete
    }
}

impl Default for RecommendOptions {
    fn default() -> Self {
        Self {
            near_complete: Self::DEFAULT_NEAR_COMPLETE,
        }
    }
}

impl Ranker {
    /// Rank singles plus gap-filling pairs.
    ///
    /// Providers reaching `near_complete` coverage on their own are anchors;
    /// each incomplete anchor is paired with every provider that covers at
    /// least one of its missing matches. Without any anchor this falls back
    /// to [`Ranker::rank`]. Pairs are only built when the options allow
    /// bundles of two or more.
    pub fn recommend(
        &self,
        providers: &[Provider],
        requirements: &RequirementSet,
        options: &RecommendOptions,
    ) -> Vec<RankedResult> {
        if providers.is_empty() || requirements.is_empty() {
            return Vec::new();
        }

        let singles: Vec<(Combination<'_>, Evaluation)> = combinations(providers, 1)
            .map(|c| {
                let e = evaluate(&c, requirements);
                (c, e)
            })
            .collect();

        let anchors: Vec<&(Combination<'_>, Evaluation)> = singles
            .iter()
            .filter(|(_, e)| e.coverage_percent >= options.near_complete)
            .collect();

        if anchors.is_empty() {
            debug!(
                near_complete = options.near_complete,
                "no near-complete provider, searching all bundles"
            );
            return self.rank(providers, requirements);
        }

        let mut pairs = Vec::new();
        if self.options.max_combination_size() >= 2 {
            let mut seen: HashSet<Vec<ProviderId>> = HashSet::new();
            for (anchor, anchor_eval) in anchors.iter().map(|a| (&a.0, &a.1)) {
                if anchor_eval.is_complete() {
                    continue;
                }
                for (candidate, _) in &singles {
                    let filler = candidate.providers()[0];
                    if !fills_gap(anchor_eval, filler) {
                        continue;
                    }
                    let Ok(pair) = anchor.with(filler) else {
                        continue;
                    };
                    let mut key: Vec<ProviderId> = pair.providers().iter().map(|p| p.id).collect();
                    key.sort();
                    if seen.insert(key) {
                        pairs.push(evaluate(&pair, requirements));
                    }
                }
            }
        }

        debug!(
            anchors = anchors.len(),
            pairs = pairs.len(),
            "gap filling candidates"
        );

        let evaluations = singles
            .into_iter()
            .map(|(_, e)| e)
            .chain(pairs)
            .collect();
        self.finish(evaluations)
    }
}

/// Whether `filler` covers more of some competition than the anchor does.
fn fills_gap(anchor: &Evaluation, filler: &Provider) -> bool {
    anchor
        .gaps()
        .any(|gap| filler.matches_for(&gap.slug) > gap.covered)
}
