//! Candidate subscription bundles and their enumeration.

use std::collections::HashSet;

use itertools::Itertools;

use super::catalog::Provider;
use super::error::DomainError;

/// Upper bound on providers per bundle. Enumeration grows as C(n, k).
pub const MAX_COMBINATION_SIZE: usize = 4;

/// An ordered set of distinct providers considered as one bundle.
#[derive(Debug, Clone, PartialEq)]
pub struct Combination<'a> {
    providers: Vec<&'a Provider>,
}

impl<'a> Combination<'a> {
    /// Build a combination, enforcing 1..=[`MAX_COMBINATION_SIZE`] distinct providers.
    pub fn try_new(providers: Vec<&'a Provider>) -> Result<Self, DomainError> {
        if providers.is_empty() {
            return Err(DomainError::EmptyCombination);
        }
        if providers.len() > MAX_COMBINATION_SIZE {
            return Err(DomainError::CombinationTooLarge {
                size: providers.len(),
                max: MAX_COMBINATION_SIZE,
            });
        }
        let mut seen = HashSet::with_capacity(providers.len());
        for p in &providers {
            if !seen.insert(p.id) {
                return Err(DomainError::DuplicateProvider { id: p.id });
            }
        }
        Ok(Self { providers })
    }

    /// A bundle of exactly one provider.
    pub fn single(provider: &'a Provider) -> Self {
        Self {
            providers: vec![provider],
        }
    }

    pub fn providers(&self) -> &[&'a Provider] {
        &self.providers
    }

    pub fn len(&self) -> usize {
        self.providers.len()
    }

    pub fn is_empty(&self) -> bool {
        self.providers.is_empty()
    }

    pub fn is_single(&self) -> bool {
        self.providers.len() == 1
    }

    /// Same bundle with one more provider appended.
    pub fn with(&self, provider: &'a Provider) -> Result<Self, DomainError> {
        let mut providers = self.providers.clone();
        providers.push(provider);
        Self::try_new(providers)
    }
}

/// All combinations of `providers` of size `1..=max_size`, smallest first.
///
/// Within a size, combinations follow the catalog order lexicographically.
/// `max_size` is capped at [`MAX_COMBINATION_SIZE`]. Providers sharing an id
/// with an earlier entry are skipped so no bundle repeats a provider.
pub fn combinations<'a>(
    providers: &'a [Provider],
    max_size: usize,
) -> impl Iterator<Item = Combination<'a>> + 'a {
    let mut seen = HashSet::with_capacity(providers.len());
    let distinct: Vec<&'a Provider> = providers.iter().filter(|p| seen.insert(p.id)).collect();
    let max_size = max_size.min(MAX_COMBINATION_SIZE).min(distinct.len());

    (1..=max_size).flat_map(move |k| {
        distinct
            .clone()
            .into_iter()
            .combinations(k)
            .map(|providers| Combination { providers })
    })
}

/// Number of `k`-element subsets of an `n`-element set.
pub fn binomial(n: usize, k: usize) -> usize {
    if k > n {
        return 0;
    }
    let k = k.min(n - k);
    (0..k).fold(1usize, |acc, i| acc * (n - i) / (i + 1))
}
