//! Catalog types and the coverage/optimization engine.
//!
//! Data flows one way:
//! catalog records → [`resolve_requirements`] → [`evaluate`] (once per
//! candidate bundle) → [`Ranker`] → ranked results.

mod catalog;
mod combination;
mod coverage;
mod features;
mod ids;
mod money;
mod requirement;

pub mod error;
pub mod memo;
pub mod ranking;

pub use catalog::{Catalog, Club, Competition, Provider, Selection};
pub use combination::{binomial, combinations, Combination, MAX_COMBINATION_SIZE};
pub use coverage::{evaluate, CompetitionCoverage, Evaluation, ProviderSummary};
pub use features::ProviderFeatures;
pub use ids::{ClubId, CompetitionId, ProviderId};
pub use money::{parse_price, round_cents, Price, MAX_PRICE};
pub use ranking::{RankOptions, RankedResult, Ranker, RecommendOptions, ResultKind};
pub use requirement::{resolve_requirements, Requirement, RequirementSet};
