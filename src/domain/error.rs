//! Domain validation errors for core domain types.
//!
//! These errors signal programmer mistakes (a combination with a repeated
//! provider, a coverage threshold above 100%). Catalog data-quality problems
//! never surface here; they degrade to documented fallback values instead.
//!
//! # Examples
//!
//! ```
//! use streamscout::domain::error::DomainError;
//! use streamscout::domain::ranking::RankOptions;
//!
//! let result = RankOptions::try_new(3, 120);
//! assert!(matches!(result, Err(DomainError::InvalidThreshold { .. })));
//! ```

use thiserror::Error;

use super::ids::ProviderId;

/// Errors that occur when domain invariants are violated.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum DomainError {
    /// Combinations must contain at least one provider.
    #[error("combination cannot be empty")]
    EmptyCombination,

    /// A provider may appear at most once in a combination.
    #[error("provider {id} appears more than once in the combination")]
    DuplicateProvider {
        /// The repeated provider.
        id: ProviderId,
    },

    /// Combinations are bounded in size.
    #[error("combination of {size} providers exceeds the maximum of {max}")]
    CombinationTooLarge {
        /// Requested size.
        size: usize,
        /// Allowed maximum.
        max: usize,
    },

    /// Percentage thresholds must lie within 0..=100.
    #[error("{field} must be between 0 and 100, got {value}")]
    InvalidThreshold {
        /// Name of the offending option.
        field: &'static str,
        /// The value that was provided.
        value: u32,
    },
}
