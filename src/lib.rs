//! Streamscout - find the cheapest streaming subscriptions for your football.
//!
//! Given a selection of clubs and/or competitions, the engine works out
//! which streaming provider, or small bundle of providers, covers the most
//! matches and ranks bundles by coverage and value for money.
//!
//! # Architecture
//!
//! - **`domain`** - catalog records and the coverage/optimization engine
//!   - `resolve_requirements` - selection to required competitions
//!   - `evaluate` - coverage, cost and efficiency of one bundle
//!   - `Ranker` - exhaustive, individual and gap-filling rankings
//! - **`adapter::snapshot`** - catalog snapshots from JSON files
//! - **`config`** - TOML configuration and logging setup
//! - **`cli`** - the `streamscout` command-line front end
//!
//! # Example
//!
//! ```
//! use streamscout::adapter::snapshot;
//! use streamscout::domain::{Ranker, Selection};
//!
//! let catalog = snapshot::from_json(r#"{
//!     "competitions": [{ "id": 1, "name": "Bundesliga", "slug": "bundesliga", "total_matches": 34 }],
//!     "providers": [{ "id": 1, "name": "Sky", "slug": "sky", "monthly_price": "29,99",
//!                     "matches": { "bundesliga": 34 } }]
//! }"#).unwrap();
//!
//! let requirements = catalog.resolve(&Selection::new(Vec::<String>::new(), ["bundesliga"]));
//! let results = Ranker::default().rank(&catalog.providers, &requirements);
//! assert_eq!(results[0].evaluation.coverage_percent, 100);
//! ```

pub mod adapter;
pub mod cli;
pub mod config;
pub mod domain;
pub mod error;
