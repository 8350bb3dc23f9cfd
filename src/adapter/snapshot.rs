//! Catalog snapshots stored as JSON.
//!
//! The snapshot mirrors the three catalog tables:
//!
//! ```json
//! {
//!   "clubs": [{ "id": 1, "name": "FC Bayern", "slug": "fc-bayern",
//!               "country": "Germany", "competitions": { "bundesliga": true } }],
//!   "competitions": [{ "id": 1, "name": "Bundesliga", "slug": "bundesliga",
//!                      "country": "Germany", "total_matches": 306 }],
//!   "providers": [{ "id": 1, "name": "Sky", "slug": "sky",
//!                   "monthly_price": "29,99 €", "matches": { "bundesliga": 266 } }]
//! }
//! ```

use std::collections::HashSet;
use std::path::Path;

use tracing::{debug, info};

use crate::domain::Catalog;
use crate::error::{CatalogError, Result};

/// Read and validate a catalog snapshot from disk.
pub fn load<P: AsRef<Path>>(path: P) -> Result<Catalog> {
    let path = path.as_ref();
    debug!(path = %path.display(), "loading catalog snapshot");
    let content = std::fs::read_to_string(path).map_err(CatalogError::ReadFile)?;
    let catalog = from_json(&content)?;
    info!(
        clubs = catalog.clubs.len(),
        competitions = catalog.competitions.len(),
        providers = catalog.providers.len(),
        "catalog loaded"
    );
    Ok(catalog)
}

/// Parse and validate a catalog snapshot.
pub fn from_json(content: &str) -> Result<Catalog> {
    let catalog: Catalog = serde_json::from_str(content).map_err(CatalogError::Parse)?;
    validate(&catalog)?;
    Ok(catalog)
}

fn validate(catalog: &Catalog) -> Result<()> {
    unique_slugs("club", catalog.clubs.iter().map(|c| c.slug.as_str()))?;
    unique_slugs(
        "competition",
        catalog.competitions.iter().map(|c| c.slug.as_str()),
    )?;
    unique_slugs("provider", catalog.providers.iter().map(|p| p.slug.as_str()))?;
    Ok(())
}

fn unique_slugs<'a>(kind: &'static str, slugs: impl Iterator<Item = &'a str>) -> Result<()> {
    let mut seen = HashSet::new();
    for slug in slugs {
        if !seen.insert(slug) {
            return Err(CatalogError::DuplicateSlug {
                kind,
                slug: slug.to_string(),
            }
            .into());
        }
    }
    Ok(())
}
