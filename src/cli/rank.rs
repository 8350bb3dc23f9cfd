//! Handlers for `rank`, `providers` and `recommend`.

use serde_json::json;
use tabled::{Table, Tabled};
use tracing::info;

use crate::adapter::snapshot;
use crate::cli::command::{ProvidersArgs, RankArgs, RecommendArgs, SelectionArgs};
use crate::cli::output;
use crate::config::Config;
use crate::domain::{
    round_cents, Catalog, Price, RankedResult, Ranker, RecommendOptions,
    RequirementSet, Selection,
};
use crate::error::Result;

#[derive(Tabled)]
struct ResultRow {
    #[tabled(rename = "#")]
    rank: usize,
    #[tabled(rename = "Providers")]
    providers: String,
    #[tabled(rename = "Coverage")]
    coverage: String,
    #[tabled(rename = "Monthly")]
    monthly: String,
    #[tabled(rename = "Yearly")]
    yearly: String,
    #[tabled(rename = "Per Match")]
    per_match: String,
}

impl From<&RankedResult> for ResultRow {
    fn from(result: &RankedResult) -> Self {
        let e = &result.evaluation;
        Self {
            rank: result.rank,
            providers: e
                .providers
                .iter()
                .map(|p| p.name.as_str())
                .collect::<Vec<_>>()
                .join(" + "),
            coverage: format!(
                "{}% ({}/{})",
                e.coverage_percent, e.covered_matches, e.required_matches
            ),
            monthly: money(e.monthly_cost),
            yearly: money(e.yearly_cost),
            per_match: e.cost_per_match.map_or_else(|| "-".to_string(), money),
        }
    }
}

fn money(amount: Price) -> String {
    format!("€{:.2}", round_cents(amount))
}

/// Execute `rank`.
pub fn execute_rank(config: &Config, args: &RankArgs) -> Result<()> {
    let mut ranking = config.ranking.clone();
    if let Some(size) = args.max_size {
        ranking.max_combination_size = size;
    }
    if let Some(min) = args.min_coverage {
        ranking.min_coverage = min;
    }
    let options = ranking.options()?;

    let (catalog, requirements) = prepare(config, &args.selection)?;
    let results = Ranker::new(options).rank(&catalog.providers, &requirements);
    report("rank", &requirements, results, args.limit)
}

/// Execute `providers`.
pub fn execute_providers(config: &Config, args: &ProvidersArgs) -> Result<()> {
    let (catalog, requirements) = prepare(config, &args.selection)?;
    let results =
        Ranker::new(config.ranking.options()?).rank_individual(&catalog.providers, &requirements);
    report("providers", &requirements, results, args.limit)
}

/// Execute `recommend`.
pub fn execute_recommend(config: &Config, args: &RecommendArgs) -> Result<()> {
    let mut ranking = config.ranking.clone();
    if let Some(min) = args.min_coverage {
        ranking.min_coverage = min;
    }
    let recommend = match args.near_complete {
        Some(near) => RecommendOptions::try_new(near)?,
        None => config.recommend.options()?,
    };

    let (catalog, requirements) = prepare(config, &args.selection)?;
    let results =
        Ranker::new(ranking.options()?).recommend(&catalog.providers, &requirements, &recommend);
    report("recommend", &requirements, results, args.limit)
}

fn prepare(config: &Config, args: &SelectionArgs) -> Result<(Catalog, RequirementSet)> {
    let catalog = snapshot::load(&config.catalog.path)?;
    let selection = Selection::new(args.clubs.iter().cloned(), args.competitions.iter().cloned());

    for slug in &selection.clubs {
        if catalog.club_by_slug(slug).is_none() {
            output::warning(&format!("unknown club '{slug}' ignored"));
        }
    }

    let requirements = catalog.resolve(&selection);
    for slug in requirements.unresolved() {
        output::warning(&format!("unknown competition '{slug}' ignored"));
    }
    info!(
        competitions = requirements.len(),
        required_matches = requirements.total_required(),
        "requirements resolved"
    );
    Ok((catalog, requirements))
}

fn report(
    command: &str,
    requirements: &RequirementSet,
    mut results: Vec<RankedResult>,
    limit: Option<usize>,
) -> Result<()> {
    let total = results.len();
    if let Some(limit) = limit {
        results.truncate(limit);
    }

    if output::is_json() {
        output::json_output(&json!({
            "command": command,
            "requirements": requirements.iter().collect::<Vec<_>>(),
            "total": total,
            "results": results,
        }));
        return Ok(());
    }

    output::section("Requirements");
    if requirements.is_empty() {
        output::note("nothing selected");
    }
    for req in requirements.iter() {
        output::field(&req.name, format!("{} matches", req.required));
    }

    output::section("Results");
    if results.is_empty() {
        output::note("no solution found");
        return Ok(());
    }

    let rows: Vec<ResultRow> = results.iter().map(ResultRow::from).collect();
    output::lines(&Table::new(rows).to_string());

    if let Some(best) = results.first() {
        let gaps: Vec<String> = best
            .evaluation
            .gaps()
            .map(|g| format!("{} {}/{}", g.name, g.covered, g.required))
            .collect();
        if !gaps.is_empty() {
            output::hint(&format!("best result misses: {}", gaps.join(", ")));
        }
    }
    if total > results.len() {
        output::hint(&format!(
            "showing {} of {total}, use {} to see more",
            results.len(),
            output::highlight("--limit")
        ));
    }
    Ok(())
}
