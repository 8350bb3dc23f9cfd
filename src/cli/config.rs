//! Handler for the `config` command group.

use std::path::Path;

use serde_json::json;

use crate::cli::output;
use crate::config::Config;
use crate::error::Result;

/// Execute `config show`.
pub fn execute_show(config: &Config) -> Result<()> {
    if output::is_json() {
        output::json_output(&json!({
            "command": "config.show",
            "config": serde_json::to_value(config)?,
        }));
        return Ok(());
    }

    output::section("Ranking");
    output::field("Max combination size", config.ranking.max_combination_size);
    output::field("Min coverage", format!("{}%", config.ranking.min_coverage));
    output::field("Tie band", format!("{} points", config.ranking.tie_band));

    output::section("Recommend");
    output::field("Near complete", format!("{}%", config.recommend.near_complete));

    output::section("Catalog");
    output::field("Path", config.catalog.path.display());

    output::section("Logging");
    output::field("Level", &config.logging.level);
    output::field("Format", &config.logging.format);
    Ok(())
}

/// Execute `config validate`.
///
/// Loading already validated the file; this reports which file it was.
pub fn execute_validate(path: Option<&Path>) -> Result<()> {
    let source = path.map_or_else(
        || "built-in defaults".to_string(),
        |p| p.display().to_string(),
    );

    if output::is_json() {
        output::json_output(&json!({
            "command": "config.validate",
            "valid": true,
            "source": source,
        }));
        return Ok(());
    }

    output::success(&format!("configuration is valid ({source})"));
    Ok(())
}
