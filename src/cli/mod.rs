//! CLI module graph and command dispatch.

pub mod command;
pub mod config;
pub mod output;
pub mod rank;

use std::path::{Path, PathBuf};

pub use command::{Cli, Commands, ConfigCommand};

use crate::config::Config;
use crate::error::Result;

/// Run the parsed command line.
pub fn execute(cli: &Cli) -> Result<()> {
    let config_path = resolve_config_path(cli.config.as_deref());
    let mut settings = match &config_path {
        Some(path) => Config::load(path)?,
        None => Config::default(),
    };
    if let Some(catalog) = &cli.catalog {
        settings.catalog.path = catalog.clone();
    }
    settings.init_logging();

    match &cli.command {
        Commands::Rank(args) => rank::execute_rank(&settings, args),
        Commands::Providers(args) => rank::execute_providers(&settings, args),
        Commands::Recommend(args) => rank::execute_recommend(&settings, args),
        Commands::Config(ConfigCommand::Show) => config::execute_show(&settings),
        Commands::Config(ConfigCommand::Validate) => {
            config::execute_validate(config_path.as_deref())
        }
    }
}

/// The explicit path, or the default file when it exists.
fn resolve_config_path(explicit: Option<&Path>) -> Option<PathBuf> {
    match explicit {
        Some(path) => Some(path.to_path_buf()),
        None => {
            let default = PathBuf::from(command::DEFAULT_CONFIG);
            default.exists().then_some(default)
        }
    }
}
