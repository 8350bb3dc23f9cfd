use clap::Parser;

use streamscout::cli::output::{self, OutputConfig};
use streamscout::cli::{self, Cli};

fn main() {
    let _ = dotenvy::dotenv();

    let args = Cli::parse();
    output::configure(OutputConfig::new(args.json, args.quiet));

    if let Err(e) = cli::execute(&args) {
        output::error(&e.to_string());
        std::process::exit(1);
    }
}
