//! nasne smoke test entry point

use clap::Parser;
use nasne::cli::{survey, Cli};
use nasne::logging::{self, LogConfig};

fn main() {
    let cli = Cli::parse();

    if let Err(e) = logging::init(&LogConfig::from_env()) {
        eprintln!("Error: {}", e);
        std::process::exit(1);
    }

    if let Err(e) = survey::execute(&cli) {
        eprintln!("Error: {}", e);
        std::process::exit(1);
    }
}
