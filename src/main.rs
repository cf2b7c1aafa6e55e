mod api;
mod cli;
mod error;
mod fetcher;
mod fmt;
mod logging;
mod models;
mod render;
mod selector;
mod settings;
mod tui;

use std::path::Path;

use clap::Parser;

use cli::{Cli, Commands};

fn main() {
    let cli = Cli::parse();

    let settings = settings::load_settings();
    if let Err(e) = logging::init_logging(Path::new(&settings.log_file)) {
        eprintln!("Warning: {e}");
    }

    let api_url = cli.api_url.as_deref();
    let result = match cli.command.unwrap_or(Commands::Dashboard) {
        Commands::Dashboard => cli::dashboard::run(api_url),
        Commands::Lps => cli::lps::run(api_url),
        Commands::Report { lp, date } => cli::report::run(api_url, &lp, date.as_deref()),
        Commands::Config { save } => cli::config::run(api_url, save),
    };

    if let Err(e) = result {
        tracing::error!(error = %e, "command failed");
        eprintln!("Error: {e}");
        std::process::exit(1);
    }
}
