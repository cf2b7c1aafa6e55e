pub mod config;
pub mod dashboard;
pub mod lps;
pub mod report;

use chrono::NaiveDate;
use clap::{Parser, Subcommand};

use crate::api::HttpLpApi;
use crate::error::{LpError, Result};
use crate::settings::{load_settings, normalize_api_url};

pub(crate) fn parse_date(s: &str) -> Result<NaiveDate> {
    NaiveDate::parse_from_str(s.trim(), "%Y-%m-%d").map_err(|_| LpError::InvalidDate(s.to_string()))
}

/// Build the API client from `--api-url` or, failing that, the saved settings.
pub(crate) fn api_client(api_url: Option<&str>) -> Result<HttpLpApi> {
    let raw = match api_url {
        Some(url) => url.to_string(),
        None => load_settings().api_url,
    };
    HttpLpApi::new(normalize_api_url(&raw)?)
}

pub(crate) fn today() -> NaiveDate {
    chrono::Local::now().date_naive()
}

#[derive(Parser)]
#[command(name = "lpdash", about = "Limited partner fund report dashboard.")]
pub struct Cli {
    /// Base URL of the LP reporting API (overrides settings)
    #[arg(long = "api-url", global = true)]
    pub api_url: Option<String>,

    #[command(subcommand)]
    pub command: Option<Commands>,
}

#[derive(Subcommand)]
pub enum Commands {
    /// Open the interactive dashboard (default).
    Dashboard,
    /// List the available LP identifiers.
    Lps,
    /// Print one LP's report as text tables.
    Report {
        /// LP identifier, as listed by `lpdash lps`
        lp: String,
        /// Report date: YYYY-MM-DD (default: today, may not be in the future)
        #[arg(long)]
        date: Option<String>,
    },
    /// Show settings, or save `--api-url` as the new default.
    Config {
        /// Persist the given --api-url to the settings file
        #[arg(long)]
        save: bool,
    },
}
