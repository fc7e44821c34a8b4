use anyhow::Result;
use clap::Parser;
use planscraper::{config::PLANS_URL, pipeline, Config, Source};
use std::{io, path::PathBuf, process::ExitCode};
use tracing::{error, info};
use tracing_subscriber::{fmt, EnvFilter};
use url::Url;

/// Scrape the SK Telecom plans table into plans.csv.
#[derive(Parser, Debug)]
#[command(author, version, about)]
struct Args {
    /// Page to fetch
    #[arg(long, default_value = PLANS_URL, value_parser = Url::parse)]
    url: Url,

    /// Parse a saved copy of the page instead of fetching
    #[arg(long, conflicts_with = "url")]
    input: Option<PathBuf>,

    #[arg(long, default_value = planscraper::config::CSV_FILE)]
    csv: PathBuf,

    #[arg(long, default_value = planscraper::config::LOG_FILE)]
    log: PathBuf,
}

impl Args {
    fn into_config(self) -> Config {
        let mut config = Config::with_url(self.url);
        if let Some(path) = self.input {
            config.source = Source::File(path);
        }
        config.csv_path = self.csv;
        config.log_path = self.log;
        config
    }
}

fn init_tracing() -> Result<()> {
    let env = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info"));
    fmt::Subscriber::builder()
        .with_env_filter(env)
        .with_writer(io::stderr)
        .with_target(false)
        .try_init()
        .map_err(|e| anyhow::anyhow!("{e}"))
}

fn main() -> ExitCode {
    if let Err(e) = init_tracing() {
        eprintln!("tracing setup failed: {e}");
    }

    let config = Args::parse().into_config();
    info!(source = %config.source.describe(), "startup");

    let stdout = io::stdout();
    match pipeline::run(&config, &mut stdout.lock()) {
        Ok(n) => {
            info!(plans = n, "all done");
            ExitCode::SUCCESS
        }
        Err(e) => {
            error!(exit_code = e.exit_code(), "{e}");
            ExitCode::from(e.exit_code())
        }
    }
}
