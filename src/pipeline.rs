// src/pipeline.rs

use scraper::Html;
use std::io::Write;
use tracing::{error, info, warn};

use crate::{
    config::Config,
    error::ScrapeError,
    extract::{extract, PlanRecord},
    fetch::{build_client, load},
    persist::{append_log, write_csv},
    present::{render, render_empty},
};

/// One full run: fetch, extract, print to `out`, write the CSV and append the
/// outcome to the run log. Returns the number of plans written.
///
/// Every outcome leaves exactly one log line. The CSV is only touched once
/// there is something to write, so a failed run keeps the previous file.
pub fn run<W: Write>(config: &Config, out: &mut W) -> Result<usize, ScrapeError> {
    match scrape(config) {
        Ok(plans) => {
            if let Err(e) = publish(config, &plans, out) {
                return Err(fail(config, e, out));
            }
            let message = format!("{} plans scraped", plans.len());
            info!("{}", message);
            append_log(&config.log_path, true, &message)?;
            Ok(plans.len())
        }
        Err(e) => Err(fail(config, e, out)),
    }
}

fn scrape(config: &Config) -> Result<Vec<PlanRecord>, ScrapeError> {
    let client = build_client()?;
    info!(source = %config.source.describe(), "fetching plans page");
    let html = load(&client, &config.source)?;

    let document = Html::parse_document(&html);
    let plans = extract(&document)?;
    if plans.is_empty() {
        return Err(ScrapeError::EmptyResult(config.source.describe()));
    }
    info!(count = plans.len(), "extracted plans");
    Ok(plans)
}

fn publish<W: Write>(config: &Config, plans: &[PlanRecord], out: &mut W) -> Result<(), ScrapeError> {
    if let Err(e) = render(plans, &config.reminder_url, out) {
        // Console trouble should not cost the CSV.
        warn!(error = %e, "console output failed");
    }
    write_csv(plans, &config.csv_path)?;
    info!(path = %config.csv_path.display(), "csv written");
    Ok(())
}

/// Report a failed run on the console and in the run log, then hand the
/// error back.
fn fail<W: Write>(config: &Config, err: ScrapeError, out: &mut W) -> ScrapeError {
    match err {
        ScrapeError::Fetch { .. } | ScrapeError::EmptyResult(_) => {
            warn!(error = %err, "run produced no plans")
        }
        ScrapeError::MalformedRow { .. } | ScrapeError::Csv { .. } | ScrapeError::Log { .. } => {
            error!(error = %err, "run aborted")
        }
    }
    if let Err(e) = render_empty(out) {
        warn!(error = %e, "console output failed");
    }
    if let Err(log_err) = append_log(&config.log_path, false, &err.to_string()) {
        error!(error = %log_err, "could not record failure");
    }
    err
}
