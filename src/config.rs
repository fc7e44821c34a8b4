// src/config.rs

use std::path::PathBuf;
use url::Url;

/// Live plans page.
pub const PLANS_URL: &str = "https://www.tworld.co.kr/poc/eng/html/EN1.8T.html";

/// `summary` attribute (or caption text) that singles out the plans table.
pub const PLAN_TABLE_SUMMARY: &str = "T PLAN Service Information. Plan, Monthly rate(including VAT), Talk/Text, Data, Benefits, T Plan & T family Benefits";

/// Placeholder for cells a row leaves out.
pub const SENTINEL: &str = "Same as previous plan";

pub const CSV_FILE: &str = "plans.csv";
pub const LOG_FILE: &str = "crawler.log";

pub const CONSOLE_TITLE: &str = "SK Telecom Cell Phone Plans";

/// Where the page markup comes from.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Source {
    Url(Url),
    /// A saved copy of the page on disk.
    File(PathBuf),
}

impl Source {
    pub fn describe(&self) -> String {
        match self {
            Source::Url(url) => url.to_string(),
            Source::File(path) => path.display().to_string(),
        }
    }
}

#[derive(Debug, Clone)]
pub struct Config {
    pub source: Source,
    /// URL printed in the "check latest prices" reminder.
    pub reminder_url: String,
    pub csv_path: PathBuf,
    pub log_path: PathBuf,
}

impl Config {
    /// Default paths, fetching from `url`.
    pub fn with_url(url: Url) -> Self {
        Self {
            reminder_url: url.to_string(),
            source: Source::Url(url),
            ..Self::default()
        }
    }
}

impl Default for Config {
    fn default() -> Self {
        let url = Url::parse(PLANS_URL).expect("built-in plans URL should parse");
        Self {
            reminder_url: PLANS_URL.to_string(),
            source: Source::Url(url),
            csv_path: PathBuf::from(CSV_FILE),
            log_path: PathBuf::from(LOG_FILE),
        }
    }
}
