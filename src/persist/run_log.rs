// src/persist/run_log.rs

use chrono::{DateTime, Local, TimeZone};
use std::{
    fmt::Display,
    fs::OpenOptions,
    io::Write,
    path::Path,
};

use crate::error::ScrapeError;

/// `[YYYY-MM-DD HH:MM:SS] SUCCESS: <message>` (or `FAILED`), no trailing newline.
pub fn format_log_line<Tz>(ts: &DateTime<Tz>, success: bool, message: &str) -> String
where
    Tz: TimeZone,
    Tz::Offset: Display,
{
    let status = if success { "SUCCESS" } else { "FAILED" };
    format!("[{}] {}: {}", ts.format("%Y-%m-%d %H:%M:%S"), status, message)
}

/// Append one outcome line stamped with local time. Creates the file if needed.
pub fn append_log(path: impl AsRef<Path>, success: bool, message: &str) -> Result<(), ScrapeError> {
    let path = path.as_ref();
    let line = format_log_line(&Local::now(), success, message);

    OpenOptions::new()
        .create(true)
        .append(true)
        .open(path)
        .and_then(|mut file| writeln!(file, "{}", line))
        .map_err(|source| ScrapeError::Log {
            path: path.to_path_buf(),
            source,
        })
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::{FixedOffset, NaiveDate};
    use std::fs;
    use tempfile::tempdir;

    #[test]
    fn formats_success_and_failure() {
        let ts = FixedOffset::east_opt(9 * 3600)
            .unwrap()
            .from_local_datetime(
                &NaiveDate::from_ymd_opt(2024, 3, 7)
                    .unwrap()
                    .and_hms_opt(8, 5, 9)
                    .unwrap(),
            )
            .single()
            .unwrap();
        assert_eq!(
            format_log_line(&ts, true, "12 plans scraped"),
            "[2024-03-07 08:05:09] SUCCESS: 12 plans scraped"
        );
        assert_eq!(
            format_log_line(&ts, false, "no plans found"),
            "[2024-03-07 08:05:09] FAILED: no plans found"
        );
    }

    #[test]
    fn appends_without_truncating() {
        let dir = tempdir().unwrap();
        let path = dir.path().join("crawler.log");
        fs::write(&path, "earlier line\n").unwrap();

        append_log(&path, true, "3 plans scraped").unwrap();
        append_log(&path, false, "boom").unwrap();

        let text = fs::read_to_string(&path).unwrap();
        let lines: Vec<&str> = text.lines().collect();
        assert_eq!(lines.len(), 3);
        assert_eq!(lines[0], "earlier line");
        assert!(lines[1].starts_with('[') && lines[1].ends_with("] SUCCESS: 3 plans scraped"));
        assert!(lines[2].ends_with("] FAILED: boom"));
        // "[YYYY-MM-DD HH:MM:SS]" is 21 chars
        assert_eq!(lines[1].find(']'), Some(20));
    }
}
