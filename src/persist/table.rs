// src/persist/table.rs

use csv::{ReaderBuilder, WriterBuilder};
use serde::Serialize;
use std::path::Path;
use tempfile::NamedTempFile;
use tracing::debug;

use crate::error::ScrapeError;
use crate::extract::PlanRecord;

pub const CSV_HEADER: [&str; 4] = ["Name", "Price", "Benefits", "Data"];

/// Replace `path` with a header row and one normalized row per record.
pub fn write_csv(records: &[PlanRecord], path: impl AsRef<Path>) -> Result<(), ScrapeError> {
    let path = path.as_ref();
    write_rows(path, records.iter().map(PlanRecord::normalized))?;
    debug!(path = %path.display(), rows = records.len(), "wrote csv");
    Ok(())
}

/// Write into a temp file next to `path` and rename it into place only once
/// every row is flushed. On any error the previous file is left untouched.
fn write_rows<T, I>(path: &Path, rows: I) -> Result<(), ScrapeError>
where
    T: Serialize,
    I: IntoIterator<Item = T>,
{
    let wrap = |source: csv::Error| ScrapeError::Csv {
        path: path.to_path_buf(),
        source,
    };
    let dir = match path.parent() {
        Some(p) if !p.as_os_str().is_empty() => p,
        _ => Path::new("."),
    };

    let mut tmp = NamedTempFile::new_in(dir).map_err(|e| wrap(e.into()))?;
    {
        let mut writer = WriterBuilder::new().has_headers(false).from_writer(&mut tmp);
        writer.write_record(CSV_HEADER).map_err(wrap)?;
        for row in rows {
            writer.serialize(row).map_err(wrap)?;
        }
        writer.flush().map_err(|e| wrap(e.into()))?;
    }
    tmp.persist(path).map_err(|e| wrap(e.error.into()))?;
    Ok(())
}

/// Read back a file produced by `write_csv`.
pub fn read_csv(path: impl AsRef<Path>) -> Result<Vec<PlanRecord>, ScrapeError> {
    let path = path.as_ref();
    let wrap = |source: csv::Error| ScrapeError::Csv {
        path: path.to_path_buf(),
        source,
    };

    let mut reader = ReaderBuilder::new().from_path(path).map_err(wrap)?;
    reader
        .deserialize::<PlanRecord>()
        .collect::<Result<Vec<_>, _>>()
        .map_err(wrap)
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::fs;
    use tempfile::tempdir;

    fn sample() -> Vec<PlanRecord> {
        vec![
            PlanRecord::new("5GX Prime", "ï¿¦89,000", "Wavve, FLO \"bundle\"", "Unlimited\n(5Mbps)"),
            PlanRecord::new("5G Special", "₩55,000", "Same as previous plan", "unlimited"),
        ]
    }

    #[test]
    fn writes_header_then_normalized_rows() {
        let dir = tempdir().unwrap();
        let path = dir.path().join("plans.csv");
        write_csv(&sample(), &path).unwrap();

        let text = fs::read_to_string(&path).unwrap();
        let mut lines = text.lines();
        assert_eq!(lines.next(), Some("Name,Price,Benefits,Data"));
        assert_eq!(
            lines.next(),
            Some("5GX Prime,\"￦89,000\",\"Wavve, FLO \"\"bundle\"\"\",Unlimited(5Mbps)")
        );
        assert_eq!(
            lines.next(),
            Some("5G Special,\"₩55,000\",Same as previous plan,unlimited")
        );
        assert_eq!(lines.next(), None);
    }

    #[test]
    fn round_trip_preserves_tuples_and_order() {
        let dir = tempdir().unwrap();
        let path = dir.path().join("plans.csv");
        let records = sample();
        write_csv(&records, &path).unwrap();

        let expected: Vec<PlanRecord> = records.iter().map(PlanRecord::normalized).collect();
        assert_eq!(read_csv(&path).unwrap(), expected);
    }

    #[test]
    fn overwrites_previous_contents() {
        let dir = tempdir().unwrap();
        let path = dir.path().join("plans.csv");
        fs::write(&path, "stale,stale,stale,stale\nmore,more,more,more\n").unwrap();
        write_csv(&sample()[1..], &path).unwrap();
        assert_eq!(read_csv(&path).unwrap().len(), 1);
        assert!(!fs::read_to_string(&path).unwrap().contains("stale"));
    }

    /// Serializes fine until told to fail.
    struct Row(bool);

    impl Serialize for Row {
        fn serialize<S: serde::Serializer>(&self, s: S) -> Result<S::Ok, S::Error> {
            if self.0 {
                ("a", "b", "c", "d").serialize(s)
            } else {
                Err(serde::ser::Error::custom("row refused"))
            }
        }
    }

    #[test]
    fn failed_write_keeps_previous_file() {
        let dir = tempdir().unwrap();
        let path = dir.path().join("plans.csv");
        let old = "Name,Price,Benefits,Data\nold,1,2,3\n";
        fs::write(&path, old).unwrap();

        let err = write_rows(&path, [Row(true), Row(true), Row(false)]).unwrap_err();
        assert!(matches!(err, ScrapeError::Csv { .. }));
        assert_eq!(fs::read_to_string(&path).unwrap(), old);

        // no temp file left behind
        assert_eq!(fs::read_dir(dir.path()).unwrap().count(), 1);
    }

    #[test]
    fn unwritable_path_is_a_csv_error() {
        let dir = tempdir().unwrap();
        let path = dir.path().join("missing").join("plans.csv");
        let err = write_csv(&sample(), &path).unwrap_err();
        assert!(matches!(err, ScrapeError::Csv { .. }));
        assert_eq!(err.exit_code(), 2);
    }
}
