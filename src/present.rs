// src/present.rs

use std::io::{self, Write};

use crate::config::CONSOLE_TITLE;
use crate::extract::PlanRecord;

/// Write the human-readable plan listing to `out`, in extraction order.
pub fn render<W: Write>(records: &[PlanRecord], reminder_url: &str, out: &mut W) -> io::Result<()> {
    writeln!(out, "\nNumber of plans found: {}", records.len())?;
    writeln!(out, "\n{}\n", CONSOLE_TITLE)?;
    writeln!(out, "(Check latest prices at: {})\n", reminder_url)?;

    for (i, record) in records.iter().enumerate() {
        let r = record.normalized();
        writeln!(out, "{}. {}", i + 1, r.name)?;
        writeln!(out, "\t\t\tPrice: {}", r.price)?;
        writeln!(out, "\t\t\tBenefits: {}", r.benefits)?;
        writeln!(out, "\t\t\tData: {}\n", r.data_allowance)?;
    }
    out.flush()
}

/// Shown when a run produced nothing.
pub fn render_empty<W: Write>(out: &mut W) -> io::Result<()> {
    writeln!(out, "No plans found")?;
    out.flush()
}
