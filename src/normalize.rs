// src/normalize.rs
//
// Text cleanup shared by the console and CSV outputs. Input is assumed to be
// UTF-8 (possibly carrying mojibake from a mis-decoded upstream page); output
// is UTF-8 restricted to `is_printable`.

use crate::extract::PlanRecord;

/// Known mis-decoding artifacts and their repairs, applied in order.
pub const ARTIFACTS: &[(&str, &str)] = &[
    // U+FFE6 decoded as Latin-1 after a lossy round trip
    ("ï¿¦", "￦"),
    // U+20A9 read as Windows-1252
    ("â‚©", "₩"),
    // right single quote read as Windows-1252
    ("â€™", "'"),
    ("\u{2019}", "'"),
    ("\u{2018}", "'"),
];

/// Stands in for anything outside the printable subset.
pub const PLACEHOLDER: char = '?';

/// Printable ASCII plus the two won signs.
pub fn is_printable(ch: char) -> bool {
    matches!(ch, ' '..='~' | '₩' | '￦')
}

/// Repair known artifacts, drop line breaks and tabs, then mask anything
/// still outside the printable subset.
pub fn normalize(raw: &str) -> String {
    let mut s = raw.to_string();
    for (from, to) in ARTIFACTS {
        if s.contains(from) {
            s = s.replace(from, to);
        }
    }
    s.chars()
        .filter(|c| !matches!(c, '\n' | '\r' | '\t'))
        .map(|c| if is_printable(c) { c } else { PLACEHOLDER })
        .collect()
}

impl PlanRecord {
    /// Copy with every field passed through `normalize`.
    pub fn normalized(&self) -> PlanRecord {
        PlanRecord {
            name: normalize(&self.name),
            price: normalize(&self.price),
            benefits: normalize(&self.benefits),
            data_allowance: normalize(&self.data_allowance),
        }
    }
}
