// src/extract.rs

use scraper::{ElementRef, Html, Selector};
use serde::{Deserialize, Serialize};
use std::collections::HashSet;
use tracing::{debug, trace};

use crate::config::{PLAN_TABLE_SUMMARY, SENTINEL};
use crate::error::ScrapeError;

/// One plan row. Field names double as the CSV header.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct PlanRecord {
    #[serde(rename = "Name")]
    pub name: String,
    #[serde(rename = "Price")]
    pub price: String,
    #[serde(rename = "Benefits")]
    pub benefits: String,
    #[serde(rename = "Data")]
    pub data_allowance: String,
}

impl PlanRecord {
    pub fn new(
        name: impl Into<String>,
        price: impl Into<String>,
        benefits: impl Into<String>,
        data_allowance: impl Into<String>,
    ) -> Self {
        Self {
            name: name.into(),
            price: price.into(),
            benefits: benefits.into(),
            data_allowance: data_allowance.into(),
        }
    }
}

/// Parse `html` and extract its plan rows.
pub fn extract_html(html: &str) -> Result<Vec<PlanRecord>, ScrapeError> {
    extract(&Html::parse_document(html))
}

/// Extract plan rows from the plans table, in document order. Rows whose
/// normalized fields match an earlier row are dropped; the first one is kept
/// as extracted. A page without the table yields an empty list.
pub fn extract(document: &Html) -> Result<Vec<PlanRecord>, ScrapeError> {
    let Some(table) = find_plan_table(document) else {
        debug!("plans table not found");
        return Ok(Vec::new());
    };

    let mut seen = HashSet::new();
    let mut plans = Vec::new();

    // Only the first tbody, and only its own rows.
    let rows = child_cells(table, "tbody")
        .next()
        .into_iter()
        .flat_map(|tbody| child_cells(tbody, "tr"));

    for (i, row) in rows.enumerate() {
        let record = complete_row(i + 1, row)?;
        trace!(row = i + 1, name = %record.name, "parsed row");
        if seen.insert(record.normalized()) {
            plans.push(record);
        } else {
            debug!(row = i + 1, name = %record.name, "duplicate row skipped");
        }
    }

    debug!(count = plans.len(), "extracted plans");
    Ok(plans)
}

/// The first table whose `summary` attribute or caption text names the plans table.
pub fn find_plan_table(document: &Html) -> Option<ElementRef<'_>> {
    let table_sel = Selector::parse("table").expect("table selector should parse");

    document.select(&table_sel).find(|table| {
        if table.value().attr("summary").map(str::trim) == Some(PLAN_TABLE_SUMMARY) {
            return true;
        }
        child_cells(*table, "caption")
            .next()
            .map(|c| cell_text(c) == PLAN_TABLE_SUMMARY)
            .unwrap_or(false)
    })
}

/// Build a record from one row. `row_no` is 1-based and only used for errors.
///
/// The header cell gives the name and the first data cell the price. After
/// that a row with two more cells reads benefits then data; a row with one
/// more cell carries only the data allowance; a row with none leaves both to
/// the sentinel.
fn complete_row(row_no: usize, row: ElementRef<'_>) -> Result<PlanRecord, ScrapeError> {
    let name = child_cells(row, "th")
        .next()
        .map(cell_text)
        .ok_or(ScrapeError::MalformedRow {
            row: row_no,
            reason: "no header cell",
        })?;
    let tds: Vec<String> = child_cells(row, "td").map(cell_text).collect();

    let (price, benefits, data) = match tds.as_slice() {
        [] => {
            return Err(ScrapeError::MalformedRow {
                row: row_no,
                reason: "no data cells",
            })
        }
        [price] => (price.clone(), SENTINEL.to_string(), SENTINEL.to_string()),
        [price, data] => (price.clone(), SENTINEL.to_string(), data.clone()),
        [price, benefits, data, ..] => (price.clone(), benefits.clone(), data.clone()),
    };

    Ok(PlanRecord {
        name,
        price,
        benefits,
        data_allowance: data,
    })
}

/// Direct element children of `parent` with tag `tag`.
fn child_cells<'a>(parent: ElementRef<'a>, tag: &'a str) -> impl Iterator<Item = ElementRef<'a>> + 'a {
    parent.children()
        .filter_map(ElementRef::wrap)
        .filter(move |el| el.value().name() == tag)
}

fn cell_text(el: ElementRef<'_>) -> String {
    el.text().collect::<String>().trim().to_string()
}
