//! Results table extraction.
//!
//! The lookup page renders upcoming arrivals as rows of a single table,
//! `#kekka-table`. Each row carries a line label (`.lineNum`), a first
//! cell holding the label followed by the destination, and a time label
//! (`.time`). Rows that lack any of these are skipped; extraction never
//! fails.

use scraper::{ElementRef, Html, Selector};

use crate::domain::{ArrivalRecord, clean_destination};

/// Id of the results table on the lookup page.
pub const RESULTS_TABLE_ID: &str = "kekka-table";

/// The text fields read from one results row.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum RowField {
    /// Line or platform label
    LineLabel,
    /// First cell: line label followed by the destination
    Combined,
    /// Scheduled or estimated time label
    Time,
}

/// A row of the results table, seen only through the text of its fields.
pub trait RowNode {
    /// Trimmed text of the field, or `None` if the row has no such element.
    fn field_text(&self, field: RowField) -> Option<String>;
}

/// Turn one row into a record, or `None` if any field is missing or empty.
pub fn parse_row<N: RowNode + ?Sized>(row: &N) -> Option<ArrivalRecord> {
    let line = row.field_text(RowField::LineLabel)?;
    let combined = row.field_text(RowField::Combined)?;
    let time = row.field_text(RowField::Time)?;

    let destination = clean_destination(&combined, &line);
    ArrivalRecord::new(line, destination, time)
}

/// Compiled selectors for the results page.
#[derive(Debug)]
struct PageSelectors {
    table: Selector,
    row: Selector,
    line: Selector,
    cell: Selector,
    time: Selector,
}

impl PageSelectors {
    fn new() -> Self {
        Self {
            table: selector(&format!("#{RESULTS_TABLE_ID}")),
            row: selector("tr"),
            line: selector(".lineNum"),
            cell: selector("td"),
            time: selector(".time"),
        }
    }

    fn for_field(&self, field: RowField) -> &Selector {
        match field {
            RowField::LineLabel => &self.line,
            RowField::Combined => &self.cell,
            RowField::Time => &self.time,
        }
    }
}

fn selector(css: &str) -> Selector {
    // Only ever called with the constant selectors above.
    Selector::parse(css).expect("static selector is valid CSS")
}

/// A table row element paired with the selectors for its fields.
struct HtmlRow<'a, 'b> {
    element: ElementRef<'a>,
    selectors: &'b PageSelectors,
}

impl RowNode for HtmlRow<'_, '_> {
    fn field_text(&self, field: RowField) -> Option<String> {
        self.element
            .select(self.selectors.for_field(field))
            .next()
            .map(|el| el.text().collect::<String>().trim().to_string())
    }
}

/// Parses results pages into arrival records.
///
/// Holds the compiled selectors so they are built once per run.
#[derive(Debug)]
pub struct Extractor {
    selectors: PageSelectors,
}

impl Extractor {
    pub fn new() -> Self {
        Self {
            selectors: PageSelectors::new(),
        }
    }

    /// Extract every well-formed row of the results table, in document order.
    ///
    /// Returns an empty vector when the page has no results table.
    pub fn extract(&self, markup: &str) -> Vec<ArrivalRecord> {
        let document = Html::parse_document(markup);

        let Some(table) = document.select(&self.selectors.table).next() else {
            return Vec::new();
        };

        table
            .select(&self.selectors.row)
            .filter_map(|element| {
                parse_row(&HtmlRow {
                    element,
                    selectors: &self.selectors,
                })
            })
            .collect()
    }
}

impl Default for Extractor {
    fn default() -> Self {
        Self::new()
    }
}

/// Convenience wrapper for a one-off extraction.
pub fn extract(markup: &str) -> Vec<ArrivalRecord> {
    Extractor::new().extract(markup)
}
