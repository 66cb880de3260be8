//! Arrival records and destination text cleanup.

use serde::Serialize;

/// Marker meaning "bound for". A cleaned destination ends with it.
pub const BOUND_FOR: &str = "行き";

/// One parsed row of upcoming service at a stop.
///
/// All three fields are non-empty and trimmed. The only way to build one
/// is [`ArrivalRecord::new`], so a snapshot never carries a partial row.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ArrivalRecord {
    line: String,
    destination: String,
    time: String,
}

impl ArrivalRecord {
    /// Build a record, or `None` if any field is empty after trimming.
    ///
    /// # Examples
    ///
    /// ```
    /// use arrival_snapshot::domain::ArrivalRecord;
    ///
    /// let rec = ArrivalRecord::new(" 5 ", "Downtown行き", "10:15").unwrap();
    /// assert_eq!(rec.line(), "5");
    ///
    /// assert!(ArrivalRecord::new("5", "  ", "10:15").is_none());
    /// ```
    pub fn new(
        line: impl AsRef<str>,
        destination: impl AsRef<str>,
        time: impl AsRef<str>,
    ) -> Option<Self> {
        let line = line.as_ref().trim();
        let destination = destination.as_ref().trim();
        let time = time.as_ref().trim();

        if line.is_empty() || destination.is_empty() || time.is_empty() {
            return None;
        }

        Some(Self {
            line: line.to_string(),
            destination: destination.to_string(),
            time: time.to_string(),
        })
    }

    /// Line or platform designator.
    pub fn line(&self) -> &str {
        &self.line
    }

    /// Destination display text.
    pub fn destination(&self) -> &str {
        &self.destination
    }

    /// Time label exactly as the source shows it (not parsed).
    pub fn time(&self) -> &str {
        &self.time
    }
}

/// Clean the combined destination cell of a results row.
///
/// Removes the first occurrence of the line label (normally the prefix of
/// the cell), then cuts the text after the first [`BOUND_FOR`] marker.
/// A label that is not a prefix is still removed wherever it first
/// occurs, and a label that is absent removes nothing.
///
/// # Examples
///
/// ```
/// use arrival_snapshot::domain::clean_destination;
///
/// assert_eq!(clean_destination("5 Downtown行き extra", "5"), "Downtown行き");
/// ```
pub fn clean_destination(combined: &str, line: &str) -> String {
    if line.is_empty() {
        return truncate_at_marker(combined);
    }
    truncate_at_marker(&combined.replacen(line, "", 1))
}

/// Drop whitespace before the first [`BOUND_FOR`] marker and everything
/// after it, then trim. Text without the marker is only trimmed.
pub fn truncate_at_marker(text: &str) -> String {
    match text.find(BOUND_FOR) {
        Some(idx) => {
            let head = text[..idx].trim();
            format!("{head}{BOUND_FOR}")
        }
        None => text.trim().to_string(),
    }
}


#[cfg(test)]
mod proptests {
    use super::*;
    use proptest::prelude::*;

    /// Destination-like text: letters, spaces, the marker characters and
    /// some ideographic filler, never digits.
    fn destination_text() -> impl Strategy<Value = String> {
        proptest::string::string_regex("[A-Za-z 　行き駅前()]{0,24}").unwrap()
    }

    proptest! {
        /// Truncation is idempotent.
        #[test]
        fn truncate_idempotent(s in destination_text()) {
            let once = truncate_at_marker(&s);
            prop_assert_eq!(truncate_at_marker(&once), once);
        }

        /// Full cleanup is idempotent when the label is a digit string that
        /// does not occur in the destination text.
        #[test]
        fn clean_idempotent(line in "[0-9]{1,2}", s in destination_text()) {
            let combined = format!("{line} {s}");
            let once = clean_destination(&combined, &line);
            prop_assert_eq!(clean_destination(&once, &line), once.clone());
        }

        /// A cleaned destination that contains the marker ends with it.
        #[test]
        fn ends_with_marker(head in "[A-Za-z ]{0,10}", tail in "[A-Za-z ]{0,10}") {
            let cleaned = truncate_at_marker(&format!("{head}{BOUND_FOR}{tail}"));
            prop_assert!(cleaned.ends_with(BOUND_FOR));
        }
    }
}
