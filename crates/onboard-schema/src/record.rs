//! Row projection for the spreadsheet-append sink
//!
//! A [`SubmissionRecord`] is the derived, read-only projection of a
//! snapshot into the fixed-order row the sheet has always carried:
//! receipt timestamp, the 28 schema fields, then the two derived
//! document links. It is computed at receipt time and never stored on
//! the client.

use crate::fields::HEARING_FIELDS;
use crate::links::DerivedLinks;
use crate::snapshot::{FieldValue, HearingSnapshot};
use chrono::{FixedOffset, Utc};
use serde::{Deserialize, Serialize};

/// Number of row columns: timestamp + schema fields + two links
pub const COLUMN_COUNT: usize = HEARING_FIELDS.len() + 3;

/// Separator used to join multi-valued fields into one display cell
///
/// The full-width comma matches the historical sheet contents.
pub const MULTI_VALUE_SEPARATOR: &str = "\u{3001}";

/// Offset of the sheet's display timezone (UTC+9)
const SHEET_UTC_OFFSET_SECS: i32 = 9 * 3600;

/// Receipt timestamp in the sheet's fixed timezone
///
/// Format `yyyy/MM/dd HH:mm:ss`, computed at receipt time.
#[must_use]
pub fn receipt_timestamp() -> String {
    // 9h east is always a representable offset.
    let Some(offset) = FixedOffset::east_opt(SHEET_UTC_OFFSET_SECS) else {
        return Utc::now().format("%Y/%m/%d %H:%M:%S").to_string();
    };
    Utc::now()
        .with_timezone(&offset)
        .format("%Y/%m/%d %H:%M:%S")
        .to_string()
}

/// One appended row, in fixed column order
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct SubmissionRecord {
    columns: Vec<String>,
}

impl SubmissionRecord {
    /// Project a snapshot into the fixed column order
    ///
    /// Missing fields default to the empty string; multi-valued fields
    /// are joined with [`MULTI_VALUE_SEPARATOR`].
    #[must_use]
    pub fn project(snapshot: &HearingSnapshot, timestamp: String, links: &DerivedLinks) -> Self {
        let mut columns = Vec::with_capacity(COLUMN_COUNT);
        columns.push(timestamp);
        for spec in &HEARING_FIELDS {
            columns.push(display_cell(snapshot.get(spec.name)));
        }
        columns.push(links.resume.clone());
        columns.push(links.contract.clone());
        Self { columns }
    }

    /// Columns in sheet order
    #[inline]
    #[must_use]
    pub fn columns(&self) -> &[String] {
        &self.columns
    }

    /// Cell value by column index
    #[inline]
    #[must_use]
    pub fn column(&self, index: usize) -> Option<&str> {
        self.columns.get(index).map(String::as_str)
    }
}

fn display_cell(value: Option<&FieldValue>) -> String {
    match value {
        Some(FieldValue::Single(value)) => value.clone(),
        Some(FieldValue::Many(values)) => values.join(MULTI_VALUE_SEPARATOR),
        None => String::new(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    fn sample_links() -> DerivedLinks {
        DerivedLinks {
            resume: "https://site/resume.html#e30=".to_string(),
            contract: "https://site/employment_contract.html#e30=".to_string(),
        }
    }

    #[test]
    fn projects_fixed_column_count() {
        let record = SubmissionRecord::project(
            &HearingSnapshot::new(),
            "2026/01/01 09:00:00".to_string(),
            &sample_links(),
        );
        assert_eq!(record.columns().len(), COLUMN_COUNT);
    }

    #[test]
    fn missing_fields_default_to_empty() {
        let record = SubmissionRecord::project(
            &HearingSnapshot::new(),
            "2026/01/01 09:00:00".to_string(),
            &sample_links(),
        );
        // Everything between the timestamp and the links is blank.
        for cell in &record.columns()[1..COLUMN_COUNT - 2] {
            assert_eq!(cell, "");
        }
    }

    #[test]
    fn multi_values_join_with_full_width_comma() {
        let mut snapshot = HearingSnapshot::new();
        snapshot.set_many(
            "car_skills",
            vec!["normal".to_string(), "light".to_string()],
        );
        let record = SubmissionRecord::project(
            &snapshot,
            "2026/01/01 09:00:00".to_string(),
            &sample_links(),
        );
        // car_skills is the 14th schema field, so column 14 after the timestamp.
        assert_eq!(record.column(14), Some("normal\u{3001}light"));
    }

    #[test]
    fn timestamp_leads_and_links_trail() {
        let mut snapshot = HearingSnapshot::new();
        snapshot.set_single("name", "Taro");
        let links = sample_links();
        let record =
            SubmissionRecord::project(&snapshot, "2026/01/01 09:00:00".to_string(), &links);
        assert_eq!(record.column(0), Some("2026/01/01 09:00:00"));
        assert_eq!(record.column(1), Some("Taro"));
        assert_eq!(record.column(COLUMN_COUNT - 2), Some(links.resume.as_str()));
        assert_eq!(
            record.column(COLUMN_COUNT - 1),
            Some(links.contract.as_str())
        );
    }

    #[test]
    fn receipt_timestamp_has_expected_shape() {
        let stamp = receipt_timestamp();
        assert_eq!(stamp.len(), 19);
        assert_eq!(&stamp[4..5], "/");
        assert_eq!(&stamp[10..11], " ");
    }
}
