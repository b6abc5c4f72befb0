//! Form snapshot wire type
//!
//! [`HearingSnapshot`] is the complete current value of all form fields,
//! captured as one unit. It serializes to a flat JSON object mapping
//! field names to either a string or a string array, which is the shape
//! the storage keys and the endpoint have always carried.

use crate::fields::REQUIRED_FIELDS;
use indexmap::IndexMap;
use serde::{Deserialize, Serialize};

/// A single field value: one string, or an ordered list for grouped
/// multi-select fields
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum FieldValue {
    /// Single-valued field
    Single(String),
    /// Multi-valued field, in input order
    Many(Vec<String>),
}

impl FieldValue {
    /// Single value, if this is a single-valued field
    #[inline]
    #[must_use]
    pub fn as_single(&self) -> Option<&str> {
        match self {
            Self::Single(value) => Some(value),
            Self::Many(_) => None,
        }
    }

    /// Values of a multi-valued field
    #[inline]
    #[must_use]
    pub fn as_many(&self) -> Option<&[String]> {
        match self {
            Self::Single(_) => None,
            Self::Many(values) => Some(values),
        }
    }
}

impl From<&str> for FieldValue {
    fn from(value: &str) -> Self {
        Self::Single(value.to_string())
    }
}

impl From<Vec<String>> for FieldValue {
    fn from(values: Vec<String>) -> Self {
        Self::Many(values)
    }
}

/// Validation failure raised before any submission I/O
#[derive(Debug, Clone, thiserror::Error)]
pub enum ValidationError {
    /// A required field is absent, blank, or not single-valued
    #[error("required field missing or blank: {field}")]
    MissingField {
        /// Name of the offending field
        field: &'static str,
    },
}

/// The complete current value of all form fields
///
/// Created empty and fully overwritten on every rebuild; never merged
/// field-by-field. Field order is insertion order so the row projection
/// and stored JSON stay stable.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct HearingSnapshot {
    fields: IndexMap<String, FieldValue>,
}

impl HearingSnapshot {
    /// Create an empty snapshot
    #[inline]
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Number of captured fields
    #[inline]
    #[must_use]
    pub fn len(&self) -> usize {
        self.fields.len()
    }

    /// Whether no field has been captured
    #[inline]
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.fields.is_empty()
    }

    /// Value of a field, if captured
    #[inline]
    #[must_use]
    pub fn get(&self, name: &str) -> Option<&FieldValue> {
        self.fields.get(name)
    }

    /// Set a single-valued field (last write wins)
    pub fn set_single(&mut self, name: impl Into<String>, value: impl Into<String>) {
        self.fields
            .insert(name.into(), FieldValue::Single(value.into()));
    }

    /// Set a multi-valued field, replacing any previous value
    pub fn set_many(&mut self, name: impl Into<String>, values: Vec<String>) {
        self.fields.insert(name.into(), FieldValue::Many(values));
    }

    /// Remove a field
    pub fn remove(&mut self, name: &str) -> Option<FieldValue> {
        self.fields.shift_remove(name)
    }

    /// Iterate over fields in capture order
    pub fn iter(&self) -> impl Iterator<Item = (&str, &FieldValue)> {
        self.fields.iter().map(|(name, value)| (name.as_str(), value))
    }

    /// Whether `option` is among the captured values of `name`
    ///
    /// Membership test for `Many`, equality for `Single`.
    #[must_use]
    pub fn contains_option(&self, name: &str, option: &str) -> bool {
        match self.fields.get(name) {
            Some(FieldValue::Many(values)) => values.iter().any(|v| v == option),
            Some(FieldValue::Single(value)) => value == option,
            None => false,
        }
    }

    /// Check the required-field precondition
    ///
    /// Every required field must be present, single-valued and non-empty
    /// after trimming whitespace. Checked on both sides of the wire.
    ///
    /// # Errors
    /// Returns the first [`ValidationError::MissingField`] encountered,
    /// in schema order.
    pub fn validate(&self) -> Result<(), ValidationError> {
        for name in REQUIRED_FIELDS {
            let present = self
                .get(name)
                .and_then(FieldValue::as_single)
                .is_some_and(|value| !value.trim().is_empty());
            if !present {
                return Err(ValidationError::MissingField { field: name });
            }
        }
        Ok(())
    }
}

impl FromIterator<(String, FieldValue)> for HearingSnapshot {
    fn from_iter<I: IntoIterator<Item = (String, FieldValue)>>(iter: I) -> Self {
        Self {
            fields: iter.into_iter().collect(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    fn valid_snapshot() -> HearingSnapshot {
        let mut snapshot = HearingSnapshot::new();
        snapshot.set_single("name", "Taro");
        snapshot.set_single("address", "Tokyo");
        snapshot.set_single("phone", "0312345678");
        snapshot
    }

    #[test]
    fn empty_snapshot_fails_validation() {
        let err = HearingSnapshot::new().validate().unwrap_err();
        assert!(matches!(err, ValidationError::MissingField { field: "name" }));
    }

    #[test]
    fn valid_snapshot_passes() {
        assert!(valid_snapshot().validate().is_ok());
    }

    #[test]
    fn blank_required_field_fails() {
        let mut snapshot = valid_snapshot();
        snapshot.set_single("name", "");
        assert!(snapshot.validate().is_err());
    }

    #[test]
    fn whitespace_only_required_field_fails() {
        let mut snapshot = valid_snapshot();
        snapshot.set_single("name", "   ");
        assert!(matches!(
            snapshot.validate().unwrap_err(),
            ValidationError::MissingField { field: "name" }
        ));
    }

    #[test]
    fn list_valued_required_field_fails() {
        let mut snapshot = valid_snapshot();
        snapshot.set_many("phone", vec!["0312345678".to_string()]);
        assert!(matches!(
            snapshot.validate().unwrap_err(),
            ValidationError::MissingField { field: "phone" }
        ));
    }

    #[test]
    fn serializes_to_flat_object() {
        let mut snapshot = valid_snapshot();
        snapshot.set_many("pc_skills", vec!["Word".to_string(), "Excel".to_string()]);
        let json = serde_json::to_value(&snapshot).unwrap();
        assert_eq!(
            json,
            serde_json::json!({
                "name": "Taro",
                "address": "Tokyo",
                "phone": "0312345678",
                "pc_skills": ["Word", "Excel"],
            })
        );
    }

    #[test]
    fn deserializes_strings_and_arrays() {
        let snapshot: HearingSnapshot = serde_json::from_str(
            r#"{"name":"Taro","car_skills":["normal","light"],"notes":""}"#,
        )
        .unwrap();
        assert_eq!(snapshot.get("name"), Some(&FieldValue::Single("Taro".into())));
        assert_eq!(
            snapshot.get("car_skills").and_then(FieldValue::as_many),
            Some(&["normal".to_string(), "light".to_string()][..])
        );
    }

    #[test]
    fn round_trips_preserving_order() {
        let mut snapshot = HearingSnapshot::new();
        snapshot.set_single("b_field", "2");
        snapshot.set_single("a_field", "1");
        snapshot.set_many("skills", vec!["A".to_string(), "C".to_string()]);

        let json = serde_json::to_string(&snapshot).unwrap();
        let restored: HearingSnapshot = serde_json::from_str(&json).unwrap();
        assert_eq!(restored, snapshot);
        let order: Vec<_> = restored.iter().map(|(name, _)| name).collect();
        assert_eq!(order, ["b_field", "a_field", "skills"]);
    }

    #[test]
    fn contains_option_is_membership_not_substring() {
        let mut snapshot = HearingSnapshot::new();
        snapshot.set_many("skills", vec!["AB".to_string()]);
        assert!(snapshot.contains_option("skills", "AB"));
        assert!(!snapshot.contains_option("skills", "A"));
    }
}
