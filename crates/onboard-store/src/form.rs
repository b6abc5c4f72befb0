//! Hearing form auto-save
//!
//! The snapshot is never merged field-by-field: on every field-change
//! event the UI layer hands over the *entire* current field set and the
//! store rebuilds and overwrites the stored snapshot wholesale.
//! Restoration special-cases the three field kinds.

use crate::storage::{KeyValueStorage, StorageError};
use onboard_schema::{FieldKind, FieldSpec, FieldValue, HearingSnapshot};
use std::sync::Arc;
use tracing::warn;

/// Storage key of the auto-saved form snapshot
pub const FORM_STORAGE_KEY: &str = "hojosya_hearing_data";

/// State of one form control at rebuild time, in field order
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum FieldInput<'a> {
    /// Free text or single select; always captured, last value wins
    Text {
        /// Field name
        name: &'a str,
        /// Current value
        value: &'a str,
    },
    /// One option of an exclusive-choice group; captured only when selected
    Choice {
        /// Field name shared by the group
        name: &'a str,
        /// Option value
        value: &'a str,
        /// Whether this option is currently selected
        selected: bool,
    },
    /// One option of a grouped multi-select; the group always rebuilds
    /// to a list, selected options append in input order
    MultiOption {
        /// Field name shared by the group
        name: &'a str,
        /// Option value
        value: &'a str,
        /// Whether this option is currently selected
        selected: bool,
    },
}

/// Rebuild a snapshot from the entire current field set
///
/// Single-value fields keep the last value seen; a multi-select group
/// rebuilds to the ordered list of its selected option values and is
/// present (possibly empty) as soon as any of its options appears in
/// the input set.
#[must_use]
pub fn rebuild_snapshot<'a, I>(inputs: I) -> HearingSnapshot
where
    I: IntoIterator<Item = FieldInput<'a>>,
{
    let mut snapshot = HearingSnapshot::new();
    for input in inputs {
        match input {
            FieldInput::Text { name, value } => snapshot.set_single(name, value),
            FieldInput::Choice {
                name,
                value,
                selected,
            } => {
                if selected {
                    snapshot.set_single(name, value);
                }
            }
            FieldInput::MultiOption {
                name,
                value,
                selected,
            } => {
                let mut values = snapshot
                    .get(name)
                    .and_then(FieldValue::as_many)
                    .map(|values| values.to_vec())
                    .unwrap_or_default();
                if selected {
                    values.push(value.to_string());
                }
                snapshot.set_many(name, values);
            }
        }
    }
    snapshot
}

/// Restored state of one field, by kind
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum RestoredField<'a> {
    /// Direct value restoration
    Text(Option<&'a str>),
    /// The selected option value, restored by equality match
    SingleChoice(Option<&'a str>),
    /// The selected option set, restored by membership test
    MultiChoice(&'a [String]),
}

impl RestoredField<'_> {
    /// Whether `option` should be marked selected on restore
    #[must_use]
    pub fn selects(&self, option: &str) -> bool {
        match self {
            Self::Text(_) => false,
            Self::SingleChoice(selected) => *selected == Some(option),
            Self::MultiChoice(values) => values.iter().any(|value| value == option),
        }
    }
}

/// Compute the restore state of `spec` from a stored snapshot
#[must_use]
pub fn restore_field<'a>(snapshot: &'a HearingSnapshot, spec: &FieldSpec) -> RestoredField<'a> {
    let value = snapshot.get(spec.name);
    match spec.kind {
        FieldKind::Text => RestoredField::Text(value.and_then(FieldValue::as_single)),
        FieldKind::SingleChoice => {
            RestoredField::SingleChoice(value.and_then(FieldValue::as_single))
        }
        FieldKind::MultiChoice => {
            RestoredField::MultiChoice(value.and_then(FieldValue::as_many).unwrap_or(&[]))
        }
    }
}

/// Store for the auto-saved snapshot under [`FORM_STORAGE_KEY`]
#[derive(Debug)]
pub struct FormStore<S: KeyValueStorage> {
    storage: Arc<S>,
}

impl<S: KeyValueStorage> FormStore<S> {
    /// Create a store over a shared backend
    #[inline]
    #[must_use]
    pub fn new(storage: Arc<S>) -> Self {
        Self { storage }
    }

    /// Load the latest snapshot
    ///
    /// Returns an empty snapshot when the key is absent, the backend
    /// fails, or the stored text does not deserialize. Failures are
    /// logged and never raised to the caller.
    #[must_use]
    pub fn load(&self) -> HearingSnapshot {
        let raw = match self.storage.get(FORM_STORAGE_KEY) {
            Ok(Some(raw)) => raw,
            Ok(None) => return HearingSnapshot::new(),
            Err(err) => {
                warn!(key = FORM_STORAGE_KEY, %err, "form snapshot read failed, starting empty");
                return HearingSnapshot::new();
            }
        };
        match serde_json::from_str(&raw) {
            Ok(snapshot) => snapshot,
            Err(err) => {
                warn!(key = FORM_STORAGE_KEY, %err, "form snapshot corrupted, starting empty");
                HearingSnapshot::new()
            }
        }
    }

    /// Serialize and overwrite the stored snapshot unconditionally
    ///
    /// # Errors
    /// Propagates [`StorageError`] from the backend.
    pub fn save(&self, snapshot: &HearingSnapshot) -> Result<(), StorageError> {
        let raw = serde_json::to_string(snapshot).unwrap_or_else(|_| "{}".to_string());
        self.storage.put(FORM_STORAGE_KEY, &raw)
    }

    /// Remove the form key; the checklist key is untouched
    ///
    /// # Errors
    /// Propagates [`StorageError`] from the backend.
    pub fn reset(&self) -> Result<(), StorageError> {
        self.storage.remove(FORM_STORAGE_KEY)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::storage::MemoryStorage;
    use pretty_assertions::assert_eq;
    use proptest::prelude::*;

    fn store() -> FormStore<MemoryStorage> {
        FormStore::new(Arc::new(MemoryStorage::new()))
    }

    #[test]
    fn load_absent_is_empty() {
        assert!(store().load().is_empty());
    }

    #[test]
    fn load_corrupted_is_empty() {
        let storage = Arc::new(MemoryStorage::new());
        storage.put(FORM_STORAGE_KEY, "[not an object").unwrap();
        assert!(FormStore::new(storage).load().is_empty());
    }

    #[test]
    fn save_then_load_round_trips() {
        let store = store();
        let mut snapshot = HearingSnapshot::new();
        snapshot.set_single("name", "Taro");
        snapshot.set_many("pc_skills", vec!["Word".to_string(), "Excel".to_string()]);
        store.save(&snapshot).unwrap();
        assert_eq!(store.load(), snapshot);
    }

    #[test]
    fn save_overwrites_wholesale() {
        let store = store();
        let mut first = HearingSnapshot::new();
        first.set_single("name", "Taro");
        first.set_single("email", "taro@example.com");
        store.save(&first).unwrap();

        let mut second = HearingSnapshot::new();
        second.set_single("name", "Hanako");
        store.save(&second).unwrap();

        let loaded = store.load();
        assert_eq!(loaded, second);
        assert!(loaded.get("email").is_none());
    }

    #[test]
    fn rebuild_last_text_value_wins() {
        let snapshot = rebuild_snapshot([
            FieldInput::Text {
                name: "name",
                value: "first",
            },
            FieldInput::Text {
                name: "name",
                value: "second",
            },
        ]);
        assert_eq!(
            snapshot.get("name").and_then(FieldValue::as_single),
            Some("second")
        );
    }

    #[test]
    fn rebuild_choice_captures_selected_only() {
        let snapshot = rebuild_snapshot([
            FieldInput::Choice {
                name: "gender",
                value: "male",
                selected: false,
            },
            FieldInput::Choice {
                name: "gender",
                value: "female",
                selected: true,
            },
        ]);
        assert_eq!(
            snapshot.get("gender").and_then(FieldValue::as_single),
            Some("female")
        );
    }

    #[test]
    fn rebuild_multi_options_keep_input_order() {
        let snapshot = rebuild_snapshot([
            FieldInput::MultiOption {
                name: "pc_skills",
                value: "Word",
                selected: true,
            },
            FieldInput::MultiOption {
                name: "pc_skills",
                value: "Excel",
                selected: false,
            },
            FieldInput::MultiOption {
                name: "pc_skills",
                value: "PowerPoint",
                selected: true,
            },
        ]);
        assert_eq!(
            snapshot.get("pc_skills").and_then(FieldValue::as_many),
            Some(&["Word".to_string(), "PowerPoint".to_string()][..])
        );
    }

    #[test]
    fn rebuild_unselected_group_is_empty_list() {
        let snapshot = rebuild_snapshot([FieldInput::MultiOption {
            name: "car_skills",
            value: "normal",
            selected: false,
        }]);
        assert_eq!(
            snapshot.get("car_skills").and_then(FieldValue::as_many),
            Some(&[][..])
        );
    }

    #[test]
    fn restore_multi_choice_by_membership() {
        let mut snapshot = HearingSnapshot::new();
        snapshot.set_many("pc_skills", vec!["A".to_string(), "C".to_string()]);
        let spec = FieldSpec::find("pc_skills").unwrap();
        let restored = restore_field(&snapshot, spec);
        assert!(restored.selects("A"));
        assert!(!restored.selects("B"));
        assert!(restored.selects("C"));
    }

    #[test]
    fn restore_single_choice_by_equality() {
        let mut snapshot = HearingSnapshot::new();
        snapshot.set_single("gender", "female");
        let spec = FieldSpec::find("gender").unwrap();
        let restored = restore_field(&snapshot, spec);
        assert!(restored.selects("female"));
        assert!(!restored.selects("male"));
    }

    #[test]
    fn restore_text_directly() {
        let mut snapshot = HearingSnapshot::new();
        snapshot.set_single("notes", "prefers mornings");
        let spec = FieldSpec::find("notes").unwrap();
        assert_eq!(
            restore_field(&snapshot, spec),
            RestoredField::Text(Some("prefers mornings"))
        );
    }

    #[test]
    fn restore_absent_field_is_unselected() {
        let snapshot = HearingSnapshot::new();
        let spec = FieldSpec::find("pc_skills").unwrap();
        assert!(!restore_field(&snapshot, spec).selects("Word"));
    }

    proptest! {
        // Store round-trip for arbitrary string and list-of-string values.
        #[test]
        fn snapshot_round_trip(
            singles in proptest::collection::vec(("[a-z_]{1,12}", "\\PC{0,24}"), 0..6),
            many in proptest::collection::vec("\\PC{0,12}", 0..5),
        ) {
            let store = store();
            let mut snapshot = HearingSnapshot::new();
            for (name, value) in singles {
                snapshot.set_single(name, value);
            }
            snapshot.set_many("skills", many);
            store.save(&snapshot).unwrap();
            prop_assert_eq!(store.load(), snapshot);
        }
    }
}
