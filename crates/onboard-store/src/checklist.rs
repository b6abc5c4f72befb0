//! Checklist completion state
//!
//! A flat map from item id to checked flag under one storage key.
//! Presence of a `true` entry is the only signal; there is no ordering.
//! Loads fail soft (corrupted or foreign content reads as empty), saves
//! overwrite unconditionally.

use crate::registry::{ItemRegistry, Progress, SectionProgress};
use crate::storage::{KeyValueStorage, StorageError};
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;
use std::sync::Arc;
use tracing::warn;

/// Storage key of the checklist-completion map
pub const CHECKLIST_STORAGE_KEY: &str = "hojosya_checklist_state";

/// Mapping from item id to checked flag
///
/// Toggling off removes the entry, so the stored object only carries
/// checked items.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct ChecklistState {
    checked: BTreeMap<String, bool>,
}

impl ChecklistState {
    /// Create an empty state
    #[inline]
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Whether `item_id` is currently checked
    #[inline]
    #[must_use]
    pub fn is_checked(&self, item_id: &str) -> bool {
        self.checked.get(item_id).copied().unwrap_or(false)
    }

    /// Flip presence of `item_id`; returns the new checked flag
    pub fn toggle(&mut self, item_id: &str) -> bool {
        if self.checked.remove(item_id).unwrap_or(false) {
            false
        } else {
            self.checked.insert(item_id.to_string(), true);
            true
        }
    }

    /// Number of checked items
    #[inline]
    #[must_use]
    pub fn checked_count(&self) -> usize {
        self.checked.values().filter(|&&checked| checked).count()
    }

    /// Whether nothing is checked
    #[inline]
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.checked.is_empty()
    }

    /// Drop every entry
    pub fn clear(&mut self) {
        self.checked.clear();
    }
}

/// Outcome of a toggle, with the recomputed counters
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ToggleReport {
    /// New checked flag of the toggled item
    pub checked: bool,
    /// Global progress after the toggle
    pub progress: Progress,
    /// Per-section progress after the toggle
    pub sections: Vec<SectionProgress>,
}

/// Store for [`ChecklistState`] under [`CHECKLIST_STORAGE_KEY`]
#[derive(Debug)]
pub struct ChecklistStore<S: KeyValueStorage> {
    storage: Arc<S>,
}

impl<S: KeyValueStorage> ChecklistStore<S> {
    /// Create a store over a shared backend
    #[inline]
    #[must_use]
    pub fn new(storage: Arc<S>) -> Self {
        Self { storage }
    }

    /// Load the current state
    ///
    /// Returns an empty map when the key is absent, the backend fails,
    /// or the stored text does not deserialize. Failures are logged and
    /// never raised to the caller.
    #[must_use]
    pub fn load(&self) -> ChecklistState {
        let raw = match self.storage.get(CHECKLIST_STORAGE_KEY) {
            Ok(Some(raw)) => raw,
            Ok(None) => return ChecklistState::new(),
            Err(err) => {
                warn!(key = CHECKLIST_STORAGE_KEY, %err, "checklist read failed, starting empty");
                return ChecklistState::new();
            }
        };
        match serde_json::from_str(&raw) {
            Ok(state) => state,
            Err(err) => {
                warn!(key = CHECKLIST_STORAGE_KEY, %err, "checklist state corrupted, starting empty");
                ChecklistState::new()
            }
        }
    }

    /// Serialize and overwrite the stored state unconditionally
    ///
    /// # Errors
    /// Propagates [`StorageError`] from the backend.
    pub fn save(&self, state: &ChecklistState) -> Result<(), StorageError> {
        let raw = serde_json::to_string(state).unwrap_or_else(|_| "{}".to_string());
        self.storage.put(CHECKLIST_STORAGE_KEY, &raw)
    }

    /// Flip one item, persist, and recompute the derived counters
    ///
    /// # Errors
    /// Propagates [`StorageError`] if the new state cannot be saved.
    pub fn toggle(
        &self,
        item_id: &str,
        registry: &ItemRegistry,
    ) -> Result<ToggleReport, StorageError> {
        let mut state = self.load();
        let checked = state.toggle(item_id);
        self.save(&state)?;
        Ok(ToggleReport {
            checked,
            progress: registry.progress(&state),
            sections: registry.section_progress(&state),
        })
    }

    /// Remove the checklist key; other keys are untouched
    ///
    /// # Errors
    /// Propagates [`StorageError`] from the backend.
    pub fn reset(&self) -> Result<(), StorageError> {
        self.storage.remove(CHECKLIST_STORAGE_KEY)
    }
}
