//! Onboard Store
//!
//! The local persistence layer between UI state and browser-style
//! key-value storage: a checklist-completion map and an auto-saved form
//! snapshot, each under its own storage key, both read back in full on
//! every access.
//!
//! # Core Concepts
//!
//! - [`KeyValueStorage`]: the storage seam (in-memory or one file per
//!   key); values are JSON text
//! - [`ChecklistStore`] / [`FormStore`]: soft-loading, last-write-wins
//!   stores over the two keys
//! - [`ItemRegistry`]: the explicit list of checklist item descriptors;
//!   the store never reaches into the presentation layer
//! - [`LocalStateStore`]: facade bundling both stores with the registry
//!
//! # Example
//!
//! ```rust,ignore
//! use onboard_store::{ItemRegistry, LocalStateStore, MemoryStorage};
//!
//! let registry = ItemRegistry::new()
//!     .with_section("docs", "Documents", ["seal", "bank_book"]);
//! let store = LocalStateStore::new(MemoryStorage::new(), registry);
//!
//! let report = store.toggle("seal")?;
//! assert!(report.checked);
//! assert_eq!(report.progress.percent(), 50);
//! ```

#![warn(unreachable_pub)]
#![allow(missing_docs)]

// Core modules
mod checklist;
mod form;
mod registry;
mod storage;

// Re-exports
pub use checklist::{ChecklistState, ChecklistStore, ToggleReport, CHECKLIST_STORAGE_KEY};
pub use form::{
    rebuild_snapshot, restore_field, FieldInput, FormStore, RestoredField, FORM_STORAGE_KEY,
};
pub use registry::{ItemRegistry, Progress, SectionProgress, SectionSpec};
pub use storage::{DirStorage, KeyValueStorage, MemoryStorage, StorageError};

use onboard_schema::HearingSnapshot;
use std::sync::Arc;

/// Facade over the two storage keys and the item registry
///
/// Checklist state and form snapshot are independent; clearing one never
/// touches the other unless [`reset_all`](Self::reset_all) is invoked.
#[derive(Debug)]
pub struct LocalStateStore<S: KeyValueStorage> {
    checklist: ChecklistStore<S>,
    form: FormStore<S>,
    registry: ItemRegistry,
}

impl<S: KeyValueStorage> LocalStateStore<S> {
    /// Create a store bundle over one shared backend
    #[must_use]
    pub fn new(storage: S, registry: ItemRegistry) -> Self {
        let storage = Arc::new(storage);
        Self {
            checklist: ChecklistStore::new(Arc::clone(&storage)),
            form: FormStore::new(storage),
            registry,
        }
    }

    /// Checklist store
    #[inline]
    #[must_use]
    pub fn checklist(&self) -> &ChecklistStore<S> {
        &self.checklist
    }

    /// Form snapshot store
    #[inline]
    #[must_use]
    pub fn form(&self) -> &FormStore<S> {
        &self.form
    }

    /// Item registry
    #[inline]
    #[must_use]
    pub fn registry(&self) -> &ItemRegistry {
        &self.registry
    }

    /// Flip one item and recompute the derived counters
    ///
    /// # Errors
    /// Propagates [`StorageError`] if the flipped state cannot be saved.
    pub fn toggle(&self, item_id: &str) -> Result<ToggleReport, StorageError> {
        self.checklist.toggle(item_id, &self.registry)
    }

    /// Current global progress
    #[must_use]
    pub fn progress(&self) -> Progress {
        self.registry.progress(&self.checklist.load())
    }

    /// Clear the checklist key only; the form snapshot is untouched
    ///
    /// # Errors
    /// Propagates [`StorageError`] from the backend.
    pub fn reset_checklist(&self) -> Result<(), StorageError> {
        self.checklist.reset()
    }

    /// Clear both storage keys
    ///
    /// Subsequent loads of either state return an empty mapping.
    ///
    /// # Errors
    /// Propagates [`StorageError`] from the backend.
    pub fn reset_all(&self) -> Result<(), StorageError> {
        self.checklist.reset()?;
        self.form.reset()
    }

    /// Load the auto-saved snapshot (empty on absence or corruption)
    #[must_use]
    pub fn load_snapshot(&self) -> HearingSnapshot {
        self.form.load()
    }

    /// Persist the latest whole-form snapshot (last write wins)
    ///
    /// # Errors
    /// Propagates [`StorageError`] from the backend.
    pub fn save_snapshot(&self, snapshot: &HearingSnapshot) -> Result<(), StorageError> {
        self.form.save(snapshot)
    }
}
