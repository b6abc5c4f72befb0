//! Explicit checklist item registry
//!
//! The UI layer owns the list of item descriptors and hands it to the
//! store; derived counters are computed from the registry plus the
//! current state, never from presentation-layer queries. State entries
//! whose id is not registered are preserved in storage but excluded
//! from the counters.

use crate::checklist::ChecklistState;

/// One checklist section with its item ids
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SectionSpec {
    /// Stable section id
    pub id: String,
    /// Display title
    pub title: String,
    /// Item ids in display order
    pub items: Vec<String>,
}

/// Global progress counters
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Progress {
    /// Checked registered items
    pub checked: usize,
    /// Registered items in total
    pub total: usize,
}

impl Progress {
    /// Rounded completion percentage; 0 when no items are registered
    #[must_use]
    #[allow(
        clippy::cast_precision_loss,
        clippy::cast_possible_truncation,
        clippy::cast_sign_loss
    )]
    pub fn percent(&self) -> u32 {
        if self.total == 0 {
            return 0;
        }
        ((self.checked as f64 / self.total as f64) * 100.0).round() as u32
    }
}

/// Per-section progress counters
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SectionProgress {
    /// Section id
    pub section_id: String,
    /// Checked items in the section
    pub checked: usize,
    /// Items in the section
    pub total: usize,
    /// Whether every item in the section is checked
    pub complete: bool,
}

/// Registry of checklist item descriptors
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ItemRegistry {
    sections: Vec<SectionSpec>,
}

impl ItemRegistry {
    /// Create an empty registry
    #[inline]
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Append a section with its item ids
    #[must_use]
    pub fn with_section<I, T>(mut self, id: &str, title: &str, items: I) -> Self
    where
        I: IntoIterator<Item = T>,
        T: Into<String>,
    {
        self.sections.push(SectionSpec {
            id: id.to_string(),
            title: title.to_string(),
            items: items.into_iter().map(Into::into).collect(),
        });
        self
    }

    /// Registered sections in display order
    #[inline]
    #[must_use]
    pub fn sections(&self) -> &[SectionSpec] {
        &self.sections
    }

    /// Iterate over every registered item id
    pub fn item_ids(&self) -> impl Iterator<Item = &str> {
        self.sections
            .iter()
            .flat_map(|section| section.items.iter().map(String::as_str))
    }

    /// Total registered item count
    #[must_use]
    pub fn total_items(&self) -> usize {
        self.sections.iter().map(|section| section.items.len()).sum()
    }

    /// Whether `item_id` is registered in any section
    #[must_use]
    pub fn contains(&self, item_id: &str) -> bool {
        self.item_ids().any(|id| id == item_id)
    }

    /// Global progress for a state
    #[must_use]
    pub fn progress(&self, state: &ChecklistState) -> Progress {
        let checked = self.item_ids().filter(|id| state.is_checked(id)).count();
        Progress {
            checked,
            total: self.total_items(),
        }
    }

    /// Per-section progress for a state
    #[must_use]
    pub fn section_progress(&self, state: &ChecklistState) -> Vec<SectionProgress> {
        self.sections
            .iter()
            .map(|section| {
                let checked = section
                    .items
                    .iter()
                    .filter(|id| state.is_checked(id))
                    .count();
                let total = section.items.len();
                SectionProgress {
                    section_id: section.id.clone(),
                    checked,
                    total,
                    complete: total > 0 && checked == total,
                }
            })
            .collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn registry() -> ItemRegistry {
        ItemRegistry::new()
            .with_section("docs", "Documents", ["seal", "bank_book", "my_number"])
            .with_section("env", "Environment", ["pc_account"])
    }

    #[test]
    fn empty_registry_has_zero_percent() {
        let progress = ItemRegistry::new().progress(&ChecklistState::new());
        assert_eq!(progress.total, 0);
        assert_eq!(progress.percent(), 0);
    }

    #[test]
    fn percent_rounds() {
        let registry = registry();
        let mut state = ChecklistState::new();
        state.toggle("seal");
        // 1 of 4 => 25
        assert_eq!(registry.progress(&state).percent(), 25);
        state.toggle("bank_book");
        state.toggle("my_number");
        // 3 of 4 => 75
        assert_eq!(registry.progress(&state).percent(), 75);
    }

    #[test]
    fn percent_rounds_half_up() {
        let registry = ItemRegistry::new().with_section("s", "S", ["a", "b", "c"]);
        let mut state = ChecklistState::new();
        state.toggle("a");
        // 1 of 3 => 33.33 => 33
        assert_eq!(registry.progress(&state).percent(), 33);
        state.toggle("b");
        // 2 of 3 => 66.67 => 67
        assert_eq!(registry.progress(&state).percent(), 67);
    }

    #[test]
    fn unregistered_items_do_not_count() {
        let registry = registry();
        let mut state = ChecklistState::new();
        state.toggle("unknown_item");
        assert_eq!(registry.progress(&state).checked, 0);
    }

    #[test]
    fn section_progress_flags_completion() {
        let registry = registry();
        let mut state = ChecklistState::new();
        state.toggle("pc_account");
        let sections = registry.section_progress(&state);
        assert_eq!(sections.len(), 2);
        assert!(!sections[0].complete);
        assert!(sections[1].complete);
        assert_eq!(sections[1].checked, 1);
    }
}
