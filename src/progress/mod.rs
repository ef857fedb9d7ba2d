//! Section completion tracking

pub mod curriculum;

use std::collections::HashSet;

pub use curriculum::{SECTIONS, Section};

/// Completed sections and the derived completion percentage
///
/// Any id is accepted, but only ids from the canonical section list count
/// towards the percentage, so it reaches 100 exactly when every section is done.
#[derive(Debug, Clone)]
pub struct ProgressStore {
    sections: Vec<&'static str>,
    completed: HashSet<String>,
}

impl Default for ProgressStore {
    fn default() -> Self {
        Self::new()
    }
}

impl ProgressStore {
    /// Store tracking the six course sections
    pub fn new() -> Self {
        Self::with_sections(SECTIONS.iter().map(|s| s.id).collect())
    }

    /// Store tracking a custom section list
    pub fn with_sections(sections: Vec<&'static str>) -> Self {
        Self { sections, completed: HashSet::new() }
    }

    /// Mark a section complete; returns false if it already was
    pub fn complete_section(&mut self, section_id: &str) -> bool {
        if self.completed.contains(section_id) {
            return false;
        }

        if !self.sections.iter().any(|id| *id == section_id) {
            tracing::debug!(section_id, "completing section outside the course outline");
        }
        tracing::info!(section_id, "section completed");
        self.completed.insert(section_id.to_string());
        true
    }

    /// Whether a section has been completed
    pub fn is_completed(&self, section_id: &str) -> bool {
        self.completed.contains(section_id)
    }

    /// Completion percentage in `[0, 100]`
    pub fn progress(&self) -> f64 {
        if self.sections.is_empty() {
            return 0.0;
        }
        let done = self.sections.iter().filter(|id| self.completed.contains(**id)).count();
        (100.0 * done as f64 / self.sections.len() as f64).min(100.0)
    }

    /// Number of completed ids (including ids outside the outline)
    pub fn completed_count(&self) -> usize {
        self.completed.len()
    }

    /// Completed ids, in no particular order
    pub fn completed_sections(&self) -> impl Iterator<Item = &str> {
        self.completed.iter().map(String::as_str)
    }

    /// Section ids that count towards the percentage
    pub fn sections(&self) -> &[&'static str] {
        &self.sections
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use proptest::prelude::*;

    #[test]
    fn fresh_store_has_no_progress() {
        let store = ProgressStore::new();
        assert_eq!(store.progress(), 0.0);
        assert_eq!(store.completed_count(), 0);
    }

    #[test]
    fn completing_twice_is_idempotent() {
        let mut store = ProgressStore::new();
        assert!(store.complete_section("types"));
        assert!(!store.complete_section("types"));
        assert!(store.complete_section("vectors"));

        assert_eq!(store.completed_count(), 2);
        let mut completed: Vec<&str> = store.completed_sections().collect();
        completed.sort_unstable();
        assert_eq!(completed, vec!["types", "vectors"]);
        assert!((store.progress() - 100.0 * 2.0 / 6.0).abs() < 1e-9);
    }

    #[test]
    fn all_sections_reach_exactly_one_hundred() {
        let mut store = ProgressStore::new();
        for (i, section) in SECTIONS.iter().enumerate() {
            assert!(store.progress() < 100.0, "already full after {} sections", i);
            store.complete_section(section.id);
        }
        assert_eq!(store.progress(), 100.0);
    }

    #[test]
    fn unknown_ids_are_kept_but_do_not_count() {
        let mut store = ProgressStore::new();
        for id in ["a", "b", "c", "d", "e", "f", "g"] {
            store.complete_section(id);
        }
        assert!(store.is_completed("a"));
        assert_eq!(store.completed_count(), 7);
        assert_eq!(store.progress(), 0.0);
    }

    #[test]
    fn empty_outline_has_no_progress() {
        let mut store = ProgressStore::with_sections(Vec::new());
        store.complete_section("types");
        assert_eq!(store.progress(), 0.0);
    }

    proptest! {
        #[test]
        fn progress_never_decreases(picks in prop::collection::vec(0usize..8, 0..40)) {
            let mut store = ProgressStore::new();
            let mut previous = (store.progress(), store.completed_count());
            for pick in picks {
                let id = SECTIONS.get(pick).map_or("extra", |s| s.id);
                store.complete_section(id);
                let current = (store.progress(), store.completed_count());
                prop_assert!(current.0 >= previous.0);
                prop_assert!(current.1 >= previous.1);
                prop_assert!(current.0 <= 100.0);
                previous = current;
            }
        }
    }
}
