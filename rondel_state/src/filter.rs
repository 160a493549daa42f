// Copyright 2026 the Rondel Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Label filtering over a fixed master dataset.
//!
//! The selector owns only the selection set; the master dataset stays with
//! the composer. Instead of a callback threaded down the widget tree, each
//! effective toggle returns a [`DatasetUpdate`] message for the parent to
//! consume — exactly one per toggle, none for unknown labels.

extern crate alloc;

use alloc::string::String;
use alloc::vec::Vec;

use hashbrown::HashSet;

use crate::dataset::Dataset;

/// Message emitted upstream after an effective filter toggle.
#[derive(Debug, Clone, PartialEq)]
pub struct DatasetUpdate {
    /// The master dataset restricted to the selected labels, master order
    /// preserved.
    pub dataset: Dataset,
}

/// A checkbox-style selector over the labels of a master dataset.
///
/// The known-label list is fixed at construction (master order, first
/// occurrence wins for duplicate labels). Toggling an unknown label is a
/// silent no-op.
#[derive(Debug, Clone)]
pub struct FilterSelector {
    labels: Vec<String>,
    selected: HashSet<String>,
}

impl FilterSelector {
    /// Creates a selector over `master`'s labels with everything selected.
    pub fn all_selected(master: &Dataset) -> Self {
        let mut labels: Vec<String> = Vec::new();
        for record in master.records() {
            if !labels.contains(&record.label) {
                labels.push(record.label.clone());
            }
        }
        let selected = labels.iter().cloned().collect();
        Self { labels, selected }
    }

    /// The known labels in master order.
    pub fn labels(&self) -> &[String] {
        &self.labels
    }

    /// Whether `label` is currently selected.
    pub fn is_selected(&self, label: &str) -> bool {
        self.selected.contains(label)
    }

    /// Flips `label`'s selection and emits the resulting filtered dataset.
    ///
    /// Returns `None` (and changes nothing) when `label` is not a known
    /// label. Otherwise returns exactly one [`DatasetUpdate`] carrying
    /// `master` restricted to the new selection.
    pub fn toggle(&mut self, label: &str, master: &Dataset) -> Option<DatasetUpdate> {
        if !self.labels.iter().any(|l| l == label) {
            return None;
        }
        if !self.selected.remove(label) {
            self.selected.insert(String::from(label));
        }
        Some(DatasetUpdate {
            dataset: self.apply(master),
        })
    }

    /// Restricts `master` to the selected labels, preserving master order.
    ///
    /// Applying the same selection twice yields the same dataset as once.
    pub fn apply(&self, master: &Dataset) -> Dataset {
        let records = master
            .records()
            .iter()
            .filter(|r| self.selected.contains(r.label.as_str()))
            .cloned()
            .collect();
        Dataset::from_validated(records)
    }
}

#[cfg(test)]
mod tests {
    extern crate std;

    use alloc::vec;
    use alloc::vec::Vec;

    use super::*;
    use crate::dataset::Record;

    fn fruit() -> Dataset {
        Dataset::new(vec![
            Record::new(0, "Apple", 10.0),
            Record::new(1, "Banana", 15.0),
            Record::new(2, "Cherry", 20.0),
        ])
        .expect("valid dataset")
    }

    #[test]
    fn starts_with_all_labels_selected() {
        let master = fruit();
        let selector = FilterSelector::all_selected(&master);
        assert_eq!(selector.labels().len(), 3);
        assert!(selector.labels().iter().all(|l| selector.is_selected(l)));
        assert_eq!(selector.apply(&master), master);
    }

    #[test]
    fn toggle_removes_then_restores_a_label() {
        let master = fruit();
        let mut selector = FilterSelector::all_selected(&master);

        let update = selector.toggle("Banana", &master).expect("known label");
        let labels: Vec<_> = update.dataset.records().iter().map(|r| &r.label).collect();
        assert_eq!(labels, ["Apple", "Cherry"]);

        let update = selector.toggle("Banana", &master).expect("known label");
        assert_eq!(update.dataset, master);
    }

    #[test]
    fn unknown_label_is_a_silent_noop() {
        let master = fruit();
        let mut selector = FilterSelector::all_selected(&master);
        assert!(selector.toggle("Durian", &master).is_none());
        assert_eq!(selector.apply(&master), master);
    }

    #[test]
    fn apply_is_idempotent() {
        let master = fruit();
        let mut selector = FilterSelector::all_selected(&master);
        selector.toggle("Apple", &master);

        let once = selector.apply(&master);
        let twice = selector.apply(&once);
        assert_eq!(once, twice);
    }

    #[test]
    fn emitted_records_are_always_selected() {
        let master = fruit();
        let mut selector = FilterSelector::all_selected(&master);
        selector.toggle("Cherry", &master);

        let filtered = selector.apply(&master);
        assert!(
            filtered
                .records()
                .iter()
                .all(|r| selector.is_selected(&r.label)),
            "filtered output must stay inside the selection"
        );
    }
}
