// Copyright 2026 the Rondel Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Ordered labeled datasets.
//!
//! A dataset is the chart's ground truth: an ordered sequence of records
//! whose order determines rendering order and palette assignment. Values
//! only ever feed proportion computation, so the zero-total case is handled
//! here once rather than at every call site.

extern crate alloc;

use alloc::string::String;
use alloc::vec::Vec;

use hashbrown::HashSet;

/// Errors returned when constructing a [`Dataset`].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DatasetError {
    /// Two records share the same id.
    DuplicateId(u64),
    /// A record's value is negative or not finite.
    InvalidValue(u64),
}

/// One labeled numeric record.
#[derive(Debug, Clone, PartialEq)]
pub struct Record {
    /// Identity, unique within a dataset.
    pub id: u64,
    /// Display label; also the filter key.
    pub label: String,
    /// Non-negative magnitude used for proportion computation.
    pub value: f64,
}

impl Record {
    /// Convenience constructor.
    pub fn new(id: u64, label: impl Into<String>, value: f64) -> Self {
        Self {
            id,
            label: label.into(),
            value,
        }
    }
}

/// An ordered sequence of [`Record`]s with unique ids.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Dataset {
    records: Vec<Record>,
}

impl Dataset {
    /// Builds a dataset, validating id uniqueness and value sanity.
    pub fn new(records: Vec<Record>) -> Result<Self, DatasetError> {
        let mut seen: HashSet<u64> = HashSet::with_capacity(records.len());
        for record in &records {
            if !seen.insert(record.id) {
                return Err(DatasetError::DuplicateId(record.id));
            }
            // Rejects NaN as well as negatives.
            if !(record.value >= 0.0 && record.value.is_finite()) {
                return Err(DatasetError::InvalidValue(record.id));
            }
        }
        Ok(Self { records })
    }

    /// An empty dataset.
    pub fn empty() -> Self {
        Self::default()
    }

    /// Builds a dataset from records already known to satisfy the
    /// invariants (a validated dataset's subsequence, for filtering).
    pub(crate) fn from_validated(records: Vec<Record>) -> Self {
        Self { records }
    }

    /// Number of records.
    pub fn len(&self) -> usize {
        self.records.len()
    }

    /// Whether the dataset has no records.
    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }

    /// The records in display order.
    pub fn records(&self) -> &[Record] {
        &self.records
    }

    /// The record at `index`, if in range.
    pub fn get(&self, index: usize) -> Option<&Record> {
        self.records.get(index)
    }

    /// Sum of all record values.
    pub fn total(&self) -> f64 {
        self.records.iter().map(|r| r.value).sum()
    }

    /// The proportion of the total contributed by `index`, in `[0, 1]`.
    ///
    /// Returns `0.0` for an out-of-range index or a zero/empty total, so
    /// degenerate datasets render flat instead of dividing by zero.
    pub fn fraction(&self, index: usize) -> f64 {
        let total = self.total();
        if total <= 0.0 {
            return 0.0;
        }
        self.records.get(index).map_or(0.0, |r| r.value / total)
    }
}

#[cfg(test)]
mod tests {
    extern crate std;

    use alloc::vec;

    use super::*;

    #[test]
    fn duplicate_ids_are_rejected() {
        let err = Dataset::new(vec![Record::new(1, "a", 1.0), Record::new(1, "b", 2.0)])
            .expect_err("duplicate id must be rejected");
        assert_eq!(err, DatasetError::DuplicateId(1));
    }

    #[test]
    fn negative_and_nan_values_are_rejected() {
        let err = Dataset::new(vec![Record::new(1, "a", -1.0)])
            .expect_err("negative value must be rejected");
        assert_eq!(err, DatasetError::InvalidValue(1));

        let err = Dataset::new(vec![Record::new(2, "b", f64::NAN)])
            .expect_err("NaN value must be rejected");
        assert_eq!(err, DatasetError::InvalidValue(2));
    }

    #[test]
    fn fractions_sum_to_one_for_positive_totals() {
        let d = Dataset::new(vec![
            Record::new(0, "a", 10.0),
            Record::new(1, "b", 15.0),
            Record::new(2, "c", 20.0),
        ])
        .expect("valid dataset");

        let sum: f64 = (0..d.len()).map(|i| d.fraction(i)).sum();
        assert!((sum - 1.0).abs() < 1e-12, "fractions sum to 1, got {sum}");
    }

    #[test]
    fn zero_total_yields_zero_fractions() {
        let d = Dataset::new(vec![Record::new(0, "a", 0.0), Record::new(1, "b", 0.0)])
            .expect("all-zero dataset is valid");
        assert_eq!(d.fraction(0), 0.0);
        assert_eq!(d.fraction(1), 0.0);
        assert_eq!(Dataset::empty().fraction(0), 0.0);
    }

    #[test]
    fn out_of_range_fraction_is_zero() {
        let d = Dataset::new(vec![Record::new(0, "a", 5.0)]).expect("valid dataset");
        assert_eq!(d.fraction(7), 0.0);
    }
}
