//! The key catalog: an ordered collection of distinct key tuples.
//!
//! The catalog is the primitive behind grouping, deduplication, and
//! find-or-insert. It keeps its tuples in ascending composite order (first
//! key field most significant) in a plain sorted vector and locates tuples by
//! binary search, so `find`/`find_or_insert` are `O(log k)` comparisons over
//! `k` distinct keys.
//!
//! Ordinals are positions in sorted order. They are **not** stable across
//! further insertions: a tuple inserted later can sort before existing
//! entries and shift them. Callers that need a frozen numbering must finish
//! inserting first (the two-pass grouping in [`crate::grouping::group_by`]
//! relies on exactly this).

use std::cmp::Ordering;

use crate::error::{GroupingError, GroupingResult};

use super::key::{compare_tuples, KeyFields, KeyTuple};

/// An ordered set of distinct [`KeyTuple`]s, created fresh per engine call.
#[derive(Debug, Clone)]
pub struct KeyCatalog {
    key_names: Vec<String>,
    tuples: Vec<KeyTuple>,
}

impl KeyCatalog {
    /// Create an empty catalog configured for the given key field names.
    ///
    /// The tuple arity accepted by `find`/`find_or_insert` is
    /// `key_names.len()`; the names are also used in type-mismatch
    /// diagnostics.
    pub fn new(key_names: Vec<String>) -> Self {
        Self {
            key_names,
            tuples: Vec::new(),
        }
    }

    /// Create an empty catalog configured for resolved key fields.
    pub fn for_fields(fields: &KeyFields) -> Self {
        Self::new(fields.names())
    }

    /// Configured tuple arity.
    pub fn arity(&self) -> usize {
        self.key_names.len()
    }

    /// Number of distinct tuples currently in the catalog.
    pub fn len(&self) -> usize {
        self.tuples.len()
    }

    /// Returns `true` if the catalog holds no tuples.
    pub fn is_empty(&self) -> bool {
        self.tuples.is_empty()
    }

    /// The tuple at `ordinal`, if in range.
    pub fn tuple(&self, ordinal: usize) -> Option<&KeyTuple> {
        self.tuples.get(ordinal)
    }

    /// Consume the catalog, yielding its tuples in ascending order.
    pub fn into_tuples(self) -> Vec<KeyTuple> {
        self.tuples
    }

    /// Locate `tuple`, returning its current ordinal if present.
    pub fn find(&self, tuple: &KeyTuple) -> GroupingResult<Option<usize>> {
        Ok(self.locate(tuple)?.ok())
    }

    /// Locate `tuple`, inserting it if absent.
    ///
    /// Returns the tuple's ordinal and whether this call inserted it.
    /// Idempotent: a present tuple is returned with `false` and the catalog
    /// is unchanged.
    pub fn find_or_insert(&mut self, tuple: KeyTuple) -> GroupingResult<(usize, bool)> {
        match self.locate(&tuple)? {
            Ok(ordinal) => Ok((ordinal, false)),
            Err(insert_at) => {
                self.tuples.insert(insert_at, tuple);
                Ok((insert_at, true))
            }
        }
    }

    /// Binary search with the composite comparator.
    ///
    /// `Ok(ordinal)` when present, `Err(position)` where the tuple would be
    /// inserted to keep ascending order.
    fn locate(&self, tuple: &KeyTuple) -> GroupingResult<Result<usize, usize>> {
        if tuple.arity() != self.arity() {
            return Err(GroupingError::ArityMismatch {
                expected: self.arity(),
                got: tuple.arity(),
            });
        }

        let mut lo = 0usize;
        let mut hi = self.tuples.len();
        while lo < hi {
            let mid = lo + (hi - lo) / 2;
            match compare_tuples(&self.key_names, &self.tuples[mid], tuple)? {
                Ordering::Less => lo = mid + 1,
                Ordering::Greater => hi = mid,
                Ordering::Equal => return Ok(Ok(mid)),
            }
        }
        Ok(Err(lo))
    }
}
