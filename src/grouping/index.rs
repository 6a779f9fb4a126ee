//! Find-or-insert indexing of a dataset by composite key.

use crate::error::{GroupingError, GroupingResult};
use crate::types::{DataSet, Record};

use super::catalog::KeyCatalog;
use super::key::{KeyFields, KeyTuple};

/// A [`KeyCatalog`] scoped to a backing [`DataSet`], with an ordinal-to-row
/// mapping kept in lockstep with the catalog order.
///
/// The index supports a single operation, [`RecordIndex::find_or_insert`]:
/// probe for a key tuple, and when absent synthesize a blank record carrying
/// the tuple's key values and append it to the backing dataset. Repeated
/// calls with the same tuple return the same row.
///
/// # Example
///
/// ```rust
/// use rust_row_grouping::grouping::{KeyTuple, RecordIndex};
/// use rust_row_grouping::types::{DataSet, DataType, Field, Schema, Value};
///
/// let schema = Schema::new(vec![
///     Field::new("sku", DataType::Utf8),
///     Field::new("qty", DataType::Int64),
/// ]);
/// let mut index = RecordIndex::build(DataSet::empty(schema), &["sku"]).unwrap();
///
/// let probe = KeyTuple::new(vec![Value::Utf8("ab-1".to_string())]);
/// let (row, inserted) = index.find_or_insert(probe.clone()).unwrap();
/// assert!(inserted);
///
/// let (row2, inserted2) = index.find_or_insert(probe).unwrap();
/// assert!(!inserted2);
/// assert_eq!(row, row2);
/// ```
#[derive(Debug, Clone)]
pub struct RecordIndex {
    dataset: DataSet,
    key_fields: KeyFields,
    catalog: KeyCatalog,
    // Ordinal -> row position in `dataset`, parallel to the catalog's
    // sorted tuple order.
    rows: Vec<usize>,
}

impl RecordIndex {
    /// Build an index over `dataset`, keyed by `fields`.
    ///
    /// Existing records seed the catalog; when several share a key, the first
    /// occurrence (storage order) becomes the key's representative row. An
    /// empty `fields` list is accepted here but makes every subsequent
    /// operation fail with [`GroupingError::InvalidState`]; an unknown field
    /// name fails the build with [`GroupingError::UnknownField`].
    pub fn build(dataset: DataSet, fields: &[&str]) -> GroupingResult<Self> {
        let key_fields = KeyFields::resolve_allowing_empty(&dataset.schema, fields)?;
        let mut catalog = KeyCatalog::for_fields(&key_fields);
        let mut rows = Vec::new();

        if key_fields.arity() > 0 {
            for (row, record) in dataset.records.iter().enumerate() {
                let tuple = key_fields.extract(record, false)?;
                let (ordinal, inserted) = catalog.find_or_insert(tuple)?;
                if inserted {
                    rows.insert(ordinal, row);
                }
            }
        }

        Ok(Self {
            dataset,
            key_fields,
            catalog,
            rows,
        })
    }

    /// Probe for `tuple`, inserting a new record when absent.
    ///
    /// Returns the row position of the record carrying the tuple's key
    /// values, plus whether this call created it. A created record is blank
    /// except for the key fields, which are assigned from the tuple, and is
    /// appended to the backing dataset.
    ///
    /// Fails with [`GroupingError::InvalidState`] when the index was built
    /// with no key fields, and [`GroupingError::ArityMismatch`] when the
    /// tuple's length differs from the configured key field count.
    pub fn find_or_insert(&mut self, tuple: KeyTuple) -> GroupingResult<(usize, bool)> {
        if self.key_fields.arity() == 0 {
            return Err(GroupingError::InvalidState {
                message: "record index has no configured key fields".to_string(),
            });
        }

        if let Some(ordinal) = self.catalog.find(&tuple)? {
            return Ok((self.rows[ordinal], false));
        }

        let mut record = self.dataset.blank_record();
        for (field, value) in self.key_fields.fields().iter().zip(tuple.values()) {
            record.set_value(field.index, value.clone());
        }
        let row = self.dataset.row_count();
        self.dataset.push(record);

        let (ordinal, inserted) = self.catalog.find_or_insert(tuple)?;
        debug_assert!(inserted, "tuple was absent under the same catalog state");
        self.rows.insert(ordinal, row);

        Ok((row, true))
    }

    /// The record at `row`, if in range.
    pub fn record(&self, row: usize) -> Option<&Record> {
        self.dataset.records.get(row)
    }

    /// Number of distinct keys currently indexed.
    pub fn key_count(&self) -> usize {
        self.catalog.len()
    }

    /// The backing dataset, including any synthesized records.
    pub fn dataset(&self) -> &DataSet {
        &self.dataset
    }

    /// Consume the index, yielding the backing dataset.
    pub fn into_dataset(self) -> DataSet {
        self.dataset
    }
}
