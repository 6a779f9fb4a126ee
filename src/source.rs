//! Uniform record enumeration over heterogeneous inputs.
//!
//! The grouping engine accepts three input shapes through one iteration
//! contract, [`RecordSource`]:
//!
//! - a full [`DataSet`] (storage order),
//! - a [`ViewSource`]: a dataset plus an explicit row-order index list
//!   (filtered and/or re-sorted views),
//! - a [`RecordSlice`]: an arbitrary caller-supplied collection of records.
//!
//! The adapter is chosen at construction time; the engine never inspects the
//! concrete input shape at runtime. Traversal order is whatever the source
//! yields, which is what "first occurrence" means for
//! [`crate::grouping::unique_by`].

use crate::types::{DataSet, Record, Schema};

/// Read-only enumeration contract consumed by the grouping engine.
///
/// Implementations must yield a stable order for the duration of one engine
/// call; the engine iterates a source twice when grouping. Mutating the
/// underlying collection mid-call is not supported.
pub trait RecordSource {
    /// Schema shared by all yielded records.
    fn schema(&self) -> &Schema;

    /// Number of records the source yields.
    fn len(&self) -> usize;

    /// The record at traversal position `pos` (`0..len()`).
    fn record(&self, pos: usize) -> &Record;

    /// Returns `true` if the source yields no records.
    fn is_empty(&self) -> bool {
        self.len() == 0
    }
}

/// A full dataset is a source in storage order.
impl RecordSource for DataSet {
    fn schema(&self) -> &Schema {
        &self.schema
    }

    fn len(&self) -> usize {
        self.records.len()
    }

    fn record(&self, pos: usize) -> &Record {
        &self.records[pos]
    }
}

/// A filtered and/or re-ordered view over a borrowed [`DataSet`].
///
/// The view holds an index list into the dataset's records; traversal order
/// is the index list order, which makes views the way to feed the engine a
/// pre-established order other than raw storage order.
#[derive(Debug, Clone)]
pub struct ViewSource<'a> {
    dataset: &'a DataSet,
    order: Vec<usize>,
}

impl<'a> ViewSource<'a> {
    /// Build a view from an explicit row-order index list.
    ///
    /// Indexes must be in range for `dataset`; out-of-range positions panic
    /// on access, like slice indexing.
    pub fn with_order(dataset: &'a DataSet, order: Vec<usize>) -> Self {
        Self { dataset, order }
    }

    /// Build a view containing only records matching `predicate`, in storage
    /// order.
    pub fn filtered<F>(dataset: &'a DataSet, mut predicate: F) -> Self
    where
        F: FnMut(&Record) -> bool,
    {
        let order = dataset
            .records
            .iter()
            .enumerate()
            .filter(|(_, rec)| predicate(rec))
            .map(|(i, _)| i)
            .collect();
        Self { dataset, order }
    }

    /// Build a view over all records, re-sorted by `compare`.
    ///
    /// The sort is stable, so ties keep storage order.
    pub fn sorted_by<F>(dataset: &'a DataSet, mut compare: F) -> Self
    where
        F: FnMut(&Record, &Record) -> std::cmp::Ordering,
    {
        let mut order: Vec<usize> = (0..dataset.records.len()).collect();
        order.sort_by(|&a, &b| compare(&dataset.records[a], &dataset.records[b]));
        Self { dataset, order }
    }

    /// The row-order index list backing this view.
    pub fn order(&self) -> &[usize] {
        &self.order
    }
}

impl RecordSource for ViewSource<'_> {
    fn schema(&self) -> &Schema {
        &self.dataset.schema
    }

    fn len(&self) -> usize {
        self.order.len()
    }

    fn record(&self, pos: usize) -> &Record {
        &self.dataset.records[self.order[pos]]
    }
}

/// An arbitrary caller-supplied record collection with an explicit schema.
#[derive(Debug, Clone)]
pub struct RecordSlice<'a> {
    schema: &'a Schema,
    records: &'a [Record],
}

impl<'a> RecordSlice<'a> {
    /// Wrap a slice of records sharing `schema`.
    pub fn new(schema: &'a Schema, records: &'a [Record]) -> Self {
        Self { schema, records }
    }
}

impl RecordSource for RecordSlice<'_> {
    fn schema(&self) -> &Schema {
        self.schema
    }

    fn len(&self) -> usize {
        self.records.len()
    }

    fn record(&self, pos: usize) -> &Record {
        &self.records[pos]
    }
}

#[cfg(test)]
mod tests {
    use super::{RecordSlice, RecordSource, ViewSource};
    use crate::types::{DataSet, DataType, Field, Record, Schema, Value};

    fn sample_dataset() -> DataSet {
        let schema = Schema::new(vec![
            Field::new("id", DataType::Int64),
            Field::new("active", DataType::Bool),
        ]);
        DataSet::from_rows(
            schema,
            vec![
                vec![Value::Int64(1), Value::Bool(true)],
                vec![Value::Int64(2), Value::Bool(false)],
                vec![Value::Int64(3), Value::Bool(true)],
            ],
        )
    }

    #[test]
    fn dataset_is_a_source_in_storage_order() {
        let ds = sample_dataset();
        assert_eq!(ds.len(), 3);
        assert_eq!(ds.record(0).value(0), Some(&Value::Int64(1)));
        assert_eq!(ds.record(2).value(0), Some(&Value::Int64(3)));
    }

    #[test]
    fn filtered_view_keeps_storage_order() {
        let ds = sample_dataset();
        let view = ViewSource::filtered(&ds, |rec| {
            matches!(rec.value(1), Some(Value::Bool(true)))
        });
        assert_eq!(view.len(), 2);
        assert_eq!(view.order(), &[0, 2]);
        assert_eq!(view.record(1).value(0), Some(&Value::Int64(3)));
    }

    #[test]
    fn sorted_view_reorders_traversal() {
        let ds = sample_dataset();
        // Descending by id.
        let view = ViewSource::sorted_by(&ds, |a, b| {
            let (Some(Value::Int64(x)), Some(Value::Int64(y))) = (a.value(0), b.value(0)) else {
                return std::cmp::Ordering::Equal;
            };
            y.cmp(x)
        });
        assert_eq!(view.order(), &[2, 1, 0]);
    }

    #[test]
    fn record_slice_wraps_arbitrary_collections() {
        let ds = sample_dataset();
        let picked: Vec<Record> = vec![ds.records[2].clone(), ds.records[0].clone()];
        let slice = RecordSlice::new(&ds.schema, &picked);
        assert_eq!(slice.len(), 2);
        assert_eq!(slice.record(0).value(0), Some(&Value::Int64(3)));
    }
}
