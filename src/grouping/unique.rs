//! First-occurrence deduplication by composite key.

use crate::error::GroupingResult;
use crate::source::RecordSource;
use crate::types::DataSet;

use super::catalog::KeyCatalog;
use super::key::KeyFields;

/// Keep exactly one representative record per distinct key tuple.
///
/// A single pass over the source: each record's key tuple is offered to a
/// fresh [`KeyCatalog`]; the record is kept iff its tuple was not present
/// yet. "First occurrence" is relative to the source's traversal order — for
/// a [`crate::source::ViewSource`] that is the view's order, not raw storage
/// order. The output is a stable filter of the input (a sub-sequence, never
/// re-sorted), so its length equals the number of distinct key tuples.
///
/// Unlike [`crate::grouping::group_by`] no second pass is needed: keeping the
/// first occurrence does not require knowing the final key ordering, and
/// `Null` keys compare raw (`Null` equals only `Null`).
///
/// # Example
///
/// ```rust
/// use rust_row_grouping::grouping::unique_by;
/// use rust_row_grouping::types::{DataSet, DataType, Field, Schema, Value};
///
/// let schema = Schema::new(vec![Field::new("a", DataType::Int64)]);
/// let ds = DataSet::from_rows(
///     schema,
///     vec![
///         vec![Value::Int64(1)],
///         vec![Value::Int64(1)],
///         vec![Value::Int64(2)],
///     ],
/// );
///
/// let out = unique_by(&ds, &["a"]).unwrap();
/// assert_eq!(out.row_count(), 2);
/// assert_eq!(out.records[0].value(0), Some(&Value::Int64(1)));
/// assert_eq!(out.records[1].value(0), Some(&Value::Int64(2)));
/// ```
pub fn unique_by<S: RecordSource>(source: &S, fields: &[&str]) -> GroupingResult<DataSet> {
    let key_fields = KeyFields::resolve(source.schema(), fields)?;
    let mut catalog = KeyCatalog::for_fields(&key_fields);

    let mut out = DataSet::empty(source.schema().clone());
    for pos in 0..source.len() {
        let record = source.record(pos);
        let tuple = key_fields.extract(record, false)?;
        let (_, inserted) = catalog.find_or_insert(tuple)?;
        if inserted {
            out.push(record.clone());
        }
    }
    Ok(out)
}
