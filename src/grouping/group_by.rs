//! Two-pass partitioning of records by composite key.

use crate::error::GroupingResult;
use crate::source::RecordSource;
use crate::types::Record;

use super::catalog::KeyCatalog;
use super::key::{KeyFields, KeyTuple};

/// The result of [`group_by`]: a key table and the matching partition.
///
/// `groups[i]` holds the records whose key tuple is `key_table[i]`.
#[derive(Debug, Clone, PartialEq)]
pub struct Grouped {
    /// Distinct key tuples in ascending composite order.
    pub key_table: Vec<KeyTuple>,
    /// One member list per key table entry, in source traversal order.
    pub groups: Vec<Vec<Record>>,
}

impl Grouped {
    /// Number of distinct keys (and groups).
    pub fn key_count(&self) -> usize {
        self.key_table.len()
    }
}

/// Partition a record source into groups sharing the same values across
/// `fields`.
///
/// Guarantees:
///
/// - every input record lands in exactly one group, and member order within a
///   group preserves the source's traversal order;
/// - `key_table` holds the distinct keys in ascending composite order (first
///   field most significant), and groups are returned in that key order —
///   **not** in order of first appearance;
/// - the key table and group list are empty iff the source is empty.
///
/// With `normalize_empty`, `Null` cells are replaced by the field type's zero
/// value before key comparison, so "no value" and "zero value" records land
/// in the same group (and the key table stores the zero value).
///
/// The algorithm runs two passes. The first discovers the distinct keys; the
/// key table is then frozen, fixing every key's ordinal; the second pass
/// assigns each record to its group. Discovering and assigning in a single
/// pass would force group reshuffling whenever a late key sorts before
/// already-seen ones, because group identity is "ordinal in sorted order",
/// not "first-seen index".
///
/// # Example
///
/// ```rust
/// use rust_row_grouping::grouping::group_by;
/// use rust_row_grouping::types::{DataSet, DataType, Field, Schema, Value};
///
/// let schema = Schema::new(vec![
///     Field::new("a", DataType::Int64),
///     Field::new("b", DataType::Utf8),
/// ]);
/// let ds = DataSet::from_rows(
///     schema,
///     vec![
///         vec![Value::Int64(1), Value::Utf8("x".to_string())],
///         vec![Value::Int64(1), Value::Utf8("y".to_string())],
///         vec![Value::Int64(2), Value::Utf8("x".to_string())],
///     ],
/// );
///
/// let grouped = group_by(&ds, &["a"], false).unwrap();
/// assert_eq!(grouped.key_count(), 2);
/// assert_eq!(grouped.groups[0].len(), 2); // a=1
/// assert_eq!(grouped.groups[1].len(), 1); // a=2
/// ```
pub fn group_by<S: RecordSource>(
    source: &S,
    fields: &[&str],
    normalize_empty: bool,
) -> GroupingResult<Grouped> {
    let key_fields = KeyFields::resolve(source.schema(), fields)?;

    // Pass 1: discover the distinct keys. No membership is recorded yet.
    let mut catalog = KeyCatalog::for_fields(&key_fields);
    for pos in 0..source.len() {
        let tuple = key_fields.extract(source.record(pos), normalize_empty)?;
        catalog.find_or_insert(tuple)?;
    }

    // Freeze: no further insertions, so ordinals are now fixed.
    let mut groups: Vec<Vec<Record>> = vec![Vec::new(); catalog.len()];

    // Pass 2: assign each record to its group. Extraction is recomputed;
    // it is cheap relative to materializing membership.
    for pos in 0..source.len() {
        let record = source.record(pos);
        let tuple = key_fields.extract(record, normalize_empty)?;
        let ordinal = match catalog.find(&tuple)? {
            Some(ordinal) => ordinal,
            None => unreachable!("every tuple was inserted during the discovery pass"),
        };
        groups[ordinal].push(record.clone());
    }

    Ok(Grouped {
        key_table: catalog.into_tuples(),
        groups,
    })
}
