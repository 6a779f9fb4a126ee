//! Composite-key grouping, deduplication, and find-or-insert indexing.
//!
//! The engine partitions any [`crate::source::RecordSource`] by the values of
//! a declared list of key fields. All operations are synchronous, purely
//! in-memory, and work over the records as they exist at call time; every
//! call builds a fresh [`KeyCatalog`] and nothing survives the return value.
//!
//! Operations:
//!
//! - [`group_by()`]: stable, ordered partition of records by key tuple
//!   (two-pass; groups come back in ascending key order)
//! - [`unique_by()`]: first-occurrence deduplication (single pass, stable
//!   filter)
//! - [`RecordIndex::find_or_insert`]: single-tuple probe against a dataset,
//!   synthesizing and appending a keyed blank record when absent
//!
//! ## Example: group, then deduplicate
//!
//! ```rust
//! use rust_row_grouping::grouping::{group_by, unique_by};
//! use rust_row_grouping::types::{DataSet, DataType, Field, Schema, Value};
//!
//! let schema = Schema::new(vec![
//!     Field::new("region", DataType::Utf8),
//!     Field::new("amount", DataType::Int64),
//! ]);
//! let ds = DataSet::from_rows(
//!     schema,
//!     vec![
//!         vec![Value::Utf8("west".to_string()), Value::Int64(10)],
//!         vec![Value::Utf8("east".to_string()), Value::Int64(20)],
//!         vec![Value::Utf8("west".to_string()), Value::Int64(30)],
//!     ],
//! );
//!
//! let grouped = group_by(&ds, &["region"], false).unwrap();
//! assert_eq!(grouped.key_count(), 2);
//! // Ascending key order: "east" before "west".
//! assert_eq!(grouped.groups[0].len(), 1);
//! assert_eq!(grouped.groups[1].len(), 2);
//!
//! let distinct = unique_by(&ds, &["region"]).unwrap();
//! assert_eq!(distinct.row_count(), 2);
//! ```
//!
//! ## Null handling
//!
//! [`crate::types::Value::Null`] equals only `Null` under key comparison. The
//! `normalize_empty` flag of [`group_by()`] substitutes the field type's zero
//! value (`0`, `0.0`, `false`, `""`) for `Null` before comparison, merging
//! "no value" and "zero value" records into one group. The key table then
//! stores the substituted zero, so the distinction between "was `Null`" and
//! "was zero" is not recoverable from the result.

pub mod catalog;
pub mod group_by;
pub mod index;
pub mod key;
pub mod unique;

pub use catalog::KeyCatalog;
pub use group_by::{group_by, Grouped};
pub use index::RecordIndex;
pub use key::{KeyFields, KeyTuple};
pub use unique::unique_by;
