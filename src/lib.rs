//! `rust-row-grouping` is a small library for partitioning, deduplicating,
//! and indexing tabular records by composite key, over an in-memory
//! [`types::DataSet`] with a user-provided [`types::Schema`].
//!
//! The engine groups records by the values of an explicit list of key
//! fields. [`types::Value::Null`] marks "no value" and equals only `Null`
//! under key comparison, unless null normalization is requested (which
//! substitutes the field type's zero/blank value first).
//!
//! ## Quick example: group rows by a key field
//!
//! ```rust
//! use rust_row_grouping::grouping::group_by;
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
//! ```
//!
//! ## Input shapes
//!
//! The engine accepts three input shapes through the
//! [`source::RecordSource`] trait, chosen at construction time:
//!
//! - a full [`types::DataSet`] (storage order)
//! - a [`source::ViewSource`] (filtered and/or re-ordered view)
//! - a [`source::RecordSlice`] (arbitrary record collection)
//!
//! ## Getting data in
//!
//! Datasets are usually built by ingestion. [`ingestion::ingest_from_path`]
//! auto-detects CSV or JSON/NDJSON from the file extension:
//!
//! ```no_run
//! use rust_row_grouping::ingestion::{ingest_from_path, IngestionOptions};
//! use rust_row_grouping::types::{DataType, Field, Schema};
//!
//! # fn main() -> Result<(), rust_row_grouping::IngestionError> {
//! let schema = Schema::new(vec![
//!     Field::new("id", DataType::Int64),
//!     Field::new("region", DataType::Utf8),
//! ]);
//! let ds = ingest_from_path("sales.csv", &schema, &IngestionOptions::default())?;
//! println!("rows={}", ds.row_count());
//! # Ok(())
//! # }
//! ```
//!
//! ## Modules
//!
//! - [`grouping`]: group-by, unique-by, and find-or-insert indexing
//! - [`source`]: the record enumeration contract and its adapters
//! - [`types`]: schema + in-memory dataset types
//! - [`ingestion`]: CSV/JSON ingestion into a dataset
//! - [`error`]: error types for the engine and ingestion

pub mod error;
pub mod grouping;
pub mod ingestion;
pub mod source;
pub mod types;

pub use error::{GroupingError, GroupingResult, IngestionError, IngestionResult};
