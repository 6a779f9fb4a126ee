//! Core data model types for the grouping engine.
//!
//! The engine operates on an in-memory [`DataSet`]: a user-provided [`Schema`]
//! (a list of typed [`Field`]s) plus a list of [`Record`]s whose cells are
//! typed [`Value`]s. [`Value::Null`] is the distinguished "no value" marker
//! and is distinct from every type's zero/blank value unless a caller opts
//! into null normalization (see [`crate::grouping`]).

use serde::{Deserialize, Serialize};

/// Logical data type for a schema field.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub enum DataType {
    /// 64-bit signed integer.
    Int64,
    /// 64-bit floating point number.
    Float64,
    /// Boolean.
    Bool,
    /// UTF-8 string.
    Utf8,
}

impl DataType {
    /// The canonical zero/blank value for this type.
    ///
    /// Used by null normalization: a [`Value::Null`] read from a key field is
    /// replaced with this value before key comparison when the caller
    /// requests it.
    pub fn zero_value(&self) -> Value {
        match self {
            DataType::Int64 => Value::Int64(0),
            DataType::Float64 => Value::Float64(0.0),
            DataType::Bool => Value::Bool(false),
            DataType::Utf8 => Value::Utf8(String::new()),
        }
    }
}

/// A single named, typed field in a [`Schema`].
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Field {
    /// Field/column name.
    pub name: String,
    /// Field data type.
    pub data_type: DataType,
}

impl Field {
    /// Create a new field.
    pub fn new(name: impl Into<String>, data_type: DataType) -> Self {
        Self {
            name: name.into(),
            data_type,
        }
    }
}

/// A list of fields describing the shape of a record.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Schema {
    /// Ordered list of fields.
    pub fields: Vec<Field>,
}

impl Schema {
    /// Create a new schema from fields.
    pub fn new(fields: Vec<Field>) -> Self {
        Self { fields }
    }

    /// Iterate field names in order.
    pub fn field_names(&self) -> impl Iterator<Item = &str> {
        self.fields.iter().map(|f| f.name.as_str())
    }

    /// Returns the index of a field by name, if present.
    pub fn index_of(&self, name: &str) -> Option<usize> {
        self.fields.iter().position(|f| f.name == name)
    }

    /// Number of fields.
    pub fn width(&self) -> usize {
        self.fields.len()
    }
}

/// A single typed value in a [`Record`].
#[derive(Debug, Clone, PartialEq)]
pub enum Value {
    /// Missing/empty value.
    Null,
    /// 64-bit signed integer.
    Int64(i64),
    /// 64-bit float.
    Float64(f64),
    /// Boolean.
    Bool(bool),
    /// UTF-8 string.
    Utf8(String),
}

impl Value {
    /// Returns `true` for [`Value::Null`].
    pub fn is_null(&self) -> bool {
        matches!(self, Value::Null)
    }

    /// Variant name for diagnostics (type-mismatch errors).
    pub fn variant_name(&self) -> &'static str {
        match self {
            Value::Null => "Null",
            Value::Int64(_) => "Int64",
            Value::Float64(_) => "Float64",
            Value::Bool(_) => "Bool",
            Value::Utf8(_) => "Utf8",
        }
    }
}

/// One logical row of tabular data.
///
/// A record holds its live cell values in schema order. Marking a record for
/// removal ([`Record::mark_removed`]) blanks the live values but captures a
/// pre-removal snapshot, so the grouping engine can still read the record's
/// last-known field values while it is pending deletion.
#[derive(Debug, Clone, PartialEq)]
pub struct Record {
    values: Vec<Value>,
    snapshot: Option<Vec<Value>>,
}

impl Record {
    /// Create a record from cell values (schema order).
    pub fn new(values: Vec<Value>) -> Self {
        Self {
            values,
            snapshot: None,
        }
    }

    /// Create an all-null record of the given width.
    pub fn blank(width: usize) -> Self {
        Self::new(vec![Value::Null; width])
    }

    /// Number of cells.
    pub fn len(&self) -> usize {
        self.values.len()
    }

    /// Returns `true` if the record has no cells.
    pub fn is_empty(&self) -> bool {
        self.values.is_empty()
    }

    /// Live cell values in schema order.
    pub fn values(&self) -> &[Value] {
        &self.values
    }

    /// The live value at `idx`, if in range.
    pub fn value(&self, idx: usize) -> Option<&Value> {
        self.values.get(idx)
    }

    /// Overwrite the live value at `idx`.
    ///
    /// Out-of-range writes are ignored; the record keeps its width.
    pub fn set_value(&mut self, idx: usize, value: Value) {
        if let Some(slot) = self.values.get_mut(idx) {
            *slot = value;
        }
    }

    /// The value the grouping engine should read at `idx`.
    ///
    /// For a record pending removal this is the pre-removal snapshot value;
    /// otherwise it is the live value.
    pub fn field_value(&self, idx: usize) -> Option<&Value> {
        match &self.snapshot {
            Some(snap) => snap.get(idx),
            None => self.values.get(idx),
        }
    }

    /// Mark this record as pending removal.
    ///
    /// Captures the current values as the pre-removal snapshot and blanks the
    /// live cells. Idempotent: a second call keeps the original snapshot.
    pub fn mark_removed(&mut self) {
        if self.snapshot.is_none() {
            let width = self.values.len();
            let snap = std::mem::replace(&mut self.values, vec![Value::Null; width]);
            self.snapshot = Some(snap);
        }
    }

    /// Returns `true` if the record has been marked for removal.
    pub fn is_pending_removal(&self) -> bool {
        self.snapshot.is_some()
    }

    /// The pre-removal snapshot value at `idx`, if the record is pending
    /// removal and `idx` is in range.
    pub fn snapshot_value(&self, idx: usize) -> Option<&Value> {
        self.snapshot.as_ref().and_then(|snap| snap.get(idx))
    }
}

/// In-memory tabular dataset.
///
/// Records are stored in insertion order with cells in the same order as the
/// [`Schema`] fields.
#[derive(Debug, Clone, PartialEq)]
pub struct DataSet {
    /// Schema describing record shape.
    pub schema: Schema,
    /// Records in storage order.
    pub records: Vec<Record>,
}

impl DataSet {
    /// Create a dataset from schema and records.
    pub fn new(schema: Schema, records: Vec<Record>) -> Self {
        Self { schema, records }
    }

    /// Create an empty dataset with the given schema.
    pub fn empty(schema: Schema) -> Self {
        Self {
            schema,
            records: Vec::new(),
        }
    }

    /// Create a dataset from raw rows of values.
    pub fn from_rows(schema: Schema, rows: Vec<Vec<Value>>) -> Self {
        let records = rows.into_iter().map(Record::new).collect();
        Self { schema, records }
    }

    /// Number of records in the dataset.
    pub fn row_count(&self) -> usize {
        self.records.len()
    }

    /// Synthesize a blank (all-null) record matching this dataset's schema.
    pub fn blank_record(&self) -> Record {
        Record::blank(self.schema.width())
    }

    /// Append a record to the dataset.
    pub fn push(&mut self, record: Record) {
        self.records.push(record);
    }
}

#[cfg(test)]
mod tests {
    use super::{DataSet, DataType, Field, Record, Schema, Value};

    #[test]
    fn zero_values_per_type() {
        assert_eq!(DataType::Int64.zero_value(), Value::Int64(0));
        assert_eq!(DataType::Float64.zero_value(), Value::Float64(0.0));
        assert_eq!(DataType::Bool.zero_value(), Value::Bool(false));
        assert_eq!(DataType::Utf8.zero_value(), Value::Utf8(String::new()));
    }

    #[test]
    fn schema_round_trips_through_json() {
        let schema = Schema::new(vec![
            Field::new("id", DataType::Int64),
            Field::new("name", DataType::Utf8),
        ]);
        let text = serde_json::to_string(&schema).unwrap();
        let back: Schema = serde_json::from_str(&text).unwrap();
        assert_eq!(back, schema);
    }

    #[test]
    fn mark_removed_preserves_snapshot_values() {
        let mut rec = Record::new(vec![Value::Int64(7), Value::Utf8("x".to_string())]);
        assert!(!rec.is_pending_removal());
        assert_eq!(rec.field_value(0), Some(&Value::Int64(7)));

        rec.mark_removed();
        assert!(rec.is_pending_removal());
        // Live cells are blanked, but the engine-facing read sees the snapshot.
        assert_eq!(rec.value(0), Some(&Value::Null));
        assert_eq!(rec.field_value(0), Some(&Value::Int64(7)));
        assert_eq!(rec.snapshot_value(1), Some(&Value::Utf8("x".to_string())));

        // Idempotent: a second call keeps the original snapshot.
        rec.mark_removed();
        assert_eq!(rec.field_value(0), Some(&Value::Int64(7)));
    }

    #[test]
    fn blank_record_matches_schema_width() {
        let ds = DataSet::empty(Schema::new(vec![
            Field::new("a", DataType::Int64),
            Field::new("b", DataType::Bool),
        ]));
        let rec = ds.blank_record();
        assert_eq!(rec.len(), 2);
        assert!(rec.values().iter().all(Value::is_null));
    }
}
