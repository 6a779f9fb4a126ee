//! Key-field resolution, key tuples, and the composite value comparator.
//!
//! A grouping call starts by resolving its key field names against the
//! source schema into a [`KeyFields`] list. Extraction then derives one
//! [`KeyTuple`] per record: the record's values at the key positions, read
//! from the pre-removal snapshot for records pending deletion, with
//! [`crate::types::Value::Null`] optionally normalized to the field type's
//! zero value.

use std::cmp::Ordering;

use crate::error::{GroupingError, GroupingResult};
use crate::types::{DataType, Record, Schema, Value};

/// One resolved key field: name, schema position, declared type.
#[derive(Debug, Clone)]
pub(crate) struct KeyField {
    pub(crate) name: String,
    pub(crate) index: usize,
    pub(crate) data_type: DataType,
}

/// An ordered, per-call list of key fields resolved against a schema.
#[derive(Debug, Clone)]
pub struct KeyFields {
    fields: Vec<KeyField>,
}

impl KeyFields {
    /// Resolve `names` against `schema`.
    ///
    /// - Empty `names` → [`GroupingError::InvalidArgument`].
    /// - A name missing from the schema → [`GroupingError::UnknownField`].
    pub fn resolve(schema: &Schema, names: &[&str]) -> GroupingResult<Self> {
        if names.is_empty() {
            return Err(GroupingError::InvalidArgument {
                message: "key field list is empty".to_string(),
            });
        }
        Self::resolve_allowing_empty(schema, names)
    }

    /// Like [`KeyFields::resolve`] but accepts an empty name list.
    ///
    /// Used by [`crate::grouping::RecordIndex`], which defers the empty-key
    /// check to operation time (`InvalidState`) rather than build time.
    pub(crate) fn resolve_allowing_empty(schema: &Schema, names: &[&str]) -> GroupingResult<Self> {
        let mut fields = Vec::with_capacity(names.len());
        for name in names {
            let index = schema
                .index_of(name)
                .ok_or_else(|| GroupingError::UnknownField {
                    name: (*name).to_string(),
                })?;
            fields.push(KeyField {
                name: (*name).to_string(),
                index,
                data_type: schema.fields[index].data_type.clone(),
            });
        }
        Ok(Self { fields })
    }

    /// Number of key fields (tuple arity).
    pub fn arity(&self) -> usize {
        self.fields.len()
    }

    /// Key field names in declared order.
    pub fn names(&self) -> Vec<String> {
        self.fields.iter().map(|f| f.name.clone()).collect()
    }

    pub(crate) fn fields(&self) -> &[KeyField] {
        &self.fields
    }

    /// Derive the record's key tuple.
    ///
    /// Reads the pre-removal snapshot for records pending deletion, so a
    /// record slated for removal still yields its last-known key. With
    /// `normalize_empty`, a `Null` cell is replaced by the field type's zero
    /// value before it enters the tuple; this is a pure value substitution
    /// and changes nothing but key equality.
    pub fn extract(&self, record: &Record, normalize_empty: bool) -> GroupingResult<KeyTuple> {
        let mut values = Vec::with_capacity(self.fields.len());
        for field in &self.fields {
            let value = record
                .field_value(field.index)
                .ok_or_else(|| GroupingError::UnknownField {
                    name: field.name.clone(),
                })?;
            let value = if normalize_empty && value.is_null() {
                field.data_type.zero_value()
            } else {
                value.clone()
            };
            values.push(value);
        }
        Ok(KeyTuple::new(values))
    }
}

/// An immutable, fixed-arity tuple of key values.
#[derive(Debug, Clone, PartialEq)]
pub struct KeyTuple {
    values: Vec<Value>,
}

impl KeyTuple {
    /// Create a tuple from values in key-field order.
    pub fn new(values: Vec<Value>) -> Self {
        Self { values }
    }

    /// Number of values in the tuple.
    pub fn arity(&self) -> usize {
        self.values.len()
    }

    /// Tuple values in key-field order.
    pub fn values(&self) -> &[Value] {
        &self.values
    }

    /// The value at `pos`, if in range.
    pub fn value(&self, pos: usize) -> Option<&Value> {
        self.values.get(pos)
    }
}

/// Order two values of the same key field.
///
/// `Null` sorts before every non-null value. Same-variant values compare
/// naturally (`f64::total_cmp` for floats, so the order is total even with
/// NaN). Cross-variant comparisons fail with [`GroupingError::TypeMismatch`].
pub(crate) fn compare_values(field: &str, a: &Value, b: &Value) -> GroupingResult<Ordering> {
    match (a, b) {
        (Value::Null, Value::Null) => Ok(Ordering::Equal),
        (Value::Null, _) => Ok(Ordering::Less),
        (_, Value::Null) => Ok(Ordering::Greater),
        (Value::Int64(x), Value::Int64(y)) => Ok(x.cmp(y)),
        (Value::Float64(x), Value::Float64(y)) => Ok(x.total_cmp(y)),
        (Value::Bool(x), Value::Bool(y)) => Ok(x.cmp(y)),
        (Value::Utf8(x), Value::Utf8(y)) => Ok(x.cmp(y)),
        _ => Err(GroupingError::TypeMismatch {
            field: field.to_string(),
            left: a.variant_name(),
            right: b.variant_name(),
        }),
    }
}

/// Lexicographic composite comparison over the declared key field order
/// (first field most significant). `key_names` supplies the field name for
/// type-mismatch diagnostics; both tuples must have arity `key_names.len()`.
pub(crate) fn compare_tuples(
    key_names: &[String],
    a: &KeyTuple,
    b: &KeyTuple,
) -> GroupingResult<Ordering> {
    for (pos, name) in key_names.iter().enumerate() {
        let ord = compare_values(name, &a.values[pos], &b.values[pos])?;
        if ord != Ordering::Equal {
            return Ok(ord);
        }
    }
    Ok(Ordering::Equal)
}

#[cfg(test)]
mod tests {
    use std::cmp::Ordering;

    use super::{compare_tuples, compare_values, KeyFields, KeyTuple};
    use crate::error::GroupingError;
    use crate::types::{DataType, Field, Record, Schema, Value};

    fn schema() -> Schema {
        Schema::new(vec![
            Field::new("id", DataType::Int64),
            Field::new("name", DataType::Utf8),
            Field::new("score", DataType::Float64),
        ])
    }

    #[test]
    fn resolve_rejects_empty_field_list() {
        let err = KeyFields::resolve(&schema(), &[]).unwrap_err();
        assert!(matches!(err, GroupingError::InvalidArgument { .. }));
    }

    #[test]
    fn resolve_rejects_unknown_field() {
        let err = KeyFields::resolve(&schema(), &["id", "missing"]).unwrap_err();
        assert!(matches!(err, GroupingError::UnknownField { ref name } if name == "missing"));
    }

    #[test]
    fn extract_reads_values_in_declared_order() {
        let fields = KeyFields::resolve(&schema(), &["name", "id"]).unwrap();
        let rec = Record::new(vec![
            Value::Int64(7),
            Value::Utf8("ada".to_string()),
            Value::Float64(1.5),
        ]);
        let tuple = fields.extract(&rec, false).unwrap();
        assert_eq!(
            tuple.values(),
            &[Value::Utf8("ada".to_string()), Value::Int64(7)]
        );
    }

    #[test]
    fn extract_prefers_snapshot_for_pending_removal() {
        let fields = KeyFields::resolve(&schema(), &["id"]).unwrap();
        let mut rec = Record::new(vec![
            Value::Int64(42),
            Value::Utf8("ada".to_string()),
            Value::Null,
        ]);
        rec.mark_removed();
        let tuple = fields.extract(&rec, false).unwrap();
        assert_eq!(tuple.values(), &[Value::Int64(42)]);
    }

    #[test]
    fn extract_normalizes_null_to_type_zero() {
        let fields = KeyFields::resolve(&schema(), &["score", "name"]).unwrap();
        let rec = Record::new(vec![Value::Int64(1), Value::Null, Value::Null]);

        let raw = fields.extract(&rec, false).unwrap();
        assert_eq!(raw.values(), &[Value::Null, Value::Null]);

        let normalized = fields.extract(&rec, true).unwrap();
        assert_eq!(
            normalized.values(),
            &[Value::Float64(0.0), Value::Utf8(String::new())]
        );
    }

    #[test]
    fn null_sorts_before_every_value() {
        assert_eq!(
            compare_values("f", &Value::Null, &Value::Int64(i64::MIN)).unwrap(),
            Ordering::Less
        );
        assert_eq!(
            compare_values("f", &Value::Utf8(String::new()), &Value::Null).unwrap(),
            Ordering::Greater
        );
        assert_eq!(
            compare_values("f", &Value::Null, &Value::Null).unwrap(),
            Ordering::Equal
        );
    }

    #[test]
    fn cross_variant_comparison_is_a_type_mismatch() {
        let err = compare_values("f", &Value::Int64(1), &Value::Utf8("1".to_string())).unwrap_err();
        assert!(matches!(
            err,
            GroupingError::TypeMismatch {
                left: "Int64",
                right: "Utf8",
                ..
            }
        ));
    }

    #[test]
    fn composite_comparison_is_lexicographic() {
        let names = vec!["a".to_string(), "b".to_string()];
        let t1 = KeyTuple::new(vec![Value::Int64(1), Value::Utf8("z".to_string())]);
        let t2 = KeyTuple::new(vec![Value::Int64(2), Value::Utf8("a".to_string())]);
        // First field decides even though "z" > "a".
        assert_eq!(compare_tuples(&names, &t1, &t2).unwrap(), Ordering::Less);

        let t3 = KeyTuple::new(vec![Value::Int64(1), Value::Utf8("a".to_string())]);
        assert_eq!(compare_tuples(&names, &t1, &t3).unwrap(), Ordering::Greater);
        assert_eq!(compare_tuples(&names, &t3, &t3.clone()).unwrap(), Ordering::Equal);
    }
}
