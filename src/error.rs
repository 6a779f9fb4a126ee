use thiserror::Error;

/// Convenience result type for grouping-engine operations.
pub type GroupingResult<T> = Result<T, GroupingError>;

/// Error type returned by the grouping/deduplication engine.
///
/// Every variant is fatal for the call that produced it: either an operation
/// returns a fully consistent result, or it fails before producing any output.
/// There is no partial-success mode and nothing here is retried internally.
#[derive(Debug, Error)]
pub enum GroupingError {
    /// A key field name does not exist in the schema.
    #[error("unknown field '{name}' in schema")]
    UnknownField { name: String },

    /// A key tuple's length does not match the configured key field count.
    ///
    /// This is a programming error on the caller's side, not a data error.
    #[error("key tuple arity mismatch: expected {expected}, got {got}")]
    ArityMismatch { expected: usize, got: usize },

    /// Two values in the same key position have incomparable scalar types.
    ///
    /// This can only happen with heterogeneous sources (e.g. a caller-supplied
    /// record slice whose rows do not follow the declared schema).
    #[error("type mismatch in key field '{field}': cannot order {left} against {right}")]
    TypeMismatch {
        field: String,
        left: &'static str,
        right: &'static str,
    },

    /// Malformed call arguments (e.g. an empty key field list).
    #[error("invalid argument: {message}")]
    InvalidArgument { message: String },

    /// Operation attempted on an index with no configured key fields.
    #[error("invalid state: {message}")]
    InvalidState { message: String },
}

/// Convenience result type for ingestion operations.
pub type IngestionResult<T> = Result<T, IngestionError>;

/// Error type returned by ingestion functions.
///
/// This is a single error enum shared across CSV and JSON ingestion.
#[derive(Debug, Error)]
pub enum IngestionError {
    /// Underlying I/O error (e.g. file not found, permission denied).
    #[error("io error: {0}")]
    Io(#[from] std::io::Error),

    /// CSV ingestion error.
    #[error("csv error: {0}")]
    Csv(#[from] csv::Error),

    /// The input does not conform to the provided schema (missing required fields/columns, etc.).
    #[error("schema mismatch: {message}")]
    SchemaMismatch { message: String },

    /// A value could not be parsed into the required [`crate::types::DataType`].
    #[error("failed to parse value at row {row} column '{column}': {message} (raw='{raw}')")]
    ParseError {
        row: usize,
        column: String,
        raw: String,
        message: String,
    },
}
