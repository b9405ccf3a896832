//! Coarse-grained classification of errors surfaced to API clients.

use std::fmt;

/// Category tag carried by every error surfaced to a client.
///
/// The execution engine defines the classification vocabulary; this
/// crate treats the value as opaque apart from [`code`], the string the
/// engine writes into the response (e.g. `"ValidationError"`).
///
/// [`code`]: ErrorClassification::code
pub trait ErrorClassification: fmt::Debug + Send + Sync + 'static {
    /// Transport-level category string for this classification.
    fn code(&self) -> &'static str;
}

/// Stock classifications of the execution engine.
///
/// Application logic raises `ValidationError` and
/// `DataFetchingException`; the remaining variants come out of the
/// engine's own parsing, validation, and execution stages.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, serde::Serialize, serde::Deserialize)]
pub enum ErrorType {
    InvalidSyntax,
    ValidationError,
    DataFetchingException,
    NullValueInNonNullableField,
    OperationNotSupported,
    ExecutionAborted,
}

impl ErrorClassification for ErrorType {
    fn code(&self) -> &'static str {
        match self {
            ErrorType::InvalidSyntax => "InvalidSyntax",
            ErrorType::ValidationError => "ValidationError",
            ErrorType::DataFetchingException => "DataFetchingException",
            ErrorType::NullValueInNonNullableField => "NullValueInNonNullableField",
            ErrorType::OperationNotSupported => "OperationNotSupported",
            ErrorType::ExecutionAborted => "ExecutionAborted",
        }
    }
}
