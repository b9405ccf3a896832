//! Tracing emission at the raise site, without disturbing control flow.

#![cfg(feature = "tracing")]

use crate::classification::ErrorClassification;
use crate::domain::DomainError;

/// Extension trait for emitting errors as they propagate.
///
/// The result is returned unchanged so the caller still decides how to
/// propagate; emission is a side channel only.
pub trait ResultExt<T>: Sized {
    /// If the result is an error, emit an ERROR event carrying the
    /// classification code and message.
    fn trace_err(self) -> Self;
}

impl<T, C: ErrorClassification> ResultExt<T> for Result<T, DomainError<C>> {
    fn trace_err(self) -> Self {
        if let Err(ref error) = self {
            tracing::event!(
                tracing::Level::ERROR,
                classification = error.classification().code(),
                error = %error,
            );
        }
        self
    }
}
