//! Domain error representation for the tally GraphQL service.
//!
//! Resolvers raise a [`DomainError`] when a business rule fails; the
//! execution engine catches it at the resolver boundary and converts it
//! into one entry of the response's error list. This crate owns the
//! error value, the classification seam, and the building blocks for
//! that conversion. Collecting the error list and shaping the response
//! envelope belong to the engine.

pub mod classification;
pub mod domain;
pub mod entry;
pub mod graphql;
pub mod location;
pub mod result_ext;

// public exports
pub use classification::{ErrorClassification, ErrorType};
pub use domain::DomainError;
pub use entry::{ErrorEntry, ErrorEntryBuilder, PathSegment};
pub use graphql::{Extensions, GraphQlError};
pub use location::SourceLocation;
#[cfg(feature = "tracing")]
pub use result_ext::ResultExt;

/// Alias for resolver results that fail with a [`DomainError`].
pub type Result<T, C = ErrorType> = std::result::Result<T, DomainError<C>>;
