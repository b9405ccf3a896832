//! Response-level error entries assembled at the resolver boundary.

use serde_json::Value;

use crate::classification::ErrorClassification;
use crate::domain::DomainError;
use crate::graphql::{Extensions, GraphQlError, entry_value};
use crate::location::SourceLocation;

/// One step of the execution path from the operation root to the field
/// that failed.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum PathSegment {
    Field(String),
    Index(usize),
}

impl PathSegment {
    pub(crate) fn to_value(&self) -> Value {
        match self {
            PathSegment::Field(name) => Value::String(name.clone()),
            PathSegment::Index(index) => Value::from(*index),
        }
    }
}

/// A fully-assembled entry of the response's error list.
///
/// The resolver boundary builds one of these per caught error,
/// attaching the execution path and the field's source location that
/// the raised [`DomainError`] does not carry itself. Classifications
/// are boxed so entries from different classification vocabularies can
/// share one list.
#[derive(Debug)]
pub struct ErrorEntry {
    message: String,
    classification: Box<dyn ErrorClassification>,
    locations: Vec<SourceLocation>,
    path: Vec<PathSegment>,
    extensions: Option<Extensions>,
}

impl ErrorEntry {
    pub fn message(&self) -> &str {
        &self.message
    }

    pub fn classification(&self) -> &dyn ErrorClassification {
        self.classification.as_ref()
    }

    pub fn locations(&self) -> Option<&[SourceLocation]> {
        if self.locations.is_empty() {
            None
        } else {
            Some(&self.locations)
        }
    }

    pub fn path(&self) -> Option<&[PathSegment]> {
        if self.path.is_empty() {
            None
        } else {
            Some(&self.path)
        }
    }

    pub fn extensions(&self) -> Option<Extensions> {
        self.extensions.clone()
    }
}

impl GraphQlError for ErrorEntry {
    fn message(&self) -> &str {
        &self.message
    }

    fn locations(&self) -> Option<&[SourceLocation]> {
        ErrorEntry::locations(self)
    }

    fn classification(&self) -> &dyn ErrorClassification {
        self.classification.as_ref()
    }

    fn extensions(&self) -> Option<Extensions> {
        self.extensions.clone()
    }

    fn to_specification(&self) -> Value {
        entry_value(
            &self.message,
            ErrorEntry::locations(self),
            ErrorEntry::path(self),
            self.extensions.clone(),
            self.classification.as_ref(),
        )
    }
}

/// Builder for [`ErrorEntry`].
///
/// Message and classification are fixed at construction, so
/// [`build`] is infallible; everything else is optional and omitted
/// from the entry when never set.
///
/// [`build`]: ErrorEntryBuilder::build
#[derive(Debug)]
pub struct ErrorEntryBuilder {
    message: String,
    classification: Box<dyn ErrorClassification>,
    locations: Vec<SourceLocation>,
    path: Vec<PathSegment>,
    extensions: Option<Extensions>,
}

impl ErrorEntryBuilder {
    pub fn new(message: impl Into<String>, classification: impl ErrorClassification) -> Self {
        Self {
            message: message.into(),
            classification: Box::new(classification),
            locations: Vec::new(),
            path: Vec::new(),
            extensions: None,
        }
    }

    /// Seed the builder from a raised domain error, preserving its
    /// message, classification, and extension payload. The boundary
    /// then adds the path and location it knows and the value did not.
    pub fn from_domain<C>(error: &DomainError<C>) -> Self
    where
        C: ErrorClassification + Clone,
    {
        Self {
            message: error.message().to_owned(),
            classification: Box::new(error.classification().clone()),
            locations: Vec::new(),
            path: Vec::new(),
            extensions: error.extensions(),
        }
    }

    #[must_use]
    pub fn location(mut self, location: SourceLocation) -> Self {
        self.locations.push(location);
        self
    }

    /// Replace the execution path wholesale.
    #[must_use]
    pub fn path(mut self, path: Vec<PathSegment>) -> Self {
        self.path = path;
        self
    }

    /// Append one segment to the execution path.
    #[must_use]
    pub fn path_segment(mut self, segment: PathSegment) -> Self {
        self.path.push(segment);
        self
    }

    /// Insert one extension entry, creating the payload if needed.
    #[must_use]
    pub fn extension(mut self, key: impl Into<String>, value: impl Into<Value>) -> Self {
        self.extensions
            .get_or_insert_with(Extensions::new)
            .insert(key.into(), value.into());
        self
    }

    pub fn build(self) -> ErrorEntry {
        ErrorEntry {
            message: self.message,
            classification: self.classification,
            locations: self.locations,
            path: self.path,
            extensions: self.extensions,
        }
    }
}
