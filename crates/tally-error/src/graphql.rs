//! Capability contract shared by every error the engine can surface.

use serde_json::{Map, Value, json};

use crate::classification::ErrorClassification;
use crate::entry::PathSegment;
use crate::location::SourceLocation;

/// Structured diagnostic payload attached to an error entry.
pub type Extensions = Map<String, Value>;

/// The accessor set the execution engine needs from any error it
/// aggregates into a response, whether raised by application logic or
/// produced by its own parsing and validation stages.
pub trait GraphQlError {
    /// Human-readable description of the failure.
    fn message(&self) -> &str;

    /// Positions in the request document the error refers to, when known.
    fn locations(&self) -> Option<&[SourceLocation]>;

    /// Category the engine maps to a transport-level string.
    fn classification(&self) -> &dyn ErrorClassification;

    /// Additional client-facing diagnostic detail, when any.
    fn extensions(&self) -> Option<Extensions>;

    /// Render this error as a single specification-shaped entry.
    ///
    /// The classification code always lands in
    /// `extensions.classification`; absent fields are omitted rather
    /// than serialized as null.
    fn to_specification(&self) -> Value {
        entry_value(
            self.message(),
            self.locations(),
            None,
            self.extensions(),
            self.classification(),
        )
    }
}

pub(crate) fn entry_value(
    message: &str,
    locations: Option<&[SourceLocation]>,
    path: Option<&[PathSegment]>,
    extensions: Option<Extensions>,
    classification: &dyn ErrorClassification,
) -> Value {
    let mut entry = Map::new();
    entry.insert("message".to_owned(), Value::String(message.to_owned()));
    if let Some(locations) = locations.filter(|l| !l.is_empty()) {
        let locations: Vec<Value> = locations.iter().map(|l| json!(l)).collect();
        entry.insert("locations".to_owned(), Value::Array(locations));
    }
    if let Some(path) = path.filter(|p| !p.is_empty()) {
        let path: Vec<Value> = path.iter().map(PathSegment::to_value).collect();
        entry.insert("path".to_owned(), Value::Array(path));
    }
    let mut extensions = extensions.unwrap_or_default();
    extensions.insert(
        "classification".to_owned(),
        Value::String(classification.code().to_owned()),
    );
    entry.insert("extensions".to_owned(), Value::Object(extensions));
    Value::Object(entry)
}
