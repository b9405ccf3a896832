//! The error value application logic raises when a business rule fails.

use crate::classification::{ErrorClassification, ErrorType};
use crate::graphql::{Extensions, GraphQlError};
use crate::location::SourceLocation;

/// A user-facing application failure.
///
/// Carries the message shown to the client and an engine-defined
/// classification, both fixed at construction. The value is terminal
/// for the field that raised it: it propagates up through `?` until the
/// resolver boundary converts it into one entry of the response's
/// error list. No source locations are tracked on the raised value;
/// the boundary attaches the field's location when it builds the entry
/// (see [`ErrorEntryBuilder::from_domain`]).
///
/// By default the message is mirrored into an `errorMessage` extension
/// for richer client diagnostics; [`without_message_extension`] drops
/// the extension payload entirely.
///
/// [`ErrorEntryBuilder::from_domain`]: crate::entry::ErrorEntryBuilder::from_domain
/// [`without_message_extension`]: DomainError::without_message_extension
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[error("{message}")]
pub struct DomainError<C: ErrorClassification = ErrorType> {
    message: String,
    classification: C,
    include_message_extension: bool,
}

impl<C: ErrorClassification> DomainError<C> {
    /// Build an error from a message and classification. Never fails.
    pub fn new(message: impl Into<String>, classification: C) -> Self {
        Self {
            message: message.into(),
            classification,
            include_message_extension: true,
        }
    }

    /// Drop the `errorMessage` extension, leaving the entry with no
    /// extensions beyond what the engine adds itself.
    #[must_use]
    pub fn without_message_extension(mut self) -> Self {
        self.include_message_extension = false;
        self
    }

    /// The message supplied at construction, unmodified.
    pub fn message(&self) -> &str {
        &self.message
    }

    /// The classification supplied at construction, unmodified.
    pub fn classification(&self) -> &C {
        &self.classification
    }

    /// Always `None`: locations are attached at the resolver boundary,
    /// not on the raised value.
    pub fn locations(&self) -> Option<&[SourceLocation]> {
        None
    }

    /// The diagnostic payload for the response entry, if configured.
    pub fn extensions(&self) -> Option<Extensions> {
        self.include_message_extension.then(|| {
            let mut map = Extensions::new();
            map.insert("errorMessage".to_owned(), self.message.clone().into());
            map
        })
    }
}

impl<C: ErrorClassification> GraphQlError for DomainError<C> {
    fn message(&self) -> &str {
        &self.message
    }

    fn locations(&self) -> Option<&[SourceLocation]> {
        None
    }

    fn classification(&self) -> &dyn ErrorClassification {
        &self.classification
    }

    fn extensions(&self) -> Option<Extensions> {
        DomainError::extensions(self)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[derive(Clone, Copy, Debug, PartialEq, Eq)]
    enum AppClassification {
        NotFound,
    }

    impl ErrorClassification for AppClassification {
        fn code(&self) -> &'static str {
            match self {
                AppClassification::NotFound => "NOT_FOUND",
            }
        }
    }

    #[test]
    fn message_and_classification_pass_through_unmodified() {
        let messages = [
            "",
            "  padded  ",
            "priceModifier can not be less than 0.9 and more than 1.02",
            "支払い方法が無効です",
            "line one\nline two",
        ];
        for message in messages {
            let err = DomainError::new(message, ErrorType::ValidationError);
            assert_eq!(err.message(), message);
            assert_eq!(*err.classification(), ErrorType::ValidationError);
        }
    }

    #[test]
    fn locations_are_never_reported() {
        let err = DomainError::new("no rows", ErrorType::DataFetchingException);
        assert!(err.locations().is_none());
        assert!(err.locations().is_none());
        let other = DomainError::new("no rows", ErrorType::ValidationError);
        assert!(other.locations().is_none());
    }

    #[test]
    fn default_variant_mirrors_message_into_extensions() {
        for message in ["Invalid price modifier", ""] {
            let err = DomainError::new(message, ErrorType::ValidationError);
            let extensions = err.extensions().unwrap();
            assert_eq!(extensions.len(), 1);
            assert_eq!(extensions["errorMessage"], json!(message));
        }
    }

    #[test]
    fn bare_variant_reports_no_extensions() {
        let err = DomainError::new("Invalid price modifier", ErrorType::ValidationError)
            .without_message_extension();
        assert!(err.extensions().is_none());
    }

    #[test]
    fn equal_inputs_are_behaviorally_indistinguishable() {
        let a = DomainError::new(
            "Undefined error occurred, please try again.",
            ErrorType::DataFetchingException,
        );
        let b = DomainError::new(
            "Undefined error occurred, please try again.",
            ErrorType::DataFetchingException,
        );
        assert_eq!(a, b);
        assert_eq!(a.message(), b.message());
        assert_eq!(a.classification(), b.classification());
        assert_eq!(a.locations(), b.locations());
        assert_eq!(a.extensions(), b.extensions());
    }

    #[test]
    fn engine_defined_classifications_stay_opaque() {
        let err = DomainError::new("User not found", AppClassification::NotFound);
        assert_eq!(err.message(), "User not found");
        assert_eq!(*err.classification(), AppClassification::NotFound);
        assert!(err.locations().is_none());
        let extensions = err.extensions().unwrap();
        assert_eq!(extensions["errorMessage"], json!("User not found"));
    }

    #[test]
    fn display_matches_message() {
        let err = DomainError::new(
            "Invalid payment method in request or invalid config",
            ErrorType::ValidationError,
        );
        assert_eq!(
            err.to_string(),
            "Invalid payment method in request or invalid config"
        );
    }

    #[test]
    fn specification_entry_shape() {
        let err = DomainError::new("User not found", AppClassification::NotFound);
        assert_eq!(
            err.to_specification(),
            json!({
                "message": "User not found",
                "extensions": {
                    "errorMessage": "User not found",
                    "classification": "NOT_FOUND",
                }
            })
        );
        let bare = err.without_message_extension();
        assert_eq!(
            bare.to_specification(),
            json!({
                "message": "User not found",
                "extensions": {"classification": "NOT_FOUND"}
            })
        );
    }

    #[test]
    fn propagates_through_question_mark() {
        fn reject() -> crate::Result<u64> {
            Err(DomainError::new(
                "Invalid price modifier",
                ErrorType::ValidationError,
            ))
        }
        fn resolve() -> crate::Result<u64> {
            let points = reject()?;
            Ok(points)
        }
        let err = resolve().unwrap_err();
        assert_eq!(*err.classification(), ErrorType::ValidationError);
    }
}
