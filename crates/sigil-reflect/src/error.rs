//! Reflection layer errors

use thiserror::Error;

/// Errors reported by the reflection registry itself
///
/// These are the host-level failures: unknown classes, classes that refuse
/// default construction, and constructor failures. Callers layered on top of
/// the registry pass them through unchanged.
#[derive(Debug, Clone, Error, PartialEq)]
pub enum ReflectError {
    /// The named class is not registered
    #[error("unknown class: {name}")]
    UnknownClass {
        /// Class name that was not found
        name: String,
    },

    /// Attempted default construction of a class that is not marked usable
    /// as an attribute
    #[error("attempting to use non-attribute class \"{name}\" as attribute")]
    NotAttributeCapable {
        /// Class lacking the attribute marker
        name: String,
    },

    /// The class was registered without a constructor
    #[error("class {name} has no registered constructor")]
    NoConstructor {
        /// Class missing a constructor
        name: String,
    },

    /// A registered constructor rejected the occurrence's arguments
    #[error("failed to construct {class}: {message}")]
    Instantiation {
        /// Class being constructed
        class: String,
        /// Constructor-reported reason
        message: String,
    },
}

/// Reflection operation result
pub type ReflectResult<T> = Result<T, ReflectError>;
