//! Loader errors
//!
//! Two kinds, matching the two phases of the loader's life: configuration
//! errors at construction, and builder-contract or propagated reflection
//! errors during a load.

use thiserror::Error;

use sigil_reflect::ReflectError;

/// Errors reported when constructing an [`crate::AttributeLoader`]
///
/// Not retried; the configuration itself is wrong.
#[derive(Debug, Clone, Error, PartialEq)]
pub enum ConfigError {
    /// The requested attribute class is not registered
    #[error("class {name} does not exist")]
    ClassNotFound {
        /// Requested class name
        name: String,
    },

    /// The class exists but is not declared usable as an attribute
    #[error("class {name} cannot be used as an attribute")]
    NotAttributeCapable {
        /// Requested class name
        name: String,
    },
}

/// Errors reported by [`crate::AttributeLoader::load`]
///
/// The builder must return an instance of the exact class the matched
/// occurrence declares; both violations carry the expected and actual
/// identities. Reflection-layer failures pass through unchanged.
#[derive(Debug, Clone, Error, PartialEq)]
pub enum LoadError {
    /// The builder returned something other than an object
    #[error(
        "the builder must return an instance of the declared attribute class: \
         expected instance of {expected}, but {returned} was returned"
    )]
    NotAnObject {
        /// Declared class of the matched occurrence
        expected: String,
        /// Kind of value the builder returned
        returned: &'static str,
    },

    /// The builder returned an object of a different class than declared
    #[error(
        "the builder must return an instance of the declared attribute class: \
         expected instance of {expected}, but instance of {returned} was returned"
    )]
    WrongClass {
        /// Declared class of the matched occurrence
        expected: String,
        /// Class of the instance the builder returned
        returned: String,
    },

    /// Error surfaced by the reflection layer, passed through unchanged
    #[error(transparent)]
    Reflect(#[from] ReflectError),
}
