//! Class declarations
//!
//! A [`Class`] is one registered class: its identity, its place in the
//! inheritance chain, whether it may be used as an attribute, and how to
//! construct an instance from attribute arguments.

use std::any::{Any, TypeId};

use crate::error::ReflectResult;
use crate::value::{ObjectRef, Value};

/// Constructor for a registered class
///
/// Receives the occurrence's arguments in declaration order and returns the
/// constructed instance, or an [`crate::ReflectError::Instantiation`] when
/// the arguments do not fit.
pub type ConstructorFn = fn(&[Value]) -> ReflectResult<ObjectRef>;

/// Class declaration metadata
#[derive(Debug, Clone)]
pub struct Class {
    /// Class ID (index into the registry)
    pub id: usize,
    /// Class name
    pub name: String,
    /// Parent class ID (None for root classes)
    pub parent_id: Option<usize>,
    /// Whether the class is declared usable as an attribute
    pub attribute_capable: bool,
    /// Backing Rust type identity
    type_id: TypeId,
    /// Constructor (None if the class cannot be instantiated)
    constructor: Option<ConstructorFn>,
}

impl Class {
    /// Create a new root class backed by the Rust type `T`
    pub fn new<T: Any>(id: usize, name: impl Into<String>) -> Self {
        Self {
            id,
            name: name.into(),
            parent_id: None,
            attribute_capable: false,
            type_id: TypeId::of::<T>(),
            constructor: None,
        }
    }

    /// Create a new class with a parent
    pub fn with_parent<T: Any>(id: usize, name: impl Into<String>, parent_id: usize) -> Self {
        Self {
            parent_id: Some(parent_id),
            ..Self::new::<T>(id, name)
        }
    }

    /// Mark the class as usable as an attribute
    pub fn usable_as_attribute(mut self) -> Self {
        self.attribute_capable = true;
        self
    }

    /// Attach the constructor used for default instantiation
    pub fn with_constructor(mut self, constructor: ConstructorFn) -> Self {
        self.constructor = Some(constructor);
        self
    }

    /// Get the backing Rust type identity
    pub fn type_id(&self) -> TypeId {
        self.type_id
    }

    /// Get the constructor, if one was registered
    pub fn constructor(&self) -> Option<ConstructorFn> {
        self.constructor
    }
}
