//! Reflection targets and attribute occurrences
//!
//! A [`ReflectionTarget`] is any construct attributes can be attached to: a
//! class, a class constant, a function or method, a parameter, or a property.
//! Each target carries its attribute occurrences in declaration order. An
//! [`AttributeOccurrence`] records the declared class name and the raw
//! constructor arguments, and can default-construct an instance through the
//! registry.

use crate::error::{ReflectError, ReflectResult};
use crate::introspection::is_subclass_of;
use crate::registry::ClassRegistry;
use crate::value::{ObjectRef, Value};

/// Kind of construct a target represents
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TargetKind {
    /// A class declaration
    Class,
    /// A class constant
    ClassConstant,
    /// A free function or a method
    Function,
    /// A function or method parameter
    Parameter,
    /// A property
    Property,
}

/// One attribute attachment on a target
///
/// Records the class name the attachment declares and the constructor
/// arguments it supplies, exactly as written at the attachment site. The
/// declared class is not required to be registered; unregistered names simply
/// cannot be resolved for subclass matching or default construction.
#[derive(Debug)]
pub struct AttributeOccurrence {
    class_name: String,
    arguments: Vec<Value>,
}

impl AttributeOccurrence {
    /// Create an occurrence of the named class with its arguments
    pub fn new(class_name: impl Into<String>, arguments: Vec<Value>) -> Self {
        Self {
            class_name: class_name.into(),
            arguments,
        }
    }

    /// Declared class name of this occurrence
    pub fn name(&self) -> &str {
        &self.class_name
    }

    /// Raw constructor arguments in declaration order
    pub fn arguments(&self) -> &[Value] {
        &self.arguments
    }

    /// Default-construct an instance of this occurrence's declared class
    ///
    /// Resolves the declared class in the registry and runs its registered
    /// constructor with the occurrence's own arguments. Fails if the class is
    /// unknown, not marked usable as an attribute, or has no constructor.
    pub fn instantiate(&self, registry: &ClassRegistry) -> ReflectResult<ObjectRef> {
        let class = registry
            .get_class_by_name(self.name())
            .ok_or_else(|| ReflectError::UnknownClass {
                name: self.class_name.clone(),
            })?;

        if !class.attribute_capable {
            return Err(ReflectError::NotAttributeCapable {
                name: class.name.clone(),
            });
        }

        let constructor = class.constructor().ok_or_else(|| ReflectError::NoConstructor {
            name: class.name.clone(),
        })?;

        constructor(&self.arguments)
    }
}

/// A construct that attributes are attached to
#[derive(Debug)]
pub struct ReflectionTarget {
    /// Kind of construct
    pub kind: TargetKind,
    /// Name of the construct (class name, function name, ...)
    pub name: String,
    /// Attribute occurrences in declaration order
    attributes: Vec<AttributeOccurrence>,
}

impl ReflectionTarget {
    /// Create a target with no attributes attached
    pub fn new(kind: TargetKind, name: impl Into<String>) -> Self {
        Self {
            kind,
            name: name.into(),
            attributes: Vec::new(),
        }
    }

    /// Attach an attribute occurrence, preserving declaration order
    pub fn with_attribute(mut self, occurrence: AttributeOccurrence) -> Self {
        self.attributes.push(occurrence);
        self
    }

    /// All attribute occurrences on this target, in declaration order
    pub fn attributes(&self) -> &[AttributeOccurrence] {
        &self.attributes
    }

    /// Attribute occurrences matching a class, in declaration order
    ///
    /// Exact mode matches occurrences whose declared name equals the class's
    /// name. With `match_subclasses`, an occurrence also matches when its
    /// declared class resolves in the registry and is a subclass of the given
    /// class. An occurrence naming an unregistered class can only match by
    /// exact name.
    pub fn attribute_occurrences(
        &self,
        registry: &ClassRegistry,
        class_id: usize,
        match_subclasses: bool,
    ) -> Vec<&AttributeOccurrence> {
        let Some(wanted) = registry.get_class(class_id) else {
            return Vec::new();
        };

        self.attributes
            .iter()
            .filter(|occurrence| {
                if occurrence.name() == wanted.name {
                    return true;
                }
                if !match_subclasses {
                    return false;
                }
                match registry.get_class_by_name(occurrence.name()) {
                    Some(declared) => is_subclass_of(registry, declared.id, class_id),
                    None => false,
                }
            })
            .collect()
    }
}
