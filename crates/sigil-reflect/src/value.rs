//! Dynamic values for attribute arguments and constructed instances
//!
//! Attribute occurrences carry their constructor arguments as [`Value`]s, and
//! instance builders hand their results back as [`Value`]s. Constructed
//! attribute instances live behind the [`AttributeObject`] trait so callers
//! can recover their runtime class and downcast to concrete types.

use std::any::Any;
use std::fmt;

/// A constructed attribute instance, boxed for dynamic handling.
pub type ObjectRef = Box<dyn AttributeObject>;

/// Object-safe view of a constructed attribute instance.
///
/// Implemented automatically for every `'static + Send + Sync` type with a
/// `Debug` impl; attribute classes never implement this by hand. The
/// `Send + Sync` requirement keeps targets and loaded instances shareable
/// across threads.
pub trait AttributeObject: Any + fmt::Debug + Send + Sync {
    /// Borrow the instance as [`Any`] for downcasting.
    fn as_any(&self) -> &dyn Any;

    /// Convert the boxed instance into `Box<dyn Any>` for by-value downcasts.
    fn into_any(self: Box<Self>) -> Box<dyn Any>;

    /// Concrete Rust type name, used in diagnostics when the instance's type
    /// is not registered under any class name.
    fn type_name(&self) -> &'static str;
}

impl<T: Any + fmt::Debug + Send + Sync> AttributeObject for T {
    fn as_any(&self) -> &dyn Any {
        self
    }

    fn into_any(self: Box<Self>) -> Box<dyn Any> {
        self
    }

    fn type_name(&self) -> &'static str {
        std::any::type_name::<T>()
    }
}

impl dyn AttributeObject {
    /// Check whether the instance is of concrete type `T`.
    pub fn is<T: Any>(&self) -> bool {
        self.as_any().is::<T>()
    }

    /// Borrow the instance as `T` if it is one.
    pub fn downcast_ref<T: Any>(&self) -> Option<&T> {
        self.as_any().downcast_ref::<T>()
    }
}

/// Runtime representation of attribute values
///
/// Covers the constant kinds an attribute declaration may carry as
/// constructor arguments, plus [`Value::Object`] for constructed instances
/// flowing back out of builders and constructors.
#[derive(Debug)]
pub enum Value {
    /// Null / absent value
    Null,

    /// Boolean
    Bool(bool),

    /// 64-bit signed integer
    Int(i64),

    /// 64-bit float
    Float(f64),

    /// String
    Str(String),

    /// Ordered list of values
    List(Vec<Value>),

    /// A constructed attribute instance
    Object(ObjectRef),
}

impl Value {
    /// Wrap a concrete instance as an object value.
    pub fn object<T: Any + fmt::Debug + Send + Sync>(instance: T) -> Self {
        Value::Object(Box::new(instance))
    }

    /// Get the kind name as a string (for diagnostics)
    ///
    /// Returns:
    /// - "null" for Null
    /// - "boolean" for Bool
    /// - "integer" for Int
    /// - "float" for Float
    /// - "string" for Str
    /// - "list" for List
    /// - "object" for Object
    pub fn kind(&self) -> &'static str {
        match self {
            Value::Null => "null",
            Value::Bool(_) => "boolean",
            Value::Int(_) => "integer",
            Value::Float(_) => "float",
            Value::Str(_) => "string",
            Value::List(_) => "list",
            Value::Object(_) => "object",
        }
    }

    /// Check if this is a null value
    pub fn is_null(&self) -> bool {
        matches!(self, Value::Null)
    }

    /// Check if this is an object value
    pub fn is_object(&self) -> bool {
        matches!(self, Value::Object(_))
    }

    /// Get the boolean if this is a boolean value
    pub fn as_bool(&self) -> Option<bool> {
        match self {
            Value::Bool(b) => Some(*b),
            _ => None,
        }
    }

    /// Get the integer if this is an integer value
    pub fn as_int(&self) -> Option<i64> {
        match self {
            Value::Int(n) => Some(*n),
            _ => None,
        }
    }

    /// Get the float if this is a float value
    pub fn as_float(&self) -> Option<f64> {
        match self {
            Value::Float(n) => Some(*n),
            _ => None,
        }
    }

    /// Get the string if this is a string value
    pub fn as_str(&self) -> Option<&str> {
        match self {
            Value::Str(s) => Some(s),
            _ => None,
        }
    }

    /// Get the elements if this is a list value
    pub fn as_list(&self) -> Option<&[Value]> {
        match self {
            Value::List(items) => Some(items),
            _ => None,
        }
    }
}

impl From<bool> for Value {
    fn from(b: bool) -> Self {
        Value::Bool(b)
    }
}

impl From<i64> for Value {
    fn from(n: i64) -> Self {
        Value::Int(n)
    }
}

impl From<f64> for Value {
    fn from(n: f64) -> Self {
        Value::Float(n)
    }
}

impl From<&str> for Value {
    fn from(s: &str) -> Self {
        Value::Str(s.to_string())
    }
}

impl From<String> for Value {
    fn from(s: String) -> Self {
        Value::Str(s)
    }
}
