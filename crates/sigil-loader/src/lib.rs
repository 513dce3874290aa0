//! Sigil Attribute Loader
//!
//! Validated lookup of attribute metadata: an [`AttributeLoader`] is bound at
//! construction to one attribute class, an optional instance builder, and a
//! subclass-matching policy, then answers `load(target)` with validated
//! instances in declaration order.
//!
//! ## Usage
//!
//! ```
//! use std::sync::Arc;
//! use sigil_loader::AttributeLoader;
//! use sigil_reflect::{
//!     AttributeOccurrence, Class, ClassRegistry, ObjectRef, ReflectResult,
//!     ReflectionTarget, TargetKind, Value,
//! };
//!
//! #[derive(Debug)]
//! struct Route {
//!     path: String,
//! }
//!
//! fn route_ctor(args: &[Value]) -> ReflectResult<ObjectRef> {
//!     let path = args.first().and_then(Value::as_str).unwrap_or("/");
//!     Ok(Box::new(Route { path: path.to_string() }))
//! }
//!
//! let mut registry = ClassRegistry::new();
//! registry.register_class(
//!     Class::new::<Route>(0, "Route")
//!         .usable_as_attribute()
//!         .with_constructor(route_ctor),
//! );
//!
//! let target = ReflectionTarget::new(TargetKind::Function, "list_users")
//!     .with_attribute(AttributeOccurrence::new("Route", vec![Value::from("/users")]));
//!
//! let loader = AttributeLoader::new(Arc::new(registry), "Route", false).unwrap();
//! let routes = loader.load(&target).unwrap();
//! assert_eq!(routes[0].downcast_ref::<Route>().unwrap().path, "/users");
//! ```

#![warn(missing_docs)]
#![warn(rust_2018_idioms)]

pub mod error;
pub mod loader;

pub use error::{ConfigError, LoadError};
pub use loader::{AttributeLoader, InstanceBuilder};

// Re-export the reflection types the loader API surfaces (canonical
// definitions live in sigil-reflect).
pub use sigil_reflect::{
    AttributeObject, AttributeOccurrence, Class, ClassRegistry, ObjectRef, ReflectError,
    ReflectionTarget, TargetKind, Value,
};
