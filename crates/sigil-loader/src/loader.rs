//! Validated attribute lookup

use std::sync::Arc;

use sigil_reflect::{
    AttributeObject, AttributeOccurrence, ClassRegistry, ObjectRef, ReflectionTarget, Value,
};

use crate::error::{ConfigError, LoadError};

/// Maps a raw attribute occurrence to a constructed instance
///
/// Replaces default construction when supplied. The returned [`Value`] must
/// be an object of the exact class the occurrence declares; `load` enforces
/// that contract. Side effects inside the builder are the caller's business.
pub type InstanceBuilder = Box<dyn Fn(&AttributeOccurrence) -> Value + Send + Sync>;

/// Loader for one attribute class
///
/// Bound at construction to an attribute class, an optional
/// [`InstanceBuilder`], and a subclass-matching policy. Holds no mutable
/// state; `load` may be called any number of times, from any thread.
pub struct AttributeLoader {
    registry: Arc<ClassRegistry>,
    class_id: usize,
    class_name: String,
    builder: Option<InstanceBuilder>,
    allow_subclasses: bool,
}

impl std::fmt::Debug for AttributeLoader {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("AttributeLoader")
            .field("class_id", &self.class_id)
            .field("class_name", &self.class_name)
            .field("has_builder", &self.builder.is_some())
            .field("allow_subclasses", &self.allow_subclasses)
            .finish()
    }
}

impl AttributeLoader {
    /// Create a loader that default-constructs matched occurrences
    ///
    /// Fails if the class is not registered or is not declared usable as an
    /// attribute.
    pub fn new(
        registry: Arc<ClassRegistry>,
        class_name: &str,
        allow_subclasses: bool,
    ) -> Result<Self, ConfigError> {
        Self::build(registry, class_name, None, allow_subclasses)
    }

    /// Create a loader that constructs instances through `builder`
    pub fn with_builder(
        registry: Arc<ClassRegistry>,
        class_name: &str,
        builder: InstanceBuilder,
        allow_subclasses: bool,
    ) -> Result<Self, ConfigError> {
        Self::build(registry, class_name, Some(builder), allow_subclasses)
    }

    fn build(
        registry: Arc<ClassRegistry>,
        class_name: &str,
        builder: Option<InstanceBuilder>,
        allow_subclasses: bool,
    ) -> Result<Self, ConfigError> {
        let class = registry
            .get_class_by_name(class_name)
            .ok_or_else(|| ConfigError::ClassNotFound {
                name: class_name.to_string(),
            })?;

        if !class.attribute_capable {
            return Err(ConfigError::NotAttributeCapable {
                name: class_name.to_string(),
            });
        }

        let class_id = class.id;
        let class_name = class.name.clone();
        Ok(Self {
            registry,
            class_id,
            class_name,
            builder,
            allow_subclasses,
        })
    }

    /// Name of the attribute class this loader is bound to
    pub fn class_name(&self) -> &str {
        &self.class_name
    }

    /// Whether occurrences of subclasses are matched
    pub fn allows_subclasses(&self) -> bool {
        self.allow_subclasses
    }

    /// Load validated attribute instances attached to a target
    ///
    /// Matched occurrences are processed in declaration order: each is
    /// instantiated (default construction, or the builder when one was
    /// supplied) and then validated. The produced value must be an object
    /// whose runtime class is exactly the occurrence's declared class, even
    /// when subclass matching is enabled. A failure aborts the whole call.
    pub fn load(&self, target: &ReflectionTarget) -> Result<Vec<ObjectRef>, LoadError> {
        let occurrences =
            target.attribute_occurrences(&self.registry, self.class_id, self.allow_subclasses);

        let mut instances = Vec::with_capacity(occurrences.len());
        for occurrence in occurrences {
            let value = match &self.builder {
                None => Value::Object(occurrence.instantiate(&self.registry)?),
                Some(builder) => builder(occurrence),
            };

            let instance = match value {
                Value::Object(instance) => instance,
                other => {
                    return Err(LoadError::NotAnObject {
                        expected: occurrence.name().to_string(),
                        returned: other.kind(),
                    })
                }
            };

            // The instance must be of the occurrence's declared class, never
            // the bound class or a subclass relation.
            let returned = self.instance_class_name(instance.as_ref());
            if returned != occurrence.name() {
                return Err(LoadError::WrongClass {
                    expected: occurrence.name().to_string(),
                    returned: returned.to_string(),
                });
            }

            instances.push(instance);
        }

        Ok(instances)
    }

    /// Runtime class name of an instance: the registry's name for its
    /// concrete type, or the Rust type name when unregistered.
    fn instance_class_name<'a>(&'a self, instance: &'a dyn AttributeObject) -> &'a str {
        self.registry
            .class_of_instance(instance)
            .map(|class| class.name.as_str())
            .unwrap_or_else(|| instance.type_name())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use sigil_reflect::{Class, ReflectResult, TargetKind};

    #[derive(Debug)]
    struct Audit;

    #[derive(Debug)]
    struct Draft;

    fn audit_ctor(_args: &[Value]) -> ReflectResult<ObjectRef> {
        Ok(Box::new(Audit))
    }

    fn registry() -> Arc<ClassRegistry> {
        let mut registry = ClassRegistry::new();
        registry.register_class(
            Class::new::<Audit>(0, "Audit")
                .usable_as_attribute()
                .with_constructor(audit_ctor),
        );
        registry.register_class(Class::new::<Draft>(1, "Draft"));
        Arc::new(registry)
    }

    #[test]
    fn test_new_binds_class() {
        let loader = AttributeLoader::new(registry(), "Audit", false).unwrap();
        assert_eq!(loader.class_name(), "Audit");
        assert!(!loader.allows_subclasses());
    }

    #[test]
    fn test_new_unknown_class() {
        let err = AttributeLoader::new(registry(), "Nope", false).unwrap_err();
        assert_eq!(
            err,
            ConfigError::ClassNotFound {
                name: "Nope".to_string()
            }
        );
    }

    #[test]
    fn test_new_non_attribute_class() {
        let err = AttributeLoader::new(registry(), "Draft", true).unwrap_err();
        assert_eq!(
            err,
            ConfigError::NotAttributeCapable {
                name: "Draft".to_string()
            }
        );
    }

    #[test]
    fn test_loader_is_shareable_across_threads() {
        let loader = Arc::new(AttributeLoader::new(registry(), "Audit", false).unwrap());
        let target = Arc::new(
            ReflectionTarget::new(TargetKind::Function, "transfer")
                .with_attribute(AttributeOccurrence::new("Audit", vec![])),
        );

        let handles: Vec<_> = (0..4)
            .map(|_| {
                let loader = Arc::clone(&loader);
                let target = Arc::clone(&target);
                std::thread::spawn(move || loader.load(&target).unwrap().len())
            })
            .collect();

        for handle in handles {
            assert_eq!(handle.join().unwrap(), 1);
        }
    }
}
