//! Class registry for managing declared class metadata

use std::any::TypeId;

use rustc_hash::FxHashMap;

use crate::class::Class;
use crate::value::AttributeObject;

/// Registry of declared classes
///
/// Populated once during setup, then only read. Lookups are available by ID,
/// by name, and by the backing Rust type of a constructed instance.
#[derive(Debug, Default)]
pub struct ClassRegistry {
    /// Classes indexed by ID
    classes: Vec<Class>,
    /// Class name to ID mapping
    name_to_id: FxHashMap<String, usize>,
    /// Backing Rust type to ID mapping
    type_to_id: FxHashMap<TypeId, usize>,
}

impl ClassRegistry {
    /// Create a new empty registry
    pub fn new() -> Self {
        Self {
            classes: Vec::new(),
            name_to_id: FxHashMap::default(),
            type_to_id: FxHashMap::default(),
        }
    }

    /// Register a new class
    pub fn register_class(&mut self, class: Class) -> usize {
        let id = class.id;
        let name = class.name.clone();
        let type_id = class.type_id();

        self.classes.push(class);
        self.name_to_id.insert(name, id);
        self.type_to_id.insert(type_id, id);

        id
    }

    /// Get class by ID
    pub fn get_class(&self, id: usize) -> Option<&Class> {
        self.classes.get(id)
    }

    /// Get class by name
    pub fn get_class_by_name(&self, name: &str) -> Option<&Class> {
        self.name_to_id
            .get(name)
            .and_then(|id| self.classes.get(*id))
    }

    /// Check whether a class name is registered
    pub fn class_exists(&self, name: &str) -> bool {
        self.name_to_id.contains_key(name)
    }

    /// Get the declared class of a constructed instance
    ///
    /// Resolves through the instance's concrete Rust type; returns None for
    /// instances whose type was never registered.
    pub fn class_of_instance(&self, instance: &dyn AttributeObject) -> Option<&Class> {
        self.type_to_id
            .get(&instance.as_any().type_id())
            .and_then(|id| self.classes.get(*id))
    }

    /// Get next available class ID
    pub fn next_class_id(&self) -> usize {
        self.classes.len()
    }

    /// Iterate over all classes with their IDs
    pub fn iter(&self) -> impl Iterator<Item = (usize, &Class)> {
        self.classes.iter().enumerate()
    }

    /// Get number of registered classes
    pub fn len(&self) -> usize {
        self.classes.len()
    }

    /// Check if the registry is empty
    pub fn is_empty(&self) -> bool {
        self.classes.is_empty()
    }
}
