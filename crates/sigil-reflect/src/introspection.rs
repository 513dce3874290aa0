//! Class hierarchy introspection
//!
//! Queries over the inheritance chain recorded in the registry. Used by the
//! occurrence filter for class-or-subclass matching and exported for callers.

use crate::class::Class;
use crate::registry::ClassRegistry;

/// Check if a class is a subclass of another class
///
/// A class counts as a subclass of itself.
pub fn is_subclass_of(registry: &ClassRegistry, sub_class_id: usize, super_class_id: usize) -> bool {
    if sub_class_id == super_class_id {
        return true;
    }

    let mut current_id = sub_class_id;
    while let Some(class) = registry.get_class(current_id) {
        if let Some(parent_id) = class.parent_id {
            if parent_id == super_class_id {
                return true;
            }
            current_id = parent_id;
        } else {
            break;
        }
    }

    false
}

/// Get the class hierarchy (inheritance chain) for a class
///
/// Returns a vector of classes from the given class up to the root.
/// The first element is the class itself, the last is the root ancestor.
pub fn class_hierarchy(registry: &ClassRegistry, class_id: usize) -> Vec<&Class> {
    let mut hierarchy = Vec::new();
    let mut current_id = Some(class_id);

    while let Some(id) = current_id {
        if let Some(class) = registry.get_class(id) {
            hierarchy.push(class);
            current_id = class.parent_id;
        } else {
            break;
        }
    }

    hierarchy
}
