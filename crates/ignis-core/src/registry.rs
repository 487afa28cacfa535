use std::fmt;

use crate::component::{ComponentEntry, ComponentFactory};

/// Ordered list of registered components.
///
/// Kept sorted ascending by priority; every insert re-sorts the whole list.
/// The sort is stable, so entries with equal priority stay in registration
/// order. There is no deregistration: the list only grows.
pub struct ComponentRegistry {
    entries: Vec<ComponentEntry>,
}

// Manual Debug implementation, factories are not Debug
impl fmt::Debug for ComponentRegistry {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let names: Vec<&str> = self.entries.iter().map(|e| e.name()).collect();
        f.debug_struct("ComponentRegistry")
            .field("entries", &names)
            .finish()
    }
}

impl ComponentRegistry {
    /// Create a new empty registry
    pub fn new() -> Self {
        Self {
            entries: Vec::new(),
        }
    }

    /// Insert an entry and restore ascending priority order.
    pub fn insert(&mut self, entry: ComponentEntry) {
        self.entries.push(entry);
        self.entries.sort_by_key(|e| e.priority());
    }

    /// Number of registered entries.
    pub fn count(&self) -> usize {
        self.entries.len()
    }

    /// Whether the registry holds no entries.
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Component names in instantiation order.
    pub fn names_in_order(&self) -> Vec<String> {
        self.entries.iter().map(|e| e.name().to_string()).collect()
    }

    /// Priorities in instantiation order.
    pub fn priorities_in_order(&self) -> Vec<i64> {
        self.entries.iter().map(|e| e.priority()).collect()
    }

    /// Drain the factories that have not been instantiated yet, in order.
    ///
    /// Entries stay registered and keep counting toward the completion
    /// denominator; only their factory slot is consumed.
    pub(crate) fn take_pending_factories(&mut self) -> Vec<(String, ComponentFactory)> {
        self.entries
            .iter_mut()
            .filter_map(|entry| {
                entry
                    .take_factory()
                    .map(|factory| (entry.name().to_string(), factory))
            })
            .collect()
    }
}

impl Default for ComponentRegistry {
    fn default() -> Self {
        Self::new()
    }
}
