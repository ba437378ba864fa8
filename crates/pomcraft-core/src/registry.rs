//! Typed name-to-handle registries.
//!
//! Output components and archive tasks are looked up by name when a
//! publication is configured. A registry turns a missing entry into a
//! [`PomcraftError::ComponentNotFound`] instead of a late failure.

use std::collections::BTreeMap;

use pomcraft_util::errors::PomcraftError;

/// Something that is registered under a unique name.
pub trait Named {
    fn name(&self) -> &str;
}

/// A mapping from name to a strongly-typed handle.
#[derive(Debug, Clone)]
pub struct Registry<T> {
    entries: BTreeMap<String, T>,
}

impl<T> Default for Registry<T> {
    fn default() -> Self {
        Self {
            entries: BTreeMap::new(),
        }
    }
}

impl<T: Named> Registry<T> {
    pub fn new() -> Self {
        Self::default()
    }

    /// Register `item` under its own name, returning any entry it replaced.
    pub fn register(&mut self, item: T) -> Option<T> {
        self.entries.insert(item.name().to_string(), item)
    }

    /// Look up an entry, failing with `ComponentNotFound` if it is absent.
    pub fn get(&self, name: &str) -> miette::Result<&T> {
        self.entries.get(name).ok_or_else(|| {
            PomcraftError::ComponentNotFound {
                name: name.to_string(),
            }
            .into()
        })
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}
