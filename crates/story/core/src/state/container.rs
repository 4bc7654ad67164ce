//! Bounded, name-keyed item storage.
//!
//! One [`BoundedContainer`] exists per (character, item kind) pair. The
//! capacity is fixed at construction; every mutation preserves
//! `len() <= capacity`, and a rejected insert leaves the elements untouched.

use std::collections::BTreeMap;

use super::item::ItemName;

/// Types stored in a [`BoundedContainer`] expose the name used as their key.
pub trait Named {
    fn name(&self) -> &ItemName;
}

/// Errors raised by container mutations.
#[derive(Clone, Debug, PartialEq, Eq, thiserror::Error)]
pub enum ContainerError {
    /// Inserting a new name would grow the container past its capacity.
    #[error("container is full (capacity {capacity})")]
    CapacityExceeded { capacity: usize },

    /// The named element is not present.
    #[error("no element named `{name}`")]
    NotFound { name: ItemName },
}

/// Name-keyed collection with a fixed maximum size.
///
/// Re-inserting an existing name overwrites the stored value in place
/// without counting against capacity. Iteration order is the key order of
/// the underlying `BTreeMap`, so enumeration is deterministic.
#[derive(Clone, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct BoundedContainer<T> {
    elements: BTreeMap<ItemName, T>,
    capacity: usize,
}

impl<T: Named> BoundedContainer<T> {
    /// Creates an empty container that can hold at most `capacity` elements.
    pub fn new(capacity: usize) -> Self {
        Self {
            elements: BTreeMap::new(),
            capacity,
        }
    }

    pub fn capacity(&self) -> usize {
        self.capacity
    }

    pub fn len(&self) -> usize {
        self.elements.len()
    }

    pub fn is_empty(&self) -> bool {
        self.elements.is_empty()
    }

    pub fn contains(&self, name: &ItemName) -> bool {
        self.elements.contains_key(name)
    }

    /// Inserts `value` under its own name.
    ///
    /// Fails with [`ContainerError::CapacityExceeded`] when the name is new
    /// and the container is already full; the stored elements are unchanged
    /// in that case.
    pub fn insert(&mut self, value: T) -> Result<(), ContainerError> {
        let name = value.name().clone();
        if !self.elements.contains_key(&name) && self.elements.len() == self.capacity {
            return Err(ContainerError::CapacityExceeded {
                capacity: self.capacity,
            });
        }
        self.elements.insert(name, value);
        Ok(())
    }

    /// Removes and returns the element stored under `name`.
    pub fn remove(&mut self, name: &ItemName) -> Result<T, ContainerError> {
        self.elements
            .remove(name)
            .ok_or_else(|| ContainerError::NotFound { name: name.clone() })
    }

    /// Looks up the element stored under `name`. Absence is a first-class
    /// result; there is no default-constructed fallback.
    pub fn get(&self, name: &ItemName) -> Option<&T> {
        self.elements.get(name)
    }

    pub fn get_mut(&mut self, name: &ItemName) -> Option<&mut T> {
        self.elements.get_mut(name)
    }

    /// Restartable ordered enumeration of the current contents.
    pub fn iter(&self) -> impl Iterator<Item = &T> {
        self.elements.values()
    }
}
