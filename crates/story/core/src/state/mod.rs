//! Authoritative story state representation.
//!
//! This module owns the data structures describing characters, items, and
//! the bounded containers that hold them. The roster is the single arena
//! owning every character; everything else refers to characters by name.
//! Mutation flows exclusively through [`crate::engine::StoryEngine`].

pub mod character;
pub mod container;
pub mod facets;
pub mod item;

pub use character::{Archetype, Character, CharacterName};
pub use container::{BoundedContainer, ContainerError, Named};
pub use facets::{FacetKind, FacetSet};
pub use item::{Item, ItemKind, ItemName, ItemSpec};

use std::collections::BTreeMap;

/// The active roster: every character in the story, keyed by name.
///
/// `BTreeMap` keeps enumeration deterministic (lexicographic by name),
/// which the `Show characters` output relies on.
#[derive(Clone, Debug, PartialEq, Eq, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct StoryState {
    roster: BTreeMap<CharacterName, Character>,
}

impl StoryState {
    /// Creates an empty roster.
    pub fn new() -> Self {
        Self::default()
    }

    pub fn contains(&self, name: &CharacterName) -> bool {
        self.roster.contains_key(name)
    }

    pub fn character(&self, name: &CharacterName) -> Option<&Character> {
        self.roster.get(name)
    }

    pub fn character_mut(&mut self, name: &CharacterName) -> Option<&mut Character> {
        self.roster.get_mut(name)
    }

    /// Adds a character to the roster.
    ///
    /// Returns the character back when the name is already taken; the
    /// engine reports that as a duplicate-name failure.
    pub fn spawn(&mut self, character: Character) -> Result<(), Character> {
        if self.roster.contains_key(character.name()) {
            return Err(character);
        }
        self.roster.insert(character.name().clone(), character);
        Ok(())
    }

    /// Ordered enumeration of the roster.
    pub fn characters(&self) -> impl Iterator<Item = &Character> {
        self.roster.values()
    }

    pub fn len(&self) -> usize {
        self.roster.len()
    }

    pub fn is_empty(&self) -> bool {
        self.roster.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::StoryConfig;

    #[test]
    fn spawn_rejects_duplicate_names() {
        let config = StoryConfig::default();
        let mut state = StoryState::new();

        let first = Character::spawn("Rin".into(), 100, Archetype::Fighter, &config);
        state.spawn(first).unwrap();

        let second = Character::spawn("Rin".into(), 50, Archetype::Wizard, &config);
        assert!(state.spawn(second).is_err());
        assert_eq!(state.character(&"Rin".into()).unwrap().health(), 100);
    }

    #[test]
    fn roster_enumeration_is_name_ordered() {
        let config = StoryConfig::default();
        let mut state = StoryState::new();
        for name in ["Cid", "Ada", "Bea"] {
            state
                .spawn(Character::spawn(name.into(), 10, Archetype::Fighter, &config))
                .unwrap();
        }

        let names: Vec<&str> = state.characters().map(|c| c.name().as_str()).collect();
        assert_eq!(names, vec!["Ada", "Bea", "Cid"]);
    }
}
