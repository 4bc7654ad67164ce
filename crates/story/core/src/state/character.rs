//! Character state types.
//!
//! A character is a named, mutable pool of health points plus the facet set
//! its archetype grants. Health is a signed quantity with no clamping in
//! either direction; dropping to zero or below does not remove a character
//! from the roster or from targeting.

use std::fmt;

use super::facets::{FacetKind, FacetSet};
use crate::config::StoryConfig;

/// Name of a character, unique within the roster and immutable after
/// creation. Items and facets refer to characters through this key.
#[derive(Clone, Debug, PartialEq, Eq, PartialOrd, Ord, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct CharacterName(pub String);

impl CharacterName {
    pub fn new(name: impl Into<String>) -> Self {
        Self(name.into())
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for CharacterName {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl From<&str> for CharacterName {
    fn from(name: &str) -> Self {
        Self(name.to_owned())
    }
}

/// Playable roles, each a fixed combination of capability facets.
#[derive(
    Clone, Copy, Debug, PartialEq, Eq, Hash, strum::Display, strum::EnumString, strum::AsRefStr,
)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[strum(serialize_all = "lowercase")]
pub enum Archetype {
    Fighter,
    Archer,
    Wizard,
}

impl Archetype {
    /// The facets this archetype grants at creation.
    pub fn facets(self) -> &'static [FacetKind] {
        match self {
            Archetype::Fighter => &[FacetKind::Weapons, FacetKind::Potions],
            Archetype::Archer => &[FacetKind::Weapons, FacetKind::Potions, FacetKind::Spells],
            Archetype::Wizard => &[FacetKind::Potions, FacetKind::Spells],
        }
    }
}

/// One character in the roster.
#[derive(Clone, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Character {
    name: CharacterName,
    health: i64,
    pub archetype: Archetype,
    pub facets: FacetSet,
}

impl Character {
    /// Creates a character of the given archetype with empty containers
    /// sized from `config`.
    pub fn spawn(name: CharacterName, health: i64, archetype: Archetype, config: &StoryConfig) -> Self {
        Self {
            name,
            health,
            archetype,
            facets: FacetSet::with_kinds(archetype.facets(), config),
        }
    }

    pub fn name(&self) -> &CharacterName {
        &self.name
    }

    pub fn health(&self) -> i64 {
        self.health
    }

    /// Lowers health by `amount`. Health may go negative.
    pub fn take_damage(&mut self, amount: i64) {
        self.health -= amount;
    }

    /// Raises health by `amount`. There is no ceiling.
    pub fn heal(&mut self, amount: i64) {
        self.health += amount;
    }

    pub fn has_facet(&self, kind: FacetKind) -> bool {
        self.facets.has(kind)
    }
}

impl fmt::Display for Character {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}:{}", self.name, self.health)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn fighter(name: &str, health: i64) -> Character {
        Character::spawn(name.into(), health, Archetype::Fighter, &StoryConfig::default())
    }

    #[test]
    fn damage_then_heal_restores_health_exactly() {
        let mut rin = fighter("Rin", 100);
        for amount in [0, 1, 37, -12, 1_000_000] {
            rin.take_damage(amount);
            rin.heal(amount);
            assert_eq!(rin.health(), 100);
        }
    }

    #[test]
    fn health_is_not_clamped_at_zero() {
        let mut rin = fighter("Rin", 10);
        rin.take_damage(25);
        assert_eq!(rin.health(), -15);
    }

    #[test]
    fn display_is_name_colon_health() {
        let rin = fighter("Rin", 100);
        assert_eq!(rin.to_string(), "Rin:100");
    }

    #[test]
    fn archetypes_grant_their_facet_sets() {
        let config = StoryConfig::default();
        let fighter = Character::spawn("F".into(), 1, Archetype::Fighter, &config);
        let archer = Character::spawn("A".into(), 1, Archetype::Archer, &config);
        let wizard = Character::spawn("W".into(), 1, Archetype::Wizard, &config);

        assert!(fighter.has_facet(FacetKind::Weapons));
        assert!(fighter.has_facet(FacetKind::Potions));
        assert!(!fighter.has_facet(FacetKind::Spells));

        assert!(archer.has_facet(FacetKind::Weapons));
        assert!(archer.has_facet(FacetKind::Potions));
        assert!(archer.has_facet(FacetKind::Spells));

        assert!(!wizard.has_facet(FacetKind::Weapons));
        assert!(wizard.has_facet(FacetKind::Potions));
        assert!(wizard.has_facet(FacetKind::Spells));
    }

    #[test]
    fn archetype_tokens_parse_script_arguments() {
        assert_eq!("fighter".parse::<Archetype>().unwrap(), Archetype::Fighter);
        assert_eq!("archer".parse::<Archetype>().unwrap(), Archetype::Archer);
        assert_eq!("wizard".parse::<Archetype>().unwrap(), Archetype::Wizard);
        assert!("paladin".parse::<Archetype>().is_err());
    }
}
