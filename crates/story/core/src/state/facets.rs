//! Capability facets.
//!
//! A facet grants a character one category of action (attack, drink, cast)
//! together with the bounded container backing it. Archetypes are defined
//! purely as sets of facets; there is no inheritance between roles.

use super::container::BoundedContainer;
use super::item::{Item, ItemKind};
use crate::config::StoryConfig;

/// The three capability categories a character can hold.
#[derive(
    Clone, Copy, Debug, PartialEq, Eq, Hash, strum::Display, strum::EnumString, strum::AsRefStr,
)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[strum(serialize_all = "lowercase")]
pub enum FacetKind {
    Weapons,
    Potions,
    Spells,
}

impl FacetKind {
    /// The item kind stored by this facet's container.
    pub fn item_kind(self) -> ItemKind {
        match self {
            FacetKind::Weapons => ItemKind::Weapon,
            FacetKind::Potions => ItemKind::Potion,
            FacetKind::Spells => ItemKind::Spell,
        }
    }
}

impl From<ItemKind> for FacetKind {
    fn from(kind: ItemKind) -> Self {
        match kind {
            ItemKind::Weapon => FacetKind::Weapons,
            ItemKind::Potion => FacetKind::Potions,
            ItemKind::Spell => FacetKind::Spells,
        }
    }
}

/// The facets granted to one character: at most one container per kind.
///
/// An absent facet means the character cannot hold or use that item kind
/// at all, which is distinct from holding an empty container.
#[derive(Clone, Debug, PartialEq, Eq, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct FacetSet {
    weapons: Option<BoundedContainer<Item>>,
    potions: Option<BoundedContainer<Item>>,
    spells: Option<BoundedContainer<Item>>,
}

impl FacetSet {
    /// Builds the facet set for the given kinds, each container empty and
    /// sized from `config`.
    pub fn with_kinds(kinds: &[FacetKind], config: &StoryConfig) -> Self {
        let mut set = Self::default();
        for kind in kinds {
            let capacity = match kind {
                FacetKind::Weapons => config.arsenal_capacity,
                FacetKind::Potions => config.satchel_capacity,
                FacetKind::Spells => config.spell_book_capacity,
            };
            *set.slot_mut(*kind) = Some(BoundedContainer::new(capacity));
        }
        set
    }

    pub fn has(&self, kind: FacetKind) -> bool {
        self.container(kind).is_some()
    }

    pub fn container(&self, kind: FacetKind) -> Option<&BoundedContainer<Item>> {
        match kind {
            FacetKind::Weapons => self.weapons.as_ref(),
            FacetKind::Potions => self.potions.as_ref(),
            FacetKind::Spells => self.spells.as_ref(),
        }
    }

    pub fn container_mut(&mut self, kind: FacetKind) -> Option<&mut BoundedContainer<Item>> {
        self.slot_mut(kind).as_mut()
    }

    fn slot_mut(&mut self, kind: FacetKind) -> &mut Option<BoundedContainer<Item>> {
        match kind {
            FacetKind::Weapons => &mut self.weapons,
            FacetKind::Potions => &mut self.potions,
            FacetKind::Spells => &mut self.spells,
        }
    }
}
