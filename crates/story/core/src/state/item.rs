//! Item state types.
//!
//! Items form a closed union of three variants (weapon, potion, spell)
//! sharing name, ownership, and single-use bookkeeping. An item belongs to
//! at most one character at a time; the owner is recorded by name, never by
//! an owning reference into the roster.

use std::collections::BTreeSet;
use std::fmt;

use super::CharacterName;
use super::container::Named;

/// Name of an item, unique within the container that holds it.
#[derive(Clone, Debug, PartialEq, Eq, PartialOrd, Ord, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct ItemName(pub String);

impl ItemName {
    pub fn new(name: impl Into<String>) -> Self {
        Self(name.into())
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for ItemName {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl From<&str> for ItemName {
    fn from(name: &str) -> Self {
        Self(name.to_owned())
    }
}

/// Script token for the three item categories.
#[derive(
    Clone, Copy, Debug, PartialEq, Eq, Hash, strum::Display, strum::EnumString, strum::AsRefStr,
)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[strum(serialize_all = "lowercase")]
pub enum ItemKind {
    Weapon,
    Potion,
    Spell,
}

/// Variant-specific payload of an item.
#[derive(Clone, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum ItemSpec {
    Weapon { damage: i64 },
    Potion { heal: i64 },
    Spell { allowed_targets: BTreeSet<CharacterName> },
}

impl ItemSpec {
    pub fn kind(&self) -> ItemKind {
        match self {
            ItemSpec::Weapon { .. } => ItemKind::Weapon,
            ItemSpec::Potion { .. } => ItemKind::Potion,
            ItemSpec::Spell { .. } => ItemKind::Spell,
        }
    }
}

/// A named, owned item.
///
/// `single_use` items are removed from their container after a successful
/// use. Weapons are reusable; potions and spells are consumed.
#[derive(Clone, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Item {
    pub name: ItemName,
    pub owner: CharacterName,
    pub single_use: bool,
    pub spec: ItemSpec,
}

impl Item {
    /// Creates an item with the single-use default for its kind.
    pub fn new(name: ItemName, owner: CharacterName, spec: ItemSpec) -> Self {
        let single_use = match spec.kind() {
            ItemKind::Weapon => false,
            ItemKind::Potion | ItemKind::Spell => true,
        };
        Self {
            name,
            owner,
            single_use,
            spec,
        }
    }

    pub fn weapon(name: ItemName, owner: CharacterName, damage: i64) -> Self {
        Self::new(name, owner, ItemSpec::Weapon { damage })
    }

    pub fn potion(name: ItemName, owner: CharacterName, heal: i64) -> Self {
        Self::new(name, owner, ItemSpec::Potion { heal })
    }

    pub fn spell(
        name: ItemName,
        owner: CharacterName,
        allowed_targets: BTreeSet<CharacterName>,
    ) -> Self {
        Self::new(name, owner, ItemSpec::Spell { allowed_targets })
    }

    pub fn kind(&self) -> ItemKind {
        self.spec.kind()
    }
}

impl Named for Item {
    fn name(&self) -> &ItemName {
        &self.name
    }
}

impl fmt::Display for Item {
    /// Textual forms: weapon `name:damage`, potion `name:heal`,
    /// spell `name:<number of allowed targets>`.
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match &self.spec {
            ItemSpec::Weapon { damage } => write!(f, "{}:{}", self.name, damage),
            ItemSpec::Potion { heal } => write!(f, "{}:{}", self.name, heal),
            ItemSpec::Spell { allowed_targets } => {
                write!(f, "{}:{}", self.name, allowed_targets.len())
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn single_use_defaults_follow_item_kind() {
        let owner = CharacterName::from("Rin");
        assert!(!Item::weapon("Sword".into(), owner.clone(), 10).single_use);
        assert!(Item::potion("Tonic".into(), owner.clone(), 5).single_use);
        assert!(Item::spell("Hex".into(), owner, BTreeSet::new()).single_use);
    }

    #[test]
    fn display_forms_match_variant() {
        let owner = CharacterName::from("Rin");
        let weapon = Item::weapon("Sword".into(), owner.clone(), 10);
        assert_eq!(weapon.to_string(), "Sword:10");

        let potion = Item::potion("Tonic".into(), owner.clone(), -3);
        assert_eq!(potion.to_string(), "Tonic:-3");

        let mut targets = BTreeSet::new();
        targets.insert(CharacterName::from("Goblin"));
        let spell = Item::spell("Hex".into(), owner, targets);
        assert_eq!(spell.to_string(), "Hex:1");
    }

    #[test]
    fn item_kind_parses_script_tokens() {
        assert_eq!("weapon".parse::<ItemKind>().unwrap(), ItemKind::Weapon);
        assert_eq!("potion".parse::<ItemKind>().unwrap(), ItemKind::Potion);
        assert_eq!("spell".parse::<ItemKind>().unwrap(), ItemKind::Spell);
        assert!("scroll".parse::<ItemKind>().is_err());
    }
}
