/// Story configuration constants and tunable parameters.
///
/// Container capacities are per facet kind: every character of a given
/// archetype gets the same-sized arsenal, satchel, and spell book.
#[derive(Clone, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct StoryConfig {
    /// Maximum number of weapons a weapon-capable character can carry.
    pub arsenal_capacity: usize,
    /// Maximum number of potions a potion-capable character can carry.
    pub satchel_capacity: usize,
    /// Maximum number of spells a spell-capable character can hold.
    pub spell_book_capacity: usize,
}

impl StoryConfig {
    // ===== runtime-tunable defaults =====
    pub const DEFAULT_ARSENAL_CAPACITY: usize = 3;
    pub const DEFAULT_SATCHEL_CAPACITY: usize = 5;
    pub const DEFAULT_SPELL_BOOK_CAPACITY: usize = 10;

    pub fn new() -> Self {
        Self {
            arsenal_capacity: Self::DEFAULT_ARSENAL_CAPACITY,
            satchel_capacity: Self::DEFAULT_SATCHEL_CAPACITY,
            spell_book_capacity: Self::DEFAULT_SPELL_BOOK_CAPACITY,
        }
    }
}

impl Default for StoryConfig {
    fn default() -> Self {
        Self::new()
    }
}
