//! Story execution errors.
//!
//! Every variant here is a recoverable per-command failure: the engine
//! catches it at the dispatch boundary, converts it to one output line,
//! and moves on to the next command. Startup failures (a malformed action
//! count) are the caller's problem and never reach this type.

use crate::state::{CharacterName, FacetKind, ItemName};

/// Errors that can occur while parsing or executing one script command.
#[derive(Clone, Debug, PartialEq, Eq, thiserror::Error)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum StoryError {
    /// A container is full and cannot take another item.
    #[error("{character} cannot carry more {facet} (capacity {capacity})")]
    CapacityExceeded {
        character: CharacterName,
        facet: FacetKind,
        capacity: usize,
    },

    /// The named item is not in the character's container.
    #[error("{character} has no item named {item}")]
    ItemNotFound {
        character: CharacterName,
        item: ItemName,
    },

    /// The named character is not in the roster.
    #[error("character {name} not found")]
    CharacterNotFound { name: CharacterName },

    /// The character lacks the facet the command requires.
    #[error("{character} cannot use {facet}")]
    WrongCapability {
        character: CharacterName,
        facet: FacetKind,
    },

    /// A character with this name already exists.
    #[error("character {name} already exists")]
    DuplicateName { name: CharacterName },

    /// Unrecognized character type token.
    #[error("unknown archetype `{token}`")]
    UnknownArchetype { token: String },

    /// Spell cast on a character outside its allowed target set.
    #[error("{target} is not an allowed target of {spell}")]
    InvalidTarget {
        spell: ItemName,
        target: CharacterName,
    },

    /// The item exists but belongs to someone else.
    #[error("{character} does not own {item}")]
    NotOwned {
        character: CharacterName,
        item: ItemName,
    },

    /// Unrecognized command verb.
    #[error("unknown command `{verb}`")]
    UnknownCommand { verb: String },

    /// The verb was recognized but the arguments do not fit its shape.
    #[error("malformed command: {reason}")]
    Malformed { reason: String },
}

impl StoryError {
    pub(crate) fn malformed(reason: impl Into<String>) -> Self {
        Self::Malformed {
            reason: reason.into(),
        }
    }
}
