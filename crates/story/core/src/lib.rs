//! Deterministic story simulation logic and data types.
//!
//! `story-core` defines the canonical rules: characters and their
//! capability facets, bounded item containers, and the command dispatch
//! engine. All state mutation flows through [`engine::StoryEngine`]; the
//! crate does no I/O of its own and consumes abstract line sources and
//! sinks supplied by the client.
pub mod command;
pub mod config;
pub mod engine;
pub mod state;

pub use command::Command;
pub use config::StoryConfig;
pub use engine::{LineSink, StoryEngine, StoryError};
pub use state::{
    Archetype, BoundedContainer, Character, CharacterName, ContainerError, FacetKind, FacetSet,
    Item, ItemKind, ItemName, ItemSpec, Named, StoryState,
};
