//! Command dispatch and action execution.
//!
//! The [`StoryEngine`] is the authoritative reducer for [`StoryState`]:
//! every roster and container mutation flows through [`StoryEngine::execute`].
//! All three action verbs (attack, drink, cast) route through one shared
//! item-use pathway, so ownership checks, spell target restriction, and
//! single-use removal behave identically regardless of item kind.

mod errors;

pub use errors::StoryError;

use crate::command::Command;
use crate::config::StoryConfig;
use crate::state::{
    Character, CharacterName, ContainerError, FacetKind, Item, ItemName, ItemSpec, StoryState,
};

/// Receives one line of simulation output.
///
/// The engine never performs I/O itself; the caller decides where result
/// and error lines end up (a file, a buffer, a test vector).
pub trait LineSink {
    fn line(&mut self, text: &str);
}

impl LineSink for Vec<String> {
    fn line(&mut self, text: &str) {
        self.push(text.to_owned());
    }
}

/// Stat change an item applies to its target.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
enum Effect {
    Damage(i64),
    Heal(i64),
}

/// Story engine that executes parsed commands against the roster.
pub struct StoryEngine<'a> {
    state: &'a mut StoryState,
    config: StoryConfig,
}

impl<'a> StoryEngine<'a> {
    /// Creates an engine over the given roster state.
    pub fn new(state: &'a mut StoryState, config: StoryConfig) -> Self {
        Self { state, config }
    }

    /// Processes up to `actions` script lines.
    ///
    /// Each line is parsed and executed independently: a failure becomes
    /// exactly one `Error: ...` line on the sink and the run continues.
    /// Running out of input before `actions` lines is normal truncation,
    /// not an error.
    pub fn run<I, S>(&mut self, actions: usize, lines: I, sink: &mut S)
    where
        I: IntoIterator,
        I::Item: AsRef<str>,
        S: LineSink + ?Sized,
    {
        let mut lines = lines.into_iter();
        for _ in 0..actions {
            let Some(line) = lines.next() else {
                break;
            };
            match Command::parse(line.as_ref()).and_then(|command| self.execute(command)) {
                Ok(Some(text)) => sink.line(&text),
                Ok(None) => {}
                Err(error) => sink.line(&format!("Error: {error}")),
            }
        }
    }

    /// Executes one command, returning its printable result if it has one.
    pub fn execute(&mut self, command: Command) -> Result<Option<String>, StoryError> {
        match command {
            Command::CreateCharacter {
                archetype,
                name,
                health,
            } => {
                let character = Character::spawn(name, health, archetype, &self.config);
                self.state
                    .spawn(character)
                    .map_err(|rejected| StoryError::DuplicateName {
                        name: rejected.name().clone(),
                    })?;
                Ok(None)
            }
            Command::CreateItem { owner, name, spec } => {
                self.create_item(owner, name, spec)?;
                Ok(None)
            }
            Command::Attack {
                attacker,
                target,
                weapon,
            } => self
                .use_item(&attacker, &target, FacetKind::Weapons, &weapon)
                .map(|()| None),
            Command::Drink {
                supplier,
                drinker,
                potion,
            } => self
                .use_item(&supplier, &drinker, FacetKind::Potions, &potion)
                .map(|()| None),
            Command::Cast {
                caster,
                target,
                spell,
            } => self
                .use_item(&caster, &target, FacetKind::Spells, &spell)
                .map(|()| None),
            Command::ShowCharacters => Ok(Some(self.show_characters())),
            Command::Show { facet, character } => self.show(facet, &character).map(Some),
            Command::Dialogue => Ok(None),
        }
    }

    /// Constructs an item and stores it in the owner's matching container.
    fn create_item(
        &mut self,
        owner: CharacterName,
        name: ItemName,
        spec: ItemSpec,
    ) -> Result<(), StoryError> {
        if !self.state.contains(&owner) {
            return Err(StoryError::CharacterNotFound { name: owner });
        }
        // Spell target lists are resolved against the roster at creation
        // time; a spell can never reference a character that was not there
        // when it was written.
        if let ItemSpec::Spell { allowed_targets } = &spec {
            for target in allowed_targets {
                if !self.state.contains(target) {
                    return Err(StoryError::CharacterNotFound {
                        name: target.clone(),
                    });
                }
            }
        }

        let facet = FacetKind::from(spec.kind());
        let item = Item::new(name, owner.clone(), spec);
        let Some(holder) = self.state.character_mut(&owner) else {
            return Err(StoryError::CharacterNotFound { name: owner });
        };
        let Some(container) = holder.facets.container_mut(facet) else {
            return Err(StoryError::WrongCapability {
                character: owner,
                facet,
            });
        };
        container.insert(item).map_err(|error| match error {
            ContainerError::CapacityExceeded { capacity } => StoryError::CapacityExceeded {
                character: owner,
                facet,
                capacity,
            },
            ContainerError::NotFound { name } => StoryError::ItemNotFound {
                character: owner,
                item: name,
            },
        })
    }

    /// The unified item-use pathway shared by attack, drink, and cast.
    ///
    /// Validation order: actor exists, actor has the facet, item present,
    /// item owned by the actor, spell target allowed, target exists. Only
    /// then the effect is applied and, for single-use items, the item
    /// leaves its container. A failed use mutates nothing.
    fn use_item(
        &mut self,
        actor: &CharacterName,
        target: &CharacterName,
        facet: FacetKind,
        item: &ItemName,
    ) -> Result<(), StoryError> {
        let Some(actor_state) = self.state.character(actor) else {
            return Err(StoryError::CharacterNotFound {
                name: actor.clone(),
            });
        };
        let Some(container) = actor_state.facets.container(facet) else {
            return Err(StoryError::WrongCapability {
                character: actor.clone(),
                facet,
            });
        };
        let Some(stored) = container.get(item) else {
            return Err(StoryError::ItemNotFound {
                character: actor.clone(),
                item: item.clone(),
            });
        };
        if stored.owner != *actor {
            return Err(StoryError::NotOwned {
                character: actor.clone(),
                item: item.clone(),
            });
        }

        // Copy out everything the effect needs before mutating the roster.
        let single_use = stored.single_use;
        let effect = match &stored.spec {
            ItemSpec::Weapon { damage } => Some(Effect::Damage(*damage)),
            ItemSpec::Potion { heal } => Some(Effect::Heal(*heal)),
            ItemSpec::Spell { allowed_targets } => {
                if !allowed_targets.contains(target) {
                    return Err(StoryError::InvalidTarget {
                        spell: item.clone(),
                        target: target.clone(),
                    });
                }
                // A spell carries no magnitude; its observable effect is the
                // target restriction and its own consumption.
                None
            }
        };

        let Some(target_state) = self.state.character_mut(target) else {
            return Err(StoryError::CharacterNotFound {
                name: target.clone(),
            });
        };
        match effect {
            Some(Effect::Damage(amount)) => target_state.take_damage(amount),
            Some(Effect::Heal(amount)) => target_state.heal(amount),
            None => {}
        }

        if single_use {
            if let Some(owner_state) = self.state.character_mut(actor) {
                if let Some(container) = owner_state.facets.container_mut(facet) {
                    // The item was found above and nothing since removed it,
                    // so this only fails if that invariant breaks.
                    container.remove(item).map_err(|_| StoryError::ItemNotFound {
                        character: actor.clone(),
                        item: item.clone(),
                    })?;
                }
            }
        }
        Ok(())
    }

    /// One-line enumeration of a character's container of the given kind.
    fn show(&self, facet: FacetKind, character: &CharacterName) -> Result<String, StoryError> {
        let Some(shown) = self.state.character(character) else {
            return Err(StoryError::CharacterNotFound {
                name: character.clone(),
            });
        };
        let Some(container) = shown.facets.container(facet) else {
            return Err(StoryError::WrongCapability {
                character: character.clone(),
                facet,
            });
        };
        let items: Vec<String> = container.iter().map(ToString::to_string).collect();
        Ok(items.join(" "))
    }

    /// One-line enumeration of the roster as `name:health` pairs.
    fn show_characters(&self) -> String {
        let characters: Vec<String> = self.state.characters().map(ToString::to_string).collect();
        characters.join(" ")
    }
}
