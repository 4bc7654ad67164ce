//! Script command parsing.
//!
//! One script line is one whitespace-tokenized command. Parsing is pure:
//! bad verbs and malformed argument lists come back as [`StoryError`]
//! values so the engine can report them like any other per-command failure.

use std::collections::BTreeSet;
use std::str::SplitWhitespace;

use crate::engine::StoryError;
use crate::state::{Archetype, CharacterName, FacetKind, ItemKind, ItemName, ItemSpec};

/// One parsed script command.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum Command {
    CreateCharacter {
        archetype: Archetype,
        name: CharacterName,
        health: i64,
    },
    CreateItem {
        owner: CharacterName,
        name: ItemName,
        spec: ItemSpec,
    },
    Attack {
        attacker: CharacterName,
        target: CharacterName,
        weapon: ItemName,
    },
    Drink {
        supplier: CharacterName,
        drinker: CharacterName,
        potion: ItemName,
    },
    Cast {
        caster: CharacterName,
        target: CharacterName,
        spell: ItemName,
    },
    ShowCharacters,
    Show {
        facet: FacetKind,
        character: CharacterName,
    },
    /// Narrative line; accepted and executed as a no-op.
    Dialogue,
}

impl Command {
    /// Parses one script line.
    pub fn parse(line: &str) -> Result<Self, StoryError> {
        let mut tokens = line.split_whitespace();
        let verb = tokens
            .next()
            .ok_or_else(|| StoryError::malformed("empty command line"))?;

        let command = match verb {
            "Create" => parse_create(&mut tokens)?,
            "Attack" => {
                let attacker = next(&mut tokens, "attacker name")?.into();
                let target = next(&mut tokens, "target name")?.into();
                let weapon = next(&mut tokens, "weapon name")?.into();
                Command::Attack {
                    attacker,
                    target,
                    weapon,
                }
            }
            "Drink" => {
                let supplier = next(&mut tokens, "supplier name")?.into();
                let drinker = next(&mut tokens, "drinker name")?.into();
                let potion = next(&mut tokens, "potion name")?.into();
                Command::Drink {
                    supplier,
                    drinker,
                    potion,
                }
            }
            "Cast" => {
                let caster = next(&mut tokens, "caster name")?.into();
                let target = next(&mut tokens, "target name")?.into();
                let spell = next(&mut tokens, "spell name")?.into();
                Command::Cast {
                    caster,
                    target,
                    spell,
                }
            }
            "Show" => parse_show(&mut tokens)?,
            // Free-form narrative; the rest of the line is not inspected.
            "Dialogue" => return Ok(Command::Dialogue),
            _ => {
                return Err(StoryError::UnknownCommand {
                    verb: verb.to_owned(),
                });
            }
        };

        if let Some(extra) = tokens.next() {
            return Err(StoryError::malformed(format!(
                "unexpected trailing token `{extra}`"
            )));
        }
        Ok(command)
    }
}

fn parse_create(tokens: &mut SplitWhitespace<'_>) -> Result<Command, StoryError> {
    match next(tokens, "`character` or `item`")? {
        "character" => {
            let type_token = next(tokens, "character type")?;
            let archetype: Archetype =
                type_token
                    .parse()
                    .map_err(|_| StoryError::UnknownArchetype {
                        token: type_token.to_owned(),
                    })?;
            let name = next(tokens, "character name")?.into();
            let health = int(next(tokens, "health points")?)?;
            Ok(Command::CreateCharacter {
                archetype,
                name,
                health,
            })
        }
        "item" => {
            let kind_token = next(tokens, "item kind")?;
            let kind: ItemKind = kind_token.parse().map_err(|_| {
                StoryError::malformed(format!("unknown item kind `{kind_token}`"))
            })?;
            let owner = next(tokens, "owner name")?.into();
            let name = next(tokens, "item name")?.into();
            let spec = match kind {
                ItemKind::Weapon => ItemSpec::Weapon {
                    damage: int(next(tokens, "damage value")?)?,
                },
                ItemKind::Potion => ItemSpec::Potion {
                    heal: int(next(tokens, "heal value")?)?,
                },
                ItemKind::Spell => {
                    let count: usize = next(tokens, "target count")?.parse().map_err(|_| {
                        StoryError::malformed("target count must be a non-negative integer")
                    })?;
                    let mut allowed_targets = BTreeSet::new();
                    for _ in 0..count {
                        allowed_targets.insert(CharacterName::from(next(tokens, "target name")?));
                    }
                    ItemSpec::Spell { allowed_targets }
                }
            };
            Ok(Command::CreateItem { owner, name, spec })
        }
        other => Err(StoryError::malformed(format!(
            "cannot create `{other}`, expected `character` or `item`"
        ))),
    }
}

fn parse_show(tokens: &mut SplitWhitespace<'_>) -> Result<Command, StoryError> {
    let what = next(tokens, "`characters`, `weapons`, `potions`, or `spells`")?;
    if what == "characters" {
        return Ok(Command::ShowCharacters);
    }
    let facet: FacetKind = what.parse().map_err(|_| {
        StoryError::malformed(format!(
            "cannot show `{what}`, expected characters, weapons, potions, or spells"
        ))
    })?;
    let character = next(tokens, "character name")?.into();
    Ok(Command::Show { facet, character })
}

fn next<'a>(tokens: &mut SplitWhitespace<'a>, what: &str) -> Result<&'a str, StoryError> {
    tokens
        .next()
        .ok_or_else(|| StoryError::malformed(format!("missing {what}")))
}

fn int(token: &str) -> Result<i64, StoryError> {
    token
        .parse()
        .map_err(|_| StoryError::malformed(format!("`{token}` is not an integer")))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parses_create_character() {
        let command = Command::parse("Create character fighter Rin 100").unwrap();
        assert_eq!(
            command,
            Command::CreateCharacter {
                archetype: Archetype::Fighter,
                name: "Rin".into(),
                health: 100,
            }
        );
    }

    #[test]
    fn parses_create_item_variants() {
        let weapon = Command::parse("Create item weapon Rin Sword 10").unwrap();
        assert_eq!(
            weapon,
            Command::CreateItem {
                owner: "Rin".into(),
                name: "Sword".into(),
                spec: ItemSpec::Weapon { damage: 10 },
            }
        );

        let spell = Command::parse("Create item spell Mira Hex 2 Rin Goblin").unwrap();
        let Command::CreateItem { spec, .. } = spell else {
            panic!("expected CreateItem");
        };
        let ItemSpec::Spell { allowed_targets } = spec else {
            panic!("expected spell spec");
        };
        assert_eq!(allowed_targets.len(), 2);
        assert!(allowed_targets.contains(&"Goblin".into()));
    }

    #[test]
    fn parses_action_verbs() {
        assert_eq!(
            Command::parse("Attack Rin Goblin Sword").unwrap(),
            Command::Attack {
                attacker: "Rin".into(),
                target: "Goblin".into(),
                weapon: "Sword".into(),
            }
        );
        assert_eq!(
            Command::parse("Drink Rin Rin Tonic").unwrap(),
            Command::Drink {
                supplier: "Rin".into(),
                drinker: "Rin".into(),
                potion: "Tonic".into(),
            }
        );
        assert_eq!(
            Command::parse("Cast Mira Goblin Hex").unwrap(),
            Command::Cast {
                caster: "Mira".into(),
                target: "Goblin".into(),
                spell: "Hex".into(),
            }
        );
    }

    #[test]
    fn parses_show_forms() {
        assert_eq!(Command::parse("Show characters").unwrap(), Command::ShowCharacters);
        assert_eq!(
            Command::parse("Show weapons Rin").unwrap(),
            Command::Show {
                facet: FacetKind::Weapons,
                character: "Rin".into(),
            }
        );
    }

    #[test]
    fn dialogue_accepts_free_text() {
        assert_eq!(
            Command::parse("Dialogue Rin Onward, to the gate!").unwrap(),
            Command::Dialogue
        );
    }

    #[test]
    fn unknown_verb_is_reported() {
        let err = Command::parse("Teleport Rin Tower").unwrap_err();
        assert_eq!(
            err,
            StoryError::UnknownCommand {
                verb: "Teleport".to_owned()
            }
        );
    }

    #[test]
    fn malformed_arguments_are_reported() {
        assert!(matches!(
            Command::parse("Create character fighter Rin ten"),
            Err(StoryError::Malformed { .. })
        ));
        assert!(matches!(
            Command::parse("Create character paladin Rin 10"),
            Err(StoryError::UnknownArchetype { .. })
        ));
        assert!(matches!(
            Command::parse("Attack Rin Goblin"),
            Err(StoryError::Malformed { .. })
        ));
        assert!(matches!(
            Command::parse(""),
            Err(StoryError::Malformed { .. })
        ));
        assert!(matches!(
            Command::parse("Show weapons Rin extra"),
            Err(StoryError::Malformed { .. })
        ));
    }
}
