//! CLI configuration structures and loaders.
use std::env;
use std::path::PathBuf;

use story_core::StoryConfig;

/// Configuration required to run one story script.
#[derive(Clone, Debug)]
pub struct CliConfig {
    /// Script file: an action count line followed by one command per line.
    pub input: PathBuf,
    /// Output log receiving result and error lines.
    pub output: PathBuf,
    /// Container capacities handed to the engine.
    pub story: StoryConfig,
}

impl Default for CliConfig {
    fn default() -> Self {
        Self {
            input: PathBuf::from("input.txt"),
            output: PathBuf::from("output.txt"),
            story: StoryConfig::default(),
        }
    }
}

impl CliConfig {
    /// Construct configuration from process environment variables.
    ///
    /// Environment variables:
    /// - `STORY_INPUT` - Script file path (default: input.txt)
    /// - `STORY_OUTPUT` - Output log path (default: output.txt)
    /// - `STORY_ARSENAL_CAPACITY` - Weapons per character (default: 3)
    /// - `STORY_SATCHEL_CAPACITY` - Potions per character (default: 5)
    /// - `STORY_SPELL_BOOK_CAPACITY` - Spells per character (default: 10)
    ///
    /// Capacities are taken as configured; zero is valid and makes every
    /// matching `Create item` fail with a capacity error.
    pub fn from_env() -> Self {
        let mut config = Self::default();

        if let Ok(path) = env::var("STORY_INPUT") {
            config.input = PathBuf::from(path);
        }
        if let Ok(path) = env::var("STORY_OUTPUT") {
            config.output = PathBuf::from(path);
        }

        if let Some(capacity) = read_env::<usize>("STORY_ARSENAL_CAPACITY") {
            config.story.arsenal_capacity = capacity;
        }
        if let Some(capacity) = read_env::<usize>("STORY_SATCHEL_CAPACITY") {
            config.story.satchel_capacity = capacity;
        }
        if let Some(capacity) = read_env::<usize>("STORY_SPELL_BOOK_CAPACITY") {
            config.story.spell_book_capacity = capacity;
        }

        config
    }
}

fn read_env<T>(key: &str) -> Option<T>
where
    T: std::str::FromStr,
{
    env::var(key).ok()?.parse().ok()
}
