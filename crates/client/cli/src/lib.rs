//! Script-file client for the story engine.
//!
//! Owns the I/O glue the core deliberately avoids: reading the script
//! file, parsing the leading action count, and writing the output log.
//! Anything wrong with the script header is a fatal startup error here;
//! per-command failures are the engine's business and end up in the log.
pub mod config;

pub use config::CliConfig;

use std::fs;

use anyhow::{Context, Result};
use story_core::{StoryEngine, StoryState};

/// Runs one script end to end: read input, execute the declared number of
/// actions, write the output log.
pub fn run(config: &CliConfig) -> Result<()> {
    let script = fs::read_to_string(&config.input)
        .with_context(|| format!("failed to read script {}", config.input.display()))?;
    let mut lines = script.lines();

    let count_line = lines
        .next()
        .context("script is empty, expected an action count")?;
    let actions: usize = count_line
        .trim()
        .parse()
        .with_context(|| format!("malformed action count `{}`", count_line.trim()))?;

    tracing::info!(actions, input = %config.input.display(), "starting story");

    let mut state = StoryState::new();
    let mut engine = StoryEngine::new(&mut state, config.story.clone());
    let mut output: Vec<String> = Vec::new();
    engine.run(actions, lines, &mut output);

    tracing::info!(
        characters = state.len(),
        lines = output.len(),
        output = %config.output.display(),
        "story finished"
    );

    let mut log = output.join("\n");
    if !output.is_empty() {
        log.push('\n');
    }
    fs::write(&config.output, log)
        .with_context(|| format!("failed to write log {}", config.output.display()))?;
    Ok(())
}
