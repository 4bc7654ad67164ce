//! End-to-end script execution through the file interface.

use std::fs;
use std::path::Path;

use story_cli::{CliConfig, run};
use story_core::StoryConfig;

fn config(dir: &Path) -> CliConfig {
    CliConfig {
        input: dir.join("input.txt"),
        output: dir.join("output.txt"),
        story: StoryConfig::default(),
    }
}

#[test]
fn full_script_produces_expected_log() {
    let dir = tempfile::tempdir().unwrap();
    let config = config(dir.path());

    fs::write(
        &config.input,
        "\
7
Create character fighter Rin 100
Create character fighter Goblin 50
Create item weapon Rin Sword 10
Attack Rin Goblin Sword
Show characters
Show weapons Rin
Teleport Rin Tower
",
    )
    .unwrap();

    run(&config).unwrap();

    let log = fs::read_to_string(&config.output).unwrap();
    assert_eq!(
        log,
        "\
Goblin:40 Rin:100
Sword:10
Error: unknown command `Teleport`
"
    );
}

#[test]
fn truncated_script_is_not_an_error() {
    let dir = tempfile::tempdir().unwrap();
    let config = config(dir.path());

    // Ten declared actions, one present.
    fs::write(&config.input, "10\nCreate character wizard Mira 80\n").unwrap();

    run(&config).unwrap();
    assert_eq!(fs::read_to_string(&config.output).unwrap(), "");
}

#[test]
fn malformed_action_count_is_a_fatal_startup_error() {
    let dir = tempfile::tempdir().unwrap();
    let config = config(dir.path());

    fs::write(&config.input, "many\nCreate character fighter Rin 100\n").unwrap();

    let err = run(&config).unwrap_err();
    assert!(err.to_string().contains("malformed action count"));
    // Nothing was executed, so no log was written.
    assert!(!config.output.exists());
}

#[test]
fn missing_script_is_a_fatal_startup_error() {
    let dir = tempfile::tempdir().unwrap();
    let config = config(dir.path());

    let err = run(&config).unwrap_err();
    assert!(err.to_string().contains("failed to read script"));
}
