// tests/integration_tests/keep_going_test.rs
use super::common::{create_test_file, read, settings_for, setup_test_directory};
use anyhow::Result;
use quotefix::{Settings, TableMode, run_with_settings};
use std::fs;

fn add_invalid_file(dir: &std::path::Path) -> Result<()> {
    // "broken.mdx" sorts before "plain.mdx" and "scenario.mdx"
    fs::write(dir.join("broken.mdx"), [0xc3_u8, 0x28, 0x0a])?;
    Ok(())
}

#[test]
fn test_invalid_utf8_aborts_run() -> Result<()> {
    let temp_dir = setup_test_directory()?;
    create_test_file(temp_dir.path(), "a-first.mdx", "\u{2018}first\u{2019}")?;
    add_invalid_file(temp_dir.path())?;

    let result = run_with_settings(&settings_for(temp_dir.path(), TableMode::Corrected));

    assert!(result.is_err(), "Decode failure should be fatal by default");
    assert_eq!(
        read(temp_dir.path(), "a-first.mdx")?,
        "'first'",
        "Files processed before the failure stay modified"
    );
    assert!(
        read(temp_dir.path(), "scenario.mdx")?.contains('\u{2018}'),
        "Files after the failure are not processed"
    );

    Ok(())
}

#[test]
fn test_keep_going_processes_remaining_files() -> Result<()> {
    let temp_dir = setup_test_directory()?;
    add_invalid_file(temp_dir.path())?;

    let settings = Settings {
        keep_going: true,
        ..settings_for(temp_dir.path(), TableMode::Corrected)
    };
    let result = run_with_settings(&settings);

    assert!(result.is_err(), "Recorded failures still fail the run");
    assert_eq!(
        read(temp_dir.path(), "scenario.mdx")?,
        "She said \"hello\" and 'goodbye'."
    );
    assert_eq!(
        fs::read(temp_dir.path().join("broken.mdx"))?,
        vec![0xc3_u8, 0x28, 0x0a],
        "The undecodable file is left as it was"
    );

    Ok(())
}
