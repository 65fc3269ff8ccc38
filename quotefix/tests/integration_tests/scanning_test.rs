// tests/integration_tests/scanning_test.rs
use super::common::{create_test_file, read, settings_for, setup_test_directory};
use anyhow::Result;
use quotefix::{Settings, TableMode, find_files, run_with_settings};
use tempfile::TempDir;

#[test]
fn test_default_scan_is_flat() -> Result<()> {
    let temp_dir = setup_test_directory()?;

    let files = find_files(temp_dir.path(), "*.mdx", false, &[])?;

    let expected = vec![
        temp_dir.path().join("plain.mdx"),
        temp_dir.path().join("scenario.mdx"),
        temp_dir.path().join("singles.mdx"),
    ];
    assert_eq!(files, expected);

    Ok(())
}

#[test]
fn test_recursive_run() -> Result<()> {
    let temp_dir = setup_test_directory()?;
    create_test_file(temp_dir.path(), "node_modules/pkg/doc.mdx", "\u{2018}vendored\u{2019}")?;

    let settings = Settings {
        recursive: true,
        ..settings_for(temp_dir.path(), TableMode::Corrected)
    };
    run_with_settings(&settings)?;

    assert_eq!(read(temp_dir.path(), "archive/old.mdx")?, "Nested 'archive'");
    assert_eq!(
        read(temp_dir.path(), "node_modules/pkg/doc.mdx")?,
        "\u{2018}vendored\u{2019}",
        "Excluded directories are skipped"
    );

    Ok(())
}

#[test]
fn test_custom_pattern() -> Result<()> {
    let temp_dir = setup_test_directory()?;

    let settings = Settings {
        pattern: String::from("*.md"),
        ..settings_for(temp_dir.path(), TableMode::Corrected)
    };
    run_with_settings(&settings)?;

    assert_eq!(read(temp_dir.path(), "notes.md")?, "Not an 'mdx' file \"at all\"");
    assert!(read(temp_dir.path(), "scenario.mdx")?.contains('\u{201C}'));

    Ok(())
}

#[test]
fn test_empty_match_is_a_no_op() -> Result<()> {
    let temp_dir = TempDir::new()?;

    run_with_settings(&settings_for(temp_dir.path(), TableMode::Corrected))?;
    run_with_settings(&settings_for(
        &temp_dir.path().join("missing"),
        TableMode::Corrected,
    ))?;

    Ok(())
}
