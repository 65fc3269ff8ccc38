// tests/integration_tests/idempotence_test.rs
use super::common::{read, settings_for, setup_test_directory};
use anyhow::Result;
use quotefix::{QuoteTable, TableMode, count_smart_quotes, normalize_file, run_with_settings};
use std::io;

#[test]
fn test_second_run_changes_nothing() -> Result<()> {
    for mode in [TableMode::Faithful, TableMode::Corrected] {
        let temp_dir = setup_test_directory()?;
        let settings = settings_for(temp_dir.path(), mode);

        run_with_settings(&settings)?;
        let first = (
            read(temp_dir.path(), "scenario.mdx")?,
            read(temp_dir.path(), "singles.mdx")?,
        );

        run_with_settings(&settings)?;
        let second = (
            read(temp_dir.path(), "scenario.mdx")?,
            read(temp_dir.path(), "singles.mdx")?,
        );

        assert_eq!(first, second, "Second {mode:?} pass should be a no-op");
    }

    Ok(())
}

#[test]
fn test_reported_counts_across_passes() -> Result<()> {
    let temp_dir = setup_test_directory()?;
    let path = temp_dir.path().join("scenario.mdx");

    let faithful = QuoteTable::for_mode(TableMode::Faithful);
    assert_eq!(normalize_file(&path, &faithful, &mut io::sink())?.replaced, 2);
    // The right double quote is still there, so the count repeats
    assert_eq!(normalize_file(&path, &faithful, &mut io::sink())?.replaced, 2);

    let corrected = QuoteTable::for_mode(TableMode::Corrected);
    assert_eq!(normalize_file(&path, &corrected, &mut io::sink())?.replaced, 2);
    assert_eq!(normalize_file(&path, &corrected, &mut io::sink())?.replaced, 0);
    assert_eq!(count_smart_quotes(&read(temp_dir.path(), "scenario.mdx")?, &corrected), 0);

    Ok(())
}
