// src/core/scanner/utils.rs
use crate::utils::is_hidden;

/// Determines if a directory entry should be skipped during a recursive walk:
/// - hidden files and directories (the walk root is never skipped)
/// - directories whose name is in `exclude_dirs`
pub fn should_exclude(entry: &walkdir::DirEntry, exclude_dirs: &[&str]) -> bool {
    if entry.depth() == 0 {
        return false;
    }

    if is_hidden(entry) {
        return true;
    }

    entry.file_type().is_dir()
        && entry
            .file_name()
            .to_str()
            .is_some_and(|name| exclude_dirs.contains(&name))
}
