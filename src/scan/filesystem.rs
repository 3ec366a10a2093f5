use std::path::{Path, PathBuf};
use walkdir::{DirEntry, WalkDir};

const SKIPPED_DIRS: [&str; 2] = ["target", "node_modules"];

/// Regular files under `root`, sorted by name, skipping hidden and build
/// directories.
pub fn list_files(root: &Path) -> Vec<PathBuf> {
    WalkDir::new(root)
        .sort_by_file_name()
        .into_iter()
        .filter_entry(|entry| entry.depth() == 0 || !is_skipped_dir(entry))
        .filter_map(|entry| entry.ok())
        .filter(|entry| entry.file_type().is_file())
        .map(|entry| entry.path().to_path_buf())
        .collect()
}

fn is_skipped_dir(entry: &DirEntry) -> bool {
    if !entry.file_type().is_dir() {
        return false;
    }
    let name = entry.file_name().to_string_lossy();
    name.starts_with('.') || SKIPPED_DIRS.contains(&name.as_ref())
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::fs;
    use tempfile::TempDir;

    #[test]
    fn list_files_skips_hidden_and_build_directories() {
        let dir = TempDir::new().expect("temp dir should be created");
        fs::create_dir_all(dir.path().join("src")).expect("src should create");
        fs::create_dir_all(dir.path().join(".git")).expect(".git should create");
        fs::create_dir_all(dir.path().join("target")).expect("target should create");
        fs::write(dir.path().join("src/lib.rs"), "fn a() {}").expect("file should write");
        fs::write(dir.path().join(".git/HEAD"), "ref").expect("file should write");
        fs::write(dir.path().join("target/out.rs"), "fn b() {}").expect("file should write");

        let files = list_files(dir.path());
        assert_eq!(files, vec![dir.path().join("src/lib.rs")]);
    }
}
