pub mod filesystem;

use crate::analyze::{aggregate_many, analyze_with};
use crate::error::{Result, ScoreError};
use crate::language::LanguageId;
use crate::types::report::{AnalysisResult, Score};
use filesystem::list_files;
use serde::Serialize;
use std::path::Path;

#[derive(Debug, Clone, Serialize)]
pub struct FileScore {
    pub path: String,
    pub result: AnalysisResult,
}

#[derive(Debug, Clone, Serialize)]
pub struct ScanReport {
    pub root: String,
    /// Rounded mean of the per-file overall scores; `None` when nothing was scored.
    pub overall: Option<Score>,
    pub files: Vec<FileScore>,
}

/// Scores every file under `root` whose extension maps to a supported
/// language. Blank files are skipped.
pub fn scan(root: &Path) -> Result<ScanReport> {
    if !root.exists() {
        return Err(ScoreError::PathNotFound(root.display().to_string()));
    }

    let mut files = Vec::new();
    for path in list_files(root) {
        let Some(language) = path
            .extension()
            .and_then(|ext| ext.to_str())
            .and_then(LanguageId::from_extension)
        else {
            tracing::trace!(path = %path.display(), "skipping unsupported file");
            continue;
        };

        let content = match std::fs::read_to_string(&path) {
            Ok(content) => content,
            Err(err) => {
                tracing::warn!(path = %path.display(), error = %err, "skipping unreadable file");
                continue;
            }
        };
        let snippet = content.trim();
        if snippet.is_empty() {
            tracing::debug!(path = %path.display(), "skipping blank file");
            continue;
        }

        let relative = path.strip_prefix(root).unwrap_or(&path);
        tracing::info!(path = %relative.display(), %language, "scoring file");
        files.push(FileScore {
            path: relative.display().to_string(),
            result: analyze_with(snippet, language),
        });
    }

    let overall = aggregate_many(files.iter().map(|file| file.result.overall));
    Ok(ScanReport {
        root: root.display().to_string(),
        overall,
        files,
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::fs;
    use tempfile::TempDir;

    #[test]
    fn scan_scores_supported_files_only() {
        let dir = TempDir::new().expect("temp dir should be created");
        fs::write(
            dir.path().join("add.py"),
            "def add(a, b):\n    if a >= 0:\n        return a + b\n    return 0\n",
        )
        .expect("python file should write");
        fs::write(dir.path().join("notes.txt"), "not code").expect("text file should write");
        fs::write(dir.path().join("empty.go"), "  \n").expect("blank file should write");

        let report = scan(dir.path()).expect("scan should succeed");
        assert_eq!(report.files.len(), 1);
        assert_eq!(report.files[0].path, "add.py");
        assert_eq!(report.files[0].result.language, LanguageId::Python);
        assert_eq!(report.overall, Some(report.files[0].result.overall));
    }

    #[test]
    fn scan_of_directory_without_sources_has_no_overall() {
        let dir = TempDir::new().expect("temp dir should be created");
        let report = scan(dir.path()).expect("scan should succeed");
        assert!(report.files.is_empty());
        assert_eq!(report.overall, None);
    }

    #[test]
    fn scan_rejects_missing_root() {
        let dir = TempDir::new().expect("temp dir should be created");
        let missing = dir.path().join("missing");
        assert!(matches!(scan(&missing), Err(ScoreError::PathNotFound(_))));
    }
}
