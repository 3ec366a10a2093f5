//! Heuristic quality scoring for source snippets.
//!
//! [`analyze`] scores a snippet on correctness, performance, maintainability and
//! robustness signals using regular expressions over raw text. There is no
//! parsing; the scores are intentionally approximate.

pub mod analyze;
pub mod config;
pub mod error;
pub mod language;
pub mod metrics;
pub mod report;
pub mod scan;
pub mod types;

pub use analyze::{analyze, analyze_with};
pub use language::LanguageId;
pub use types::report::AnalysisResult;
