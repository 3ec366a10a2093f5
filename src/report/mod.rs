pub mod json;
pub mod md;
pub mod messages;
pub mod sarif;

use crate::error::{Result, ScoreError};
use crate::scan::ScanReport;
use crate::types::report::AnalysisResult;
pub use messages::Locale;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum OutputFormat {
    Json,
    #[default]
    Md,
    Sarif,
}

impl OutputFormat {
    pub fn parse(value: &str) -> Option<OutputFormat> {
        match value.trim().to_ascii_lowercase().as_str() {
            "json" => Some(OutputFormat::Json),
            "md" | "markdown" => Some(OutputFormat::Md),
            "sarif" => Some(OutputFormat::Sarif),
            _ => None,
        }
    }
}

pub fn render(result: &AnalysisResult, format: OutputFormat, locale: Locale) -> Result<String> {
    match format {
        OutputFormat::Json => json::to_json(result).map_err(ScoreError::Json),
        OutputFormat::Md => Ok(md::to_markdown(result, locale)),
        OutputFormat::Sarif => sarif::to_sarif(&[(None, result)], locale).map_err(ScoreError::Json),
    }
}

pub fn render_scan(report: &ScanReport, format: OutputFormat, locale: Locale) -> Result<String> {
    match format {
        OutputFormat::Json => json::to_json(report).map_err(ScoreError::Json),
        OutputFormat::Md => Ok(md::scan_to_markdown(report, locale)),
        OutputFormat::Sarif => {
            let results = report
                .files
                .iter()
                .map(|file| (Some(file.path.as_str()), &file.result))
                .collect::<Vec<_>>();
            sarif::to_sarif(&results, locale).map_err(ScoreError::Json)
        }
    }
}
