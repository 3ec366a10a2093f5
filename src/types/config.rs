use crate::error::ScoreError;
use crate::language::LanguageId;
use crate::report::{Locale, OutputFormat};
use serde::Deserialize;

#[derive(Debug, Clone, Default, Deserialize)]
pub struct ScoreConfig {
    pub analysis: Option<AnalysisConfig>,
    pub report: Option<ReportConfig>,
    pub gate: Option<GateConfig>,
}

#[derive(Debug, Clone, Deserialize)]
pub struct AnalysisConfig {
    pub default_language: Option<String>,
}

#[derive(Debug, Clone, Deserialize)]
pub struct ReportConfig {
    pub format: Option<String>,
    pub locale: Option<String>,
}

#[derive(Debug, Clone, Deserialize)]
pub struct GateConfig {
    pub fail_under: Option<u8>,
}

impl ScoreConfig {
    /// Language for input whose language is neither given nor inferable.
    /// Unknown ids fall back the same way the engine does.
    pub fn default_language(&self) -> LanguageId {
        self.analysis
            .as_ref()
            .and_then(|analysis| analysis.default_language.as_deref())
            .map(LanguageId::resolve)
            .unwrap_or(LanguageId::DEFAULT)
    }

    pub fn format(&self) -> OutputFormat {
        self.report
            .as_ref()
            .and_then(|report| report.format.as_deref())
            .and_then(OutputFormat::parse)
            .unwrap_or_default()
    }

    pub fn locale(&self) -> Locale {
        self.report
            .as_ref()
            .and_then(|report| report.locale.as_deref())
            .and_then(Locale::parse)
            .unwrap_or_default()
    }

    pub fn fail_under(&self) -> Option<u8> {
        self.gate.as_ref().and_then(|gate| gate.fail_under)
    }

    pub fn validate(&self) -> Result<(), ScoreError> {
        if let Some(report) = &self.report {
            if let Some(format) = &report.format {
                if OutputFormat::parse(format).is_none() {
                    return Err(ScoreError::ConfigParse(format!(
                        "unsupported report.format: {format}"
                    )));
                }
            }
            if let Some(locale) = &report.locale {
                if Locale::parse(locale).is_none() {
                    return Err(ScoreError::ConfigParse(format!(
                        "unsupported report.locale: {locale}"
                    )));
                }
            }
        }

        if let Some(fail_under) = self.fail_under() {
            if fail_under > 100 {
                return Err(ScoreError::ConfigParse(
                    "gate.fail_under must be between 0 and 100".to_string(),
                ));
            }
        }

        if let Some(language) = self
            .analysis
            .as_ref()
            .and_then(|analysis| analysis.default_language.as_deref())
        {
            if LanguageId::parse(language).is_none() {
                tracing::warn!(
                    language,
                    fallback = %LanguageId::DEFAULT,
                    "analysis.default_language is not supported"
                );
            }
        }

        Ok(())
    }
}
