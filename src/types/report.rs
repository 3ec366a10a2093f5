use crate::language::LanguageId;
use crate::types::finding::{Finding, FindingKind, Metric};
use serde::Serialize;

pub type Score = u8;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum Dimension {
    Correctness,
    Performance,
    Maintainability,
    Robustness,
}

impl Dimension {
    pub const ALL: [Dimension; 4] = [
        Dimension::Correctness,
        Dimension::Performance,
        Dimension::Maintainability,
        Dimension::Robustness,
    ];

    pub fn as_str(self) -> &'static str {
        match self {
            Dimension::Correctness => "correctness",
            Dimension::Performance => "performance",
            Dimension::Maintainability => "maintainability",
            Dimension::Robustness => "robustness",
        }
    }

    pub fn baseline(self) -> i32 {
        match self {
            Dimension::Correctness => 85,
            Dimension::Performance => 80,
            Dimension::Maintainability => 75,
            Dimension::Robustness => 70,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct DimensionResult<T> {
    pub score: Score,
    pub findings: Vec<T>,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct AnalysisResult {
    pub language: LanguageId,
    pub overall: Score,
    pub correctness: DimensionResult<Finding>,
    pub performance: DimensionResult<Metric>,
    pub maintainability: DimensionResult<Finding>,
    pub robustness: DimensionResult<Finding>,
}

impl AnalysisResult {
    pub fn score(&self, dimension: Dimension) -> Score {
        match dimension {
            Dimension::Correctness => self.correctness.score,
            Dimension::Performance => self.performance.score,
            Dimension::Maintainability => self.maintainability.score,
            Dimension::Robustness => self.robustness.score,
        }
    }

    /// Findings of the boolean dimensions, paired with their dimension.
    pub fn findings(&self) -> impl Iterator<Item = (Dimension, &Finding)> + '_ {
        [
            (Dimension::Correctness, &self.correctness),
            (Dimension::Maintainability, &self.maintainability),
            (Dimension::Robustness, &self.robustness),
        ]
        .into_iter()
        .flat_map(|(dimension, result)| {
            result
                .findings
                .iter()
                .map(move |finding| (dimension, finding))
        })
    }

    pub fn has_failures(&self) -> bool {
        self.findings()
            .any(|(_, finding)| finding.kind == FindingKind::Fail)
    }
}
