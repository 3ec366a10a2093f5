//! Rule output records.
//!
//! Findings and metrics carry structured message keys instead of rendered
//! text; `crate::report::messages` turns them into display strings.

use serde::Serialize;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum FindingKind {
    Pass,
    Warning,
    Fail,
}

impl FindingKind {
    pub fn as_str(self) -> &'static str {
        match self {
            FindingKind::Pass => "pass",
            FindingKind::Warning => "warning",
            FindingKind::Fail => "fail",
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(tag = "key", rename_all = "snake_case")]
pub enum Message {
    HasDefinitions,
    NoDefinitions,
    HasReturn,
    NoReturn,
    HasConditional,
    MissingConditional,
    HasBoundaryChecks,
    SuggestBoundaryChecks,
    CommentRatioExcellent { ratio: f64 },
    CommentRatioGood { ratio: f64 },
    InsufficientComments,
    FollowsNaming,
    InconsistentNaming,
    LineLengthOk,
    LinesTooLong,
    LowDuplication,
    SomeDuplication,
    HighDuplication,
    ConciseStructure,
    LengthyCode,
    HasErrorHandling,
    MissingErrorHandling,
    HasInputValidation,
    SuggestInputValidation,
    UncheckedBoundaries,
    HasResourceCleanup,
    SuggestResourceCleanup,
    UsesDefensiveProgramming,
}

impl Message {
    pub fn key(&self) -> &'static str {
        match self {
            Message::HasDefinitions => "has_definitions",
            Message::NoDefinitions => "no_definitions",
            Message::HasReturn => "has_return",
            Message::NoReturn => "no_return",
            Message::HasConditional => "has_conditional",
            Message::MissingConditional => "missing_conditional",
            Message::HasBoundaryChecks => "has_boundary_checks",
            Message::SuggestBoundaryChecks => "suggest_boundary_checks",
            Message::CommentRatioExcellent { .. } => "comment_ratio_excellent",
            Message::CommentRatioGood { .. } => "comment_ratio_good",
            Message::InsufficientComments => "insufficient_comments",
            Message::FollowsNaming => "follows_naming",
            Message::InconsistentNaming => "inconsistent_naming",
            Message::LineLengthOk => "line_length_ok",
            Message::LinesTooLong => "lines_too_long",
            Message::LowDuplication => "low_duplication",
            Message::SomeDuplication => "some_duplication",
            Message::HighDuplication => "high_duplication",
            Message::ConciseStructure => "concise_structure",
            Message::LengthyCode => "lengthy_code",
            Message::HasErrorHandling => "has_error_handling",
            Message::MissingErrorHandling => "missing_error_handling",
            Message::HasInputValidation => "has_input_validation",
            Message::SuggestInputValidation => "suggest_input_validation",
            Message::UncheckedBoundaries => "unchecked_boundaries",
            Message::HasResourceCleanup => "has_resource_cleanup",
            Message::SuggestResourceCleanup => "suggest_resource_cleanup",
            Message::UsesDefensiveProgramming => "uses_defensive_programming",
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Finding {
    pub kind: FindingKind,
    pub message: Message,
}

impl Finding {
    pub const fn pass(message: Message) -> Finding {
        Finding {
            kind: FindingKind::Pass,
            message,
        }
    }

    pub const fn warning(message: Message) -> Finding {
        Finding {
            kind: FindingKind::Warning,
            message,
        }
    }

    pub const fn fail(message: Message) -> Finding {
        Finding {
            kind: FindingKind::Fail,
            message,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum MetricLabel {
    NestedLoops,
    LoopStructure,
    RecursiveCalls,
    LinesOfCode,
    CyclomaticComplexity,
    ComplexityRating,
    ArrayOperations,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum MetricValue {
    Count(usize),
    Good,
    Detected,
    High,
    Moderate,
    Low,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum MetricWarning {
    QuadraticComplexity,
    StackOverflowRisk,
    RefactorComplexity,
    RepeatedAppendInLoop,
}

/// A performance-dimension entry reporting a quantity rather than pass/fail.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Metric {
    pub label: MetricLabel,
    pub value: MetricValue,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub warning: Option<MetricWarning>,
}

impl Metric {
    pub const fn info(label: MetricLabel, value: MetricValue) -> Metric {
        Metric {
            label,
            value,
            warning: None,
        }
    }

    pub const fn warned(label: MetricLabel, value: MetricValue, warning: MetricWarning) -> Metric {
        Metric {
            label,
            value,
            warning: Some(warning),
        }
    }

    pub fn kind(&self) -> FindingKind {
        if self.warning.is_some() {
            FindingKind::Warning
        } else {
            FindingKind::Pass
        }
    }
}
