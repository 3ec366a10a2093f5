use super::rule::{evaluate, Rule, Verdict};
use super::Snippet;
use crate::types::finding::{Finding, Message};
use crate::types::report::{Dimension, DimensionResult};

fn comment_ratio(snippet: &Snippet<'_>) -> Vec<Verdict<Finding>> {
    let ratio = snippet.metrics.comment_ratio;
    let verdict = if ratio > 0.15 {
        Verdict::new(Finding::pass(Message::CommentRatioExcellent { ratio }), 10)
    } else if ratio > 0.05 {
        Verdict::new(Finding::pass(Message::CommentRatioGood { ratio }), 0)
    } else {
        Verdict::new(Finding::warning(Message::InsufficientComments), -10)
    };
    vec![verdict]
}

fn consistent_naming(snippet: &Snippet<'_>) -> bool {
    snippet.metrics.camel_case_count > 5 || snippet.metrics.snake_case_count > 5
}

fn short_lines(snippet: &Snippet<'_>) -> bool {
    snippet.metrics.avg_line_length < 50.0
}

fn duplication(snippet: &Snippet<'_>) -> Vec<Verdict<Finding>> {
    let ratio = snippet.metrics.duplication_ratio;
    let verdict = if ratio < 0.1 {
        Verdict::new(Finding::pass(Message::LowDuplication), 0)
    } else if ratio < 0.3 {
        Verdict::new(Finding::warning(Message::SomeDuplication), -5)
    } else {
        Verdict::new(Finding::fail(Message::HighDuplication), -15)
    };
    vec![verdict]
}

/// Snippets between 100 and 300 lines report nothing for size.
fn size(snippet: &Snippet<'_>) -> Vec<Verdict<Finding>> {
    match snippet.metrics.non_empty_lines {
        lines if lines < 100 => vec![Verdict::new(Finding::pass(Message::ConciseStructure), 0)],
        lines if lines > 300 => vec![Verdict::new(Finding::warning(Message::LengthyCode), -10)],
        _ => Vec::new(),
    }
}

static RULES: [Rule<Finding>; 5] = [
    Rule::Grade {
        id: "comment_ratio",
        grade: comment_ratio,
    },
    Rule::Check {
        id: "naming",
        holds: consistent_naming,
        pass: Verdict::new(Finding::pass(Message::FollowsNaming), 0),
        fail: Some(Verdict::new(Finding::warning(Message::InconsistentNaming), -5)),
    },
    Rule::Check {
        id: "line_length",
        holds: short_lines,
        pass: Verdict::new(Finding::pass(Message::LineLengthOk), 0),
        fail: Some(Verdict::new(Finding::warning(Message::LinesTooLong), -5)),
    },
    Rule::Grade {
        id: "duplication",
        grade: duplication,
    },
    Rule::Grade {
        id: "size",
        grade: size,
    },
];

pub fn score(snippet: &Snippet<'_>) -> DimensionResult<Finding> {
    evaluate(Dimension::Maintainability, &RULES, snippet)
}
