//! Declarative rule records and the evaluator shared by all dimensions.

use super::Snippet;
use crate::types::report::{Dimension, DimensionResult, Score};
use std::fmt::Debug;

/// An item to report together with the score adjustment it carries.
#[derive(Debug, Clone)]
pub struct Verdict<T> {
    pub item: T,
    pub delta: i32,
}

impl<T> Verdict<T> {
    pub const fn new(item: T, delta: i32) -> Verdict<T> {
        Verdict { item, delta }
    }
}

pub enum Rule<T> {
    /// Boolean check. `fail: None` means the negative branch reports nothing.
    Check {
        id: &'static str,
        holds: fn(&Snippet<'_>) -> bool,
        pass: Verdict<T>,
        fail: Option<Verdict<T>>,
    },
    /// Multi-way rule that may report zero or more items.
    Grade {
        id: &'static str,
        grade: fn(&Snippet<'_>) -> Vec<Verdict<T>>,
    },
}

impl<T: Clone + Debug> Rule<T> {
    pub fn id(&self) -> &'static str {
        match self {
            Rule::Check { id, .. } | Rule::Grade { id, .. } => *id,
        }
    }

    fn verdicts(&self, snippet: &Snippet<'_>) -> Vec<Verdict<T>> {
        match self {
            Rule::Check {
                holds, pass, fail, ..
            } => {
                if holds(snippet) {
                    vec![pass.clone()]
                } else {
                    fail.iter().cloned().collect()
                }
            }
            Rule::Grade { grade, .. } => grade(snippet),
        }
    }
}

/// Runs `rules` in order from the dimension baseline. The score is clamped once,
/// after every delta has been applied.
pub fn evaluate<T: Clone + Debug>(
    dimension: Dimension,
    rules: &[Rule<T>],
    snippet: &Snippet<'_>,
) -> DimensionResult<T> {
    let mut score = dimension.baseline();
    let mut findings = Vec::new();
    for rule in rules {
        for verdict in rule.verdicts(snippet) {
            tracing::trace!(
                dimension = dimension.as_str(),
                rule = rule.id(),
                delta = verdict.delta,
                item = ?verdict.item,
                "rule verdict"
            );
            score += verdict.delta;
            findings.push(verdict.item);
        }
    }
    DimensionResult {
        score: clamp_score(score),
        findings,
    }
}

pub fn clamp_score(raw: i32) -> Score {
    raw.clamp(0, 100) as Score
}
