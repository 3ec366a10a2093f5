//! Performance reports quantities. Only some rules always emit; the loop and
//! append rules report nothing when their trigger is absent.

use super::rule::{evaluate, Rule, Verdict};
use super::Snippet;
use crate::types::finding::{Metric, MetricLabel, MetricValue, MetricWarning};
use crate::types::report::{Dimension, DimensionResult};

const NESTED_LOOP_PENALTY: i32 = 10;
const RECURSION_PENALTY: i32 = 5;

fn loops(snippet: &Snippet<'_>) -> Vec<Verdict<Metric>> {
    let nested = snippet.metrics.nested_loop_count;
    if nested > 0 {
        vec![Verdict::new(
            Metric::warned(
                MetricLabel::NestedLoops,
                MetricValue::Count(nested),
                MetricWarning::QuadraticComplexity,
            ),
            -NESTED_LOOP_PENALTY * nested as i32,
        )]
    } else if snippet.metrics.loop_count > 0 {
        vec![Verdict::new(
            Metric::info(MetricLabel::LoopStructure, MetricValue::Good),
            0,
        )]
    } else {
        Vec::new()
    }
}

/// One metric and one penalty per self-referencing function.
fn recursion(snippet: &Snippet<'_>) -> Vec<Verdict<Metric>> {
    snippet
        .metrics
        .recursive_functions
        .iter()
        .map(|_| {
            Verdict::new(
                Metric::warned(
                    MetricLabel::RecursiveCalls,
                    MetricValue::Detected,
                    MetricWarning::StackOverflowRisk,
                ),
                -RECURSION_PENALTY,
            )
        })
        .collect()
}

fn lines_of_code(snippet: &Snippet<'_>) -> Vec<Verdict<Metric>> {
    vec![Verdict::new(
        Metric::info(
            MetricLabel::LinesOfCode,
            MetricValue::Count(snippet.metrics.non_empty_lines),
        ),
        0,
    )]
}

fn cyclomatic_complexity(snippet: &Snippet<'_>) -> Vec<Verdict<Metric>> {
    vec![Verdict::new(
        Metric::info(
            MetricLabel::CyclomaticComplexity,
            MetricValue::Count(snippet.metrics.cyclomatic_complexity),
        ),
        0,
    )]
}

fn complexity_rating(snippet: &Snippet<'_>) -> Vec<Verdict<Metric>> {
    let verdict = match snippet.metrics.cyclomatic_complexity {
        cc if cc > 10 => Verdict::new(
            Metric::warned(
                MetricLabel::ComplexityRating,
                MetricValue::High,
                MetricWarning::RefactorComplexity,
            ),
            -10,
        ),
        cc if cc > 5 => Verdict::new(
            Metric::info(MetricLabel::ComplexityRating, MetricValue::Moderate),
            -5,
        ),
        _ => Verdict::new(
            Metric::info(MetricLabel::ComplexityRating, MetricValue::Low),
            0,
        ),
    };
    vec![verdict]
}

fn append_chain_in_loop(snippet: &Snippet<'_>) -> bool {
    snippet.metrics.append_chain_in_loop
}

static RULES: [Rule<Metric>; 6] = [
    Rule::Grade {
        id: "loops",
        grade: loops,
    },
    Rule::Grade {
        id: "recursion",
        grade: recursion,
    },
    Rule::Grade {
        id: "lines_of_code",
        grade: lines_of_code,
    },
    Rule::Grade {
        id: "cyclomatic_complexity",
        grade: cyclomatic_complexity,
    },
    Rule::Grade {
        id: "complexity_rating",
        grade: complexity_rating,
    },
    Rule::Check {
        id: "append_in_loop",
        holds: append_chain_in_loop,
        pass: Verdict::new(
            Metric::warned(
                MetricLabel::ArrayOperations,
                MetricValue::Detected,
                MetricWarning::RepeatedAppendInLoop,
            ),
            -5,
        ),
        fail: None,
    },
];

pub fn score(snippet: &Snippet<'_>) -> DimensionResult<Metric> {
    evaluate(Dimension::Performance, &RULES, snippet)
}
