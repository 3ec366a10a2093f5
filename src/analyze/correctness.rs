use super::rule::{evaluate, Rule, Verdict};
use super::Snippet;
use crate::types::finding::{Finding, Message};
use crate::types::report::{Dimension, DimensionResult};
use regex::Regex;
use std::sync::LazyLock;

static EQUALITY_OR_BOUND: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"<=|>=|===|!==|==|!=").unwrap());

fn has_definition(snippet: &Snippet<'_>) -> bool {
    snippet.patterns.function.is_match(snippet.text)
}

fn has_return(snippet: &Snippet<'_>) -> bool {
    snippet.patterns.return_stmt.is_match(snippet.text)
}

fn has_conditional(snippet: &Snippet<'_>) -> bool {
    snippet.patterns.conditional.is_match(snippet.text)
}

fn has_boundary_check(snippet: &Snippet<'_>) -> bool {
    EQUALITY_OR_BOUND.is_match(snippet.text)
}

static RULES: [Rule<Finding>; 4] = [
    Rule::Check {
        id: "definitions",
        holds: has_definition,
        pass: Verdict::new(Finding::pass(Message::HasDefinitions), 0),
        fail: Some(Verdict::new(Finding::warning(Message::NoDefinitions), -10)),
    },
    Rule::Check {
        id: "return",
        holds: has_return,
        pass: Verdict::new(Finding::pass(Message::HasReturn), 0),
        fail: Some(Verdict::new(Finding::warning(Message::NoReturn), -5)),
    },
    Rule::Check {
        id: "conditional",
        holds: has_conditional,
        pass: Verdict::new(Finding::pass(Message::HasConditional), 0),
        fail: Some(Verdict::new(Finding::warning(Message::MissingConditional), -5)),
    },
    Rule::Check {
        id: "boundary_checks",
        holds: has_boundary_check,
        pass: Verdict::new(Finding::pass(Message::HasBoundaryChecks), 0),
        fail: Some(Verdict::new(Finding::warning(Message::SuggestBoundaryChecks), -5)),
    },
];

pub fn score(snippet: &Snippet<'_>) -> DimensionResult<Finding> {
    evaluate(Dimension::Correctness, &RULES, snippet)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::language::LanguageId;
    use crate::types::finding::FindingKind;

    #[test]
    fn minimal_valid_javascript_function_keeps_full_baseline() {
        let snippet = Snippet::new(
            "function add(a,b){ if(a>=0){ return a+b; } return 0; }",
            LanguageId::JavaScript,
        );
        let result = score(&snippet);
        assert_eq!(result.score, 85);
        assert_eq!(
            result.findings,
            vec![
                Finding::pass(Message::HasDefinitions),
                Finding::pass(Message::HasReturn),
                Finding::pass(Message::HasConditional),
                Finding::pass(Message::HasBoundaryChecks),
            ]
        );
    }

    #[test]
    fn every_missing_signal_costs_points_and_still_reports() {
        let snippet = Snippet::new("print hello", LanguageId::Python);
        let result = score(&snippet);
        assert_eq!(result.score, 85 - 10 - 5 - 5 - 5);
        assert_eq!(result.findings.len(), 4);
        assert!(result
            .findings
            .iter()
            .all(|finding| finding.kind == FindingKind::Warning));
    }

    #[test]
    fn arrow_functions_count_as_definitions() {
        let snippet = Snippet::new("const twice = (x) => x * 2;", LanguageId::JavaScript);
        assert!(has_definition(&snippet));
    }
}
