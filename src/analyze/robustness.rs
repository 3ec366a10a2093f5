use super::rule::{evaluate, Rule, Verdict};
use super::Snippet;
use crate::types::finding::{Finding, Message};
use crate::types::report::{Dimension, DimensionResult};
use regex::Regex;
use std::sync::LazyLock;

static INPUT_VALIDATION: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"typeof|instanceof|isNaN|null|undefined|None|nil|isEmpty").unwrap()
});

static RELATIONAL: LazyLock<Regex> = LazyLock::new(|| Regex::new(r"<=|>=|<|>").unwrap());

static RESOURCE_CLEANUP: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"finally|close|dispose|defer|drop").unwrap());

static DEFENSIVE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"assert|require|ensure|invariant").unwrap());

fn handles_errors(snippet: &Snippet<'_>) -> bool {
    snippet.patterns.error_handling.is_match(snippet.text)
}

fn validates_input(snippet: &Snippet<'_>) -> bool {
    INPUT_VALIDATION.is_match(snippet.text)
}

fn checks_boundaries(snippet: &Snippet<'_>) -> bool {
    RELATIONAL.is_match(snippet.text)
}

fn cleans_up(snippet: &Snippet<'_>) -> bool {
    RESOURCE_CLEANUP.is_match(snippet.text)
}

fn programs_defensively(snippet: &Snippet<'_>) -> bool {
    DEFENSIVE.is_match(snippet.text)
}

static RULES: [Rule<Finding>; 5] = [
    Rule::Check {
        id: "error_handling",
        holds: handles_errors,
        pass: Verdict::new(Finding::pass(Message::HasErrorHandling), 15),
        fail: Some(Verdict::new(Finding::fail(Message::MissingErrorHandling), 0)),
    },
    Rule::Check {
        id: "input_validation",
        holds: validates_input,
        pass: Verdict::new(Finding::pass(Message::HasInputValidation), 10),
        fail: Some(Verdict::new(Finding::warning(Message::SuggestInputValidation), -5)),
    },
    Rule::Check {
        id: "boundary_checks",
        holds: checks_boundaries,
        pass: Verdict::new(Finding::pass(Message::HasBoundaryChecks), 0),
        fail: Some(Verdict::new(Finding::warning(Message::UncheckedBoundaries), -10)),
    },
    Rule::Check {
        id: "resource_cleanup",
        holds: cleans_up,
        pass: Verdict::new(Finding::pass(Message::HasResourceCleanup), 5),
        fail: Some(Verdict::new(Finding::warning(Message::SuggestResourceCleanup), 0)),
    },
    Rule::Check {
        id: "defensive_programming",
        holds: programs_defensively,
        pass: Verdict::new(Finding::pass(Message::UsesDefensiveProgramming), 5),
        fail: None,
    },
];

pub fn score(snippet: &Snippet<'_>) -> DimensionResult<Finding> {
    evaluate(Dimension::Robustness, &RULES, snippet)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::language::LanguageId;
    use crate::types::finding::FindingKind;

    #[test]
    fn go_without_error_checks_fails_and_gets_no_bonus() {
        let snippet = Snippet::new(
            "func add(a int, b int) int {\n\treturn a + b\n}",
            LanguageId::Go,
        );
        let result = score(&snippet);
        assert_eq!(
            result.findings[0],
            Finding::fail(Message::MissingErrorHandling)
        );
        assert!(result.score <= 70);
        assert_eq!(result.score, 70 - 5 - 10);
    }

    #[test]
    fn go_error_checks_earn_the_bonus() {
        let snippet = Snippet::new(
            "func load(p string) error {\n\tf, err := os.Open(p)\n\tif err != nil {\n\t\treturn err\n\t}\n\tdefer f.Close()\n\treturn nil\n}",
            LanguageId::Go,
        );
        let result = score(&snippet);
        assert_eq!(result.findings[0].kind, FindingKind::Pass);
        // +15 errors, +10 nil check, -10 no relational operator, +5 defer
        assert_eq!(result.score, 90);
    }

    #[test]
    fn defensive_rule_only_reports_when_present() {
        let plain = score(&Snippet::new("x = 1", LanguageId::Python));
        assert_eq!(plain.findings.len(), 4);
        assert!(plain
            .findings
            .iter()
            .all(|finding| finding.message != Message::UsesDefensiveProgramming));

        let guarded = score(&Snippet::new("assert x > 0", LanguageId::Python));
        assert_eq!(guarded.findings.len(), 5);
        assert_eq!(
            guarded.findings.last(),
            Some(&Finding::pass(Message::UsesDefensiveProgramming))
        );
    }

    #[test]
    fn scores_clamp_at_one_hundred() {
        let snippet = Snippet::new(
            "try { if (typeof x === 'number' && x >= 0) { assert(x); } } finally { close(); }",
            LanguageId::JavaScript,
        );
        let result = score(&snippet);
        assert_eq!(result.findings.len(), 5);
        assert_eq!(result.score, 100);
    }
}
