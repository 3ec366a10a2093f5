//! Textual metric extraction.
//!
//! Every fact here is computed from raw text with regular expressions; nothing
//! is scope-aware. Ratios are 0 when their denominator is 0, so an empty snippet
//! never divides by zero.

use crate::language::{LanguageId, PatternSet};
use regex::Regex;
use serde::Serialize;
use std::collections::HashSet;
use std::sync::LazyLock;

static FOR_LOOP: LazyLock<Regex> = LazyLock::new(|| Regex::new(r"for\s*\(").unwrap());

static WHILE_LOOP: LazyLock<Regex> = LazyLock::new(|| Regex::new(r"while\s*\(").unwrap());

/// A loop opener, a brace, interior text without a closing brace, then a second
/// loop opener. Over- and under-counts real nesting.
static NESTED_LOOP: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(
        r"(?s)for[^\{]*\{[^\}]*for|while[^\{]*\{[^\}]*while|for[^\{]*\{[^\}]*while|while[^\{]*\{[^\}]*for",
    )
    .unwrap()
});

/// Identifiers are ASCII word characters only.
static FUNCTION_NAME: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"(?:function|def|fn)\s+([[:word:]]+)").unwrap());

static BRANCH_TOKEN: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"if|for|while|case|catch|\|\||&&").unwrap());

static CAMEL_CASE: LazyLock<Regex> = LazyLock::new(|| Regex::new(r"[a-z][A-Za-z0-9]+").unwrap());

static SNAKE_CASE: LazyLock<Regex> = LazyLock::new(|| Regex::new(r"[a-z]+_[a-z0-9_]+").unwrap());

static APPEND_CHAIN: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"(?s)\.(?:push|append)\(.*\).*\.(?:push|append)\(").unwrap()
});

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct SnippetMetrics {
    pub non_empty_lines: usize,
    pub loop_count: usize,
    pub nested_loop_count: usize,
    /// One entry per declaration whose name is also called elsewhere.
    pub recursive_functions: Vec<String>,
    pub cyclomatic_complexity: usize,
    pub comment_ratio: f64,
    pub camel_case_count: usize,
    pub snake_case_count: usize,
    pub avg_line_length: f64,
    pub duplication_ratio: f64,
    pub append_chain_in_loop: bool,
}

impl SnippetMetrics {
    pub fn extract(snippet: &str, language: LanguageId) -> SnippetMetrics {
        let patterns = PatternSet::for_language(language);
        let non_empty_lines = non_empty_line_count(snippet);
        let loop_count = loop_count(snippet);

        let metrics = SnippetMetrics {
            non_empty_lines,
            loop_count,
            nested_loop_count: nested_loop_count(snippet),
            recursive_functions: recursive_functions(snippet),
            cyclomatic_complexity: cyclomatic_complexity(snippet),
            comment_ratio: ratio(patterns.comment.find_iter(snippet).count(), non_empty_lines),
            camel_case_count: CAMEL_CASE.find_iter(snippet).count(),
            snake_case_count: SNAKE_CASE.find_iter(snippet).count(),
            avg_line_length: ratio(snippet.encode_utf16().count(), non_empty_lines),
            duplication_ratio: duplication_ratio(snippet),
            append_chain_in_loop: loop_count > 0 && APPEND_CHAIN.is_match(snippet),
        };
        tracing::debug!(
            %language,
            naming_signals = metrics.naming_signal_count(),
            ?metrics,
            "extracted snippet metrics"
        );
        metrics
    }

    pub fn naming_signal_count(&self) -> usize {
        self.camel_case_count + self.snake_case_count
    }
}

fn ratio(numerator: usize, denominator: usize) -> f64 {
    if denominator == 0 {
        0.0
    } else {
        numerator as f64 / denominator as f64
    }
}

pub fn non_empty_line_count(snippet: &str) -> usize {
    snippet
        .split('\n')
        .filter(|line| !line.trim().is_empty())
        .count()
}

pub fn loop_count(snippet: &str) -> usize {
    FOR_LOOP.find_iter(snippet).count() + WHILE_LOOP.find_iter(snippet).count()
}

pub fn nested_loop_count(snippet: &str) -> usize {
    NESTED_LOOP.find_iter(snippet).count()
}

/// Names declared with `function`, `def` or `fn` that occur as a call more than
/// once (the declaration itself counts as one occurrence).
pub fn recursive_functions(snippet: &str) -> Vec<String> {
    FUNCTION_NAME
        .captures_iter(snippet)
        .filter_map(|caps| caps.get(1))
        .map(|name| name.as_str())
        .filter(|name| call_count(snippet, name) >= 2)
        .map(str::to_string)
        .collect()
}

/// Occurrences of `name(` that start on an ASCII word boundary.
fn call_count(snippet: &str, name: &str) -> usize {
    let Ok(call) = Regex::new(&format!(r"{}\s*\(", regex::escape(name))) else {
        return 0;
    };
    call.find_iter(snippet)
        .filter(|found| {
            !snippet[..found.start()]
                .bytes()
                .next_back()
                .is_some_and(|byte| byte.is_ascii_alphanumeric() || byte == b'_')
        })
        .count()
}

pub fn cyclomatic_complexity(snippet: &str) -> usize {
    1 + BRANCH_TOKEN.find_iter(snippet).count()
}

pub fn duplication_ratio(snippet: &str) -> f64 {
    let lines: Vec<&str> = snippet
        .split('\n')
        .map(str::trim)
        .filter(|line| !line.is_empty())
        .collect();
    let distinct: HashSet<&str> = lines.iter().copied().collect();
    if lines.is_empty() {
        0.0
    } else {
        1.0 - distinct.len() as f64 / lines.len() as f64
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn approx(actual: f64, expected: f64) -> bool {
        (actual - expected).abs() < 1e-9
    }

    #[test]
    fn empty_snippet_yields_zero_ratios() {
        for snippet in ["", "   \n\t\n"] {
            let metrics = SnippetMetrics::extract(snippet, LanguageId::Python);
            assert_eq!(metrics.non_empty_lines, 0);
            assert_eq!(metrics.comment_ratio, 0.0);
            assert_eq!(metrics.duplication_ratio, 0.0);
            assert_eq!(metrics.avg_line_length, 0.0);
            assert_eq!(metrics.loop_count, 0);
            assert_eq!(metrics.cyclomatic_complexity, 1);
        }
    }

    #[test]
    fn counts_for_and_while_openers() {
        let snippet = "for (i = 0; i < n; i++) {}\nwhile (x) {}\nwhile(y) {}";
        assert_eq!(loop_count(snippet), 3);
    }

    #[test]
    fn detects_one_nested_loop_region() {
        let snippet = "for (let i = 0; i < n; i++) {\n  for (let j = 0; j < i; j++) {\n    sum += j;\n  }\n}";
        assert_eq!(nested_loop_count(snippet), 1);
    }

    #[test]
    fn sequential_loops_are_not_nested() {
        let snippet = "for (let i = 0; i < n; i++) { a(i); }\nfor (let j = 0; j < n; j++) { b(j); }";
        assert_eq!(nested_loop_count(snippet), 0);
        assert_eq!(loop_count(snippet), 2);
    }

    #[test]
    fn recursion_requires_a_call_beyond_the_declaration() {
        let recursive = "def fact(n):\n    return 1 if n <= 1 else n * fact(n - 1)";
        let plain = "def add(a, b):\n    return a + b";
        assert_eq!(recursive_functions(recursive), vec!["fact".to_string()]);
        assert!(recursive_functions(plain).is_empty());
    }

    #[test]
    fn recursion_lists_each_self_referencing_function() {
        let snippet = "fn a(n: u32) -> u32 { a(n) }\nfn b(n: u32) -> u32 { b(n) }\nfn c() {}";
        assert_eq!(recursive_functions(snippet), vec!["a", "b"]);
    }

    #[test]
    fn recursion_only_considers_ascii_identifiers() {
        let snippet = "fn größe(n: u32) -> u32 { größe(n) }";
        assert!(recursive_functions(snippet).is_empty());
        assert!(recursive_functions("function addAll(xs) { return subaddAll(xs); }").is_empty());
        assert_eq!(
            recursive_functions("function walk(n) { return n && walk(n.next); }"),
            vec!["walk"]
        );
    }

    #[test]
    fn cyclomatic_complexity_counts_branch_tokens() {
        assert_eq!(cyclomatic_complexity("if (a && b || c) { x(); }"), 4);
    }

    #[test]
    fn comment_ratio_uses_language_comment_markers() {
        let snippet = "// add two numbers\nfunction add(a, b) {\n  return a + b;\n}";
        let metrics = SnippetMetrics::extract(snippet, LanguageId::JavaScript);
        assert!(approx(metrics.comment_ratio, 0.25));

        let python = SnippetMetrics::extract(snippet, LanguageId::Python);
        assert_eq!(python.comment_ratio, 0.0);
    }

    #[test]
    fn duplication_ratio_is_line_level() {
        let mut lines = vec!["x = x + 1"; 5];
        lines.extend(["a = 1", "b = 2", "c = 3", "d = 4", "e = 5"]);
        assert!(approx(duplication_ratio(&lines.join("\n")), 0.4));
        assert!(approx(duplication_ratio("  same\nsame  \n\nother"), 1.0 - 2.0 / 3.0));
    }

    #[test]
    fn append_chain_needs_a_loop() {
        let with_loop = "for (const x of xs) { out.push(x); out.push(x * 2); }";
        let without_loop = "out.push(1); out.push(2);";
        assert!(SnippetMetrics::extract(with_loop, LanguageId::JavaScript).append_chain_in_loop);
        assert!(
            !SnippetMetrics::extract(without_loop, LanguageId::JavaScript).append_chain_in_loop
        );
    }

    #[test]
    fn avg_line_length_counts_every_character_over_non_empty_lines() {
        let metrics = SnippetMetrics::extract("abcd\n\nefgh", LanguageId::Go);
        assert!(approx(metrics.avg_line_length, 10.0 / 2.0));
    }

    #[test]
    fn avg_line_length_counts_utf16_units() {
        let metrics = SnippetMetrics::extract("\u{1F600}ab", LanguageId::JavaScript);
        assert!(approx(metrics.avg_line_length, 4.0));
    }

    #[test]
    fn naming_signals_sum_camel_and_snake_tokens() {
        let metrics = SnippetMetrics::extract("user_name", LanguageId::Python);
        assert_eq!(metrics.camel_case_count, 2);
        assert_eq!(metrics.snake_case_count, 1);
        assert_eq!(metrics.naming_signal_count(), 3);
    }
}
