pub mod correctness;
pub mod maintainability;
pub mod performance;
pub mod robustness;
pub mod rule;

use crate::language::{LanguageId, PatternSet};
use crate::metrics::SnippetMetrics;
use crate::types::report::{AnalysisResult, Score};

/// Everything a rule may inspect: the raw text, its pattern set and the
/// metrics extracted up front.
pub struct Snippet<'a> {
    pub text: &'a str,
    pub language: LanguageId,
    pub patterns: &'static PatternSet,
    pub metrics: SnippetMetrics,
}

impl<'a> Snippet<'a> {
    pub fn new(text: &'a str, language: LanguageId) -> Snippet<'a> {
        Snippet {
            text,
            language,
            patterns: PatternSet::for_language(language),
            metrics: SnippetMetrics::extract(text, language),
        }
    }
}

/// Scores `snippet` for a free-form language id. Unknown ids use the default
/// language. Never fails.
pub fn analyze(snippet: &str, language: &str) -> AnalysisResult {
    analyze_with(snippet, LanguageId::resolve(language))
}

pub fn analyze_with(snippet: &str, language: LanguageId) -> AnalysisResult {
    let snippet = Snippet::new(snippet, language);

    let correctness = correctness::score(&snippet);
    let performance = performance::score(&snippet);
    let maintainability = maintainability::score(&snippet);
    let robustness = robustness::score(&snippet);
    let overall = aggregate([
        correctness.score,
        performance.score,
        maintainability.score,
        robustness.score,
    ]);

    tracing::debug!(
        %language,
        overall,
        correctness = correctness.score,
        performance = performance.score,
        maintainability = maintainability.score,
        robustness = robustness.score,
        "analysis complete"
    );

    AnalysisResult {
        language,
        overall,
        correctness,
        performance,
        maintainability,
        robustness,
    }
}

/// Mean of the dimension scores, rounded half up.
pub fn aggregate(scores: [Score; 4]) -> Score {
    aggregate_many(scores).unwrap_or(0)
}

/// Rounded-half-up mean of any number of scores; `None` when empty.
pub fn aggregate_many(scores: impl IntoIterator<Item = Score>) -> Option<Score> {
    let (sum, count) = scores
        .into_iter()
        .fold((0u32, 0u32), |(sum, count), score| {
            (sum + u32::from(score), count + 1)
        });
    if count == 0 {
        return None;
    }
    Some(((2 * sum + count) / (2 * count)) as Score)
}
