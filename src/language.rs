//! Language identifiers and the per-language pattern registry.
//!
//! The registry is built once on first use and is read-only afterwards. Every
//! lookup succeeds: identifiers outside the supported set resolve to
//! [`LanguageId::DEFAULT`].

use regex::Regex;
use serde::Serialize;
use std::fmt;
use std::sync::LazyLock;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum LanguageId {
    JavaScript,
    Python,
    Java,
    Cpp,
    Go,
    Rust,
}

impl LanguageId {
    pub const DEFAULT: LanguageId = LanguageId::JavaScript;

    pub const ALL: [LanguageId; 6] = [
        LanguageId::JavaScript,
        LanguageId::Python,
        LanguageId::Java,
        LanguageId::Cpp,
        LanguageId::Go,
        LanguageId::Rust,
    ];

    pub fn as_str(self) -> &'static str {
        match self {
            LanguageId::JavaScript => "javascript",
            LanguageId::Python => "python",
            LanguageId::Java => "java",
            LanguageId::Cpp => "cpp",
            LanguageId::Go => "go",
            LanguageId::Rust => "rust",
        }
    }

    /// Strict parse. Returns `None` for anything outside the supported set.
    pub fn parse(id: &str) -> Option<LanguageId> {
        match id.trim().to_ascii_lowercase().as_str() {
            "javascript" | "js" => Some(LanguageId::JavaScript),
            "python" | "py" => Some(LanguageId::Python),
            "java" => Some(LanguageId::Java),
            "cpp" | "c++" => Some(LanguageId::Cpp),
            "go" | "golang" => Some(LanguageId::Go),
            "rust" | "rs" => Some(LanguageId::Rust),
            _ => None,
        }
    }

    /// Lenient parse used by the engine: unknown ids fall back to the default.
    pub fn resolve(id: &str) -> LanguageId {
        match Self::parse(id) {
            Some(language) => language,
            None => {
                tracing::debug!(id, fallback = %Self::DEFAULT, "unrecognized language id");
                Self::DEFAULT
            }
        }
    }

    pub fn from_extension(ext: &str) -> Option<LanguageId> {
        match ext.to_ascii_lowercase().as_str() {
            "js" | "mjs" | "cjs" | "jsx" | "ts" | "tsx" => Some(LanguageId::JavaScript),
            "py" => Some(LanguageId::Python),
            "java" => Some(LanguageId::Java),
            "c" | "cc" | "cpp" | "cxx" | "h" | "hpp" => Some(LanguageId::Cpp),
            "go" => Some(LanguageId::Go),
            "rs" => Some(LanguageId::Rust),
            _ => None,
        }
    }
}

impl fmt::Display for LanguageId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Detectors for one language, keyed by semantic role.
#[derive(Debug)]
pub struct PatternSet {
    pub function: Regex,
    pub return_stmt: Regex,
    pub conditional: Regex,
    pub comment: Regex,
    pub error_handling: Regex,
}

const C_STYLE_COMMENT: &str = r"//|/\*|\*/";

impl PatternSet {
    pub fn for_language(language: LanguageId) -> &'static PatternSet {
        REGISTRY.lookup(language)
    }

    fn build(
        function: &str,
        conditional: &str,
        comment: &str,
        error_handling: &str,
    ) -> PatternSet {
        PatternSet {
            function: compile(function),
            return_stmt: compile(r"return\s+"),
            conditional: compile(conditional),
            comment: compile(comment),
            error_handling: compile(error_handling),
        }
    }
}

fn compile(pattern: &str) -> Regex {
    Regex::new(pattern).expect("built-in pattern must compile")
}

struct Registry {
    javascript: PatternSet,
    python: PatternSet,
    java: PatternSet,
    cpp: PatternSet,
    go: PatternSet,
    rust: PatternSet,
}

impl Registry {
    fn lookup(&self, language: LanguageId) -> &PatternSet {
        match language {
            LanguageId::JavaScript => &self.javascript,
            LanguageId::Python => &self.python,
            LanguageId::Java => &self.java,
            LanguageId::Cpp => &self.cpp,
            LanguageId::Go => &self.go,
            LanguageId::Rust => &self.rust,
        }
    }
}

static REGISTRY: LazyLock<Registry> = LazyLock::new(|| Registry {
    javascript: PatternSet::build(
        r"function\s+[[:word:]]+|const\s+[[:word:]]+\s*=\s*(?:\([^)]*\)|[^=]+)\s*=>|class\s+[[:word:]]+",
        r"if\s*\(|switch\s*\(|\?\s*.*\s*:",
        C_STYLE_COMMENT,
        r"try|catch|finally|throw",
    ),
    python: PatternSet::build(
        r"def\s+[[:word:]]+|class\s+[[:word:]]+",
        r"if\s+|elif\s+|match\s+",
        r#"#|'''|""""#,
        r"try|except|finally|raise",
    ),
    java: PatternSet::build(
        r"(?:public|private|protected)?\s*(?:static\s+)?[[:word:]<>\[\]]+\s+[[:word:]]+\s*\(|class\s+[[:word:]]+",
        r"if\s*\(|switch\s*\(",
        C_STYLE_COMMENT,
        r"try|catch|finally|throw|throws",
    ),
    cpp: PatternSet::build(
        r"(?:[[:word:]:]+\s+)+[[:word:]]+\s*\([^)]*\)\s*(?:const)?\s*\{|class\s+[[:word:]]+",
        r"if\s*\(|switch\s*\(",
        C_STYLE_COMMENT,
        r"try|catch|throw",
    ),
    go: PatternSet::build(
        r"func\s+[[:word:]]+",
        r"if\s+|switch\s+",
        C_STYLE_COMMENT,
        r"if\s+err\s*!=\s*nil|errors\.",
    ),
    rust: PatternSet::build(
        r"fn\s+[[:word:]]+|impl\s+",
        r"if\s+|match\s+",
        C_STYLE_COMMENT,
        r"Result|Option|unwrap|expect|\?",
    ),
});
