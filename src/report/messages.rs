//! Display strings for message keys, in the two supported UI locales.

use crate::types::finding::{FindingKind, Message, MetricLabel, MetricValue, MetricWarning};
use crate::types::report::Dimension;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Locale {
    #[default]
    En,
    Zh,
}

impl Locale {
    pub fn parse(value: &str) -> Option<Locale> {
        match value.trim().to_ascii_lowercase().as_str() {
            "en" => Some(Locale::En),
            "zh" | "zh_cn" | "zh-cn" => Some(Locale::Zh),
            _ => None,
        }
    }
}

pub fn glyph(kind: FindingKind) -> &'static str {
    match kind {
        FindingKind::Pass => "✓",
        FindingKind::Warning => "⚠",
        FindingKind::Fail => "✗",
    }
}

pub fn dimension_name(dimension: Dimension, locale: Locale) -> &'static str {
    match (dimension, locale) {
        (Dimension::Correctness, Locale::En) => "Functionality",
        (Dimension::Correctness, Locale::Zh) => "功能正确性",
        (Dimension::Performance, Locale::En) => "Performance",
        (Dimension::Performance, Locale::Zh) => "性能效率",
        (Dimension::Maintainability, Locale::En) => "Maintainability",
        (Dimension::Maintainability, Locale::Zh) => "可维护性",
        (Dimension::Robustness, Locale::En) => "Robustness",
        (Dimension::Robustness, Locale::Zh) => "健壮性",
    }
}

pub fn details_heading(dimension: Dimension, locale: Locale) -> String {
    match locale {
        Locale::En => format!("{} Details", dimension_name(dimension, locale)),
        Locale::Zh => format!("{}详情", dimension_name(dimension, locale)),
    }
}

pub fn overall_label(locale: Locale) -> &'static str {
    match locale {
        Locale::En => "Overall Score",
        Locale::Zh => "综合评分",
    }
}

pub fn message(message: &Message, locale: Locale) -> String {
    let zh = locale == Locale::Zh;
    let pick = |en: &str, cn: &str| if zh { cn.to_string() } else { en.to_string() };
    match message {
        Message::HasDefinitions => pick(
            "Code contains function or class definitions",
            "代码包含函数或类定义",
        ),
        Message::NoDefinitions => pick(
            "No function or class definitions detected",
            "未检测到函数或类定义",
        ),
        Message::HasReturn => pick("Contains return statements", "包含返回语句"),
        Message::NoReturn => pick("No return statements detected", "未检测到返回语句"),
        Message::HasConditional => pick("Contains conditional logic", "包含条件判断逻辑"),
        Message::MissingConditional => pick(
            "Missing conditionals may affect functionality",
            "缺少条件判断可能影响功能完整性",
        ),
        Message::HasBoundaryChecks => pick(
            "Contains boundary condition checks",
            "包含边界条件检查",
        ),
        Message::SuggestBoundaryChecks => pick(
            "Consider adding boundary checks",
            "建议添加边界条件检查",
        ),
        Message::CommentRatioExcellent { ratio } => {
            if zh {
                format!("注释率: {:.1}% - 优秀", ratio * 100.0)
            } else {
                format!("Comment ratio: {:.1}% - Excellent", ratio * 100.0)
            }
        }
        Message::CommentRatioGood { ratio } => {
            if zh {
                format!("注释率: {:.1}% - 良好", ratio * 100.0)
            } else {
                format!("Comment ratio: {:.1}% - Good", ratio * 100.0)
            }
        }
        Message::InsufficientComments => pick(
            "Insufficient comments, consider adding documentation",
            "注释不足，建议增加代码说明",
        ),
        Message::FollowsNaming => pick("Follows naming conventions", "遵循命名规范"),
        Message::InconsistentNaming => pick(
            "Consider using consistent naming conventions",
            "建议使用一致的命名规范",
        ),
        Message::LineLengthOk => pick("Line length is appropriate", "代码行长度适中"),
        Message::LinesTooLong => pick(
            "Some lines are too long, consider breaking them",
            "部分代码行过长，建议分行",
        ),
        Message::LowDuplication => pick("Low code duplication", "代码重复率低"),
        Message::SomeDuplication => pick("Some code duplication detected", "存在一定代码重复"),
        Message::HighDuplication => pick(
            "High duplication, consider extracting common functions",
            "代码重复率较高，建议提取公共函数",
        ),
        Message::ConciseStructure => pick("Code structure is concise", "代码结构简洁"),
        Message::LengthyCode => pick(
            "Code is lengthy, consider modularization",
            "代码较长，建议模块化拆分",
        ),
        Message::HasErrorHandling => pick("Contains exception handling", "包含异常处理机制"),
        Message::MissingErrorHandling => pick(
            "Missing exception handling, consider adding error handling",
            "缺少异常处理，建议添加错误处理逻辑",
        ),
        Message::HasInputValidation => pick("Contains input validation", "包含输入验证"),
        Message::SuggestInputValidation => pick(
            "Consider adding input parameter validation",
            "建议添加输入参数验证",
        ),
        Message::UncheckedBoundaries => pick(
            "Pay attention to boundary conditions",
            "注意检查边界条件",
        ),
        Message::HasResourceCleanup => pick("Contains resource cleanup code", "包含资源清理代码"),
        Message::SuggestResourceCleanup => pick(
            "If using resources, consider adding cleanup logic",
            "如有资源使用，建议添加清理逻辑",
        ),
        Message::UsesDefensiveProgramming => pick(
            "Uses defensive programming techniques",
            "使用了防御性编程技术",
        ),
    }
}

pub fn metric_label(label: MetricLabel, locale: Locale) -> &'static str {
    match (label, locale) {
        (MetricLabel::NestedLoops, Locale::En) => "Nested Loops",
        (MetricLabel::NestedLoops, Locale::Zh) => "嵌套循环",
        (MetricLabel::LoopStructure, Locale::En) => "Loop Structure",
        (MetricLabel::LoopStructure, Locale::Zh) => "循环结构",
        (MetricLabel::RecursiveCalls, Locale::En) => "Recursive Calls",
        (MetricLabel::RecursiveCalls, Locale::Zh) => "递归调用",
        (MetricLabel::LinesOfCode, Locale::En) => "Lines of Code",
        (MetricLabel::LinesOfCode, Locale::Zh) => "代码行数",
        (MetricLabel::CyclomaticComplexity, Locale::En) => "Cyclomatic Complexity",
        (MetricLabel::CyclomaticComplexity, Locale::Zh) => "圈复杂度",
        (MetricLabel::ComplexityRating, Locale::En) => "Complexity Rating",
        (MetricLabel::ComplexityRating, Locale::Zh) => "复杂度评估",
        (MetricLabel::ArrayOperations, Locale::En) => "Array Operations",
        (MetricLabel::ArrayOperations, Locale::Zh) => "数组操作",
    }
}

pub fn metric_value(value: MetricValue, locale: Locale) -> String {
    let text = match (value, locale) {
        (MetricValue::Count(count), _) => return count.to_string(),
        (MetricValue::Good, Locale::En) => "Good",
        (MetricValue::Good, Locale::Zh) => "良好",
        (MetricValue::Detected, Locale::En) => "Detected",
        (MetricValue::Detected, Locale::Zh) => "检测到",
        (MetricValue::High, Locale::En) => "High",
        (MetricValue::High, Locale::Zh) => "高",
        (MetricValue::Moderate, Locale::En) => "Moderate",
        (MetricValue::Moderate, Locale::Zh) => "中等",
        (MetricValue::Low, Locale::En) => "Low",
        (MetricValue::Low, Locale::Zh) => "低",
    };
    text.to_string()
}

pub fn metric_warning(warning: MetricWarning, locale: Locale) -> &'static str {
    match (warning, locale) {
        (MetricWarning::QuadraticComplexity, Locale::En) => "Possible O(n²) or higher complexity",
        (MetricWarning::QuadraticComplexity, Locale::Zh) => "可能存在 O(n²) 或更高复杂度",
        (MetricWarning::StackOverflowRisk, Locale::En) => {
            "Watch for stack overflow and performance"
        }
        (MetricWarning::StackOverflowRisk, Locale::Zh) => "注意栈溢出风险和性能影响",
        (MetricWarning::RefactorComplexity, Locale::En) => {
            "Consider refactoring to reduce complexity"
        }
        (MetricWarning::RefactorComplexity, Locale::Zh) => "建议重构以降低复杂度",
        (MetricWarning::RepeatedAppendInLoop, Locale::En) => {
            "Multiple pushes in loop may affect performance"
        }
        (MetricWarning::RepeatedAppendInLoop, Locale::Zh) => "循环中多次push可能影响性能",
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn comment_ratio_renders_as_percentage() {
        let rendered = message(&Message::CommentRatioExcellent { ratio: 0.25 }, Locale::En);
        assert_eq!(rendered, "Comment ratio: 25.0% - Excellent");
        let rendered = message(&Message::CommentRatioGood { ratio: 0.1 }, Locale::Zh);
        assert_eq!(rendered, "注释率: 10.0% - 良好");
    }

    #[test]
    fn locale_parse_accepts_region_suffix() {
        assert_eq!(Locale::parse("zh_CN"), Some(Locale::Zh));
        assert_eq!(Locale::parse("EN"), Some(Locale::En));
        assert_eq!(Locale::parse("fr"), None);
    }

    #[test]
    fn counts_render_without_translation() {
        assert_eq!(metric_value(MetricValue::Count(12), Locale::Zh), "12");
        assert_eq!(metric_value(MetricValue::Moderate, Locale::Zh), "中等");
    }
}
