use super::messages::{self, Locale};
use crate::scan::ScanReport;
use crate::types::finding::{Finding, Metric};
use crate::types::report::{AnalysisResult, Dimension, DimensionResult};

pub fn to_markdown(result: &AnalysisResult, locale: Locale) -> String {
    let mut output = String::new();
    output.push_str("# Code Quality Report\n\n");
    output.push_str(&format!("Language: {}\n\n", result.language));
    output.push_str(&format!(
        "{}: {}\n\n",
        messages::overall_label(locale),
        result.overall
    ));

    output.push_str("## Scores\n\n");
    for dimension in Dimension::ALL {
        output.push_str(&format!(
            "- {}: {}\n",
            messages::dimension_name(dimension, locale),
            result.score(dimension)
        ));
    }
    output.push('\n');

    push_findings(&mut output, Dimension::Correctness, &result.correctness, locale);
    push_metrics(&mut output, &result.performance, locale);
    push_findings(
        &mut output,
        Dimension::Maintainability,
        &result.maintainability,
        locale,
    );
    push_findings(&mut output, Dimension::Robustness, &result.robustness, locale);
    output
}

fn push_findings(
    output: &mut String,
    dimension: Dimension,
    result: &DimensionResult<Finding>,
    locale: Locale,
) {
    output.push_str(&format!(
        "## {}\n\n",
        messages::details_heading(dimension, locale)
    ));
    for finding in &result.findings {
        output.push_str(&format!(
            "- {} {}\n",
            messages::glyph(finding.kind),
            messages::message(&finding.message, locale)
        ));
    }
    output.push('\n');
}

fn push_metrics(output: &mut String, result: &DimensionResult<Metric>, locale: Locale) {
    output.push_str(&format!(
        "## {}\n\n",
        messages::details_heading(Dimension::Performance, locale)
    ));
    for metric in &result.findings {
        output.push_str(&format!(
            "- {}: {}\n",
            messages::metric_label(metric.label, locale),
            messages::metric_value(metric.value, locale)
        ));
        if let Some(warning) = metric.warning {
            output.push_str(&format!(
                "  - ⚠ {}\n",
                messages::metric_warning(warning, locale)
            ));
        }
    }
    output.push('\n');
}

pub fn scan_to_markdown(report: &ScanReport, locale: Locale) -> String {
    let mut output = String::new();
    output.push_str("# Code Quality Scan\n\n");
    output.push_str(&format!("Root: {}\n\n", report.root));
    match report.overall {
        Some(overall) => output.push_str(&format!(
            "{}: {}\n\n",
            messages::overall_label(locale),
            overall
        )),
        None => output.push_str("- no supported source files\n"),
    }

    if !report.files.is_empty() {
        output.push_str("| File | Language | Overall | ");
        let headers = Dimension::ALL
            .iter()
            .map(|&dimension| messages::dimension_name(dimension, locale))
            .collect::<Vec<_>>();
        output.push_str(&headers.join(" | "));
        output.push_str(" |\n|---|---|---|---|---|---|---|\n");
        for file in &report.files {
            let scores = Dimension::ALL
                .iter()
                .map(|&dimension| file.result.score(dimension).to_string())
                .collect::<Vec<_>>();
            output.push_str(&format!(
                "| {} | {} | {} | {} |\n",
                file.path,
                file.result.language,
                file.result.overall,
                scores.join(" | ")
            ));
        }
    }
    output
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::analyze::analyze;

    #[test]
    fn markdown_report_lists_findings_in_rule_order() {
        let result = analyze(
            "function add(a,b){ if(a>=0){ return a+b; } return 0; }",
            "javascript",
        );
        let rendered = to_markdown(&result, Locale::En);
        assert!(rendered.contains("# Code Quality Report"));
        assert!(rendered.contains("## Functionality Details"));
        assert!(rendered.contains("## Performance Details"));
        let definitions = rendered
            .find("✓ Code contains function or class definitions")
            .expect("definition finding should render");
        let returns = rendered
            .find("✓ Contains return statements")
            .expect("return finding should render");
        assert!(definitions < returns);
    }

    #[test]
    fn markdown_report_renders_metric_warnings_and_locale() {
        let result = analyze("for (i) {\n  for (j) {\n    a(i, j);\n  }\n}", "javascript");
        let rendered = to_markdown(&result, Locale::Zh);
        assert!(rendered.contains("综合评分"));
        assert!(rendered.contains("- 嵌套循环: 1"));
        assert!(rendered.contains("  - ⚠ 可能存在 O(n²) 或更高复杂度"));
    }
}
