use super::messages::{self, Locale};
use crate::types::finding::FindingKind;
use crate::types::report::{AnalysisResult, Dimension};
use serde_json::{json, Value};

/// Emits one SARIF result per warning or failure. Passing findings are omitted.
pub fn to_sarif(
    results: &[(Option<&str>, &AnalysisResult)],
    locale: Locale,
) -> Result<String, serde_json::Error> {
    let mut entries = Vec::new();
    for (path, result) in results {
        for (dimension, finding) in result.findings() {
            if finding.kind == FindingKind::Pass {
                continue;
            }
            entries.push(entry(
                format!("{}.{}", dimension.as_str(), finding.message.key()),
                finding.kind,
                messages::message(&finding.message, locale),
                *path,
            ));
        }
        for metric in &result.performance.findings {
            if let Some(warning) = metric.warning {
                let rule_id = serde_json::to_value(metric.label)?
                    .as_str()
                    .map(str::to_string)
                    .unwrap_or_default();
                entries.push(entry(
                    format!("{}.{}", Dimension::Performance.as_str(), rule_id),
                    metric.kind(),
                    messages::metric_warning(warning, locale).to_string(),
                    *path,
                ));
            }
        }
    }

    let sarif = json!({
        "version": "2.1.0",
        "runs": [{
            "tool": {
                "driver": {
                    "name": "codescore"
                }
            },
            "results": entries
        }]
    });

    serde_json::to_string_pretty(&sarif)
}

fn entry(rule_id: String, kind: FindingKind, text: String, path: Option<&str>) -> Value {
    let mut value = json!({
        "ruleId": rule_id,
        "level": if kind == FindingKind::Fail { "error" } else { "warning" },
        "message": { "text": text },
    });
    if let Some(path) = path {
        value["locations"] = json!([{
            "physicalLocation": { "artifactLocation": { "uri": path } }
        }]);
    }
    value
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::analyze::analyze;

    #[test]
    fn sarif_reports_failures_as_errors_and_skips_passes() {
        let result = analyze("func add(a int, b int) int {\n\treturn a + b\n}", "go");
        let rendered =
            to_sarif(&[(Some("add.go"), &result)], Locale::En).expect("sarif should serialize");
        assert!(rendered.contains("\"version\": \"2.1.0\""));
        assert!(rendered.contains("\"ruleId\": \"robustness.missing_error_handling\""));
        assert!(rendered.contains("\"level\": \"error\""));
        assert!(rendered.contains("\"uri\": \"add.go\""));
        assert!(!rendered.contains("has_definitions"));
    }

    #[test]
    fn sarif_includes_performance_warnings() {
        let result = analyze("for (i) {\n  for (j) {\n    a(i, j);\n  }\n}", "javascript");
        let rendered = to_sarif(&[(None, &result)], Locale::En).expect("sarif should serialize");
        assert!(rendered.contains("\"ruleId\": \"performance.nested_loops\""));
    }
}
