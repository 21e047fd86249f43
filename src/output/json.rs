use serde::Serialize;

use crate::checker::{FileReport, FindingKind, Summary};
use crate::error::Result;

use super::OutputFormatter;

pub struct JsonFormatter;

#[derive(Serialize)]
struct JsonOutput {
    summary: JsonSummary,
    findings: Vec<JsonFinding>,
}

#[derive(Serialize)]
struct JsonSummary {
    files: usize,
    declarations: usize,
    findings: usize,
    mismatch: usize,
    empty: usize,
    missing: usize,
}

#[derive(Serialize)]
struct JsonFinding {
    path: String,
    line: usize,
    column: usize,
    kind: FindingKind,
    message: String,
}

impl From<Summary> for JsonSummary {
    fn from(summary: Summary) -> Self {
        Self {
            files: summary.files,
            declarations: summary.declarations,
            findings: summary.findings,
            mismatch: summary.mismatch,
            empty: summary.empty,
            missing: summary.missing,
        }
    }
}

impl OutputFormatter for JsonFormatter {
    fn format(&self, reports: &[FileReport]) -> Result<String> {
        let findings = reports
            .iter()
            .flat_map(|report| {
                let path = report.path().display().to_string();
                report.findings.iter().map(move |f| JsonFinding {
                    path: path.clone(),
                    line: f.position.line,
                    column: f.position.column,
                    kind: f.kind,
                    message: f.message.clone(),
                })
            })
            .collect();

        let output = JsonOutput {
            summary: Summary::from_reports(reports).into(),
            findings,
        };

        Ok(serde_json::to_string_pretty(&output)?)
    }
}

#[cfg(test)]
#[path = "json_tests.rs"]
mod tests;
