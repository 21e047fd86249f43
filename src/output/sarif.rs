use serde::Serialize;

use crate::checker::{FileReport, Finding, FindingKind};
use crate::error::Result;

use super::OutputFormatter;

/// SARIF 2.1.0 output formatter for GitHub Code Scanning and other CI/CD tools.
#[derive(Debug, Default)]
pub struct SarifFormatter;

impl SarifFormatter {
    #[must_use]
    pub const fn new() -> Self {
        Self
    }
}

const SARIF_SCHEMA: &str = "https://raw.githubusercontent.com/oasis-tcs/sarif-spec/master/Schemata/sarif-schema-2.1.0.json";
const SARIF_VERSION: &str = "2.1.0";
const TOOL_NAME: &str = "comment-mimic";
const TOOL_VERSION: &str = env!("CARGO_PKG_VERSION");

const RULE_PREFIX: &str = "comment-mimic";

#[derive(Serialize)]
struct SarifLog {
    #[serde(rename = "$schema")]
    schema: &'static str,
    version: &'static str,
    runs: Vec<Run>,
}

#[derive(Serialize)]
struct Run {
    tool: Tool,
    results: Vec<SarifResult>,
}

#[derive(Serialize)]
struct Tool {
    driver: ToolDriver,
}

#[derive(Serialize)]
struct ToolDriver {
    name: &'static str,
    version: &'static str,
    rules: Vec<ReportingDescriptor>,
}

#[derive(Serialize)]
struct ReportingDescriptor {
    id: String,
    name: &'static str,
    #[serde(rename = "shortDescription")]
    short_description: MultiformatMessageString,
    #[serde(rename = "fullDescription")]
    full_description: MultiformatMessageString,
    #[serde(rename = "defaultConfiguration")]
    default_configuration: ReportingConfiguration,
}

#[derive(Serialize)]
struct ReportingConfiguration {
    level: &'static str,
}

#[derive(Serialize)]
struct MultiformatMessageString {
    text: &'static str,
}

#[derive(Serialize)]
struct SarifResult {
    #[serde(rename = "ruleId")]
    rule_id: String,
    #[serde(rename = "ruleIndex")]
    rule_index: usize,
    level: &'static str,
    message: Message,
    locations: Vec<Location>,
}

#[derive(Serialize)]
struct Message {
    text: String,
}

#[derive(Serialize)]
struct Location {
    #[serde(rename = "physicalLocation")]
    physical_location: PhysicalLocation,
}

#[derive(Serialize)]
struct PhysicalLocation {
    #[serde(rename = "artifactLocation")]
    artifact_location: ArtifactLocation,
    region: Region,
}

#[derive(Serialize)]
struct ArtifactLocation {
    uri: String,
    #[serde(rename = "uriBaseId")]
    uri_base_id: &'static str,
}

#[derive(Serialize)]
struct Region {
    #[serde(rename = "startLine")]
    start_line: usize,
    #[serde(rename = "startColumn")]
    start_column: usize,
}

fn rule_id(kind: FindingKind) -> String {
    format!("{RULE_PREFIX}/{}", kind.as_str())
}

/// Position of `kind` in the rules array, which follows `FindingKind::ALL`.
fn rule_index(kind: FindingKind) -> usize {
    FindingKind::ALL
        .iter()
        .position(|k| *k == kind)
        .unwrap_or_default()
}

const fn level(kind: FindingKind) -> &'static str {
    match kind {
        FindingKind::MissingComment => "error",
        FindingKind::Mismatch | FindingKind::EmptyComment => "warning",
    }
}

/// Rule name, short description and full description.
const fn describe(kind: FindingKind) -> (&'static str, &'static str, &'static str) {
    match kind {
        FindingKind::Mismatch => (
            "CommentMismatch",
            "Doc comment does not start with the element's name",
            "The first word of a doc comment must be the name of the documented element. Structs may put 'A' or 'An' before the name.",
        ),
        FindingKind::EmptyComment => (
            "EmptyComment",
            "Doc comment has no text",
            "A comment is attached to the element but contains no prose.",
        ),
        FindingKind::MissingComment => (
            "MissingComment",
            "Exported element has no doc comment",
            "The configured policy requires this exported element to be documented. Comments made only of directives do not count.",
        ),
    }
}

impl SarifFormatter {
    fn build_rules() -> Vec<ReportingDescriptor> {
        FindingKind::ALL
            .into_iter()
            .map(|kind| {
                let (name, short, full) = describe(kind);
                ReportingDescriptor {
                    id: rule_id(kind),
                    name,
                    short_description: MultiformatMessageString { text: short },
                    full_description: MultiformatMessageString { text: full },
                    default_configuration: ReportingConfiguration { level: level(kind) },
                }
            })
            .collect()
    }

    fn convert_finding(report: &FileReport, finding: &Finding) -> SarifResult {
        let kind = finding.kind;

        // Convert path to URI format (forward slashes)
        let uri = report.path().display().to_string().replace('\\', "/");

        SarifResult {
            rule_id: rule_id(kind),
            rule_index: rule_index(kind),
            level: level(kind),
            message: Message {
                text: finding.message.clone(),
            },
            locations: vec![Location {
                physical_location: PhysicalLocation {
                    artifact_location: ArtifactLocation {
                        uri,
                        uri_base_id: "%SRCROOT%",
                    },
                    region: Region {
                        start_line: finding.position.line,
                        start_column: finding.position.column,
                    },
                },
            }],
        }
    }
}

impl OutputFormatter for SarifFormatter {
    fn format(&self, reports: &[FileReport]) -> Result<String> {
        let results: Vec<SarifResult> = reports
            .iter()
            .flat_map(|r| r.findings.iter().map(move |f| Self::convert_finding(r, f)))
            .collect();

        let log = SarifLog {
            schema: SARIF_SCHEMA,
            version: SARIF_VERSION,
            runs: vec![Run {
                tool: Tool {
                    driver: ToolDriver {
                        name: TOOL_NAME,
                        version: TOOL_VERSION,
                        rules: Self::build_rules(),
                    },
                },
                results,
            }],
        };

        Ok(serde_json::to_string_pretty(&log)?)
    }
}

#[cfg(test)]
#[path = "sarif_tests.rs"]
mod tests;
