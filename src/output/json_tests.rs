use std::path::PathBuf;

use super::*;
use crate::checker::Finding;
use crate::declaration::Position;

fn reports() -> Vec<FileReport> {
    vec![
        FileReport::new(
            PathBuf::from("a.go"),
            2,
            vec![Finding::empty_comment(Position::new(3, 1), "Thing")],
        ),
        FileReport::new(PathBuf::from("b.go"), 1, Vec::new()),
    ]
}

#[test]
fn json_output_has_summary_and_findings() {
    let output = JsonFormatter.format(&reports()).unwrap();
    let parsed: serde_json::Value = serde_json::from_str(&output).unwrap();

    assert_eq!(parsed["summary"]["files"], 2);
    assert_eq!(parsed["summary"]["declarations"], 3);
    assert_eq!(parsed["summary"]["findings"], 1);
    assert_eq!(parsed["summary"]["empty"], 1);
    assert_eq!(parsed["summary"]["missing"], 0);
}

#[test]
fn json_findings_carry_location_and_kind() {
    let output = JsonFormatter.format(&reports()).unwrap();
    let parsed: serde_json::Value = serde_json::from_str(&output).unwrap();

    let findings = parsed["findings"].as_array().unwrap();
    assert_eq!(findings.len(), 1);
    assert_eq!(findings[0]["path"], "a.go");
    assert_eq!(findings[0]["line"], 3);
    assert_eq!(findings[0]["column"], 1);
    assert_eq!(findings[0]["kind"], "empty-comment");
    assert_eq!(findings[0]["message"], "empty comment on 'Thing'");
}

#[test]
fn json_output_for_no_files() {
    let output = JsonFormatter.format(&[]).unwrap();
    let parsed: serde_json::Value = serde_json::from_str(&output).unwrap();

    assert_eq!(parsed["summary"]["files"], 0);
    assert!(parsed["findings"].as_array().unwrap().is_empty());
}
