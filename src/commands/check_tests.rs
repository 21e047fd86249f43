use std::path::PathBuf;

use tempfile::TempDir;

use super::*;
use crate::checker::FindingKind;
use crate::cli::{PolicyArgs, ReportArgs};
use crate::commands::test_cli;
use crate::output::OutputFormat;
use crate::{EXIT_FINDINGS, EXIT_SUCCESS};

const DOCUMENTED: &str = "package demo

// Open opens the store.
func Open() error { return nil }

// A Store holds values.
type Store struct{}
";

const UNDOCUMENTED: &str = "package demo

// Returns the answer.
func Answer() int { return 42 }

func Serve() {}
";

fn write(dir: &TempDir, name: &str, content: &str) -> PathBuf {
    let path = dir.path().join(name);
    std::fs::write(&path, content).unwrap();
    path
}

fn check_args(paths: Vec<PathBuf>) -> CheckArgs {
    CheckArgs {
        paths,
        config: None,
        exclude: Vec::new(),
        report: ReportArgs {
            format: OutputFormat::Json,
            output: None,
            warn_only: false,
        },
        policy: PolicyArgs::default(),
    }
}

#[test]
fn check_files_sorted_by_path() {
    let dir = TempDir::new().unwrap();
    let b = write(&dir, "b.go", UNDOCUMENTED);
    let a = write(&dir, "a.go", DOCUMENTED);
    let checker = CommentChecker::default();

    let reports = check_files(&[b.clone(), a.clone()], &GoExtractor::new(), &checker, true);

    assert_eq!(reports.len(), 2);
    assert_eq!(reports[0].path, a);
    assert_eq!(reports[1].path, b);
    assert!(reports[0].is_clean());
    assert_eq!(reports[1].count(FindingKind::Mismatch), 1);
    assert_eq!(reports[1].count(FindingKind::MissingComment), 0);
}

#[test]
fn check_files_skips_unreadable() {
    let dir = TempDir::new().unwrap();
    let a = write(&dir, "a.go", DOCUMENTED);
    let missing = dir.path().join("missing.go");

    let reports = check_files(
        &[a, missing],
        &GoExtractor::new(),
        &CommentChecker::default(),
        true,
    );

    assert_eq!(reports.len(), 1);
}

#[test]
fn check_files_is_idempotent() {
    let dir = TempDir::new().unwrap();
    let files = vec![
        write(&dir, "a.go", DOCUMENTED),
        write(&dir, "b.go", UNDOCUMENTED),
    ];
    let checker = CommentChecker::new(Policy::new().with_comment_all_exported_funcs(true));

    let first = check_files(&files, &GoExtractor::new(), &checker, true);
    let second = check_files(&files, &GoExtractor::new(), &checker, true);

    assert_eq!(first, second);
}

#[test]
fn apply_cli_overrides_adds_excludes_and_policy() {
    let mut config = Config::default();
    config.scanner.exclude.push("**/vendor/**".to_string());
    let mut args = check_args(vec![PathBuf::from(".")]);
    args.exclude = vec!["**/*.pb.go".to_string()];
    args.policy.comment_structs = true;

    apply_cli_overrides(&mut config, &args);

    assert_eq!(config.scanner.exclude, vec!["**/vendor/**", "**/*.pb.go"]);
    assert!(config.policy.comment_structs);
}

#[test]
fn run_check_exit_codes() {
    let dir = TempDir::new().unwrap();
    let clean = write(&dir, "clean.go", DOCUMENTED);
    let dirty = write(&dir, "dirty.go", UNDOCUMENTED);
    let cli = test_cli();

    let code = run_check_impl(&check_args(vec![clean]), &cli).unwrap();
    assert_eq!(code, EXIT_SUCCESS);

    let mut args = check_args(vec![dirty]);
    args.report.output = Some(dir.path().join("out.json"));
    assert_eq!(run_check_impl(&args, &cli).unwrap(), EXIT_FINDINGS);

    args.report.warn_only = true;
    assert_eq!(run_check_impl(&args, &cli).unwrap(), EXIT_SUCCESS);
}

#[test]
fn run_check_policy_flag_reports_missing() {
    let dir = TempDir::new().unwrap();
    let file = write(&dir, "api.go", UNDOCUMENTED);
    let out = dir.path().join("out.json");
    let mut args = check_args(vec![file]);
    args.report.output = Some(out.clone());
    args.policy.comment_all_exported = true;

    run_check_impl(&args, &test_cli()).unwrap();

    let json: serde_json::Value =
        serde_json::from_str(&std::fs::read_to_string(out).unwrap()).unwrap();
    assert_eq!(json["summary"]["mismatch"], 1);
    assert_eq!(json["summary"]["missing"], 1);
}

#[test]
fn run_check_missing_path_is_error() {
    let dir = TempDir::new().unwrap();
    let args = check_args(vec![dir.path().join("nope")]);

    assert!(run_check_impl(&args, &test_cli()).is_err());
    assert_eq!(run_check(&args, &test_cli()), crate::EXIT_CONFIG_ERROR);
}

#[test]
fn run_check_rejects_invalid_exclude() {
    let dir = TempDir::new().unwrap();
    let mut args = check_args(vec![dir.path().to_path_buf()]);
    args.exclude = vec!["[broken".to_string()];

    assert!(run_check_impl(&args, &test_cli()).is_err());
}
