use std::path::{Path, PathBuf};

use super::*;
use tempfile::TempDir;

struct GoOnlyFilter;

impl FileFilter for GoOnlyFilter {
    fn should_include(&self, path: &Path) -> bool {
        path.extension().is_some_and(|ext| ext == "go")
    }
}

#[test]
fn scan_all_walks_directories_and_sorts() {
    let temp_dir = TempDir::new().unwrap();
    let pkg = temp_dir.path().join("pkg");
    std::fs::create_dir(&pkg).unwrap();
    std::fs::write(pkg.join("z.go"), "").unwrap();
    std::fs::write(pkg.join("a.go"), "").unwrap();
    std::fs::write(temp_dir.path().join("main.go"), "").unwrap();
    std::fs::write(temp_dir.path().join("README.md"), "").unwrap();

    let scanner = DirectoryScanner::new(GoOnlyFilter);
    let files = scanner.scan_all(&[temp_dir.path().to_path_buf()]).unwrap();

    let mut expected = vec![
        temp_dir.path().join("main.go"),
        pkg.join("a.go"),
        pkg.join("z.go"),
    ];
    expected.sort();
    assert_eq!(files, expected);
}

#[test]
fn scan_all_takes_explicit_files_unfiltered() {
    let temp_dir = TempDir::new().unwrap();
    let odd = temp_dir.path().join("snippet.txt");
    std::fs::write(&odd, "").unwrap();

    let scanner = DirectoryScanner::new(GoOnlyFilter);
    let files = scanner.scan_all(std::slice::from_ref(&odd)).unwrap();

    assert_eq!(files, vec![odd]);
}

#[test]
fn scan_all_removes_duplicates() {
    let temp_dir = TempDir::new().unwrap();
    let file = temp_dir.path().join("a.go");
    std::fs::write(&file, "").unwrap();

    let scanner = DirectoryScanner::new(GoOnlyFilter);
    let files = scanner
        .scan_all(&[temp_dir.path().to_path_buf(), file.clone()])
        .unwrap();

    assert_eq!(files, vec![file]);
}

#[test]
fn scan_all_missing_root_is_an_error() {
    let scanner = DirectoryScanner::new(GoOnlyFilter);
    let err = scanner
        .scan_all(&[PathBuf::from("/definitely/not/here")])
        .unwrap_err();

    assert!(matches!(err, CommentMimicError::FileRead { .. }));
}

#[test]
fn scanner_from_config_applies_excludes() {
    let temp_dir = TempDir::new().unwrap();
    let vendor = temp_dir.path().join("vendor");
    std::fs::create_dir(&vendor).unwrap();
    std::fs::write(vendor.join("dep.go"), "").unwrap();
    std::fs::write(temp_dir.path().join("main.go"), "").unwrap();

    let config = ScannerConfig {
        gitignore: false,
        extensions: vec!["go".to_string()],
        exclude: vec!["**/vendor/**".to_string()],
    };
    let scanner = scanner_from_config(&config).unwrap();
    let files = scanner.scan_all(&[temp_dir.path().to_path_buf()]).unwrap();

    assert_eq!(files, vec![temp_dir.path().join("main.go")]);
}
