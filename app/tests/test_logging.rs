//! FILENAME: tests/test_logging.rs
//! Integration tests for the unified log file.

mod common;

use app_lib::logging::{close_log_file, get_log_path, init_log_file};
use app_lib::{download_excel, ReportConfig};
use common::{sample_inputs, TestHarness};

#[test]
fn test_commands_write_unified_log_lines() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("logs").join("report.log");

    let opened = init_log_file(&path).unwrap();
    assert_eq!(get_log_path(), Some(opened.clone()));

    let harness = TestHarness::new();
    harness.calculate(sample_inputs()).unwrap();
    let bad_sheet = ReportConfig::from_json(r#"{"sheet_name": "Term/Results"}"#).unwrap();
    assert!(download_excel(&harness.state, &bad_sheet).is_err());
    close_log_file();
    assert_eq!(get_log_path(), None);

    let text = std::fs::read_to_string(&opened).unwrap();
    let lines: Vec<&str> = text.lines().collect();
    assert!(lines.iter().any(|l| l.contains("|I|commands|ENTER calculate")));
    assert!(lines.iter().any(|l| l.contains("|I|commands|EXIT calculate")));
    // Export failures are logged as errors
    assert!(lines.iter().any(|l| l.contains("|E|commands|xlsx export failed")));

    for line in &lines {
        let fields: Vec<&str> = line.splitn(4, '|').collect();
        assert_eq!(fields.len(), 4);
        assert!(fields[0].parse::<u64>().is_ok());
    }
}
