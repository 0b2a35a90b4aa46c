// File-level tests for the batch driver

use prefixer::batch::{run_batch, BatchConfig, BatchError};
use prefixer::parser::ErrorKind;
use std::fs;

#[test]
fn test_demo_file() {
    prefixer::logging::init_test_logging();

    let dir = tempfile::tempdir().expect("Failed to create temp dir");
    let output = dir.path().join("out.txt");

    let report = run_batch(
        "demos/expressions.txt".as_ref(),
        &output,
        &BatchConfig::default(),
    )
    .expect("Batch run failed");

    let written = fs::read_to_string(&output).expect("Failed to read output");
    let lines: Vec<&str> = written.lines().collect();
    assert_eq!(
        lines,
        vec![
            "a",
            "1291",
            "-x*2y",
            "-+a35b",
            "--b*7/190/89991",
            "-----bbbbbb",
            "-000a",
            "-z/a9",
            "incorrect syntax",
            "incorrect syntax",
            "incorrect syntax",
            "incorrect syntax",
            "incorrect syntax",
        ]
    );

    assert_eq!(report.lines, 13);
    assert_eq!(report.accepted, 8);
    assert_eq!(report.failures_of(ErrorKind::Syntax), 4);
    assert_eq!(report.failures_of(ErrorKind::Input), 1);
}

#[test]
fn test_output_is_overwritten() {
    let dir = tempfile::tempdir().expect("Failed to create temp dir");
    let input = dir.path().join("in.txt");
    let output = dir.path().join("out.txt");
    fs::write(&input, "a/zz\nq\n").unwrap();
    fs::write(&output, "stale\nstale\nstale\n").unwrap();

    let config = BatchConfig {
        placeholder: "?".to_string(),
    };
    run_batch(&input, &output, &config).expect("Batch run failed");

    assert_eq!(fs::read_to_string(&output).unwrap(), "?\nq\n");
}

#[test]
fn test_missing_input_file() {
    let dir = tempfile::tempdir().expect("Failed to create temp dir");
    let missing = dir.path().join("missing.txt");

    let err = run_batch(&missing, &dir.path().join("out.txt"), &BatchConfig::default())
        .unwrap_err();
    match err {
        BatchError::Io { path, .. } => assert_eq!(path, missing),
        other => panic!("expected an I/O error, got {:?}", other),
    }
}

#[test]
fn test_overlong_line_fails_alone() {
    let dir = tempfile::tempdir().expect("Failed to create temp dir");
    let input = dir.path().join("in.txt");
    let output = dir.path().join("out.txt");
    let long = "a-".repeat(50_000) + "a-b";
    fs::write(&input, format!("x-2*y\n{}\na + 35 - b\n", long)).unwrap();

    let report = run_batch(&input, &output, &BatchConfig::default()).expect("Batch run failed");

    assert_eq!(
        fs::read_to_string(&output).unwrap(),
        "-x*2y\nincorrect syntax\n-+a35b\n"
    );
    assert_eq!(report.accepted, 2);
    assert_eq!(report.failures_of(ErrorKind::Syntax), 1);
}
