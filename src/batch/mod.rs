//! Line-by-line batch driver
//!
//! Reads one expression per input line and writes one result per output
//! line, in the same order: the prefix form of the expression, or a fixed
//! placeholder when the line does not parse.

use crate::parser::{ErrorKind, Parser};
use rustc_hash::FxHashMap;
use std::fs::File;
use std::io::{self, BufRead, BufReader, BufWriter, Write};
use std::path::{Path, PathBuf};
use thiserror::Error;
use tracing::{debug, info};

/// Text written in place of a result for lines that fail to parse.
pub const DEFAULT_PLACEHOLDER: &str = "incorrect syntax";

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct BatchConfig {
    pub placeholder: String,
}

impl Default for BatchConfig {
    fn default() -> Self {
        BatchConfig {
            placeholder: DEFAULT_PLACEHOLDER.to_string(),
        }
    }
}

#[derive(Debug, Error)]
pub enum BatchError {
    #[error("cannot open {}: {source}", .path.display())]
    Io { path: PathBuf, source: io::Error },

    #[error("failed to read input: {0}")]
    Read(#[source] io::Error),

    #[error("failed to write output: {0}")]
    Write(#[source] io::Error),
}

/// Counts collected over one batch run.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct BatchReport {
    pub lines: usize,
    pub accepted: usize,
    pub failures: FxHashMap<ErrorKind, usize>,
}

impl BatchReport {
    pub fn rejected(&self) -> usize {
        self.failures.values().sum()
    }

    pub fn failures_of(&self, kind: ErrorKind) -> usize {
        self.failures.get(&kind).copied().unwrap_or(0)
    }

    fn record_failure(&mut self, kind: ErrorKind) {
        *self.failures.entry(kind).or_insert(0) += 1;
    }
}

/// Parse every line of `reader`, writing results to `writer`.
pub fn process_lines<R: BufRead, W: Write>(
    reader: R,
    mut writer: W,
    config: &BatchConfig,
) -> Result<BatchReport, BatchError> {
    let mut parser = Parser::new();
    let mut report = BatchReport::default();

    for (index, line) in reader.lines().enumerate() {
        let line = line.map_err(BatchError::Read)?;
        report.lines += 1;

        let result = match parser.parse(&line) {
            Ok(tree) => {
                report.accepted += 1;
                tree.print_tree()
            }
            Err(e) => {
                debug!(line = index + 1, error = %e, "line rejected");
                report.record_failure(e.kind());
                config.placeholder.clone()
            }
        };
        writeln!(writer, "{}", result).map_err(BatchError::Write)?;
    }

    writer.flush().map_err(BatchError::Write)?;
    Ok(report)
}

/// Run the batch driver from `input` to `output`, replacing `output`.
pub fn run_batch(
    input: &Path,
    output: &Path,
    config: &BatchConfig,
) -> Result<BatchReport, BatchError> {
    let reader = File::open(input).map_err(|source| BatchError::Io {
        path: input.to_path_buf(),
        source,
    })?;
    let writer = File::create(output).map_err(|source| BatchError::Io {
        path: output.to_path_buf(),
        source,
    })?;

    let report = process_lines(BufReader::new(reader), BufWriter::new(writer), config)?;
    info!(
        input = %input.display(),
        output = %output.display(),
        lines = report.lines,
        accepted = report.accepted,
        rejected = report.rejected(),
        "batch complete"
    );
    Ok(report)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn run(input: &str, config: &BatchConfig) -> (String, BatchReport) {
        let mut out = Vec::new();
        let report = process_lines(input.as_bytes(), &mut out, config).unwrap();
        (String::from_utf8(out).unwrap(), report)
    }

    #[test]
    fn test_results_keep_line_order() {
        let (out, report) = run("a\nx-2*y\n10+*5\n000-a\n", &BatchConfig::default());
        assert_eq!(out, "a\n-x*2y\nincorrect syntax\n-000a\n");
        assert_eq!(report.lines, 4);
        assert_eq!(report.accepted, 3);
        assert_eq!(report.rejected(), 1);
        assert_eq!(report.failures_of(ErrorKind::Syntax), 1);
    }

    #[test]
    fn test_failure_kinds_are_tallied() {
        let (_, report) = run("a%b\n--\n\n1.5\n", &BatchConfig::default());
        assert_eq!(report.accepted, 0);
        assert_eq!(report.failures_of(ErrorKind::Input), 2);
        assert_eq!(report.failures_of(ErrorKind::Syntax), 2);
    }

    #[test]
    fn test_custom_placeholder_and_crlf() {
        let config = BatchConfig {
            placeholder: "ERR".to_string(),
        };
        let (out, _) = run("a + 35 - b\r\naa+zz\r\n", &config);
        assert_eq!(out, "-+a35b\nERR\n");
    }

    #[test]
    fn test_empty_input() {
        let (out, report) = run("", &BatchConfig::default());
        assert!(out.is_empty());
        assert_eq!(report, BatchReport::default());
    }
}
