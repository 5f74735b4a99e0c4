//! # forcecheck-core
//!
//! Verifies that two independently produced particle-force result files
//! agree within a numerical tolerance, answering:
//! - Do both runs cover exactly the same entities?
//! - Where do the computed forces disagree, and by how much is allowed?
//!
//! ## Key Guarantees
//!
//! 1. **Deterministic**: discrepancies are reported in ascending identifier
//!    order, so the same inputs always produce the same report
//! 2. **All-or-nothing parsing**: a malformed data line fails the whole file;
//!    no partial result set is ever compared
//! 3. **Coverage first**: mismatched identifier sets short-circuit the run
//!    before any numeric comparison
//!
//! ## Example
//!
//! ```rust,ignore
//! use forcecheck_core::{verify_files, VerifyConfig};
//!
//! let config = VerifyConfig::default();
//! let report = verify_files("serial.txt", "parallel.txt", &config)?;
//! println!("{}", report);
//! ```

pub mod compare;
pub mod config;
pub mod parser;
pub mod report;

// Re-export main types at crate root
pub use compare::{compare, Discrepancy, Verdict, DEFAULT_THRESHOLD};
pub use config::{ConfigError, VerifyConfig};
pub use parser::{ParseError, ResultSet};
pub use report::ComparisonReport;

use std::path::{Path, PathBuf};
use thiserror::Error;

/// Errors that can occur during a verification run.
#[derive(Error, Debug)]
pub enum VerifyError {
    #[error("Failed to parse {path}: {source}")]
    Parse {
        path: PathBuf,
        #[source]
        source: ParseError,
    },
}

/// Verify two result files against each other.
///
/// This is the main entry point: both files are parsed in full (first, then
/// second), their identifier coverage is checked, and every shared identifier
/// is compared under `config.threshold`.
///
/// # Errors
///
/// Returns [`VerifyError::Parse`] naming the offending file when either read
/// or parse fails; no comparison is attempted in that case.
pub fn verify_files(
    first: impl AsRef<Path>,
    second: impl AsRef<Path>,
    config: &VerifyConfig,
) -> Result<ComparisonReport, VerifyError> {
    let set1 = parse_one(first.as_ref())?;
    let set2 = parse_one(second.as_ref())?;

    tracing::info!(
        first_entries = set1.len(),
        second_entries = set2.len(),
        threshold = config.threshold,
        "comparing result sets"
    );
    let verdict = compare(&set1, &set2, config.threshold);
    Ok(ComparisonReport::new(verdict, config.threshold))
}

fn parse_one(path: &Path) -> Result<ResultSet, VerifyError> {
    ResultSet::from_file(path).map_err(|source| VerifyError::Parse {
        path: path.to_path_buf(),
        source,
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::fs;
    use std::path::PathBuf;

    /// Writes `contents` to a uniquely named file in the system temp dir and
    /// removes it on drop.
    struct TempResultFile {
        path: PathBuf,
    }

    impl TempResultFile {
        fn new(name: &str, contents: &str) -> Self {
            let path =
                std::env::temp_dir().join(format!("forcecheck-{}-{}", std::process::id(), name));
            fs::write(&path, contents).unwrap();
            Self { path }
        }
    }

    impl Drop for TempResultFile {
        fn drop(&mut self) {
            let _ = fs::remove_file(&self.path);
        }
    }

    #[test]
    fn test_identical_files_all_correct() {
        let text = "ID: 1, Force = 2.0\nID: 2, Force = 3.0\nID: 3, Force = 4.0\n";
        let a = TempResultFile::new("same-a.txt", text);
        let b = TempResultFile::new("same-b.txt", text);

        let report = verify_files(&a.path, &b.path, &VerifyConfig::default()).unwrap();
        assert!(report.is_all_correct());
        assert_eq!(report.to_string(), "all correct!");
    }

    #[test]
    fn test_discrepancy_end_to_end() {
        let a = TempResultFile::new("disc-a.txt", "ID: 1, Force = 1.000000000\n");
        let b = TempResultFile::new("disc-b.txt", "ID: 1, Force = 1.000000001\n");

        let report = verify_files(&a.path, &b.path, &VerifyConfig::default()).unwrap();
        assert_eq!(
            report.to_string(),
            "ID: 1 has different forces. File1: 1.0, File2: 1.000000001"
        );
    }

    #[test]
    fn test_different_ids_end_to_end() {
        let a = TempResultFile::new("cov-a.txt", "ID: 1, Force = 2.0\nID: 2, Force = 3.0\n");
        let b = TempResultFile::new("cov-b.txt", "ID: 1, Force = 2.0\nID: 3, Force = 3.0\n");

        let report = verify_files(&a.path, &b.path, &VerifyConfig::default()).unwrap();
        assert_eq!(report.to_string(), "The files have different IDs!");
    }

    #[test]
    fn test_headers_and_blank_lines_ignored() {
        let a = TempResultFile::new(
            "noise-a.txt",
            "force output\n\nID: 1, Force = 2.0\n\nID: 2, Force = 3.0\n",
        );
        let b = TempResultFile::new("noise-b.txt", "ID: 1, Force = 2.0\nID: 2, Force = 3.0\n");

        let report = verify_files(&a.path, &b.path, &VerifyConfig::default()).unwrap();
        assert!(report.is_all_correct());
    }

    #[test]
    fn test_missing_file_names_the_path() {
        let b = TempResultFile::new("lonely.txt", "ID: 1, Force = 2.0\n");
        let missing = std::env::temp_dir().join("forcecheck-does-not-exist.txt");

        let err = verify_files(&missing, &b.path, &VerifyConfig::default()).unwrap_err();
        let VerifyError::Parse { path, source } = err;
        assert_eq!(path, missing);
        assert!(matches!(source, ParseError::Io(_)));
    }

    #[test]
    fn test_parse_failure_aborts_before_comparison() {
        let a = TempResultFile::new("bad-a.txt", "ID: 1, Force = 2.0\nID: oops, Force = 3.0\n");
        let b = TempResultFile::new("bad-b.txt", "ID: 1, Force = 2.0\n");

        let err = verify_files(&a.path, &b.path, &VerifyConfig::default()).unwrap_err();
        let VerifyError::Parse { source, .. } = err;
        assert!(matches!(source, ParseError::InvalidId { .. }));
    }

    #[test]
    fn test_custom_threshold_widens_agreement() {
        let a = TempResultFile::new("tol-a.txt", "ID: 1, Force = 1.0\n");
        let b = TempResultFile::new("tol-b.txt", "ID: 1, Force = 1.5\n");

        let loose = VerifyConfig { threshold: 1.0 };
        assert!(verify_files(&a.path, &b.path, &loose).unwrap().is_all_correct());

        let strict = VerifyConfig::default();
        assert!(!verify_files(&a.path, &b.path, &strict).unwrap().is_all_correct());
    }
}
