//! Build pipeline: stage document units, then drive the typesetting tool.
//!
//! The two stages compose in order. The Stager populates the output tree and
//! the Runner processes exactly that tree, so units already present in the
//! output (for example from an earlier run) are compiled too.

mod runner;
mod stager;

pub use runner::{CompileOptions, compile_unit};
pub use stager::{DocUnit, discover_units, stage_units};

use std::fs;
use std::path::PathBuf;
use std::time::Duration;
use tracing::{error, warn};

use crate::config::Config;
use crate::error::{Error, Result};
use crate::subprocess;

/// Resolved options for one build run.
#[derive(Debug, Clone)]
pub struct BuildOptions {
    /// Root directory containing document-unit subfolders.
    pub source_dir: PathBuf,
    /// Destination of the staging tree.
    pub output_root: PathBuf,
    /// Typesetting command name or path.
    pub command: String,
    /// Document file extension, including the leading dot.
    pub extension: String,
    /// Per-unit timeout. `None` waits indefinitely.
    pub timeout: Option<Duration>,
    /// Process every unit and report all failures instead of aborting at the
    /// first failing unit.
    pub keep_going: bool,
}

impl From<&Config> for BuildOptions {
    fn from(config: &Config) -> Self {
        Self {
            source_dir: config.source_dir.clone(),
            output_root: config.output_root(),
            command: config.command.clone(),
            extension: config.extension.clone(),
            timeout: config.timeout_secs.map(Duration::from_secs),
            keep_going: config.keep_going,
        }
    }
}

/// Counters for a completed run.
#[derive(Debug, Default)]
pub struct BuildSummary {
    /// Units copied into the output tree.
    pub staged: usize,
    /// Units compiled successfully.
    pub compiled: usize,
    /// Units that failed (only non-zero in keep-going mode).
    pub failed: usize,
}

/// Execute a full build: ensure the output root, stage all document units,
/// then compile each staged unit in order.
pub fn run_build(options: &BuildOptions) -> Result<BuildSummary> {
    // The output root is ensured before the source check, so a run with
    // nothing to document still leaves a valid (empty) output tree behind.
    fs::create_dir_all(&options.output_root).map_err(|e| Error::OutputDirCreate {
        path: options.output_root.clone(),
        source: e,
    })?;

    if !options.source_dir.exists() {
        warn!(
            "No document sources found at {}, skipping",
            options.source_dir.display()
        );
        return Ok(BuildSummary::default());
    }

    let staged = stage_units(&options.source_dir, &options.output_root)?;

    let mut summary = BuildSummary {
        staged: staged.len(),
        ..BuildSummary::default()
    };

    let compile_options = CompileOptions {
        command: options.command.clone(),
        extension: options.extension.clone(),
        timeout: options.timeout,
    };

    let units = discover_units(&options.output_root)?;
    let total = units.len();

    for unit in &units {
        if subprocess::cancel_requested() {
            return Err(Error::Interrupted);
        }

        match compile_unit(unit, &compile_options) {
            Ok(()) => summary.compiled += 1,
            Err(Error::Interrupted) => return Err(Error::Interrupted),
            Err(e) => {
                summary.failed += 1;
                if options.keep_going {
                    error!("{e}");
                } else {
                    return Err(e);
                }
            }
        }
    }

    if summary.failed > 0 {
        return Err(Error::UnitsFailed {
            failed: summary.failed,
            total,
        });
    }

    Ok(summary)
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    #[cfg(unix)]
    fn build_options(source: &TempDir, output_root: PathBuf, command: &str) -> BuildOptions {
        BuildOptions {
            source_dir: source.path().to_path_buf(),
            output_root,
            command: command.to_string(),
            extension: ".tex".to_string(),
            timeout: None,
            keep_going: false,
        }
    }

    #[test]
    fn test_missing_source_root_is_skipped_but_output_created() {
        let scratch = TempDir::new().unwrap();
        let output_root = scratch.path().join("build/latex");

        let options = BuildOptions {
            source_dir: scratch.path().join("no-such-dir"),
            output_root: output_root.clone(),
            command: "xelatex".to_string(),
            extension: ".tex".to_string(),
            timeout: None,
            keep_going: false,
        };

        let summary = run_build(&options).unwrap();
        assert_eq!(summary.staged, 0);
        assert!(output_root.is_dir());
    }

    #[cfg(unix)]
    #[test]
    fn test_build_stages_and_compiles_all_units() {
        let source = TempDir::new().unwrap();
        let scratch = TempDir::new().unwrap();
        let output_root = scratch.path().join("latex");

        for name in ["alpha", "beta"] {
            let unit = source.path().join(name);
            std::fs::create_dir(&unit).unwrap();
            std::fs::write(unit.join(format!("{name}.tex")), b"doc").unwrap();
        }

        let options = build_options(&source, output_root.clone(), "true");
        let summary = run_build(&options).unwrap();

        assert_eq!(summary.staged, 2);
        assert_eq!(summary.compiled, 2);
        assert!(output_root.join("alpha/alpha.tex").is_file());
        assert!(output_root.join("beta/beta.tex").is_file());
    }

    #[cfg(unix)]
    #[test]
    fn test_fail_fast_stops_at_first_failure() {
        let source = TempDir::new().unwrap();
        let scratch = TempDir::new().unwrap();

        for name in ["alpha", "beta"] {
            let unit = source.path().join(name);
            std::fs::create_dir(&unit).unwrap();
            std::fs::write(unit.join(format!("{name}.tex")), b"doc").unwrap();
        }

        let options = build_options(&source, scratch.path().join("latex"), "false");
        let err = run_build(&options).unwrap_err();
        assert!(matches!(err, Error::ProcessFailed { ref unit, .. } if unit == "alpha"));
    }

    #[cfg(unix)]
    #[test]
    fn test_keep_going_reports_aggregate_failure() {
        let source = TempDir::new().unwrap();
        let scratch = TempDir::new().unwrap();

        for name in ["alpha", "beta"] {
            let unit = source.path().join(name);
            std::fs::create_dir(&unit).unwrap();
            std::fs::write(unit.join(format!("{name}.tex")), b"doc").unwrap();
        }

        let mut options = build_options(&source, scratch.path().join("latex"), "false");
        options.keep_going = true;

        let err = run_build(&options).unwrap_err();
        match err {
            Error::UnitsFailed { failed, total } => {
                assert_eq!(failed, 2);
                assert_eq!(total, 2);
            }
            other => panic!("unexpected error: {other}"),
        }
    }
}
