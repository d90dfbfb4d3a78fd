//! Compilation of staged document units.

use std::time::Duration;
use tracing::info;

use crate::constants::NONSTOP_FLAG;
use crate::error::{Error, Result};
use crate::pipeline::stager::DocUnit;
use crate::subprocess::{self, WaitOutcome};

/// Settings for compiling a single unit.
#[derive(Debug, Clone)]
pub struct CompileOptions {
    /// Typesetting command name or path.
    pub command: String,
    /// Document file extension, including the leading dot.
    pub extension: String,
    /// Per-unit timeout. `None` waits indefinitely.
    pub timeout: Option<Duration>,
}

/// Compile one staged unit by invoking the typesetting command against its
/// expected document file.
///
/// The file must be named after the unit directory; its absence is a
/// convention violation and no process is spawned. The command runs with the
/// unit directory as working directory and receives the bare file name, so
/// relative resolution inside the tool succeeds.
pub fn compile_unit(unit: &DocUnit, options: &CompileOptions) -> Result<()> {
    let file_name = format!("{}{}", unit.name, options.extension);
    let document = unit.path.join(&file_name);

    if !document.exists() {
        return Err(Error::MissingDocument {
            unit: unit.name.clone(),
            expected: document,
        });
    }

    info!("Running {} for {}", options.command, document.display());

    let outcome = subprocess::run_blocking(
        &options.command,
        &[NONSTOP_FLAG, &file_name],
        &unit.path,
        options.timeout,
    )
    .map_err(|e| Error::ProcessSpawn {
        command: options.command.clone(),
        unit: unit.name.clone(),
        source: e,
    })?;

    match outcome {
        WaitOutcome::Exited(status) if status.success() => Ok(()),
        WaitOutcome::Exited(status) => match status.code() {
            Some(code) => Err(Error::ProcessFailed {
                unit: unit.name.clone(),
                code,
            }),
            None => Err(Error::ProcessTerminated {
                unit: unit.name.clone(),
            }),
        },
        WaitOutcome::TimedOut => Err(Error::ProcessTimeout {
            unit: unit.name.clone(),
            seconds: options.timeout.map_or(0, |t| t.as_secs()),
        }),
        WaitOutcome::Cancelled => Err(Error::Interrupted),
    }
}
