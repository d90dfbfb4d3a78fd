//! Configuration type definitions.

use crate::constants::{
    DEFAULT_BUILD_DIR, DEFAULT_COMMAND, DEFAULT_EXTENSION, DEFAULT_OUTPUT_NAME, DEFAULT_SOURCE_DIR,
};
use serde::{Deserialize, Serialize};
use std::path::PathBuf;

/// Complete application configuration.
///
/// Every field has a built-in default, so a missing or empty `texbatch.toml`
/// yields a fully usable configuration. CLI flags override file values.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct Config {
    /// Root directory containing document-unit subfolders.
    pub source_dir: PathBuf,

    /// Build output directory under which the staging tree is placed.
    pub build_dir: PathBuf,

    /// Name of the staging subdirectory inside the build directory.
    pub output_name: String,

    /// Typesetting command name or path.
    pub command: String,

    /// Document file extension, including the leading dot.
    pub extension: String,

    /// Per-unit timeout in seconds. `None` waits indefinitely.
    pub timeout_secs: Option<u64>,

    /// Process every unit and report all failures instead of aborting at the
    /// first failing unit.
    pub keep_going: bool,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            source_dir: PathBuf::from(DEFAULT_SOURCE_DIR),
            build_dir: PathBuf::from(DEFAULT_BUILD_DIR),
            output_name: DEFAULT_OUTPUT_NAME.to_string(),
            command: DEFAULT_COMMAND.to_string(),
            extension: DEFAULT_EXTENSION.to_string(),
            timeout_secs: None,
            keep_going: false,
        }
    }
}

impl Config {
    /// Output root for the staging tree: `{build_dir}/{output_name}`.
    pub fn output_root(&self) -> PathBuf {
        self.build_dir.join(&self.output_name)
    }
}
