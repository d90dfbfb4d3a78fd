//! Application-wide constants.
//!
//! All magic numbers and strings are defined here to ensure consistency
//! and make changes easy to track.

use std::time::Duration;

/// Application name used for the config file and user-facing messages.
pub const APP_NAME: &str = "texbatch";

/// Name of the project-local configuration file.
pub const CONFIG_FILE_NAME: &str = "texbatch.toml";

/// Default root directory containing document-unit subfolders.
pub const DEFAULT_SOURCE_DIR: &str = "src/main/resources/latex";

/// Default build output directory under which the staging tree is placed.
pub const DEFAULT_BUILD_DIR: &str = "target";

/// Default name of the staging subdirectory inside the build directory.
pub const DEFAULT_OUTPUT_NAME: &str = "latex";

/// Default typesetting command.
pub const DEFAULT_COMMAND: &str = "xelatex";

/// Default document file extension, including the leading dot.
pub const DEFAULT_EXTENSION: &str = ".tex";

/// Flag passed to the typesetting command to prevent interactive prompts
/// during unattended runs.
pub const NONSTOP_FLAG: &str = "-interaction=nonstopmode";

/// Interval between child process status polls while waiting for exit.
pub const CHILD_POLL_INTERVAL: Duration = Duration::from_millis(50);

/// Exit code used when the run is interrupted with Ctrl+C.
pub const EXIT_CODE_INTERRUPTED: i32 = 130;
