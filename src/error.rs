//! Error types for texbatch.

/// Result type alias for texbatch operations.
pub type Result<T> = std::result::Result<T, Error>;

/// Top-level error type for texbatch.
#[derive(Debug, thiserror::Error)]
pub enum Error {
    /// I/O operation failed.
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    /// Failed to read configuration file.
    #[error("failed to read config file '{path}'")]
    ConfigRead {
        /// Path to the config file.
        path: std::path::PathBuf,
        /// Underlying I/O error.
        #[source]
        source: std::io::Error,
    },

    /// Failed to parse configuration file.
    #[error("failed to parse config file '{path}'")]
    ConfigParse {
        /// Path to the config file.
        path: std::path::PathBuf,
        /// Underlying parse error.
        #[source]
        source: toml::de::Error,
    },

    /// Failed to write configuration file.
    #[error("failed to write config file '{path}'")]
    ConfigWrite {
        /// Path to the config file.
        path: std::path::PathBuf,
        /// Underlying I/O error.
        #[source]
        source: std::io::Error,
    },

    /// Failed to serialize configuration.
    #[error("failed to serialize config")]
    ConfigSerialize {
        /// Underlying serialization error.
        #[source]
        source: toml::ser::Error,
    },

    /// Configuration validation failed.
    #[error("configuration validation failed: {message}")]
    ConfigValidation {
        /// Description of the validation failure.
        message: String,
    },

    /// Failed to create the output directory.
    #[error("failed to create output directory '{path}'")]
    OutputDirCreate {
        /// Path to the output directory.
        path: std::path::PathBuf,
        /// Underlying I/O error.
        #[source]
        source: std::io::Error,
    },

    /// Failed to copy a document unit into the output tree.
    #[error("failed to copy document unit '{unit}' to '{path}'")]
    UnitCopy {
        /// Name of the document unit.
        unit: String,
        /// Destination path of the failed copy.
        path: std::path::PathBuf,
        /// Underlying I/O error.
        #[source]
        source: std::io::Error,
    },

    /// A staged unit does not contain its expected document file.
    #[error("document unit '{unit}' must contain a file named '{expected}'")]
    MissingDocument {
        /// Name of the document unit.
        unit: String,
        /// Expected document file path.
        expected: std::path::PathBuf,
    },

    /// The typesetting command could not be started.
    #[error("failed to start '{command}' for document unit '{unit}'")]
    ProcessSpawn {
        /// Command that failed to start.
        command: String,
        /// Name of the document unit.
        unit: String,
        /// Underlying I/O error.
        #[source]
        source: std::io::Error,
    },

    /// The typesetting command exited with a non-zero code.
    #[error("typesetting failed for document unit '{unit}' with exit code {code}")]
    ProcessFailed {
        /// Name of the document unit.
        unit: String,
        /// Observed exit code.
        code: i32,
    },

    /// The typesetting command was killed by a signal before exiting.
    #[error("typesetting process for document unit '{unit}' was terminated by a signal")]
    ProcessTerminated {
        /// Name of the document unit.
        unit: String,
    },

    /// The typesetting command did not finish within the configured timeout.
    #[error("typesetting for document unit '{unit}' timed out after {seconds}s")]
    ProcessTimeout {
        /// Name of the document unit.
        unit: String,
        /// Configured timeout in seconds.
        seconds: u64,
    },

    /// One or more units failed in keep-going mode.
    #[error("{failed} of {total} document unit(s) failed")]
    UnitsFailed {
        /// Number of failed units.
        failed: usize,
        /// Total number of units processed.
        total: usize,
    },

    /// The run was cancelled by the user.
    #[error("build interrupted")]
    Interrupted,
}
