//! Configuration validation.

use crate::config::Config;
use crate::error::{Error, Result};

/// Validate a resolved configuration before any filesystem mutation.
pub fn validate_config(config: &Config) -> Result<()> {
    if config.command.trim().is_empty() {
        return Err(Error::ConfigValidation {
            message: "typesetting command must not be empty".to_string(),
        });
    }

    if !config.extension.starts_with('.') {
        return Err(Error::ConfigValidation {
            message: format!(
                "document extension '{}' must start with a dot",
                config.extension
            ),
        });
    }

    if config.extension.len() < 2 {
        return Err(Error::ConfigValidation {
            message: "document extension must name a suffix after the dot".to_string(),
        });
    }

    if config.output_name.trim().is_empty() {
        return Err(Error::ConfigValidation {
            message: "output subdirectory name must not be empty".to_string(),
        });
    }

    if config.timeout_secs == Some(0) {
        return Err(Error::ConfigValidation {
            message: "timeout must be greater than zero".to_string(),
        });
    }

    Ok(())
}
