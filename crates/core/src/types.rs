use std::path::PathBuf;

use thiserror::Error;

/// The main error type for bnplug operations
#[derive(Debug, Error)]
pub enum BnPlugError {
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    /// No override and no OS default for the Binary Ninja install directory.
    #[error("Please specify the path to Binary Ninja using the BINARYNINJA_PATH environment variable")]
    HostPathUnresolved,

    #[error("Please specify the plugin install directory using the BN_INSTALL_DIR environment variable")]
    PluginDirUnresolved,

    /// No override and no base directory to derive settings.json from.
    #[error("Please specify the path to the settings.json file using the BN_SETTINGS_JSON environment variable")]
    SettingsPathUnresolved,

    #[error("Failed to read {path}: {source}")]
    Read {
        path: PathBuf,
        source: std::io::Error,
    },

    #[error("Failed to write {path}: {source}")]
    Write {
        path: PathBuf,
        source: std::io::Error,
    },

    #[error("Failed to parse {path}: {source}")]
    Parse {
        path: PathBuf,
        source: serde_json::Error,
    },

    #[error("Manifest field '{0}' is missing")]
    MissingField(&'static str),

    #[error("Command error: {0}")]
    Command(String),
}

impl BnPlugError {
    /// Whether this is one of the guidance errors that end the process
    /// before any work is done.
    pub fn is_fatal_guidance(&self) -> bool {
        matches!(
            self,
            BnPlugError::HostPathUnresolved
                | BnPlugError::PluginDirUnresolved
                | BnPlugError::SettingsPathUnresolved
        )
    }
}

/// Result type alias for bnplug operations
pub type BnPlugResult<T> = Result<T, BnPlugError>;
