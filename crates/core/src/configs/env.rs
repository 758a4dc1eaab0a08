//! Environment-variable configuration for path resolution.
//!
//! Resolvers never read the process environment themselves; they receive an
//! [`EnvConfig`] captured once, which keeps them deterministic under test.

use std::path::PathBuf;

use crate::platform::HostOs;

pub const BINARYNINJA_PATH: &str = "BINARYNINJA_PATH";
pub const BN_INSTALL_DIR: &str = "BN_INSTALL_DIR";
pub const BN_SETTINGS_JSON: &str = "BN_SETTINGS_JSON";
pub const BN_PYTHON_INTERPRETER: &str = "BN_PYTHON_INTERPRETER";

/// Overrides and platform base directories consulted by the resolver
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct EnvConfig {
    pub os: HostOs,
    /// `BINARYNINJA_PATH`
    pub binaryninja_path: Option<PathBuf>,
    /// `BN_INSTALL_DIR`
    pub plugin_install_dir: Option<PathBuf>,
    /// `BN_SETTINGS_JSON`
    pub settings_json: Option<PathBuf>,
    /// `BN_PYTHON_INTERPRETER`
    pub python_interpreter: Option<PathBuf>,
    pub home: Option<PathBuf>,
    pub app_data: Option<PathBuf>,
    pub program_files: Option<PathBuf>,
    pub program_files_x86: Option<PathBuf>,
}

impl EnvConfig {
    /// Capture the configuration from the running process
    pub fn from_env() -> Self {
        let mut config = Self::from_lookup(HostOs::current(), |key| std::env::var(key).ok());
        if config.home.is_none() {
            config.home = dirs::home_dir();
        }
        config
    }

    /// Build the configuration from an arbitrary variable lookup.
    ///
    /// Empty values are treated as unset.
    pub fn from_lookup<F>(os: HostOs, lookup: F) -> Self
    where
        F: Fn(&str) -> Option<String>,
    {
        let path = |key: &str| {
            lookup(key)
                .filter(|value| !value.is_empty())
                .map(PathBuf::from)
        };

        Self {
            os,
            binaryninja_path: path(BINARYNINJA_PATH),
            plugin_install_dir: path(BN_INSTALL_DIR),
            settings_json: path(BN_SETTINGS_JSON),
            python_interpreter: path(BN_PYTHON_INTERPRETER),
            home: path("HOME"),
            app_data: path("APPDATA"),
            program_files: path("ProgramFiles"),
            program_files_x86: path("ProgramFiles(x86)"),
        }
    }

    /// A configuration with no variables set at all
    pub fn empty(os: HostOs) -> Self {
        Self::from_lookup(os, |_| None)
    }
}
