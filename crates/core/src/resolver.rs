//! Binary Ninja path discovery.
//!
//! Every lookup follows the same order: an explicit environment override
//! first, then the default location for the host OS. Nothing is cached;
//! each call works from the [`EnvConfig`] it is given and, for the Python
//! lookups, re-reads `settings.json`.

use std::path::PathBuf;

use tracing::debug;

use crate::configs::env::EnvConfig;
use crate::configs::settings::{load_settings, HostSettings};
use crate::platform::HostOs;
use crate::types::{BnPlugError, BnPlugResult};

const MACOS_APP_PATH: &str = "/Applications/Binary Ninja.app";
const MACOS_PYTHON_SUFFIX: &str = "Contents/Frameworks/Python.framework/Versions/Current/bin/python3";
const MACOS_PYTHONHOME_SUFFIX: &str = "Contents/Resources/bundled-python3/";
const LINUX_DEFAULT_PYTHON: &str = "/usr/bin/python";

/// Binary Ninja install directory
pub fn find_binaryninja(env: &EnvConfig) -> BnPlugResult<PathBuf> {
    if let Some(path) = &env.binaryninja_path {
        return Ok(path.clone());
    }

    let path = match env.os {
        HostOs::Windows => env
            .program_files
            .as_ref()
            .or(env.program_files_x86.as_ref())
            .map(|base| base.join("Vector35").join("BinaryNinja")),
        HostOs::MacOs => Some(PathBuf::from(MACOS_APP_PATH)),
        HostOs::Linux | HostOs::Other(_) => None,
    };

    debug!(os = %env.os, ?path, "resolved Binary Ninja install directory");
    path.ok_or(BnPlugError::HostPathUnresolved)
}

/// Per-user Binary Ninja directory holding `plugins/` and `settings.json`
fn user_dir(env: &EnvConfig) -> Option<PathBuf> {
    match env.os {
        HostOs::Windows => env.app_data.as_ref().map(|dir| dir.join("Binary Ninja")),
        HostOs::MacOs => env.home.as_ref().map(|home| {
            home.join("Library")
                .join("Application Support")
                .join("Binary Ninja")
        }),
        HostOs::Linux | HostOs::Other(_) => env.home.as_ref().map(|home| home.join(".binaryninja")),
    }
}

/// Directory the host loads user plugins from
pub fn find_plugin_install_dir(env: &EnvConfig) -> BnPlugResult<PathBuf> {
    if let Some(path) = &env.plugin_install_dir {
        return Ok(path.clone());
    }

    user_dir(env)
        .map(|dir| dir.join("plugins"))
        .ok_or(BnPlugError::PluginDirUnresolved)
}

/// Location of the host's `settings.json`
pub fn find_settings_json(env: &EnvConfig) -> BnPlugResult<PathBuf> {
    if let Some(path) = &env.settings_json {
        return Ok(path.clone());
    }

    user_dir(env)
        .map(|dir| dir.join("settings.json"))
        .ok_or(BnPlugError::SettingsPathUnresolved)
}

/// Python interpreter used by the host.
///
/// `None` means the host picks its own (the Windows default).
pub fn find_python_interpreter(env: &EnvConfig) -> BnPlugResult<Option<PathBuf>> {
    if let Some(path) = &env.python_interpreter {
        return Ok(Some(path.clone()));
    }

    let settings = load_settings(env)?;
    python_interpreter_with_settings(env, &settings)
}

/// Same as [`find_python_interpreter`] with an already loaded settings document
pub fn python_interpreter_with_settings(
    env: &EnvConfig,
    settings: &HostSettings,
) -> BnPlugResult<Option<PathBuf>> {
    if let Some(path) = &env.python_interpreter {
        return Ok(Some(path.clone()));
    }
    if let Some(configured) = settings.python_interpreter() {
        return Ok(Some(PathBuf::from(configured)));
    }

    match env.os {
        HostOs::Windows => Ok(None),
        HostOs::MacOs => Ok(Some(find_binaryninja(env)?.join(MACOS_PYTHON_SUFFIX))),
        HostOs::Linux | HostOs::Other(_) => Ok(Some(PathBuf::from(LINUX_DEFAULT_PYTHON))),
    }
}

/// `PYTHONHOME` for the host's bundled interpreter.
///
/// `None` when a custom interpreter is configured or the platform has no
/// bundled runtime.
pub fn find_pythonhome(env: &EnvConfig) -> BnPlugResult<Option<PathBuf>> {
    if env.python_interpreter.is_some() {
        return Ok(None);
    }

    let settings = load_settings(env)?;
    pythonhome_with_settings(env, &settings)
}

/// Same as [`find_pythonhome`] with an already loaded settings document
pub fn pythonhome_with_settings(
    env: &EnvConfig,
    settings: &HostSettings,
) -> BnPlugResult<Option<PathBuf>> {
    if env.python_interpreter.is_some() || settings.python_interpreter().is_some() {
        return Ok(None);
    }

    match env.os {
        HostOs::MacOs => Ok(Some(find_binaryninja(env)?.join(MACOS_PYTHONHOME_SUFFIX))),
        HostOs::Windows | HostOs::Linux | HostOs::Other(_) => Ok(None),
    }
}
