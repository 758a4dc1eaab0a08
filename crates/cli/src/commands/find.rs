use std::io::Write;
use std::path::PathBuf;

use anyhow::Result;
use bnplug_core::configs::env::EnvConfig;
use bnplug_core::resolver::{
    find_binaryninja, find_plugin_install_dir, find_python_interpreter, find_pythonhome,
};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FindTarget {
    BinaryNinja,
    PluginInstallDir,
    PythonInterpreter,
    PythonHome,
}

/// Print one resolved path; an unset optional path prints an empty line
pub fn execute(target: FindTarget, env: &EnvConfig, out: &mut dyn Write) -> Result<()> {
    let path: Option<PathBuf> = match target {
        FindTarget::BinaryNinja => Some(find_binaryninja(env)?),
        FindTarget::PluginInstallDir => Some(find_plugin_install_dir(env)?),
        FindTarget::PythonInterpreter => find_python_interpreter(env)?,
        FindTarget::PythonHome => find_pythonhome(env)?,
    };

    match path {
        Some(path) => writeln!(out, "{}", path.display())?,
        None => writeln!(out)?,
    }
    Ok(())
}
