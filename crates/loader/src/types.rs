//! Debugger toggles and loader errors.

use std::fmt;

use thiserror::Error;

/// Port used when a debugger is enabled without an explicit port
pub const DEFAULT_DEBUGGER_PORT: u16 = 12345;

pub const USE_JETBRAINS_DEBUGGER: &str = "USE_JETBRAINS_DEBUGGER";
pub const JETBRAINS_DEBUGGER_PORT: &str = "JETBRAINS_DEBUGGER_PORT";
pub const USE_VSCODE_DEBUGGER: &str = "USE_VSCODE_DEBUGGER";
pub const VSCODE_DEBUGGER_PORT: &str = "VSCODE_DEBUGGER_PORT";

#[derive(Debug, Error)]
pub enum LoaderError {
    #[error("Invalid debugger port in {var}: '{value}'")]
    InvalidPort { var: &'static str, value: String },

    #[error("Cannot derive a plugin name from '{0}'")]
    PluginName(String),
}

/// Remote debuggers a plugin can attach to at load time
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum DebuggerKind {
    /// PyCharm / IntelliJ remote debug server
    JetBrains,
    /// VS Code (debugpy)
    VsCode,
}

impl DebuggerKind {
    fn toggle_var(self) -> &'static str {
        match self {
            Self::JetBrains => USE_JETBRAINS_DEBUGGER,
            Self::VsCode => USE_VSCODE_DEBUGGER,
        }
    }

    fn port_var(self) -> &'static str {
        match self {
            Self::JetBrains => JETBRAINS_DEBUGGER_PORT,
            Self::VsCode => VSCODE_DEBUGGER_PORT,
        }
    }
}

impl fmt::Display for DebuggerKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::JetBrains => f.write_str("JetBrains"),
            Self::VsCode => f.write_str("VS Code"),
        }
    }
}

/// Which debuggers to connect on load, and on which ports
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct DebuggerConfig {
    pub jetbrains: Option<u16>,
    pub vscode: Option<u16>,
}

impl DebuggerConfig {
    pub fn from_env() -> Result<Self, LoaderError> {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    /// A debugger is enabled only when its toggle is exactly `"1"`.
    pub fn from_lookup<F>(lookup: F) -> Result<Self, LoaderError>
    where
        F: Fn(&str) -> Option<String>,
    {
        Ok(Self {
            jetbrains: port_for(DebuggerKind::JetBrains, &lookup)?,
            vscode: port_for(DebuggerKind::VsCode, &lookup)?,
        })
    }

    /// Enabled debuggers in connection order
    pub fn enabled(&self) -> Vec<(DebuggerKind, u16)> {
        let mut enabled = Vec::new();
        if let Some(port) = self.jetbrains {
            enabled.push((DebuggerKind::JetBrains, port));
        }
        if let Some(port) = self.vscode {
            enabled.push((DebuggerKind::VsCode, port));
        }
        enabled
    }
}

fn port_for<F>(kind: DebuggerKind, lookup: &F) -> Result<Option<u16>, LoaderError>
where
    F: Fn(&str) -> Option<String>,
{
    if lookup(kind.toggle_var()).as_deref() != Some("1") {
        return Ok(None);
    }

    match lookup(kind.port_var()) {
        None => Ok(Some(DEFAULT_DEBUGGER_PORT)),
        Some(value) => value
            .trim()
            .parse::<u16>()
            .map(Some)
            .map_err(|_| LoaderError::InvalidPort {
                var: kind.port_var(),
                value,
            }),
    }
}
