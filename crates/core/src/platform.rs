//! Host operating system detection for path resolution

use std::env;
use std::fmt;

/// Operating system family used to pick default Binary Ninja locations
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum HostOs {
    Windows,
    MacOs,
    Linux,
    /// Anything else; treated like Linux where a default exists.
    Other(String),
}

impl HostOs {
    /// Detect the operating system this binary was built for
    pub fn current() -> Self {
        Self::from_os(env::consts::OS)
    }

    /// Map an OS identifier (`std::env::consts::OS` style) to a family
    pub fn from_os(os: &str) -> Self {
        match os {
            "windows" | "win32" => Self::Windows,
            "macos" | "darwin" => Self::MacOs,
            "linux" => Self::Linux,
            other => Self::Other(other.to_string()),
        }
    }

    pub fn as_str(&self) -> &str {
        match self {
            Self::Windows => "windows",
            Self::MacOs => "macos",
            Self::Linux => "linux",
            Self::Other(name) => name.as_str(),
        }
    }
}

impl fmt::Display for HostOs {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}
