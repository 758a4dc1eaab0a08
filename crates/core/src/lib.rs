//! bnplug Core Library
//!
//! Build-time helpers for Binary Ninja plugin projects: locating the host
//! installation and its Python runtime, and editing the project's
//! `plugin.json` manifest.
//!
//! ## Architecture
//!
//! - [`resolver`] - Install, plugin, settings and Python path discovery
//! - [`configs`] - Environment record, host `settings.json`, `plugin.json`
//! - [`editor`] - Parsing and applying manifest edit commands
//! - [`session`] - The interactive `setup` loop
//! - [`project`] - Reading and writing files in the plugin project
//! - [`license`] - Embedded license templates
//! - [`platform`] - Host OS detection
//! - [`types`] - Error type and result alias
//!
//! ## Usage
//!
//! ```rust,no_run
//! use bnplug_core::configs::env::EnvConfig;
//! use bnplug_core::resolver::find_plugin_install_dir;
//!
//! # fn example() -> bnplug_core::types::BnPlugResult<()> {
//! let env = EnvConfig::from_env();
//! let plugins = find_plugin_install_dir(&env)?;
//! println!("{}", plugins.display());
//! # Ok(())
//! # }
//! ```

pub mod configs;
pub mod editor;
pub mod json;
pub mod license;
pub mod platform;
pub mod project;
pub mod resolver;
pub mod session;
pub mod types;

// Re-export the main types for easier usage
pub use project::ProjectDir;
pub use types::{BnPlugError, BnPlugResult};
