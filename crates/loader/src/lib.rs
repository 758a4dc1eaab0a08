//! Entry-point wiring for Binary Ninja plugins.
//!
//! When the host loads a plugin it runs a small amount of glue before handing
//! control to the plugin itself:
//!
//! 1. optional remote-debugger connections, toggled by environment variables
//!    ([`DebuggerConfig`]);
//! 2. a load message in the host log;
//! 3. exactly one call to the plugin's initializer ([`PluginInit`]) with the
//!    plugin name and the host version.
//!
//! The host side is abstracted behind [`HostApi`] so the sequence can be
//! driven by any embedding, including tests.
//!
//! ```rust
//! use bnplug_loader::{load_plugin, DebuggerConfig, DebuggerKind, HostApi, PluginInit};
//! use std::path::Path;
//!
//! struct Host;
//! impl HostApi for Host {
//!     fn core_version(&self) -> String { "4.0.5336".to_string() }
//!     fn connect_debugger(&self, _kind: DebuggerKind, _port: u16) -> Result<(), String> { Ok(()) }
//!     fn log_info(&self, _message: &str) {}
//! }
//!
//! struct MyPlugin;
//! impl PluginInit for MyPlugin {
//!     fn plugin_init(&mut self, name: &str, host_version: &str) {
//!         assert_eq!(name, "my_plugin");
//!         assert_eq!(host_version, "4.0.5336");
//!     }
//! }
//!
//! load_plugin(&Host, &mut MyPlugin, Path::new("plugins/my_plugin"), &DebuggerConfig::default()).unwrap();
//! ```

pub mod loader;
pub mod traits;
pub mod types;

pub use loader::{load_plugin, plugin_name_from_dir};
pub use traits::{HostApi, PluginInit};
pub use types::{DebuggerConfig, DebuggerKind, LoaderError, DEFAULT_DEBUGGER_PORT};
