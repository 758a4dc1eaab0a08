//! Seams between the loader, the host application and the plugin.
//!
//! - [`HostApi`] - what the loader needs from the host
//! - [`PluginInit`] - the plugin's own initialization

use crate::types::DebuggerKind;

/// Host services used while loading a plugin.
///
/// # Example
///
/// ```rust
/// # use bnplug_loader::{DebuggerKind, HostApi};
/// struct PrintingHost;
///
/// impl HostApi for PrintingHost {
///     fn core_version(&self) -> String {
///         "4.0.5336".to_string()
///     }
///
///     fn connect_debugger(&self, kind: DebuggerKind, port: u16) -> Result<(), String> {
///         println!("would attach {} on {}", kind, port);
///         Ok(())
///     }
///
///     fn log_info(&self, message: &str) {
///         println!("{}", message);
///     }
/// }
/// ```
pub trait HostApi {
    /// Version string of the running host core
    fn core_version(&self) -> String;

    /// Attach to a remote debugger listening on `port`.
    ///
    /// Called at most once per debugger kind. Errors are reported to the
    /// host log and otherwise ignored.
    fn connect_debugger(&self, kind: DebuggerKind, port: u16) -> Result<(), String>;

    /// Write an informational line to the host log
    fn log_info(&self, message: &str);
}

/// The plugin's initializer, called exactly once per load
pub trait PluginInit {
    fn plugin_init(&mut self, name: &str, host_version: &str);
}

impl<F> PluginInit for F
where
    F: FnMut(&str, &str),
{
    fn plugin_init(&mut self, name: &str, host_version: &str) {
        self(name, host_version)
    }
}
