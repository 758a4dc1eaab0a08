//! The load sequence.

use std::path::Path;

use tracing::{debug, warn};

use crate::traits::{HostApi, PluginInit};
use crate::types::{DebuggerConfig, LoaderError};

/// Plugin name as the host sees it: the plugin directory's name
pub fn plugin_name_from_dir(plugin_dir: &Path) -> Result<String, LoaderError> {
    plugin_dir
        .file_name()
        .and_then(|name| name.to_str())
        .map(str::to_string)
        .ok_or_else(|| LoaderError::PluginName(plugin_dir.display().to_string()))
}

/// Connect enabled debuggers, log the load, then initialize the plugin.
///
/// Returns the plugin name that was passed to the initializer.
pub fn load_plugin(
    host: &dyn HostApi,
    plugin: &mut dyn PluginInit,
    plugin_dir: &Path,
    debuggers: &DebuggerConfig,
) -> Result<String, LoaderError> {
    let name = plugin_name_from_dir(plugin_dir)?;
    let host_version = host.core_version();

    for (kind, port) in debuggers.enabled() {
        debug!(%kind, port, "connecting debugger");
        if let Err(e) = host.connect_debugger(kind, port) {
            warn!(%kind, port, error = %e, "debugger connection failed");
        }
    }

    host.log_info(&format!(
        "Loaded {} for Binary Ninja version {}",
        name, host_version
    ));

    plugin.plugin_init(&name, &host_version);
    Ok(name)
}
