use std::io::Write;

use anyhow::Result;
use bnplug_core::configs::env::EnvConfig;
use bnplug_core::configs::settings::load_settings;

/// Pretty-print the host's settings.json
pub fn execute(env: &EnvConfig, out: &mut dyn Write) -> Result<()> {
    let settings = load_settings(env)?;
    writeln!(out, "{}", settings.to_pretty_json()?)?;
    Ok(())
}
