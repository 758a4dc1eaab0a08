//! Configuration sources: the process environment, the host application's
//! `settings.json` and the project's `plugin.json` manifest.

pub mod env;
pub mod manifest;
pub mod settings;
