//! The host application's own `settings.json`.
//!
//! Binary Ninja stores settings as a flat JSON object keyed by dotted names
//! (`"python.interpreter"`, `"ui.theme"`, ...). Only the interpreter key is
//! interpreted here; the rest is carried through untouched.

use std::path::Path;

use serde_json::{Map, Value};
use tracing::debug;

use super::env::EnvConfig;
use crate::json::to_pretty_json;
use crate::resolver::find_settings_json;
use crate::types::{BnPlugError, BnPlugResult};

pub const PYTHON_INTERPRETER_KEY: &str = "python.interpreter";

/// Parsed host settings document
#[derive(Debug, Clone, Default, PartialEq)]
pub struct HostSettings {
    values: Map<String, Value>,
}

impl HostSettings {
    pub fn from_map(values: Map<String, Value>) -> Self {
        Self { values }
    }

    /// A custom interpreter configured in the host, if any
    pub fn python_interpreter(&self) -> Option<&str> {
        self.values
            .get(PYTHON_INTERPRETER_KEY)
            .and_then(Value::as_str)
            .filter(|s| !s.is_empty())
    }

    pub fn get(&self, key: &str) -> Option<&Value> {
        self.values.get(key)
    }

    /// Render the whole document with four-space indentation
    pub fn to_pretty_json(&self) -> BnPlugResult<String> {
        to_pretty_json(&self.values)
    }
}

pub fn parse_settings(json_str: &str) -> BnPlugResult<HostSettings> {
    let values: Map<String, Value> = serde_json::from_str(json_str)?;
    Ok(HostSettings::from_map(values))
}

/// Read and parse a settings file at a known location
pub fn load_settings_from(path: &Path) -> BnPlugResult<HostSettings> {
    let content = std::fs::read_to_string(path).map_err(|source| BnPlugError::Read {
        path: path.to_path_buf(),
        source,
    })?;

    let values: Map<String, Value> =
        serde_json::from_str(&content).map_err(|source| BnPlugError::Parse {
            path: path.to_path_buf(),
            source,
        })?;

    debug!(path = %path.display(), keys = values.len(), "loaded host settings");
    Ok(HostSettings::from_map(values))
}

/// Locate the settings file for this environment and load it
pub fn load_settings(env: &EnvConfig) -> BnPlugResult<HostSettings> {
    let path = find_settings_json(env)?;
    load_settings_from(&path)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::configs::env::BN_SETTINGS_JSON;
    use crate::platform::HostOs;

    #[test]
    fn test_python_interpreter_key() {
        let settings =
            parse_settings(r#"{"python.interpreter": "/opt/py/bin/python3", "ui.theme": "dark"}"#)
                .unwrap();
        assert_eq!(settings.python_interpreter(), Some("/opt/py/bin/python3"));
        assert_eq!(settings.get("ui.theme"), Some(&Value::from("dark")));
    }

    #[test]
    fn test_blank_interpreter_is_not_configured() {
        let settings = parse_settings(r#"{"python.interpreter": ""}"#).unwrap();
        assert_eq!(settings.python_interpreter(), None);

        let settings = parse_settings("{}").unwrap();
        assert_eq!(settings.python_interpreter(), None);
    }

    #[test]
    fn test_pretty_output_keeps_key_order() {
        let settings = parse_settings(r#"{"b": 1, "a": {"c": true}}"#).unwrap();
        let rendered = settings.to_pretty_json().unwrap();
        assert_eq!(rendered, "{\n    \"b\": 1,\n    \"a\": {\n        \"c\": true\n    }\n}");
    }

    #[test]
    fn test_load_settings_via_override() {
        let temp_dir = tempfile::tempdir().unwrap();
        let path = temp_dir.path().join("settings.json");
        std::fs::write(&path, r#"{"python.interpreter": "/usr/local/bin/python3"}"#).unwrap();

        let path_str = path.to_string_lossy().to_string();
        let env = EnvConfig::from_lookup(HostOs::Linux, |key| {
            (key == BN_SETTINGS_JSON).then(|| path_str.clone())
        });

        let settings = load_settings(&env).unwrap();
        assert_eq!(settings.python_interpreter(), Some("/usr/local/bin/python3"));
    }

    #[test]
    fn test_load_settings_without_any_path_is_fatal() {
        let env = EnvConfig::empty(HostOs::Linux);
        let err = load_settings(&env).unwrap_err();
        assert!(matches!(err, BnPlugError::SettingsPathUnresolved));
        assert!(err.is_fatal_guidance());
    }

    #[test]
    fn test_malformed_settings_reports_path() {
        let temp_dir = tempfile::tempdir().unwrap();
        let path = temp_dir.path().join("settings.json");
        std::fs::write(&path, "{not json").unwrap();

        let err = load_settings_from(&path).unwrap_err();
        assert!(matches!(err, BnPlugError::Parse { .. }));
        assert!(err.to_string().contains("settings.json"));
    }
}
