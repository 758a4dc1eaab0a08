//! The plugin manifest, `plugin.json`.
//!
//! The file is kept as an ordered JSON object. Keys are only interpreted when
//! something asks for them, so manifests with extra keys or unexpected value
//! types (a metadata-v2 `license` object, a numeric `version`) load fine and
//! are written back in their original order.

use schemars::JsonSchema;
use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};

use crate::json::to_pretty_json;
use crate::types::{BnPlugError, BnPlugResult};

pub const NAME_KEY: &str = "name";
pub const VERSION_KEY: &str = "version";
pub const DESCRIPTION_KEY: &str = "description";
pub const AUTHOR_KEY: &str = "author";
pub const LICENSE_KEY: &str = "license";
pub const LICENSE_TEXT_KEY: &str = "license_text";
pub const MIN_VERSION_KEY: &str = "minimumbinaryninjaversion";
pub const TYPE_KEY: &str = "type";
pub const DEPENDENCIES_KEY: &str = "dependencies";
pub const PIP_KEY: &str = "pip";

/// Tag in `type` marking a plugin that needs the UI
pub const UI_PLUGIN_TAG: &str = "ui";

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Manifest {
    fields: Map<String, Value>,
}

impl Manifest {
    pub fn get(&self, key: &str) -> Option<&Value> {
        self.fields.get(key)
    }

    /// Keys in file order
    pub fn keys(&self) -> impl Iterator<Item = &str> {
        self.fields.keys().map(String::as_str)
    }

    /// A key rendered as text: strings as-is, other values as JSON.
    ///
    /// `None` when the key is absent or `null`.
    pub fn text(&self, key: &str) -> Option<String> {
        match self.fields.get(key)? {
            Value::Null => None,
            Value::String(text) => Some(text.clone()),
            other => Some(other.to_string()),
        }
    }

    /// Store a string under `key`, replacing whatever it held.
    ///
    /// An existing key keeps its position in the file.
    pub fn set_text(&mut self, key: &str, value: impl Into<String>) {
        self.fields.insert(key.to_string(), Value::String(value.into()));
    }

    pub fn name(&self) -> BnPlugResult<String> {
        self.text(NAME_KEY).ok_or(BnPlugError::MissingField("name"))
    }

    pub fn version(&self) -> BnPlugResult<String> {
        self.text(VERSION_KEY)
            .ok_or(BnPlugError::MissingField("version"))
    }

    pub fn author(&self) -> Option<String> {
        self.text(AUTHOR_KEY)
    }

    pub fn plugin_types(&self) -> Vec<String> {
        string_items(self.fields.get(TYPE_KEY))
    }

    pub fn is_ui_plugin(&self) -> bool {
        self.plugin_types().iter().any(|t| t == UI_PLUGIN_TAG)
    }

    /// Add or remove the `"ui"` tag; adding never duplicates it
    pub fn set_ui_plugin(&mut self, enabled: bool) {
        with_array(&mut self.fields, TYPE_KEY, |tags| {
            let is_ui = |tag: &Value| tag.as_str() == Some(UI_PLUGIN_TAG);
            if enabled {
                if !tags.iter().any(is_ui) {
                    tags.push(Value::String(UI_PLUGIN_TAG.to_string()));
                }
            } else {
                tags.retain(|tag| !is_ui(tag));
            }
        });
    }

    /// `dependencies.pip`, in order
    pub fn pip_dependencies(&self) -> Vec<String> {
        string_items(
            self.fields
                .get(DEPENDENCIES_KEY)
                .and_then(|deps| deps.get(PIP_KEY)),
        )
    }

    /// Append requirements in order; existing entries are not deduplicated
    pub fn add_pip_dependencies<I, S>(&mut self, deps: I)
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.edit_pip(|pip| pip.extend(deps.into_iter().map(|dep| Value::String(dep.into()))));
    }

    /// Remove the first occurrence of each requirement; unknown ones are ignored
    pub fn remove_pip_dependencies<I, S>(&mut self, deps: I)
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        self.edit_pip(|pip| {
            for dep in deps {
                if let Some(index) = pip.iter().position(|d| d.as_str() == Some(dep.as_ref())) {
                    pip.remove(index);
                }
            }
        });
    }

    pub fn set_pip_dependencies<I, S>(&mut self, deps: I)
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.edit_pip(|pip| *pip = deps.into_iter().map(|dep| Value::String(dep.into())).collect());
    }

    fn edit_pip(&mut self, edit: impl FnOnce(&mut Vec<Value>)) {
        with_object(&mut self.fields, DEPENDENCIES_KEY, |deps| {
            with_array(deps, PIP_KEY, edit)
        });
    }

    /// Render the manifest the way it is written to disk
    pub fn to_json_string(&self) -> BnPlugResult<String> {
        let mut rendered = to_pretty_json(self)?;
        rendered.push('\n');
        Ok(rendered)
    }
}

fn string_items(value: Option<&Value>) -> Vec<String> {
    value
        .and_then(Value::as_array)
        .map(|items| {
            items
                .iter()
                .filter_map(|item| item.as_str().map(str::to_string))
                .collect()
        })
        .unwrap_or_default()
}

/// Edit `map[key]` as an array, replacing a missing or non-array value
fn with_array<R>(
    map: &mut Map<String, Value>,
    key: &str,
    edit: impl FnOnce(&mut Vec<Value>) -> R,
) -> R {
    let slot = map.entry(key).or_insert(Value::Null);
    let mut items = match slot.take() {
        Value::Array(items) => items,
        _ => Vec::new(),
    };
    let result = edit(&mut items);
    *slot = Value::Array(items);
    result
}

/// Edit `map[key]` as an object, replacing a missing or non-object value
fn with_object<R>(
    map: &mut Map<String, Value>,
    key: &str,
    edit: impl FnOnce(&mut Map<String, Value>) -> R,
) -> R {
    let slot = map.entry(key).or_insert(Value::Null);
    let mut object = match slot.take() {
        Value::Object(object) => object,
        _ => Map::new(),
    };
    let result = edit(&mut object);
    *slot = Value::Object(object);
    result
}

pub fn parse_manifest(json_str: &str) -> BnPlugResult<Manifest> {
    let manifest: Manifest = serde_json::from_str(json_str)?;
    Ok(manifest)
}

/// Describes the keys bnplug reads and writes; any other key is allowed
#[allow(dead_code)]
#[derive(JsonSchema)]
#[schemars(rename = "Manifest")]
struct ManifestSchema {
    name: Option<String>,
    version: Option<String>,
    description: Option<String>,
    author: Option<String>,
    /// License name, or a `{"name", "text"}` object in metadata v2
    license: Option<Value>,
    /// Full license text shown by the plugin manager
    license_text: Option<String>,
    /// Host build number
    #[schemars(rename = "minimumbinaryninjaversion")]
    minimum_binaryninja_version: Option<Value>,
    /// Plugin category tags (`"core"`, `"ui"`, ...), treated as a set
    #[schemars(rename = "type")]
    plugin_type: Option<Vec<String>>,
    dependencies: Option<DependenciesSchema>,
}

#[allow(dead_code)]
#[derive(JsonSchema)]
#[schemars(rename = "Dependencies")]
struct DependenciesSchema {
    /// pip requirement strings, in order, duplicates allowed
    pip: Option<Vec<String>>,
}

/// JSON schema describing the fields bnplug reads and writes
pub fn manifest_schema() -> BnPlugResult<String> {
    let schema = schemars::schema_for!(ManifestSchema);
    to_pretty_json(&schema)
}
