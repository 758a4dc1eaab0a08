//! Manifest editing commands.
//!
//! Parsing and applying commands is side-effect free: [`apply_setting`]
//! takes a manifest and returns the edited one plus the message to show.
//! The only interaction, asking for the MIT license author, goes through
//! the injected [`Prompt`].

use std::collections::VecDeque;

use crate::configs::manifest::{
    Manifest, AUTHOR_KEY, DESCRIPTION_KEY, LICENSE_KEY, LICENSE_TEXT_KEY, MIN_VERSION_KEY, NAME_KEY,
    VERSION_KEY,
};
use crate::license::{missing_template_message, standard_license_text};
use crate::types::{BnPlugError, BnPlugResult};

pub const AUTHOR_PROMPT: &str = "Author for License Text: ";

pub const COMMANDS_HELP: &str =
    "Commands:\n\thelp - List project settings\n\tset <setting> <value> - Set a setting\n\texit - Exit";

pub const SETTINGS_HELP: &str = "Settings:\n\t - name\n\t - license\n\t - author\n\t - version\n\t - description\n\t - minvers\n\t - deps add/remove (comma separated)\n\t - is_ui_plugin";

/// Source of interactive answers
pub trait Prompt {
    /// Show `message` and read one line; `None` once input is exhausted
    fn ask(&mut self, message: &str) -> BnPlugResult<Option<String>>;
}

/// Prompt answering from a fixed list of lines
#[derive(Debug, Default, Clone)]
pub struct ScriptedPrompt {
    lines: VecDeque<String>,
    asked: Vec<String>,
}

impl ScriptedPrompt {
    pub fn new<I, S>(lines: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        Self {
            lines: lines.into_iter().map(Into::into).collect(),
            asked: Vec::new(),
        }
    }

    /// Messages shown so far, in order
    pub fn asked(&self) -> &[String] {
        &self.asked
    }
}

impl Prompt for ScriptedPrompt {
    fn ask(&mut self, message: &str) -> BnPlugResult<Option<String>> {
        self.asked.push(message.to_string());
        Ok(self.lines.pop_front())
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Command {
    Help,
    Exit,
    /// Blank input
    Nothing,
    Set(Setting),
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Setting {
    Name(String),
    License(String),
    Author(String),
    Version(String),
    Description(String),
    MinVersion(String),
    Deps(DepsEdit),
    UiPlugin(bool),
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum DepsEdit {
    Add(Vec<String>),
    Remove(Vec<String>),
    /// `set deps a,b` with no verb replaces the whole list
    Replace(Vec<String>),
}

/// Result of applying one setting
#[derive(Debug, Clone, PartialEq)]
pub struct EditOutcome {
    pub manifest: Manifest,
    pub message: String,
    /// New `requirements.txt` entries when the dependency list changed
    pub requirements: Option<Vec<String>>,
}

/// Split a comma separated list, trimming entries and dropping empty ones
pub fn split_list(value: &str) -> Vec<String> {
    value
        .split(',')
        .map(str::trim)
        .filter(|entry| !entry.is_empty())
        .map(str::to_string)
        .collect()
}

/// Parse one line of REPL input
pub fn parse_command(line: &str) -> BnPlugResult<Command> {
    let line = line.trim();
    match line {
        "" => return Ok(Command::Nothing),
        "help" => return Ok(Command::Help),
        "exit" => return Ok(Command::Exit),
        _ => {}
    }

    let mut parts = line.splitn(3, ' ');
    if parts.next() != Some("set") {
        return Err(BnPlugError::Command(format!(
            "Unknown command '{}', type 'help' for a list of settings",
            line
        )));
    }

    let setting = parts.next().unwrap_or_default();
    let value = parts.next().unwrap_or_default().to_string();

    let setting = match setting {
        "name" => Setting::Name(value),
        "license" => Setting::License(value),
        "author" => Setting::Author(value),
        "version" => Setting::Version(value),
        "description" => Setting::Description(value),
        "minvers" => Setting::MinVersion(value),
        "deps" => Setting::Deps(parse_deps(&value)),
        "is_ui_plugin" => Setting::UiPlugin(value.trim().eq_ignore_ascii_case("true")),
        "" => {
            return Err(BnPlugError::Command(
                "Usage: set <setting> <value>".to_string(),
            ))
        }
        other => {
            return Err(BnPlugError::Command(format!(
                "Unknown setting '{}', type 'help' for a list of settings",
                other
            )))
        }
    };

    Ok(Command::Set(setting))
}

fn parse_deps(value: &str) -> DepsEdit {
    let value = value.trim();
    let (verb, rest) = value.split_once(char::is_whitespace).unwrap_or((value, ""));
    match verb {
        "add" => DepsEdit::Add(split_list(rest)),
        "remove" => DepsEdit::Remove(split_list(rest)),
        _ => DepsEdit::Replace(split_list(value)),
    }
}

/// Apply `setting` to `manifest`.
///
/// `year` is stamped into generated license text.
pub fn apply_setting(
    mut manifest: Manifest,
    setting: &Setting,
    prompt: &mut dyn Prompt,
    year: i32,
) -> BnPlugResult<EditOutcome> {
    let mut requirements = None;

    let message = match setting {
        Setting::Name(value) => set_text(&mut manifest, NAME_KEY, value),
        Setting::License(value) => {
            let (text, message) = license_text(&manifest, value, prompt, year)?;
            manifest.set_text(LICENSE_KEY, value.as_str());
            manifest.set_text(LICENSE_TEXT_KEY, text);
            message
        }
        Setting::Author(value) => set_text(&mut manifest, AUTHOR_KEY, value),
        Setting::Version(value) => set_text(&mut manifest, VERSION_KEY, value),
        Setting::Description(value) => set_text(&mut manifest, DESCRIPTION_KEY, value),
        Setting::MinVersion(value) => set_text(&mut manifest, MIN_VERSION_KEY, value),
        Setting::Deps(edit) => {
            match edit {
                DepsEdit::Add(deps) => manifest.add_pip_dependencies(deps.iter().cloned()),
                DepsEdit::Remove(deps) => manifest.remove_pip_dependencies(deps),
                DepsEdit::Replace(deps) => manifest.set_pip_dependencies(deps.iter().cloned()),
            }
            let deps = manifest.pip_dependencies();
            let message = format!("pip dependencies: [{}]", deps.join(", "));
            requirements = Some(deps);
            message
        }
        Setting::UiPlugin(enabled) => {
            manifest.set_ui_plugin(*enabled);
            format!("is_ui_plugin set to {}", enabled)
        }
    };

    Ok(EditOutcome {
        manifest,
        message,
        requirements,
    })
}

fn set_text(manifest: &mut Manifest, key: &str, value: &str) -> String {
    manifest.set_text(key, value);
    format!("{} set to '{}'", key, value)
}

fn license_text(
    manifest: &Manifest,
    license_name: &str,
    prompt: &mut dyn Prompt,
    year: i32,
) -> BnPlugResult<(String, String)> {
    if !crate::license::has_embedded_template(license_name) {
        return Ok((String::new(), missing_template_message(license_name)));
    }

    let answer = prompt.ask(AUTHOR_PROMPT)?.unwrap_or_default();
    let author = match answer.trim() {
        "" => manifest.author().unwrap_or_default(),
        typed => typed.to_string(),
    };

    let text = standard_license_text(license_name, &author, year).unwrap_or_default();
    Ok((text, format!("license set to '{}'", license_name)))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::configs::manifest::parse_manifest;

    fn sample() -> Manifest {
        parse_manifest(
            r#"{
                "name": "Sample",
                "version": "1.0.0",
                "author": "Original Author",
                "type": ["core"],
                "dependencies": {"pip": ["requests"]}
            }"#,
        )
        .unwrap()
    }

    fn apply(manifest: Manifest, line: &str, prompt: &mut ScriptedPrompt) -> EditOutcome {
        match parse_command(line).unwrap() {
            Command::Set(setting) => apply_setting(manifest, &setting, prompt, 2026).unwrap(),
            other => panic!("expected a set command, got {:?}", other),
        }
    }

    #[test]
    fn test_parse_basic_commands() {
        assert_eq!(parse_command("help").unwrap(), Command::Help);
        assert_eq!(parse_command("  exit ").unwrap(), Command::Exit);
        assert_eq!(parse_command("").unwrap(), Command::Nothing);
    }

    #[test]
    fn test_parse_keeps_spaces_in_value() {
        assert_eq!(
            parse_command("set description Finds  bugs fast").unwrap(),
            Command::Set(Setting::Description("Finds  bugs fast".to_string()))
        );
    }

    #[test]
    fn test_parse_minvers_and_ui_flag() {
        assert_eq!(
            parse_command("set minvers 3164").unwrap(),
            Command::Set(Setting::MinVersion("3164".to_string()))
        );
        assert_eq!(
            parse_command("set is_ui_plugin TRUE").unwrap(),
            Command::Set(Setting::UiPlugin(true))
        );
        assert_eq!(
            parse_command("set is_ui_plugin no").unwrap(),
            Command::Set(Setting::UiPlugin(false))
        );
    }

    #[test]
    fn test_parse_deps_variants() {
        assert_eq!(
            parse_command("set deps add foo, bar").unwrap(),
            Command::Set(Setting::Deps(DepsEdit::Add(vec![
                "foo".to_string(),
                "bar".to_string()
            ])))
        );
        assert_eq!(
            parse_command("set deps remove foo").unwrap(),
            Command::Set(Setting::Deps(DepsEdit::Remove(vec!["foo".to_string()])))
        );
        assert_eq!(
            parse_command("set deps lief,capstone").unwrap(),
            Command::Set(Setting::Deps(DepsEdit::Replace(vec![
                "lief".to_string(),
                "capstone".to_string()
            ])))
        );
    }

    #[test]
    fn test_parse_rejects_unknown_input() {
        assert!(matches!(parse_command("set colour red"), Err(BnPlugError::Command(_))));
        assert!(matches!(parse_command("set"), Err(BnPlugError::Command(_))));
        assert!(matches!(parse_command("frobnicate"), Err(BnPlugError::Command(_))));
    }

    #[test]
    fn test_set_name_leaves_other_fields() {
        let before = sample();
        let outcome = apply(before.clone(), "set name Renamed", &mut ScriptedPrompt::default());

        assert_eq!(outcome.manifest.name().unwrap(), "Renamed");
        let mut expected = before;
        expected.set_text(NAME_KEY, "Renamed");
        assert_eq!(outcome.manifest, expected);
        assert!(outcome.requirements.is_none());
    }

    #[test]
    fn test_set_mit_license_prompts_for_author() {
        let mut prompt = ScriptedPrompt::new(["Jane Doe"]);
        let outcome = apply(sample(), "set license MIT", &mut prompt);

        assert_eq!(prompt.asked(), [AUTHOR_PROMPT]);
        assert_eq!(outcome.manifest.text(LICENSE_KEY).as_deref(), Some("MIT"));
        let text = outcome.manifest.text(LICENSE_TEXT_KEY).unwrap();
        assert!(text.contains("Jane Doe"));
        assert!(text.contains("2026"));
    }

    #[test]
    fn test_blank_author_answer_uses_manifest_author() {
        let mut prompt = ScriptedPrompt::new([""]);
        let outcome = apply(sample(), "set license MIT", &mut prompt);
        assert!(outcome
            .manifest
            .text(LICENSE_TEXT_KEY)
            .unwrap()
            .contains("Copyright 2026 Original Author"));
    }

    #[test]
    fn test_unknown_license_stores_empty_text() {
        let mut prompt = ScriptedPrompt::default();
        let outcome = apply(sample(), "set license Apache-2.0", &mut prompt);

        assert!(prompt.asked().is_empty());
        assert_eq!(outcome.manifest.text(LICENSE_KEY).as_deref(), Some("Apache-2.0"));
        assert_eq!(outcome.manifest.text(LICENSE_TEXT_KEY).as_deref(), Some(""));
        assert!(outcome.message.contains("not embedded"));
    }

    #[test]
    fn test_simple_field_setters() {
        let mut prompt = ScriptedPrompt::default();
        let manifest = apply(sample(), "set author Someone Else", &mut prompt).manifest;
        let manifest = apply(manifest, "set version 2.0.0", &mut prompt).manifest;
        let manifest = apply(manifest, "set description Does things", &mut prompt).manifest;
        let manifest = apply(manifest, "set minvers 4000", &mut prompt).manifest;

        assert_eq!(manifest.author().as_deref(), Some("Someone Else"));
        assert_eq!(manifest.version().unwrap(), "2.0.0");
        assert_eq!(manifest.text(DESCRIPTION_KEY).as_deref(), Some("Does things"));
        assert_eq!(manifest.get(MIN_VERSION_KEY), Some(&serde_json::json!("4000")));
    }

    #[test]
    fn test_deps_add_is_incremental() {
        let outcome = apply(sample(), "set deps add foo,bar", &mut ScriptedPrompt::default());
        assert_eq!(outcome.manifest.pip_dependencies(), ["requests", "foo", "bar"]);
        assert_eq!(
            outcome.requirements,
            Some(vec!["requests".to_string(), "foo".to_string(), "bar".to_string()])
        );
    }

    #[test]
    fn test_deps_remove_keeps_the_rest() {
        // Removing must not replace the list with the removed names.
        let mut prompt = ScriptedPrompt::default();
        let manifest = apply(sample(), "set deps add foo,bar", &mut prompt).manifest;
        let outcome = apply(manifest, "set deps remove foo", &mut prompt);
        assert_eq!(outcome.manifest.pip_dependencies(), ["requests", "bar"]);
    }

    #[test]
    fn test_deps_add_does_not_deduplicate() {
        let outcome = apply(sample(), "set deps add requests", &mut ScriptedPrompt::default());
        assert_eq!(outcome.manifest.pip_dependencies(), ["requests", "requests"]);
    }

    #[test]
    fn test_deps_replace() {
        let outcome = apply(sample(), "set deps lief", &mut ScriptedPrompt::default());
        assert_eq!(outcome.manifest.pip_dependencies(), ["lief"]);
    }

    #[test]
    fn test_ui_plugin_toggle() {
        let mut prompt = ScriptedPrompt::default();
        let once = apply(sample(), "set is_ui_plugin true", &mut prompt).manifest;
        let twice = apply(once.clone(), "set is_ui_plugin True", &mut prompt).manifest;
        assert_eq!(once, twice);
        assert_eq!(twice.plugin_types(), ["core", "ui"]);

        let removed = apply(twice, "set is_ui_plugin false", &mut prompt).manifest;
        assert_eq!(removed.plugin_types(), ["core"]);
        let again = apply(removed.clone(), "set is_ui_plugin false", &mut prompt).manifest;
        assert_eq!(again, removed);
    }

    #[test]
    fn test_set_replaces_values_of_any_type() {
        let manifest = parse_manifest(
            r#"{
                "pluginmetadataversion": 2,
                "license": {"name": "MIT", "text": "Copyright 2024 Dev"},
                "version": 3
            }"#,
        )
        .unwrap();
        let mut prompt = ScriptedPrompt::default();
        let manifest = apply(manifest, "set license GPL-3.0", &mut prompt).manifest;
        let manifest = apply(manifest, "set version 1.1", &mut prompt).manifest;

        assert_eq!(manifest.get(LICENSE_KEY), Some(&serde_json::json!("GPL-3.0")));
        assert_eq!(manifest.get(VERSION_KEY), Some(&serde_json::json!("1.1")));
        assert_eq!(
            manifest.keys().collect::<Vec<_>>(),
            ["pluginmetadataversion", "license", "version", "license_text"]
        );
    }

    #[test]
    fn test_split_list_drops_blanks() {
        assert_eq!(split_list(" a , ,b,"), vec!["a".to_string(), "b".to_string()]);
        assert!(split_list("").is_empty());
    }
}
