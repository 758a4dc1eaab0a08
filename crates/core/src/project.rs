//! Files inside the plugin project directory.

use std::path::{Path, PathBuf};

use tracing::debug;

use crate::configs::manifest::{parse_manifest, Manifest};
use crate::types::{BnPlugError, BnPlugResult};

pub const MANIFEST_FILE: &str = "plugin.json";
pub const REQUIREMENTS_FILE: &str = "requirements.txt";

/// A plugin source tree containing `plugin.json`
#[derive(Debug, Clone)]
pub struct ProjectDir {
    root: PathBuf,
}

impl ProjectDir {
    pub fn new(root: impl Into<PathBuf>) -> Self {
        Self { root: root.into() }
    }

    pub fn root(&self) -> &Path {
        &self.root
    }

    pub fn manifest_path(&self) -> PathBuf {
        self.root.join(MANIFEST_FILE)
    }

    pub fn requirements_path(&self) -> PathBuf {
        self.root.join(REQUIREMENTS_FILE)
    }

    /// Read `plugin.json` from disk
    pub fn load_manifest(&self) -> BnPlugResult<Manifest> {
        let path = self.manifest_path();
        let content = std::fs::read_to_string(&path).map_err(|source| BnPlugError::Read {
            path: path.clone(),
            source,
        })?;

        parse_manifest(&content).map_err(|e| match e {
            BnPlugError::Json(source) => BnPlugError::Parse { path, source },
            other => other,
        })
    }

    /// Rewrite `plugin.json` in full
    pub fn save_manifest(&self, manifest: &Manifest) -> BnPlugResult<()> {
        let path = self.manifest_path();
        let content = manifest.to_json_string()?;
        std::fs::write(&path, content).map_err(|source| BnPlugError::Write {
            path: path.clone(),
            source,
        })?;
        debug!(path = %path.display(), "wrote manifest");
        Ok(())
    }

    /// Regenerate `requirements.txt`, one requirement per line
    pub fn write_requirements(&self, deps: &[String]) -> BnPlugResult<()> {
        let path = self.requirements_path();
        std::fs::write(&path, render_requirements(deps)).map_err(|source| {
            BnPlugError::Write {
                path: path.clone(),
                source,
            }
        })?;
        debug!(path = %path.display(), count = deps.len(), "wrote requirements");
        Ok(())
    }

    pub fn project_name(&self) -> BnPlugResult<String> {
        self.load_manifest()?.name()
    }

    pub fn project_version(&self) -> BnPlugResult<String> {
        self.load_manifest()?.version()
    }
}

pub fn render_requirements(deps: &[String]) -> String {
    deps.iter().map(|dep| format!("{}\n", dep)).collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::configs::manifest::VERSION_KEY;

    fn project_with(manifest: &str) -> (tempfile::TempDir, ProjectDir) {
        let temp_dir = tempfile::tempdir().unwrap();
        std::fs::write(temp_dir.path().join(MANIFEST_FILE), manifest).unwrap();
        let project = ProjectDir::new(temp_dir.path());
        (temp_dir, project)
    }

    #[test]
    fn test_project_name_and_version() {
        let (_temp_dir, project) = project_with(r#"{"name": "Sample", "version": "0.2.1"}"#);
        assert_eq!(project.project_name().unwrap(), "Sample");
        assert_eq!(project.project_version().unwrap(), "0.2.1");
    }

    #[test]
    fn test_name_from_metadata_v2_manifest() {
        let (_temp_dir, project) = project_with(
            r#"{"pluginmetadataversion":2,"name":"Sample","license":{"name":"MIT","text":"..."},"version":"1.0"}"#,
        );
        assert_eq!(project.project_name().unwrap(), "Sample");
        assert_eq!(project.project_version().unwrap(), "1.0");
    }

    #[test]
    fn test_untouched_manifest_survives_save() {
        let content = "{\n    \"pluginmetadataversion\": 2,\n    \"name\": \"Sample\",\n    \"api\": [\n        \"python3\"\n    ],\n    \"version\": \"1.0\"\n}\n";
        let (_temp_dir, project) = project_with(content);
        let manifest = project.load_manifest().unwrap();
        project.save_manifest(&manifest).unwrap();
        assert_eq!(std::fs::read_to_string(project.manifest_path()).unwrap(), content);
    }

    #[test]
    fn test_missing_version_is_an_error() {
        let (_temp_dir, project) = project_with(r#"{"name": "Sample"}"#);
        assert!(matches!(
            project.project_version(),
            Err(BnPlugError::MissingField("version"))
        ));
    }

    #[test]
    fn test_missing_manifest_file() {
        let temp_dir = tempfile::tempdir().unwrap();
        let project = ProjectDir::new(temp_dir.path());
        let err = project.load_manifest().unwrap_err();
        assert!(matches!(err, BnPlugError::Read { .. }));
        assert!(err.to_string().contains(MANIFEST_FILE));
    }

    #[test]
    fn test_malformed_manifest_names_the_file() {
        let (_temp_dir, project) = project_with("{\"name\": ");
        let err = project.load_manifest().unwrap_err();
        assert!(matches!(err, BnPlugError::Parse { .. }));
    }

    #[test]
    fn test_save_then_load() {
        let (_temp_dir, project) = project_with(r#"{"name": "Sample", "api": ["python3"]}"#);
        let mut manifest = project.load_manifest().unwrap();
        manifest.set_text(VERSION_KEY, "1.0");
        project.save_manifest(&manifest).unwrap();

        let reloaded = project.load_manifest().unwrap();
        assert_eq!(reloaded, manifest);
        let raw = std::fs::read_to_string(project.manifest_path()).unwrap();
        assert!(raw.contains("\n    \"api\": [\n        \"python3\"\n    ]"));
    }

    #[test]
    fn test_requirements_are_newline_terminated() {
        let (_temp_dir, project) = project_with("{}");
        project
            .write_requirements(&["foo".to_string(), "bar>=1.0".to_string()])
            .unwrap();
        assert_eq!(
            std::fs::read_to_string(project.requirements_path()).unwrap(),
            "foo\nbar>=1.0\n"
        );

        project.write_requirements(&[]).unwrap();
        assert_eq!(std::fs::read_to_string(project.requirements_path()).unwrap(), "");
    }
}
