use std::io::Write;

use anyhow::{Context, Result};
use bnplug_core::configs::manifest::manifest_schema;
use bnplug_core::ProjectDir;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ProjectQuery {
    Name,
    Version,
    Schema,
}

pub fn execute(query: ProjectQuery, project: &ProjectDir, out: &mut dyn Write) -> Result<()> {
    let value = match query {
        ProjectQuery::Name => project
            .project_name()
            .with_context(|| format!("Failed to get project name from {}", project.manifest_path().display()))?,
        ProjectQuery::Version => project
            .project_version()
            .with_context(|| format!("Failed to get project version from {}", project.manifest_path().display()))?,
        ProjectQuery::Schema => manifest_schema()?,
    };

    writeln!(out, "{}", value)?;
    Ok(())
}
