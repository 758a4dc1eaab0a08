use anyhow::{Context, Result};
use bnplug_core::editor::Prompt;
use bnplug_core::session::SetupSession;
use bnplug_core::{BnPlugError, BnPlugResult, ProjectDir};
use colored::*;
use rustyline::error::ReadlineError;
use rustyline::DefaultEditor;
use tracing::debug;

/// Line editor backed prompt for interactive use
struct TerminalPrompt {
    editor: DefaultEditor,
}

impl TerminalPrompt {
    fn new() -> Result<Self> {
        let editor = DefaultEditor::new().context("Failed to initialize line editor")?;
        Ok(Self { editor })
    }
}

impl Prompt for TerminalPrompt {
    fn ask(&mut self, message: &str) -> BnPlugResult<Option<String>> {
        match self.editor.readline(message) {
            Ok(line) => {
                if !line.trim().is_empty() {
                    if let Err(e) = self.editor.add_history_entry(line.as_str()) {
                        debug!(error = %e, "could not record history entry");
                    }
                }
                Ok(Some(line))
            }
            // Ctrl+C / Ctrl+D end the session like `exit`
            Err(ReadlineError::Interrupted) | Err(ReadlineError::Eof) => Ok(None),
            Err(ReadlineError::Io(e)) => Err(BnPlugError::Io(e)),
            Err(e) => Err(BnPlugError::Io(std::io::Error::other(e.to_string()))),
        }
    }
}

pub fn execute(project: &ProjectDir) -> Result<()> {
    println!(
        "{} {}",
        "Editing".bold().green(),
        project.manifest_path().display().to_string().cyan()
    );

    let mut prompt = TerminalPrompt::new()?;
    let mut stdout = std::io::stdout();
    SetupSession::new(project, &mut prompt, &mut stdout)
        .run()
        .with_context(|| format!("Setup failed for {}", project.manifest_path().display()))?;

    Ok(())
}
