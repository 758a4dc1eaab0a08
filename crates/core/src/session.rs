//! The interactive `setup` loop.
//!
//! Each `set` command is a full read-modify-write of `plugin.json`, so edits
//! made by other tools between commands are picked up. There is no locking;
//! two sessions on the same project can overwrite each other.

use std::io::Write;

use chrono::Datelike;
use tracing::{debug, warn};

use crate::editor::{apply_setting, parse_command, Command, Prompt, Setting, COMMANDS_HELP, SETTINGS_HELP};
use crate::project::ProjectDir;
use crate::types::{BnPlugError, BnPlugResult};

pub const INPUT_PROMPT: &str = "> ";

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SessionState {
    Running,
    Terminated,
}

/// REPL editing the manifest of one project
pub struct SetupSession<'a> {
    project: &'a ProjectDir,
    prompt: &'a mut dyn Prompt,
    out: &'a mut dyn Write,
    year: i32,
    state: SessionState,
}

impl<'a> SetupSession<'a> {
    pub fn new(project: &'a ProjectDir, prompt: &'a mut dyn Prompt, out: &'a mut dyn Write) -> Self {
        Self {
            project,
            prompt,
            out,
            year: chrono::Local::now().year(),
            state: SessionState::Running,
        }
    }

    /// Year stamped into generated license text
    pub fn with_year(mut self, year: i32) -> Self {
        self.year = year;
        self
    }

    pub fn state(&self) -> SessionState {
        self.state
    }

    /// Run until `exit` or end of input
    pub fn run(&mut self) -> BnPlugResult<()> {
        writeln!(self.out, "{}", COMMANDS_HELP)?;

        while self.state == SessionState::Running {
            match self.prompt.ask(INPUT_PROMPT)? {
                Some(line) => {
                    self.handle_line(&line)?;
                }
                None => {
                    debug!("input closed, leaving setup");
                    self.state = SessionState::Terminated;
                }
            }
        }

        Ok(())
    }

    /// Process one line of input.
    ///
    /// Malformed commands are reported and the session keeps running; file
    /// and JSON errors end it.
    pub fn handle_line(&mut self, line: &str) -> BnPlugResult<SessionState> {
        match parse_command(line) {
            Ok(Command::Exit) => self.state = SessionState::Terminated,
            Ok(Command::Help) => writeln!(self.out, "{}", SETTINGS_HELP)?,
            Ok(Command::Nothing) => {}
            Ok(Command::Set(setting)) => self.apply(&setting)?,
            Err(BnPlugError::Command(message)) => {
                warn!(input = line, "rejected setup command");
                writeln!(self.out, "{}", message)?;
            }
            Err(e) => return Err(e),
        }
        Ok(self.state)
    }

    fn apply(&mut self, setting: &Setting) -> BnPlugResult<()> {
        let manifest = self.project.load_manifest()?;
        let outcome = apply_setting(manifest, setting, &mut *self.prompt, self.year)?;

        if let Some(requirements) = &outcome.requirements {
            self.project.write_requirements(requirements)?;
        }
        self.project.save_manifest(&outcome.manifest)?;

        debug!(?setting, "applied setting");
        writeln!(self.out, "{}", outcome.message)?;
        Ok(())
    }
}
