use std::io::Write;
use std::path::PathBuf;
use std::process::ExitCode;

use anyhow::Result;
use bnplug_core::configs::env::EnvConfig;
use bnplug_core::{BnPlugError, ProjectDir};
use clap::{ArgGroup, Parser};
use colored::*;

mod commands;
mod logging;

use commands::find::FindTarget;
use commands::project::ProjectQuery;

/// bnplug - build utilities for Binary Ninja plugins
#[derive(Parser)]
#[command(name = "bnplug")]
#[command(about = "Build utils for Binary Ninja plugins")]
#[command(version)]
#[command(group(ArgGroup::new("action").required(true).multiple(false)))]
struct Cli {
    /// Plugin source directory containing plugin.json.
    ///
    /// Defaults to the current directory, not the directory of the calling
    /// script; build scripts run from elsewhere must pass it.
    #[arg(short, long, default_value = ".")]
    project_dir: PathBuf,

    /// Log resolution and file activity to stderr
    #[arg(short, long)]
    verbose: bool,

    /// Find the Binary Ninja install directory
    #[arg(long, group = "action")]
    find_binaryninja: bool,

    /// Find the plugin install directory
    #[arg(long, group = "action")]
    find_plugin_install_dir: bool,

    /// Find the Python interpreter
    #[arg(long, group = "action")]
    find_python_interpreter: bool,

    /// Find the Python home directory
    #[arg(long, group = "action")]
    find_pythonhome: bool,

    /// Get the project name
    #[arg(long, group = "action")]
    get_project_name: bool,

    /// Get the project version
    #[arg(long, group = "action")]
    get_project_version: bool,

    /// Print the settings.json file
    #[arg(long, group = "action")]
    print_settings_json: bool,

    /// Print the JSON schema of plugin.json
    #[arg(long, group = "action")]
    print_manifest_schema: bool,

    /// Setup the project
    #[arg(long, group = "action")]
    setup: bool,
}

/// The single action selected on the command line
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Action {
    Find(FindTarget),
    Project(ProjectQuery),
    PrintSettings,
    Setup,
}

impl Cli {
    fn action(&self) -> Action {
        if self.find_binaryninja {
            Action::Find(FindTarget::BinaryNinja)
        } else if self.find_plugin_install_dir {
            Action::Find(FindTarget::PluginInstallDir)
        } else if self.print_settings_json {
            Action::PrintSettings
        } else if self.find_python_interpreter {
            Action::Find(FindTarget::PythonInterpreter)
        } else if self.find_pythonhome {
            Action::Find(FindTarget::PythonHome)
        } else if self.get_project_name {
            Action::Project(ProjectQuery::Name)
        } else if self.get_project_version {
            Action::Project(ProjectQuery::Version)
        } else if self.print_manifest_schema {
            Action::Project(ProjectQuery::Schema)
        } else {
            Action::Setup
        }
    }
}

fn run(cli: &Cli) -> Result<()> {
    let env = EnvConfig::from_env();
    let project = ProjectDir::new(&cli.project_dir);
    let stdout = std::io::stdout();
    let mut out = stdout.lock();

    tracing::debug!(os = %env.os, project = %project.root().display(), action = ?cli.action(), "dispatching");

    match cli.action() {
        Action::Find(target) => commands::find::execute(target, &env, &mut out),
        Action::Project(query) => commands::project::execute(query, &project, &mut out),
        Action::PrintSettings => commands::settings::execute(&env, &mut out),
        Action::Setup => {
            drop(out);
            commands::setup::execute(&project)
        }
    }
}

/// Print a failed run's error and pick the exit status.
///
/// Guidance goes to `out` (stdout), where the caller's build script reads
/// our answer; anything else is reported on stderr.
fn report(err: &anyhow::Error, out: &mut dyn Write) -> ExitCode {
    match err.downcast_ref::<BnPlugError>() {
        Some(guidance) if guidance.is_fatal_guidance() => {
            if let Err(e) = writeln!(out, "{}", guidance) {
                tracing::debug!(error = %e, "could not print guidance");
            }
        }
        _ => eprintln!("{} {:#}", "error:".red().bold(), err),
    }
    ExitCode::FAILURE
}

fn main() -> ExitCode {
    let cli = Cli::parse();
    logging::init_tracing(cli.verbose);

    match run(&cli) {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => report(&e, &mut std::io::stdout()),
    }
}
