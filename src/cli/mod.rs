//! Command-line interface for task-cli
//!
//! This module defines the CLI structure using clap derive macros and the
//! dispatcher that runs one command per invocation. Each command is
//! implemented in its own submodule.

use std::ffi::OsString;
use std::path::PathBuf;

use chrono::{DateTime, Utc};
use clap::error::ErrorKind;
use clap::{CommandFactory, Parser, Subcommand};
use serde::Serialize;

use crate::config::Config;
use crate::error::{exit_codes, Error, Result};
use crate::output::{emit_success, HumanOutput, OutputOptions};
use crate::prompt::{Answer, LinePrompt, Prompt};
use crate::storage::{FileStore, Store};
use crate::task::Task;

/// Unwrap a prompt answer, or stop the command when the user quit.
macro_rules! provided_or_cancel {
    ($answer:expr) => {
        match $answer {
            $crate::prompt::Answer::Provided(value) => value,
            $crate::prompt::Answer::Cancelled => return Ok($crate::cli::Outcome::Cancelled),
        }
    };
}

mod add;
mod delete;
mod list;
mod mark;
mod update;

/// task-cli - track short text tasks
///
/// Tasks are kept in a JSON file in the current directory. Commands that
/// need an id or a description ask for it when it is left out.
#[derive(Parser, Debug)]
#[command(name = "task-cli")]
#[command(author, version, about, long_about = None)]
#[command(propagate_version = true)]
#[command(arg_required_else_help = true)]
#[command(after_help = "By default, tasks have the status \"todo\".")]
pub struct Cli {
    /// Task file (defaults to storage.path from .task-cli.toml, then tasks.json)
    #[arg(long, global = true, env = "TASK_CLI_FILE")]
    pub file: Option<PathBuf>,

    /// Output in JSON format
    #[arg(long, global = true)]
    pub json: bool,

    /// Suppress non-essential output
    #[arg(short, long, global = true)]
    pub quiet: bool,

    #[command(subcommand)]
    pub command: Commands,
}

/// Available subcommands
#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Create a new task
    Add {
        /// Task description (words are joined with spaces)
        description: Vec<String>,
    },

    /// Replace a task's description
    Update {
        /// Task id
        id: Option<String>,

        /// New description (words are joined with spaces)
        description: Vec<String>,
    },

    /// Change a task's status to "in-progress"
    MarkInProgress {
        /// Task id
        id: Option<String>,
    },

    /// Change a task's status to "done"
    MarkDone {
        /// Task id
        id: Option<String>,
    },

    /// Delete a task
    Delete {
        /// Task id
        id: Option<String>,
    },

    /// Display tasks, optionally only those with one status
    List {
        /// Status filter: todo, in-progress, done
        status: Option<String>,
    },
}

/// How a command ended when it did not fail
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Outcome {
    Completed,
    /// The user quit an interactive prompt
    Cancelled,
}

/// Parsing ended without a command to run (help, version, usage error)
#[derive(Debug, Clone)]
pub struct ParseExit {
    pub message: String,
    pub code: i32,
    pub to_stderr: bool,
}

/// Parse arguments, turning help requests and usage errors into a [`ParseExit`].
///
/// Help, `help` and a bare invocation exit 0. Anything unrecognized prints
/// the error followed by the full usage and exits 1.
pub fn parse_args<I, T>(args: I) -> std::result::Result<Cli, ParseExit>
where
    I: IntoIterator<Item = T>,
    T: Into<OsString> + Clone,
{
    Cli::try_parse_from(args).map_err(|err| match err.kind() {
        ErrorKind::DisplayHelp
        | ErrorKind::DisplayVersion
        | ErrorKind::DisplayHelpOnMissingArgumentOrSubcommand => ParseExit {
            message: err.render().to_string(),
            code: exit_codes::SUCCESS,
            to_stderr: false,
        },
        _ => ParseExit {
            message: format!("{}\n{}", err.render(), Cli::command().render_help()),
            code: exit_codes::FAILURE,
            to_stderr: true,
        },
    })
}

/// Everything a command needs for one invocation
pub struct Session<'a> {
    pub store: &'a dyn Store,
    pub prompt: &'a mut dyn Prompt,
    pub config: &'a Config,
    pub output: OutputOptions,
}

impl Cli {
    /// Execute the CLI command against the working directory
    pub fn run(self) -> Result<Outcome> {
        let cwd = std::env::current_dir()?;
        let config = Config::load_from_dir(&cwd);
        let path = self
            .file
            .clone()
            .unwrap_or_else(|| PathBuf::from(&config.storage.path));
        let store = FileStore::new(path);
        let mut prompt = LinePrompt::stdio(config.prompt.quit.clone());

        let mut session = Session {
            store: &store,
            prompt: &mut prompt,
            config: &config,
            output: OutputOptions {
                json: self.json,
                quiet: self.quiet,
            },
        };
        self.command.run(&mut session)
    }
}

impl Commands {
    /// Name as typed on the command line
    pub fn name(&self) -> &'static str {
        match self {
            Commands::Add { .. } => "add",
            Commands::Update { .. } => "update",
            Commands::MarkInProgress { .. } => "mark-in-progress",
            Commands::MarkDone { .. } => "mark-done",
            Commands::Delete { .. } => "delete",
            Commands::List { .. } => "list",
        }
    }

    /// Run exactly one command: load, at most one change, save if changed.
    pub fn run(self, session: &mut Session<'_>) -> Result<Outcome> {
        tracing::debug!(command = self.name(), "dispatching");
        match self {
            Commands::Add { description } => add::run(add::AddOptions { description }, session),
            Commands::Update { id, description } => {
                update::run(update::UpdateOptions { id, description }, session)
            }
            Commands::MarkInProgress { id } => mark::run(
                mark::MarkOptions {
                    id,
                    status: crate::task::Status::InProgress,
                },
                session,
            ),
            Commands::MarkDone { id } => mark::run(
                mark::MarkOptions {
                    id,
                    status: crate::task::Status::Done,
                },
                session,
            ),
            Commands::Delete { id } => delete::run(delete::DeleteOptions { id }, session),
            Commands::List { status } => list::run(list::ListOptions { status }, session),
        }
    }
}

/// Task as shown in JSON output
#[derive(Debug, Serialize)]
struct TaskView {
    id: u64,
    description: String,
    status: &'static str,
    created_at: DateTime<Utc>,
    updated_at: DateTime<Utc>,
}

impl From<&Task> for TaskView {
    fn from(task: &Task) -> Self {
        Self {
            id: task.id(),
            description: task.description().to_string(),
            status: task.status().name(),
            created_at: task.created_at(),
            updated_at: task.updated_at(),
        }
    }
}

fn parse_id(raw: &str) -> Result<u64> {
    raw.trim()
        .parse()
        .map_err(|_| Error::InvalidInput(format!("invalid task id '{raw}'")))
}

/// Id from the command line, or asked for when it was left out.
fn resolve_id(session: &mut Session<'_>, arg: Option<String>) -> Result<Answer<u64>> {
    match arg {
        Some(raw) => parse_id(&raw).map(Answer::Provided),
        None => session.prompt.id("Enter task id"),
    }
}

/// Description from the command line words, or asked for when none were given.
fn resolve_description(
    session: &mut Session<'_>,
    words: Vec<String>,
    message: &str,
) -> Result<Answer<String>> {
    let answer = if words.is_empty() {
        session.prompt.text(message)?
    } else {
        Answer::Provided(words.join(" "))
    };

    match answer {
        Answer::Provided(text) => {
            let text = text.trim();
            if text.is_empty() {
                return Err(Error::InvalidInput(
                    "description cannot be empty".to_string(),
                ));
            }
            Ok(Answer::Provided(text.to_string()))
        }
        Answer::Cancelled => Ok(Answer::Cancelled),
    }
}

/// Commands that act on an existing task stop early on an empty collection.
fn nothing_to_do(session: &Session<'_>, command: &str) -> Result<Outcome> {
    #[derive(Serialize)]
    struct EmptyReport {
        total: usize,
    }

    let human = HumanOutput::new("No tasks, nothing to do");
    emit_success(
        session.output,
        command,
        &EmptyReport { total: 0 },
        Some(&human),
    )?;
    Ok(Outcome::Completed)
}
