//! task-cli - Command-line Task Tracker Library
//!
//! This library provides the core functionality for the task-cli tool:
//! creating, updating, deleting and listing short text tasks kept in a
//! local JSON file.
//!
//! # Core Concepts
//!
//! - **Tasks**: a description, a status (`todo`, `in-progress`, `done`)
//!   and creation/update timestamps, identified by an integer id
//! - **Task list**: the in-memory collection, always sorted by id
//! - **Stores**: load and save the whole collection at once
//! - **Prompts**: ask for arguments left off the command line
//!
//! # Module Organization
//!
//! - `cli`: Command-line interface using clap, one submodule per command
//! - `config`: Configuration loading from `.task-cli.toml`
//! - `error`: Error types and result aliases
//! - `output`: Human and JSON output
//! - `prompt`: Interactive fallback for missing arguments
//! - `repository`: The sorted task collection and its operations
//! - `storage`: File and in-memory stores
//! - `task`: Task record and status

pub mod cli;
pub mod config;
pub mod error;
pub mod output;
pub mod prompt;
pub mod repository;
pub mod storage;
pub mod task;

pub use error::{Error, Result};
