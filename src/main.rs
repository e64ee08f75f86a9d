//! task-cli - Command-line Task Tracker
//!
//! Create, update, delete and list short text tasks stored in a local
//! JSON file.

use task_cli::cli::{parse_args, Outcome};
use task_cli::error::exit_codes;
use task_cli::output::emit_error;
use tracing_subscriber::{fmt, prelude::*, EnvFilter};

fn main() {
    // Tracing is opt-in via RUST_LOG.
    // Keep startup robust: ignore invalid/huge filters.
    let filter = std::env::var("RUST_LOG")
        .ok()
        .and_then(|raw| {
            let raw = raw.trim();
            if raw.is_empty() || raw.len() > 4096 {
                return None;
            }
            EnvFilter::try_new(raw).ok()
        })
        .unwrap_or_else(|| EnvFilter::new("off"));

    tracing_subscriber::registry()
        .with(fmt::layer().with_writer(std::io::stderr))
        .with(filter)
        .init();

    let cli = match parse_args(std::env::args_os()) {
        Ok(cli) => cli,
        Err(exit) => {
            if exit.to_stderr {
                eprint!("{}", exit.message);
            } else {
                print!("{}", exit.message);
            }
            std::process::exit(exit.code);
        }
    };

    let command = cli.command.name();
    let json = cli.json;
    match cli.run() {
        Ok(Outcome::Completed) => {}
        Ok(Outcome::Cancelled) => {
            tracing::debug!(command, "prompt cancelled");
            std::process::exit(exit_codes::SUCCESS);
        }
        Err(err) => {
            let _ = emit_error(command, &err, json);
            std::process::exit(err.exit_code());
        }
    }
}
