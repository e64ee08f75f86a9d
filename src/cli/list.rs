//! task-cli list command implementation

use std::fmt::Write as _;

use chrono::{DateTime, Local, Utc};

use super::{Outcome, Session, TaskView};
use crate::error::{Error, Result};
use crate::output::{emit_success, HumanOutput};
use crate::task::{Status, Task};

/// Options for `task-cli list`
pub struct ListOptions {
    pub status: Option<String>,
}

#[derive(serde::Serialize)]
struct TaskListOutput {
    total: usize,
    #[serde(skip_serializing_if = "Option::is_none")]
    status: Option<&'static str>,
    tasks: Vec<TaskView>,
}

pub fn run(options: ListOptions, session: &mut Session<'_>) -> Result<Outcome> {
    let filter = options
        .status
        .as_deref()
        .map(str::parse::<Status>)
        .transpose()?;
    let tasks = session.store.load()?;
    let selected = tasks.list(filter);

    let header = match (filter, selected.len()) {
        (None, 0) => "No tasks".to_string(),
        (Some(status), 0) => format!("No {status} tasks"),
        (None, n) => format!("Tasks ({n})"),
        (Some(status), n) => format!("Tasks: {status} ({n})"),
    };
    let mut human = HumanOutput::new(header);
    for task in &selected {
        human.push_line(format_line(task, &session.config.list.date_format)?);
    }
    if tasks.is_empty() {
        human.push_next_step("task-cli add <description>");
    }

    let output = TaskListOutput {
        total: selected.len(),
        status: filter.map(Status::name),
        tasks: selected.into_iter().map(TaskView::from).collect(),
    };

    emit_success(session.output, "list", &output, Some(&human))?;
    Ok(Outcome::Completed)
}

/// `<id> <description> <status> <created> <updated>`
fn format_line(task: &Task, date_format: &str) -> Result<String> {
    Ok(format!(
        "{} {} {} {} {}",
        task.id(),
        task.description(),
        task.status(),
        format_timestamp(task.created_at(), date_format)?,
        format_timestamp(task.updated_at(), date_format)?,
    ))
}

fn format_timestamp(timestamp: DateTime<Utc>, date_format: &str) -> Result<String> {
    let mut rendered = String::new();
    write!(
        rendered,
        "{}",
        timestamp.with_timezone(&Local).format(date_format)
    )
    .map_err(|_| Error::InvalidConfig(format!("invalid list.date_format '{date_format}'")))?;
    Ok(rendered)
}
