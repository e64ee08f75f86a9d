//! task-cli mark-in-progress / mark-done command implementation

use super::{nothing_to_do, resolve_id, Outcome, Session, TaskView};
use crate::error::Result;
use crate::output::{emit_success, HumanOutput};
use crate::task::Status;

/// Options for `task-cli mark-in-progress` and `task-cli mark-done`
pub struct MarkOptions {
    pub id: Option<String>,
    pub status: Status,
}

pub fn run(options: MarkOptions, session: &mut Session<'_>) -> Result<Outcome> {
    let command = match options.status {
        Status::Done => "mark-done",
        _ => "mark-in-progress",
    };

    let mut tasks = session.store.load()?;
    if tasks.is_empty() {
        return nothing_to_do(session, command);
    }

    let id = provided_or_cancel!(resolve_id(session, options.id)?);
    let view = TaskView::from(tasks.update_status(id, options.status)?);
    session.store.save(&tasks)?;

    let human = HumanOutput::new(format!("Task {id} marked {}", options.status));
    emit_success(session.output, command, &view, Some(&human))?;
    Ok(Outcome::Completed)
}
