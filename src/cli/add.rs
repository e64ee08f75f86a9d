//! task-cli add command implementation

use super::{resolve_description, Outcome, Session, TaskView};
use crate::error::Result;
use crate::output::{emit_success, HumanOutput};

/// Options for `task-cli add`
pub struct AddOptions {
    pub description: Vec<String>,
}

pub fn run(options: AddOptions, session: &mut Session<'_>) -> Result<Outcome> {
    let mut tasks = session.store.load()?;
    let description = provided_or_cancel!(resolve_description(
        session,
        options.description,
        "Enter the task name"
    )?);

    let task = tasks.add(description)?;
    let view = TaskView::from(task);
    session.store.save(&tasks)?;

    let mut human = HumanOutput::new(format!("Task added (ID: {})", view.id));
    human.push_next_step(format!("task-cli mark-in-progress {}", view.id));

    emit_success(session.output, "add", &view, Some(&human))?;
    Ok(Outcome::Completed)
}
