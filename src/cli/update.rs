//! task-cli update command implementation

use super::{nothing_to_do, resolve_description, resolve_id, Outcome, Session, TaskView};
use crate::error::{Error, Result};
use crate::output::{emit_success, HumanOutput};

/// Options for `task-cli update`
pub struct UpdateOptions {
    pub id: Option<String>,
    pub description: Vec<String>,
}

pub fn run(options: UpdateOptions, session: &mut Session<'_>) -> Result<Outcome> {
    let mut tasks = session.store.load()?;
    if tasks.is_empty() {
        return nothing_to_do(session, "update");
    }

    let id = provided_or_cancel!(resolve_id(session, options.id)?);
    if tasks.get(id).is_none() {
        return Err(Error::TaskNotFound(id));
    }
    let description = provided_or_cancel!(resolve_description(
        session,
        options.description,
        "Enter task description"
    )?);

    let view = TaskView::from(tasks.update_description(id, description)?);
    session.store.save(&tasks)?;

    let mut human = HumanOutput::new(format!("Task {id} updated"));
    human.push_summary("Description", view.description.clone());

    emit_success(session.output, "update", &view, Some(&human))?;
    Ok(Outcome::Completed)
}
