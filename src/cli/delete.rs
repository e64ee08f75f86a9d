//! task-cli delete command implementation

use super::{nothing_to_do, resolve_id, Outcome, Session, TaskView};
use crate::error::Result;
use crate::output::{emit_success, HumanOutput};

/// Options for `task-cli delete`
pub struct DeleteOptions {
    pub id: Option<String>,
}

pub fn run(options: DeleteOptions, session: &mut Session<'_>) -> Result<Outcome> {
    let mut tasks = session.store.load()?;
    if tasks.is_empty() {
        return nothing_to_do(session, "delete");
    }

    let id = provided_or_cancel!(resolve_id(session, options.id)?);
    let removed = tasks.delete(id)?;
    session.store.save(&tasks)?;

    let mut human = HumanOutput::new(format!("Task {id} deleted"));
    human.push_summary("Description", removed.description());
    human.push_summary("Remaining", tasks.len().to_string());

    emit_success(session.output, "delete", &TaskView::from(&removed), Some(&human))?;
    Ok(Outcome::Completed)
}

#[cfg(test)]
mod tests {
    use super::super::testing::{run_command, ScriptedPrompt};
    use super::super::Commands;
    use crate::error::Error;
    use crate::repository::TaskList;
    use crate::storage::{MemoryStore, Store};
    use crate::task::Task;

    fn five_tasks_from_zero() -> MemoryStore {
        let now = chrono::Utc::now();
        let tasks = (0..5).map(|id| Task::new(id, "Task", now)).collect();
        let store = MemoryStore::new();
        store
            .save(&TaskList::from_tasks(tasks).expect("unique"))
            .expect("seed");
        store
    }

    fn ids(store: &MemoryStore) -> Vec<u64> {
        store.load().expect("load").iter().map(Task::id).collect()
    }

    #[test]
    fn delete_then_add_keeps_the_gap() {
        let store = five_tasks_from_zero();
        let mut prompt = ScriptedPrompt::default();

        run_command(
            Commands::Delete {
                id: Some("3".to_string()),
            },
            &store,
            &mut prompt,
        )
        .expect("delete");
        assert_eq!(ids(&store), vec![0, 1, 2, 4]);

        run_command(
            Commands::Add {
                description: vec!["new".to_string()],
            },
            &store,
            &mut prompt,
        )
        .expect("add");
        assert_eq!(ids(&store), vec![0, 1, 2, 4, 5]);
    }

    #[test]
    fn deleting_missing_id_changes_nothing() {
        let store = five_tasks_from_zero();
        let document = store.document();
        let mut prompt = ScriptedPrompt::default();

        let err = run_command(
            Commands::Delete {
                id: Some("42".to_string()),
            },
            &store,
            &mut prompt,
        )
        .expect_err("missing");

        assert!(matches!(err, Error::TaskNotFound(42)));
        assert_eq!(store.document(), document);
    }

    #[test]
    fn prompts_for_id() {
        let store = five_tasks_from_zero();
        let mut prompt = ScriptedPrompt::new(&[Some("0")]);

        run_command(Commands::Delete { id: None }, &store, &mut prompt).expect("delete");

        assert_eq!(prompt.asked, vec!["Enter task id"]);
        assert_eq!(ids(&store), vec![1, 2, 3, 4]);
    }
}
