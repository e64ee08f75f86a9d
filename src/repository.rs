//! In-memory task collection.
//!
//! `TaskList` keeps its tasks strictly ascending by id. The vector is
//! private: a list is built empty or through [`TaskList::from_tasks`],
//! which sorts, and only grows through [`TaskList::add`], which always
//! allocates an id above the current maximum. Lookups binary-search.

use chrono::Utc;

use crate::error::{Error, Result};
use crate::task::{Status, Task};

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct TaskList {
    tasks: Vec<Task>,
}

impl TaskList {
    pub fn new() -> Self {
        Self::default()
    }

    /// Build a list from tasks in any order.
    ///
    /// Returns the first repeated id as the error when two tasks share one.
    pub fn from_tasks(mut tasks: Vec<Task>) -> std::result::Result<Self, u64> {
        tasks.sort_by_key(Task::id);
        if let Some(pair) = tasks.windows(2).find(|pair| pair[0].id() == pair[1].id()) {
            return Err(pair[0].id());
        }
        Ok(Self { tasks })
    }

    pub fn len(&self) -> usize {
        self.tasks.len()
    }

    pub fn is_empty(&self) -> bool {
        self.tasks.is_empty()
    }

    pub fn iter(&self) -> std::slice::Iter<'_, Task> {
        self.tasks.iter()
    }

    pub fn as_slice(&self) -> &[Task] {
        &self.tasks
    }

    pub fn find_index(&self, id: u64) -> Option<usize> {
        self.tasks.binary_search_by_key(&id, Task::id).ok()
    }

    pub fn get(&self, id: u64) -> Option<&Task> {
        self.find_index(id).map(|index| &self.tasks[index])
    }

    /// Id the next added task will receive, or `None` once the largest
    /// id is `u64::MAX`.
    pub fn next_id(&self) -> Option<u64> {
        match self.tasks.last() {
            Some(task) => task.id().checked_add(1),
            None => Some(1),
        }
    }

    pub fn add(&mut self, description: impl Into<String>) -> Result<&Task> {
        let id = self.next_id().ok_or(Error::IdsExhausted)?;
        self.tasks.push(Task::new(id, description, Utc::now()));
        Ok(&self.tasks[self.tasks.len() - 1])
    }

    pub fn update_description(&mut self, id: u64, description: impl Into<String>) -> Result<&Task> {
        let task = self.get_mut(id)?;
        task.set_description(description.into(), Utc::now());
        Ok(&*task)
    }

    pub fn update_status(&mut self, id: u64, status: Status) -> Result<&Task> {
        let task = self.get_mut(id)?;
        task.set_status(status, Utc::now());
        Ok(&*task)
    }

    /// Remove a task, shifting every later task down one slot.
    pub fn delete(&mut self, id: u64) -> Result<Task> {
        let index = self.find_index(id).ok_or(Error::TaskNotFound(id))?;
        Ok(self.tasks.remove(index))
    }

    /// Tasks in ascending id order, optionally limited to one status.
    pub fn list(&self, filter: Option<Status>) -> Vec<&Task> {
        self.tasks
            .iter()
            .filter(|task| filter.map_or(true, |status| task.status() == status))
            .collect()
    }

    fn get_mut(&mut self, id: u64) -> Result<&mut Task> {
        let index = self.find_index(id).ok_or(Error::TaskNotFound(id))?;
        Ok(&mut self.tasks[index])
    }
}

impl<'a> IntoIterator for &'a TaskList {
    type Item = &'a Task;
    type IntoIter = std::slice::Iter<'a, Task>;

    fn into_iter(self) -> Self::IntoIter {
        self.iter()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn seeded(ids: &[u64]) -> TaskList {
        let now = Utc::now();
        let tasks = ids
            .iter()
            .map(|id| Task::new(*id, format!("Task {id}"), now))
            .collect();
        TaskList::from_tasks(tasks).expect("unique ids")
    }

    fn ids(list: &TaskList) -> Vec<u64> {
        list.iter().map(Task::id).collect()
    }

    #[test]
    fn add_to_empty_list_starts_at_one() {
        let mut list = TaskList::new();
        let task = list.add("first").expect("add");
        assert_eq!(task.id(), 1);
        assert_eq!(task.status(), Status::Todo);
        assert_eq!(task.created_at(), task.updated_at());
        assert_eq!(list.len(), 1);
    }

    #[test]
    fn add_uses_max_id_plus_one() {
        let mut list = seeded(&[2, 9, 4]);
        assert_eq!(list.add("next").expect("add").id(), 10);
        assert_eq!(ids(&list), vec![2, 4, 9, 10]);
    }

    #[test]
    fn from_tasks_sorts_and_rejects_duplicates() {
        assert_eq!(ids(&seeded(&[3, 1, 2])), vec![1, 2, 3]);

        let now = Utc::now();
        let tasks = vec![Task::new(5, "a", now), Task::new(1, "b", now), Task::new(5, "c", now)];
        assert_eq!(TaskList::from_tasks(tasks), Err(5));
    }

    #[test]
    fn delete_then_add_leaves_a_gap() {
        let mut list = seeded(&[0, 1, 2, 3, 4]);
        let removed = list.delete(3).expect("delete");
        assert_eq!(removed.id(), 3);
        assert_eq!(ids(&list), vec![0, 1, 2, 4]);
        assert!(list.get(3).is_none());

        assert_eq!(list.add("after delete").expect("add").id(), 5);
    }

    #[test]
    fn add_past_the_largest_id_fails_without_wrapping() {
        let mut list = seeded(&[0, u64::MAX]);
        assert_eq!(list.next_id(), None);

        let before = list.clone();
        assert!(matches!(list.add("one too many"), Err(Error::IdsExhausted)));
        assert_eq!(list, before);
        assert_eq!(list.get(u64::MAX).map(Task::id), Some(u64::MAX));
    }

    #[test]
    fn next_id_is_one_when_empty() {
        assert_eq!(TaskList::new().next_id(), Some(1));
    }

    #[test]
    fn delete_missing_id_leaves_list_unchanged() {
        let mut list = seeded(&[1, 2]);
        let before = list.clone();
        match list.delete(7) {
            Err(Error::TaskNotFound(7)) => {}
            other => panic!("unexpected result: {other:?}"),
        }
        assert_eq!(list, before);
    }

    #[test]
    fn update_status_refreshes_updated_at_only() {
        let mut list = seeded(&[1, 2, 3]);
        let before = list.get(2).expect("task").clone();

        let task = list.update_status(2, Status::Done).expect("update");
        assert_eq!(task.status(), Status::Done);
        assert!(task.updated_at() > before.updated_at());
        assert_eq!(task.created_at(), before.created_at());
        assert_eq!(task.description(), before.description());
    }

    #[test]
    fn update_description_changes_text() {
        let mut list = seeded(&[1]);
        let before = list.get(1).expect("task").updated_at();
        let task = list.update_description(1, "renamed").expect("update");
        assert_eq!(task.description(), "renamed");
        assert!(task.updated_at() > before);
    }

    #[test]
    fn updates_on_missing_id_report_not_found() {
        let mut list = seeded(&[1]);
        assert!(matches!(
            list.update_description(2, "x"),
            Err(Error::TaskNotFound(2))
        ));
        assert!(matches!(
            list.update_status(2, Status::Done),
            Err(Error::TaskNotFound(2))
        ));
    }

    #[test]
    fn list_filters_by_status_in_id_order() {
        let mut list = seeded(&[1, 2, 3, 4]);
        list.update_status(4, Status::Done).expect("done");
        list.update_status(2, Status::Done).expect("done");
        list.update_status(3, Status::InProgress).expect("in progress");

        let done: Vec<u64> = list.list(Some(Status::Done)).iter().map(|t| t.id()).collect();
        assert_eq!(done, vec![2, 4]);

        let todo: Vec<u64> = list.list(Some(Status::Todo)).iter().map(|t| t.id()).collect();
        assert_eq!(todo, vec![1]);

        let all: Vec<u64> = list.list(None).iter().map(|t| t.id()).collect();
        assert_eq!(all, vec![1, 2, 3, 4]);
    }
}
