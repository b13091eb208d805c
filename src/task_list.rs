//! Task List Changes
//!
//! Outcome of a dashboard request, applied to the in-memory list without
//! re-fetching.

use crate::models::Task;

#[derive(Debug, Clone, PartialEq)]
pub enum ListChange {
    Reset(Vec<Task>),
    Append(Task),
    /// Swap the task at `id` for the server's copy
    Replace { id: String, task: Task },
    Remove(String),
    Unchanged,
}

impl ListChange {
    pub fn apply(self, tasks: &mut Vec<Task>) {
        match self {
            ListChange::Reset(loaded) => *tasks = loaded,
            ListChange::Append(task) => tasks.push(task),
            ListChange::Replace { id, task } => {
                if let Some(existing) = tasks.iter_mut().find(|t| t.id == id) {
                    *existing = task;
                }
            }
            ListChange::Remove(id) => tasks.retain(|t| t.id != id),
            ListChange::Unchanged => {}
        }
    }

    pub fn is_unchanged(&self) -> bool {
        matches!(self, ListChange::Unchanged)
    }
}

pub fn find_task<'a>(tasks: &'a [Task], id: &str) -> Option<&'a Task> {
    tasks.iter().find(|t| t.id == id)
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    fn task(id: &str, title: &str) -> Task {
        Task {
            id: id.to_string(),
            title: title.to_string(),
            completed: None,
        }
    }

    #[test]
    fn test_apply_changes() {
        let mut tasks = vec![task("a", "one"), task("b", "two")];

        ListChange::Append(task("c", "three")).apply(&mut tasks);
        ListChange::Replace {
            id: "b".to_string(),
            task: task("b", "TWO"),
        }
        .apply(&mut tasks);
        ListChange::Remove("a".to_string()).apply(&mut tasks);

        assert_eq!(tasks, vec![task("b", "TWO"), task("c", "three")]);
    }

    #[test]
    fn test_replace_unknown_id_is_ignored() {
        let mut tasks = vec![task("a", "one")];
        ListChange::Replace {
            id: "zzz".to_string(),
            task: task("zzz", "ghost"),
        }
        .apply(&mut tasks);
        ListChange::Unchanged.apply(&mut tasks);
        assert_eq!(tasks, vec![task("a", "one")]);
    }

    #[test]
    fn test_reset_and_find() {
        let mut tasks = vec![task("a", "one")];
        ListChange::Reset(vec![task("x", "new")]).apply(&mut tasks);
        assert_eq!(find_task(&tasks, "x").map(|t| t.title.as_str()), Some("new"));
        assert_eq!(find_task(&tasks, "a"), None);
    }
}
