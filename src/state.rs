//! Task List State
//!
//! The whole view state lives in one [`TaskListState`] value. It only
//! changes through [`reduce`], which takes the old state and an [`Action`]
//! and returns the new state.

use leptos::prelude::*;
use reactive_stores::Store;

use crate::error::TaskError;
use crate::models::Task;

/// Class applied to the title of a completed task
pub const COMPLETED_CLASS: &str = "line-through";

/// View state with field-level reactivity
#[derive(Clone, Debug, Default, PartialEq, Store)]
pub struct TaskListState {
    /// Tasks in server order
    pub tasks: Vec<Task>,
    /// Contents of the new-task input
    pub draft: String,
    /// Task currently in edit mode
    pub editing: Option<EditState>,
    /// Message shown inline until the next successful change
    pub error: Option<String>,
}

/// Edit mode for exactly one task
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct EditState {
    pub id: String,
    pub draft: String,
}

impl TaskListState {
    pub fn task(&self, id: &str) -> Option<&Task> {
        self.tasks.iter().find(|task| task.id == id)
    }

    pub fn is_editing(&self, id: &str) -> bool {
        self.editing.as_ref().is_some_and(|edit| edit.id == id)
    }

    pub fn edit_draft(&self) -> String {
        self.editing.as_ref().map(|edit| edit.draft.clone()).unwrap_or_default()
    }
}

/// Everything that can happen to the view state
#[derive(Clone, Debug, PartialEq)]
pub enum Action {
    TasksLoaded(Vec<Task>),
    DraftChanged(String),
    TaskCreated(Task),
    /// Server returned the updated task
    TaskUpdated { id: String, task: Task },
    /// Server acknowledged a title change without a body
    TitleSaved { id: String, title: String },
    CompletionToggled(String),
    TaskRemoved(String),
    EditStarted(String),
    EditDraftChanged(String),
    EditCancelled,
    Failed(TaskError),
    ErrorDismissed,
}

/// Apply one action
pub fn reduce(mut state: TaskListState, action: Action) -> TaskListState {
    match action {
        Action::TasksLoaded(tasks) => {
            let (kept, blank): (Vec<Task>, Vec<Task>) =
                tasks.into_iter().partition(Task::has_title);
            if !blank.is_empty() {
                log::warn!("[STATE] Dropped {} tasks without a title", blank.len());
            }
            state.tasks = kept;
            let stale = state
                .editing
                .as_ref()
                .is_some_and(|edit| state.task(&edit.id).is_none());
            if stale {
                state.editing = None;
            }
            state.error = None;
        }
        Action::DraftChanged(text) => {
            state.draft = text;
            state.error = None;
        }
        Action::TaskCreated(task) => {
            if task.has_title() {
                merge_task(&mut state.tasks, task);
            }
            state.draft.clear();
            state.error = None;
        }
        Action::TaskUpdated { id, task } => {
            if task.id != id {
                log::warn!("[STATE] Update of {} answered with task {}", id, task.id);
            }
            if state.is_editing(&id) {
                state.editing = None;
            }
            if task.has_title() {
                if let Some(existing) = state.tasks.iter_mut().find(|t| t.id == id) {
                    existing.title = task.title;
                    existing.completed = task.completed;
                }
            }
            state.error = None;
        }
        Action::TitleSaved { id, title } => {
            if let Some(existing) = state.tasks.iter_mut().find(|t| t.id == id) {
                existing.title = title;
            }
            if state.is_editing(&id) {
                state.editing = None;
            }
            state.error = None;
        }
        Action::CompletionToggled(id) => {
            if let Some(existing) = state.tasks.iter_mut().find(|t| t.id == id) {
                existing.completed = !existing.completed;
            }
            state.error = None;
        }
        Action::TaskRemoved(id) => {
            state.tasks.retain(|task| task.id != id);
            if state.is_editing(&id) {
                state.editing = None;
            }
            state.error = None;
        }
        Action::EditStarted(id) => {
            let title = state.task(&id).map(|task| task.title.clone());
            if let Some(draft) = title {
                state.editing = Some(EditState { id, draft });
                state.error = None;
            }
        }
        Action::EditDraftChanged(text) => {
            if let Some(edit) = state.editing.as_mut() {
                edit.draft = text;
                state.error = None;
            }
        }
        Action::EditCancelled => {
            state.editing = None;
            state.error = None;
        }
        Action::Failed(TaskError::Cancelled) => {}
        Action::Failed(err) => {
            state.error = Some(err.to_string());
        }
        Action::ErrorDismissed => {
            state.error = None;
        }
    }
    state
}

/// Replace a task with the same id, or append it
fn merge_task(tasks: &mut Vec<Task>, task: Task) {
    match tasks.iter_mut().find(|t| t.id == task.id) {
        Some(existing) => *existing = task,
        None => tasks.push(task),
    }
}

// ========================
// View Models
// ========================

/// One rendered row
#[derive(Clone, Debug, PartialEq, Eq, Hash)]
pub struct TaskRowView {
    pub id: String,
    pub title: String,
    pub completed: bool,
    pub editing: bool,
}

impl TaskRowView {
    pub fn title_class(&self) -> &'static str {
        if self.completed {
            COMPLETED_CLASS
        } else {
            ""
        }
    }
}

pub fn rows(state: &TaskListState) -> Vec<TaskRowView> {
    state
        .tasks
        .iter()
        .map(|task| TaskRowView {
            id: task.id.clone(),
            title: task.title.clone(),
            completed: task.completed,
            editing: state.is_editing(&task.id),
        })
        .collect()
}

/// Footer text, e.g. "2 tasks, 1 completed"
pub fn summary(state: &TaskListState) -> String {
    let total = state.tasks.len();
    let done = state.tasks.iter().filter(|task| task.completed).count();
    let noun = if total == 1 { "task" } else { "tasks" };
    format!("{} {}, {} completed", total, noun, done)
}

// ========================
// Store Helpers
// ========================

pub type TaskListStore = Store<TaskListState>;

/// Run an action through the reducer and publish the result
pub fn dispatch(store: &TaskListStore, action: Action) {
    log::debug!("[STATE] {:?}", action);
    store.update(|state| *state = reduce(std::mem::take(state), action));
}

#[cfg(test)]
mod tests {
    use super::*;

    fn loaded(tasks: Vec<Task>) -> TaskListState {
        reduce(TaskListState::default(), Action::TasksLoaded(tasks))
    }

    fn two_tasks() -> TaskListState {
        loaded(vec![Task::new("1", "Task 1"), Task::new("2", "Task 2")])
    }

    #[test]
    fn test_empty_list_has_no_rows() {
        let state = loaded(vec![]);
        assert!(rows(&state).is_empty());
        assert_eq!(summary(&state), "0 tasks, 0 completed");
    }

    #[test]
    fn test_load_replaces_and_clears_error() {
        let state = TaskListState {
            tasks: vec![Task::new("old", "Old")],
            error: Some("boom".into()),
            ..Default::default()
        };
        let state = reduce(state, Action::TasksLoaded(vec![Task::new("1", "Test Task")]));
        assert_eq!(state.tasks, vec![Task::new("1", "Test Task")]);
        assert_eq!(state.error, None);
    }

    #[test]
    fn test_load_drops_blank_titles() {
        let state = loaded(vec![Task::new("1", "  "), Task::new("2", "Kept")]);
        assert_eq!(rows(&state).len(), 1);
        assert_eq!(rows(&state)[0].title, "Kept");
    }

    #[test]
    fn test_failure_keeps_tasks() {
        let state = two_tasks();
        let next = reduce(state.clone(), Action::Failed(TaskError::Network("offline".into())));
        assert_eq!(next.tasks, state.tasks);
        assert_eq!(next.error.as_deref(), Some("Network error: offline"));
    }

    #[test]
    fn test_cancel_is_noop() {
        let state = two_tasks();
        assert_eq!(reduce(state.clone(), Action::Failed(TaskError::Cancelled)), state);
    }

    #[test]
    fn test_created_task_appended_and_draft_cleared() {
        let state = reduce(loaded(vec![]), Action::DraftChanged("New Task".into()));
        let state = reduce(state, Action::TaskCreated(Task::new("2", "New Task")));
        assert_eq!(state.draft, "");
        assert_eq!(rows(&state)[0].title, "New Task");
    }

    #[test]
    fn test_created_task_merges_existing_id() {
        let state = reduce(two_tasks(), Action::TaskCreated(Task::new("2", "Task 2 again")));
        assert_eq!(state.tasks.len(), 2);
        assert_eq!(state.task("2").unwrap().title, "Task 2 again");
    }

    #[test]
    fn test_toggle_marks_row_struck_through() {
        let state = loaded(vec![Task::new("1", "Test Task")]);
        assert_eq!(rows(&state)[0].title_class(), "");

        let state = reduce(state, Action::CompletionToggled("1".into()));
        assert_eq!(rows(&state)[0].title_class(), COMPLETED_CLASS);
        assert_eq!(summary(&state), "1 task, 1 completed");
    }

    #[test]
    fn test_toggle_only_touches_its_task() {
        let state = reduce(two_tasks(), Action::CompletionToggled("2".into()));
        assert!(!state.task("1").unwrap().completed);
        assert!(state.task("2").unwrap().completed);
    }

    #[test]
    fn test_edit_prefills_current_title() {
        let state = reduce(two_tasks(), Action::EditStarted("1".into()));
        assert_eq!(state.edit_draft(), "Task 1");
        let rows = rows(&state);
        assert!(rows[0].editing);
        assert!(!rows[1].editing);
    }

    #[test]
    fn test_only_one_task_in_edit_mode() {
        let state = reduce(two_tasks(), Action::EditStarted("1".into()));
        let state = reduce(state, Action::EditStarted("2".into()));
        assert!(!state.is_editing("1"));
        assert!(state.is_editing("2"));
        assert_eq!(state.edit_draft(), "Task 2");
    }

    #[test]
    fn test_edit_unknown_id_is_noop() {
        let state = two_tasks();
        assert_eq!(reduce(state.clone(), Action::EditStarted("9".into())), state);
    }

    #[test]
    fn test_validation_failure_keeps_edit_mode() {
        let state = reduce(two_tasks(), Action::EditStarted("1".into()));
        let state = reduce(state, Action::EditDraftChanged("  ".into()));
        let state = reduce(
            state,
            Action::Failed(TaskError::Validation("Task title cannot be empty".into())),
        );
        assert!(state.is_editing("1"));
        assert_eq!(state.error.as_deref(), Some("Task title cannot be empty"));
        assert_eq!(state.task("1").unwrap().title, "Task 1");
    }

    #[test]
    fn test_update_exits_edit_mode() {
        let state = reduce(two_tasks(), Action::EditStarted("1".into()));
        let state = reduce(
            state,
            Action::TaskUpdated { id: "1".into(), task: Task::new("1", "Renamed") },
        );
        assert_eq!(state.editing, None);
        assert_eq!(state.task("1").unwrap().title, "Renamed");
        assert_eq!(state.task("2").unwrap().title, "Task 2");
    }

    #[test]
    fn test_update_answered_with_other_id_still_exits_edit_mode() {
        let state = reduce(two_tasks(), Action::EditStarted("1".into()));
        let state = reduce(
            state,
            Action::TaskUpdated { id: "1".into(), task: Task::new("srv-1", "Renamed") },
        );
        assert_eq!(state.editing, None);
        assert_eq!(state.tasks.len(), 2);
        assert_eq!(state.task("1").unwrap().title, "Renamed");
        assert!(state.task("srv-1").is_none());
    }

    #[test]
    fn test_title_saved_without_body() {
        let state = reduce(two_tasks(), Action::EditStarted("2".into()));
        let state = reduce(state, Action::TitleSaved { id: "2".into(), title: "Renamed".into() });
        assert_eq!(state.editing, None);
        assert_eq!(state.task("2").unwrap().title, "Renamed");
    }

    #[test]
    fn test_remove_task() {
        let state = reduce(two_tasks(), Action::EditStarted("1".into()));
        let state = reduce(state, Action::TaskRemoved("1".into()));
        assert_eq!(state.tasks, vec![Task::new("2", "Task 2")]);
        assert_eq!(state.editing, None);
    }

    #[test]
    fn test_reload_drops_edit_of_missing_task() {
        let state = reduce(two_tasks(), Action::EditStarted("1".into()));
        let state = reduce(state, Action::TasksLoaded(vec![Task::new("2", "Task 2")]));
        assert_eq!(state.editing, None);
    }

    #[test]
    fn test_typing_clears_error() {
        let state = reduce(
            loaded(vec![]),
            Action::Failed(TaskError::Validation("Task cannot be empty".into())),
        );
        assert!(state.error.is_some());
        let state = reduce(state, Action::DraftChanged("N".into()));
        assert_eq!(state.error, None);
    }
}
