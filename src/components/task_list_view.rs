//! Task List View Component
//!
//! The whole page: heading, new-task form, error text and task rows.

use leptos::prelude::*;
use reactive_stores::Store;

use crate::components::{ErrorBanner, NewTaskForm, TaskRow};
use crate::context::{use_task_context, SharedApi, TaskContext};
use crate::state::{rows, summary, TaskListState};

/// Owns the store and loads the tasks once mounted
#[component]
pub fn TaskListView(api: SharedApi) -> impl IntoView {
    let store = Store::new(TaskListState::default());
    let ctx = TaskContext::new(store, api);

    // Provide context to all children
    provide_context(ctx);

    // Load tasks on mount
    Effect::new(move |_| {
        ctx.load();
    });

    view! { <TaskListPage /> }
}

/// Page markup for whatever the provided store holds
#[component]
pub fn TaskListPage() -> impl IntoView {
    let store = use_task_context().store;

    // Row keys leave out the edit draft so typing does not rebuild the row
    view! {
        <main class="task-list">
            <h1>"Task List"</h1>

            <NewTaskForm />
            <ErrorBanner />

            <ul class="task-rows">
                <For
                    each=move || store.with(rows)
                    key=|row| (row.id.clone(), row.title.clone(), row.completed, row.editing)
                    children=move |row| view! { <TaskRow row=row /> }
                />
            </ul>

            <p class="task-count">{move || store.with(summary)}</p>
        </main>
    }
}

#[cfg(all(test, not(target_arch = "wasm32")))]
mod tests {
    use std::rc::Rc;

    use async_trait::async_trait;

    use super::*;
    use crate::commands::{CommandOutcome, TaskApi, TaskCommand};
    use crate::error::TaskResult;
    use crate::models::Task;
    use crate::state::{reduce, Action};

    /// Rendering never reaches the API
    struct IdleApi;

    #[async_trait(?Send)]
    impl TaskApi for IdleApi {
        async fn list(&self) -> TaskResult<Vec<Task>> {
            Ok(vec![])
        }

        async fn execute(&self, _command: TaskCommand) -> TaskResult<CommandOutcome> {
            Ok(CommandOutcome::Ack)
        }
    }

    fn render(state: TaskListState) -> String {
        Owner::new().with(|| {
            let api: SharedApi = Rc::new(IdleApi);
            provide_context(TaskContext::new(Store::new(state), api));
            view! { <TaskListPage /> }.to_html()
        })
    }

    fn loaded(tasks: Vec<Task>) -> TaskListState {
        reduce(TaskListState::default(), Action::TasksLoaded(tasks))
    }

    #[test]
    fn test_renders_form_and_heading() {
        let html = render(TaskListState::default());
        assert!(html.contains("Task List"));
        assert!(html.contains(r#"placeholder="Enter new task...""#));
        assert!(html.contains(">Add</button>"));
        assert!(!html.contains("task-row"));
        assert!(html.contains("0 tasks"));
    }

    #[test]
    fn test_renders_row_controls() {
        let html = render(loaded(vec![Task::new("1", "Test Task")]));
        assert!(html.contains("Test Task"));
        assert!(html.contains(r#"aria-label="Toggle Complete""#));
        assert!(html.contains(r#"aria-label="Edit Task""#));
        assert!(html.contains(r#"aria-label="Delete Task""#));
        assert!(html.contains(r#"class="task-title""#));
        assert!(!html.contains("line-through"));
    }

    #[test]
    fn test_completed_title_is_struck_through() {
        let html = render(loaded(vec![
            Task::new("1", "Done Task").completed(true),
            Task::new("2", "Open Task"),
        ]));
        assert!(html.contains(r#"<span class="task-title line-through">Done Task</span>"#));
        assert!(html.contains(r#"<span class="task-title">Open Task</span>"#));
    }

    #[test]
    fn test_edit_mode_swaps_controls() {
        let state = reduce(loaded(vec![Task::new("1", "Test Task")]), Action::EditStarted("1".into()));
        let html = render(state);
        assert!(html.contains(r#"aria-label="Task title""#));
        assert!(html.contains(r#"aria-label="Save Task""#));
        assert!(html.contains(r#"aria-label="Cancel Edit""#));
        assert!(!html.contains(r#"aria-label="Edit Task""#));
    }

    #[test]
    fn test_error_text_is_shown() {
        let state = reduce(
            TaskListState::default(),
            Action::Failed(crate::error::TaskError::Validation("Task cannot be empty".into())),
        );
        let html = render(state);
        assert!(html.contains(r#"role="alert""#));
        assert!(html.contains("Task cannot be empty"));
    }
}
