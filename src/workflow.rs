//! Task Workflows
//!
//! The async half of each user operation: validate, call the API, and
//! describe the outcome as reducer actions. Nothing here touches the view.

use crate::commands::{CommandOutcome, TaskApi, TaskCommand};
use crate::error::TaskError;
use crate::models::{validate_title, EMPTY_TASK_MESSAGE, EMPTY_TITLE_MESSAGE};
use crate::state::Action;

fn failed(operation: &str, err: TaskError) -> Action {
    if err.is_network() {
        log::error!("[VIEW] {} failed: {}", operation, err);
    }
    Action::Failed(err)
}

/// Fetch the collection, replacing the local list on success
pub async fn load_tasks<A: TaskApi + ?Sized>(api: &A) -> Action {
    match api.list().await {
        Ok(tasks) => {
            log::info!("[VIEW] Loaded {} tasks", tasks.len());
            Action::TasksLoaded(tasks)
        }
        Err(err) => failed("load", err),
    }
}

/// Create a task from the new-task input
pub async fn add_task<A: TaskApi + ?Sized>(api: &A, raw_title: &str) -> Vec<Action> {
    let title = match validate_title(raw_title, EMPTY_TASK_MESSAGE) {
        Ok(title) => title,
        Err(err) => return vec![Action::Failed(err)],
    };
    match api.execute(TaskCommand::Create { title }).await {
        Ok(CommandOutcome::Task(task)) => vec![Action::TaskCreated(task)],
        // Created but not echoed back; pick it up from the collection
        Ok(CommandOutcome::Ack) => vec![Action::DraftChanged(String::new()), load_tasks(api).await],
        Err(err) => vec![failed("create", err)],
    }
}

/// Flip completion, then re-sync with the server
pub async fn toggle_complete<A: TaskApi + ?Sized>(api: &A, id: &str) -> Vec<Action> {
    let command = TaskCommand::ToggleComplete { id: id.to_string() };
    match api.execute(command).await {
        Ok(_) => vec![Action::CompletionToggled(id.to_string()), load_tasks(api).await],
        Err(err) => vec![failed("toggle", err)],
    }
}

/// Commit the edit field of a task
pub async fn save_edit<A: TaskApi + ?Sized>(api: &A, id: &str, raw_title: &str) -> Action {
    let title = match validate_title(raw_title, EMPTY_TITLE_MESSAGE) {
        Ok(title) => title,
        Err(err) => return Action::Failed(err),
    };
    let command = TaskCommand::UpdateTitle {
        id: id.to_string(),
        title: title.clone(),
    };
    match api.execute(command).await {
        Ok(CommandOutcome::Task(task)) => Action::TaskUpdated { id: id.to_string(), task },
        Ok(CommandOutcome::Ack) => Action::TitleSaved { id: id.to_string(), title },
        Err(err) => failed("update", err),
    }
}

/// Delete a task once the user confirms
pub async fn delete_task<A, F>(api: &A, id: &str, confirm: F) -> Vec<Action>
where
    A: TaskApi + ?Sized,
    F: FnOnce() -> bool,
{
    if !confirm() {
        log::info!("[VIEW] Delete of {} cancelled", id);
        return vec![Action::Failed(TaskError::Cancelled)];
    }
    match api.execute(TaskCommand::Delete { id: id.to_string() }).await {
        Ok(_) => vec![Action::TaskRemoved(id.to_string()), load_tasks(api).await],
        Err(err) => vec![failed("delete", err)],
    }
}
