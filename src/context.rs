//! Task List Context
//!
//! Store and API client shared with every component via the Leptos
//! Context API. Event handlers call the methods here; each one spawns the
//! matching workflow and feeds its actions back into the store.

use std::future::Future;
use std::rc::Rc;

use leptos::prelude::*;
use leptos::task::spawn_local;

use crate::commands::TaskApi;
use crate::state::{dispatch, Action, TaskListStore};
use crate::workflow;

pub type SharedApi = Rc<dyn TaskApi>;

#[derive(Clone, Copy)]
pub struct TaskContext {
    /// View state
    pub store: TaskListStore,
    /// API client (not `Send`, so kept in local storage)
    api: StoredValue<SharedApi, LocalStorage>,
}

impl TaskContext {
    pub fn new(store: TaskListStore, api: SharedApi) -> Self {
        Self {
            store,
            api: StoredValue::new_local(api),
        }
    }

    pub fn dispatch(&self, action: Action) {
        dispatch(&self.store, action);
    }

    /// Run a workflow in the background and apply what it returns
    fn spawn<F, Fut>(&self, work: F)
    where
        F: FnOnce(SharedApi) -> Fut + 'static,
        Fut: Future<Output = Vec<Action>> + 'static,
    {
        let store = self.store;
        let api = self.api.get_value();
        spawn_local(async move {
            for action in work(api).await {
                dispatch(&store, action);
            }
        });
    }

    /// Fetch the collection
    pub fn load(&self) {
        self.spawn(|api| async move { vec![workflow::load_tasks(&*api).await] });
    }

    /// Create a task from the new-task input
    pub fn add(&self) {
        let draft = self.store.with_untracked(|state| state.draft.clone());
        self.spawn(move |api| async move { workflow::add_task(&*api, &draft).await });
    }

    pub fn toggle(&self, id: String) {
        self.spawn(move |api| async move { workflow::toggle_complete(&*api, &id).await });
    }

    pub fn start_edit(&self, id: String) {
        self.dispatch(Action::EditStarted(id));
    }

    pub fn cancel_edit(&self) {
        self.dispatch(Action::EditCancelled);
    }

    /// Commit the edit field of the task in edit mode
    pub fn save_edit(&self, id: String) {
        let draft = self.store.with_untracked(|state| state.edit_draft());
        self.spawn(move |api| async move { vec![workflow::save_edit(&*api, &id, &draft).await] });
    }

    /// Ask for confirmation, then delete
    pub fn delete(&self, id: String, title: String) {
        self.spawn(move |api| async move {
            let confirm = || {
                window()
                    .confirm_with_message(&format!("Delete \"{}\"?", title))
                    .unwrap_or(false)
            };
            workflow::delete_task(&*api, &id, confirm).await
        });
    }
}

/// Get the task context provided by `TaskListView`
pub fn use_task_context() -> TaskContext {
    use_context::<TaskContext>().expect("TaskContext should be provided")
}
