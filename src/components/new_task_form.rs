//! New Task Form Component
//!
//! Input and Add button for creating tasks.

use leptos::prelude::*;

use crate::context::use_task_context;
use crate::state::{Action, TaskListStateStoreFields};

/// Form for creating new tasks
#[component]
pub fn NewTaskForm() -> impl IntoView {
    let ctx = use_task_context();

    let create_task = move |ev: web_sys::SubmitEvent| {
        ev.prevent_default();
        ctx.add();
    };

    view! {
        <form class="new-task-form" on:submit=create_task>
            <input
                type="text"
                placeholder="Enter new task..."
                prop:value=move || ctx.store.draft().get()
                on:input=move |ev| ctx.dispatch(Action::DraftChanged(event_target_value(&ev)))
            />
            <button type="submit">"Add"</button>
        </form>
    }
}
