//! Task Row Component
//!
//! One task with its Toggle Complete, Edit Task and Delete Task controls,
//! or the inline edit field while the task is in edit mode.

use leptos::prelude::*;

use crate::context::use_task_context;
use crate::state::{Action, TaskRowView};

/// A single task row
#[component]
pub fn TaskRow(row: TaskRowView) -> impl IntoView {
    let ctx = use_task_context();
    let title_class = row.title_class();
    let TaskRowView { id, title, completed, editing } = row;

    if editing {
        let save_id = id.clone();
        let key_id = id.clone();
        return view! {
            <li class="task-row editing">
                <input
                    type="text"
                    class="edit-input"
                    aria-label="Task title"
                    prop:value=move || ctx.store.with(|state| state.edit_draft())
                    on:input=move |ev| ctx.dispatch(Action::EditDraftChanged(event_target_value(&ev)))
                    on:keydown=move |ev: web_sys::KeyboardEvent| {
                        match ev.key().as_str() {
                            "Enter" => ctx.save_edit(key_id.clone()),
                            "Escape" => ctx.cancel_edit(),
                            _ => {}
                        }
                    }
                />
                <button
                    type="button"
                    class="save-btn"
                    aria-label="Save Task"
                    on:click=move |_| ctx.save_edit(save_id.clone())
                >
                    "Save"
                </button>
                <button
                    type="button"
                    class="cancel-btn"
                    aria-label="Cancel Edit"
                    on:click=move |_| ctx.cancel_edit()
                >
                    "Cancel"
                </button>
            </li>
        }
        .into_any();
    }

    let toggle_id = id.clone();
    let edit_id = id.clone();
    let delete_title = title.clone();
    let row_class = if completed { "task-row completed" } else { "task-row" };
    let span_class = format!("task-title {}", title_class).trim_end().to_string();

    view! {
        <li class=row_class>
            <input
                type="checkbox"
                aria-label="Toggle Complete"
                prop:checked=completed
                on:change=move |_| ctx.toggle(toggle_id.clone())
            />
            <span class=span_class>{title}</span>
            <button
                type="button"
                class="edit-btn"
                aria-label="Edit Task"
                on:click=move |_| ctx.start_edit(edit_id.clone())
            >
                "✎"
            </button>
            <button
                type="button"
                class="delete-btn"
                aria-label="Delete Task"
                on:click=move |_| ctx.delete(id.clone(), delete_title.clone())
            >
                "×"
            </button>
        </li>
    }
    .into_any()
}
