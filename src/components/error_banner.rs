//! Error Banner Component

use leptos::prelude::*;

use crate::context::use_task_context;
use crate::state::{Action, TaskListStateStoreFields};

/// Inline message for the last failure, dismissable
#[component]
pub fn ErrorBanner() -> impl IntoView {
    let ctx = use_task_context();

    view! {
        <div class="error-slot">
            {move || ctx.store.error().get().map(|message| view! {
                <p class="error-text" role="alert">
                    <span>{message}</span>
                    <button
                        type="button"
                        class="dismiss-btn"
                        aria-label="Dismiss"
                        on:click=move |_| ctx.dispatch(Action::ErrorDismissed)
                    >
                        "×"
                    </button>
                </p>
            })}
        </div>
    }
}
