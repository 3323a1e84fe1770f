//! UI Components
//!
//! Leptos components for the task list page.

mod task_list_view;
mod new_task_form;
mod task_row;
mod error_banner;

pub use task_list_view::{TaskListPage, TaskListView};
pub use new_task_form::NewTaskForm;
pub use task_row::TaskRow;
pub use error_banner::ErrorBanner;
