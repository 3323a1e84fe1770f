//! Task List App
//!
//! Root component: resolves the API location and mounts the list view.

use std::rc::Rc;

use leptos::prelude::*;

use crate::commands::HttpTaskApi;
use crate::components::TaskListView;
use crate::config::ApiConfig;
use crate::context::SharedApi;

#[component]
pub fn App() -> impl IntoView {
    let origin = window().location().origin().ok();
    let config = ApiConfig::resolve(origin);
    log::info!("[APP] Task API at {}", config.base_url);

    let api: SharedApi = Rc::new(HttpTaskApi::new(config));

    view! { <TaskListView api=api /> }
}
