//! Task List Frontend Entry Point

use leptos::prelude::*;
use log::LevelFilter;

use task_list_ui::app::App;

fn main() {
    console_error_panic_hook::set_once();
    if let Err(err) = console_logger::init_logger("TaskList", LevelFilter::Debug) {
        leptos::logging::warn!("logger already installed: {}", err);
    }
    mount_to_body(App);
}
