//! Task API Commands
//!
//! Every call the view makes goes through [`TaskApi`]: one read
//! (`list`) and four mutations expressed as [`TaskCommand`].

mod http;

use async_trait::async_trait;
use percent_encoding::{utf8_percent_encode, AsciiSet, CONTROLS};
use reqwest::Method;

use crate::error::TaskResult;
use crate::models::{Task, TitleBody};

pub use http::HttpTaskApi;

/// Collection endpoint
pub const TASKS_PATH: &str = "/api/todo/";

/// Characters escaped inside a single path segment
const PATH_SEGMENT: &AsciiSet = &CONTROLS
    .add(b' ')
    .add(b'"')
    .add(b'#')
    .add(b'%')
    .add(b'/')
    .add(b'<')
    .add(b'>')
    .add(b'?')
    .add(b'`')
    .add(b'{')
    .add(b'}');

// ========================
// Commands
// ========================

/// A mutation sent to the task API
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum TaskCommand {
    Create { title: String },
    UpdateTitle { id: String, title: String },
    ToggleComplete { id: String },
    Delete { id: String },
}

/// Method, path and optional JSON body of one API call
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ApiRequest {
    pub method: Method,
    pub path: String,
    pub body: Option<TitleBody>,
}

impl ApiRequest {
    pub fn list() -> Self {
        Self {
            method: Method::GET,
            path: TASKS_PATH.to_string(),
            body: None,
        }
    }
}

impl TaskCommand {
    /// Map the command onto the REST contract
    pub fn request(&self) -> ApiRequest {
        match self {
            TaskCommand::Create { title } => ApiRequest {
                method: Method::POST,
                path: TASKS_PATH.to_string(),
                body: Some(TitleBody { title: title.clone() }),
            },
            TaskCommand::UpdateTitle { id, title } => ApiRequest {
                method: Method::PUT,
                path: format!("{}{}", TASKS_PATH, encode_id(id)),
                body: Some(TitleBody { title: title.clone() }),
            },
            TaskCommand::ToggleComplete { id } => ApiRequest {
                method: Method::PUT,
                path: format!("{}setcomplete/{}", TASKS_PATH, encode_id(id)),
                body: None,
            },
            TaskCommand::Delete { id } => ApiRequest {
                method: Method::DELETE,
                path: format!("{}{}", TASKS_PATH, encode_id(id)),
                body: None,
            },
        }
    }

    /// Whether the server answers with the task rather than a bare ack
    pub fn returns_task(&self) -> bool {
        matches!(self, TaskCommand::Create { .. } | TaskCommand::UpdateTitle { .. })
    }
}

/// Successful result of a command
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum CommandOutcome {
    Task(Task),
    Ack,
}

fn encode_id(id: &str) -> String {
    utf8_percent_encode(id, PATH_SEGMENT).to_string()
}

// ========================
// Client Trait
// ========================

/// Remote task collection
///
/// Browser futures are not `Send`, so neither are these.
#[async_trait(?Send)]
pub trait TaskApi {
    /// Fetch the whole collection
    async fn list(&self) -> TaskResult<Vec<Task>>;

    /// Run one mutation
    async fn execute(&self, command: TaskCommand) -> TaskResult<CommandOutcome>;
}
