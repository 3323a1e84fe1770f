//! HTTP Task API
//!
//! `TaskApi` over JSON/HTTP with reqwest (fetch on wasm32).

use async_trait::async_trait;

use super::{ApiRequest, CommandOutcome, TaskApi, TaskCommand};
use crate::config::ApiConfig;
use crate::error::TaskResult;
use crate::models::Task;

#[derive(Debug, Clone)]
pub struct HttpTaskApi {
    client: reqwest::Client,
    config: ApiConfig,
}

impl HttpTaskApi {
    pub fn new(config: ApiConfig) -> Self {
        Self {
            client: reqwest::Client::new(),
            config,
        }
    }

    /// Send a request; any non-2xx status becomes an error
    async fn send(&self, request: &ApiRequest) -> TaskResult<reqwest::Response> {
        let url = self.config.endpoint(&request.path);
        log::debug!("[API] {} {}", request.method, url);

        let mut builder = self.client.request(request.method.clone(), &url);
        if let Some(body) = &request.body {
            builder = builder.json(body);
        }
        let response = builder.send().await?.error_for_status()?;
        Ok(response)
    }
}

#[async_trait(?Send)]
impl TaskApi for HttpTaskApi {
    async fn list(&self) -> TaskResult<Vec<Task>> {
        let response = self.send(&ApiRequest::list()).await?;
        let tasks: Vec<Task> = response.json().await?;
        log::debug!("[API] Listed {} tasks", tasks.len());
        Ok(tasks)
    }

    async fn execute(&self, command: TaskCommand) -> TaskResult<CommandOutcome> {
        let response = self.send(&command.request()).await?;
        if !command.returns_task() {
            return Ok(CommandOutcome::Ack);
        }

        // The status already says it worked; a body that is not a task is an ack
        let body = response.text().await?;
        if body.trim().is_empty() {
            return Ok(CommandOutcome::Ack);
        }
        match serde_json::from_str::<Task>(&body) {
            Ok(task) => Ok(CommandOutcome::Task(task)),
            Err(err) => {
                log::warn!("[API] {:?} answered without a task ({}), treating as ack", command, err);
                Ok(CommandOutcome::Ack)
            }
        }
    }
}
