//! Task List Frontend
//!
//! Single-page task list backed by a REST API.

pub mod app;
pub mod commands;
pub mod components;
pub mod config;
pub mod context;
pub mod error;
pub mod models;
pub mod state;
pub mod workflow;
