//! Infrastructure layer — implementations of the application ports against
//! the real world: the Dialogflow CX REST API, the process environment, the
//! `gcloud` CLI, and the tracing stack.

pub mod api;
pub mod auth;
pub mod logging;
pub mod operations;
