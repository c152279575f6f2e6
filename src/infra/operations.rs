//! Long-running operation polling.
//!
//! Flow-version and environment writes return an operation handle the
//! platform completes in the background. The poller re-reads the handle at
//! a fixed interval until it reports done, with a hard deadline so a wedged
//! operation cannot hang the run forever.

use std::time::Duration;

use anyhow::Result;
use serde_json::Value;

use crate::domain::error::OperationError;
use crate::domain::resource::Operation;
use crate::infra::api::CxApiClient;

const POLL_INTERVAL: Duration = Duration::from_secs(2);
const POLL_DEADLINE: Duration = Duration::from_secs(600);

/// Poll `operation` until the platform marks it done.
///
/// # Errors
///
/// Returns [`OperationError::Failed`] when the operation finishes with an
/// error status, [`OperationError::TimedOut`] past the deadline, and
/// propagates any polling transport error.
pub async fn wait_for_operation(client: &CxApiClient, operation: Operation) -> Result<Operation> {
    let deadline = tokio::time::Instant::now() + POLL_DEADLINE;
    let mut current = operation;

    loop {
        if current.done {
            if let Some(status) = current.error {
                return Err(OperationError::Failed {
                    name: current.name,
                    message: status.message,
                }
                .into());
            }
            return Ok(current);
        }

        if tokio::time::Instant::now() >= deadline {
            return Err(OperationError::TimedOut {
                name: current.name,
                seconds: POLL_DEADLINE.as_secs(),
            }
            .into());
        }

        tokio::time::sleep(POLL_INTERVAL).await;
        current = client.get_operation(&current.name).await?;
    }
}

/// Extract the `name` of the resource a finished operation produced.
///
/// # Errors
///
/// Returns [`OperationError::MissingResponse`] when the operation carries
/// no response payload or the payload has no resource name.
pub fn response_resource_name(operation: &Operation) -> Result<String> {
    operation
        .response
        .as_ref()
        .and_then(|response| response.get("name"))
        .and_then(Value::as_str)
        .map(str::to_owned)
        .ok_or_else(|| {
            OperationError::MissingResponse {
                name: operation.name.clone(),
            }
            .into()
        })
}
