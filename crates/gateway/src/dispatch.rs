//! Batch dispatch.

use executor::{Executor, Host, ProcessHost};
use tracing::{Instrument, info, info_span, warn};
use uuid::Uuid;

use crate::{Action, ActionOutcome, BatchRequest, BatchResponse};

/// Fans a batch out to the executor one action at a time.
///
/// Actions run strictly in request order, each awaited before the next
/// starts, so two actions in one batch never race on the same host
/// resource. Separate batches share nothing and may run concurrently.
#[derive(Debug, Default)]
pub struct Gateway<H = ProcessHost> {
    executor: Executor<H>,
}

impl Gateway<ProcessHost> {
    pub fn new() -> Self {
        Self::with_executor(Executor::new())
    }
}

impl<H: Host> Gateway<H> {
    pub fn with_executor(executor: Executor<H>) -> Self {
        Self { executor }
    }

    pub fn executor(&self) -> &Executor<H> {
        &self.executor
    }

    /// Run every action and collect one outcome per action.
    ///
    /// Never fails as a whole: an action's error lands in its own outcome
    /// and the remaining actions still run.
    pub async fn dispatch(&self, batch: BatchRequest) -> BatchResponse {
        let batch_id = Uuid::new_v4();
        let span = info_span!("batch", %batch_id, actions = batch.actions.len());

        async move {
            let mut results = Vec::with_capacity(batch.actions.len());
            for action in batch.actions {
                results.push(self.dispatch_one(action).await);
            }
            BatchResponse { results }
        }
        .instrument(span)
        .await
    }

    async fn dispatch_one(&self, action: Action) -> ActionOutcome {
        match self.executor.execute(&action.tool, &action.args).await {
            Ok(output) => {
                info!(tool = %action.tool, device = %action.device, "action succeeded");
                ActionOutcome::success(action, output)
            }
            Err(error) => {
                warn!(tool = %action.tool, device = %action.device, %error, "action failed");
                ActionOutcome::failure(action, &error)
            }
        }
    }
}
