use shared::{domain::NodeId, error::WorkflowError, protocol::SubmissionReceipt};
use tracing::{debug, info, warn};

use crate::{notify::Notification, workflow::FlowWorkflow};

impl FlowWorkflow {
    pub async fn toggle(&self, node_id: &NodeId) {
        if !self.state.lock().await.toggle(node_id) {
            debug!(node_id = %node_id, "ignoring toggle outside the result set or during a search");
        }
    }

    pub async fn toggle_all(&self) {
        self.state.lock().await.toggle_all();
    }

    /// Sends the `formatted` text of every selected endpoint, in result order,
    /// to the documentation service. On success the workflow starts over.
    pub async fn submit(&self) -> Result<SubmissionReceipt, WorkflowError> {
        let payload = self.state.lock().await.begin_submit()?;

        let submitted = self.submission.submit(&payload).await;

        let mut state = self.state.lock().await;
        match submitted {
            Ok(receipt) => {
                state.complete_submit();
                drop(state);

                info!(count = receipt.submitted, "endpoints submitted for documentation");
                self.notifier
                    .notify(Notification::submitted(self.notification_duration));
                Ok(receipt)
            }
            Err(err) => {
                state.fail_submit();
                drop(state);

                warn!(count = payload.len(), error = %format!("{err:#}"), "submission failed");
                let err = WorkflowError::SubmissionFailed(format!("{err:#}"));
                self.notify_error(err.to_string());
                Err(err)
            }
        }
    }
}
