use shared::{domain::FlowEndpoint, error::WorkflowError};
use tracing::{info, warn};

use crate::{
    notify::Notification,
    state::SearchOutcome,
    workflow::FlowWorkflow,
};

impl FlowWorkflow {
    /// Looks up the endpoints of `flow_id` and replaces the result set.
    ///
    /// An empty id is rejected locally and recorded as a field error. A
    /// transport failure is reported through the notifier and returned; the
    /// workflow falls back to the not-searched phase either way.
    pub async fn search(&self, flow_id: &str) -> Result<Vec<FlowEndpoint>, WorkflowError> {
        let flow_id = self.state.lock().await.begin_search(flow_id)?;

        let looked_up = self.lookup.lookup(&flow_id).await;

        let mut state = self.state.lock().await;
        match looked_up {
            Ok(results) => {
                let outcome = state.complete_search(results);
                let results = state.results().to_vec();
                drop(state);

                match outcome {
                    SearchOutcome::Found(count) => {
                        info!(flow_id = %flow_id, count, "flow lookup completed");
                    }
                    SearchOutcome::NoResults => {
                        info!(flow_id = %flow_id, "flow lookup returned no endpoints");
                        self.notifier
                            .notify(Notification::no_results(self.notification_duration));
                    }
                }
                Ok(results)
            }
            Err(err) => {
                state.fail_search();
                drop(state);

                warn!(flow_id = %flow_id, error = %format!("{err:#}"), "flow lookup failed");
                let err = WorkflowError::LookupFailed(format!("{err:#}"));
                self.notify_error(err.to_string());
                Err(err)
            }
        }
    }
}
