use std::{sync::Arc, time::Duration};

use tokio::sync::Mutex;

use crate::{
    notify::{Notification, Notifier, DEFAULT_NOTIFICATION_DURATION},
    state::WorkflowState,
    transport::{HttpCollaborators, LookupService, SubmissionService},
};

/// One search → select → submit workflow.
///
/// Each instance owns its own state; several can run side by side. The state
/// lock is never held across a remote call, so the in-flight flags in
/// [`WorkflowState`] are what keep searches and submissions from overlapping.
pub struct FlowWorkflow {
    pub(crate) lookup: Arc<dyn LookupService>,
    pub(crate) submission: Arc<dyn SubmissionService>,
    pub(crate) notifier: Arc<dyn Notifier>,
    pub(crate) notification_duration: Duration,
    pub(crate) state: Mutex<WorkflowState>,
}

impl FlowWorkflow {
    pub fn new(
        lookup: Arc<dyn LookupService>,
        submission: Arc<dyn SubmissionService>,
        notifier: Arc<dyn Notifier>,
    ) -> Self {
        Self {
            lookup,
            submission,
            notifier,
            notification_duration: DEFAULT_NOTIFICATION_DURATION,
            state: Mutex::new(WorkflowState::new()),
        }
    }

    pub fn over_http(collaborators: HttpCollaborators, notifier: Arc<dyn Notifier>) -> Self {
        let collaborators = Arc::new(collaborators);
        Self::new(collaborators.clone(), collaborators, notifier)
    }

    pub fn with_notification_duration(mut self, duration: Duration) -> Self {
        self.notification_duration = duration;
        self
    }

    /// Copy of the current state for rendering.
    pub async fn snapshot(&self) -> WorkflowState {
        self.state.lock().await.clone()
    }

    pub(crate) fn notify_error(&self, description: impl Into<String>) {
        self.notifier
            .notify(Notification::error(description, self.notification_duration));
    }
}
