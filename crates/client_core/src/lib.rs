//! Search → select → submit workflow for documenting flow endpoints.
//!
//! [`FlowWorkflow`] is the single entry point: `search` looks up the endpoints
//! of a flow, `toggle`/`toggle_all` manage the selection, and `submit` forwards
//! the selected endpoints to the documentation service. Rendering layers read
//! [`WorkflowState`] snapshots and subscribe to [`Notification`]s.

pub mod notify;
mod search;
mod selection;
pub mod state;
pub mod transport;
mod workflow;

pub use notify::{BroadcastNotifier, Notification, NotificationKind, Notifier};
pub use state::{SearchOutcome, WorkflowState};
pub use transport::{decode_lookup_body, HttpCollaborators, LookupService, SubmissionService};
pub use workflow::FlowWorkflow;

#[cfg(test)]
#[path = "tests/workflow_tests.rs"]
mod tests;
