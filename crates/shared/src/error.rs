use serde::{Deserialize, Serialize};
use thiserror::Error;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ErrorCode {
    Validation,
    Busy,
    Transport,
}

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum WorkflowError {
    #[error("flow id is required")]
    EmptyFlowId,
    #[error("select at least one endpoint before submitting")]
    EmptySelection,
    #[error("a search is already in progress")]
    SearchInFlight,
    #[error("a submission is already in progress")]
    SubmissionInFlight,
    #[error("lookup failed: {0}")]
    LookupFailed(String),
    #[error("submission failed: {0}")]
    SubmissionFailed(String),
}

impl WorkflowError {
    pub fn code(&self) -> ErrorCode {
        match self {
            Self::EmptyFlowId | Self::EmptySelection => ErrorCode::Validation,
            Self::SearchInFlight | Self::SubmissionInFlight => ErrorCode::Busy,
            Self::LookupFailed(_) | Self::SubmissionFailed(_) => ErrorCode::Transport,
        }
    }

    /// Transport failures are the only errors the operator is notified about;
    /// the rest are disabled actions or field-level messages.
    pub fn is_transport(&self) -> bool {
        self.code() == ErrorCode::Transport
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn transport_errors_keep_their_prefix() {
        let err = WorkflowError::LookupFailed("HTTP status server error (500)".into());
        assert_eq!(err.to_string(), "lookup failed: HTTP status server error (500)");
        assert!(err.is_transport());

        let err = WorkflowError::SubmissionFailed("connection refused".into());
        assert!(err.to_string().starts_with("submission failed"));
    }

    #[test]
    fn local_rejections_are_not_transport_errors() {
        assert_eq!(WorkflowError::EmptyFlowId.code(), ErrorCode::Validation);
        assert_eq!(WorkflowError::EmptySelection.code(), ErrorCode::Validation);
        assert_eq!(WorkflowError::SearchInFlight.code(), ErrorCode::Busy);
        assert!(!WorkflowError::SubmissionInFlight.is_transport());
    }
}
