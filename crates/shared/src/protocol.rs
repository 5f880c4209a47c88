use serde::{Deserialize, Serialize};

use crate::domain::FlowId;

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct LookupRequest {
    pub flow_id: FlowId,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SubmissionRequest {
    pub endpoints: Vec<String>,
}

/// What the documentation service acknowledged for one submission.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SubmissionReceipt {
    pub submitted: usize,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub response: Option<serde_json::Value>,
}

#[cfg(test)]
mod tests {
    use serde_json::json;

    use super::*;

    #[test]
    fn lookup_request_uses_camel_case_field() {
        let body = serde_json::to_value(LookupRequest {
            flow_id: FlowId::new("123"),
        })
        .expect("serialize");
        assert_eq!(body, json!({ "flowId": "123" }));
    }

    #[test]
    fn submission_request_is_a_plain_string_list() {
        let body = serde_json::to_value(SubmissionRequest {
            endpoints: vec!["GET https://api.example.com/a".into()],
        })
        .expect("serialize");
        assert_eq!(body, json!({ "endpoints": ["GET https://api.example.com/a"] }));
    }
}
