//! Workflow state container and its transitions.
//!
//! Every function here is synchronous and side-effect free apart from the
//! mutation of [`WorkflowState`]; the controllers in `search` and `selection`
//! wrap them with the remote calls and notifications.

use std::collections::HashSet;

use shared::{
    domain::{FlowEndpoint, FlowId, NodeId, Phase},
    error::WorkflowError,
};

/// Outcome of applying a completed lookup.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SearchOutcome {
    Found(usize),
    NoResults,
}

#[derive(Debug, Clone, Default)]
pub struct WorkflowState {
    query_input: String,
    field_error: Option<String>,
    results: Vec<FlowEndpoint>,
    selected: HashSet<NodeId>,
    phase: Phase,
    searching: bool,
    submitting: bool,
}

impl WorkflowState {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn phase(&self) -> Phase {
        self.phase
    }

    pub fn query_input(&self) -> &str {
        &self.query_input
    }

    pub fn field_error(&self) -> Option<&str> {
        self.field_error.as_deref()
    }

    pub fn results(&self) -> &[FlowEndpoint] {
        &self.results
    }

    pub fn selected(&self) -> &HashSet<NodeId> {
        &self.selected
    }

    pub fn is_searching(&self) -> bool {
        self.searching
    }

    pub fn is_submitting(&self) -> bool {
        self.submitting
    }

    pub fn is_selected(&self, node_id: &NodeId) -> bool {
        self.selected.contains(node_id)
    }

    pub fn can_search(&self) -> bool {
        !self.searching && !self.submitting
    }

    pub fn can_submit(&self) -> bool {
        !self.selected.is_empty() && !self.searching && !self.submitting
    }

    /// Checked state of the "select all" box.
    pub fn all_selected(&self) -> bool {
        !self.results.is_empty() && self.selected.len() == self.distinct_node_count()
    }

    /// Selected items in result order.
    pub fn selected_endpoints(&self) -> impl Iterator<Item = &FlowEndpoint> {
        self.results
            .iter()
            .filter(|item| self.selected.contains(&item.node_id))
    }

    fn distinct_node_count(&self) -> usize {
        self.results
            .iter()
            .map(|item| &item.node_id)
            .collect::<HashSet<_>>()
            .len()
    }

    fn contains_node(&self, node_id: &NodeId) -> bool {
        self.results.iter().any(|item| &item.node_id == node_id)
    }

    pub fn begin_search(&mut self, flow_id: &str) -> Result<FlowId, WorkflowError> {
        if flow_id.is_empty() {
            if !self.searching {
                self.query_input.clear();
            }
            let err = WorkflowError::EmptyFlowId;
            self.field_error = Some(err.to_string());
            return Err(err);
        }
        if self.searching {
            return Err(WorkflowError::SearchInFlight);
        }
        if self.submitting {
            return Err(WorkflowError::SubmissionInFlight);
        }

        self.query_input = flow_id.to_string();
        self.field_error = None;
        self.selected.clear();
        self.searching = true;
        Ok(FlowId::new(flow_id))
    }

    pub fn complete_search(&mut self, results: Vec<FlowEndpoint>) -> SearchOutcome {
        self.searching = false;
        self.results = results;
        self.selected.clear();
        self.phase = Phase::Searched;

        if self.results.is_empty() {
            SearchOutcome::NoResults
        } else {
            SearchOutcome::Found(self.results.len())
        }
    }

    pub fn fail_search(&mut self) {
        self.searching = false;
        self.results.clear();
        self.selected.clear();
        self.phase = Phase::NotSearched;
    }

    /// Flips membership of `node_id`. Returns `false` when nothing changed:
    /// the id is not part of the current results, or a search is pending.
    pub fn toggle(&mut self, node_id: &NodeId) -> bool {
        if self.searching || !self.contains_node(node_id) {
            return false;
        }
        if !self.selected.remove(node_id) {
            self.selected.insert(node_id.clone());
        }
        true
    }

    pub fn toggle_all(&mut self) {
        if self.searching {
            return;
        }
        if self.selected.len() == self.distinct_node_count() {
            self.selected.clear();
        } else {
            self.selected = self
                .results
                .iter()
                .map(|item| item.node_id.clone())
                .collect();
        }
    }

    /// Marks a submission as in flight and returns the `formatted` payload.
    pub fn begin_submit(&mut self) -> Result<Vec<String>, WorkflowError> {
        if self.submitting {
            return Err(WorkflowError::SubmissionInFlight);
        }
        if self.searching {
            return Err(WorkflowError::SearchInFlight);
        }
        if self.selected.is_empty() {
            return Err(WorkflowError::EmptySelection);
        }

        let payload: Vec<String> = self
            .selected_endpoints()
            .map(|item| item.formatted.clone())
            .collect();
        self.submitting = true;
        Ok(payload)
    }

    pub fn complete_submit(&mut self) {
        self.submitting = false;
        self.selected.clear();
        self.results.clear();
        self.query_input.clear();
        self.field_error = None;
        self.phase = Phase::NotSearched;
    }

    pub fn fail_submit(&mut self) {
        self.submitting = false;
    }
}

#[cfg(test)]
#[path = "tests/state_tests.rs"]
mod tests;
