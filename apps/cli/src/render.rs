//! Plain-text rendering of workflow snapshots and notifications.

use std::fmt::Write as _;

use client_core::{Notification, NotificationKind, WorkflowState};
use shared::domain::{NodeId, Phase};

pub fn format_state(state: &WorkflowState) -> String {
    let mut out = String::new();

    match state.phase() {
        Phase::NotSearched => {
            let _ = writeln!(out, "flow id: {}", display_input(state.query_input()));
            if let Some(err) = state.field_error() {
                let _ = writeln!(out, "  ! {err}");
            }
            if state.is_searching() {
                let _ = writeln!(out, "searching...");
            } else {
                let _ = writeln!(out, "type 'search <flow-id>' to look up endpoints");
            }
        }
        Phase::Searched if state.results().is_empty() => {
            let _ = writeln!(out, "no endpoints for flow '{}'", state.query_input());
        }
        Phase::Searched => {
            let mark = if state.all_selected() { "[x]" } else { "[ ]" };
            let _ = writeln!(out, "{mark} available endpoints ({})", state.results().len());
            for (row, item) in state.results().iter().enumerate() {
                let mark = if state.is_selected(&item.node_id) {
                    "[x]"
                } else {
                    "[ ]"
                };
                let _ = writeln!(
                    out,
                    "{:>3}. {mark} {:<6} {}",
                    row + 1,
                    item.method,
                    item.endpoint
                );
            }
            let status = if state.is_submitting() {
                "sending...".to_string()
            } else if state.can_submit() {
                format!("{} selected; 'submit' to send", state.selected().len())
            } else {
                "select endpoints to enable 'submit'".to_string()
            };
            let _ = writeln!(out, "{status}");
        }
    }

    out
}

pub fn format_notification(notification: &Notification) -> String {
    let tag = match notification.kind {
        NotificationKind::Info => "info",
        NotificationKind::Success => "ok",
        NotificationKind::Error => "error",
    };
    format!(
        "[{tag}] {}: {}",
        notification.title, notification.description
    )
}

/// Resolves a `toggle` argument: an exact node id first, then a 1-based row
/// number, otherwise the text taken as a node id.
pub fn resolve_toggle_target(state: &WorkflowState, target: &str) -> NodeId {
    let node_id = NodeId::new(target);
    if state.results().iter().any(|item| item.node_id == node_id) {
        return node_id;
    }
    target
        .parse::<usize>()
        .ok()
        .and_then(|row| row.checked_sub(1))
        .and_then(|index| state.results().get(index))
        .map(|item| item.node_id.clone())
        .unwrap_or_else(|| NodeId::new(target))
}

fn display_input(input: &str) -> &str {
    if input.is_empty() {
        "(empty)"
    } else {
        input
    }
}

#[cfg(test)]
#[path = "tests/render_tests.rs"]
mod tests;
