use std::fmt;

use clap::ValueEnum;
use colored::Colorize;
use serde::{Deserialize, Serialize};

/// The six stages of the design-request workflow, in natural order.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, ValueEnum)]
#[serde(rename_all = "snake_case")]
pub enum TicketStatus {
    /// Request received, no assessment yet
    Submitted,
    /// Request under triage
    Assessment,
    /// Team member designated, work not started
    Assigned,
    /// Active work, tracked time accrues
    Production,
    /// Work complete, under review
    QaReview,
    /// Terminal state
    Delivered,
}

impl TicketStatus {
    /// All stages in workflow order, for rendering kanban columns.
    pub const ALL: [TicketStatus; 6] = [
        TicketStatus::Submitted,
        TicketStatus::Assessment,
        TicketStatus::Assigned,
        TicketStatus::Production,
        TicketStatus::QaReview,
        TicketStatus::Delivered,
    ];

    /// Zero-based position in the workflow order.
    pub fn position(self) -> usize {
        match self {
            TicketStatus::Submitted => 0,
            TicketStatus::Assessment => 1,
            TicketStatus::Assigned => 2,
            TicketStatus::Production => 3,
            TicketStatus::QaReview => 4,
            TicketStatus::Delivered => 5,
        }
    }

    pub fn label(self) -> &'static str {
        match self {
            TicketStatus::Submitted => "Submitted",
            TicketStatus::Assessment => "Assessment",
            TicketStatus::Assigned => "Assigned",
            TicketStatus::Production => "In Production",
            TicketStatus::QaReview => "QA Review",
            TicketStatus::Delivered => "Delivered",
        }
    }

    /// Short footer hint shown under a kanban column.
    pub fn hint(self) -> &'static str {
        match self {
            TicketStatus::Submitted | TicketStatus::Assessment => "Awaiting action",
            TicketStatus::Assigned => "Ready to start",
            TicketStatus::Production => "In progress",
            TicketStatus::QaReview => "Under review",
            TicketStatus::Delivered => "All complete",
        }
    }

    /// Display color as an (r, g, b) triple.
    pub fn color(self) -> (u8, u8, u8) {
        match self {
            TicketStatus::Submitted => (59, 130, 246),  // blue
            TicketStatus::Assessment => (168, 85, 247), // purple
            TicketStatus::Assigned => (245, 158, 11),   // amber
            TicketStatus::Production => (249, 115, 22), // orange
            TicketStatus::QaReview => (6, 182, 212),    // cyan
            TicketStatus::Delivered => (34, 197, 94),   // green
        }
    }

    /// Get the colored label for terminal output.
    pub fn colored(self) -> String {
        let (r, g, b) = self.color();
        self.label().truecolor(r, g, b).to_string()
    }

    pub fn is_terminal(self) -> bool {
        self == TicketStatus::Delivered
    }

    /// Stages a ticket may arrive from when moving into this stage.
    pub fn allowed_predecessors(self) -> &'static [TicketStatus] {
        match self {
            TicketStatus::Submitted => &[],
            TicketStatus::Assessment => &[TicketStatus::Submitted],
            TicketStatus::Assigned => &[TicketStatus::Assessment],
            // QA rejection sends a ticket back into production
            TicketStatus::Production => &[TicketStatus::Assigned, TicketStatus::QaReview],
            TicketStatus::QaReview => &[TicketStatus::Production],
            TicketStatus::Delivered => &[TicketStatus::QaReview],
        }
    }

    /// Whether moving a ticket from `from` into `to` follows the workflow.
    pub fn is_valid_transition(from: TicketStatus, to: TicketStatus) -> bool {
        to.allowed_predecessors().contains(&from)
    }
}

impl fmt::Display for TicketStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.label())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_all_in_workflow_order() {
        for (i, status) in TicketStatus::ALL.iter().enumerate() {
            assert_eq!(status.position(), i);
        }
    }

    #[test]
    fn test_only_delivered_is_terminal() {
        for status in TicketStatus::ALL {
            assert_eq!(status.is_terminal(), status == TicketStatus::Delivered);
        }
    }

    #[test]
    fn test_forward_transitions_allowed() {
        assert!(TicketStatus::is_valid_transition(
            TicketStatus::Submitted,
            TicketStatus::Assessment
        ));
        assert!(TicketStatus::is_valid_transition(
            TicketStatus::Production,
            TicketStatus::QaReview
        ));
        assert!(TicketStatus::is_valid_transition(
            TicketStatus::QaReview,
            TicketStatus::Delivered
        ));
    }

    #[test]
    fn test_qa_rejection_returns_to_production() {
        assert!(TicketStatus::is_valid_transition(
            TicketStatus::QaReview,
            TicketStatus::Production
        ));
    }

    #[test]
    fn test_backward_and_skip_transitions_rejected() {
        assert!(!TicketStatus::is_valid_transition(
            TicketStatus::Delivered,
            TicketStatus::Production
        ));
        assert!(!TicketStatus::is_valid_transition(
            TicketStatus::Submitted,
            TicketStatus::Delivered
        ));
        assert!(!TicketStatus::is_valid_transition(
            TicketStatus::Assigned,
            TicketStatus::Assessment
        ));
    }

    #[test]
    fn test_serde_uses_snake_case() {
        let json = serde_json::to_string(&TicketStatus::QaReview).unwrap();
        assert_eq!(json, "\"qa_review\"");
        let back: TicketStatus = serde_json::from_str("\"qa_review\"").unwrap();
        assert_eq!(back, TicketStatus::QaReview);
    }
}
