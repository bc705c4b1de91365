use crate::core::{Fault, FaultKind};

/// Feedback prefix chosen for a fault.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FeedbackCategory {
    MissingData,
    DataIssue,
    SystemError,
}

impl FeedbackCategory {
    /// Classifies by the innermost cause of `fault`.
    pub fn classify(fault: &Fault) -> Self {
        match fault.innermost().kind() {
            FaultKind::MissingArgument => FeedbackCategory::MissingData,
            FaultKind::InvalidArgument => FeedbackCategory::DataIssue,
            FaultKind::System => FeedbackCategory::SystemError,
        }
    }

    pub fn prefix(&self) -> &'static str {
        match self {
            FeedbackCategory::MissingData => "Missing Data: ",
            FeedbackCategory::DataIssue => "Data Issue: ",
            FeedbackCategory::SystemError => "System Error: ",
        }
    }

    /// Prefix followed by the innermost message.
    pub fn render(fault: &Fault) -> String {
        format!("{}{}", Self::classify(fault).prefix(), fault.innermost().message())
    }
}

/// Which branch of the pipeline an action ended in.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ActionOutcome<K> {
    /// Declarative schema failed; field messages live on the edit context.
    SchemaRejected,
    /// Business rules added this many messages; nothing was persisted.
    RuleViolations(usize),
    /// Create succeeded with the new key.
    Saved(K),
    /// Update, discontinue or activate changed this many records.
    Applied(u64),
    /// The operation completed but changed nothing.
    NotApplied,
    /// The operation raised a fault, already rendered into feedback.
    Faulted(FeedbackCategory),
}

impl<K> ActionOutcome<K> {
    /// `true` when the persistence operation ran and changed something.
    pub fn is_success(&self) -> bool {
        matches!(self, ActionOutcome::Saved(_) | ActionOutcome::Applied(_))
    }

    /// `true` when a persistence operation was attempted.
    pub fn reached_persistence(&self) -> bool {
        matches!(
            self,
            ActionOutcome::Saved(_)
                | ActionOutcome::Applied(_)
                | ActionOutcome::NotApplied
                | ActionOutcome::Faulted(_)
        )
    }
}
