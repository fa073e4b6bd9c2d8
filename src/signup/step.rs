//! Step status and step records for the signup wizard.
//!
//! A step's status is a tiny state machine: a submitted step lands on
//! `pending` or `completed` depending on whether it completes
//! asynchronously, a saved step starts out `in-progress`, and `completed`
//! is terminal.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use serde_json::Value;

/// Completion status of a single wizard step.
///
/// Serialized with the wire strings `"in-progress"`, `"pending"` and
/// `"completed"`.
///
/// # Example
///
/// ```rust
/// use onboard::signup::StepStatus;
///
/// assert_eq!(StepStatus::Pending.name(), "pending");
/// assert!(StepStatus::Completed.is_terminal());
/// assert!(!StepStatus::InProgress.is_terminal());
/// ```
#[derive(Clone, Copy, PartialEq, Eq, Debug, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum StepStatus {
    /// The step has been saved but not submitted
    InProgress,
    /// The step was submitted and awaits an asynchronous completion signal
    Pending,
    /// The step is done; terminal for the processed action
    Completed,
}

impl StepStatus {
    /// Get the status name for display/logging.
    pub fn name(&self) -> &str {
        match self {
            Self::InProgress => "in-progress",
            Self::Pending => "pending",
            Self::Completed => "completed",
        }
    }

    /// Check if this is a terminal status.
    ///
    /// Terminal statuses are never regressed by the processed action.
    pub fn is_terminal(&self) -> bool {
        matches!(self, Self::Completed)
    }
}

/// Persisted status and form data for one step of the current flow.
///
/// At most one record exists per `step_name`; the store preserves the
/// position a record was first inserted at, updates never reshuffle it.
#[derive(Clone, PartialEq, Debug, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct StepRecord {
    /// Unique key within the current flow's step sequence
    pub step_name: String,

    /// Opaque payload supplied by the step
    pub form_data: Value,

    /// Current completion status
    pub status: StepStatus,

    /// When this record was last mutated
    pub last_updated: DateTime<Utc>,
}
