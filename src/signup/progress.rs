//! The signup progress store.
//!
//! An ordered collection of [`StepRecord`]s, one per step name, mutated
//! exclusively through [`SignupAction`]s and read through snapshots. The
//! transition logic is pure with respect to the clock: [`SignupProgress::apply`]
//! is a thin shell over [`SignupProgress::apply_at`], which takes `now`
//! explicitly.

use super::action::SignupAction;
use super::config::SignupConfig;
use super::step::{StepRecord, StepStatus};
use chrono::{DateTime, Utc};
use serde_json::Value;

/// Ordered store of step records for one signup session.
///
/// Invariants:
///
/// - at most one record per step name
/// - records keep the position they were first inserted at; updates never
///   reshuffle the sequence
/// - reads return defensive copies, so caller mutation of a returned value
///   cannot affect subsequent reads
///
/// # Example
///
/// ```rust
/// use onboard::signup::{SignupAction, SignupProgress, StaticConfig, StepStatus};
/// use serde_json::json;
///
/// let mut store = SignupProgress::new(StaticConfig::new().async_step("account-creation"));
///
/// store.apply(SignupAction::Submit {
///     step_name: "site-selection".to_string(),
///     form_data: Some(json!({ "url": "my-site.example.com" })),
/// });
/// store.apply(SignupAction::Submit {
///     step_name: "account-creation".to_string(),
///     form_data: None,
/// });
///
/// assert_eq!(store.find("site-selection").unwrap().status, StepStatus::Completed);
/// assert_eq!(store.find("account-creation").unwrap().status, StepStatus::Pending);
/// ```
#[derive(Clone, Debug)]
pub struct SignupProgress<C> {
    records: Vec<StepRecord>,
    config: C,
}

impl<C: SignupConfig> SignupProgress<C> {
    /// Create an empty store over the given configuration collaborator.
    pub fn new(config: C) -> Self {
        Self {
            records: Vec::new(),
            config,
        }
    }

    /// Snapshot of the full ordered sequence of current records.
    ///
    /// The returned vector is a defensive copy: mutating it has no effect
    /// on the store.
    pub fn get(&self) -> Vec<StepRecord> {
        self.records.clone()
    }

    /// Number of records currently in the store.
    pub fn len(&self) -> usize {
        self.records.len()
    }

    /// True when no step has been saved or submitted yet.
    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }

    /// Copy of the record for `step_name`, if one exists.
    pub fn find(&self, step_name: &str) -> Option<StepRecord> {
        self.records
            .iter()
            .find(|record| record.step_name == step_name)
            .cloned()
    }

    /// Apply an action at the current wall-clock time.
    pub fn apply(&mut self, action: SignupAction) {
        self.apply_at(action, Utc::now());
    }

    /// Apply an action at an explicit time.
    ///
    /// All transition logic lives here; `now` only ends up in
    /// `last_updated` fields.
    pub fn apply_at(&mut self, action: SignupAction, now: DateTime<Utc>) {
        match action {
            SignupAction::Submit {
                step_name,
                form_data,
            } => self.submit(step_name, form_data, now),
            SignupAction::Save {
                step_name,
                form_data,
                status,
            } => self.save(step_name, form_data, status, now),
            SignupAction::Processed { step_name } => self.processed(&step_name, now),
            SignupAction::ChangeFlow { flow_name } => self.change_flow(&flow_name),
        }
    }

    /// Decode and apply a raw dispatcher message.
    ///
    /// Messages that do not decode to a known action are silently ignored;
    /// callers relying on an action having been processed must verify
    /// through [`SignupProgress::get`].
    pub fn handle_message(&mut self, message: &Value) {
        if let Ok(action) = SignupAction::from_message(message) {
            self.apply(action);
        }
    }

    fn submit(&mut self, step_name: String, form_data: Option<Value>, now: DateTime<Utc>) {
        let status = if self.config.has_api_request(&step_name) {
            StepStatus::Pending
        } else {
            StepStatus::Completed
        };

        match self.position(&step_name) {
            Some(index) => {
                // Update in place: position and, absent new data, form data
                // are preserved.
                let record = &mut self.records[index];
                if let Some(data) = form_data {
                    record.form_data = data;
                }
                record.status = status;
                record.last_updated = now;
            }
            None => self.records.push(StepRecord {
                step_name,
                form_data: form_data.unwrap_or(Value::Null),
                status,
                last_updated: now,
            }),
        }
    }

    fn save(
        &mut self,
        step_name: String,
        form_data: Option<Value>,
        status: Option<StepStatus>,
        now: DateTime<Utc>,
    ) {
        match self.position(&step_name) {
            Some(index) => {
                // Saving an existing step refreshes data and timestamp but
                // never regresses its status unless one is given explicitly.
                let record = &mut self.records[index];
                if let Some(data) = form_data {
                    record.form_data = data;
                }
                if let Some(status) = status {
                    record.status = status;
                }
                record.last_updated = now;
            }
            None => self.records.push(StepRecord {
                step_name,
                form_data: form_data.unwrap_or(Value::Null),
                status: status.unwrap_or(StepStatus::InProgress),
                last_updated: now,
            }),
        }
    }

    fn processed(&mut self, step_name: &str, now: DateTime<Utc>) {
        if let Some(record) = self
            .records
            .iter_mut()
            .find(|record| record.step_name == step_name)
        {
            // Idempotent on completed steps, timestamp included.
            if !record.status.is_terminal() {
                record.status = StepStatus::Completed;
                record.last_updated = now;
            }
        }
    }

    fn change_flow(&mut self, flow_name: &str) {
        let steps = self.config.flow_steps(flow_name);
        self.records
            .retain(|record| steps.iter().any(|step| *step == record.step_name));
    }

    fn position(&self, step_name: &str) -> Option<usize> {
        self.records
            .iter()
            .position(|record| record.step_name == step_name)
    }
}
