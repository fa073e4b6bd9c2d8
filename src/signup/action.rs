//! Actions that mutate the signup progress store.
//!
//! The store only changes in response to one of the four actions defined
//! here. Actions arrive either as typed [`SignupAction`] values or as raw
//! `{ "type": ..., "data": ... }` JSON messages from the dispatcher, which
//! [`SignupAction::from_message`] decodes.

use super::step::StepStatus;
use serde_json::Value;
use thiserror::Error;

/// Action type tag for submitting a step.
pub const SUBMIT_SIGNUP_STEP: &str = "SUBMIT_SIGNUP_STEP";
/// Action type tag for saving a step.
pub const SAVE_SIGNUP_STEP: &str = "SAVE_SIGNUP_STEP";
/// Action type tag for marking a step's submission as processed.
pub const PROCESSED_SIGNUP_STEP: &str = "PROCESSED_SIGNUP_STEP";
/// Action type tag for switching to a different flow.
pub const CHANGE_SIGNUP_FLOW: &str = "CHANGE_SIGNUP_FLOW";

/// Errors that can occur while decoding a raw action message.
///
/// The store swallows all of these (an undecodable message is ignored);
/// the type exists so the decoding seam is an explicit `Result` and other
/// callers can observe why a message was rejected.
#[derive(Debug, Error, PartialEq, Eq)]
pub enum ActionError {
    /// The message is not a JSON object
    #[error("action message is not a JSON object")]
    NotAnObject,

    /// The message has no string `type` field
    #[error("action message has no type")]
    MissingType,

    /// The `type` field does not name a known action
    #[error("unrecognized action type: {0}")]
    UnrecognizedType(String),

    /// A required or ill-typed field in `data`
    #[error("malformed action data: {0}")]
    MalformedData(&'static str),
}

/// A typed mutation of the signup progress store.
#[derive(Clone, PartialEq, Debug)]
pub enum SignupAction {
    /// Upsert a step as submitted; lands on `pending` or `completed`
    /// depending on the step's configuration
    Submit {
        step_name: String,
        form_data: Option<Value>,
    },

    /// Upsert a step as saved; a new record defaults to `in-progress`,
    /// an existing record keeps its status unless one is given explicitly
    Save {
        step_name: String,
        form_data: Option<Value>,
        status: Option<StepStatus>,
    },

    /// Mark a submitted step's asynchronous completion; idempotent on
    /// already-completed steps
    Processed { step_name: String },

    /// Switch to a different flow, discarding records for steps the new
    /// flow does not contain
    ChangeFlow { flow_name: String },
}

impl SignupAction {
    /// Decode a raw `{ "type": ..., "data": ... }` dispatcher message.
    ///
    /// # Example
    ///
    /// ```rust
    /// use onboard::signup::SignupAction;
    /// use serde_json::json;
    ///
    /// let message = json!({
    ///     "type": "SUBMIT_SIGNUP_STEP",
    ///     "data": { "stepName": "site-selection" },
    /// });
    ///
    /// let action = SignupAction::from_message(&message).unwrap();
    /// assert!(matches!(action, SignupAction::Submit { .. }));
    ///
    /// assert!(SignupAction::from_message(&json!({ "type": "NOT_AN_ACTION" })).is_err());
    /// ```
    pub fn from_message(message: &Value) -> Result<Self, ActionError> {
        let object = message.as_object().ok_or(ActionError::NotAnObject)?;
        let kind = object
            .get("type")
            .and_then(Value::as_str)
            .ok_or(ActionError::MissingType)?;
        let data = object.get("data").cloned().unwrap_or(Value::Null);

        match kind {
            SUBMIT_SIGNUP_STEP => Ok(Self::Submit {
                step_name: step_name(&data)?,
                form_data: form_data(&data),
            }),
            SAVE_SIGNUP_STEP => Ok(Self::Save {
                step_name: step_name(&data)?,
                form_data: form_data(&data),
                status: status(&data)?,
            }),
            PROCESSED_SIGNUP_STEP => Ok(Self::Processed {
                step_name: step_name(&data)?,
            }),
            CHANGE_SIGNUP_FLOW => {
                let flow_name = data
                    .get("flowName")
                    .and_then(Value::as_str)
                    .ok_or(ActionError::MalformedData("flowName"))?;
                Ok(Self::ChangeFlow {
                    flow_name: flow_name.to_string(),
                })
            }
            other => Err(ActionError::UnrecognizedType(other.to_string())),
        }
    }
}

fn step_name(data: &Value) -> Result<String, ActionError> {
    data.get("stepName")
        .and_then(Value::as_str)
        .map(str::to_string)
        .ok_or(ActionError::MalformedData("stepName"))
}

fn form_data(data: &Value) -> Option<Value> {
    data.get("formData").cloned()
}

fn status(data: &Value) -> Result<Option<StepStatus>, ActionError> {
    match data.get("status") {
        None | Some(Value::Null) => Ok(None),
        Some(value) => serde_json::from_value(value.clone())
            .map(Some)
            .map_err(|_| ActionError::MalformedData("status")),
    }
}
