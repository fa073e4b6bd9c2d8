//! The signup wizard progress store and its surroundings.
//!
//! This module contains:
//! - Step records and their status state machine ([`StepRecord`], [`StepStatus`])
//! - Actions and raw-message decoding ([`SignupAction`], [`ActionError`])
//! - Configuration collaborator seams ([`FlowConfig`], [`StepConfig`])
//! - The store itself ([`SignupProgress`])
//! - Single-threaded message fan-out ([`Dispatcher`])
//!
//! All mutation flows through actions; reads are defensive copies.

mod action;
mod config;
mod dispatcher;
mod progress;
mod step;

pub use action::{
    ActionError, SignupAction, CHANGE_SIGNUP_FLOW, PROCESSED_SIGNUP_STEP, SAVE_SIGNUP_STEP,
    SUBMIT_SIGNUP_STEP,
};
pub use config::{FlowConfig, SignupConfig, StaticConfig, StepConfig};
pub use dispatcher::{subscribe, Dispatcher, SharedProgress};
pub use progress::SignupProgress;
pub use step::{StepRecord, StepStatus};
