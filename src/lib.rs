//! Onboard: client-side business logic for a signup wizard and its billing
//! products.
//!
//! The crate has two independent halves with no shared state:
//!
//! - **Purchase predicates**: pure boolean functions classifying a purchase
//!   record (removable, cancelable, paid with credits, recently subscribed).
//! - **Signup progress store**: an ordered, in-memory collection of step
//!   records for a multi-step wizard, mutated exclusively by dispatched
//!   actions and read through immutable snapshots.
//!
//! # Core Concepts
//!
//! - **Purchase**: a plain, read-only record describing a billing product
//! - **Step record**: status and form data for one wizard step
//! - **Actions**: the only way to mutate the progress store
//! - **Dispatcher**: single-threaded fan-out of raw `{type, data}` messages
//!
//! # Example
//!
//! ```rust
//! use onboard::signup::{SignupAction, SignupProgress, StaticConfig, StepStatus};
//! use serde_json::json;
//!
//! let config = StaticConfig::new().flow("onboarding", &["site-selection"]);
//! let mut store = SignupProgress::new(config);
//!
//! store.apply(SignupAction::Submit {
//!     step_name: "site-selection".to_string(),
//!     form_data: Some(json!({ "url": "my-site.example.com" })),
//! });
//!
//! let records = store.get();
//! assert_eq!(records.len(), 1);
//! assert_eq!(records[0].status, StepStatus::Completed);
//! ```

pub mod purchases;
pub mod signup;

// Re-export commonly used types
pub use purchases::{
    is_cancelable, is_paid_with_credits, is_removable, subscribed_within_past_week, Purchase,
};
pub use signup::{Dispatcher, SignupAction, SignupProgress, StepRecord, StepStatus};
