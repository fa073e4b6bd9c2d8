//! Flow and step configuration collaborators.
//!
//! Flow and step configuration is external static data. The store only
//! needs two lookups from it, expressed here as traits so callers can back
//! them however they like; [`StaticConfig`] is the map-backed
//! implementation used in tests and simple embeddings.

use std::collections::{HashMap, HashSet};

/// Lookup of a flow's ordered step names.
pub trait FlowConfig {
    /// The ordered step names of `flow_name`; empty for an unknown flow.
    fn flow_steps(&self, flow_name: &str) -> Vec<String>;
}

/// Lookup of per-step completion behavior.
pub trait StepConfig {
    /// Whether `step_name` completes through an asynchronous API request.
    ///
    /// Submitting such a step lands on `pending` instead of `completed`.
    /// Unknown steps complete synchronously.
    fn has_api_request(&self, step_name: &str) -> bool;
}

/// The full configuration surface the progress store depends on.
pub trait SignupConfig: FlowConfig + StepConfig {}

impl<T: FlowConfig + StepConfig> SignupConfig for T {}

/// Map-backed configuration.
///
/// # Example
///
/// ```rust
/// use onboard::signup::{FlowConfig, StaticConfig, StepConfig};
///
/// let config = StaticConfig::new()
///     .flow("onboarding", &["site-selection", "theme-selection"])
///     .async_step("account-creation");
///
/// assert_eq!(config.flow_steps("onboarding").len(), 2);
/// assert!(config.flow_steps("unknown-flow").is_empty());
/// assert!(config.has_api_request("account-creation"));
/// assert!(!config.has_api_request("site-selection"));
/// ```
#[derive(Clone, Debug, Default)]
pub struct StaticConfig {
    flows: HashMap<String, Vec<String>>,
    async_steps: HashSet<String>,
}

impl StaticConfig {
    /// Create an empty configuration.
    pub fn new() -> Self {
        Self::default()
    }

    /// Register a flow with its ordered step names.
    pub fn flow(mut self, name: &str, steps: &[&str]) -> Self {
        self.flows
            .insert(name.to_string(), steps.iter().map(|s| s.to_string()).collect());
        self
    }

    /// Mark a step as completing through an asynchronous API request.
    pub fn async_step(mut self, name: &str) -> Self {
        self.async_steps.insert(name.to_string());
        self
    }
}

impl FlowConfig for StaticConfig {
    fn flow_steps(&self, flow_name: &str) -> Vec<String> {
        self.flows.get(flow_name).cloned().unwrap_or_default()
    }
}

impl StepConfig for StaticConfig {
    fn has_api_request(&self, step_name: &str) -> bool {
        self.async_steps.contains(step_name)
    }
}
