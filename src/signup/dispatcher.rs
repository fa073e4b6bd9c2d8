//! Single-threaded action dispatcher.
//!
//! The store mutates in response to raw `{ "type": ..., "data": ... }`
//! messages delivered one at a time. [`Dispatcher`] is the in-process
//! fan-out: handlers run synchronously in registration order, so delivery
//! is FIFO and there is never a concurrent writer.

use super::config::SignupConfig;
use super::progress::SignupProgress;
use serde_json::Value;
use std::cell::RefCell;
use std::rc::Rc;

/// A progress store shared between the dispatcher and its owner.
///
/// Single-threaded by contract, hence `Rc<RefCell<..>>` rather than a lock.
pub type SharedProgress<C> = Rc<RefCell<SignupProgress<C>>>;

/// Synchronous fan-out of raw action messages.
///
/// # Example
///
/// ```rust
/// use onboard::signup::{subscribe, Dispatcher, SignupProgress, StaticConfig};
/// use serde_json::json;
/// use std::rc::Rc;
///
/// let store = SignupProgress::new(StaticConfig::new()).into_shared();
/// let mut dispatcher = Dispatcher::new();
/// subscribe(&mut dispatcher, Rc::clone(&store));
///
/// dispatcher.dispatch(&json!({
///     "type": "SUBMIT_SIGNUP_STEP",
///     "data": { "stepName": "site-selection" },
/// }));
///
/// assert_eq!(store.borrow().len(), 1);
/// ```
#[derive(Default)]
pub struct Dispatcher {
    handlers: Vec<Box<dyn FnMut(&Value)>>,
}

impl Dispatcher {
    /// Create a dispatcher with no subscribers.
    pub fn new() -> Self {
        Self::default()
    }

    /// Register a handler for every subsequent message.
    pub fn register<F>(&mut self, handler: F)
    where
        F: FnMut(&Value) + 'static,
    {
        self.handlers.push(Box::new(handler));
    }

    /// Deliver a message to every handler, in registration order.
    pub fn dispatch(&mut self, message: &Value) {
        for handler in &mut self.handlers {
            handler(message);
        }
    }
}

impl<C: SignupConfig> SignupProgress<C> {
    /// Wrap the store for sharing with a [`Dispatcher`].
    pub fn into_shared(self) -> SharedProgress<C> {
        Rc::new(RefCell::new(self))
    }
}

/// Subscribe a shared progress store to a dispatcher's message stream.
pub fn subscribe<C: SignupConfig + 'static>(dispatcher: &mut Dispatcher, store: SharedProgress<C>) {
    dispatcher.register(move |message| store.borrow_mut().handle_message(message));
}
