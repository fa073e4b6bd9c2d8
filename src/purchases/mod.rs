//! Purchase records and eligibility predicates.
//!
//! This module contains the pure functional half of the crate that deals
//! with billing: a plain [`Purchase`] record and a handful of total,
//! side-effect-free predicates over it.
//!
//! Purchases are supplied already constructed by the caller; nothing here
//! creates, persists, or mutates them.

mod predicates;
mod record;

pub use predicates::{
    is_cancelable, is_paid_with_credits, is_removable, subscribed_within_past_week,
};
pub use record::{Payment, PaymentMethod, ProductType, Purchase};
