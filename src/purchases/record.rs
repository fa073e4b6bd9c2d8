//! The purchase record model.
//!
//! A [`Purchase`] is a read-only snapshot of a billing product as delivered
//! by the backend. Every field is optional or defaulted so that a partial
//! record (including the empty one) is valid input for every predicate.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// Product category of a purchase.
#[derive(Clone, Copy, PartialEq, Eq, Debug, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ProductType {
    DomainRegistration,
    DomainMapping,
    SiteRedirect,
    Plan,
    Theme,
}

impl ProductType {
    /// True for products that represent a domain (registration or mapping).
    ///
    /// Pending-transfer state is only meaningful for these.
    pub fn is_domain(&self) -> bool {
        matches!(self, Self::DomainRegistration | Self::DomainMapping)
    }
}

/// How a purchase was paid for.
#[derive(Clone, Copy, PartialEq, Eq, Debug, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum PaymentMethod {
    Credits,
    CreditCard,
    Paypal,
}

/// Payment descriptor attached to a purchase.
#[derive(Clone, Copy, PartialEq, Eq, Debug, Serialize, Deserialize)]
pub struct Payment {
    pub method: PaymentMethod,
}

/// A billing product and its current state.
///
/// Records are plain values: no identity, no lifecycle. `Default` yields the
/// empty record (no type, no payment, no dates, all flags false), which every
/// predicate accepts and classifies conservatively.
///
/// # Example
///
/// ```rust
/// use onboard::purchases::{is_removable, ProductType, Purchase};
///
/// let purchase = Purchase {
///     product_type: Some(ProductType::DomainRegistration),
///     is_expired: true,
///     ..Purchase::default()
/// };
///
/// assert!(is_removable(&purchase));
/// assert!(!is_removable(&Purchase::default()));
/// ```
#[derive(Clone, PartialEq, Debug, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Purchase {
    /// Product category, absent on partial records
    pub product_type: Option<ProductType>,

    /// Whether the purchase has passed its expiry date
    #[serde(default)]
    pub is_expired: bool,

    /// Whether the purchase comes bundled with a plan
    #[serde(default)]
    pub included_in_plan: bool,

    /// Whether a domain transfer to another registrar is underway
    #[serde(default)]
    pub pending_transfer: bool,

    /// Whether the purchase is still within its refund window
    #[serde(default)]
    pub is_refundable: bool,

    /// Whether auto-renew can be switched off for this purchase
    #[serde(default)]
    pub can_disable_auto_renew: bool,

    /// Payment descriptor, absent when the purchase was free or unpaid
    pub payment: Option<Payment>,

    /// When the subscription started, absent for one-off products
    pub subscribed_date: Option<DateTime<Utc>>,
}
