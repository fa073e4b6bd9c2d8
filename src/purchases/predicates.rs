//! Eligibility predicates over purchase records.
//!
//! Each predicate is a pure, total boolean function: no side effects, no
//! panics, no errors. Absent or partial fields resolve to the conservative
//! branch (generally `false`) rather than failing.

use super::record::{PaymentMethod, ProductType, Purchase};
use chrono::{DateTime, Duration, Utc};

/// Check whether a purchase can be removed from the account.
///
/// Only expired domain registrations, domain mappings, and site redirects
/// are removable. Any other product type, or a matching type that has not
/// expired, returns `false`.
///
/// # Example
///
/// ```rust
/// use onboard::purchases::{is_removable, ProductType, Purchase};
///
/// let expired_mapping = Purchase {
///     product_type: Some(ProductType::DomainMapping),
///     is_expired: true,
///     ..Purchase::default()
/// };
/// assert!(is_removable(&expired_mapping));
///
/// let live_mapping = Purchase {
///     is_expired: false,
///     ..expired_mapping.clone()
/// };
/// assert!(!is_removable(&live_mapping));
/// ```
pub fn is_removable(purchase: &Purchase) -> bool {
    let removable_type = matches!(
        purchase.product_type,
        Some(ProductType::DomainRegistration)
            | Some(ProductType::DomainMapping)
            | Some(ProductType::SiteRedirect)
    );

    removable_type && purchase.is_expired
}

/// Check whether a purchase can be cancelled by the user.
///
/// A purchase is never cancelable when it is included in a plan, expired,
/// or a domain with a transfer pending. Otherwise it is cancelable when it
/// is refundable or supports disabling auto-renew.
///
/// # Example
///
/// ```rust
/// use onboard::purchases::{is_cancelable, ProductType, Purchase};
///
/// let refundable_domain = Purchase {
///     product_type: Some(ProductType::DomainRegistration),
///     is_refundable: true,
///     ..Purchase::default()
/// };
/// assert!(is_cancelable(&refundable_domain));
///
/// let bundled = Purchase {
///     included_in_plan: true,
///     ..refundable_domain.clone()
/// };
/// assert!(!is_cancelable(&bundled));
/// ```
pub fn is_cancelable(purchase: &Purchase) -> bool {
    if purchase.included_in_plan || purchase.is_expired {
        return false;
    }

    let is_domain = purchase.product_type.is_some_and(|t| t.is_domain());
    if is_domain && purchase.pending_transfer {
        return false;
    }

    purchase.is_refundable || purchase.can_disable_auto_renew
}

/// Check whether a purchase was paid for with account credits.
///
/// Returns `false` when no payment descriptor is present.
pub fn is_paid_with_credits(purchase: &Purchase) -> bool {
    purchase
        .payment
        .is_some_and(|payment| payment.method == PaymentMethod::Credits)
}

/// Check whether the subscription started strictly within the past week.
///
/// Returns `false` when the purchase carries no subscribed date. The window
/// is exclusive at the boundary: a subscription exactly seven days old is
/// not "within the past week".
///
/// # Example
///
/// ```rust
/// use chrono::{Duration, Utc};
/// use onboard::purchases::{subscribed_within_past_week, Purchase};
///
/// let recent = Purchase {
///     subscribed_date: Some(Utc::now() - Duration::days(3)),
///     ..Purchase::default()
/// };
/// assert!(subscribed_within_past_week(&recent));
/// assert!(!subscribed_within_past_week(&Purchase::default()));
/// ```
pub fn subscribed_within_past_week(purchase: &Purchase) -> bool {
    subscribed_within_week_of(purchase, Utc::now())
}

/// Clock-injected core of [`subscribed_within_past_week`].
fn subscribed_within_week_of(purchase: &Purchase, now: DateTime<Utc>) -> bool {
    purchase
        .subscribed_date
        .is_some_and(|date| now.signed_duration_since(date) < Duration::days(7))
}
