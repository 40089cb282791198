//! Order totals and the terminal checkout result.

use serde::{Deserialize, Serialize};

/// Aggregate price and calorie totals for a configuration.
///
/// Recomputed from scratch on every read; prices are toman, calories may
/// go negative when a selection states a calorie reduction.
#[derive(Debug, Clone, Copy, Default, Serialize, Deserialize, PartialEq, Eq)]
pub struct Totals {
    /// Total price in toman
    pub price: u64,

    /// Approximate total calories
    pub calories: i64,
}

/// Terminal snapshot of a completed checkout.
///
/// Created once per checkout and immutable thereafter. The order id is a
/// display token, not a primary key; collisions across sessions are
/// accepted. Nothing is persisted beyond the current session.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct OrderResult {
    /// 6-digit numeric order identifier
    pub order_id: String,

    /// Final payable price in toman
    pub total_price: u64,

    /// Final approximate calories
    pub total_calories: i64,

    /// Chef comment from the text-generation service, or the fixed
    /// fallback when the service was unavailable
    pub chef_comment: String,
}
