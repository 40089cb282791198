//! Order finalization.
//!
//! Checkout is the terminal transition of a session: it totals the
//! configuration, generates the display order id, asks the comment
//! collaborator for a chef comment (falling back to a fixed line on any
//! failure) and posts the formatted receipt to the notification
//! webhook. Both external calls are best-effort: the checkout is
//! complete once the local computation succeeds, whatever the
//! collaborators do.

use jiff::Zoned;
use log::{info, warn};
use rand::Rng;

use crate::display::Receipt;
use crate::menu::Menu;
use crate::models::{Configuration, OrderResult};
use crate::services::chef::{order_summary, FALLBACK_COMMENT};
use crate::services::{CommentGenerator, OrderNotifier};
use crate::totals::compute_totals;

/// Generate a display order identifier: six digits, uniformly random in
/// [100000, 999999]. No uniqueness is enforced; collisions are
/// acceptable for a display token.
pub fn generate_order_id() -> String {
    rand::thread_rng().gen_range(100_000u32..=999_999).to_string()
}

/// Checkout coordinator over the two external collaborators.
pub struct Checkout<'a> {
    comment_generator: &'a dyn CommentGenerator,
    notifier: &'a dyn OrderNotifier,
}

impl<'a> Checkout<'a> {
    pub fn new(
        comment_generator: &'a dyn CommentGenerator,
        notifier: &'a dyn OrderNotifier,
    ) -> Self {
        Self {
            comment_generator,
            notifier,
        }
    }

    /// Finalize the order.
    ///
    /// Never fails: a comment-generation failure substitutes the fixed
    /// fallback comment, and a notification failure is logged and
    /// swallowed. The returned [`OrderResult`] reflects success either
    /// way.
    pub async fn finalize(&self, config: &Configuration, menu: &Menu) -> OrderResult {
        let totals = compute_totals(config, menu);

        let chef_comment = match self
            .comment_generator
            .comment_for(&order_summary(config, menu))
            .await
        {
            Ok(comment) => comment,
            Err(e) => {
                warn!("Chef comment generation failed, using fallback: {e}");
                FALLBACK_COMMENT.to_string()
            }
        };

        let order_id = generate_order_id();

        let receipt = Receipt {
            order_id: &order_id,
            config,
            menu,
            totals,
            chef_comment: &chef_comment,
            placed_at: Zoned::now(),
        }
        .to_string();

        if let Err(e) = self.notifier.notify(&receipt).await {
            warn!("Receipt notification failed (ignored): {e}");
        }

        info!(
            "Order {order_id} completed: {} toman, {} kcal",
            totals.price, totals.calories
        );

        OrderResult {
            order_id,
            total_price: totals.price,
            total_calories: totals.calories,
            chef_comment,
        }
    }
}
