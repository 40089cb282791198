//! Chef comment generation.
//!
//! After checkout the order is summarized for a text-generation
//! collaborator that answers with a short Persian comment from "the
//! chef." The collaborator is best-effort: any failure falls back to a
//! fixed comment and never blocks the checkout.

use async_trait::async_trait;

use crate::menu::Menu;
use crate::models::{Category, Configuration};

use super::chat::{ChatClient, ChatError, ChatMessage};

/// Comment returned when the model answers with empty content.
pub const DEFAULT_PRAISE: &str = "انتخاب عالی! امیدواریم لذت ببرید.";

/// Comment substituted when the collaborator is unreachable.
pub const FALLBACK_COMMENT: &str = "سفارش شما با موفقیت ثبت شد. نوش جان!";

/// External collaborator producing the chef comment.
#[async_trait]
pub trait CommentGenerator: Send + Sync {
    /// Generate a comment for a human-readable order summary.
    async fn comment_for(&self, summary: &str) -> Result<String, ChatError>;
}

/// Human-readable summary of a configuration (display names, not ids)
/// used as the prompt context.
pub fn order_summary(config: &Configuration, menu: &Menu) -> String {
    let join_names = |category: Category| -> String {
        config
            .toppings(category)
            .map(|selection| {
                selection
                    .keys()
                    .map(|id| menu.name_of(category, id))
                    .collect::<Vec<_>>()
                    .join(", ")
            })
            .unwrap_or_default()
    };

    let meats = join_names(Category::Meats);
    let veggies = join_names(Category::Veggies);
    let sauce = config
        .sauce
        .as_deref()
        .map(|id| menu.name_of(Category::Sauce, id))
        .unwrap_or_else(|| "None".to_string());

    format!(
        "Size: {}\nCrust: {}\nSauce: {}\nMeats: {}\nVeggies: {}",
        menu.name_of(Category::Size, &config.size),
        menu.name_of(Category::Crust, &config.crust),
        sauce,
        if meats.is_empty() { "None".to_string() } else { meats },
        if veggies.is_empty() { "None".to_string() } else { veggies },
    )
}

fn chef_prompt(summary: &str) -> String {
    format!(
        "You are a passionate Italian Pizza Chef speaking Persian (Farsi).\n\
         A customer just ordered a pizza with:\n\
         {summary}\n\n\
         Write a short, fun, 1-sentence comment complimenting their choice \
         or giving a flavor note. Keep it encouraging. Output ONLY the \
         Persian string."
    )
}

/// Chat-completion-backed comment generator.
pub struct ChefCommentClient {
    chat: ChatClient,
}

impl ChefCommentClient {
    pub fn new(chat: ChatClient) -> Self {
        Self { chat }
    }
}

#[async_trait]
impl CommentGenerator for ChefCommentClient {
    async fn comment_for(&self, summary: &str) -> Result<String, ChatError> {
        let messages = [ChatMessage::user_text(chef_prompt(summary))];
        match self.chat.complete(&messages, false).await {
            Ok(comment) => Ok(comment),
            // An empty answer is not a failure; the customer still gets
            // a friendly line.
            Err(ChatError::EmptyResponse) => Ok(DEFAULT_PRAISE.to_string()),
            Err(e) => Err(e),
        }
    }
}
