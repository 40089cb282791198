//! Voice order interpretation.
//!
//! The recorded audio is sent inline to the chat-completion endpoint
//! with instructions to answer in strict JSON containing only the
//! fields the customer explicitly mentioned. Unlike the chef comment,
//! interpretation failures are blocking: they propagate to the caller
//! so the user can re-record, and no merge happens on failure.

use async_trait::async_trait;

use crate::error::{OrderError, Result};
use crate::menu::Menu;
use crate::models::{Category, PartialConfiguration};

use super::chat::{ChatClient, ChatMessage};

/// External collaborator mapping an audio payload to a partial
/// configuration.
#[async_trait]
pub trait VoiceInterpreter: Send + Sync {
    /// Interpret a base64-encoded WAV payload.
    async fn interpret(&self, base64_audio: &str) -> Result<PartialConfiguration>;
}

fn ids_of(menu: &Menu, category: Category) -> String {
    menu.items(category)
        .iter()
        .map(|item| item.id.as_str())
        .collect::<Vec<_>>()
        .join(", ")
}

fn interpreter_instructions(menu: &Menu) -> String {
    format!(
        "You are a professional pizza order taker. Listen to the Persian \
         audio request and map it to a JSON configuration.\n\n\
         Available Options (IDs):\n\
         Sizes: {sizes}\n\
         Crusts: {crusts}\n\
         Cuts: {cuts}\n\
         Sauces: {sauces}\n\
         Bakes: normal, well_done\n\
         Cheeses: {cheeses}\n\
         Meats: {meats}\n\
         Veggies: {veggies}\n\n\
         Rules:\n\
         1. Extract ingredients explicitly mentioned by the user.\n\
         2. If a user asks for \"Vegetarian\", include a mix of available veggies.\n\
         3. If a user asks for \"Pepperoni Pizza\", include pepperoni meat.\n\
         4. For meats, veggies, and cheeses, map them to the 'meats', 'veggies', \
         and 'cheeses' objects where the key is the ID and value is 'normal'.\n\
         5. Return a valid JSON object with ONLY the fields the user explicitly \
         mentioned.\n\
         6. DO NOT fill in defaults for missing information. If the user didn't \
         mention size, do not include 'size' in the JSON.\n\
         7. Output valid JSON only.",
        sizes = ids_of(menu, Category::Size),
        crusts = ids_of(menu, Category::Crust),
        cuts = ids_of(menu, Category::Cut),
        sauces = ids_of(menu, Category::Sauce),
        cheeses = ids_of(menu, Category::Cheese),
        meats = ids_of(menu, Category::Meats),
        veggies = ids_of(menu, Category::Veggies),
    )
}

/// Chat-completion-backed voice interpreter.
pub struct VoiceOrderClient {
    chat: ChatClient,
    instructions: String,
}

impl VoiceOrderClient {
    /// Creates an interpreter whose instructions list the given menu's
    /// option ids.
    pub fn new(chat: ChatClient, menu: &Menu) -> Self {
        Self {
            chat,
            instructions: interpreter_instructions(menu),
        }
    }
}

#[async_trait]
impl VoiceInterpreter for VoiceOrderClient {
    async fn interpret(&self, base64_audio: &str) -> Result<PartialConfiguration> {
        let messages = [ChatMessage::user_with_audio(
            self.instructions.clone(),
            base64_audio,
        )];

        let content = self
            .chat
            .complete(&messages, true)
            .await
            .map_err(OrderError::from)?;

        let partial: PartialConfiguration = serde_json::from_str(&content)?;
        Ok(partial)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_instructions_list_all_menu_ids() {
        let instructions = interpreter_instructions(Menu::standard());
        for id in [
            "small",
            "large",
            "stuffed",
            "square",
            "bbq",
            "gorgonzola",
            "pepperoni",
            "corn",
        ] {
            assert!(instructions.contains(id), "missing id {id}");
        }
        assert!(instructions.contains("well_done"));
    }

    #[test]
    fn test_strict_json_parses_into_partial() {
        let content = r#"{"size": "large", "meats": {"pepperoni": "normal"}}"#;
        let partial: PartialConfiguration = serde_json::from_str(content).unwrap();
        assert_eq!(partial.size.as_deref(), Some("large"));
        assert!(partial.crust.is_none());
    }

    #[test]
    fn test_unparseable_content_is_an_error() {
        let parsed = serde_json::from_str::<PartialConfiguration>("a large pepperoni please");
        assert!(parsed.is_err());
    }
}
