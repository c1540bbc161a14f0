//! Telegram update handlers.
//!
//! Each update is converted to the core `InboundMessage` and handed to the
//! `BotService`. A failure only ends the handling of that one update.

use std::sync::Arc;

use teloxide::{prelude::*, types::Message};
use tracing::error;

use asb_core::{
    domain::{ChatId, MessageId},
    messaging::types::InboundMessage,
};

use crate::router::AppState;

pub fn to_inbound(msg: &Message) -> InboundMessage {
    InboundMessage {
        chat_id: ChatId(msg.chat.id.0),
        message_id: MessageId(msg.id.0),
        text: msg.text().map(str::to_string),
    }
}

pub async fn handle_message(msg: Message, state: Arc<AppState>) -> ResponseResult<()> {
    // Non-text updates (stickers, photos, ...) are ignored.
    if msg.text().is_none() {
        return Ok(());
    }

    let inbound = to_inbound(&msg);
    if let Err(e) = state.service.handle(&inbound).await {
        error!(chat = %inbound.chat_id, error = %e, "failed to handle message");
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    fn message(json: &str) -> Message {
        serde_json::from_str(json).unwrap()
    }

    #[test]
    fn converts_text_message() {
        let msg = message(
            r#"{
                "message_id": 5,
                "date": 1700000000,
                "chat": {"id": 42, "type": "private", "first_name": "Kourosh"},
                "from": {"id": 42, "is_bot": false, "first_name": "Kourosh"},
                "text": "/start"
            }"#,
        );
        let inbound = to_inbound(&msg);
        assert_eq!(inbound.chat_id, ChatId(42));
        assert_eq!(inbound.message_id, MessageId(5));
        assert_eq!(inbound.text.as_deref(), Some("/start"));
    }
}
