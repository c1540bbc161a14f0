use crate::domain::{ChatId, MessageId};

/// Cross-messenger inbound message. Telegram-specific fields stay in the adapter.
#[derive(Clone, Debug)]
pub struct InboundMessage {
    pub chat_id: ChatId,
    pub message_id: MessageId,
    pub text: Option<String>,
}

/// Commands the bot understands.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum BotCommand {
    Start,
    Stats,
}

impl BotCommand {
    /// Parses `/cmd` or `/cmd@botname [args]`. Unknown commands return `None`
    /// and are handled as free text.
    pub fn parse(text: &str) -> Option<Self> {
        let first = text.trim().split_whitespace().next()?;
        let name = first.strip_prefix('/')?.split('@').next()?.to_lowercase();

        match name.as_str() {
            "start" | "help" => Some(BotCommand::Start),
            "stats" | "امار" => Some(BotCommand::Stats),
            _ => None,
        }
    }
}

/// Capabilities / feature flags of a messenger implementation.
#[derive(Clone, Copy, Debug)]
pub struct MessagingCapabilities {
    pub supports_edit: bool,
    pub supports_reply: bool,
    pub max_message_len: usize,
}
