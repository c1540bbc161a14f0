/// Core error type for the bot.
///
/// Adapter crates map their specific errors into this type so the bot core can
/// handle failures consistently. None of these messages reach the chat surface;
/// users only see the fixed strings in [`crate::formatting`].
#[derive(Debug, thiserror::Error)]
pub enum Error {
    #[error("config error: {0}")]
    Config(String),

    #[error("storage error: {0}")]
    Storage(#[from] sqlx::Error),

    #[error("transform {script} failed: {reason}")]
    Transform { script: String, reason: String },

    #[error("external error: {0}")]
    External(String),
}

pub type Result<T> = std::result::Result<T, Error>;
