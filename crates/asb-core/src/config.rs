use std::{
    env, fmt, fs,
    path::{Path, PathBuf},
    time::Duration,
};

use crate::{errors::Error, Result};

/// An API key or token that must never end up in logs.
#[derive(Clone, PartialEq, Eq)]
pub struct Secret(String);

impl Secret {
    pub fn new(value: impl Into<String>) -> Self {
        Self(value.into())
    }

    pub fn expose(&self) -> &str {
        &self.0
    }
}

impl fmt::Debug for Secret {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str("Secret(***)")
    }
}

/// Knobs handed to the governor, the chunked delivery and the AI adapter at
/// construction time.
#[derive(Clone, Debug)]
pub struct BotSettings {
    /// Minimum spacing between two accepted requests of one user.
    pub cooldown: Duration,
    /// Maximum characters per outgoing message.
    pub chunk_size: usize,
    /// Pause between two consecutive chunks of one response.
    pub chunk_pace: Duration,
    pub ai_api_key: Option<Secret>,
}

impl Default for BotSettings {
    fn default() -> Self {
        Self {
            cooldown: Duration::from_secs(5),
            chunk_size: 4000,
            chunk_pace: Duration::from_millis(300),
            ai_api_key: None,
        }
    }
}

/// Typed configuration loaded from the environment (and `.env` if present).
#[derive(Clone, Debug)]
pub struct Config {
    pub telegram_bot_token: Secret,
    pub database_path: PathBuf,
    pub settings: BotSettings,

    // AI backend
    pub ai_base_url: String,
    pub ai_model: String,
    pub ai_variant: String,
    pub ai_timeout: Duration,
}

impl Config {
    pub fn load() -> Result<Self> {
        load_dotenv_if_present(Path::new(".env"));

        let telegram_bot_token = env_str("TELEGRAM_BOT_TOKEN").unwrap_or_default();
        if telegram_bot_token.trim().is_empty() {
            return Err(Error::Config(
                "TELEGRAM_BOT_TOKEN environment variable is required".to_string(),
            ));
        }

        let database_path =
            PathBuf::from(env_str("DATABASE_PATH").unwrap_or_else(|| "users.db".to_string()));

        let defaults = BotSettings::default();
        let settings = BotSettings {
            cooldown: env_u64("COOLDOWN_SECONDS")
                .map(Duration::from_secs)
                .unwrap_or(defaults.cooldown),
            chunk_size: env_usize("CHUNK_SIZE")
                .unwrap_or(defaults.chunk_size)
                .max(1),
            chunk_pace: env_u64("CHUNK_PACE_MS")
                .map(Duration::from_millis)
                .unwrap_or(defaults.chunk_pace),
            ai_api_key: env_str("AI_API_KEY").and_then(non_empty).map(Secret::new),
        };

        let ai_base_url = env_str("AI_BASE_URL")
            .and_then(non_empty)
            .unwrap_or_else(|| "https://api.openai.com/v1".to_string());
        let ai_model = env_str("AI_MODEL")
            .and_then(non_empty)
            .unwrap_or_else(|| "gpt-4o-mini".to_string());
        let ai_variant = env_str("AI_VARIANT")
            .and_then(non_empty)
            .unwrap_or_else(|| "pahlavi".to_string());
        let ai_timeout = Duration::from_secs(env_u64("AI_TIMEOUT_SECONDS").unwrap_or(60));

        Ok(Self {
            telegram_bot_token: Secret::new(telegram_bot_token),
            database_path,
            settings,
            ai_base_url,
            ai_model,
            ai_variant,
            ai_timeout,
        })
    }
}

fn env_str(key: &str) -> Option<String> {
    env::var(key).ok()
}

fn load_dotenv_if_present(path: &Path) {
    let Ok(contents) = fs::read_to_string(path) else {
        return;
    };

    for (key, val) in parse_dotenv(&contents) {
        if env::var_os(&key).is_some() {
            continue; // do not override existing env
        }
        env::set_var(key, val);
    }
}

fn parse_dotenv(contents: &str) -> Vec<(String, String)> {
    let mut out = Vec::new();
    for raw in contents.lines() {
        let line = raw.trim();
        if line.is_empty() || line.starts_with('#') {
            continue;
        }

        let Some((k, v)) = line.split_once('=') else {
            continue;
        };

        let key = k.trim();
        if key.is_empty() {
            continue;
        }

        let mut val = v.trim().to_string();
        // Strip optional surrounding quotes.
        if val.len() >= 2
            && ((val.starts_with('"') && val.ends_with('"'))
                || (val.starts_with('\'') && val.ends_with('\'')))
        {
            val = val[1..val.len() - 1].to_string();
        }

        out.push((key.to_string(), val));
    }
    out
}

fn env_u64(key: &str) -> Option<u64> {
    env_str(key).and_then(|s| s.trim().parse::<u64>().ok())
}

fn env_usize(key: &str) -> Option<usize> {
    env_str(key).and_then(|s| s.trim().parse::<usize>().ok())
}

fn non_empty(s: String) -> Option<String> {
    if s.trim().is_empty() {
        None
    } else {
        Some(s)
    }
}
