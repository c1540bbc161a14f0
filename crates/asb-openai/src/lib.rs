//! OpenAI-compatible adapter for the AI-assisted (`+`) requests.
//!
//! Talks to `{base_url}/chat/completions`, so any compatible gateway works.

use std::time::Duration;

use async_trait::async_trait;
use serde::{Deserialize, Serialize};
use tracing::debug;

use asb_core::{config::Secret, errors::Error, transform::AiResponder, Result};

#[derive(Clone, Debug)]
pub struct OpenAiResponder {
    api_key: Secret,
    endpoint: String,
    model: String,
    http: reqwest::Client,
}

impl OpenAiResponder {
    pub fn new(
        api_key: Secret,
        base_url: &str,
        model: impl Into<String>,
        timeout: Duration,
    ) -> Result<Self> {
        let http = reqwest::Client::builder()
            .timeout(timeout)
            .user_agent("asb/0.1")
            .build()
            .map_err(|e| Error::External(format!("http client build failed: {e}")))?;

        Ok(Self {
            api_key,
            endpoint: endpoint(base_url),
            model: model.into(),
            http,
        })
    }
}

#[async_trait]
impl AiResponder for OpenAiResponder {
    async fn respond(&self, prompt: &str, variant: &str) -> Result<String> {
        let system = system_prompt(variant);
        let body = ChatRequest {
            model: &self.model,
            messages: vec![
                ChatMessage {
                    role: "system",
                    content: &system,
                },
                ChatMessage {
                    role: "user",
                    content: prompt,
                },
            ],
        };

        debug!(model = %self.model, variant, "sending ai request");
        let resp = self
            .http
            .post(&self.endpoint)
            .bearer_auth(self.api_key.expose())
            .json(&body)
            .send()
            .await
            .map_err(|e| Error::External(format!("ai request error: {e}")))?;

        if !resp.status().is_success() {
            let status = resp.status();
            let body = resp.text().await.unwrap_or_default();
            return Err(Error::External(format!(
                "ai request failed: {status} {}",
                body.chars().take(200).collect::<String>()
            )));
        }

        let parsed: ChatResponse = resp
            .json()
            .await
            .map_err(|e| Error::External(format!("ai json error: {e}")))?;
        extract_text(parsed)
    }
}

#[derive(Serialize)]
struct ChatRequest<'a> {
    model: &'a str,
    messages: Vec<ChatMessage<'a>>,
}

#[derive(Serialize)]
struct ChatMessage<'a> {
    role: &'a str,
    content: &'a str,
}

#[derive(Deserialize)]
struct ChatResponse {
    #[serde(default)]
    choices: Vec<Choice>,
}

#[derive(Deserialize)]
struct Choice {
    message: ResponseMessage,
}

#[derive(Deserialize)]
struct ResponseMessage {
    content: Option<String>,
}

fn endpoint(base_url: &str) -> String {
    format!("{}/chat/completions", base_url.trim_end_matches('/'))
}

fn system_prompt(variant: &str) -> String {
    format!(
        "You are a historian and epigrapher of ancient scripts, specialised in {variant}. \
         Answer the user's question in Persian, accurately and concisely. When you \
         quote words or names, also write them in the {variant} script."
    )
}

fn extract_text(resp: ChatResponse) -> Result<String> {
    let text = resp
        .choices
        .into_iter()
        .next()
        .and_then(|c| c.message.content)
        .unwrap_or_default();

    if text.trim().is_empty() {
        return Err(Error::External("ai returned empty text".to_string()));
    }
    Ok(text.trim().to_string())
}
