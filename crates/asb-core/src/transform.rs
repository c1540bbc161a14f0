//! Fan-out of one input over a fixed, ordered list of script transforms.
//!
//! One broken script never blocks the others: every call goes through
//! [`invoke`], which turns both errors and panics into
//! [`TransformOutcome::Failed`].

use std::{
    panic::{self, AssertUnwindSafe},
    sync::Arc,
};

use async_trait::async_trait;
use tracing::warn;

use crate::{formatting, Result};

/// A pure, independently fallible text conversion.
pub trait Transform: Send + Sync {
    fn transform(&self, text: &str) -> Result<String>;
}

impl<F> Transform for F
where
    F: Fn(&str) -> Result<String> + Send + Sync,
{
    fn transform(&self, text: &str) -> Result<String> {
        self(text)
    }
}

/// AI-assisted responder (slow, may fail on network/quota errors).
#[async_trait]
pub trait AiResponder: Send + Sync {
    async fn respond(&self, prompt: &str, variant: &str) -> Result<String>;
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub enum TransformOutcome {
    Ok(String),
    Failed,
}

impl TransformOutcome {
    pub fn is_ok(&self) -> bool {
        matches!(self, TransformOutcome::Ok(_))
    }
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct LabeledOutcome {
    pub label: String,
    pub outcome: TransformOutcome,
}

/// Calls `transform` and captures any failure kind.
pub fn invoke(label: &str, transform: &dyn Transform, text: &str) -> TransformOutcome {
    match panic::catch_unwind(AssertUnwindSafe(|| transform.transform(text))) {
        Ok(Ok(out)) => TransformOutcome::Ok(out),
        Ok(Err(e)) => {
            warn!(script = label, error = %e, "transform failed");
            TransformOutcome::Failed
        }
        Err(_) => {
            warn!(script = label, "transform panicked");
            TransformOutcome::Failed
        }
    }
}

#[derive(Clone, Default)]
pub struct TransformDispatcher {
    scripts: Vec<(String, Arc<dyn Transform>)>,
}

impl TransformDispatcher {
    pub fn new() -> Self {
        Self::default()
    }

    /// Appends a script; output order is insertion order.
    pub fn with(mut self, label: impl Into<String>, transform: Arc<dyn Transform>) -> Self {
        self.scripts.push((label.into(), transform));
        self
    }

    pub fn len(&self) -> usize {
        self.scripts.len()
    }

    pub fn is_empty(&self) -> bool {
        self.scripts.is_empty()
    }

    pub fn labels(&self) -> impl Iterator<Item = &str> {
        self.scripts.iter().map(|(label, _)| label.as_str())
    }

    pub fn run_all(&self, text: &str) -> Vec<LabeledOutcome> {
        self.scripts
            .iter()
            .map(|(label, t)| LabeledOutcome {
                label: label.clone(),
                outcome: invoke(label, t.as_ref(), text),
            })
            .collect()
    }
}

/// Joins `"{label}:\n{outcome}"` blocks with a blank line, in order.
pub fn render_payload(outcomes: &[LabeledOutcome]) -> String {
    outcomes
        .iter()
        .map(|o| {
            let body = match &o.outcome {
                TransformOutcome::Ok(text) => text.as_str(),
                TransformOutcome::Failed => formatting::TRANSFORM_FAILED,
            };
            format!("{}:\n{}", o.label, body)
        })
        .collect::<Vec<_>>()
        .join("\n\n")
}

pub async fn run_ai(responder: &dyn AiResponder, prompt: &str, variant: &str) -> TransformOutcome {
    match responder.respond(prompt, variant).await {
        Ok(text) if !text.trim().is_empty() => TransformOutcome::Ok(text),
        Ok(_) => {
            warn!(variant, "ai response was empty");
            TransformOutcome::Failed
        }
        Err(e) => {
            warn!(variant, error = %e, "ai response failed");
            TransformOutcome::Failed
        }
    }
}

pub fn render_ai(outcome: TransformOutcome) -> String {
    match outcome {
        TransformOutcome::Ok(text) => text,
        TransformOutcome::Failed => formatting::AI_FAILED.to_string(),
    }
}
