//! Completion gateway: the boundary to the language model.
//!
//! The relay only sees [`CompletionGateway`]; [`OpenAiGateway`] talks to any
//! OpenAI-compatible chat completions endpoint and [`FakeGateway`] replays
//! scripted replies for tests and offline runs.

mod fake;
mod openai;

pub use fake::FakeGateway;
pub use openai::{OpenAiGateway, DEFAULT_API_BASE};

use async_trait::async_trait;
use serde::Serialize;

use crate::{error::Result, models::ChatMessage};

/// One completion call.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct CompletionRequest {
    pub model: String,
    pub messages: Vec<ChatMessage>,
    pub max_tokens: u32,
    pub temperature: f32,
}

/// Generates text from an ordered list of chat messages.
///
/// Any transport or API failure is reported as
/// [`RelayError::Provider`](crate::RelayError::Provider). Implementations do
/// not retry.
#[async_trait]
pub trait CompletionGateway: Send + Sync {
    async fn generate(&self, request: &CompletionRequest) -> Result<String>;

    /// Short name used in logs.
    fn name(&self) -> &'static str;
}
