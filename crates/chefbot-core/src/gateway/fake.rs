//! Scripted gateway for tests and offline use.

use std::{
    collections::VecDeque,
    sync::{Mutex, MutexGuard},
};

use async_trait::async_trait;

use super::{CompletionGateway, CompletionRequest};
use crate::error::{RelayError, Result};

enum Reply {
    Text(String),
    Failure(String),
}

/// Replays queued replies in order, then falls back to a default reply.
///
/// Every request is recorded so tests can assert on what was sent.
#[derive(Default)]
pub struct FakeGateway {
    replies: Mutex<VecDeque<Reply>>,
    default_reply: Option<String>,
    requests: Mutex<Vec<CompletionRequest>>,
}

impl FakeGateway {
    pub fn new() -> Self {
        Self::default()
    }

    /// Gateway that answers every request with the same text.
    pub fn always(reply: impl Into<String>) -> Self {
        Self {
            default_reply: Some(reply.into()),
            ..Self::default()
        }
    }

    /// Queues a successful reply.
    pub fn with_reply(self, reply: impl Into<String>) -> Self {
        lock(&self.replies).push_back(Reply::Text(reply.into()));
        self
    }

    /// Queues a provider failure.
    pub fn with_failure(self, message: impl Into<String>) -> Self {
        lock(&self.replies).push_back(Reply::Failure(message.into()));
        self
    }

    /// Requests received so far, oldest first.
    pub fn requests(&self) -> Vec<CompletionRequest> {
        lock(&self.requests).clone()
    }
}

#[async_trait]
impl CompletionGateway for FakeGateway {
    async fn generate(&self, request: &CompletionRequest) -> Result<String> {
        lock(&self.requests).push(request.clone());

        match lock(&self.replies).pop_front() {
            Some(Reply::Text(text)) => Ok(text),
            Some(Reply::Failure(message)) => Err(RelayError::provider(message).build()),
            None => self
                .default_reply
                .clone()
                .ok_or_else(|| RelayError::provider("No scripted reply left").build()),
        }
    }

    fn name(&self) -> &'static str {
        "fake"
    }
}

fn lock<T>(mutex: &Mutex<T>) -> MutexGuard<'_, T> {
    mutex.lock().unwrap_or_else(|poisoned| poisoned.into_inner())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::ChatMessage;

    fn request(text: &str) -> CompletionRequest {
        CompletionRequest {
            model: "test".to_string(),
            messages: vec![ChatMessage::user(text)],
            max_tokens: 10,
            temperature: 0.0,
        }
    }

    #[tokio::test]
    async fn test_replies_in_order_then_default() {
        let gateway = FakeGateway::always("default")
            .with_reply("first")
            .with_failure("boom");

        assert_eq!(gateway.generate(&request("a")).await.unwrap(), "first");
        assert!(gateway.generate(&request("b")).await.unwrap_err().is_provider());
        assert_eq!(gateway.generate(&request("c")).await.unwrap(), "default");
        assert_eq!(gateway.requests().len(), 3);
        assert_eq!(gateway.requests()[1].messages[0].content, "b");
    }

    #[tokio::test]
    async fn test_exhausted_without_default_fails() {
        let gateway = FakeGateway::new();
        assert!(gateway.generate(&request("a")).await.is_err());
    }
}
