//! Outbound side of the relay.

use std::sync::{Mutex, MutexGuard};

use async_trait::async_trait;

use crate::error::Result;

/// An inline button offered alongside a message.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Choice {
    pub label: String,
    pub data: String,
}

/// Delivers relay output to one chat.
#[async_trait]
pub trait Outbox: Send + Sync {
    /// Sends a text message.
    async fn send(&self, text: &str) -> Result<()>;

    /// Sends a text message with buttons, one per row.
    async fn send_choices(&self, text: &str, choices: &[Choice]) -> Result<()>;

    /// Shows a typing indicator while a reply is generated.
    async fn typing(&self) -> Result<()>;
}

/// Something a [`RecordingOutbox`] was asked to deliver.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Sent {
    Text(String),
    Choices(String, Vec<Choice>),
    Typing,
}

/// Outbox that keeps everything in memory. Used by tests and by the
/// offline CLI commands.
#[derive(Debug, Default)]
pub struct RecordingOutbox {
    sent: Mutex<Vec<Sent>>,
}

impl RecordingOutbox {
    pub fn new() -> Self {
        Self::default()
    }

    /// Everything delivered so far, in order.
    pub fn sent(&self) -> Vec<Sent> {
        self.lock().clone()
    }

    /// Text of delivered messages, with or without buttons.
    pub fn texts(&self) -> Vec<String> {
        self.lock()
            .iter()
            .filter_map(|sent| match sent {
                Sent::Text(text) | Sent::Choices(text, _) => Some(text.clone()),
                Sent::Typing => None,
            })
            .collect()
    }

    fn lock(&self) -> MutexGuard<'_, Vec<Sent>> {
        self.sent.lock().unwrap_or_else(|poisoned| poisoned.into_inner())
    }
}

#[async_trait]
impl Outbox for RecordingOutbox {
    async fn send(&self, text: &str) -> Result<()> {
        self.lock().push(Sent::Text(text.to_string()));
        Ok(())
    }

    async fn send_choices(&self, text: &str, choices: &[Choice]) -> Result<()> {
        self.lock()
            .push(Sent::Choices(text.to_string(), choices.to_vec()));
        Ok(())
    }

    async fn typing(&self) -> Result<()> {
        self.lock().push(Sent::Typing);
        Ok(())
    }
}
