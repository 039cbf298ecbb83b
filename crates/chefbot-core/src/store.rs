//! Per-user conversation state.
//!
//! The relay reads a user's whole [`UserState`], mutates it and writes it
//! back. Concurrent requests from the same user race on that round trip and
//! the last write wins; different users never contend.

use std::collections::HashMap;

use async_trait::async_trait;
use serde::{Deserialize, Serialize};
use tokio::sync::RwLock;

use crate::{chef::ChefProfile, error::Result, models::ChatMessage, profiles::ProfileId};

/// Chat platform user identifier.
pub type UserId = u64;

/// Everything remembered about one user.
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq)]
pub struct UserState {
    /// Profile that receives plain chat messages
    pub current_profile: ProfileId,

    /// Message history per profile, oldest first
    pub conversations: HashMap<ProfileId, Vec<ChatMessage>>,

    /// Chef personalization record
    pub chef: ChefProfile,
}

impl UserState {
    /// History for a profile, created empty on first use.
    pub fn history_mut(&mut self, profile: ProfileId) -> &mut Vec<ChatMessage> {
        self.conversations.entry(profile).or_default()
    }

    /// History for a profile; empty when the user never talked to it.
    pub fn history(&self, profile: ProfileId) -> &[ChatMessage] {
        self.conversations
            .get(&profile)
            .map(Vec::as_slice)
            .unwrap_or(&[])
    }

    /// Drops all but the last `max` messages of a profile's history.
    pub fn trim_history(&mut self, profile: ProfileId, max: usize) {
        let history = self.history_mut(profile);
        if history.len() > max {
            let excess = history.len() - max;
            history.drain(..excess);
        }
    }

    /// Clears the history of the current profile.
    pub fn reset_current(&mut self) {
        self.conversations.remove(&self.current_profile);
    }
}

/// Keyed storage of [`UserState`].
#[async_trait]
pub trait ConversationStore: Send + Sync {
    /// Returns the stored state, or a fresh default for unknown users.
    async fn get(&self, user: UserId) -> Result<UserState>;

    /// Replaces the stored state.
    async fn put(&self, user: UserId, state: UserState) -> Result<()>;
}

/// In-process store; contents are lost when the process exits.
#[derive(Debug, Default)]
pub struct MemoryStore {
    users: RwLock<HashMap<UserId, UserState>>,
}

impl MemoryStore {
    pub fn new() -> Self {
        Self::default()
    }

    /// Number of users with stored state.
    pub async fn len(&self) -> usize {
        self.users.read().await.len()
    }

    pub async fn is_empty(&self) -> bool {
        self.users.read().await.is_empty()
    }
}

#[async_trait]
impl ConversationStore for MemoryStore {
    async fn get(&self, user: UserId) -> Result<UserState> {
        Ok(self
            .users
            .read()
            .await
            .get(&user)
            .cloned()
            .unwrap_or_default())
    }

    async fn put(&self, user: UserId, state: UserState) -> Result<()> {
        self.users.write().await.insert(user, state);
        Ok(())
    }
}
