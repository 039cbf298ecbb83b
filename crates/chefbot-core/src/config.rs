//! Relay configuration.

use std::{collections::HashSet, time::Duration};

use crate::{
    display::DEFAULT_MAX_CHUNK_LEN,
    error::{Result, ResultExt},
    store::UserId,
};

/// Tunables for a [`Relay`](crate::Relay).
#[derive(Debug, Clone, PartialEq)]
pub struct RelayConfig {
    /// Model name sent to the completion endpoint
    pub model: String,

    /// Token limit for plain chat replies
    pub max_tokens: u32,

    /// Token limit for meal plan generation
    pub meal_plan_max_tokens: u32,

    /// Messages kept per profile before a chat completion
    pub max_history: usize,

    /// Character limit per outbound message
    pub max_chunk_len: usize,

    /// Users allowed to talk to the relay; `None` lets everyone in
    pub allowed_users: Option<HashSet<UserId>>,

    /// Pause between consecutive outbound chunks
    pub send_delay: Duration,
}

impl Default for RelayConfig {
    fn default() -> Self {
        Self {
            model: "gpt-3.5-turbo".to_string(),
            max_tokens: 500,
            meal_plan_max_tokens: 2000,
            max_history: 10,
            max_chunk_len: DEFAULT_MAX_CHUNK_LEN,
            allowed_users: None,
            send_delay: Duration::from_millis(500),
        }
    }
}

impl RelayConfig {
    /// Returns true when the allow-list is unset or contains the user.
    pub fn is_authorized(&self, user: UserId) -> bool {
        self.allowed_users
            .as_ref()
            .map_or(true, |allowed| allowed.contains(&user))
    }
}

/// Parses a comma-separated list of user ids. Blank entries are skipped.
///
/// # Errors
///
/// Returns `RelayError::Configuration` if an entry is not a number.
pub fn parse_allowed_users(list: &str) -> Result<HashSet<UserId>> {
    list.split(',')
        .map(str::trim)
        .filter(|entry| !entry.is_empty())
        .map(|entry| {
            entry
                .parse::<UserId>()
                .with_context(format!("invalid user id '{entry}'"))
        })
        .collect()
}
