//! Builder for creating and configuring Relay instances.

use std::sync::Arc;

use super::Relay;
use crate::{
    config::RelayConfig,
    error::{RelayError, Result},
    gateway::CompletionGateway,
    store::{ConversationStore, MemoryStore},
};

/// Builder for creating and configuring Relay instances.
pub struct RelayBuilder {
    gateway: Arc<dyn CompletionGateway>,
    store: Option<Arc<dyn ConversationStore>>,
    config: RelayConfig,
}

impl RelayBuilder {
    /// Creates a builder around a completion gateway, with an in-memory store
    /// and default configuration.
    pub fn new(gateway: Arc<dyn CompletionGateway>) -> Self {
        Self {
            gateway,
            store: None,
            config: RelayConfig::default(),
        }
    }

    /// Uses a custom conversation store.
    pub fn with_store(mut self, store: Arc<dyn ConversationStore>) -> Self {
        self.store = Some(store);
        self
    }

    /// Replaces the whole configuration.
    pub fn with_config(mut self, config: RelayConfig) -> Self {
        self.config = config;
        self
    }

    /// Sets the model name sent to the gateway.
    pub fn with_model(mut self, model: impl Into<String>) -> Self {
        self.config.model = model.into();
        self
    }

    /// Builds the configured relay.
    ///
    /// # Errors
    ///
    /// Returns `RelayError::InvalidInput` if the model name is blank or the
    /// history or token limits are zero.
    pub fn build(self) -> Result<Relay> {
        let config = self.config;
        if config.model.trim().is_empty() {
            return Err(RelayError::invalid_input("model").with_reason("must not be empty"));
        }
        if config.max_history == 0 {
            return Err(RelayError::invalid_input("max_history").with_reason("must be at least 1"));
        }
        if config.max_tokens == 0 || config.meal_plan_max_tokens == 0 {
            return Err(RelayError::invalid_input("max_tokens").with_reason("must be positive"));
        }

        let store = self
            .store
            .unwrap_or_else(|| Arc::new(MemoryStore::new()) as Arc<dyn ConversationStore>);
        Ok(Relay::new(self.gateway, store, config))
    }
}
