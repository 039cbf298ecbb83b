//! Transport-independent dispatch of chat events.
//!
//! The [`Relay`] owns the completion gateway, the conversation store and the
//! configuration. A transport adapter turns each incoming update into an
//! [`Event`] and calls [`Relay::dispatch`] with an [`Outbox`] for the chat the
//! update came from; the relay writes its replies to that outbox in order.
//!
//! ```text
//! ┌─────────────┐   Event   ┌─────────────┐   messages   ┌─────────────┐
//! │  Transport  │──────────▶│    Relay    │─────────────▶│   Gateway   │
//! │  (Telegram, │           │ (commands,  │◀─────────────│   (LLM)     │
//! │   CLI)      │◀──────────│  meal plan, │     text     └─────────────┘
//! └─────────────┘  Outbox   │  chat)      │◀────────────▶ ConversationStore
//!                           └─────────────┘
//! ```
//!
//! ## Submodules
//!
//! - [`builder`]: assembles a [`Relay`] with defaults
//! - [`commands`]: start, help, profile selection, reset, chef list, remember
//! - [`meal_plan`]: prompt → gateway → parse → format → chunked delivery
//! - [`chat`]: plain conversation with the current profile
//! - [`outbox`]: the delivery trait plus an in-memory recorder
//!
//! Gateway failures never reach the user verbatim. They are logged and
//! answered with a fixed apology; store and delivery failures propagate.
//!
//! # Examples
//!
//! ```rust
//! use std::sync::Arc;
//! use chefbot_core::{
//!     gateway::FakeGateway,
//!     relay::{Event, RecordingOutbox},
//!     RelayBuilder,
//! };
//!
//! # async fn example() -> chefbot_core::Result<()> {
//! let relay = RelayBuilder::new(Arc::new(FakeGateway::always("Hello!"))).build()?;
//! let out = RecordingOutbox::new();
//! relay.dispatch(1, Event::Text("hi".to_string()), &out).await?;
//! assert_eq!(out.texts(), vec!["Hello!"]);
//! # Ok(())
//! # }
//! ```

pub mod builder;
pub mod chat;
pub mod commands;
pub mod meal_plan;
pub mod outbox;


use std::sync::Arc;

use log::{debug, warn};

pub use builder::RelayBuilder;
pub use outbox::{Choice, Outbox, RecordingOutbox, Sent};

use crate::{
    config::RelayConfig,
    display::PlanFormatter,
    error::Result,
    gateway::CompletionGateway,
    store::{ConversationStore, UserId},
};

/// Prefix of the callback data carried by profile buttons.
pub const PROFILE_CALLBACK_PREFIX: &str = "agent_";

/// Sent to users outside the allow-list.
pub const UNAUTHORIZED: &str = "Sorry, you are not authorized to use this bot.";

/// Something a user did in the chat.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Event {
    /// `/start`, with the user's first name
    Start { first_name: String },
    /// `/help`
    Help,
    /// `/agents`: list profiles as buttons
    Profiles,
    /// A profile button was pressed
    SelectProfile(String),
    /// `/reset`
    Reset,
    /// `/chefs`
    Chefs,
    /// `/remember` with `key:value` tokens
    Remember(Vec<String>),
    /// `/mealplan` with `key:value` tokens
    MealPlan(Vec<String>),
    /// Any other text
    Text(String),
}

impl Event {
    /// Parses the data of a pressed profile button.
    pub fn from_callback_data(data: &str) -> Option<Self> {
        data.strip_prefix(PROFILE_CALLBACK_PREFIX)
            .map(|id| Event::SelectProfile(id.to_string()))
    }
}

/// Routes chat events to profile conversations and the meal planner.
pub struct Relay {
    gateway: Arc<dyn CompletionGateway>,
    store: Arc<dyn ConversationStore>,
    config: RelayConfig,
    formatter: PlanFormatter,
}

impl Relay {
    pub(crate) fn new(
        gateway: Arc<dyn CompletionGateway>,
        store: Arc<dyn ConversationStore>,
        config: RelayConfig,
    ) -> Self {
        let formatter = PlanFormatter::new(config.max_chunk_len);
        Self {
            gateway,
            store,
            config,
            formatter,
        }
    }

    pub fn config(&self) -> &RelayConfig {
        &self.config
    }

    /// Returns true when the user may talk to the relay.
    pub fn is_authorized(&self, user: UserId) -> bool {
        self.config.is_authorized(user)
    }

    /// Handles one event from one user.
    ///
    /// Unauthorized users get a single refusal and nothing is stored.
    ///
    /// # Errors
    ///
    /// Returns store and delivery errors. Gateway failures are reported to
    /// the user instead.
    pub async fn dispatch(&self, user: UserId, event: Event, out: &dyn Outbox) -> Result<()> {
        if !self.is_authorized(user) {
            warn!("Rejected event from unauthorized user {user}");
            return out.send(UNAUTHORIZED).await;
        }
        debug!("Dispatching {event:?} for user {user}");

        match event {
            Event::Start { first_name } => self.start(user, &first_name, out).await,
            Event::Help => self.help(out).await,
            Event::Profiles => self.profiles(out).await,
            Event::SelectProfile(id) => self.select_profile(user, &id, out).await,
            Event::Reset => self.reset(user, out).await,
            Event::Chefs => self.chef_inspirations(out).await,
            Event::Remember(tokens) => self.remember(user, &tokens, out).await,
            Event::MealPlan(tokens) => self.meal_plan_command(user, &tokens, out).await,
            Event::Text(text) => self.handle_message(user, &text, out).await,
        }
    }

    /// Sends chunks in order, pausing between them.
    async fn send_paced(&self, chunks: &[String], out: &dyn Outbox) -> Result<()> {
        let mut first = true;
        for chunk in chunks.iter().filter(|chunk| !chunk.trim().is_empty()) {
            if !first && !self.config.send_delay.is_zero() {
                tokio::time::sleep(self.config.send_delay).await;
            }
            out.send(chunk).await?;
            first = false;
        }
        Ok(())
    }
}
