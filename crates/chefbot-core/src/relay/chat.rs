//! Plain conversation with the current profile.

use log::error;

use super::{Outbox, Relay};
use crate::{
    error::Result,
    gateway::CompletionRequest,
    models::ChatMessage,
    params::is_meal_plan_trigger,
    profiles::ProfileId,
    store::UserId,
};

pub const CHAT_APOLOGY: &str =
    "I'm sorry, I encountered an error while processing your request. Please try again later.";

impl Relay {
    /// Answers free text with the user's current profile.
    ///
    /// Asking the chef for a meal plan in plain words starts the meal plan
    /// flow instead. A failed completion leaves the stored history unchanged.
    pub async fn handle_message(&self, user: UserId, text: &str, out: &dyn Outbox) -> Result<()> {
        let mut state = self.store.get(user).await?;
        let profile_id = state.current_profile;
        if profile_id == ProfileId::Chef && is_meal_plan_trigger(text) {
            return self.meal_plan_from_text(user, text, out).await;
        }

        let profile = profile_id.profile();
        state.history_mut(profile_id).push(ChatMessage::user(text));
        state.trim_history(profile_id, self.config.max_history);

        let mut messages = vec![ChatMessage::system(profile.system_prompt)];
        messages.extend_from_slice(state.history(profile_id));
        let completion = CompletionRequest {
            model: self.config.model.clone(),
            messages,
            max_tokens: self.config.max_tokens,
            temperature: profile.temperature,
        };

        out.typing().await?;
        let reply = match self.gateway.generate(&completion).await {
            Ok(reply) => reply,
            Err(e) => {
                error!("Error while processing message from user {user}: {e}");
                return out.send(CHAT_APOLOGY).await;
            }
        };

        state
            .history_mut(profile_id)
            .push(ChatMessage::assistant(reply.clone()));
        self.store.put(user, state).await?;

        out.send(&reply).await
    }
}
