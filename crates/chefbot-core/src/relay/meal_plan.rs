//! The meal plan flow.

use log::{debug, error, info};

use super::{Outbox, Relay};
use crate::{
    error::Result,
    gateway::CompletionRequest,
    models::{ChatMessage, PlanRequest},
    params::{parse_command_tokens, parse_freeform},
    parser,
    profiles::ProfileId,
    prompt::build_prompt,
    store::UserId,
};

const COMMAND_NOTICE: &str =
    "Chef Gordon is preparing a personalized meal plan. This will take a moment...";

const CHAT_NOTICE: &str = "I'll create a weekly meal plan for you. This might take a minute...";

pub const MEAL_PLAN_APOLOGY: &str =
    "I'm sorry, I encountered an error while creating your meal plan. Please try again later.";

impl Relay {
    /// `/mealplan` with `key:value` tokens.
    pub async fn meal_plan_command(
        &self,
        user: UserId,
        tokens: &[String],
        out: &dyn Outbox,
    ) -> Result<()> {
        let request = parse_command_tokens(tokens);
        self.meal_plan(user, request, None, COMMAND_NOTICE, out)
            .await
    }

    /// Meal plan asked for in chat text while talking to the chef.
    pub(crate) async fn meal_plan_from_text(
        &self,
        user: UserId,
        text: &str,
        out: &dyn Outbox,
    ) -> Result<()> {
        let request = parse_freeform(text);
        self.meal_plan(user, request, Some(text), CHAT_NOTICE, out)
            .await
    }

    /// Generates, parses, formats and delivers a plan.
    ///
    /// The user is switched to the chef first. The prompt and the raw reply
    /// are kept in the chef's history, and the planned meals are recorded so
    /// the next plan avoids them.
    async fn meal_plan(
        &self,
        user: UserId,
        request: PlanRequest,
        user_text: Option<&str>,
        notice: &str,
        out: &dyn Outbox,
    ) -> Result<()> {
        let mut state = self.store.get(user).await?;
        state.current_profile = ProfileId::Chef;
        if let Some(text) = user_text {
            state.history_mut(ProfileId::Chef).push(ChatMessage::user(text));
        }
        self.store.put(user, state.clone()).await?;

        out.send(notice).await?;
        out.typing().await?;

        let chef = ProfileId::Chef.profile();
        let request = state.chef.merge_into(request);
        let prompt = build_prompt(&request, &state.chef.personalization_context());
        let completion = CompletionRequest {
            model: self.config.model.clone(),
            messages: vec![
                ChatMessage::system(chef.system_prompt),
                ChatMessage::user(prompt.clone()),
            ],
            max_tokens: self.config.meal_plan_max_tokens,
            temperature: chef.temperature,
        };

        let raw = match self.gateway.generate(&completion).await {
            Ok(raw) => raw,
            Err(e) => {
                error!("Error generating meal plan for user {user}: {e}");
                return out.send(MEAL_PLAN_APOLOGY).await;
            }
        };

        let plan = parser::parse(&raw);

        let history = state.history_mut(ProfileId::Chef);
        if user_text.is_none() {
            history.push(ChatMessage::user(prompt));
        }
        history.push(ChatMessage::assistant(raw));
        state.trim_history(ProfileId::Chef, self.config.max_history);
        state.chef.record_meals(plan.planned_meal_names());
        self.store.put(user, state).await?;

        let chunks = self.formatter.format(&plan);
        info!("Meal plan split into {} parts", chunks.len());
        for (i, chunk) in chunks.iter().enumerate() {
            debug!("Part {} length: {} characters", i + 1, chunk.chars().count());
        }

        self.send_paced(&chunks, out).await
    }
}
