//! Command handlers that do not call the gateway.

use log::info;

use super::{Choice, Outbox, Relay, PROFILE_CALLBACK_PREFIX};
use crate::{
    chef::chef_inspirations,
    error::Result,
    params::parse_profile_tokens,
    profiles::{all_profiles, ProfileId},
    store::UserId,
};

pub const HELP_TEXT: &str = "Available commands:
/start - Start the conversation
/help - Show this help message
/agents - Choose which agent to talk to
/reset - Reset conversation with current agent
/mealplan - Generate a weekly meal plan (you can add preferences too)
/chefs - List chefs you can draw inspiration from
/remember - Save your tastes for future meal plans

Special features:
- When talking to Chef Gordon, ask for a \"meal plan\" to get a weekly meal plan
- You can specify preferences like: \"I prefer Italian food and like chicken\"
- You can specify restrictions like: \"I'm allergic to nuts and avoid dairy\"

Examples:
/mealplan pref:italian pref:quick servings:5
/mealplan avoid:nuts avoid:dairy
/mealplan ingredient:pumpkin chef:Ottolenghi
/remember cuisine:thai diet:vegetarian dislike:cilantro chef:Jamie Oliver

Just type any message to chat with the current agent!";

const REMEMBER_USAGE: &str = "Tell me what to remember using cuisine:, diet:, dislike: or chef:, \
for example: /remember cuisine:thai dislike:cilantro";

impl Relay {
    /// Greets the user and names the current profile.
    pub async fn start(&self, user: UserId, first_name: &str, out: &dyn Outbox) -> Result<()> {
        let state = self.store.get(user).await?;
        let profile = state.current_profile.profile();
        out.send(&format!(
            "Hi {first_name}! I'm your AI assistant hub. You can talk to different AI agents \
with different specialties.\n\nCurrently speaking with: {}\n\nUse /agents to change who \
you're talking to, or /help for more commands.",
            profile.name
        ))
        .await
    }

    pub async fn help(&self, out: &dyn Outbox) -> Result<()> {
        out.send(HELP_TEXT).await
    }

    /// Offers one button per profile.
    pub async fn profiles(&self, out: &dyn Outbox) -> Result<()> {
        let choices: Vec<Choice> = all_profiles()
            .map(|profile| Choice {
                label: profile.name.to_string(),
                data: format!("{PROFILE_CALLBACK_PREFIX}{}", profile.id),
            })
            .collect();
        out.send_choices("Choose an agent to talk to:", &choices).await
    }

    /// Switches the user's current profile. Unknown ids select the default
    /// assistant.
    pub async fn select_profile(&self, user: UserId, id: &str, out: &dyn Outbox) -> Result<()> {
        let profile_id = ProfileId::resolve(id);
        let mut state = self.store.get(user).await?;
        state.current_profile = profile_id;
        self.store.put(user, state).await?;
        info!("User {user} switched to profile {profile_id}");

        out.send(&format!(
            "You are now talking to {}. How can I help you?",
            profile_id.profile().name
        ))
        .await
    }

    /// Forgets the conversation with the current profile.
    pub async fn reset(&self, user: UserId, out: &dyn Outbox) -> Result<()> {
        let mut state = self.store.get(user).await?;
        state.reset_current();
        let name = state.current_profile.profile().name;
        self.store.put(user, state).await?;

        out.send(&format!("Your conversation with {name} has been reset."))
            .await
    }

    pub async fn chef_inspirations(&self, out: &dyn Outbox) -> Result<()> {
        let chefs: Vec<String> = chef_inspirations()
            .iter()
            .map(|chef| format!("- {} ({}): {}", chef.name, chef.cuisine, chef.specialty))
            .collect();
        out.send(&format!(
            "Chefs you can draw inspiration from:\n\n{}\n\nTry: /mealplan chef:Ottolenghi",
            chefs.join("\n")
        ))
        .await
    }

    /// Merges `key:value` tokens into the user's chef profile.
    pub async fn remember(&self, user: UserId, tokens: &[String], out: &dyn Outbox) -> Result<()> {
        let update = parse_profile_tokens(tokens);
        if update.is_empty() {
            return out.send(REMEMBER_USAGE).await;
        }

        let mut state = self.store.get(user).await?;
        state.chef.save(update);
        let context = state.chef.personalization_context();
        self.store.put(user, state).await?;
        info!("Updated chef profile for user {user}");

        out.send(&format!(
            "Got it! I'll keep this in mind for your next meal plan:\n\n{context}"
        ))
        .await
    }
}
