//! Telegram transport: turns updates into relay events.

use std::sync::Arc;

use async_trait::async_trait;
use chefbot_core::{
    relay::{Choice, Event, Outbox},
    Relay, RelayError,
};
use log::{error, info, warn};
use teloxide::{
    prelude::*,
    types::{ChatAction, InlineKeyboardButton, InlineKeyboardMarkup},
    utils::command::BotCommands,
    RequestError,
};

type HandlerResult = Result<(), RelayError>;

#[derive(BotCommands, Clone, Debug, PartialEq)]
#[command(rename_rule = "lowercase", description = "Available commands:")]
pub enum Command {
    #[command(description = "start talking to the bot")]
    Start,
    #[command(description = "show help")]
    Help,
    #[command(description = "choose who to talk to")]
    Agents,
    #[command(description = "clear the conversation with the current agent")]
    Reset,
    #[command(description = "plan five dinners, e.g. /mealplan pref:italian servings:4")]
    Mealplan(String),
    #[command(description = "list chefs that can inspire a plan")]
    Chefs,
    #[command(description = "remember tastes, e.g. /remember cuisine:thai dislike:cilantro")]
    Remember(String),
}

impl Command {
    /// Maps a parsed command onto a relay event.
    pub fn into_event(self, first_name: &str) -> Event {
        match self {
            Command::Start => Event::Start {
                first_name: first_name.to_string(),
            },
            Command::Help => Event::Help,
            Command::Agents => Event::Profiles,
            Command::Reset => Event::Reset,
            Command::Mealplan(args) => Event::MealPlan(tokens(&args)),
            Command::Chefs => Event::Chefs,
            Command::Remember(args) => Event::Remember(tokens(&args)),
        }
    }
}

fn tokens(args: &str) -> Vec<String> {
    args.split_whitespace().map(String::from).collect()
}

/// Delivers relay output to one Telegram chat.
pub struct TelegramOutbox {
    bot: Bot,
    chat: ChatId,
}

impl TelegramOutbox {
    pub fn new(bot: Bot, chat: ChatId) -> Self {
        Self { bot, chat }
    }
}

fn delivery(e: RequestError) -> RelayError {
    RelayError::Delivery {
        message: e.to_string(),
    }
}

#[async_trait]
impl Outbox for TelegramOutbox {
    async fn send(&self, text: &str) -> chefbot_core::Result<()> {
        self.bot
            .send_message(self.chat, text)
            .await
            .map_err(delivery)?;
        Ok(())
    }

    async fn send_choices(&self, text: &str, choices: &[Choice]) -> chefbot_core::Result<()> {
        let keyboard = InlineKeyboardMarkup::new(choices.iter().map(|choice| {
            vec![InlineKeyboardButton::callback(
                choice.label.clone(),
                choice.data.clone(),
            )]
        }));
        self.bot
            .send_message(self.chat, text)
            .reply_markup(keyboard)
            .await
            .map_err(delivery)?;
        Ok(())
    }

    async fn typing(&self) -> chefbot_core::Result<()> {
        self.bot
            .send_chat_action(self.chat, ChatAction::Typing)
            .await
            .map_err(delivery)?;
        Ok(())
    }
}

/// Runs the bot with long polling until interrupted.
pub async fn run(token: String, relay: Relay) {
    let bot = Bot::new(token);
    if let Err(e) = bot.set_my_commands(Command::bot_commands()).await {
        warn!("Could not register the command menu: {e}");
    }

    let handler = dptree::entry()
        .branch(
            Update::filter_message()
                .branch(
                    dptree::entry()
                        .filter_command::<Command>()
                        .endpoint(handle_command),
                )
                .branch(dptree::endpoint(handle_text)),
        )
        .branch(Update::filter_callback_query().endpoint(handle_callback));

    info!("Bot is running...");
    Dispatcher::builder(bot, handler)
        .dependencies(dptree::deps![Arc::new(relay)])
        .enable_ctrlc_handler()
        .build()
        .dispatch()
        .await;
}

#[allow(clippy::needless_pass_by_value)] // dptree injects handler arguments by value
async fn handle_command(bot: Bot, msg: Message, cmd: Command, relay: Arc<Relay>) -> HandlerResult {
    let Some(user) = msg.from.as_ref() else {
        return Ok(());
    };
    let event = cmd.into_event(&user.first_name);
    deliver(&relay, user.id.0, event, TelegramOutbox::new(bot, msg.chat.id)).await
}

#[allow(clippy::needless_pass_by_value)] // dptree injects handler arguments by value
async fn handle_text(bot: Bot, msg: Message, relay: Arc<Relay>) -> HandlerResult {
    let (Some(user), Some(text)) = (msg.from.as_ref(), msg.text()) else {
        return Ok(());
    };
    let event = Event::Text(text.to_string());
    deliver(&relay, user.id.0, event, TelegramOutbox::new(bot, msg.chat.id)).await
}

#[allow(clippy::needless_pass_by_value)] // dptree injects handler arguments by value
async fn handle_callback(bot: Bot, q: CallbackQuery, relay: Arc<Relay>) -> HandlerResult {
    bot.answer_callback_query(q.id.clone())
        .await
        .map_err(delivery)?;

    let Some(event) = q.data.as_deref().and_then(Event::from_callback_data) else {
        warn!("Ignoring callback with unknown data {:?}", q.data);
        return Ok(());
    };
    let Some(chat) = q.regular_message().map(|m| m.chat.id) else {
        return Ok(());
    };
    deliver(&relay, q.from.id.0, event, TelegramOutbox::new(bot, chat)).await
}

/// Dispatches one event, logging failures so one bad update does not stop
/// the dispatcher.
async fn deliver(relay: &Relay, user: u64, event: Event, out: TelegramOutbox) -> HandlerResult {
    if let Err(e) = relay.dispatch(user, event, &out).await {
        error!("Failed to handle update from user {user}: {e}");
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use chefbot_core::params::parse_profile_tokens;

    use super::*;

    #[test]
    fn test_parse_commands() {
        let cmd = Command::parse("/mealplan pref:italian servings:4", "chefbot").unwrap();
        assert_eq!(cmd, Command::Mealplan("pref:italian servings:4".to_string()));

        let cmd = Command::parse("/agents", "chefbot").unwrap();
        assert_eq!(cmd, Command::Agents);
    }

    #[test]
    fn test_commands_map_to_events() {
        assert_eq!(
            Command::Start.into_event("Ann"),
            Event::Start {
                first_name: "Ann".to_string()
            }
        );
        assert_eq!(
            Command::Mealplan("pref:italian  avoid:nuts".to_string()).into_event("Ann"),
            Event::MealPlan(vec!["pref:italian".to_string(), "avoid:nuts".to_string()])
        );
        assert_eq!(
            Command::Remember(String::new()).into_event("Ann"),
            Event::Remember(vec![])
        );
    }

    #[test]
    fn test_remember_example_is_understood() {
        let help = Command::descriptions().to_string();
        let example = "cuisine:thai dislike:cilantro";
        assert!(help.contains(example));

        let Event::Remember(tokens) = Command::Remember(example.to_string()).into_event("Ann")
        else {
            panic!("expected a remember event");
        };
        let update = parse_profile_tokens(&tokens);
        assert!(!update.is_empty());
        assert_eq!(update.preferred_cuisines, vec!["thai"]);
        assert_eq!(update.disliked_ingredients, vec!["cilantro"]);
    }

    #[test]
    fn test_command_descriptions_list_every_command() {
        let help = Command::descriptions().to_string();
        for name in ["/start", "/help", "/agents", "/reset", "/mealplan", "/chefs", "/remember"] {
            assert!(help.contains(name), "missing {name}");
        }
    }
}
