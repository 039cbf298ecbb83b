use std::path::PathBuf;

use chefbot_core::{display::DEFAULT_MAX_CHUNK_LEN, gateway::DEFAULT_API_BASE};
use clap::{Parser, Subcommand};

/// Chat relay for language-model personalities and weekly dinner planning
///
/// Chefbot connects Telegram users to four assistant personalities backed by
/// an OpenAI-compatible completion endpoint. The chef personality can turn a
/// request into a structured five-day dinner plan with a shopping list and
/// recipes. Offline subcommands expose the prompt builder and the plan parser
/// for inspection. Settings are also read from a `.env` file.
#[derive(Parser)]
#[command(version, about, name = "chefbot")]
pub struct Args {
    /// API key for the completion endpoint
    #[arg(long, env = "OPENAI_API_KEY", global = true, hide_env_values = true)]
    pub openai_api_key: Option<String>,

    /// Base URL of an OpenAI-compatible API
    #[arg(long, env = "OPENAI_API_BASE", global = true, default_value = DEFAULT_API_BASE)]
    pub api_base: String,

    /// Model used for completions
    #[arg(long, env = "OPENAI_MODEL", global = true, default_value = "gpt-3.5-turbo")]
    pub model: String,

    /// Disable colored output and use plain text
    #[arg(long, global = true)]
    pub no_color: bool,

    #[command(subcommand)]
    pub command: Commands,
}

/// Available commands for the chefbot CLI
///
/// - `run`: serve Telegram users (needs a bot token and an API key)
/// - `chat`, `mealplan`: talk to a profile from the terminal (needs an API key)
/// - `prompt`, `parse`: offline tools that never touch the network
#[derive(Subcommand)]
pub enum Commands {
    /// Start the Telegram bot (long polling)
    Run {
        /// Telegram bot token
        #[arg(long, env = "TELEGRAM_TOKEN", hide_env_values = true)]
        telegram_token: String,

        /// Comma-separated Telegram user ids allowed to use the bot
        #[arg(long, env = "ALLOWED_USERS")]
        allowed_users: Option<String>,

        /// Milliseconds to wait between the messages of a meal plan
        #[arg(long, default_value_t = 500)]
        send_delay_ms: u64,
    },
    /// Send one message to a profile and print the reply
    #[command(alias = "c")]
    Chat {
        /// Profile to talk to: default, chef, fitness or programmer
        #[arg(short, long, default_value = "default")]
        profile: String,

        /// Message text
        #[arg(required = true)]
        message: Vec<String>,
    },
    /// Generate a meal plan and print it in chunks
    #[command(alias = "m")]
    Mealplan {
        /// Request tokens such as pref:italian avoid:nuts servings:5
        tokens: Vec<String>,
    },
    /// Print the meal plan prompt for the given request tokens
    Prompt {
        /// Request tokens such as pref:italian avoid:nuts servings:5
        tokens: Vec<String>,
    },
    /// Parse a raw model reply and print the formatted plan
    Parse {
        /// File with the raw reply; reads stdin when omitted
        file: Option<PathBuf>,

        /// Print the structured plan as JSON instead
        #[arg(long)]
        json: bool,

        /// Character limit per chunk
        #[arg(long, default_value_t = DEFAULT_MAX_CHUNK_LEN)]
        max_chunk_len: usize,
    },
}
