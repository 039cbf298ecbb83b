//! Chefbot CLI Application
//!
//! Runs the Telegram relay and exposes the meal plan pipeline on the
//! command line.

mod args;
mod cli;
mod renderer;
mod telegram;

use std::time::Duration;

use anyhow::{Context, Result};
use args::{Args, Commands};
use chefbot_core::{config::parse_allowed_users, RelayConfig};
use clap::Parser;
use cli::{local_config, Cli, GatewaySettings};
use log::info;
use renderer::TerminalRenderer;
use Commands::*;

#[tokio::main]
async fn main() -> Result<()> {
    // A missing .env file is fine; the environment may already be set
    dotenvy::dotenv().ok();
    env_logger::init();

    let Args {
        openai_api_key,
        api_base,
        model,
        no_color,
        command,
    } = Args::parse();

    let settings = GatewaySettings {
        api_key: openai_api_key,
        api_base,
        model,
    };
    let cli = Cli::new(TerminalRenderer::new(!no_color));

    match command {
        Run {
            telegram_token,
            allowed_users,
            send_delay_ms,
        } => {
            let allowed_users = allowed_users
                .as_deref()
                .map(parse_allowed_users)
                .transpose()
                .context("Invalid ALLOWED_USERS")?;
            if allowed_users.is_none() {
                info!("No allow-list configured; every user may talk to the bot");
            }
            let config = RelayConfig {
                allowed_users,
                send_delay: Duration::from_millis(send_delay_ms),
                ..RelayConfig::default()
            };
            let relay = settings
                .relay(config)
                .context("Failed to initialize relay")?;

            info!("Starting Telegram bot");
            telegram::run(telegram_token, relay).await;
            Ok(())
        }
        Chat { profile, message } => {
            let relay = settings.relay(local_config())?;
            cli.chat(&relay, &profile, &message).await
        }
        Mealplan { tokens } => {
            let relay = settings.relay(local_config())?;
            cli.meal_plan(&relay, tokens).await
        }
        Prompt { tokens } => cli.prompt(&tokens),
        Parse {
            file,
            json,
            max_chunk_len,
        } => cli.parse(file.as_deref(), json, max_chunk_len),
    }
}
