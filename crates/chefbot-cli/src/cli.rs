//! Terminal front end for the relay and the meal plan pipeline.

use std::{
    io::{self, Read},
    path::Path,
    sync::{
        atomic::{AtomicBool, Ordering},
        Arc,
    },
    time::Duration,
};

use anyhow::{bail, Context, Result};
use async_trait::async_trait;
use chefbot_core::{
    display::PlanFormatter,
    gateway::OpenAiGateway,
    params::parse_command_tokens,
    parser,
    profiles::ProfileId,
    prompt::build_prompt,
    relay::{Choice, Event, Outbox, RecordingOutbox},
    store::UserId,
    Relay, RelayBuilder, RelayConfig, RelayError,
};
use log::debug;

use crate::renderer::TerminalRenderer;

/// Terminal sessions always act as this user.
const LOCAL_USER: UserId = 0;

/// Connection settings shared by the commands that call the model.
pub struct GatewaySettings {
    pub api_key: Option<String>,
    pub api_base: String,
    pub model: String,
}

impl GatewaySettings {
    /// Builds a relay backed by the HTTP gateway.
    pub fn relay(&self, config: RelayConfig) -> Result<Relay> {
        let Some(api_key) = self.api_key.as_deref().filter(|key| !key.trim().is_empty()) else {
            bail!("OPENAI_API_KEY is not set (use --openai-api-key or the environment)");
        };
        let gateway = OpenAiGateway::new(api_key).with_api_base(&self.api_base);
        let relay = RelayBuilder::new(Arc::new(gateway))
            .with_config(config)
            .with_model(&self.model)
            .build()?;
        Ok(relay)
    }
}

pub struct Cli {
    renderer: TerminalRenderer,
}

impl Cli {
    pub fn new(renderer: TerminalRenderer) -> Self {
        Self { renderer }
    }

    /// Prints the prompt the chef would send for these tokens.
    pub fn prompt(&self, tokens: &[String]) -> Result<()> {
        let request = parse_command_tokens(tokens);
        debug!("Request from tokens: {request:?}");
        let prompt = build_prompt(&request, "");
        self.renderer.render(&prompt)
    }

    /// Parses a raw reply from a file or stdin and prints it.
    pub fn parse(&self, file: Option<&Path>, json: bool, max_chunk_len: usize) -> Result<()> {
        let plan = match file {
            Some(path) => parser::parse_file(path)?,
            None => {
                let mut raw = String::new();
                io::stdin()
                    .read_to_string(&mut raw)
                    .context("Failed to read reply from stdin")?;
                parser::parse(&raw)
            }
        };

        if json {
            println!("{}", serde_json::to_string_pretty(&plan)?);
            return Ok(());
        }

        let chunks = PlanFormatter::new(max_chunk_len).format(&plan);
        self.renderer.render_chunks(&chunks)
    }

    /// Sends one message to a profile and prints the reply.
    pub async fn chat(&self, relay: &Relay, profile: &str, message: &[String]) -> Result<()> {
        let text = message.join(" ");
        if text.trim().is_empty() {
            bail!("Message must not be empty");
        }

        let Ok(id) = profile.parse::<ProfileId>() else {
            bail!("Unknown profile '{profile}' (choose default, chef, fitness or programmer)");
        };

        // Selection confirmation is not interesting on a terminal
        let selection = RecordingOutbox::new();
        relay
            .dispatch(LOCAL_USER, Event::SelectProfile(id.to_string()), &selection)
            .await?;

        let out = TerminalOutbox::new(&self.renderer);
        relay.dispatch(LOCAL_USER, Event::Text(text), &out).await?;
        Ok(())
    }

    /// Generates a meal plan and prints every chunk.
    pub async fn meal_plan(&self, relay: &Relay, tokens: Vec<String>) -> Result<()> {
        let out = TerminalOutbox::new(&self.renderer);
        relay
            .dispatch(LOCAL_USER, Event::MealPlan(tokens), &out)
            .await?;
        Ok(())
    }
}

/// Relay configuration for terminal sessions: no pacing, no allow-list.
pub fn local_config() -> RelayConfig {
    RelayConfig {
        send_delay: Duration::ZERO,
        ..RelayConfig::default()
    }
}

/// Writes relay output to the terminal.
struct TerminalOutbox<'a> {
    renderer: &'a TerminalRenderer,
    printed: AtomicBool,
}

impl<'a> TerminalOutbox<'a> {
    fn new(renderer: &'a TerminalRenderer) -> Self {
        Self {
            renderer,
            printed: AtomicBool::new(false),
        }
    }

    fn print(&self, text: &str) -> chefbot_core::Result<()> {
        if self.printed.swap(true, Ordering::Relaxed) {
            println!();
        }
        self.renderer
            .render(text)
            .map_err(|e| RelayError::Delivery {
                message: e.to_string(),
            })
    }
}

#[async_trait]
impl Outbox for TerminalOutbox<'_> {
    async fn send(&self, text: &str) -> chefbot_core::Result<()> {
        self.print(text)
    }

    async fn send_choices(&self, text: &str, choices: &[Choice]) -> chefbot_core::Result<()> {
        let lines: Vec<String> = choices
            .iter()
            .map(|choice| format!("- {} ({})", choice.label, choice.data))
            .collect();
        self.print(&format!("{text}\n{}", lines.join("\n")))
    }

    async fn typing(&self) -> chefbot_core::Result<()> {
        debug!("Waiting for the model...");
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_local_config_has_no_delay() {
        let config = local_config();
        assert!(config.send_delay.is_zero());
        assert!(config.allowed_users.is_none());
    }

    #[test]
    fn test_missing_api_key_is_rejected() {
        let settings = GatewaySettings {
            api_key: Some("  ".to_string()),
            api_base: "http://localhost".to_string(),
            model: "gpt-3.5-turbo".to_string(),
        };
        let err = settings.relay(local_config()).err().map(|e| e.to_string());
        assert!(err.is_some_and(|e| e.contains("OPENAI_API_KEY")));
    }

    #[tokio::test]
    async fn test_terminal_outbox_accepts_choices() {
        let renderer = TerminalRenderer::new(false);
        let out = TerminalOutbox::new(&renderer);
        let choices = vec![Choice {
            label: "Chef Gordon".to_string(),
            data: "agent_chef".to_string(),
        }];
        assert!(out.send_choices("Choose an agent to talk to:", &choices).await.is_ok());
        assert!(out.typing().await.is_ok());
    }
}
