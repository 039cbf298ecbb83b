//! Core library for the chefbot chat relay.
//!
//! The relay forwards chat messages to one of several personality
//! [`profiles`] backed by a language model, and turns the chef profile's free
//! text into a structured weekly dinner plan.
//!
//! # Meal Plan Pipeline
//!
//! ```text
//! PlanRequest ─▶ prompt ─▶ CompletionGateway ─▶ parser ─▶ StructuredPlan ─▶ display ─▶ chunks
//! ```
//!
//! - **Prompt Builder** ([`prompt`]): season-aware prompt ending in a literal
//!   response template
//! - **Parser** ([`parser`]): total function from raw model text to a plan
//!   with exactly one recipe per weekday
//! - **Formatter** ([`display`]): markdown chunks under the transport's size
//!   limit, never splitting a recipe
//!
//! Everything around the pipeline ([`gateway`], [`store`], [`relay`]) sits
//! behind a trait so transports and tests can swap implementations.
//!
//! # Quick Start
//!
//! ```rust
//! use chefbot_core::{display::PlanFormatter, parser};
//!
//! let raw = "# 1. MEAL PLAN SUMMARY\nMonday: Tacos\n# 2. SHOPPING LIST\n## Produce\n- onion\n# 3. DETAILED RECIPES\n## Monday: Tacos\n### Instructions:\n1. Cook.\n";
//! let plan = parser::parse(raw);
//! assert_eq!(plan.recipes.len(), 5);
//!
//! for chunk in PlanFormatter::default().format(&plan) {
//!     println!("{chunk}");
//! }
//! ```

pub mod chef;
pub mod config;
pub mod display;
pub mod error;
pub mod gateway;
pub mod models;
pub mod params;
pub mod parser;
pub mod profiles;
pub mod prompt;
pub mod relay;
pub mod store;

// Re-export commonly used types
pub use chef::{ChefProfile, ProfileUpdate};
pub use config::RelayConfig;
pub use display::PlanFormatter;
pub use error::{RelayError, Result};
pub use gateway::{CompletionGateway, CompletionRequest, FakeGateway, OpenAiGateway};
pub use models::{
    ChatMessage, MealSummary, PlanRequest, Recipe, Role, SeasonContext, ShoppingList,
    StructuredPlan, Weekday,
};
pub use profiles::{Profile, ProfileId};
pub use prompt::build_prompt;
pub use relay::{Event, Outbox, Relay, RelayBuilder};
pub use store::{ConversationStore, MemoryStore, UserId, UserState};
