//! Display formatting for meal plans.
//!
//! Domain records implement [`std::fmt::Display`] directly (see [`models`]);
//! wrapper types in [`collections`] format whole sections, and
//! [`PlanFormatter`] assembles them into size-bounded chunks for delivery.
//!
//! ```text
//! ┌─────────────────┐    ┌─────────────────┐    ┌─────────────────┐
//! │ StructuredPlan  │    │ Display Wrapper │    │  Ordered text   │
//! │ (summary, list, │───▶│  types + chunk  │───▶│     chunks      │
//! │    recipes)     │    │     packing     │    │ (chat/terminal) │
//! └─────────────────┘    └─────────────────┘    └─────────────────┘
//! ```
//!
//! All output is markdown, using the same numbered section headers the
//! prompt asks for, so joined chunks parse back into the same plan.
//!
//! Formatting is pure: it never mutates the plan and is deterministic for a
//! given input, including shopping list category order.

pub mod chunks;
pub mod collections;
pub mod models;

pub use chunks::{PlanFormatter, DEFAULT_MAX_CHUNK_LEN};
pub use collections::{MealSummaries, PlanOverview, ShoppingItems};
