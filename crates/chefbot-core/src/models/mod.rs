//! Data models for meal plans, plan requests and chat messages.
//!
//! Display implementations for the meal plan records live in
//! [`crate::display::models`], keeping presentation apart from the data.
//!
//! # Examples
//!
//! ```rust
//! use chefbot_core::models::{Recipe, StructuredPlan, Weekday};
//!
//! let plan = StructuredPlan {
//!     recipes: vec![Recipe::new(Weekday::Monday, "Tacos")],
//!     ..Default::default()
//! };
//! assert_eq!(plan.recipe(Weekday::Monday).unwrap().name, "Tacos");
//! assert!("friday".parse::<Weekday>().is_ok());
//! ```

pub mod chat;
pub mod meal_plan;
pub mod request;
pub mod season;
pub mod weekday;


pub use chat::{ChatMessage, Role};
pub use meal_plan::{
    MealSummary, Recipe, ShoppingList, StructuredPlan, DETAILS_UNAVAILABLE, MEAL_NOT_SPECIFIED,
};
pub use request::{Inspiration, PlanRequest, DEFAULT_SERVINGS};
pub use season::{Season, SeasonContext};
pub use weekday::Weekday;
