//! A small kitchen to exercise behaviour-driven step bindings with.

pub mod collections;
pub mod config;
pub mod error;
pub mod food;
pub mod handler;
pub mod hooks;
pub mod kitchen;
pub mod pantry;
pub mod recipe;
pub mod steps;

pub use config::{CookPolicy, KitchenConfig};
pub use error::KitchenError;
pub use food::{Ingredient, Quantity, Utensil};
pub use kitchen::Kitchen;
pub use recipe::{Instruction, Recipe};
pub use steps::Scenario;
