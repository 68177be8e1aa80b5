//! Domain model for the ingredient/recipe catalog.
//!
//! # Responsibility
//! - Define canonical data structures used by core persistence logic.
//! - Keep the closed unit enumeration and its integer encoding in one place.
//!
//! # Invariants
//! - Ingredient names are non-empty; uniqueness is enforced by storage.
//! - `Unit` and `RecipeType` integer encodings are stable across releases.

pub mod ingredient;
pub mod recipe;
