//! Core domain logic for the cookbook catalog.
//! This crate is the single source of truth for business invariants.

pub mod db;
pub mod logging;
pub mod model;
pub mod repo;

pub use logging::{default_log_level, init_logging, logging_status};
pub use model::ingredient::{Ingredient, IngredientId, IngredientValidationError, Unit};
pub use model::recipe::{Recipe, RecipeId, RecipeType, RecipeValidationError};
pub use repo::ingredient_repo::{
    IngredientRepository, RepoError, RepoResult, SqliteIngredientRepository,
};
pub use repo::recipe_repo::{RecipeRepository, SqliteRecipeRepository, SEARCH_DEFAULT_LIMIT};

/// Returns the core crate version.
pub fn core_version() -> &'static str {
    env!("CARGO_PKG_VERSION")
}
