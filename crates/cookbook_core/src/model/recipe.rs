//! Recipe domain model.
//!
//! # Responsibility
//! - Define the recipe record persisted in the `recipies` table.
//!
//! # Invariants
//! - Recipe names are unique (enforced by storage) and non-empty.
//! - `RecipeType` currently has a single variant; the integer encoding is
//!   kept so the schema can grow without a migration of existing rows.

use serde::{Deserialize, Serialize};
use std::error::Error;
use std::fmt::{Display, Formatter};

/// Row identifier assigned by storage (`recipies.id`).
pub type RecipeId = i64;

/// Category tag for a recipe. Single variant until categorization lands.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum RecipeType {
    #[default]
    None,
}

impl RecipeType {
    /// Returns the stable integer encoding used by the storage schema.
    pub fn to_db(self) -> i64 {
        match self {
            Self::None => 0,
        }
    }

    /// Decodes the storage integer encoding.
    pub fn from_db(value: i64) -> Option<Self> {
        match value {
            0 => Some(Self::None),
            _ => None,
        }
    }
}

/// Validation error for recipe write paths.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum RecipeValidationError {
    EmptyName,
}

impl Display for RecipeValidationError {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::EmptyName => write!(f, "recipe name must not be empty"),
        }
    }
}

impl Error for RecipeValidationError {}

/// Catalog entry for a single recipe.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Recipe {
    /// Unique display name; uniqueness is enforced by the store.
    pub name: String,
    /// Free-form preparation text.
    pub directions: String,
    /// Serialized as `type` to match the storage column name.
    #[serde(rename = "type")]
    pub kind: RecipeType,
}

impl Recipe {
    pub fn new(name: impl Into<String>, directions: impl Into<String>, kind: RecipeType) -> Self {
        Self {
            name: name.into(),
            directions: directions.into(),
            kind,
        }
    }

    /// Checks write-path invariants before persistence.
    pub fn validate(&self) -> Result<(), RecipeValidationError> {
        if self.name.trim().is_empty() {
            return Err(RecipeValidationError::EmptyName);
        }
        Ok(())
    }
}
