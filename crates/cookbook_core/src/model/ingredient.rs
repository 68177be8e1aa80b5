//! Ingredient domain model.
//!
//! # Responsibility
//! - Define the ingredient record and its measurement unit enumeration.
//! - Own the integer encoding used by the `ingredients.units` column.
//!
//! # Invariants
//! - Ingredient names are non-empty after trimming.
//! - The unit encoding (COUNT=0, GRAM=1, MILLILITRE=2) never changes; stored
//!   rows depend on it.

use serde::{Deserialize, Serialize};
use std::error::Error;
use std::fmt::{Display, Formatter};

/// Row identifier assigned by storage (`ingredients.id`).
pub type IngredientId = i64;

/// Measurement kind for an ingredient quantity.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Unit {
    /// Discrete pieces (eggs, apples).
    Count,
    /// Mass in grams.
    Gram,
    /// Volume in millilitres.
    Millilitre,
}

impl Unit {
    /// Returns the stable integer encoding used by the storage schema.
    pub fn to_db(self) -> i64 {
        match self {
            Self::Count => 0,
            Self::Gram => 1,
            Self::Millilitre => 2,
        }
    }

    /// Decodes the storage integer encoding.
    ///
    /// Returns `None` for values outside the schema's CHECK range.
    pub fn from_db(value: i64) -> Option<Self> {
        match value {
            0 => Some(Self::Count),
            1 => Some(Self::Gram),
            2 => Some(Self::Millilitre),
            _ => None,
        }
    }

    /// Maps a one-character CLI unit code by its leading character.
    ///
    /// `c` -> Count, `g` -> Gram, `m` -> Millilitre. Any other leading
    /// character is unknown.
    pub fn from_code(code: &str) -> Option<Self> {
        match code.chars().next()? {
            'c' => Some(Self::Count),
            'g' => Some(Self::Gram),
            'm' => Some(Self::Millilitre),
            _ => None,
        }
    }
}

impl Display for Unit {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        let label = match self {
            Self::Count => "count",
            Self::Gram => "gram",
            Self::Millilitre => "millilitre",
        };
        write!(f, "{label}")
    }
}

/// Validation error for ingredient write paths.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum IngredientValidationError {
    EmptyName,
}

impl Display for IngredientValidationError {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::EmptyName => write!(f, "ingredient name must not be empty"),
        }
    }
}

impl Error for IngredientValidationError {}

/// Catalog entry for a single ingredient.
///
/// Immutable once stored; there is no update path by design.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Ingredient {
    /// Unique display name; uniqueness is enforced by the store.
    pub name: String,
    /// Measurement kind for quantities of this ingredient.
    pub units: Unit,
}

impl Ingredient {
    pub fn new(name: impl Into<String>, units: Unit) -> Self {
        Self {
            name: name.into(),
            units,
        }
    }

    /// Checks write-path invariants before persistence.
    pub fn validate(&self) -> Result<(), IngredientValidationError> {
        if self.name.trim().is_empty() {
            return Err(IngredientValidationError::EmptyName);
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::{Ingredient, IngredientValidationError, Unit};

    #[test]
    fn unit_db_encoding_round_trips() {
        for unit in [Unit::Count, Unit::Gram, Unit::Millilitre] {
            assert_eq!(Unit::from_db(unit.to_db()), Some(unit));
        }
        assert_eq!(Unit::from_db(3), None);
        assert_eq!(Unit::from_db(-1), None);
    }

    #[test]
    fn unit_code_maps_by_leading_character() {
        assert_eq!(Unit::from_code("c"), Some(Unit::Count));
        assert_eq!(Unit::from_code("grams"), Some(Unit::Gram));
        assert_eq!(Unit::from_code("ml"), Some(Unit::Millilitre));
        assert_eq!(Unit::from_code("x"), None);
        assert_eq!(Unit::from_code(""), None);
    }

    #[test]
    fn validate_rejects_blank_names() {
        let blank = Ingredient::new("   ", Unit::Gram);
        assert_eq!(
            blank.validate(),
            Err(IngredientValidationError::EmptyName)
        );
        assert!(Ingredient::new("flour", Unit::Gram).validate().is_ok());
    }

    #[test]
    fn serde_uses_snake_case_unit_names() {
        let json = serde_json::to_string(&Ingredient::new("milk", Unit::Millilitre)).unwrap();
        assert!(json.contains("\"millilitre\""));
    }
}
