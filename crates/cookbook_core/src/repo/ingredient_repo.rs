//! Ingredient repository contracts and SQLite implementation.
//!
//! # Responsibility
//! - Provide stable write/read APIs over the `ingredients` table.
//! - Keep SQL details inside the core persistence boundary.
//!
//! # Invariants
//! - Write paths must call `Ingredient::validate()` before SQL mutations.
//! - Read paths must reject invalid persisted state instead of masking it.
//! - A row-fetch error mid-iteration propagates to the caller; partial
//!   results are never silently returned.

use crate::db::{migrations, DbError};
use crate::model::ingredient::{Ingredient, IngredientId, IngredientValidationError, Unit};
use crate::model::recipe::RecipeValidationError;
use rusqlite::{params, Connection, Row};
use std::error::Error;
use std::fmt::{Display, Formatter};

pub type RepoResult<T> = Result<T, RepoError>;

/// Generic repository error for catalog persistence and query operations.
#[derive(Debug)]
pub enum RepoError {
    IngredientValidation(IngredientValidationError),
    RecipeValidation(RecipeValidationError),
    /// Unique-name constraint violation on insert.
    Duplicate {
        name: String,
    },
    Db(DbError),
    InvalidData(String),
    /// Connection has not been migrated to the schema this binary expects.
    UninitializedConnection {
        expected_version: u32,
        actual_version: u32,
    },
}

impl Display for RepoError {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::IngredientValidation(err) => write!(f, "{err}"),
            Self::RecipeValidation(err) => write!(f, "{err}"),
            Self::Duplicate { name } => write!(f, "name already exists: {name}"),
            Self::Db(err) => write!(f, "{err}"),
            Self::InvalidData(message) => write!(f, "invalid persisted catalog data: {message}"),
            Self::UninitializedConnection {
                expected_version,
                actual_version,
            } => write!(
                f,
                "connection schema version {actual_version} does not match expected {expected_version}; \
                 open connections through db::open_db"
            ),
        }
    }
}

impl Error for RepoError {
    fn source(&self) -> Option<&(dyn Error + 'static)> {
        match self {
            Self::IngredientValidation(err) => Some(err),
            Self::RecipeValidation(err) => Some(err),
            Self::Db(err) => Some(err),
            Self::Duplicate { .. }
            | Self::InvalidData(_)
            | Self::UninitializedConnection { .. } => None,
        }
    }
}

impl From<IngredientValidationError> for RepoError {
    fn from(value: IngredientValidationError) -> Self {
        Self::IngredientValidation(value)
    }
}

impl From<RecipeValidationError> for RepoError {
    fn from(value: RecipeValidationError) -> Self {
        Self::RecipeValidation(value)
    }
}

impl From<DbError> for RepoError {
    fn from(value: DbError) -> Self {
        Self::Db(value)
    }
}

impl From<rusqlite::Error> for RepoError {
    fn from(value: rusqlite::Error) -> Self {
        Self::Db(DbError::Sqlite(value))
    }
}

/// Classifies an insert failure, separating unique-name violations from
/// transport errors so callers and tests can distinguish the causes.
pub(crate) fn classify_insert_error(err: rusqlite::Error, name: &str) -> RepoError {
    if let rusqlite::Error::SqliteFailure(ffi_err, _) = &err {
        if ffi_err.code == rusqlite::ErrorCode::ConstraintViolation {
            return RepoError::Duplicate {
                name: name.to_string(),
            };
        }
    }
    RepoError::Db(DbError::Sqlite(err))
}

/// Verifies the connection has been migrated before any repository use.
pub(crate) fn ensure_connection_ready(conn: &Connection) -> RepoResult<()> {
    let expected_version = migrations::latest_version();
    let actual_version = migrations::current_user_version(conn)?;
    if actual_version != expected_version {
        return Err(RepoError::UninitializedConnection {
            expected_version,
            actual_version,
        });
    }
    Ok(())
}

/// Repository interface for ingredient operations.
pub trait IngredientRepository {
    /// Stores one ingredient and returns its row id.
    fn add_ingredient(&self, ingredient: &Ingredient) -> RepoResult<IngredientId>;
    /// Returns every stored ingredient in store-defined order.
    fn list_ingredients(&self) -> RepoResult<Vec<Ingredient>>;
    /// Returns the number of stored ingredients.
    fn count_ingredients(&self) -> RepoResult<u64>;
}

/// SQLite-backed ingredient repository.
///
/// Statements are precompiled through the connection's prepared-statement
/// cache, so repeated commands reuse the compiled form. Statement handles
/// borrow the connection; the borrow checker enforces that they are released
/// before the connection can be dropped.
pub struct SqliteIngredientRepository<'conn> {
    conn: &'conn Connection,
}

impl<'conn> SqliteIngredientRepository<'conn> {
    /// Constructs a repository from a migrated/ready connection.
    pub fn try_new(conn: &'conn Connection) -> RepoResult<Self> {
        ensure_connection_ready(conn)?;
        Ok(Self { conn })
    }
}

impl IngredientRepository for SqliteIngredientRepository<'_> {
    fn add_ingredient(&self, ingredient: &Ingredient) -> RepoResult<IngredientId> {
        ingredient.validate()?;

        let mut stmt = self
            .conn
            .prepare_cached("INSERT INTO ingredients (name, units) VALUES (?1, ?2);")?;
        stmt.execute(params![
            ingredient.name.as_str(),
            ingredient.units.to_db()
        ])
        .map_err(|err| classify_insert_error(err, &ingredient.name))?;

        Ok(self.conn.last_insert_rowid())
    }

    fn list_ingredients(&self) -> RepoResult<Vec<Ingredient>> {
        let mut stmt = self
            .conn
            .prepare_cached("SELECT name, units FROM ingredients;")?;

        let mut rows = stmt.query([])?;
        let mut ingredients = Vec::new();
        while let Some(row) = rows.next()? {
            ingredients.push(parse_ingredient_row(row)?);
        }

        Ok(ingredients)
    }

    fn count_ingredients(&self) -> RepoResult<u64> {
        let mut stmt = self
            .conn
            .prepare_cached("SELECT COUNT(*) FROM ingredients;")?;
        let count = stmt.query_row([], |row| row.get::<_, i64>(0))?;
        Ok(count as u64)
    }
}

fn parse_ingredient_row(row: &Row<'_>) -> RepoResult<Ingredient> {
    let name: String = row.get("name")?;
    let units_raw: i64 = row.get("units")?;
    let units = Unit::from_db(units_raw).ok_or_else(|| {
        RepoError::InvalidData(format!(
            "invalid units value `{units_raw}` in ingredients.units"
        ))
    })?;

    Ok(Ingredient { name, units })
}
