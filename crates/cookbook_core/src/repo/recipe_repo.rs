//! Recipe repository contracts and SQLite implementation.
//!
//! # Responsibility
//! - Provide write access to the `recipies` table.
//! - Own the LIKE-based substring search over recipe names.
//!
//! # Invariants
//! - Write paths must call `Recipe::validate()` before SQL mutations.
//! - Search wildcards in user input are escaped; `find_recipes` is a literal
//!   substring match, not a pattern match.
//! - Case sensitivity follows SQLite's default LIKE semantics
//!   (ASCII-case-insensitive).

use crate::model::recipe::{Recipe, RecipeId};
use crate::repo::ingredient_repo::{
    classify_insert_error, ensure_connection_ready, RepoResult,
};
use rusqlite::{params, Connection};

/// Default result cap for interactive searches.
pub const SEARCH_DEFAULT_LIMIT: u32 = 5;

/// Repository interface for recipe operations.
pub trait RecipeRepository {
    /// Stores one recipe and returns its row id.
    fn add_recipe(&self, recipe: &Recipe) -> RepoResult<RecipeId>;
    /// Returns names of recipes whose name contains `fragment`, capped at
    /// `max_count` rows.
    fn find_recipes(&self, fragment: &str, max_count: u32) -> RepoResult<Vec<String>>;
}

/// SQLite-backed recipe repository.
pub struct SqliteRecipeRepository<'conn> {
    conn: &'conn Connection,
}

impl<'conn> SqliteRecipeRepository<'conn> {
    /// Constructs a repository from a migrated/ready connection.
    pub fn try_new(conn: &'conn Connection) -> RepoResult<Self> {
        ensure_connection_ready(conn)?;
        Ok(Self { conn })
    }
}

impl RecipeRepository for SqliteRecipeRepository<'_> {
    fn add_recipe(&self, recipe: &Recipe) -> RepoResult<RecipeId> {
        recipe.validate()?;

        let mut stmt = self.conn.prepare_cached(
            "INSERT INTO recipies (name, directions, type) VALUES (?1, ?2, ?3);",
        )?;
        stmt.execute(params![
            recipe.name.as_str(),
            recipe.directions.as_str(),
            recipe.kind.to_db()
        ])
        .map_err(|err| classify_insert_error(err, &recipe.name))?;

        Ok(self.conn.last_insert_rowid())
    }

    fn find_recipes(&self, fragment: &str, max_count: u32) -> RepoResult<Vec<String>> {
        if max_count == 0 {
            return Ok(Vec::new());
        }

        let mut stmt = self.conn.prepare_cached(
            "SELECT name FROM recipies WHERE name LIKE ?1 ESCAPE '\\' LIMIT ?2;",
        )?;

        let token = like_substring_token(fragment);
        let mut rows = stmt.query(params![token, i64::from(max_count)])?;
        let mut names = Vec::new();
        while let Some(row) = rows.next()? {
            names.push(row.get::<_, String>(0)?);
        }

        Ok(names)
    }
}

/// Wraps `fragment` in `%` wildcards, escaping LIKE metacharacters so the
/// fragment itself always matches literally.
fn like_substring_token(fragment: &str) -> String {
    let mut token = String::with_capacity(fragment.len() + 2);
    token.push('%');
    for ch in fragment.chars() {
        if matches!(ch, '%' | '_' | '\\') {
            token.push('\\');
        }
        token.push(ch);
    }
    token.push('%');
    token
}
