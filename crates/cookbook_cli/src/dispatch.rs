//! Line command dispatcher for the interactive catalog loop.
//!
//! # Responsibility
//! - Tokenize one input line into a command name plus arguments.
//! - Route commands to repository operations and print results.
//!
//! # Invariants
//! - Per-command failures print one `>error: ` line and never end the loop.
//! - Each argument validation failure is a hard stop for that command.
//! - Output goes through a caller-provided writer so scenario tests can
//!   capture it.

use cookbook_core::{
    Ingredient, IngredientRepository, RecipeRepository, RepoResult, SqliteIngredientRepository,
    SqliteRecipeRepository, Unit, SEARCH_DEFAULT_LIMIT,
};
use log::warn;
use rusqlite::Connection;
use std::io::{BufRead, Write};

/// Whether the command loop should keep reading lines.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LoopControl {
    Continue,
    Quit,
}

/// Command router over the catalog repositories.
pub struct Dispatcher<'conn> {
    ingredients: SqliteIngredientRepository<'conn>,
    recipes: SqliteRecipeRepository<'conn>,
}

impl<'conn> Dispatcher<'conn> {
    /// Builds a dispatcher over a migrated/ready connection.
    pub fn try_new(conn: &'conn Connection) -> RepoResult<Self> {
        Ok(Self {
            ingredients: SqliteIngredientRepository::try_new(conn)?,
            recipes: SqliteRecipeRepository::try_new(conn)?,
        })
    }

    /// Reads commands line by line until `quit` or end of input.
    pub fn run(&self, input: impl BufRead, mut out: impl Write) -> std::io::Result<()> {
        for line in input.lines() {
            let line = line?;
            if self.dispatch_line(&line, &mut out)? == LoopControl::Quit {
                break;
            }
        }
        out.flush()
    }

    /// Executes one command line and writes responses to `out`.
    ///
    /// Blank lines are skipped silently. Returns `LoopControl::Quit` only
    /// for the `quit` command.
    pub fn dispatch_line(&self, line: &str, out: &mut impl Write) -> std::io::Result<LoopControl> {
        let tokens = tokenize(line);
        let Some(command) = tokens.first() else {
            return Ok(LoopControl::Continue);
        };

        match command.as_str() {
            "list_ingrs" => self.list_ingredients(out)?,
            "search" => {
                let fragment = tokens.get(1).map(String::as_str).unwrap_or("");
                self.search_recipes(fragment, out)?;
            }
            "add_ingr" => self.add_ingredient(&tokens, out)?,
            "add_recipie" => writeln!(out, ">TODO")?,
            "quit" => return Ok(LoopControl::Quit),
            other => {
                warn!("event=command_dispatch module=cli status=error error_code=unknown_command command={other}");
                writeln!(out, ">error: unknown command")?;
            }
        }

        Ok(LoopControl::Continue)
    }

    fn list_ingredients(&self, out: &mut impl Write) -> std::io::Result<()> {
        match self.ingredients.list_ingredients() {
            Ok(ingredients) => {
                writeln!(out, "Ingredients:")?;
                for ingredient in ingredients {
                    writeln!(out, "{} {}", ingredient.name, ingredient.units.to_db())?;
                }
            }
            Err(err) => {
                warn!("event=list_ingredients module=cli status=error error={err}");
                writeln!(out, ">error: could not list ingredients")?;
            }
        }
        Ok(())
    }

    fn search_recipes(&self, fragment: &str, out: &mut impl Write) -> std::io::Result<()> {
        match self.recipes.find_recipes(fragment, SEARCH_DEFAULT_LIMIT) {
            Ok(names) => {
                writeln!(out, "Query results:")?;
                for name in names {
                    writeln!(out, "{name}")?;
                }
            }
            Err(err) => {
                warn!("event=search_recipes module=cli status=error error={err}");
                writeln!(out, ">error: could not search recipes")?;
            }
        }
        Ok(())
    }

    fn add_ingredient(&self, tokens: &[String], out: &mut impl Write) -> std::io::Result<()> {
        let name = tokens.get(1).map(String::as_str).unwrap_or("");
        if name.trim().is_empty() {
            writeln!(out, ">error: empty ingredient name")?;
            return Ok(());
        }

        let Some(unit_code) = tokens.get(2) else {
            writeln!(out, ">error: no measure unit is given")?;
            return Ok(());
        };
        let Some(units) = Unit::from_code(unit_code) else {
            writeln!(out, ">error: unknown measure unit")?;
            return Ok(());
        };

        let ingredient = Ingredient::new(name, units);
        if let Err(err) = self.ingredients.add_ingredient(&ingredient) {
            warn!("event=add_ingredient module=cli status=error name={name} error={err}");
            writeln!(out, ">error: could not add ingredient")?;
        }
        Ok(())
    }
}

/// Splits a line into whitespace-delimited tokens.
///
/// A double-quoted span is taken verbatim without the quotes, so empty
/// (`""`) and multi-word arguments are expressible. An unterminated quote
/// runs to the end of the line.
fn tokenize(line: &str) -> Vec<String> {
    let mut tokens = Vec::new();
    let mut chars = line.chars().peekable();

    while let Some(&ch) = chars.peek() {
        if ch.is_whitespace() {
            chars.next();
            continue;
        }

        if ch == '"' {
            chars.next();
            let mut token = String::new();
            for ch in chars.by_ref() {
                if ch == '"' {
                    break;
                }
                token.push(ch);
            }
            tokens.push(token);
            continue;
        }

        let mut token = String::new();
        while let Some(&ch) = chars.peek() {
            if ch.is_whitespace() {
                break;
            }
            token.push(ch);
            chars.next();
        }
        tokens.push(token);
    }

    tokens
}
