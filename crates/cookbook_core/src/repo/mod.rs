//! Repository layer abstractions and persistence implementations.
//!
//! # Responsibility
//! - Define use-case oriented data access contracts.
//! - Isolate SQLite query details from the command loop.
//!
//! # Invariants
//! - Repository writes must enforce model `validate()` before persistence.
//! - Repository APIs return semantic errors (`Duplicate`, `InvalidData`) in
//!   addition to DB transport errors.

pub mod ingredient_repo;
pub mod recipe_repo;
