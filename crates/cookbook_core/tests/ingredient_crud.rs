use cookbook_core::db::open_db_in_memory;
use cookbook_core::{
    Ingredient, IngredientRepository, RepoError, SqliteIngredientRepository, Unit,
};
use rusqlite::Connection;
use std::collections::HashSet;

#[test]
fn add_and_list_round_trips_unit_encoding() {
    let conn = open_db_in_memory().unwrap();
    let repo = SqliteIngredientRepository::try_new(&conn).unwrap();

    repo.add_ingredient(&Ingredient::new("egg", Unit::Count)).unwrap();
    repo.add_ingredient(&Ingredient::new("flour", Unit::Gram)).unwrap();
    repo.add_ingredient(&Ingredient::new("milk", Unit::Millilitre)).unwrap();

    let listed = repo.list_ingredients().unwrap();
    assert_eq!(listed.len(), 3);

    let pairs: HashSet<(String, i64)> = listed
        .into_iter()
        .map(|ingredient| (ingredient.name, ingredient.units.to_db()))
        .collect();
    assert!(pairs.contains(&("egg".to_string(), 0)));
    assert!(pairs.contains(&("flour".to_string(), 1)));
    assert!(pairs.contains(&("milk".to_string(), 2)));
}

#[test]
fn duplicate_name_fails_and_leaves_count_unchanged() {
    let conn = open_db_in_memory().unwrap();
    let repo = SqliteIngredientRepository::try_new(&conn).unwrap();

    repo.add_ingredient(&Ingredient::new("sugar", Unit::Gram)).unwrap();
    assert_eq!(repo.count_ingredients().unwrap(), 1);

    let err = repo
        .add_ingredient(&Ingredient::new("sugar", Unit::Count))
        .unwrap_err();
    assert!(matches!(err, RepoError::Duplicate { ref name } if name == "sugar"));
    assert_eq!(repo.count_ingredients().unwrap(), 1);
}

#[test]
fn listing_n_distinct_ingredients_returns_exactly_n() {
    let conn = open_db_in_memory().unwrap();
    let repo = SqliteIngredientRepository::try_new(&conn).unwrap();

    let added: Vec<Ingredient> = (0..7)
        .map(|index| Ingredient::new(format!("ingredient-{index}"), Unit::Count))
        .collect();
    for ingredient in &added {
        repo.add_ingredient(ingredient).unwrap();
    }

    let listed = repo.list_ingredients().unwrap();
    assert_eq!(listed.len(), added.len());

    let names: HashSet<String> = listed.into_iter().map(|item| item.name).collect();
    for ingredient in &added {
        assert!(names.contains(&ingredient.name));
    }
}

#[test]
fn validation_failure_blocks_persistence() {
    let conn = open_db_in_memory().unwrap();
    let repo = SqliteIngredientRepository::try_new(&conn).unwrap();

    let err = repo
        .add_ingredient(&Ingredient::new("   ", Unit::Gram))
        .unwrap_err();
    assert!(matches!(err, RepoError::IngredientValidation(_)));
    assert_eq!(repo.count_ingredients().unwrap(), 0);
}

#[test]
fn invalid_persisted_units_surface_as_invalid_data() {
    let conn = open_db_in_memory().unwrap();
    // Bypass the CHECK constraint to simulate a corrupted row.
    conn.execute_batch(
        "DROP TABLE ingredients;
         CREATE TABLE ingredients (
             id INTEGER PRIMARY KEY,
             name TEXT UNIQUE NOT NULL,
             units INTEGER NOT NULL
         );
         INSERT INTO ingredients (name, units) VALUES ('mystery', 9);",
    )
    .unwrap();

    let repo = SqliteIngredientRepository::try_new(&conn).unwrap();
    let err = repo.list_ingredients().unwrap_err();
    assert!(matches!(err, RepoError::InvalidData(_)));
}

#[test]
fn repository_rejects_uninitialized_connection() {
    let conn = Connection::open_in_memory().unwrap();

    let err = SqliteIngredientRepository::try_new(&conn)
        .err()
        .expect("uninitialized connection must be rejected");
    match err {
        RepoError::UninitializedConnection {
            expected_version,
            actual_version,
        } => {
            assert!(expected_version > 0);
            assert_eq!(actual_version, 0);
        }
        other => panic!("expected UninitializedConnection, got {other:?}"),
    }
}
