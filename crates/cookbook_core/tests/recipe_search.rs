use cookbook_core::db::open_db_in_memory;
use cookbook_core::{
    Recipe, RecipeRepository, RecipeType, RepoError, SqliteRecipeRepository,
};

fn seeded_repo(conn: &rusqlite::Connection) -> SqliteRecipeRepository<'_> {
    let repo = SqliteRecipeRepository::try_new(conn).unwrap();
    repo.add_recipe(&Recipe::new(
        "chocolate cake",
        "melt, mix, bake at 180C",
        RecipeType::None,
    ))
    .unwrap();
    repo.add_recipe(&Recipe::new("soup", "boil everything", RecipeType::None))
        .unwrap();
    repo
}

#[test]
fn substring_search_matches_and_omits() {
    let conn = open_db_in_memory().unwrap();
    let repo = seeded_repo(&conn);

    let hits = repo.find_recipes("cake", 5).unwrap();
    assert_eq!(hits, vec!["chocolate cake".to_string()]);

    let none = repo.find_recipes("pizza", 5).unwrap();
    assert!(none.is_empty());
}

#[test]
fn search_respects_max_count() {
    let conn = open_db_in_memory().unwrap();
    let repo = SqliteRecipeRepository::try_new(&conn).unwrap();

    for index in 0..8 {
        repo.add_recipe(&Recipe::new(
            format!("stew variant {index}"),
            "simmer",
            RecipeType::None,
        ))
        .unwrap();
    }

    assert_eq!(repo.find_recipes("stew", 5).unwrap().len(), 5);
    assert_eq!(repo.find_recipes("stew", 3).unwrap().len(), 3);
    assert!(repo.find_recipes("stew", 0).unwrap().is_empty());
}

#[test]
fn like_metacharacters_match_literally() {
    let conn = open_db_in_memory().unwrap();
    let repo = SqliteRecipeRepository::try_new(&conn).unwrap();

    repo.add_recipe(&Recipe::new("100% rye bread", "knead", RecipeType::None))
        .unwrap();
    repo.add_recipe(&Recipe::new("flat_bread", "roll", RecipeType::None))
        .unwrap();

    let percent = repo.find_recipes("100%", 5).unwrap();
    assert_eq!(percent, vec!["100% rye bread".to_string()]);

    // `_` must not behave as a single-character wildcard.
    let underscore = repo.find_recipes("t_b", 5).unwrap();
    assert_eq!(underscore, vec!["flat_bread".to_string()]);
}

#[test]
fn search_is_ascii_case_insensitive() {
    let conn = open_db_in_memory().unwrap();
    seeded_repo(&conn);

    let repo = SqliteRecipeRepository::try_new(&conn).unwrap();
    let hits = repo.find_recipes("CAKE", 5).unwrap();
    assert_eq!(hits, vec!["chocolate cake".to_string()]);
}

#[test]
fn duplicate_recipe_name_is_classified() {
    let conn = open_db_in_memory().unwrap();
    let repo = seeded_repo(&conn);

    let err = repo
        .add_recipe(&Recipe::new("soup", "different boil", RecipeType::None))
        .unwrap_err();
    assert!(matches!(err, RepoError::Duplicate { ref name } if name == "soup"));
}

#[test]
fn blank_recipe_name_is_rejected_before_sql() {
    let conn = open_db_in_memory().unwrap();
    let repo = SqliteRecipeRepository::try_new(&conn).unwrap();

    let err = repo
        .add_recipe(&Recipe::new("", "directions", RecipeType::None))
        .unwrap_err();
    assert!(matches!(err, RepoError::RecipeValidation(_)));
}

#[test]
fn empty_fragment_matches_everything_up_to_limit() {
    let conn = open_db_in_memory().unwrap();
    let repo = seeded_repo(&conn);

    let hits = repo.find_recipes("", 5).unwrap();
    assert_eq!(hits.len(), 2);
}
