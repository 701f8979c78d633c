//! Operation matrix against the seed fixture.
//!
//! Exercises every query and mutation through the public API the way the
//! transport layer would: optional id/name arguments in, recipes or
//! errors out.

use larder_model::{CreateRecipeRequest, EntityKind, NewRecipe};
use larder_runtime::{
    create_recipe, delete_ingredient, delete_recipe, recipes_by_diet, recipes_by_ingredient,
    recipes_by_name_or_id, CatalogError, ErrorKind,
};
use larder_store::seed::sample_catalog;
use larder_store::CatalogStore;

fn names(store: &CatalogStore, recipes: &[larder_model::Recipe]) -> Vec<String> {
    // Assert against the store's copy so a stale clone would be caught.
    recipes
        .iter()
        .map(|r| store.recipes[&r.id].name.clone())
        .collect()
}

#[test]
fn queries_resolve_by_id_name_and_partial_name() {
    let store = sample_catalog();

    let by_id = recipes_by_ingredient(&store, Some(11), None).unwrap();
    let by_name = recipes_by_ingredient(&store, None, Some("Salmon")).unwrap();
    let by_partial = recipes_by_ingredient(&store, None, Some("sal")).unwrap();

    assert_eq!(by_id.len(), 2);
    assert_eq!(by_id, by_name);
    assert_eq!(by_id, by_partial);
    assert_eq!(
        names(&store, &by_id),
        vec!["Grilled Salmon", "Salmon Teriyaki"]
    );
}

#[test]
fn diet_queries_partition_the_seed() {
    let store = sample_catalog();

    let vegetarian = recipes_by_diet(&store, Some(22), None).unwrap();
    let vegan = recipes_by_diet(&store, None, Some("Vegan")).unwrap();
    let gluten_free = recipes_by_diet(&store, None, Some("gluten")).unwrap();

    assert_eq!(
        names(&store, &vegetarian),
        vec!["Margherita Pizza", "Garden Salad", "Fruit Smoothie"]
    );
    assert_eq!(names(&store, &vegan), vec!["Garden Salad", "Fruit Smoothie"]);
    assert_eq!(
        names(&store, &gluten_free),
        vec!["Grilled Salmon", "Garden Salad", "Fruit Smoothie"]
    );
}

#[test]
fn absent_arguments_are_a_guard_not_an_error() {
    let store = sample_catalog();

    assert!(recipes_by_ingredient(&store, None, None).unwrap().is_empty());
    assert!(recipes_by_diet(&store, None, None).unwrap().is_empty());
    assert!(recipes_by_name_or_id(&store, None, None).unwrap().is_empty());

    // Supplied-but-unmatched arguments are loud for the resolving queries...
    assert_eq!(
        recipes_by_ingredient(&store, Some(999), None).unwrap_err().kind(),
        ErrorKind::InvalidArgument
    );
    assert_eq!(
        recipes_by_diet(&store, None, Some("Paleo")).unwrap_err().kind(),
        ErrorKind::InvalidArgument
    );
    // ...but silent for the name-or-id search.
    assert!(recipes_by_name_or_id(&store, Some(999), Some("qwe123"))
        .unwrap()
        .is_empty());
}

#[test]
fn deleting_eggs_takes_carbonara_with_it() {
    // The worked example: ingredient 2 ("Eggs") is referenced by exactly
    // one recipe, "Spaghetti Carbonara" (id 1).
    let mut store = sample_catalog();

    let removed = delete_ingredient(&mut store, Some(2), None).unwrap();

    assert_eq!(removed.id, 2);
    assert_eq!(removed.name, "Eggs");
    assert!(!store.recipes.contains_key(&1));
    assert!(store.recipe_ingredients.iter().all(|row| row.recipe_id != 1));
    assert!(store
        .recipe_ingredients
        .iter()
        .all(|row| row.ingredient_id != 2));
}

#[test]
fn shared_ingredient_survives_a_rejected_delete() {
    let mut store = sample_catalog();
    let rows_before = store.recipe_ingredients.len();

    for lookup in [
        (Some(11), None),          // Salmon by id
        (None, Some("Salmon")),    // by name
        (None, Some("mesan")),     // Parmesan Cheese by fragment
    ] {
        let err = delete_ingredient(&mut store, lookup.0, lookup.1).unwrap_err();
        assert_eq!(err.kind(), ErrorKind::Conflict);
    }

    assert_eq!(store.recipe_ingredients.len(), rows_before);
    assert!(store.ingredients.contains_key(&11));
    assert!(store.ingredients.contains_key(&5));
}

#[test]
fn create_then_delete_leaves_no_orphan_rows() {
    let mut store = sample_catalog();

    let created = create_recipe(
        &mut store,
        &CreateRecipeRequest {
            recipe: NewRecipe {
                name: "Carbonara Bianca".to_string(),
                description: "Carbonara without the tomato debate".to_string(),
                servings: 2,
            },
            // One shared-name ingredient, one brand new.
            ingredients: vec!["Eggs".to_string(), "Guanciale".to_string()],
        },
    )
    .unwrap();

    assert!(recipes_by_ingredient(&store, None, Some("Guanciale"))
        .unwrap()
        .iter()
        .any(|r| r.id == created.id));

    let removed = delete_recipe(&mut store, Some(created.id), None).unwrap();
    assert_eq!(removed.id, created.id);

    // No join row references the deleted recipe; the ingredients the
    // create touched persist, shared-name ones included.
    assert!(store
        .recipe_ingredients
        .iter()
        .all(|row| row.recipe_id != created.id));
    assert!(store.ingredients.values().any(|i| i.name == "Guanciale"));
    assert!(store.ingredients.values().any(|i| i.name == "Eggs"));
}

#[test]
fn create_conflicts_on_existing_name_and_changes_nothing() {
    let mut store = sample_catalog();
    let recipes_before = store.recipes.len();
    let ingredients_before = store.ingredients.len();

    let err = create_recipe(
        &mut store,
        &CreateRecipeRequest {
            recipe: NewRecipe {
                name: "Spaghetti Carbonara".to_string(),
                description: "Someone else's take".to_string(),
                servings: 6,
            },
            ingredients: vec!["Basil".to_string()],
        },
    )
    .unwrap_err();

    assert_eq!(err.kind(), ErrorKind::Conflict);
    assert_eq!(store.recipes.len(), recipes_before);
    assert_eq!(store.ingredients.len(), ingredients_before);
}

#[test]
fn missing_arguments_and_failed_resolution_share_a_kind() {
    let mut store = sample_catalog();

    let missing = delete_recipe(&mut store, None, None).unwrap_err();
    let unresolved = delete_recipe(&mut store, None, Some("qwe123")).unwrap_err();

    assert_eq!(
        missing,
        CatalogError::MissingArgument {
            kind: EntityKind::Recipe
        }
    );
    assert!(matches!(unresolved, CatalogError::NotFound { .. }));
    assert_eq!(missing.kind(), unresolved.kind());
}
