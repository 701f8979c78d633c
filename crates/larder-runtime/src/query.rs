//! Query operations over the catalog
//!
//! Read-only scans. Results are duplicate-free and come back in the
//! store's insertion order, though callers must not rely on any order.

use crate::error::CatalogError;
use crate::resolve::{name_contains, resolve};
use larder_model::{EntityId, EntityKind, Named, Recipe};
use larder_store::CatalogStore;
use std::collections::HashSet;

fn no_arguments(id: Option<EntityId>, name: Option<&str>) -> bool {
    id.is_none() && name.map_or(true, str::is_empty)
}

/// Recipes using the ingredient identified by `id` or `name`.
///
/// With both arguments absent this returns the empty set without
/// attempting resolution; with arguments that match nothing it fails.
pub fn recipes_by_ingredient(
    store: &CatalogStore,
    id: Option<EntityId>,
    name: Option<&str>,
) -> Result<Vec<Recipe>, CatalogError> {
    if no_arguments(id, name) {
        return Ok(Vec::new());
    }

    let ingredient = resolve(EntityKind::Ingredient, store.ingredients.values(), id, name)?;
    let using: HashSet<EntityId> = store
        .recipe_ingredients
        .iter()
        .filter(|row| row.ingredient_id == ingredient.id)
        .map(|row| row.recipe_id)
        .collect();

    Ok(store
        .recipes
        .values()
        .filter(|recipe| using.contains(&recipe.id))
        .cloned()
        .collect())
}

/// Recipes whose ingredients are all compatible with the dietary
/// restriction identified by `id` or `name`.
///
/// Compatibility means an `IngredientRestriction` row links the
/// ingredient to the diet. A recipe with no ingredients qualifies
/// vacuously. Note the direction: this asks "is every ingredient
/// compatible", not "does the recipe avoid restricted ingredients".
pub fn recipes_by_diet(
    store: &CatalogStore,
    id: Option<EntityId>,
    name: Option<&str>,
) -> Result<Vec<Recipe>, CatalogError> {
    if no_arguments(id, name) {
        return Ok(Vec::new());
    }

    let diet = resolve(
        EntityKind::DietaryRestriction,
        store.dietary_restrictions.values(),
        id,
        name,
    )?;
    let compatible: HashSet<EntityId> = store
        .ingredient_restrictions
        .iter()
        .filter(|row| row.dietary_restriction_id == diet.id)
        .map(|row| row.ingredient_id)
        .collect();

    Ok(store
        .recipes
        .values()
        .filter(|recipe| {
            store
                .recipe_ingredients
                .iter()
                .filter(|row| row.recipe_id == recipe.id)
                .all(|row| compatible.contains(&row.ingredient_id))
        })
        .cloned()
        .collect())
}

/// Primary-key lookup with a name fallback.
///
/// The substring scan only runs when the id produced nothing and `name`
/// is non-empty; a non-empty id result ignores the name entirely. Unknown
/// arguments yield an empty set rather than an error.
pub fn recipes_by_name_or_id(
    store: &CatalogStore,
    id: Option<EntityId>,
    name: Option<&str>,
) -> Result<Vec<Recipe>, CatalogError> {
    let mut recipes: Vec<Recipe> = id
        .and_then(|id| store.recipes.get(&id))
        .cloned()
        .into_iter()
        .collect();

    if recipes.is_empty() {
        if let Some(needle) = name.filter(|needle| !needle.is_empty()) {
            recipes = store
                .recipes
                .values()
                .filter(|recipe| name_contains(recipe.name(), needle))
                .cloned()
                .collect();
        }
    }

    Ok(recipes)
}
