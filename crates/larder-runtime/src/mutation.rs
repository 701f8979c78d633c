//! Mutation operations over the catalog
//!
//! Every operation checks before it writes: a returned error means no
//! collection was touched. Join rows never outlive either side of the
//! relation they express; the deletes below remove dependents in the
//! same call.

use crate::error::CatalogError;
use crate::resolve::resolve;
use larder_model::{
    CreateRecipeRequest, EntityId, EntityKind, Ingredient, MeasurementUnit, Recipe,
};
use larder_store::CatalogStore;
use tracing::debug;

/// Amount and unit stamped on every link created by `create_recipe`; the
/// request shape carries no per-ingredient quantity.
const DEFAULT_AMOUNT: f64 = 100.0;
const DEFAULT_UNIT: MeasurementUnit = MeasurementUnit::Grams;

/// Create a recipe and link its ingredients, reusing any ingredient whose
/// name matches a requested one exactly and creating the rest.
///
/// Fails with a conflict when a recipe with the exact same name exists.
/// A name repeated within the request still yields a single link: the
/// join row's identity is `(recipe_id, ingredient_id)`.
pub fn create_recipe(
    store: &mut CatalogStore,
    request: &CreateRecipeRequest,
) -> Result<Recipe, CatalogError> {
    if store
        .recipes
        .values()
        .any(|recipe| recipe.name == request.recipe.name)
    {
        return Err(CatalogError::RecipeNameTaken {
            name: request.recipe.name.clone(),
        });
    }

    let recipe_id = store.add_recipe(
        &request.recipe.name,
        &request.recipe.description,
        request.recipe.servings,
    );

    for ingredient_name in &request.ingredients {
        let existing = store
            .ingredients
            .values()
            .find(|ingredient| ingredient.name == *ingredient_name)
            .map(|ingredient| ingredient.id);
        let ingredient_id = match existing {
            Some(id) => id,
            None => store.add_ingredient(ingredient_name),
        };

        let already_linked = store
            .recipe_ingredients
            .iter()
            .any(|row| row.recipe_id == recipe_id && row.ingredient_id == ingredient_id);
        if !already_linked {
            store.link_ingredient(recipe_id, ingredient_id, DEFAULT_AMOUNT, DEFAULT_UNIT);
        }
    }

    debug!(id = recipe_id, name = %request.recipe.name, "created recipe");
    Ok(store.recipes[&recipe_id].clone())
}

/// Delete the ingredient identified by `id` or `name`.
///
/// The cascade depends on how many recipes use it:
/// - none: the ingredient alone is removed;
/// - exactly one: that recipe cannot survive losing it, so the recipe and
///   all of its join rows go too;
/// - two or more: the deletion is refused with a conflict and nothing
///   changes.
pub fn delete_ingredient(
    store: &mut CatalogStore,
    id: Option<EntityId>,
    name: Option<&str>,
) -> Result<Ingredient, CatalogError> {
    if id.is_none() && name.map_or(true, str::is_empty) {
        return Err(CatalogError::MissingArgument {
            kind: EntityKind::Ingredient,
        });
    }

    let ingredient = resolve(EntityKind::Ingredient, store.ingredients.values(), id, name)?.clone();

    let using: Vec<EntityId> = store
        .recipe_ingredients
        .iter()
        .filter(|row| row.ingredient_id == ingredient.id)
        .map(|row| row.recipe_id)
        .collect();

    match using.as_slice() {
        [] => {}
        [recipe_id] => {
            let recipe_id = *recipe_id;
            store.recipe_ingredients.retain(|row| row.recipe_id != recipe_id);
            store.recipes.shift_remove(&recipe_id);
            debug!(recipe_id, "cascade-deleted the sole recipe using the ingredient");
        }
        _ => {
            return Err(CatalogError::IngredientInUse {
                name: ingredient.name.clone(),
                usages: using.len(),
            });
        }
    }

    store.ingredients.shift_remove(&ingredient.id);
    debug!(id = ingredient.id, name = %ingredient.name, "deleted ingredient");
    Ok(ingredient)
}

/// Delete the recipe identified by `id` or `name`, along with all of its
/// join rows. Ingredients are never touched, even ones left unused.
pub fn delete_recipe(
    store: &mut CatalogStore,
    id: Option<EntityId>,
    name: Option<&str>,
) -> Result<Recipe, CatalogError> {
    if id.is_none() && name.map_or(true, str::is_empty) {
        return Err(CatalogError::MissingArgument {
            kind: EntityKind::Recipe,
        });
    }

    let recipe = resolve(EntityKind::Recipe, store.recipes.values(), id, name)?.clone();

    store.recipe_ingredients.retain(|row| row.recipe_id != recipe.id);
    store.recipes.shift_remove(&recipe.id);

    debug!(id = recipe.id, name = %recipe.name, "deleted recipe");
    Ok(recipe)
}
