//! larder: an in-memory recipe catalog
//!
//! The catalog keeps recipes, ingredients and dietary restrictions in a
//! single-process store and exposes lookup-by-id-or-partial-name queries
//! plus a small set of mutations that preserve referential integrity
//! across the relation tables. Transport, result serialization and
//! persistence are the caller's business.
//!
//! This crate re-exports the workspace members:
//! - [`larder_model`]: entity and request types
//! - [`larder_store`]: the entity store and seed fixture
//! - [`larder_runtime`]: the query and mutation operations

pub use larder_model::{
    CreateRecipeRequest, DietaryRestriction, EntityId, EntityKind, Ingredient,
    IngredientRestriction, MeasurementUnit, Named, NewRecipe, Recipe, RecipeIngredient,
};
pub use larder_runtime::{
    create_recipe, delete_ingredient, delete_recipe, recipes_by_diet, recipes_by_ingredient,
    recipes_by_name_or_id, CatalogError, ErrorKind,
};
pub use larder_store::{seed, CatalogStore};
