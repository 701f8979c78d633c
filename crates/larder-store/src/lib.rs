//! larder-store: Catalog Entity Store
//!
//! Owns the five mutable collections and the identifier counter they
//! share. The store is a passive container: it validates nothing, and
//! every insert or remove mutates the collections in place. Integrity
//! rules (cascades, dedup, name uniqueness) live in `larder-runtime`,
//! the store's only consumer.
//!
//! Entity maps are `IndexMap` keyed by id, so name scans see insertion
//! order and "first match wins" lookups stay deterministic.

pub mod seed;

use indexmap::IndexMap;
use larder_model::{
    DietaryRestriction, EntityId, Ingredient, IngredientRestriction, MeasurementUnit, Recipe,
    RecipeIngredient,
};

/// The in-memory catalog. One instance per process in production, one
/// per test everywhere else; instances never share the id counter.
#[derive(Debug, Clone, Default)]
pub struct CatalogStore {
    pub recipes: IndexMap<EntityId, Recipe>,
    pub ingredients: IndexMap<EntityId, Ingredient>,
    pub dietary_restrictions: IndexMap<EntityId, DietaryRestriction>,
    pub recipe_ingredients: Vec<RecipeIngredient>,
    pub ingredient_restrictions: Vec<IngredientRestriction>,

    next_id: EntityId,
}

impl CatalogStore {
    /// Create an empty store.
    pub fn new() -> Self {
        Self::default()
    }

    /// Hand out a previously unused identifier. One counter serves every
    /// entity kind: ids are unique across kinds and callers must not
    /// expect per-kind sequential numbering.
    pub fn generate_id(&mut self) -> EntityId {
        self.next_id += 1;
        self.next_id
    }

    /// Insert a recipe under a fresh id and return that id.
    pub fn add_recipe(&mut self, name: &str, description: &str, servings: u32) -> EntityId {
        let id = self.generate_id();
        self.recipes.insert(
            id,
            Recipe {
                id,
                name: name.to_string(),
                description: description.to_string(),
                servings,
            },
        );
        id
    }

    /// Insert an ingredient under a fresh id and return that id.
    pub fn add_ingredient(&mut self, name: &str) -> EntityId {
        let id = self.generate_id();
        self.ingredients.insert(
            id,
            Ingredient {
                id,
                name: name.to_string(),
            },
        );
        id
    }

    /// Insert a dietary restriction under a fresh id and return that id.
    pub fn add_dietary_restriction(&mut self, name: &str) -> EntityId {
        let id = self.generate_id();
        self.dietary_restrictions.insert(
            id,
            DietaryRestriction {
                id,
                name: name.to_string(),
            },
        );
        id
    }

    /// Append a recipe/ingredient join row.
    pub fn link_ingredient(
        &mut self,
        recipe_id: EntityId,
        ingredient_id: EntityId,
        amount: f64,
        unit: MeasurementUnit,
    ) {
        self.recipe_ingredients.push(RecipeIngredient {
            recipe_id,
            ingredient_id,
            amount,
            unit,
        });
    }

    /// Append an ingredient/diet compatibility row.
    pub fn link_restriction(&mut self, ingredient_id: EntityId, dietary_restriction_id: EntityId) {
        self.ingredient_restrictions.push(IngredientRestriction {
            ingredient_id,
            dietary_restriction_id,
        });
    }
}
