//! larder-model: Catalog Entity and Request Types
//!
//! Plain data shared by the store and the runtime: the five catalog
//! entities, the decoded create-recipe payload, and the `Named` seam
//! that id-or-name resolution is generic over. Everything here derives
//! serde so the transport layer can decode requests and encode results
//! without this crate knowing how.

use serde::{Deserialize, Serialize};
use std::fmt;

/// Identifier shared by every entity kind. Ids come from one counter per
/// store, so a recipe and an ingredient never collide even across kinds.
pub type EntityId = u32;

// ============================================================================
// Entities
// ============================================================================

/// A recipe as stored in the catalog.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Recipe {
    pub id: EntityId,
    pub name: String,
    pub description: String,
    pub servings: u32,
}

/// An ingredient. Names are not structurally unique; create-time logic
/// deduplicates by exact name instead.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Ingredient {
    pub id: EntityId,
    pub name: String,
}

/// A dietary restriction. Seed-only: the runtime reads these but never
/// creates or deletes them.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct DietaryRestriction {
    pub id: EntityId,
    pub name: String,
}

/// Join row linking a recipe to one of its ingredients. Composite
/// identity is `(recipe_id, ingredient_id)`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct RecipeIngredient {
    pub recipe_id: EntityId,
    pub ingredient_id: EntityId,
    pub amount: f64,
    pub unit: MeasurementUnit,
}

/// Join row stating that an ingredient is compatible with a diet.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct IngredientRestriction {
    pub ingredient_id: EntityId,
    pub dietary_restriction_id: EntityId,
}

/// Unit of measure on a recipe/ingredient link.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum MeasurementUnit {
    Grams,
    Kilograms,
    Millilitres,
    Litres,
    Teaspoons,
    Tablespoons,
    Cups,
    Pieces,
}

// ============================================================================
// Requests
// ============================================================================

/// Recipe fields supplied by a create request, before an id is assigned.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct NewRecipe {
    pub name: String,
    pub description: String,
    pub servings: u32,
}

/// Decoded create-recipe payload: one recipe plus the names of its
/// ingredients. The request carries no per-ingredient quantity; created
/// links get a fixed default amount.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CreateRecipeRequest {
    pub recipe: NewRecipe,
    pub ingredients: Vec<String>,
}

// ============================================================================
// Lookup seam
// ============================================================================

/// Entity kinds addressable by an `(id, name)` pair, for error reporting.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum EntityKind {
    Recipe,
    Ingredient,
    DietaryRestriction,
}

impl fmt::Display for EntityKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Recipe => write!(f, "recipe"),
            Self::Ingredient => write!(f, "ingredient"),
            Self::DietaryRestriction => write!(f, "dietary restriction"),
        }
    }
}

/// Access to the identifying pair every addressable entity carries.
pub trait Named {
    fn id(&self) -> EntityId;
    fn name(&self) -> &str;
}

impl Named for Recipe {
    fn id(&self) -> EntityId {
        self.id
    }
    fn name(&self) -> &str {
        &self.name
    }
}

impl Named for Ingredient {
    fn id(&self) -> EntityId {
        self.id
    }
    fn name(&self) -> &str {
        &self.name
    }
}

impl Named for DietaryRestriction {
    fn id(&self) -> EntityId {
        self.id
    }
    fn name(&self) -> &str {
        &self.name
    }
}
