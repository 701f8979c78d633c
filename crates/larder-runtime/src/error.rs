//! Catalog error type
//!
//! Two kinds reach the caller: invalid argument (nothing usable to look
//! up, or the lookup found nothing) and conflict (the store refuses the
//! write). The shared-ingredient rejection is a conflict here, not the
//! unclassified failure the original service leaked.

use larder_model::{EntityId, EntityKind};
use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Broad classification the transport layer maps onto its own status
/// codes. No retryable kinds exist: every failure is immediate and final.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ErrorKind {
    InvalidArgument,
    Conflict,
}

/// Failures produced by the query and mutation operations.
#[derive(Debug, Clone, PartialEq, Error, Serialize, Deserialize)]
pub enum CatalogError {
    /// Neither an id nor a non-empty name was supplied.
    #[error("no id or name supplied to identify a {kind}")]
    MissingArgument { kind: EntityKind },

    /// Resolution ran and matched nothing.
    #[error("no {kind} matches the supplied id or name")]
    NotFound {
        kind: EntityKind,
        id: Option<EntityId>,
        name: Option<String>,
    },

    /// Recipe names are unique at creation time.
    #[error("a recipe named \"{name}\" already exists")]
    RecipeNameTaken { name: String },

    /// An ingredient shared by several recipes cannot be deleted without
    /// silently detaching it from all but one of them.
    #[error("ingredient \"{name}\" is used by {usages} recipes and cannot be deleted")]
    IngredientInUse { name: String, usages: usize },
}

impl CatalogError {
    /// The classification surfaced alongside the message.
    pub fn kind(&self) -> ErrorKind {
        match self {
            Self::MissingArgument { .. } | Self::NotFound { .. } => ErrorKind::InvalidArgument,
            Self::RecipeNameTaken { .. } | Self::IngredientInUse { .. } => ErrorKind::Conflict,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_kind_classification() {
        let missing = CatalogError::MissingArgument {
            kind: EntityKind::Ingredient,
        };
        let not_found = CatalogError::NotFound {
            kind: EntityKind::Recipe,
            id: Some(99),
            name: None,
        };
        let taken = CatalogError::RecipeNameTaken {
            name: "Spaghetti Carbonara".into(),
        };
        let shared = CatalogError::IngredientInUse {
            name: "Salmon".into(),
            usages: 2,
        };

        assert_eq!(missing.kind(), ErrorKind::InvalidArgument);
        assert_eq!(not_found.kind(), ErrorKind::InvalidArgument);
        assert_eq!(taken.kind(), ErrorKind::Conflict);
        assert_eq!(shared.kind(), ErrorKind::Conflict);
    }

    #[test]
    fn test_messages_name_the_entity_kind() {
        let err = CatalogError::NotFound {
            kind: EntityKind::DietaryRestriction,
            id: None,
            name: Some("qwe123".into()),
        };
        assert_eq!(err.to_string(), "no dietary restriction matches the supplied id or name");
    }
}
