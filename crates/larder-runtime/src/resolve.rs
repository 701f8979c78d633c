//! Shared id-or-name resolution
//!
//! Every operation that accepts an `(id, name)` pair funnels through
//! here. An exact identifier match always wins; otherwise the first
//! entity in store iteration order whose name contains the query
//! case-insensitively is taken. An id that matches nothing still falls
//! through to the name, so a stale id paired with a good name resolves.

use crate::error::CatalogError;
use larder_model::{EntityId, EntityKind, Named};
use tracing::trace;

/// Case-insensitive substring containment, the only name match the
/// catalog supports.
pub(crate) fn name_contains(haystack: &str, needle: &str) -> bool {
    haystack.to_lowercase().contains(&needle.to_lowercase())
}

/// Resolve one entity of `kind` from `entries`, or fail with `NotFound`.
/// Callers that require at least one argument check for that themselves
/// before resolving; an empty name counts as absent here.
pub(crate) fn resolve<'a, T, I>(
    kind: EntityKind,
    entries: I,
    id: Option<EntityId>,
    name: Option<&str>,
) -> Result<&'a T, CatalogError>
where
    T: Named,
    I: Iterator<Item = &'a T> + Clone,
{
    trace!(%kind, ?id, ?name, "resolving");

    let by_id = id.and_then(|id| entries.clone().find(|entry| entry.id() == id));
    let resolved = by_id.or_else(|| {
        name.filter(|needle| !needle.is_empty())
            .and_then(|needle| entries.clone().find(|entry| name_contains(entry.name(), needle)))
    });

    resolved.ok_or_else(|| CatalogError::NotFound {
        kind,
        id,
        name: name.map(str::to_string),
    })
}
