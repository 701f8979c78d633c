//! larder-runtime: Catalog Query and Mutation Operations
//!
//! The only consumer of `CatalogStore`. Operations are stateless free
//! functions: each call resolves its id-or-name arguments against the
//! store and reads or rewrites the collections, caching nothing between
//! calls.
//!
//! The rules that make this layer non-trivial:
//! - resolution prefers an exact id match and falls back to the first
//!   case-insensitive substring match in insertion order;
//! - deleting an ingredient cascades onto its sole using recipe, and is
//!   refused outright when two or more recipes share it;
//! - recipe creation deduplicates ingredients by exact name and rejects
//!   duplicate recipe names.
//!
//! Every mutation validates before it writes; a returned error means the
//! store is exactly as the caller left it.

mod error;
mod mutation;
mod query;
mod resolve;

pub use error::{CatalogError, ErrorKind};
pub use mutation::{create_recipe, delete_ingredient, delete_recipe};
pub use query::{recipes_by_diet, recipes_by_ingredient, recipes_by_name_or_id};
