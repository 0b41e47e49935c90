//! Entity schema repository port
//!
//! Abstracts where entity descriptions come from.

use std::path::Path;

use crate::domain::entities::Entity;
use crate::error::CrudforgeResult;

/// Loads entity descriptions from some source
pub trait EntitySchemaRepository {
    /// Load all entities declared at `path`, in declaration order
    fn load(&self, path: &Path) -> CrudforgeResult<Vec<Entity>>;
}
