//! Domain Services
//!
//! Pure business logic with no I/O dependencies:
//! - name derivation and the pluralization rule set behind it
//! - entity name validation and the batch-wide collision check
//! - default DTO registry construction

mod collisions;
mod dtos;
mod inflection;
mod naming;
mod validation;

pub use collisions::check_name_collisions;
pub use dtos::{build_dto_registry, entity_dtos};
pub use inflection::pluralize;
pub use naming::{derive_names, resource_dir};
pub use validation::{validate_entity_name, NameValidator, RESERVED_NAMES};
