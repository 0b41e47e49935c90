//! Domain Value Objects
//!
//! Immutable value types that represent domain concepts.

mod derived_names;
mod name_rules;
mod stage;

pub use derived_names::DerivedNames;
pub use name_rules::{CollisionKind, InvalidNameReason};
pub use stage::Stage;
