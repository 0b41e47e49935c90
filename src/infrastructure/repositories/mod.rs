//! Repository Implementations
//!
//! Concrete implementations of domain repository ports.

mod schema;

pub use schema::{parse_schema, FsSchemaRepository, SchemaFormat};
