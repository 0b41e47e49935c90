//! Name derivation - entity name → type, instance and resource identifiers

use std::path::{Path, PathBuf};

use heck::{ToKebabCase, ToLowerCamelCase};

use super::inflection::pluralize;
use crate::domain::value_objects::DerivedNames;

/// Derive the canonical names for an entity type name
///
/// Pure and deterministic:
/// - `type_name` is the raw name, verbatim
/// - `instance_name` is its lower-camel form
/// - `resource_path` is the kebab-case form of the pluralized instance name
pub fn derive_names(entity_type: &str) -> DerivedNames {
    let instance_name = entity_type.to_lower_camel_case();
    let resource_path = pluralize(&instance_name).to_kebab_case();
    DerivedNames::new(entity_type, instance_name, resource_path)
}

/// Directory holding every generated file of one resource
pub fn resource_dir(base_dir: &Path, names: &DerivedNames) -> PathBuf {
    base_dir.join(names.instance_name())
}
