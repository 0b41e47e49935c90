//! Property tests for name validation and derivation.

use proptest::prelude::*;

use crudforge::derive_names;
use crudforge::domain::services::{pluralize, validate_entity_name};

fn valid_name() -> impl Strategy<Value = String> {
    proptest::string::string_regex("[A-Z][a-z]{2,8}([A-Z][a-z]{2,8}){0,2}").unwrap()
}

proptest! {
    #![proptest_config(ProptestConfig {
        cases: 128,
        .. ProptestConfig::default()
    })]

    /// PROPERTY: Validation and derivation never panic on arbitrary input.
    #[test]
    fn property_names_never_panic(s in "(?s).{0,64}") {
        let _ = validate_entity_name(&s);
        let _ = derive_names(&s);
        let _ = pluralize(&s);
    }

    /// PROPERTY: Derivation is a pure function of the name.
    #[test]
    fn property_derivation_is_deterministic(name in valid_name()) {
        prop_assert_eq!(derive_names(&name), derive_names(&name));
    }

    /// PROPERTY: Derived identifiers of a valid name are non-empty and shaped.
    #[test]
    fn property_derived_names_are_well_formed(name in valid_name()) {
        let names = derive_names(&name);

        prop_assert_eq!(names.type_name(), name.as_str());
        prop_assert!(names.instance_name().chars().next().is_some_and(|c| c.is_ascii_lowercase()));
        prop_assert!(names.instance_name().chars().all(|c| c.is_ascii_alphanumeric()));
        prop_assert!(!names.resource_path().is_empty());
        prop_assert!(names.resource_path().chars().all(|c| c.is_ascii_lowercase() || c.is_ascii_digit() || c == '-'));
        prop_assert!(!names.resource_path().starts_with('-'));
        prop_assert!(!names.resource_path().ends_with('-'));
    }

    /// PROPERTY: Only the last word is inflected, so the resource path keeps
    /// every leading word of the name.
    #[test]
    fn property_resource_path_keeps_leading_words(
        head in "[A-Z][a-z]{2,8}",
        tail in "[A-Z][a-z]{2,8}",
    ) {
        let name = format!("{head}{tail}");
        let names = derive_names(&name);
        let prefix = format!("{}-", head.to_lowercase());
        prop_assert!(names.resource_path().starts_with(&prefix));
    }

    /// PROPERTY: Generated-looking names pass validation.
    #[test]
    fn property_camel_case_words_are_accepted(name in valid_name()) {
        prop_assume!(!is_reserved(&name));
        prop_assert!(validate_entity_name(&name).is_ok());
    }

    /// PROPERTY: Names with a separator are always rejected.
    #[test]
    fn property_separators_are_rejected(
        a in "[A-Z][a-z]{1,6}",
        sep in "[-_ ./]",
        b in "[a-z]{1,6}",
    ) {
        let name = format!("{a}{sep}{b}");
        prop_assert!(validate_entity_name(&name).is_err());
    }
}

fn is_reserved(name: &str) -> bool {
    crudforge::domain::services::RESERVED_NAMES
        .iter()
        .any(|r| r.eq_ignore_ascii_case(name))
}
