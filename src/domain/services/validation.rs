//! Entity name validation
//!
//! A name is accepted only if every derived identifier is a legal
//! identifier and path segment: ASCII letters and digits, starting with a
//! letter, and not a reserved word once converted to its instance form.

use heck::ToLowerCamelCase;

use crate::domain::value_objects::InvalidNameReason;
use crate::error::{CrudforgeError, CrudforgeResult};

/// Instance names the generated code cannot use
pub const RESERVED_NAMES: &[&str] = &[
    "app",
    "auth",
    "await",
    "break",
    "case",
    "catch",
    "class",
    "const",
    "constructor",
    "continue",
    "debugger",
    "default",
    "delete",
    "do",
    "else",
    "enum",
    "export",
    "extends",
    "false",
    "finally",
    "for",
    "function",
    "health",
    "if",
    "implements",
    "import",
    "in",
    "instanceof",
    "interface",
    "let",
    "module",
    "new",
    "null",
    "package",
    "prisma",
    "private",
    "protected",
    "prototype",
    "public",
    "return",
    "static",
    "super",
    "switch",
    "this",
    "throw",
    "true",
    "try",
    "typeof",
    "var",
    "void",
    "while",
    "with",
    "yield",
];

/// Validates entity names against the built-in and configured reserved words
#[derive(Debug, Clone, Default)]
pub struct NameValidator {
    extra_reserved: Vec<String>,
}

impl NameValidator {
    pub fn new() -> Self {
        Self::default()
    }

    /// Add reserved names on top of [`RESERVED_NAMES`] (case-insensitive)
    pub fn with_reserved<I, S>(mut self, names: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.extra_reserved
            .extend(names.into_iter().map(|n| n.into().to_lowercase()));
        self
    }

    /// Check a name, returning why it is rejected
    pub fn check(&self, name: &str) -> Result<(), InvalidNameReason> {
        if name.trim().is_empty() {
            return Err(InvalidNameReason::Empty);
        }

        let mut chars = name.chars();
        if let Some(first) = chars.next() {
            if !first.is_ascii_alphabetic() {
                return Err(InvalidNameReason::LeadingNonLetter(first));
            }
        }
        if let Some(bad) = chars.find(|c| !c.is_ascii_alphanumeric()) {
            return Err(InvalidNameReason::IllegalCharacter(bad));
        }

        let instance = name.to_lower_camel_case();
        let lowered = instance.to_lowercase();
        if RESERVED_NAMES.contains(&lowered.as_str())
            || self.extra_reserved.iter().any(|r| *r == lowered)
        {
            return Err(InvalidNameReason::Reserved(instance));
        }

        Ok(())
    }

    /// Validate a name, failing with [`CrudforgeError::InvalidName`]
    pub fn validate(&self, name: &str) -> CrudforgeResult<()> {
        self.check(name).map_err(|reason| CrudforgeError::InvalidName {
            name: name.to_string(),
            reason,
        })
    }
}

/// Validate a name against the built-in reserved words only
pub fn validate_entity_name(name: &str) -> CrudforgeResult<()> {
    NameValidator::new().validate(name)
}
