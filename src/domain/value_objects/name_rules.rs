//! Reasons an entity name is rejected, alone or alongside its batch

/// Why an entity name cannot be safely derived into identifiers and paths
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum InvalidNameReason {
    /// Name is empty or only whitespace
    Empty,
    /// First character is not an ASCII letter
    LeadingNonLetter(char),
    /// Name contains a character that is not an ASCII letter or digit
    IllegalCharacter(char),
    /// Derived instance name is a reserved word
    Reserved(String),
}

impl std::fmt::Display for InvalidNameReason {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            InvalidNameReason::Empty => write!(f, "name is empty"),
            InvalidNameReason::LeadingNonLetter(c) => {
                write!(f, "name must start with a letter, found {:?}", c)
            }
            InvalidNameReason::IllegalCharacter(c) => {
                write!(f, "character {:?} is not allowed (letters and digits only)", c)
            }
            InvalidNameReason::Reserved(word) => write!(f, "'{}' is a reserved name", word),
        }
    }
}

/// Which derived identifier two entities share
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CollisionKind {
    /// Same lower-camel instance name
    InstanceName,
    /// Same kebab-case plural path segment
    ResourcePath,
}

impl std::fmt::Display for CollisionKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            CollisionKind::InstanceName => write!(f, "instance name"),
            CollisionKind::ResourcePath => write!(f, "resource path"),
        }
    }
}
