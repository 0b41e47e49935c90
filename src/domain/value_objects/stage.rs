//! Stage value object - one architectural layer of a generated resource

use serde::{Deserialize, Serialize};

/// A generation stage, in the order the pipeline runs them
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum Stage {
    /// Data access service
    Service,
    /// HTTP controller
    Controller,
    /// GraphQL resolver
    Resolver,
    /// Aggregating module wiring service, controller and resolver
    Module,
    /// Controller test spec
    Test,
}

impl Stage {
    /// All stages in invocation order
    pub const ORDERED: [Stage; 5] = [
        Stage::Service,
        Stage::Controller,
        Stage::Resolver,
        Stage::Module,
        Stage::Test,
    ];

    /// Short identifier used in events and logs
    pub fn as_str(&self) -> &'static str {
        match self {
            Stage::Service => "service",
            Stage::Controller => "controller",
            Stage::Resolver => "resolver",
            Stage::Module => "module",
            Stage::Test => "test",
        }
    }
}

impl std::fmt::Display for Stage {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_str())
    }
}
