//! Default stage generators
//!
//! Template implementations of the stage generator ports, emitting
//! NestJS-style TypeScript. Every file of a resource lives under
//! `<base_dir>/<instanceName>/`; cross-file imports are computed from the
//! paths the pipeline threads through, never re-derived.

mod controller;
mod fields;
mod imports;
mod module;
mod resolver;
mod service;
mod test_spec;

use std::path::PathBuf;

use crate::domain::ports::GeneratorSet;

pub use controller::NestControllerGenerator;
pub use imports::relative_import;
pub use module::NestModuleGenerator;
pub use resolver::NestResolverGenerator;
pub use service::NestServiceGenerator;
pub use test_spec::NestTestSpecGenerator;

/// The built-in generator set rooted at `base_dir`
pub fn default_generators(base_dir: impl Into<PathBuf>) -> GeneratorSet {
    let base_dir = base_dir.into();
    GeneratorSet::new(
        NestServiceGenerator::new(base_dir.clone()),
        NestControllerGenerator::new(base_dir.clone()),
        NestResolverGenerator::new(base_dir.clone()),
        NestModuleGenerator::new(base_dir.clone()),
        NestTestSpecGenerator::new(base_dir),
    )
}
