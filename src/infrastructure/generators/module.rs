//! Module generator - wires service, controller and resolver together

use std::path::{Path, PathBuf};

use super::imports::relative_import;
use crate::domain::entities::Artifact;
use crate::domain::ports::{GeneratorError, ModuleGenerator};
use crate::domain::services::resource_dir;
use crate::domain::value_objects::DerivedNames;

pub struct NestModuleGenerator {
    base_dir: PathBuf,
}

impl NestModuleGenerator {
    pub fn new(base_dir: impl Into<PathBuf>) -> Self {
        Self {
            base_dir: base_dir.into(),
        }
    }
}

impl ModuleGenerator for NestModuleGenerator {
    fn generate(
        &self,
        names: &DerivedNames,
        service_path: &Path,
        controller_path: &Path,
        resolver_path: &Path,
    ) -> Result<Artifact, GeneratorError> {
        let t = names.type_name();
        let i = names.instance_name();
        let path = resource_dir(&self.base_dir, names).join(format!("{i}.module.ts"));

        let mut out = String::new();
        out.push_str("import { Module } from \"@nestjs/common\";\n");
        for (class, target) in [
            ("Service", service_path),
            ("Controller", controller_path),
            ("Resolver", resolver_path),
        ] {
            out.push_str(&format!(
                "import {{ {t}{class} }} from \"{}\";\n",
                relative_import(&path, target)
            ));
        }
        out.push_str("\n@Module({\n");
        out.push_str(&format!("  controllers: [{t}Controller],\n"));
        out.push_str(&format!("  providers: [{t}Service, {t}Resolver],\n"));
        out.push_str(&format!("  exports: [{t}Service],\n"));
        out.push_str("})\n");
        out.push_str(&format!("export class {t}Module {{}}\n"));

        Ok(Artifact::new(path, out))
    }
}
