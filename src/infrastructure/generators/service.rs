//! Service generator
//!
//! Emits `<i>.service.ts` (primary, the customizable subclass) and
//! `base/<i>.service.base.ts` (the regenerated data access layer).

use std::path::PathBuf;

use super::imports::relative_import;
use crate::domain::entities::{Artifact, DataType, Entity, StageOutput};
use crate::domain::ports::{GeneratorError, ServiceGenerator};
use crate::domain::services::resource_dir;
use crate::domain::value_objects::DerivedNames;

/// NestJS service on top of the Prisma client
pub struct NestServiceGenerator {
    base_dir: PathBuf,
}

impl NestServiceGenerator {
    pub fn new(base_dir: impl Into<PathBuf>) -> Self {
        Self {
            base_dir: base_dir.into(),
        }
    }

    fn base_class(&self, names: &DerivedNames, entity: &Entity) -> String {
        let t = names.type_name();
        let i = names.instance_name();
        let mut out = String::new();

        out.push_str("import { PrismaService } from \"nestjs-prisma\";\n");
        out.push_str(&format!("import {{ Prisma, {t} }} from \"@prisma/client\";\n\n"));
        out.push_str(&format!("export class {t}ServiceBase {{\n"));
        out.push_str("  constructor(protected readonly prisma: PrismaService) {}\n\n");

        out.push_str(&format!(
            "  async count<T extends Prisma.{t}CountArgs>(\n    args: Prisma.SelectSubset<T, Prisma.{t}CountArgs>\n  ): Promise<number> {{\n    return this.prisma.{i}.count(args);\n  }}\n\n"
        ));
        out.push_str(&format!(
            "  async findMany<T extends Prisma.{t}FindManyArgs>(\n    args: Prisma.SelectSubset<T, Prisma.{t}FindManyArgs>\n  ): Promise<{t}[]> {{\n    return this.prisma.{i}.findMany(args);\n  }}\n\n"
        ));
        out.push_str(&format!(
            "  async findOne<T extends Prisma.{t}FindUniqueArgs>(\n    args: Prisma.SelectSubset<T, Prisma.{t}FindUniqueArgs>\n  ): Promise<{t} | null> {{\n    return this.prisma.{i}.findUnique(args);\n  }}\n\n"
        ));
        for op in ["create", "update", "delete"] {
            let op_type = capitalize(op);
            out.push_str(&format!(
                "  async {op}<T extends Prisma.{t}{op_type}Args>(\n    args: Prisma.SelectSubset<T, Prisma.{t}{op_type}Args>\n  ): Promise<{t}> {{\n    return this.prisma.{i}.{op}<T>(args);\n  }}\n\n"
            ));
        }

        for field in entity.lookup_fields() {
            let DataType::Lookup {
                related_entity,
                allow_multiple,
            } = field.data_type()
            else {
                continue;
            };
            let name = field.name();
            let method = capitalize(name);
            if *allow_multiple {
                out.push_str(&format!(
                    "  async find{method}(\n    parentId: string,\n    args: Prisma.{related_entity}FindManyArgs\n  ): Promise<Prisma.{related_entity}[]> {{\n    return this.prisma.{i}\n      .findUniqueOrThrow({{ where: {{ id: parentId }} }})\n      .{name}(args);\n  }}\n\n"
                ));
            } else {
                out.push_str(&format!(
                    "  async get{method}(parentId: string): Promise<Prisma.{related_entity} | null> {{\n    return this.prisma.{i}\n      .findUnique({{ where: {{ id: parentId }} }})\n      .{name}();\n  }}\n\n"
                ));
            }
        }

        // drop the blank line after the last method
        out.truncate(out.trim_end().len());
        out.push_str("\n}\n");
        out
    }
}

impl ServiceGenerator for NestServiceGenerator {
    fn generate(
        &self,
        names: &DerivedNames,
        entity: &Entity,
    ) -> Result<StageOutput, GeneratorError> {
        let t = names.type_name();
        let i = names.instance_name();
        let dir = resource_dir(&self.base_dir, names);
        let path = dir.join(format!("{i}.service.ts"));
        let base_path = dir.join("base").join(format!("{i}.service.base.ts"));

        let mut content = String::new();
        content.push_str("import { Injectable } from \"@nestjs/common\";\n");
        content.push_str("import { PrismaService } from \"nestjs-prisma\";\n");
        content.push_str(&format!(
            "import {{ {t}ServiceBase }} from \"{}\";\n\n",
            relative_import(&path, &base_path)
        ));
        content.push_str("@Injectable()\n");
        content.push_str(&format!("export class {t}Service extends {t}ServiceBase {{\n"));
        content.push_str("  constructor(protected readonly prisma: PrismaService) {\n");
        content.push_str("    super(prisma);\n");
        content.push_str("  }\n}\n");

        Ok(StageOutput::new(Artifact::new(path, content))
            .with_secondary(Artifact::new(base_path, self.base_class(names, entity))))
    }
}

pub(super) fn capitalize(s: &str) -> String {
    let mut chars = s.chars();
    match chars.next() {
        Some(first) => first.to_uppercase().chain(chars).collect(),
        None => String::new(),
    }
}
