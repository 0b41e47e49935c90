//! Resolver generator - GraphQL queries and mutations for one entity

use std::path::{Path, PathBuf};

use super::fields::{own_dtos, reject_unsupported, relations};
use super::imports::Imports;
use super::service::capitalize;
use crate::domain::entities::{Artifact, DtoRegistry, Entity};
use crate::domain::ports::{GeneratorError, ResolverGenerator};
use crate::domain::services::{pluralize, resource_dir};
use crate::domain::value_objects::DerivedNames;

/// NestJS GraphQL resolver
pub struct NestResolverGenerator {
    base_dir: PathBuf,
}

impl NestResolverGenerator {
    pub fn new(base_dir: impl Into<PathBuf>) -> Self {
        Self {
            base_dir: base_dir.into(),
        }
    }
}

impl ResolverGenerator for NestResolverGenerator {
    fn generate(
        &self,
        names: &DerivedNames,
        service_path: &Path,
        entity: &Entity,
        dtos: &DtoRegistry,
    ) -> Result<Artifact, GeneratorError> {
        reject_unsupported(entity)?;
        let own = own_dtos(dtos, names)?;
        let relations = relations(entity, dtos)?;

        let t = names.type_name();
        let i = names.instance_name();
        let many = list_query_name(i);
        let path = resource_dir(&self.base_dir, names).join(format!("{i}.resolver.ts"));

        let mut imports = Imports::new(&path);
        imports.add(&format!("{t}Service"), service_path);
        imports.add(own.entity.name(), own.entity.path());
        for dto in own.args() {
            imports.add(dto.name(), dto.path());
        }
        for relation in &relations {
            let related = &relation.related.entity;
            imports.add(related.name(), related.path());
            if relation.allow_multiple {
                let args = &relation.related.find_many_args;
                imports.add(args.name(), args.path());
            }
        }

        let mut out = String::new();
        out.push_str("import * as graphql from \"@nestjs/graphql\";\n");
        out.push_str("import * as apollo from \"apollo-server-express\";\n");
        out.push_str(&imports.into_string());

        let entity_dto = own.entity.name();
        out.push_str(&format!("\n@graphql.Resolver(() => {entity_dto})\n"));
        out.push_str(&format!("export class {t}Resolver {{\n"));
        out.push_str(&format!(
            "  constructor(protected readonly service: {t}Service) {{}}\n\n"
        ));

        out.push_str(&format!("  @graphql.Query(() => [{entity_dto}])\n"));
        out.push_str(&format!(
            "  async {many}(@graphql.Args() args: {}): Promise<{entity_dto}[]> {{\n    return this.service.findMany(args);\n  }}\n\n",
            own.find_many_args.name()
        ));

        out.push_str(&format!("  @graphql.Query(() => {entity_dto}, {{ nullable: true }})\n"));
        out.push_str(&format!(
            "  async {i}(@graphql.Args() args: {}): Promise<{entity_dto} | null> {{\n    const result = await this.service.findOne(args);\n    if (result === null) {{\n      return null;\n    }}\n    return result;\n  }}\n\n",
            own.find_one_args.name()
        ));

        let mutations = [
            ("create", own.create_args.name()),
            ("update", own.update_args.name()),
            ("delete", own.delete_args.name()),
        ];
        for (op, args) in mutations {
            out.push_str(&format!("  @graphql.Mutation(() => {entity_dto})\n"));
            out.push_str(&format!(
                "  async {op}{t}(@graphql.Args() args: {args}): Promise<{entity_dto}> {{\n    return await this.service.{op}(args);\n  }}\n\n"
            ));
        }

        for relation in &relations {
            let field = relation.field.name();
            let method = capitalize(field);
            let related = relation.related.entity.name();
            if relation.allow_multiple {
                let args = relation.related.find_many_args.name();
                out.push_str(&format!("  @graphql.ResolveField(() => [{related}])\n"));
                out.push_str(&format!(
                    "  async {field}(\n    @graphql.Parent() parent: {entity_dto},\n    @graphql.Args() args: {args}\n  ): Promise<{related}[]> {{\n    return this.service.find{method}(parent.id, args);\n  }}\n\n"
                ));
            } else {
                out.push_str(&format!(
                    "  @graphql.ResolveField(() => {related}, {{ nullable: true }})\n"
                ));
                out.push_str(&format!(
                    "  async {field}(@graphql.Parent() parent: {entity_dto}): Promise<{related} | null> {{\n    return this.service.get{method}(parent.id);\n  }}\n\n"
                ));
            }
        }

        out.truncate(out.trim_end().len());
        out.push_str("\n}\n");
        Ok(Artifact::new(path, out))
    }
}

/// Name of the list query; differs from the single-item query `{i}` even
/// when the instance name is uncountable or already plural
fn list_query_name(instance_name: &str) -> String {
    let plural = pluralize(instance_name);
    if plural == instance_name {
        format!("{instance_name}List")
    } else {
        plural
    }
}
