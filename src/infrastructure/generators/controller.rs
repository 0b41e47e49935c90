//! Controller generator
//!
//! Emits `<i>.controller.ts` (primary) and `base/<i>.controller.base.ts`
//! holding the REST routes under `/<resourcePath>`.

use std::path::{Path, PathBuf};

use super::fields::{own_dtos, reject_unsupported, relations};
use super::imports::{relative_import, Imports};
use super::service::capitalize;
use crate::domain::entities::{Artifact, DtoRegistry, Entity, StageOutput};
use crate::domain::ports::{ControllerGenerator, GeneratorError};
use crate::domain::services::resource_dir;
use crate::domain::value_objects::DerivedNames;

/// NestJS REST controller
pub struct NestControllerGenerator {
    base_dir: PathBuf,
}

impl NestControllerGenerator {
    pub fn new(base_dir: impl Into<PathBuf>) -> Self {
        Self {
            base_dir: base_dir.into(),
        }
    }
}

impl ControllerGenerator for NestControllerGenerator {
    fn generate(
        &self,
        names: &DerivedNames,
        service_path: &Path,
        entity: &Entity,
        dtos: &DtoRegistry,
    ) -> Result<StageOutput, GeneratorError> {
        reject_unsupported(entity)?;
        let own = own_dtos(dtos, names)?;
        let relations = relations(entity, dtos)?;

        let t = names.type_name();
        let i = names.instance_name();
        let r = names.resource_path();
        let dir = resource_dir(&self.base_dir, names);
        let path = dir.join(format!("{i}.controller.ts"));
        let base_path = dir.join("base").join(format!("{i}.controller.base.ts"));

        let mut content = String::new();
        content.push_str("import * as common from \"@nestjs/common\";\n");
        content.push_str("import * as swagger from \"@nestjs/swagger\";\n");
        content.push_str(&format!(
            "import {{ {t}Service }} from \"{}\";\n",
            relative_import(&path, service_path)
        ));
        content.push_str(&format!(
            "import {{ {t}ControllerBase }} from \"{}\";\n\n",
            relative_import(&path, &base_path)
        ));
        content.push_str(&format!("@swagger.ApiTags(\"{r}\")\n"));
        content.push_str(&format!("@common.Controller(\"{r}\")\n"));
        content.push_str(&format!(
            "export class {t}Controller extends {t}ControllerBase {{\n"
        ));
        content.push_str(&format!(
            "  constructor(protected readonly service: {t}Service) {{\n"
        ));
        content.push_str("    super(service);\n  }\n}\n");

        let mut imports = Imports::new(&base_path);
        imports.add(&format!("{t}Service"), service_path);
        for dto in own.inputs() {
            imports.add(dto.name(), dto.path());
        }
        for relation in relations.iter().filter(|r| r.allow_multiple) {
            for dto in [&relation.related.entity, &relation.related.where_input] {
                imports.add(dto.name(), dto.path());
            }
        }

        let mut base = String::new();
        base.push_str("import * as common from \"@nestjs/common\";\n");
        base.push_str("import * as swagger from \"@nestjs/swagger\";\n");
        base.push_str(&imports.into_string());

        let entity_dto = own.entity.name();
        let create = own.create_input.name();
        let update = own.update_input.name();
        let where_input = own.where_input.name();
        let where_unique = own.where_unique_input.name();

        base.push_str(&format!("\nexport class {t}ControllerBase {{\n"));
        base.push_str(&format!(
            "  constructor(protected readonly service: {t}Service) {{}}\n\n"
        ));

        base.push_str("  @common.Post()\n");
        base.push_str(&format!("  @swagger.ApiCreatedResponse({{ type: {entity_dto} }})\n"));
        base.push_str(&format!(
            "  async create(@common.Body() data: {create}): Promise<{entity_dto}> {{\n    return await this.service.create({{ data }});\n  }}\n\n"
        ));

        base.push_str("  @common.Get()\n");
        base.push_str(&format!("  @swagger.ApiOkResponse({{ type: [{entity_dto}] }})\n"));
        base.push_str(&format!(
            "  async findMany(@common.Query() where: {where_input}): Promise<{entity_dto}[]> {{\n    return this.service.findMany({{ where }});\n  }}\n\n"
        ));

        base.push_str("  @common.Get(\"/:id\")\n");
        base.push_str(&format!("  @swagger.ApiOkResponse({{ type: {entity_dto} }})\n"));
        base.push_str(&format!(
            "  async findOne(@common.Param() params: {where_unique}): Promise<{entity_dto} | null> {{\n    const result = await this.service.findOne({{ where: params }});\n    if (result === null) {{\n      throw new common.NotFoundException(\n        `No resource was found for ${{JSON.stringify(params)}}`\n      );\n    }}\n    return result;\n  }}\n\n"
        ));

        base.push_str("  @common.Patch(\"/:id\")\n");
        base.push_str(&format!("  @swagger.ApiOkResponse({{ type: {entity_dto} }})\n"));
        base.push_str(&format!(
            "  async update(\n    @common.Param() params: {where_unique},\n    @common.Body() data: {update}\n  ): Promise<{entity_dto}> {{\n    return await this.service.update({{ where: params, data }});\n  }}\n\n"
        ));

        base.push_str("  @common.Delete(\"/:id\")\n");
        base.push_str(&format!("  @swagger.ApiOkResponse({{ type: {entity_dto} }})\n"));
        base.push_str(&format!(
            "  async delete(@common.Param() params: {where_unique}): Promise<{entity_dto}> {{\n    return await this.service.delete({{ where: params }});\n  }}\n"
        ));

        for relation in relations.iter().filter(|r| r.allow_multiple) {
            let field = relation.field.name();
            let method = capitalize(field);
            let related = relation.related.entity.name();
            let related_where = relation.related.where_input.name();
            base.push_str(&format!("\n  @common.Get(\"/:id/{field}\")\n"));
            base.push_str(&format!(
                "  async findMany{method}(\n    @common.Param() params: {where_unique},\n    @common.Query() where: {related_where}\n  ): Promise<{related}[]> {{\n    return this.service.find{method}(params.id, {{ where }});\n  }}\n"
            ));
        }
        base.push_str("}\n");

        Ok(StageOutput::new(Artifact::new(path, content))
            .with_secondary(Artifact::new(base_path, base)))
    }
}
