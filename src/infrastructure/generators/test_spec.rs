//! Test spec generator
//!
//! Emits `base/<i>.controller.base.spec.ts`: an end-to-end test of the
//! controller routes with the service replaced by a mock.

use std::path::{Path, PathBuf};

use super::fields::sample_value;
use super::imports::relative_import;
use crate::domain::entities::{Artifact, Entity};
use crate::domain::ports::{GeneratorError, TestSpecGenerator};
use crate::domain::services::resource_dir;
use crate::domain::value_objects::DerivedNames;

pub struct NestTestSpecGenerator {
    base_dir: PathBuf,
}

impl NestTestSpecGenerator {
    pub fn new(base_dir: impl Into<PathBuf>) -> Self {
        Self {
            base_dir: base_dir.into(),
        }
    }
}

impl TestSpecGenerator for NestTestSpecGenerator {
    fn generate(
        &self,
        names: &DerivedNames,
        entity: &Entity,
        service_path: &Path,
        controller_path: &Path,
    ) -> Result<Artifact, GeneratorError> {
        let t = names.type_name();
        let i = names.instance_name();
        let r = names.resource_path();
        let path = resource_dir(&self.base_dir, names)
            .join("base")
            .join(format!("{i}.controller.base.spec.ts"));

        let fixture: Vec<String> = entity
            .fields()
            .iter()
            .filter_map(|f| sample_value(f).map(|v| format!("  {}: {v},", f.name())))
            .collect();

        let mut out = String::new();
        out.push_str("import { Test } from \"@nestjs/testing\";\n");
        out.push_str("import { INestApplication, HttpStatus } from \"@nestjs/common\";\n");
        out.push_str("import request from \"supertest\";\n");
        out.push_str(&format!(
            "import {{ {t}Controller }} from \"{}\";\n",
            relative_import(&path, controller_path)
        ));
        out.push_str(&format!(
            "import {{ {t}Service }} from \"{}\";\n\n",
            relative_import(&path, service_path)
        ));

        out.push_str("const EXISTING_ID = \"existing\";\n");
        out.push_str("const NON_EXISTING_ID = \"nonExisting\";\n");
        out.push_str("const FIXTURE = {\n");
        for line in &fixture {
            out.push_str(line);
            out.push('\n');
        }
        out.push_str("};\n\n");

        out.push_str("const service = {\n");
        out.push_str("  create() {\n    return FIXTURE;\n  },\n");
        out.push_str("  findMany: () => [FIXTURE],\n");
        out.push_str("  findOne: ({ where }: { where: { id: string } }) => {\n");
        out.push_str("    return where.id === EXISTING_ID ? FIXTURE : null;\n  },\n");
        out.push_str("};\n\n");

        out.push_str(&format!("describe(\"{t}\", () => {{\n"));
        out.push_str("  let app: INestApplication;\n\n");
        out.push_str("  beforeAll(async () => {\n");
        out.push_str("    const moduleRef = await Test.createTestingModule({\n");
        out.push_str(&format!(
            "      providers: [{{ provide: {t}Service, useValue: service }}],\n"
        ));
        out.push_str(&format!("      controllers: [{t}Controller],\n"));
        out.push_str("    }).compile();\n\n");
        out.push_str("    app = moduleRef.createNestApplication();\n");
        out.push_str("    await app.init();\n  });\n\n");

        out.push_str(&format!("  test(\"POST /{r}\", async () => {{\n"));
        out.push_str(&format!(
            "    await request(app.getHttpServer())\n      .post(\"/{r}\")\n      .send(FIXTURE)\n      .expect(HttpStatus.CREATED);\n  }});\n\n"
        ));
        out.push_str(&format!("  test(\"GET /{r}\", async () => {{\n"));
        out.push_str(&format!(
            "    await request(app.getHttpServer())\n      .get(\"/{r}\")\n      .expect(HttpStatus.OK);\n  }});\n\n"
        ));
        out.push_str(&format!("  test(\"GET /{r}/:id non existing\", async () => {{\n"));
        out.push_str(&format!(
            "    await request(app.getHttpServer())\n      .get(`/{r}/${{NON_EXISTING_ID}}`)\n      .expect(HttpStatus.NOT_FOUND);\n  }});\n\n"
        ));
        out.push_str(&format!("  test(\"GET /{r}/:id existing\", async () => {{\n"));
        out.push_str(&format!(
            "    await request(app.getHttpServer())\n      .get(`/{r}/${{EXISTING_ID}}`)\n      .expect(HttpStatus.OK);\n  }});\n\n"
        ));
        out.push_str("  afterAll(async () => {\n    await app.close();\n  });\n});\n");

        Ok(Artifact::new(path, out))
    }
}
