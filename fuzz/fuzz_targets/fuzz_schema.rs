#![no_main]

use libfuzzer_sys::fuzz_target;

use crudforge::infrastructure::repositories::parse_schema;
use crudforge::infrastructure::SchemaFormat;

fuzz_target!(|data: &[u8]| {
    if let Ok(content) = std::str::from_utf8(data) {
        for format in [SchemaFormat::Json, SchemaFormat::Yaml, SchemaFormat::Toml] {
            let _ = parse_schema(content, format);
        }
    }
});
