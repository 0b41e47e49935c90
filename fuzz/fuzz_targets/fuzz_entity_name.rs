#![no_main]

use libfuzzer_sys::fuzz_target;

fuzz_target!(|data: &[u8]| {
    if let Ok(name) = std::str::from_utf8(data) {
        // Validation and derivation should never panic
        let _ = crudforge::domain::services::validate_entity_name(name);
        let names = crudforge::derive_names(name);
        let _ = crudforge::domain::services::pluralize(names.instance_name());
    }
});
