#![no_main]
use libfuzzer_sys::fuzz_target;
use module_options::module::{OptionsMetadataResolver, Properties, TypeRegistry};

fuzz_target!(|data: &[u8]| {
    // Arbitrary companion bytes must parse or fail with a structured error, never panic
    let Ok(properties) = Properties::parse(data) else {
        return;
    };

    // Every parsed key must be retrievable
    for (key, value) in properties.iter() {
        assert_eq!(properties.get(key), Some(value));
    }

    // Resolution over arbitrary keys only fails on unknown types
    let registry = TypeRegistry::with_scalar_types();
    let _ = OptionsMetadataResolver::from_properties(&properties, &[], &registry);
});
