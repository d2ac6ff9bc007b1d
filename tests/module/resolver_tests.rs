//! Options metadata resolution tests
//!
//! Tests for class-backed and pattern-backed resolution and for the boundary
//! between absence and fatal configuration errors.

use std::sync::Arc;

use module_options::module::{
    Location, ModuleDescriptor, ModuleError, ModuleOption, ModuleType, OptionsMetadata,
    OptionsMetadataResolver, TypeDefinition, TypeOrigin, TypeRegistry,
};

use super::test_utils::*;

fn foo_registry() -> Arc<TypeRegistry> {
    let mut registry = TypeRegistry::with_scalar_types();
    registry
        .register_ambient(
            TypeDefinition::new("com.example.Foo")
                .with_field(ModuleOption::new("host", "Host name").with_default_value("localhost"))
                .with_field(ModuleOption::new("port", "Port")),
        )
        .unwrap();
    Arc::new(registry)
}

fn descriptor_with_registry(
    name: &str,
    companion: &str,
    registry: Arc<TypeRegistry>,
    classpath: Vec<Location>,
) -> ModuleDescriptor {
    ModuleDescriptor::builder()
        .name(name)
        .module_type(ModuleType::Source)
        .resource(Arc::new(memory_module(ModuleType::Source, name, Some(companion))))
        .classpath(classpath)
        .type_resolver(registry)
        .build()
        .unwrap()
}

#[test]
fn test_class_backed_ignores_option_keys() {
    let descriptor = descriptor_with_registry(
        "http",
        "options_class=com.example.Foo\noptions.timeout.description=Timeout in ms\n",
        foo_registry(),
        vec![],
    );

    let metadata = descriptor.options_metadata().unwrap().unwrap();
    assert!(metadata.is_class_backed());
    assert_eq!(metadata.options_type().unwrap().name(), "com.example.Foo");
    assert!(metadata.option("timeout").is_none());
    let names: Vec<&str> = metadata.options().iter().map(ModuleOption::name).collect();
    assert_eq!(names, vec!["host", "port"]);
}

#[test]
fn test_pattern_backed_timeout() {
    let descriptor = descriptor_with_companion(
        "http",
        Some("options.timeout.description=Timeout in ms\noptions.timeout.default=30\n"),
    );

    let metadata = descriptor.options_metadata().unwrap().unwrap();
    let OptionsMetadata::Simple(simple) = metadata.as_ref() else {
        panic!("expected pattern-backed metadata");
    };
    assert_eq!(simple.options().len(), 1);
    let option = &simple.options()[0];
    assert_eq!(option.name(), "timeout");
    assert_eq!(option.description(), "Timeout in ms");
    assert_eq!(option.default_value(), Some("30"));
    assert!(option.option_type().is_none());
}

#[test]
fn test_orphaned_siblings_yield_no_option() {
    let descriptor = descriptor_with_companion(
        "http",
        Some("options.foo.default=5\noptions.bar.type=int\nother=1\n"),
    );

    let metadata = descriptor.options_metadata().unwrap().unwrap();
    assert!(!metadata.is_class_backed());
    assert!(metadata.is_empty());
}

#[test]
fn test_no_companion_is_absence() {
    let descriptor = descriptor_with_companion("http", None);
    assert!(descriptor.options_metadata().unwrap().is_none());
}

#[test]
fn test_io_failures_are_absence() {
    let unreadable =
        ModuleDescriptor::new("http", ModuleType::Source, Arc::new(UnreadableResource)).unwrap();
    assert!(unreadable.options_metadata().unwrap().is_none());

    let broken = ModuleDescriptor::new("http", ModuleType::Source, Arc::new(BrokenResource)).unwrap();
    assert!(broken.options_metadata().unwrap().is_none());
}

#[test]
fn test_unresolvable_option_type_is_fatal() {
    let descriptor = descriptor_with_companion(
        "http",
        Some(
            "options.host.description=Host\n\
             options.timeout.description=Timeout in ms\n\
             options.timeout.type=com.example.DoesNotExist\n",
        ),
    );

    match descriptor.options_metadata() {
        Err(ModuleError::TypeResolution {
            option, type_name, ..
        }) => {
            assert_eq!(option, "timeout");
            assert_eq!(type_name, "com.example.DoesNotExist");
        }
        other => panic!("expected type resolution error, got {:?}", other),
    }
}

#[test]
fn test_unresolvable_options_class_does_not_fall_back() {
    let descriptor = descriptor_with_companion(
        "http",
        Some("options_class=com.example.Nope\noptions.host.description=Host\n"),
    );

    match descriptor.options_metadata() {
        Err(ModuleError::ClassResolution { class_name, .. }) => {
            assert_eq!(class_name, "com.example.Nope");
        }
        other => panic!("expected class resolution error, got {:?}", other),
    }
}

#[test]
fn test_module_classpath_shadows_ambient_class() {
    let mut registry = TypeRegistry::with_scalar_types();
    registry
        .register_ambient(TypeDefinition::new("com.example.Foo").with_field(ModuleOption::new("ambient", "")))
        .unwrap();
    registry
        .register_at(
            "modules/source/http/lib/foo.jar",
            TypeDefinition::new("com.example.Foo").with_field(ModuleOption::new("shadow", "")),
        )
        .unwrap();
    let registry = Arc::new(registry);

    let with_classpath = descriptor_with_registry(
        "http",
        "options_class=com.example.Foo\n",
        registry.clone(),
        vec![Location::from("modules/source/http/lib/foo.jar")],
    );
    let metadata = with_classpath.options_metadata().unwrap().unwrap();
    let handle = metadata.options_type().unwrap();
    assert_eq!(
        handle.origin(),
        &TypeOrigin::Classpath(Location::from("modules/source/http/lib/foo.jar"))
    );
    assert!(metadata.option("shadow").is_some());

    let without_classpath =
        descriptor_with_registry("http", "options_class=com.example.Foo\n", registry, vec![]);
    let metadata = without_classpath.options_metadata().unwrap().unwrap();
    assert_eq!(metadata.options_type().unwrap().origin(), &TypeOrigin::Ambient);
    assert!(metadata.option("ambient").is_some());
}

#[test]
fn test_empty_description_still_yields_option() {
    let descriptor = descriptor_with_companion("http", Some("options.quiet.description=\n"));
    let metadata = descriptor.options_metadata().unwrap().unwrap();
    assert_eq!(metadata.option("quiet").unwrap().description(), "");
}

#[test]
fn test_discovery_follows_file_order() {
    let descriptor = descriptor_with_companion(
        "http",
        Some(
            "options.zeta.description=Z\n\
             options.alpha.description=A\n\
             options.mid-dle_1.description=M\n",
        ),
    );
    let metadata = descriptor.options_metadata().unwrap().unwrap();
    let names: Vec<&str> = metadata.options().iter().map(ModuleOption::name).collect();
    assert_eq!(names, vec!["zeta", "alpha", "mid-dle_1"]);
}

#[test]
fn test_option_type_resolved_against_ambient_scope() {
    let descriptor = descriptor_with_companion(
        "http",
        Some("options.port.description=Port\noptions.port.type=int\n"),
    );
    let metadata = descriptor.options_metadata().unwrap().unwrap();
    let port_type = metadata.option("port").unwrap().option_type().unwrap();
    assert_eq!(port_type.name(), "int");
    assert_eq!(port_type.origin(), &TypeOrigin::Ambient);
}

#[test]
fn test_malformed_escape_is_fatal() {
    let descriptor = descriptor_with_companion("http", Some("options.a.description=\\uZZZZ\n"));
    assert!(matches!(
        descriptor.options_metadata(),
        Err(ModuleError::InvalidProperties(_))
    ));
}

#[test]
fn test_resolver_is_stateless() {
    let descriptor = descriptor_with_companion("http", Some("options.a.description=A\n"));
    let first = OptionsMetadataResolver::resolve(&descriptor).unwrap();
    let second = OptionsMetadataResolver::resolve(&descriptor).unwrap();
    assert_eq!(first, second);
}
