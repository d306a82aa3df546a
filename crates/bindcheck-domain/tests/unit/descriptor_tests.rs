//! Dependency Descriptor Tests

use bindcheck_domain::{ContainerKind, DependencyDescriptor, RequiredType, TypeKey, TypeRef};

struct Mailer;

#[test]
fn test_plain_descriptor() {
    let descriptor = DependencyDescriptor::of::<Mailer>();

    assert!(!descriptor.is_optional());
    assert!(descriptor.qualifier().is_none());
    assert_eq!(descriptor.target(), TypeRef::of::<Mailer>());
    assert_eq!(
        descriptor.required(),
        &RequiredType::Concrete(TypeRef::of::<Mailer>())
    );
}

#[test]
fn test_named_and_optional_descriptors() {
    let named = DependencyDescriptor::named::<Mailer>("smtp");
    assert_eq!(named.target_key(), TypeKey::named::<Mailer>("smtp"));

    let optional = DependencyDescriptor::optional::<Mailer>();
    assert!(optional.is_optional());
    assert!(optional.to_string().ends_with("(optional)"));
}

#[test]
fn test_list_descriptor_targets_element() {
    let descriptor = DependencyDescriptor::list::<Mailer>();

    match descriptor.required() {
        RequiredType::Container {
            kind, container, ..
        } => {
            assert_eq!(kind, &ContainerKind::List);
            assert_eq!(*container, TypeRef::of::<Vec<Mailer>>());
        }
        RequiredType::Concrete(_) => panic!("Expected container"),
    }
    assert_eq!(descriptor.target(), TypeRef::of::<Mailer>());
    assert_eq!(descriptor.required().outer(), TypeRef::of::<Vec<Mailer>>());
}

#[test]
fn test_nested_containers_target_innermost() {
    let descriptor = DependencyDescriptor::wrapped(
        ContainerKind::Lazy,
        TypeRef::of::<std::sync::LazyLock<Vec<Mailer>>>(),
        DependencyDescriptor::list::<Mailer>().required().clone(),
    );

    assert_eq!(descriptor.target(), TypeRef::of::<Mailer>());
}

#[test]
fn test_container_kind_names() {
    assert_eq!(ContainerKind::from_name("Lazy"), ContainerKind::Lazy);
    assert_eq!(ContainerKind::from_name("list"), ContainerKind::List);
    assert_eq!(
        ContainerKind::from_name("provider"),
        ContainerKind::Other("provider".to_string())
    );
    assert_eq!(ContainerKind::Other("provider".into()).name(), "provider");
}
