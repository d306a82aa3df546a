//! Declaration Tests

use bindcheck_domain::{Declaration, DependencyDescriptor, Scope, TypeKey};

struct PgRepository;
trait Repository {}
trait Store {}

#[test]
fn test_declaration_captures_dependencies_in_order() {
    let declaration = Declaration::single::<PgRepository>()
        .with_dependency(DependencyDescriptor::of::<String>())
        .with_dependency(DependencyDescriptor::of::<i32>());

    assert_eq!(declaration.scope(), &Scope::Singleton);
    assert_eq!(declaration.dependencies().len(), 2);
    assert_eq!(
        declaration.dependencies()[0],
        DependencyDescriptor::of::<String>()
    );
}

#[test]
fn test_bind_adds_secondary_types_once() {
    let declaration = Declaration::factory::<PgRepository>()
        .bind(TypeKey::of::<dyn Repository>())
        .bind(TypeKey::of::<dyn Repository>())
        .bind(TypeKey::of::<PgRepository>())
        .bind(TypeKey::of::<dyn Store>());

    assert_eq!(declaration.secondary_types().len(), 2);
    assert!(declaration.binds(&TypeKey::of::<dyn Repository>()));
    assert!(declaration.binds(&TypeKey::of::<PgRepository>()));
    assert_eq!(declaration.bound_keys().count(), 3);
}

#[test]
fn test_with_qualifier_changes_produced_key() {
    let declaration = Declaration::single::<PgRepository>().with_qualifier("replica");

    assert_eq!(declaration.key(), &TypeKey::named::<PgRepository>("replica"));
    assert!(!declaration.binds(&TypeKey::of::<PgRepository>()));
}

#[test]
fn test_declaration_display_shows_scope() {
    let declaration = Declaration::new(
        TypeKey::of::<PgRepository>(),
        Scope::Scoped("request".to_string()),
    );

    assert!(declaration.to_string().starts_with("[scoped(request)]"));
}
