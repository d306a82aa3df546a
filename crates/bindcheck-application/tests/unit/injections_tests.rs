//! Parameter Injection Allowance Tests

use bindcheck_application::InjectionAllowances;
use bindcheck_domain::{Declaration, ParameterInjection, TypeKey, TypeRef};

struct Session;
struct RequestId;
struct Controller;
struct Worker;
trait Handler {}

#[test]
fn test_no_allowances() {
    let allowances = InjectionAllowances::new(&[]);

    assert!(allowances.is_empty());
    assert!(!allowances.allows(&TypeRef::of::<Session>(), &Declaration::single::<Controller>()));
}

#[test]
fn test_global_allowance_applies_to_every_declaration() {
    let allowances =
        InjectionAllowances::new(&[ParameterInjection::global([TypeRef::of::<RequestId>()])]);

    assert!(allowances.allows(&TypeRef::of::<RequestId>(), &Declaration::single::<Controller>()));
    assert!(allowances.allows(&TypeRef::of::<RequestId>(), &Declaration::factory::<Worker>()));
    assert!(!allowances.allows(&TypeRef::of::<Session>(), &Declaration::single::<Worker>()));
}

#[test]
fn test_scoped_allowance_applies_to_owner_only() {
    let allowances = InjectionAllowances::new(&[ParameterInjection::definition::<Controller>([
        TypeRef::of::<Session>(),
    ])]);

    assert!(allowances.allows(&TypeRef::of::<Session>(), &Declaration::single::<Controller>()));
    assert!(!allowances.allows(&TypeRef::of::<Session>(), &Declaration::single::<Worker>()));
}

#[test]
fn test_scoped_allowance_matches_secondary_types() {
    let allowances = InjectionAllowances::new(&[ParameterInjection::definition::<dyn Handler>([
        TypeRef::of::<Session>(),
    ])]);
    let owner = Declaration::factory::<Controller>().bind(TypeKey::of::<dyn Handler>());

    assert!(allowances.allows(&TypeRef::of::<Session>(), &owner));
}

#[test]
fn test_scoped_allowance_respects_owner_qualifier() {
    let allowances = InjectionAllowances::new(&[ParameterInjection::for_declarations(
        [TypeKey::named::<Controller>("admin")],
        [TypeRef::of::<Session>()],
    )]);

    let admin = Declaration::single::<Controller>().with_qualifier("admin");
    let public = Declaration::single::<Controller>();

    assert!(allowances.allows(&TypeRef::of::<Session>(), &admin));
    assert!(!allowances.allows(&TypeRef::of::<Session>(), &public));
}
