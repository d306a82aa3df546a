//! Linked Signature Tests
//!
//! Signatures registered through the distributed slice are picked up by
//! `LinkedSignatures::new`.

use bindcheck_application::{
    COMPONENT_SIGNATURES, ComponentSignature, ExemptionRegistry, LinkedSignatures, Module,
    Verifier,
};
use bindcheck_domain::{DependencyDescriptor, TypeKey, TypeRef};
use std::sync::Arc;

struct Transport;
struct Notifier;
struct Scheduler;

#[linkme::distributed_slice(COMPONENT_SIGNATURES)]
static NOTIFIER_SIGNATURE: ComponentSignature =
    ComponentSignature::of::<Notifier>(|| vec![DependencyDescriptor::of::<Transport>()]);

fn linked_verifier() -> Verifier {
    Verifier::builder()
        .registry(Arc::new(ExemptionRegistry::new()))
        .introspector(Arc::new(LinkedSignatures::new()))
        .build()
}

#[test]
fn test_linked_signature_is_registered() {
    let linked = LinkedSignatures::new();

    assert!(linked.contains(&TypeRef::of::<Notifier>()));
    assert!(!linked.contains(&TypeRef::of::<Scheduler>()));
}

#[test]
fn test_linked_signature_drives_verification() {
    // Captured descriptors are empty; the linked signature requires Transport
    let module = Module::new("linked").single::<Notifier>([]);

    let error = linked_verifier()
        .verify(&module, &[], &[])
        .expect_err("Transport is unbound");
    let report = error.report().expect("missing bindings report");

    assert_eq!(report.missing()[0].component, TypeKey::of::<Notifier>());
    assert_eq!(report.missing()[0].dependency, TypeKey::of::<Transport>());

    let complete = module.single::<Transport>([]);
    assert!(linked_verifier().verify(&complete, &[], &[]).is_ok());
}

#[test]
fn test_unregistered_component_uses_captured_descriptors() {
    let module =
        Module::new("captured").single::<Scheduler>([DependencyDescriptor::of::<Transport>()]);

    assert!(linked_verifier().verify(&module, &[], &[]).is_err());
    assert!(linked_verifier().verify(&module, &[TypeRef::of::<Transport>()], &[]).is_ok());
}
