//! Batch Verification Tests

use crate::test_utils::isolated_verifier;
use bindcheck_application::Module;
use bindcheck_domain::{Configuration, DependencyDescriptor, Error};

struct Database;
struct Cache;
struct UserService;

fn passing(name: &str) -> Module {
    Module::new(name).single::<Database>([])
}

fn failing(name: &str) -> Module {
    Module::new(name).single::<UserService>([DependencyDescriptor::of::<Cache>()])
}

#[test]
fn test_each_configuration_is_verified_independently() {
    let first = passing("first");
    let second = failing("second");
    let third = passing("third");
    let configurations: [&dyn Configuration; 3] = [&first, &second, &third];

    let batch = isolated_verifier().verify_all(&configurations, &[], &[]);

    assert!(!batch.is_success());
    assert_eq!(batch.outcomes().len(), 3);
    assert_eq!(batch.passed().collect::<Vec<_>>(), ["first", "third"]);
    let failed: Vec<&str> = batch
        .failures()
        .map(|outcome| outcome.configuration.as_str())
        .collect();
    assert_eq!(failed, ["second"]);
}

#[test]
fn test_configurations_do_not_share_bindings() {
    let provider = passing("provider");
    let consumer = Module::new("consumer")
        .single::<UserService>([DependencyDescriptor::of::<Database>()]);
    let configurations: [&dyn Configuration; 2] = [&provider, &consumer];

    let batch = isolated_verifier().verify_all(&configurations, &[], &[]);

    assert!(batch.outcomes()[0].result.is_ok());
    assert!(batch.outcomes()[1].result.is_err());
}

#[test]
fn test_into_result_aggregates_failures() {
    let first = failing("first");
    let second = passing("second");
    let third = failing("third");
    let configurations: [&dyn Configuration; 3] = [&first, &second, &third];

    let error = isolated_verifier()
        .verify_all(&configurations, &[], &[])
        .into_result()
        .expect_err("batch should fail");

    match &error {
        Error::Batch { total, failures } => {
            assert_eq!(*total, 3);
            assert_eq!(failures.len(), 2);
            assert_eq!(failures[0].report().map(|r| r.configuration()), Some("first"));
            assert_eq!(failures[1].report().map(|r| r.configuration()), Some("third"));
        }
        other => panic!("Expected batch error, got: {other}"),
    }
    assert!(error.to_string().starts_with("2 of 3 configuration(s) failed"));
}

#[test]
fn test_all_passing_batch() {
    let first = passing("first");
    let second = passing("second");
    let configurations: [&dyn Configuration; 2] = [&first, &second];

    let batch = isolated_verifier().verify_all(&configurations, &[], &[]);

    assert!(batch.is_success());
    assert!(batch.into_result().is_ok());
}

#[test]
fn test_empty_batch_succeeds() {
    assert!(isolated_verifier().verify_all(&[], &[], &[]).into_result().is_ok());
}
