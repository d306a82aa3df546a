//! Logging initialization
//!
//! The only test in this binary that installs a global subscriber.

use bindcheck_infrastructure::logging::{LoggingConfig, init_logging};
use tempfile::TempDir;

#[test]
fn test_init_logging_installs_once() {
    let dir = TempDir::new().expect("temp dir");
    let config = LoggingConfig {
        level: "debug".to_string(),
        json_format: true,
        file_output: Some(dir.path().join("verify.log")),
    };

    init_logging(&config).expect("first install succeeds");
    assert!(init_logging(&LoggingConfig::default()).is_err());
}
