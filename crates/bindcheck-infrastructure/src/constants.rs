//! Infrastructure layer constants

// ============================================================================
// CONFIGURATION CONSTANTS
// ============================================================================

/// Default configuration file name
pub const DEFAULT_CONFIG_FILENAME: &str = "bindcheck.toml";

/// Default configuration directory name
pub const DEFAULT_CONFIG_DIR: &str = "bindcheck";

/// Environment variable prefix for configuration
pub const CONFIG_ENV_PREFIX: &str = "BINDCHECK";

/// Separator between nested keys in environment variable names
pub const CONFIG_ENV_SEPARATOR: &str = "__";

// ============================================================================
// LOGGING CONSTANTS
// ============================================================================

/// Default log level
pub const DEFAULT_LOG_LEVEL: &str = "info";

/// Environment variable overriding the log filter
pub const LOG_FILTER_ENV: &str = "BINDCHECK_LOG";

/// Default log file name stem when file output has none
pub const DEFAULT_LOG_FILE_STEM: &str = "bindcheck";

// ============================================================================
// VERIFICATION CONSTANTS
// ============================================================================

/// Container kinds unwrapped by default
pub const DEFAULT_CONTAINERS: [&str; 2] = ["lazy", "list"];
