/// Name of the compiler binary looked up in `PATH` by default.
pub const BLOGC_BIN: &str = "blogc";

/// Environment variable naming an alternate compiler binary.
pub const BLOGC_ENV: &str = "BLOGC";

/// Oldest compiler release whose flags and exit codes we rely on.
pub const BLOGC_REQUIRED_VERSION: &str = "0.16.0";

/// Exit status blogc uses when a printed variable is not defined (`EX_CONFIG`).
pub const EXIT_VARIABLE_NOT_FOUND: i32 = 78;

/// Prefix for temporary files, so they are recognizable in diagnostics.
pub const TEMP_FILE_PREFIX: &str = "blogc_";

/// Program name used in diagnostics when `argv[0]` is unavailable.
pub const APP_NAME: &str = "blogc-run";
