//! Stable exit codes for textkit CLI commands.

/// Command succeeded.
pub const OK: i32 = 0;
/// Command failed due to invalid arguments, config, or other errors.
pub const INVALID: i32 = 1;
/// A regular expression (argument or config sample) did not compile.
pub const INVALID_PATTERN: i32 = 2;
