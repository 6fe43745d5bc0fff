//! Stable exit codes for the fixture binaries.

/// Program ran to completion.
pub const OK: i32 = 0;
/// Invalid arguments/config, or stdout could not be written.
pub const INVALID: i32 = 1;
