//! Standard exit codes (BSD sysexits.h compatible)

/// Successful termination, also used when an overwrite is declined
pub const OK: i32 = 0;

/// Generic failure (missing template)
pub const FAILURE: i32 = 1;

/// Command line usage error
pub const USAGE: i32 = 64;

/// Input/output error
pub const IOERR: i32 = 74;

/// Configuration error
pub const CONFIG: i32 = 78;
