//! Process exit codes

/// Success
pub const SUCCESS: i32 = 0;

/// General error
pub const ERROR: i32 = 1;

/// A required external tool is not installed
pub const MISSING_TOOL: i32 = 3;
