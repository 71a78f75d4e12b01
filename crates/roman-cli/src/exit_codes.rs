//! Exit codes for the `roman` binary.
//! Argument errors exit with clap's own code (2).

pub const SUCCESS: i32 = 0;
pub const INVALID_INPUT: i32 = 1; // At least one input failed to convert or validate
pub const INTERNAL_ERROR: i32 = 2; // Output could not be written
