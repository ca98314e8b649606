//! Constants used throughout dirpath

/// Separator placed between the sequence number and the original file name
pub const SEQUENCE_SEPARATOR: char = '_';

/// Base name reported for an empty path
pub const CURRENT_DIR: &str = ".";

/// Label printed for entries without an extension
pub const NO_EXTENSION_LABEL: &str = "(none)";

/// Exit codes
pub mod exit_codes {
    pub const FAILURE: i32 = 1;
}

/// Verbosity levels
pub mod verbosity {
    pub const OFF: u8 = 0;
    pub const INFO: u8 = 1;
    pub const DEBUG: u8 = 2;
    pub const TRACE: u8 = 3;
}
