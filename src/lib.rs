/// Handles argument parsing and the command-line workflow.
pub mod cli;

/// Shared constants.
pub mod constants;

/// Ordered path collections and the filter/transform pipeline.
pub mod entries;

/// Defines custom error types.
pub mod error;

/// Extension traits for standard library types.
pub mod ext;

/// Dot-prefixed file name suffixes.
pub mod extension;

/// String-based path value and its filesystem wrappers.
pub mod path;

pub use entries::Entries;
pub use error::{Error, Result};
pub use extension::Extension;
pub use path::{entries as list_entries, Path};
