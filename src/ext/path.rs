use std::path::Path as StdPath;

use crate::error::{Error, Result};
use crate::path::Path;

/// Extension trait for `std::path::Path` to get back into the string-based [`Path`].
pub trait PathExt {
    /// Converts a path to a string slice, returning an error if the path contains invalid Unicode characters.
    ///
    /// This is a convenience method that's equivalent to `path.to_str().ok_or_else(...)` but with
    /// a descriptive error message.
    ///
    /// # Returns
    /// * `Ok(&str)` - A string slice representing the path
    /// * `Err(Error)` - If the path contains invalid Unicode characters
    ///
    /// # Examples
    /// ```
    /// use dirpath::ext::PathExt;
    /// use std::path::Path;
    ///
    /// let path = Path::new("test");
    /// assert_eq!(path.to_str_checked().unwrap(), "test");
    /// ```
    fn to_str_checked(&self) -> Result<&str>;

    /// Same check as [`PathExt::to_str_checked`], producing an owned [`Path`].
    fn to_dir_path(&self) -> Result<Path> {
        self.to_str_checked().map(Path::from)
    }
}

impl PathExt for StdPath {
    fn to_str_checked(&self) -> Result<&str> {
        self.to_str().ok_or_else(|| Error::InvalidUnicodeError {
            path: self.to_string_lossy().to_string(),
        })
    }
}
