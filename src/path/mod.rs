//! String-based path value.
//!
//! A [`Path`] is any string, absolute or relative, and need not exist.
//! Accessors derive base name, directory, extension and stem from the text on
//! every call; builders return a new value which the caller assigns back.
//! Filesystem wrappers live in [`fs`].

use serde::Serialize;
use std::fmt::Display;

use crate::extension::Extension;

pub mod fs;
mod lexical;

pub use fs::entries;

#[derive(Debug, Clone, Default, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize)]
#[serde(transparent)]
pub struct Path(String);

impl Path {
    pub fn new(path: impl Into<String>) -> Self {
        Self(path.into())
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    /// Joins `segments` onto this path using the host separator.
    ///
    /// Empty segments are skipped and the result is lexically cleaned, so
    /// `Path::new("a").join(["./b", "../c"])` is `a/c`.
    ///
    /// # Examples
    /// ```
    /// use dirpath::Path;
    ///
    /// let path = Path::new("photos").join(["2024", "beach.jpg"]);
    /// assert_eq!(path.as_str(), "photos/2024/beach.jpg");
    /// ```
    pub fn join<I, S>(&self, segments: I) -> Path
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        let mut all = vec![self.0.clone()];
        all.extend(segments.into_iter().map(|s| s.as_ref().to_string()));
        Path(lexical::join(&all))
    }

    /// Final path segment including its extension. The empty path yields `.`.
    pub fn base(&self) -> String {
        lexical::base(&self.0).to_string()
    }

    /// Every segment before [`Path::base`], cleaned. `.` when there is none.
    pub fn dir_name(&self) -> String {
        lexical::dir(&self.0)
    }

    /// Suffix from the last dot of the final segment, dot included.
    ///
    /// A dotfile such as `.gitignore` is all extension and has an empty stem.
    pub fn extension(&self) -> Extension {
        Extension::new(lexical::ext(&self.0))
    }

    /// [`Path::base`] without its extension.
    pub fn file_stem(&self) -> String {
        let base = self.base();
        let ext = self.extension();
        match base.strip_suffix(ext.as_str()) {
            Some(stem) if !ext.is_empty() => stem.to_string(),
            _ => base,
        }
    }

    /// Replaces the stem, keeping directory and extension.
    pub fn with_file_name(&self, name: &str) -> Path {
        self.in_same_dir(format!("{name}{}", self.extension()))
    }

    /// Prepends `text` to the base name.
    pub fn with_prefix(&self, text: &str) -> Path {
        self.in_same_dir(format!("{text}{}", self.base()))
    }

    /// Inserts `text` between the stem and the extension.
    pub fn with_suffix(&self, text: &str) -> Path {
        self.in_same_dir(format!("{}{text}{}", self.file_stem(), self.extension()))
    }

    /// Moves the base name under `dir`.
    pub fn with_directory(&self, dir: impl AsRef<str>) -> Path {
        Path::new(dir.as_ref()).join([self.base()])
    }

    /// Replaces the extension.
    ///
    /// An empty `ext` strips the current extension; a path without one gets
    /// `ext` appended. The rest of the string, directory included, is left
    /// untouched.
    ///
    /// # Examples
    /// ```
    /// use dirpath::Path;
    ///
    /// let path = Path::new("docs/readme.txt");
    /// assert_eq!(path.with_extension(".md").as_str(), "docs/readme.md");
    /// assert_eq!(path.with_extension("").as_str(), "docs/readme");
    /// ```
    pub fn with_extension(&self, ext: impl Into<Extension>) -> Path {
        let ext = ext.into();
        let current = lexical::ext(&self.0);
        let kept = &self.0[..self.0.len() - current.len()];
        Path(format!("{kept}{ext}"))
    }

    /// Appends `ext` to the raw string without inspecting the current one.
    pub fn with_added_extension(&self, ext: impl Into<Extension>) -> Path {
        Path(format!("{}{}", self.0, ext.into()))
    }

    pub fn with_lowercase_extension(&self) -> Path {
        self.with_extension(self.extension().lower())
    }

    pub fn with_uppercase_extension(&self) -> Path {
        self.with_extension(self.extension().upper())
    }

    fn in_same_dir(&self, base: String) -> Path {
        Path::new(self.dir_name()).join([base])
    }
}

impl Display for Path {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl AsRef<str> for Path {
    fn as_ref(&self) -> &str {
        &self.0
    }
}

impl AsRef<std::path::Path> for Path {
    fn as_ref(&self) -> &std::path::Path {
        std::path::Path::new(&self.0)
    }
}

impl From<&str> for Path {
    fn from(path: &str) -> Self {
        Self::new(path)
    }
}

impl From<String> for Path {
    fn from(path: String) -> Self {
        Self(path)
    }
}
