use serde::Serialize;
use std::fmt::Display;

/// Dot-prefixed suffix of a file name, e.g. `.txt`.
///
/// Purely textual: equality is case-sensitive and ordering follows the text,
/// so `.JPG` sorts before `.png`. An empty extension means "none".
#[derive(Debug, Clone, Default, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize)]
#[serde(transparent)]
pub struct Extension(String);

impl Extension {
    pub fn new(ext: impl Into<String>) -> Self {
        Self(ext.into())
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    pub fn lower(&self) -> Self {
        Self(self.0.to_lowercase())
    }

    pub fn upper(&self) -> Self {
        Self(self.0.to_uppercase())
    }
}

impl Display for Extension {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl AsRef<str> for Extension {
    fn as_ref(&self) -> &str {
        &self.0
    }
}

impl From<&str> for Extension {
    fn from(ext: &str) -> Self {
        Self::new(ext)
    }
}

impl From<String> for Extension {
    fn from(ext: String) -> Self {
        Self(ext)
    }
}

impl PartialEq<str> for Extension {
    fn eq(&self, other: &str) -> bool {
        self.0 == other
    }
}

impl PartialEq<&str> for Extension {
    fn eq(&self, other: &&str) -> bool {
        self.0 == *other
    }
}
