//! Ordered collections of [`Path`] values and the filter/transform pipeline
//! over them.
//!
//! Everything here returns a new [`Entries`] except the `for_each*` family and
//! [`Entries::prepend_sequential_numbers`], which rewrite elements in place.

use globset::Glob;
use log::trace;
use serde::Serialize;
use std::collections::BTreeSet;

use crate::constants::SEQUENCE_SEPARATOR;
use crate::error::Result;
use crate::extension::Extension;
use crate::path::Path;

/// Ordered, possibly empty sequence of paths. Duplicates are allowed.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
#[serde(transparent)]
pub struct Entries(Vec<Path>);

impl Entries {
    pub fn new() -> Self {
        Self(Vec::new())
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    pub fn push(&mut self, path: Path) {
        self.0.push(path);
    }

    pub fn iter(&self) -> std::slice::Iter<'_, Path> {
        self.0.iter()
    }

    pub fn iter_mut(&mut self) -> std::slice::IterMut<'_, Path> {
        self.0.iter_mut()
    }

    /// Keeps the entries for which `predicate` holds, in their original order.
    pub fn filter<F>(&self, mut predicate: F) -> Entries
    where
        F: FnMut(&Path) -> bool,
    {
        self.0.iter().filter(|path| predicate(path)).cloned().collect()
    }

    pub fn only_existing(&self) -> Entries {
        self.filter(Path::exists)
    }

    /// Directories only. Missing paths are dropped.
    pub fn only_dirs(&self) -> Entries {
        self.filter(Path::is_dir)
    }

    /// Non-directories only. Missing paths are dropped.
    pub fn only_files(&self) -> Entries {
        self.filter(Path::is_file)
    }

    /// Entries whose extension is exactly `ext` (case-sensitive).
    pub fn with_extension(&self, ext: impl Into<Extension>) -> Entries {
        let ext = ext.into();
        self.filter(|path| path.extension() == ext)
    }

    /// Entries whose extension exactly matches any of `exts`.
    ///
    /// # Examples
    /// ```
    /// use dirpath::{Entries, Path};
    ///
    /// let entries: Entries = ["a.png", "b.JPG", "c.gif"].into_iter().map(Path::from).collect();
    /// let images = entries.with_extensions([".png", ".JPG"]);
    /// assert_eq!(images.to_strings(), vec!["a.png", "b.JPG"]);
    /// ```
    pub fn with_extensions<I, E>(&self, exts: I) -> Entries
    where
        I: IntoIterator<Item = E>,
        E: Into<Extension>,
    {
        let exts: Vec<Extension> = exts.into_iter().map(Into::into).collect();
        self.filter(|path| exts.contains(&path.extension()))
    }

    /// Entries whose base name matches the glob `pattern`.
    pub fn matching(&self, pattern: &str) -> Result<Entries> {
        let matcher = Glob::new(pattern)?.compile_matcher();
        Ok(self.filter(|path| matcher.is_match(path.base())))
    }

    pub fn to_strings(&self) -> Vec<String> {
        self.0.iter().map(ToString::to_string).collect()
    }

    /// Resolves every entry; the first failure discards the whole result.
    pub fn to_absolute(&self) -> Result<Entries> {
        self.0.iter().map(Path::absolute).collect()
    }

    pub fn to_base_names(&self) -> Entries {
        self.0.iter().map(|path| Path::new(path.base())).collect()
    }

    /// Distinct extensions across all entries, ascending by text.
    /// The empty extension is included when some entry has none.
    pub fn distinct_extensions(&self) -> Vec<Extension> {
        self.0
            .iter()
            .map(Path::extension)
            .collect::<BTreeSet<_>>()
            .into_iter()
            .collect()
    }

    /// Sorts the entries by their text, ascending.
    pub fn sort(&mut self) {
        self.0.sort();
    }

    /// Calls `f` on every entry in order. Changes made through the reference
    /// stay in the collection.
    pub fn for_each<F>(&mut self, mut f: F)
    where
        F: FnMut(&mut Path),
    {
        for path in self.0.iter_mut() {
            f(path);
        }
    }

    /// Like [`Entries::for_each`], but `f` only sees the base name.
    ///
    /// Each entry is rebuilt as its original directory joined with whatever `f`
    /// left in the name, so the directory part cannot be altered.
    pub fn for_each_file_name<F>(&mut self, mut f: F)
    where
        F: FnMut(&mut String),
    {
        self.for_each(|path| {
            let dir = Path::new(path.dir_name());
            let mut name = path.base();
            f(&mut name);
            let renamed = dir.join([name]);
            trace!("Rewriting '{}' as '{}'", path, renamed);
            *path = renamed;
        });
    }

    /// Prefixes every file name with a 1-based counter, zero-padded to the
    /// number of digits in `len()`, in the current iteration order.
    ///
    /// # Examples
    /// ```
    /// use dirpath::{Entries, Path};
    ///
    /// let mut entries: Entries = ["b.txt", "a.txt", "c.txt"].into_iter().map(Path::from).collect();
    /// entries.prepend_sequential_numbers();
    /// assert_eq!(entries.to_strings(), vec!["1_b.txt", "2_a.txt", "3_c.txt"]);
    /// ```
    pub fn prepend_sequential_numbers(&mut self) {
        let digits = self.len().to_string().len();
        let mut counter = 0usize;
        self.for_each_file_name(|name| {
            counter += 1;
            *name = format!("{counter:0digits$}{SEQUENCE_SEPARATOR}{name}");
        });
    }
}

impl From<Vec<Path>> for Entries {
    fn from(paths: Vec<Path>) -> Self {
        Self(paths)
    }
}

impl FromIterator<Path> for Entries {
    fn from_iter<T: IntoIterator<Item = Path>>(iter: T) -> Self {
        Self(iter.into_iter().collect())
    }
}

impl IntoIterator for Entries {
    type Item = Path;
    type IntoIter = std::vec::IntoIter<Path>;

    fn into_iter(self) -> Self::IntoIter {
        self.0.into_iter()
    }
}

impl<'a> IntoIterator for &'a Entries {
    type Item = &'a Path;
    type IntoIter = std::slice::Iter<'a, Path>;

    fn into_iter(self) -> Self::IntoIter {
        self.0.iter()
    }
}

#[cfg(all(test, unix))]
mod tests {
    use super::*;

    fn entries(paths: &[&str]) -> Entries {
        paths.iter().copied().map(Path::from).collect()
    }

    #[test]
    fn filter_preserves_order() {
        let all = entries(&["c", "a", "bb", "d"]);
        let short = all.filter(|p| p.as_str().len() == 1);
        assert_eq!(short.to_strings(), vec!["c", "a", "d"]);
    }

    #[test]
    fn extension_filters_are_case_sensitive() {
        let all = entries(&["x/photo.jpg", "x/note.TXT", "x/readme", "x/shot.JPG"]);
        assert_eq!(all.with_extension(".jpg").to_strings(), vec!["x/photo.jpg"]);
        assert_eq!(
            all.with_extensions([".jpg", ".JPG"]).to_strings(),
            vec!["x/photo.jpg", "x/shot.JPG"]
        );
        assert_eq!(all.with_extension("").to_strings(), vec!["x/readme"]);
        assert!(all.with_extensions(Vec::<Extension>::new()).is_empty());
    }

    #[test]
    fn matching_uses_base_name() {
        let all = entries(&["src/lib.rs", "src/main.rs", "docs/rs.md"]);
        assert_eq!(all.matching("*.rs").unwrap().to_strings(), vec!["src/lib.rs", "src/main.rs"]);
        assert!(all.matching("[").is_err());
    }

    #[test]
    fn distinct_extensions_are_sorted_and_unique() {
        let all = entries(&["a.png", "b.JPG", "c.png"]);
        assert_eq!(all.distinct_extensions(), vec![Extension::from(".JPG"), Extension::from(".png")]);

        let mixed = entries(&["z.b", "y", "x.a", "w.b", "v"]);
        assert_eq!(
            mixed.distinct_extensions(),
            vec![Extension::from(""), Extension::from(".a"), Extension::from(".b")]
        );
        assert!(Entries::new().distinct_extensions().is_empty());
    }

    #[test]
    fn to_base_names_drops_directories() {
        let all = entries(&["/a/b/c.txt", "d/e", "f"]);
        assert_eq!(all.to_base_names().to_strings(), vec!["c.txt", "e", "f"]);
    }

    #[test]
    fn to_absolute_resolves_every_entry() {
        let cwd = std::env::current_dir().unwrap();
        let cwd = cwd.to_str().unwrap();
        let abs = entries(&["a", "/b"]).to_absolute().unwrap();
        assert_eq!(abs.to_strings(), vec![format!("{cwd}/a"), "/b".to_string()]);
    }

    #[test]
    fn for_each_mutates_in_place() {
        let mut all = entries(&["a/x.txt", "b/y.txt"]);
        all.for_each(|p| *p = p.with_extension(".md"));
        assert_eq!(all.to_strings(), vec!["a/x.md", "b/y.md"]);
    }

    #[test]
    fn for_each_file_name_keeps_directory() {
        let mut all = entries(&["dir/one.txt", "/abs/two", "three"]);
        all.for_each_file_name(|name| name.insert_str(0, "new-"));
        assert_eq!(all.to_strings(), vec!["dir/new-one.txt", "/abs/new-two", "new-three"]);
    }

    #[test]
    fn sequential_numbers_follow_iteration_order() {
        let mut all = entries(&["d/b.txt", "d/a.txt", "d/c.txt"]);
        all.prepend_sequential_numbers();
        assert_eq!(all.to_strings(), vec!["d/1_b.txt", "d/2_a.txt", "d/3_c.txt"]);
    }

    #[test]
    fn sequential_numbers_pad_to_count_width() {
        let names: Vec<String> = (0..12).map(|i| format!("f{i}.dat")).collect();
        let mut all: Entries = names.iter().map(|n| Path::new(n.as_str())).collect();
        all.prepend_sequential_numbers();
        let renamed = all.to_strings();
        assert_eq!(renamed[0], "01_f0.dat");
        assert_eq!(renamed[8], "09_f8.dat");
        assert_eq!(renamed[11], "12_f11.dat");
        for (idx, (new, old)) in renamed.iter().zip(&names).enumerate() {
            assert_eq!(*new, format!("{:02}_{old}", idx + 1));
        }
    }

    #[test]
    fn sequential_numbers_on_empty_is_noop() {
        let mut none = Entries::new();
        none.prepend_sequential_numbers();
        assert!(none.is_empty());
    }

    #[test]
    fn sort_orders_by_text() {
        let mut all = entries(&["b", "C", "a"]);
        all.sort();
        assert_eq!(all.to_strings(), vec!["C", "a", "b"]);
    }
}
