//! Lexical path handling on plain strings.
//!
//! Nothing here touches the filesystem. Separators are recognised with
//! [`std::path::is_separator`] and emitted as [`MAIN_SEPARATOR`].

use std::path::{is_separator, MAIN_SEPARATOR, MAIN_SEPARATOR_STR};

use crate::constants::CURRENT_DIR;

/// Normalizes a path string.
///
/// - Collapses repeated separators
/// - Drops `.` segments
/// - Resolves `..` against the preceding segment; never climbs above the root
/// - Returns `.` when nothing is left of a relative path
pub(crate) fn clean(path: &str) -> String {
    if path.is_empty() {
        return CURRENT_DIR.to_string();
    }

    let rooted = path.starts_with(is_separator);
    let mut segments: Vec<&str> = Vec::new();

    for segment in path.split(is_separator) {
        match segment {
            "" | "." => continue,
            ".." => match segments.last() {
                Some(&last) if last != ".." => {
                    segments.pop();
                }
                _ if rooted => {}
                _ => segments.push(".."),
            },
            other => segments.push(other),
        }
    }

    let joined = segments.join(MAIN_SEPARATOR_STR);
    if rooted {
        format!("{MAIN_SEPARATOR}{joined}")
    } else if joined.is_empty() {
        CURRENT_DIR.to_string()
    } else {
        joined
    }
}

/// Joins segments with the host separator and cleans the result.
/// Empty segments are skipped; if all are empty the result is empty.
pub(crate) fn join<S: AsRef<str>>(segments: &[S]) -> String {
    let non_empty: Vec<&str> =
        segments.iter().map(AsRef::as_ref).filter(|s| !s.is_empty()).collect();
    if non_empty.is_empty() {
        return String::new();
    }
    clean(&non_empty.join(MAIN_SEPARATOR_STR))
}

/// Last segment of the path, ignoring trailing separators.
pub(crate) fn base(path: &str) -> &str {
    if path.is_empty() {
        return CURRENT_DIR;
    }
    let trimmed = path.trim_end_matches(is_separator);
    if trimmed.is_empty() {
        return MAIN_SEPARATOR_STR;
    }
    match trimmed.rfind(is_separator) {
        Some(idx) => &trimmed[idx + 1..],
        None => trimmed,
    }
}

/// Everything before the last separator, cleaned.
pub(crate) fn dir(path: &str) -> String {
    let head = match path.rfind(is_separator) {
        Some(idx) => &path[..=idx],
        None => "",
    };
    clean(head)
}

/// Suffix starting at the last `.` after the final separator, dot included.
pub(crate) fn ext(path: &str) -> &str {
    for (idx, ch) in path.char_indices().rev() {
        if is_separator(ch) {
            break;
        }
        if ch == '.' {
            return &path[idx..];
        }
    }
    ""
}

#[cfg(all(test, unix))]
mod tests {
    use super::*;

    #[test]
    fn clean_matches_expected_normal_forms() {
        let cases = [
            ("", "."),
            (".", "."),
            ("abc", "abc"),
            ("abc/", "abc"),
            ("a//b", "a/b"),
            ("a/./b", "a/b"),
            ("a/b/..", "a"),
            ("a/../..", ".."),
            ("../../a", "../../a"),
            ("a/b/../../c", "c"),
            ("/", "/"),
            ("//", "/"),
            ("/..", "/"),
            ("/../a", "/a"),
            ("/a/b/", "/a/b"),
        ];
        for (input, expected) in cases {
            assert_eq!(clean(input), expected, "clean({input:?})");
        }
    }

    #[test]
    fn join_skips_empty_segments() {
        assert_eq!(join(&["a", "b", "c"]), "a/b/c");
        assert_eq!(join(&["a", "", "c"]), "a/c");
        assert_eq!(join(&["", "c"]), "c");
        assert_eq!(join(&[".", "c"]), "c");
        assert_eq!(join(&["/", "x"]), "/x");
        assert_eq!(join(&["a/b", "../c"]), "a/c");
        assert_eq!(join::<&str>(&[]), "");
        assert_eq!(join(&["", ""]), "");
    }

    #[test]
    fn base_and_dir() {
        let cases = [
            ("", ".", "."),
            ("a", "a", "."),
            ("a/b.txt", "b.txt", "a"),
            ("/a/b", "b", "/a"),
            ("/a", "a", "/"),
            ("a/b/", "b", "a/b"),
            ("/", "/", "/"),
            ("///", "/", "/"),
            ("./x", "x", "."),
        ];
        for (input, expected_base, expected_dir) in cases {
            assert_eq!(base(input), expected_base, "base({input:?})");
            assert_eq!(dir(input), expected_dir, "dir({input:?})");
        }
    }

    #[test]
    fn ext_stops_at_separator() {
        assert_eq!(ext("photo.jpg"), ".jpg");
        assert_eq!(ext("archive.tar.gz"), ".gz");
        assert_eq!(ext("readme"), "");
        assert_eq!(ext("dir.d/readme"), "");
        assert_eq!(ext("dir.d/"), "");
        assert_eq!(ext(".gitignore"), ".gitignore");
        assert_eq!(ext("name."), ".");
    }

    #[test]
    fn dir_join_base_round_trips() {
        for input in ["a/b/c.txt", "/x/y", "rel", "./a/../b.md", "/top", "a//b"] {
            assert_eq!(join(&[dir(input), base(input).to_string()]), clean(input), "{input:?}");
        }
    }
}
