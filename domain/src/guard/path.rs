//! Path sanitizer — traversal-free normalization of storage paths
//!
//! Callers hand the server relative paths naming where an artifact should be
//! stored. [`sanitize`] strips everything that could walk out of the storage
//! root or smuggle an absolute path in as a relative one.

use std::borrow::Cow;

/// Normalize a caller-supplied storage path into a traversal-free form.
///
/// Total function: it never fails, always returning a best-effort safe
/// string. The result contains no `.` or `..` segments, no empty segments,
/// and no leading separator; segments are rejoined with `/`.
///
/// The input is percent-decoded once before splitting, so `%2e%2e%2f` cannot
/// hide a traversal. If decoding fails the original string is sanitized
/// instead. A segment like `"...."` is a legal directory name, not a
/// traversal token, and is preserved verbatim.
///
/// Idempotent: `sanitize(sanitize(x)) == sanitize(x)`.
///
/// Control characters and NUL bytes in surviving segments are not stripped;
/// whether they matter is the storage backend's policy, not this layer's.
pub fn sanitize(path: &str) -> String {
    let decoded = match urlencoding::decode(path) {
        Ok(d) => d,
        Err(_) => Cow::Borrowed(path),
    };

    decoded
        .split(['/', '\\'])
        .filter(|seg| !seg.is_empty() && *seg != "." && *seg != "..")
        .collect::<Vec<_>>()
        .join("/")
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_strips_traversal_segments() {
        assert_eq!(sanitize("../../../etc/passwd"), "etc/passwd");
        assert_eq!(sanitize("foo/../bar"), "foo/bar");
        assert_eq!(sanitize(".."), "");
        assert_eq!(sanitize("./a/./b"), "a/b");
    }

    #[test]
    fn test_many_dots_is_a_directory_name_not_traversal() {
        assert_eq!(sanitize("..../secret"), "..../secret");
        assert_eq!(sanitize("a/.../b"), "a/.../b");
    }

    #[test]
    fn test_percent_encoded_traversal_is_decoded_first() {
        assert_eq!(sanitize("%2e%2e%2fetc/passwd"), "etc/passwd");
        assert_eq!(sanitize("%2E%2E/secret"), "secret");
    }

    #[test]
    fn test_leading_separators_collapse() {
        assert_eq!(sanitize("/etc/passwd"), "etc/passwd");
        assert_eq!(sanitize("//a///b"), "a/b");
        assert_eq!(sanitize("\\\\server\\share"), "server/share");
    }

    #[test]
    fn test_backslashes_are_separators() {
        assert_eq!(sanitize("..\\..\\windows\\system32"), "windows/system32");
        assert_eq!(sanitize("a\\b/c"), "a/b/c");
    }

    #[test]
    fn test_plain_relative_path_passes_through() {
        assert_eq!(sanitize("images/2024/cat.png"), "images/2024/cat.png");
        assert_eq!(sanitize("file.txt"), "file.txt");
        assert_eq!(sanitize(""), "");
    }

    #[test]
    fn test_idempotent() {
        let cases = [
            "../../../etc/passwd",
            "foo/../bar",
            "..../secret",
            "%2e%2e%2fetc/passwd",
            "/a//b\\c/./..",
            "normal/path",
            "",
            "%zz-not-an-escape/x",
        ];
        for case in cases {
            let once = sanitize(case);
            assert_eq!(sanitize(&once), once, "not idempotent for {case:?}");
        }
    }

    #[test]
    fn test_malformed_escape_falls_back_to_raw_input() {
        // urlencoding passes malformed sequences through rather than erroring,
        // so the raw text survives minus any traversal structure
        assert_eq!(sanitize("%zz/file"), "%zz/file");
    }
}
