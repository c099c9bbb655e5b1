//! # Slash-Path Join Rules
//!
//! Paths handed to sandboxes and volumes are always `/`-separated strings,
//! independent of the host OS, so `std::path` is not used here.
//!
//! Two joins exist and must stay separate:
//!
//! - [`join_raw`] concatenates with a single `/` and nothing else. A trailing
//!   separator survives, which tells an archiving backend to emit the
//!   directory's contents rather than the directory itself.
//! - [`join`] drops empty elements and then [`clean`]s the result. Use it for
//!   destinations, where a trailing separator carries no meaning.

/// Concatenate `dir` and `rel` with a single `/`, without normalization.
pub fn join_raw(dir: &str, rel: &str) -> String {
    format!("{dir}/{rel}")
}

/// Join non-empty elements with `/` and clean the result.
///
/// Returns an empty string when every element is empty.
pub fn join<'a, I>(elems: I) -> String
where
    I: IntoIterator<Item = &'a str>,
{
    let parts: Vec<&str> = elems.into_iter().filter(|e| !e.is_empty()).collect();
    if parts.is_empty() {
        return String::new();
    }
    clean(&parts.join("/"))
}

/// Lexically normalize a slash path.
///
/// Collapses repeated separators, removes `.` elements, resolves `..`
/// against the preceding element, drops `..` directly under the root, and
/// strips any trailing separator. The empty path cleans to `.`.
pub fn clean(path: &str) -> String {
    if path.is_empty() {
        return ".".to_string();
    }

    let rooted = path.starts_with('/');
    let mut parts: Vec<&str> = Vec::new();
    for segment in path.split('/') {
        match segment {
            "" | "." => {}
            ".." => {
                if parts.last().is_some_and(|p| *p != "..") {
                    parts.pop();
                } else if !rooted {
                    parts.push("..");
                }
            }
            s => parts.push(s),
        }
    }

    let body = parts.join("/");
    if rooted {
        format!("/{body}")
    } else if body.is_empty() {
        ".".to_string()
    } else {
        body
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn raw_join_keeps_trailing_separator() {
        assert_eq!(join_raw("/scratch", "out/"), "/scratch/out/");
    }

    #[test]
    fn raw_join_keeps_dot_and_duplicates() {
        assert_eq!(join_raw("/scratch", "."), "/scratch/.");
        assert_eq!(join_raw("/scratch/", "a"), "/scratch//a");
    }

    #[test]
    fn join_normalizes() {
        assert_eq!(join(["/scratch", "a/b"]), "/scratch/a/b");
        assert_eq!(join(["/scratch", "out/"]), "/scratch/out");
        assert_eq!(join(["get", "x"]), "get/x");
        assert_eq!(join(["/tmp/build", "get", "."]), "/tmp/build/get");
    }

    #[test]
    fn join_skips_empty_elements() {
        assert_eq!(join(["", "get"]), "get");
        assert_eq!(join(["a", "", "b"]), "a/b");
        assert_eq!(join(["", ""]), "");
    }

    #[test]
    fn clean_table() {
        let cases = [
            ("", "."),
            (".", "."),
            ("/", "/"),
            ("//", "/"),
            ("a/", "a"),
            ("a//b", "a/b"),
            ("./a/./b/", "a/b"),
            ("a/b/..", "a"),
            ("a/../..", ".."),
            ("../a/..", ".."),
            ("../../x", "../../x"),
            ("/..", "/"),
            ("/../a/b/../c", "/a/c"),
            ("abc/def/../../..", ".."),
        ];
        for (input, expected) in cases {
            assert_eq!(clean(input), expected, "clean({input:?})");
        }
    }
}
