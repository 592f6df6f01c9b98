//! Path utilities used to validate and relativize file paths reported in build logs.
//!
//! Build logs are frequently produced on a different platform than the one
//! reading them, so everything here works on strings and accepts both `/` and
//! `\` as separators. Paths are compared after lexical normalization (`.`
//! removed, `..` resolved) without touching the file system.

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Prefix {
    /// Relative path
    Relative,
    /// `/foo` or `\foo`
    Root,
    /// `C:\foo`, stored upper-cased
    Drive(char),
    /// `\\server\share\foo`
    Unc,
}

#[derive(Debug, Clone, PartialEq, Eq)]
struct NormalizedPath {
    prefix: Prefix,
    segments: Vec<String>,
}

fn is_separator(c: char) -> bool {
    c == '/' || c == '\\'
}

fn split_prefix(path: &str) -> (Prefix, &str) {
    let mut chars = path.chars();
    match (chars.next(), chars.next(), chars.next()) {
        (Some(a), Some(b), _) if is_separator(a) && is_separator(b) => (Prefix::Unc, &path[2..]),
        (Some(drive), Some(':'), Some(sep)) if drive.is_ascii_alphabetic() && is_separator(sep) => {
            (Prefix::Drive(drive.to_ascii_uppercase()), &path[3..])
        }
        (Some(a), _, _) if is_separator(a) => (Prefix::Root, &path[1..]),
        _ => (Prefix::Relative, path),
    }
}

fn normalize(path: &str) -> NormalizedPath {
    let (prefix, rest) = split_prefix(path.trim());
    let mut segments: Vec<String> = Vec::new();

    for segment in rest.split(is_separator) {
        match segment {
            "" | "." => {}
            ".." => {
                if matches!(segments.last(), Some(last) if last != "..") {
                    segments.pop();
                } else if prefix == Prefix::Relative {
                    segments.push(segment.to_string());
                }
                // `..` above the root of an absolute path stays at the root
            }
            _ => segments.push(segment.to_string()),
        }
    }

    NormalizedPath { prefix, segments }
}

/// Check if a path is fully qualified (rooted, drive-qualified or UNC)
pub fn is_absolute(path: &str) -> bool {
    split_prefix(path.trim()).0 != Prefix::Relative
}

/// Check if `path` lies inside `root`, at a path segment boundary
///
/// A path equal to the root counts as contained. Both paths must be absolute.
/// Segments are compared ignoring case.
pub fn is_sub_path_of(path: &str, root: &str) -> bool {
    relative_segments(path, root).is_some()
}

/// Make `path` relative to `root`, using `/` as separator
///
/// Returns `None` when `path` is not contained in `root`.
pub fn make_relative(path: &str, root: &str) -> Option<String> {
    relative_segments(path, root).map(|segments| segments.join("/"))
}

fn relative_segments(path: &str, root: &str) -> Option<Vec<String>> {
    let path = normalize(path);
    let root = normalize(root);

    if path.prefix == Prefix::Relative || path.prefix != root.prefix {
        return None;
    }
    if root.segments.len() > path.segments.len() {
        return None;
    }

    // Segments compare case-insensitively, whatever platform wrote the log
    let contained = root
        .segments
        .iter()
        .zip(&path.segments)
        .all(|(r, p)| r == p || r.to_lowercase() == p.to_lowercase());

    contained.then(|| path.segments[root.segments.len()..].to_vec())
}

/// Directory component of a file path, `None` if it has none
pub fn parent_directory(file: &str) -> Option<&str> {
    let file = file.trim();
    let idx = file.rfind(is_separator)?;
    if idx == 0 {
        // `/Program.cs` lives in the root directory
        return Some(&file[..1]);
    }
    Some(&file[..idx])
}

/// Combine the directory of `parent_file` with `file`
///
/// Used when a log entry reports a file relative to the project it was
/// produced by. `file` is returned unchanged when the parent has no
/// directory component.
pub fn combine_with_parent_directory(parent_file: &str, file: &str) -> String {
    match parent_directory(parent_file) {
        Some(dir) => join(dir, file),
        None => file.to_string(),
    }
}

/// Append `path` to `base`, reusing the separator style of `base`
pub fn join(base: &str, path: &str) -> String {
    let base = base.trim();
    if base.ends_with(is_separator) {
        return format!("{}{}", base, path);
    }
    let separator = base.chars().rev().find(|c| is_separator(*c)).unwrap_or('/');
    format!("{}{}{}", base, separator, path)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_is_absolute() {
        assert!(is_absolute("/repo/src/a.cs"));
        assert!(is_absolute(r"C:\repo\a.cs"));
        assert!(is_absolute("c:/repo/a.cs"));
        assert!(is_absolute(r"\\server\share\a.cs"));
        assert!(!is_absolute("src/a.cs"));
        assert!(!is_absolute("C:a.cs"));
        assert!(!is_absolute(""));
    }

    #[test]
    fn test_sub_path_segment_boundary() {
        assert!(is_sub_path_of("/repo/src/a.cs", "/repo"));
        assert!(is_sub_path_of("/repo/src/a.cs", "/repo/"));
        assert!(is_sub_path_of("/repo", "/repo"));
        assert!(!is_sub_path_of("/repository/a.cs", "/repo"));
        assert!(!is_sub_path_of("/other/a.cs", "/repo"));
        assert!(!is_sub_path_of("src/a.cs", "/repo"));
    }

    #[test]
    fn test_sub_path_resolves_dot_segments() {
        assert!(is_sub_path_of("/repo/src/../lib/./b.cs", "/repo"));
        assert!(!is_sub_path_of("/repo/../etc/passwd", "/repo"));
    }

    #[test]
    fn test_windows_paths_ignore_case_and_separator_style() {
        assert!(is_sub_path_of(r"c:\Repo\src\a.cs", "C:/repo"));
        assert!(!is_sub_path_of(r"D:\repo\a.cs", r"C:\repo"));
    }

    #[test]
    fn test_rooted_paths_ignore_case() {
        assert!(is_sub_path_of("/Repo/Src/a.cs", "/repo"));
        assert_eq!(make_relative("/REPO/Src/A.cs", "/repo").as_deref(), Some("Src/A.cs"));
        assert!(!is_sub_path_of("/Repository/a.cs", "/repo"));
    }

    #[test]
    fn test_make_relative() {
        assert_eq!(make_relative("/repo/src/a.cs", "/repo").as_deref(), Some("src/a.cs"));
        assert_eq!(
            make_relative(r"C:\repo\src\Foo\a.cs", r"C:\repo\").as_deref(),
            Some("src/Foo/a.cs")
        );
        assert_eq!(make_relative("/repo", "/repo").as_deref(), Some(""));
        assert_eq!(make_relative("/elsewhere/a.cs", "/repo"), None);
    }

    #[test]
    fn test_combine_with_parent_directory() {
        assert_eq!(
            combine_with_parent_directory("/repo/src/Program.csproj", "a.cs"),
            "/repo/src/a.cs"
        );
        assert_eq!(
            combine_with_parent_directory(r"C:\repo\src\Program.csproj", r"Foo\a.cs"),
            r"C:\repo\src\Foo\a.cs"
        );
        assert_eq!(combine_with_parent_directory("/Program.csproj", "a.cs"), "/a.cs");
        assert_eq!(combine_with_parent_directory("Program.csproj", "a.cs"), "a.cs");
        assert_eq!(combine_with_parent_directory("", "a.cs"), "a.cs");
    }

    #[test]
    fn test_join() {
        assert_eq!(join("/repo", "src/a.cs"), "/repo/src/a.cs");
        assert_eq!(join("/repo/", "src/a.cs"), "/repo/src/a.cs");
        assert_eq!(join(r"C:\repo", r"src\a.cs"), r"C:\repo\src\a.cs");
        assert_eq!(join("C:", "a.cs"), "C:/a.cs");
    }
}
