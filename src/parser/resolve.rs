//! Per-field resolution of `warning` elements.
//!
//! Each step either accepts a value or rejects the whole record. A rejected
//! record is skipped; it never fails the extraction.

use super::document::Element;
use crate::diagnostics::{Diagnostic, DiagnosticSink};
use crate::paths;

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Resolution<T> {
    Accepted(T),
    Rejected,
}

impl<T> Resolution<T> {
    pub fn accepted(self) -> Option<T> {
        match self {
            Resolution::Accepted(value) => Some(value),
            Resolution::Rejected => None,
        }
    }
}

/// Resolve the repository-relative file of a warning
///
/// A missing or blank `file` attribute is accepted as an unknown file (empty
/// path). Relative paths are combined with the directory of the parent
/// element's `file`; paths still relative after that are taken relative to
/// `repository_root`. Files outside `repository_root` are rejected and
/// reported to `diagnostics`.
pub fn resolve_file(
    warning: Element<'_>,
    repository_root: &str,
    diagnostics: &dyn DiagnosticSink,
) -> Resolution<String> {
    let raw = match warning.attribute("file") {
        Some(raw) if !raw.trim().is_empty() => raw,
        _ => return Resolution::Accepted(String::new()),
    };

    let mut file = if paths::is_absolute(raw) {
        raw.to_string()
    } else {
        match warning.parent().and_then(|p| p.attribute("file")) {
            Some(parent_file) => paths::combine_with_parent_directory(parent_file, raw),
            None => raw.to_string(),
        }
    };
    if !paths::is_absolute(&file) {
        file = paths::join(repository_root, &file);
    }

    match paths::make_relative(&file, repository_root) {
        Some(relative) => Resolution::Accepted(relative),
        None => {
            diagnostics.emit(&Diagnostic::FileOutsideRepository {
                file: &file,
                repository_root,
            });
            Resolution::Rejected
        }
    }
}

/// Resolve the line of a warning
///
/// A missing or blank `line` attribute rejects the record. Values that are
/// not a positive integer are accepted as an unknown line.
pub fn resolve_line(warning: Element<'_>) -> Resolution<Option<u32>> {
    let raw = match warning.attribute("line") {
        Some(raw) if !raw.trim().is_empty() => raw.trim(),
        _ => return Resolution::Rejected,
    };

    let line = raw
        .parse::<i32>()
        .ok()
        .filter(|line| *line > 0)
        .map(|line| line as u32);

    Resolution::Accepted(line)
}

/// Resolve the rule identifier; a missing or blank `code` rejects the record
pub fn resolve_rule(warning: Element<'_>) -> Resolution<String> {
    match warning.attribute("code") {
        Some(code) if !code.trim().is_empty() => Resolution::Accepted(code.to_string()),
        _ => Resolution::Rejected,
    }
}
