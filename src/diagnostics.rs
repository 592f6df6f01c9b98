use std::fmt;

/// Observable events raised while extracting issues
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Diagnostic<'a> {
    /// A warning pointed at a file outside the repository and was dropped
    FileOutsideRepository {
        file: &'a str,
        repository_root: &'a str,
    },
}

impl fmt::Display for Diagnostic<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Diagnostic::FileOutsideRepository {
                file,
                repository_root,
            } => write!(
                f,
                "Ignored issue for file '{}' since it is outside the repository folder at {}.",
                file, repository_root
            ),
        }
    }
}

/// Receiver for warning-level diagnostics
pub trait DiagnosticSink {
    fn emit(&self, diagnostic: &Diagnostic<'_>);
}

/// Forwards diagnostics to `tracing` at warn level
#[derive(Debug, Default, Clone, Copy)]
pub struct TracingDiagnostics;

impl DiagnosticSink for TracingDiagnostics {
    fn emit(&self, diagnostic: &Diagnostic<'_>) {
        match diagnostic {
            Diagnostic::FileOutsideRepository {
                file,
                repository_root,
            } => tracing::warn!(file, repository_root, "{}", diagnostic),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_outside_repository_message_names_file_and_root() {
        let diagnostic = Diagnostic::FileOutsideRepository {
            file: "/other/a.cs",
            repository_root: "/repo",
        };

        assert_eq!(
            diagnostic.to_string(),
            "Ignored issue for file '/other/a.cs' since it is outside the repository folder at /repo."
        );
    }
}
